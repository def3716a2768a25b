//! Static hardware SKU catalog
//!
//! Named hardware templates the caller can use to pre-populate a tier's
//! hardware fields. The catalog is read-only; a `TierConfig` references an
//! entry by id and copies its values.

use crate::models::{DeploymentType, StorageType};
use serde::Serialize;

/// A named hardware template
#[derive(Debug, Clone, Serialize)]
pub struct HardwareSku {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    pub storage_type: StorageType,
    pub storage_size_gb: f64,
    pub cpu_cores: u32,
    pub memory_gb: f64,
    pub iops: u32,
    pub throughput_mbps: u32,
    pub cost_per_month: f64,
    pub deployment_types: &'static [DeploymentType],
}

const ALL_NODE_DEPLOYMENTS: &[DeploymentType] = &[
    DeploymentType::OnPrem,
    DeploymentType::Aws,
    DeploymentType::Gcp,
    DeploymentType::Azure,
    DeploymentType::ElasticCloud,
];

const SELF_MANAGED_DEPLOYMENTS: &[DeploymentType] = &[
    DeploymentType::OnPrem,
    DeploymentType::Aws,
    DeploymentType::Gcp,
    DeploymentType::Azure,
];

pub const SKU_CATALOG: &[HardwareSku] = &[
    HardwareSku {
        id: "ssd-small",
        name: "SSD Small",
        description: Some("Entry-level SSD node for small hot tiers"),
        storage_type: StorageType::Ssd,
        storage_size_gb: 500.0,
        cpu_cores: 4,
        memory_gb: 16.0,
        iops: 3000,
        throughput_mbps: 500,
        cost_per_month: 150.0,
        deployment_types: ALL_NODE_DEPLOYMENTS,
    },
    HardwareSku {
        id: "ssd-medium",
        name: "SSD Medium",
        description: Some("Balanced SSD node for hot and warm tiers"),
        storage_type: StorageType::Ssd,
        storage_size_gb: 2000.0,
        cpu_cores: 8,
        memory_gb: 32.0,
        iops: 10_000,
        throughput_mbps: 1000,
        cost_per_month: 400.0,
        deployment_types: ALL_NODE_DEPLOYMENTS,
    },
    HardwareSku {
        id: "ssd-large",
        name: "SSD Large",
        description: Some("High-throughput SSD node for heavy ingest"),
        storage_type: StorageType::Ssd,
        storage_size_gb: 5000.0,
        cpu_cores: 16,
        memory_gb: 64.0,
        iops: 20_000,
        throughput_mbps: 2000,
        cost_per_month: 1000.0,
        deployment_types: ALL_NODE_DEPLOYMENTS,
    },
    HardwareSku {
        id: "hdd-small",
        name: "HDD Small",
        description: Some("Dense spinning disk for cold data"),
        storage_type: StorageType::Hdd,
        storage_size_gb: 2000.0,
        cpu_cores: 4,
        memory_gb: 16.0,
        iops: 150,
        throughput_mbps: 150,
        cost_per_month: 80.0,
        deployment_types: SELF_MANAGED_DEPLOYMENTS,
    },
    HardwareSku {
        id: "hdd-medium",
        name: "HDD Medium",
        description: None,
        storage_type: StorageType::Hdd,
        storage_size_gb: 5000.0,
        cpu_cores: 8,
        memory_gb: 32.0,
        iops: 300,
        throughput_mbps: 200,
        cost_per_month: 200.0,
        deployment_types: SELF_MANAGED_DEPLOYMENTS,
    },
    HardwareSku {
        id: "hdd-large",
        name: "HDD Large",
        description: None,
        storage_type: StorageType::Hdd,
        storage_size_gb: 10_000.0,
        cpu_cores: 16,
        memory_gb: 64.0,
        iops: 500,
        throughput_mbps: 300,
        cost_per_month: 400.0,
        deployment_types: SELF_MANAGED_DEPLOYMENTS,
    },
    HardwareSku {
        id: "nvme-premium",
        name: "NVMe Premium",
        description: Some("Lowest-latency option for demanding hot tiers"),
        storage_type: StorageType::Nvme,
        storage_size_gb: 2000.0,
        cpu_cores: 16,
        memory_gb: 64.0,
        iops: 50_000,
        throughput_mbps: 3000,
        cost_per_month: 1500.0,
        deployment_types: SELF_MANAGED_DEPLOYMENTS,
    },
];

/// SKUs available on a deployment target. Serverless deployments have none.
pub fn skus_for_deployment(deployment_type: DeploymentType) -> Vec<&'static HardwareSku> {
    SKU_CATALOG
        .iter()
        .filter(|sku| sku.deployment_types.contains(&deployment_type))
        .collect()
}

pub fn sku_by_id(id: &str) -> Option<&'static HardwareSku> {
    SKU_CATALOG.iter().find(|sku| sku.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serverless_has_no_skus() {
        assert!(skus_for_deployment(DeploymentType::Serverless).is_empty());
    }

    #[test]
    fn test_elastic_cloud_offers_ssd_only() {
        let skus = skus_for_deployment(DeploymentType::ElasticCloud);
        assert!(!skus.is_empty());
        assert!(skus.iter().all(|sku| sku.storage_type == StorageType::Ssd));
    }

    #[test]
    fn test_lookup_by_id() {
        let sku = sku_by_id("ssd-medium").unwrap();
        assert_eq!(sku.cpu_cores, 8);
        assert_eq!(sku.iops, 10_000);
        assert!(sku_by_id("missing").is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        for (i, sku) in SKU_CATALOG.iter().enumerate() {
            assert!(
                SKU_CATALOG.iter().skip(i + 1).all(|other| other.id != sku.id),
                "duplicate sku id: {}",
                sku.id
            );
        }
    }
}
