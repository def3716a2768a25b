//! Compute and storage pricing tables
//!
//! Static per-deployment price lists. Storage prices are $/TB/month and come
//! from published cloud list prices; compute prices are $/node/month for an
//! n2-standard-32 class machine (32 vCPU, 64 GB RAM).

use crate::models::{DeploymentType, StorageType, TierType};

/// Storage prices for one deployment target, in $/TB/month
#[derive(Debug, Clone, Copy)]
pub struct StoragePricing {
    pub hot_ssd: f64,
    pub cold_hdd: f64,
    pub cold_ssd: f64,
    /// SSD cache in front of blob storage for frozen tiers
    pub frozen_ssd: f64,
    /// Object storage (GCS/S3/Azure Blob) backing frozen tiers
    pub frozen_blob: f64,
}

pub const GCP_STORAGE_PRICING: StoragePricing = StoragePricing {
    hot_ssd: 170.0,
    cold_hdd: 40.0,
    cold_ssd: 170.0,
    frozen_ssd: 170.0,
    frozen_blob: 20.0,
};

pub const AWS_STORAGE_PRICING: StoragePricing = StoragePricing {
    hot_ssd: 180.0,
    cold_hdd: 45.0,
    cold_ssd: 180.0,
    frozen_ssd: 180.0,
    frozen_blob: 25.0,
};

pub const AZURE_STORAGE_PRICING: StoragePricing = StoragePricing {
    hot_ssd: 175.0,
    cold_hdd: 42.0,
    cold_ssd: 175.0,
    frozen_ssd: 175.0,
    frozen_blob: 22.0,
};

/// Storage price list for a deployment target. Targets without their own
/// list fall back to GCP prices.
pub fn storage_pricing(deployment_type: DeploymentType) -> &'static StoragePricing {
    match deployment_type {
        DeploymentType::Gcp => &GCP_STORAGE_PRICING,
        DeploymentType::Aws => &AWS_STORAGE_PRICING,
        DeploymentType::Azure => &AZURE_STORAGE_PRICING,
        _ => &GCP_STORAGE_PRICING,
    }
}

/// Monthly compute cost per node for a deployment target
pub fn compute_node_cost(deployment_type: DeploymentType) -> f64 {
    match deployment_type {
        DeploymentType::Gcp => 1134.0,
        DeploymentType::Aws => 1200.0,
        DeploymentType::Azure => 1150.0,
        DeploymentType::ElasticCloud => 512.0,
        DeploymentType::OnPrem => 500.0,
        DeploymentType::Serverless => 0.0,
    }
}

/// Monthly cost of `storage_gb` provisioned for a tier.
///
/// Frozen tiers price against either the SSD cache or (with `use_blob`)
/// the backing blob store. Cold tiers price by storage class; hot and warm
/// always price as SSD.
pub fn storage_cost(
    storage_gb: f64,
    storage_type: StorageType,
    tier_type: TierType,
    deployment_type: DeploymentType,
    use_blob: bool,
) -> f64 {
    let pricing = storage_pricing(deployment_type);
    let storage_tb = storage_gb / 1024.0;

    match tier_type {
        TierType::Frozen | TierType::DeepFreeze => {
            if use_blob {
                storage_tb * pricing.frozen_blob
            } else {
                storage_tb * pricing.frozen_ssd
            }
        }
        TierType::Cold => {
            if storage_type == StorageType::Hdd {
                storage_tb * pricing.cold_hdd
            } else {
                storage_tb * pricing.cold_ssd
            }
        }
        TierType::Hot | TierType::Warm => storage_tb * pricing.hot_ssd,
    }
}
