//! Commands that edit the saved configuration snapshot

use anyhow::{bail, Result};
use estimator_lib::capacity::{MAX_OPS_PER_CORE, MIN_OPS_PER_CORE};
use estimator_lib::models::{
    DataType, DeploymentType, IngestVolumeConfig, StorageType, TierType, TimeUnit, VolumeUnit,
};
use estimator_lib::skus;

use crate::output::{print_success, print_warning};
use crate::store::ConfigStore;

pub fn set_deployment(store: &ConfigStore, deployment_type: DeploymentType) -> Result<()> {
    let mut config = store.load();
    config.deployment_type = deployment_type;
    store.save(&config);
    print_success(&format!("Deployment target set to {}", deployment_type));
    Ok(())
}

/// Edits to apply to a single tier
pub struct TierArgs {
    pub tier: TierType,
    pub enable: bool,
    pub disable: bool,
    pub nodes: Option<u32>,
    pub storage_type: Option<StorageType>,
    pub storage_gb: Option<f64>,
    pub cores: Option<u32>,
    pub memory_gb: Option<f64>,
    pub iops: Option<u32>,
    pub throughput: Option<u32>,
    pub retention_hours: Option<u32>,
    pub sku: Option<String>,
}

pub fn set_tier(store: &ConfigStore, args: TierArgs) -> Result<()> {
    if args.enable && args.disable {
        bail!("--enable and --disable are mutually exclusive");
    }

    let mut config = store.load();
    let deployment_type = config.deployment_type;
    let Some(tier) = config.tier_mut(args.tier) else {
        bail!("tier {} missing from saved configuration", args.tier);
    };

    if let Some(sku_id) = &args.sku {
        let Some(sku) = skus::sku_by_id(sku_id) else {
            bail!("unknown SKU: {}", sku_id);
        };
        if !sku.deployment_types.contains(&deployment_type) {
            print_warning(&format!(
                "SKU {} is not offered on {}",
                sku.id, deployment_type
            ));
        }
        tier.sku_id = Some(sku.id.to_string());
        tier.storage_type = sku.storage_type;
        tier.storage_size_gb = sku.storage_size_gb;
        tier.cpu_cores = sku.cpu_cores;
        tier.memory_gb = sku.memory_gb;
        tier.iops = sku.iops;
        tier.throughput_mbps = sku.throughput_mbps;
    }

    if args.enable {
        tier.enabled = true;
    }
    if args.disable {
        tier.enabled = false;
    }
    if let Some(nodes) = args.nodes {
        tier.node_count = nodes;
    }

    // Any manual hardware edit detaches the tier from its SKU
    let manual_edit = args.storage_type.is_some()
        || args.storage_gb.is_some()
        || args.cores.is_some()
        || args.memory_gb.is_some()
        || args.iops.is_some()
        || args.throughput.is_some();
    if manual_edit && args.sku.is_none() {
        tier.sku_id = None;
    }

    if let Some(storage_type) = args.storage_type {
        tier.storage_type = storage_type;
    }
    if let Some(storage_gb) = args.storage_gb {
        tier.storage_size_gb = storage_gb;
    }
    if let Some(cores) = args.cores {
        tier.cpu_cores = cores;
    }
    if let Some(memory_gb) = args.memory_gb {
        tier.memory_gb = memory_gb;
    }
    if let Some(iops) = args.iops {
        tier.iops = iops;
    }
    if let Some(throughput) = args.throughput {
        tier.throughput_mbps = throughput;
    }
    if let Some(retention_hours) = args.retention_hours {
        tier.retention_hours = retention_hours;
    }

    let tier_name = args.tier.to_string();
    store.save(&config);
    print_success(&format!("Updated {} tier", tier_name));
    Ok(())
}

pub fn set_volume(
    store: &ConfigStore,
    value: f64,
    unit: VolumeUnit,
    per: TimeUnit,
    data_type: DataType,
    doc_size_kb: Option<f64>,
) -> Result<()> {
    if data_type == DataType::Custom && doc_size_kb.is_none() {
        print_warning("custom data type without --doc-size-kb assumes 1.0 KB documents");
    }

    let mut config = store.load();
    config.expected_ingest_volume = Some(IngestVolumeConfig {
        value,
        volume_unit: unit,
        time_unit: per,
        data_type,
        avg_document_size_kb: doc_size_kb,
    });
    store.save(&config);
    print_success(&format!("Expected ingest volume set to {} {}/{}", value, unit, per));
    Ok(())
}

pub fn clear_volume(store: &ConfigStore) -> Result<()> {
    let mut config = store.load();
    config.expected_ingest_volume = None;
    store.save(&config);
    print_success("Expected ingest volume cleared");
    Ok(())
}

pub fn set_infra(
    store: &ConfigStore,
    master: Option<u32>,
    coordinating: Option<u32>,
    ml: Option<u32>,
    kibana: Option<u32>,
) -> Result<()> {
    let mut config = store.load();
    let mut nodes = config.infrastructure_nodes.unwrap_or_default();
    if let Some(master) = master {
        nodes.master_nodes = master;
    }
    if let Some(coordinating) = coordinating {
        nodes.coordinating_nodes = coordinating;
    }
    if let Some(ml) = ml {
        nodes.ml_nodes = ml;
    }
    if let Some(kibana) = kibana {
        nodes.kibana_nodes = kibana;
    }
    config.infrastructure_nodes = Some(nodes);
    store.save(&config);
    print_success(&format!("Infrastructure nodes set ({} total)", nodes.total()));
    Ok(())
}

pub fn set_ops_per_core(store: &ConfigStore, ops: u32) -> Result<()> {
    if !(MIN_OPS_PER_CORE..=MAX_OPS_PER_CORE).contains(&ops) {
        print_warning(&format!(
            "{} is outside the typical {}-{} range and will be clamped",
            ops, MIN_OPS_PER_CORE, MAX_OPS_PER_CORE
        ));
    }
    let mut config = store.load();
    config.ops_per_core = Some(ops);
    store.save(&config);
    print_success(&format!("Ops per core set to {}", ops));
    Ok(())
}

pub fn reset(store: &ConfigStore) -> Result<()> {
    store.clear()?;
    print_success("Saved configuration removed; defaults will be used");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use estimator_lib::models::TierType;

    fn temp_store() -> (tempfile::TempDir, ConfigStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::at(dir.path().join("config.json"));
        (dir, store)
    }

    fn tier_args(tier: TierType) -> TierArgs {
        TierArgs {
            tier,
            enable: false,
            disable: false,
            nodes: None,
            storage_type: None,
            storage_gb: None,
            cores: None,
            memory_gb: None,
            iops: None,
            throughput: None,
            retention_hours: None,
            sku: None,
        }
    }

    #[test]
    fn test_enable_and_resize_tier() {
        let (_dir, store) = temp_store();
        let mut args = tier_args(TierType::Cold);
        args.enable = true;
        args.nodes = Some(4);
        set_tier(&store, args).unwrap();

        let config = store.load();
        let cold = config.tiers.iter().find(|t| t.tier_type == TierType::Cold).unwrap();
        assert!(cold.enabled);
        assert_eq!(cold.node_count, 4);
    }

    #[test]
    fn test_enable_disable_conflict() {
        let (_dir, store) = temp_store();
        let mut args = tier_args(TierType::Hot);
        args.enable = true;
        args.disable = true;
        assert!(set_tier(&store, args).is_err());
    }

    #[test]
    fn test_sku_populates_hardware_fields() {
        let (_dir, store) = temp_store();
        let mut args = tier_args(TierType::Hot);
        args.sku = Some("ssd-large".to_string());
        set_tier(&store, args).unwrap();

        let config = store.load();
        let hot = config.tiers.iter().find(|t| t.tier_type == TierType::Hot).unwrap();
        assert_eq!(hot.sku_id.as_deref(), Some("ssd-large"));
        assert_eq!(hot.cpu_cores, 16);
        assert_eq!(hot.storage_size_gb, 5000.0);
    }

    #[test]
    fn test_manual_edit_detaches_sku() {
        let (_dir, store) = temp_store();
        let mut args = tier_args(TierType::Hot);
        args.sku = Some("ssd-medium".to_string());
        set_tier(&store, args).unwrap();

        let mut args = tier_args(TierType::Hot);
        args.cores = Some(12);
        set_tier(&store, args).unwrap();

        let config = store.load();
        let hot = config.tiers.iter().find(|t| t.tier_type == TierType::Hot).unwrap();
        assert_eq!(hot.sku_id, None);
        assert_eq!(hot.cpu_cores, 12);
    }

    #[test]
    fn test_unknown_sku_rejected() {
        let (_dir, store) = temp_store();
        let mut args = tier_args(TierType::Hot);
        args.sku = Some("quantum-drive".to_string());
        assert!(set_tier(&store, args).is_err());
    }

    #[test]
    fn test_infra_edits_merge() {
        let (_dir, store) = temp_store();
        set_infra(&store, Some(3), None, None, None).unwrap();
        set_infra(&store, None, Some(2), None, Some(2)).unwrap();

        let config = store.load();
        let nodes = config.infrastructure_nodes.unwrap();
        assert_eq!(nodes.master_nodes, 3);
        assert_eq!(nodes.coordinating_nodes, 2);
        assert_eq!(nodes.kibana_nodes, 2);
        assert_eq!(nodes.total(), 7);
    }
}
