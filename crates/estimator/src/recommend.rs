//! PB-scale sizing recommendations
//!
//! Compares a configuration against a fixed reference template for
//! petabyte-scale ingest and emits one advisory line per resource that
//! falls short. The thresholds and the resources compared are deliberate
//! business heuristics; keep them as-is.

use crate::models::{ClusterConfig, TierType};

/// Size reduction applied by cold-and-colder tiers (53% reduction means the
/// stored data is 47% of its original size)
pub const COMPRESSION_RATIO: f64 = 0.53;

/// Daily ingest at which the reference comparison kicks in, in PB/day
pub const ADVISORY_THRESHOLD_PB_PER_DAY: f64 = 0.3;

/// Daily ingest at which storage-requirement and cluster-split advisories
/// are added, in PB/day
pub const SPLIT_THRESHOLD_PB_PER_DAY: f64 = 0.5;

/// A configured resource below this fraction of the reference value draws
/// an advisory
pub const REFERENCE_TOLERANCE: f64 = 0.8;

/// Reference sizing for one tier
#[derive(Debug, Clone, Copy)]
pub struct TierReference {
    pub nodes: u32,
    pub ram_gb: u32,
    pub vcpu: u32,
    pub storage_tb: f64,
    pub retention_hours: u32,
}

/// Reference template for a ~0.5 PB/day cluster
#[derive(Debug, Clone, Copy)]
pub struct PbScaleReference {
    pub hot: TierReference,
    pub cold: TierReference,
    pub frozen: TierReference,
    pub master_nodes: u32,
    pub ml_nodes: u32,
    pub kibana_nodes: u32,
    /// Rolling 30-day frozen tier storage, in PB
    pub frozen_30_day_pb: f64,
    /// Deep-freeze storage per year, in PB
    pub deep_freeze_yearly_pb: f64,
}

pub const PB_SCALE_REFERENCE: PbScaleReference = PbScaleReference {
    hot: TierReference {
        nodes: 160,
        ram_gb: 64,
        vcpu: 32,
        storage_tb: 4.0,
        retention_hours: 0,
    },
    cold: TierReference {
        nodes: 60,
        ram_gb: 64,
        vcpu: 32,
        storage_tb: 10.0,
        retention_hours: 24,
    },
    frozen: TierReference {
        nodes: 66,
        ram_gb: 64,
        vcpu: 32,
        storage_tb: 10.0,
        retention_hours: 0,
    },
    master_nodes: 3,
    ml_nodes: 1,
    kibana_nodes: 2,
    frozen_30_day_pb: 15.0,
    deep_freeze_yearly_pb: 100.0,
};

/// Compressed storage needed for `retention_days` of ingest, in PB
pub fn storage_requirement_pb(daily_ingest_pb: f64, retention_days: f64, compression_ratio: f64) -> f64 {
    daily_ingest_pb * retention_days * (1.0 - compression_ratio)
}

/// One advisory line per resource below 80% of the reference value.
///
/// Resources compared: hot/cold node count and per-node storage, frozen
/// node count. Frozen per-node storage is deliberately not checked.
pub fn compare_to_reference(
    hot_nodes: u32,
    hot_storage_tb: f64,
    cold_nodes: u32,
    cold_storage_tb: f64,
    frozen_nodes: u32,
) -> Vec<String> {
    let reference = PB_SCALE_REFERENCE;
    let mut differences = Vec::new();

    if (hot_nodes as f64) < reference.hot.nodes as f64 * REFERENCE_TOLERANCE {
        differences.push(format!(
            "Hot tier: {} nodes (recommended: {})",
            hot_nodes, reference.hot.nodes
        ));
    }
    if hot_storage_tb < reference.hot.storage_tb * REFERENCE_TOLERANCE {
        differences.push(format!(
            "Hot tier storage: {:.1} TB/node (recommended: {:.0} TB/node)",
            hot_storage_tb, reference.hot.storage_tb
        ));
    }
    if (cold_nodes as f64) < reference.cold.nodes as f64 * REFERENCE_TOLERANCE {
        differences.push(format!(
            "Cold tier: {} nodes (recommended: {})",
            cold_nodes, reference.cold.nodes
        ));
    }
    if cold_storage_tb < reference.cold.storage_tb * REFERENCE_TOLERANCE {
        differences.push(format!(
            "Cold tier storage: {:.1} TB/node (recommended: {:.0} TB/node)",
            cold_storage_tb, reference.cold.storage_tb
        ));
    }
    if (frozen_nodes as f64) < reference.frozen.nodes as f64 * REFERENCE_TOLERANCE {
        differences.push(format!(
            "Frozen tier: {} nodes (recommended: {})",
            frozen_nodes, reference.frozen.nodes
        ));
    }

    differences
}

/// Advisory text for a configuration ingesting `daily_ingest_pb` PB/day.
/// Empty below the advisory threshold.
pub fn recommendations(config: &ClusterConfig, daily_ingest_pb: f64) -> Vec<String> {
    if daily_ingest_pb < ADVISORY_THRESHOLD_PB_PER_DAY {
        return Vec::new();
    }

    let tier_shape = |tier_type: TierType| -> (u32, f64) {
        match config.tier(tier_type) {
            Some(tier) if tier.enabled => (tier.node_count, tier.storage_size_gb / 1024.0),
            _ => (0, 0.0),
        }
    };

    let (hot_nodes, hot_storage_tb) = tier_shape(TierType::Hot);
    let (cold_nodes, cold_storage_tb) = tier_shape(TierType::Cold);
    let (frozen_nodes, _) = tier_shape(TierType::Frozen);

    let mut lines = compare_to_reference(
        hot_nodes,
        hot_storage_tb,
        cold_nodes,
        cold_storage_tb,
        frozen_nodes,
    );

    if daily_ingest_pb >= SPLIT_THRESHOLD_PB_PER_DAY {
        let required_pb = storage_requirement_pb(daily_ingest_pb, 30.0, COMPRESSION_RATIO);
        lines.push(format!(
            "30-day retention at {:.1} PB/day needs ~{:.1} PB of compressed frozen storage",
            daily_ingest_pb, required_pb
        ));
        lines.push(
            "Consider splitting ingest across multiple clusters at this volume".to_string(),
        );
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClusterConfig;

    #[test]
    fn test_matching_reference_yields_no_differences() {
        let differences = compare_to_reference(160, 4.0, 60, 10.0, 66);
        assert!(differences.is_empty());
    }

    #[test]
    fn test_eighty_percent_tolerance() {
        // 128 nodes is exactly 80% of 160 and passes; 127 does not
        assert!(compare_to_reference(128, 4.0, 60, 10.0, 66).is_empty());
        let differences = compare_to_reference(127, 4.0, 60, 10.0, 66);
        assert_eq!(differences.len(), 1);
        assert!(differences[0].starts_with("Hot tier:"));
    }

    #[test]
    fn test_below_threshold_is_silent() {
        let config = ClusterConfig::default();
        assert!(recommendations(&config, 0.29).is_empty());
    }

    #[test]
    fn test_advisories_at_threshold() {
        // Default cluster: hot has 3 nodes and ~2 TB/node, cold and frozen
        // are disabled, so every compared resource falls short.
        let config = ClusterConfig::default();
        let lines = recommendations(&config, 0.3);
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_split_advisories_at_half_pb_per_day() {
        let config = ClusterConfig::default();
        let lines = recommendations(&config, 0.5);
        assert_eq!(lines.len(), 7);
        // 0.5 * 30 * 0.47 is just under 7.05 PB in floating point
        assert!(lines[5].contains("~7.0 PB"), "line was: {}", lines[5]);
        assert!(lines[6].contains("splitting"));
    }

    #[test]
    fn test_storage_requirement_applies_compression() {
        let pb = storage_requirement_pb(1.0, 30.0, COMPRESSION_RATIO);
        assert!((pb - 14.1).abs() < 1e-9);
    }
}
