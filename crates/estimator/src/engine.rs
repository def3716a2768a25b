//! Cluster-wide metrics aggregation
//!
//! Combines the per-tier capacity model, pricing tables and volume converter
//! into a single `PerformanceMetrics` value. Pure and stateless: safe to
//! call repeatedly and from multiple threads.

use crate::capacity;
use crate::models::{
    ClusterConfig, DeploymentType, PerformanceMetrics, StorageType, TierBreakdown, TierConfig,
    TierType, TimeUnit, VolumeUnit,
};
use crate::pricing;
use crate::recommend;
use crate::serverless::{self, ServerlessCostInput};
use crate::volume;
use tracing::debug;

/// Days of retention assumed for frozen-tier blob storage sizing
const BLOB_RETENTION_DAYS: f64 = 30.0;

fn storage_efficiency_factor(storage_type: StorageType) -> f64 {
    match storage_type {
        StorageType::Nvme => 1.0,
        StorageType::Ssd => 0.9,
        StorageType::Hdd => 0.6,
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn tier_storage_gb(tier: &TierConfig) -> f64 {
    tier.storage_size_gb * tier.node_count as f64
}

/// Compute performance and cost estimates for a cluster configuration.
///
/// Disabled tiers contribute zero everywhere; an all-disabled tier set
/// yields all-zero metrics rather than an error.
pub fn compute_metrics(config: &ClusterConfig) -> PerformanceMetrics {
    let ops_per_core = capacity::effective_ops_per_core(config.ops_per_core);
    let enabled: Vec<&TierConfig> = config.tiers.iter().filter(|t| t.enabled).collect();

    let max_ingest_rate: f64 = enabled
        .iter()
        .map(|t| capacity::tier_ingest_capacity(t, ops_per_core))
        .sum();

    // Node-weighted latency averages over enabled tiers only; an empty or
    // zero-weight tier set averages to 0, not NaN.
    let total_weight: f64 = enabled.iter().map(|t| t.node_count as f64).sum();
    let (avg_query_latency, avg_ingest_latency) = if total_weight > 0.0 {
        let query: f64 = enabled
            .iter()
            .map(|t| capacity::tier_query_latency(t) * t.node_count as f64)
            .sum();
        let ingest: f64 = enabled
            .iter()
            .map(|t| capacity::tier_ingest_latency(t) * t.node_count as f64)
            .sum();
        (query / total_weight, ingest / total_weight)
    } else {
        (0.0, 0.0)
    };

    let total_storage_gb: f64 = enabled.iter().map(|t| tier_storage_gb(t)).sum();
    let efficient_storage_gb: f64 = enabled
        .iter()
        .map(|t| tier_storage_gb(t) * storage_efficiency_factor(t.storage_type))
        .sum();
    let storage_efficiency = if total_storage_gb > 0.0 {
        efficient_storage_gb / total_storage_gb * 100.0
    } else {
        0.0
    };

    // Cold and colder tiers hold compressed segments
    let compression_factor = 1.0 - recommend::COMPRESSION_RATIO;
    let any_compressed = enabled.iter().any(|t| t.tier_type.is_compressed());
    let compressed_storage_gb = any_compressed.then(|| {
        enabled
            .iter()
            .map(|t| {
                let raw = tier_storage_gb(t);
                if t.tier_type.is_compressed() {
                    raw * compression_factor
                } else {
                    raw
                }
            })
            .sum()
    });

    // Volume given in PB/day unlocks blob storage sizing for frozen tiers
    let daily_pb_volume = config.expected_ingest_volume.as_ref().filter(|v| {
        v.volume_unit == VolumeUnit::PB && v.time_unit == TimeUnit::Day
    });

    let (compute_cost_raw, storage_cost_raw) =
        if config.deployment_type == DeploymentType::Serverless {
            // Serverless bypasses the hardware cost model entirely
            (0.0, 0.0)
        } else {
            let node_cost = pricing::compute_node_cost(config.deployment_type);
            let data_nodes: f64 = enabled.iter().map(|t| t.node_count as f64).sum();
            let infra_nodes = config
                .infrastructure_nodes
                .map(|n| n.total() as f64)
                .unwrap_or(0.0);
            let compute = node_cost * (data_nodes + infra_nodes);

            let storage: f64 = enabled
                .iter()
                .map(|t| {
                    let cache_cost = pricing::storage_cost(
                        tier_storage_gb(t),
                        t.storage_type,
                        t.tier_type,
                        config.deployment_type,
                        false,
                    );
                    // Frozen tiers additionally pay for the blob store behind
                    // the SSD cache, sized from 30 days of compressed ingest.
                    let blob_cost = match (t.tier_type, daily_pb_volume) {
                        (TierType::Frozen | TierType::DeepFreeze, Some(v)) => {
                            let blob_gb = v.value
                                * BLOB_RETENTION_DAYS
                                * compression_factor
                                * 1024.0
                                * 1024.0;
                            pricing::storage_cost(
                                blob_gb,
                                t.storage_type,
                                t.tier_type,
                                config.deployment_type,
                                true,
                            )
                        }
                        _ => 0.0,
                    };
                    cache_cost + blob_cost
                })
                .sum();
            (compute, storage)
        };

    let serverless_cost_raw = if config.deployment_type == DeploymentType::Serverless {
        config
            .expected_ingest_volume
            .as_ref()
            .map(|v| {
                let ingest_gb = volume::monthly_ingest_gb(v);
                serverless::serverless_cost(&ServerlessCostInput {
                    ingest_gb,
                    retention_gb: ingest_gb * serverless::RETENTION_FRACTION,
                    egress_gb: 0.0,
                    tier: config.serverless_tier.unwrap_or_default(),
                })
                .total_cost
            })
            .unwrap_or(0.0)
    } else {
        0.0
    };

    let (expected_ingest_rate, capacity_utilization, daily_ingest_pb) = match config
        .expected_ingest_volume
        .as_ref()
    {
        Some(v) => {
            let expected = volume::docs_per_second(v);
            let utilization = if max_ingest_rate > 0.0 {
                Some(round1(expected / max_ingest_rate * 100.0))
            } else {
                None
            };
            (Some(expected.round()), utilization, volume::daily_ingest_pb(v))
        }
        None => (None, None, 0.0),
    };

    let recommendations = recommend::recommendations(config, daily_ingest_pb);

    let tier_breakdown: Vec<TierBreakdown> = enabled
        .iter()
        .map(|t| TierBreakdown {
            tier: t.tier_type,
            ingest_capacity: capacity::tier_ingest_capacity(t, ops_per_core),
            query_performance: capacity::tier_query_latency(t),
            storage_used: tier_storage_gb(t),
        })
        .collect();

    let cost_estimate = (compute_cost_raw + storage_cost_raw + serverless_cost_raw).round();
    debug!(
        max_ingest_rate,
        cost_estimate,
        enabled_tiers = enabled.len(),
        "computed cluster metrics"
    );

    PerformanceMetrics {
        max_ingest_rate: max_ingest_rate.round(),
        avg_query_latency: round1(avg_query_latency),
        avg_ingest_latency: round1(avg_ingest_latency),
        storage_efficiency: round1(storage_efficiency),
        cost_estimate,
        compute_cost: compute_cost_raw.round(),
        storage_cost: storage_cost_raw.round(),
        expected_ingest_rate,
        capacity_utilization,
        total_storage_gb,
        compressed_storage_gb,
        recommendations,
        ops_per_core,
        tier_breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DataType, IngestVolumeConfig, InfrastructureNodes};
    use crate::serverless::ServerlessTier;

    fn volume(value: f64, unit: VolumeUnit, per: TimeUnit) -> IngestVolumeConfig {
        IngestVolumeConfig {
            value,
            volume_unit: unit,
            time_unit: per,
            data_type: DataType::Custom,
            avg_document_size_kb: Some(1.0),
        }
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-6, "{} != {}", a, b);
    }

    #[test]
    fn test_default_cluster_snapshot() {
        // Regression baseline: default config is hot-only on elastic_cloud.
        let metrics = compute_metrics(&ClusterConfig::default());

        assert_eq!(metrics.max_ingest_rate, 24_000.0);
        assert_eq!(metrics.avg_query_latency, 50.0);
        assert_eq!(metrics.avg_ingest_latency, 10.0);
        assert_eq!(metrics.storage_efficiency, 90.0);
        // 3 nodes * $512 compute; 6000 GB of hot SSD at GCP fallback prices
        assert_eq!(metrics.compute_cost, 1536.0);
        assert_eq!(metrics.storage_cost, 996.0);
        assert_eq!(metrics.cost_estimate, 2532.0);
        assert_eq!(metrics.expected_ingest_rate, None);
        assert_eq!(metrics.capacity_utilization, None);
        assert_eq!(metrics.total_storage_gb, 6000.0);
        assert_eq!(metrics.compressed_storage_gb, None);
        assert!(metrics.recommendations.is_empty());
        assert_eq!(metrics.ops_per_core, 2000);

        assert_eq!(metrics.tier_breakdown.len(), 1);
        let hot = &metrics.tier_breakdown[0];
        assert_eq!(hot.tier, TierType::Hot);
        assert_eq!(hot.ingest_capacity, 24_000.0);
        assert_eq!(hot.query_performance, 50.0);
        assert_eq!(hot.storage_used, 6000.0);
    }

    #[test]
    fn test_all_disabled_yields_zero_metrics() {
        let mut config = ClusterConfig::default();
        for tier in &mut config.tiers {
            tier.enabled = false;
        }
        let metrics = compute_metrics(&config);

        assert_eq!(metrics.max_ingest_rate, 0.0);
        assert_eq!(metrics.avg_query_latency, 0.0);
        assert_eq!(metrics.avg_ingest_latency, 0.0);
        assert_eq!(metrics.storage_efficiency, 0.0);
        assert_eq!(metrics.cost_estimate, 0.0);
        assert_eq!(metrics.total_storage_gb, 0.0);
        assert_eq!(metrics.compressed_storage_gb, None);
        assert!(metrics.tier_breakdown.is_empty());
    }

    #[test]
    fn test_disabled_tiers_do_not_affect_totals() {
        let base = compute_metrics(&ClusterConfig::default());
        let mut config = ClusterConfig::default();
        // Beef up a disabled tier; nothing should change
        let warm = config.tier_mut(TierType::Warm).unwrap();
        warm.node_count = 100;
        warm.storage_size_gb = 100_000.0;
        let metrics = compute_metrics(&config);
        assert_eq!(metrics, base);
    }

    #[test]
    fn test_compression_applies_to_cold_and_colder() {
        let mut config = ClusterConfig::default();
        config.tier_mut(TierType::Cold).unwrap().enabled = true;
        let metrics = compute_metrics(&config);

        // hot 6000 GB raw, cold 20000 GB raw compressed to 47%
        assert_eq!(metrics.total_storage_gb, 26_000.0);
        assert_close(
            metrics.compressed_storage_gb.unwrap(),
            6000.0 + 20_000.0 * 0.47,
        );
    }

    #[test]
    fn test_capacity_utilization() {
        let mut config = ClusterConfig::default();
        config.expected_ingest_volume = Some(volume(1.0, VolumeUnit::TB, TimeUnit::Day));
        let metrics = compute_metrics(&config);

        // 1 TB/day of 1 KB docs is ~12427.57 docs/s against 24000 ops/s
        assert_eq!(metrics.expected_ingest_rate, Some(12_428.0));
        assert_eq!(metrics.capacity_utilization, Some(51.8));
    }

    #[test]
    fn test_utilization_absent_when_capacity_is_zero() {
        let mut config = ClusterConfig::default();
        for tier in &mut config.tiers {
            tier.enabled = false;
        }
        config.expected_ingest_volume = Some(volume(1.0, VolumeUnit::TB, TimeUnit::Day));
        let metrics = compute_metrics(&config);
        assert!(metrics.expected_ingest_rate.is_some());
        assert_eq!(metrics.capacity_utilization, None);
    }

    #[test]
    fn test_infrastructure_nodes_priced_as_compute() {
        let mut config = ClusterConfig::default();
        config.infrastructure_nodes = Some(InfrastructureNodes {
            master_nodes: 3,
            coordinating_nodes: 2,
            ml_nodes: 1,
            kibana_nodes: 2,
        });
        let metrics = compute_metrics(&config);
        // (3 data + 8 infra) nodes * $512
        assert_eq!(metrics.compute_cost, 5632.0);
        assert_eq!(metrics.cost_estimate, 5632.0 + 996.0);
    }

    #[test]
    fn test_frozen_blob_cost_requires_pb_per_day_volume() {
        let mut config = ClusterConfig::default();
        config.deployment_type = DeploymentType::Gcp;
        config.tier_mut(TierType::Frozen).unwrap().enabled = true;

        let without_volume = compute_metrics(&config);

        config.expected_ingest_volume = Some(volume(1.0, VolumeUnit::PB, TimeUnit::Day));
        let with_volume = compute_metrics(&config);

        // 1 PB/day * 30 days * 0.47 = 14.1 PB of blob at $20/TB
        let blob_cost: f64 = 1.0 * 30.0 * 0.47 * 1024.0 * 20.0;
        assert_close(
            with_volume.storage_cost - without_volume.storage_cost,
            blob_cost.round(),
        );

        // Same volume expressed in TB/day does not trigger blob sizing
        config.expected_ingest_volume = Some(volume(1024.0, VolumeUnit::TB, TimeUnit::Day));
        let tb_volume = compute_metrics(&config);
        assert_eq!(tb_volume.storage_cost, without_volume.storage_cost);
    }

    #[test]
    fn test_serverless_bypasses_hardware_costs() {
        let mut config = ClusterConfig::default();
        config.deployment_type = DeploymentType::Serverless;
        config.serverless_tier = Some(ServerlessTier::Complete);
        config.expected_ingest_volume = Some(volume(1.0, VolumeUnit::TB, TimeUnit::Day));
        let metrics = compute_metrics(&config);

        assert_eq!(metrics.compute_cost, 0.0);
        assert_eq!(metrics.storage_cost, 0.0);
        // 30720 GB/month: ingest 2764.80 + retention 291.84
        assert_eq!(metrics.cost_estimate, 3057.0);
    }

    #[test]
    fn test_serverless_without_volume_costs_nothing() {
        let mut config = ClusterConfig::default();
        config.deployment_type = DeploymentType::Serverless;
        let metrics = compute_metrics(&config);
        assert_eq!(metrics.cost_estimate, 0.0);
    }

    #[test]
    fn test_latency_average_weighted_by_nodes() {
        let mut config = ClusterConfig::default();
        config.tier_mut(TierType::Cold).unwrap().enabled = true;
        let metrics = compute_metrics(&config);

        let hot = config.tier(TierType::Hot).unwrap();
        let cold = config.tier(TierType::Cold).unwrap();
        let expected = (capacity::tier_query_latency(hot) * 3.0
            + capacity::tier_query_latency(cold) * 2.0)
            / 5.0;
        assert_eq!(metrics.avg_query_latency, round1(expected));
    }

    #[test]
    fn test_recommendations_emitted_at_pb_scale() {
        let mut config = ClusterConfig::default();
        let mut v = volume(0.5, VolumeUnit::PB, TimeUnit::Day);
        v.data_type = DataType::Logs;
        v.avg_document_size_kb = None;
        config.expected_ingest_volume = Some(v);
        let metrics = compute_metrics(&config);
        assert_eq!(metrics.recommendations.len(), 7);
    }

    #[test]
    fn test_ops_per_core_flows_through() {
        let mut config = ClusterConfig::default();
        config.ops_per_core = Some(2500);
        let metrics = compute_metrics(&config);
        assert_eq!(metrics.ops_per_core, 2500);
        assert_eq!(metrics.max_ingest_rate, 30_000.0);
    }
}
