//! Per-tier capacity and latency model
//!
//! Pure formulas over a tier's hardware attributes. Every coefficient lives
//! in a keyed lookup so new tiers or storage classes slot in without touching
//! the formulas.

use crate::models::{StorageType, TierConfig, TierType};

/// Baseline query latency for a hot tier SSD node, in ms
pub const BASE_QUERY_LATENCY_MS: f64 = 50.0;

/// Baseline ingest latency for a hot tier SSD node, in ms
pub const BASE_INGEST_LATENCY_MS: f64 = 10.0;

/// Memory per node at which the ingest memory multiplier saturates
pub const MEMORY_BASELINE_GB: f64 = 64.0;

/// Default indexing throughput per CPU core, in ops/sec
pub const DEFAULT_OPS_PER_CORE: u32 = 2000;

/// Accepted ops-per-core range; values outside are clamped
pub const MIN_OPS_PER_CORE: u32 = 2000;
pub const MAX_OPS_PER_CORE: u32 = 2500;

/// Performance multipliers relative to the hot tier
#[derive(Debug, Clone, Copy)]
pub struct TierMultipliers {
    pub ingest: f64,
    pub query: f64,
}

/// Fixed per-tier trade-off: colder tiers are slower but cheaper
pub fn tier_multipliers(tier_type: TierType) -> TierMultipliers {
    match tier_type {
        TierType::Hot => TierMultipliers { ingest: 1.0, query: 1.0 },
        TierType::Warm => TierMultipliers { ingest: 0.8, query: 0.7 },
        TierType::Cold => TierMultipliers { ingest: 0.3, query: 0.4 },
        TierType::Frozen => TierMultipliers { ingest: 0.1, query: 0.2 },
        TierType::DeepFreeze => TierMultipliers { ingest: 0.05, query: 0.1 },
    }
}

fn storage_ingest_multiplier(storage_type: StorageType) -> f64 {
    match storage_type {
        StorageType::Nvme => 1.2,
        StorageType::Ssd => 1.0,
        StorageType::Hdd => 0.3,
    }
}

fn storage_query_latency_multiplier(storage_type: StorageType) -> f64 {
    match storage_type {
        StorageType::Nvme => 0.8,
        StorageType::Ssd => 1.0,
        StorageType::Hdd => 2.5,
    }
}

fn storage_ingest_latency_multiplier(storage_type: StorageType) -> f64 {
    match storage_type {
        StorageType::Nvme => 0.7,
        StorageType::Ssd => 1.0,
        StorageType::Hdd => 3.0,
    }
}

/// Resolve the ops-per-core setting, clamping into the accepted range
pub fn effective_ops_per_core(requested: Option<u32>) -> u32 {
    requested
        .unwrap_or(DEFAULT_OPS_PER_CORE)
        .clamp(MIN_OPS_PER_CORE, MAX_OPS_PER_CORE)
}

/// Maximum ingest throughput of a tier in ops/sec. Disabled tiers ingest nothing.
pub fn tier_ingest_capacity(tier: &TierConfig, ops_per_core: u32) -> f64 {
    if !tier.enabled {
        return 0.0;
    }

    let multipliers = tier_multipliers(tier.tier_type);
    let memory_multiplier = (tier.memory_gb / MEMORY_BASELINE_GB).min(1.0);

    ops_per_core as f64
        * tier.cpu_cores as f64
        * tier.node_count as f64
        * multipliers.ingest
        * storage_ingest_multiplier(tier.storage_type)
        * memory_multiplier
}

/// Estimated query latency of a tier in ms.
///
/// Disabled tiers report infinite latency; the aggregator filters them out
/// before averaging.
pub fn tier_query_latency(tier: &TierConfig) -> f64 {
    if !tier.enabled {
        return f64::INFINITY;
    }

    let multipliers = tier_multipliers(tier.tier_type);
    let cpu_factor = (8.0 / tier.cpu_cores as f64).max(0.5);
    let memory_factor = (32.0 / tier.memory_gb).max(0.7);

    BASE_QUERY_LATENCY_MS
        * multipliers.query
        * storage_query_latency_multiplier(tier.storage_type)
        * cpu_factor
        * memory_factor
}

/// Estimated per-document ingest latency of a tier in ms
pub fn tier_ingest_latency(tier: &TierConfig) -> f64 {
    if !tier.enabled {
        return f64::INFINITY;
    }

    let multipliers = tier_multipliers(tier.tier_type);
    let iops_factor = (10_000.0 / tier.iops as f64).max(0.5);

    BASE_INGEST_LATENCY_MS
        * multipliers.ingest
        * storage_ingest_latency_multiplier(tier.storage_type)
        * iops_factor
}
