//! Core data models for the cluster estimator

use crate::serverless::ServerlessTier;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Data tiers, ordered from most to least performant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierType {
    Hot,
    Warm,
    Cold,
    Frozen,
    DeepFreeze,
}

impl TierType {
    pub const ALL: [TierType; 5] = [
        TierType::Hot,
        TierType::Warm,
        TierType::Cold,
        TierType::Frozen,
        TierType::DeepFreeze,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TierType::Hot => "hot",
            TierType::Warm => "warm",
            TierType::Cold => "cold",
            TierType::Frozen => "frozen",
            TierType::DeepFreeze => "deep_freeze",
        }
    }

    /// Cold and colder tiers store compressed segments
    pub fn is_compressed(&self) -> bool {
        matches!(
            self,
            TierType::Cold | TierType::Frozen | TierType::DeepFreeze
        )
    }
}

impl fmt::Display for TierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TierType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hot" => Ok(TierType::Hot),
            "warm" => Ok(TierType::Warm),
            "cold" => Ok(TierType::Cold),
            "frozen" => Ok(TierType::Frozen),
            "deep_freeze" | "deep-freeze" => Ok(TierType::DeepFreeze),
            other => Err(format!("unknown tier type: {}", other)),
        }
    }
}

/// Storage media class for a tier's data nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageType {
    Ssd,
    Hdd,
    Nvme,
}

impl StorageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageType::Ssd => "ssd",
            StorageType::Hdd => "hdd",
            StorageType::Nvme => "nvme",
        }
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ssd" => Ok(StorageType::Ssd),
            "hdd" => Ok(StorageType::Hdd),
            "nvme" => Ok(StorageType::Nvme),
            other => Err(format!("unknown storage type: {}", other)),
        }
    }
}

/// Deployment target for the cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentType {
    OnPrem,
    Aws,
    Gcp,
    Azure,
    ElasticCloud,
    Serverless,
}

impl DeploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentType::OnPrem => "on_prem",
            DeploymentType::Aws => "aws",
            DeploymentType::Gcp => "gcp",
            DeploymentType::Azure => "azure",
            DeploymentType::ElasticCloud => "elastic_cloud",
            DeploymentType::Serverless => "serverless",
        }
    }
}

impl fmt::Display for DeploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeploymentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "on_prem" | "on-prem" => Ok(DeploymentType::OnPrem),
            "aws" => Ok(DeploymentType::Aws),
            "gcp" => Ok(DeploymentType::Gcp),
            "azure" => Ok(DeploymentType::Azure),
            "elastic_cloud" | "elastic-cloud" => Ok(DeploymentType::ElasticCloud),
            "serverless" => Ok(DeploymentType::Serverless),
            other => Err(format!("unknown deployment type: {}", other)),
        }
    }
}

/// Unit for a user-entered ingest volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VolumeUnit {
    PB,
    TB,
    GB,
    MB,
}

impl fmt::Display for VolumeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VolumeUnit::PB => "PB",
            VolumeUnit::TB => "TB",
            VolumeUnit::GB => "GB",
            VolumeUnit::MB => "MB",
        };
        f.write_str(s)
    }
}

impl FromStr for VolumeUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pb" => Ok(VolumeUnit::PB),
            "tb" => Ok(VolumeUnit::TB),
            "gb" => Ok(VolumeUnit::GB),
            "mb" => Ok(VolumeUnit::MB),
            other => Err(format!("unknown volume unit: {}", other)),
        }
    }
}

/// Time base for a user-entered ingest volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Day,
    Hour,
    Minute,
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TimeUnit::Day => "day",
            TimeUnit::Hour => "hour",
            TimeUnit::Minute => "minute",
        };
        f.write_str(s)
    }
}

impl FromStr for TimeUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "day" => Ok(TimeUnit::Day),
            "hour" => Ok(TimeUnit::Hour),
            "minute" => Ok(TimeUnit::Minute),
            other => Err(format!("unknown time unit: {}", other)),
        }
    }
}

/// Kind of data being ingested; traces, logs and metrics assume OTLP format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    Traces,
    Logs,
    Metrics,
    Custom,
}

impl DataType {
    /// Built-in average document size in KB, used when no override is given.
    ///
    /// Custom falls back to 1.0 KB even without an override; callers that
    /// care should supply `avg_document_size_kb`.
    pub fn default_document_size_kb(&self) -> f64 {
        match self {
            DataType::Traces => 2.5,
            DataType::Logs => 1.0,
            DataType::Metrics => 0.1,
            DataType::Custom => 1.0,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DataType::Traces => "traces",
            DataType::Logs => "logs",
            DataType::Metrics => "metrics",
            DataType::Custom => "custom",
        };
        f.write_str(s)
    }
}

impl FromStr for DataType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "traces" => Ok(DataType::Traces),
            "logs" => Ok(DataType::Logs),
            "metrics" => Ok(DataType::Metrics),
            "custom" => Ok(DataType::Custom),
            other => Err(format!("unknown data type: {}", other)),
        }
    }
}

/// Hardware configuration for a single data tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierConfig {
    #[serde(rename = "type")]
    pub tier_type: TierType,
    pub enabled: bool,
    pub retention_hours: u32,
    pub node_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku_id: Option<String>,
    pub storage_type: StorageType,
    pub storage_size_gb: f64,
    pub cpu_cores: u32,
    pub memory_gb: f64,
    pub iops: u32,
    pub throughput_mbps: u32,
}

/// Expected ingest volume entered by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestVolumeConfig {
    pub value: f64,
    pub volume_unit: VolumeUnit,
    pub time_unit: TimeUnit,
    pub data_type: DataType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_document_size_kb: Option<f64>,
}

/// Supporting node counts outside the data tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InfrastructureNodes {
    pub master_nodes: u32,
    pub coordinating_nodes: u32,
    pub ml_nodes: u32,
    pub kibana_nodes: u32,
}

impl InfrastructureNodes {
    pub fn total(&self) -> u32 {
        self.master_nodes + self.coordinating_nodes + self.ml_nodes + self.kibana_nodes
    }
}

/// Full cluster configuration, the engine's single input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterConfig {
    pub deployment_type: DeploymentType,
    /// One entry per tier type, in `TierType::ALL` order
    pub tiers: Vec<TierConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_ingest_volume: Option<IngestVolumeConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infrastructure_nodes: Option<InfrastructureNodes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ops_per_core: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serverless_tier: Option<ServerlessTier>,
}

impl ClusterConfig {
    pub fn tier(&self, tier_type: TierType) -> Option<&TierConfig> {
        self.tiers.iter().find(|t| t.tier_type == tier_type)
    }

    pub fn tier_mut(&mut self, tier_type: TierType) -> Option<&mut TierConfig> {
        self.tiers.iter_mut().find(|t| t.tier_type == tier_type)
    }

    /// Total data nodes across enabled tiers
    pub fn total_nodes(&self) -> u32 {
        self.tiers
            .iter()
            .filter(|t| t.enabled)
            .map(|t| t.node_count)
            .sum()
    }
}

impl Default for ClusterConfig {
    fn default() -> Self {
        ClusterConfig {
            deployment_type: DeploymentType::ElasticCloud,
            tiers: TierType::ALL.iter().map(|t| default_tier_config(*t)).collect(),
            expected_ingest_volume: None,
            infrastructure_nodes: None,
            ops_per_core: None,
            serverless_tier: None,
        }
    }
}

/// Default hardware configuration for a tier. Only the hot tier starts enabled.
pub fn default_tier_config(tier_type: TierType) -> TierConfig {
    let (storage_type, storage_size_gb, cpu_cores, memory_gb, iops, throughput_mbps, node_count) =
        match tier_type {
            TierType::Hot => (StorageType::Ssd, 2000.0, 8, 32.0, 10_000, 1000, 3),
            TierType::Warm => (StorageType::Ssd, 5000.0, 8, 32.0, 5000, 500, 2),
            TierType::Cold => (StorageType::Hdd, 10_000.0, 4, 16.0, 300, 200, 2),
            TierType::Frozen => (StorageType::Hdd, 20_000.0, 2, 8.0, 150, 100, 1),
            TierType::DeepFreeze => (StorageType::Hdd, 50_000.0, 2, 8.0, 100, 50, 1),
        };

    let retention_hours = match tier_type {
        TierType::Hot => 24,
        TierType::Warm => 168,
        TierType::Cold => 720,
        TierType::Frozen | TierType::DeepFreeze => 8760,
    };

    TierConfig {
        tier_type,
        enabled: tier_type == TierType::Hot,
        retention_hours,
        node_count,
        sku_id: None,
        storage_type,
        storage_size_gb,
        cpu_cores,
        memory_gb,
        iops,
        throughput_mbps,
    }
}

/// Per-tier slice of the computed metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierBreakdown {
    pub tier: TierType,
    pub ingest_capacity: f64,
    pub query_performance: f64,
    pub storage_used: f64,
}

/// Computed performance and cost estimates, the engine's single output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// Documents per second across all enabled tiers
    pub max_ingest_rate: f64,
    /// Node-weighted average query latency in ms
    pub avg_query_latency: f64,
    /// Node-weighted average ingest latency in ms
    pub avg_ingest_latency: f64,
    /// Percentage, based on storage class mix
    pub storage_efficiency: f64,
    /// Total estimated monthly cost
    pub cost_estimate: f64,
    /// Monthly cost of data and infrastructure nodes
    pub compute_cost: f64,
    /// Monthly cost of provisioned storage (plus blob storage where applicable)
    pub storage_cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_ingest_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_utilization: Option<f64>,
    pub total_storage_gb: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compressed_storage_gb: Option<f64>,
    pub recommendations: Vec<String>,
    /// Ops-per-core value the capacity model actually used
    pub ops_per_core: u32,
    pub tier_breakdown: Vec<TierBreakdown>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_one_entry_per_tier() {
        let config = ClusterConfig::default();
        assert_eq!(config.tiers.len(), 5);
        for tier_type in TierType::ALL {
            assert!(config.tier(tier_type).is_some());
        }
    }

    #[test]
    fn test_only_hot_enabled_by_default() {
        let config = ClusterConfig::default();
        for tier in &config.tiers {
            assert_eq!(tier.enabled, tier.tier_type == TierType::Hot);
        }
        assert_eq!(config.total_nodes(), 3);
    }

    #[test]
    fn test_tier_type_round_trips_through_str() {
        for tier_type in TierType::ALL {
            assert_eq!(tier_type.as_str().parse::<TierType>(), Ok(tier_type));
        }
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = ClusterConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ClusterConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_tier_tags_serialize_snake_case() {
        let json = serde_json::to_string(&TierType::DeepFreeze).unwrap();
        assert_eq!(json, "\"deep_freeze\"");
        let json = serde_json::to_string(&DeploymentType::ElasticCloud).unwrap();
        assert_eq!(json, "\"elastic_cloud\"");
    }
}
