//! Serverless cost model
//!
//! Alternate cost path for serverless deployments: pay-per-GB pricing with
//! no hardware involved. Prices follow the published serverless
//! observability rate card.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Serverless pricing tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServerlessTier {
    LogsEssentials,
    #[default]
    Complete,
}

impl ServerlessTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServerlessTier::LogsEssentials => "logs_essentials",
            ServerlessTier::Complete => "complete",
        }
    }
}

impl fmt::Display for ServerlessTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServerlessTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "logs_essentials" | "logs-essentials" => Ok(ServerlessTier::LogsEssentials),
            "complete" => Ok(ServerlessTier::Complete),
            other => Err(format!("unknown serverless tier: {}", other)),
        }
    }
}

/// Rate card for one serverless tier
#[derive(Debug, Clone, Copy)]
pub struct ServerlessPricing {
    /// $ per GB ingested
    pub ingest_per_gb: f64,
    /// $ per GB retained per month
    pub retention_per_gb_month: f64,
    /// $ per GB transferred after the free allowance
    pub egress_per_gb: f64,
    /// Free egress per month, in GB
    pub egress_free_gb: f64,
}

pub const LOGS_ESSENTIALS_PRICING: ServerlessPricing = ServerlessPricing {
    ingest_per_gb: 0.07,
    retention_per_gb_month: 0.017,
    egress_per_gb: 0.05,
    egress_free_gb: 50.0,
};

pub const COMPLETE_PRICING: ServerlessPricing = ServerlessPricing {
    ingest_per_gb: 0.09,
    retention_per_gb_month: 0.019,
    egress_per_gb: 0.05,
    egress_free_gb: 50.0,
};

pub fn pricing(tier: ServerlessTier) -> &'static ServerlessPricing {
    match tier {
        ServerlessTier::LogsEssentials => &LOGS_ESSENTIALS_PRICING,
        ServerlessTier::Complete => &COMPLETE_PRICING,
    }
}

/// Fraction of monthly ingest assumed retained when the caller has no
/// independent retention figure
pub const RETENTION_FRACTION: f64 = 0.5;

/// Monthly workload figures for serverless pricing
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ServerlessCostInput {
    pub ingest_gb: f64,
    pub retention_gb: f64,
    pub egress_gb: f64,
    pub tier: ServerlessTier,
}

/// Itemized monthly serverless cost, rounded to cents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ServerlessCost {
    pub ingest_cost: f64,
    pub retention_cost: f64,
    pub egress_cost: f64,
    pub total_cost: f64,
}

pub fn serverless_cost(input: &ServerlessCostInput) -> ServerlessCost {
    let pricing = pricing(input.tier);

    let ingest_cost = input.ingest_gb * pricing.ingest_per_gb;
    let retention_cost = input.retention_gb * pricing.retention_per_gb_month;
    let chargeable_egress = (input.egress_gb - pricing.egress_free_gb).max(0.0);
    let egress_cost = chargeable_egress * pricing.egress_per_gb;
    let total_cost = ingest_cost + retention_cost + egress_cost;

    ServerlessCost {
        ingest_cost: round_cents(ingest_cost),
        retention_cost: round_cents(retention_cost),
        egress_cost: round_cents(egress_cost),
        total_cost: round_cents(total_cost),
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_tier_reference_cost() {
        let cost = serverless_cost(&ServerlessCostInput {
            ingest_gb: 100.0,
            retention_gb: 50.0,
            egress_gb: 0.0,
            tier: ServerlessTier::Complete,
        });
        assert_eq!(cost.ingest_cost, 9.0);
        assert_eq!(cost.retention_cost, 0.95);
        assert_eq!(cost.egress_cost, 0.0);
        assert_eq!(cost.total_cost, 9.95);
    }

    #[test]
    fn test_logs_essentials_is_cheaper() {
        let input = ServerlessCostInput {
            ingest_gb: 100.0,
            retention_gb: 50.0,
            egress_gb: 0.0,
            tier: ServerlessTier::LogsEssentials,
        };
        let cost = serverless_cost(&input);
        assert_eq!(cost.ingest_cost, 7.0);
        assert_eq!(cost.retention_cost, 0.85);
        assert_eq!(cost.total_cost, 7.85);
    }

    #[test]
    fn test_first_50_gb_egress_free() {
        let mut input = ServerlessCostInput {
            ingest_gb: 0.0,
            retention_gb: 0.0,
            egress_gb: 50.0,
            tier: ServerlessTier::Complete,
        };
        assert_eq!(serverless_cost(&input).egress_cost, 0.0);
        input.egress_gb = 60.0;
        assert_eq!(serverless_cost(&input).egress_cost, 0.5);
    }
}
