//! Ad-hoc serverless cost estimation

use anyhow::Result;
use colored::Colorize;
use estimator_lib::serverless::{
    pricing, serverless_cost, ServerlessCostInput, ServerlessTier, RETENTION_FRACTION,
};

use crate::output::{format_currency, OutputFormat};

pub fn run(
    ingest_gb: f64,
    retention_gb: Option<f64>,
    egress_gb: Option<f64>,
    tier: ServerlessTier,
    format: OutputFormat,
) -> Result<()> {
    // Without an explicit retention figure, assume half the monthly ingest
    // sticks around on average.
    let retention_gb = retention_gb.unwrap_or(ingest_gb * RETENTION_FRACTION);
    let input = ServerlessCostInput {
        ingest_gb,
        retention_gb,
        egress_gb: egress_gb.unwrap_or(0.0),
        tier,
    };
    let cost = serverless_cost(&input);

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&cost)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            let rates = pricing(tier);
            println!("{} ({})", "Serverless Monthly Cost".bold(), tier);
            println!("{}", "=".repeat(50));
            println!(
                "Ingest:                 {} ({} GB at ${:.3}/GB)",
                format_currency(cost.ingest_cost),
                input.ingest_gb,
                rates.ingest_per_gb
            );
            println!(
                "Retention:              {} ({} GB at ${:.3}/GB/mo)",
                format_currency(cost.retention_cost),
                input.retention_gb,
                rates.retention_per_gb_month
            );
            println!(
                "Egress:                 {} ({:.0} GB free)",
                format_currency(cost.egress_cost),
                rates.egress_free_gb
            );
            println!(
                "{} {}",
                "Total:".bold(),
                format_currency(cost.total_cost).green().bold()
            );
        }
    }

    Ok(())
}
