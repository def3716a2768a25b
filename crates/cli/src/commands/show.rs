//! Show computed performance and cost metrics

use anyhow::Result;
use colored::Colorize;
use estimator_lib::models::{DeploymentType, PerformanceMetrics};
use tabled::Tabled;

use crate::output::{
    color_utilization, format_currency, format_latency, format_rate, format_storage_gb,
    OutputFormat,
};
use crate::store::ConfigStore;

/// Row for the tier breakdown table
#[derive(Tabled)]
struct TierRow {
    #[tabled(rename = "Tier")]
    tier: String,
    #[tabled(rename = "Ingest")]
    ingest: String,
    #[tabled(rename = "Query")]
    query: String,
    #[tabled(rename = "Storage")]
    storage: String,
}

pub fn run(store: &ConfigStore, format: OutputFormat) -> Result<()> {
    let config = store.load().into_cluster_config();
    let metrics = estimator_lib::compute_metrics(&config);

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&metrics)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            render_table(&config.deployment_type, &metrics);
        }
    }

    Ok(())
}

fn render_table(deployment_type: &DeploymentType, metrics: &PerformanceMetrics) {
    let serverless = *deployment_type == DeploymentType::Serverless;

    println!("{}", "Performance Metrics".bold());
    println!("{}", "=".repeat(50));
    println!("Deployment:             {}", deployment_type.to_string().cyan());

    if !serverless {
        println!(
            "Max ingest rate:        {} (at {} ops/core)",
            format_rate(metrics.max_ingest_rate),
            metrics.ops_per_core
        );
    }
    if let Some(expected) = metrics.expected_ingest_rate {
        println!("Expected ingest rate:   {}", format_rate(expected));
    }
    if let Some(utilization) = metrics.capacity_utilization {
        println!("Capacity utilization:   {}", color_utilization(utilization));
    }
    if !serverless {
        println!(
            "Avg query latency:      {}",
            format_latency(metrics.avg_query_latency)
        );
        println!(
            "Avg ingest latency:     {}",
            format_latency(metrics.avg_ingest_latency)
        );
        println!("Storage efficiency:     {:.1}%", metrics.storage_efficiency);
    }
    println!();

    println!("{}", "Monthly Cost".bold());
    println!("{}", "-".repeat(50));
    if !serverless {
        println!(
            "Compute:                {}",
            format_currency(metrics.compute_cost)
        );
        println!(
            "Storage:                {}",
            format_currency(metrics.storage_cost)
        );
    }
    println!(
        "{} {}",
        "Total:".bold(),
        format_currency(metrics.cost_estimate).green().bold()
    );
    println!(
        "Annual:                 {}",
        format_currency(metrics.cost_estimate * 12.0).dimmed()
    );
    println!();

    if !serverless {
        println!("{}", "Storage Summary".bold());
        println!("{}", "-".repeat(50));
        println!(
            "Total storage:          {}",
            format_storage_gb(metrics.total_storage_gb)
        );
        if let Some(compressed) = metrics.compressed_storage_gb {
            println!(
                "Compressed:             {}",
                format_storage_gb(compressed)
            );
        }
        println!();
    }

    if !metrics.tier_breakdown.is_empty() && !serverless {
        println!("{}", "Tier Breakdown".bold());
        let rows: Vec<TierRow> = metrics
            .tier_breakdown
            .iter()
            .map(|tier| TierRow {
                tier: tier.tier.to_string(),
                ingest: format_rate(tier.ingest_capacity),
                query: format_latency(tier.query_performance),
                storage: format_storage_gb(tier.storage_used),
            })
            .collect();
        let table = tabled::Table::new(rows)
            .with(tabled::settings::Style::rounded())
            .to_string();
        println!("{}", table);
        println!();
    }

    if !metrics.recommendations.is_empty() {
        println!("{}", "Recommendations".bold().yellow());
        println!("{}", "-".repeat(50));
        for recommendation in &metrics.recommendations {
            println!("  • {}", recommendation);
        }
    }
}
