//! List the hardware SKU catalog

use anyhow::Result;
use colored::Colorize;
use estimator_lib::models::DeploymentType;
use estimator_lib::skus::{skus_for_deployment, HardwareSku, SKU_CATALOG};
use tabled::Tabled;

use crate::output::{format_currency, format_storage_gb, OutputFormat};

/// Row for the SKU table
#[derive(Tabled)]
struct SkuRow {
    #[tabled(rename = "SKU")]
    id: String,
    #[tabled(rename = "CPU")]
    cpu: String,
    #[tabled(rename = "Memory")]
    memory: String,
    #[tabled(rename = "Storage")]
    storage: String,
    #[tabled(rename = "IOPS")]
    iops: String,
    #[tabled(rename = "Cost")]
    cost: String,
}

impl From<&&HardwareSku> for SkuRow {
    fn from(sku: &&HardwareSku) -> Self {
        SkuRow {
            id: sku.id.to_string(),
            cpu: format!("{} cores", sku.cpu_cores),
            memory: format!("{} GB", sku.memory_gb),
            storage: format!(
                "{} ({})",
                format_storage_gb(sku.storage_size_gb),
                sku.storage_type
            ),
            iops: sku.iops.to_string(),
            cost: format!("{}/mo", format_currency(sku.cost_per_month)),
        }
    }
}

pub fn run(deployment: Option<DeploymentType>, format: OutputFormat) -> Result<()> {
    let skus: Vec<&HardwareSku> = match deployment {
        Some(deployment_type) => skus_for_deployment(deployment_type),
        None => SKU_CATALOG.iter().collect(),
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&skus)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            if skus.is_empty() {
                println!(
                    "{}",
                    "No SKUs available for this deployment type; configure hardware manually"
                        .yellow()
                );
                return Ok(());
            }
            let rows: Vec<SkuRow> = skus.iter().map(SkuRow::from).collect();
            let table = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", table);
        }
    }

    Ok(())
}
