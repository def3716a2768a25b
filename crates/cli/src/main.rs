//! Cluster Tuner CLI
//!
//! A command-line tool for configuring a multi-tier cluster deployment and
//! estimating its performance and monthly cost. The configuration snapshot
//! is persisted between runs; every command edits or reads that snapshot.

mod commands;
mod output;
mod store;

use anyhow::Result;
use clap::{Parser, Subcommand};
use estimator_lib::models::{DataType, DeploymentType, StorageType, TierType, TimeUnit, VolumeUnit};
use estimator_lib::serverless::ServerlessTier;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use commands::{configure, serverless, show, skus};
use store::ConfigStore;

/// Cluster Tuner CLI
#[derive(Parser)]
#[command(name = "tuner")]
#[command(author, version, about = "Performance and cost estimator for tiered cluster deployments", long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long, short, global = true, default_value = "table")]
    pub format: output::OutputFormat,

    /// Path to the configuration snapshot (can also be set via TUNER_CONFIG)
    #[arg(long, env = "TUNER_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show performance and cost metrics for the saved configuration
    Show,

    /// Set the deployment target
    Deployment {
        /// One of: on_prem, aws, gcp, azure, elastic_cloud, serverless
        deployment: DeploymentType,
    },

    /// Configure a single data tier
    Tier {
        /// One of: hot, warm, cold, frozen, deep_freeze
        tier: TierType,

        /// Enable the tier
        #[arg(long)]
        enable: bool,

        /// Disable the tier
        #[arg(long)]
        disable: bool,

        /// Number of data nodes
        #[arg(long)]
        nodes: Option<u32>,

        /// Storage class (ssd, hdd, nvme)
        #[arg(long)]
        storage_type: Option<StorageType>,

        /// Storage per node in GB
        #[arg(long)]
        storage_gb: Option<f64>,

        /// CPU cores per node
        #[arg(long)]
        cores: Option<u32>,

        /// Memory per node in GB
        #[arg(long)]
        memory_gb: Option<f64>,

        /// IOPS per node
        #[arg(long)]
        iops: Option<u32>,

        /// Throughput per node in MB/s
        #[arg(long)]
        throughput: Option<u32>,

        /// Retention in hours
        #[arg(long)]
        retention_hours: Option<u32>,

        /// Populate hardware fields from a catalog SKU
        #[arg(long)]
        sku: Option<String>,
    },

    /// Set the expected ingest volume
    Volume {
        /// Volume magnitude; omit with --clear to remove the volume
        value: Option<f64>,

        /// Volume unit (pb, tb, gb, mb)
        #[arg(long, default_value = "gb")]
        unit: VolumeUnit,

        /// Time base (day, hour, minute)
        #[arg(long, default_value = "day")]
        per: TimeUnit,

        /// Data type (traces, logs, metrics, custom)
        #[arg(long, default_value = "logs")]
        data_type: DataType,

        /// Average document size in KB (required for meaningful custom rates)
        #[arg(long)]
        doc_size_kb: Option<f64>,

        /// Clear the expected ingest volume
        #[arg(long)]
        clear: bool,
    },

    /// Set infrastructure node counts
    Infra {
        /// Master nodes
        #[arg(long)]
        master: Option<u32>,

        /// Coordinating nodes
        #[arg(long)]
        coordinating: Option<u32>,

        /// ML nodes
        #[arg(long)]
        ml: Option<u32>,

        /// Kibana nodes
        #[arg(long)]
        kibana: Option<u32>,
    },

    /// Set the ops-per-core performance assumption
    OpsPerCore {
        /// Operations per CPU core per second (typical range 2000-2500)
        ops: u32,
    },

    /// List the hardware SKU catalog
    Skus {
        /// Only show SKUs for a deployment target
        #[arg(long)]
        deployment: Option<DeploymentType>,
    },

    /// Estimate serverless costs for a monthly workload
    Serverless {
        /// GB ingested per month
        #[arg(long)]
        ingest_gb: f64,

        /// GB retained on average (defaults to 50% of ingest)
        #[arg(long)]
        retention_gb: Option<f64>,

        /// GB transferred out per month (first 50 GB free)
        #[arg(long)]
        egress_gb: Option<f64>,

        /// Pricing tier (logs_essentials, complete)
        #[arg(long, default_value = "complete")]
        tier: ServerlessTier,
    },

    /// Remove the saved configuration
    Reset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .init();

    let store = match &cli.config {
        Some(path) => ConfigStore::at(path.clone()),
        None => ConfigStore::default_path()?,
    };

    match cli.command {
        Commands::Show => show::run(&store, cli.format)?,
        Commands::Deployment { deployment } => configure::set_deployment(&store, deployment)?,
        Commands::Tier {
            tier,
            enable,
            disable,
            nodes,
            storage_type,
            storage_gb,
            cores,
            memory_gb,
            iops,
            throughput,
            retention_hours,
            sku,
        } => configure::set_tier(
            &store,
            configure::TierArgs {
                tier,
                enable,
                disable,
                nodes,
                storage_type,
                storage_gb,
                cores,
                memory_gb,
                iops,
                throughput,
                retention_hours,
                sku,
            },
        )?,
        Commands::Volume {
            value,
            unit,
            per,
            data_type,
            doc_size_kb,
            clear,
        } => {
            if clear {
                configure::clear_volume(&store)?;
            } else {
                let Some(value) = value else {
                    anyhow::bail!("provide a volume value, or --clear to remove it");
                };
                configure::set_volume(&store, value, unit, per, data_type, doc_size_kb)?;
            }
        }
        Commands::Infra {
            master,
            coordinating,
            ml,
            kibana,
        } => configure::set_infra(&store, master, coordinating, ml, kibana)?,
        Commands::OpsPerCore { ops } => configure::set_ops_per_core(&store, ops)?,
        Commands::Skus { deployment } => skus::run(deployment, cli.format)?,
        Commands::Serverless {
            ingest_gb,
            retention_gb,
            egress_gb,
            tier,
        } => serverless::run(ingest_gb, retention_gb, egress_gb, tier, cli.format)?,
        Commands::Reset => configure::reset(&store)?,
    }

    Ok(())
}
