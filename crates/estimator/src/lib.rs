//! Estimation engine for multi-tier cluster deployments
//!
//! This crate provides the core functionality for:
//! - Converting ingest volumes to normalized rates
//! - Per-tier capacity and latency modeling
//! - Compute, storage and serverless cost estimation
//! - PB-scale sizing recommendations
//!
//! The engine is a pure function over its input: it holds no state, performs
//! no I/O and never fails. Callers build a [`models::ClusterConfig`] and get
//! back a [`models::PerformanceMetrics`].

pub mod capacity;
pub mod engine;
pub mod models;
pub mod pricing;
pub mod recommend;
pub mod serverless;
pub mod skus;
pub mod volume;

pub use engine::compute_metrics;
pub use models::*;
