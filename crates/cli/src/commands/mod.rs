//! CLI command implementations

pub mod configure;
pub mod serverless;
pub mod show;
pub mod skus;
