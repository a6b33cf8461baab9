//! Configuration model loaded from external sources.

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::SIMILARITY_THRESHOLD;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared by the checker binary.
pub struct CheckerConfig {
    pub regulations_dir: PathBuf,
    pub results_dir: PathBuf,
    pub similarity_threshold: f32,
}

impl CheckerConfig {
    /// Load configuration from an optional YAML file plus `CHECKER_`-prefixed
    /// environment variables, falling back to built-in defaults.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("regulations_dir", "regulations")?
            .set_default("results_dir", "saved_results")?
            .set_default("similarity_threshold", SIMILARITY_THRESHOLD as f64)?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("CHECKER"))
            .build()?
            .try_deserialize()
    }
}
