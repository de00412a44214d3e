//! Command-line interface definition.

use std::path::PathBuf;

use clap::Parser;

/// Run a one-off management command on an ECS cluster.
#[derive(Debug, Parser)]
#[command(name = "ecsrun", version, about)]
pub struct Cli {
    /// Environment to run the task in, as defined in the environment
    /// registry.
    #[arg(short, long, default_value = "default")]
    pub env: String,

    /// Path to the environment registry (falls back to ECSRUN_CONFIG, then
    /// ./ecsrun.toml).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Command override for the ECS container (e.g. "run migration:run").
    ///
    /// Everything from the first free token onward is captured verbatim,
    /// including tokens that look like flags.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub cmd: Vec<String>,
}
