//! ECS One-off Task Launcher
//!
//! Launches a single administrative task on an ECS cluster and prints a
//! console URL to track it.
//!
//! # Pipeline Overview
//!
//! ```text
//!   ┌──────────┐   ┌──────────────┐   ┌──────────────┐   ┌─────────┐   ┌────────┐
//!   │  config  │──▶│   resolve    │──▶│   resolve    │──▶│ submit  │──▶│ report │
//!   │ registry │   │ task def ARN │   │ sg + subnet  │   │ RunTask │   │  URL   │
//!   └──────────┘   └──────────────┘   └──────────────┘   └─────────┘   └────────┘
//! ```
//!
//! The run is strictly linear; the first failure aborts the process with a
//! non-zero exit code. Nothing is retried here: transport-level retry is
//! the SDK client's business.

use clap::Parser;
use colored::Colorize;

use ecsrun::aws::{self, Ec2Network, EcsCompute};
use ecsrun::cli::Cli;
use ecsrun::config::loader;
use ecsrun::launch::{report, Launcher};
use ecsrun::observability::logging;

#[tokio::main]
async fn main() {
    logging::init();

    if let Err(e) = run().await {
        eprintln!("{}", format!("Error: {e}").red());
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let env = loader::load_environment(cli.config.as_deref(), &cli.env)?;

    tracing::info!(
        environment = %env.name,
        cluster = %env.cluster,
        task_definition = %env.task_definition,
        launch_type = %env.launch_type,
        region = %env.region,
        command = ?cli.cmd,
        "Configuration resolved"
    );

    let sdk_config = aws::load_sdk_config(&env.region).await;
    let compute = EcsCompute::new(&sdk_config);
    let network = Ec2Network::new(&sdk_config);

    let task = Launcher::new(env, compute, network).run(&cli.cmd).await?;
    let url = report::console_url(&task.region, &task.cluster, &task.task_id);

    println!("{}", report::success_line(&url).green());
    Ok(())
}
