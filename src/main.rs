use std::process::ExitCode;
use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use postman_collection_builder::core::endpoint_table::commerce_endpoints;
use postman_collection_builder::core::{execute, show_endpoint_table};
use postman_collection_builder::models::args::{load_env_file, Args};
use postman_collection_builder::models::result::RunSummary;

#[tokio::main]
async fn main() -> ExitCode {
    // .env has to be loaded before clap reads the environment
    let env_file = load_env_file(None);
    init_tracing();
    if let Err(e) = env_file {
        error!("Error: failed to load .env: {}", e);
        return ExitCode::FAILURE;
    }

    let args = Args::parse();
    if args.list {
        show_endpoint_table::show_endpoint_table(commerce_endpoints());
        return ExitCode::SUCCESS;
    }

    match provision(args).await {
        Ok(summary) => {
            show_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn provision(args: Args) -> anyhow::Result<RunSummary> {
    let option = args.into_run_option()?;
    info!(
        collection = %option.collection_name,
        base_url = %option.base_url,
        skip_cli = option.skip_cli,
        "Provisioning Postman collection"
    );
    execute::run(&option)
        .await
        .with_context(|| format!("provisioning collection {:?} failed", option.collection_name))
}

fn show_summary(summary: &RunSummary) {
    info!(
        collection_id = %summary.build.collection_id,
        items = summary.build.items_added,
        "Collection ready"
    );
    if let Some(cli) = &summary.cli {
        println!("Collection run result:\n{}", cli.run_output.trim_end());
        if let Some(lint_output) = &cli.lint_output {
            println!("API lint result:\n{}", lint_output.trim_end());
        }
    }
}

/// Initialize tracing/logging
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,postman_collection_builder=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
