use tracing::info;
use crate::core::cli_driver::CliDriver;
use crate::core::collection_builder::CollectionBuilder;
use crate::core::command_runner::{CommandRunner, ProcessRunner};
use crate::core::endpoint_table::commerce_endpoints;
use crate::core::postman_api::{CollectionsApi, PostmanClient};
use crate::models::endpoint_descriptor::EndpointDescriptor;
use crate::models::error::BuildError;
use crate::models::result::RunSummary;
use crate::models::run_option::RunOption;

/// Builds the commerce collection against the real Postman API, then drives
/// the installed CLI unless told not to.
pub async fn run(option: &RunOption) -> Result<RunSummary, BuildError> {
    let api = PostmanClient::new(
        &option.base_url,
        &option.api_key,
        option.workspace_id.clone(),
        option.timeout_secs,
    )?;
    run_with(api, ProcessRunner, option, commerce_endpoints()).await
}

pub async fn run_with<A, R>(
    api: A,
    runner: R,
    option: &RunOption,
    endpoints: &[EndpointDescriptor],
) -> Result<RunSummary, BuildError>
where
    A: CollectionsApi,
    R: CommandRunner,
{
    let build = CollectionBuilder::new(api)
        .run(&option.collection_name, endpoints)
        .await?;

    if option.skip_cli {
        info!("Skipping Postman CLI steps");
        return Ok(RunSummary { build, cli: None });
    }

    let driver = CliDriver::new(runner, option.cli_bin.as_str(), option.installer_url.as_str());
    let cli = driver
        .run_all(
            &option.api_key,
            &build.collection_id,
            option.lint_id.as_deref(),
            option.skip_install,
        )
        .await?;
    Ok(RunSummary { build, cli: Some(cli) })
}
