use std::path::{Path, PathBuf};
use anyhow::anyhow;
use clap::builder::BoolishValueParser;
use clap::Parser;
use crate::models::run_option::RunOption;

pub const DEFAULT_BASE_URL: &str = "https://api.getpostman.com";
pub const DEFAULT_COLLECTION_NAME: &str = "Commerce API";
pub const DEFAULT_CLI_BIN: &str = "postman";
pub const DEFAULT_INSTALLER_URL: &str = "https://dl-cli.pstmn.io/install/linux64.sh";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Postman API key
    #[arg(long, env = "POSTMAN_API_KEY", hide_env_values = true, required_unless_present = "list")]
    pub(crate) api_key: Option<String>,

    /// Postman API base url
    #[arg(long, env = "POSTMAN_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub(crate) base_url: String,

    /// Name of the collection to create
    #[arg(long, env = "POSTMAN_COLLECTION_NAME", default_value = DEFAULT_COLLECTION_NAME)]
    pub(crate) collection_name: String,

    /// Workspace to create the collection in
    #[arg(long, env = "POSTMAN_WORKSPACE_ID")]
    pub(crate) workspace: Option<String>,

    /// API id passed to `postman api lint`; lint is skipped without it
    #[arg(long, env = "POSTMAN_API_LINT_ID")]
    pub(crate) lint_id: Option<String>,

    /// Http timeout in seconds, 0 disables it
    #[arg(long, env = "POSTMAN_TIMEOUT_SECS", default_value_t = 0)]
    pub(crate) timeout: u64,

    /// Only build the collection, do not drive the Postman CLI
    #[arg(long, env = "POSTMAN_SKIP_CLI", default_value_t = false, value_parser = BoolishValueParser::new())]
    pub(crate) skip_cli: bool,

    /// Assume the Postman CLI is already installed
    #[arg(long, env = "POSTMAN_SKIP_INSTALL", default_value_t = false, value_parser = BoolishValueParser::new())]
    pub(crate) skip_install: bool,

    /// Postman CLI executable
    #[arg(long, env = "POSTMAN_CLI_BIN", default_value = DEFAULT_CLI_BIN)]
    pub(crate) cli_bin: String,

    /// Installer script piped to sh by the install step
    #[arg(long, env = "POSTMAN_INSTALLER_URL", default_value = DEFAULT_INSTALLER_URL)]
    pub(crate) installer_url: String,

    /// Print the endpoint table and exit
    #[arg(short, long, default_value_t = false)]
    pub list: bool,
}

impl Args {
    pub fn into_run_option(self) -> anyhow::Result<RunOption> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| anyhow!("a Postman API key is required (--api-key or POSTMAN_API_KEY)"))?;
        Ok(RunOption {
            api_key,
            base_url: self.base_url,
            collection_name: self.collection_name,
            workspace_id: self.workspace.filter(|id| !id.is_empty()),
            lint_id: self.lint_id.filter(|id| !id.is_empty()),
            timeout_secs: self.timeout,
            skip_cli: self.skip_cli,
            skip_install: self.skip_install,
            cli_bin: self.cli_bin,
            installer_url: self.installer_url,
        })
    }
}

/// Loads `.env` (searched upward from the working directory) or the given
/// file into the process environment. A missing file is not an error.
pub fn load_env_file(path: Option<&Path>) -> Result<Option<PathBuf>, dotenvy::Error> {
    let loaded = match path {
        Some(path) => dotenvy::from_path(path).map(|_| path.to_path_buf()),
        None => dotenvy::dotenv(),
    };
    match loaded {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}
