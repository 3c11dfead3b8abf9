/// Everything one provisioning run needs, resolved from flags and environment.
#[derive(Debug, Clone)]
pub struct RunOption {
    pub api_key: String,
    pub base_url: String,
    pub collection_name: String,
    pub workspace_id: Option<String>,
    pub lint_id: Option<String>,
    pub timeout_secs: u64,
    pub skip_cli: bool,
    pub skip_install: bool,
    pub cli_bin: String,
    pub installer_url: String,
}
