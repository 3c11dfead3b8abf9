#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub collection_id: String,
    pub items_added: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliReport {
    pub installed: bool,
    pub run_output: String,
    // None when no lint target was configured
    pub lint_output: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub build: BuildReport,
    // None when the CLI steps were skipped
    pub cli: Option<CliReport>,
}
