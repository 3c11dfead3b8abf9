use std::fmt;

/// One invocation of the external Postman CLI, in the order they are driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliStep {
    Install,
    Login,
    Run,
    Lint,
}

impl CliStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CliStep::Install => "install",
            CliStep::Login => "login",
            CliStep::Run => "collection run",
            CliStep::Lint => "api lint",
        }
    }
}

impl fmt::Display for CliStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
