use tracing::{debug, info, warn};
use crate::core::command_runner::CommandRunner;
use crate::models::cli_step::CliStep;
use crate::models::error::BuildError;
use crate::models::result::CliReport;

const INSTALL_SCRIPT: &str = r#"curl -o- "$1" | sh"#;

/// Drives the Postman CLI: install, login, collection run, api lint. Each step
/// is one subprocess and a failure stops the sequence.
pub struct CliDriver<R> {
    runner: R,
    cli_bin: String,
    installer_url: String,
}

impl<R: CommandRunner> CliDriver<R> {
    pub fn new(runner: R, cli_bin: impl Into<String>, installer_url: impl Into<String>) -> Self {
        CliDriver {
            runner,
            cli_bin: cli_bin.into(),
            installer_url: installer_url.into(),
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub async fn install(&self) -> Result<String, BuildError> {
        // the url goes in as $1 so sh never parses it
        let args = vec![
            "-c".to_string(),
            INSTALL_SCRIPT.to_string(),
            "sh".to_string(),
            self.installer_url.clone(),
        ];
        self.step(CliStep::Install, "sh", args).await
    }

    pub async fn login(&self, api_key: &str) -> Result<String, BuildError> {
        let args = vec!["login".to_string(), "--with-api-key".to_string(), api_key.to_string()];
        self.step(CliStep::Login, &self.cli_bin, args).await
    }

    pub async fn run_collection(&self, collection_id: &str) -> Result<String, BuildError> {
        let args = vec!["collection".to_string(), "run".to_string(), collection_id.to_string()];
        self.step(CliStep::Run, &self.cli_bin, args).await
    }

    pub async fn lint(&self, api_lint_id: &str) -> Result<String, BuildError> {
        let args = vec!["api".to_string(), "lint".to_string(), api_lint_id.to_string()];
        self.step(CliStep::Lint, &self.cli_bin, args).await
    }

    /// install → login → run → lint. `skip_install` leaves out the first
    /// step and a missing `lint_id` the last.
    pub async fn run_all(
        &self,
        api_key: &str,
        collection_id: &str,
        lint_id: Option<&str>,
        skip_install: bool,
    ) -> Result<CliReport, BuildError> {
        let mut report = CliReport::default();
        if skip_install {
            info!("Skipping Postman CLI install");
        } else {
            self.install().await?;
            report.installed = true;
            info!("Postman CLI installed successfully");
        }

        self.login(api_key).await?;
        info!("Logged in to Postman CLI successfully");

        report.run_output = self.run_collection(collection_id).await?;
        info!(%collection_id, "Collection run finished");

        match lint_id {
            Some(lint_id) => {
                report.lint_output = Some(self.lint(lint_id).await?);
                info!(%lint_id, "API lint finished");
            }
            None => warn!("No API lint id configured, skipping lint"),
        }
        Ok(report)
    }

    async fn step(&self, step: CliStep, program: &str, args: Vec<String>) -> Result<String, BuildError> {
        // args are not logged, login carries the api key
        debug!(%step, program, "running postman cli step");
        let output = self
            .runner
            .run(program, &args)
            .await
            .map_err(|source| BuildError::Spawn { step, source })?;
        if !output.success {
            return Err(BuildError::Process {
                step,
                code: output.code,
                message: output.failure_message(),
            });
        }
        let stderr = output.stderr.trim();
        if !stderr.is_empty() {
            warn!(%step, stderr, "postman cli wrote to stderr");
        }
        Ok(output.stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::io;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use crate::models::command_output::CommandOutput;

    /// Replays canned outcomes in order and remembers every invocation.
    #[derive(Default)]
    struct ScriptedRunner {
        outcomes: Mutex<VecDeque<io::Result<CommandOutput>>>,
        invocations: Mutex<Vec<(String, Vec<String>)>>,
    }

    impl ScriptedRunner {
        fn new(outcomes: Vec<io::Result<CommandOutput>>) -> Self {
            ScriptedRunner {
                outcomes: Mutex::new(outcomes.into()),
                invocations: Mutex::new(Vec::new()),
            }
        }

        fn invocations(&self) -> Vec<(String, Vec<String>)> {
            self.invocations.lock().clone()
        }
    }

    #[async_trait]
    impl CommandRunner for ScriptedRunner {
        async fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput> {
            self.invocations.lock().push((program.to_string(), args.to_vec()));
            self.outcomes
                .lock()
                .pop_front()
                .unwrap_or_else(|| Ok(CommandOutput::ok("")))
        }
    }

    fn driver(outcomes: Vec<io::Result<CommandOutput>>) -> CliDriver<ScriptedRunner> {
        CliDriver::new(ScriptedRunner::new(outcomes), "postman", "https://example.test/install.sh")
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn steps_run_in_fixed_order() {
        let driver = driver(vec![
            Ok(CommandOutput::ok("installed")),
            Ok(CommandOutput::ok("logged in")),
            Ok(CommandOutput::ok("run: 19 requests")),
            Ok(CommandOutput::ok("no violations")),
        ]);
        let report = driver.run_all("pmak-1", "col-1", Some("api-7"), false).await.unwrap();

        assert_eq!(
            report,
            CliReport {
                installed: true,
                run_output: "run: 19 requests".to_string(),
                lint_output: Some("no violations".to_string()),
            }
        );
        assert_eq!(
            driver.runner().invocations(),
            vec![
                ("sh".to_string(), args(&["-c", INSTALL_SCRIPT, "sh", "https://example.test/install.sh"])),
                ("postman".to_string(), args(&["login", "--with-api-key", "pmak-1"])),
                ("postman".to_string(), args(&["collection", "run", "col-1"])),
                ("postman".to_string(), args(&["api", "lint", "api-7"])),
            ]
        );
    }

    #[tokio::test]
    async fn failed_login_stops_run_and_lint() {
        let driver = driver(vec![
            Ok(CommandOutput::ok("installed")),
            Ok(CommandOutput::failed(1, "Invalid API key\n")),
        ]);
        let err = driver.run_all("bad", "col-1", Some("api-7"), false).await.unwrap_err();

        match err {
            BuildError::Process { step, code, message } => {
                assert_eq!(step, CliStep::Login);
                assert_eq!(code, Some(1));
                assert_eq!(message, "Invalid API key");
            }
            other => panic!("unexpected error: {}", other),
        }
        assert_eq!(driver.runner().invocations().len(), 2);
    }

    #[tokio::test]
    async fn spawn_failure_on_install_stops_everything() {
        let driver = driver(vec![Err(io::Error::new(io::ErrorKind::NotFound, "sh not found"))]);
        let err = driver.run_all("k", "col-1", None, false).await.unwrap_err();
        assert!(matches!(err, BuildError::Spawn { step: CliStep::Install, .. }));
        assert_eq!(driver.runner().invocations().len(), 1);
    }

    #[tokio::test]
    async fn failed_run_skips_lint() {
        let driver = driver(vec![
            Ok(CommandOutput::ok("")),
            Ok(CommandOutput::ok("")),
            Ok(CommandOutput::failed(1, "assertion failed")),
        ]);
        let err = driver.run_all("k", "col-1", Some("api-7"), false).await.unwrap_err();
        assert!(matches!(err, BuildError::Process { step: CliStep::Run, .. }));
        assert_eq!(driver.runner().invocations().len(), 3);
    }

    #[tokio::test]
    async fn failed_lint_leaves_no_lint_output() {
        let driver = driver(vec![
            Ok(CommandOutput::ok("")),
            Ok(CommandOutput::ok("")),
            Ok(CommandOutput::ok("ran")),
            Ok(CommandOutput::failed(1, "3 errors found")),
        ]);
        let err = driver.run_all("k", "col-1", Some("api-7"), false).await.unwrap_err();

        match err {
            BuildError::Process { step, code, message } => {
                assert_eq!(step, CliStep::Lint);
                assert_eq!(code, Some(1));
                assert_eq!(message, "3 errors found");
            }
            other => panic!("unexpected error: {}", other),
        }
        assert_eq!(driver.runner().invocations().len(), 4);
    }

    #[tokio::test]
    async fn installer_url_is_never_part_of_the_script() {
        let hostile = "https://example.test/\"; touch /tmp/pwned; echo \"$(id)";
        let driver = CliDriver::new(ScriptedRunner::default(), "postman", hostile);
        driver.install().await.unwrap();

        let (program, argv) = driver.runner().invocations().remove(0);
        assert_eq!(program, "sh");
        assert_eq!(argv, args(&["-c", INSTALL_SCRIPT, "sh", hostile]));
    }

    #[tokio::test]
    async fn stderr_on_success_does_not_stall() {
        let mut noisy = CommandOutput::ok("done");
        noisy.stderr = "npm WARN deprecated".to_string();
        let driver = driver(vec![Ok(noisy)]);
        assert_eq!(driver.install().await.unwrap(), "done");
    }

    #[tokio::test]
    async fn optional_steps_can_be_left_out() {
        let driver = driver(vec![Ok(CommandOutput::ok("")), Ok(CommandOutput::ok("ran"))]);
        let report = driver.run_all("k", "col-1", None, true).await.unwrap();

        assert!(!report.installed);
        assert_eq!(report.run_output, "ran");
        assert!(report.lint_output.is_none());
        let programs: Vec<String> = driver.runner().invocations().into_iter().map(|(_, a)| a[0].clone()).collect();
        assert_eq!(programs, vec!["login", "collection"]);
    }
}
