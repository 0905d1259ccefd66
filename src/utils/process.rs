use {
    crate::error::TaskError,
    anyhow::{Context, Result},
    log::info,
    std::path::Path,
    tokio::process::Command,
};

/// Exit code and captured stdout of a finished subprocess.
#[derive(Debug, Clone)]
pub struct Capture {
    pub code: i32,
    pub stdout: String,
}

/// Seam between the task sequences and the external tools they drive.
///
/// Every invocation declares its working directory explicitly; `None`
/// means the process's own working directory.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Runs a command to completion with inherited stdio. A non-zero
    /// exit status is an error.
    async fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<()>;

    /// Runs a command to completion capturing stdout. The exit code is
    /// returned for the caller to inspect, not turned into an error.
    async fn run_capture(&self, program: &str, args: &[&str], cwd: Option<&Path>)
        -> Result<Capture>;
}

/// [`CommandRunner`] backed by real subprocesses.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<()> {
        let line = command_line(program, args);
        info!("running `{line}`");

        let mut command = Command::new(program);
        command.args(args);
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }
        let status = command
            .status()
            .await
            .with_context(|| format!("failed to run `{line}`"))?;

        if !status.success() {
            let code = status.code().unwrap_or(-1);
            return Err(TaskError::subprocess(format!("`{line}` exited with code {code}")).into());
        }
        Ok(())
    }

    async fn run_capture(
        &self,
        program: &str,
        args: &[&str],
        cwd: Option<&Path>,
    ) -> Result<Capture> {
        let line = command_line(program, args);
        info!("running `{line}` (capturing output)");

        let mut command = Command::new(program);
        command.args(args);
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }
        let output = command
            .output()
            .await
            .with_context(|| format!("failed to run `{line}`"))?;

        Ok(Capture {
            code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}

pub fn command_line(program: &str, args: &[&str]) -> String {
    let mut parts = vec![program];
    parts.extend_from_slice(args);
    parts.join(" ")
}

#[cfg(test)]
pub mod mock {
    use {
        super::*,
        std::{
            collections::HashMap,
            path::PathBuf,
            sync::Mutex,
        },
    };

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Invocation {
        pub line: String,
        pub cwd: Option<PathBuf>,
    }

    /// Test double that records every invocation. Individual command
    /// lines can be primed to exit non-zero or to produce stdout.
    #[derive(Default)]
    pub struct RecordingRunner {
        invocations: Mutex<Vec<Invocation>>,
        exit_codes: Mutex<HashMap<String, i32>>,
        outputs: Mutex<HashMap<String, String>>,
    }

    impl RecordingRunner {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn fail_with(&self, line: &str, code: i32) {
            self.exit_codes
                .lock()
                .unwrap()
                .insert(line.to_string(), code);
        }

        pub fn output_for(&self, line: &str, stdout: &str) {
            self.outputs
                .lock()
                .unwrap()
                .insert(line.to_string(), stdout.to_string());
        }

        pub fn lines(&self) -> Vec<String> {
            self.invocations
                .lock()
                .unwrap()
                .iter()
                .map(|invocation| invocation.line.clone())
                .collect()
        }

        pub fn invocations(&self) -> Vec<Invocation> {
            self.invocations.lock().unwrap().clone()
        }

        fn record(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> String {
            let line = command_line(program, args);
            self.invocations.lock().unwrap().push(Invocation {
                line: line.clone(),
                cwd: cwd.map(Path::to_path_buf),
            });
            line
        }
    }

    impl CommandRunner for RecordingRunner {
        async fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<()> {
            let line = self.record(program, args, cwd);
            match self.exit_codes.lock().unwrap().get(&line) {
                Some(code) => Err(TaskError::subprocess(format!(
                    "`{line}` exited with code {code}"
                ))
                .into()),
                None => Ok(()),
            }
        }

        async fn run_capture(
            &self,
            program: &str,
            args: &[&str],
            cwd: Option<&Path>,
        ) -> Result<Capture> {
            let line = self.record(program, args, cwd);
            let code = self
                .exit_codes
                .lock()
                .unwrap()
                .get(&line)
                .copied()
                .unwrap_or(0);
            let stdout = self
                .outputs
                .lock()
                .unwrap()
                .get(&line)
                .cloned()
                .unwrap_or_default();
            Ok(Capture { code, stdout })
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, pretty_assertions::assert_eq};

    #[test]
    fn test_command_line() {
        assert_eq!(
            command_line("git", &["tag", "-a", "v1.0.0", "-m", "Release v1.0.0"]),
            "git tag -a v1.0.0 -m Release v1.0.0"
        );
        assert_eq!(command_line("cargo", &[]), "cargo");
    }

    #[tokio::test]
    async fn test_system_runner_captures_stdout() {
        let capture = SystemRunner
            .run_capture("echo", &["hello"], None)
            .await
            .unwrap();
        assert_eq!(capture.code, 0);
        assert_eq!(capture.stdout, "hello\n");
    }

    #[tokio::test]
    async fn test_system_runner_reports_nonzero_exit() {
        let err = SystemRunner
            .run("false", &[], None)
            .await
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<TaskError>().unwrap().to_string(),
            "subprocess failure: `false` exited with code 1"
        );
    }

    #[tokio::test]
    async fn test_system_runner_respects_cwd() {
        let temp_dir = tempfile::tempdir().unwrap();
        let capture = SystemRunner
            .run_capture("pwd", &[], Some(temp_dir.path()))
            .await
            .unwrap();
        assert_eq!(capture.code, 0);

        let reported = std::fs::canonicalize(capture.stdout.trim()).unwrap();
        let expected = std::fs::canonicalize(temp_dir.path()).unwrap();
        assert_eq!(reported, expected);
    }
}
