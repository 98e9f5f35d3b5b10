//! `az` command runner
//!
//! Thin wrapper over `std::process::Command`. Failures carry the command and
//! the trimmed stderr so they read well when surfaced to the user.

use std::io::Read;
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::domain::value_objects::CancellationToken;
use crate::error::{ProvisionError, ProvisionResult};

/// Default executable name
pub const DEFAULT_AZ: &str = "az";

const CANCEL_POLL: Duration = Duration::from_millis(100);

/// Runs `az` subcommands
#[derive(Debug, Clone)]
pub struct AzCli {
    program: String,
    leading_args: Vec<String>,
}

impl Default for AzCli {
    fn default() -> Self {
        Self::new(DEFAULT_AZ)
    }
}

impl AzCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            leading_args: Vec::new(),
        }
    }

    /// Parse a configured command line such as `az` or `python -m azure.cli`.
    pub fn from_command_line(command: &str) -> Self {
        let mut parts = command.split_whitespace();
        let program = parts.next().unwrap_or(DEFAULT_AZ);
        Self::new(program).with_leading_args(parts)
    }

    /// Arguments passed before every subcommand
    pub fn with_leading_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.leading_args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run to completion and return stdout.
    pub fn run(&self, args: &[&str]) -> ProvisionResult<String> {
        tracing::debug!(program = %self.program, ?args, "running");
        let output = self
            .command()
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.spawn_error(e))?;

        if !output.status.success() {
            return Err(self.failure(args, &String::from_utf8_lossy(&output.stderr)));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Run and parse stdout as JSON.
    pub fn run_json<T: DeserializeOwned>(&self, args: &[&str]) -> ProvisionResult<T> {
        let stdout = self.run(args)?;
        serde_json::from_str(&stdout).map_err(|e| {
            ProvisionError::Provider(format!(
                "unexpected output from {} {}: {}",
                self.program,
                summary(args),
                e
            ))
        })
    }

    /// Run to completion unless `cancel` trips first, in which case the child
    /// is killed and `Cancelled` is returned.
    pub fn run_cancellable(
        &self,
        args: &[&str],
        cancel: &CancellationToken,
    ) -> ProvisionResult<String> {
        tracing::debug!(program = %self.program, ?args, "running (cancellable)");
        let mut child = self
            .command()
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        // Drain both pipes so a chatty child never blocks on a full buffer
        let stdout = child.stdout.take().map(drain);
        let stderr = child.stderr.take().map(drain);

        let status = loop {
            if cancel.is_cancelled() {
                let _ = child.kill();
                let _ = child.wait();
                tracing::info!(program = %self.program, "cancelled");
                return Err(ProvisionError::Cancelled);
            }
            match child.try_wait()? {
                Some(status) => break status,
                None => thread::sleep(CANCEL_POLL),
            }
        };

        let stdout = collect(stdout);
        let stderr = collect(stderr);
        if !status.success() {
            return Err(self.failure(args, &stderr));
        }
        Ok(stdout)
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.leading_args);
        command
    }

    fn spawn_error(&self, e: std::io::Error) -> ProvisionError {
        if e.kind() == std::io::ErrorKind::NotFound {
            ProvisionError::Provider(format!(
                "{} was not found on PATH; install the Azure CLI or set [azure] cli",
                self.program
            ))
        } else {
            ProvisionError::Provider(format!("starting {}: {}", self.program, e))
        }
    }

    fn failure(&self, args: &[&str], stderr: &str) -> ProvisionError {
        let stderr = stderr.trim();
        let message = if stderr.is_empty() {
            format!("{} {} exited with an error", self.program, summary(args))
        } else {
            stderr.to_string()
        };
        ProvisionError::Provider(message)
    }
}

/// Leading arguments, enough to name the subcommand
fn summary(args: &[&str]) -> String {
    args.iter().take(3).copied().collect::<Vec<_>>().join(" ")
}

fn drain<R: Read + Send + 'static>(mut reader: R) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = reader.read_to_end(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    })
}

fn collect(handle: Option<thread::JoinHandle<String>>) -> String {
    handle
        .and_then(|h| h.join().ok())
        .unwrap_or_default()
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn run_returns_stdout() {
        let sh = AzCli::new("sh");
        let out = sh.run(&["-c", "printf hello"]).unwrap();
        assert_eq!(out, "hello");
    }

    #[test]
    fn failure_carries_stderr() {
        let sh = AzCli::new("sh");
        let err = sh.run(&["-c", "echo 'ERROR: quota' >&2; exit 3"]).unwrap_err();
        assert_eq!(err.to_string(), "ERROR: quota");
    }

    #[test]
    fn run_json_parses_output() {
        let sh = AzCli::new("sh");
        let value: serde_json::Value = sh.run_json(&["-c", "echo '{\"a\": 1}'"]).unwrap();
        assert_eq!(value["a"], 1);
    }

    #[test]
    fn command_line_keeps_leading_args() {
        let sh = AzCli::from_command_line("sh -c");
        assert_eq!(sh.program(), "sh");
        assert_eq!(sh.run(&["printf wrapped"]).unwrap(), "wrapped");
    }

    #[test]
    fn missing_program_is_reported() {
        let err = AzCli::new("provisio-definitely-missing-az")
            .run(&["version"])
            .unwrap_err();
        assert!(err.to_string().contains("was not found on PATH"));
    }

    #[test]
    fn cancellation_kills_the_child() {
        let sh = AzCli::new("sh");
        let cancel = CancellationToken::new();
        let trip = cancel.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(50));
            trip.cancel();
        });

        let started = Instant::now();
        let err = sh.run_cancellable(&["-c", "sleep 30"], &cancel).unwrap_err();

        assert!(matches!(err, ProvisionError::Cancelled));
        assert!(started.elapsed() < Duration::from_secs(10));
    }

    #[test]
    fn cancellable_run_completes_normally() {
        let sh = AzCli::new("sh");
        let out = sh
            .run_cancellable(&["-c", "echo done"], &CancellationToken::new())
            .unwrap();
        assert_eq!(out.trim(), "done");
    }
}
