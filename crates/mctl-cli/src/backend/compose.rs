//! docker-compose invocation

use std::process::ExitStatus;

use mctl_core::ComposeConfig;
use thiserror::Error;
use tokio::process::Command;

/// Errors from running the compose binary
#[derive(Error, Debug)]
pub enum ComposeError {
    /// `compose.command` is blank
    #[error("compose command is empty")]
    EmptyCommand,

    /// The process could not be started
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The process ran but reported failure
    #[error("`{command}` exited with {status}{}", stderr_suffix(.stderr))]
    Failed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {}", stderr)
    }
}

/// Run `<command> -f <file> ps` and return its stdout.
///
/// `command` may carry leading arguments, e.g. `docker compose`.
pub async fn compose_ps(config: &ComposeConfig) -> Result<String, ComposeError> {
    let mut parts = config.command.split_whitespace();
    let program = parts.next().ok_or(ComposeError::EmptyCommand)?;

    let mut cmd = Command::new(program);
    cmd.args(parts).arg("-f").arg(&config.file).arg("ps");

    tracing::debug!("Running {} -f {:?} ps", config.command, config.file);

    let output = cmd.output().await.map_err(|source| ComposeError::Spawn {
        program: program.to_string(),
        source,
    })?;

    if !output.status.success() {
        return Err(ComposeError::Failed {
            command: config.command.clone(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config(command: &str) -> ComposeConfig {
        ComposeConfig {
            command: command.to_string(),
            file: PathBuf::from("meshery.yaml"),
        }
    }

    #[tokio::test]
    async fn test_compose_ps_empty_command() {
        let err = compose_ps(&config("   ")).await.unwrap_err();
        assert!(matches!(err, ComposeError::EmptyCommand));
    }

    #[tokio::test]
    async fn test_compose_ps_missing_binary() {
        let err = compose_ps(&config("mesheryctl-no-such-compose-binary"))
            .await
            .unwrap_err();

        match err {
            ComposeError::Spawn { program, source } => {
                assert_eq!(program, "mesheryctl-no-such-compose-binary");
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_compose_ps_passes_file_and_subcommand() {
        let out = compose_ps(&config("echo")).await.unwrap();
        assert_eq!(out.trim(), "-f meshery.yaml ps");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_compose_ps_nonzero_exit() {
        let err = compose_ps(&config("false")).await.unwrap_err();
        assert!(matches!(err, ComposeError::Failed { ref command, .. } if command == "false"));
        assert!(err.to_string().ends_with("exit status: 1"), "{err}");
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_display_stderr_suffix() {
        use std::os::unix::process::ExitStatusExt;

        let failed = |stderr: &str| ComposeError::Failed {
            command: "docker-compose".to_string(),
            status: ExitStatus::from_raw(1 << 8),
            stderr: stderr.to_string(),
        };

        assert_eq!(
            failed("").to_string(),
            "`docker-compose` exited with exit status: 1"
        );
        assert_eq!(
            failed("no such service").to_string(),
            "`docker-compose` exited with exit status: 1: no such service"
        );
    }
}
