//! Single-shot and streaming execution of external commands.

use std::io::ErrorKind;
use std::process::Stdio;

use tokio::process::Command;

use crate::command::ApiCommand;
use crate::error::ExecError;
use crate::stream::CommandStream;

/// Runs external commands.
///
/// Holds no state between invocations; every call spawns an independent
/// child with its own pipes, so concurrent invocations never contend.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandExecutor;

impl CommandExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Run a command to completion and return its stdout, trimmed of
    /// leading and trailing whitespace.
    ///
    /// Suspends the calling task until the process exits. No timeout is
    /// imposed; commands expected to run indefinitely belong in
    /// [`stream`](Self::stream).
    pub async fn run(&self, command: &ApiCommand) -> Result<String, ExecError> {
        tracing::debug!("executing: {}", command);

        // kill_on_drop so a caller abandoning the future (timeout wrappers
        // and the like) does not leave the child running.
        let output = Command::new(command.program())
            .args(command.argv())
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| map_spawn_error(command.program(), e))?;

        if output.status.success() {
            return Ok(String::from_utf8_lossy(&output.stdout).trim().to_string());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        tracing::warn!(
            "{} failed with code {:?}: {}",
            command.program(),
            output.status.code(),
            stderr
        );
        Err(ExecError::Exit {
            program: command.program().to_string(),
            code: output.status.code(),
            stderr,
        })
    }

    /// Spawn a command and return a stream of its stdout lines.
    ///
    /// Returns as soon as the process is spawned. The process is not
    /// stopped by the executor; cancel the stream to terminate it.
    pub fn stream(&self, command: &ApiCommand) -> Result<CommandStream, ExecError> {
        CommandStream::spawn(command)
    }
}

pub(crate) fn map_spawn_error(program: &str, err: std::io::Error) -> ExecError {
    if err.kind() == ErrorKind::NotFound {
        ExecError::NotFound(program.to_string())
    } else {
        ExecError::Spawn(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn run_returns_trimmed_stdout() {
        let executor = CommandExecutor::new();
        let out = executor
            .run(&ApiCommand::new("echo").arg("ok"))
            .await
            .unwrap();
        assert_eq!(out, "ok");
    }

    #[tokio::test]
    async fn run_trims_surrounding_whitespace() {
        let executor = CommandExecutor::new();
        let cmd = ApiCommand::new("sh").args(["-c", "printf '  padded  \\n'"]);
        assert_eq!(executor.run(&cmd).await.unwrap(), "padded");
    }

    #[tokio::test]
    async fn nonzero_exit_carries_code_and_stderr() {
        let executor = CommandExecutor::new();
        let cmd = ApiCommand::new("sh").args(["-c", "echo denied >&2; exit 1"]);
        match executor.run(&cmd).await {
            Err(ExecError::Exit {
                program,
                code,
                stderr,
            }) => {
                assert_eq!(program, "sh");
                assert_eq!(code, Some(1));
                assert_eq!(stderr, "denied");
            }
            other => panic!("expected Exit error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn exit_code_is_the_real_one() {
        let executor = CommandExecutor::new();
        let cmd = ApiCommand::new("sh").args(["-c", "exit 7"]);
        match executor.run(&cmd).await {
            Err(ExecError::Exit { code, .. }) => assert_eq!(code, Some(7)),
            other => panic!("expected Exit error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn dropping_an_unfinished_run_kills_the_child() {
        use std::time::Duration;

        let executor = CommandExecutor::new();
        let dir = tempfile::tempdir().unwrap();
        let pid_file = dir.path().join("pid");
        let script = format!("echo $$ > {}; exec sleep 30", pid_file.display());
        let cmd = ApiCommand::new("sh").args(["-c", &script]);

        // Timing out drops the run future mid-flight.
        let result = tokio::time::timeout(Duration::from_millis(500), executor.run(&cmd)).await;
        assert!(result.is_err());

        let pid: u32 = std::fs::read_to_string(&pid_file)
            .unwrap()
            .trim()
            .parse()
            .unwrap();
        assert!(
            process_dead(pid).await,
            "child survived the dropped run future"
        );
    }

    /// True once the process is gone or a reap-pending zombie.
    async fn process_dead(pid: u32) -> bool {
        for _ in 0..100 {
            match std::fs::read_to_string(format!("/proc/{pid}/stat")) {
                Err(_) => return true,
                Ok(stat) => {
                    // The state field follows the parenthesised command name.
                    let state = stat
                        .rsplit_once(')')
                        .and_then(|(_, rest)| rest.trim_start().chars().next());
                    if state == Some('Z') {
                        return true;
                    }
                }
            }
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        }
        false
    }

    #[tokio::test]
    async fn missing_binary_is_not_found() {
        let executor = CommandExecutor::new();
        let result = executor
            .run(&ApiCommand::new("nonexistent-binary-xyz"))
            .await;
        match result {
            Err(ExecError::NotFound(program)) => {
                assert_eq!(program, "nonexistent-binary-xyz");
            }
            other => panic!("expected NotFound, got {:?}", other.map(|_| ())),
        }
    }
}
