//! Incremental delivery of a running command's output.

use std::io;
use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tokio::process::{Child, Command};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::command::ApiCommand;
use crate::command_executor::map_spawn_error;
use crate::error::ExecError;

/// An ordered stream of stdout lines from a running command.
///
/// Chunks arrive in exactly the order the process emitted them, decoded
/// lossily like single-shot output, so a line of invalid UTF-8 is still
/// delivered rather than dropped. The stream never stops the process on
/// its own: commands that run indefinitely keep producing chunks until
/// [`cancel`](Self::cancel) is called. Dropping the stream kills the
/// child so an abandoned stream cannot leak a process.
pub struct CommandStream {
    program: String,
    chunks: mpsc::Receiver<Result<String, io::Error>>,
    child: Child,
    stderr_task: Option<JoinHandle<String>>,
    finished: bool,
}

impl CommandStream {
    pub(crate) fn spawn(command: &ApiCommand) -> Result<Self, ExecError> {
        tracing::debug!("streaming: {}", command);

        let mut child = Command::new(command.program())
            .args(command.argv())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| map_spawn_error(command.program(), e))?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| ExecError::Spawn(io::Error::other("stdout pipe missing")))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| ExecError::Spawn(io::Error::other("stderr pipe missing")))?;

        let (tx, chunks) = mpsc::channel(32);
        tokio::spawn(async move {
            let mut reader = BufReader::new(stdout);
            let mut buf = Vec::new();
            loop {
                buf.clear();
                // Read raw bytes so invalid UTF-8 degrades to replacement
                // characters, matching single-shot decoding, instead of
                // ending the stream.
                match reader.read_until(b'\n', &mut buf).await {
                    Ok(0) => break,
                    Ok(_) => {
                        if buf.last() == Some(&b'\n') {
                            buf.pop();
                            if buf.last() == Some(&b'\r') {
                                buf.pop();
                            }
                        }
                        let line = String::from_utf8_lossy(&buf).to_string();
                        if tx.send(Ok(line)).await.is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        let _ = tx.send(Err(e)).await;
                        break;
                    }
                }
            }
        });

        let stderr_task = tokio::spawn(async move {
            let mut buf = Vec::new();
            let mut reader = stderr;
            let _ = reader.read_to_end(&mut buf).await;
            String::from_utf8_lossy(&buf).to_string()
        });

        Ok(Self {
            program: command.program().to_string(),
            chunks,
            child,
            stderr_task: Some(stderr_task),
            finished: false,
        })
    }

    /// Next stdout line, in emission order.
    ///
    /// After stdout closes the child is reaped exactly once: a clean exit
    /// ends the stream with `None`, while a non-zero exit or a kill, even
    /// one that happened before any chunk was produced, yields a final
    /// `Some(Err(..))` so stream failure is never mistaken for a chunk.
    pub async fn next_chunk(&mut self) -> Option<Result<String, ExecError>> {
        if self.finished {
            return None;
        }
        match self.chunks.recv().await {
            Some(Ok(line)) => return Some(Ok(line)),
            Some(Err(e)) => {
                // Pipe read failure; kill and reap so the stream does not
                // end looking clean.
                self.finished = true;
                let _ = self.child.kill().await;
                return Some(Err(ExecError::Spawn(e)));
            }
            None => {}
        }

        self.finished = true;
        match self.child.wait().await {
            Ok(status) if status.success() => None,
            Ok(status) => {
                let stderr = self.drain_stderr().await;
                Some(Err(ExecError::Exit {
                    program: self.program.clone(),
                    code: status.code(),
                    stderr,
                }))
            }
            Err(e) => Some(Err(ExecError::Spawn(e))),
        }
    }

    /// Kill the underlying process and reap it.
    ///
    /// The kill-induced exit status is swallowed; cancellation is not a
    /// failure.
    pub async fn cancel(mut self) -> Result<(), ExecError> {
        if self.finished {
            return Ok(());
        }
        self.child.kill().await.map_err(ExecError::Spawn)?;
        if let Some(task) = self.stderr_task.take() {
            task.abort();
        }
        Ok(())
    }

    async fn drain_stderr(&mut self) -> String {
        match self.stderr_task.take() {
            Some(task) => task.await.unwrap_or_default().trim().to_string(),
            None => String::new(),
        }
    }
}
