use thiserror::Error;

/// Failures the capability layer can surface.
///
/// Process failures ([`NotFound`](ExecError::NotFound),
/// [`Spawn`](ExecError::Spawn), [`Exit`](ExecError::Exit)) and output
/// failures ([`Decode`](ExecError::Decode)) are deliberately separate
/// variants so callers can tell "the tool failed" from "the tool worked
/// but returned unexpected text".
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("Command not found: {0}")]
    NotFound(String),

    #[error("Failed to spawn process: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("{program} exited with code {code:?}: {stderr}")]
    Exit {
        program: String,
        /// Exit code, or `None` when the process was killed by a signal.
        code: Option<i32>,
        stderr: String,
    },

    #[error("Invalid JSON output: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
