//! Typed capability façade over the Termux:API command-line tools.
//!
//! Every method here is a thin wrapper: build an [`ApiCommand`] from typed
//! parameters, hand it to the executor, and optionally decode the output
//! as JSON. The device payloads themselves are passed through opaque as
//! [`serde_json::Value`].
//!
//! Construct one [`TermuxApi`] at your entry point and pass it by
//! reference wherever capability calls are needed:
//!
//! ```no_run
//! use termux_bridge_api::TermuxApi;
//!
//! # async fn demo() -> Result<(), termux_bridge_api::ExecError> {
//! let api = TermuxApi::new();
//! let battery = api.device().battery_status().await?;
//! println!("{battery}");
//! # Ok(())
//! # }
//! ```

pub mod clipboard;
pub mod device;
pub mod location;
pub mod media;
pub mod telephony;
pub mod ui;

use std::path::PathBuf;

use serde_json::Value;

pub use termux_bridge_executor::{ApiCommand, CommandExecutor, CommandStream, ExecError};

pub type ApiResult<T> = Result<T, ExecError>;

/// Entry point to the capability catalog.
///
/// Each capability group is reached through an accessor
/// ([`device`](Self::device), [`clipboard`](Self::clipboard), ...); the
/// groups borrow the façade, so one `TermuxApi` serves any number of
/// concurrent calls.
pub struct TermuxApi {
    executor: CommandExecutor,
    bin_dir: Option<PathBuf>,
}

impl TermuxApi {
    /// Resolve the `termux-*` tools on the search path.
    pub fn new() -> Self {
        Self {
            executor: CommandExecutor::new(),
            bin_dir: None,
        }
    }

    /// Resolve the `termux-*` tools under an explicit directory instead
    /// of the search path.
    pub fn with_bin_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            executor: CommandExecutor::new(),
            bin_dir: Some(dir.into()),
        }
    }

    pub fn media_player(&self) -> media::MediaPlayer<'_> {
        media::MediaPlayer { api: self }
    }

    pub fn microphone(&self) -> media::Microphone<'_> {
        media::Microphone { api: self }
    }

    pub fn device(&self) -> device::Device<'_> {
        device::Device { api: self }
    }

    pub fn clipboard(&self) -> clipboard::Clipboard<'_> {
        clipboard::Clipboard { api: self }
    }

    pub fn telephony(&self) -> telephony::Telephony<'_> {
        telephony::Telephony { api: self }
    }

    pub fn location(&self) -> location::Location<'_> {
        location::Location { api: self }
    }

    pub fn ui(&self) -> ui::Ui<'_> {
        ui::Ui { api: self }
    }

    pub(crate) fn command(&self, tool: &str) -> ApiCommand {
        match &self.bin_dir {
            Some(dir) => ApiCommand::new(dir.join(tool).to_string_lossy()),
            None => ApiCommand::new(tool),
        }
    }

    pub(crate) async fn run(&self, command: ApiCommand) -> ApiResult<String> {
        self.executor.run(&command).await
    }

    pub(crate) async fn run_json(&self, command: ApiCommand) -> ApiResult<Value> {
        let raw = self.executor.run(&command).await?;
        decode_json(&raw)
    }

    pub(crate) fn stream(&self, command: ApiCommand) -> ApiResult<CommandStream> {
        self.executor.stream(&command)
    }
}

impl Default for TermuxApi {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode raw tool output as JSON.
///
/// Failure is [`ExecError::Decode`], never an execution error: the tool
/// ran fine but returned unexpected text.
pub fn decode_json(raw: &str) -> ApiResult<Value> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_json_accepts_valid_document() {
        let value = decode_json(r#"{"a":1}"#).unwrap();
        assert_eq!(value["a"], 1);
    }

    #[test]
    fn decode_json_failure_is_a_decode_error() {
        match decode_json("not json") {
            Err(ExecError::Decode(_)) => {}
            other => panic!("expected Decode error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn bin_dir_prefixes_the_program() {
        let api = TermuxApi::with_bin_dir("/opt/termux/bin");
        let cmd = api.command("termux-battery-status");
        assert_eq!(cmd.program(), "/opt/termux/bin/termux-battery-status");
    }

    #[test]
    fn default_resolution_uses_bare_tool_name() {
        let api = TermuxApi::new();
        assert_eq!(api.command("termux-fingerprint").program(), "termux-fingerprint");
    }
}
