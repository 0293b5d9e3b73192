//! Process execution core for the termux-bridge capability layer.
//!
//! One primitive, two delivery modes: [`CommandExecutor::run`] awaits a
//! command to completion and returns its stdout, [`CommandExecutor::stream`]
//! hands back a [`CommandStream`] of stdout lines for commands that run
//! until cancelled.

pub mod command;
pub mod command_executor;
pub mod error;
pub mod stream;

pub use command::ApiCommand;
pub use command_executor::CommandExecutor;
pub use error::ExecError;
pub use stream::CommandStream;
