//! Invocation requests - a program plus its argument tokens.

use std::fmt;

/// A fully formed invocation request.
///
/// Arguments are always carried as separate tokens and handed to the OS
/// as an argument vector, never spliced into a shell string, so
/// caller-supplied values cannot change the shape of the command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiCommand {
    program: String,
    args: Vec<String>,
}

impl ApiCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument token.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several argument tokens.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn argv(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for ApiCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
