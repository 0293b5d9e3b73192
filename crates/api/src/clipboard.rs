//! System clipboard access.

use crate::{ApiResult, TermuxApi};

/// Reads and writes the system clipboard.
pub struct Clipboard<'a> {
    pub(crate) api: &'a TermuxApi,
}

impl Clipboard<'_> {
    /// Current clipboard text.
    pub async fn get(&self) -> ApiResult<String> {
        self.api
            .run(self.api.command("termux-clipboard-get"))
            .await
    }

    /// Replace the clipboard text.
    ///
    /// The text travels as a single argument token; no quoting or shell
    /// escaping applies.
    pub async fn set(&self, text: &str) -> ApiResult<()> {
        self.api
            .run(self.api.command("termux-clipboard-set").arg(text))
            .await?;
        Ok(())
    }
}
