//! Call log and contacts.

use serde_json::Value;

use crate::{ApiResult, TermuxApi};

/// Telephony records.
pub struct Telephony<'a> {
    pub(crate) api: &'a TermuxApi,
}

impl Telephony<'_> {
    /// The most recent `limit` call log entries.
    pub async fn call_log(&self, limit: u32) -> ApiResult<Value> {
        self.api
            .run_json(
                self.api
                    .command("termux-call-log")
                    .args(["-l", &limit.to_string()]),
            )
            .await
    }

    /// All contacts.
    pub async fn contact_list(&self) -> ApiResult<Value> {
        self.api
            .run_json(self.api.command("termux-contact-list"))
            .await
    }
}
