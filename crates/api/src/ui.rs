//! User-facing surfaces - dialogs, notifications, sharing.

use serde_json::Value;

use crate::{ApiResult, ExecError, TermuxApi};

/// Options for `termux-dialog`.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct DialogOptions {
    /// Placeholder text shown in the input field.
    pub hint: String,
    /// Dialog title.
    pub title: String,
    /// Accept multiple lines of input.
    pub multiline: bool,
    /// Numeric keyboard input.
    pub numeric: bool,
    /// Hide the input as a password.
    pub password: bool,
}

/// Which action the share sheet should perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareAction {
    Edit,
    Send,
    View,
}

impl ShareAction {
    fn as_arg(self) -> &'static str {
        match self {
            ShareAction::Edit => "edit",
            ShareAction::Send => "send",
            ShareAction::View => "view",
        }
    }
}

/// Dialogs, notifications, and the share sheet.
pub struct Ui<'a> {
    pub(crate) api: &'a TermuxApi,
}

impl Ui<'_> {
    /// Show an input dialog and return the user's response.
    ///
    /// `multiline` and `numeric` are mutually exclusive in termux-dialog;
    /// requesting both is rejected before anything is spawned.
    pub async fn dialog(&self, options: &DialogOptions) -> ApiResult<Value> {
        if options.multiline && options.numeric {
            return Err(ExecError::InvalidArgument(
                "dialog cannot be both multiline and numeric".to_string(),
            ));
        }

        let mut command = self
            .api
            .command("termux-dialog")
            .args(["-i", &options.hint, "-t", &options.title]);
        if options.multiline {
            command = command.arg("-m");
        }
        if options.numeric {
            command = command.arg("-n");
        }
        if options.password {
            command = command.arg("-p");
        }
        self.api.run_json(command).await
    }

    /// Display a system notification.
    ///
    /// Reusing an `id` replaces the notification previously shown with it.
    pub async fn notification(&self, title: &str, text: &str, id: &str) -> ApiResult<()> {
        self.api
            .run(
                self.api
                    .command("termux-notification")
                    .args(["-t", title, "-c", text, "-i", id]),
            )
            .await?;
        Ok(())
    }

    /// Remove a notification previously shown with the given id.
    pub async fn notification_remove(&self, id: &str) -> ApiResult<()> {
        self.api
            .run(self.api.command("termux-notification-remove").arg(id))
            .await?;
        Ok(())
    }

    /// Open the share sheet for a file.
    pub async fn share(&self, action: ShareAction, path: &str) -> ApiResult<()> {
        self.api
            .run(
                self.api
                    .command("termux-share")
                    .args(["-a", action.as_arg(), path]),
            )
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn dialog_rejects_multiline_numeric_combo() {
        let api = TermuxApi::new();
        let options = DialogOptions {
            multiline: true,
            numeric: true,
            ..Default::default()
        };
        let result = api.ui().dialog(&options).await;
        assert!(matches!(result, Err(ExecError::InvalidArgument(_))));
    }

    #[test]
    fn share_action_maps_to_tool_argument() {
        assert_eq!(ShareAction::Edit.as_arg(), "edit");
        assert_eq!(ShareAction::Send.as_arg(), "send");
        assert_eq!(ShareAction::View.as_arg(), "view");
    }
}
