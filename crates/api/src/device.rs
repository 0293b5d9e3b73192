//! Device hardware - battery, camera, brightness, fingerprint, sensors.

use serde_json::Value;

use crate::{ApiResult, CommandStream, ExecError, TermuxApi};

/// Screen brightness target.
///
/// The level is a `u8`, so the 0-255 range termux-brightness accepts
/// holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Brightness {
    Auto,
    Level(u8),
}

impl Brightness {
    fn to_arg(self) -> String {
        match self {
            Brightness::Auto => "auto".to_string(),
            Brightness::Level(value) => value.to_string(),
        }
    }
}

/// Queries and controls device hardware.
pub struct Device<'a> {
    pub(crate) api: &'a TermuxApi,
}

impl Device<'_> {
    /// Battery status as reported by `termux-battery-status`.
    pub async fn battery_status(&self) -> ApiResult<Value> {
        self.api
            .run_json(self.api.command("termux-battery-status"))
            .await
    }

    /// Information about the device cameras.
    pub async fn camera_info(&self) -> ApiResult<Value> {
        self.api
            .run_json(self.api.command("termux-camera-info"))
            .await
    }

    /// Take a JPEG photo with the given camera and save it to `path`.
    pub async fn camera_photo(&self, camera_id: u32, path: &str) -> ApiResult<()> {
        self.api
            .run(
                self.api
                    .command("termux-camera-photo")
                    .args(["-c", &camera_id.to_string(), path]),
            )
            .await?;
        Ok(())
    }

    /// Set the screen brightness.
    pub async fn brightness(&self, value: Brightness) -> ApiResult<()> {
        self.api
            .run(self.api.command("termux-brightness").arg(value.to_arg()))
            .await?;
        Ok(())
    }

    /// Check for fingerprint authentication.
    pub async fn fingerprint(&self) -> ApiResult<Value> {
        self.api
            .run_json(self.api.command("termux-fingerprint"))
            .await
    }

    /// List the available sensor types.
    pub async fn sensor_list(&self) -> ApiResult<Value> {
        self.api
            .run_json(self.api.command("termux-sensor").arg("-l"))
            .await
    }

    /// Continuously poll the named sensors, one JSON document per chunk
    /// every `delay_ms` milliseconds.
    ///
    /// The underlying command runs until the stream is cancelled.
    pub fn sensor_updates(&self, sensors: &[&str], delay_ms: u32) -> ApiResult<CommandStream> {
        if sensors.is_empty() {
            return Err(ExecError::InvalidArgument(
                "at least one sensor is required".to_string(),
            ));
        }
        self.api.stream(
            self.api
                .command("termux-sensor")
                .args(["-s", &sensors.join(","), "-d", &delay_ms.to_string()]),
        )
    }
}
