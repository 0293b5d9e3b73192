//! Media playback and microphone recording.

use serde_json::Value;

use crate::{ApiResult, TermuxApi};

/// Controls the system media player through `termux-media-player`.
pub struct MediaPlayer<'a> {
    pub(crate) api: &'a TermuxApi,
}

impl MediaPlayer<'_> {
    /// Current playback information.
    pub async fn info(&self) -> ApiResult<String> {
        self.run("info").await
    }

    /// Resume playback if paused.
    pub async fn play(&self) -> ApiResult<String> {
        self.run("play").await
    }

    /// Play the given media file.
    pub async fn play_file(&self, path: &str) -> ApiResult<String> {
        self.api
            .run(self.api.command("termux-media-player").args(["play", path]))
            .await
    }

    /// Pause playback.
    pub async fn pause(&self) -> ApiResult<String> {
        self.run("pause").await
    }

    /// Quit playback.
    pub async fn stop(&self) -> ApiResult<String> {
        self.run("stop").await
    }

    async fn run(&self, verb: &str) -> ApiResult<String> {
        self.api
            .run(self.api.command("termux-media-player").arg(verb))
            .await
    }
}

/// Records from the device microphone through `termux-microphone-record`.
pub struct Microphone<'a> {
    pub(crate) api: &'a TermuxApi,
}

impl Microphone<'_> {
    /// Start recording to `path`, limited to `limit_secs` seconds
    /// (0 means no limit).
    pub async fn start(&self, path: &str, limit_secs: u32) -> ApiResult<String> {
        self.api
            .run(
                self.api
                    .command("termux-microphone-record")
                    .args(["-f", path, "-l"])
                    .arg(limit_secs.to_string()),
            )
            .await
    }

    /// Stop the current recording.
    pub async fn stop(&self) -> ApiResult<String> {
        self.api
            .run(self.api.command("termux-microphone-record").arg("-q"))
            .await
    }

    /// Information about the current recording.
    pub async fn info(&self) -> ApiResult<Value> {
        self.api
            .run_json(self.api.command("termux-microphone-record").arg("-i"))
            .await
    }
}
