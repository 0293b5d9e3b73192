//! Device location queries.

use serde_json::Value;

use crate::{ApiResult, CommandStream, TermuxApi};

/// Which Android location provider to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationProvider {
    Gps,
    Network,
    Passive,
}

impl LocationProvider {
    fn as_arg(self) -> &'static str {
        match self {
            LocationProvider::Gps => "gps",
            LocationProvider::Network => "network",
            LocationProvider::Passive => "passive",
        }
    }
}

/// Terminating request kinds. Continuous updates go through
/// [`Location::updates`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationRequest {
    /// Wait for a fresh fix.
    Once,
    /// Return the most recent cached fix.
    Last,
}

impl LocationRequest {
    fn as_arg(self) -> &'static str {
        match self {
            LocationRequest::Once => "once",
            LocationRequest::Last => "last",
        }
    }
}

/// Location fixes and update streams.
pub struct Location<'a> {
    pub(crate) api: &'a TermuxApi,
}

impl Location<'_> {
    /// Fetch a single location fix.
    ///
    /// GPS fixes require satellite visibility and can take a while; even
    /// a network request is not immediate.
    pub async fn get(
        &self,
        provider: LocationProvider,
        request: LocationRequest,
    ) -> ApiResult<Value> {
        self.api
            .run_json(
                self.api
                    .command("termux-location")
                    .args(["-p", provider.as_arg(), "-r", request.as_arg()]),
            )
            .await
    }

    /// Continuous location updates, one JSON document per chunk.
    ///
    /// The underlying command runs until the stream is cancelled.
    pub fn updates(&self, provider: LocationProvider) -> ApiResult<CommandStream> {
        self.api.stream(
            self.api
                .command("termux-location")
                .args(["-p", provider.as_arg(), "-r", "updates"]),
        )
    }
}
