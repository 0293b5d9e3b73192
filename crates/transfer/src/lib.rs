//! HTTP download collaborator for the capability layer.
//!
//! Covers the same ground as the `termux-download` flow without going
//! through a tool: fetch a URL and persist the bytes under a target
//! directory, deriving the file extension from the response Content-Type.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server responded with status {0}")]
    Status(u16),

    #[error("Failed to write file: {0}")]
    Io(#[from] std::io::Error),
}

/// Where a downloaded file ended up.
#[derive(Debug, Clone, Serialize)]
pub struct DownloadReport {
    pub path: PathBuf,
}

/// Fetch `url` and save it under `dir` as `<stem>.<ext>`.
///
/// `stem` is `filename` with any extension stripped; the extension comes
/// from the Content-Type subtype, falling back to `bin` when the server
/// sends none.
pub async fn download(
    url: &str,
    filename: &str,
    dir: &Path,
) -> Result<DownloadReport, TransferError> {
    let response = reqwest::get(url).await?;
    if !response.status().is_success() {
        return Err(TransferError::Status(response.status().as_u16()));
    }

    let extension = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(extension_for)
        .unwrap_or_else(|| "bin".to_string());

    let bytes = response.bytes().await?;
    let path = dir.join(format!("{}.{}", stem(filename), extension));
    tokio::fs::write(&path, &bytes).await?;
    tracing::debug!("saved {} bytes to {}", bytes.len(), path.display());

    Ok(DownloadReport { path })
}

/// File extension for a Content-Type header value.
fn extension_for(content_type: &str) -> String {
    let subtype = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .split('/')
        .nth(1)
        .unwrap_or("")
        .trim();
    if subtype.is_empty() {
        "bin".to_string()
    } else {
        subtype.to_string()
    }
}

/// Caller-supplied filename with any extension stripped.
fn stem(filename: &str) -> &str {
    match filename.split_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => filename,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_comes_from_content_type_subtype() {
        assert_eq!(extension_for("image/jpeg"), "jpeg");
        assert_eq!(extension_for("text/html; charset=utf-8"), "html");
        assert_eq!(extension_for("application/json"), "json");
    }

    #[test]
    fn unparseable_content_type_falls_back_to_bin() {
        assert_eq!(extension_for("weird"), "bin");
        assert_eq!(extension_for(""), "bin");
        assert_eq!(extension_for("image/"), "bin");
    }

    #[test]
    fn stem_strips_any_extension() {
        assert_eq!(stem("photo_2022"), "photo_2022");
        assert_eq!(stem("photo.jpeg"), "photo");
        assert_eq!(stem("archive.tar.gz"), "archive");
        assert_eq!(stem(".hidden"), ".hidden");
    }
}
