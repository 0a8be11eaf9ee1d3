/*!
 * Error types for the caption-seek application.
 *
 * The caption pipeline reports every failure as a typed `CaptionError` so the
 * caller can tell "no captions on this video" apart from "the network is down".
 * Transport failures keep their own `FetchError` type and are wrapped unchanged.
 */

use thiserror::Error;

/// Errors raised by the page/payload retrieval boundary
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be built or sent
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The server answered with a non-success status
    #[error("Server responded with status {status_code} for {url}")]
    HttpStatus {
        /// HTTP status code
        status_code: u16,
        /// Requested URL
        url: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The request exceeded the client timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// A URL handed to the fetcher could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout(error.to_string())
        } else if error.is_connect() {
            Self::ConnectionError(error.to_string())
        } else if let Some(status) = error.status() {
            Self::HttpStatus {
                status_code: status.as_u16(),
                url: error.url().map(|u| u.to_string()).unwrap_or_default(),
            }
        } else {
            Self::RequestFailed(error.to_string())
        }
    }
}

/// Errors produced while extracting captions for a page
#[derive(Error, Debug)]
pub enum CaptionError {
    /// Input is neither an 11-character id nor a recognised watch URL
    #[error("Unable to retrieve a video id from '{0}'")]
    InvalidIdentifier(String),

    /// The page carries no caption manifest marker
    #[error("Captions are unavailable for this video")]
    CaptionsUnavailable,

    /// The embedded manifest fragment is not valid JSON
    #[error("Failed to parse captions data: {0}")]
    ManifestParseError(String),

    /// A manifest exists but lists no caption tracks
    #[error("Captions are unavailable or disabled for this video")]
    CaptionsDisabled,

    /// An in-page track snapshot could not be read
    #[error("Invalid track snapshot: {0}")]
    Snapshot(String),

    /// Transport failure, surfaced unchanged
    #[error("Transport error: {0}")]
    Transport(#[from] FetchError),
}

impl CaptionError {
    /// Stable name of the error kind, used for diagnostics at the boundary
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidIdentifier(_) => "InvalidIdentifier",
            Self::CaptionsUnavailable => "CaptionsUnavailable",
            Self::ManifestParseError(_) => "ManifestParseError",
            Self::CaptionsDisabled => "CaptionsDisabled",
            Self::Snapshot(_) => "Snapshot",
            Self::Transport(_) => "Transport",
        }
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration could not be loaded or is invalid
    #[error("Config error: {0}")]
    Config(String),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the caption pipeline
    #[error("Caption error: {0}")]
    Caption(#[from] CaptionError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
