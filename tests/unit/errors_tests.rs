/*!
 * Tests for error types and conversions
 */

use caption_seek::errors::{AppError, CaptionError, FetchError};

#[test]
fn test_captionError_kind_shouldNameEachVariant() {
    assert_eq!(CaptionError::InvalidIdentifier("x".to_string()).kind(), "InvalidIdentifier");
    assert_eq!(CaptionError::CaptionsUnavailable.kind(), "CaptionsUnavailable");
    assert_eq!(CaptionError::ManifestParseError("eof".to_string()).kind(), "ManifestParseError");
    assert_eq!(CaptionError::CaptionsDisabled.kind(), "CaptionsDisabled");
    assert_eq!(CaptionError::Snapshot("bad".to_string()).kind(), "Snapshot");
    assert_eq!(CaptionError::Transport(FetchError::Timeout("t".to_string())).kind(), "Transport");
}

#[test]
fn test_captionError_invalidIdentifier_shouldIncludeInput() {
    let display = CaptionError::InvalidIdentifier("not-a-url".to_string()).to_string();
    assert!(display.contains("not-a-url"));
}

#[test]
fn test_fetchError_httpStatus_shouldDisplayStatusAndUrl() {
    let error = FetchError::HttpStatus {
        status_code: 429,
        url: "https://example.test/page".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("429"));
    assert!(display.contains("https://example.test/page"));
}

#[test]
fn test_captionError_fromFetchError_shouldWrapUnchanged() {
    let error: CaptionError = FetchError::ConnectionError("Host unreachable".to_string()).into();
    assert!(matches!(error, CaptionError::Transport(FetchError::ConnectionError(ref m)) if m == "Host unreachable"));
    assert!(error.to_string().contains("Host unreachable"));
}

#[test]
fn test_appError_fromCaptionError_shouldWrapCorrectly() {
    let app_error: AppError = CaptionError::CaptionsDisabled.into();
    let display = format!("{}", app_error);
    assert!(display.contains("Caption error"));
    assert!(display.contains("disabled"));
}

#[test]
fn test_appError_fromIoError_shouldWrapAsFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
    let app_error: AppError = io_error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("File error"));
    assert!(display.contains("File not found"));
}

#[test]
fn test_appError_fromAnyhow_shouldWrapAsUnknown() {
    let app_error: AppError = anyhow::anyhow!("something odd").into();
    assert!(matches!(app_error, AppError::Unknown(ref m) if m == "something odd"));
}
