/*!
 * Tests for error types
 */

use lipi::errors::{AppError, ProviderError};

#[test]
fn test_provider_error_display_shouldDescribeFailure() {
    assert_eq!(
        ProviderError::ConnectionError("refused".to_string()).to_string(),
        "Connection error: refused"
    );
    assert_eq!(ProviderError::EmptyResponse.to_string(), "Backend returned an empty response");
    assert_eq!(
        ProviderError::InvalidConfig("no host".to_string()).to_string(),
        "Invalid backend configuration: no host"
    );
}

#[test]
fn test_app_error_fromIoError_shouldBecomeFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "conf.json missing");
    let error: AppError = io_error.into();
    assert!(matches!(error, AppError::File(ref message) if message.contains("conf.json missing")));
}

#[test]
fn test_app_error_fromSerdeError_shouldBecomeConfigError() {
    let serde_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: AppError = serde_error.into();
    assert!(matches!(error, AppError::Config(_)));
    assert!(error.to_string().starts_with("Configuration error:"));
}

#[test]
fn test_app_error_fromAnyhow_shouldKeepMessage() {
    let error: AppError = anyhow::anyhow!("something odd").into();
    assert_eq!(error.to_string(), "Unknown error: something odd");
}

#[test]
fn test_app_error_fromProviderError_shouldPrefixProvider() {
    let error: AppError = ProviderError::Timeout(15).into();
    assert_eq!(error.to_string(), "Provider error: Request timed out after 15 seconds");
}
