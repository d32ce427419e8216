use reqwest::StatusCode;

/// Failure talking to the device.
///
/// A semantically negative response (`{"ok":false}`) is not an error at
/// this level; it decodes successfully and is left to the caller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("invalid device url: {0}")]
	Url(#[from] url::ParseError),

	#[error("request failed: {0}")]
	Transport(#[from] reqwest::Error),

	#[error("device responded with status {0}")]
	Status(StatusCode),

	#[error("malformed response body: {0}")]
	Decode(#[from] serde_json::Error),
}
