use serde::{Deserialize, Serialize};

/// Acknowledgement returned by every state-changing endpoint.
///
/// `{"ok":true}` on success. Rejected requests carry a short error code,
/// e.g. `{"ok":false,"error":"missing_params"}`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Ack {
	pub ok: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}

impl Ack {
	pub fn ok() -> Self {
		Self {
			ok: true,
			error: None,
		}
	}

	pub fn rejected(error: impl Into<String>) -> Self {
		Self {
			ok: false,
			error: Some(error.into()),
		}
	}
}
