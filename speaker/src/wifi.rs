use serde::{Deserialize, Serialize};
use std::fmt;

/// Radio mode reported by `GET /wifi/status`.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WifiMode {
	/// Connected to an access point.
	Sta,
	/// Running the setup access point.
	Ap,
	Idle,
	#[default]
	#[serde(other)]
	Unknown,
}

impl WifiMode {
	pub fn is_connected(&self) -> bool {
		matches!(self, Self::Sta)
	}
}

impl fmt::Display for WifiMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let s = match self {
			Self::Sta => "sta",
			Self::Ap => "ap",
			Self::Idle => "idle",
			Self::Unknown => "unknown",
		};
		f.write_str(s)
	}
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct WifiStatus {
	#[serde(default)]
	pub mode: WifiMode,
}

#[cfg(test)]
mod tests {
	use super::{WifiMode, WifiStatus};

	#[test]
	fn known_modes() {
		let status: WifiStatus = serde_json::from_str(r#"{"mode":"sta"}"#).unwrap();
		assert!(status.mode.is_connected());

		let status: WifiStatus = serde_json::from_str(r#"{"mode":"ap"}"#).unwrap();
		assert_eq!(status.mode, WifiMode::Ap);
		assert!(!status.mode.is_connected());
	}

	#[test]
	fn unexpected_modes_are_not_connected() {
		let status: WifiStatus = serde_json::from_str(r#"{"mode":"mesh"}"#).unwrap();
		assert_eq!(status.mode, WifiMode::Unknown);

		let status: WifiStatus = serde_json::from_str("{}").unwrap();
		assert!(!status.mode.is_connected());
	}
}
