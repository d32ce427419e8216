use serde::Deserialize;
use std::time::Duration;
use url::Url;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
	#[serde(default)]
	pub device: DeviceConfig,
	#[serde(default)]
	pub polling: PollingConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct DeviceConfig {
	/// Base URL of the speaker, e.g. `http://192.168.4.1/`.
	pub host: Option<Url>,
	/// Per-request timeout. Requests never time out when unset.
	pub request_timeout_ms: Option<u64>,
}

impl DeviceConfig {
	pub fn request_timeout(&self) -> Option<Duration> {
		self.request_timeout_ms.map(Duration::from_millis)
	}
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct PollingConfig {
	#[serde(default = "default_status_period_ms")]
	pub wifi_ms: u64,
	#[serde(default = "default_status_period_ms")]
	pub rtc_ms: u64,
	#[serde(default = "default_status_period_ms")]
	pub battery_ms: u64,
	#[serde(default = "default_language_period_ms")]
	pub language_ms: u64,
	#[serde(default)]
	pub overlap: Overlap,
}

fn default_status_period_ms() -> u64 {
	5000
}

fn default_language_period_ms() -> u64 {
	10000
}

impl Default for PollingConfig {
	fn default() -> Self {
		Self {
			wifi_ms: default_status_period_ms(),
			rtc_ms: default_status_period_ms(),
			battery_ms: default_status_period_ms(),
			language_ms: default_language_period_ms(),
			overlap: Overlap::default(),
		}
	}
}

impl PollingConfig {
	/// Returns the name of the first poller configured with a zero period.
	pub fn zero_period(&self) -> Option<&'static str> {
		[
			("wifi_ms", self.wifi_ms),
			("rtc_ms", self.rtc_ms),
			("battery_ms", self.battery_ms),
			("language_ms", self.language_ms),
		]
		.into_iter()
		.find(|(_, ms)| *ms == 0)
		.map(|(name, _)| name)
	}
}

/// What a poller does when its next tick arrives while the previous refresh
/// is still waiting for the device.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Overlap {
	/// Start another refresh anyway. Responses may be applied out of order.
	#[default]
	Allow,
	/// Skip the tick, so at most one refresh per poller is in flight.
	Skip,
}
