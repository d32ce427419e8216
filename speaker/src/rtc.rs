use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, UtcOffset};

/// Snapshot returned by `GET /rtc/now`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct RtcNow {
	pub ok: bool,
	/// Seconds since the epoch, UTC.
	#[serde(default)]
	pub epoch_utc: Option<f64>,
	/// POSIX TZ string configured on the device, e.g. `CET-1CEST,M3.5.0,M10.5.0/3`.
	#[serde(default)]
	pub tz: Option<String>,
}

impl RtcNow {
	/// The clock value in whole milliseconds, or `None` if the snapshot is
	/// negative (`ok:false`) or carries no usable epoch.
	pub fn epoch_millis(&self) -> Option<i64> {
		if !self.ok {
			return None;
		}
		let millis = (self.epoch_utc? * 1000.0).trunc();
		if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
			return None;
		}
		Some(millis as i64)
	}
}

/// Form body of `POST /rtc/set`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct RtcSet {
	/// Milliseconds since the epoch, UTC.
	pub epoch_ms: i64,
	/// Minutes to add to local time to reach UTC (positive west of Greenwich).
	pub tz_offset_min: i32,
}

impl RtcSet {
	pub fn new(now: OffsetDateTime, local_offset: UtcOffset) -> Self {
		let epoch_ms = (now.unix_timestamp_nanos() / 1_000_000) as i64;
		Self {
			epoch_ms,
			tz_offset_min: -i32::from(local_offset.whole_minutes()),
		}
	}
}

/// Skew between two clocks in whole seconds, rounded half up.
pub fn time_difference_secs(browser_ms: i64, rtc_ms: i64) -> i64 {
	let diff = (browser_ms as f64 - rtc_ms as f64) / 1000.0;
	(diff + 0.5).floor() as i64
}

pub fn display_time_difference(secs: i64) -> String {
	format!("{secs} s")
}
