mod ack;
pub use ack::Ack;

// Battery telemetry
//
pub mod battery;
pub use battery::BatteryReading;

mod language;
pub use language::{Language, LanguageSet, LanguageStatus, UnknownLanguageLiteral};

// Real-time clock snapshots and updates
//
pub mod rtc;
pub use rtc::{RtcNow, RtcSet};

pub mod setup;

pub mod tz;
pub use tz::TzLabels;

mod wifi;
pub use wifi::{WifiMode, WifiStatus};

use time::{format_description::FormatItem, OffsetDateTime};

/// Placeholder shown for any value that could not be fetched or derived.
pub const PLACEHOLDER: &str = "--";

/// Date-string format used by the panel for clock values.
///
/// Mirrors an ISO-8601 timestamp with the `T` replaced by a space and the
/// zone marker dropped, e.g. `2024-03-31 01:59:59.250`.
pub const DATETIME_FORMAT: &[FormatItem<'_>] = time::macros::format_description!(
	"[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]"
);

/// Renders a datetime in UTC with [`DATETIME_FORMAT`].
pub fn format_datetime(dt: OffsetDateTime) -> Result<String, time::error::Format> {
	dt.to_offset(time::UtcOffset::UTC).format(DATETIME_FORMAT)
}

/// Converts milliseconds since the epoch to a datetime, or `None` if the
/// value is outside the representable range.
pub fn datetime_from_millis(millis: i64) -> Option<OffsetDateTime> {
	OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000).ok()
}

#[cfg(test)]
mod tests {
	use super::{datetime_from_millis, format_datetime};

	#[test]
	fn formats_with_space_separator_and_millis() {
		let dt = datetime_from_millis(1_000_000).unwrap();
		assert_eq!(format_datetime(dt).unwrap(), "1970-01-01 00:16:40.000");

		let dt = datetime_from_millis(1_711_850_399_250).unwrap();
		assert_eq!(format_datetime(dt).unwrap(), "2024-03-31 01:59:59.250");
	}

	#[test]
	fn formats_in_utc_regardless_of_offset() {
		let dt = datetime_from_millis(0)
			.unwrap()
			.to_offset(time::macros::offset!(+2));
		assert_eq!(format_datetime(dt).unwrap(), "1970-01-01 00:00:00.000");
	}

	#[test]
	fn rejects_out_of_range_millis() {
		assert!(datetime_from_millis(i64::MAX).is_none());
	}
}
