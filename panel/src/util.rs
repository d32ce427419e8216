use time::{OffsetDateTime, UtcOffset};

/// Source of the panel host's own time, shown next to the device clock.
pub trait Clock: Send + Sync + 'static {
	fn now_utc(&self) -> OffsetDateTime;

	/// Offset of the host's local timezone at the current instant.
	fn local_offset(&self) -> UtcOffset;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn now_utc(&self) -> OffsetDateTime {
		OffsetDateTime::now_utc()
	}

	fn local_offset(&self) -> UtcOffset {
		UtcOffset::current_local_offset().unwrap_or_else(|error| {
			tracing::debug!("cannot determine local offset, assuming UTC: {error}");
			UtcOffset::UTC
		})
	}
}

#[inline]
pub fn millis_from_datetime(dt: OffsetDateTime) -> i64 {
	// `OffsetDateTime` spans at most ±9999 years, well inside i64 milliseconds.
	(dt.unix_timestamp_nanos() / 1_000_000) as i64
}
