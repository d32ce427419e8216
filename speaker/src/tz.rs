//! Splitting of POSIX TZ strings into the labels shown on the panel.
//!
//! A POSIX TZ string looks like `CET-1CEST,M3.5.0,M10.5.0/3`: a standard
//! zone name and UTC offset, an optional daylight-saving zone name, and
//! optional transition rules. The panel only shows the `name±offset` token
//! and the DST name.

use crate::PLACEHOLDER;
use regex::Regex;
use std::sync::LazyLock;

static POSIX_TZ_RE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r"^(?P<std>(?:<[^>]+>|[A-Za-z]{3,})[+-]?\d+(?::\d{1,2}){0,2})(?P<dst><[^>]+>|[A-Za-z]{3,})?",
	)
	.expect("POSIX TZ pattern should compile")
});

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TzLabels {
	/// Standard zone name and offset, e.g. `CET-1`.
	pub tz: String,
	/// Daylight-saving zone name, e.g. `CEST`.
	pub dst: String,
}

impl TzLabels {
	pub fn placeholder() -> Self {
		Self {
			tz: PLACEHOLDER.into(),
			dst: PLACEHOLDER.into(),
		}
	}
}

/// Splits a POSIX TZ string into its timezone and DST labels.
///
/// Missing or empty input gives placeholders for both labels. Input that
/// does not start with a `name±offset` token is shown verbatim as the
/// timezone label.
pub fn split_posix_tz(posix: Option<&str>) -> TzLabels {
	let Some(posix) = posix.filter(|s| !s.is_empty()) else {
		return TzLabels::placeholder();
	};

	let Some(captures) = POSIX_TZ_RE.captures(posix) else {
		return TzLabels {
			tz: posix.into(),
			dst: PLACEHOLDER.into(),
		};
	};

	let tz = captures
		.name("std")
		.map_or(posix, |m| m.as_str())
		.to_string();
	let dst = captures
		.name("dst")
		.map(|m| m.as_str())
		.filter(|s| !s.is_empty())
		.unwrap_or(PLACEHOLDER)
		.to_string();

	TzLabels { tz, dst }
}

#[cfg(test)]
mod tests {
	use super::{split_posix_tz, TzLabels};

	fn labels(tz: &str, dst: &str) -> TzLabels {
		TzLabels {
			tz: tz.into(),
			dst: dst.into(),
		}
	}

	#[test]
	fn dst_label_is_only_the_zone_name() {
		assert_eq!(
			split_posix_tz(Some("CET-1CEST,M3.5.0,M10.5.0/3")),
			labels("CET-1", "CEST")
		);
		assert_eq!(
			split_posix_tz(Some("EST5EDT,M3.2.0,M11.1.0")),
			labels("EST5", "EDT")
		);
		assert_eq!(split_posix_tz(Some("CST6CDT5")), labels("CST6", "CDT"));
	}

	#[test]
	fn zone_without_dst() {
		assert_eq!(split_posix_tz(Some("UTC0")), labels("UTC0", "--"));
		assert_eq!(split_posix_tz(Some("JST-9")), labels("JST-9", "--"));
		assert_eq!(split_posix_tz(Some("IST-5:30")), labels("IST-5:30", "--"));
	}

	#[test]
	fn offset_keeps_every_hour_digit() {
		assert_eq!(split_posix_tz(Some("ABC+123")), labels("ABC+123", "--"));
		assert_eq!(
			split_posix_tz(Some("ABC+123DEF,M3.5.0")),
			labels("ABC+123", "DEF")
		);
	}

	#[test]
	fn quoted_zone_names() {
		assert_eq!(split_posix_tz(Some("<+03>-3")), labels("<+03>-3", "--"));
		assert_eq!(
			split_posix_tz(Some("<-03>3<-02>,M3.5.0/-2,M10.5.0/-1")),
			labels("<-03>3", "<-02>")
		);
	}

	#[test]
	fn missing_or_empty_gives_placeholders() {
		assert_eq!(split_posix_tz(None), labels("--", "--"));
		assert_eq!(split_posix_tz(Some("")), labels("--", "--"));
	}

	#[test]
	fn unrecognised_shape_is_shown_verbatim() {
		assert_eq!(
			split_posix_tz(Some("Europe/Berlin")),
			labels("Europe/Berlin", "--")
		);
		assert_eq!(split_posix_tz(Some("GMT")), labels("GMT", "--"));
	}
}
