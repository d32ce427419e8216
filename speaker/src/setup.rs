//! Pages served by the device when WiFi setup starts.
//!
//! The device answers `/wifi/start` with a short HTML page telling the user
//! which access point to join and which address to open next.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static MARKUP_RE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"(?is)<head\b.*?</head>|<(?P<inline>/?(?:a|b|i|em|strong|span|code)\b)[^>]*>|<[^>]*>")
		.expect("markup pattern should compile")
});

/// Readable text of an HTML page, with whitespace collapsed.
///
/// The document head is dropped. Inline tags vanish, any other tag separates
/// words.
pub fn page_text(html: &str) -> String {
	let text = MARKUP_RE.replace_all(html, |captures: &Captures<'_>| {
		if captures.name("inline").is_some() {
			""
		} else {
			" "
		}
	});
	text.split_whitespace().collect::<Vec<_>>().join(" ")
}
