use crate::view::Control;
use speaker::Language;
use std::{fmt, str::FromStr};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Split};

/// A user action on the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
	WifiStart,
	WifiClear,
	RtcSet,
	Lang(Language),
}

impl Button {
	/// The control the button is bound to.
	pub fn control(&self) -> Control {
		match self {
			Self::WifiStart => Control::WifiStart,
			Self::WifiClear => Control::WifiClear,
			Self::RtcSet => Control::RtcStart,
			Self::Lang(Language::De) => Control::LangDe,
			Self::Lang(Language::En) => Control::LangEn,
		}
	}
}

impl fmt::Display for Button {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::WifiStart => f.write_str("wifi start"),
			Self::WifiClear => f.write_str("wifi clear"),
			Self::RtcSet => f.write_str("rtc set"),
			Self::Lang(lang) => write!(f, "lang {}", lang.as_str().to_ascii_lowercase()),
		}
	}
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownCommand(String);

impl fmt::Display for UnknownCommand {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let Self(command) = self;
		write!(
			f,
			"unknown command '{command}', expected one of: wifi start, wifi clear, rtc set, lang de, lang en"
		)
	}
}

impl std::error::Error for UnknownCommand {}

impl FromStr for Button {
	type Err = UnknownCommand;

	/// Parses commands such as `wifi start` or `LANG de`.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let words: Vec<String> = s
			.split_whitespace()
			.map(|word| word.to_ascii_lowercase())
			.collect();
		let words: Vec<&str> = words.iter().map(String::as_str).collect();

		match words.as_slice() {
			["wifi", "start"] => Ok(Self::WifiStart),
			["wifi", "clear"] => Ok(Self::WifiClear),
			["rtc", "set"] => Ok(Self::RtcSet),
			["lang", lang] => Language::try_from(*lang)
				.map(Self::Lang)
				.map_err(|_| UnknownCommand(s.trim().into())),
			_ => Err(UnknownCommand(s.trim().into())),
		}
	}
}

/// Button commands read line by line from a text stream.
///
/// Blank lines, unknown commands and lines that are not valid UTF-8 are
/// skipped with a warning.
pub struct Commands<R> {
	lines: Split<R>,
}

impl<R: AsyncBufRead + Unpin> Commands<R> {
	pub fn new(reader: R) -> Self {
		Self {
			lines: reader.split(b'\n'),
		}
	}

	/// Returns the next button, or `None` once the input ends or cannot be
	/// read any more.
	pub async fn next(&mut self) -> Option<Button> {
		loop {
			let line = match self.lines.next_segment().await {
				Ok(Some(line)) => line,
				Ok(None) => return None,
				Err(error) => {
					tracing::warn!("error reading commands: {error}");
					return None;
				}
			};

			let Ok(line) = std::str::from_utf8(&line) else {
				tracing::warn!("ignoring command that is not valid UTF-8: {line:?}");
				continue;
			};
			if line.trim().is_empty() {
				continue;
			}

			match line.parse() {
				Ok(button) => return Some(button),
				Err(error) => tracing::warn!("{error}"),
			}
		}
	}
}
