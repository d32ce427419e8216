use serde::{Deserialize, Serialize};
use std::{borrow::Cow, fmt, str::FromStr};

/// Language the speaker announces the time in.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
	De,
	En,
}

impl Language {
	/// Code used on the wire.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::De => "DE",
			Self::En => "EN",
		}
	}
}

impl fmt::Display for Language {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug)]
pub struct UnknownLanguageLiteral<'a>(Cow<'a, str>);

impl<'a> fmt::Display for UnknownLanguageLiteral<'a> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let Self(literal) = self;
		write!(f, "Unknown literal for Language: {literal}")
	}
}

impl<'a> std::error::Error for UnknownLanguageLiteral<'a> {}

fn parse(value: &str) -> Option<Language> {
	match value.trim().to_ascii_uppercase().as_str() {
		"DE" => Some(Language::De),
		"EN" => Some(Language::En),
		_ => None,
	}
}

impl<'a> TryFrom<&'a str> for Language {
	type Error = UnknownLanguageLiteral<'a>;
	fn try_from(value: &'a str) -> Result<Self, Self::Error> {
		parse(value).ok_or(UnknownLanguageLiteral(Cow::Borrowed(value)))
	}
}

impl TryFrom<String> for Language {
	type Error = UnknownLanguageLiteral<'static>;
	fn try_from(value: String) -> Result<Self, Self::Error> {
		parse(&value).ok_or(UnknownLanguageLiteral(Cow::Owned(value)))
	}
}

impl FromStr for Language {
	type Err = UnknownLanguageLiteral<'static>;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::try_from(s.to_owned())
	}
}

/// Response of `GET /lang`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct LanguageStatus {
	pub ok: bool,
	/// Kept as the raw code so that an unexpected value still deserializes
	/// and simply matches no known language.
	#[serde(default)]
	pub lang: Option<String>,
}

impl LanguageStatus {
	/// The reported language, if the response was positive and the code is
	/// known. Unlike [`Language::try_from`] this compares codes exactly, so
	/// `"de"` is not `DE`.
	pub fn language(&self) -> Option<Language> {
		if !self.ok {
			return None;
		}
		match self.lang.as_deref() {
			Some("DE") => Some(Language::De),
			Some("EN") => Some(Language::En),
			_ => None,
		}
	}
}

/// Form body of `POST /lang`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct LanguageSet {
	pub lang: Language,
}

#[cfg(test)]
mod tests {
	use super::{Language, LanguageStatus};

	#[test]
	fn parses_codes_case_insensitively() {
		assert_eq!("de".parse::<Language>().unwrap(), Language::De);
		assert_eq!(Language::try_from(" EN ").unwrap(), Language::En);
		assert!(Language::try_from("FR").is_err());
	}

	#[test]
	fn status_matches_exact_codes_only() {
		let status: LanguageStatus = serde_json::from_str(r#"{"ok":true,"lang":"EN"}"#).unwrap();
		assert_eq!(status.language(), Some(Language::En));

		let status: LanguageStatus = serde_json::from_str(r#"{"ok":true,"lang":"FR"}"#).unwrap();
		assert_eq!(status.language(), None);

		let status: LanguageStatus = serde_json::from_str(r#"{"ok":false,"lang":"DE"}"#).unwrap();
		assert_eq!(status.language(), None);
	}

	#[test]
	fn serializes_upper_case() {
		assert_eq!(serde_json::to_string(&Language::De).unwrap(), r#""DE""#);
	}
}
