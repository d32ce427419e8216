//! The panel's view: a fixed set of text fields and controls.
//!
//! Field and control identifiers match the element ids of the device's own
//! web page, so a view can be backed by that page or by anything else that
//! can show text and toggle buttons.

use speaker_client::SetupPage;
use std::{
	collections::{BTreeMap, BTreeSet},
	fmt::{self, Write},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
	/// WiFi action feedback.
	Status,
	/// RTC action feedback.
	RtcStatus,
	BatteryValue,
	RtcTime,
	BrowserTime,
	TimeDiff,
	TzInfo,
	DstInfo,
	/// Language action feedback.
	LangStatus,
}

impl Field {
	pub const ALL: [Field; 9] = [
		Field::Status,
		Field::RtcStatus,
		Field::BatteryValue,
		Field::RtcTime,
		Field::BrowserTime,
		Field::TimeDiff,
		Field::TzInfo,
		Field::DstInfo,
		Field::LangStatus,
	];

	pub fn id(&self) -> &'static str {
		match self {
			Self::Status => "status",
			Self::RtcStatus => "rtc-status",
			Self::BatteryValue => "battery-value",
			Self::RtcTime => "rtc-time",
			Self::BrowserTime => "browser-time",
			Self::TimeDiff => "time-diff",
			Self::TzInfo => "tz-info",
			Self::DstInfo => "dst-info",
			Self::LangStatus => "lang-status",
		}
	}
}

impl fmt::Display for Field {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.id())
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Control {
	WifiStart,
	WifiClear,
	RtcStart,
	LangDe,
	LangEn,
}

impl Control {
	pub const ALL: [Control; 5] = [
		Control::WifiStart,
		Control::WifiClear,
		Control::RtcStart,
		Control::LangDe,
		Control::LangEn,
	];

	pub fn id(&self) -> &'static str {
		match self {
			Self::WifiStart => "wifi-start",
			Self::WifiClear => "wifi-clear",
			Self::RtcStart => "rtc-start",
			Self::LangDe => "lang-de",
			Self::LangEn => "lang-en",
		}
	}
}

impl fmt::Display for Control {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.id())
	}
}

/// Rendering surface of a [`Panel`](crate::panel::Panel).
///
/// Calls come from concurrently running refresh tasks, each writing its own
/// fields, so implementations use interior mutability.
pub trait PanelView: Send + Sync + 'static {
	/// Whether the control exists on this view. Pressing an absent control
	/// does nothing.
	fn has(&self, _control: Control) -> bool {
		true
	}

	fn set_text(&self, field: Field, text: &str);

	fn set_visible(&self, control: Control, visible: bool);

	fn set_active(&self, control: Control, active: bool);

	/// Hands the user over to the device's WiFi setup flow, as described by
	/// the page the device answered with.
	fn navigate(&self, page: &SetupPage);
}

/// Current contents of a view.
///
/// Controls start visible and inactive; fields start empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
	texts: BTreeMap<Field, String>,
	hidden: BTreeSet<Control>,
	active: BTreeSet<Control>,
}

impl ViewState {
	pub fn text(&self, field: Field) -> Option<&str> {
		self.texts.get(&field).map(String::as_str)
	}

	pub fn is_visible(&self, control: Control) -> bool {
		!self.hidden.contains(&control)
	}

	pub fn is_active(&self, control: Control) -> bool {
		self.active.contains(&control)
	}

	/// Returns `true` if the field changed.
	pub fn set_text(&mut self, field: Field, text: &str) -> bool {
		if self.text(field) == Some(text) {
			return false;
		}
		self.texts.insert(field, text.into());
		true
	}

	/// Returns `true` if the control changed.
	pub fn set_visible(&mut self, control: Control, visible: bool) -> bool {
		if visible {
			self.hidden.remove(&control)
		} else {
			self.hidden.insert(control)
		}
	}

	/// Returns `true` if the control changed.
	pub fn set_active(&mut self, control: Control, active: bool) -> bool {
		if active {
			self.active.insert(control)
		} else {
			self.active.remove(&control)
		}
	}

	/// Renders every field and visible control, one per line.
	pub fn render(&self) -> String {
		let mut output = String::new();
		for field in Field::ALL {
			let text = self.text(field).unwrap_or_default();
			let _ = writeln!(output, "{:<14}{text}", field.id());
		}

		let controls = Control::ALL
			.iter()
			.filter(|control| self.is_visible(**control))
			.map(|control| {
				if self.is_active(*control) {
					format!("[{control}*]")
				} else {
					format!("[{control}]")
				}
			})
			.collect::<Vec<_>>()
			.join(" ");
		let _ = writeln!(output, "{:<14}{controls}", "controls");
		output
	}
}
