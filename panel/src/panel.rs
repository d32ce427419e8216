use crate::{
	button::Button,
	config::PollingConfig,
	device::Device,
	poller,
	util::{millis_from_datetime, Clock, SystemClock},
	view::{Control, Field, PanelView},
};
use speaker::{
	battery::{display_voltage, VOLTAGE_PLACEHOLDER},
	datetime_from_millis, format_datetime,
	rtc::{display_time_difference, time_difference_secs},
	tz::split_posix_tz,
	Language, RtcNow, RtcSet, PLACEHOLDER,
};
use std::{sync::Arc, time::Duration};
use time::OffsetDateTime;
use tokio::{sync::watch, task::JoinHandle};

pub const WIFI_STARTING: &str = "Starting WiFi setup...";
pub const WIFI_CLEARING: &str = "Clearing WiFi credentials...";
pub const WIFI_CLEARED: &str = "WiFi credentials deleted.";
pub const WIFI_CLEAR_FAILED: &str = "Failed to delete WiFi credentials.";
pub const RTC_SETTING: &str = "Setting RTC...";
pub const RTC_UPDATED: &str = "RTC updated.";
pub const RTC_UPDATE_FAILED: &str = "RTC update failed.";
pub const LANG_UPDATING: &str = "Updating language...";
pub const LANG_UPDATED: &str = "Language updated.";
pub const LANG_UPDATE_FAILED: &str = "Language update failed.";

/// Controller binding a [`Device`] to a [`PanelView`].
///
/// Every refresh overwrites all of the fields it owns, with either fresh
/// values or placeholders, so a failed refresh never leaves a stale value
/// behind. Refreshes of different kinds write disjoint fields and can run
/// concurrently; cloning a panel is cheap.
#[derive(Debug)]
pub struct Panel<D, V, C = SystemClock> {
	device: Arc<D>,
	view: Arc<V>,
	clock: Arc<C>,
}

impl<D, V, C> Clone for Panel<D, V, C> {
	fn clone(&self) -> Self {
		Self {
			device: Arc::clone(&self.device),
			view: Arc::clone(&self.view),
			clock: Arc::clone(&self.clock),
		}
	}
}

/// Clock fields derived from one RTC snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RtcDisplay {
	pub rtc_time: String,
	pub browser_time: String,
	pub time_diff: String,
	pub tz: String,
	pub dst: String,
}

impl RtcDisplay {
	/// Derives the displayed fields, or `None` if the snapshot is negative or
	/// its epoch cannot be rendered.
	pub fn derive(snapshot: &RtcNow, browser: OffsetDateTime) -> Option<Self> {
		let rtc_ms = snapshot.epoch_millis()?;
		let rtc_time = format_datetime(datetime_from_millis(rtc_ms)?).ok()?;
		let browser_time = format_datetime(browser).ok()?;
		let diff = time_difference_secs(millis_from_datetime(browser), rtc_ms);
		let labels = split_posix_tz(snapshot.tz.as_deref());

		Some(Self {
			rtc_time,
			browser_time,
			time_diff: display_time_difference(diff),
			tz: labels.tz,
			dst: labels.dst,
		})
	}

	pub fn placeholder() -> Self {
		Self {
			rtc_time: PLACEHOLDER.into(),
			browser_time: PLACEHOLDER.into(),
			time_diff: PLACEHOLDER.into(),
			tz: PLACEHOLDER.into(),
			dst: PLACEHOLDER.into(),
		}
	}
}

impl<D: Device, V: PanelView, C: Clock> Panel<D, V, C> {
	/// Binds the panel to its device and view. Nothing is fetched until a
	/// refresh runs or [`start`](Self::start) is called.
	pub fn bind(device: D, view: V, clock: C) -> Self {
		Self {
			device: Arc::new(device),
			view: Arc::new(view),
			clock: Arc::new(clock),
		}
	}

	pub fn view(&self) -> &V {
		&self.view
	}

	pub fn device(&self) -> &D {
		&self.device
	}

	/// Starts the four pollers. Each refreshes immediately and then once per
	/// its configured period until `shutdown` changes.
	///
	/// Every period in `polling` must be non-zero.
	pub fn start(
		&self,
		polling: &PollingConfig,
		shutdown: watch::Receiver<bool>,
	) -> Vec<JoinHandle<anyhow::Result<()>>> {
		let overlap = polling.overlap;
		vec![
			{
				let panel = self.clone();
				poller::spawn(
					"battery",
					Duration::from_millis(polling.battery_ms),
					overlap,
					shutdown.clone(),
					move || {
						let panel = panel.clone();
						async move { panel.refresh_battery().await }
					},
				)
			},
			{
				let panel = self.clone();
				poller::spawn(
					"rtc",
					Duration::from_millis(polling.rtc_ms),
					overlap,
					shutdown.clone(),
					move || {
						let panel = panel.clone();
						async move { panel.refresh_rtc().await }
					},
				)
			},
			{
				let panel = self.clone();
				poller::spawn(
					"wifi",
					Duration::from_millis(polling.wifi_ms),
					overlap,
					shutdown.clone(),
					move || {
						let panel = panel.clone();
						async move { panel.refresh_wifi_status().await }
					},
				)
			},
			{
				let panel = self.clone();
				poller::spawn(
					"language",
					Duration::from_millis(polling.language_ms),
					overlap,
					shutdown,
					move || {
						let panel = panel.clone();
						async move { panel.refresh_language().await }
					},
				)
			},
		]
	}

	/// Runs every refresh once, concurrently.
	pub async fn refresh_all(&self) {
		tokio::join!(
			self.refresh_battery(),
			self.refresh_rtc(),
			self.refresh_wifi_status(),
			self.refresh_language(),
		);
	}

	/// Handles a button press. Buttons whose control is not on the view are
	/// ignored.
	pub async fn press(&self, button: Button) {
		let control = button.control();
		if !self.view.has(control) {
			tracing::debug!("ignoring '{button}', control {control} is not bound");
			return;
		}

		match button {
			Button::WifiStart => self.start_wifi_setup().await,
			Button::WifiClear => self.clear_wifi_credentials().await,
			Button::RtcSet => self.set_rtc().await,
			Button::Lang(lang) => self.set_language(lang).await,
		}
	}

	pub async fn start_wifi_setup(&self) {
		self.view.set_text(Field::Status, WIFI_STARTING);

		match self.device.start_wifi_setup().await {
			Ok(page) => {
				tracing::info!("WiFi setup started, device answered from {}", page.url);
				self.view.navigate(&page);
			}
			Err(error) => tracing::warn!("error starting WiFi setup: {error}"),
		}
	}

	pub async fn clear_wifi_credentials(&self) {
		self.view.set_text(Field::Status, WIFI_CLEARING);

		match self.device.clear_wifi().await {
			Ok(ack) if ack.ok => {
				self.view.set_text(Field::Status, WIFI_CLEARED);
				self.show_wifi_connected(false);
			}
			Ok(ack) => {
				tracing::warn!("device refused to clear WiFi credentials: {:?}", ack.error);
				self.view.set_text(Field::Status, WIFI_CLEAR_FAILED);
			}
			Err(error) => {
				tracing::warn!("error clearing WiFi credentials: {error}");
				self.view.set_text(Field::Status, WIFI_CLEAR_FAILED);
			}
		}
	}

	pub async fn refresh_wifi_status(&self) {
		let connected = match self.device.wifi_status().await {
			Ok(status) => {
				tracing::trace!("WiFi mode is {}", status.mode);
				status.mode.is_connected()
			}
			Err(error) => {
				tracing::debug!("error refreshing WiFi status: {error}");
				false
			}
		};
		self.show_wifi_connected(connected);
	}

	pub async fn set_rtc(&self) {
		self.view.set_text(Field::RtcStatus, RTC_SETTING);

		let update = RtcSet::new(self.clock.now_utc(), self.clock.local_offset());
		tracing::debug!("setting RTC with {update:?}");

		let text = match self.device.set_rtc(update).await {
			Ok(ack) if ack.ok => RTC_UPDATED,
			Ok(ack) => {
				tracing::warn!("device refused RTC update: {:?}", ack.error);
				RTC_UPDATE_FAILED
			}
			Err(error) => {
				tracing::warn!("error setting RTC: {error}");
				RTC_UPDATE_FAILED
			}
		};
		self.view.set_text(Field::RtcStatus, text);
	}

	pub async fn refresh_rtc(&self) {
		let display = match self.device.rtc_now().await {
			Ok(snapshot) => RtcDisplay::derive(&snapshot, self.clock.now_utc()).unwrap_or_else(|| {
				tracing::debug!("unusable RTC snapshot: {snapshot:?}");
				RtcDisplay::placeholder()
			}),
			Err(error) => {
				tracing::debug!("error refreshing RTC: {error}");
				RtcDisplay::placeholder()
			}
		};

		self.view.set_text(Field::RtcTime, &display.rtc_time);
		self.view.set_text(Field::BrowserTime, &display.browser_time);
		self.view.set_text(Field::TimeDiff, &display.time_diff);
		self.view.set_text(Field::TzInfo, &display.tz);
		self.view.set_text(Field::DstInfo, &display.dst);
	}

	pub async fn refresh_battery(&self) {
		let text = match self.device.battery().await {
			Ok(reading) => display_voltage(reading.voltage),
			Err(error) => {
				tracing::debug!("error refreshing battery: {error}");
				VOLTAGE_PLACEHOLDER.into()
			}
		};
		self.view.set_text(Field::BatteryValue, &text);
	}

	pub async fn refresh_language(&self) {
		let lang = match self.device.language().await {
			Ok(status) => status.language(),
			Err(error) => {
				tracing::debug!("error refreshing language: {error}");
				None
			}
		};
		self.show_language(lang);
	}

	pub async fn set_language(&self, lang: Language) {
		self.view.set_text(Field::LangStatus, LANG_UPDATING);

		match self.device.set_language(lang).await {
			Ok(ack) if ack.ok => {
				self.view.set_text(Field::LangStatus, LANG_UPDATED);
				self.show_language(Some(lang));
			}
			Ok(ack) => {
				tracing::warn!("device refused language {lang}: {:?}", ack.error);
				self.view.set_text(Field::LangStatus, LANG_UPDATE_FAILED);
			}
			Err(error) => {
				tracing::warn!("error setting language: {error}");
				self.view.set_text(Field::LangStatus, LANG_UPDATE_FAILED);
			}
		}
	}

	/// Shows exactly one of the WiFi start and clear controls.
	fn show_wifi_connected(&self, connected: bool) {
		self.view.set_visible(Control::WifiStart, !connected);
		self.view.set_visible(Control::WifiClear, connected);
	}

	fn show_language(&self, lang: Option<Language>) {
		self.view.set_active(Control::LangDe, lang == Some(Language::De));
		self.view.set_active(Control::LangEn, lang == Some(Language::En));
	}
}
