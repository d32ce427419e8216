use speaker::{Ack, BatteryReading, Language, LanguageStatus, RtcNow, RtcSet, WifiStatus};
use speaker_client::SetupPage;
use std::{fmt, future::Future};

/// The speaker's HTTP API as seen by the panel.
///
/// Implemented by [`speaker_client::Client`]; tests substitute an in-memory
/// device.
pub trait Device: Send + Sync + 'static {
	type Error: fmt::Display + Send;

	fn start_wifi_setup(&self) -> impl Future<Output = Result<SetupPage, Self::Error>> + Send;

	fn clear_wifi(&self) -> impl Future<Output = Result<Ack, Self::Error>> + Send;

	fn wifi_status(&self) -> impl Future<Output = Result<WifiStatus, Self::Error>> + Send;

	fn set_rtc(&self, update: RtcSet) -> impl Future<Output = Result<Ack, Self::Error>> + Send;

	fn rtc_now(&self) -> impl Future<Output = Result<RtcNow, Self::Error>> + Send;

	fn battery(&self) -> impl Future<Output = Result<BatteryReading, Self::Error>> + Send;

	fn language(&self) -> impl Future<Output = Result<LanguageStatus, Self::Error>> + Send;

	fn set_language(&self, lang: Language)
		-> impl Future<Output = Result<Ack, Self::Error>> + Send;
}

impl Device for speaker_client::Client {
	type Error = speaker_client::Error;

	async fn start_wifi_setup(&self) -> Result<SetupPage, Self::Error> {
		speaker_client::Client::start_wifi_setup(self).await
	}

	async fn clear_wifi(&self) -> Result<Ack, Self::Error> {
		speaker_client::Client::clear_wifi(self).await
	}

	async fn wifi_status(&self) -> Result<WifiStatus, Self::Error> {
		speaker_client::Client::wifi_status(self).await
	}

	async fn set_rtc(&self, update: RtcSet) -> Result<Ack, Self::Error> {
		speaker_client::Client::set_rtc(self, &update).await
	}

	async fn rtc_now(&self) -> Result<RtcNow, Self::Error> {
		speaker_client::Client::rtc_now(self).await
	}

	async fn battery(&self) -> Result<BatteryReading, Self::Error> {
		speaker_client::Client::battery(self).await
	}

	async fn language(&self) -> Result<LanguageStatus, Self::Error> {
		speaker_client::Client::language(self).await
	}

	async fn set_language(&self, lang: Language) -> Result<Ack, Self::Error> {
		speaker_client::Client::set_language(self, lang).await
	}
}
