use crate::{builder::Builder, Error};
use reqwest::{IntoUrl, Response};
use serde::{de::DeserializeOwned, Serialize};
use speaker::{
	Ack, BatteryReading, Language, LanguageSet, LanguageStatus, RtcNow, RtcSet, WifiStatus,
};
use url::Url;

/// The device's answer to a WiFi setup request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetupPage {
	/// Where the page was served from, after redirects.
	pub url: Url,
	/// Readable text of the page, usually the access point to join and the
	/// address to open on it.
	pub text: String,
}

#[derive(Clone, Debug)]
pub struct Client {
	client: reqwest::Client,
	host: Url,
}

impl Client {
	/// Creates a client for the speaker at `host` with default options.
	///
	/// # Errors
	/// Returns an error if the URL is invalid or the HTTP client cannot be
	/// initialised.
	///
	pub fn new(host: impl IntoUrl) -> Result<Self, Error> {
		Self::builder(host)?.build()
	}

	pub fn builder(host: impl IntoUrl) -> Result<Builder, Error> {
		Ok(Builder::new_with(host.into_url()?))
	}

	pub(crate) fn new_with(client: reqwest::Client, host: Url) -> Self {
		Self { client, host }
	}

	/// Returns the base URL of the device.
	pub fn host(&self) -> &Url {
		&self.host
	}

	/// URL of the page that starts the WiFi setup flow.
	pub fn wifi_setup_url(&self) -> Result<Url, Error> {
		self.endpoint("wifi/start")
	}

	/// Asks the device to start its WiFi setup access point.
	///
	/// Returns the page the device answered with, which tells the user how to
	/// continue.
	pub async fn start_wifi_setup(&self) -> Result<SetupPage, Error> {
		let url = self.wifi_setup_url()?;
		let response = self.client.get(url).send().await?;
		let response = check_status(response)?;
		let url = response.url().clone();
		let body = response.text().await?;
		Ok(SetupPage {
			url,
			text: speaker::setup::page_text(&body),
		})
	}

	pub async fn clear_wifi(&self) -> Result<Ack, Error> {
		let url = self.endpoint("wifi/clear")?;
		let response = self.client.post(url).send().await?;
		decode(response).await
	}

	pub async fn wifi_status(&self) -> Result<WifiStatus, Error> {
		self.get("wifi/status").await
	}

	pub async fn set_rtc(&self, update: &RtcSet) -> Result<Ack, Error> {
		self.post_form("rtc/set", update).await
	}

	pub async fn rtc_now(&self) -> Result<RtcNow, Error> {
		self.get("rtc/now").await
	}

	pub async fn battery(&self) -> Result<BatteryReading, Error> {
		self.get("battery").await
	}

	pub async fn language(&self) -> Result<LanguageStatus, Error> {
		self.get("lang").await
	}

	pub async fn set_language(&self, lang: Language) -> Result<Ack, Error> {
		self.post_form("lang", &LanguageSet { lang }).await
	}

	fn endpoint(&self, path: &str) -> Result<Url, Error> {
		Ok(self.host.join(path)?)
	}

	#[tracing::instrument(level = "trace", skip(self))]
	async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
		let url = self.endpoint(path)?;
		let response = self.client.get(url).send().await?;
		decode(response).await
	}

	#[tracing::instrument(level = "trace", skip(self, form))]
	async fn post_form<F, T>(&self, path: &str, form: &F) -> Result<T, Error>
	where
		F: Serialize + ?Sized,
		T: DeserializeOwned,
	{
		let url = self.endpoint(path)?;
		let response = self.client.post(url).form(form).send().await?;
		decode(response).await
	}
}

fn check_status(response: Response) -> Result<Response, Error> {
	let status = response.status();
	if status.is_success() {
		Ok(response)
	} else {
		tracing::debug!("{} responded with {status}", response.url());
		Err(Error::Status(status))
	}
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, Error> {
	let response = check_status(response)?;
	let body = response.bytes().await?;
	match serde_json::from_slice(&body) {
		Ok(value) => Ok(value),
		Err(error) => {
			tracing::debug!("failed to deserialise response body {body:?}: {error}");
			Err(error.into())
		}
	}
}
