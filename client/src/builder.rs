use crate::{Client, Error};
use reqwest::{
	header::{HeaderMap, HeaderValue, ACCEPT},
	ClientBuilder,
};
use std::time::Duration;
use url::Url;

#[derive(Debug)]
pub struct Builder {
	host: Url,
	timeout: Option<Duration>,
}

impl Builder {
	pub(crate) fn new_with(host: Url) -> Self {
		Self {
			host,
			timeout: Default::default(),
		}
	}

	/// Sets a timeout for each request, covering connect to end of body.
	///
	/// By default requests never time out.
	pub fn timeout(self, timeout: Duration) -> Self {
		let mut s = self;
		s.timeout = Some(timeout);
		s
	}

	pub fn build(self) -> Result<Client, Error> {
		// Endpoints are joined relative to the host, so a base path such as
		// `http://proxy/speaker/` is kept.
		let mut host = self.host;
		if !host.path().ends_with('/') {
			let path = format!("{}/", host.path());
			host.set_path(&path);
		}

		let mut default_headers = HeaderMap::new();
		default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

		// Build the HTTP client. This will be reused for all requests.
		//
		let mut builder = ClientBuilder::new()
			.gzip(true)
			.default_headers(default_headers);
		if let Some(timeout) = self.timeout {
			builder = builder.timeout(timeout);
		}

		Ok(Client::new_with(builder.build()?, host))
	}
}
