use std::borrow::Cow;

use serde::Serialize;
use snafu::ResultExt;

use crate::{constants::USER_AGENT, error, Result};

pub struct Client {
	client: reqwest::Client,
	auth_key: String,
}

/// HTTP util methods.
impl Client {
	pub fn new<I: Into<String>>(auth_key: I) -> Self {
		Self {
			client: reqwest::Client::new(),
			auth_key: auth_key.into(),
		}
	}

	pub async fn request(
		&self,
		builder: reqwest::RequestBuilder,
	) -> Result<reqwest::Response> {
		let request = builder
			.bearer_auth(&self.auth_key)
			.header(reqwest::header::ACCEPT, "application/vnd.github+json")
			.header(reqwest::header::USER_AGENT, USER_AGENT)
			.build()
			.context(error::Http)?;

		let response =
			self.client.execute(request).await.context(error::Http)?;
		let status = response.status();

		if status.is_success() {
			Ok(response)
		} else {
			let text = response.text().await.context(error::Http)?;

			// Try to decode the response error as JSON otherwise store
			// it as plain text in a JSON object.
			let body = if let Ok(value) = serde_json::from_str(&text) {
				value
			} else {
				serde_json::json!({ "error_message": text })
			};

			error::Response { status, body }.fail()
		}
	}

	/// Sends a `GET` request to `url` with the authentication headers
	/// attached.
	async fn get_response<'b, I: Into<Cow<'b, str>>>(
		&self,
		url: I,
	) -> Result<reqwest::Response> {
		self.request(self.client.get(&*url.into())).await
	}

	/// Get a single entry from a resource in GitHub.
	pub async fn get<'b, I, T>(&self, url: I) -> Result<T>
	where
		I: Into<Cow<'b, str>>,
		T: serde::de::DeserializeOwned,
	{
		self.get_response(url)
			.await?
			.json::<T>()
			.await
			.context(error::Http)
	}

	/// Sends a `POST` with `body` as JSON, returning the raw response for
	/// callers that only care about the acknowledgement.
	pub async fn post_response<'b, I, B>(
		&self,
		url: I,
		body: &B,
	) -> Result<reqwest::Response>
	where
		I: Into<Cow<'b, str>>,
		B: Serialize,
	{
		self.request(self.client.post(&*url.into()).json(body)).await
	}
}
