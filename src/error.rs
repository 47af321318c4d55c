use snafu::{Backtrace, Snafu};

#[derive(Debug, Snafu)]
#[snafu(visibility = "pub")]
pub enum Error {
	/// The `token` input was absent or empty.
	#[snafu(display("GitHub token is missing"))]
	MissingCredential { backtrace: Backtrace },

	/// The event payload lacked a field the assignment needs.
	#[snafu(display("Issue number, comment, or commenter is missing"))]
	IncompletePayload { backtrace: Backtrace },

	/// An error occurred while sending or receiving a HTTP request or response
	/// respectively.
	#[snafu(display("{}", source))]
	Http {
		source: reqwest::Error,
		backtrace: Backtrace,
	},

	/// An error occurred while parsing or serializing JSON.
	#[snafu(display("{}", source))]
	Json {
		source: serde_json::Error,
		backtrace: Backtrace,
	},

	/// An error occurred while reading the event payload file.
	#[snafu(display("{}", source))]
	Io {
		source: std::io::Error,
		backtrace: Backtrace,
	},

	/// An error occurred with an integration service (e.g. GitHub).
	#[snafu(display("Status code: {}\nBody:\n{:#?}", status, body))]
	Response {
		status: reqwest::StatusCode,
		body: serde_json::Value,
	},

	#[snafu(display("{}", msg))]
	Message { msg: String },
}

impl Error {
	/// The message reported to the runner when this error fails the run.
	/// Precondition failures surface verbatim; anything raised while talking
	/// to the API or the runner environment is wrapped.
	pub fn failure_message(&self) -> String {
		match self {
			Error::MissingCredential { .. }
			| Error::IncompletePayload { .. } => self.to_string(),
			other => format!("Error: {}", other),
		}
	}
}
