use snafu::{OptionExt, ResultExt};

use crate::{
	error,
	github::{parse_repository_full_name, Payload},
	Result,
};

/// Everything the runner tells us about the event that triggered this run.
#[derive(Debug, Clone, PartialEq)]
pub struct EventContext {
	pub owner: String,
	pub repo: String,
	pub payload: Payload,
}

impl EventContext {
	/// Reads the repository slug and the event payload the runner provides
	/// through `GITHUB_REPOSITORY` and the file at `GITHUB_EVENT_PATH`.
	pub fn from_env() -> Result<Self> {
		dotenv::dotenv().ok();

		let repository =
			dotenv::var("GITHUB_REPOSITORY")
				.ok()
				.context(error::Message {
					msg: "GITHUB_REPOSITORY is not set",
				})?;
		let (owner, repo) = parse_repository_full_name(&repository).context(
			error::Message {
				msg: format!(
					"Failed parsing repository name: {}",
					repository
				),
			},
		)?;

		let event_path =
			dotenv::var("GITHUB_EVENT_PATH")
				.ok()
				.context(error::Message {
					msg: "GITHUB_EVENT_PATH is not set",
				})?;
		let bytes = std::fs::read(&event_path).context(error::Io)?;
		let payload = serde_json::from_slice(&bytes).context(error::Json)?;

		Ok(Self {
			owner,
			repo,
			payload,
		})
	}
}
