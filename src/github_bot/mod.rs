use async_trait::async_trait;

use crate::{config::MainConfig, github::Issue, Result};

pub mod issue;

/// The two tracking-API operations the assignment flow consumes. Kept this
/// narrow so tests can substitute an in-memory fake for the live client.
#[async_trait]
pub trait IssueApi {
	async fn issue(&self, owner: &str, repo: &str, number: i64)
		-> Result<Issue>;

	async fn add_assignees(
		&self,
		owner: &str,
		repo: &str,
		number: i64,
		assignees: &[&str],
	) -> Result<()>;
}

pub struct GithubBot {
	pub client: crate::http::Client,
	github_api_url: String,
}

impl GithubBot {
	pub fn new(config: &MainConfig) -> Self {
		let client = crate::http::Client::new(config.github_token.as_str());

		Self {
			client,
			github_api_url: config.github_api_url.clone(),
		}
	}
}
