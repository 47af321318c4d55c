use async_trait::async_trait;

use crate::{github::Issue, Result};

use super::{GithubBot, IssueApi};

#[async_trait]
impl IssueApi for GithubBot {
	async fn issue(
		&self,
		owner: &str,
		repo: &str,
		number: i64,
	) -> Result<Issue> {
		self.client
			.get(format!(
				"{}/repos/{}/{}/issues/{}",
				self.github_api_url, owner, repo, number
			))
			.await
	}

	async fn add_assignees(
		&self,
		owner: &str,
		repo: &str,
		number: i64,
		assignees: &[&str],
	) -> Result<()> {
		let url = format!(
			"{}/repos/{}/{}/issues/{}/assignees",
			self.github_api_url, owner, repo, number
		);
		self.client
			.post_response(&url, &serde_json::json!({ "assignees": assignees }))
			.await
			.map(|_| ())
	}
}
