use crate::constants::GITHUB_API_URL_DEFAULT;

#[derive(Debug, Clone)]
pub struct MainConfig {
	pub github_token: String,
	pub assign_command: String,
	pub github_api_url: String,
}

impl MainConfig {
	/// Reads the configuration the runner injects for this run. Absent
	/// inputs yield empty strings here and are rejected by the assignment
	/// flow, so the failure is reported in the run's own terms instead of
	/// aborting the process.
	pub fn from_env() -> Self {
		dotenv::dotenv().ok();

		let github_token = action_input("token").unwrap_or_default();
		let assign_command = action_input("assign-command").unwrap_or_default();
		let github_api_url = dotenv::var("GITHUB_API_URL")
			.unwrap_or_else(|_| GITHUB_API_URL_DEFAULT.to_string());

		Self {
			github_token,
			assign_command,
			github_api_url,
		}
	}
}

/// Reads an action input. The runner exports each input as `INPUT_<NAME>`
/// with the name uppercased; values are trimmed on read.
fn action_input(name: &str) -> Option<String> {
	dotenv::var(format!("INPUT_{}", name.to_uppercase()))
		.ok()
		.map(|value| value.trim().to_string())
}
