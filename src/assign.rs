use std::fmt;

use snafu::{ensure, OptionExt};

use crate::{
	config::MainConfig,
	error,
	event::EventContext,
	github_bot::{GithubBot, IssueApi},
	Result,
};

/// How a run ended when no error was raised. Every variant is terminal for
/// the invocation; only `Assigned` implies a mutation happened.
#[derive(Debug, Clone, PartialEq)]
pub enum AssignmentOutcome {
	Assigned { issue_number: i64, commenter: String },
	AlreadyAssigned,
	CommandMismatch,
}

impl fmt::Display for AssignmentOutcome {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			AssignmentOutcome::Assigned {
				issue_number,
				commenter,
			} => write!(f, "Assigned issue #{} to {}", issue_number, commenter),
			AssignmentOutcome::AlreadyAssigned => {
				write!(f, "The issue has already been assigned")
			}
			AssignmentOutcome::CommandMismatch => write!(
				f,
				"Skipped assignment as comment text does not match the assign command"
			),
		}
	}
}

/// Entry point for one comment event. The token is checked before the client
/// is built so a missing credential never triggers an API call.
pub async fn run(
	config: &MainConfig,
	ctx: &EventContext,
) -> Result<AssignmentOutcome> {
	ensure!(!config.github_token.is_empty(), error::MissingCredential);

	let github_bot = GithubBot::new(config);
	handle_comment(&github_bot, &config.assign_command, ctx).await
}

/// Assigns the commenter to the issue when the trimmed comment body equals
/// the configured command and nobody is assigned yet. An issue number of
/// zero, an empty body and an empty login all count as missing, matching
/// what the event payload can actually carry.
pub async fn handle_comment<A: IssueApi>(
	api: &A,
	assign_command: &str,
	ctx: &EventContext,
) -> Result<AssignmentOutcome> {
	let issue_number = ctx
		.payload
		.issue
		.as_ref()
		.and_then(|issue| issue.number)
		.filter(|number| *number > 0)
		.context(error::IncompletePayload)?;
	let comment = ctx.payload.comment.as_ref();
	let body = comment
		.and_then(|comment| comment.body.as_deref())
		.filter(|body| !body.is_empty())
		.context(error::IncompletePayload)?;
	let commenter = comment
		.and_then(|comment| comment.user.as_ref())
		.map(|user| user.login.as_str())
		.filter(|login| !login.is_empty())
		.context(error::IncompletePayload)?;

	let issue = api.issue(&ctx.owner, &ctx.repo, issue_number).await?;
	if !issue.assignees.is_empty() {
		let outcome = AssignmentOutcome::AlreadyAssigned;
		log::info!("{}", outcome);
		return Ok(outcome);
	}

	if body.trim() != assign_command {
		let outcome = AssignmentOutcome::CommandMismatch;
		log::info!("{}", outcome);
		return Ok(outcome);
	}

	api.add_assignees(&ctx.owner, &ctx.repo, issue_number, &[commenter])
		.await?;

	let outcome = AssignmentOutcome::Assigned {
		issue_number,
		commenter: commenter.to_string(),
	};
	log::info!("{}", outcome);
	Ok(outcome)
}
