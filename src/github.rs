use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
	pub login: String,
}

/// A comment as it appears in an `issue_comment` event payload.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct Comment {
	pub body: Option<String>,
	// User might be missing when it has been deleted
	pub user: Option<User>,
}

/// The issue header carried by an `issue_comment` event payload. Only the
/// number is consumed; the full issue state is fetched separately.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct WebhookIssue {
	pub number: Option<i64>,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct Payload {
	pub issue: Option<WebhookIssue>,
	pub comment: Option<Comment>,
}

/// An issue as returned by the issues endpoint.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
	pub number: i64,
	pub assignee: Option<User>,
	pub assignees: Vec<User>,
}

pub fn parse_repository_full_name(full_name: &str) -> Option<(String, String)> {
	let parts: Vec<&str> = full_name.split('/').collect();
	match (parts.get(0), parts.get(1)) {
		(Some(owner), Some(repo)) if !owner.is_empty() && !repo.is_empty() => {
			Some((owner.to_string(), repo.to_string()))
		}
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_an_issue_comment_payload() {
		let payload: Payload = serde_json::from_str(
			r#"{
				"action": "created",
				"issue": {
					"number": 123,
					"title": "Add contributing guide",
					"state": "open"
				},
				"comment": {
					"id": 1,
					"body": "/assign",
					"user": {
						"login": "nest-contributor",
						"type": "User"
					}
				}
			}"#,
		)
		.unwrap();

		assert_eq!(payload.issue, Some(WebhookIssue { number: Some(123) }));
		let comment = payload.comment.unwrap();
		assert_eq!(comment.body.as_deref(), Some("/assign"));
		assert_eq!(
			comment.user,
			Some(User {
				login: "nest-contributor".to_string()
			})
		);
	}

	#[test]
	fn tolerates_missing_issue_and_comment() {
		let payload: Payload = serde_json::from_str("{}").unwrap();
		assert_eq!(payload, Payload::default());

		let payload: Payload =
			serde_json::from_str(r#"{ "issue": { "number": null } }"#).unwrap();
		assert_eq!(payload.issue, Some(WebhookIssue { number: None }));
	}

	#[test]
	fn parses_repository_full_names() {
		assert_eq!(
			parse_repository_full_name("OWASP/nest-repo"),
			Some(("OWASP".to_string(), "nest-repo".to_string()))
		);
		assert_eq!(parse_repository_full_name("no-separator"), None);
		assert_eq!(parse_repository_full_name("owner/"), None);
		assert_eq!(parse_repository_full_name(""), None);
	}
}
