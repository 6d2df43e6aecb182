use gh_client::presentation::issue::{Issue, IssueComment};
use serde_json::json;

#[test]
fn test_issue_deserialization() {
    let issue: Issue = serde_json::from_value(json!({
        "id": 1,
        "number": 1347,
        "state": "open",
        "title": "Found a bug",
        "body": "I'm having a problem with this.",
        "user": {"login": "octocat"},
        "labels": [{"id": 208045946, "name": "bug", "color": "f29513", "default": true}],
        "assignees": [{"login": "octocat"}],
        "milestone": {"number": 1, "title": "v1.0", "state": "open", "due_on": null},
        "locked": true,
        "active_lock_reason": "too heated",
        "comments": 0,
        "closed_at": null,
        "created_at": "2011-04-22T13:33:48Z",
        "reactions": {"total_count": 1, "+1": 1}
    }))
    .unwrap();

    assert_eq!(issue.number, Some(1347));
    assert_eq!(issue.labels[0].name.as_deref(), Some("bug"));
    assert_eq!(issue.milestone.as_ref().unwrap().title.as_deref(), Some("v1.0"));
    assert!(issue.milestone.as_ref().unwrap().due_on.is_none());
    assert_eq!(issue.reactions.as_ref().unwrap().plus_one, 1);
    assert!(issue.closed_at.is_none());
    assert!(!issue.is_pull_request());
}

#[test]
fn test_pull_request_issue() {
    let issue: Issue = serde_json::from_value(json!({
        "number": 2,
        "pull_request": {"url": "https://api.github.com/repos/o/r/pulls/2"}
    }))
    .unwrap();
    assert!(issue.is_pull_request());
}

#[test]
fn test_comment_body() {
    assert_eq!(
        serde_json::to_value(IssueComment::with_body("Me too")).unwrap(),
        json!({"body": "Me too"})
    );
}
