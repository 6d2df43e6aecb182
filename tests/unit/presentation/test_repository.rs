use assert_json_diff::assert_json_eq;
use gh_client::presentation::repository::{Contributor, Repository, Topics};
use serde_json::json;

#[test]
fn test_repository_deserialization() {
    let repo: Repository = serde_json::from_value(json!({
        "id": 1296269,
        "node_id": "MDEwOlJlcG9zaXRvcnkxMjk2MjY5",
        "name": "Hello-World",
        "full_name": "octocat/Hello-World",
        "owner": {"login": "octocat", "id": 1, "type": "User"},
        "private": false,
        "topics": ["octocat", "api"],
        "visibility": "public",
        "default_branch": "main",
        "stargazers_count": 80,
        "created_at": "2011-01-26T19:01:12Z",
        "pushed_at": "2011-01-26T19:06:43Z",
        "permissions": {"admin": false, "push": false, "pull": true},
        "unknown_field": {"ignored": true}
    }))
    .unwrap();

    assert_eq!(repo.full_name.as_deref(), Some("octocat/Hello-World"));
    assert_eq!(
        repo.owner.as_ref().and_then(|o| o.user_type.as_deref()),
        Some("User")
    );
    assert_eq!(repo.topics.as_deref().map(<[String]>::len), Some(2));
    assert!(repo.permissions.unwrap().pull);
    assert_eq!(
        repo.created_at.unwrap().to_string(),
        "2011-01-26T19:01:12Z"
    );
}

#[test]
fn test_repository_create_payload_only_has_set_fields() {
    let mut repo = Repository::named("new-repo");
    repo.private = Some(true);
    repo.auto_init = Some(true);
    assert_json_eq!(
        serde_json::to_value(&repo).unwrap(),
        json!({"name": "new-repo", "private": true, "auto_init": true})
    );
}

#[test]
fn test_topics_are_always_an_array() {
    assert_json_eq!(
        serde_json::to_value(Topics::default()).unwrap(),
        json!({"names": []})
    );
    let topics: Topics = serde_json::from_value(json!({"names": null})).unwrap();
    assert!(topics.names.is_empty());
}

#[test]
fn test_anonymous_contributor() {
    let contributor: Contributor = serde_json::from_value(json!({
        "email": "anon@example.com",
        "name": "Anon",
        "type": "Anonymous",
        "contributions": 12
    }))
    .unwrap();
    assert!(contributor.login.is_none());
    assert_eq!(contributor.contributor_type.as_deref(), Some("Anonymous"));
    assert_eq!(contributor.contributions, 12);
}
