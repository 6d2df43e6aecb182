// Integration tests for user endpoints

use crate::common;
use assert_json_diff::assert_json_include;
use gh_client::prelude::*;
use mockito::Matcher;
use serde_json::json;

#[tokio::test]
async fn test_get_authenticated_user() {
    let mut server = common::mock_server().await;
    let mock = server
        .mock("GET", "/user")
        .match_header("authorization", common::bearer().as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "login": "octocat",
                "id": 1,
                "type": "User",
                "site_admin": false,
                "public_repos": 8,
                "created_at": "2011-01-25T18:44:36Z"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let user = client.get_user("").await.unwrap().into_inner();
    mock.assert_async().await;

    assert_eq!(user.login.as_deref(), Some("octocat"));
    assert_eq!(user.user_type.as_deref(), Some("User"));
    assert_eq!(user.public_repos, Some(8));
    assert_json_include!(
        actual: serde_json::to_value(&user).unwrap(),
        expected: json!({"login": "octocat", "id": 1, "created_at": "2011-01-25T18:44:36Z"})
    );
}

#[tokio::test]
async fn test_get_named_user() {
    let mut server = common::mock_server().await;
    let mock = server
        .mock("GET", "/users/monalisa")
        .with_status(200)
        .with_body(json!({"login": "monalisa", "id": 2}).to_string())
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let user = client.get_user("monalisa").await.unwrap();
    mock.assert_async().await;
    assert_eq!(user.data.id, Some(2));
}

#[tokio::test]
async fn test_list_users_since() {
    let mut server = common::mock_server().await;
    let url = server.url();
    let mock = server
        .mock("GET", "/users")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("since".into(), "135".into()),
            Matcher::UrlEncoded("per_page".into(), "2".into()),
        ]))
        .with_status(200)
        .with_header(
            "link",
            format!("<{url}/users?since=137&per_page=2>; rel=\"next\"").as_str(),
        )
        .with_body(json!([{"login": "a", "id": 136}, {"login": "b", "id": 137}]).to_string())
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let opts = UserListOptions {
        since: Some(135),
        per_page: Some(2),
    };
    let users = client.list_users(Some(&opts)).await.unwrap();
    mock.assert_async().await;

    assert_eq!(users.data.len(), 2);
    assert_eq!(users.next_page, 0);
    assert_eq!(users.next_page_token.as_deref(), Some("137"));
    assert!(users.has_next());
}

#[tokio::test]
async fn test_rate_limits_stores_every_category() {
    let mut server = common::mock_server().await;
    let mock = server
        .mock("GET", "/rate_limit")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "resources": {
                    "core": {"limit": 5000, "remaining": 4999, "reset": 1893456000, "used": 1},
                    "search": {"limit": 30, "remaining": 18, "reset": 1893452400, "used": 12},
                    "code_scanning_upload": {"limit": 500, "remaining": 500, "reset": 1893456000, "used": 0}
                },
                "rate": {"limit": 5000, "remaining": 4999, "reset": 1893456000, "used": 1}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let limits = client.rate_limits().await.unwrap().into_inner();
    mock.assert_async().await;

    assert_eq!(limits.core.as_ref().map(|r| r.remaining), Some(4999));
    assert_eq!(limits.search.as_ref().map(|r| r.limit), Some(30));
    assert!(limits.graphql.is_none());

    let search = client.rate_limit(RateLimitCategory::Search).unwrap();
    assert_eq!(search.remaining, 18);
    assert_eq!(search.reset.unix(), 1_893_452_400);
    assert_eq!(
        client
            .rate_limit(RateLimitCategory::CodeScanningUpload)
            .map(|r| r.limit),
        Some(500)
    );
    assert!(client.rate_limit(RateLimitCategory::GraphQL).is_none());
}

#[tokio::test]
async fn test_rate_limits_is_sent_while_core_is_exhausted() {
    let mut server = common::mock_server().await;
    let reset = (Timestamp::now().unix() + 600).to_string();
    let limited = server
        .mock("GET", "/user")
        .with_status(403)
        .with_header("x-ratelimit-limit", "5000")
        .with_header("x-ratelimit-remaining", "0")
        .with_header("x-ratelimit-reset", reset.as_str())
        .with_body(json!({"message": "API rate limit exceeded"}).to_string())
        .create_async()
        .await;
    let rate_limit = server
        .mock("GET", "/rate_limit")
        .with_status(200)
        .with_body(
            json!({"resources": {"core": {"limit": 5000, "remaining": 0, "reset": 1893456000}}})
                .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    assert!(matches!(
        client.get_user("").await,
        Err(AppError::RateLimit(_))
    ));
    let limits = client.rate_limits().await.unwrap();
    assert_eq!(limits.data.core.map(|r| r.used), Some(0));

    limited.assert_async().await;
    rate_limit.assert_async().await;
}
