use gh_client::application::config::Config;
use gh_client::application::services::{IssueService, UserService};
use gh_client::error::AppError;
use gh_client::model::http::Client;
use gh_client::model::rate::RateLimitCategory;
use reqwest::Method;
use serde_json::json;
use tokio_test::{assert_err, assert_ok, block_on};

#[test]
fn test_new_request_headers_and_body() {
    let client = Client::new(Config::from_defaults().with_token("ghp_token")).unwrap();
    let body = json!({"title": "hello"});
    let request = client
        .new_request(Method::POST, "repos/o/r/issues", Some(&body))
        .unwrap();

    assert_eq!(request.url().as_str(), "https://api.github.com/repos/o/r/issues");
    let headers = request.headers();
    assert_eq!(headers["accept"], "application/vnd.github+json");
    assert_eq!(headers["x-github-api-version"], "2022-11-28");
    assert_eq!(headers["authorization"], "Bearer ghp_token");
    assert_eq!(headers["content-type"], "application/json");
    let bytes = request.body().and_then(|b| b.as_bytes()).unwrap();
    assert_eq!(
        serde_json::from_slice::<serde_json::Value>(bytes).unwrap(),
        body
    );
}

#[test]
fn test_new_request_without_body_or_token() {
    let client = Client::new(Config::from_defaults()).unwrap();
    let request = client
        .new_request(Method::GET, "/users/octocat", None::<&()>)
        .unwrap();
    assert_eq!(request.url().as_str(), "https://api.github.com/users/octocat");
    assert!(request.body().is_none());
    assert!(request.headers().get("authorization").is_none());
    assert!(request.headers().get("content-type").is_none());
    assert!(!client.is_authenticated());
}

#[test]
fn test_base_url_without_trailing_slash_is_rejected() {
    let client =
        Client::new(Config::from_defaults().with_base_url("https://ghe.example.com/api/v3"))
            .unwrap();
    let err = client
        .new_request(Method::GET, "user", None::<&()>)
        .unwrap_err();
    match err {
        AppError::InvalidInput(message) => assert_eq!(
            message,
            "base URL must have a trailing slash, but \"https://ghe.example.com/api/v3\" does not"
        ),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_service_calls_fail_before_sending_on_bad_base_url() {
    let client = assert_ok!(Client::new(
        Config::from_defaults().with_base_url("https://ghe.example.com/api/v3")
    ));

    let err = assert_err!(block_on(client.get_user("octocat")));
    assert!(matches!(err, AppError::InvalidInput(_)));

    let err = assert_err!(block_on(client.get_issue("o", "r", 1)));
    assert!(matches!(err, AppError::InvalidInput(_)));
    assert!(client.rate_limit(RateLimitCategory::Core).is_none());
}

#[test]
fn test_upload_request() {
    let client = Client::new(Config::from_defaults()).unwrap();
    let request = client
        .new_upload_request("repos/o/r/releases/1/assets?name=a.zip", vec![1, 2, 3], "application/zip")
        .unwrap();
    assert_eq!(
        request.url().as_str(),
        "https://uploads.github.com/repos/o/r/releases/1/assets?name=a.zip"
    );
    assert_eq!(*request.method(), Method::POST);
    assert_eq!(request.headers()["content-type"], "application/zip");
}

#[test]
fn test_no_rate_known_before_first_request() {
    let client = Client::new(Config::from_defaults()).unwrap();
    assert!(client.rate_limit(RateLimitCategory::Core).is_none());
}
