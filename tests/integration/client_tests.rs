// Transport behavior shared by every service: errors, rate limits, retries, pagination

use crate::common;
use gh_client::prelude::*;
use mockito::Matcher;
use serde_json::json;
use std::time::Duration;

fn future_reset() -> i64 {
    Timestamp::now().unix() + 3600
}

#[tokio::test]
async fn test_default_headers_are_sent() {
    let mut server = common::mock_server().await;
    let mock = server
        .mock("GET", "/repos/o/r")
        .match_header("authorization", common::bearer().as_str())
        .match_header("accept", "application/vnd.github+json")
        .match_header("x-github-api-version", "2022-11-28")
        .match_header("user-agent", Matcher::Regex("^gh-client/".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_header("x-ratelimit-limit", "5000")
        .with_header("x-ratelimit-remaining", "4990")
        .with_header("x-ratelimit-used", "10")
        .with_header("x-ratelimit-reset", "1893456000")
        .with_header("x-ratelimit-resource", "core")
        .with_header("github-authentication-token-expiration", "2030-06-30 12:00:00 UTC")
        .with_body(json!({"id": 1, "name": "r", "full_name": "o/r"}).to_string())
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let response = client.get_repository("o", "r").await.unwrap();
    mock.assert_async().await;

    assert_eq!(response.data.full_name.as_deref(), Some("o/r"));
    let rate = response.rate.expect("rate headers should be parsed");
    assert_eq!(rate.limit, 5000);
    assert_eq!(rate.remaining, 4990);
    assert_eq!(rate.used, 10);
    assert_eq!(rate.reset.unix(), 1_893_456_000);
    assert_eq!(
        client.rate_limit(RateLimitCategory::Core),
        Some(rate)
    );
    assert_eq!(
        response.token_expiration.map(|t| t.unix()),
        Some(1_909_051_200)
    );
}

#[tokio::test]
async fn test_not_found_is_api_error() {
    let mut server = common::mock_server().await;
    let mock = server
        .mock("GET", "/repos/o/missing")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "message": "Not Found",
                "documentation_url": "https://docs.github.com/rest/repos/repos#get-a-repository"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let err = client.get_repository("o", "missing").await.unwrap_err();
    mock.assert_async().await;

    assert!(err.is_not_found());
    assert!(!err.is_rate_limited());
    match err {
        AppError::Api(response) => {
            assert_eq!(response.message, "Not Found");
            assert_eq!(response.method, "GET");
            assert!(response.url.ends_with("/repos/o/missing"));
            assert!(response.documentation_url.is_some());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_validation_errors_are_decoded() {
    let mut server = common::mock_server().await;
    let mock = server
        .mock("POST", "/repos/o/r/issues")
        .with_status(422)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "message": "Validation Failed",
                "errors": [
                    {"resource": "Issue", "field": "title", "code": "missing_field"},
                    "labels must be an array"
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let err = client
        .create_issue("o", "r", &IssueRequest::default())
        .await
        .unwrap_err();
    mock.assert_async().await;

    match err {
        AppError::Api(response) => {
            assert_eq!(response.status.as_u16(), 422);
            assert_eq!(response.errors.len(), 2);
            assert_eq!(response.errors[0].code.as_deref(), Some("missing_field"));
            assert_eq!(
                response.errors[1].message.as_deref(),
                Some("labels must be an array")
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_two_factor_required() {
    let mut server = common::mock_server().await;
    let mock = server
        .mock("GET", "/user")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_header("x-github-otp", "required; app")
        .with_body(json!({"message": "Must specify two-factor authentication OTP code."}).to_string())
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let err = client.get_user("").await.unwrap_err();
    mock.assert_async().await;
    assert!(matches!(err, AppError::TwoFactorRequired(_)));
}

#[tokio::test]
async fn test_primary_rate_limit_blocks_next_request() {
    let mut server = common::mock_server().await;
    let reset = future_reset();
    let limited = server
        .mock("GET", "/users/octocat")
        .with_status(403)
        .with_header("content-type", "application/json")
        .with_header("x-ratelimit-limit", "60")
        .with_header("x-ratelimit-remaining", "0")
        .with_header("x-ratelimit-reset", reset.to_string().as_str())
        .with_body(json!({"message": "API rate limit exceeded for 127.0.0.1."}).to_string())
        .expect(1)
        .create_async()
        .await;
    let never = server
        .mock("GET", "/repos/o/r")
        .with_status(200)
        .with_body("{}")
        .expect(0)
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let err = client.get_user("octocat").await.unwrap_err();
    match &err {
        AppError::RateLimit(e) => {
            assert_eq!(e.rate.limit, 60);
            assert_eq!(e.rate.remaining, 0);
            assert_eq!(e.rate.reset.unix(), reset);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let err = client.get_repository("o", "r").await.unwrap_err();
    match err {
        AppError::RateLimit(e) => {
            assert!(e.message.contains("not making remote request"));
            assert_eq!(e.response.status.as_u16(), 403);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    limited.assert_async().await;
    never.assert_async().await;
}

#[tokio::test]
async fn test_other_categories_are_not_blocked() {
    let mut server = common::mock_server().await;
    let limited = server
        .mock("GET", "/users/octocat")
        .with_status(403)
        .with_header("x-ratelimit-limit", "60")
        .with_header("x-ratelimit-remaining", "0")
        .with_header("x-ratelimit-reset", future_reset().to_string().as_str())
        .with_body(json!({"message": "API rate limit exceeded"}).to_string())
        .create_async()
        .await;
    let upload = server
        .mock("POST", "/repos/o/r/code-scanning/sarifs")
        .with_status(202)
        .with_body(json!({"id": "47177e22", "url": "https://api.github.com/x"}).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    assert!(client.get_user("octocat").await.is_err());

    let analysis = SarifAnalysis {
        commit_sha: Some("abc".to_string()),
        git_ref: Some("refs/heads/main".to_string()),
        sarif: Some("H4sI".to_string()),
        ..Default::default()
    };
    let response = client.upload_sarif("o", "r", &analysis).await.unwrap();
    assert_eq!(response.data.id.as_deref(), Some("47177e22"));

    limited.assert_async().await;
    upload.assert_async().await;
}

#[tokio::test]
async fn test_secondary_rate_limit_is_retried() {
    let mut server = common::mock_server().await;
    let abuse = server
        .mock("GET", "/repos/o/r/issues/1")
        .with_status(403)
        .with_header("content-type", "application/json")
        .with_header("retry-after", "0")
        .with_body(
            json!({
                "message": "You have exceeded a secondary rate limit.",
                "documentation_url": "https://docs.github.com/rest/overview/rate-limits-for-the-rest-api#about-secondary-rate-limits"
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;
    let ok = server
        .mock("GET", "/repos/o/r/issues/1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"number": 1, "title": "retry worked"}).to_string())
        .expect(1)
        .create_async()
        .await;

    let config = common::test_config(&server)
        .with_retry(RetryConfig::with_max_retries_and_delay(1, 0));
    let client = Client::new(config).unwrap();
    let issue = client.get_issue("o", "r", 1).await.unwrap();

    assert_eq!(issue.data.title.as_deref(), Some("retry worked"));
    abuse.assert_async().await;
    ok.assert_async().await;
}

#[tokio::test]
async fn test_secondary_rate_limit_without_retries() {
    let mut server = common::mock_server().await;
    let mock = server
        .mock("GET", "/repos/o/r/issues/1")
        .with_status(429)
        .with_header("retry-after", "60")
        .with_body(json!({"message": "Too many requests"}).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let err = client.get_issue("o", "r", 1).await.unwrap_err();
    mock.assert_async().await;

    assert!(err.is_rate_limited());
    match err {
        AppError::AbuseRateLimit(e) => {
            assert_eq!(e.retry_after, Some(Duration::from_secs(60)));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_too_many_requests_with_exhausted_quota_is_primary_limit() {
    let mut server = common::mock_server().await;
    let reset = future_reset();
    let mock = server
        .mock("GET", "/users/octocat")
        .with_status(429)
        .with_header("content-type", "application/json")
        .with_header("x-ratelimit-limit", "5000")
        .with_header("x-ratelimit-remaining", "0")
        .with_header("x-ratelimit-reset", reset.to_string().as_str())
        .with_body(json!({"message": "API rate limit exceeded"}).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let err = client.get_user("octocat").await.unwrap_err();
    mock.assert_async().await;

    match err {
        AppError::RateLimit(e) => {
            assert_eq!(e.rate.limit, 5000);
            assert_eq!(e.rate.remaining, 0);
            assert_eq!(e.rate.reset.unix(), reset);
            assert_eq!(e.response.status.as_u16(), 429);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_secondary_rate_limit_with_null_errors() {
    let mut server = common::mock_server().await;
    let mock = server
        .mock("GET", "/repos/o/r/issues/1")
        .with_status(403)
        .with_header("content-type", "application/json")
        .with_header("retry-after", "30")
        .with_body(
            json!({
                "message": "You have exceeded a secondary rate limit.",
                "errors": null,
                "documentation_url": "https://docs.github.com/rest/overview/rate-limits-for-the-rest-api#about-secondary-rate-limits"
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let err = client.get_issue("o", "r", 1).await.unwrap_err();
    mock.assert_async().await;

    match err {
        AppError::AbuseRateLimit(e) => {
            assert_eq!(e.message, "You have exceeded a secondary rate limit.");
            assert_eq!(e.retry_after, Some(Duration::from_secs(30)));
            assert!(e.response.errors.is_empty());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_unavailable_for_legal_reasons_decodes_block() {
    let mut server = common::mock_server().await;
    let mock = server
        .mock("GET", "/repos/o/blocked")
        .with_status(451)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "message": "Repository access blocked",
                "block": {
                    "reason": "dmca",
                    "created_at": "2023-01-10T08:00:00Z",
                    "html_url": "https://github.com/github/dmca/blob/master/2023/01/2023-01-10-example.md"
                }
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let err = client.get_repository("o", "blocked").await.unwrap_err();
    mock.assert_async().await;

    assert_eq!(err.status().map(|s| s.as_u16()), Some(451));
    match err {
        AppError::Api(response) => {
            assert_eq!(response.message, "Repository access blocked");
            let block = response.block.expect("block is decoded");
            assert_eq!(block.reason, "dmca");
            assert_eq!(
                block.created_at.map(|ts| ts.to_string()).as_deref(),
                Some("2023-01-10T08:00:00Z")
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_link_header_pagination() {
    let mut server = common::mock_server().await;
    let url = server.url();
    let link = format!(
        "<{url}/repos/o/r/issues?page=2&per_page=1>; rel=\"next\", \
         <{url}/repos/o/r/issues?page=3&per_page=1>; rel=\"last\""
    );
    let mock = server
        .mock("GET", "/repos/o/r/issues")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("per_page".into(), "1".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_header("link", link.as_str())
        .with_body(json!([{"number": 3}]).to_string())
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let opts = IssueListByRepoOptions {
        list: ListOptions::new(1, 1),
        ..Default::default()
    };
    let response = client
        .list_repository_issues("o", "r", Some(&opts))
        .await
        .unwrap();
    mock.assert_async().await;

    assert_eq!(response.next_page, 2);
    assert_eq!(response.last_page, 3);
    assert_eq!(response.prev_page, 0);
    assert!(response.has_next());
}

#[tokio::test]
async fn test_collect_pages_follows_next_page() {
    let mut server = common::mock_server().await;
    let url = server.url();
    let first = server
        .mock("GET", "/repos/o/r/issues")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("state".into(), "all".into()),
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("per_page".into(), "30".into()),
        ]))
        .with_status(200)
        .with_header(
            "link",
            format!("<{url}/repos/o/r/issues?state=all&page=2&per_page=30>; rel=\"next\"").as_str(),
        )
        .with_body(json!([{"number": 2}, {"number": 1}]).to_string())
        .create_async()
        .await;
    let second = server
        .mock("GET", "/repos/o/r/issues")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("state".into(), "all".into()),
            Matcher::UrlEncoded("page".into(), "2".into()),
        ]))
        .with_status(200)
        .with_body(json!([{"number": 0}]).to_string())
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let issues = client
        .collect_pages(|list| {
            let client = client.clone();
            async move {
                let opts = IssueListByRepoOptions {
                    state: Some("all".to_string()),
                    list,
                    ..Default::default()
                };
                client.list_repository_issues("o", "r", Some(&opts)).await
            }
        })
        .await
        .unwrap();

    first.assert_async().await;
    second.assert_async().await;
    let numbers: Vec<u64> = issues.iter().filter_map(|i| i.number).collect();
    assert_eq!(numbers, vec![2, 1, 0]);
}

#[tokio::test]
async fn test_non_json_error_body() {
    let mut server = common::mock_server().await;
    let mock = server
        .mock("GET", "/repos/o/r")
        .with_status(502)
        .with_body("Bad gateway")
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let err = client.get_repository("o", "r").await.unwrap_err();
    mock.assert_async().await;
    assert_eq!(err.status().map(|s| s.as_u16()), Some(502));
    match err {
        AppError::Api(response) => assert_eq!(response.message, "Bad gateway"),
        other => panic!("unexpected error: {other:?}"),
    }
}
