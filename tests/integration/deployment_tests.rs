// Integration tests for deployment and deployment status endpoints

use crate::common;
use gh_client::prelude::*;
use mockito::Matcher;
use serde_json::json;

#[tokio::test]
async fn test_list_and_get_deployments() {
    let mut server = common::mock_server().await;
    let list = server
        .mock("GET", "/repos/o/r/deployments")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("ref".into(), "main".into()),
            Matcher::UrlEncoded("environment".into(), "production".into()),
        ]))
        .with_status(200)
        .with_body(
            json!([{
                "id": 1,
                "sha": "a84d88e7554fc1fa21bcbc4efae3c782a70d2b9d",
                "ref": "main",
                "task": "deploy",
                "payload": {},
                "environment": "production",
                "creator": {"login": "octocat"}
            }])
            .to_string(),
        )
        .create_async()
        .await;
    let get = server
        .mock("GET", "/repos/o/r/deployments/1")
        .with_status(200)
        .with_body(json!({"id": 1, "ref": "main", "payload": {"deploy": "migrate"}}).to_string())
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let opts = DeploymentsListOptions {
        git_ref: Some("main".to_string()),
        environment: Some("production".to_string()),
        ..Default::default()
    };
    let deployments = client
        .list_deployments("o", "r", Some(&opts))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(deployments[0].git_ref.as_deref(), Some("main"));
    assert_eq!(deployments[0].task.as_deref(), Some("deploy"));

    let deployment = client.get_deployment("o", "r", 1).await.unwrap();
    assert_eq!(
        deployment.data.payload,
        Some(json!({"deploy": "migrate"}))
    );

    list.assert_async().await;
    get.assert_async().await;
}

#[tokio::test]
async fn test_create_deployment() {
    let mut server = common::mock_server().await;
    let mock = server
        .mock("POST", "/repos/o/r/deployments")
        .match_body(Matcher::Json(json!({
            "ref": "topic-branch",
            "environment": "staging",
            "payload": {"deploy": "migrate"},
            "required_contexts": []
        })))
        .with_status(201)
        .with_body(json!({"id": 7, "ref": "topic-branch", "environment": "staging"}).to_string())
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let request = DeploymentRequest::new("topic-branch")
        .with_environment("staging")
        .with_payload(json!({"deploy": "migrate"}))
        .with_required_contexts(Vec::new());
    let created = client.create_deployment("o", "r", &request).await.unwrap();
    mock.assert_async().await;
    assert_eq!(created.data.id, Some(7));
}

#[tokio::test]
async fn test_create_deployment_auto_merge_is_accepted() {
    let mut server = common::mock_server().await;
    let mock = server
        .mock("POST", "/repos/o/r/deployments")
        .with_status(202)
        .with_body(json!({"message": "Auto-merged main into topic-branch on deployment."}).to_string())
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let err = client
        .create_deployment("o", "r", &DeploymentRequest::new("topic-branch"))
        .await
        .unwrap_err();
    mock.assert_async().await;
    match err {
        AppError::Accepted { raw } => assert!(raw.contains("Auto-merged")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_delete_deployment() {
    let mut server = common::mock_server().await;
    let mock = server
        .mock("DELETE", "/repos/o/r/deployments/7")
        .with_status(204)
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    client.delete_deployment("o", "r", 7).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_deployment_statuses() {
    let mut server = common::mock_server().await;
    let list = server
        .mock("GET", "/repos/o/r/deployments/7/statuses")
        .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
        .with_status(200)
        .with_body(json!([{"id": 1, "state": "success"}]).to_string())
        .create_async()
        .await;
    let get = server
        .mock("GET", "/repos/o/r/deployments/7/statuses/1")
        .with_status(200)
        .with_body(json!({"id": 1, "state": "success", "log_url": "https://example.com/log"}).to_string())
        .create_async()
        .await;
    let create = server
        .mock("POST", "/repos/o/r/deployments/7/statuses")
        .match_body(Matcher::Json(json!({"state": "in_progress"})))
        .with_status(201)
        .with_body(json!({"id": 2, "state": "in_progress"}).to_string())
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let statuses = client
        .list_deployment_statuses("o", "r", 7, Some(&ListOptions::default().with_page(1)))
        .await
        .unwrap();
    assert_eq!(statuses.data.len(), 1);

    let status = client.get_deployment_status("o", "r", 7, 1).await.unwrap();
    assert_eq!(status.data.log_url.as_deref(), Some("https://example.com/log"));

    let created = client
        .create_deployment_status("o", "r", 7, &DeploymentStatusRequest::new("in_progress"))
        .await
        .unwrap();
    assert_eq!(created.data.state.as_deref(), Some("in_progress"));

    list.assert_async().await;
    get.assert_async().await;
    create.assert_async().await;
}
