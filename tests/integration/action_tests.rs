// Integration tests for Actions workflow and workflow run endpoints

use crate::common;
use gh_client::prelude::*;
use mockito::Matcher;
use serde_json::json;

fn run_body(id: u64) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Build",
        "head_branch": "main",
        "head_sha": "acb5820ced9479c074f688cc328bf03f341a511d",
        "run_number": 562,
        "event": "push",
        "status": "queued",
        "conclusion": null,
        "workflow_id": 159038,
        "actor": {"login": "octocat", "id": 1},
        "head_commit": {"id": "acb5820", "message": "Create linter.yaml", "timestamp": "2020-01-22T19:33:05Z"},
        "created_at": "2020-01-22T19:33:08Z"
    })
}

#[tokio::test]
async fn test_list_workflows() {
    let mut server = common::mock_server().await;
    let mock = server
        .mock("GET", "/repos/o/r/actions/workflows")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("per_page".into(), "2".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({
                "total_count": 2,
                "workflows": [
                    {"id": 161335, "name": "CI", "path": ".github/workflows/blank.yaml", "state": "active"},
                    {"id": 269289, "name": "Linter", "path": ".github/workflows/linter.yaml", "state": "active"}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let workflows = client
        .list_workflows("o", "r", Some(&ListOptions::new(1, 2)))
        .await
        .unwrap()
        .into_inner();
    mock.assert_async().await;

    assert_eq!(workflows.total_count, 2);
    assert_eq!(workflows.workflows[1].name.as_deref(), Some("Linter"));
}

#[tokio::test]
async fn test_get_workflow_by_id_and_file_name() {
    let mut server = common::mock_server().await;
    let by_id = server
        .mock("GET", "/repos/o/r/actions/workflows/161335")
        .with_status(200)
        .with_body(json!({"id": 161335, "name": "CI"}).to_string())
        .create_async()
        .await;
    let by_name = server
        .mock("GET", "/repos/o/r/actions/workflows/main.yml")
        .with_status(200)
        .with_body(json!({"id": 161336, "path": ".github/workflows/main.yml"}).to_string())
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let workflow = client.get_workflow_by_id("o", "r", 161335).await.unwrap();
    assert_eq!(workflow.data.name.as_deref(), Some("CI"));
    let workflow = client
        .get_workflow_by_file_name("o", "r", "main.yml")
        .await
        .unwrap();
    assert_eq!(workflow.data.id, Some(161336));

    by_id.assert_async().await;
    by_name.assert_async().await;
}

#[tokio::test]
async fn test_list_workflow_runs() {
    let mut server = common::mock_server().await;
    let repo_runs = server
        .mock("GET", "/repos/o/r/actions/runs")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("branch".into(), "main".into()),
            Matcher::UrlEncoded("status".into(), "completed".into()),
            Matcher::UrlEncoded("exclude_pull_requests".into(), "true".into()),
        ]))
        .with_status(200)
        .with_body(json!({"total_count": 1, "workflow_runs": [run_body(30433642)]}).to_string())
        .create_async()
        .await;
    let by_id = server
        .mock("GET", "/repos/o/r/actions/workflows/159038/runs")
        .with_status(200)
        .with_body(json!({"total_count": 0, "workflow_runs": []}).to_string())
        .create_async()
        .await;
    let by_name = server
        .mock("GET", "/repos/o/r/actions/workflows/build.yml/runs")
        .match_query(Matcher::UrlEncoded("event".into(), "push".into()))
        .with_status(200)
        .with_body(json!({"total_count": 1, "workflow_runs": [run_body(1)]}).to_string())
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let opts = ListWorkflowRunsOptions {
        branch: Some("main".to_string()),
        status: Some("completed".to_string()),
        exclude_pull_requests: Some(true),
        ..Default::default()
    };
    let runs = client
        .list_repository_workflow_runs("o", "r", Some(&opts))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(runs.total_count, 1);
    let run = &runs.workflow_runs[0];
    assert_eq!(run.run_number, Some(562));
    assert!(run.conclusion.is_none());
    assert_eq!(
        run.head_commit.as_ref().and_then(|c| c.message.as_deref()),
        Some("Create linter.yaml")
    );

    let runs = client
        .list_workflow_runs_by_id("o", "r", 159038, None)
        .await
        .unwrap();
    assert!(runs.data.workflow_runs.is_empty());

    let opts = ListWorkflowRunsOptions {
        event: Some("push".to_string()),
        ..Default::default()
    };
    let runs = client
        .list_workflow_runs_by_file_name("o", "r", "build.yml", Some(&opts))
        .await
        .unwrap();
    assert_eq!(runs.data.total_count, 1);

    repo_runs.assert_async().await;
    by_id.assert_async().await;
    by_name.assert_async().await;
}

#[tokio::test]
async fn test_get_rerun_and_delete_workflow_run() {
    let mut server = common::mock_server().await;
    let get = server
        .mock("GET", "/repos/o/r/actions/runs/30433642")
        .with_status(200)
        .with_body(run_body(30433642).to_string())
        .create_async()
        .await;
    let rerun = server
        .mock("POST", "/repos/o/r/actions/runs/30433642/rerun")
        .match_header("content-type", Matcher::Missing)
        .with_status(201)
        .with_body("{}")
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/repos/o/r/actions/runs/30433642")
        .with_status(204)
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let run = client
        .get_workflow_run_by_id("o", "r", 30433642)
        .await
        .unwrap();
    assert_eq!(run.data.status.as_deref(), Some("queued"));

    let response = client.rerun_workflow_by_id("o", "r", 30433642).await.unwrap();
    assert_eq!(response.status.as_u16(), 201);

    let response = client.delete_workflow_run("o", "r", 30433642).await.unwrap();
    assert_eq!(response.status.as_u16(), 204);

    get.assert_async().await;
    rerun.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn test_cancel_workflow_run_accepted() {
    let mut server = common::mock_server().await;
    let mock = server
        .mock("POST", "/repos/o/r/actions/runs/42/cancel")
        .with_status(202)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let response = client.cancel_workflow_run_by_id("o", "r", 42).await.unwrap();
    mock.assert_async().await;
    assert_eq!(response.status.as_u16(), 202);
}

#[tokio::test]
async fn test_cancel_workflow_run_conflict() {
    let mut server = common::mock_server().await;
    let mock = server
        .mock("POST", "/repos/o/r/actions/runs/42/cancel")
        .with_status(409)
        .with_body(json!({"message": "Cannot cancel a workflow run that is completed."}).to_string())
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let err = client
        .cancel_workflow_run_by_id("o", "r", 42)
        .await
        .unwrap_err();
    mock.assert_async().await;
    assert_eq!(err.status().map(|s| s.as_u16()), Some(409));
}

#[tokio::test]
async fn test_workflow_dispatch() {
    let mut server = common::mock_server().await;
    let by_id = server
        .mock("POST", "/repos/o/r/actions/workflows/72844/dispatches")
        .match_body(Matcher::Json(json!({
            "ref": "topic-branch",
            "inputs": {"name": "Mona the Octocat", "home": "San Francisco, CA"}
        })))
        .with_status(204)
        .create_async()
        .await;
    let by_name = server
        .mock("POST", "/repos/o/r/actions/workflows/deploy.yml/dispatches")
        .match_body(Matcher::Json(json!({"ref": "main"})))
        .with_status(204)
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let event = CreateWorkflowDispatchEventRequest::new("topic-branch")
        .with_input("name", "Mona the Octocat")
        .with_input("home", "San Francisco, CA");
    client
        .create_workflow_dispatch_event_by_id("o", "r", 72844, &event)
        .await
        .unwrap();
    client
        .create_workflow_dispatch_event_by_file_name(
            "o",
            "r",
            "deploy.yml",
            &CreateWorkflowDispatchEventRequest::new("main"),
        )
        .await
        .unwrap();

    by_id.assert_async().await;
    by_name.assert_async().await;
}
