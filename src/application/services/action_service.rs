/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::interfaces::action::ActionService;
use crate::error::AppError;
use crate::model::http::Client;
use crate::model::options::{ListOptions, ListWorkflowRunsOptions, add_options};
use crate::model::requests::CreateWorkflowDispatchEventRequest;
use crate::model::response::Response;
use crate::presentation::action::{Workflow, WorkflowRun, WorkflowRuns, Workflows};
use async_trait::async_trait;
use reqwest::Method;
use serde::de::IgnoredAny;
use tracing::{debug, info};
use urlencoding::encode;

impl Client {
    async fn list_workflow_runs(
        &self,
        base: String,
        opts: Option<&ListWorkflowRunsOptions>,
    ) -> Result<Response<WorkflowRuns>, AppError> {
        let path = add_options(&base, opts)?;
        let result: Response<WorkflowRuns> = self.get(&path).await?;
        debug!(
            "Workflow runs obtained: {} of {}",
            result.data.workflow_runs.len(),
            result.data.total_count
        );
        Ok(result)
    }

    async fn dispatch_workflow(
        &self,
        path: String,
        event: &CreateWorkflowDispatchEventRequest,
    ) -> Result<Response<()>, AppError> {
        info!("Dispatching workflow on {}", event.git_ref);
        self.request_empty(Method::POST, &path, Some(event)).await
    }
}

#[async_trait]
impl ActionService for Client {
    async fn list_workflows(
        &self,
        owner: &str,
        repo: &str,
        opts: Option<&ListOptions>,
    ) -> Result<Response<Workflows>, AppError> {
        let path = add_options(&format!("repos/{owner}/{repo}/actions/workflows"), opts)?;
        let result: Response<Workflows> = self.get(&path).await?;
        debug!("Workflows obtained: {} workflows", result.data.total_count);
        Ok(result)
    }

    async fn get_workflow_by_id(
        &self,
        owner: &str,
        repo: &str,
        workflow_id: u64,
    ) -> Result<Response<Workflow>, AppError> {
        self.get(&format!(
            "repos/{owner}/{repo}/actions/workflows/{workflow_id}"
        ))
        .await
    }

    async fn get_workflow_by_file_name(
        &self,
        owner: &str,
        repo: &str,
        workflow_file_name: &str,
    ) -> Result<Response<Workflow>, AppError> {
        self.get(&format!(
            "repos/{owner}/{repo}/actions/workflows/{}",
            encode(workflow_file_name)
        ))
        .await
    }

    async fn list_repository_workflow_runs(
        &self,
        owner: &str,
        repo: &str,
        opts: Option<&ListWorkflowRunsOptions>,
    ) -> Result<Response<WorkflowRuns>, AppError> {
        self.list_workflow_runs(format!("repos/{owner}/{repo}/actions/runs"), opts)
            .await
    }

    async fn list_workflow_runs_by_id(
        &self,
        owner: &str,
        repo: &str,
        workflow_id: u64,
        opts: Option<&ListWorkflowRunsOptions>,
    ) -> Result<Response<WorkflowRuns>, AppError> {
        self.list_workflow_runs(
            format!("repos/{owner}/{repo}/actions/workflows/{workflow_id}/runs"),
            opts,
        )
        .await
    }

    async fn list_workflow_runs_by_file_name(
        &self,
        owner: &str,
        repo: &str,
        workflow_file_name: &str,
        opts: Option<&ListWorkflowRunsOptions>,
    ) -> Result<Response<WorkflowRuns>, AppError> {
        self.list_workflow_runs(
            format!(
                "repos/{owner}/{repo}/actions/workflows/{}/runs",
                encode(workflow_file_name)
            ),
            opts,
        )
        .await
    }

    async fn get_workflow_run_by_id(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
    ) -> Result<Response<WorkflowRun>, AppError> {
        self.get(&format!("repos/{owner}/{repo}/actions/runs/{run_id}"))
            .await
    }

    async fn rerun_workflow_by_id(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
    ) -> Result<Response<()>, AppError> {
        info!("Re-running workflow run {} of {}/{}", run_id, owner, repo);
        self.request_empty(
            Method::POST,
            &format!("repos/{owner}/{repo}/actions/runs/{run_id}/rerun"),
            None::<&()>,
        )
        .await
    }

    async fn cancel_workflow_run_by_id(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
    ) -> Result<Response<()>, AppError> {
        info!("Cancelling workflow run {} of {}/{}", run_id, owner, repo);
        let result: Response<IgnoredAny> = self
            .request_accepted(
                Method::POST,
                &format!("repos/{owner}/{repo}/actions/runs/{run_id}/cancel"),
                None::<&()>,
            )
            .await?;
        Ok(result.map(|_| ()))
    }

    async fn delete_workflow_run(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
    ) -> Result<Response<()>, AppError> {
        info!("Deleting workflow run {} of {}/{}", run_id, owner, repo);
        self.delete(&format!("repos/{owner}/{repo}/actions/runs/{run_id}"))
            .await
    }

    async fn create_workflow_dispatch_event_by_id(
        &self,
        owner: &str,
        repo: &str,
        workflow_id: u64,
        event: &CreateWorkflowDispatchEventRequest,
    ) -> Result<Response<()>, AppError> {
        self.dispatch_workflow(
            format!("repos/{owner}/{repo}/actions/workflows/{workflow_id}/dispatches"),
            event,
        )
        .await
    }

    async fn create_workflow_dispatch_event_by_file_name(
        &self,
        owner: &str,
        repo: &str,
        workflow_file_name: &str,
        event: &CreateWorkflowDispatchEventRequest,
    ) -> Result<Response<()>, AppError> {
        self.dispatch_workflow(
            format!(
                "repos/{owner}/{repo}/actions/workflows/{}/dispatches",
                encode(workflow_file_name)
            ),
            event,
        )
        .await
    }
}
