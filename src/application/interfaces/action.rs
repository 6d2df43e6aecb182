use crate::error::AppError;
use crate::model::options::{ListOptions, ListWorkflowRunsOptions};
use crate::model::requests::CreateWorkflowDispatchEventRequest;
use crate::model::response::Response;
use crate::presentation::action::{Workflow, WorkflowRun, WorkflowRuns, Workflows};
use async_trait::async_trait;

/// Interface for the GitHub Actions service
///
/// Workflows can be addressed by numeric id or by file name
/// (e.g. `ci.yml`); both flavours are exposed.
#[async_trait]
pub trait ActionService: Send + Sync {
    /// Lists the workflows of a repository
    async fn list_workflows(
        &self,
        owner: &str,
        repo: &str,
        opts: Option<&ListOptions>,
    ) -> Result<Response<Workflows>, AppError>;

    /// Gets a workflow by id
    async fn get_workflow_by_id(
        &self,
        owner: &str,
        repo: &str,
        workflow_id: u64,
    ) -> Result<Response<Workflow>, AppError>;

    /// Gets a workflow by file name
    async fn get_workflow_by_file_name(
        &self,
        owner: &str,
        repo: &str,
        workflow_file_name: &str,
    ) -> Result<Response<Workflow>, AppError>;

    /// Lists every workflow run of a repository
    async fn list_repository_workflow_runs(
        &self,
        owner: &str,
        repo: &str,
        opts: Option<&ListWorkflowRunsOptions>,
    ) -> Result<Response<WorkflowRuns>, AppError>;

    /// Lists the runs of a workflow given its id
    async fn list_workflow_runs_by_id(
        &self,
        owner: &str,
        repo: &str,
        workflow_id: u64,
        opts: Option<&ListWorkflowRunsOptions>,
    ) -> Result<Response<WorkflowRuns>, AppError>;

    /// Lists the runs of a workflow given its file name
    async fn list_workflow_runs_by_file_name(
        &self,
        owner: &str,
        repo: &str,
        workflow_file_name: &str,
        opts: Option<&ListWorkflowRunsOptions>,
    ) -> Result<Response<WorkflowRuns>, AppError>;

    /// Gets a workflow run
    async fn get_workflow_run_by_id(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
    ) -> Result<Response<WorkflowRun>, AppError>;

    /// Re-runs a workflow run
    async fn rerun_workflow_by_id(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
    ) -> Result<Response<()>, AppError>;

    /// Cancels a workflow run
    ///
    /// The server answers `202 Accepted`, which is reported as success here.
    async fn cancel_workflow_run_by_id(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
    ) -> Result<Response<()>, AppError>;

    /// Deletes a workflow run
    async fn delete_workflow_run(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
    ) -> Result<Response<()>, AppError>;

    /// Triggers a `workflow_dispatch` event for a workflow given its id
    async fn create_workflow_dispatch_event_by_id(
        &self,
        owner: &str,
        repo: &str,
        workflow_id: u64,
        event: &CreateWorkflowDispatchEventRequest,
    ) -> Result<Response<()>, AppError>;

    /// Triggers a `workflow_dispatch` event for a workflow given its file name
    async fn create_workflow_dispatch_event_by_file_name(
        &self,
        owner: &str,
        repo: &str,
        workflow_file_name: &str,
        event: &CreateWorkflowDispatchEventRequest,
    ) -> Result<Response<()>, AppError>;
}
