use crate::error::AppError;
use crate::model::options::{AlertListOptions, AnalysesListOptions};
use crate::model::requests::{CodeScanningAlertState, SarifAnalysis};
use crate::model::response::Response;
use crate::presentation::code_scanning::{Alert, SarifId, ScanningAnalysis};
use async_trait::async_trait;

/// Interface for the code scanning service
#[async_trait]
pub trait CodeScanningService: Send + Sync {
    /// Lists the alerts of a repository
    async fn list_alerts_for_repo(
        &self,
        owner: &str,
        repo: &str,
        opts: Option<&AlertListOptions>,
    ) -> Result<Response<Vec<Alert>>, AppError>;

    /// Lists the alerts of every repository in an organization
    async fn list_alerts_for_org(
        &self,
        org: &str,
        opts: Option<&AlertListOptions>,
    ) -> Result<Response<Vec<Alert>>, AppError>;

    /// Gets an alert
    async fn get_alert(&self, owner: &str, repo: &str, number: u64)
    -> Result<Response<Alert>, AppError>;

    /// Reopens or dismisses an alert
    ///
    /// Dismissing without a reason fails with [`AppError::InvalidInput`]
    /// before any request is sent.
    async fn update_alert(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        state: &CodeScanningAlertState,
    ) -> Result<Response<Alert>, AppError>;

    /// Lists the analyses of a repository
    async fn list_analyses_for_repo(
        &self,
        owner: &str,
        repo: &str,
        opts: Option<&AnalysesListOptions>,
    ) -> Result<Response<Vec<ScanningAnalysis>>, AppError>;

    /// Uploads a SARIF file
    ///
    /// Processing is asynchronous; the returned [`SarifId`] can be used to
    /// poll its status.
    async fn upload_sarif(
        &self,
        owner: &str,
        repo: &str,
        analysis: &SarifAnalysis,
    ) -> Result<Response<SarifId>, AppError>;
}
