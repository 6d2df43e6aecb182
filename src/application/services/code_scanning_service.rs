/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::interfaces::code_scanning::CodeScanningService;
use crate::error::AppError;
use crate::model::http::Client;
use crate::model::options::{AlertListOptions, AnalysesListOptions, add_options};
use crate::model::requests::{CodeScanningAlertState, SarifAnalysis};
use crate::model::response::Response;
use crate::presentation::code_scanning::{Alert, SarifId, ScanningAnalysis};
use async_trait::async_trait;
use reqwest::Method;
use tracing::{debug, info};

#[async_trait]
impl CodeScanningService for Client {
    async fn list_alerts_for_repo(
        &self,
        owner: &str,
        repo: &str,
        opts: Option<&AlertListOptions>,
    ) -> Result<Response<Vec<Alert>>, AppError> {
        let path = add_options(&format!("repos/{owner}/{repo}/code-scanning/alerts"), opts)?;
        let result: Response<Vec<Alert>> = self.get(&path).await?;
        debug!("Code scanning alerts obtained: {} alerts", result.data.len());
        Ok(result)
    }

    async fn list_alerts_for_org(
        &self,
        org: &str,
        opts: Option<&AlertListOptions>,
    ) -> Result<Response<Vec<Alert>>, AppError> {
        let path = add_options(&format!("orgs/{org}/code-scanning/alerts"), opts)?;
        let result: Response<Vec<Alert>> = self.get(&path).await?;
        debug!(
            "Code scanning alerts of {} obtained: {} alerts",
            org,
            result.data.len()
        );
        Ok(result)
    }

    async fn get_alert(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<Response<Alert>, AppError> {
        self.get(&format!("repos/{owner}/{repo}/code-scanning/alerts/{number}"))
            .await
    }

    async fn update_alert(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        state: &CodeScanningAlertState,
    ) -> Result<Response<Alert>, AppError> {
        state.validate()?;
        info!(
            "Setting code scanning alert {} of {}/{} to {}",
            number, owner, repo, state.state
        );
        self.patch(
            &format!("repos/{owner}/{repo}/code-scanning/alerts/{number}"),
            state,
        )
        .await
    }

    async fn list_analyses_for_repo(
        &self,
        owner: &str,
        repo: &str,
        opts: Option<&AnalysesListOptions>,
    ) -> Result<Response<Vec<ScanningAnalysis>>, AppError> {
        let path = add_options(&format!("repos/{owner}/{repo}/code-scanning/analyses"), opts)?;
        self.get(&path).await
    }

    async fn upload_sarif(
        &self,
        owner: &str,
        repo: &str,
        analysis: &SarifAnalysis,
    ) -> Result<Response<SarifId>, AppError> {
        info!(
            "Uploading SARIF for {} in {}/{}",
            analysis.commit_sha.as_deref().unwrap_or_default(),
            owner,
            repo
        );
        let result: Response<SarifId> = self
            .request_accepted(
                Method::POST,
                &format!("repos/{owner}/{repo}/code-scanning/sarifs"),
                Some(analysis),
            )
            .await?;
        debug!("SARIF accepted: {:?}", result.data.id);
        Ok(result)
    }
}
