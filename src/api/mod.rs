//! HTTP client functions for the study-planner backend. All calls are
//! one-shot: no retries, no backoff, no request coordination.

use std::time::Duration;

use reqwest::{
    Client,
    Response,
};

use crate::core::{
    models::{
        DashboardData,
        ProgressChart,
    },
    StudydeskError,
};

pub fn client() -> Result<Client, StudydeskError> {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| StudydeskError::Custom(format!("HTTP client build failed: {e}")))
}

fn ensure_success(resp: &Response) -> Result<(), StudydeskError> {
    if !resp.status().is_success() {
        return Err(StudydeskError::HttpStatus {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }
    Ok(())
}

/// Bootstrap payload: upcoming sessions plus the chapter and subject
/// collections the server otherwise renders into its pages.
pub async fn get_dashboard(
    client: &Client,
    base_url: &str,
) -> Result<DashboardData, StudydeskError> {
    let resp = client.get(format!("{}/api/dashboard", base_url)).send().await?;
    ensure_success(&resp)?;
    Ok(resp.json().await?)
}

pub async fn get_progress_chart(
    client: &Client,
    base_url: &str,
) -> Result<ProgressChart, StudydeskError> {
    let resp = client.get(format!("{}/api/progress-chart", base_url)).send().await?;
    ensure_success(&resp)?;
    Ok(resp.json().await?)
}

/// Asks the server to pull Wikipedia content for a chapter. Any OK status is
/// success; the body is ignored.
pub async fn fetch_chapter_content(
    client: &Client,
    base_url: &str,
    chapter_id: i64,
) -> Result<(), StudydeskError> {
    let resp = client.get(format!("{}/fetch-content/{}", base_url, chapter_id)).send().await?;
    ensure_success(&resp)
}

/// Posts form fields to a server-side transition endpoint
/// (`/complete-session/{id}`, `/miss-session/{id}`, `/create-schedule`).
pub async fn post_form(
    client: &Client,
    base_url: &str,
    target: &str,
    fields: &[(String, String)],
) -> Result<(), StudydeskError> {
    let resp = client.post(format!("{}{}", base_url, target)).form(fields).send().await?;
    ensure_success(&resp)
}
