use crate::core::models::{
    DashboardData,
    ProgressChart,
    SessionActionKind,
};

/// Results sent back from background tasks to the UI thread.
#[derive(Debug, Clone)]
pub enum TaskResult {
    DashboardLoaded(Result<DashboardData, String>),
    ChartLoaded(Result<ProgressChart, String>),
    ContentFetched { chapter_id: i64, result: Result<(), String> },
    SessionSubmitted { kind: SessionActionKind, result: Result<(), String> },
    PlanSubmitted(Result<(), String>),
    RequestReload,
}
