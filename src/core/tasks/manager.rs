use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
    time::Duration,
};

use tokio::runtime::Runtime;

use super::TaskResult;
use crate::{
    api,
    core::models::SessionActionKind,
};

/// Owns the async runtime and a channel back to the UI thread. Every task
/// runs on its own thread and reports exactly one `TaskResult`; the app
/// drains the channel once per frame.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));
        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    pub fn load_dashboard(&self, base_url: String) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                let client = api::client().map_err(|e| e.to_string())?;
                api::get_dashboard(&client, &base_url).await.map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::DashboardLoaded(result));
        });
    }

    pub fn load_chart(&self, base_url: String) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                let client = api::client().map_err(|e| e.to_string())?;
                api::get_progress_chart(&client, &base_url).await.map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::ChartLoaded(result));
        });
    }

    pub fn fetch_chapter_content(&self, base_url: String, chapter_id: i64) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                let client = api::client().map_err(|e| e.to_string())?;
                api::fetch_chapter_content(&client, &base_url, chapter_id)
                    .await
                    .map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::ContentFetched { chapter_id, result });
        });
    }

    pub fn submit_session_action(
        &self,
        base_url: String,
        kind: SessionActionKind,
        target: String,
        fields: Vec<(String, String)>,
    ) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                let client = api::client().map_err(|e| e.to_string())?;
                api::post_form(&client, &base_url, &target, &fields)
                    .await
                    .map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::SessionSubmitted { kind, result });
        });
    }

    pub fn submit_plan(&self, base_url: String, fields: Vec<(String, String)>) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                let client = api::client().map_err(|e| e.to_string())?;
                api::post_form(&client, &base_url, "/create-schedule", &fields)
                    .await
                    .map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::PlanSubmitted(result));
        });
    }

    /// Fires a dashboard reload after `delay`, mirroring the delayed refresh
    /// that follows a successful content fetch.
    pub fn schedule_reload(&self, delay: Duration) {
        let (sender, _) = self.task_context();

        thread::spawn(move || {
            thread::sleep(delay);
            let _ = sender.send(TaskResult::RequestReload);
        });
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}
