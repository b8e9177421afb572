use crate::controllers::collect_values;
use crate::core::client::{ApiClient, ApiRequest};
use crate::core::paginator::Paginator;
use crate::core::{ListEnvelope, ListParams, ListResource, ReadResource};
use crate::models::{Task, TaskStatus, UpdateTaskRequest};
use crate::utils::error::{ClumioError, Result};
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::Instant;

pub const TASKS_MEDIA_TYPE: &str = "application/api.clumio.tasks=v1+json";
const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Clone)]
pub struct TasksController {
    client: ApiClient,
}

impl TasksController {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list_tasks(&self, params: &ListParams) -> Result<ListEnvelope<Task>> {
        self.client.execute(self.list_request(params)).await
    }

    pub fn pages(&self, params: &ListParams) -> Paginator<Task> {
        Paginator::new(self.client.clone(), self.list_request(params))
    }

    pub async fn read_task(&self, task_id: &str) -> Result<Task> {
        let request = ApiRequest::get("/tasks/{task_id}")
            .path_param("task_id", task_id)
            .accept(TASKS_MEDIA_TYPE);
        self.client.execute(request).await
    }

    pub async fn cancel_task(&self, task_id: &str) -> Result<Task> {
        let request = ApiRequest::put("/tasks/{task_id}")
            .path_param("task_id", task_id)
            .accept(TASKS_MEDIA_TYPE)
            .json_body(&UpdateTaskRequest {
                status: TaskStatus::Aborting,
            })?;
        self.client.execute(request).await
    }

    /// 週期性查詢工作狀態，直到完成、失敗、中止或逾時
    pub async fn wait_for_task(
        &self,
        task_id: &str,
        poll_interval: Duration,
        timeout: Duration,
    ) -> Result<Task> {
        let poll_interval = poll_interval.max(MIN_POLL_INTERVAL);
        let deadline = Instant::now().checked_add(timeout);
        loop {
            let task = self.read_task(task_id).await?;
            if task.status.is_terminal() {
                tracing::info!("✅ Task {} finished with status {:?}", task_id, task.status);
                return Ok(task);
            }

            let now = Instant::now();
            let remaining = deadline.map(|d| d.saturating_duration_since(now));
            if remaining == Some(Duration::ZERO) {
                return Err(ClumioError::Timeout {
                    message: format!(
                        "task {} still {:?} after {:?}",
                        task_id, task.status, timeout
                    ),
                });
            }

            tracing::debug!(
                "⏳ Task {} is {:?} ({}%)",
                task_id,
                task.status,
                task.progress_percentage.unwrap_or(0)
            );
            let wait = remaining.map_or(poll_interval, |r| poll_interval.min(r));
            tokio::time::sleep(wait).await;
        }
    }

    fn list_request(&self, params: &ListParams) -> ApiRequest {
        ApiRequest::get("/tasks")
            .list_params(params)
            .accept(TASKS_MEDIA_TYPE)
    }
}

#[async_trait]
impl ListResource for TasksController {
    fn resource_name(&self) -> &'static str {
        "tasks"
    }

    async fn list_values(
        &self,
        params: &ListParams,
        max_items: Option<usize>,
    ) -> Result<Vec<serde_json::Value>> {
        collect_values(self.pages(params), max_items).await
    }
}

#[async_trait]
impl ReadResource for TasksController {
    async fn read_value(&self, id: &str) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self.read_task(id).await?)?)
    }
}
