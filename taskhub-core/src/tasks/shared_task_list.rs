use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;
use tracing::instrument;
use uuid::Uuid;

use super::task_data::Task;
use super::task_request::UpdateTaskRequest;

pub type TaskHashMap = HashMap<Uuid, Task>;

#[derive(
    Debug,
    serde::Serialize,
    serde::Deserialize,
    utoipa::ToSchema,
    utoipa::ToResponse,
)]
pub struct TaskDataVec {
    pub tasks: Vec<Task>,
}

/// In-memory task store shared across request handlers.
///
/// The store is the seam a database-backed implementation would replace;
/// handlers only see this async interface.
#[derive(Debug, Clone)]
pub struct SharedTaskList {
    tasks: Arc<RwLock<TaskHashMap>>,
}

impl Default for SharedTaskList {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedTaskList {
    pub fn new() -> SharedTaskList {
        SharedTaskList {
            tasks: Arc::new(RwLock::new(TaskHashMap::new())),
        }
    }

    pub async fn add_task(&self, task: Task) -> anyhow::Result<Task> {
        self.tasks.write().await.insert(task.id, task.clone());
        Ok(task)
    }

    pub async fn get_task(&self, task_id: &Uuid) -> Option<Task> {
        let t = self.tasks.read().await;
        t.get(task_id).cloned()
    }

    pub async fn has_task(&self, task_id: &Uuid) -> bool {
        self.tasks.read().await.contains_key(task_id)
    }

    /// Remove a task, returning it if it existed.
    pub async fn remove_task(&self, task_id: &Uuid) -> Option<Task> {
        self.tasks.write().await.remove(task_id)
    }

    /// Tasks created by `user_id`, the view the list endpoint serves.
    #[instrument]
    pub async fn get_tasks_created_by(&self, user_id: &Uuid) -> TaskDataVec {
        let t = self.tasks.read().await;
        TaskDataVec {
            tasks: t
                .values()
                .filter(|task| task.created_by == *user_id)
                .cloned()
                .collect(),
        }
    }

    /// Apply a partial update; absent fields keep their current values.
    /// Returns the updated task, or None if the task does not exist.
    #[instrument(skip(update))]
    pub async fn update_task(
        &self,
        task_id: &Uuid,
        update: &UpdateTaskRequest,
    ) -> Option<Task> {
        let mut t = self.tasks.write().await;
        let task = t.get_mut(task_id)?;

        if let Some(title) = &update.title {
            task.title = title.clone();
        }
        if let Some(description) = &update.description {
            task.description = description.clone();
        }
        if let Some(due_date) = update.due_date {
            task.due_date = Some(due_date);
        }
        if let Some(priority) = update.priority {
            task.priority = priority;
        }
        if let Some(status) = update.status {
            task.status = status;
        }
        if let Some(assigned_to) = update.assigned_to {
            task.assigned_to = Some(assigned_to);
        }

        Some(task.clone())
    }

    pub async fn len(&self) -> usize {
        let t = self.tasks.read().await;
        t.len()
    }

    pub async fn is_empty(&self) -> bool {
        let t = self.tasks.read().await;
        t.is_empty()
    }
}
