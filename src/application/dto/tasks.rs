use crate::domain::task::Task;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TaskDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub priority: i32,
    pub completed: bool,
    pub slug: String,
    pub user_id: i64,
}

impl From<Task> for TaskDto {
    fn from(task: Task) -> Self {
        Self {
            id: task.id.into(),
            title: task.title.into_inner(),
            content: task.content.into_inner(),
            priority: task.priority.into(),
            completed: task.completed,
            slug: task.slug.into_inner(),
            user_id: task.user_id.into(),
        }
    }
}
