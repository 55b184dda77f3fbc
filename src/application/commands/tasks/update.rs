// src/application/commands/tasks/update.rs
use super::TaskCommandService;
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        lookup::{self, TASK_NOT_FOUND},
    },
    domain::task::{Priority, TaskContent, TaskTitle, TaskUpdate},
};
use tracing::info;

pub struct UpdateTaskCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub priority: Option<i32>,
}

impl TaskCommandService {
    /// Overwrite the provided fields. A new title does not regenerate the slug.
    pub async fn update_task(&self, command: UpdateTaskCommand) -> ApplicationResult<()> {
        let id = lookup::task_id(command.id)?;
        if self.task_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found(TASK_NOT_FOUND));
        }

        let mut update = TaskUpdate::new(id);
        if let Some(title) = command.title {
            update = update.with_title(TaskTitle::new(title)?);
        }
        if let Some(content) = command.content {
            update = update.with_content(TaskContent::new(content));
        }
        if let Some(priority) = command.priority {
            update = update.with_priority(Priority(priority));
        }
        if update.is_empty() {
            return Err(ApplicationError::validation(
                "at least one field must be provided",
            ));
        }

        self.task_repo.update(update).await?;
        info!(task_id = %id, "task updated");
        Ok(())
    }
}
