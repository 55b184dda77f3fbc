// src/application/commands/tasks/delete.rs
use super::TaskCommandService;
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    lookup::{self, TASK_NOT_FOUND},
};
use tracing::info;

pub struct DeleteTaskCommand {
    pub id: i64,
}

impl TaskCommandService {
    pub async fn delete_task(&self, command: DeleteTaskCommand) -> ApplicationResult<()> {
        let id = lookup::task_id(command.id)?;

        if self.task_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found(TASK_NOT_FOUND));
        }

        self.task_repo.delete(id).await?;
        info!(task_id = %id, "task deleted");
        Ok(())
    }
}
