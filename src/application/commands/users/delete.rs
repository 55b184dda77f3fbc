// src/application/commands/users/delete.rs
use super::UserCommandService;
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    lookup::{self, USER_NOT_FOUND},
};
use tracing::{info, warn};

pub struct DeleteUserCommand {
    pub id: i64,
}

impl UserCommandService {
    /// Delete a user. Users that still own tasks are kept and the call fails with
    /// `Conflict`; the foreign key on `tasks.user_id` restricts the delete as well.
    pub async fn delete_user(&self, command: DeleteUserCommand) -> ApplicationResult<()> {
        let id = lookup::user_id(command.id)?;

        if self.user_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found(USER_NOT_FOUND));
        }

        let owned = self.task_repo.count_by_user(id).await?;
        if owned > 0 {
            warn!(user_id = %id, tasks = owned, "refusing to delete user with tasks");
            return Err(ApplicationError::conflict(format!(
                "user still owns {owned} task(s)"
            )));
        }

        self.user_repo.delete(id).await?;
        info!(user_id = %id, "user deleted");
        Ok(())
    }
}
