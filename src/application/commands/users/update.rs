// src/application/commands/users/update.rs
use super::UserCommandService;
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        lookup::{self, USER_NOT_FOUND},
    },
    domain::user::{Age, PersonName, UserUpdate},
};
use tracing::info;

pub struct UpdateUserCommand {
    pub id: i64,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub age: Option<i32>,
}

impl UserCommandService {
    /// Overwrite the provided mutable fields. Username and slug never change.
    ///
    /// A missing user is reported before anything about the payload.
    pub async fn update_user(&self, command: UpdateUserCommand) -> ApplicationResult<()> {
        let id = lookup::user_id(command.id)?;
        if self.user_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found(USER_NOT_FOUND));
        }

        let mut update = UserUpdate::new(id);
        if let Some(firstname) = command.firstname {
            update = update.with_firstname(PersonName::new(firstname)?);
        }
        if let Some(lastname) = command.lastname {
            update = update.with_lastname(PersonName::new(lastname)?);
        }
        if let Some(age) = command.age {
            update = update.with_age(Age::new(age)?);
        }
        if update.is_empty() {
            return Err(ApplicationError::validation(
                "at least one field must be provided",
            ));
        }

        self.user_repo.update(update).await?;
        info!(user_id = %id, "user updated");
        Ok(())
    }
}
