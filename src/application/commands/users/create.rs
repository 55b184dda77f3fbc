// src/application/commands/users/create.rs
use super::UserCommandService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        slug::Slug,
        user::{Age, NewUser, PersonName, Username},
    },
};
use tracing::{info, warn};

pub struct CreateUserCommand {
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub age: i32,
}

impl UserCommandService {
    /// Create a user whose slug is derived from the username.
    ///
    /// The username lookup only produces a friendlier error for the common case;
    /// the unique constraints on `username` and `slug` decide concurrent races and
    /// surface as `Conflict` from the repository.
    pub async fn create_user(&self, command: CreateUserCommand) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        let firstname = PersonName::new(command.firstname)?;
        let lastname = PersonName::new(command.lastname)?;
        let age = Age::new(command.age)?;

        if self.user_repo.find_by_username(&username).await?.is_some() {
            warn!(username = %username, "username already taken");
            return Err(ApplicationError::conflict(
                "user with this username already exists",
            ));
        }

        let slug = Slug::new(self.slugger.slugify(username.as_str()))?;
        let new_user = NewUser {
            username,
            firstname,
            lastname,
            age,
            slug,
        };

        let user = self.user_repo.insert(new_user).await?;
        info!(user_id = %user.id, slug = %user.slug, "user created");
        Ok(user.into())
    }
}
