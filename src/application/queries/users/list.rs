use super::UserQueryService;
use crate::application::{dto::UserDto, error::ApplicationResult};

impl UserQueryService {
    /// Every user, in whatever order the store returns them.
    pub async fn list_users(&self) -> ApplicationResult<Vec<UserDto>> {
        let users = self.user_repo.list().await?;
        Ok(users.into_iter().map(Into::into).collect())
    }
}
