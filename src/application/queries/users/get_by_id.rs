use super::UserQueryService;
use crate::application::{
    dto::UserDto,
    error::{ApplicationError, ApplicationResult},
    lookup::{self, USER_NOT_FOUND},
};

pub struct GetUserByIdQuery {
    pub id: i64,
}

impl UserQueryService {
    pub async fn get_user_by_id(&self, query: GetUserByIdQuery) -> ApplicationResult<UserDto> {
        let id = lookup::user_id(query.id)?;
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(USER_NOT_FOUND))?;
        Ok(user.into())
    }
}
