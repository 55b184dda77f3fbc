use crate::domain::user::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub age: i32,
    pub slug: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            username: user.username.into(),
            firstname: user.firstname.into(),
            lastname: user.lastname.into(),
            age: user.age.into(),
            slug: user.slug.into_inner(),
        }
    }
}
