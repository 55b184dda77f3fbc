//! Ids supplied by callers. Stored ids are always positive, so a non-positive id
//! names no row and is reported exactly like a missing one.
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::{task::TaskId, user::UserId};

pub const USER_NOT_FOUND: &str = "user was not found";
pub const TASK_NOT_FOUND: &str = "task was not found";

pub fn user_id(raw: i64) -> ApplicationResult<UserId> {
    UserId::new(raw).map_err(|_| ApplicationError::not_found(USER_NOT_FOUND))
}

pub fn task_id(raw: i64) -> ApplicationResult<TaskId> {
    TaskId::new(raw).map_err(|_| ApplicationError::not_found(TASK_NOT_FOUND))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_ids_read_as_missing() {
        assert!(user_id(0).unwrap_err().is_not_found());
        assert!(task_id(-4).unwrap_err().is_not_found());
        assert_eq!(i64::from(user_id(3).unwrap()), 3);
    }
}
