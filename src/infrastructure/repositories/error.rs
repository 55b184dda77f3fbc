use crate::domain::errors::DomainError;

const CNT_USER_USERNAME: &str = "users_username_key";
const CNT_USER_SLUG: &str = "users_slug_key";
const CNT_USER_AGE_CHECK: &str = "users_age_non_negative_chk";
const CNT_TASK_SLUG: &str = "tasks_slug_key";
const CNT_TASK_USER: &str = "tasks_user_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_USER_USERNAME => {
                        DomainError::conflict("user with this username already exists")
                    }
                    CNT_USER_SLUG => DomainError::conflict("user slug already exists"),
                    CNT_TASK_SLUG => DomainError::conflict("task slug already exists"),
                    CNT_TASK_USER => DomainError::not_found("user was not found"),
                    CNT_USER_AGE_CHECK => DomainError::validation("age cannot be negative"),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::conflict("unique constraint violated");
                    }
                    "23503" => {
                        return DomainError::not_found("referenced record not found");
                    }
                    "23514" => {
                        return DomainError::validation("check constraint violated");
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Deleting a user trips the tasks foreign key from the referenced side, which
/// means the user still has children rather than a missing parent.
pub fn map_user_delete(err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err {
        let restricted = db_err.constraint() == Some(CNT_TASK_USER)
            || db_err.code().as_deref() == Some("23503");
        if restricted {
            return DomainError::conflict("user still owns tasks");
        }
    }
    map_sqlx(err)
}
