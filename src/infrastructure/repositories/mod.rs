// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_task;
mod postgres_user;

pub(crate) use error::{map_sqlx, map_user_delete};
pub use postgres_task::PostgresTaskRepository;
pub use postgres_user::PostgresUserRepository;
