// src/application/commands/tasks/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::{CreateTaskCommand, CreateTaskCommandBuilder};
pub use delete::DeleteTaskCommand;
pub use service::TaskCommandService;
pub use update::UpdateTaskCommand;
