// src/domain/task/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewTask, Task, TaskUpdate};
pub use repository::TaskRepository;
pub use value_objects::{Priority, TaskContent, TaskId, TaskTitle};
