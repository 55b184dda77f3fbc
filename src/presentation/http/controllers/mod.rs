// src/presentation/http/controllers/mod.rs
pub mod tasks;
pub mod users;
