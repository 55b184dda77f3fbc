// src/domain/mod.rs
pub mod errors;
pub mod slug;
pub mod task;
pub mod user;
