// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod stale;
pub mod store;

pub use stale::StalePrecheckStore;
pub use store::InMemoryStore;
