pub mod tasks;
pub mod users;

pub use tasks::TaskDto;
pub use users::UserDto;
