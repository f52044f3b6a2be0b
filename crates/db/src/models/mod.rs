pub mod module;
pub mod task;
pub mod user;
