pub mod module_repo;
pub mod task_repo;
pub mod user_repo;

pub use module_repo::ModuleRepo;
pub use task_repo::TaskRepo;
pub use user_repo::UserRepo;
