pub mod files;
pub mod store;

pub use files::{atomic_write, ensure_data_dir, get_data_dir, init_local_dir, read_file};
pub use store::{Store, SESSIONS_KEY, TASKS_KEY, THEME_KEY};
