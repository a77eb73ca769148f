pub mod enums;
pub mod task;
pub mod timer;
pub mod views;

pub use enums::{ParseThemeError, Theme, TimerState, UiMode};
pub use task::{Task, TaskBoard};
pub use timer::{format_clock, FocusTimer, TimerSignal, SESSION_SECS};
pub use views::Summary;
