pub mod enums;
pub mod task;
pub mod theme;

pub use enums::UiMode;
pub use task::{lowest_unused_id, IdGenerator, Task, TaskId};
pub use theme::Theme;
