pub mod files;
#[cfg(test)]
pub mod memory;
pub mod slots;

pub use files::{ensure_data_dir, init_local_data_dir, LOG_FILE_NAME};
#[cfg(test)]
pub use memory::MemorySlots;
pub use slots::{FileSlots, SlotStorage, THEME_SLOT, TODOS_SLOT};
