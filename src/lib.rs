pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod storage;

pub use error::{Result, StorageError};
pub use io::{atomic_write_to_file, read_from_file};
pub use storage::{ConfigEntry, ConfigStorage, LocalConfigStorage};
