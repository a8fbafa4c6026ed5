pub mod entry;
pub mod read;
pub mod sweep;
pub mod write;
