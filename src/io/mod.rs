pub mod file_operations;

pub use file_operations::{
    atomic_write_to_file, is_staging_file_name, read_file_safe, read_from_file,
    sweep_stale_temp_files, write_file_safe,
};
