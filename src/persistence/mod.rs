pub mod json_file;

pub use json_file::{read_dataset, write_dataset};
