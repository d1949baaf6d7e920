//! Utility functions

pub mod hex;
pub mod file;

pub use hex::{format_hex_id, parse_hex_id};
pub use file::read_json_file;
