//! Ratio and bonus tables

pub mod ratio_file;

pub use ratio_file::{load_ratio_file, parse_ratio_toml};
