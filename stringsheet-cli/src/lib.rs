//! CLI library for testing purposes

pub mod config;
pub mod convert;

pub use config::{FileConfig, Overrides, load_config, resolve_options};
pub use convert::{Direction, describe, run_convert_command, run_dump_command};
