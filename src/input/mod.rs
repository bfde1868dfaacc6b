mod config;

pub mod json_input;

pub use config::*;
