//! Configuration module for edge-resizer
//!
//! The only recognized option is the edge hit margin. It can be built in
//! code or read from a small TOML file.

pub mod resizer;

pub use resizer::{ConfigError, ResizerConfig};
