pub mod config;

pub use config::{ConfigOverrides, ConvertConfig};
