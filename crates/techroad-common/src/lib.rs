//! techroad-common: shared error type and configuration used across all TechRoad crates.

pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::{Config, LogConfig, ServerConfig, SiteConfig};
pub use error::{Result, TechroadError};
