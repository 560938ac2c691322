//! Platform configuration for the Bravia bridge
//!
//! The host runtime hands each platform its section of the config file as a
//! JSON value. This crate decodes that section into typed records:
//!
//! ```ignore
//! use bravia_config::PlatformConfig;
//!
//! let config = PlatformConfig::from_value(section)?;
//! for tv in &config.tvs {
//!     println!("{} at {}", tv.name, tv.ip);
//! }
//! ```

mod error;
mod platform_config;

pub use error::{ConfigError, ConfigResult};
pub use platform_config::{PlatformConfig, TvConfig, DEFAULT_POLL_INTERVAL_MS, DEFAULT_PORT};
