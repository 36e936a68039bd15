//! Settings loading.
//!
//! gplint works without any configuration. An optional `.gplint.yml`
//! adjusts timeouts, Docker behaviour and the external programs checks
//! invoke.
//!
//! # Example
//!
//! ```
//! use gplint::config::Settings;
//!
//! let settings = Settings::default();
//! assert_eq!(settings.timeouts.url_check_secs, 5);
//! assert!(settings.docker.cleanup);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{discover, load_settings, load_settings_file, parse_settings, SETTINGS_FILE};
pub use schema::{DockerSettings, Settings, Timeouts, Tools};
