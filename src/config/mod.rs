//! Configuration subsystem: schema, file loading, and the misuse guard.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{SecurityConfig, Toggle};
pub use validation::MisuseError;
