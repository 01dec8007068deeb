//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! compiled-in defaults (schema.rs)
//!     → settings file, TOML (loader.rs)
//!     → environment overrides (loader.rs)
//!     → CLI flag overrides (lifecycle::startup)
//!     → validation.rs (semantic checks)
//!     → PortfolioConfig (validated, immutable)
//!     → shared via Arc to all request handlers
//! ```
//!
//! # Design Decisions
//! - The profile is immutable once loaded; there is no reload path
//! - All fields have defaults to allow minimal settings files
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{PortfolioConfig, ServerConfig};
pub use validation::{validate_config, ValidationError};
