//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!
//! Consumers:
//!     → stdout (pretty in development, filterable via RUST_LOG)
//! ```
//!
//! # Design Decisions
//! - Structured logging throughout; the request ID ties events together
//! - The debug flag only changes the default filter, never the format

pub mod logging;
