//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Apply CLI overrides → Validate → Init logging
//!     → Bind listener → Serve
//!
//! Shutdown (signals.rs):
//!     SIGTERM/SIGINT → Stop accepting → Drain in-flight requests → Exit
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then logging, then the listener
//! - Any startup error is fatal; there is no degraded mode

pub mod signals;
pub mod startup;

pub use startup::{ServeOverrides, StartupError};
