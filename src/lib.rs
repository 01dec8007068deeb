//! Configuration-driven developer portfolio site.
//!
//! # Architecture Overview
//!
//! ```text
//!   settings file / env / CLI
//!        │
//!        ▼
//!   ┌─────────┐    ┌─────────┐    ┌─────────┐    ┌─────────┐
//!   │ config  │───▶│ compose │───▶│ render  │───▶│  http   │──▶ client
//!   │ (model) │    │ (pages) │    │ (tera)  │    │ (axum)  │
//!   └─────────┘    └─────────┘    └─────────┘    └─────────┘
//!
//!   Cross-cutting: lifecycle (startup/shutdown), observability (logging)
//! ```
//!
//! The profile is loaded and validated once at startup, then shared
//! read-only with every request. Page composition and rendering are pure
//! functions over that snapshot, so request handling needs no locking.

// Core subsystems
pub mod compose;
pub mod config;
pub mod http;
pub mod render;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::PortfolioConfig;
pub use http::HttpServer;
