//! Page composition subsystem.
//!
//! # Data Flow
//! ```text
//! PortfolioConfig (validated, immutable)
//!     → pages.rs (one builder per routed page)
//!     → Page { sections: Vec<Section> }
//!     → render layer (templates)
//! ```
//!
//! # Design Decisions
//! - Composition is pure: same profile in, same section tree out
//! - View types are plain serializable records; no behavior in the tree
//! - Missing optional content degrades a section, never fails the page

pub mod pages;
pub mod sections;

pub use pages::{experience, home, projects, publications};
pub use sections::{Page, Section, SiteChrome};
