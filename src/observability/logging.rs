//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once at startup
//! - Derive the default filter from the debug flag
//!
//! # Design Decisions
//! - `RUST_LOG` always wins over the config-derived default

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;

/// Initialize the global tracing subscriber.
///
/// Must be called at most once; startup is the only caller.
pub fn init(server: &ServerConfig) {
    let default_directives = if server.debug {
        "portfolio_site=debug,tower_http=debug"
    } else {
        "portfolio_site=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directives.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
