//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Apply CLI overrides as the last configuration layer
//! - Initialize logging
//! - Bind the listener and begin serving
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal and reaches main as a nonzero exit
//! - The listener binds before the server is built (traffic only when ready)

use std::path::PathBuf;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{load_config, validate_config, ConfigError};
use crate::http::HttpServer;
use crate::observability::logging;

/// Overrides resolved from the command line, applied on top of the file
/// and environment layers.
#[derive(Debug, Clone, Default)]
pub struct ServeOverrides {
    pub config: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub debug: bool,
}

/// Fatal startup failures.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("template engine failed to initialize: {0}")]
    Templates(#[from] tera::Error),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(std::io::Error),
}

/// Load configuration, initialize logging, bind and serve until shutdown.
pub async fn run(overrides: ServeOverrides) -> Result<(), StartupError> {
    let mut config = load_config(overrides.config.as_deref())?;
    apply_overrides(&mut config.server, &overrides);
    // CLI flags are the last layer; re-check what they may have changed.
    validate_config(&config).map_err(ConfigError::Validation)?;

    logging::init(&config.server);

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        debug = config.server.debug,
        projects = config.projects.len(),
        positions = config.experience.len(),
        "Configuration loaded"
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    let server = HttpServer::new(config)?;
    server.run(listener).await.map_err(StartupError::Serve)
}

fn apply_overrides(server: &mut crate::config::ServerConfig, overrides: &ServeOverrides) {
    if let Some(host) = &overrides.host {
        server.host = host.clone();
    }
    if let Some(port) = overrides.port {
        server.port = port;
    }
    // The flag only switches debug on; a settings file stays authoritative
    // for switching it off.
    if overrides.debug {
        server.debug = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;

    #[test]
    fn test_cli_overrides_win() {
        let mut server = ServerConfig::default();
        let overrides = ServeOverrides {
            config: None,
            host: Some("127.0.0.1".to_string()),
            port: Some(9090),
            debug: true,
        };
        apply_overrides(&mut server, &overrides);
        assert_eq!(server.host, "127.0.0.1");
        assert_eq!(server.port, 9090);
        assert!(server.debug);
    }

    #[test]
    fn test_absent_flags_leave_config_alone() {
        let mut server = ServerConfig::default();
        apply_overrides(&mut server, &ServeOverrides::default());
        assert_eq!(server, ServerConfig::default());
    }
}
