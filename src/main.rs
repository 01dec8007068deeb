use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use portfolio_site::config::load_config;
use portfolio_site::lifecycle::{startup, ServeOverrides};

#[derive(Parser)]
#[command(name = "portfolio-site")]
#[command(about = "Configuration-driven developer portfolio site", version)]
struct Cli {
    /// Path to a TOML settings file overriding the built-in profile.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (the default)
    Serve {
        /// Bind host, overriding the configured value
        #[arg(long)]
        host: Option<String>,

        /// Bind port, overriding the configured value
        #[arg(long)]
        port: Option<u16>,

        /// Enable debug mode
        #[arg(long)]
        debug: bool,
    },
    /// Validate the resolved configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
        debug: false,
    });

    match command {
        Commands::Serve { host, port, debug } => {
            let overrides = ServeOverrides {
                config: cli.config,
                host,
                port,
                debug,
            };
            match startup::run(overrides).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(err) => {
                    eprintln!("error: {err}");
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Check => match load_config(cli.config.as_deref()) {
            Ok(config) => {
                println!(
                    "configuration OK: {} <{}> ({} projects, {} positions, {} publications)",
                    config.identity.name,
                    config.identity.email,
                    config.projects.len(),
                    config.experience.len(),
                    config.publications.len(),
                );
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("error: {err}");
                ExitCode::FAILURE
            }
        },
    }
}
