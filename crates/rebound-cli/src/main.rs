use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rebound_core::{AppConfig, Delta, Size};

mod commands;

#[derive(Parser)]
#[command(name = "rebound")]
#[command(author, version, about = "Elastic, inertial panel dragging in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this configuration file instead of ~/.config/rebound/config.toml
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Drag the panel around in the terminal (default)
    Run,
    /// Replay drags headlessly and print every position and animation frame
    Simulate {
        /// Container size in pixels
        #[arg(long, value_name = "WxH")]
        container: Size,
        /// Content size in pixels
        #[arg(long, value_name = "WxH")]
        content: Size,
        /// Drag delta, repeat for a sequence of moves
        #[arg(long = "drag", value_name = "DX,DY", allow_hyphen_values = true)]
        drags: Vec<Delta>,
        /// Frame rate of the simulated display (defaults to ui.animation_fps)
        #[arg(long)]
        fps: Option<u32>,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Write a default configuration file
    Init,
    /// Print the configuration file path
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(AppConfig::config_path);

    // These only need the path, and must work while the file is broken
    match &cli.command {
        Some(Commands::Config { action: ConfigAction::Init }) => {
            return commands::config::init(&config_path);
        }
        Some(Commands::Config { action: ConfigAction::Path }) => {
            return commands::config::path(&config_path);
        }
        _ => {}
    }

    // Load configuration
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    let interactive = matches!(cli.command, Some(Commands::Run) | None);
    init_logging(&config, interactive)?;

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config),
        Some(Commands::Simulate {
            container,
            content,
            drags,
            fps,
        }) => {
            let options = commands::simulate::Options {
                container,
                content,
                drags,
                fps: fps.unwrap_or(config.ui.animation_fps),
            };
            commands::simulate::run(&config, &options, &mut std::io::stdout().lock())
        }
        // Only `config show` is left
        Some(Commands::Config { .. }) => commands::config::show(&config),
    }
}

/// Initialize logging: `RUST_LOG` wins over `general.log_level`
///
/// The terminal UI owns the screen, so it logs to a file instead of stderr.
fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if to_file {
        let log_path = config.log_path();
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&log_path)?;
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_simulate() {
        let cli = Cli::parse_from([
            "rebound",
            "simulate",
            "--container",
            "300x300",
            "--content",
            "500x300",
            "--drag",
            "-250,0",
            "--drag",
            "10,-5",
            "--fps",
            "30",
        ]);
        match cli.command {
            Some(Commands::Simulate {
                container,
                content,
                drags,
                fps,
            }) => {
                assert_eq!(container, Size::new(300.0, 300.0));
                assert_eq!(content, Size::new(500.0, 300.0));
                assert_eq!(drags, vec![Delta::new(-250.0, 0.0), Delta::new(10.0, -5.0)]);
                assert_eq!(fps, Some(30));
            }
            _ => panic!("expected simulate"),
        }
    }

    #[test]
    fn test_rejects_bad_size() {
        let result = Cli::try_parse_from([
            "rebound",
            "simulate",
            "--container",
            "300",
            "--content",
            "500x300",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_command_is_run() {
        let cli = Cli::parse_from(["rebound", "--config", "/tmp/rebound.toml"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/rebound.toml")));
    }
}
