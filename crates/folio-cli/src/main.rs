use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use folio_core::AppConfig;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "A single-page terminal portfolio")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file to use instead of ~/.config/folio/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the portfolio page (default)
    Run,
    /// Print the page content as JSON
    Dump {
        /// Indent the output
        #[arg(long)]
        pretty: bool,
    },
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file location
    Path,
    /// Write the default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(AppConfig::config_path);

    match cli.command {
        Some(Commands::Run) | None => {
            let config = AppConfig::load_from(&config_path)?;
            // The terminal belongs to the page while it runs, so log to a file
            logging::init_file(&config)?;
            commands::run::run(config)
        }
        Some(Commands::Dump { pretty }) => {
            let config = AppConfig::load_from(&config_path)?;
            logging::init_stderr(&config);
            commands::dump::run(pretty)
        }
        Some(Commands::Config { action }) => {
            logging::init_stderr(&AppConfig::default());
            match action {
                ConfigAction::Path => commands::config::path(&config_path),
                ConfigAction::Init { force } => commands::config::init(&config_path, force),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::parse_from(["folio"]);
        assert!(cli.command.is_none());

        let cli = Cli::parse_from(["folio", "dump", "--pretty"]);
        assert!(matches!(cli.command, Some(Commands::Dump { pretty: true })));

        let cli = Cli::parse_from(["folio", "config", "init", "--force", "--config", "/tmp/f.toml"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                action: ConfigAction::Init { force: true }
            })
        ));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/f.toml")));
    }
}
