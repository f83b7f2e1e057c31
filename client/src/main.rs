mod config;
mod console_ui;
mod offline;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tictactoe_common::games::tictactoe::{BotType, FirstPlayerMode};
use tictactoe_common::{log, logger};

use config::{Config, default_config_path, get_config_manager};
use offline::run_tictactoe_game;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against a minimax opponent")]
struct Args {
    /// Path to the YAML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Who moves first: human, computer or random
    #[arg(long)]
    first_player: Option<FirstPlayerMode>,

    /// Computer opponent: minimax or random
    #[arg(long)]
    bot: Option<BotType>,

    /// Seed for random choices
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Log to stderr even if the config disables logging
    #[arg(long)]
    verbose: bool,

    /// Write the default config to the config path and exit
    #[arg(long)]
    write_default_config: bool,
}

impl Args {
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(first_player) = self.first_player {
            config.tictactoe.first_player = first_player;
        }
        if let Some(bot) = self.bot {
            config.tictactoe.bot_type = bot;
        }
        if self.seed.is_some() {
            config.tictactoe.seed = self.seed;
        }
        if self.use_log_prefix {
            config.logging.prefix = Some("Client".to_string());
        }
        if self.verbose {
            config.logging.enabled = true;
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let config_manager = get_config_manager(&config_path);

    if args.write_default_config {
        config_manager.set_config(&Config::default())?;
        println!("Default config written to {}", config_path.display());
        return Ok(());
    }

    let mut config = config_manager.get_config()?;
    args.apply_overrides(&mut config);

    logger::init_logger(config.logging.prefix.clone(), config.logging.enabled);
    log!("Using config {}", config_path.display());

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_tictactoe_game(&mut stdin.lock(), &mut stdout.lock(), &config)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_overrides_config() {
        let args = Args::parse_from([
            "tictactoe_client",
            "--first-player",
            "computer",
            "--bot",
            "random",
            "--seed",
            "9",
            "--use-log-prefix",
        ]);
        let mut config = Config::default();

        args.apply_overrides(&mut config);

        assert_eq!(config.tictactoe.first_player, FirstPlayerMode::Computer);
        assert_eq!(config.tictactoe.bot_type, BotType::Random);
        assert_eq!(config.tictactoe.seed, Some(9));
        assert_eq!(config.logging.prefix, Some("Client".to_string()));
        assert!(!config.logging.enabled);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let args = Args::parse_from(["tictactoe_client"]);
        let mut config = Config::default();

        args.apply_overrides(&mut config);

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_bot_is_rejected() {
        assert!(Args::try_parse_from(["tictactoe_client", "--bot", "alphabeta"]).is_err());
    }
}
