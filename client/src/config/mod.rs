mod config;
mod logging_config;
mod symbols_config;
mod tictactoe_config;

pub use config::{Config, default_config_path, get_config_manager};
pub use logging_config::LoggingConfig;
pub use symbols_config::SymbolsConfig;
pub use tictactoe_config::TicTacToeConfig;
