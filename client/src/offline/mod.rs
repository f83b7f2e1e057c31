mod tictactoe_runner;

pub use tictactoe_runner::{SessionSummary, run_tictactoe_game};
