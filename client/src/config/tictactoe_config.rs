use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;
use tictactoe_common::games::tictactoe::{BotType, FirstPlayerMode};

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct TicTacToeConfig {
    #[serde(default)]
    pub first_player: FirstPlayerMode,
    #[serde(default)]
    pub bot_type: BotType,
    #[serde(default)]
    pub seed: Option<u64>,
}

// Every combination of modes is playable.
impl Validate for TicTacToeConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
