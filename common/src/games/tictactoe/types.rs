use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::games::SessionRng;

pub const CELL_COUNT: usize = 9;

pub const HUMAN_WIN_SCORE: i32 = -10;
pub const COMPUTER_WIN_SCORE: i32 = 10;
pub const DRAW_SCORE: i32 = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    Human,
    Computer,
}

impl Mark {
    pub fn opponent(&self) -> Mark {
        match self {
            Mark::Human => Mark::Computer,
            Mark::Computer => Mark::Human,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::Human => write!(f, "human"),
            Mark::Computer => write!(f, "computer"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Mark),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }

    pub fn mark(&self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(*mark),
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        Cell::Marked(mark)
    }
}

/// A completed line: `index` is the line's position in `WINNING_LINES`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningLine {
    pub index: usize,
    pub mark: Mark,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(index: usize, mark: Mark, cells: [usize; 3]) -> Self {
        Self { index, mark, cells }
    }

    pub fn contains(&self, cell: usize) -> bool {
        self.cells.contains(&cell)
    }
}

/// Outcome of a search: the chosen cell and its minimax score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveEvaluation {
    pub cell: usize,
    pub score: i32,
}

impl MoveEvaluation {
    pub fn new(cell: usize, score: i32) -> Self {
        Self { cell, score }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    HumanWon(WinningLine),
    ComputerWon(WinningLine),
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            GameStatus::HumanWon(line) | GameStatus::ComputerWon(line) => Some(*line),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    pub fn result_message(&self) -> Option<&'static str> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::HumanWon(_) => Some("You Win!"),
            GameStatus::ComputerWon(_) => Some("You lose!"),
            GameStatus::Draw => Some("Tie Game!"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstPlayerMode {
    #[default]
    Human,
    Computer,
    Random,
}

impl FirstPlayerMode {
    pub fn resolve(&self, rng: &mut SessionRng) -> Mark {
        match self {
            FirstPlayerMode::Human => Mark::Human,
            FirstPlayerMode::Computer => Mark::Computer,
            FirstPlayerMode::Random => {
                if rng.random_bool() {
                    Mark::Human
                } else {
                    Mark::Computer
                }
            }
        }
    }
}

impl FromStr for FirstPlayerMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(FirstPlayerMode::Human),
            "computer" => Ok(FirstPlayerMode::Computer),
            "random" => Ok(FirstPlayerMode::Random),
            other => Err(format!(
                "Unknown first player mode '{}', expected human, computer or random",
                other
            )),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BotType {
    #[default]
    Minimax,
    Random,
}

impl FromStr for BotType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" => Ok(BotType::Minimax),
            "random" => Ok(BotType::Random),
            other => Err(format!(
                "Unknown bot type '{}', expected minimax or random",
                other
            )),
        }
    }
}

impl fmt::Display for BotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotType::Minimax => write!(f, "minimax"),
            BotType::Random => write!(f, "random"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_swaps_marks() {
        assert_eq!(Mark::Human.opponent(), Mark::Computer);
        assert_eq!(Mark::Computer.opponent(), Mark::Human);
    }

    #[test]
    fn test_result_messages() {
        let line = WinningLine::new(0, Mark::Human, [0, 1, 2]);
        assert_eq!(GameStatus::InProgress.result_message(), None);
        assert_eq!(GameStatus::HumanWon(line).result_message(), Some("You Win!"));
        assert_eq!(GameStatus::ComputerWon(line).result_message(), Some("You lose!"));
        assert_eq!(GameStatus::Draw.result_message(), Some("Tie Game!"));
    }

    #[test]
    fn test_first_player_mode_parsing() {
        assert_eq!("Computer".parse::<FirstPlayerMode>(), Ok(FirstPlayerMode::Computer));
        assert_eq!(" random ".parse::<FirstPlayerMode>(), Ok(FirstPlayerMode::Random));
        assert!("nobody".parse::<FirstPlayerMode>().is_err());
    }

    #[test]
    fn test_fixed_first_player_modes_ignore_rng() {
        let mut rng = SessionRng::new(5);
        assert_eq!(FirstPlayerMode::Human.resolve(&mut rng), Mark::Human);
        assert_eq!(FirstPlayerMode::Computer.resolve(&mut rng), Mark::Computer);
    }

    #[test]
    fn test_bot_type_parsing() {
        assert_eq!("MINIMAX".parse::<BotType>(), Ok(BotType::Minimax));
        assert_eq!("random".parse::<BotType>(), Ok(BotType::Random));
        assert!("alphabeta".parse::<BotType>().is_err());
    }
}
