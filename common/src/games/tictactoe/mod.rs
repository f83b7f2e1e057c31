mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{best_move, calculate_move};
pub use game_state::TicTacToeGameState;
pub use types::{
    BotType, CELL_COUNT, COMPUTER_WIN_SCORE, Cell, DRAW_SCORE, FirstPlayerMode, GameStatus,
    HUMAN_WIN_SCORE, Mark, MoveEvaluation, WinningLine,
};
pub use win_detector::{WINNING_LINES, check_win, find_winner, is_terminal};

/// Empty cells of `board` in ascending index order.
pub fn empty_cells(board: &Board) -> Vec<usize> {
    board.empty_cells()
}
