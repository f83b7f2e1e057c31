use super::board::Board;
use super::types::{Cell, Mark, WinningLine};

/// Rows, then columns, then the two diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// First line in table order fully held by `mark`.
pub fn check_win(board: &Board, mark: Mark) -> Option<WinningLine> {
    WINNING_LINES
        .iter()
        .enumerate()
        .find(|(_, line)| {
            line.iter()
                .all(|&cell| board.get(cell) == Some(Cell::Marked(mark)))
        })
        .map(|(index, &cells)| WinningLine::new(index, mark, cells))
}

pub fn find_winner(board: &Board) -> Option<WinningLine> {
    check_win(board, Mark::Human).or_else(|| check_win(board, Mark::Computer))
}

pub fn is_terminal(board: &Board) -> bool {
    board.is_full() || find_winner(board).is_some()
}
