use crate::games::SessionRng;
use super::board::Board;
use super::types::{
    BotType, COMPUTER_WIN_SCORE, Cell, DRAW_SCORE, HUMAN_WIN_SCORE, Mark, MoveEvaluation,
};
use super::win_detector::{check_win, is_terminal};

pub fn calculate_move(
    bot_type: BotType,
    board: &Board,
    mark: Mark,
    rng: &mut SessionRng,
) -> Option<usize> {
    match bot_type {
        BotType::Minimax => best_move(board, mark).map(|evaluation| evaluation.cell),
        BotType::Random => calculate_random_move(board, rng),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    rng.choose(&board.empty_cells()).copied()
}

/// Minimax-optimal move for `mark_to_move`, or `None` when the board is already
/// won or full.
///
/// The computer maximizes, the human minimizes. Ties go to the lowest cell index.
/// The search runs on a copy; `board` is never modified.
pub fn best_move(board: &Board, mark_to_move: Mark) -> Option<MoveEvaluation> {
    if is_terminal(board) {
        return None;
    }

    let mut working_board = *board;
    search(&mut working_board, mark_to_move)
}

fn terminal_score(board: &Board) -> Option<i32> {
    if check_win(board, Mark::Human).is_some() {
        Some(HUMAN_WIN_SCORE)
    } else if check_win(board, Mark::Computer).is_some() {
        Some(COMPUTER_WIN_SCORE)
    } else if board.is_full() {
        Some(DRAW_SCORE)
    } else {
        None
    }
}

fn minimax(board: &mut Board, mark_to_move: Mark) -> i32 {
    if let Some(score) = terminal_score(board) {
        return score;
    }

    match search(board, mark_to_move) {
        Some(evaluation) => evaluation.score,
        None => DRAW_SCORE,
    }
}

// Each trial placement is undone before the next one.
fn search(board: &mut Board, mark_to_move: Mark) -> Option<MoveEvaluation> {
    let mut best: Option<MoveEvaluation> = None;

    for cell in board.empty_cells() {
        board.set(cell, Cell::Marked(mark_to_move));
        let score = minimax(board, mark_to_move.opponent());
        board.set(cell, Cell::Empty);

        let improves = match best {
            None => true,
            Some(current) => match mark_to_move {
                Mark::Computer => score > current.score,
                Mark::Human => score < current.score,
            },
        };

        if improves {
            best = Some(MoveEvaluation::new(cell, score));
        }
    }

    best
}
