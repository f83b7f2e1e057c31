use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::calculate_move;
use super::types::{BotType, GameStatus, Mark, WinningLine};
use super::win_detector::check_win;

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    first_mark: Mark,
    current_mark: Mark,
    status: GameStatus,
    last_move: Option<(Mark, usize)>,
}

impl TicTacToeGameState {
    pub fn new(first_mark: Mark) -> Self {
        Self {
            board: Board::new(),
            first_mark,
            current_mark: first_mark,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn reset(&mut self, first_mark: Mark) {
        *self = Self::new(first_mark);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn first_mark(&self) -> Mark {
        self.first_mark
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<(Mark, usize)> {
        self.last_move
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.status.winning_line()
    }

    pub fn place_mark(&mut self, mark: Mark, cell: usize) -> Result<(), String> {
        if self.is_over() {
            return Err("Game is already over".to_string());
        }

        if mark != self.current_mark {
            return Err(format!("It is not the {}'s turn", mark));
        }

        self.board.place(cell, mark)?;
        self.last_move = Some((mark, cell));
        log!("{} marked cell {}", mark, cell);

        self.check_game_over(mark);

        if !self.is_over() {
            self.current_mark = mark.opponent();
        }

        Ok(())
    }

    pub fn play_computer_turn(
        &mut self,
        bot_type: BotType,
        rng: &mut SessionRng,
    ) -> Result<usize, String> {
        if self.is_over() {
            return Err("Game is already over".to_string());
        }

        if self.current_mark != Mark::Computer {
            return Err("It is not the computer's turn".to_string());
        }

        let cell = calculate_move(bot_type, &self.board, Mark::Computer, rng)
            .ok_or_else(|| "Computer has no move available".to_string())?;
        log!("{} bot chose cell {}", bot_type, cell);

        self.place_mark(Mark::Computer, cell)?;
        Ok(cell)
    }

    /// Applies the human's move, then lets the computer answer unless that move
    /// ended the game. Returns the computer's cell when it moved.
    pub fn play_round(
        &mut self,
        cell: usize,
        bot_type: BotType,
        rng: &mut SessionRng,
    ) -> Result<Option<usize>, String> {
        self.place_mark(Mark::Human, cell)?;

        if self.is_over() {
            return Ok(None);
        }

        self.play_computer_turn(bot_type, rng).map(Some)
    }

    fn check_game_over(&mut self, mover: Mark) {
        if let Some(line) = check_win(&self.board, mover) {
            self.status = match mover {
                Mark::Human => GameStatus::HumanWon(line),
                Mark::Computer => GameStatus::ComputerWon(line),
            };
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        }

        if let Some(message) = self.status.result_message() {
            log!("Game over: {}", message);
        }
    }
}
