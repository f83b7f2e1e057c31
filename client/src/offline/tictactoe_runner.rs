use std::io::{BufRead, Write};

use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{GameStatus, Mark, TicTacToeGameState};
use tictactoe_common::log;

use crate::config::Config;
use crate::console_ui::{HumanInput, is_yes, parse_input, render_board};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub human_wins: u32,
    pub computer_wins: u32,
    pub draws: u32,
}

impl SessionSummary {
    pub fn games_played(&self) -> u32 {
        self.human_wins + self.computer_wins + self.draws
    }

    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::HumanWon(_) => self.human_wins += 1,
            GameStatus::ComputerWon(_) => self.computer_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }
}

fn write_text<W: Write>(output: &mut W, text: &str) -> Result<(), String> {
    output
        .write_all(text.as_bytes())
        .and_then(|_| output.flush())
        .map_err(|e| format!("Failed to write output: {}", e))
}

fn write_line<W: Write>(output: &mut W, text: &str) -> Result<(), String> {
    write_text(output, &format!("{}\n", text))
}

// `None` on end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, String> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| format!("Failed to read input: {}", e))?;
    Ok(if read == 0 { None } else { Some(line) })
}

enum GameEnd {
    Finished(GameStatus),
    Quit,
}

fn play_single_game<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &Config,
    rng: &mut SessionRng,
) -> Result<GameEnd, String> {
    let bot_type = config.tictactoe.bot_type;
    let first_mark = config.tictactoe.first_player.resolve(rng);
    let mut state = TicTacToeGameState::new(first_mark);
    log!("New game: {} moves first against the {} bot", first_mark, bot_type);

    write_line(
        output,
        &format!(
            "New game. You are '{}', the computer is '{}'.",
            config.symbols.human, config.symbols.computer
        ),
    )?;

    if first_mark == Mark::Computer {
        let cell = state.play_computer_turn(bot_type, rng)?;
        write_line(output, &format!("Computer marks cell {}.", cell))?;
    }

    while !state.is_over() {
        write_line(output, &render_board(state.board(), None, &config.symbols))?;
        write_text(output, "Your move (0-8, q to quit): ")?;

        let Some(line) = read_line(input)? else {
            return Ok(GameEnd::Quit);
        };

        let cell = match parse_input(&line) {
            Ok(HumanInput::Cell(cell)) => cell,
            Ok(HumanInput::Quit) => return Ok(GameEnd::Quit),
            Err(e) => {
                write_line(output, &e)?;
                continue;
            }
        };

        match state.play_round(cell, bot_type, rng) {
            Ok(Some(reply)) => write_line(output, &format!("Computer marks cell {}.", reply))?,
            Ok(None) => {}
            Err(e) => write_line(output, &e)?,
        }
    }

    write_line(
        output,
        &render_board(state.board(), state.winning_line(), &config.symbols),
    )?;
    if let Some(message) = state.status().result_message() {
        write_line(output, message)?;
    }

    Ok(GameEnd::Finished(state.status()))
}

/// Plays games until the human quits, declines a rematch, or input ends.
pub fn run_tictactoe_game<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &Config,
) -> Result<SessionSummary, String> {
    let mut rng = SessionRng::from_seed_or_random(config.tictactoe.seed);
    log!("Session seed {}", rng.seed());

    let mut summary = SessionSummary::default();

    loop {
        match play_single_game(input, output, config, &mut rng)? {
            GameEnd::Quit => break,
            GameEnd::Finished(status) => summary.record(status),
        }

        write_text(output, "Play again? [y/N]: ")?;
        match read_line(input)? {
            Some(answer) if is_yes(&answer) => continue,
            _ => break,
        }
    }

    log!(
        "Session finished: {} won, {} lost, {} tied",
        summary.human_wins,
        summary.computer_wins,
        summary.draws
    );
    write_line(
        output,
        &format!(
            "Games: {}  You: {}  Computer: {}  Ties: {}",
            summary.games_played(),
            summary.human_wins,
            summary.computer_wins,
            summary.draws
        ),
    )?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TicTacToeConfig;
    use std::io::Cursor;
    use tictactoe_common::games::tictactoe::{BotType, FirstPlayerMode};

    fn config(first_player: FirstPlayerMode, bot_type: BotType) -> Config {
        Config {
            tictactoe: TicTacToeConfig {
                first_player,
                bot_type,
                seed: Some(3),
            },
            ..Config::default()
        }
    }

    fn run(input: &str, config: &Config) -> (SessionSummary, String) {
        let mut input = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        let summary = run_tictactoe_game(&mut input, &mut output, config).unwrap();
        (summary, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_quit_before_first_move() {
        let (summary, output) = run("q\n", &config(FirstPlayerMode::Human, BotType::Minimax));
        assert_eq!(summary, SessionSummary::default());
        assert!(output.contains("Your move"));
        assert!(output.contains("Games: 0"));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (summary, _) = run("0\n", &config(FirstPlayerMode::Human, BotType::Minimax));
        assert_eq!(summary.games_played(), 0);
    }

    #[test]
    fn test_invalid_input_is_reported_and_reprompted() {
        let (_, output) = run(
            "9\nabc\n0\n0\nq\n",
            &config(FirstPlayerMode::Human, BotType::Minimax),
        );
        assert!(output.contains("Cell 9 is out of range"));
        assert!(output.contains("'abc' is not a cell number"));
        assert!(output.contains("Cell 0 is already marked"));
    }

    #[test]
    fn test_computer_wins_when_human_ignores_threat() {
        // 0 -> 4, 1 -> 2 (block), 3 leaves 6 open for the diagonal.
        let (summary, output) = run(
            "0\n1\n3\nn\n",
            &config(FirstPlayerMode::Human, BotType::Minimax),
        );
        assert_eq!(summary.computer_wins, 1);
        assert_eq!(summary.games_played(), 1);
        assert!(output.contains("Computer marks cell 4."));
        assert!(output.contains("Computer marks cell 2."));
        assert!(output.contains("Computer marks cell 6."));
        assert!(output.contains("You lose!"));
        assert!(output.contains(" o | o |[x]"));
    }

    #[test]
    fn test_rematch_starts_new_game() {
        let (summary, output) = run(
            "0\n1\n3\ny\nq\n",
            &config(FirstPlayerMode::Human, BotType::Minimax),
        );
        assert_eq!(summary.games_played(), 1);
        assert_eq!(output.matches("New game.").count(), 2);
    }

    #[test]
    fn test_computer_opens_when_configured() {
        let (_, output) = run("q\n", &config(FirstPlayerMode::Computer, BotType::Minimax));
        assert!(output.contains("Computer marks cell 0."));
    }

    #[test]
    fn test_human_never_wins_against_minimax() {
        let (summary, _) = run(
            "0\n1\n2\n3\n4\n5\n6\n7\n8\nn\n",
            &config(FirstPlayerMode::Human, BotType::Minimax),
        );
        assert_eq!(summary.human_wins, 0);
        assert_eq!(summary.games_played(), 1);
    }
}
