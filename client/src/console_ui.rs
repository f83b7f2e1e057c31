use tictactoe_common::games::tictactoe::{Board, CELL_COUNT, Cell, Mark, WinningLine};

use crate::config::SymbolsConfig;

const ROW_SEPARATOR: &str = "---+---+---";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumanInput {
    Cell(usize),
    Quit,
}

pub fn parse_input(line: &str) -> Result<HumanInput, String> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return Ok(HumanInput::Quit);
    }

    let cell: usize = trimmed
        .parse()
        .map_err(|_| format!("'{}' is not a cell number", trimmed))?;

    if cell >= CELL_COUNT {
        return Err(format!(
            "Cell {} is out of range, pick 0 to {}",
            cell,
            CELL_COUNT - 1
        ));
    }

    Ok(HumanInput::Cell(cell))
}

pub fn is_yes(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn cell_symbol(cell: Cell, index: usize, symbols: &SymbolsConfig) -> char {
    match cell {
        Cell::Empty => char::from_digit(index as u32, 10).unwrap_or('?'),
        Cell::Marked(Mark::Human) => symbols.human,
        Cell::Marked(Mark::Computer) => symbols.computer,
    }
}

/// Three text rows; empty cells show their index, winning cells are bracketed.
pub fn render_board(
    board: &Board,
    winning_line: Option<WinningLine>,
    symbols: &SymbolsConfig,
) -> String {
    let rows: Vec<String> = board
        .cells()
        .chunks(3)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, &cell)| {
                    let index = row * 3 + col;
                    let symbol = cell_symbol(cell, index, symbols);
                    if winning_line.is_some_and(|line| line.contains(index)) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    rows.join(&format!("\n{}\n", ROW_SEPARATOR))
}
