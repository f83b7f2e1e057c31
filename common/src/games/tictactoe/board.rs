use super::types::{CELL_COUNT, Cell, Mark};

/// Row-major 3x3 grid, cell `0` top-left through `8` bottom-right.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Builds a board from a layout such as `"xo_ _x_ o__"`.
    ///
    /// `x` is the computer, `o` the human, `_` or `.` an empty cell. Whitespace is ignored.
    pub fn parse(layout: &str) -> Result<Self, String> {
        let mut cells = [Cell::Empty; CELL_COUNT];
        let mut count = 0;

        for symbol in layout.chars().filter(|c| !c.is_whitespace()) {
            if count == CELL_COUNT {
                return Err(format!("Board layout has more than {} cells", CELL_COUNT));
            }
            cells[count] = match symbol.to_ascii_lowercase() {
                'x' => Cell::Marked(Mark::Computer),
                'o' => Cell::Marked(Mark::Human),
                '_' | '.' => Cell::Empty,
                other => return Err(format!("Unexpected board symbol '{}'", other)),
            };
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(format!(
                "Board layout has {} cells, expected {}",
                count, CELL_COUNT
            ));
        }

        Ok(Self { cells })
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, cell: usize) -> Option<Cell> {
        self.cells.get(cell).copied()
    }

    pub fn is_valid_move(&self, cell: usize) -> bool {
        self.get(cell) == Some(Cell::Empty)
    }

    /// Empty cells in ascending index order.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn place(&mut self, cell: usize, mark: Mark) -> Result<(), String> {
        match self.get(cell) {
            None => Err(format!(
                "Cell {} is out of range, expected 0..={}",
                cell,
                CELL_COUNT - 1
            )),
            Some(Cell::Marked(_)) => Err(format!("Cell {} is already marked", cell)),
            Some(Cell::Empty) => {
                self.cells[cell] = Cell::Marked(mark);
                Ok(())
            }
        }
    }

    // Unchecked; the search only touches indices from `empty_cells`.
    pub(crate) fn set(&mut self, cell: usize, value: Cell) {
        self.cells[cell] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_cells(), (0..9).collect::<Vec<_>>());
        assert!(!board.is_full());
    }

    #[test]
    fn test_parse_reads_row_major_layout() {
        let board = Board::parse("xo_ ___ __o").unwrap();
        assert_eq!(board.get(0), Some(Cell::Marked(Mark::Computer)));
        assert_eq!(board.get(1), Some(Cell::Marked(Mark::Human)));
        assert_eq!(board.get(8), Some(Cell::Marked(Mark::Human)));
        assert_eq!(board.empty_cells(), vec![2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_parse_rejects_bad_layouts() {
        assert!(Board::parse("xo").is_err());
        assert!(Board::parse("xoxoxoxoxo").is_err());
        assert!(Board::parse("xo? ___ ___").is_err());
    }

    #[test]
    fn test_place_marks_empty_cell() {
        let mut board = Board::new();
        assert!(board.place(4, Mark::Human).is_ok());
        assert_eq!(board.get(4), Some(Cell::Marked(Mark::Human)));
        assert!(!board.is_valid_move(4));
    }

    #[test]
    fn test_place_rejects_occupied_cell_and_keeps_board() {
        let mut board = Board::parse("x__ ___ ___").unwrap();
        let before = board;

        assert!(board.place(0, Mark::Human).is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_rejects_out_of_range_cell() {
        let mut board = Board::new();
        assert!(board.place(9, Mark::Computer).is_err());
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_full_board_has_no_empty_cells() {
        let board = Board::parse("xox xoo oxx").unwrap();
        assert!(board.is_full());
        assert!(board.empty_cells().is_empty());
    }
}
