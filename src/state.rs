use arrayvec::ArrayVec;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

/// Side length of the board. The solver is specified for the classic 3x3
/// puzzle; the arithmetic below is written against this constant.
pub const SIDE: usize = 3;
pub const CELLS: usize = SIDE * SIDE;

/// The solved arrangement: tiles 1..=8 in row-major order, blank last.
pub const GOAL: [u8; CELLS] = [1, 2, 3, 4, 5, 6, 7, 8, 0];

/// Error type for board construction and move application.
#[derive(Debug, PartialEq, Eq)]
pub enum StateError {
    /// Input sequence is not a permutation of 0..=8
    InvalidState(String),
    /// Requested tile is not adjacent to the blank
    IllegalMove(u8),
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::InvalidState(msg) => write!(f, "Invalid board: {}", msg),
            StateError::IllegalMove(tile) => {
                write!(f, "Illegal move: tile {} is not next to the blank", tile)
            }
        }
    }
}

/// Parity of the inversion count over the non-blank tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

/// One arrangement of the nine cells, row-major, with 0 for the blank.
///
/// States are immutable values: applying a move produces a new state rather
/// than mutating in place, so nodes discovered during search can never alias
/// a "live" board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleState {
    cells: [u8; CELLS],
    // Index of the blank, derived from cells at construction
    blank: u8,
}

impl PuzzleState {
    /// Build a state from a raw cell array, validating that it contains each
    /// of 0..=8 exactly once.
    pub fn from_cells(cells: [u8; CELLS]) -> Result<Self, StateError> {
        let mut seen = [false; CELLS];
        for &v in &cells {
            if v as usize >= CELLS {
                return Err(StateError::InvalidState(format!(
                    "cell value {} out of range 0..={}",
                    v,
                    CELLS - 1
                )));
            }
            if seen[v as usize] {
                return Err(StateError::InvalidState(format!(
                    "cell value {} appears more than once",
                    v
                )));
            }
            seen[v as usize] = true;
        }

        // Full coverage follows from 9 distinct in-range values
        let blank = cells.iter().position(|&v| v == 0).unwrap() as u8;
        Ok(PuzzleState { cells, blank })
    }

    /// Parse a 9-digit row-major sequence ('0'..='8', blank = '0').
    ///
    /// This is the inverse of [`serialize`](Self::serialize) and the format
    /// the presentation shell hands across the boundary.
    pub fn from_sequence(seq: &str) -> Result<Self, StateError> {
        let mut cells = [0u8; CELLS];
        let mut len = 0;
        for (i, ch) in seq.chars().enumerate() {
            if i >= CELLS {
                return Err(StateError::InvalidState(format!(
                    "expected exactly {} digits, got more",
                    CELLS
                )));
            }
            match ch.to_digit(10) {
                Some(d) if (d as usize) < CELLS => cells[i] = d as u8,
                _ => {
                    return Err(StateError::InvalidState(format!(
                        "invalid character '{}' at position {}",
                        ch, i
                    )));
                }
            }
            len += 1;
        }
        if len < CELLS {
            return Err(StateError::InvalidState(format!(
                "expected exactly {} digits, got {}",
                CELLS, len
            )));
        }
        Self::from_cells(cells)
    }

    /// Produce a state by uniform random permutation of the nine values.
    ///
    /// No solvability constraint is applied; roughly half of all shuffles are
    /// unreachable from the goal and will be reported as such by the solver.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cells = GOAL;
        cells.shuffle(rng);
        let blank = cells.iter().position(|&v| v == 0).unwrap() as u8;
        PuzzleState { cells, blank }
    }

    pub fn cells(&self) -> &[u8; CELLS] {
        &self.cells
    }

    /// Check whether this state is the solved arrangement.
    pub fn is_goal(&self) -> bool {
        self.cells == GOAL
    }

    /// Cell indexes grid-adjacent to the blank (2..=4 of them).
    fn blank_neighbors(&self) -> ArrayVec<usize, 4> {
        let mut neighbors = ArrayVec::new();
        let blank = self.blank as usize;
        let (row, col) = (blank / SIDE, blank % SIDE);

        if row > 0 {
            neighbors.push(blank - SIDE);
        }
        if row < SIDE - 1 {
            neighbors.push(blank + SIDE);
        }
        if col > 0 {
            neighbors.push(blank - 1);
        }
        if col < SIDE - 1 {
            neighbors.push(blank + 1);
        }
        neighbors
    }

    /// Tile values that may slide into the blank from the current position.
    pub fn legal_moves(&self) -> ArrayVec<u8, 4> {
        self.blank_neighbors()
            .into_iter()
            .map(|i| self.cells[i])
            .collect()
    }

    /// All (moved tile, resulting state) pairs reachable in one legal move.
    ///
    /// Used by the solver so that expansion never constructs a move that
    /// could be rejected.
    pub fn successors(&self) -> ArrayVec<(u8, PuzzleState), 4> {
        self.blank_neighbors()
            .into_iter()
            .map(|i| (self.cells[i], self.slide_from(i)))
            .collect()
    }

    /// Slide the tile requested by the caller into the blank, returning the
    /// resulting state. Fails with [`StateError::IllegalMove`] if the tile is
    /// not grid-adjacent to the blank; an invalid request is an explicit
    /// error, never a silent no-op.
    pub fn apply_move(&self, tile: u8) -> Result<PuzzleState, StateError> {
        for i in self.blank_neighbors() {
            if self.cells[i] == tile {
                return Ok(self.slide_from(i));
            }
        }
        Err(StateError::IllegalMove(tile))
    }

    // Swap the blank with the tile at `from`, which must be adjacent to it.
    fn slide_from(&self, from: usize) -> PuzzleState {
        let mut cells = self.cells;
        cells.swap(self.blank as usize, from);
        PuzzleState {
            cells,
            blank: from as u8,
        }
    }

    /// Render as the 9-character row-major digit string ('0' = blank) used at
    /// the boundary with the presentation shell.
    pub fn serialize(&self) -> String {
        self.cells.iter().map(|&v| (b'0' + v) as char).collect()
    }

    /// Parity of the number of inverted pairs among the non-blank tiles in
    /// row-major order.
    ///
    /// For a 3x3 board with the blank's goal position in the last cell, a
    /// state is reachable from the goal iff this parity is even: every legal
    /// move changes the inversion count by an even amount (0 for horizontal
    /// slides, -2/0/+2 for vertical ones).
    pub fn inversion_parity(&self) -> Parity {
        let tiles: ArrayVec<u8, CELLS> =
            self.cells.iter().copied().filter(|&v| v != 0).collect();
        let mut inversions = 0usize;
        for i in 0..tiles.len() {
            for j in i + 1..tiles.len() {
                if tiles[i] > tiles[j] {
                    inversions += 1;
                }
            }
        }
        if inversions % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

impl fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIDE {
            let mut line = String::new();
            for col in 0..SIDE {
                let v = self.cells[row * SIDE + col];
                let ch = if v == 0 { '.' } else { (b'0' + v) as char };
                if col > 0 {
                    line.push(' ');
                }
                line.push(ch);
            }
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
