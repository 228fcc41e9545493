//! Board layout and line detection.
//!
//! Board layout (x = column, y = row):
//! ```text
//!        x=0 x=1 x=2 x=3
//!  y=0 [  0,  1,  2,  3 ]
//!  y=1 [  4,  5,  6,  7 ]
//!  y=2 [  8,  9, 10, 11 ]
//!  y=3 [ 12, 13, 14, 15 ]
//! ```
//! Cells are stored row-major, so cell index = y * 4 + x.

use std::fmt;

use crate::piece::{Piece, PieceSet, NUM_ATTRIBUTES};

/// Side length of the square board.
pub const BOARD_SIDE: usize = 4;

/// Number of cells on the board.
pub const NUM_CELLS: usize = BOARD_SIDE * BOARD_SIDE;

/// Cell indices of every line that can complete a quarto.
const LINES: [[usize; BOARD_SIDE]; 10] = [
    [0, 1, 2, 3],
    [4, 5, 6, 7],
    [8, 9, 10, 11],
    [12, 13, 14, 15], // rows
    [0, 4, 8, 12],
    [1, 5, 9, 13],
    [2, 6, 10, 14],
    [3, 7, 11, 15], // columns
    [0, 5, 10, 15],
    [3, 6, 9, 12], // diagonals
];

/// A board coordinate: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Spot {
    pub x: u8,
    pub y: u8,
}

impl Spot {
    /// Create a spot, or `None` if either coordinate is off the board.
    pub fn new(x: u8, y: u8) -> Option<Self> {
        ((x as usize) < BOARD_SIDE && (y as usize) < BOARD_SIDE).then_some(Self { x, y })
    }

    /// Row-major cell index.
    pub fn index(self) -> usize {
        self.y as usize * BOARD_SIDE + self.x as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        (index < NUM_CELLS).then(|| Self {
            x: (index % BOARD_SIDE) as u8,
            y: (index / BOARD_SIDE) as u8,
        })
    }

    /// Iterate over every spot in row-major order.
    pub fn all() -> impl Iterator<Item = Spot> {
        (0..NUM_CELLS).filter_map(Spot::from_index)
    }
}

impl fmt::Display for Spot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A set of spots stored as a 16-bit mask (bit `i` = cell index `i`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SpotSet(u16);

impl SpotSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn full() -> Self {
        Self(u16::MAX)
    }

    pub fn bits(self) -> u16 {
        self.0
    }

    pub fn contains(self, spot: Spot) -> bool {
        self.0 & (1 << spot.index()) != 0
    }

    pub fn insert(&mut self, spot: Spot) {
        self.0 |= 1 << spot.index();
    }

    pub fn remove(&mut self, spot: Spot) {
        self.0 &= !(1 << spot.index());
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate members in row-major order.
    pub fn iter(self) -> impl Iterator<Item = Spot> {
        let mask = self.0;
        (0..NUM_CELLS)
            .filter(move |idx| mask & (1 << idx) != 0)
            .filter_map(Spot::from_index)
    }

    pub fn nth(self, n: usize) -> Option<Spot> {
        self.iter().nth(n)
    }
}

impl FromIterator<Spot> for SpotSet {
    fn from_iter<I: IntoIterator<Item = Spot>>(iter: I) -> Self {
        let mut set = SpotSet::empty();
        for spot in iter {
            set.insert(spot);
        }
        set
    }
}

/// The 4x4 grid. Each cell is empty or holds one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Option<Piece>; NUM_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, spot: Spot) -> Option<Piece> {
        self.cells[spot.index()]
    }

    /// Overwrite a cell. Does not check that the piece is unique on the board.
    pub fn set(&mut self, spot: Spot, piece: Option<Piece>) {
        self.cells[spot.index()] = piece;
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn contains(&self, piece: Piece) -> bool {
        self.cells.contains(&Some(piece))
    }

    /// Pieces not present on the board.
    pub fn unplaced_pieces(&self) -> PieceSet {
        let mut set = PieceSet::full();
        for piece in self.cells.iter().flatten() {
            set.remove(*piece);
        }
        set
    }

    /// Empty cells.
    pub fn free_spots(&self) -> SpotSet {
        Spot::all().filter(|spot| self.get(*spot).is_none()).collect()
    }

    /// True if any fully occupied line is unanimous on at least one attribute.
    ///
    /// Attribute vectors are summed per line; a sum of 0 or 4 on some
    /// coordinate means all four pieces agree. Lines with an empty cell are
    /// skipped entirely rather than summed with empty as zero.
    pub fn has_quarto(&self) -> bool {
        LINES.iter().any(|line| self.line_is_quarto(line))
    }

    fn line_is_quarto(&self, line: &[usize; BOARD_SIDE]) -> bool {
        let mut sums = [0usize; NUM_ATTRIBUTES];
        for &idx in line {
            let Some(piece) = self.cells[idx] else {
                return false;
            };
            for (sum, attr) in sums.iter_mut().zip(piece.attributes()) {
                *sum += attr as usize;
            }
        }
        sums.iter().any(|&sum| sum == 0 || sum == BOARD_SIDE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_SIDE {
            for x in 0..BOARD_SIDE {
                match self.cells[y * BOARD_SIDE + x] {
                    Some(piece) => write!(f, "{:>3}", piece.id())?,
                    None => write!(f, "  .")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
