//! Piece codec.
//!
//! A piece is identified by an id in `0..16`. Its four binary attributes are
//! the bits of the id, most significant first, so piece 1 is
//! `(false, false, false, true)` and piece 8 is `(true, false, false, false)`.

use std::fmt;

use crate::GameError;

/// Number of distinct pieces in a game.
pub const NUM_PIECES: usize = 16;

/// Number of binary attributes carried by each piece.
pub const NUM_ATTRIBUTES: usize = 4;

/// Attribute vectors for every piece id.
const PIECE_TABLE: [[bool; NUM_ATTRIBUTES]; NUM_PIECES] = {
    let mut table = [[false; NUM_ATTRIBUTES]; NUM_PIECES];
    let mut id = 0;
    while id < NUM_PIECES {
        let mut attr = 0;
        while attr < NUM_ATTRIBUTES {
            table[id][attr] = (id >> (NUM_ATTRIBUTES - 1 - attr)) & 1 == 1;
            attr += 1;
        }
        id += 1;
    }
    table
};

/// One of the four binary attributes, in attribute-vector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Tall,
    Colored,
    Solid,
    Square,
}

impl Attribute {
    pub const ALL: [Attribute; NUM_ATTRIBUTES] = [
        Attribute::Tall,
        Attribute::Colored,
        Attribute::Solid,
        Attribute::Square,
    ];

    /// Position of this attribute in a piece's attribute vector.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// An immutable game piece. Two pieces are equal iff their ids are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Piece(u8);

impl Piece {
    /// Create a piece from its id, or `None` if the id is out of range.
    pub fn new(id: u8) -> Option<Self> {
        ((id as usize) < NUM_PIECES).then_some(Self(id))
    }

    /// Iterate over all sixteen pieces in id order.
    pub fn all() -> impl Iterator<Item = Piece> {
        (0..NUM_PIECES as u8).map(Piece)
    }

    pub fn id(self) -> u8 {
        self.0
    }

    /// The piece's attribute vector.
    pub fn attributes(self) -> [bool; NUM_ATTRIBUTES] {
        PIECE_TABLE[self.0 as usize]
    }

    pub fn has(self, attribute: Attribute) -> bool {
        self.attributes()[attribute.index()]
    }
}

impl TryFrom<u8> for Piece {
    type Error = GameError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Piece::new(id).ok_or(GameError::InvalidPiece(id))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A set of pieces stored as a 16-bit mask (bit `i` = piece id `i`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PieceSet(u16);

impl PieceSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn full() -> Self {
        Self(u16::MAX)
    }

    pub fn bits(self) -> u16 {
        self.0
    }

    pub fn contains(self, piece: Piece) -> bool {
        self.0 & (1 << piece.0) != 0
    }

    pub fn insert(&mut self, piece: Piece) {
        self.0 |= 1 << piece.0;
    }

    pub fn remove(&mut self, piece: Piece) {
        self.0 &= !(1 << piece.0);
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate members in ascending id order.
    pub fn iter(self) -> impl Iterator<Item = Piece> {
        let mask = self.0;
        (0..NUM_PIECES as u8)
            .filter(move |id| mask & (1 << id) != 0)
            .map(Piece)
    }

    /// The `n`-th member in ascending id order.
    pub fn nth(self, n: usize) -> Option<Piece> {
        self.iter().nth(n)
    }
}

impl FromIterator<Piece> for PieceSet {
    fn from_iter<I: IntoIterator<Item = Piece>>(iter: I) -> Self {
        let mut set = PieceSet::empty();
        for piece in iter {
            set.insert(piece);
        }
        set
    }
}
