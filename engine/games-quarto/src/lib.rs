//! Quarto rules for the quarzo engines.
//!
//! Quarto is played on a 4x4 board with sixteen distinct pieces, each
//! carrying four binary attributes. A turn has two halves: a player hands
//! the opponent a piece, and the opponent places it on any empty cell. A
//! placement that completes a row, column or diagonal whose four pieces
//! share at least one attribute wins.
//!
//! This crate provides:
//! - the piece codec ([`Piece`], [`Attribute`])
//! - the board and its bitmask sets ([`Board`], [`Spot`], [`PieceSet`], [`SpotSet`])
//! - the authoritative game ([`Quarto`]) and the read-only [`GameView`]
//!   that search engines synchronize from
//!
//! # Usage
//!
//! ```rust
//! use games_quarto::{GameView, Piece, Quarto, Spot};
//!
//! let mut game = Quarto::new();
//! game.select(Piece::new(3).unwrap()).unwrap();
//! let outcome = game.place(Spot::new(1, 2).unwrap()).unwrap();
//! assert_eq!(outcome, None);
//! assert_eq!(game.pieces_on_board(), 1);
//! ```

mod board;
mod game;
mod piece;

pub use board::{Board, Spot, SpotSet, BOARD_SIDE, NUM_CELLS};
pub use game::{GameError, GameView, Outcome, Player, Quarto};
pub use piece::{Attribute, Piece, PieceSet, NUM_ATTRIBUTES, NUM_PIECES};
