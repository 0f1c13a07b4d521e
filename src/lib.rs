//! A bitboard-based chess position representation, legal move generator, and perft
//! (move-path-enumeration) driver.
//!
//! # Usage
//!
//! You can create a [`Board`] with the starting position like so:
//!
//! ```
//! use chesscore::Board;
//! let board = Board::start_pos();
//! ```
//!
//! Generating a list of moves (contained inside a [`MoveList`]) can be done with:
//!
//! ```
//! use chesscore::Board;
//! let board = Board::start_pos();
//! let list = board.generate_moves();
//! ```
//!
//! Applying and undoing moves is simple:
//!
//! ```
//! use chesscore::Board;
//! let mut board = Board::start_pos();
//! let list = board.generate_moves();
//!
//! for mov in list.iter() {
//!     board.apply_move(*mov);
//!     println!("{}", board.get_fen());
//!     board.undo_move();
//! }
//! ```
//!
//! Using FEN strings is also supported:
//!
//! ```
//! use chesscore::Board;
//! let start_position = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
//! let board = Board::from_fen(start_position).unwrap();
//! ```
//!
//! Running perft to a fixed depth:
//!
//! ```
//! use chesscore::Board;
//! use chesscore::board::perft::perft;
//! let board = Board::start_pos();
//! assert_eq!(perft(&board, 4), 197_281);
//! ```
//!
//! # Safety
//!
//! While generally a safe library, this crate is built with a focus on speed: a handful of
//! methods contain `unsafe` blocks for unchecked indexing into pre-computed tables. Calling
//! them with out-of-range squares/indices is undefined behavior; such methods are documented
//! accordingly.
//!
//! [`MoveList`]: core/move_list/struct.MoveList.html
//! [`Board`]: board/struct.Board.html

#![cfg_attr(test, allow(dead_code))]
#![allow(dead_code)]

#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate lazy_static;

#[cfg(feature = "logging")]
#[macro_use]
extern crate log;

pub mod core;
pub mod board;
pub mod tools;

pub use board::Board;
pub use core::piece_move::{BitMove, ScoringMove};
pub use core::move_list::{MoveList, ScoringMoveList};
pub use core::sq::SQ;
pub use core::bitboard::BitBoard;
pub use core::{Player, Piece, PieceType, Rank, File};
