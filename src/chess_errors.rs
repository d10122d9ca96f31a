//! Errors used throughout the crate.
//!
//! Parsing a position description or a move string are the only fallible
//! operations; move generation, application and exchange evaluation are total
//! over any position that parsed successfully.

use thiserror::Error;

use crate::game_state::chess_types::Color;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A board-layout character that is neither a digit, '/', nor a piece letter.
    #[error("invalid piece character '{0}' in board layout")]
    InvalidPieceChar(char),

    #[error("missing FEN field: {0}")]
    MissingFenField(&'static str),

    #[error("FEN has extra trailing fields: {0}")]
    TrailingFenFields(String),

    #[error("invalid board layout: {0}")]
    InvalidBoardLayout(String),

    #[error("invalid side-to-move field: {0}")]
    InvalidSideToMove(String),

    #[error("invalid castling rights character: {0}")]
    InvalidCastlingChar(char),

    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraicSquare(String),

    #[error("invalid clock field: {0}")]
    InvalidClock(String),

    #[error("{color:?} must have exactly one king, found {count}")]
    KingCount { color: Color, count: u32 },

    #[error("invalid move string: {0}")]
    InvalidMoveString(String),

    #[error("invalid filter record: {0}")]
    InvalidFilterRecord(String),
}
