//! Packed move representation.
//!
//! Layout (16 bits): `from << 8 | to << 2 | promotion`. The promotion field
//! only means something for a pawn landing on its last rank; every other move
//! carries `Promotion::Knight` (zero) there.

use crate::game_state::chess_types::{PieceKind, Square};

const FROM_SHIFT: u16 = 8;
const TO_SHIFT: u16 = 2;
const SQUARE_MASK: u16 = 0x3F;
const PROMOTION_MASK: u16 = 0x3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Promotion {
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl Promotion {
    pub const ALL: [Promotion; 4] = [
        Promotion::Knight,
        Promotion::Bishop,
        Promotion::Rook,
        Promotion::Queen,
    ];

    #[inline]
    pub const fn code(self) -> u16 {
        match self {
            Promotion::Knight => 0,
            Promotion::Bishop => 1,
            Promotion::Rook => 2,
            Promotion::Queen => 3,
        }
    }

    #[inline]
    pub const fn from_code(code: u16) -> Self {
        match code & PROMOTION_MASK {
            0 => Promotion::Knight,
            1 => Promotion::Bishop,
            2 => Promotion::Rook,
            _ => Promotion::Queen,
        }
    }

    #[inline]
    pub const fn piece_kind(self) -> PieceKind {
        match self {
            Promotion::Knight => PieceKind::Knight,
            Promotion::Bishop => PieceKind::Bishop,
            Promotion::Rook => PieceKind::Rook,
            Promotion::Queen => PieceKind::Queen,
        }
    }

    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Promotion::Knight => 'N',
            Promotion::Bishop => 'B',
            Promotion::Rook => 'R',
            Promotion::Queen => 'Q',
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'N' => Some(Promotion::Knight),
            'B' => Some(Promotion::Bishop),
            'R' => Some(Promotion::Rook),
            'Q' => Some(Promotion::Queen),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Move(u16);

/// Sentinel for "no move" (a1a1 can never be generated).
pub const MOVE_NONE: Move = Move(0);

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square, promotion: Promotion) -> Self {
        Move(((from as u16) << FROM_SHIFT) | ((to as u16) << TO_SHIFT) | promotion.code())
    }

    #[inline]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Self::new(from, to, Promotion::Knight)
    }

    #[inline]
    pub const fn from(self) -> Square {
        ((self.0 >> FROM_SHIFT) & SQUARE_MASK) as Square
    }

    #[inline]
    pub const fn to(self) -> Square {
        ((self.0 >> TO_SHIFT) & SQUARE_MASK) as Square
    }

    #[inline]
    pub const fn promotion(self) -> Promotion {
        Promotion::from_code(self.0)
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == MOVE_NONE.0
    }

    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }
}
