//! Zobrist hashing support for fast position identity and repetition tracking.
//!
//! The keys are generated from a fixed seed so hashes are deterministic across
//! runs, which is useful for testing and debugging.

use std::sync::OnceLock;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::game_state::{chess_types::*, position::Position};

const ZOBRIST_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug)]
struct ZobristTables {
    piece_square: [[u64; 64]; Piece::COUNT],
    side_to_move: u64,
    castling: [[u64; 2]; 2],
    en_passant_file: [u64; 8],
}

static TABLES: OnceLock<ZobristTables> = OnceLock::new();

#[inline]
fn tables() -> &'static ZobristTables {
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> ZobristTables {
    let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);

    let mut piece_square = [[0u64; 64]; Piece::COUNT];
    for piece in &mut piece_square {
        for key in piece {
            *key = rng.random();
        }
    }

    let side_to_move = rng.random();

    let mut castling = [[0u64; 2]; 2];
    for key in castling.iter_mut().flatten() {
        *key = rng.random();
    }

    let mut en_passant_file = [0u64; 8];
    for key in &mut en_passant_file {
        *key = rng.random();
    }

    ZobristTables {
        piece_square,
        side_to_move,
        castling,
        en_passant_file,
    }
}

/// Return the Zobrist key for a colored piece standing on `square`.
#[inline]
pub fn piece_square_key(piece: Piece, square: Square) -> u64 {
    tables().piece_square[piece.index()][square as usize]
}

/// Return the key contribution of one held castling right.
#[inline]
pub fn castling_key(color: Color, side: CastleSide) -> u64 {
    tables().castling[color.index()][side.index()]
}

/// Return the Zobrist key contribution for a valid en-passant file.
#[inline]
pub fn en_passant_file_key(file: u8) -> u64 {
    tables().en_passant_file[file as usize]
}

/// Return the side-to-move toggle key (xor in when dark to move).
#[inline]
pub fn side_to_move_key() -> u64 {
    tables().side_to_move
}

/// Compute the full position Zobrist key.
pub fn compute_zobrist_key(position: &Position) -> u64 {
    let mut key = 0u64;

    for color in Color::BOTH {
        for kind in PieceKind::ALL {
            let piece = Piece::new(color, kind);
            let mut bb = position.pieces_of(color, kind);
            while bb != 0 {
                key ^= piece_square_key(piece, pop_lsb(&mut bb));
            }
        }
    }

    if position.side_to_move == Color::Dark {
        key ^= side_to_move_key();
    }

    for color in Color::BOTH {
        for side in CastleSide::BOTH {
            if position.can_castle(color, side) {
                key ^= castling_key(color, side);
            }
        }
    }

    if let Some(ep_square) = position.en_passant_square {
        key ^= en_passant_file_key(square_file(ep_square));
    }

    key
}
