//! Core position representation.
//!
//! `Position` keeps two views of the same board: a 0x88 mailbox for O(1)
//! "what is on this square" queries and per-kind / per-color bitboards for set
//! operations. `place_piece` and `take_piece` are the only mutators of
//! either view, so the two can never drift apart.

use std::fmt;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::search::zobrist::compute_zobrist_key;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_position::render_position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    // --- Mailbox (0x88) ---
    board: [Option<Piece>; MAILBOX_SIZE],

    // --- Bitboards ---
    pieces: [Bitboard; 6],
    colors: [Bitboard; 2],

    // --- Cached derived state ---
    material_count: [[u8; 6]; 2],
    king_square: [Square; 2],

    // --- Side and state flags ---
    pub castling_rights: [[bool; 2]; 2],
    pub en_passant_square: Option<Square>,
    pub side_to_move: Color,

    // --- Clocks ---
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            board: [None; MAILBOX_SIZE],
            pieces: [0; 6],
            colors: [0; 2],
            material_count: [[0; 6]; 2],
            king_square: [0; 2],
            castling_rights: [[false; 2]; 2],
            en_passant_square: None,
            side_to_move: Color::Light,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl Position {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn hash_key(&self) -> u64 {
        compute_zobrist_key(self)
    }

    // --- Mutators (the only code touching both views) ---

    /// Put `piece` on an empty `square`.
    pub fn place_piece(&mut self, square: Square, piece: Piece) {
        debug_assert!(
            self.board[mailbox_index(square)].is_none(),
            "place_piece onto occupied square {square}"
        );
        let mask = square_bb(square);
        self.board[mailbox_index(square)] = Some(piece);
        self.pieces[piece.kind.index()] |= mask;
        self.colors[piece.color.index()] |= mask;
        self.material_count[piece.color.index()][piece.kind.index()] += 1;
        if piece.kind == PieceKind::King {
            self.king_square[piece.color.index()] = square;
        }
    }

    /// Clear `square`, returning whatever stood on it.
    ///
    /// Kings cannot be removed this way: the cached king square would go
    /// stale. Relocate a king with [`Position::move_piece`] instead.
    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        debug_assert!(
            self.piece_at(square).map(|piece| piece.kind) != Some(PieceKind::King),
            "remove_piece would strand the king on square {square}"
        );
        self.take_piece(square)
    }

    /// Clear `square` with no king check. A removed king must be placed
    /// again before the position is queried; `check_consistency` reports
    /// a cached king square left behind.
    pub(crate) fn take_piece(&mut self, square: Square) -> Option<Piece> {
        let piece = self.board[mailbox_index(square)].take()?;
        let mask = !square_bb(square);
        self.pieces[piece.kind.index()] &= mask;
        self.colors[piece.color.index()] &= mask;
        self.material_count[piece.color.index()][piece.kind.index()] -= 1;
        Some(piece)
    }

    /// Relocate the piece on `from` to an empty `to`.
    #[inline]
    pub fn move_piece(&mut self, from: Square, to: Square) {
        if let Some(piece) = self.take_piece(from) {
            self.place_piece(to, piece);
        }
    }

    // --- Queries ---

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[mailbox_index(square)]
    }

    /// Mailbox lookup by raw 0x88 index; `None` for empty or padding slots.
    #[inline]
    pub fn piece_at_mailbox(&self, index: MailboxIndex) -> Option<Piece> {
        self.board[index]
    }

    #[inline]
    pub fn pieces(&self, kind: PieceKind) -> Bitboard {
        self.pieces[kind.index()]
    }

    #[inline]
    pub fn color_occupancy(&self, color: Color) -> Bitboard {
        self.colors[color.index()]
    }

    #[inline]
    pub fn pieces_of(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.pieces[kind.index()] & self.colors[color.index()]
    }

    #[inline]
    pub fn occupancy(&self) -> Bitboard {
        self.colors[0] | self.colors[1]
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_square[color.index()]
    }

    #[inline]
    pub fn material_count(&self, color: Color, kind: PieceKind) -> u8 {
        self.material_count[color.index()][kind.index()]
    }

    #[inline]
    pub fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        self.castling_rights[color.index()][side.index()]
    }

    /// Compare the mailbox against the bitboards and cached counters.
    pub fn check_consistency(&self) -> Result<(), String> {
        let mut counts = [[0u8; 6]; 2];

        for square in 0..64u8 {
            let mask = square_bb(square);
            let mailbox = self.board[mailbox_index(square)];

            let mut from_bitboards = None;
            for color in Color::BOTH {
                for kind in PieceKind::ALL {
                    if self.pieces[kind.index()] & self.colors[color.index()] & mask != 0 {
                        if from_bitboards.is_some() {
                            return Err(format!("square {square} claimed by several bitboards"));
                        }
                        from_bitboards = Some(Piece::new(color, kind));
                    }
                }
            }

            if mailbox != from_bitboards {
                return Err(format!(
                    "square {square}: mailbox has {mailbox:?}, bitboards have {from_bitboards:?}"
                ));
            }
            if let Some(piece) = mailbox {
                counts[piece.color.index()][piece.kind.index()] += 1;
            }
        }

        for (index, slot) in self.board.iter().enumerate() {
            if is_off_board(index as i32) && slot.is_some() {
                return Err(format!("off-board slot {index:#x} is occupied"));
            }
        }

        if self.colors[0] & self.colors[1] != 0 {
            return Err("color bitboards overlap".to_owned());
        }

        if counts != self.material_count {
            return Err(format!(
                "material counts {:?} do not match board {:?}",
                self.material_count, counts
            ));
        }

        for color in Color::BOTH {
            let kings = self.pieces_of(color, PieceKind::King);
            if kings.count_ones() != 1 {
                return Err(format!("{color:?} has {} kings", kings.count_ones()));
            }
            let cached = self.king_square[color.index()];
            if kings != square_bb(cached) {
                return Err(format!("{color:?} king cached on {cached}, found elsewhere"));
            }
        }

        Ok(())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_position(self))
    }
}

#[cfg(test)]
mod tests {
    use super::Position;
    use crate::game_state::chess_types::*;

    #[test]
    fn starting_position_is_consistent() {
        let position = Position::new_game();
        position
            .check_consistency()
            .expect("start position should be consistent");
        assert_eq!(position.material_count(Color::Light, PieceKind::Pawn), 8);
        assert_eq!(position.material_count(Color::Dark, PieceKind::Knight), 2);
        assert_eq!(position.king_square(Color::Light), 4);
        assert_eq!(position.king_square(Color::Dark), 60);
        assert_eq!(position.occupancy().count_ones(), 32);
    }

    #[test]
    fn place_and_remove_update_both_views() {
        let mut position = Position::new_game();
        let knight = position.remove_piece(1).expect("b1 holds a knight");
        assert_eq!(knight, Piece::new(Color::Light, PieceKind::Knight));
        assert_eq!(position.pieces(PieceKind::Knight) & square_bb(1), 0);
        assert_eq!(position.material_count(Color::Light, PieceKind::Knight), 1);

        position.place_piece(18, knight);
        assert_eq!(position.piece_at(18), Some(knight));
        assert_ne!(position.pieces_of(Color::Light, PieceKind::Knight) & square_bb(18), 0);
        position
            .check_consistency()
            .expect("views should agree after relocation");
    }

    #[test]
    fn remove_from_empty_square_is_noop() {
        let mut position = Position::new_game();
        let before = position;
        assert_eq!(position.remove_piece(28), None);
        assert_eq!(position, before);
    }

    #[test]
    fn consistency_check_reports_missing_king() {
        let mut position = Position::new_game();
        position.take_piece(60);
        assert!(position.check_consistency().is_err());
    }

    #[test]
    fn moving_a_king_keeps_the_cached_square() {
        let mut position = Position::new_game();
        position.take_piece(12);
        position.move_piece(4, 12);
        assert_eq!(position.king_square(Color::Light), 12);
        position
            .check_consistency()
            .expect("king cache should follow the king");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "strand the king")]
    fn removing_a_king_is_a_programming_error() {
        let mut position = Position::new_game();
        position.remove_piece(4);
    }

    #[test]
    fn display_renders_rank_eight_first() {
        let rendered = Position::new_game().to_string();
        let first_board_line = rendered.lines().nth(1).expect("board line");
        assert!(first_board_line.starts_with('8'));
    }
}
