//! Crate root module declarations for the chess move-generation core.
//!
//! This file exposes the position model, attack tables, move generation,
//! exchange evaluation, move ordering and the text utilities so binaries,
//! benches, and an external search driver can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod position;
}

pub mod moves {
    pub mod chess_move;
    pub mod leaper_moves;
    pub mod line_masks;
    pub mod sliding_moves;
}

pub mod move_generation {
    pub mod attacks;
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod legal_moves_king;
    pub mod legal_moves_pawn;
    pub mod move_list;
    pub mod perft;
}

pub mod search {
    pub mod move_ordering;
    pub mod see;
    pub mod thread_info;
    pub mod transposition_table;
    pub mod zobrist;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod position_filter;
    pub mod render_position;
}
