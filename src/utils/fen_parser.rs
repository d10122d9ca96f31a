//! FEN-to-Position parser.
//!
//! Builds a fully-populated position from a Forsyth-Edwards Notation string,
//! including both board views, material counts, rights and clocks. The two
//! clock fields may be omitted and default to `0` and `1`.

use log::debug;

use crate::chess_errors::ChessErrors;
use crate::game_state::{chess_types::*, position::Position};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<Position, ChessErrors> {
    parse_fields(fen).inspect_err(|err| debug!("rejecting FEN '{fen}': {err}"))
}

fn parse_fields(fen: &str) -> Result<Position, ChessErrors> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or(ChessErrors::MissingFenField("board layout"))?;
    let side_part = parts.next().ok_or(ChessErrors::MissingFenField("side to move"))?;
    let castling_part = parts.next().ok_or(ChessErrors::MissingFenField("castling rights"))?;
    let en_passant_part = parts.next().ok_or(ChessErrors::MissingFenField("en-passant square"))?;
    let halfmove_part = parts.next();
    let fullmove_part = parts.next();

    let trailing: Vec<&str> = parts.collect();
    if !trailing.is_empty() {
        return Err(ChessErrors::TrailingFenFields(trailing.join(" ")));
    }

    let mut position = Position::new_empty();

    parse_board(board_part, &mut position)?;
    position.side_to_move = parse_side_to_move(side_part)?;
    position.castling_rights = parse_castling_rights(castling_part)?;
    position.en_passant_square = parse_en_passant_square(en_passant_part, &position)?;
    position.halfmove_clock = parse_clock(halfmove_part, 0)?;
    position.fullmove_number = parse_clock(fullmove_part, 1)?;

    for color in Color::BOTH {
        let count = position.pieces_of(color, PieceKind::King).count_ones();
        if count != 1 {
            return Err(ChessErrors::KingCount { color, count });
        }
    }

    Ok(position)
}

fn parse_board(board_part: &str, position: &mut Position) -> Result<(), ChessErrors> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidBoardLayout(format!(
            "expected 8 ranks, found {}",
            ranks.len()
        )));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidBoardLayout(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                file += empty_count as u8;
                if file > 8 {
                    break;
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch).ok_or(ChessErrors::InvalidPieceChar(ch))?;

            if file >= 8 {
                return Err(ChessErrors::InvalidBoardLayout(format!(
                    "rank '{rank_str}' has too many files"
                )));
            }

            position.place_piece(make_square(file, board_rank), piece);
            file += 1;
        }

        if file != 8 {
            return Err(ChessErrors::InvalidBoardLayout(format!(
                "rank '{rank_str}' does not sum to 8 files"
            )));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessErrors> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ChessErrors::InvalidSideToMove(side_part.to_owned())),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<[[bool; 2]; 2], ChessErrors> {
    let mut rights = [[false; 2]; 2];
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        let (color, side) = match ch {
            'K' => (Color::Light, CastleSide::Kingside),
            'Q' => (Color::Light, CastleSide::Queenside),
            'k' => (Color::Dark, CastleSide::Kingside),
            'q' => (Color::Dark, CastleSide::Queenside),
            _ => return Err(ChessErrors::InvalidCastlingChar(ch)),
        };
        rights[color.index()][side.index()] = true;
    }

    Ok(rights)
}

/// The target square must sit behind a pawn that could just have double-pushed:
/// rank 6 with a dark pawn below it when light is to move, rank 3 with a light
/// pawn above it when dark is to move.
fn parse_en_passant_square(
    en_passant_part: &str,
    position: &Position,
) -> Result<Option<Square>, ChessErrors> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)?;
    let mover = position.side_to_move;
    let (target_rank, pushed_pawn) = match mover {
        Color::Light => (5, square.checked_sub(8)),
        Color::Dark => (2, Some(square + 8).filter(|sq| *sq < 64)),
    };

    let passed_pawn = Piece::new(mover.opposite(), PieceKind::Pawn);
    let valid = square_rank(square) == target_rank
        && position.piece_at(square).is_none()
        && pushed_pawn.is_some_and(|sq| position.piece_at(sq) == Some(passed_pawn));

    if valid {
        Ok(Some(square))
    } else {
        Err(ChessErrors::InvalidAlgebraicSquare(en_passant_part.to_owned()))
    }
}

fn parse_clock(field: Option<&str>, default: u16) -> Result<u16, ChessErrors> {
    match field {
        None => Ok(default),
        Some(text) => text
            .parse::<u16>()
            .map_err(|_| ChessErrors::InvalidClock(text.to_owned())),
    }
}
