//! Offline filter for labelled training positions.
//!
//! Input lines look like `<FEN> | <eval> | <result>`, with the eval in
//! centipawns and the result in `[0, 1]`, both from light's point of view.
//! A line is kept when the side to move is more than a pawn down in material
//! yet the eval does not call it lost and it did not go on to lose the game.

use std::io::{self, BufRead, Write};

use log::{info, warn};

use crate::chess_errors::ChessErrors;
use crate::game_state::{chess_types::*, position::Position};

const FIELD_SEPARATOR: &str = " | ";

/// Pawn, knight, bishop, rook, queen.
const FILTER_VALUES: [i32; 5] = [100, 300, 300, 500, 900];

/// Below this much total material the imbalance is treated as zero.
const MIN_TOTAL_MATERIAL: i32 = 2500;

const MATERIAL_DEFICIT: i32 = -100;
const EVAL_FLOOR: i32 = -20;

#[derive(Debug, Clone, PartialEq)]
pub struct FilterRecord {
    pub position: Position,
    pub eval: i32,
    pub result: f32,
}

impl FilterRecord {
    pub fn parse(line: &str) -> Result<Self, ChessErrors> {
        let mut fields = line.split(FIELD_SEPARATOR);
        let invalid = || ChessErrors::InvalidFilterRecord(line.to_owned());

        let fen = fields.next().ok_or_else(invalid)?;
        let eval = fields
            .next()
            .and_then(|field| field.trim().parse::<i32>().ok())
            .ok_or_else(invalid)?;
        let result = fields
            .next()
            .and_then(|field| field.trim().parse::<f32>().ok())
            .ok_or_else(invalid)?;

        Ok(Self {
            position: Position::from_fen(fen)?,
            eval,
            result,
        })
    }

    /// Whether this record belongs in the filtered output.
    pub fn keep(&self) -> bool {
        let perspective = match self.position.side_to_move {
            Color::Light => 1,
            Color::Dark => -1,
        };
        let not_lost = match self.position.side_to_move {
            Color::Light => self.result >= 0.5,
            Color::Dark => self.result <= 0.5,
        };

        material_imbalance(&self.position) * perspective < MATERIAL_DEFICIT
            && self.eval * perspective > EVAL_FLOOR
            && not_lost
    }
}

/// Light-minus-dark material, or zero once too little material is left.
pub fn material_imbalance(position: &Position) -> i32 {
    let mut imbalance = 0;
    let mut total = 0;
    for (kind, value) in PieceKind::ALL.into_iter().zip(FILTER_VALUES) {
        let light = i32::from(position.material_count(Color::Light, kind));
        let dark = i32::from(position.material_count(Color::Dark, kind));
        imbalance += (light - dark) * value;
        total += (light + dark) * value;
    }

    if total < MIN_TOTAL_MATERIAL {
        0
    } else {
        imbalance
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub read: usize,
    pub kept: usize,
}

/// Copy every kept line from `input` to `output`. Lines that fail to parse
/// are counted as read, logged and skipped.
pub fn filter_lines<R: BufRead, W: Write>(input: R, mut output: W) -> io::Result<FilterStats> {
    let mut stats = FilterStats::default();

    for (line_no, line) in input.lines().enumerate() {
        let line = line?;
        stats.read += 1;

        match FilterRecord::parse(&line) {
            Ok(record) if record.keep() => {
                writeln!(output, "{line}")?;
                stats.kept += 1;
            }
            Ok(_) => {}
            Err(err) => warn!("skipping line {}: {err}", line_no + 1),
        }
    }

    output.flush()?;
    info!("{} positions read in, {} filtered", stats.read, stats.kept);
    Ok(stats)
}
