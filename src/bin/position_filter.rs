//! Filter a labelled position file down to "material down but holding" lines.
//!
//! Run with:
//! `cargo run --release --bin position_filter -- positions.txt filtered.txt`
//! `RUST_LOG=warn` reports every malformed input line.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use clap::Parser;

use chess_core::utils::position_filter::filter_lines;

#[derive(Debug, Parser)]
#[command(name = "position_filter", about = "Keep positions where the side down material holds")]
struct Args {
    /// Input file of `<FEN> | <eval> | <result>` lines.
    input: PathBuf,

    /// Where kept lines are written.
    output: PathBuf,
}

fn main() -> Result<(), String> {
    env_logger::init();
    let args = Args::parse();

    let input = File::open(&args.input)
        .map_err(|err| format!("failed to open {}: {err}", args.input.display()))?;
    let output = File::create(&args.output)
        .map_err(|err| format!("failed to create {}: {err}", args.output.display()))?;

    let stats = filter_lines(BufReader::new(input), BufWriter::new(output))
        .map_err(|err| format!("filtering failed: {err}"))?;

    println!("{} positions read in, {} filtered", stats.read, stats.kept);
    Ok(())
}
