//! Burrow CLI - block-sorting transform filter
//!
//! Applies the Burrows-Wheeler + Move-to-Front pipeline as a stdin/stdout
//! filter, in the tradition of the classic block-sorting tools: `-`
//! encodes, `+` decodes.

use burrow_codec::{compress_stream, expand_stream};
use clap::Parser;
use std::io::{BufReader, BufWriter, stdin, stdout};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "burrow")]
#[command(
    author,
    version,
    about = "Burrows-Wheeler / Move-to-Front transform filter"
)]
#[command(long_about = "
Burrow applies the reversible block-sorting transform pipeline
(Burrows-Wheeler Transform followed by Move-to-Front) between stdin
and stdout. The encoded frame is a big-endian 32-bit row index
followed by one MTF code byte per input byte.

Examples:
  burrow - < input.txt > input.bwt
  burrow + < input.bwt > input.txt
  burrow - < input.txt | burrow + | cmp - input.txt
")]
struct Cli {
    /// Transform direction: '-' to encode, '+' to decode
    #[arg(value_parser = ["-", "+"])]
    mode: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let reader = BufReader::new(stdin().lock());
    let writer = BufWriter::new(stdout().lock());

    let result = match cli.mode.as_str() {
        "-" => compress_stream(reader, writer),
        _ => expand_stream(reader, writer),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("burrow: {e}");
            ExitCode::FAILURE
        }
    }
}
