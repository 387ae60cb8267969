mod args;

use std::env;
use std::io::Write;
use std::process;

use clap::Parser;

#[macro_use]
extern crate log;

use seqprep_lib::{compute_frequencies, compute_parameter_table, condition, out_writer, LocalCider, Result};

use args::{load_sequences, Args};

fn run(args: &Args) -> Result<()> {

    // ---------- Input sequences
    let sequences = load_sequences(args)?;
    info!("{} sequences loaded", sequences.len());
    let mut out = out_writer(&args.out)?;

    // ---------- Amino acid frequencies
    let freqs = compute_frequencies(&sequences, args.policy())?;
    write!(out, "{}", freqs)?;

    // ---------- Polymer parameters
    if args.params {
        let params = compute_parameter_table(&sequences, &LocalCider::new())?;
        writeln!(out)?;
        write!(out, "{}", params)?;
    }

    // ---------- Simulation conditions
    if let Some(name) = &args.condition {
        writeln!(out)?;
        write!(out, "{}", condition(name)?)?;
    }
    out.flush()?;

    Ok(())
}

pub fn main() {

    let args = Args::parse();
    if env::var("RUST_LOG").is_err() { env::set_var("RUST_LOG", "info") }
    env_logger::init();

    if let Err(e) = run(&args) {
        error!("{}", e);
        process::exit(1);
    }
}
