mod args;

use std::env;
use std::io::Write;
use std::process;

use clap::Parser;

#[macro_use]
extern crate log;

use seqprep_lib::{condition, out_writer, shuffle_sequence, AverageProfile, Result};

use args::{load_sequences, Args};

fn run(args: &Args) -> Result<()> {

    // ---------- Input sequences
    let sequences = load_sequences(args)?;
    let profile = AverageProfile::from_sequences(&sequences, args.policy())?;
    info!("{} sequences of average length {:.2}", sequences.len(), profile.length);
    if args.params { warn!("--params is ignored when building an average sequence"); }

    // ---------- Shuffle the averaged composition
    let avg = shuffle_sequence(&profile.assemble(), args.seed);

    // ---------- Write it in FASTA format
    let mut out = out_writer(&args.out)?;
    write!(out, ">average n={} seed={}", sequences.len(), args.seed)?;
    if let Some(name) = &args.condition {
        let c = condition(name)?;
        write!(out, " condition={} temp={} pH={} ionic={}", c.name, c.temperature_kelvin, c.ph,
               c.ionic_strength_molar)?;
    }
    writeln!(out)?;
    writeln!(out, "{}", avg)?;
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
