use clap::{Parser};

use seqprep_lib::{fasta_to_set, load_metadata, read_fasta, AlphabetPolicy, Result, SeqPrepError, SequenceSet};

/// Command line arguments for the `composition` and `average` applications
///
/// Since both apps read sequences the same way, this struct has been moved into a separate file
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub(crate) struct Args {
    /// input sequences in FASTA format; the flag may be repeated
    #[clap(short, long)]
    pub fasta: Vec<String>,
    /// input metadata in JSON format, holding `data` and `templates` objects
    #[clap(short, long)]
    pub metadata: Option<String>,
    /// metadata field that holds the sequences
    #[clap(long, default_value = "seq")]
    pub seq_field: String,
    /// seed used to shuffle the average sequence
    #[clap(short, long, default_value_t = 1)]
    pub seed: u64,
    /// fail on residues outside of the 20-letter alphabet rather than skip them
    #[clap(long)]
    pub strict: bool,
    /// compute polymer parameters too
    #[clap(short, long)]
    pub params: bool,
    /// name of a condition setup to report along with the results
    #[clap(short, long)]
    pub condition: Option<String>,
    /// output file; use `stdout` to print on the screen
    #[clap(short, long, default_value = "stdout")]
    pub out: String,
}

impl Args {
    pub fn policy(&self) -> AlphabetPolicy {
        if self.strict { AlphabetPolicy::Strict } else { AlphabetPolicy::Lenient }
    }
}

/// Collects sequences from all the FASTA files and the metadata file given on the command line
pub(crate) fn load_sequences(args: &Args) -> Result<SequenceSet> {
    let mut sequences = SequenceSet::new();
    for fname in &args.fasta {
        for entry in &fasta_to_set(&read_fasta(fname)?) {
            sequences.push(&entry.key, &entry.sequence);
        }
    }
    if let Some(fname) = &args.metadata {
        for entry in &load_metadata(fname)?.sequences(&args.seq_field)? {
            sequences.push(&entry.key, &entry.sequence);
        }
    }
    if sequences.is_empty() {
        return Err(SeqPrepError::InvalidInput("give input sequences with --fasta or --metadata".to_string()));
    }

    Ok(sequences)
}
