//! Sequence statistics computed before a simulation run: amino acid composition, polymer
//! parameters and the average sequence of a set of sequences.

mod amino_acids;
mod average;
mod cider;
mod composition;
mod conditions;
mod error;
mod io;
mod parameters;
mod sequence_set;
mod shuffle;

pub use amino_acids::{aa_index, amino_acid_type, normalize};
pub use amino_acids::{AminoAcidType, AMINO_ACIDS, N_AMINO_ACIDS};
pub use average::{synthesize_average_sequence, synthesize_with_policy, AverageProfile};
pub use cider::LocalCider;
pub use composition::{analyze_many, analyze_one, compute_frequencies};
pub use composition::{AlphabetPolicy, AverageComposition, FrequencyTable};
pub use conditions::{condition, conditions, Condition};
pub use error::{Result, SeqPrepError};
pub use io::{fasta_to_set, load_fasta_seq, load_metadata, read_fasta, FastaRecord, MetadataTable};
pub use io::{out_writer, writes_to_screen};
pub use parameters::{compute_parameter_table, ParameterCalculator};
pub use parameters::{ParameterTable, SequenceParameters};
pub use sequence_set::{SequenceEntry, SequenceSet};
pub use shuffle::shuffle_sequence;
