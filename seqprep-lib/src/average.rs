use log::{debug, info};

use crate::amino_acids::{AMINO_ACIDS, N_AMINO_ACIDS};
use crate::composition::{compute_frequencies, AlphabetPolicy, AverageComposition};
use crate::error::{Result, SeqPrepError};
use crate::sequence_set::SequenceSet;
use crate::shuffle::shuffle_sequence;

/// Mean composition and mean length of a set of sequences.
///
/// Both means are unweighted: a short sequence contributes to the mean composition as much as
/// a long one. Pooling residue counts over all the sequences gives a different result when
/// lengths vary.
#[derive(Clone, Debug, PartialEq)]
pub struct AverageProfile {
    /// Column-wise mean of the frequency table
    pub composition: AverageComposition,
    /// Mean sequence length; not necessarily an integer
    pub length: f64,
}

impl AverageProfile {

    /// Averages composition and length over a non-empty collection of sequences
    pub fn from_sequences(sequences: &SequenceSet, policy: AlphabetPolicy)
            -> Result<AverageProfile> {
        if sequences.is_empty() {
            let msg = "can't average an empty set of sequences".to_string();
            return Err(SeqPrepError::InvalidInput(msg));
        }
        let composition = compute_frequencies(sequences, policy)?.mean()?;
        let total: usize = sequences.iter().map(|e| e.len()).sum();
        let length = total as f64 / sequences.len() as f64;
        debug!("average length of {} sequences: {:.3}", sequences.len(), length);

        Ok(AverageProfile { composition, length })
    }

    /// Number of residues of each amino acid in the average sequence, indexed as [`AMINO_ACIDS`].
    ///
    /// Each count is `mean frequency * mean length`, rounded half to even.
    pub fn counts(&self) -> [usize; N_AMINO_ACIDS] {
        let mut counts = [0usize; N_AMINO_ACIDS];
        for (c, f) in counts.iter_mut().zip(self.composition.frequencies().iter()) {
            *c = (f * self.length).round_ties_even() as usize;
        }
        counts
    }

    /// Residues of the average sequence before shuffling, grouped in alphabet order
    pub fn assemble(&self) -> String {
        let mut buffer = String::new();
        for (aa, n) in AMINO_ACIDS.iter().zip(self.counts().iter()) {
            buffer.extend(std::iter::repeat(*aa).take(*n));
        }
        buffer
    }
}

/// Builds a synthetic sequence that represents a whole set of sequences.
///
/// Residue counts come from [`AverageProfile::counts()`]; the assembled residues are then
/// shuffled with the given seed. The result depends on the order of the input only through
/// floating point summation, and is exactly reproducible for the same input and seed.
pub fn synthesize_average_sequence(sequences: &SequenceSet, seed: u64) -> Result<String> {
    synthesize_with_policy(sequences, seed, AlphabetPolicy::Lenient)
}

/// Same as [`synthesize_average_sequence()`], with an explicit policy for unknown residues
pub fn synthesize_with_policy(sequences: &SequenceSet, seed: u64, policy: AlphabetPolicy)
        -> Result<String> {
    let profile = AverageProfile::from_sequences(sequences, policy)?;
    let buffer = profile.assemble();
    info!("average sequence of {} residues built from {} sequences", buffer.len(), sequences.len());

    Ok(shuffle_sequence(&buffer, seed))
}
