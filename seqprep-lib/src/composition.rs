use std::fmt;
use std::slice::Iter;

use log::debug;

use crate::amino_acids::{aa_index, AMINO_ACIDS, N_AMINO_ACIDS};
use crate::error::{Result, SeqPrepError};
use crate::sequence_set::{SequenceEntry, SequenceSet};

/// How residues outside of the 20-letter alphabet are treated
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlphabetPolicy {
    /// Unknown residues count towards the sequence length but to no frequency;
    /// such a row sums up to less than 1.0
    #[default]
    Lenient,
    /// Unknown residues raise [`SeqPrepError::UnsupportedCharacter`]
    Strict,
}

/// Amino acid frequencies: one row per sequence, one column per amino acid.
///
/// Columns always follow [`AMINO_ACIDS`] order, whichever letters appear in the input.
/// Rows keep the keys and the order of the [`SequenceSet`] they were computed from.
#[derive(Clone, Debug, PartialEq)]
pub struct FrequencyTable {
    keys: Vec<String>,
    rows: Vec<[f64; N_AMINO_ACIDS]>,
}

impl FrequencyTable {

    /// Number of rows i.e. sequences
    pub fn len(&self) -> usize { self.rows.len() }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Column names; always the whole alphabet
    pub fn columns(&self) -> &'static [char; N_AMINO_ACIDS] { &AMINO_ACIDS }

    /// Row keys, in input order
    pub fn keys(&self) -> &[String] { &self.keys }

    /// Provides iterator over rows; a row is indexed the same way as [`AMINO_ACIDS`]
    pub fn iter(&self) -> Iter<'_, [f64; N_AMINO_ACIDS]> { self.rows.iter() }

    /// Frequencies of a sequence given by its row position
    pub fn row(&self, i: usize) -> Option<&[f64; N_AMINO_ACIDS]> { self.rows.get(i) }

    /// Frequency of amino acid `aa` in the sequence stored under `key`
    pub fn get(&self, key: &str, aa: char) -> Option<f64> {
        let col = aa_index(aa.to_ascii_uppercase())?;
        let row = self.keys.iter().position(|k| k == key)?;
        Some(self.rows[row][col])
    }

    /// All the frequencies of a given amino acid, in row order
    pub fn column(&self, aa: char) -> Option<Vec<f64>> {
        let col = aa_index(aa.to_ascii_uppercase())?;
        Some(self.rows.iter().map(|r| r[col]).collect())
    }

    /// Column-wise arithmetic mean of this table.
    ///
    /// This is an unweighted mean of per-sequence frequencies: every sequence has the same
    /// weight regardless of its length.
    pub fn mean(&self) -> Result<AverageComposition> {
        if self.rows.is_empty() {
            return Err(SeqPrepError::InvalidInput("mean of an empty frequency table".to_string()));
        }
        let mut frequencies = [0.0; N_AMINO_ACIDS];
        for row in &self.rows {
            for (total, f) in frequencies.iter_mut().zip(row.iter()) { *total += f; }
        }
        let n = self.rows.len() as f64;
        frequencies.iter_mut().for_each(|f| *f /= n);

        Ok(AverageComposition { frequencies })
    }
}

impl fmt::Display for FrequencyTable {
    /// Tab-separated table with a header line
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "key")?;
        for aa in AMINO_ACIDS.iter() { write!(f, "\t{}", aa)?; }
        writeln!(f)?;
        for (key, row) in self.keys.iter().zip(self.rows.iter()) {
            write!(f, "{}", key)?;
            for val in row.iter() { write!(f, "\t{:.6}", val)?; }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Mean amino acid composition of a set of sequences.
///
/// Each value lies in [0, 1]; the values need not sum up to exactly 1.0.
#[derive(Clone, Debug, PartialEq)]
pub struct AverageComposition {
    frequencies: [f64; N_AMINO_ACIDS],
}

impl AverageComposition {
    /// Mean frequency of a given amino acid; `None` when `aa` is not in the alphabet
    pub fn get(&self, aa: char) -> Option<f64> {
        aa_index(aa.to_ascii_uppercase()).map(|i| self.frequencies[i])
    }

    /// All mean frequencies, indexed as [`AMINO_ACIDS`]
    pub fn frequencies(&self) -> &[f64; N_AMINO_ACIDS] { &self.frequencies }

    pub fn sum(&self) -> f64 { self.frequencies.iter().sum() }
}

/// Computes amino acid frequencies of a single sequence
fn sequence_frequencies(entry: &SequenceEntry, policy: AlphabetPolicy) -> Result<[f64; N_AMINO_ACIDS]> {
    if entry.is_empty() {
        return Err(SeqPrepError::InvalidInput(format!("sequence '{}' is empty", entry.key)));
    }
    let mut counts = [0usize; N_AMINO_ACIDS];
    let mut length: usize = 0;
    for (pos, residue) in entry.sequence.chars().enumerate() {
        length += 1;
        match aa_index(residue) {
            Some(i) => counts[i] += 1,
            None if policy == AlphabetPolicy::Strict => {
                return Err(SeqPrepError::UnsupportedCharacter {
                    key: entry.key.clone(), residue, position: pos });
            }
            None => {}
        }
    }
    let mut row = [0.0; N_AMINO_ACIDS];
    for (f, c) in row.iter_mut().zip(counts.iter()) { *f = *c as f64 / length as f64; }

    Ok(row)
}

/// Computes the frequency table for a collection of sequences.
///
/// Fails with [`SeqPrepError::InvalidInput`] when the collection or any of its sequences
/// is empty.
pub fn compute_frequencies(sequences: &SequenceSet, policy: AlphabetPolicy) -> Result<FrequencyTable> {
    if sequences.is_empty() {
        return Err(SeqPrepError::InvalidInput("no sequences to analyse".to_string()));
    }
    let mut rows: Vec<[f64; N_AMINO_ACIDS]> = Vec::with_capacity(sequences.len());
    for entry in sequences {
        rows.push(sequence_frequencies(entry, policy)?);
    }
    debug!("amino acid frequencies computed for {} sequences", rows.len());

    Ok(FrequencyTable { keys: sequences.keys(), rows })
}

/// Frequency table of a single sequence, stored under the key `"0"`
pub fn analyze_one(sequence: &str) -> Result<FrequencyTable> {
    compute_frequencies(&SequenceSet::from_one(sequence), AlphabetPolicy::Lenient)
}

/// Frequency table of a keyed collection, using the lenient policy
pub fn analyze_many(sequences: &SequenceSet) -> Result<FrequencyTable> {
    compute_frequencies(sequences, AlphabetPolicy::Lenient)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool { (a - b).abs() < 1e-12 }

    #[test]
    fn single_sequence_frequencies() {
        let table = analyze_one("MKV").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.keys(), &["0".to_string()]);
        for aa in AMINO_ACIDS.iter() {
            let expected = if "MKV".contains(*aa) { 1.0 / 3.0 } else { 0.0 };
            assert!(close(table.get("0", *aa).unwrap(), expected));
        }
    }

    #[test]
    fn two_sequences_and_their_mean() {
        let set = SequenceSet::from_sequences(&["AAAC", "CCCA"]);
        let table = analyze_many(&set).unwrap();
        assert!(close(table.get("0", 'A').unwrap(), 0.75));
        assert!(close(table.get("0", 'C').unwrap(), 0.25));
        assert!(close(table.get("1", 'A').unwrap(), 0.25));
        assert!(close(table.get("1", 'c').unwrap(), 0.75));
        assert_eq!(table.column('W').unwrap(), vec![0.0, 0.0]);

        let avg = table.mean().unwrap();
        assert!(close(avg.get('A').unwrap(), 0.5));
        assert!(close(avg.get('C').unwrap(), 0.5));
        assert!(close(avg.sum(), 1.0));
    }

    #[test]
    fn rows_sum_to_one() {
        let set = SequenceSet::from_sequences(&["MKVLAAGIVGLLLAQ", "ACDEFGHIKLMNPQRSTVWY", "wwyy"]);
        let table = analyze_many(&set).unwrap();
        for row in table.iter() {
            assert!((row.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn all_columns_are_present() {
        let table = analyze_one("G").unwrap();
        assert_eq!(table.columns().len(), N_AMINO_ACIDS);
        assert_eq!(table.columns(), &AMINO_ACIDS);
        assert_eq!(table.row(0).unwrap().len(), N_AMINO_ACIDS);
        assert!(table.get("0", 'B').is_none());
    }

    #[test]
    fn lower_case_input_is_normalised() {
        let upper = analyze_one("MKV").unwrap();
        let lower = analyze_one("mkv").unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn empty_input_fails() {
        assert!(matches!(analyze_one(""), Err(SeqPrepError::InvalidInput(_))));
        assert!(matches!(analyze_many(&SequenceSet::new()), Err(SeqPrepError::InvalidInput(_))));
        let set = SequenceSet::from_sequences(&["AC", ""]);
        assert!(matches!(analyze_many(&set), Err(SeqPrepError::InvalidInput(_))));
    }

    #[test]
    fn unknown_residues_are_undercounted_when_lenient() {
        let table = analyze_one("AX").unwrap();
        assert!(close(table.get("0", 'A').unwrap(), 0.5));
        let total: f64 = table.row(0).unwrap().iter().sum();
        assert!(close(total, 0.5));
    }

    #[test]
    fn unknown_residues_are_rejected_when_strict() {
        let set = SequenceSet::from_keyed(&[("ok", "ACD"), ("bad", "ACXD")]);
        match compute_frequencies(&set, AlphabetPolicy::Strict) {
            Err(SeqPrepError::UnsupportedCharacter { key, residue, position }) => {
                assert_eq!(key, "bad");
                assert_eq!(residue, 'X');
                assert_eq!(position, 2);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn mean_of_empty_table_fails() {
        let table = FrequencyTable { keys: vec![], rows: vec![] };
        assert!(table.mean().is_err());
    }

    #[test]
    fn table_is_printed_with_header() {
        let text = analyze_one("MKV").unwrap().to_string();
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("key\tA\tC\tD"));
        assert!(lines.next().unwrap().starts_with("0\t0.000000"));
        assert!(lines.next().is_none());
    }
}
