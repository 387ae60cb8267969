use std::fmt;
use std::slice::Iter;

use log::{debug, warn};

use crate::error::{Result, SeqPrepError};
use crate::sequence_set::SequenceSet;

/// Polymer parameters of a single sequence
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SequenceParameters {
    /// Charge patterning parameter
    pub kappa: f64,
    /// Fraction of charged residues
    pub fcr: f64,
    /// Net charge per residue
    pub ncpr: f64,
    /// Mean hydropathy
    pub hydrophobicity: f64,
    /// Fraction of disorder-promoting residues
    pub fraction_disorder_promoting: f64,
}

/// Computes polymer parameters of a sequence.
///
/// Implementations must be deterministic: the same sequence gives the same parameters or the
/// same error message every time.
pub trait ParameterCalculator {
    /// Parameters of an upper-case sequence; the error string explains why it can't be computed
    fn compute_params(&self, sequence: &str) -> std::result::Result<SequenceParameters, String>;

    fn name(&self) -> &str;
}

/// Polymer parameters: one row per sequence, keyed as the input collection
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterTable {
    keys: Vec<String>,
    rows: Vec<SequenceParameters>,
}

impl ParameterTable {
    pub fn len(&self) -> usize { self.rows.len() }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn keys(&self) -> &[String] { &self.keys }

    pub fn iter(&self) -> Iter<'_, SequenceParameters> { self.rows.iter() }

    /// Parameters of the sequence stored under `key`
    pub fn get(&self, key: &str) -> Option<&SequenceParameters> {
        self.keys.iter().position(|k| k == key).map(|i| &self.rows[i])
    }
}

impl fmt::Display for ParameterTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "key\tkappa\tFCR\tNCPR\tHydrophobicity\tFrac. dis. prom.")?;
        for (key, p) in self.keys.iter().zip(self.rows.iter()) {
            writeln!(f, "{}\t{:.6}\t{:.6}\t{:.6}\t{:.6}\t{:.6}", key, p.kappa, p.fcr, p.ncpr,
                     p.hydrophobicity, p.fraction_disorder_promoting)?;
        }
        Ok(())
    }
}

/// Computes the parameter table for a collection of sequences.
///
/// The calculator is called exactly once per sequence. The first failure stops the whole
/// computation and is reported with the key of the offending sequence.
pub fn compute_parameter_table(sequences: &SequenceSet, calculator: &dyn ParameterCalculator) -> Result<ParameterTable> {
    if sequences.is_empty() {
        return Err(SeqPrepError::InvalidInput("no sequences to compute parameters for".to_string()));
    }
    let mut rows: Vec<SequenceParameters> = Vec::with_capacity(sequences.len());
    for entry in sequences {
        match calculator.compute_params(&entry.sequence) {
            Ok(params) => rows.push(params),
            Err(reason) => {
                warn!("{} failed for sequence {}: {}", calculator.name(), entry.key, reason);
                return Err(SeqPrepError::ParameterComputation { key: entry.key.clone(), reason });
            }
        }
    }
    debug!("{} parameters computed for {} sequences", calculator.name(), rows.len());

    Ok(ParameterTable { keys: sequences.keys(), rows })
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    /// Reports sequence length as kappa and fails on sequences containing 'X'
    struct LengthCalculator {
        calls: Cell<usize>,
    }

    impl ParameterCalculator for LengthCalculator {
        fn compute_params(&self, sequence: &str) -> std::result::Result<SequenceParameters, String> {
            self.calls.set(self.calls.get() + 1);
            if sequence.contains('X') { return Err("X is not allowed".to_string()); }
            Ok(SequenceParameters { kappa: sequence.len() as f64, ..Default::default() })
        }

        fn name(&self) -> &str { "LengthCalculator" }
    }

    #[test]
    fn one_row_per_sequence() {
        let calc = LengthCalculator { calls: Cell::new(0) };
        let set = SequenceSet::from_keyed(&[("b", "AAAA"), ("a", "CC")]);
        let table = compute_parameter_table(&set, &calc).unwrap();
        assert_eq!(calc.calls.get(), 2);
        assert_eq!(table.keys(), &["b".to_string(), "a".to_string()]);
        assert_eq!(table.get("b").unwrap().kappa, 4.0);
        assert_eq!(table.get("a").unwrap().kappa, 2.0);
        assert!(table.get("c").is_none());
    }

    #[test]
    fn failure_is_tagged_with_key() {
        let calc = LengthCalculator { calls: Cell::new(0) };
        let set = SequenceSet::from_keyed(&[("good", "AAAA"), ("bad", "AXA"), ("never", "CC")]);
        match compute_parameter_table(&set, &calc) {
            Err(SeqPrepError::ParameterComputation { key, reason }) => {
                assert_eq!(key, "bad");
                assert_eq!(reason, "X is not allowed");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(calc.calls.get(), 2);
    }

    #[test]
    fn empty_collection_fails() {
        let calc = LengthCalculator { calls: Cell::new(0) };
        assert!(matches!(compute_parameter_table(&SequenceSet::new(), &calc),
            Err(SeqPrepError::InvalidInput(_))));
    }

    #[test]
    fn table_header() {
        let calc = LengthCalculator { calls: Cell::new(0) };
        let table = compute_parameter_table(&SequenceSet::from_one("AC"), &calc).unwrap();
        let text = table.to_string();
        assert!(text.starts_with("key\tkappa\tFCR\tNCPR"));
        assert!(text.contains("0\t2.000000\t0.000000"));
    }
}
