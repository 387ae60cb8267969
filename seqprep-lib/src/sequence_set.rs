use std::slice::Iter;

use crate::amino_acids::normalize;

/// A single sequence together with the key it is known by in the caller's collection
#[derive(Clone, Debug, PartialEq)]
pub struct SequenceEntry {
    /// Row key: FASTA id, metadata row name, or the position of the sequence in a plain list
    pub key: String,
    /// Protein sequence, upper-cased
    pub sequence: String,
}

impl SequenceEntry {
    pub fn new(key: &str, sequence: &str) -> SequenceEntry {
        SequenceEntry { key: key.to_string(), sequence: normalize(sequence) }
    }

    /// Number of residues, including any residue outside of the alphabet
    pub fn len(&self) -> usize { self.sequence.chars().count() }

    pub fn is_empty(&self) -> bool { self.sequence.is_empty() }
}

/// Ordered, keyed collection of sequences.
///
/// Every table computed from a [`SequenceSet`] keeps its keys and its order, so results
/// can be joined back onto the records the sequences came from. A single sequence is
/// just a one-element set keyed `"0"`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SequenceSet {
    entries: Vec<SequenceEntry>,
}

impl SequenceSet {
    /// Creates an empty collection
    pub fn new() -> SequenceSet { SequenceSet { entries: Vec::new() } }

    /// One-row collection holding a single sequence under the default key `"0"`
    pub fn from_one(sequence: &str) -> SequenceSet {
        SequenceSet { entries: vec![SequenceEntry::new("0", sequence)] }
    }

    /// Collection of plain sequences, keyed by their position: `"0"`, `"1"`, ...
    pub fn from_sequences<S: AsRef<str>>(sequences: &[S]) -> SequenceSet {
        let entries = sequences.iter().enumerate()
            .map(|(i, s)| SequenceEntry::new(&i.to_string(), s.as_ref()))
            .collect();
        SequenceSet { entries }
    }

    /// Collection of `(key, sequence)` pairs; the order of pairs is preserved
    pub fn from_keyed<K: AsRef<str>, S: AsRef<str>>(pairs: &[(K, S)]) -> SequenceSet {
        let entries = pairs.iter()
            .map(|(k, s)| SequenceEntry::new(k.as_ref(), s.as_ref()))
            .collect();
        SequenceSet { entries }
    }

    /// Appends a sequence under a given key
    pub fn push(&mut self, key: &str, sequence: &str) {
        self.entries.push(SequenceEntry::new(key, sequence));
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn iter(&self) -> Iter<'_, SequenceEntry> { self.entries.iter() }

    /// Keys of all the sequences, in collection order
    pub fn keys(&self) -> Vec<String> { self.entries.iter().map(|e| e.key.clone()).collect() }

    /// Finds a sequence by its key
    pub fn get(&self, key: &str) -> Option<&SequenceEntry> {
        self.entries.iter().find(|e| e.key == key)
    }
}

impl<'a> IntoIterator for &'a SequenceSet {
    type Item = &'a SequenceEntry;
    type IntoIter = Iter<'a, SequenceEntry>;

    fn into_iter(self) -> Self::IntoIter { self.entries.iter() }
}
