use std::fmt;

/// Number of letters in the amino acid alphabet
pub const N_AMINO_ACIDS: usize = 20;

/// One-letter codes of the naturally occurring amino acids.
///
/// This order is the column order of every frequency table and the order in which
/// an average sequence is assembled before it gets shuffled.
pub const AMINO_ACIDS: [char; N_AMINO_ACIDS] = ['A', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'K', 'L',
    'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V', 'W', 'Y'];

/// General chemical type of an amino acid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AminoAcidType {
    Hydrophobic,
    Polar,
    Positive,
    Negative,
    Special,
}

impl fmt::Display for AminoAcidType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AminoAcidType::Hydrophobic => "Hydrophobic",
            AminoAcidType::Polar => "Polar",
            AminoAcidType::Positive => "Positive",
            AminoAcidType::Negative => "Negative",
            AminoAcidType::Special => "Special",
        };
        write!(f, "{}", name)
    }
}

/// Type of each amino acid, indexed the same way as [`AMINO_ACIDS`]
const AMINO_ACID_TYPES: [AminoAcidType; N_AMINO_ACIDS] = [
    AminoAcidType::Hydrophobic, // A
    AminoAcidType::Polar,       // C
    AminoAcidType::Negative,    // D
    AminoAcidType::Negative,    // E
    AminoAcidType::Hydrophobic, // F
    AminoAcidType::Special,     // G
    AminoAcidType::Polar,       // H
    AminoAcidType::Hydrophobic, // I
    AminoAcidType::Positive,    // K
    AminoAcidType::Hydrophobic, // L
    AminoAcidType::Hydrophobic, // M
    AminoAcidType::Polar,       // N
    AminoAcidType::Special,     // P
    AminoAcidType::Polar,       // Q
    AminoAcidType::Positive,    // R
    AminoAcidType::Polar,       // S
    AminoAcidType::Polar,       // T
    AminoAcidType::Hydrophobic, // V
    AminoAcidType::Hydrophobic, // W
    AminoAcidType::Polar,       // Y
];

/// Position of an upper-case one-letter code in [`AMINO_ACIDS`].
///
/// Returns `None` for anything outside of the alphabet, lower-case letters included.
pub fn aa_index(aa: char) -> Option<usize> {
    match aa {
        'A' => Some(0),
        'C' => Some(1),
        'D' => Some(2),
        'E' => Some(3),
        'F' => Some(4),
        'G' => Some(5),
        'H' => Some(6),
        'I' => Some(7),
        'K' => Some(8),
        'L' => Some(9),
        'M' => Some(10),
        'N' => Some(11),
        'P' => Some(12),
        'Q' => Some(13),
        'R' => Some(14),
        'S' => Some(15),
        'T' => Some(16),
        'V' => Some(17),
        'W' => Some(18),
        'Y' => Some(19),
        _ => None,
    }
}

/// General type of an amino acid given by its one-letter code (case-insensitive)
pub fn amino_acid_type(aa: char) -> Option<AminoAcidType> {
    aa_index(aa.to_ascii_uppercase()).map(|i| AMINO_ACID_TYPES[i])
}

/// Upper-cases a sequence; every analysis works on the normalised form
pub fn normalize(seq: &str) -> String { seq.to_uppercase() }
