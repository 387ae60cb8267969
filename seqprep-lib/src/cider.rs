//! Sequence parameters in the style of CIDER / localCIDER.
//!
//! Charges follow the usual convention for intrinsically disordered proteins: K and R are
//! positive, D and E negative, histidine is neutral. Charge patterning is measured with
//! kappa of Das & Pappu (PNAS 2013), averaged over blob sizes 5 and 6.

use crate::amino_acids::{aa_index, N_AMINO_ACIDS};
use crate::parameters::{ParameterCalculator, SequenceParameters};

/// Blob sizes used to compute kappa
const BLOB_SIZES: [usize; 2] = [5, 6];

/// Kyte-Doolittle (1982) hydropathy, indexed as [`AMINO_ACIDS`](crate::AMINO_ACIDS)
const KYTE_DOOLITTLE: [f64; N_AMINO_ACIDS] = [
    1.8,  // A
    2.5,  // C
    -3.5, // D
    -3.5, // E
    2.8,  // F
    -0.4, // G
    -3.2, // H
    4.5,  // I
    -3.9, // K
    3.8,  // L
    1.9,  // M
    -3.5, // N
    -1.6, // P
    -3.5, // Q
    -4.5, // R
    -0.8, // S
    -0.7, // T
    4.2,  // V
    -0.9, // W
    -1.3, // Y
];

/// Shift that moves Kyte-Doolittle values onto the 0..9 scale
const HYDROPATHY_SHIFT: f64 = 4.5;

/// Residues statistically enriched in intrinsically disordered regions
const DISORDER_PROMOTING: [char; 11] = ['T', 'A', 'G', 'R', 'D', 'H', 'Q', 'K', 'S', 'E', 'P'];

fn charge(aa: char) -> i8 {
    match aa {
        'K' | 'R' => 1,
        'D' | 'E' => -1,
        _ => 0,
    }
}

/// Charge asymmetry of a window holding `n_pos` positive and `n_neg` negative residues
fn asymmetry(n_pos: usize, n_neg: usize, size: usize) -> f64 {
    if n_pos + n_neg == 0 { return 0.0; }
    let f_pos = n_pos as f64 / size as f64;
    let f_neg = n_neg as f64 / size as f64;
    (f_pos - f_neg).powi(2) / (f_pos + f_neg)
}

/// Mean squared deviation of blob charge asymmetry from the asymmetry of the whole sequence
fn delta(charges: &[i8], blob: usize) -> f64 {
    let n = charges.len();
    let n_pos = charges.iter().filter(|c| **c > 0).count();
    let n_neg = charges.iter().filter(|c| **c < 0).count();
    let sigma = asymmetry(n_pos, n_neg, n);

    // --- running counts of charges within the current blob
    let mut blob_pos = charges[..blob].iter().filter(|c| **c > 0).count();
    let mut blob_neg = charges[..blob].iter().filter(|c| **c < 0).count();
    let n_blobs = n - blob + 1;
    let mut total = (asymmetry(blob_pos, blob_neg, blob) - sigma).powi(2);
    for i in 1..n_blobs {
        match charges[i - 1] {
            1 => blob_pos -= 1,
            -1 => blob_neg -= 1,
            _ => {}
        }
        match charges[i + blob - 1] {
            1 => blob_pos += 1,
            -1 => blob_neg += 1,
            _ => {}
        }
        total += (asymmetry(blob_pos, blob_neg, blob) - sigma).powi(2);
    }

    total / n_blobs as f64
}

/// Number of residues the window `[from, to)` shares with the block `[start, end)`
fn overlap(from: usize, to: usize, block: (usize, usize)) -> usize {
    to.min(block.1).saturating_sub(from.max(block.0))
}

/// `delta` of the arrangement `0^left +^n_pos 0^middle -^n_neg 0^right`, without building it.
///
/// A window lying inside a single block has the same asymmetry as any other window of that
/// block, so only windows across a block boundary are evaluated one by one.
fn segregated_delta(left: usize, n_pos: usize, middle: usize, n_neg: usize, right: usize,
                    blob: usize, starts: &mut Vec<usize>) -> f64 {
    let n = left + n_pos + middle + n_neg + right;
    let sigma = asymmetry(n_pos, n_neg, n);
    let n_blobs = n - blob + 1;
    let pos_block = (left, left + n_pos);
    let neg_block = (n - right - n_neg, n - right);

    // --- windows inside a single block
    let inside = |len: usize| (len + 1).saturating_sub(blob) as f64;
    let mut total = (inside(left) + inside(middle) + inside(right)) * sigma.powi(2)
        + inside(n_pos) * (asymmetry(blob, 0, blob) - sigma).powi(2)
        + inside(n_neg) * (asymmetry(0, blob, blob) - sigma).powi(2);

    // --- windows that start before a block boundary and end after it
    starts.clear();
    for boundary in [pos_block.0, pos_block.1, neg_block.0, neg_block.1] {
        if boundary == 0 || boundary >= n { continue; }
        starts.extend((boundary + 1).saturating_sub(blob)..boundary.min(n_blobs));
    }
    starts.sort_unstable();
    starts.dedup();
    for s in starts.iter() {
        let w_pos = overlap(*s, s + blob, pos_block);
        let w_neg = overlap(*s, s + blob, neg_block);
        total += (asymmetry(w_pos, w_neg, blob) - sigma).powi(2);
    }

    total / n_blobs as f64
}

/// The largest `delta` any arrangement of the given composition can reach.
///
/// Searches the maximally segregated arrangements: a block of positive residues and a block
/// of negative ones, with neutral residues split between both ends and the gap between blocks.
/// Each arrangement costs O(blob), so the search is quadratic in the number of neutral residues.
fn delta_max(n_pos: usize, n_neg: usize, n_neutral: usize, blob: usize) -> f64 {
    let mut starts: Vec<usize> = Vec::with_capacity(4 * blob);
    let mut best: f64 = 0.0;
    for left in 0..=n_neutral {
        for right in 0..=(n_neutral - left) {
            let middle = n_neutral - left - right;
            best = best.max(segregated_delta(left, n_pos, middle, n_neg, right, blob, &mut starts));
        }
    }

    best
}

/// Kappa of a charge pattern; `-1` when the sequence carries no charge at all
fn kappa(charges: &[i8]) -> f64 {
    let n_pos = charges.iter().filter(|c| **c > 0).count();
    let n_neg = charges.iter().filter(|c| **c < 0).count();
    if n_pos + n_neg == 0 { return -1.0; }
    let n_neutral = charges.len() - n_pos - n_neg;

    let mut total = 0.0;
    for blob in BLOB_SIZES {
        let d_max = delta_max(n_pos, n_neg, n_neutral, blob);
        if d_max > 0.0 { total += delta(charges, blob) / d_max; }
    }

    (total / BLOB_SIZES.len() as f64).min(1.0)
}

/// Native implementation of the CIDER parameters used to describe a disordered sequence
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalCider;

impl LocalCider {
    pub fn new() -> LocalCider { LocalCider }
}

impl ParameterCalculator for LocalCider {

    fn compute_params(&self, sequence: &str) -> Result<SequenceParameters, String> {
        if sequence.is_empty() { return Err("empty sequence".to_string()); }

        let mut indexes: Vec<usize> = Vec::with_capacity(sequence.len());
        for (pos, residue) in sequence.chars().enumerate() {
            match aa_index(residue.to_ascii_uppercase()) {
                Some(i) => indexes.push(i),
                None => return Err(format!("unsupported residue '{}' at position {}", residue, pos)),
            }
        }
        let max_blob = BLOB_SIZES[BLOB_SIZES.len() - 1];
        if indexes.len() < max_blob {
            return Err(format!("sequence of {} residues is shorter than a {}-residue blob",
                               indexes.len(), max_blob));
        }

        let n = indexes.len() as f64;
        let upper: Vec<char> = sequence.chars().map(|c| c.to_ascii_uppercase()).collect();
        let charges: Vec<i8> = upper.iter().map(|aa| charge(*aa)).collect();
        let n_pos = charges.iter().filter(|c| **c > 0).count() as f64;
        let n_neg = charges.iter().filter(|c| **c < 0).count() as f64;
        let hydropathy: f64 = indexes.iter().map(|i| KYTE_DOOLITTLE[*i] + HYDROPATHY_SHIFT).sum();
        let n_disorder = upper.iter().filter(|aa| DISORDER_PROMOTING.contains(*aa)).count() as f64;

        Ok(SequenceParameters {
            kappa: kappa(&charges),
            fcr: (n_pos + n_neg) / n,
            ncpr: (n_pos - n_neg) / n,
            hydrophobicity: hydropathy / n,
            fraction_disorder_promoting: n_disorder / n,
        })
    }

    fn name(&self) -> &str { "LocalCider" }
}
