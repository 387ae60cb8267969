use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Shuffles residues of a sequence with a seeded random generator.
///
/// The result is a permutation of the input: same residues, same counts. A given seed and
/// input always give the same output for a given version of the `rand` crate.
pub fn shuffle_sequence(sequence: &str, seed: u64) -> String {
    let mut residues: Vec<char> = sequence.chars().collect();
    let mut rng = StdRng::seed_from_u64(seed);
    residues.shuffle(&mut rng);

    residues.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(s: &str) -> Vec<char> {
        let mut v: Vec<char> = s.chars().collect();
        v.sort();
        v
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let seq = "MKVLAAGIVGLLLAQWWYY";
        let out = shuffle_sequence(seq, 1);
        assert_eq!(sorted(&out), sorted(seq));
    }

    #[test]
    fn same_seed_same_result() {
        let seq = "ACDEFGHIKLMNPQRSTVWY";
        assert_eq!(shuffle_sequence(seq, 42), shuffle_sequence(seq, 42));
    }

    #[test]
    fn different_seeds_reorder_differently() {
        let seq = "ACDEFGHIKLMNPQRSTVWYACDEFGHIKLMNPQRSTVWY";
        let outputs: Vec<String> = (0..5).map(|s| shuffle_sequence(seq, s)).collect();
        assert!(outputs.iter().any(|o| o != &outputs[0]));
    }

    #[test]
    fn trivial_inputs() {
        assert_eq!(shuffle_sequence("", 3), "");
        assert_eq!(shuffle_sequence("W", 3), "W");
        assert_eq!(shuffle_sequence("AAAA", 3), "AAAA");
    }
}
