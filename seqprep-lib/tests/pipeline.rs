//! From a FASTA file to frequency, parameter tables and the average sequence.

use std::io::Write;

use seqprep_lib::*;
use tempfile::NamedTempFile;

const VARIANTS: &str = ">wt wild type
MDVFMKGLSKAKEGVVAAAEKTKQGVAEAAGKTKEGVLYVGSKTKEGVVHGVATVAEKTKEQ
>shuffled reordered wild type
ADKTKVESTGAVLKAFKVVAKGEKEQTATKTVAAGGKVGKVKVKHEVGAAMEMEGGYQSELV
>short
MKVLAAGIVGKEEKRD
";

fn variants_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", VARIANTS).unwrap();
    file.flush().unwrap();
    file
}

fn sorted(s: &str) -> Vec<char> {
    let mut v: Vec<char> = s.chars().collect();
    v.sort();
    v
}

#[test]
fn tables_are_keyed_by_fasta_ids() {
    let file = variants_file();
    let set = fasta_to_set(&read_fasta(file.path()).unwrap());

    let freqs = analyze_many(&set).unwrap();
    assert_eq!(freqs.keys(), &["wt", "shuffled", "short"]);
    for row in freqs.iter() {
        assert!((row.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    let params = compute_parameter_table(&set, &LocalCider::new()).unwrap();
    assert_eq!(params.keys(), freqs.keys());
    let wt = params.get("wt").unwrap();
    let shuffled = params.get("shuffled").unwrap();
    // --- a permutation keeps the composition-only parameters
    assert!((wt.fcr - shuffled.fcr).abs() < 1e-12);
    assert!((wt.hydrophobicity - shuffled.hydrophobicity).abs() < 1e-12);
    assert!(wt.kappa >= 0.0 && wt.kappa <= 1.0);
}

#[test]
fn every_operation_is_deterministic() {
    let file = variants_file();
    let set = fasta_to_set(&read_fasta(file.path()).unwrap());

    assert_eq!(analyze_many(&set).unwrap(), analyze_many(&set).unwrap());
    let cider = LocalCider::new();
    assert_eq!(compute_parameter_table(&set, &cider).unwrap(), compute_parameter_table(&set, &cider).unwrap());
    assert_eq!(synthesize_average_sequence(&set, 1).unwrap(), synthesize_average_sequence(&set, 1).unwrap());
}

#[test]
fn average_of_a_single_record_is_its_permutation() {
    let file = variants_file();
    let wt = load_fasta_seq(file.path()).unwrap();
    assert_eq!(wt.id, "wt");
    assert_eq!(wt.description, "wild type");
    assert_eq!(wt.sequence, "MDVFMKGLSKAKEGVVAAAEKTKQGVAEAAGKTKEGVLYVGSKTKEGVVHGVATVAEKTKEQ");
    assert_eq!(wt.sequence.len(), 62);

    let avg = synthesize_average_sequence(&SequenceSet::from_one(&wt.sequence), 5).unwrap();
    assert_eq!(sorted(&avg), sorted(&wt.sequence));
}

#[test]
fn average_sequence_length_follows_mean_length() {
    let set = SequenceSet::from_sequences(&["AAAC", "CCCA"]);
    let avg = synthesize_average_sequence(&set, 1).unwrap();
    assert_eq!(avg.len(), 4);
    assert_eq!(sorted(&avg), vec!['A', 'A', 'C', 'C']);
}

#[test]
fn empty_inputs_fail() {
    assert!(matches!(analyze_one(""), Err(SeqPrepError::InvalidInput(_))));
    assert!(matches!(synthesize_average_sequence(&SequenceSet::new(), 1), Err(SeqPrepError::InvalidInput(_))));
}

#[test]
fn degenerate_sequence_stops_parameter_table() {
    let set = SequenceSet::from_keyed(&[("long", "MKVLAAGIVGKEEKRD"), ("tiny", "MKV")]);
    match compute_parameter_table(&set, &LocalCider::new()) {
        Err(SeqPrepError::ParameterComputation { key, .. }) => assert_eq!(key, "tiny"),
        other => panic!("unexpected result: {:?}", other),
    }
}
