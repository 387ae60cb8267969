//! Loading sequences and metadata, writing results.
//!
//! Nothing here is needed by the analysis itself; these are the readers used by the command
//! line tools to turn FASTA files or a metadata JSON file into a [`SequenceSet`].

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::debug;
use needletail::parse_fastx_file;
use serde_json::{Map, Value};

use crate::error::{Result, SeqPrepError};
use crate::sequence_set::SequenceSet;

/// A single FASTA entry
#[derive(Clone, Debug, PartialEq)]
pub struct FastaRecord {
    pub sequence: String,
    /// First word of the header line, without the leading `>`
    pub id: String,
    /// The rest of the header line
    pub description: String,
}

impl FastaRecord {
    /// Splits a header line (without `>`) into the id and the description
    fn from_header(header: &str, sequence: String) -> FastaRecord {
        let mut tokens = header.trim().split(' ');
        let id = tokens.next().unwrap_or("").to_string();
        let description = tokens.collect::<Vec<&str>>().join(" ");

        FastaRecord { sequence, id, description }
    }
}

/// Loads the first sequence of a FASTA file.
///
/// The sequence may span any number of lines; it ends at the next header or at the end of file.
pub fn load_fasta_seq<P: AsRef<Path>>(path: P) -> Result<FastaRecord> {
    let mut records = read_fasta(path)?;

    Ok(records.swap_remove(0))
}

/// Loads all the records of a FASTA file; an empty file is an error
pub fn read_fasta<P: AsRef<Path>>(path: P) -> Result<Vec<FastaRecord>> {
    let path = path.as_ref();
    if fs::metadata(path)?.len() == 0 {
        return Err(SeqPrepError::InvalidInput(format!("FASTA file {} is empty", path.display())));
    }
    let mut reader = parse_fastx_file(path).map_err(|e| SeqPrepError::Parse(e.to_string()))?;

    let mut records: Vec<FastaRecord> = Vec::new();
    while let Some(record) = reader.next() {
        let record = record.map_err(|e| SeqPrepError::Parse(e.to_string()))?;
        let header = String::from_utf8_lossy(record.id());
        // --- line breaks are already gone, stray blanks are dropped here
        let sequence: String = record.seq().iter()
            .filter(|b| !b.is_ascii_whitespace())
            .map(|b| *b as char)
            .collect();
        records.push(FastaRecord::from_header(&header, sequence));
    }
    if records.is_empty() {
        return Err(SeqPrepError::InvalidInput(format!("no sequences in {}", path.display())));
    }
    debug!("{} sequences loaded from {}", records.len(), path.display());

    Ok(records)
}

/// Collects FASTA records into a [`SequenceSet`] keyed by record id
pub fn fasta_to_set(records: &[FastaRecord]) -> SequenceSet {
    let mut set = SequenceSet::new();
    for r in records { set.push(&r.id, &r.sequence); }
    set
}

/// Metadata records: one row per variant, each row a map of named fields
#[derive(Clone, Debug, PartialEq)]
pub struct MetadataTable {
    rows: Vec<(String, Map<String, Value>)>,
}

impl MetadataTable {
    pub fn len(&self) -> usize { self.rows.len() }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Row names, in file order
    pub fn keys(&self) -> Vec<String> { self.rows.iter().map(|(k, _)| k.clone()).collect() }

    /// Value of a field in a given row
    pub fn get(&self, row: &str, field: &str) -> Option<&Value> {
        self.rows.iter().find(|(k, _)| k == row).and_then(|(_, fields)| fields.get(field))
    }

    /// Sequences held by a given field of every row, keyed by row name
    pub fn sequences(&self, field: &str) -> Result<SequenceSet> {
        let mut set = SequenceSet::new();
        for (key, fields) in &self.rows {
            match fields.get(field).and_then(Value::as_str) {
                Some(seq) => set.push(key, seq),
                None => return Err(SeqPrepError::InvalidInput(
                    format!("metadata row '{}' has no string field '{}'", key, field))),
            }
        }
        Ok(set)
    }
}

fn object<'a>(root: &'a Value, name: &str) -> Result<&'a Map<String, Value>> {
    root.get(name).and_then(Value::as_object)
        .ok_or_else(|| SeqPrepError::Parse(format!("metadata has no '{}' object", name)))
}

/// Loads a metadata JSON file.
///
/// The file holds two objects, `data` and `templates`, each mapping a row name onto its fields.
/// Rows come from `data`; fields that only templates define are joined onto the data row
/// of the same name.
pub fn load_metadata<P: AsRef<Path>>(path: P) -> Result<MetadataTable> {
    let root: Value = serde_json::from_str(&fs::read_to_string(path.as_ref())?)?;
    let data = object(&root, "data")?;
    let templates = object(&root, "templates")?;

    let mut data_fields: HashSet<&str> = HashSet::new();
    for fields in data.values().filter_map(Value::as_object) {
        data_fields.extend(fields.keys().map(|k| k.as_str()));
    }

    let mut rows: Vec<(String, Map<String, Value>)> = Vec::with_capacity(data.len());
    for (name, fields) in data {
        let mut row = fields.as_object().cloned()
            .ok_or_else(|| SeqPrepError::Parse(format!("metadata row '{}' is not an object", name)))?;
        if let Some(template) = templates.get(name).and_then(Value::as_object) {
            for (field, value) in template {
                if !data_fields.contains(field.as_str()) { row.insert(field.clone(), value.clone()); }
            }
        }
        rows.push((name.clone(), row));
    }
    debug!("{} metadata rows loaded from {}", rows.len(), path.as_ref().display());

    Ok(MetadataTable { rows })
}

/// Opens an output stream; an empty name or `stdout` writes on the screen
pub fn out_writer(name: &str) -> Result<Box<dyn Write>> {
    if writes_to_screen(name) {
        Ok(Box::new(io::stdout()))
    } else {
        Ok(Box::new(BufWriter::new(File::create(name)?)))
    }
}

/// True when a given output name denotes the screen
pub fn writes_to_screen(name: &str) -> bool { name.is_empty() || name == "stdout" }
