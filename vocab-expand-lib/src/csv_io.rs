// Header-driven CSV reading and writing of dataset rows.

use std::fs::{self, File, OpenOptions};
use std::path::Path;

use tracing::warn;

use crate::error::{ExpandError, Result};
use crate::types::Row;

/// An input file read fully into memory.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Header names in file order. Empty when the file had no header.
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }
}

fn reader_for(path: &Path) -> Result<csv::Reader<File>> {
    // Flexible: hand-edited word lists may carry ragged rows.
    Ok(csv::ReaderBuilder::new().flexible(true).from_path(path)?)
}

/// Read every row of a header-driven CSV.
pub fn read_dataset(path: &Path) -> Result<Dataset> {
    if !path.exists() {
        return Err(ExpandError::MissingInput(path.to_path_buf()));
    }
    let mut reader = reader_for(path)?;
    let columns: Vec<String> = reader.headers()?.iter().map(String::from).collect();

    let mut rows: Vec<Row> = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(
            columns
                .iter()
                .zip(record.iter())
                .map(|(k, v)| (k.as_str(), v))
                .collect(),
        );
    }
    Ok(Dataset { columns, rows })
}

/// Collect one word per record: the first non-blank value among `columns`,
/// trimmed and lowercased. Files lacking all of the columns yield nothing.
pub fn read_words(path: &Path, columns: &[&str]) -> Result<Vec<String>> {
    let mut reader = reader_for(path)?;
    let headers = reader.headers()?.clone();
    let indices: Vec<usize> = columns
        .iter()
        .filter_map(|name| headers.iter().position(|h| h == *name))
        .collect();
    if indices.is_empty() {
        return Ok(Vec::new());
    }

    let mut words = Vec::new();
    for record in reader.records() {
        let record = record?;
        let word = indices
            .iter()
            .filter_map(|&i| record.get(i))
            .map(str::trim)
            .find(|w| !w.is_empty());
        if let Some(w) = word {
            words.push(w.to_lowercase());
        }
    }
    Ok(words)
}

// A record survived intact only if its terminator was written and it does not
// end inside a quoted field. Data records must also match the header's width.
fn is_complete(raw: &[u8], fields: usize, width: Option<usize>) -> bool {
    let terminated = matches!(raw.last(), Some(b'\n' | b'\r'));
    let balanced = raw.iter().filter(|&&b| b == b'"').count() % 2 == 0;
    terminated && balanced && width.map_or(true, |w| w == fields)
}

/// Cut an output file left by an interrupted run back to its last complete
/// record, and return the `word_column` values of the records kept (trimmed,
/// lowercased, blanks skipped). A torn header empties the file. A missing file
/// yields nothing.
pub fn truncate_torn_tail(path: &Path, word_column: &str) -> Result<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let bytes = fs::read(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes.as_slice());

    let mut record = csv::ByteRecord::new();
    let mut width = None;
    let mut word_index = None;
    let mut words = Vec::new();
    let mut keep = 0u64;
    loop {
        let start = reader.position().byte();
        if !reader.read_byte_record(&mut record)? {
            break;
        }
        let end = reader.position().byte();
        let raw = &bytes[start as usize..end as usize];
        if !is_complete(raw, record.len(), width) {
            break;
        }
        keep = end;
        match width {
            None => {
                width = Some(record.len());
                word_index = record.iter().position(|h| h == word_column.as_bytes());
            }
            Some(_) => {
                let word = word_index
                    .and_then(|i| record.get(i))
                    .map(|w| String::from_utf8_lossy(w).trim().to_lowercase())
                    .filter(|w| !w.is_empty());
                words.extend(word);
            }
        }
    }

    let len = bytes.len() as u64;
    if keep < len {
        warn!(
            "{} ends in an incomplete record; dropping its last {} bytes",
            path.display(),
            len - keep
        );
        OpenOptions::new().write(true).open(path)?.set_len(keep)?;
    }
    Ok(words)
}

/// Buffered CSV writer that lays rows out in a fixed column order.
pub struct RowWriter {
    writer: csv::Writer<File>,
    columns: Vec<String>,
}

impl RowWriter {
    /// Truncate (or create) `path` and write the header.
    pub fn create(path: &Path, columns: Vec<String>) -> Result<Self> {
        let file = File::create(path)?;
        let mut w = Self::from_file(file, columns);
        w.write_header()?;
        Ok(w)
    }

    /// Open `path` for appending. The header is written only when asked.
    pub fn append(path: &Path, columns: Vec<String>, write_header: bool) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut w = Self::from_file(file, columns);
        if write_header {
            w.write_header()?;
        }
        Ok(w)
    }

    fn from_file(file: File, columns: Vec<String>) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        Self { writer, columns }
    }

    fn write_header(&mut self) -> Result<()> {
        self.writer.write_record(&self.columns)?;
        Ok(())
    }

    pub fn write_row(&mut self, row: &Row) -> Result<()> {
        self.writer.write_record(row.values(&self.columns))?;
        Ok(())
    }

    /// Push buffered rows to the file.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Write a whole dataset to `path`, header first.
pub fn write_dataset(path: &Path, columns: &[String], rows: &[Row]) -> Result<()> {
    let mut writer = RowWriter::create(path, columns.to_vec())?;
    for row in rows {
        writer.write_row(row)?;
    }
    writer.flush()
}
