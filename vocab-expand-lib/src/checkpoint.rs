// Durable progress marker for resumable runs.
//
// The checkpoint names the last input row whose original and variants have all
// been written and flushed. It is the only state that survives the process.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Index of the last fully written input row.
    pub last_processed_index: usize,
    /// Number of input rows the run covers.
    #[serde(default)]
    pub total_input_rows: usize,
}

impl Checkpoint {
    pub fn new(last_processed_index: usize, total_input_rows: usize) -> Self {
        Self {
            last_processed_index,
            total_input_rows,
        }
    }

    /// First input row still to process.
    pub fn resume_index(&self) -> usize {
        self.last_processed_index + 1
    }

    /// Read a checkpoint. A missing, unreadable or malformed file means "no
    /// checkpoint"; none of these are errors.
    pub fn load(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Cannot open checkpoint {}: {e}; starting fresh", path.display());
                return None;
            }
        };
        match serde_json::from_reader(BufReader::new(file)) {
            Ok(cp) => Some(cp),
            Err(e) => {
                warn!("Ignoring corrupt checkpoint {}: {e}", path.display());
                None
            }
        }
    }

    /// Persist atomically: write a sibling temp file, then rename over `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let temp = NamedTempFile::new_in(parent)?;
        {
            let mut writer = BufWriter::new(temp.as_file());
            serde_json::to_writer_pretty(&mut writer, self)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
        temp.persist(path)?;
        debug!(
            "Checkpoint saved: last_processed_index={}, total_input_rows={}",
            self.last_processed_index, self.total_input_rows
        );
        Ok(())
    }
}
