//! Persistence boundary.
//!
//! The pipeline hands its final ordered record sequence to a [`RecordSink`];
//! what "durable" means (a file, a remote store) belongs to the sink, as do
//! upsert and conflict semantics. The crate ships the JSON-file sink the
//! catalog build uses.

use camino::{Utf8Path, Utf8PathBuf};
use std::io::BufWriter;

use crate::catalog::record::DsoRecord;
use crate::skycat_errors::SkycatError;

/// Accepts a completed record sequence for durable storage.
pub trait RecordSink {
    fn persist(&mut self, records: &[DsoRecord]) -> Result<(), SkycatError>;
}

/// Writes the record sequence as a pretty-printed JSON array, creating the
/// parent directory if needed. NaN values serialize as `null`.
pub struct JsonFileSink {
    path: Utf8PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl AsRef<Utf8Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RecordSink for JsonFileSink {
    fn persist(&mut self, records: &[DsoRecord]) -> Result<(), SkycatError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::File::create(&self.path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), records)?;
        Ok(())
    }
}
