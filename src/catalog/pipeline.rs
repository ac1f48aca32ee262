//! The catalog run state machine.

use camino::{Utf8Path, Utf8PathBuf};
use csv::StringRecord;

use crate::catalog::openngc_reader::{count_data_rows, open_catalog, transform_row};
use crate::catalog::progress::CatalogProgress;
use crate::catalog::row::RawCatalogRow;
use crate::constants::{DsoRecords, CANONICAL_HEADERS};
use crate::skycat_errors::SkycatError;

/// Life cycle of one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Init,
    Counting,
    Streaming,
    Done,
    Failed,
}

/// One full pass over a catalog file.
///
/// Owns the run: checks the input precondition, counts rows for progress
/// totals, streams and transforms every row in input order, and emits the
/// observer events. The run either completes with the full ordered record
/// sequence or fails atomically on the first row-level error; partial output
/// is never returned.
///
/// ```no_run
/// use camino::Utf8Path;
/// use skycat::{CatalogPipeline, NoProgress};
///
/// # fn run() -> Result<(), skycat::SkycatError> {
/// let mut pipeline = CatalogPipeline::new(Utf8Path::new("downloads/openngc_db.csv"));
/// let records = pipeline.run(&mut NoProgress)?;
/// println!("{} objects", records.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct CatalogPipeline {
    path: Utf8PathBuf,
    state: PipelineState,
}

impl CatalogPipeline {
    pub fn new(path: impl AsRef<Utf8Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            state: PipelineState::Init,
        }
    }

    /// Current life-cycle state of this pipeline.
    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Run the full pass.
    ///
    /// Arguments
    /// ---------
    /// * `progress`: run observer; receives `start`, one `row_processed` per row,
    ///   then `success` or `failure`.
    ///
    /// Return
    /// ------
    /// * The ordered record sequence, or the first fatal error
    ///   ([`SkycatError::InputUnavailable`] before the counting pass,
    ///   [`SkycatError::MalformedRow`] during streaming).
    pub fn run(&mut self, progress: &mut dyn CatalogProgress) -> Result<DsoRecords, SkycatError> {
        match self.run_inner(progress) {
            Ok(records) => {
                self.state = PipelineState::Done;
                progress.success(records.len() as u64);
                Ok(records)
            }
            Err(error) => {
                self.state = PipelineState::Failed;
                progress.failure(&error);
                Err(error)
            }
        }
    }

    fn run_inner(
        &mut self,
        progress: &mut dyn CatalogProgress,
    ) -> Result<DsoRecords, SkycatError> {
        if !self.path.is_file() {
            return Err(SkycatError::InputUnavailable(self.path.clone()));
        }

        self.state = PipelineState::Counting;
        let total = count_data_rows(&self.path)?;
        progress.start(total);

        self.state = PipelineState::Streaming;
        let canonical = StringRecord::from(CANONICAL_HEADERS.to_vec());
        let mut reader = open_catalog(&self.path)?;
        let mut records: DsoRecords = Vec::with_capacity(total as usize);

        for (index, result) in reader.records().enumerate() {
            let row = (index + 1) as u64;
            let record = result.map_err(|source| SkycatError::MalformedRow { row, source })?;
            let raw: RawCatalogRow = record
                .deserialize(Some(&canonical))
                .map_err(|source| SkycatError::MalformedRow { row, source })?;
            records.push(transform_row(&raw));
            progress.row_processed(row, total);
        }

        Ok(records)
    }
}
