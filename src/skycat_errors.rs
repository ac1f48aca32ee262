use camino::Utf8PathBuf;
use thiserror::Error;

/// Error taxonomy of the catalog pipeline.
///
/// Two variants are fatal to a run: [`SkycatError::InputUnavailable`], raised before the
/// counting pass when the source file is missing or unreadable, and
/// [`SkycatError::MalformedRow`], raised when any row fails to deserialize against the
/// canonical column layout. A malformed row aborts the whole batch; there is no per-row
/// skip policy and no retry at any level.
///
/// Everything else the pipeline meets is absorbed into the data instead of an error:
/// unrecognized identifiers are classified `Other` with a logged notice, unmapped
/// provenance labels are dropped, and unparsable numeric fields become NaN.
#[derive(Error, Debug)]
pub enum SkycatError {
    #[error("catalog file not found or unreadable: {0}")]
    InputUnavailable(Utf8PathBuf),

    #[error("malformed catalog row {row}: {source}")]
    MalformedRow {
        /// 1-based data row index (the header line is not counted).
        row: u64,
        source: csv::Error,
    },

    #[error("unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV reading error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("HTTP reqwest error: {0}")]
    ReqwestError(#[from] reqwest::Error),
}
