pub mod catalog;
pub mod constants;
pub mod conversion;
pub mod download;
pub mod identifiers;
pub mod skycat_errors;
pub mod sources;

pub use crate::catalog::pipeline::{CatalogPipeline, PipelineState};
pub use crate::catalog::progress::{CatalogProgress, NoProgress};
#[cfg(feature = "progress")]
pub use crate::catalog::progress::ConsoleProgress;
pub use crate::catalog::record::DsoRecord;
pub use crate::catalog::sink::{JsonFileSink, RecordSink};
pub use crate::constants::{CatalogIds, DsoRecords, SourceMap};
pub use crate::download::download_catalog;
pub use crate::identifiers::messier_locales::LocaleNames;
pub use crate::identifiers::repart::{repart_identifiers, RepartedIdentifiers};
pub use crate::identifiers::{detect_identifier, CatalogFamily, IdentifierDescriptor};
pub use crate::skycat_errors::SkycatError;
