//! # Catalog ingestion: streaming transform of the OpenNGC database file
//!
//! High-level facilities to turn the `;`-delimited OpenNGC catalog file into an
//! ordered sequence of normalized [`DsoRecord`](crate::catalog::record::DsoRecord)s.
//! The central type is [`CatalogPipeline`](crate::catalog::pipeline::CatalogPipeline),
//! which owns one full pass over the file.
//!
//! Modules
//! -----------------
//! * [`row`](crate::catalog::row) – The raw 32-column record and its multi-value
//!   field splitting helpers.
//! * [`record`](crate::catalog::record) – The normalized output record.
//! * [`openngc_reader`](crate::catalog::openngc_reader) – Row counting, CSV access,
//!   and the per-row transform.
//! * [`pipeline`](crate::catalog::pipeline) – The run state machine
//!   (`Init → Counting → Streaming → Done | Failed`) and event emission.
//! * [`progress`](crate::catalog::progress) – The observer trait receiving run
//!   events, with an optional `indicatif` console implementation (feature
//!   `progress`).
//! * [`sink`](crate::catalog::sink) – The persistence boundary and its JSON-file
//!   implementation.
//!
//! Passes
//! -----------------
//! A run reads the file twice: a counting pass (line scan, bounded memory) whose
//! only purpose is an accurate total for progress reporting, then the parsing
//! pass proper. Rows are transformed synchronously in input order; output order
//! equals input order.
//!
//! Failure model
//! -----------------
//! One malformed row is fatal to the whole batch: the pipeline stops at the first
//! structural error, emits a `failure` event, and returns the error with the
//! 1-based row index. There is no per-row skip policy and no retry. Permissive
//! paths (unparsable numerics → NaN, unknown identifiers → `Other`, unmapped
//! provenance labels → dropped) are data, not errors.

pub mod openngc_reader;
pub mod pipeline;
pub mod progress;
pub mod record;
pub mod row;
pub mod sink;
