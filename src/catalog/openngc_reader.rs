//! # OpenNGC database file reader
//!
//! Row counting, CSV access, and the per-row transform turning a
//! [`RawCatalogRow`] into a [`DsoRecord`].
//!
//! ## Overview
//! -----------------
//! The reader is kept separate from the run state machine
//! ([`pipeline`](crate::catalog::pipeline)):
//! - [`count_data_rows`] – bounded-memory line scan of the whole file, used only
//!   to report an accurate completion percentage;
//! - [`open_catalog`] – a `csv` reader configured for the `;`-delimited layout,
//!   consuming the upstream header line;
//! - [`transform_row`] – the pure per-row normalization.
//!
//! ## Permissiveness
//! -----------------
//! `transform_row` never fails. Unparsable numeric fields become NaN, unknown
//! identifiers are classified `Other` with a logged notice, unmapped provenance
//! labels are dropped. Structural failures (wrong field count, invalid UTF-8)
//! surface earlier, at CSV record level, and abort the batch.

use camino::Utf8Path;
use std::io::BufRead;

use crate::catalog::record::DsoRecord;
use crate::catalog::row::{split_catalog_numbers, split_list, RawCatalogRow};
use crate::constants::{NO_CONSTELLATION, SERPENS, CATALOG_DELIMITER};
use crate::conversion::{parse_catalog_f64, parse_dec_to_deg, parse_ra_to_hours};
use crate::identifiers::repart::repart_identifiers;
use crate::skycat_errors::SkycatError;
use crate::sources::match_sources;

/// Count the data rows of the catalog file with one full streaming read.
///
/// The header line is not counted. A last line without a trailing newline is.
/// This pre-scan exists solely so that progress events can carry an exact total;
/// the parsing pass re-opens the file afterwards.
pub(crate) fn count_data_rows(path: &Utf8Path) -> Result<u64, SkycatError> {
    let file = std::fs::File::open(path)?;
    let mut reader = std::io::BufReader::new(file);
    let mut buf = Vec::new();
    let mut lines: u64 = 0;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        lines += 1;
    }
    Ok(lines.saturating_sub(1))
}

/// Open the catalog file for the parsing pass.
///
/// The upstream header line is consumed by the reader; records are then
/// deserialized against [`crate::constants::CANONICAL_HEADERS`] instead, which
/// is where the column renaming happens.
pub(crate) fn open_catalog(path: &Utf8Path) -> Result<csv::Reader<std::fs::File>, SkycatError> {
    Ok(csv::ReaderBuilder::new()
        .delimiter(CATALOG_DELIMITER)
        .has_headers(true)
        .from_path(path)?)
}

/// Normalize the constellation code.
///
/// The upstream catalog splits Serpens into `Se1` (Caput) and `Se2` (Cauda);
/// both fold into the single IAU code. An absent constellation becomes the
/// explicit `"NONE"` sentinel.
fn normalize_constellation(code: &str) -> String {
    match code {
        "" => NO_CONSTELLATION.to_string(),
        "Se1" | "Se2" => SERPENS.to_string(),
        other => other.to_string(),
    }
}

/// Transform one raw row into a normalized record. Never fails.
pub(crate) fn transform_row(raw: &RawCatalogRow) -> DsoRecord {
    let messier = split_catalog_numbers(&raw.messier, "M");
    let ngc = split_catalog_numbers(&raw.ngc, "NGC");
    let ic = split_catalog_numbers(&raw.ic, "IC");
    let identifiers = split_list(&raw.identifiers);
    let common_names = split_list(&raw.common_names);

    let reparted =
        repart_identifiers(&raw.name, &messier, &ngc, &ic, &identifiers, &common_names);

    let source_tokens: Vec<&str> = raw.sources.split('|').collect();

    DsoRecord {
        object_type: raw.object_type.clone(),
        right_ascension: parse_ra_to_hours(&raw.right_ascension),
        declination: parse_dec_to_deg(&raw.declination),
        constellation: normalize_constellation(&raw.constellation),
        major_axis: parse_catalog_f64(&raw.major_axis),
        minor_axis: parse_catalog_f64(&raw.minor_axis),
        position_angle: parse_catalog_f64(&raw.position_angle),
        b_magnitude: parse_catalog_f64(&raw.b_magnitude),
        v_magnitude: parse_catalog_f64(&raw.v_magnitude),
        j_magnitude: parse_catalog_f64(&raw.j_magnitude),
        h_magnitude: parse_catalog_f64(&raw.h_magnitude),
        k_magnitude: parse_catalog_f64(&raw.k_magnitude),
        surface_brightness: parse_catalog_f64(&raw.surface_brightness),
        hubble_morphological_type: raw.hubble_morphological_type.clone(),
        parallax: parse_catalog_f64(&raw.parallax),
        proper_motion_ra: parse_catalog_f64(&raw.proper_motion_ra),
        proper_motion_dec: parse_catalog_f64(&raw.proper_motion_dec),
        radial_velocity: parse_catalog_f64(&raw.radial_velocity),
        redshift: parse_catalog_f64(&raw.redshift),
        central_star_u_mag: parse_catalog_f64(&raw.central_star_u_mag),
        central_star_b_mag: parse_catalog_f64(&raw.central_star_b_mag),
        central_star_v_mag: parse_catalog_f64(&raw.central_star_v_mag),
        messier: reparted.messier,
        ngc: reparted.ngc,
        ic: reparted.ic,
        central_star_names: split_list(&raw.central_star_names),
        identifiers: reparted.identifiers,
        keywords: reparted.keywords,
        common_names: reparted.common_names,
        ned_notes: raw.ned_notes.clone(),
        openngc_notes: raw.openngc_notes.clone(),
        sources: match_sources(&source_tokens),
    }
}
