//! Raw catalog rows and multi-value field splitting.

use serde::Deserialize;

use crate::constants::CatalogIds;
use crate::identifiers::leading_number;

/// One input record with every field as raw text, keyed by the canonical column
/// names.
///
/// Deserialized per [`csv::StringRecord`] against the canonical header record
/// (see [`crate::constants::CANONICAL_HEADERS`]); the upstream header line never
/// reaches this type.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCatalogRow {
    pub name: String,
    #[serde(rename = "type")]
    pub object_type: String,
    pub right_ascension: String,
    pub declination: String,
    pub constellation: String,
    pub major_axis: String,
    pub minor_axis: String,
    pub position_angle: String,
    pub b_magnitude: String,
    pub v_magnitude: String,
    pub j_magnitude: String,
    pub h_magnitude: String,
    pub k_magnitude: String,
    pub surface_brightness: String,
    pub hubble_morphological_type: String,
    pub parallax: String,
    pub proper_motion_ra: String,
    pub proper_motion_dec: String,
    pub radial_velocity: String,
    pub redshift: String,
    pub central_star_u_mag: String,
    pub central_star_b_mag: String,
    pub central_star_v_mag: String,
    pub messier: String,
    pub ngc: String,
    pub ic: String,
    pub central_star_names: String,
    pub identifiers: String,
    pub common_names: String,
    pub ned_notes: String,
    pub openngc_notes: String,
    pub sources: String,
}

/// Split a `,`-separated multi-value field. An empty field is an empty list,
/// not a list of one empty string.
pub(crate) fn split_list(field: &str) -> Vec<String> {
    if field.is_empty() {
        return Vec::new();
    }
    field.split(',').map(str::to_string).collect()
}

/// Split a `,`-separated cross-reference field into catalog numbers, stripping
/// the family prefix from each sub-value (`"NGC6992,NGC6995"` → `[6992, 6995]`).
///
/// Sub-values without a parsable number are dropped; upstream data quality is
/// not this crate's to repair.
pub(crate) fn split_catalog_numbers(field: &str, prefix: &str) -> CatalogIds {
    if field.is_empty() {
        return CatalogIds::new();
    }
    field
        .split(',')
        .filter_map(|item| leading_number(&item.replacen(prefix, "", 1)))
        .collect()
}
