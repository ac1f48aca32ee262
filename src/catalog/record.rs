//! The normalized output record.

use serde::Serialize;

use crate::constants::{CatalogIds, SourceMap};
use crate::identifiers::messier_locales::LocaleNames;

/// One normalized deep-sky object, ready for bulk serialization or insertion
/// into a sink.
///
/// Numeric fields are `f64` with NaN as the "value unknown" sentinel (serialized
/// as `null`). The `messier`/`ngc`/`ic` sets are duplicate-free with first
/// insertion order preserved; `identifiers` holds free-text cross references
/// disjoint from them; `keywords` holds the derived lowercase alphanumeric
/// search tokens.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DsoRecord {
    #[serde(rename = "type")]
    pub object_type: String,
    /// Right ascension, J2000, decimal hours.
    pub right_ascension: f64,
    /// Declination, J2000, decimal degrees.
    pub declination: f64,
    pub constellation: String,
    /// Major axis, arcmin.
    pub major_axis: f64,
    /// Minor axis, arcmin.
    pub minor_axis: f64,
    /// Major axis position angle, North Eastwards.
    pub position_angle: f64,
    pub b_magnitude: f64,
    pub v_magnitude: f64,
    pub j_magnitude: f64,
    pub h_magnitude: f64,
    pub k_magnitude: f64,
    /// Mean surface brightness within the 25 mag isophot (B-band), galaxies only.
    pub surface_brightness: f64,
    /// Morphological type, galaxies only.
    pub hubble_morphological_type: String,
    /// Parallax, mas.
    pub parallax: f64,
    /// Proper motion in RA, mas/yr.
    pub proper_motion_ra: f64,
    /// Proper motion in Dec, mas/yr.
    pub proper_motion_dec: f64,
    /// Heliocentric radial velocity, km/s.
    pub radial_velocity: f64,
    /// Heliocentric redshift.
    pub redshift: f64,
    pub central_star_u_mag: f64,
    pub central_star_b_mag: f64,
    pub central_star_v_mag: f64,
    pub messier: CatalogIds,
    pub ngc: CatalogIds,
    pub ic: CatalogIds,
    /// Central star identifications, planetary nebulae only.
    pub central_star_names: Vec<String>,
    pub identifiers: Vec<String>,
    pub keywords: Vec<String>,
    pub common_names: LocaleNames,
    pub ned_notes: String,
    pub openngc_notes: String,
    pub sources: SourceMap,
}
