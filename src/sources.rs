//! # Provenance code mapping
//!
//! The catalog's `Sources` column records which external database supplied each
//! field, as `|`-separated `label:code` tokens where `label` is the upstream
//! column name (`RA`, `B-Mag`, ...) and `code` an integer identifying the
//! database (1 = NED, 2 = SIMBAD, 3 = HyperLeda, ..., 99 = OpenNGC revised
//! data). This module resolves those tokens into a mapping keyed by the crate's
//! canonical field names.
//!
//! Unknown labels are silently dropped: the label table is fixed and upstream
//! may grow columns this crate does not carry. No event is emitted for them.

use crate::constants::SourceMap;

/// Resolve an upstream column label to its canonical field name.
///
/// Exact lookup in the fixed label table; anything else yields `None`.
pub fn match_label(label: &str) -> Option<&'static str> {
    let canonical = match label {
        "Name" => "name",
        "Type" => "type",
        "RA" => "right_ascension",
        "Dec" => "declination",
        "Const" => "constellation",
        "MajAx" => "major_axis",
        "MinAx" => "minor_axis",
        "PosAng" => "position_angle",
        "B-Mag" => "b_magnitude",
        "V-Mag" => "v_magnitude",
        "J-Mag" => "j_magnitude",
        "H-Mag" => "h_magnitude",
        "K-Mag" => "k_magnitude",
        "SurfBr" => "surface_brightness",
        "Hubble" => "hubble_morphological_type",
        "Pax" => "parallax",
        "Pm-RA" => "proper_motion_ra",
        "Pm-Dec" => "proper_motion_dec",
        "RadVel" => "radial_velocity",
        "Redshift" => "redshift",
        "Cstar U-Mag" => "central_star_u_mag",
        "Cstar B-Mag" => "central_star_b_mag",
        "Cstar V-Mag" => "central_star_v_mag",
        "M" => "messier",
        "NGC" => "ngc",
        "IC" => "ic",
        "Cstar Names" => "central_star_names",
        "Identifiers" => "identifiers",
        "Common Names" => "common_names",
        "NED Notes" => "ned_notes",
        "OpenNGC Notes" => "openngc_notes",
        _ => return None,
    };
    Some(canonical)
}

/// Resolve a list of `label:code` provenance tokens into a [`SourceMap`].
///
/// Each token is split once on `:`; tokens whose label is absent from the fixed
/// table, or whose code has no parsable integer, are dropped without an error.
pub fn match_sources<S: AsRef<str>>(tokens: &[S]) -> SourceMap {
    let mut result = SourceMap::new();
    for token in tokens {
        let Some((label, code)) = token.as_ref().split_once(':') else {
            continue;
        };
        let Some(canonical) = match_label(label) else {
            continue;
        };
        if let Ok(code) = code.trim().parse::<i64>() {
            result.insert(canonical, code);
        }
    }
    result
}
