use crate::constants::{Degree, Hour};

/// Parse one sexagesimal component, yielding NaN on anything non-numeric.
///
/// A missing component (short split) also ends up here as an empty slice and
/// becomes NaN, which then propagates through the sum.
#[inline]
fn component(field: Option<&str>) -> f64 {
    field
        .and_then(|s| s.trim().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Convert a right ascension string in `HH:MM:SS.SS` format to decimal hours.
///
/// Arguments
/// ---------
/// * `ra`: the right ascension in sexagesimal `H:M:S` notation.
///
/// Return
/// ------
/// * The right ascension in decimal hours. Non-numeric components propagate as
///   NaN rather than raising an error; the catalog treats NaN as an accepted
///   "value unknown" sentinel.
pub fn parse_ra_to_hours(ra: &str) -> Hour {
    let mut parts = ra.split(':');
    let hours = component(parts.next());
    let minutes = component(parts.next());
    let seconds = component(parts.next());
    hours + minutes / 60.0 + seconds / 3600.0
}

/// Convert a declination string in `±DD:MM:SS.SS` format to decimal degrees.
///
/// The sign is taken from a leading `-` only; a leading `+` is recognized and
/// stripped but carries no information. A `+` or `-` appearing anywhere else in
/// the string is not a sign and is left to fail numeric parsing on its own.
///
/// Arguments
/// ---------
/// * `dec`: the declination in sexagesimal `D:M:S` notation, optionally prefixed
///   with `+` or `-`.
///
/// Return
/// ------
/// * The declination in signed decimal degrees, NaN components propagating as in
///   [`parse_ra_to_hours`].
pub fn parse_dec_to_deg(dec: &str) -> Degree {
    let is_minus = dec.starts_with('-');
    let unsigned = dec.trim_start_matches(['-', '+']);

    let mut parts = unsigned.split(':');
    let degrees = component(parts.next());
    let minutes = component(parts.next());
    let seconds = component(parts.next());

    let magnitude = degrees + minutes / 60.0 + seconds / 3600.0;
    if is_minus {
        -magnitude
    } else {
        magnitude
    }
}

/// Parse a free-standing numeric catalog field (magnitude, axis, kinematics).
///
/// An empty field means "not measured" and becomes NaN, as does any field that
/// fails to parse as a float.
#[inline]
pub fn parse_catalog_f64(field: &str) -> f64 {
    field.trim().parse::<f64>().unwrap_or(f64::NAN)
}
