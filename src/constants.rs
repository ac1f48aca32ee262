//! # Constants and type definitions for skycat
//!
//! This module centralizes the **column layout**, **sentinel values**, and **common type
//! definitions** used throughout the `skycat` library.
//!
//! ## Overview
//!
//! - The canonical 32-column layout of the OpenNGC database file
//! - Sentinels used during normalization
//! - Core type aliases used across the crate
//! - Container types for storing normalized records

use smallvec::SmallVec;
use std::collections::HashMap;

use crate::catalog::record::DsoRecord;

// -------------------------------------------------------------------------------------------------
// Input layout
// -------------------------------------------------------------------------------------------------

/// Field delimiter of the OpenNGC database file.
pub const CATALOG_DELIMITER: u8 = b';';

/// Canonical column names of the catalog, in file order.
///
/// The first line of the input file carries the upstream header (`Name`, `Type`, `RA`, ...);
/// it is consumed and every record is read against these names instead. The upstream labels
/// survive only inside the `Sources` column, resolved by [`crate::sources::match_label`].
pub const CANONICAL_HEADERS: [&str; 32] = [
    "name",
    "type",
    "right_ascension",
    "declination",
    "constellation",
    "major_axis",
    "minor_axis",
    "position_angle",
    "b_magnitude",
    "v_magnitude",
    "j_magnitude",
    "h_magnitude",
    "k_magnitude",
    "surface_brightness",
    "hubble_morphological_type",
    "parallax",
    "proper_motion_ra",
    "proper_motion_dec",
    "radial_velocity",
    "redshift",
    "central_star_u_mag",
    "central_star_b_mag",
    "central_star_v_mag",
    "messier",
    "ngc",
    "ic",
    "central_star_names",
    "identifiers",
    "common_names",
    "ned_notes",
    "openngc_notes",
    "sources",
];

// -------------------------------------------------------------------------------------------------
// Sentinels
// -------------------------------------------------------------------------------------------------

/// Constellation value assigned to objects without one.
pub const NO_CONSTELLATION: &str = "NONE";

/// IAU code of the Serpens constellation, which the upstream catalog splits into
/// `Se1` (Serpens Caput) and `Se2` (Serpens Cauda).
pub const SERPENS: &str = "Ser";

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in decimal degrees
pub type Degree = f64;

/// Angle in decimal hours
pub type Hour = f64;

/// Messier catalog number
pub type MessierId = u32;

/// A small per-object set of catalog numbers (Messier/NGC/IC cross references).
///
/// Almost every object carries zero, one, or two entries per family, so the inline
/// capacity avoids a heap allocation on the hot path.
pub type CatalogIds = SmallVec<[u32; 2]>;

/// Mapping from canonical field label to the provenance code of the database
/// that supplied the field's value.
pub type SourceMap = HashMap<&'static str, i64>;

/// The ordered output of one full catalog pass.
pub type DsoRecords = Vec<DsoRecord>;
