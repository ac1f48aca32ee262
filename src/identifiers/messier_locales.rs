//! Static Messier common-name table.
//!
//! The Messier catalog is the one family whose objects carry well-established
//! common names in several languages. The table ships with the crate as a JSON
//! asset and is parsed **once per process** into an immutable map; every
//! pipeline running in the process shares the same read-only data. Objects
//! without an entry resolve to empty name lists rather than an error.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::constants::MessierId;

/// Common names of one object, split by language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleNames {
    pub en: Vec<String>,
    pub fr: Vec<String>,
}

/// One row of the bundled locale table.
#[derive(Debug, Clone, Deserialize)]
pub struct MessierLocaleEntry {
    pub messier_id: MessierId,
    pub names: LocaleNames,
}

static MESSIER_LOCALES_JSON: &str = include_str!("data/messier_locales.json");

static MESSIER_LOCALES: LazyLock<HashMap<MessierId, LocaleNames, ahash::RandomState>> =
    LazyLock::new(|| {
        let entries: Vec<MessierLocaleEntry> =
            serde_json::from_str(MESSIER_LOCALES_JSON).expect("bundled Messier locale table");
        entries.into_iter().map(|e| (e.messier_id, e.names)).collect()
    });

static EMPTY_NAMES: LocaleNames = LocaleNames {
    en: Vec::new(),
    fr: Vec::new(),
};

/// Look up the common names of a Messier object by exact catalog number.
///
/// Returns a borrowed entry from the process-wide table; unknown ids yield a
/// shared empty entry, never an error.
pub fn messier_common_names(messier_id: MessierId) -> &'static LocaleNames {
    MESSIER_LOCALES.get(&messier_id).unwrap_or(&EMPTY_NAMES)
}
