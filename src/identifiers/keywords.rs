//! Search keyword normalization.
//!
//! Every identifier and common name contributes one lowercase alphanumeric token
//! to the record's keyword set, so that a search layer can match `"m31"`,
//! `"andromedagalaxy"`, or `"galaxiedandromede"` without caring about spacing,
//! punctuation, or accents.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

static NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^a-z0-9]").expect("keyword regex"));

/// Strip diacritics by NFD decomposition and removal of combining marks.
///
/// `"Dentelles du Cygne"` keeps its base letters; `"é"` decomposes into `e` plus
/// a combining acute accent, and the accent is dropped.
fn deburr(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Normalize one token into its keyword form.
///
/// Lowercases, strips diacritics, then deletes every character outside `[a-z0-9]`.
/// The result of a second application equals the first: normalization is
/// idempotent, so re-feeding already-normalized tokens never grows a keyword set.
pub fn normalize_keyword(token: &str) -> String {
    let folded = deburr(&token.to_lowercase());
    NON_ALNUM.replace_all(&folded, "").into_owned()
}
