//! Cross-catalog identifier reconciliation.
//!
//! One catalog row names the same physical object several ways at once: its own
//! `name` column, Messier/NGC/IC cross-reference columns, free-text identifiers,
//! and common names. [`repart_identifiers`] merges all of them into deduplicated
//! canonical sets under a single precedence rule: **a Messier cross reference
//! overrides whatever the row's own name says**. The name-derived identity is
//! still classified separately and recovered, so an object known as both `M 31`
//! and `NGC 224` ends up in both numbered sets.

use itertools::Itertools;
use smallvec::SmallVec;

use super::keywords::normalize_keyword;
use super::messier_locales::{messier_common_names, LocaleNames};
use super::{detect_identifier, CatalogFamily, IdentifierDescriptor};
use crate::constants::CatalogIds;

/// The reconciled identifier sets of one catalog row.
#[derive(Debug, Clone, PartialEq)]
pub struct RepartedIdentifiers {
    pub messier: CatalogIds,
    pub ngc: CatalogIds,
    pub ic: CatalogIds,
    /// Free-text cross references, disjoint from the numbered sets above.
    pub identifiers: Vec<String>,
    /// Normalized lowercase alphanumeric search tokens.
    pub keywords: Vec<String>,
    pub common_names: LocaleNames,
}

/// Remove spaces for name comparison, so `"NGC 224"` and `"NGC224"` match.
fn squash_spaces(text: &str) -> String {
    text.chars().filter(|c| *c != ' ').collect()
}

/// Apply the merge rule table for one numbered catalog family.
///
/// 1. The primary's number joins the set when the primary belongs to the family
///    and the number is not already present.
/// 2. For NGC and IC only, the secondary's number is recovered under the same
///    conditions **when its canonical name differs from the primary's**; this
///    name-inequality guard prevents double counting when both descriptors
///    describe the same entry. The guard compares names, not numbers.
/// 3. The Messier set never takes a contribution from the secondary: a Messier
///    primary already is the Messier identity of the row.
fn merge_family(
    set: &mut CatalogIds,
    family: CatalogFamily,
    primary: &IdentifierDescriptor,
    secondary: &IdentifierDescriptor,
) {
    if primary.family == family {
        if let Some(n) = primary.number {
            if !set.contains(&n) {
                set.push(n);
            }
        }
    }

    let recover_secondary = matches!(family, CatalogFamily::Ngc | CatalogFamily::Ic);
    if recover_secondary && secondary.family == family && secondary.name != primary.name {
        if let Some(n) = secondary.number {
            if !set.contains(&n) {
                set.push(n);
            }
        }
    }
}

/// Reconcile a row's full identifier set.
///
/// Two descriptors drive the merge:
/// * the **primary**, classified from `"M<first messier>"` when the `messier`
///   input is non-empty and from `name` otherwise; this encodes the
///   Messier-first precedence;
/// * the **secondary**, always classified from `name` directly; this recovers
///   the identity the primary step discards when a Messier number takes
///   precedence over the row's own NGC/IC name.
///
/// Arguments
/// ---------
/// * `name`: the row's own catalog name (`NGC...`/`IC...`).
/// * `messier`, `ngc`, `ic`: cross-reference numbers already split from the row.
/// * `identifiers`: free-text cross references from other surveys.
/// * `common_names`: the row's own common names (English).
///
/// Return
/// ------
/// * The reconciled [`RepartedIdentifiers`]: deduplicated numbered sets, free-text
///   identifiers disjoint from them, locale-enriched common names, and the derived
///   keyword tokens.
pub fn repart_identifiers(
    name: &str,
    messier: &[u32],
    ngc: &[u32],
    ic: &[u32],
    identifiers: &[String],
    common_names: &[String],
) -> RepartedIdentifiers {
    let primary = if let Some(first) = messier.first() {
        detect_identifier(&format!("M{first}"))
    } else {
        detect_identifier(name)
    };
    let secondary = detect_identifier(name);

    let mut messier_set: CatalogIds = SmallVec::from_slice(messier);
    let mut ngc_set: CatalogIds = SmallVec::from_slice(ngc);
    let mut ic_set: CatalogIds = SmallVec::from_slice(ic);

    merge_family(&mut messier_set, CatalogFamily::Messier, &primary, &secondary);
    merge_family(&mut ngc_set, CatalogFamily::Ngc, &primary, &secondary);
    merge_family(&mut ic_set, CatalogFamily::Ic, &primary, &secondary);

    // Free-text identifiers: drop any entry that is the primary under another
    // spelling, then append descriptors that resolved to no catalog family.
    let primary_squashed = squash_spaces(&primary.name);
    let mut free_text: Vec<String> = identifiers
        .iter()
        .filter(|item| squash_spaces(item) != primary_squashed)
        .cloned()
        .collect();
    if primary.family == CatalogFamily::Other {
        free_text.push(primary.name.clone());
    }
    if secondary.family == CatalogFamily::Other && secondary.name != primary.name {
        free_text.push(secondary.name.clone());
    }
    let free_text: Vec<String> = free_text.into_iter().unique().collect();

    // Common names: the bundled locale table contributes only when the row's
    // primary identity is a Messier entry; English names also keep whatever the
    // row itself carries.
    let locale = match (primary.family, primary.number) {
        (CatalogFamily::Messier, Some(n)) => Some(messier_common_names(n)),
        _ => None,
    };
    let en: Vec<String> = locale
        .map(|l| l.en.as_slice())
        .unwrap_or(&[])
        .iter()
        .chain(common_names.iter())
        .cloned()
        .unique()
        .collect();
    let fr: Vec<String> = locale
        .map(|l| l.fr.as_slice())
        .unwrap_or(&[])
        .iter()
        .cloned()
        .unique()
        .collect();

    let keywords: Vec<String> = messier_set
        .iter()
        .map(|n| format!("m{n}"))
        .chain(ngc_set.iter().map(|n| format!("ngc{n}")))
        .chain(ic_set.iter().map(|n| format!("ic{n}")))
        .chain(free_text.iter().cloned())
        .chain(en.iter().cloned())
        .chain(fr.iter().cloned())
        .map(|token| normalize_keyword(&token))
        .unique()
        .collect();

    RepartedIdentifiers {
        messier: messier_set,
        ngc: ngc_set,
        ic: ic_set,
        identifiers: free_text,
        keywords,
        common_names: LocaleNames { en, fr },
    }
}
