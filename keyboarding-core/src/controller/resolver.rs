//! Keyboard identifier resolution
//!
//! Three identifier schemes accumulated over the system's history, plus a
//! raw-id fallback. Resolution is an ordered list of parse strategies tried
//! in sequence; each returns a definite match or nothing, and the first
//! match wins. Pure functions of the identifier and the registry snapshot,
//! no native calls.

use crate::types::KeyboardDescription;

type Strategy = fn(&[KeyboardDescription], &str) -> Option<usize>;

/// Strategy order matters: the canonical scheme is tried first, the
/// greediest heuristic last.
const STRATEGIES: &[Strategy] = &[canonical_id, layout_locale_pair, compound_id, raw_id];

pub(crate) fn resolve<'a>(
    keyboards: &'a [KeyboardDescription],
    identifier: &str,
) -> Option<&'a KeyboardDescription> {
    STRATEGIES
        .iter()
        .find_map(|strategy| strategy(keyboards, identifier))
        .map(|i| &keyboards[i])
}

/// Resolution from a native input-language handle: a (locale, native layout
/// name) pair reported by the OS.
pub(crate) fn resolve_input_language<'a>(
    keyboards: &'a [KeyboardDescription],
    locale: &str,
    layout: &str,
) -> Option<&'a KeyboardDescription> {
    keyboards
        .iter()
        .find(|kb| kb.locale.eq_ignore_ascii_case(locale) && kb.layout == layout)
}

/// `{locale}_{layout}`: exact match on the registry id.
fn canonical_id(keyboards: &[KeyboardDescription], identifier: &str) -> Option<usize> {
    if !identifier.contains('_') {
        return None;
    }
    keyboards.iter().position(|kb| kb.id == identifier)
}

/// `{layout}|{locale}`: match the pair, ignoring the id string.
fn layout_locale_pair(keyboards: &[KeyboardDescription], identifier: &str) -> Option<usize> {
    let (layout, locale) = identifier.split_once('|')?;
    keyboards
        .iter()
        .position(|kb| kb.layout == layout && kb.locale == locale)
}

/// `{layout}-{variant}-{locale}` or `{layout}-{locale}`.
///
/// The trailing locale may itself contain hyphens (e.g. `az-Latn-AZ`), so
/// the split is tried against every registered locale, longest first, and
/// the remaining prefix has to match a keyboard's layout exactly or as
/// `layout-…` with a variant suffix.
fn compound_id(keyboards: &[KeyboardDescription], identifier: &str) -> Option<usize> {
    let mut locales: Vec<&str> = keyboards
        .iter()
        .map(|kb| kb.locale.as_str())
        .filter(|locale| !locale.is_empty())
        .collect();
    locales.sort_unstable();
    locales.dedup();
    locales.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

    for locale in locales {
        let Some(prefix) = identifier
            .strip_suffix(locale)
            .and_then(|p| p.strip_suffix('-'))
        else {
            continue;
        };
        if prefix.is_empty() {
            continue;
        }
        let matched = keyboards.iter().position(|kb| {
            kb.locale == locale
                && (kb.layout == prefix || prefix.starts_with(&format!("{}-", kb.layout)))
        });
        if matched.is_some() {
            return matched;
        }
    }
    None
}

/// Whole identifier as an id, then as one of a keyboard's alternate ids.
fn raw_id(keyboards: &[KeyboardDescription], identifier: &str) -> Option<usize> {
    keyboards
        .iter()
        .position(|kb| kb.id == identifier)
        .or_else(|| {
            keyboards
                .iter()
                .position(|kb| kb.other_ids.iter().any(|other| other == identifier))
        })
}
