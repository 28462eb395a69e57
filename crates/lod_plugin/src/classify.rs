//! Renderer classification by trailing name suffix.

use crate::constants::LOD_SUFFIXES;

/// Get the level a renderer name declares.
///
/// Suffixes are tested in ascending level order and the first one the name
/// ends with wins. Matching is plain, case-sensitive `ends_with`: there is no
/// separator requirement, so `"HillLOD2"` declares level 2 just like
/// `"Hill_LOD2"`. Names ending in anything else (including `"LOD10"`) are
/// unclassified.
#[inline]
pub fn classify(name: &str) -> Option<usize> {
  LOD_SUFFIXES
    .iter()
    .position(|suffix| name.ends_with(suffix))
}

/// Check if a name carries the suffix of a specific level.
#[inline]
pub fn has_level_suffix(name: &str, level: usize) -> bool {
  LOD_SUFFIXES
    .get(level)
    .is_some_and(|suffix| name.ends_with(suffix))
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod classify_test;
