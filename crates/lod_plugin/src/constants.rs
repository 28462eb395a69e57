//! LOD level constants and the renderer name suffix table.
//!
//! Renderers declare the level they belong to through the trailing part of
//! their display name:
//!
//! ```text
//! Rock_LOD0  ──► level 0 (highest detail)
//! Rock_LOD1  ──► level 1
//!   ...
//! Rock_LOD7  ──► level 7 (lowest detail)
//! ```
//!
//! Index order is semantic: a level's position in a group never changes,
//! levels are only appended or pruned in place.

/// Maximum number of levels a single LOD group can hold.
pub const MAX_LOD_LEVELS: usize = 8;

/// Recognized renderer name suffixes, indexed by the level they declare.
pub const LOD_SUFFIXES: [&str; MAX_LOD_LEVELS] = [
  "LOD0", "LOD1", "LOD2", "LOD3", "LOD4", "LOD5", "LOD6", "LOD7",
];

/// Transition height given to a synthesized level 0, which has no
/// predecessor to derive its height from.
pub const DEFAULT_FALLBACK_TRANSITION_HEIGHT: f32 = 0.5;

/// Each synthesized level transitions at `previous / DEFAULT_TRANSITION_FALLOFF`.
pub const DEFAULT_TRANSITION_FALLOFF: f32 = 2.0;

/// Undo label recorded when unassigned renderers are appended.
pub const APPEND_UNDO_LABEL: &str = "Append Unassigned LOD Renderers";

/// Undo label recorded when missing renderer references are removed.
pub const REMOVE_MISSING_UNDO_LABEL: &str = "Remove missing LODGroup renderers";

/// Get the suffix for a level index.
///
/// Returns `None` for levels outside `0..MAX_LOD_LEVELS`.
#[inline]
pub fn suffix_for_level(level: usize) -> Option<&'static str> {
  LOD_SUFFIXES.get(level).copied()
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
