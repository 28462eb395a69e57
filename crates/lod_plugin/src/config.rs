//! Tool configuration.

use crate::constants::{DEFAULT_FALLBACK_TRANSITION_HEIGHT, DEFAULT_TRANSITION_FALLOFF};

/// Configuration for the LOD reconciliation tools.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LodToolsConfig {
  /// Scan renderers attached to inactive objects too.
  pub include_inactive: bool,

  /// Height for a synthesized level 0 (no predecessor to halve).
  pub fallback_transition_height: f32,

  /// Divisor applied to the previous level's height for each synthesized
  /// level.
  pub transition_falloff: f32,
}

impl LodToolsConfig {
  /// Transition height for a synthesized level following `previous`.
  ///
  /// `None` means there is no previous level.
  #[inline]
  pub fn synthesized_height(&self, previous: Option<f32>) -> f32 {
    match previous {
      Some(height) => height / self.transition_falloff,
      None => self.fallback_transition_height,
    }
  }
}

impl Default for LodToolsConfig {
  fn default() -> Self {
    Self {
      include_inactive: true,
      fallback_transition_height: DEFAULT_FALLBACK_TRANSITION_HEIGHT,
      transition_falloff: DEFAULT_TRANSITION_FALLOFF,
    }
  }
}
