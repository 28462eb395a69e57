//! Per-cycle manifest cache.

use crate::gate::{CooldownGate, IdleQueue, IdleTask};
use crate::host::{selected_lod_roots, SelectionHost};
use crate::manifest::{build_manifest, Manifest};
use crate::types::ObjectId;

/// Manifests for the selected LOD roots, rebuilt at most once per decision
/// cycle.
#[derive(Debug)]
pub struct ManifestCache<O> {
  /// Roots that produced a manifest, in selection order.
  manifests: Vec<Manifest<O>>,
  gate: CooldownGate,
}

impl<O: ObjectId> ManifestCache<O> {
  /// Create an empty cache with an open gate.
  pub fn new() -> Self {
    Self {
      manifests: Vec::new(),
      gate: CooldownGate::new(),
    }
  }

  /// Answer "is there anything to append?" for the current selection.
  ///
  /// The first query of a cycle clears the cache, starts the cooldown and
  /// rescans every selected LOD root. Later queries answer from the cache
  /// until the cooldown is released on the next idle tick.
  pub fn query<H: SelectionHost<Object = O> + ?Sized>(
    &mut self,
    host: &H,
    idle: &mut IdleQueue,
    include_inactive: bool,
  ) -> bool {
    if self
      .gate
      .try_acquire(idle, IdleTask::ReleaseManifestCooldown)
    {
      self.rebuild(host, include_inactive);
    }
    !self.manifests.is_empty()
  }

  fn rebuild<H: SelectionHost<Object = O> + ?Sized>(&mut self, host: &H, include_inactive: bool) {
    let _span = tracing::debug_span!("lod::rebuild_manifests").entered();

    self.manifests.clear();
    let roots = selected_lod_roots(host);
    for root in &roots {
      if let Some(manifest) = build_manifest(host, *root, include_inactive) {
        self.manifests.push(manifest);
      }
    }

    tracing::debug!(
      selected_roots = roots.len(),
      roots_with_manifest = self.manifests.len(),
      "rebuilt manifest cache"
    );
  }

  /// Remove and return the manifest for `root`.
  pub fn take(&mut self, root: O) -> Option<Manifest<O>> {
    let index = self.manifests.iter().position(|m| m.root == root)?;
    Some(self.manifests.remove(index))
  }

  /// Get the manifest for `root` without consuming it.
  pub fn get(&self, root: O) -> Option<&Manifest<O>> {
    self.manifests.iter().find(|m| m.root == root)
  }

  /// Roots with a cached manifest.
  pub fn roots(&self) -> Vec<O> {
    self.manifests.iter().map(|m| m.root).collect()
  }

  /// Number of cached manifests.
  pub fn len(&self) -> usize {
    self.manifests.len()
  }

  /// Check if no manifest is cached.
  pub fn is_empty(&self) -> bool {
    self.manifests.is_empty()
  }

  /// Check if the cooldown is running.
  pub fn cooldown_active(&self) -> bool {
    self.gate.is_active()
  }

  /// End the cooldown. The cached manifests stay until the next rebuild.
  pub fn release_cooldown(&mut self) {
    self.gate.release();
  }
}

impl<O: ObjectId> Default for ManifestCache<O> {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;
