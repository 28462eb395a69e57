//! Host collaborator traits.
//!
//! The tools never own the scene. Engine bridges (Bevy, editor shells, test
//! doubles) implement these traits over their own storage:
//!
//! - [`SceneGraph`]: hierarchy traversal, names, liveness, LOD group access
//! - [`SelectionHost`]: get/replace the editor selection
//! - [`UndoHost`]: record pre-mutation state and commit undo entries
//!
//! [`LodHost`] is implemented for anything providing all three.

use std::collections::HashSet;

use crate::error::LodError;
use crate::types::{LodGroup, ObjectId};

/// Read/write access to the host's object hierarchy.
pub trait SceneGraph {
  /// Host object handle.
  type Object: ObjectId;

  /// Every renderable object in the subtree rooted at `root`, root included.
  ///
  /// When `include_inactive` is false, renderers on inactive objects are
  /// skipped.
  fn renderers_in_subtree(&self, root: Self::Object, include_inactive: bool) -> Vec<Self::Object>;

  /// Display name of an object, `None` if it has none or no longer exists.
  fn display_name(&self, object: Self::Object) -> Option<&str>;

  /// Check if a reference still resolves to a live object.
  fn is_alive(&self, object: Self::Object) -> bool;

  /// Check if a level member still resolves to a live renderer.
  ///
  /// Hosts where an object can outlive its renderable payload override this.
  fn is_live_renderer(&self, renderer: Self::Object) -> bool {
    self.is_alive(renderer)
  }

  /// The LOD group attached to an object, if any.
  fn lod_group(&self, object: Self::Object) -> Option<&LodGroup<Self::Object>>;

  /// Replace the LOD group attached to `root`.
  fn set_lod_group(
    &mut self,
    root: Self::Object,
    group: LodGroup<Self::Object>,
  ) -> Result<(), LodError>;
}

/// The host's selection mechanism.
pub trait SelectionHost: SceneGraph {
  /// Currently selected objects.
  fn selection(&self) -> Vec<Self::Object>;

  /// Replace the current selection.
  fn set_selection(&mut self, objects: Vec<Self::Object>);
}

/// The host's undo mechanism.
pub trait UndoHost: SceneGraph {
  /// Snapshot `object` so its current state is restored on undo.
  fn record_before_mutation(&mut self, object: Self::Object, label: &'static str);

  /// Close the undo entry opened by [`record_before_mutation`](Self::record_before_mutation).
  fn commit_undo(&mut self, label: &'static str);
}

/// Everything the LOD tools need from a host.
pub trait LodHost: SelectionHost + UndoHost {}

impl<T: SelectionHost + UndoHost + ?Sized> LodHost for T {}

/// Selected objects that carry an LOD group, in selection order.
///
/// Objects selected more than once are returned once.
pub fn selected_lod_roots<H: SelectionHost + ?Sized>(host: &H) -> Vec<H::Object> {
  let mut seen = HashSet::new();
  host
    .selection()
    .into_iter()
    .filter(|&object| host.lod_group(object).is_some())
    .filter(|object| seen.insert(*object))
    .collect()
}
