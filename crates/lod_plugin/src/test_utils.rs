//! Test utilities for LOD tool tests.
//!
//! Provides an in-memory scene implementing every host trait, with counters
//! for subtree scans and undo commits.

use std::cell::Cell;
use std::collections::HashMap;

use crate::error::LodError;
use crate::host::{SceneGraph, SelectionHost, UndoHost};
use crate::types::{LodGroup, LodLevel};

// =============================================================================
// Mock Scene
// =============================================================================

struct MockObject {
  name: String,
  parent: Option<u32>,
  children: Vec<u32>,
  active: bool,
  renderable: bool,
  lod: Option<LodGroup<u32>>,
}

/// One committed undo entry.
#[derive(Clone, Debug, PartialEq)]
pub struct UndoEntry {
  pub object: u32,
  pub label: &'static str,
  pub before: Option<LodGroup<u32>>,
}

/// In-memory hierarchy with selection and undo bookkeeping.
#[derive(Default)]
pub struct MockScene {
  objects: HashMap<u32, MockObject>,
  next_id: u32,
  selection: Vec<u32>,
  pending_undo: Vec<UndoEntry>,
  pub undo_entries: Vec<UndoEntry>,
  pub fail_writes: bool,
  scans: Cell<usize>,
}

impl MockScene {
  pub fn new() -> Self {
    Self {
      next_id: 1,
      ..Default::default()
    }
  }

  fn insert(&mut self, parent: Option<u32>, name: &str, renderable: bool) -> u32 {
    let id = self.next_id;
    self.next_id += 1;
    self.objects.insert(
      id,
      MockObject {
        name: name.to_string(),
        parent,
        children: Vec::new(),
        active: true,
        renderable,
        lod: None,
      },
    );
    if let Some(parent) = parent {
      if let Some(p) = self.objects.get_mut(&parent) {
        p.children.push(id);
      }
    }
    id
  }

  /// Spawn a root object carrying an LOD group.
  pub fn spawn_root(&mut self, name: &str, group: LodGroup<u32>) -> u32 {
    let id = self.insert(None, name, false);
    self.set_group(id, group);
    id
  }

  /// Spawn a non-renderable grouping node.
  pub fn spawn_node(&mut self, parent: u32, name: &str) -> u32 {
    self.insert(Some(parent), name, false)
  }

  /// Spawn a renderable leaf.
  pub fn spawn_renderer(&mut self, parent: u32, name: &str) -> u32 {
    self.insert(Some(parent), name, true)
  }

  pub fn set_active(&mut self, object: u32, active: bool) {
    if let Some(o) = self.objects.get_mut(&object) {
      o.active = active;
    }
  }

  pub fn set_group(&mut self, object: u32, group: LodGroup<u32>) {
    if let Some(o) = self.objects.get_mut(&object) {
      o.lod = Some(group);
    }
  }

  /// Despawn an object and its subtree.
  pub fn despawn(&mut self, object: u32) {
    let Some(removed) = self.objects.remove(&object) else {
      return;
    };
    if let Some(parent) = removed.parent.and_then(|p| self.objects.get_mut(&p)) {
      parent.children.retain(|&c| c != object);
    }
    for child in removed.children {
      self.despawn(child);
    }
  }

  pub fn select(&mut self, objects: &[u32]) {
    self.selection = objects.to_vec();
  }

  /// The LOD group on `object`. Panics if there is none.
  pub fn group(&self, object: u32) -> &LodGroup<u32> {
    self
      .objects
      .get(&object)
      .and_then(|o| o.lod.as_ref())
      .expect("object has no LOD group")
  }

  /// Renderers registered at `level` of the group on `object`.
  pub fn members(&self, object: u32, level: usize) -> Vec<u32> {
    self
      .group(object)
      .level(level)
      .map(|l| l.renderers().to_vec())
      .unwrap_or_default()
  }

  /// Number of subtree scans served so far.
  pub fn scan_count(&self) -> usize {
    self.scans.get()
  }

  fn collect(&self, object: u32, parent_active: bool, include_inactive: bool, out: &mut Vec<u32>) {
    let Some(o) = self.objects.get(&object) else {
      return;
    };
    let active = parent_active && o.active;
    if o.renderable && (active || include_inactive) {
      out.push(object);
    }
    for &child in &o.children {
      self.collect(child, active, include_inactive, out);
    }
  }
}

impl SceneGraph for MockScene {
  type Object = u32;

  fn renderers_in_subtree(&self, root: u32, include_inactive: bool) -> Vec<u32> {
    self.scans.set(self.scans.get() + 1);
    let mut out = Vec::new();
    self.collect(root, true, include_inactive, &mut out);
    out
  }

  fn display_name(&self, object: u32) -> Option<&str> {
    self.objects.get(&object).map(|o| o.name.as_str())
  }

  fn is_alive(&self, object: u32) -> bool {
    self.objects.contains_key(&object)
  }

  fn lod_group(&self, object: u32) -> Option<&LodGroup<u32>> {
    self.objects.get(&object)?.lod.as_ref()
  }

  fn set_lod_group(&mut self, root: u32, group: LodGroup<u32>) -> Result<(), LodError> {
    if self.fail_writes {
      return Err(LodError::Host("writes disabled".to_string()));
    }
    match self.objects.get_mut(&root) {
      Some(o) if o.lod.is_some() => {
        o.lod = Some(group);
        Ok(())
      }
      _ => Err(LodError::NotAnLodGroup(format!("{}", root))),
    }
  }
}

impl SelectionHost for MockScene {
  fn selection(&self) -> Vec<u32> {
    self.selection.clone()
  }

  fn set_selection(&mut self, objects: Vec<u32>) {
    self.selection = objects;
  }
}

impl UndoHost for MockScene {
  fn record_before_mutation(&mut self, object: u32, label: &'static str) {
    let before = self.lod_group(object).cloned();
    self.pending_undo.push(UndoEntry {
      object,
      label,
      before,
    });
  }

  fn commit_undo(&mut self, label: &'static str) {
    let (committed, pending): (Vec<_>, Vec<_>) = self
      .pending_undo
      .drain(..)
      .partition(|entry| entry.label == label);
    self.pending_undo = pending;
    self.undo_entries.extend(committed);
  }
}

// =============================================================================
// Fixtures
// =============================================================================

/// Single-level group: level 0 at `height` with the given renderers.
pub fn single_level_group(height: f32, renderers: &[u32]) -> LodGroup<u32> {
  LodGroup::from_levels([LodLevel::new(height, renderers.iter().copied())])
}

/// Group with one empty level per height.
pub fn empty_levels(heights: &[f32]) -> LodGroup<u32> {
  heights
    .iter()
    .map(|&h| LodLevel::new(h, std::iter::empty()))
    .collect()
}
