//! Bevy components for LOD groups.

use bevy::ecs::component::Component;
use bevy::ecs::entity::Entity;
use lod_plugin::types::{LodGroup, LodLevel};

/// Component attaching an LOD group to an entity.
///
/// Renderers referenced by the group are expected to live in this entity's
/// hierarchy (`ChildOf` / `Children`).
///
/// # Example
/// ```ignore
/// let root = world.spawn((Name::new("Rock"), LodGroupRoot::default())).id();
/// world.spawn((Name::new("Rock_LOD0"), Mesh3d(mesh), ChildOf(root)));
/// ```
#[derive(Component, Clone, Debug, Default, PartialEq)]
pub struct LodGroupRoot {
  /// The group's ordered levels.
  pub group: LodGroup<Entity>,
}

impl LodGroupRoot {
  /// Wrap an existing group.
  pub fn new(group: LodGroup<Entity>) -> Self {
    Self { group }
  }

  /// Build a group from levels.
  pub fn from_levels(levels: impl IntoIterator<Item = LodLevel<Entity>>) -> Self {
    Self::new(LodGroup::from_levels(levels))
  }

  /// Number of levels.
  #[inline]
  pub fn level_count(&self) -> usize {
    self.group.level_count()
  }
}
