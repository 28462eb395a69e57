//! `World`-backed implementation of the LOD host traits.

use bevy::ecs::entity::Entity;
use bevy::ecs::entity_disabling::Disabled;
use bevy::ecs::hierarchy::Children;
use bevy::ecs::name::Name;
use bevy::ecs::world::World;
use lod_plugin::{LodError, LodGroup, SceneGraph, SelectionHost, UndoHost};

use crate::components::LodGroupRoot;
use crate::resources::{EditorSelection, LodUndoHistory, UndoRecord};

/// Host view over a Bevy world.
///
/// Hierarchy comes from `Children`, names from `Name`, and an entity is
/// inactive when it or an ancestor carries `Disabled`. Renderers are the
/// entities accepted by `is_renderer`.
pub struct WorldHost<'w> {
  world: &'w mut World,
  is_renderer: fn(&World, Entity) -> bool,
}

impl<'w> WorldHost<'w> {
  pub fn new(world: &'w mut World, is_renderer: fn(&World, Entity) -> bool) -> Self {
    Self { world, is_renderer }
  }
}

impl SceneGraph for WorldHost<'_> {
  type Object = Entity;

  fn renderers_in_subtree(&self, root: Entity, include_inactive: bool) -> Vec<Entity> {
    let mut renderers = Vec::new();
    let mut stack = vec![root];

    while let Some(entity) = stack.pop() {
      let Ok(entity_ref) = self.world.get_entity(entity) else {
        continue;
      };
      // Disabled hides the whole subtree
      if !include_inactive && entity_ref.contains::<Disabled>() {
        continue;
      }
      if (self.is_renderer)(self.world, entity) {
        renderers.push(entity);
      }
      if let Some(children) = entity_ref.get::<Children>() {
        stack.extend(children.iter().rev());
      }
    }

    renderers
  }

  fn display_name(&self, object: Entity) -> Option<&str> {
    self.world.get::<Name>(object).map(Name::as_str)
  }

  fn is_alive(&self, object: Entity) -> bool {
    self.world.get_entity(object).is_ok()
  }

  // A member that lost its renderer component no longer resolves
  fn is_live_renderer(&self, renderer: Entity) -> bool {
    self.is_alive(renderer) && (self.is_renderer)(self.world, renderer)
  }

  fn lod_group(&self, object: Entity) -> Option<&LodGroup<Entity>> {
    self.world.get::<LodGroupRoot>(object).map(|root| &root.group)
  }

  fn set_lod_group(&mut self, root: Entity, group: LodGroup<Entity>) -> Result<(), LodError> {
    let Some(mut component) = self.world.get_mut::<LodGroupRoot>(root) else {
      return Err(LodError::NotAnLodGroup(format!("{}", root)));
    };
    component.group = group;
    Ok(())
  }
}

impl SelectionHost for WorldHost<'_> {
  fn selection(&self) -> Vec<Entity> {
    self
      .world
      .get_resource::<EditorSelection>()
      .map(|selection| selection.entities.clone())
      .unwrap_or_default()
  }

  fn set_selection(&mut self, objects: Vec<Entity>) {
    self
      .world
      .get_resource_or_insert_with(EditorSelection::default)
      .set(objects);
  }
}

impl UndoHost for WorldHost<'_> {
  fn record_before_mutation(&mut self, object: Entity, label: &'static str) {
    let before = self.lod_group(object).cloned();
    self
      .world
      .get_resource_or_insert_with(LodUndoHistory::default)
      .pending
      .push(UndoRecord {
        entity: object,
        label,
        before,
        after: None,
      });
  }

  fn commit_undo(&mut self, label: &'static str) {
    let Some(mut history) = self.world.remove_resource::<LodUndoHistory>() else {
      return;
    };

    let mut committed = 0;
    for mut record in std::mem::take(&mut history.pending) {
      record.after = self.lod_group(record.entity).cloned();
      // Failed or no-op writes leave nothing to undo
      if record.after == record.before {
        continue;
      }
      history.undo.push(record);
      committed += 1;
    }
    if committed > 0 {
      history.redo.clear();
    }
    tracing::trace!(label, committed, "LOD undo entry committed");

    self.world.insert_resource(history);
  }
}

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;
