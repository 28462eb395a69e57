//! Bevy resources for LOD editor tooling.

use bevy::ecs::entity::Entity;
use bevy::ecs::resource::Resource;
use bevy::ecs::world::World;
use lod_plugin::{LodGroup, LodTools, LodToolsConfig};

/// Resource holding the editor's current selection.
#[derive(Resource, Default, Debug, Clone)]
pub struct EditorSelection {
  pub entities: Vec<Entity>,
}

impl EditorSelection {
  /// Replace the selection.
  pub fn set(&mut self, entities: Vec<Entity>) {
    self.entities = entities;
  }

  /// Check if an entity is selected.
  pub fn contains(&self, entity: Entity) -> bool {
    self.entities.contains(&entity)
  }
}

/// Resource owning the LOD command dispatch context.
#[derive(Resource)]
pub struct LodToolsState {
  pub tools: LodTools<Entity>,
}

impl LodToolsState {
  pub fn new(config: LodToolsConfig) -> Self {
    Self {
      tools: LodTools::new(config),
    }
  }
}

/// Resource deciding which entities count as renderers.
///
/// Set by `LodToolsPlugin::<R>`: an entity is a renderer when it has `R`.
#[derive(Resource, Clone, Copy)]
pub struct RendererFilter {
  pub is_renderer: fn(&World, Entity) -> bool,
}

impl RendererFilter {
  /// Filter matching entities with component `R`.
  pub fn with_component<R: bevy::ecs::component::Component>() -> Self {
    Self {
      is_renderer: |world, entity| world.get::<R>(entity).is_some(),
    }
  }
}

/// One undoable change to an entity's LOD group.
///
/// `None` means the entity had no `LodGroupRoot` at that point.
#[derive(Clone, Debug, PartialEq)]
pub struct UndoRecord {
  pub entity: Entity,
  pub label: &'static str,
  pub before: Option<LodGroup<Entity>>,
  pub after: Option<LodGroup<Entity>>,
}

/// Resource mapping LOD group edits to undo/redo stacks.
#[derive(Resource, Default, Debug)]
pub struct LodUndoHistory {
  /// Recorded but not yet committed.
  pub(crate) pending: Vec<UndoRecord>,
  pub(crate) undo: Vec<UndoRecord>,
  pub(crate) redo: Vec<UndoRecord>,
}

impl LodUndoHistory {
  /// Check if there is anything to undo.
  pub fn can_undo(&self) -> bool {
    !self.undo.is_empty()
  }

  /// Check if there is anything to redo.
  pub fn can_redo(&self) -> bool {
    !self.redo.is_empty()
  }

  /// Label of the entry the next undo would revert.
  pub fn undo_label(&self) -> Option<&'static str> {
    self.undo.last().map(|record| record.label)
  }

  /// Committed entries, oldest first.
  pub fn undo_stack(&self) -> &[UndoRecord] {
    &self.undo
  }
}
