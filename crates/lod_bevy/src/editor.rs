//! Editor entry points: command dispatch and LOD undo/redo over a `World`.
//!
//! Editor shells call [`can_run_command`] when drawing the menu,
//! [`run_command`] when an entry is picked, and [`undo`] / [`redo`] from
//! their history UI. Cooldowns are released by the plugin's `Last` system.

use bevy::ecs::change_detection::Mut;
use bevy::ecs::entity::Entity;
use bevy::ecs::world::World;
use lod_plugin::{CommandOutcome, LodCommand, LodError, LodGroup};

use crate::components::LodGroupRoot;
use crate::host::WorldHost;
use crate::resources::{LodToolsState, LodUndoHistory, RendererFilter};

/// Answer the menu's "can this run?" query.
///
/// `false` when the plugin isn't installed.
pub fn can_run_command(world: &mut World, command: LodCommand, context: Option<Entity>) -> bool {
  let Some(filter) = world.get_resource::<RendererFilter>().copied() else {
    return false;
  };
  world
    .try_resource_scope(|world, mut state: Mut<LodToolsState>| {
      let host = WorldHost::new(world, filter.is_renderer);
      state.tools.can_run(&host, command, context)
    })
    .unwrap_or(false)
}

/// Run a command against the world.
pub fn run_command(world: &mut World, command: LodCommand, context: Option<Entity>) -> CommandOutcome {
  let Some(filter) = world.get_resource::<RendererFilter>().copied() else {
    return not_installed(command);
  };
  world
    .try_resource_scope(|world, mut state: Mut<LodToolsState>| {
      let mut host = WorldHost::new(world, filter.is_renderer);
      state.tools.run(&mut host, command, context)
    })
    .unwrap_or_else(|| not_installed(command))
}

fn not_installed(command: LodCommand) -> CommandOutcome {
  let err = LodError::Host("LodToolsPlugin is not installed".to_string());
  tracing::warn!(command = command.name(), %err, "LOD command failed");
  CommandOutcome::Failed(err)
}

/// Revert the most recent LOD group edit.
///
/// Returns the label of the reverted entry.
pub fn undo(world: &mut World) -> Option<&'static str> {
  let record = world.get_resource_mut::<LodUndoHistory>()?.undo.pop()?;
  restore(world, record.entity, record.before.clone());
  let label = record.label;
  world.resource_mut::<LodUndoHistory>().redo.push(record);
  tracing::debug!(label, "LOD edit undone");
  Some(label)
}

/// Re-apply the most recently undone LOD group edit.
pub fn redo(world: &mut World) -> Option<&'static str> {
  let record = world.get_resource_mut::<LodUndoHistory>()?.redo.pop()?;
  restore(world, record.entity, record.after.clone());
  let label = record.label;
  world.resource_mut::<LodUndoHistory>().undo.push(record);
  tracing::debug!(label, "LOD edit redone");
  Some(label)
}

/// Put `entity`'s LOD group back to a recorded state.
fn restore(world: &mut World, entity: Entity, group: Option<LodGroup<Entity>>) {
  let Ok(mut entity_mut) = world.get_entity_mut(entity) else {
    tracing::debug!(?entity, "LOD undo target no longer exists");
    return;
  };
  match group {
    Some(group) => {
      entity_mut.insert(LodGroupRoot::new(group));
    }
    None => {
      entity_mut.remove::<LodGroupRoot>();
    }
  }
}

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;
