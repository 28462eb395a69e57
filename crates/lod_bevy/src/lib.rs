//! Bevy editor bridge for lod_plugin.
//!
//! Stores LOD groups as [`LodGroupRoot`] components, exposes the editor
//! selection and LOD undo history as resources, and runs the LOD commands
//! against a `World` through [`editor`].

pub mod components;
pub mod editor;
pub mod host;
pub mod resources;

use std::marker::PhantomData;

use bevy::app::{App, Last, Plugin};
use bevy::ecs::component::Component;
use bevy::ecs::system::ResMut;
pub use components::*;
pub use editor::{can_run_command, redo, run_command, undo};
pub use host::WorldHost;
pub use lod_plugin::{CommandOutcome, LodCommand, LodToolsConfig};
pub use resources::*;

/// Bevy plugin for LOD group editor tools.
///
/// Entities carrying `R` count as renderers.
pub struct LodToolsPlugin<R: Component> {
  pub config: LodToolsConfig,
  _renderer: PhantomData<fn() -> R>,
}

impl<R: Component> LodToolsPlugin<R> {
  pub fn new(config: LodToolsConfig) -> Self {
    Self {
      config,
      _renderer: PhantomData,
    }
  }
}

impl<R: Component> Default for LodToolsPlugin<R> {
  fn default() -> Self {
    Self::new(LodToolsConfig::default())
  }
}

impl<R: Component> Plugin for LodToolsPlugin<R> {
  fn build(&self, app: &mut App) {
    app
      .insert_resource(LodToolsState::new(self.config))
      .insert_resource(RendererFilter::with_component::<R>())
      .init_resource::<EditorSelection>()
      .init_resource::<LodUndoHistory>()
      .add_systems(Last, release_lod_cooldowns);
  }
}

/// End-of-frame idle tick: releases the per-cycle cooldowns.
fn release_lod_cooldowns(mut state: ResMut<LodToolsState>) {
  state.tools.on_idle();
}
