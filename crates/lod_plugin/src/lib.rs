//! lod_plugin - Framework/engine independent LOD group reconciliation
//!
//! Keeps an LOD group consistent with the renderers found under its root.
//! Renderers declare their level through a trailing name suffix
//! (`Rock_LOD0` .. `Rock_LOD7`); the tools find the ones not registered yet,
//! build a correction plan and write the corrected group back under one undo
//! entry.
//!
//! # Flow
//!
//! ```text
//! ┌──────┐     ┌──────────┐     ┌───────────────┐     ┌───────────┐     ┌────────────┐
//! │ Scan ├────►│ Manifest ├────►│ ManifestCache ├────►│ Reconcile ├────►│ Write-back │
//! └──────┘     └──────────┘     └───────────────┘     └───────────┘     └────────────┘
//! LevelScan    diff vs group     one per cycle         extend+union       UndoTransaction
//! ```
//!
//! Host editors poll [`LodTools::can_run`] every menu frame; the cache and
//! cooldown gates make that cheap. Engine bridges implement the traits in
//! [`host`] over their own scene storage.
//!
//! # Example
//!
//! ```ignore
//! use lod_plugin::{LodCommand, LodTools};
//!
//! let mut tools = LodTools::default();
//!
//! // Menu draw (any number of times per frame)
//! if tools.can_run(&host, LodCommand::AppendUnassigned, None) {
//!     // Menu pick
//!     tools.run(&mut host, LodCommand::AppendUnassigned, None);
//! }
//!
//! // End of frame
//! tools.on_idle();
//! ```

pub mod cache;
pub mod classify;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod gate;
pub mod host;
pub mod manifest;
pub mod reconcile;
pub mod removal;
pub mod scan;
pub mod selector;
pub mod types;
pub mod undo;

// Test utilities
#[cfg(test)]
pub mod test_utils;

// Re-export commonly used items
pub use classify::classify;
pub use commands::{CommandOutcome, LodCommand, LodTools};
pub use config::LodToolsConfig;
pub use constants::{LOD_SUFFIXES, MAX_LOD_LEVELS};
pub use error::LodError;
pub use host::{LodHost, SceneGraph, SelectionHost, UndoHost};
pub use manifest::Manifest;
pub use reconcile::ReconcileReport;
pub use types::{LodGroup, LodLevel, ObjectId};
