//! Named LOD group commands and the dispatch context that runs them.
//!
//! Hosts register every [`LodCommand::all`] entry under its
//! [`menu_path`](LodCommand::menu_path), call [`LodTools::can_run`] whenever
//! the menu is drawn, [`LodTools::run`] when an entry is picked, and
//! [`LodTools::on_idle`] once their event loop goes idle.
//!
//! ```text
//!  menu frame          menu frame          action         idle tick
//!  can_run ──► scan    can_run ──► cache   run ──► apply  on_idle ──► release cooldowns
//! ```

use std::borrow::Cow;

use crate::cache::ManifestCache;
use crate::config::LodToolsConfig;
use crate::constants::MAX_LOD_LEVELS;
use crate::error::LodError;
use crate::gate::{IdleQueue, IdleTask};
use crate::host::LodHost;
use crate::reconcile::apply_manifest;
use crate::removal::{has_missing_renderers, remove_missing_renderers};
use crate::selector::{can_select_at_level, LevelSelector};
use crate::types::ObjectId;

/// Menu prefix shared by every command.
pub const MENU_ROOT: &str = "LOD Group";

const APPEND_PATH: &str = "LOD Group/Append Unassigned LOD Renderers (Experimental)";
const REMOVE_MISSING_PATH: &str = "LOD Group/Remove Missing Renderers";
const SELECT_AT_LEVEL_PREFIX: &str = "LOD Group/Select Renderers At LOD/";

/// Commands exposed to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LodCommand {
  /// Register renderers whose names declare a level they aren't in yet,
  /// across every selected LOD root.
  AppendUnassigned,
  /// Drop dead renderer references from the context root's group.
  RemoveMissing,
  /// Select every renderer at one level across the selected LOD roots.
  SelectAtLevel(u8),
}

impl LodCommand {
  /// Every command in registration order.
  pub fn all() -> impl Iterator<Item = LodCommand> {
    [LodCommand::AppendUnassigned, LodCommand::RemoveMissing]
      .into_iter()
      .chain((0..MAX_LOD_LEVELS as u8).map(LodCommand::SelectAtLevel))
  }

  /// Menu path the host registers this command under.
  pub fn menu_path(&self) -> Cow<'static, str> {
    match self {
      LodCommand::AppendUnassigned => Cow::Borrowed(APPEND_PATH),
      LodCommand::RemoveMissing => Cow::Borrowed(REMOVE_MISSING_PATH),
      LodCommand::SelectAtLevel(level) => Cow::Owned(format!("{}{}", SELECT_AT_LEVEL_PREFIX, level)),
    }
  }

  /// Look a command up by its menu path.
  pub fn from_menu_path(path: &str) -> Option<LodCommand> {
    match path {
      APPEND_PATH => Some(LodCommand::AppendUnassigned),
      REMOVE_MISSING_PATH => Some(LodCommand::RemoveMissing),
      _ => {
        let level: u8 = path.strip_prefix(SELECT_AT_LEVEL_PREFIX)?.parse().ok()?;
        ((level as usize) < MAX_LOD_LEVELS).then_some(LodCommand::SelectAtLevel(level))
      }
    }
  }

  /// Short name used in logs and errors.
  pub fn name(&self) -> &'static str {
    match self {
      LodCommand::AppendUnassigned => "append_unassigned",
      LodCommand::RemoveMissing => "remove_missing",
      LodCommand::SelectAtLevel(_) => "select_at_level",
    }
  }

  /// Check if the command acts on the object it was invoked on rather than
  /// the selection.
  pub fn requires_context(&self) -> bool {
    matches!(self, LodCommand::RemoveMissing)
  }
}

/// Result of running a command.
#[derive(Clone, Debug, PartialEq)]
pub enum CommandOutcome {
  /// Nothing to do: stale cache, cooldown, or no-op.
  Skipped,
  /// Unassigned renderers were appended.
  Appended {
    roots: usize,
    levels_created: usize,
    renderers_added: usize,
  },
  /// Dead references were removed.
  RemovedMissing { removed: usize },
  /// The selection was replaced.
  Selected { count: usize },
  /// The command failed; the error has already been logged.
  Failed(LodError),
}

/// Dispatch context for LOD group commands.
///
/// Owns the per-cycle manifest cache, the selection cooldown and the idle
/// queue that releases both. One instance per editor; single-threaded.
#[derive(Debug)]
pub struct LodTools<O> {
  config: LodToolsConfig,
  manifests: ManifestCache<O>,
  selector: LevelSelector,
  idle: IdleQueue,
}

impl<O: ObjectId> LodTools<O> {
  /// Create a context with the given configuration.
  pub fn new(config: LodToolsConfig) -> Self {
    Self {
      config,
      manifests: ManifestCache::new(),
      selector: LevelSelector::new(),
      idle: IdleQueue::new(),
    }
  }

  /// Active configuration.
  pub fn config(&self) -> &LodToolsConfig {
    &self.config
  }

  /// Manifests cached in the current cycle.
  pub fn manifests(&self) -> &ManifestCache<O> {
    &self.manifests
  }

  /// Check if anything is waiting for the next idle tick.
  pub fn has_pending_idle_work(&self) -> bool {
    !self.idle.is_empty()
  }

  /// Answer the host's "can this run?" query.
  ///
  /// `context` is the object the menu was opened on, required by
  /// context-bearing commands.
  pub fn can_run<H: LodHost<Object = O> + ?Sized>(
    &mut self,
    host: &H,
    command: LodCommand,
    context: Option<O>,
  ) -> bool {
    match command {
      LodCommand::AppendUnassigned => {
        self
          .manifests
          .query(host, &mut self.idle, self.config.include_inactive)
      }
      LodCommand::RemoveMissing => context.is_some_and(|root| has_missing_renderers(host, root)),
      LodCommand::SelectAtLevel(level) => can_select_at_level(host, level as usize),
    }
  }

  /// Run a command.
  ///
  /// Errors never escape: they are logged and reported as
  /// [`CommandOutcome::Failed`].
  pub fn run<H: LodHost<Object = O> + ?Sized>(
    &mut self,
    host: &mut H,
    command: LodCommand,
    context: Option<O>,
  ) -> CommandOutcome {
    match self.execute(host, command, context) {
      Ok(outcome) => outcome,
      Err(err) => {
        tracing::warn!(command = command.name(), ?context, %err, "LOD command failed");
        CommandOutcome::Failed(err)
      }
    }
  }

  fn execute<H: LodHost<Object = O> + ?Sized>(
    &mut self,
    host: &mut H,
    command: LodCommand,
    context: Option<O>,
  ) -> Result<CommandOutcome, LodError> {
    match command {
      LodCommand::AppendUnassigned => self.append_unassigned(host),
      LodCommand::RemoveMissing => {
        let root = context.ok_or(LodError::MissingContext(command.name()))?;
        match remove_missing_renderers(host, root)? {
          0 => Ok(CommandOutcome::Skipped),
          removed => Ok(CommandOutcome::RemovedMissing { removed }),
        }
      }
      LodCommand::SelectAtLevel(level) => {
        match self.selector.select(host, &mut self.idle, level as usize)? {
          Some(count) => Ok(CommandOutcome::Selected { count }),
          None => Ok(CommandOutcome::Skipped),
        }
      }
    }
  }

  /// Apply every cached manifest, consuming each.
  ///
  /// A failed write stops the pass; manifests not yet applied stay cached.
  fn append_unassigned<H: LodHost<Object = O> + ?Sized>(
    &mut self,
    host: &mut H,
  ) -> Result<CommandOutcome, LodError> {
    let mut roots = 0;
    let mut levels_created = 0;
    let mut renderers_added = 0;

    for root in self.manifests.roots() {
      let Some(manifest) = self.manifests.take(root) else {
        continue;
      };
      if let Some(report) = apply_manifest(host, &manifest, &self.config)? {
        roots += 1;
        levels_created += report.levels_created;
        renderers_added += report.renderers_added;
      }
    }

    if roots == 0 {
      return Ok(CommandOutcome::Skipped);
    }
    Ok(CommandOutcome::Appended {
      roots,
      levels_created,
      renderers_added,
    })
  }

  /// Apply the cached manifest for one root.
  ///
  /// Silent no-op when nothing is cached for `root`.
  pub fn append_unassigned_for<H: LodHost<Object = O> + ?Sized>(
    &mut self,
    host: &mut H,
    root: O,
  ) -> Result<bool, LodError> {
    let Some(manifest) = self.manifests.take(root) else {
      tracing::debug!(?root, "no cached manifest for LOD root");
      return Ok(false);
    };
    Ok(apply_manifest(host, &manifest, &self.config)?.is_some())
  }

  /// Run work deferred to the host's idle tick.
  pub fn on_idle(&mut self) {
    for task in self.idle.drain() {
      match task {
        IdleTask::ReleaseManifestCooldown => self.manifests.release_cooldown(),
        IdleTask::ReleaseSelectionCooldown => self.selector.release_cooldown(),
      }
    }
  }
}

impl<O: ObjectId> Default for LodTools<O> {
  fn default() -> Self {
    Self::new(LodToolsConfig::default())
  }
}

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;
