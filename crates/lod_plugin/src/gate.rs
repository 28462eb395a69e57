//! Cooldown gates and the idle-tick queue.
//!
//! Hosts poll "can this command run?" once per menu frame per context, often
//! many times for a single user interaction. A [`CooldownGate`] lets the
//! first poll of a decision cycle do the real work and makes every later poll
//! reuse its result. Gates are released by [`IdleTask`]s queued on an
//! [`IdleQueue`], which the host drains once its event loop goes idle.
//!
//! ```text
//!            first query: acquire + schedule release
//!   IDLE ───────────────────────────────────────────► ACTIVE
//!    ▲                                                  │ repeat queries
//!    │              IdleQueue::drain (next idle tick)   │ reuse cached result
//!    └──────────────────────────────────────────────────┘
//! ```

/// Work deferred to the host's next idle tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IdleTask {
  /// Allow the next query to rebuild manifests.
  ReleaseManifestCooldown,
  /// Allow the next level selection to run.
  ReleaseSelectionCooldown,
}

/// Tasks waiting for the next idle tick. Each fires exactly once.
#[derive(Debug, Default)]
pub struct IdleQueue {
  tasks: Vec<IdleTask>,
}

impl IdleQueue {
  /// Create an empty queue.
  pub fn new() -> Self {
    Self::default()
  }

  /// Schedule a task for the next idle tick.
  pub fn schedule(&mut self, task: IdleTask) {
    self.tasks.push(task);
  }

  /// Number of pending tasks.
  pub fn len(&self) -> usize {
    self.tasks.len()
  }

  /// Check if nothing is pending.
  pub fn is_empty(&self) -> bool {
    self.tasks.is_empty()
  }

  /// Take every pending task, leaving the queue empty.
  pub fn drain(&mut self) -> impl Iterator<Item = IdleTask> + '_ {
    self.tasks.drain(..)
  }
}

/// Single-shot-per-cycle latch.
#[derive(Debug, Default)]
pub struct CooldownGate {
  active: bool,
}

impl CooldownGate {
  /// Create an open gate.
  pub fn new() -> Self {
    Self::default()
  }

  /// Check if the cooldown is running.
  #[inline]
  pub fn is_active(&self) -> bool {
    self.active
  }

  /// Start the cooldown if it isn't running.
  ///
  /// Returns `true` only for the caller that opened it, who must schedule
  /// `release` on `idle`.
  pub fn try_acquire(&mut self, idle: &mut IdleQueue, release: IdleTask) -> bool {
    if self.active {
      return false;
    }
    self.active = true;
    idle.schedule(release);
    true
  }

  /// End the cooldown.
  pub fn release(&mut self) {
    self.active = false;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_gate_opens_once_per_cycle() {
    let mut idle = IdleQueue::new();
    let mut gate = CooldownGate::new();

    assert!(gate.try_acquire(&mut idle, IdleTask::ReleaseManifestCooldown));
    assert!(!gate.try_acquire(&mut idle, IdleTask::ReleaseManifestCooldown));
    assert!(!gate.try_acquire(&mut idle, IdleTask::ReleaseManifestCooldown));
    assert_eq!(idle.len(), 1, "Only the opener schedules a release");
  }

  #[test]
  fn test_release_reopens_gate() {
    let mut idle = IdleQueue::new();
    let mut gate = CooldownGate::new();
    gate.try_acquire(&mut idle, IdleTask::ReleaseSelectionCooldown);

    let tasks: Vec<_> = idle.drain().collect();
    assert_eq!(tasks, vec![IdleTask::ReleaseSelectionCooldown]);
    assert!(idle.is_empty());

    gate.release();
    assert!(!gate.is_active());
    assert!(gate.try_acquire(&mut idle, IdleTask::ReleaseSelectionCooldown));
  }
}
