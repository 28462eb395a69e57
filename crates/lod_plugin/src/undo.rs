//! Scoped undo transactions.
//!
//! ```ignore
//! let mut tx = UndoTransaction::begin(host, root, APPEND_UNDO_LABEL);
//! tx.set_lod_group(root, corrected)?;
//! // entry committed when `tx` drops, on every exit path
//! ```

use std::ops::{Deref, DerefMut};

use crate::host::UndoHost;

/// Undo entry held open for the lifetime of the guard.
///
/// Pre-mutation state is recorded in [`begin`](Self::begin), before any write
/// can happen through the guard. The entry is committed on drop, including
/// when a write fails and the caller returns early with `?`.
pub struct UndoTransaction<'h, H: UndoHost + ?Sized> {
  host: &'h mut H,
  label: &'static str,
}

impl<'h, H: UndoHost + ?Sized> UndoTransaction<'h, H> {
  /// Record `object` and open an undo entry.
  pub fn begin(host: &'h mut H, object: H::Object, label: &'static str) -> Self {
    host.record_before_mutation(object, label);
    Self { host, label }
  }
}

impl<H: UndoHost + ?Sized> Deref for UndoTransaction<'_, H> {
  type Target = H;

  fn deref(&self) -> &H {
    self.host
  }
}

impl<H: UndoHost + ?Sized> DerefMut for UndoTransaction<'_, H> {
  fn deref_mut(&mut self) -> &mut H {
    self.host
  }
}

impl<H: UndoHost + ?Sized> Drop for UndoTransaction<'_, H> {
  fn drop(&mut self) {
    self.host.commit_undo(self.label);
  }
}
