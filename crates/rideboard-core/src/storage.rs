//! The `StorageAdapter` trait and supporting types.
//!
//! The trait is implemented by storage backends (e.g. `rideboard-storage-fs`).
//! The store depends on this abstraction, not on any concrete backend, so
//! tests can substitute [`MemoryAdapter`].

use std::collections::HashMap;

use thiserror::Error;

/// The three independently-keyed durable slots the store persists into.
///
/// Each slot holds one serialized collection, written whole on every
/// mutation (no deltas).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
  Rides,
  Bookings,
  BookedRides,
}

impl Slot {
  pub const ALL: [Slot; 3] = [Slot::Rides, Slot::Bookings, Slot::BookedRides];

  /// The stable storage key for this slot. Matches the keys the original
  /// browser deployment used, so existing payloads remain readable.
  pub fn key(self) -> &'static str {
    match self {
      Self::Rides => "transport_rides",
      Self::Bookings => "transport_bookings",
      Self::BookedRides => "transport_booked_rides",
    }
  }
}

/// Abstraction over a durable blob key-value backend.
///
/// All methods are synchronous: the store runs single-threaded and every
/// operation completes on the calling thread before the next one begins.
/// Backends report faults through `Self::Error`; the store logs and swallows
/// them rather than propagating (see the store crate for the policy).
pub trait StorageAdapter {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Read the payload stored in `slot`. A slot that has never been written
  /// is `Ok(None)`, not an error.
  fn read(&self, slot: Slot) -> Result<Option<String>, Self::Error>;

  /// Replace the payload stored in `slot`.
  fn write(&mut self, slot: Slot, payload: &str) -> Result<(), Self::Error>;

  /// Delete the payload stored in `slot`, if any.
  fn remove(&mut self, slot: Slot) -> Result<(), Self::Error>;
}

// ─── In-memory adapter ───────────────────────────────────────────────────────

/// Error type for [`MemoryAdapter`]. Only produced when the adapter has been
/// poisoned by a test.
#[derive(Debug, Error)]
pub enum MemoryError {
  #[error("write to {0:?} refused: adapter poisoned")]
  Poisoned(Slot),
}

/// A `HashMap`-backed adapter for tests and ephemeral sessions.
///
/// `poison_writes` makes every subsequent write fail, which is how the
/// store's swallow-write-faults policy is exercised.
#[derive(Debug, Default)]
pub struct MemoryAdapter {
  slots:         HashMap<&'static str, String>,
  poison_writes: bool,
}

impl MemoryAdapter {
  pub fn new() -> Self {
    Self::default()
  }

  /// Pre-load `slot` with a raw payload, bypassing serialization. Used to
  /// seed corrupt data in tests.
  pub fn seed(&mut self, slot: Slot, payload: impl Into<String>) {
    self.slots.insert(slot.key(), payload.into());
  }

  /// Make every subsequent write fail with [`MemoryError::Poisoned`].
  pub fn poison_writes(&mut self) {
    self.poison_writes = true;
  }
}

impl StorageAdapter for MemoryAdapter {
  type Error = MemoryError;

  fn read(&self, slot: Slot) -> Result<Option<String>, Self::Error> {
    Ok(self.slots.get(slot.key()).cloned())
  }

  fn write(&mut self, slot: Slot, payload: &str) -> Result<(), Self::Error> {
    if self.poison_writes {
      return Err(MemoryError::Poisoned(slot));
    }
    self.slots.insert(slot.key(), payload.to_owned());
    Ok(())
  }

  fn remove(&mut self, slot: Slot) -> Result<(), Self::Error> {
    self.slots.remove(slot.key());
    Ok(())
  }
}
