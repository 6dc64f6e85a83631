//! Serialization of the three collections into storage slots.
//!
//! Each slot holds one whole collection as a JSON array; every save rewrites
//! all three regardless of which one changed. The volumes involved (one
//! organization's ride board) make full-snapshot writes acceptable.

use rideboard_core::{BookedRideRecord, Booking, RideOffer, Slot, StorageAdapter};
use serde::{Serialize, de::DeserializeOwned};

use crate::error::{Error, Result};

/// Load all three collections. A missing slot is an empty collection; a
/// read or parse failure on any slot is an error for the whole load (the
/// store resets everything to empty in that case, by policy).
pub(crate) fn load_all<A: StorageAdapter>(
  adapter: &A,
) -> Result<(Vec<RideOffer>, Vec<Booking>, Vec<BookedRideRecord>)> {
  Ok((
    load_slot(adapter, Slot::Rides)?,
    load_slot(adapter, Slot::Bookings)?,
    load_slot(adapter, Slot::BookedRides)?,
  ))
}

/// Write all three collections, stopping at the first failure.
pub(crate) fn save_all<A: StorageAdapter>(
  adapter: &mut A,
  rides: &[RideOffer],
  bookings: &[Booking],
  booked_rides: &[BookedRideRecord],
) -> Result<()> {
  save_slot(adapter, Slot::Rides, rides)?;
  save_slot(adapter, Slot::Bookings, bookings)?;
  save_slot(adapter, Slot::BookedRides, booked_rides)?;
  Ok(())
}

fn load_slot<T, A>(adapter: &A, slot: Slot) -> Result<Vec<T>>
where
  T: DeserializeOwned,
  A: StorageAdapter,
{
  let payload = adapter
    .read(slot)
    .map_err(|e| Error::Adapter(Box::new(e)))?;

  match payload {
    Some(json) => Ok(serde_json::from_str(&json)?),
    None => Ok(Vec::new()),
  }
}

fn save_slot<T, A>(adapter: &mut A, slot: Slot, items: &[T]) -> Result<()>
where
  T: Serialize,
  A: StorageAdapter,
{
  let json = serde_json::to_string(items)?;
  adapter
    .write(slot, &json)
    .map_err(|e| Error::Adapter(Box::new(e)))
}
