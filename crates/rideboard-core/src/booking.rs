//! Booking records.
//!
//! A successful booking produces two records at once: the [`Booking`] itself
//! and a denormalized [`BookedRideRecord`] that snapshots the offer for
//! display. Both are append-only — never updated, never deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ride::RideOffer;

/// A reservation of seats against a [`RideOffer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
  pub id:                    String,
  /// Weak reference to the offer — no cascading delete is defined.
  pub ride_id:               String,
  pub passenger_employee_id: String,
  pub seats_booked:          u32,
  pub booked_at:             DateTime<Utc>,
}

/// A booking joined with a snapshot of its offer, taken at booking time.
///
/// `ride_details` reflects the offer *before* the seat decrement and is
/// never refreshed afterwards — it exists so a "my rides" view can render
/// booked rides without re-joining live offer state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedRideRecord {
  pub id:           String,
  pub ride_id:      String,
  pub ride_details: RideOffer,
  /// The employee who published the offer.
  pub offered_by:   String,
  /// The employee who made the booking.
  pub booked_by:    String,
  pub seats_booked: u32,
  pub booked_at:    DateTime<Utc>,
}
