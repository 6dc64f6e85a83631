//! [`RideStore`] — the reactive store over an injected [`StorageAdapter`].

use chrono::Utc;
use rideboard_core::{
  BookedRideRecord, Booking, NewRideOffer, RideOffer, StorageAdapter, id,
};

use crate::{
  persist,
  subscribers::{SubscriberSet, SubscriptionId},
};

/// Single source of truth for the three carpool collections plus the
/// available-rides-count relay.
///
/// Single-threaded by construction: every operation takes `&mut self`, runs
/// to completion, and invokes subscribers synchronously before returning.
/// The collections are newest-first ordered sequences; offers are never
/// deleted, bookings and booked-ride records are append-only.
pub struct RideStore<A: StorageAdapter> {
  adapter: A,

  rides:           Vec<RideOffer>,
  bookings:        Vec<Booking>,
  booked_rides:    Vec<BookedRideRecord>,
  /// Relay scalar between a filtering collaborator and a display
  /// collaborator — the store never derives it, only passes it along.
  available_count: usize,

  ride_subscribers:         SubscriberSet<Vec<RideOffer>>,
  booking_subscribers:      SubscriberSet<Vec<Booking>>,
  booked_ride_subscribers:  SubscriberSet<Vec<BookedRideRecord>>,
  count_subscribers:        SubscriberSet<usize>,
}

impl<A: StorageAdapter> RideStore<A> {
  /// Open a store over `adapter`, restoring the three collections.
  ///
  /// A slot that was never written restores as empty. If any slot fails to
  /// read or parse, ALL THREE collections reset to empty — fail-safe over
  /// partial restoration — and the fault is logged. Opening never fails.
  pub fn open(adapter: A) -> Self {
    let (rides, bookings, booked_rides) = match persist::load_all(&adapter) {
      Ok(collections) => collections,
      Err(err) => {
        tracing::error!(%err, "failed to restore persisted state, starting empty");
        (Vec::new(), Vec::new(), Vec::new())
      }
    };

    Self {
      adapter,
      rides,
      bookings,
      booked_rides,
      available_count: 0,
      ride_subscribers: SubscriberSet::new(),
      booking_subscribers: SubscriberSet::new(),
      booked_ride_subscribers: SubscriberSet::new(),
      count_subscribers: SubscriberSet::new(),
    }
  }

  /// Tear down the store and hand the adapter back.
  pub fn into_adapter(self) -> A {
    self.adapter
  }

  // ── Mutations ─────────────────────────────────────────────────────────────

  /// Publish a new ride offer. Assigns a fresh id, prepends the offer
  /// (newest first), persists, and notifies ride subscribers.
  ///
  /// Always succeeds: the store performs no validation. Duplicate-offer
  /// prevention is collaborator policy built on [`Self::has_employee_offer`].
  pub fn add_ride(&mut self, new: NewRideOffer) -> RideOffer {
    let offer = new.into_offer(id::generate());
    self.rides.insert(0, offer.clone());
    self.persist_all();
    let snapshot = self.rides.clone();
    self.ride_subscribers.notify(&snapshot);

    tracing::debug!(ride_id = %offer.id, employee_id = %offer.employee_id, "ride offered");
    offer
  }

  /// Book `seats` seats on an offer.
  ///
  /// Returns `None` — with no mutation and no notification — if the offer
  /// does not exist or has fewer than `seats` vacant seats. Otherwise the
  /// seat decrement, the [`Booking`], and the [`BookedRideRecord`] are
  /// applied as one logical transaction; the record snapshots the offer as
  /// it was *before* the decrement.
  pub fn book_ride(
    &mut self,
    ride_id: &str,
    passenger_employee_id: &str,
    seats: u32,
  ) -> Option<Booking> {
    let index = self.rides.iter().position(|r| r.id == ride_id)?;
    let offer_before = self.rides[index].clone();
    if offer_before.vacant_seats < seats {
      tracing::debug!(
        %ride_id,
        requested = seats,
        vacant = offer_before.vacant_seats,
        "booking rejected, not enough vacant seats"
      );
      return None;
    }

    // All checks passed; from here every mutation happens.
    self.rides[index].vacant_seats -= seats;
    self.persist_all();
    let rides_snapshot = self.rides.clone();
    self.ride_subscribers.notify(&rides_snapshot);

    let booked_at = Utc::now();
    let booking = Booking {
      id: id::generate(),
      ride_id: ride_id.to_owned(),
      passenger_employee_id: passenger_employee_id.to_owned(),
      seats_booked: seats,
      booked_at,
    };
    self.bookings.insert(0, booking.clone());
    self.persist_all();
    let bookings_snapshot = self.bookings.clone();
    self.booking_subscribers.notify(&bookings_snapshot);

    let record = BookedRideRecord {
      id: id::generate(),
      ride_id: ride_id.to_owned(),
      offered_by: offer_before.employee_id.clone(),
      ride_details: offer_before,
      booked_by: passenger_employee_id.to_owned(),
      seats_booked: seats,
      booked_at,
    };
    self.booked_rides.insert(0, record);
    self.persist_all();
    let booked_snapshot = self.booked_rides.clone();
    self.booked_ride_subscribers.notify(&booked_snapshot);

    tracing::debug!(booking_id = %booking.id, %ride_id, seats, "ride booked");
    Some(booking)
  }

  /// Relay a new available-rides count to count subscribers. Pure
  /// pass-through: no validation, no persistence.
  pub fn set_available_rides_count(&mut self, count: usize) {
    self.available_count = count;
    self.count_subscribers.notify(&count);
  }

  // ── Queries ───────────────────────────────────────────────────────────────

  /// Point lookup by offer id. No side effects.
  pub fn ride_by_id(&self, id: &str) -> Option<RideOffer> {
    self.rides.iter().find(|r| r.id == id).cloned()
  }

  /// Whether `employee_id` already has an offer on the board.
  pub fn has_employee_offer(&self, employee_id: &str) -> bool {
    self.rides.iter().any(|r| r.employee_id == employee_id)
  }

  /// Whether `employee_id` already booked the offer `ride_id`.
  pub fn has_employee_booking(&self, ride_id: &str, employee_id: &str) -> bool {
    self
      .booked_rides
      .iter()
      .any(|b| b.ride_id == ride_id && b.booked_by == employee_id)
  }

  pub fn rides(&self) -> Vec<RideOffer> {
    self.rides.clone()
  }

  pub fn bookings(&self) -> Vec<Booking> {
    self.bookings.clone()
  }

  pub fn booked_rides(&self) -> Vec<BookedRideRecord> {
    self.booked_rides.clone()
  }

  pub fn available_rides_count(&self) -> usize {
    self.available_count
  }

  // ── Subscriptions ─────────────────────────────────────────────────────────
  //
  // Every channel replays its current value to a new subscriber immediately,
  // then delivers every subsequent value in mutation order. Each delivery is
  // an independent clone.

  pub fn subscribe_rides(
    &mut self,
    mut f: impl FnMut(Vec<RideOffer>) + 'static,
  ) -> SubscriptionId {
    f(self.rides.clone());
    self.ride_subscribers.subscribe(f)
  }

  pub fn subscribe_bookings(
    &mut self,
    mut f: impl FnMut(Vec<Booking>) + 'static,
  ) -> SubscriptionId {
    f(self.bookings.clone());
    self.booking_subscribers.subscribe(f)
  }

  pub fn subscribe_booked_rides(
    &mut self,
    mut f: impl FnMut(Vec<BookedRideRecord>) + 'static,
  ) -> SubscriptionId {
    f(self.booked_rides.clone());
    self.booked_ride_subscribers.subscribe(f)
  }

  pub fn subscribe_available_count(
    &mut self,
    mut f: impl FnMut(usize) + 'static,
  ) -> SubscriptionId {
    f(self.available_count);
    self.count_subscribers.subscribe(f)
  }

  pub fn unsubscribe_rides(&mut self, id: SubscriptionId) -> bool {
    self.ride_subscribers.unsubscribe(id)
  }

  pub fn unsubscribe_bookings(&mut self, id: SubscriptionId) -> bool {
    self.booking_subscribers.unsubscribe(id)
  }

  pub fn unsubscribe_booked_rides(&mut self, id: SubscriptionId) -> bool {
    self.booked_ride_subscribers.unsubscribe(id)
  }

  pub fn unsubscribe_available_count(&mut self, id: SubscriptionId) -> bool {
    self.count_subscribers.unsubscribe(id)
  }

  // ── Persistence ───────────────────────────────────────────────────────────

  /// Write all three collections. Faults are logged and swallowed: the
  /// in-memory mutation (and its notifications) stand even when the backend
  /// refuses the write.
  fn persist_all(&mut self) {
    if let Err(err) = persist::save_all(
      &mut self.adapter,
      &self.rides,
      &self.bookings,
      &self.booked_rides,
    ) {
      tracing::error!(%err, "failed to persist collections, keeping in-memory state");
    }
  }
}
