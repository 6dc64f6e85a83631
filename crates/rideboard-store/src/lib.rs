//! The reactive ride/booking store — single source of truth for the three
//! carpool collections (offers, bookings, booked-ride records) and the
//! available-count relay.
//!
//! The store owns the collections exclusively; everything handed outward is
//! a copy. Persistence goes through an injected
//! [`StorageAdapter`](rideboard_core::StorageAdapter), so tests substitute
//! the in-memory adapter.

mod persist;
mod store;
mod subscribers;

pub mod error;

pub use error::Error;
pub use store::RideStore;
pub use subscribers::SubscriptionId;
