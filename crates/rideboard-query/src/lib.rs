//! Filter helpers and collaborator-level policy for the rideboard.
//!
//! Everything here is pure and stateless: functions over
//! [`RideOffer`](rideboard_core::RideOffer) snapshots taken from the store,
//! composed by presentation collaborators. Nothing in this crate touches
//! storage.
//!
//! The business rules in [`policy`] (duplicate-offer, seat ceilings, plate
//! format) deliberately live here rather than in the store — the store
//! accepts whatever it is given, and collaborators gatekeep, matching the
//! validation boundary of the original application.

pub mod filter;
pub mod policy;
pub mod time;

pub use filter::{RideQuery, VehicleFilter};
pub use policy::PolicyError;
