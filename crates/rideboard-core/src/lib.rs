//! Core types and trait definitions for the rideboard carpool store.
//!
//! This crate is deliberately free of I/O. All other crates depend on it;
//! it depends on nothing but serde, chrono, and a random number generator.

pub mod booking;
pub mod id;
pub mod ride;
pub mod storage;

pub use booking::{BookedRideRecord, Booking};
pub use ride::{NewRideOffer, RideOffer, VehicleType};
pub use storage::{MemoryAdapter, Slot, StorageAdapter};
