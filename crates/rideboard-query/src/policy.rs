//! Collaborator-level business rules.
//!
//! These are the checks the original application ran in its form
//! validators, kept at the same boundary: callers gatekeep with them before
//! invoking the store, and the store itself enforces none of this.

use std::sync::LazyLock;

use regex::Regex;
use rideboard_core::{RideOffer, VehicleType};
use thiserror::Error;

pub const EMPLOYEE_ID_MIN: usize = 3;
pub const EMPLOYEE_ID_MAX: usize = 20;

/// Indian registration plates. The standard shape
/// (`KA01AB1234`) also covers the EV / temporary / government series, whose
/// middle letters are just particular two-letter codes; the Bharat series
/// (`23BH1234AB`) has its own shape.
static PLATE_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^(?:[A-Z]{2}\d{2}[A-Z]{2}\d{4}|\d{2}BH\d{4}[A-Z]{2})$").unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
  #[error("employee id must be 3 to 20 characters")]
  EmployeeIdLength,

  #[error("vehicle number is not a recognized registration plate")]
  InvalidVehicleNumber,

  #[error("at least one seat must be offered")]
  NoSeats,

  #[error("at most {max} seat(s) can be offered with this vehicle")]
  TooManySeats { max: u32 },

  #[error("an employee cannot book their own offer")]
  OwnRide,

  #[error("this ride is already booked by the employee")]
  AlreadyBooked,
}

pub type Result<T, E = PolicyError> = std::result::Result<T, E>;

/// Trimmed length must be 3..=20 characters.
pub fn validate_employee_id(employee_id: &str) -> Result<()> {
  let len = employee_id.trim().len();
  if (EMPLOYEE_ID_MIN..=EMPLOYEE_ID_MAX).contains(&len) {
    Ok(())
  } else {
    Err(PolicyError::EmployeeIdLength)
  }
}

/// Accepts Indian registration plates, ignoring case, spaces, and dashes
/// (`"ka-01 ab 1234"` normalizes to `KA01AB1234`).
pub fn validate_vehicle_number(plate: &str) -> Result<()> {
  let normalized: String = plate
    .to_uppercase()
    .chars()
    .filter(|c| !c.is_whitespace() && *c != '-')
    .collect();
  if PLATE_RE.is_match(&normalized) {
    Ok(())
  } else {
    Err(PolicyError::InvalidVehicleNumber)
  }
}

/// Offered seats must be 1..=the vehicle's ceiling (bike 1, car 6).
pub fn validate_seat_count(vehicle: VehicleType, seats: u32) -> Result<()> {
  if seats == 0 {
    return Err(PolicyError::NoSeats);
  }
  let max = vehicle.max_seats();
  if seats > max {
    return Err(PolicyError::TooManySeats { max });
  }
  Ok(())
}

/// The booking-form checks: a well-formed passenger id that is neither the
/// offerer nor an employee who already booked this ride. `already_booked`
/// is the caller's answer from the store's `has_employee_booking`.
pub fn validate_booking_request(
  offer: &RideOffer,
  passenger_employee_id: &str,
  already_booked: bool,
) -> Result<()> {
  validate_employee_id(passenger_employee_id)?;
  if passenger_employee_id.trim() == offer.employee_id {
    return Err(PolicyError::OwnRide);
  }
  if already_booked {
    return Err(PolicyError::AlreadyBooked);
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn offer_by(employee_id: &str) -> RideOffer {
    RideOffer {
      id:             "ride001".into(),
      employee_id:    employee_id.into(),
      vehicle_type:   VehicleType::Car,
      vehicle_number: "KA01AB1234".into(),
      vacant_seats:   4,
      time:           "09:00".into(),
      pickup_point:   "A".into(),
      destination:    "B".into(),
    }
  }

  #[test]
  fn employee_id_length_bounds() {
    assert!(validate_employee_id("EMP").is_ok());
    assert!(validate_employee_id("  EMP001  ").is_ok());
    assert_eq!(
      validate_employee_id("AB"),
      Err(PolicyError::EmployeeIdLength)
    );
    assert_eq!(
      validate_employee_id(&"X".repeat(21)),
      Err(PolicyError::EmployeeIdLength)
    );
  }

  #[test]
  fn standard_plates_accepted() {
    assert!(validate_vehicle_number("KA01AB1234").is_ok());
    assert!(validate_vehicle_number("ka-01-ab-1234").is_ok());
    assert!(validate_vehicle_number("MH 12 EV 4321").is_ok());
    assert!(validate_vehicle_number("DL05TP0001").is_ok());
  }

  #[test]
  fn bharat_series_accepted() {
    assert!(validate_vehicle_number("23BH1234AB").is_ok());
    assert!(validate_vehicle_number("23 BH 1234 ab").is_ok());
  }

  #[test]
  fn malformed_plates_rejected() {
    assert_eq!(
      validate_vehicle_number(""),
      Err(PolicyError::InvalidVehicleNumber)
    );
    assert_eq!(
      validate_vehicle_number("KA1AB1234"),
      Err(PolicyError::InvalidVehicleNumber)
    );
    assert_eq!(
      validate_vehicle_number("1234KAAB"),
      Err(PolicyError::InvalidVehicleNumber)
    );
  }

  #[test]
  fn seat_ceiling_by_vehicle() {
    assert!(validate_seat_count(VehicleType::Car, 1).is_ok());
    assert!(validate_seat_count(VehicleType::Car, 6).is_ok());
    assert_eq!(
      validate_seat_count(VehicleType::Car, 7),
      Err(PolicyError::TooManySeats { max: 6 })
    );
    assert!(validate_seat_count(VehicleType::Bike, 1).is_ok());
    assert_eq!(
      validate_seat_count(VehicleType::Bike, 2),
      Err(PolicyError::TooManySeats { max: 1 })
    );
    assert_eq!(
      validate_seat_count(VehicleType::Car, 0),
      Err(PolicyError::NoSeats)
    );
  }

  #[test]
  fn cannot_book_own_offer() {
    let offer = offer_by("EMP001");
    assert_eq!(
      validate_booking_request(&offer, "EMP001", false),
      Err(PolicyError::OwnRide)
    );
  }

  #[test]
  fn duplicate_booking_rejected() {
    let offer = offer_by("EMP001");
    assert_eq!(
      validate_booking_request(&offer, "EMP002", true),
      Err(PolicyError::AlreadyBooked)
    );
    assert!(validate_booking_request(&offer, "EMP002", false).is_ok());
  }
}
