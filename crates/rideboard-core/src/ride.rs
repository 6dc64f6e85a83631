//! Ride offer types — the fundamental unit of the carpool board.
//!
//! An offer is immutable once published except for its vacant-seat count,
//! which the store decrements as bookings succeed. Offers are never deleted.

use serde::{Deserialize, Serialize};

/// The vehicle an offer is made with. Determines the seat-capacity ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
  Bike,
  Car,
}

impl VehicleType {
  /// Maximum seats that may be offered with this vehicle.
  ///
  /// This ceiling is collaborator policy (see `rideboard-query::policy`);
  /// the store itself never checks it.
  pub fn max_seats(self) -> u32 {
    match self {
      Self::Bike => 1,
      Self::Car => 6,
    }
  }
}

/// A published trip with vehicle and seat capacity.
///
/// `time`, `pickup_point`, and `destination` are opaque descriptive strings;
/// the store never interprets them. Serialized field names are camelCase so
/// persisted payloads match the original browser-storage format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RideOffer {
  /// Opaque unique identifier, assigned at creation, immutable.
  pub id:             String,
  /// The offering employee. At most one active offer per employee is a
  /// collaborator business rule, not a data-model constraint.
  pub employee_id:    String,
  pub vehicle_type:   VehicleType,
  /// Free-form registration plate string; format is validated upstream.
  pub vehicle_number: String,
  /// Remaining unbooked capacity. Decremented by successful bookings and
  /// never allowed to go negative.
  pub vacant_seats:   u32,
  pub time:           String,
  pub pickup_point:   String,
  pub destination:    String,
}

impl RideOffer {
  /// Display form of the route, e.g. `"Koramangala to Whitefield"`.
  /// Also one of the fields covered by free-text search.
  pub fn route_description(&self) -> String {
    format!("{} to {}", self.pickup_point, self.destination)
  }
}

/// A ride offer as submitted by a collaborator — everything but the id,
/// which the store assigns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRideOffer {
  pub employee_id:    String,
  pub vehicle_type:   VehicleType,
  pub vehicle_number: String,
  pub vacant_seats:   u32,
  pub time:           String,
  pub pickup_point:   String,
  pub destination:    String,
}

impl NewRideOffer {
  /// Attach a freshly assigned id, producing the persisted form.
  pub fn into_offer(self, id: String) -> RideOffer {
    RideOffer {
      id,
      employee_id:    self.employee_id,
      vehicle_type:   self.vehicle_type,
      vehicle_number: self.vehicle_number,
      vacant_seats:   self.vacant_seats,
      time:           self.time,
      pickup_point:   self.pickup_point,
      destination:    self.destination,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn max_seats_by_vehicle() {
    assert_eq!(VehicleType::Bike.max_seats(), 1);
    assert_eq!(VehicleType::Car.max_seats(), 6);
  }

  #[test]
  fn offer_serializes_camel_case() {
    let offer = RideOffer {
      id:             "abc1234".into(),
      employee_id:    "EMP001".into(),
      vehicle_type:   VehicleType::Car,
      vehicle_number: "KA01AB1234".into(),
      vacant_seats:   4,
      time:           "09:00".into(),
      pickup_point:   "Koramangala".into(),
      destination:    "Whitefield".into(),
    };

    let json = serde_json::to_value(&offer).unwrap();
    assert_eq!(json["employeeId"], "EMP001");
    assert_eq!(json["vehicleType"], "car");
    assert_eq!(json["vacantSeats"], 4);
    assert_eq!(json["pickupPoint"], "Koramangala");
  }

  #[test]
  fn route_description_joins_endpoints() {
    let offer = RideOffer {
      id:             "x".into(),
      employee_id:    "e".into(),
      vehicle_type:   VehicleType::Bike,
      vehicle_number: "n".into(),
      vacant_seats:   1,
      time:           "08:00".into(),
      pickup_point:   "HSR Layout".into(),
      destination:    "MG Road".into(),
    };
    assert_eq!(offer.route_description(), "HSR Layout to MG Road");
  }
}
