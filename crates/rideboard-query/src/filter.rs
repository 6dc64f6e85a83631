//! Pure ride filters, composed by conjunction.

use rideboard_core::{RideOffer, VehicleType};

use crate::time;

/// How far either side of the reference time a departure may fall.
const WINDOW_MINUTES: i64 = 60;

/// Vehicle-type filter selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VehicleFilter {
  #[default]
  All,
  Bike,
  Car,
}

impl VehicleFilter {
  pub fn matches(self, vehicle: VehicleType) -> bool {
    match self {
      Self::All => true,
      Self::Bike => vehicle == VehicleType::Bike,
      Self::Car => vehicle == VehicleType::Car,
    }
  }
}

/// A composed ride filter. All active constraints must pass.
///
/// Note the long-standing quirk of the time window, preserved from the
/// original board deliberately (see `reference_time`): a query with no
/// reference time matches NO rides, so the `Default` query is empty rather
/// than all-inclusive.
#[derive(Debug, Clone, Default)]
pub struct RideQuery {
  pub vehicle:        VehicleFilter,
  /// Case-insensitive substring, matched against pickup point, destination,
  /// offer id, and the rendered route description. Blank means no
  /// constraint.
  pub text:           Option<String>,
  /// 24-hour `"HH:MM"` reference for the ±60-minute departure window.
  ///
  /// When `None`, the window excludes every ride — the original UI falls
  /// through to exclusion instead of returning a match, and that behavior
  /// is kept (and pinned by test) rather than silently corrected. A present
  /// but unparseable reference passes everything, which is likewise
  /// inherited.
  pub reference_time: Option<String>,
}

impl RideQuery {
  pub fn matches(&self, ride: &RideOffer) -> bool {
    if !self.vehicle.matches(ride.vehicle_type) {
      return false;
    }
    if let Some(query) = self.text.as_deref()
      && !query.trim().is_empty()
      && !matches_text(ride, query)
    {
      return false;
    }
    matches_window(ride, self.reference_time.as_deref())
  }

  /// Filter a snapshot, preserving order.
  pub fn apply(&self, rides: &[RideOffer]) -> Vec<RideOffer> {
    rides.iter().filter(|r| self.matches(r)).cloned().collect()
  }
}

/// Case-insensitive substring search over the offer's searchable fields.
/// Any single hit is a match.
pub fn matches_text(ride: &RideOffer, query: &str) -> bool {
  let query = query.trim().to_lowercase();
  [
    ride.pickup_point.to_lowercase(),
    ride.destination.to_lowercase(),
    ride.id.to_lowercase(),
    ride.route_description().to_lowercase(),
  ]
  .iter()
  .any(|field| field.contains(query.as_str()))
}

fn matches_window(ride: &RideOffer, reference_time: Option<&str>) -> bool {
  // No selected time: nothing matches. Inherited fall-through, kept.
  // A blank reference counts as unselected, same as the original's empty
  // time-input string.
  let reference_time = reference_time.filter(|t| !t.trim().is_empty());
  let Some(reference_time) = reference_time else {
    return false;
  };
  let Some(reference) = time::parse_hhmm(reference_time) else {
    return true;
  };
  let Some(departure) = time::parse_hhmm(&ride.time) else {
    return true;
  };
  (i64::from(departure) - i64::from(reference)).abs() <= WINDOW_MINUTES
}
