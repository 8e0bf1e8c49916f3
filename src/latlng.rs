//! Spherical coordinates and great-circle math.

use crate::constants::{EARTH_RADIUS_KM, EPSILON, EPSILON_RAD, MAX_CELL_BNDRY_VERTS};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

const M_2PI: f64 = 2.0 * PI;
const M_PI_2: f64 = PI / 2.0;

/// Latitude/longitude pair in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatLng {
  /// Latitude in radians.
  pub lat: f64,
  /// Longitude in radians.
  pub lng: f64,
}

/// The boundary of a cell as an ordered, counter-clockwise vertex list.
///
/// Hexagons have 6 vertices and pentagons 5; Class III cells gain up to 4
/// extra vertices where an edge crosses an icosahedron face edge, bounded by
/// [`MAX_CELL_BNDRY_VERTS`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellBoundary {
  /// Number of significant entries in `verts`.
  pub num_verts: usize,
  /// Vertex storage; entries past `num_verts` are meaningless.
  pub verts: [LatLng; MAX_CELL_BNDRY_VERTS],
}

impl Default for CellBoundary {
  fn default() -> Self {
    Self {
      num_verts: 0,
      verts: [LatLng::default(); MAX_CELL_BNDRY_VERTS],
    }
  }
}

impl CellBoundary {
  /// The significant vertices as a slice.
  #[must_use]
  pub fn verts(&self) -> &[LatLng] {
    &self.verts[..self.num_verts]
  }

  pub(crate) fn push(&mut self, v: LatLng) {
    if self.num_verts < MAX_CELL_BNDRY_VERTS {
      self.verts[self.num_verts] = v;
      self.num_verts += 1;
    }
  }
}

/// Converts degrees to radians.
#[must_use]
pub fn degs_to_rads(degrees: f64) -> f64 {
  degrees * PI / 180.0
}

/// Converts radians to degrees.
#[must_use]
pub fn rads_to_degs(radians: f64) -> f64 {
  radians * 180.0 / PI
}

/// Constrains longitude to the range `[-pi, pi]`.
pub(crate) fn constrain_lng(mut lng: f64) -> f64 {
  while lng > PI {
    lng -= M_2PI;
  }
  while lng < -PI {
    lng += M_2PI;
  }
  lng
}

/// Normalizes an angle to the range `[0, 2pi)`.
pub(crate) fn pos_angle_rads(rads: f64) -> f64 {
  let tmp = if rads < 0.0 { rads + M_2PI } else { rads };
  if rads >= M_2PI {
    tmp - M_2PI
  } else {
    tmp
  }
}

/// Whether two points are within `threshold` radians on both axes.
pub(crate) fn geo_almost_equal_threshold(p1: &LatLng, p2: &LatLng, threshold: f64) -> bool {
  (p1.lat - p2.lat).abs() < threshold && (p1.lng - p2.lng).abs() < threshold
}

/// Whether two points are indistinguishable at grid precision.
pub(crate) fn geo_almost_equal(p1: &LatLng, p2: &LatLng) -> bool {
  geo_almost_equal_threshold(p1, p2, EPSILON_RAD)
}

/// Azimuth from `p1` to `p2` in radians.
pub(crate) fn geo_azimuth_rads(p1: &LatLng, p2: &LatLng) -> f64 {
  (p2.lat.cos() * (p2.lng - p1.lng).sin())
    .atan2(p1.lat.cos() * p2.lat.sin() - p1.lat.sin() * p2.lat.cos() * (p2.lng - p1.lng).cos())
}

/// The point at the given azimuth and great-circle distance (radians) from
/// `p1`. Distances below grid precision return `p1` itself.
pub(crate) fn geo_az_distance_rads(p1: &LatLng, az: f64, distance: f64) -> LatLng {
  if distance < EPSILON {
    return *p1;
  }

  let az = pos_angle_rads(az);
  let mut p2 = LatLng::default();

  // Due-north and due-south azimuths move along the meridian.
  if az < EPSILON || (az - PI).abs() < EPSILON {
    if az < EPSILON {
      p2.lat = p1.lat + distance;
    } else {
      p2.lat = p1.lat - distance;
    }
    if (p2.lat - M_PI_2).abs() < EPSILON {
      p2.lat = M_PI_2;
      p2.lng = 0.0;
    } else if (p2.lat + M_PI_2).abs() < EPSILON {
      p2.lat = -M_PI_2;
      p2.lng = 0.0;
    } else {
      p2.lng = constrain_lng(p1.lng);
    }
  } else {
    let sinlat = (p1.lat.sin() * distance.cos() + p1.lat.cos() * distance.sin() * az.cos()).clamp(-1.0, 1.0);
    p2.lat = sinlat.asin();
    if (p2.lat - M_PI_2).abs() < EPSILON {
      p2.lat = M_PI_2;
      p2.lng = 0.0;
    } else if (p2.lat + M_PI_2).abs() < EPSILON {
      p2.lat = -M_PI_2;
      p2.lng = 0.0;
    } else {
      let sinlng = (az.sin() * distance.sin() / p2.lat.cos()).clamp(-1.0, 1.0);
      let coslng = ((distance.cos() - p1.lat.sin() * p2.lat.sin()) / p1.lat.cos() / p2.lat.cos()).clamp(-1.0, 1.0);
      p2.lng = constrain_lng(p1.lng + sinlng.atan2(coslng));
    }
  }
  p2
}

/// Great-circle distance between two points in radians (haversine).
#[must_use]
pub fn great_circle_distance_rads(a: &LatLng, b: &LatLng) -> f64 {
  let sin_lat = ((b.lat - a.lat) * 0.5).sin();
  let sin_lng = ((b.lng - a.lng) * 0.5).sin();
  let h = sin_lat * sin_lat + a.lat.cos() * b.lat.cos() * sin_lng * sin_lng;
  2.0 * h.sqrt().atan2((1.0 - h).max(0.0).sqrt())
}

/// Great-circle distance between two points in kilometers.
#[must_use]
pub fn great_circle_distance_km(a: &LatLng, b: &LatLng) -> f64 {
  great_circle_distance_rads(a, b) * EARTH_RADIUS_KM
}

/// Great-circle distance between two points in meters.
#[must_use]
pub fn great_circle_distance_m(a: &LatLng, b: &LatLng) -> f64 {
  great_circle_distance_km(a, b) * 1000.0
}

#[cfg(test)]
mod tests {
  use super::*;

  fn geo_degs(lat: f64, lng: f64) -> LatLng {
    LatLng {
      lat: degs_to_rads(lat),
      lng: degs_to_rads(lng),
    }
  }

  #[test]
  fn rads_degs_round_trip() {
    assert!((rads_to_degs(degs_to_rads(180.0)) - 180.0).abs() < 1e-12);
    assert!((degs_to_rads(90.0) - M_PI_2).abs() < 1e-15);
  }

  #[test]
  fn constrain_lng_wraps() {
    assert!((constrain_lng(PI + 1.0) - (1.0 - PI)).abs() < 1e-12);
    assert!((constrain_lng(-PI - 1.0) - (PI - 1.0)).abs() < 1e-12);
    assert_eq!(constrain_lng(0.0), 0.0);
  }

  #[test]
  fn pos_angle_normalizes() {
    assert!((pos_angle_rads(-0.1) - (M_2PI - 0.1)).abs() < 1e-12);
    assert!((pos_angle_rads(M_2PI + 0.5) - 0.5).abs() < 1e-12);
  }

  #[test]
  fn haversine_known_distance() {
    // Paris to London, roughly 344 km.
    let paris = geo_degs(48.8566, 2.3522);
    let london = geo_degs(51.5074, -0.1278);
    let d = great_circle_distance_km(&paris, &london);
    assert!((d - 343.5).abs() < 2.0, "got {d}");
  }

  #[test]
  fn azimuth_distance_round_trip() {
    let start = geo_degs(10.0, 20.0);
    let az = degs_to_rads(35.0);
    let dist = degs_to_rads(1.5);
    let end = geo_az_distance_rads(&start, az, dist);
    let back = great_circle_distance_rads(&start, &end);
    assert!((back - dist).abs() < 1e-9);
    let az_check = geo_azimuth_rads(&start, &end);
    assert!((pos_angle_rads(az_check) - az).abs() < 1e-6);
  }

  #[test]
  fn zero_distance_returns_start() {
    let start = geo_degs(-45.0, 120.0);
    let end = geo_az_distance_rads(&start, 1.0, 0.0);
    assert_eq!(start, end);
  }
}
