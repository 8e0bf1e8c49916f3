//! 3D Cartesian vectors on the unit sphere.

use crate::latlng::LatLng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 3D floating-point vector.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec3d {
  /// X component.
  pub x: f64,
  /// Y component.
  pub y: f64,
  /// Z component.
  pub z: f64,
}

impl Vec3d {
  pub(crate) const fn new(x: f64, y: f64, z: f64) -> Self {
    Self { x, y, z }
  }

  /// Squared Euclidean distance to another point.
  pub(crate) fn square_dist(&self, other: &Vec3d) -> f64 {
    let dx = self.x - other.x;
    let dy = self.y - other.y;
    let dz = self.z - other.z;
    dx * dx + dy * dy + dz * dz
  }
}

/// Projects a spherical coordinate onto the unit sphere in 3-space.
pub(crate) fn geo_to_vec3d(geo: &LatLng) -> Vec3d {
  let r = geo.lat.cos();
  Vec3d::new(geo.lng.cos() * r, geo.lng.sin() * r, geo.lat.sin())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn square_dist() {
    let origin = Vec3d::default();
    let unit_x = Vec3d::new(1.0, 0.0, 0.0);
    assert!((origin.square_dist(&unit_x) - 1.0).abs() < f64::EPSILON);
    assert_eq!(origin.square_dist(&origin), 0.0);
  }

  #[test]
  fn geo_to_vec3d_poles_and_equator() {
    let north = geo_to_vec3d(&LatLng {
      lat: std::f64::consts::FRAC_PI_2,
      lng: 0.0,
    });
    assert!((north.z - 1.0).abs() < 1e-15);
    assert!(north.x.abs() < 1e-15);

    let equator = geo_to_vec3d(&LatLng { lat: 0.0, lng: 0.0 });
    assert!((equator.x - 1.0).abs() < 1e-15);
    assert!(equator.z.abs() < 1e-15);
  }
}
