//! Geographic bounding boxes.

use crate::error::HexError;
use crate::index::H3Index;
use crate::indexing::{cell_to_boundary, cell_to_lat_lng, lat_lng_to_cell};
use crate::latlng::{constrain_lng, great_circle_distance_km, LatLng};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Geographic bounding box in radians. `east < west` marks a box crossing
/// the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BBox {
  /// North latitude.
  pub north: f64,
  /// South latitude.
  pub south: f64,
  /// East longitude.
  pub east: f64,
  /// West longitude.
  pub west: f64,
}

impl BBox {
  /// Whether the box crosses the antimeridian.
  #[must_use]
  pub fn is_transmeridian(&self) -> bool {
    self.east < self.west
  }

  /// Center point of the box, handling the antimeridian crossing.
  #[must_use]
  pub fn center(&self) -> LatLng {
    let east = if self.is_transmeridian() {
      self.east + 2.0 * PI
    } else {
      self.east
    };
    LatLng {
      lat: (self.north + self.south) / 2.0,
      lng: constrain_lng((east + self.west) / 2.0),
    }
  }

  /// Whether the box contains the point.
  #[must_use]
  pub fn contains(&self, point: &LatLng) -> bool {
    point.lat >= self.south
      && point.lat <= self.north
      && if self.is_transmeridian() {
        point.lng >= self.west || point.lng <= self.east
      } else {
        point.lng >= self.west && point.lng <= self.east
      }
  }
}

/// Radius of the cell in kilometers, measured from its center to its first
/// boundary vertex.
fn cell_radius_km(cell: H3Index) -> Result<f64, HexError> {
  let center = cell_to_lat_lng(cell)?;
  let boundary = cell_to_boundary(cell)?;
  Ok(great_circle_distance_km(&center, &boundary.verts[0]))
}

/// Upper-bound estimate of the number of cells at `res` needed to cover the
/// box.
///
/// The box area is derived from its geodesic diagonal and side ratio, then
/// divided by the most-distorted (pentagon-adjacent) cell area.
pub(crate) fn bbox_hex_estimate(bbox: &BBox, res: i32) -> Result<i64, HexError> {
  // The pentagon has the most distortion (smallest edges), and shares its
  // edges with hexagons; shrink its regular-hexagon area by a further 20%.
  let pentagons = crate::index::inspection::get_pentagons(res)?;
  let pentagon_radius_km = cell_radius_km(pentagons[0])?;
  let pentagon_area_km2 = 0.8 * (2.598_076_211_35 * pentagon_radius_km * pentagon_radius_km);

  let p1 = LatLng {
    lat: bbox.north,
    lng: bbox.east,
  };
  let p2 = LatLng {
    lat: bbox.south,
    lng: bbox.west,
  };
  let d = great_circle_distance_km(&p1, &p2);

  // Treat the geodesic diagonal as the diagonal of a planar rectangle with
  // the box's side ratio.
  let lat_diff = (p1.lat - p2.lat).abs();
  let lng_diff = (p1.lng - p2.lng).abs();
  if lat_diff == 0.0 || lng_diff == 0.0 {
    return Ok(1);
  }
  let ratio = lat_diff / lng_diff;
  let area_km2 = d * d * ratio / (1.0 + ratio * ratio);

  let estimate = (area_km2 / pentagon_area_km2).ceil() as i64;
  Ok(estimate.max(1))
}

/// Radius in grid steps of a disk around the box's center cell guaranteed to
/// cover the box at resolution `res`.
pub(crate) fn bbox_hex_radius(bbox: &BBox, res: i32) -> Result<i32, HexError> {
  let center = bbox.center();

  // Use a vertex on the side closest to the equator, for the longest radius
  // under distortion; east versus west is arbitrary.
  let lat = if bbox.north.abs() > bbox.south.abs() {
    bbox.south
  } else {
    bbox.north
  };
  let vertex = LatLng { lat, lng: bbox.east };
  let bbox_radius_km = great_circle_distance_km(&center, &vertex);

  let center_hex_radius_km = cell_radius_km(lat_lng_to_cell(&center, res)?)?;

  // The closest point along a hexagon drawn through the center points of a
  // disk aggregation is exactly 1.5 edge lengths out.
  Ok((bbox_radius_km / (1.5 * center_hex_radius_km)).ceil() as i32 + 1)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::latlng::degs_to_rads;

  fn bbox_degs(north: f64, south: f64, east: f64, west: f64) -> BBox {
    BBox {
      north: degs_to_rads(north),
      south: degs_to_rads(south),
      east: degs_to_rads(east),
      west: degs_to_rads(west),
    }
  }

  #[test]
  fn contains_and_center() {
    let bbox = bbox_degs(10.0, 0.0, 20.0, 0.0);
    assert!(!bbox.is_transmeridian());
    assert!(bbox.contains(&LatLng {
      lat: degs_to_rads(5.0),
      lng: degs_to_rads(10.0)
    }));
    assert!(!bbox.contains(&LatLng {
      lat: degs_to_rads(-5.0),
      lng: degs_to_rads(10.0)
    }));
    let center = bbox.center();
    assert!((center.lat - degs_to_rads(5.0)).abs() < 1e-12);
    assert!((center.lng - degs_to_rads(10.0)).abs() < 1e-12);
  }

  #[test]
  fn transmeridian_box() {
    let bbox = bbox_degs(10.0, -10.0, -170.0, 170.0);
    assert!(bbox.is_transmeridian());
    assert!(bbox.contains(&LatLng {
      lat: 0.0,
      lng: degs_to_rads(175.0)
    }));
    assert!(bbox.contains(&LatLng {
      lat: 0.0,
      lng: degs_to_rads(-175.0)
    }));
    assert!(!bbox.contains(&LatLng { lat: 0.0, lng: 0.0 }));
    let center = bbox.center();
    assert!(center.lng.abs() > degs_to_rads(179.0), "center near antimeridian");
  }

  #[test]
  fn hex_estimate_scales_with_resolution() {
    let bbox = bbox_degs(38.0, 37.0, -121.0, -123.0);
    let coarse = bbox_hex_estimate(&bbox, 3).unwrap();
    let fine = bbox_hex_estimate(&bbox, 5).unwrap();
    assert!(coarse >= 1);
    assert!(fine > coarse * 10, "{fine} vs {coarse}");
  }

  #[test]
  fn hex_radius_covers_box() {
    let bbox = bbox_degs(37.9, 37.7, -122.3, -122.6);
    for res in [3, 5, 7] {
      let k = bbox_hex_radius(&bbox, res).unwrap();
      assert!(k >= 1, "res {res}");
      // The corner must lie within k grid steps of the center cell.
      let center_cell = lat_lng_to_cell(&bbox.center(), res).unwrap();
      let corner_cell = lat_lng_to_cell(
        &LatLng {
          lat: bbox.north,
          lng: bbox.east,
        },
        res,
      )
      .unwrap();
      let d = crate::local_ij::grid_distance(center_cell, corner_cell).unwrap();
      assert!(d <= i64::from(k), "res {res}: distance {d} > k {k}");
    }
  }

  #[test]
  fn degenerate_box_estimates_one() {
    let bbox = bbox_degs(37.0, 37.0, -122.0, -122.0);
    assert_eq!(bbox_hex_estimate(&bbox, 5).unwrap(), 1);
  }
}
