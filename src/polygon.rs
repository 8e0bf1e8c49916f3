//! Polygon containment primitives: loops, bounding boxes, ray casting, and
//! winding, all with antimeridian handling.

use crate::bbox::BBox;
use crate::latlng::LatLng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A single closed loop of geographic vertices. The last vertex connects
/// implicitly back to the first.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoLoop {
  /// Ordered vertices in radians.
  pub verts: Vec<LatLng>,
}

/// A polygon with an outer loop and zero or more hole loops, mirroring
/// GeoJSON `Polygon` semantics.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPolygon {
  /// The outer boundary.
  pub outer: GeoLoop,
  /// Hole loops contained in the outer boundary.
  pub holes: Vec<GeoLoop>,
}

/// A list of polygons, outer loop first and holes following within each,
/// mirroring GeoJSON `MultiPolygon` loop ordering.
pub type MultiPolygon = Vec<GeoPolygon>;

/// Normalizes a longitude eastward for comparisons spanning the
/// antimeridian.
fn normalize_lng(lng: f64, is_transmeridian: bool) -> f64 {
  if is_transmeridian && lng < 0.0 {
    lng + 2.0 * PI
  } else {
    lng
  }
}

impl GeoLoop {
  /// Bounding box of the loop, detecting arcs longer than 180° of longitude
  /// as antimeridian crossings.
  #[must_use]
  pub fn bbox(&self) -> BBox {
    if self.verts.is_empty() {
      return BBox::default();
    }

    let mut bbox = BBox {
      south: f64::MAX,
      west: f64::MAX,
      north: -f64::MAX,
      east: -f64::MAX,
    };
    let mut min_pos_lng = f64::MAX;
    let mut max_neg_lng = -f64::MAX;
    let mut is_transmeridian = false;

    for (i, coord) in self.verts.iter().enumerate() {
      let next = &self.verts[(i + 1) % self.verts.len()];
      bbox.south = bbox.south.min(coord.lat);
      bbox.west = bbox.west.min(coord.lng);
      bbox.north = bbox.north.max(coord.lat);
      bbox.east = bbox.east.max(coord.lng);
      if coord.lng > 0.0 && coord.lng < min_pos_lng {
        min_pos_lng = coord.lng;
      }
      if coord.lng < 0.0 && coord.lng > max_neg_lng {
        max_neg_lng = coord.lng;
      }
      if (coord.lng - next.lng).abs() > PI {
        is_transmeridian = true;
      }
    }

    if is_transmeridian {
      bbox.east = max_neg_lng;
      bbox.west = min_pos_lng;
    }
    bbox
  }

  /// Ray-casting containment test against the pre-computed `bbox`.
  ///
  /// Rays are cast in the longitudinal direction; ties on a vertex longitude
  /// are biased westerly.
  #[must_use]
  pub fn contains(&self, bbox: &BBox, coord: &LatLng) -> bool {
    if !bbox.contains(coord) {
      return false;
    }

    let is_transmeridian = bbox.is_transmeridian();
    let mut contains = false;

    let lat = coord.lat;
    let mut lng = normalize_lng(coord.lng, is_transmeridian);

    for (i, v) in self.verts.iter().enumerate() {
      let mut a = *v;
      let mut b = self.verts[(i + 1) % self.verts.len()];

      // The ray intersection needs the second endpoint to be the higher one.
      if a.lat > b.lat {
        std::mem::swap(&mut a, &mut b);
      }
      if lat < a.lat || lat > b.lat {
        continue;
      }

      let a_lng = normalize_lng(a.lng, is_transmeridian);
      let b_lng = normalize_lng(b.lng, is_transmeridian);

      if a_lng == lng || b_lng == lng {
        lng -= f64::EPSILON;
      }

      // Longitude of the edge at the ray's latitude.
      let ratio = (lat - a.lat) / (b.lat - a.lat);
      let test_lng = normalize_lng(a_lng + (b_lng - a_lng) * ratio, is_transmeridian);
      if test_lng > lng {
        contains = !contains;
      }
    }
    contains
  }

  /// Whether the loop winds clockwise (holes wind clockwise in normalized
  /// output).
  #[must_use]
  pub fn is_clockwise(&self) -> bool {
    self.is_clockwise_normalized(false)
  }

  fn is_clockwise_normalized(&self, is_transmeridian: bool) -> bool {
    let mut sum = 0.0;
    for (i, a) in self.verts.iter().enumerate() {
      let b = &self.verts[(i + 1) % self.verts.len()];
      // An arc over 180° of longitude means the loop crosses the
      // antimeridian; start over with normalization on.
      if !is_transmeridian && (a.lng - b.lng).abs() > PI {
        return self.is_clockwise_normalized(true);
      }
      sum += (normalize_lng(b.lng, is_transmeridian) - normalize_lng(a.lng, is_transmeridian)) * (b.lat + a.lat);
    }
    sum > 0.0
  }
}

impl GeoPolygon {
  /// Bounding boxes of the outer loop and each hole, outer first.
  #[must_use]
  pub fn bboxes(&self) -> Vec<BBox> {
    let mut out = Vec::with_capacity(1 + self.holes.len());
    out.push(self.outer.bbox());
    out.extend(self.holes.iter().map(GeoLoop::bbox));
    out
  }

  /// Whether the point is inside the outer loop and outside every hole.
  #[must_use]
  pub fn contains(&self, bboxes: &[BBox], coord: &LatLng) -> bool {
    if !self.outer.contains(&bboxes[0], coord) {
      return false;
    }
    for (i, hole) in self.holes.iter().enumerate() {
      if hole.contains(&bboxes[i + 1], coord) {
        return false;
      }
    }
    true
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::latlng::degs_to_rads;

  fn geo_degs(lat: f64, lng: f64) -> LatLng {
    LatLng {
      lat: degs_to_rads(lat),
      lng: degs_to_rads(lng),
    }
  }

  fn square_ccw() -> GeoLoop {
    GeoLoop {
      verts: vec![
        geo_degs(0.0, 0.0),
        geo_degs(0.0, 10.0),
        geo_degs(10.0, 10.0),
        geo_degs(10.0, 0.0),
      ],
    }
  }

  #[test]
  fn bbox_of_square() {
    let bbox = square_ccw().bbox();
    assert!((bbox.north - degs_to_rads(10.0)).abs() < 1e-12);
    assert!((bbox.south).abs() < 1e-12);
    assert!((bbox.east - degs_to_rads(10.0)).abs() < 1e-12);
    assert!((bbox.west).abs() < 1e-12);
  }

  #[test]
  fn containment() {
    let sq = square_ccw();
    let bbox = sq.bbox();
    assert!(sq.contains(&bbox, &geo_degs(5.0, 5.0)));
    assert!(!sq.contains(&bbox, &geo_degs(15.0, 5.0)));
    assert!(!sq.contains(&bbox, &geo_degs(5.0, -5.0)));
  }

  #[test]
  fn winding() {
    let ccw = square_ccw();
    assert!(!ccw.is_clockwise());
    let cw = GeoLoop {
      verts: ccw.verts.iter().rev().copied().collect(),
    };
    assert!(cw.is_clockwise());
  }

  #[test]
  fn transmeridian_loop() {
    let sq = GeoLoop {
      verts: vec![
        geo_degs(-5.0, 175.0),
        geo_degs(-5.0, -175.0),
        geo_degs(5.0, -175.0),
        geo_degs(5.0, 175.0),
      ],
    };
    let bbox = sq.bbox();
    assert!(bbox.is_transmeridian());
    assert!(sq.contains(&bbox, &geo_degs(0.0, 179.0)));
    assert!(sq.contains(&bbox, &geo_degs(0.0, -179.0)));
    assert!(!sq.contains(&bbox, &geo_degs(0.0, 0.0)));
  }

  #[test]
  fn polygon_with_hole() {
    let polygon = GeoPolygon {
      outer: square_ccw(),
      holes: vec![GeoLoop {
        verts: vec![
          geo_degs(4.0, 4.0),
          geo_degs(4.0, 6.0),
          geo_degs(6.0, 6.0),
          geo_degs(6.0, 4.0),
        ],
      }],
    };
    let bboxes = polygon.bboxes();
    assert_eq!(bboxes.len(), 2);
    assert!(polygon.contains(&bboxes, &geo_degs(2.0, 2.0)));
    assert!(!polygon.contains(&bboxes, &geo_degs(5.0, 5.0)), "inside hole");
    assert!(!polygon.contains(&bboxes, &geo_degs(11.0, 5.0)), "outside outer");
  }
}
