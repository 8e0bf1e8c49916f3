//! Filling a polygon with cells.

use crate::bbox::{bbox_hex_estimate, bbox_hex_radius};
use crate::constants::MAX_RESOLUTION;
use crate::error::HexError;
use crate::index::H3Index;
use crate::indexing::{cell_to_lat_lng, lat_lng_to_cell};
use crate::polygon::GeoPolygon;
use crate::traversal::rings::grid_disk;
use tracing::debug;

/// Upper bound on the number of cells `polygon_to_cells` can return for the
/// given polygon and resolution.
pub fn max_polygon_to_cells_size(polygon: &GeoPolygon, res: i32) -> Result<i64, HexError> {
  if !(0..=MAX_RESOLUTION).contains(&res) {
    return Err(HexError::ResDomain);
  }
  if polygon.outer.verts.is_empty() {
    return Ok(0);
  }
  bbox_hex_estimate(&polygon.outer.bbox(), res)
}

/// The cells whose centers are contained in the polygon, at resolution `res`.
///
/// Candidates come from a disk around the bounding box's center cell, sized
/// so the disk is guaranteed to cover the box; each candidate center is then
/// tested with ray casting against the outer loop and every hole. Two
/// adjacent polygons with zero overlap therefore fill to disjoint cell sets.
pub fn polygon_to_cells(polygon: &GeoPolygon, res: i32) -> Result<Vec<H3Index>, HexError> {
  if !(0..=MAX_RESOLUTION).contains(&res) {
    return Err(HexError::ResDomain);
  }
  if polygon.outer.verts.is_empty() {
    return Ok(Vec::new());
  }

  let bboxes = polygon.bboxes();
  let k = bbox_hex_radius(&bboxes[0], res)?;
  let center_cell = lat_lng_to_cell(&bboxes[0].center(), res)?;

  let candidates = grid_disk(center_cell, k)?;
  debug!(res, k, candidates = candidates.len(), "polygon fill candidate disk");

  let mut out = Vec::new();
  for cell in candidates {
    let center = cell_to_lat_lng(cell)?;
    if polygon.contains(&bboxes, &center) {
      out.push(cell);
    }
  }
  Ok(out)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::latlng::{degs_to_rads, LatLng};
  use crate::polygon::GeoLoop;
  use std::collections::HashSet;

  fn geo_degs(lat: f64, lng: f64) -> LatLng {
    LatLng {
      lat: degs_to_rads(lat),
      lng: degs_to_rads(lng),
    }
  }

  /// A convex hexagonal area around San Francisco.
  fn sf_polygon() -> GeoPolygon {
    GeoPolygon {
      outer: GeoLoop {
        verts: vec![
          geo_degs(37.813_318_999_983_238, -122.409_290_778_795_8),
          geo_degs(37.789_335_713_575_16, -122.391_034_633_232_64),
          geo_degs(37.719_806_183_425_66, -122.387_153_962_924_4),
          geo_degs(37.694_753_759_430_27, -122.444_284_343_487_5),
          geo_degs(37.719_806_183_425_66, -122.511_570_512_793_95),
          geo_degs(37.783_587_370_854_82, -122.513_454_528_833_47),
        ],
      },
      holes: Vec::new(),
    }
  }

  #[test]
  fn fills_expected_count() {
    let cells = polygon_to_cells(&sf_polygon(), 9).unwrap();
    // Golden value for this polygon at res 9.
    assert_eq!(cells.len(), 1253);
    let unique: HashSet<_> = cells.iter().collect();
    assert_eq!(unique.len(), cells.len());
  }

  #[test]
  fn fill_is_within_estimate() {
    let polygon = sf_polygon();
    for res in [7, 8, 9] {
      let cells = polygon_to_cells(&polygon, res).unwrap();
      let estimate = max_polygon_to_cells_size(&polygon, res).unwrap();
      assert!(
        (cells.len() as i64) <= estimate,
        "res {res}: {} > {estimate}",
        cells.len()
      );
      assert!(!cells.is_empty(), "res {res}");
    }
  }

  #[test]
  fn all_cell_centers_inside() {
    let polygon = sf_polygon();
    let bboxes = polygon.bboxes();
    for cell in polygon_to_cells(&polygon, 8).unwrap() {
      let center = cell_to_lat_lng(cell).unwrap();
      assert!(polygon.contains(&bboxes, &center));
    }
  }

  #[test]
  fn hole_excludes_cells() {
    let mut polygon = sf_polygon();
    let full = polygon_to_cells(&polygon, 9).unwrap();
    polygon.holes.push(GeoLoop {
      verts: vec![
        geo_degs(37.7671, -122.4274),
        geo_degs(37.7571, -122.4327),
        geo_degs(37.7528, -122.4215),
        geo_degs(37.7625, -122.4193),
      ],
    });
    let with_hole = polygon_to_cells(&polygon, 9).unwrap();
    assert!(with_hole.len() < full.len());
    let full_set: HashSet<_> = full.into_iter().collect();
    assert!(with_hole.iter().all(|c| full_set.contains(c)));
  }

  #[test]
  fn empty_polygon_fills_nothing() {
    let empty = GeoPolygon::default();
    assert_eq!(polygon_to_cells(&empty, 9).unwrap(), Vec::new());
    assert_eq!(max_polygon_to_cells_size(&empty, 9).unwrap(), 0);
  }

  #[test]
  fn res_domain_checked() {
    assert_eq!(polygon_to_cells(&sf_polygon(), 16), Err(HexError::ResDomain));
  }
}
