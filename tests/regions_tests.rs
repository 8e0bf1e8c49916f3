//! Polygon fill and outline extraction behavior.

use icosahex::{
  cell_to_lat_lng, cells_to_multi_polygon, degs_to_rads, grid_disk, lat_lng_to_cell, max_polygon_to_cells_size,
  polygon_to_cells, GeoLoop, GeoPolygon, H3Index, LatLng,
};
use std::collections::HashSet;

fn geo_degs(lat: f64, lng: f64) -> LatLng {
  LatLng {
    lat: degs_to_rads(lat),
    lng: degs_to_rads(lng),
  }
}

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
fn sf_fill_golden_count() {
  let cells = polygon_to_cells(&sf_polygon(), 9).unwrap();
  assert_eq!(cells.len(), 1253);
}

#[test]
fn fill_respects_estimate_and_uniqueness() {
  for res in [6, 7, 8] {
    let cells = polygon_to_cells(&sf_polygon(), res).unwrap();
    let estimate = max_polygon_to_cells_size(&sf_polygon(), res).unwrap();
    assert!((cells.len() as i64) <= estimate, "res {res}");
    let unique: HashSet<_> = cells.iter().collect();
    assert_eq!(unique.len(), cells.len(), "res {res}");
    for cell in &cells {
      assert_eq!(cell.resolution(), res);
    }
  }
}

#[test]
fn adjacent_polygons_fill_disjoint_sets() {
  // Two rectangles sharing an edge: center containment means no cell lands
  // in both.
  let left = GeoPolygon {
    outer: GeoLoop {
      verts: vec![
        geo_degs(37.80, -122.47),
        geo_degs(37.73, -122.47),
        geo_degs(37.73, -122.43),
        geo_degs(37.80, -122.43),
      ],
    },
    holes: Vec::new(),
  };
  let right = GeoPolygon {
    outer: GeoLoop {
      verts: vec![
        geo_degs(37.80, -122.43),
        geo_degs(37.73, -122.43),
        geo_degs(37.73, -122.39),
        geo_degs(37.80, -122.39),
      ],
    },
    holes: Vec::new(),
  };
  let left_cells: HashSet<H3Index> = polygon_to_cells(&left, 9).unwrap().into_iter().collect();
  let right_cells: HashSet<H3Index> = polygon_to_cells(&right, 9).unwrap().into_iter().collect();
  assert!(!left_cells.is_empty() && !right_cells.is_empty());
  assert!(left_cells.is_disjoint(&right_cells));
}

#[test]
fn outline_of_fill_refills_identically() {
  let res = 8;
  let mut filled = polygon_to_cells(&sf_polygon(), res).unwrap();
  let outline = cells_to_multi_polygon(&filled).unwrap();
  assert_eq!(outline.len(), 1, "contiguous fill outlines to one polygon");

  let mut refilled = polygon_to_cells(&outline[0], res).unwrap();
  filled.sort_unstable();
  refilled.sort_unstable();
  assert_eq!(filled, refilled);
}

#[test]
fn outline_covers_all_cell_centers() {
  let cells = grid_disk(lat_lng_to_cell(&geo_degs(37.77, -122.42), 7).unwrap(), 2).unwrap();
  let outline = cells_to_multi_polygon(&cells).unwrap();
  assert_eq!(outline.len(), 1);
  let bboxes = outline[0].bboxes();
  for cell in &cells {
    let center = cell_to_lat_lng(*cell).unwrap();
    assert!(outline[0].contains(&bboxes, &center), "cell {cell}");
  }
}
