//! End-to-end coordinate/index conversion tests.

use icosahex::{
  cell_to_boundary, cell_to_lat_lng, degs_to_rads, get_base_cell_number, great_circle_distance_rads, lat_lng_to_cell,
  H3Index, HexError, LatLng, H3_NULL,
};

fn geo_degs(lat: f64, lng: f64) -> LatLng {
  LatLng {
    lat: degs_to_rads(lat),
    lng: degs_to_rads(lng),
  }
}

#[test]
fn san_francisco_golden_index() {
  let sf = geo_degs(37.7749, -122.4194);
  let cell = lat_lng_to_cell(&sf, 5).unwrap();
  assert_eq!(cell, H3Index(0x85283473fffffff));
  assert_eq!(cell.resolution(), 5);
  assert_eq!(get_base_cell_number(cell), 20);
  assert!(!cell.is_pentagon());
}

#[test]
fn index_text_round_trip() {
  let cell = H3Index(0x85283473fffffff);
  let text = cell.to_string();
  assert_eq!(text.len(), 16);
  assert_eq!(text, "085283473fffffff");
  assert_eq!(text.parse::<H3Index>().unwrap(), cell);
  // The unpadded form parses to the same value.
  assert_eq!("85283473fffffff".parse::<H3Index>().unwrap(), cell);
}

#[test]
fn encode_decode_round_trip_all_resolutions() {
  let points = [
    geo_degs(37.7749, -122.4194),
    geo_degs(-23.5505, -46.6333),
    geo_degs(64.1466, -21.9426),
    geo_degs(0.0, 0.0),
    geo_degs(-89.9, 120.0),
    geo_degs(89.9, -45.0),
  ];
  for point in &points {
    for res in 0..=12 {
      let cell = lat_lng_to_cell(point, res).unwrap();
      assert!(cell.is_valid_cell(), "{point:?} res {res}");
      let center = cell_to_lat_lng(cell).unwrap();
      assert_eq!(lat_lng_to_cell(&center, res).unwrap(), cell, "{point:?} res {res}");
    }
  }
}

#[test]
fn point_within_cell_circumradius() {
  // The encoded point must sit inside its cell, so it can be no farther from
  // the cell center than the farthest boundary vertex.
  let points = [
    geo_degs(37.7749, -122.4194),
    geo_degs(48.8566, 2.3522),
    geo_degs(-33.8688, 151.2093),
  ];
  for point in &points {
    for res in 0..=10 {
      let cell = lat_lng_to_cell(point, res).unwrap();
      let center = cell_to_lat_lng(cell).unwrap();
      let boundary = cell_to_boundary(cell).unwrap();
      let circumradius = boundary
        .verts()
        .iter()
        .map(|v| great_circle_distance_rads(&center, v))
        .fold(0.0, f64::max);
      let d = great_circle_distance_rads(point, &center);
      assert!(
        d <= circumradius * (1.0 + 1e-9),
        "{point:?} res {res}: {d} > {circumradius}"
      );
    }
  }
}

#[test]
fn boundary_vertices_are_distinct_and_bounded() {
  for res in 0..=9 {
    let cell = lat_lng_to_cell(&geo_degs(40.0, -74.0), res).unwrap();
    let boundary = cell_to_boundary(cell).unwrap();
    assert!((6..=10).contains(&boundary.num_verts), "res {res}");
    for i in 0..boundary.num_verts {
      for j in i + 1..boundary.num_verts {
        assert!(
          great_circle_distance_rads(&boundary.verts[i], &boundary.verts[j]) > 0.0,
          "res {res}: duplicate boundary vertex"
        );
      }
    }
  }
}

#[test]
fn invalid_inputs() {
  assert_eq!(cell_to_lat_lng(H3_NULL), Err(HexError::CellInvalid));
  assert_eq!(
    lat_lng_to_cell(&geo_degs(0.0, 0.0), 16),
    Err(HexError::ResDomain)
  );
  let nan = LatLng {
    lat: f64::NAN,
    lng: 0.0,
  };
  assert_eq!(lat_lng_to_cell(&nan, 5), Err(HexError::LatLngDomain));
}
