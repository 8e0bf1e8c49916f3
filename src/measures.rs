//! Cell and edge measurement: exact spherical areas and lengths, plus the
//! per-resolution average tables.

use crate::constants::{EARTH_RADIUS_KM, MAX_RESOLUTION};
use crate::edges::directed_edge_to_boundary;
use crate::error::HexError;
use crate::index::H3Index;
use crate::indexing::{cell_to_boundary, cell_to_lat_lng};
use crate::latlng::{great_circle_distance_rads, LatLng};

/// Spherical excess of the triangle with the given edge lengths (radians),
/// by l'Huilier's theorem.
fn triangle_edge_lengths_to_area(a: f64, b: f64, c: f64) -> f64 {
  let s = (a + b + c) / 2.0;
  let a = (s - a) / 2.0;
  let b = (s - b) / 2.0;
  let c = (s - c) / 2.0;
  let s = s / 2.0;
  4.0 * (s.tan() * a.tan() * b.tan() * c.tan()).sqrt().atan()
}

fn triangle_area(a: &LatLng, b: &LatLng, c: &LatLng) -> f64 {
  triangle_edge_lengths_to_area(
    great_circle_distance_rads(a, b),
    great_circle_distance_rads(b, c),
    great_circle_distance_rads(c, a),
  )
}

/// Exact area of the cell in square radians, summed from the spherical
/// triangles fanned around the cell center.
pub fn cell_area_rads2(cell: H3Index) -> Result<f64, HexError> {
  let center = cell_to_lat_lng(cell)?;
  let boundary = cell_to_boundary(cell)?;
  let verts = boundary.verts();

  let mut area = 0.0;
  for i in 0..verts.len() {
    let j = (i + 1) % verts.len();
    area += triangle_area(&verts[i], &verts[j], &center);
  }
  Ok(area)
}

/// Exact area of the cell in square kilometers.
pub fn cell_area_km2(cell: H3Index) -> Result<f64, HexError> {
  Ok(cell_area_rads2(cell)? * EARTH_RADIUS_KM * EARTH_RADIUS_KM)
}

/// Exact area of the cell in square meters.
pub fn cell_area_m2(cell: H3Index) -> Result<f64, HexError> {
  Ok(cell_area_km2(cell)? * 1_000_000.0)
}

/// Exact length of a directed edge in radians, summed along its boundary
/// segment.
pub fn exact_edge_length_rads(edge: H3Index) -> Result<f64, HexError> {
  let boundary = directed_edge_to_boundary(edge)?;
  let verts = boundary.verts();

  let mut length = 0.0;
  for pair in verts.windows(2) {
    length += great_circle_distance_rads(&pair[0], &pair[1]);
  }
  Ok(length)
}

/// Exact length of a directed edge in kilometers.
pub fn exact_edge_length_km(edge: H3Index) -> Result<f64, HexError> {
  Ok(exact_edge_length_rads(edge)? * EARTH_RADIUS_KM)
}

/// Exact length of a directed edge in meters.
pub fn exact_edge_length_m(edge: H3Index) -> Result<f64, HexError> {
  Ok(exact_edge_length_km(edge)? * 1000.0)
}

fn check_res(res: i32) -> Result<usize, HexError> {
  if (0..=MAX_RESOLUTION).contains(&res) {
    Ok(res as usize)
  } else {
    Err(HexError::ResDomain)
  }
}

/// Average hexagon area in square kilometers at the given resolution
/// (pentagons excluded).
pub fn get_hexagon_area_avg_km2(res: i32) -> Result<f64, HexError> {
  #[rustfmt::skip]
  const AREAS_KM2: [f64; (MAX_RESOLUTION + 1) as usize] = [
  4.357_449_416_078_383e+06,
  6.097_884_417_941_332e+05,
  8.680_178_039_899_720e+04,
  1.239_343_465_508_816e+04,
  1.770_347_654_491_307e+03,
  2.529_038_581_819_449e+02,
  3.612_906_216_441_245e+01,
  5.161_293_359_717_191e+00,
  7.373_275_975_944_177e-01,
  1.053_325_134_272_067e-01,
  1.504_750_190_766_435e-02,
  2.149_643_129_451_879e-03,
  3.070_918_756_316_060e-04,
  4.387_026_794_728_296e-05,
  6.267_181_135_324_313e-06,
  8.953_115_907_605_790e-07,
  ];
  Ok(AREAS_KM2[check_res(res)?])
}

/// Average hexagon area in square meters at the given resolution (pentagons
/// excluded).
pub fn get_hexagon_area_avg_m2(res: i32) -> Result<f64, HexError> {
  #[rustfmt::skip]
  const AREAS_M2: [f64; (MAX_RESOLUTION + 1) as usize] = [
  4.357_449_416_078_390e+12,
  6.097_884_417_941_339e+11,
  8.680_178_039_899_731e+10,
  1.239_343_465_508_818e+10,
  1.770_347_654_491_309e+09,
  2.529_038_581_819_452e+08,
  3.612_906_216_441_250e+07,
  5.161_293_359_717_198e+06,
  7.373_275_975_944_188e+05,
  1.053_325_134_272_069e+05,
  1.504_750_190_766_437e+04,
  2.149_643_129_451_882e+03,
  3.070_918_756_316_063e+02,
  4.387_026_794_728_301e+01,
  6.267_181_135_324_322,
  8.953_115_907_605_802e-01,
  ];
  Ok(AREAS_M2[check_res(res)?])
}

/// Average hexagon edge length in kilometers at the given resolution
/// (pentagons excluded).
pub fn get_hexagon_edge_length_avg_km(res: i32) -> Result<f64, HexError> {
  #[rustfmt::skip]
  const LENS_KM: [f64; (MAX_RESOLUTION + 1) as usize] = [
  1281.256011,
  483.0568391,
  182.5129565,
  68.97922179,
  26.07175968,
  9.854090990,
  3.724532667,
  1.406475763,
  0.531414010,
  0.200786148,
  0.075863783,
  0.028663897,
  0.010830188,
  0.004092010,
  0.001546100,
  0.000584169,
  ];
  Ok(LENS_KM[check_res(res)?])
}

/// Average hexagon edge length in meters at the given resolution (pentagons
/// excluded).
pub fn get_hexagon_edge_length_avg_m(res: i32) -> Result<f64, HexError> {
  #[rustfmt::skip]
  const LENS_M: [f64; (MAX_RESOLUTION + 1) as usize] = [
  1281256.011,
  483056.8391,
  182512.9565,
  68979.22179,
  26071.75968,
  9854.090990,
  3724.532667,
  1406.475763,
  531.4140101,
  200.7861476,
  75.86378287,
  28.66389748,
  10.83018784,
  4.092010473,
  1.546099657,
  0.584168630,
  ];
  Ok(LENS_M[check_res(res)?])
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::edges::origin_to_directed_edges;
  use crate::indexing::lat_lng_to_cell;
  use crate::latlng::degs_to_rads;

  fn sf_cell(res: i32) -> H3Index {
    let geo = LatLng {
      lat: degs_to_rads(37.779_265),
      lng: degs_to_rads(-122.419_277),
    };
    lat_lng_to_cell(&geo, res).unwrap()
  }

  #[test]
  fn cell_area_near_average() {
    for res in [3, 5, 7] {
      let cell = sf_cell(res);
      let area = cell_area_km2(cell).unwrap();
      let avg = get_hexagon_area_avg_km2(res).unwrap();
      // Exact areas vary with distortion but stay within a factor of two of
      // the global average.
      assert!(area > avg * 0.5 && area < avg * 2.0, "res {res}: {area} vs {avg}");
    }
  }

  #[test]
  fn area_units_consistent() {
    let cell = sf_cell(5);
    let rads2 = cell_area_rads2(cell).unwrap();
    let km2 = cell_area_km2(cell).unwrap();
    let m2 = cell_area_m2(cell).unwrap();
    assert!((km2 - rads2 * EARTH_RADIUS_KM * EARTH_RADIUS_KM).abs() < 1e-9);
    assert!((m2 - km2 * 1e6).abs() < 1e-3);
  }

  #[test]
  fn edge_length_near_average() {
    let cell = sf_cell(6);
    for edge in origin_to_directed_edges(cell).unwrap() {
      let len = exact_edge_length_km(edge).unwrap();
      let avg = get_hexagon_edge_length_avg_km(6).unwrap();
      assert!(len > avg * 0.4 && len < avg * 2.0, "{len} vs {avg}");
    }
  }

  #[test]
  fn average_tables_decrease_with_resolution() {
    for res in 1..=MAX_RESOLUTION {
      assert!(get_hexagon_area_avg_km2(res).unwrap() < get_hexagon_area_avg_km2(res - 1).unwrap());
      assert!(get_hexagon_edge_length_avg_m(res).unwrap() < get_hexagon_edge_length_avg_m(res - 1).unwrap());
    }
    assert!(get_hexagon_area_avg_km2(16).is_err());
    assert!(get_hexagon_edge_length_avg_km(-1).is_err());
  }

  #[test]
  fn area_ratio_between_resolutions_is_about_seven() {
    let coarse = cell_area_km2(sf_cell(5)).unwrap();
    let fine = cell_area_km2(sf_cell(6)).unwrap();
    let ratio = coarse / fine;
    assert!(ratio > 5.0 && ratio < 9.0, "ratio {ratio}");
  }
}
