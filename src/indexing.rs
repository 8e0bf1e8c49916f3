//! Conversion between geographic coordinates and cell indices.

use crate::constants::{MAX_RESOLUTION, NUM_HEX_VERTS, NUM_PENT_VERTS};
use crate::coords::face_ijk::{face_ijk_pent_to_cell_boundary, face_ijk_to_cell_boundary, face_ijk_to_geo, geo_to_face_ijk};
use crate::error::HexError;
use crate::index::{face_ijk_to_h3, h3_to_face_ijk, H3Index, H3_NULL};
use crate::latlng::{CellBoundary, LatLng};

/// The cell containing the given point at the given resolution.
pub fn lat_lng_to_cell(geo: &LatLng, res: i32) -> Result<H3Index, HexError> {
  if !(0..=MAX_RESOLUTION).contains(&res) {
    return Err(HexError::ResDomain);
  }
  if !geo.lat.is_finite() || !geo.lng.is_finite() {
    return Err(HexError::LatLngDomain);
  }

  let fijk = geo_to_face_ijk(geo, res);
  let h = face_ijk_to_h3(&fijk, res);
  if h == H3_NULL {
    return Err(HexError::Failed);
  }
  Ok(h)
}

/// The center point of the given cell.
pub fn cell_to_lat_lng(cell: H3Index) -> Result<LatLng, HexError> {
  if !cell.is_valid_cell() {
    return Err(HexError::CellInvalid);
  }
  let fijk = h3_to_face_ijk(cell)?;
  Ok(face_ijk_to_geo(&fijk, cell.resolution()))
}

/// The boundary of the given cell in counter-clockwise order.
pub fn cell_to_boundary(cell: H3Index) -> Result<CellBoundary, HexError> {
  if !cell.is_valid_cell() {
    return Err(HexError::CellInvalid);
  }
  let fijk = h3_to_face_ijk(cell)?;
  let res = cell.resolution();
  if cell.is_pentagon() {
    Ok(face_ijk_pent_to_cell_boundary(&fijk, res, 0, NUM_PENT_VERTS))
  } else {
    Ok(face_ijk_to_cell_boundary(&fijk, res, 0, NUM_HEX_VERTS))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::latlng::{degs_to_rads, great_circle_distance_rads};

  fn geo_degs(lat: f64, lng: f64) -> LatLng {
    LatLng {
      lat: degs_to_rads(lat),
      lng: degs_to_rads(lng),
    }
  }

  #[test]
  fn known_encoding() {
    let sf = geo_degs(37.7749, -122.4194);
    assert_eq!(lat_lng_to_cell(&sf, 5).unwrap(), H3Index(0x85283473fffffff));
  }

  #[test]
  fn res_and_latlng_domain_errors() {
    let sf = geo_degs(37.7749, -122.4194);
    assert_eq!(lat_lng_to_cell(&sf, -1), Err(HexError::ResDomain));
    assert_eq!(lat_lng_to_cell(&sf, 16), Err(HexError::ResDomain));
    let bad = LatLng {
      lat: f64::NAN,
      lng: 0.0,
    };
    assert_eq!(lat_lng_to_cell(&bad, 5), Err(HexError::LatLngDomain));
  }

  #[test]
  fn center_round_trip() {
    for res in 0..=9 {
      let cell = lat_lng_to_cell(&geo_degs(37.7749, -122.4194), res).unwrap();
      let center = cell_to_lat_lng(cell).unwrap();
      assert_eq!(lat_lng_to_cell(&center, res).unwrap(), cell, "res {res}");
    }
  }

  #[test]
  fn center_is_near_input() {
    let input = geo_degs(37.7749, -122.4194);
    let cell = lat_lng_to_cell(&input, 9).unwrap();
    let center = cell_to_lat_lng(cell).unwrap();
    // At res 9 a cell is a couple hundred meters across.
    assert!(great_circle_distance_rads(&input, &center) < degs_to_rads(0.01));
  }

  #[test]
  fn boundary_shapes() {
    let hex = lat_lng_to_cell(&geo_degs(37.7749, -122.4194), 4).unwrap();
    let boundary = cell_to_boundary(hex).unwrap();
    assert_eq!(boundary.num_verts, NUM_HEX_VERTS);

    let pent = crate::index::make_cell(2, 4, crate::coords::ijk::Direction::Center);
    let boundary = cell_to_boundary(pent).unwrap();
    assert_eq!(boundary.num_verts, NUM_PENT_VERTS);
  }

  #[test]
  fn class_iii_boundary_may_gain_vertices() {
    // A Class III hexagon has 6-10 boundary vertices depending on face
    // crossings.
    let hex = lat_lng_to_cell(&geo_degs(37.7749, -122.4194), 5).unwrap();
    let boundary = cell_to_boundary(hex).unwrap();
    assert!((NUM_HEX_VERTS..=10).contains(&boundary.num_verts));
  }

  #[test]
  fn invalid_cell_rejected() {
    assert_eq!(cell_to_lat_lng(H3_NULL), Err(HexError::CellInvalid));
    assert_eq!(cell_to_boundary(H3_NULL), Err(HexError::CellInvalid));
  }

  #[test]
  fn poles_encode_at_every_resolution() {
    for res in 0..=MAX_RESOLUTION {
      let north = lat_lng_to_cell(&geo_degs(90.0, 0.0), res).unwrap();
      let south = lat_lng_to_cell(&geo_degs(-90.0, 0.0), res).unwrap();
      assert!(north.is_valid_cell(), "north res {res}");
      assert!(south.is_valid_cell(), "south res {res}");
    }
  }
}
