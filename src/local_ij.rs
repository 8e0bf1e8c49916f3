//! Local IJK/IJ coordinates anchored to an origin cell, and grid distance.
//!
//! A target cell's local coordinate is produced by reversing the per-level
//! digit encoding relative to the origin's base cell, with fixed
//! pentagon-rotation-reversal tables correcting the unfold where either cell
//! sits on or crosses a pentagon. Not every pair of cells has a defined local
//! coordinate; out-of-range and unsupported pentagon cases are reported as
//! errors.

use crate::base_cells::{
  base_cell_direction, base_cell_neighbor, is_base_cell_pentagon, is_base_cell_polar_pentagon,
  BASE_CELL_NEIGHBOR_60CCW_ROTS, INVALID_BASE_CELL,
};
use crate::constants::NUM_BASE_CELLS;
use crate::coords::face_ijk::FaceIJK;
use crate::coords::ijk::{ij_to_ijk, ijk_to_ij, CoordIJ, CoordIJK, Direction};
use crate::error::HexError;
use crate::index::{h3_to_face_ijk_with_initialized, is_resolution_class_iii, make_cell, H3Index};

/// Origin leading digit -> index leading digit -> 60° cw rotations.
/// A K entry on either axis is the deleted subsequence and unreachable.
#[rustfmt::skip]
static PENTAGON_ROTATIONS: [[i32; 7]; 7] = [
  [0, -1, 0, 0, 0, 0, 0],       // Center
  [-1, -1, -1, -1, -1, -1, -1], // K
  [0, -1, 0, 0, 0, 1, 0],       // J
  [0, -1, 0, 0, 1, 1, 0],       // Jk
  [0, -1, 0, 5, 0, 0, 0],       // I
  [0, -1, 5, 5, 0, 0, 0],       // Ik
  [0, -1, 0, 0, 0, 0, 0],       // Ij
];

/// Reverse base cell direction -> leading index digit -> 60° ccw rotations,
/// undoing `PENTAGON_ROTATIONS` when the origin is on a pentagon.
#[rustfmt::skip]
static PENTAGON_ROTATIONS_REVERSE: [[i32; 7]; 7] = [
  [0, 0, 0, 0, 0, 0, 0],        // Center
  [-1, -1, -1, -1, -1, -1, -1], // K
  [0, 1, 0, 0, 0, 0, 0],        // J
  [0, 1, 0, 0, 0, 1, 0],        // Jk
  [0, 5, 0, 0, 0, 0, 0],        // I
  [0, 5, 0, 5, 0, 0, 0],        // Ik
  [0, 0, 0, 0, 0, 0, 0],        // Ij
];

/// As `PENTAGON_ROTATIONS_REVERSE`, for an index on a non-polar pentagon with
/// a hexagon origin.
#[rustfmt::skip]
static PENTAGON_ROTATIONS_REVERSE_NONPOLAR: [[i32; 7]; 7] = [
  [0, 0, 0, 0, 0, 0, 0],        // Center
  [-1, -1, -1, -1, -1, -1, -1], // K
  [0, 1, 0, 0, 0, 0, 0],        // J
  [0, 1, 0, 0, 0, 1, 0],        // Jk
  [0, 5, 0, 0, 0, 0, 0],        // I
  [0, 1, 0, 5, 1, 1, 0],        // Ik
  [0, 0, 0, 0, 0, 0, 0],        // Ij
];

/// As `PENTAGON_ROTATIONS_REVERSE`, for an index on a polar pentagon.
#[rustfmt::skip]
static PENTAGON_ROTATIONS_REVERSE_POLAR: [[i32; 7]; 7] = [
  [0, 0, 0, 0, 0, 0, 0],        // Center
  [-1, -1, -1, -1, -1, -1, -1], // K
  [0, 1, 1, 1, 1, 1, 1],        // J
  [0, 1, 0, 0, 0, 1, 0],        // Jk
  [0, 1, 0, 0, 1, 1, 1],        // I
  [0, 1, 0, 5, 1, 1, 0],        // Ik
  [0, 1, 1, 0, 1, 1, 1],        // Ij
];

/// Directions prohibited when unfolding a pentagon; the unfold would be
/// ambiguous, so these report an error instead.
#[rustfmt::skip]
static FAILED_DIRECTIONS: [[bool; 7]; 7] = [
  [false, false, false, false, false, false, false], // Center
  [false, false, false, false, false, false, false], // K
  [false, false, false, false, true,  true,  false], // J
  [false, false, false, false, true,  false, true ], // Jk
  [false, false, true,  true,  false, false, false], // I
  [false, false, true,  false, false, false, true ], // Ik
  [false, false, false, true,  false, true,  false], // Ij
];

/// Produces the IJK coordinate of `index` relative to `origin`'s base cell
/// coordinate system.
pub(crate) fn cell_to_local_ijk(origin: H3Index, index: H3Index) -> Result<CoordIJK, HexError> {
  let res = origin.resolution();
  if res != index.resolution() {
    return Err(HexError::ResMismatch);
  }

  let origin_base_cell = origin.base_cell();
  let base_cell = index.base_cell();
  if origin_base_cell < 0 || origin_base_cell >= NUM_BASE_CELLS || base_cell < 0 || base_cell >= NUM_BASE_CELLS {
    return Err(HexError::CellInvalid);
  }

  // Direction from origin base cell to index base cell.
  let mut dir = Direction::Center;
  let mut rev_dir = Direction::Center;
  if origin_base_cell != base_cell {
    dir = base_cell_direction(origin_base_cell, base_cell);
    if dir == Direction::Invalid {
      // Not neighbors; the local coordinate space does not reach this far.
      return Err(HexError::Failed);
    }
    rev_dir = base_cell_direction(base_cell, origin_base_cell);
  }

  let origin_on_pent = is_base_cell_pentagon(origin_base_cell);
  let index_on_pent = is_base_cell_pentagon(base_cell);

  let mut index = index;
  if dir != Direction::Center {
    // Rotate the index into the orientation of the origin base cell.
    let mut base_cell_rotations = BASE_CELL_NEIGHBOR_60CCW_ROTS[origin_base_cell as usize][dir as usize];
    if index_on_pent {
      while base_cell_rotations > 0 {
        index = index.rotate_pent60_ccw();
        rev_dir = rev_dir.rotate60_ccw();
        if rev_dir == Direction::K {
          rev_dir = rev_dir.rotate60_ccw();
        }
        base_cell_rotations -= 1;
      }
    } else {
      while base_cell_rotations > 0 {
        index = index.rotate60_ccw();
        rev_dir = rev_dir.rotate60_ccw();
        base_cell_rotations -= 1;
      }
    }
  }

  // Face is unused; this produces coordinates in base cell space.
  let mut index_fijk = FaceIJK::default();
  h3_to_face_ijk_with_initialized(index, &mut index_fijk);

  if dir != Direction::Center {
    debug_assert!(base_cell != origin_base_cell);
    debug_assert!(!(origin_on_pent && index_on_pent));

    let mut pentagon_rotations = 0;
    let mut direction_rotations = 0;

    if origin_on_pent {
      let origin_leading = origin.leading_non_zero_digit();
      if FAILED_DIRECTIONS[origin_leading as usize][dir as usize] {
        // The unfold would be wrong in this case.
        return Err(HexError::Pentagon);
      }
      direction_rotations = PENTAGON_ROTATIONS[origin_leading as usize][dir as usize];
      pentagon_rotations = direction_rotations;
    } else if index_on_pent {
      let index_leading = index.leading_non_zero_digit();
      if FAILED_DIRECTIONS[index_leading as usize][rev_dir as usize] {
        return Err(HexError::Pentagon);
      }
      pentagon_rotations = PENTAGON_ROTATIONS[rev_dir as usize][index_leading as usize];
    }

    if pentagon_rotations < 0 || direction_rotations < 0 {
      return Err(HexError::CellInvalid);
    }

    for _ in 0..pentagon_rotations {
      index_fijk.coord.rotate60_cw();
    }

    // Offset of the index base cell relative to the origin's, scaled to the
    // index resolution.
    let mut offset = CoordIJK::default();
    offset.neighbor(dir);
    for r in (0..res).rev() {
      if is_resolution_class_iii(r + 1) {
        offset.down_ap7();
      } else {
        offset.down_ap7r();
      }
    }

    for _ in 0..direction_rotations {
      offset.rotate60_cw();
    }

    index_fijk.coord = index_fijk.coord.add(&offset);
    index_fijk.coord.normalize();
  } else if origin_on_pent && index_on_pent {
    // Same pentagon base cell.
    debug_assert!(base_cell == origin_base_cell);

    let origin_leading = origin.leading_non_zero_digit();
    let index_leading = index.leading_non_zero_digit();
    if FAILED_DIRECTIONS[origin_leading as usize][index_leading as usize] {
      return Err(HexError::Pentagon);
    }

    let within_pentagon_rotations = PENTAGON_ROTATIONS[origin_leading as usize][index_leading as usize];
    if within_pentagon_rotations < 0 {
      return Err(HexError::CellInvalid);
    }
    for _ in 0..within_pentagon_rotations {
      index_fijk.coord.rotate60_cw();
    }
  }

  let mut origin_fijk = FaceIJK::default();
  h3_to_face_ijk_with_initialized(origin, &mut origin_fijk);

  let mut out = index_fijk.coord.sub(&origin_fijk.coord);
  out.normalize();
  Ok(out)
}

/// Produces the cell at the given local IJK coordinate anchored by `origin`.
pub(crate) fn local_ijk_to_cell(origin: H3Index, ijk: &CoordIJK) -> Result<H3Index, HexError> {
  let res = origin.resolution();
  let origin_base_cell = origin.base_cell();
  if origin_base_cell < 0 || origin_base_cell >= NUM_BASE_CELLS {
    return Err(HexError::CellInvalid);
  }
  let origin_on_pent = is_base_cell_pentagon(origin_base_cell);

  let mut out = make_cell(res, 0, Direction::Center);

  if res == 0 {
    if ijk.i > 1 || ijk.j > 1 || ijk.k > 1 {
      return Err(HexError::Failed);
    }
    let dir = ijk.to_digit();
    let new_base_cell = base_cell_neighbor(origin_base_cell, dir);
    if new_base_cell == INVALID_BASE_CELL {
      // Moving in the deleted direction off a pentagon.
      return Err(HexError::Failed);
    }
    out.set_base_cell(new_base_cell);
    return Ok(out);
  }

  // Build the index digits from finest to coarsest, leaving the base cell
  // offset in the origin's coordinate system.
  let mut ijk_copy = *ijk;
  for r in (0..res).rev() {
    let last_ijk = ijk_copy;
    let mut last_center;
    if is_resolution_class_iii(r + 1) {
      ijk_copy.up_ap7();
      last_center = ijk_copy;
      last_center.down_ap7();
    } else {
      ijk_copy.up_ap7r();
      last_center = ijk_copy;
      last_center.down_ap7r();
    }

    let mut diff = last_ijk.sub(&last_center);
    diff.normalize();
    out.set_digit(r + 1, diff.to_digit());
  }

  if ijk_copy.i > 1 || ijk_copy.j > 1 || ijk_copy.k > 1 {
    return Err(HexError::Failed);
  }

  let mut dir = ijk_copy.to_digit();
  let mut base_cell = base_cell_neighbor(origin_base_cell, dir);
  // Pentagons never border each other, so a valid neighbor of a pentagon is
  // always a hexagon.
  let index_on_pent = base_cell != INVALID_BASE_CELL && is_base_cell_pentagon(base_cell);

  if dir != Direction::Center {
    // Unwarp the base cell direction and rotate digits back as needed.
    let mut pentagon_rotations = 0;
    if origin_on_pent {
      let origin_leading = origin.leading_non_zero_digit();
      pentagon_rotations = PENTAGON_ROTATIONS_REVERSE[origin_leading as usize][dir as usize];
      if pentagon_rotations < 0 {
        return Err(HexError::CellInvalid);
      }
      for _ in 0..pentagon_rotations {
        dir = dir.rotate60_ccw();
      }
      // If dir is still the deleted direction we are moving into the deleted
      // subsequence, where no cell exists.
      if dir == Direction::K {
        return Err(HexError::Pentagon);
      }
      base_cell = base_cell_neighbor(origin_base_cell, dir);
      debug_assert!(base_cell != INVALID_BASE_CELL);
      debug_assert!(!is_base_cell_pentagon(base_cell));
    }

    let base_cell_rotations = BASE_CELL_NEIGHBOR_60CCW_ROTS[origin_base_cell as usize][dir as usize];
    debug_assert!(base_cell_rotations >= 0);

    if index_on_pent {
      let rev_dir = base_cell_direction(base_cell, origin_base_cell);
      debug_assert!(rev_dir != Direction::Invalid);

      // Rotate into the pentagon's coordinate space first; the pentagon
      // rotations depend on the leading digit seen from there.
      for _ in 0..base_cell_rotations {
        out = out.rotate60_ccw();
      }

      let index_leading = out.leading_non_zero_digit();
      let pentagon_rotations = if is_base_cell_polar_pentagon(base_cell) {
        PENTAGON_ROTATIONS_REVERSE_POLAR[rev_dir as usize][index_leading as usize]
      } else {
        PENTAGON_ROTATIONS_REVERSE_NONPOLAR[rev_dir as usize][index_leading as usize]
      };
      if pentagon_rotations < 0 {
        return Err(HexError::CellInvalid);
      }
      for _ in 0..pentagon_rotations {
        out = out.rotate_pent60_ccw();
      }
    } else {
      for _ in 0..pentagon_rotations {
        out = out.rotate60_ccw();
      }
      for _ in 0..base_cell_rotations {
        out = out.rotate60_ccw();
      }
    }

    out.set_base_cell(base_cell);
  } else if origin_on_pent {
    // Index within the origin pentagon's own base cell.
    let origin_leading = origin.leading_non_zero_digit();
    let index_leading = out.leading_non_zero_digit();
    if FAILED_DIRECTIONS[origin_leading as usize][index_leading as usize] {
      return Err(HexError::Pentagon);
    }

    let within_pentagon_rotations = PENTAGON_ROTATIONS_REVERSE[origin_leading as usize][index_leading as usize];
    if within_pentagon_rotations < 0 {
      return Err(HexError::CellInvalid);
    }
    for _ in 0..within_pentagon_rotations {
      out = out.rotate60_ccw();
    }
    out.set_base_cell(origin_base_cell);
  } else {
    out.set_base_cell(origin_base_cell);
  }

  Ok(out)
}

/// Local IJ coordinate of `index` anchored by `origin`.
pub fn cell_to_local_ij(origin: H3Index, index: H3Index) -> Result<CoordIJ, HexError> {
  if !origin.is_valid_cell() || !index.is_valid_cell() {
    return Err(HexError::CellInvalid);
  }
  let ijk = cell_to_local_ijk(origin, index)?;
  Ok(ijk_to_ij(&ijk))
}

/// Any representable local coordinate stays far below this; larger values
/// would overflow the aperture arithmetic.
const MAX_LOCAL_COORD: i32 = 1 << 26;

/// The cell at local IJ coordinate `ij` anchored by `origin`.
pub fn local_ij_to_cell(origin: H3Index, ij: &CoordIJ) -> Result<H3Index, HexError> {
  if !origin.is_valid_cell() {
    return Err(HexError::CellInvalid);
  }
  if ij.i.abs() > MAX_LOCAL_COORD || ij.j.abs() > MAX_LOCAL_COORD {
    return Err(HexError::Domain);
  }
  let ijk = ij_to_ijk(ij)?;
  local_ijk_to_cell(origin, &ijk)
}

/// Grid distance in cells between two cells of the same resolution.
///
/// Fails when the cells are too far apart for the local coordinate space or
/// the path crosses an unsupported pentagon configuration.
pub fn grid_distance(origin: H3Index, index: H3Index) -> Result<i64, HexError> {
  let origin_ijk = cell_to_local_ijk(origin, origin)?;
  let index_ijk = cell_to_local_ijk(origin, index)?;
  Ok(i64::from(origin_ijk.distance(&index_ijk)))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::index::make_cell;
  use crate::indexing::lat_lng_to_cell;
  use crate::latlng::{degs_to_rads, LatLng};
  use crate::traversal::rings::{grid_disk_distances, grid_ring_unsafe};

  fn sf_cell(res: i32) -> H3Index {
    let geo = LatLng {
      lat: degs_to_rads(37.779_265),
      lng: degs_to_rads(-122.419_277),
    };
    lat_lng_to_cell(&geo, res).unwrap()
  }

  #[test]
  fn origin_is_at_local_origin() {
    let origin = sf_cell(9);
    let ij = cell_to_local_ij(origin, origin).unwrap();
    assert_eq!(ij, CoordIJ { i: 0, j: 0 });
    assert_eq!(local_ij_to_cell(origin, &ij).unwrap(), origin);
  }

  #[test]
  fn local_ij_round_trip_over_disk() {
    let origin = sf_cell(7);
    for (cell, _) in grid_disk_distances(origin, 3).unwrap() {
      let ij = cell_to_local_ij(origin, cell).unwrap();
      assert_eq!(local_ij_to_cell(origin, &ij).unwrap(), cell, "cell {cell}");
    }
  }

  #[test]
  fn distance_matches_ring_membership() {
    let origin = sf_cell(8);
    assert_eq!(grid_distance(origin, origin).unwrap(), 0);
    for k in 1..4 {
      for cell in grid_ring_unsafe(origin, k).unwrap() {
        assert_eq!(grid_distance(origin, cell).unwrap(), i64::from(k), "k={k}");
      }
    }
  }

  #[test]
  fn distance_requires_same_resolution() {
    assert_eq!(grid_distance(sf_cell(8), sf_cell(9)), Err(HexError::ResMismatch));
  }

  #[test]
  fn pentagon_neighborhood_round_trip() {
    let pent = make_cell(3, 14, Direction::Center);
    for (cell, _) in grid_disk_distances(pent, 1).unwrap() {
      match cell_to_local_ij(pent, cell) {
        Ok(ij) => assert_eq!(local_ij_to_cell(pent, &ij).unwrap(), cell),
        // Some pentagon unfolds are unsupported by design.
        Err(HexError::Pentagon) => {}
        Err(e) => panic!("unexpected error {e:?}"),
      }
    }
  }

  #[test]
  fn far_cells_are_out_of_range() {
    // Base cells on opposite sides of the globe have no shared local space.
    let origin = make_cell(1, 0, Direction::Center);
    let antipode = make_cell(1, 121, Direction::Center);
    assert!(cell_to_local_ij(origin, antipode).is_err());
  }

  #[test]
  fn invalid_inputs_rejected() {
    let origin = sf_cell(5);
    assert_eq!(
      cell_to_local_ij(origin, crate::index::H3_NULL),
      Err(HexError::CellInvalid)
    );
    assert_eq!(
      local_ij_to_cell(crate::index::H3_NULL, &CoordIJ { i: 0, j: 0 }),
      Err(HexError::CellInvalid)
    );
  }
}
