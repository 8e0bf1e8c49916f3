//! Cell validity and introspection.

use crate::base_cells::{is_base_cell_pentagon, INVALID_BASE_CELL};
use crate::constants::{MAX_RESOLUTION, NUM_BASE_CELLS, NUM_PENTAGONS};
use crate::coords::face_ijk::{adjust_overage_class_ii, adjust_pent_vert_overage, face_ijk_pent_to_verts, face_ijk_to_verts};
use crate::coords::ijk::Direction;
use crate::error::HexError;
use crate::hierarchy::make_direct_child;
use crate::index::{h3_to_face_ijk, is_resolution_class_iii, make_cell, H3Index, CELL_MODE};

impl H3Index {
  /// Whether this is a structurally valid cell index.
  #[must_use]
  pub fn is_valid_cell(self) -> bool {
    if self.high_bit() != 0 || self.mode() != CELL_MODE || self.reserved_bits() != 0 {
      return false;
    }

    let base_cell = self.base_cell();
    if base_cell < 0 || base_cell >= NUM_BASE_CELLS {
      return false;
    }

    let res = self.resolution();
    if !(0..=MAX_RESOLUTION).contains(&res) {
      return false;
    }

    let mut found_first_non_zero = false;
    for r in 1..=res {
      let digit = self.digit(r);
      if digit == Direction::Invalid {
        return false;
      }
      if !found_first_non_zero && digit != Direction::Center {
        found_first_non_zero = true;
        // The K digit is deleted on pentagon base cells.
        if is_base_cell_pentagon(base_cell) && digit == Direction::K {
          return false;
        }
      }
    }
    // Unused digit slots must hold the filler value.
    for r in res + 1..=MAX_RESOLUTION {
      if self.digit(r) != Direction::Invalid {
        return false;
      }
    }
    true
  }

  /// Whether this cell is one of the pentagons at its resolution.
  #[must_use]
  pub fn is_pentagon(self) -> bool {
    is_base_cell_pentagon(self.base_cell()) && self.leading_non_zero_digit() == Direction::Center
  }

  /// Whether this index's resolution has Class III alignment.
  #[must_use]
  pub fn is_res_class_iii(self) -> bool {
    is_resolution_class_iii(self.resolution())
  }

  /// Maximum number of icosahedron faces the cell's boundary may cross.
  #[must_use]
  pub fn max_face_count(self) -> usize {
    // A pentagon always sits on a vertex of the icosahedron and touches 5
    // faces; a hexagon can at most straddle one edge.
    if self.is_pentagon() {
      5
    } else {
      2
    }
  }
}

/// The distinct icosahedron faces the cell's boundary overlaps.
pub fn get_icosahedron_faces(h: H3Index) -> Result<Vec<i32>, HexError> {
  if !h.is_valid_cell() {
    return Err(HexError::CellInvalid);
  }

  let mut res = h.resolution();
  let is_pent = h.is_pentagon();

  // Class II pentagons have all vertices on icosahedron edges, which defeats
  // the vertex-based approach; their direct center child crosses the same
  // faces.
  if is_pent && !is_resolution_class_iii(res) {
    return get_icosahedron_faces(make_direct_child(h, Direction::Center));
  }

  let mut fijk = h3_to_face_ijk(h)?;

  let mut faces = Vec::with_capacity(h.max_face_count());
  let mut record = |face: i32| {
    if !faces.contains(&face) {
      faces.push(face);
    }
  };

  if is_pent {
    for mut vert in face_ijk_pent_to_verts(&mut fijk, &mut res) {
      adjust_pent_vert_overage(&mut vert, res);
      record(vert.face);
    }
  } else {
    for mut vert in face_ijk_to_verts(&mut fijk, &mut res) {
      adjust_overage_class_ii(&mut vert, res, false, true);
      record(vert.face);
    }
  }
  Ok(faces)
}

/// Number of unique cells at the given resolution: `2 + 120 * 7^res`.
pub fn get_num_cells(res: i32) -> Result<i64, HexError> {
  if !(0..=MAX_RESOLUTION).contains(&res) {
    return Err(HexError::ResDomain);
  }
  Ok(2 + 120 * 7i64.pow(res as u32))
}

/// Number of pentagon cells per resolution, always 12.
#[must_use]
pub fn pentagon_count() -> i32 {
  NUM_PENTAGONS
}

/// The 12 pentagon cells at the given resolution.
pub fn get_pentagons(res: i32) -> Result<Vec<H3Index>, HexError> {
  if !(0..=MAX_RESOLUTION).contains(&res) {
    return Err(HexError::ResDomain);
  }
  let mut out = Vec::with_capacity(NUM_PENTAGONS as usize);
  for bc in 0..NUM_BASE_CELLS {
    if is_base_cell_pentagon(bc) {
      out.push(make_cell(res, bc, Direction::Center));
    }
  }
  Ok(out)
}

/// All 122 resolution-0 cells.
#[must_use]
pub fn get_res0_cells() -> Vec<H3Index> {
  (0..NUM_BASE_CELLS).map(|bc| make_cell(0, bc, Direction::Center)).collect()
}

/// The cell's base cell number, without validating the rest of the index.
#[must_use]
pub fn get_base_cell_number(h: H3Index) -> i32 {
  let bc = h.base_cell();
  if bc >= NUM_BASE_CELLS {
    INVALID_BASE_CELL
  } else {
    bc
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn known_cell_is_valid() {
    let h = H3Index(0x85283473fffffff);
    assert!(h.is_valid_cell());
    assert!(!h.is_pentagon());
    assert!(h.is_res_class_iii());
    assert_eq!(get_base_cell_number(h), 20);
  }

  #[test]
  fn invalid_cells_rejected() {
    assert!(!H3Index(0).is_valid_cell());
    // Wrong mode.
    assert!(!H3Index(0x05283473fffffff).is_valid_cell());
    // High bit set.
    assert!(!H3Index(0x85283473fffffff | 1 << 63).is_valid_cell());
    // Base cell out of range.
    let mut h = H3Index(0x85283473fffffff);
    h.set_base_cell(127);
    assert!(!h.is_valid_cell());
    // Digit slot below the resolution not filled with the filler value.
    let mut h = H3Index(0x85283473fffffff);
    h.set_digit(6, Direction::Center);
    assert!(!h.is_valid_cell());
    // Pentagon with a leading K digit.
    let mut h = make_cell(2, 4, Direction::Center);
    h.set_digit(1, Direction::K);
    assert!(!h.is_valid_cell());
  }

  #[test]
  fn pentagon_detection() {
    let pent = make_cell(2, 4, Direction::Center);
    assert!(pent.is_valid_cell());
    assert!(pent.is_pentagon());
    assert_eq!(pent.max_face_count(), 5);

    let mut child = pent;
    child.set_digit(2, Direction::J);
    assert!(child.is_valid_cell());
    assert!(!child.is_pentagon());
    assert_eq!(child.max_face_count(), 2);
  }

  #[test]
  fn res0_and_pentagon_enumeration() {
    let res0 = get_res0_cells();
    assert_eq!(res0.len(), 122);
    assert!(res0.iter().all(|h| h.is_valid_cell() && h.resolution() == 0));

    for res in 0..=MAX_RESOLUTION {
      let pents = get_pentagons(res).unwrap();
      assert_eq!(pents.len(), 12);
      assert!(pents.iter().all(|h| h.is_pentagon() && h.resolution() == res));
    }
    assert!(get_pentagons(16).is_err());
  }

  #[test]
  fn cell_counts() {
    assert_eq!(get_num_cells(0).unwrap(), 122);
    assert_eq!(get_num_cells(1).unwrap(), 842);
    assert_eq!(get_num_cells(15).unwrap(), crate::constants::NUM_CELLS_MAX_RES);
    assert!(get_num_cells(-1).is_err());
  }

  #[test]
  fn pentagon_overlaps_five_faces() {
    for res in [1, 2, 5] {
      let pent = make_cell(res, 14, Direction::Center);
      let faces = get_icosahedron_faces(pent).unwrap();
      assert_eq!(faces.len(), 5, "res {res}");
      assert!(faces.iter().all(|&f| (0..20).contains(&f)));
    }
  }

  #[test]
  fn hexagon_faces_bounded() {
    let h = H3Index(0x85283473fffffff);
    let faces = get_icosahedron_faces(h).unwrap();
    assert!(!faces.is_empty() && faces.len() <= 2);
  }
}
