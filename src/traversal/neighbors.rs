//! The neighbor-traversal state machine.
//!
//! Stepping from a cell to its neighbor in a digit direction rewrites index
//! digits from finest to coarsest, crossing base cells and icosahedron faces
//! as needed. The accumulated rotation count carried between steps accounts
//! for the reorientation those crossings introduce, and a family of fixed
//! tables corrects for pentagon distortion.

use crate::base_cells::{
  base_cell_is_cw_offset, base_cell_neighbor, base_cell_to_face_ijk, is_base_cell_pentagon,
  is_base_cell_polar_pentagon, BASE_CELL_NEIGHBOR_60CCW_ROTS, INVALID_BASE_CELL,
};
use crate::constants::NUM_BASE_CELLS;
use crate::coords::ijk::Direction;
use crate::error::HexError;
use crate::index::{is_resolution_class_iii, H3Index, CELL_MODE};

/// New digit when rotating into an adjacent resolution subdivision, Class II.
#[rustfmt::skip]
const NEW_DIGIT_II: [[Direction; 7]; 7] = {
  use Direction::*;
  [
    [Center, K,      J,      Jk,     I,      Ik,     Ij],
    [K,      I,      Jk,     Ij,     Ik,     J,      Center],
    [J,      Jk,     K,      I,      Ij,     Center, Ik],
    [Jk,     Ij,     I,      Ik,     Center, K,      J],
    [I,      Ik,     Ij,     Center, J,      Jk,     K],
    [Ik,     J,      Center, K,      Jk,     Ij,     I],
    [Ij,     Center, Ik,     J,      K,      I,      Jk],
  ]
};

/// Direction to propagate to the coarser level, Class II.
#[rustfmt::skip]
const NEW_ADJUSTMENT_II: [[Direction; 7]; 7] = {
  use Direction::*;
  [
    [Center, Center, Center, Center, Center, Center, Center],
    [Center, K,      Center, K,      Center, Ik,     Center],
    [Center, Center, J,      Jk,     Center, Center, J],
    [Center, K,      Jk,     Jk,     Center, Center, Center],
    [Center, Center, Center, Center, I,      I,      Ij],
    [Center, Ik,     Center, Center, I,      Ik,     Center],
    [Center, Center, J,      Center, Ij,     Center, Ij],
  ]
};

/// New digit when rotating into an adjacent resolution subdivision, Class III.
#[rustfmt::skip]
const NEW_DIGIT_III: [[Direction; 7]; 7] = {
  use Direction::*;
  [
    [Center, K,      J,      Jk,     I,      Ik,     Ij],
    [K,      J,      Jk,     I,      Ik,     Ij,     Center],
    [J,      Jk,     I,      Ik,     Ij,     Center, K],
    [Jk,     I,      Ik,     Ij,     Center, K,      J],
    [I,      Ik,     Ij,     Center, K,      J,      Jk],
    [Ik,     Ij,     Center, K,      J,      Jk,     I],
    [Ij,     Center, K,      J,      Jk,     I,      Ik],
  ]
};

/// Direction to propagate to the coarser level, Class III.
#[rustfmt::skip]
const NEW_ADJUSTMENT_III: [[Direction; 7]; 7] = {
  use Direction::*;
  [
    [Center, Center, Center, Center, Center, Center, Center],
    [Center, K,      Center, Jk,     Center, K,      Center],
    [Center, Center, J,      J,      Center, Center, Ij],
    [Center, Jk,     J,      Jk,     Center, Center, Center],
    [Center, Center, Center, Center, I,      Ik,     I],
    [Center, K,      Center, Center, Ik,     Ik,     Center],
    [Center, Center, Ij,     Center, I,      Center, Ij],
  ]
};

/// Steps from `origin` to its neighbor in `dir`, threading the accumulated
/// ccw rotation count between calls.
///
/// The input `rotations` is applied to `dir` before stepping; the returned
/// count folds in the reorientation introduced by any base-cell or face
/// crossing. Fails with [`HexError::Pentagon`] only for moves into a
/// pentagon's deleted K subsequence that have no defined result.
pub(crate) fn neighbor_rotations(origin: H3Index, dir: Direction, rotations: i32) -> Result<(H3Index, i32), HexError> {
  if dir == Direction::Center || dir == Direction::Invalid {
    return Err(HexError::Failed);
  }

  let mut current = origin;
  let mut rotations = rotations.rem_euclid(6);
  let mut dir = dir;
  for _ in 0..rotations {
    dir = dir.rotate60_ccw();
  }

  let old_base_cell = origin.base_cell();
  if old_base_cell < 0 || old_base_cell >= NUM_BASE_CELLS {
    return Err(HexError::CellInvalid);
  }
  let old_leading_digit = origin.leading_non_zero_digit();

  // Rewrite digits from finest to coarsest until the adjustment direction
  // stops propagating.
  let mut new_rotations = 0;
  let mut r = current.resolution() - 1;
  loop {
    if r == -1 {
      if is_base_cell_pentagon(old_base_cell) && dir == Direction::K && old_leading_digit == Direction::Center {
        // Moving a pentagon cell itself into its deleted K subsequence has
        // no defined result.
        return Err(HexError::Pentagon);
      }

      current.set_base_cell(base_cell_neighbor(old_base_cell, dir));
      new_rotations = BASE_CELL_NEIGHBOR_60CCW_ROTS[old_base_cell as usize][dir as usize];

      if current.base_cell() == INVALID_BASE_CELL {
        // The deleted K vertex at the base cell level; this edge actually
        // borders the IK neighbor.
        current.set_base_cell(base_cell_neighbor(old_base_cell, Direction::Ik));
        new_rotations = BASE_CELL_NEIGHBOR_60CCW_ROTS[old_base_cell as usize][Direction::Ik as usize];
        current = current.rotate60_ccw();
        rotations = (rotations + 1) % 6;
      }
      break;
    }

    let old_digit = current.digit(r + 1);
    if old_digit == Direction::Invalid {
      // Only possible on invalid input.
      return Err(HexError::CellInvalid);
    }

    let next_dir;
    if is_resolution_class_iii(r + 1) {
      current.set_digit(r + 1, NEW_DIGIT_II[old_digit as usize][dir as usize]);
      next_dir = NEW_ADJUSTMENT_II[old_digit as usize][dir as usize];
    } else {
      current.set_digit(r + 1, NEW_DIGIT_III[old_digit as usize][dir as usize]);
      next_dir = NEW_ADJUSTMENT_III[old_digit as usize][dir as usize];
    }

    if next_dir == Direction::Center {
      break;
    }
    dir = next_dir;
    r -= 1;
  }

  let new_base_cell = current.base_cell();
  if is_base_cell_pentagon(new_base_cell) {
    let mut already_adjusted_k_subsequence = false;

    // Force rotation out of the missing K-axes sub-sequence.
    if current.leading_non_zero_digit() == Direction::K {
      if old_base_cell != new_base_cell {
        // Entered the deleted subsequence from another base cell; rotate out
        // based on the vertex winding of the face we came from.
        if base_cell_is_cw_offset(new_base_cell, base_cell_to_face_ijk(old_base_cell).face) {
          current = current.rotate60_cw();
        } else {
          current = current.rotate60_ccw();
        }
        already_adjusted_k_subsequence = true;
      } else {
        // Entered the deleted subsequence from within the same pentagon.
        match old_leading_digit {
          // Undefined: the K direction is deleted from here.
          Direction::Center => return Err(HexError::Pentagon),
          Direction::Jk => {
            current = current.rotate60_ccw();
            rotations = (rotations + 1) % 6;
          }
          Direction::Ik => {
            current = current.rotate60_cw();
            rotations = (rotations + 5) % 6;
          }
          _ => return Err(HexError::Failed),
        }
      }
    }

    for _ in 0..new_rotations {
      current = current.rotate_pent60_ccw();
    }

    if old_base_cell != new_base_cell {
      if is_base_cell_polar_pentagon(new_base_cell) {
        // Polar pentagons are distorted for every neighbor except the two
        // aligned ones.
        if old_base_cell != 118 && old_base_cell != 8 && current.leading_non_zero_digit() != Direction::Jk {
          rotations = (rotations + 1) % 6;
        }
      } else if current.leading_non_zero_digit() == Direction::Ik && !already_adjusted_k_subsequence {
        rotations = (rotations + 1) % 6;
      }
    }
  } else {
    for _ in 0..new_rotations {
      current = current.rotate60_ccw();
    }
  }

  Ok((current, (rotations + new_rotations) % 6))
}

/// The digit direction from `origin` to a neighboring cell, or
/// `Direction::Invalid` when the cells are not neighbors.
pub(crate) fn direction_for_neighbor(origin: H3Index, destination: H3Index) -> Direction {
  if origin == destination {
    return Direction::Center;
  }

  // Pentagons have no K neighbor.
  let start = if origin.is_pentagon() { Direction::J as u64 } else { Direction::K as u64 };
  for digit in start..=Direction::Ij as u64 {
    let dir = Direction::from_digit(digit);
    match neighbor_rotations(origin, dir, 0) {
      Ok((neighbor, _)) if neighbor == destination => return dir,
      _ => {}
    }
  }
  Direction::Invalid
}

/// Whether two cells share an edge.
pub fn are_neighbor_cells(origin: H3Index, destination: H3Index) -> Result<bool, HexError> {
  if origin.mode() != CELL_MODE || destination.mode() != CELL_MODE {
    return Err(HexError::CellInvalid);
  }
  if origin == destination {
    return Ok(false);
  }
  if origin.resolution() != destination.resolution() {
    return Err(HexError::ResMismatch);
  }
  if !origin.is_valid_cell() || !destination.is_valid_cell() {
    return Err(HexError::CellInvalid);
  }
  Ok(direction_for_neighbor(origin, destination) != Direction::Invalid)
}
