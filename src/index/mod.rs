//! The 64-bit packed cell index and its bit-level codec.
//!
//! Bit layout, high to low: 1 reserved high bit (always 0), 4-bit mode,
//! 3-bit reserved field (carries the edge direction in directed-edge mode),
//! 4-bit resolution, 7-bit base cell, then fifteen 3-bit digit slots. Digit
//! slots finer than the index resolution hold the filler value 7.

pub mod inspection;

use crate::base_cells::{
  self, base_cell_to_face_ijk, face_ijk_to_base_cell, face_ijk_to_base_cell_ccw_rot60, is_base_cell_pentagon,
  INVALID_BASE_CELL, INVALID_ROTATIONS, MAX_FACE_COORD,
};
use crate::constants::{MAX_RESOLUTION, NUM_BASE_CELLS};
use crate::coords::face_ijk::{adjust_overage_class_ii, FaceIJK, Overage};
use crate::coords::ijk::Direction;
use crate::error::HexError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Index mode for cells.
pub(crate) const CELL_MODE: u8 = 1;
/// Index mode for directed edges.
pub(crate) const DIRECTED_EDGE_MODE: u8 = 2;

const MODE_OFFSET: u8 = 59;
const RESERVED_OFFSET: u8 = 56;
const RES_OFFSET: u8 = 52;
const BC_OFFSET: u8 = 45;
const PER_DIGIT_OFFSET: u8 = 3;

const HIGH_BIT_MASK: u64 = 1 << 63;
const MODE_MASK: u64 = 0b1111 << MODE_OFFSET;
const RESERVED_MASK: u64 = 0b111 << RESERVED_OFFSET;
const RES_MASK: u64 = 0b1111 << RES_OFFSET;
const BC_MASK: u64 = 0b111_1111 << BC_OFFSET;
const DIGIT_MASK: u64 = 0b111;

/// Mode 0, res 0, base cell 0, every digit slot holding the filler value 7.
pub(crate) const INIT: u64 = 0x0000_1fff_ffff_ffff;

/// A 64-bit packed cell or directed-edge index.
///
/// Indices are immutable values; every transform produces a new index. The
/// zero value is the invalid-index sentinel [`H3_NULL`].
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct H3Index(pub u64);

/// The invalid-index sentinel.
pub const H3_NULL: H3Index = H3Index(0);

impl H3Index {
  /// Index mode field, 1 for cells and 2 for directed edges.
  #[must_use]
  pub fn mode(self) -> u8 {
    ((self.0 & MODE_MASK) >> MODE_OFFSET) as u8
  }

  pub(crate) fn set_mode(&mut self, mode: u8) {
    self.0 = (self.0 & !MODE_MASK) | (u64::from(mode) << MODE_OFFSET);
  }

  /// Resolution of the index, 0-15.
  #[must_use]
  pub fn resolution(self) -> i32 {
    ((self.0 & RES_MASK) >> RES_OFFSET) as i32
  }

  pub(crate) fn set_resolution(&mut self, res: i32) {
    self.0 = (self.0 & !RES_MASK) | ((res as u64) << RES_OFFSET);
  }

  /// Base cell number of the index, 0-121 for valid indices.
  #[must_use]
  pub fn base_cell(self) -> i32 {
    ((self.0 & BC_MASK) >> BC_OFFSET) as i32
  }

  pub(crate) fn set_base_cell(&mut self, base_cell: i32) {
    self.0 = (self.0 & !BC_MASK) | ((base_cell as u64) << BC_OFFSET);
  }

  pub(crate) fn reserved_bits(self) -> u8 {
    ((self.0 & RESERVED_MASK) >> RESERVED_OFFSET) as u8
  }

  pub(crate) fn set_reserved_bits(&mut self, v: u8) {
    self.0 = (self.0 & !RESERVED_MASK) | (u64::from(v) << RESERVED_OFFSET);
  }

  pub(crate) fn high_bit(self) -> u8 {
    (self.0 >> 63) as u8
  }

  /// Digit at resolution level `res` (1-based).
  pub(crate) fn digit(self, res: i32) -> Direction {
    Direction::from_digit(self.0 >> ((MAX_RESOLUTION - res) as u8 * PER_DIGIT_OFFSET))
  }

  pub(crate) fn set_digit(&mut self, res: i32, digit: Direction) {
    let shift = (MAX_RESOLUTION - res) as u8 * PER_DIGIT_OFFSET;
    self.0 = (self.0 & !(DIGIT_MASK << shift)) | ((digit as u64) << shift);
  }

  /// The coarsest non-center digit, or `Center` when all digits are center.
  pub(crate) fn leading_non_zero_digit(self) -> Direction {
    for r in 1..=self.resolution() {
      let digit = self.digit(r);
      if digit != Direction::Center {
        return digit;
      }
    }
    Direction::Center
  }

  /// Rotates all digits 60° counter-clockwise.
  #[must_use]
  pub(crate) fn rotate60_ccw(mut self) -> H3Index {
    for r in 1..=self.resolution() {
      let digit = self.digit(r).rotate60_ccw();
      self.set_digit(r, digit);
    }
    self
  }

  /// Rotates all digits 60° clockwise.
  #[must_use]
  pub(crate) fn rotate60_cw(mut self) -> H3Index {
    for r in 1..=self.resolution() {
      let digit = self.digit(r).rotate60_cw();
      self.set_digit(r, digit);
    }
    self
  }

  /// Rotates 60° counter-clockwise about a pentagonal center, skipping the
  /// deleted K subsequence.
  #[must_use]
  pub(crate) fn rotate_pent60_ccw(mut self) -> H3Index {
    let res = self.resolution();
    let mut found_first = false;
    for r in 1..=res {
      let digit = self.digit(r).rotate60_ccw();
      self.set_digit(r, digit);
      if !found_first && digit != Direction::Center {
        found_first = true;
        if self.leading_non_zero_digit() == Direction::K {
          self = self.rotate_pent60_ccw();
        }
      }
    }
    self
  }

  /// Rotates 60° clockwise about a pentagonal center, skipping the deleted K
  /// subsequence.
  #[must_use]
  pub(crate) fn rotate_pent60_cw(mut self) -> H3Index {
    let res = self.resolution();
    let mut found_first = false;
    for r in 1..=res {
      let digit = self.digit(r).rotate60_cw();
      self.set_digit(r, digit);
      if !found_first && digit != Direction::Center {
        found_first = true;
        if self.leading_non_zero_digit() == Direction::K {
          self = self.rotate_pent60_cw();
        }
      }
    }
    self
  }
}

/// An index printed as 16 lowercase hex characters, zero-padded, representing
/// the 64-bit value exactly.
impl fmt::Display for H3Index {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:016x}", self.0)
  }
}

impl FromStr for H3Index {
  type Err = HexError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if s.is_empty() || s.len() > 16 {
      return Err(HexError::Failed);
    }
    u64::from_str_radix(s, 16).map(H3Index).map_err(|_| HexError::Failed)
  }
}

/// Whether the resolution has Class III rotational alignment (odd
/// resolutions).
#[inline]
#[must_use]
pub(crate) fn is_resolution_class_iii(res: i32) -> bool {
  res % 2 == 1
}

/// A cell index with the given resolution and base cell, all digits set to
/// `init_digit`.
pub(crate) fn make_cell(res: i32, base_cell: i32, init_digit: Direction) -> H3Index {
  let mut h = H3Index(INIT);
  h.set_mode(CELL_MODE);
  h.set_resolution(res);
  h.set_base_cell(base_cell);
  for r in 1..=res {
    h.set_digit(r, init_digit);
  }
  h
}

/// Encodes a [`FaceIJK`] address at the given resolution into a cell index,
/// or [`H3_NULL`] when the coordinate is outside the face's res-0 range.
pub(crate) fn face_ijk_to_h3(fijk: &FaceIJK, res: i32) -> H3Index {
  let mut h = H3Index(INIT);
  h.set_mode(CELL_MODE);
  h.set_resolution(res);

  if res == 0 {
    if fijk.coord.i > MAX_FACE_COORD || fijk.coord.j > MAX_FACE_COORD || fijk.coord.k > MAX_FACE_COORD {
      return H3_NULL;
    }
    let base_cell = face_ijk_to_base_cell(fijk);
    if base_cell == INVALID_BASE_CELL {
      return H3_NULL;
    }
    h.set_base_cell(base_cell);
    return h;
  }

  // Build the index digits from finest to coarsest, walking the coordinate up
  // to the res-0 grid.
  let mut fijk_bc = *fijk;
  for r in (1..=res).rev() {
    let last_ijk = fijk_bc.coord;
    let mut last_center;
    if is_resolution_class_iii(r) {
      fijk_bc.coord.up_ap7();
      last_center = fijk_bc.coord;
      last_center.down_ap7();
    } else {
      fijk_bc.coord.up_ap7r();
      last_center = fijk_bc.coord;
      last_center.down_ap7r();
    }

    let mut diff = last_ijk.sub(&last_center);
    diff.normalize();
    let digit = diff.to_digit();
    if digit == Direction::Invalid {
      return H3_NULL;
    }
    h.set_digit(r, digit);
  }

  if fijk_bc.coord.i > MAX_FACE_COORD || fijk_bc.coord.j > MAX_FACE_COORD || fijk_bc.coord.k > MAX_FACE_COORD {
    return H3_NULL;
  }

  let base_cell = face_ijk_to_base_cell(&fijk_bc);
  if base_cell == INVALID_BASE_CELL {
    return H3_NULL;
  }
  h.set_base_cell(base_cell);

  let num_rots = face_ijk_to_base_cell_ccw_rot60(&fijk_bc);
  if num_rots == INVALID_ROTATIONS {
    return H3_NULL;
  }

  if is_base_cell_pentagon(base_cell) {
    // Force rotation out of the missing K-axes sub-sequence.
    if h.leading_non_zero_digit() == Direction::K {
      if base_cells::base_cell_is_cw_offset(base_cell, fijk_bc.face) {
        h = h.rotate60_cw();
      } else {
        h = h.rotate60_ccw();
      }
    }
    for _ in 0..num_rots {
      h = h.rotate_pent60_ccw();
    }
  } else {
    for _ in 0..num_rots {
      h = h.rotate60_ccw();
    }
  }
  h
}

/// Decodes a cell index to its canonical [`FaceIJK`] address, adjusting for
/// face overage where the cell's projection leaves its base cell's home face.
pub(crate) fn h3_to_face_ijk(h: H3Index) -> Result<FaceIJK, HexError> {
  let base_cell = h.base_cell();
  if base_cell < 0 || base_cell >= NUM_BASE_CELLS {
    return Err(HexError::CellInvalid);
  }

  // Adjust for the pentagonal missing sequence; all cells with the IK leading
  // digit need to be flipped.
  let mut h = h;
  if is_base_cell_pentagon(base_cell) && h.leading_non_zero_digit() == Direction::Ik {
    h = h.rotate60_cw();
  }

  let mut fijk = base_cell_to_face_ijk(base_cell);
  if !h3_to_face_ijk_with_initialized(h, &mut fijk) {
    return Ok(fijk);
  }

  // The cell may have overflowed the home face. Overage adjustment runs on a
  // Class II grid, so Class III coordinates shift to the next finer grid.
  let orig_ijk = fijk.coord;
  let res = h.resolution();
  let mut adj_res = res;
  if is_resolution_class_iii(res) {
    fijk.coord.down_ap7r();
    adj_res += 1;
  }

  let pent_leading_4 = is_base_cell_pentagon(base_cell) && h.leading_non_zero_digit() == Direction::I;
  let mut overage = adjust_overage_class_ii(&mut fijk, adj_res, pent_leading_4, false);

  if overage != Overage::None {
    // Pentagon base cells can overflow through a second face edge.
    if is_base_cell_pentagon(base_cell) {
      while overage == Overage::NewFace {
        overage = adjust_overage_class_ii(&mut fijk, adj_res, false, false);
      }
    }
    if adj_res != res {
      fijk.coord.up_ap7r();
    }
  } else if adj_res != res {
    fijk.coord = orig_ijk;
  }
  Ok(fijk)
}

/// Applies the index digits to a [`FaceIJK`] pre-seeded with the base cell's
/// home coordinate (or another face's view of it). Returns whether the result
/// can have overflowed the face.
pub(crate) fn h3_to_face_ijk_with_initialized(h: H3Index, fijk: &mut FaceIJK) -> bool {
  let res = h.resolution();

  let mut possible_overage = true;
  if !is_base_cell_pentagon(h.base_cell())
    && (res == 0 || (fijk.coord.i == 0 && fijk.coord.j == 0 && fijk.coord.k == 0))
  {
    possible_overage = false;
  }

  for r in 1..=res {
    if is_resolution_class_iii(r) {
      fijk.coord.down_ap7();
    } else {
      fijk.coord.down_ap7r();
    }
    fijk.coord.neighbor(h.digit(r));
  }
  possible_overage
}
