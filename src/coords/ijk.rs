//! IJK hexagon coordinate arithmetic.
//!
//! Cells on a face are addressed with a redundant three-axis coordinate whose
//! axes are spaced 120° apart. The canonical (normalized) form pulls the
//! smallest component to zero, leaving the other two non-negative.

use crate::constants::{RSIN60, SIN60};
use crate::error::HexError;
use crate::math::vec2d::Vec2d;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// One of the seven axial digits of the aperture-7 grid, or the invalid
/// sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Hash, Default)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum Direction {
  /// Center of the parent cell.
  #[default]
  Center = 0,
  /// K axis. Absent from pentagon cells (the deleted subsequence).
  K = 1,
  /// J axis.
  J = 2,
  /// J+K direction.
  Jk = 3,
  /// I axis.
  I = 4,
  /// I+K direction.
  Ik = 5,
  /// I+J direction.
  Ij = 6,
  /// Sentinel for an undefined digit; also the filler value in unused index
  /// digit slots.
  Invalid = 7,
}

impl Direction {
  /// All six non-center axial directions, in digit order.
  pub(crate) const AXIAL: [Direction; 6] = [
    Direction::K,
    Direction::J,
    Direction::Jk,
    Direction::I,
    Direction::Ik,
    Direction::Ij,
  ];

  /// Reinterprets a 3-bit value as a digit.
  pub(crate) fn from_digit(value: u64) -> Direction {
    match value & 7 {
      0 => Direction::Center,
      1 => Direction::K,
      2 => Direction::J,
      3 => Direction::Jk,
      4 => Direction::I,
      5 => Direction::Ik,
      6 => Direction::Ij,
      _ => Direction::Invalid,
    }
  }

  /// Rotates the digit 60° counter-clockwise. Center and the sentinel are
  /// unchanged.
  #[must_use]
  pub(crate) fn rotate60_ccw(self) -> Direction {
    match self {
      Direction::K => Direction::Ik,
      Direction::Ik => Direction::I,
      Direction::I => Direction::Ij,
      Direction::Ij => Direction::J,
      Direction::J => Direction::Jk,
      Direction::Jk => Direction::K,
      other => other,
    }
  }

  /// Rotates the digit 60° clockwise. Center and the sentinel are unchanged.
  #[must_use]
  pub(crate) fn rotate60_cw(self) -> Direction {
    match self {
      Direction::K => Direction::Jk,
      Direction::Jk => Direction::J,
      Direction::J => Direction::Ij,
      Direction::Ij => Direction::I,
      Direction::I => Direction::Ik,
      Direction::Ik => Direction::K,
      other => other,
    }
  }
}

/// IJK cube coordinate on a face grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordIJK {
  /// I component.
  pub i: i32,
  /// J component.
  pub j: i32,
  /// K component.
  pub k: i32,
}

/// 2D local IJ coordinate, `k` projected out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordIJ {
  /// I component.
  pub i: i32,
  /// J component.
  pub j: i32,
}

/// Unit vectors for the seven digits, indexed by digit value.
pub(crate) const UNIT_VECS: [CoordIJK; 7] = [
  CoordIJK::new(0, 0, 0), // Center
  CoordIJK::new(0, 0, 1), // K
  CoordIJK::new(0, 1, 0), // J
  CoordIJK::new(0, 1, 1), // Jk
  CoordIJK::new(1, 0, 0), // I
  CoordIJK::new(1, 0, 1), // Ik
  CoordIJK::new(1, 1, 0), // Ij
];

impl CoordIJK {
  pub(crate) const fn new(i: i32, j: i32, k: i32) -> Self {
    Self { i, j, k }
  }

  #[must_use]
  pub(crate) fn add(&self, other: &CoordIJK) -> CoordIJK {
    CoordIJK::new(self.i + other.i, self.j + other.j, self.k + other.k)
  }

  #[must_use]
  pub(crate) fn sub(&self, other: &CoordIJK) -> CoordIJK {
    CoordIJK::new(self.i - other.i, self.j - other.j, self.k - other.k)
  }

  #[must_use]
  pub(crate) fn scaled(&self, factor: i32) -> CoordIJK {
    CoordIJK::new(self.i * factor, self.j * factor, self.k * factor)
  }

  /// Canonicalizes in place: the smallest component becomes zero and the
  /// others non-negative.
  pub(crate) fn normalize(&mut self) {
    if self.i < 0 {
      self.j -= self.i;
      self.k -= self.i;
      self.i = 0;
    }
    if self.j < 0 {
      self.i -= self.j;
      self.k -= self.j;
      self.j = 0;
    }
    if self.k < 0 {
      self.i -= self.k;
      self.j -= self.k;
      self.k = 0;
    }
    let min = self.i.min(self.j).min(self.k);
    if min > 0 {
      self.i -= min;
      self.j -= min;
      self.k -= min;
    }
  }

  /// The digit this coordinate represents, if it normalizes to a unit vector
  /// or zero; `Direction::Invalid` otherwise.
  #[must_use]
  pub(crate) fn to_digit(&self) -> Direction {
    let mut c = *self;
    c.normalize();
    for (digit, unit) in UNIT_VECS.iter().enumerate() {
      if c == *unit {
        return Direction::from_digit(digit as u64);
      }
    }
    Direction::Invalid
  }

  /// Moves to the neighboring coordinate in the given digit direction,
  /// normalizing the result. Center and the sentinel are no-ops.
  pub(crate) fn neighbor(&mut self, digit: Direction) {
    if digit != Direction::Center && digit != Direction::Invalid {
      *self = self.add(&UNIT_VECS[digit as usize]);
      self.normalize();
    }
  }

  /// Rotates 60° counter-clockwise about the origin, normalizing the result.
  pub(crate) fn rotate60_ccw(&mut self) {
    *self = CoordIJK::new(1, 1, 0)
      .scaled(self.i)
      .add(&CoordIJK::new(0, 1, 1).scaled(self.j))
      .add(&CoordIJK::new(1, 0, 1).scaled(self.k));
    self.normalize();
  }

  /// Rotates 60° clockwise about the origin, normalizing the result.
  pub(crate) fn rotate60_cw(&mut self) {
    *self = CoordIJK::new(1, 0, 1)
      .scaled(self.i)
      .add(&CoordIJK::new(1, 1, 0).scaled(self.j))
      .add(&CoordIJK::new(0, 1, 1).scaled(self.k));
    self.normalize();
  }

  /// Coarsens to the containing cell of the counter-clockwise aperture-7 grid
  /// (Class III alignment).
  pub(crate) fn up_ap7(&mut self) {
    let i = self.i - self.k;
    let j = self.j - self.k;
    self.i = lround((3 * i - j) as f64 / 7.0);
    self.j = lround((i + 2 * j) as f64 / 7.0);
    self.k = 0;
    self.normalize();
  }

  /// Coarsens to the containing cell of the clockwise aperture-7 grid
  /// (Class II alignment).
  pub(crate) fn up_ap7r(&mut self) {
    let i = self.i - self.k;
    let j = self.j - self.k;
    self.i = lround((2 * i + j) as f64 / 7.0);
    self.j = lround((3 * j - i) as f64 / 7.0);
    self.k = 0;
    self.normalize();
  }

  /// Refines onto the next finer counter-clockwise aperture-7 grid.
  pub(crate) fn down_ap7(&mut self) {
    *self = CoordIJK::new(3, 0, 1)
      .scaled(self.i)
      .add(&CoordIJK::new(1, 3, 0).scaled(self.j))
      .add(&CoordIJK::new(0, 1, 3).scaled(self.k));
    self.normalize();
  }

  /// Refines onto the next finer clockwise aperture-7 grid.
  pub(crate) fn down_ap7r(&mut self) {
    *self = CoordIJK::new(3, 1, 0)
      .scaled(self.i)
      .add(&CoordIJK::new(0, 3, 1).scaled(self.j))
      .add(&CoordIJK::new(1, 0, 3).scaled(self.k));
    self.normalize();
  }

  /// Refines onto the counter-clockwise aperture-3 substrate grid.
  pub(crate) fn down_ap3(&mut self) {
    *self = CoordIJK::new(2, 0, 1)
      .scaled(self.i)
      .add(&CoordIJK::new(1, 2, 0).scaled(self.j))
      .add(&CoordIJK::new(0, 1, 2).scaled(self.k));
    self.normalize();
  }

  /// Refines onto the clockwise aperture-3 substrate grid.
  pub(crate) fn down_ap3r(&mut self) {
    *self = CoordIJK::new(2, 1, 0)
      .scaled(self.i)
      .add(&CoordIJK::new(0, 2, 1).scaled(self.j))
      .add(&CoordIJK::new(1, 0, 2).scaled(self.k));
    self.normalize();
  }

  /// Grid distance to another coordinate: the largest component of the
  /// normalized difference.
  #[must_use]
  pub(crate) fn distance(&self, other: &CoordIJK) -> i32 {
    let mut diff = self.sub(other);
    diff.normalize();
    diff.i.abs().max(diff.j.abs()).max(diff.k.abs())
  }

  /// Planar Cartesian center of this cell. Assumes normalized input.
  #[must_use]
  pub(crate) fn to_hex2d(&self) -> Vec2d {
    let i = (self.i - self.k) as f64;
    let j = (self.j - self.k) as f64;
    Vec2d::new(i - 0.5 * j, j * SIN60)
  }
}

/// Rounds to the nearest lattice point, ties away from zero (C `lround`).
fn lround(v: f64) -> i32 {
  if v >= 0.0 {
    (v + 0.5) as i32
  } else {
    (v - 0.5) as i32
  }
}

/// Quantizes a planar Cartesian coordinate into the containing hex cell
/// (DGGRID quantization).
pub(crate) fn hex2d_to_coord_ijk(v: &Vec2d) -> CoordIJK {
  let mut h = CoordIJK::default();

  let a1 = v.x.abs();
  let a2 = v.y.abs();

  // Reverse the conversion to skewed axial coordinates.
  let x2 = a2 * RSIN60;
  let x1 = a1 + x2 / 2.0;

  let m1 = x1 as i32;
  let m2 = x2 as i32;

  let r1 = x1 - m1 as f64;
  let r2 = x2 - m2 as f64;

  if r1 < 0.5 {
    if r1 < 1.0 / 3.0 {
      if r2 < (1.0 + r1) / 2.0 {
        h.i = m1;
        h.j = m2;
      } else {
        h.i = m1;
        h.j = m2 + 1;
      }
    } else {
      h.j = if r2 < (1.0 - r1) { m2 } else { m2 + 1 };
      h.i = if (1.0 - r1) <= r2 && r2 < (2.0 * r1) { m1 + 1 } else { m1 };
    }
  } else if r1 < 2.0 / 3.0 {
    h.j = if r2 < (1.0 - r1) { m2 } else { m2 + 1 };
    h.i = if (2.0 * r1 - 1.0) < r2 && r2 < (1.0 - r1) { m1 } else { m1 + 1 };
  } else if r2 < (r1 / 2.0) {
    h.i = m1 + 1;
    h.j = m2;
  } else {
    h.i = m1 + 1;
    h.j = m2 + 1;
  }

  // Fold across the axes for negative input.
  if v.x < 0.0 {
    if (h.j % 2) == 0 {
      let axis_i = i64::from(h.j) / 2;
      let diff = i64::from(h.i) - axis_i;
      h.i = (i64::from(h.i) - 2 * diff) as i32;
    } else {
      let axis_i = (i64::from(h.j) + 1) / 2;
      let diff = i64::from(h.i) - axis_i;
      h.i = (i64::from(h.i) - (2 * diff + 1)) as i32;
    }
  }
  if v.y < 0.0 {
    h.i = (i64::from(h.i) - (2 * i64::from(h.j) + 1) / 2) as i32;
    h.j = -h.j;
  }

  h.normalize();
  h
}

/// Rounds fractional cube-coordinate components to the nearest valid lattice
/// point, redistributing the axis with the largest rounding error to keep
/// `i + j + k == 0`.
pub fn cube_round(i: f64, j: f64, k: f64) -> CoordIJK {
  let mut ri = i.round() as i32;
  let mut rj = j.round() as i32;
  let mut rk = k.round() as i32;

  let i_diff = (f64::from(ri) - i).abs();
  let j_diff = (f64::from(rj) - j).abs();
  let k_diff = (f64::from(rk) - k).abs();

  if i_diff > j_diff && i_diff > k_diff {
    ri = -rj - rk;
  } else if j_diff > k_diff {
    rj = -ri - rk;
  } else {
    rk = -ri - rj;
  }
  CoordIJK::new(ri, rj, rk)
}

/// Converts normalized IJK to cube coordinates (`i + j + k == 0`), in place.
pub fn ijk_to_cube(ijk: &mut CoordIJK) {
  ijk.i = -ijk.i + ijk.k;
  ijk.j -= ijk.k;
  ijk.k = -ijk.i - ijk.j;
}

/// Converts cube coordinates back to normalized IJK, in place.
pub fn cube_to_ijk(ijk: &mut CoordIJK) {
  ijk.i = -ijk.i;
  ijk.k = 0;
  ijk.normalize();
}

/// Projects a local IJK coordinate to its 2D IJ form.
pub(crate) fn ijk_to_ij(ijk: &CoordIJK) -> CoordIJ {
  CoordIJ {
    i: ijk.i - ijk.k,
    j: ijk.j - ijk.k,
  }
}

/// Lifts a 2D IJ coordinate into normalized IJK form, guarding the
/// normalization against signed overflow on hostile input.
pub(crate) fn ij_to_ijk(ij: &CoordIJ) -> Result<CoordIJK, HexError> {
  let (max, min) = if ij.i > ij.j { (ij.i, ij.j) } else { (ij.j, ij.i) };
  if min < 0 && (max.checked_add(min).is_none() || max.checked_sub(min).is_none() || min.checked_neg().is_none()) {
    return Err(HexError::Failed);
  }

  let mut ijk = CoordIJK::new(ij.i, ij.j, 0);
  ijk.normalize();
  Ok(ijk)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn normalize_canonical_forms() {
    let mut c = CoordIJK::new(2, 3, 4);
    c.normalize();
    assert_eq!(c, CoordIJK::new(0, 1, 2));

    let mut c = CoordIJK::new(-2, -3, -4);
    c.normalize();
    assert_eq!(c, CoordIJK::new(2, 1, 0));

    let mut c = CoordIJK::new(2, -1, 0);
    c.normalize();
    assert_eq!(c, CoordIJK::new(3, 0, 1));

    let mut c = CoordIJK::new(0, 0, 0);
    c.normalize();
    assert_eq!(c, CoordIJK::new(0, 0, 0));
  }

  #[test]
  fn digit_bijection() {
    for digit in 0..7u64 {
      let dir = Direction::from_digit(digit);
      assert_eq!(UNIT_VECS[digit as usize].to_digit(), dir);
    }
    assert_eq!(CoordIJK::new(2, 0, 0).to_digit(), Direction::Invalid);
    // Unnormalized input still resolves.
    assert_eq!(CoordIJK::new(1, 1, 2).to_digit(), Direction::K);
  }

  #[test]
  fn digit_rotation_cycles() {
    let mut d = Direction::K;
    for _ in 0..6 {
      d = d.rotate60_ccw();
    }
    assert_eq!(d, Direction::K);
    assert_eq!(Direction::K.rotate60_ccw().rotate60_cw(), Direction::K);
    assert_eq!(Direction::Center.rotate60_ccw(), Direction::Center);
    assert_eq!(Direction::Invalid.rotate60_cw(), Direction::Invalid);
  }

  #[test]
  fn coordinate_rotation_round_trip() {
    let orig = CoordIJK::new(3, 1, 0);
    let mut c = orig;
    for _ in 0..6 {
      c.rotate60_ccw();
    }
    assert_eq!(c, orig);
    c.rotate60_cw();
    c.rotate60_ccw();
    assert_eq!(c, orig);
  }

  #[test]
  fn aperture7_round_trip() {
    // Down-sampling the origin then any unit step keeps up-sampling exact.
    for digit in 1..7u64 {
      let mut c = UNIT_VECS[digit as usize];
      c.down_ap7();
      c.up_ap7();
      assert_eq!(c, UNIT_VECS[digit as usize], "ap7 ccw digit {digit}");

      let mut c = UNIT_VECS[digit as usize];
      c.down_ap7r();
      c.up_ap7r();
      assert_eq!(c, UNIT_VECS[digit as usize], "ap7 cw digit {digit}");
    }
  }

  #[test]
  fn neighbor_moves_one_step() {
    let mut c = CoordIJK::default();
    c.neighbor(Direction::I);
    assert_eq!(c, UNIT_VECS[Direction::I as usize]);
    assert_eq!(c.distance(&CoordIJK::default()), 1);

    let before = c;
    c.neighbor(Direction::Center);
    assert_eq!(c, before);
  }

  #[test]
  fn ijk_distance_is_hex_metric() {
    let z = CoordIJK::new(0, 0, 0);
    let i = CoordIJK::new(1, 0, 0);
    let ik = CoordIJK::new(1, 0, 1);
    let ij = CoordIJK::new(1, 1, 0);
    let j2 = CoordIJK::new(0, 2, 0);
    assert_eq!(z.distance(&z), 0);
    assert_eq!(z.distance(&i), 1);
    assert_eq!(z.distance(&ik), 1);
    assert_eq!(z.distance(&ij), 1);
    assert_eq!(z.distance(&j2), 2);
  }

  #[test]
  fn hex2d_quantization_centers() {
    for digit in 0..7u64 {
      let c = UNIT_VECS[digit as usize];
      let v = c.to_hex2d();
      assert_eq!(hex2d_to_coord_ijk(&v), c, "digit {digit}");
    }
  }

  #[test]
  fn cube_round_exact_and_tied() {
    let c = cube_round(0.0, 0.0, 0.0);
    assert_eq!(c, CoordIJK::new(0, 0, 0));
    let c = cube_round(1.2, -0.6, -0.6);
    assert_eq!(c.i + c.j + c.k, 0);
    // Largest residual axis is redistributed.
    let c = cube_round(2.4, -1.0, -1.0);
    assert_eq!(c, CoordIJK::new(2, -1, -1));
  }

  #[test]
  fn cube_conversion_round_trip() {
    for digit in 0..7usize {
      let orig = UNIT_VECS[digit];
      let mut c = orig;
      ijk_to_cube(&mut c);
      assert_eq!(c.i + c.j + c.k, 0, "cube sum digit {digit}");
      cube_to_ijk(&mut c);
      assert_eq!(c, orig, "digit {digit}");
    }
  }

  #[test]
  fn ij_round_trip() {
    for digit in 0..7usize {
      let orig = UNIT_VECS[digit];
      let ij = ijk_to_ij(&orig);
      let back = ij_to_ijk(&ij).unwrap();
      assert_eq!(back, orig);
    }
    // Hostile input errors instead of overflowing.
    assert_eq!(
      ij_to_ijk(&CoordIJ {
        i: i32::MAX,
        j: i32::MIN
      }),
      Err(HexError::Failed)
    );
  }
}
