//! Disk (filled) and ring (hollow) neighborhood queries.
//!
//! The fast spiral walk fails the moment a pentagon or its distortion area is
//! encountered; the safe entry points then discard everything and recompute
//! with a slower recursive walk that tolerates the distortion.

use crate::constants::NUM_CELLS_MAX_RES;
use crate::coords::ijk::Direction;
use crate::error::HexError;
use crate::index::{H3Index, H3_NULL};
use crate::traversal::neighbors::neighbor_rotations;
use tracing::trace;

/// Ring traversal order; one direction per ring side.
const DIRECTIONS: [Direction; 6] = [
  Direction::J,
  Direction::Jk,
  Direction::K,
  Direction::Ik,
  Direction::I,
  Direction::Ij,
];

/// Direction used to move one ring outward.
const NEXT_RING_DIRECTION: Direction = Direction::I;

/// Disk radius guaranteed to contain every cell at the finest resolution.
const K_ALL_CELLS_AT_RES_15: i32 = 13_780_510;

/// Maximum number of cells in a disk of radius `k`: `3k(k+1) + 1`.
pub fn max_grid_disk_size(k: i32) -> Result<i64, HexError> {
  if k < 0 {
    return Err(HexError::Domain);
  }
  if k >= K_ALL_CELLS_AT_RES_15 {
    return Ok(NUM_CELLS_MAX_RES);
  }
  let k = i64::from(k);
  Ok(3 * k * (k + 1) + 1)
}

/// Cells within `k` steps of `origin` with their grid distances, produced by
/// the fast spiral walk.
///
/// Cells appear in order of increasing distance. Fails with
/// [`HexError::Pentagon`] as soon as a pentagon or its distortion area is
/// encountered; partial output is discarded.
pub fn grid_disk_distances_unsafe(origin: H3Index, k: i32) -> Result<Vec<(H3Index, i32)>, HexError> {
  if k < 0 {
    return Err(HexError::Domain);
  }

  let max_size = max_grid_disk_size(k)? as usize;
  let mut out = Vec::with_capacity(max_size);
  out.push((origin, 0));
  if origin.is_pentagon() {
    return Err(HexError::Pentagon);
  }

  let mut current = origin;
  let mut rotations = 0;
  let mut ring = 1;
  let mut direction = 0;
  let mut i = 0;

  while ring <= k {
    if direction == 0 && i == 0 {
      // Move out one ring; the cell is recorded on the next side step.
      let (next, rot) = neighbor_rotations(current, NEXT_RING_DIRECTION, rotations)?;
      current = next;
      rotations = rot;
      if current.is_pentagon() {
        return Err(HexError::Pentagon);
      }
    }

    let (next, rot) = neighbor_rotations(current, DIRECTIONS[direction], rotations)?;
    current = next;
    rotations = rot;
    out.push((current, ring));

    i += 1;
    if i == ring {
      i = 0;
      direction += 1;
      if direction == 6 {
        direction = 0;
        ring += 1;
      }
    }

    if current.is_pentagon() {
      return Err(HexError::Pentagon);
    }
  }
  Ok(out)
}

/// Cells within `k` steps of `origin` via the fast spiral walk, without
/// distances.
pub fn grid_disk_unsafe(origin: H3Index, k: i32) -> Result<Vec<H3Index>, HexError> {
  Ok(grid_disk_distances_unsafe(origin, k)?.into_iter().map(|(h, _)| h).collect())
}

/// Recursive duplicate-tolerant walk. The output buffer doubles as an
/// open-addressed hash set keyed by `index % capacity`, recording the minimum
/// distance seen per cell; the fixed capacity `max_grid_disk_size(k)` is a
/// deliberate performance property of this fallback.
fn grid_disk_distances_internal(
  origin: H3Index,
  k: i32,
  out: &mut [H3Index],
  distances: &mut [i32],
  current_k: i32,
) {
  if origin == H3_NULL {
    return;
  }

  let max_idx = out.len();
  let mut off = (origin.0 % max_idx as u64) as usize;
  while out[off] != H3_NULL && out[off] != origin {
    off = (off + 1) % max_idx;
  }
  if out[off] == origin && distances[off] <= current_k {
    return;
  }

  out[off] = origin;
  distances[off] = current_k;

  if current_k >= k {
    return;
  }

  for dir in DIRECTIONS {
    // A pentagon refusal just means no neighbor in that direction.
    if let Ok((neighbor, _)) = neighbor_rotations(origin, dir, 0) {
      grid_disk_distances_internal(neighbor, k, out, distances, current_k + 1);
    }
  }
}

/// Cells within `k` steps of `origin` with their grid distances, correct in
/// the presence of pentagons.
///
/// The fast spiral walk is attempted first; if it reports distortion its
/// partial results are discarded entirely and the disk is recomputed from
/// scratch with the recursive walk.
pub fn grid_disk_distances(origin: H3Index, k: i32) -> Result<Vec<(H3Index, i32)>, HexError> {
  if k < 0 {
    return Err(HexError::Domain);
  }

  match grid_disk_distances_unsafe(origin, k) {
    Ok(result) => Ok(result),
    Err(_) => {
      trace!(origin = %origin, k, "fast disk walk hit pentagon distortion; recomputing recursively");
      let max_size = max_grid_disk_size(k)? as usize;
      let mut cells = vec![H3_NULL; max_size];
      let mut distances = vec![0i32; max_size];
      grid_disk_distances_internal(origin, k, &mut cells, &mut distances, 0);
      Ok(
        cells
          .into_iter()
          .zip(distances)
          .filter(|&(h, _)| h != H3_NULL)
          .collect(),
      )
    }
  }
}

/// Cells within `k` steps of `origin`, correct in the presence of pentagons.
pub fn grid_disk(origin: H3Index, k: i32) -> Result<Vec<H3Index>, HexError> {
  Ok(grid_disk_distances(origin, k)?.into_iter().map(|(h, _)| h).collect())
}

/// The hollow ring of cells at exactly `k` steps from `origin`.
///
/// Walks `k` steps outward and then traces the six sides of the ring,
/// verifying that the walk closes on its starting cell; a mismatch indicates
/// pentagon distortion and is reported as [`HexError::Pentagon`].
pub fn grid_ring_unsafe(origin: H3Index, k: i32) -> Result<Vec<H3Index>, HexError> {
  if k < 0 {
    return Err(HexError::Domain);
  }
  if k == 0 {
    return Ok(vec![origin]);
  }

  if origin.is_pentagon() {
    return Err(HexError::Pentagon);
  }

  let mut current = origin;
  let mut rotations = 0;
  for _ in 0..k {
    let (next, rot) = neighbor_rotations(current, NEXT_RING_DIRECTION, rotations)?;
    current = next;
    rotations = rot;
    if current.is_pentagon() {
      return Err(HexError::Pentagon);
    }
  }

  let first = current;
  let mut out = Vec::with_capacity(6 * k as usize);
  out.push(current);

  for (side, &dir) in DIRECTIONS.iter().enumerate() {
    for pos in 0..k {
      let (next, rot) = neighbor_rotations(current, dir, rotations)?;
      current = next;
      rotations = rot;

      // The very last step returns to the start; traverse it only for the
      // closure check below.
      if pos != k - 1 || side != 5 {
        out.push(current);
        if current.is_pentagon() {
          return Err(HexError::Pentagon);
        }
      }
    }
  }

  if current != first {
    return Err(HexError::Pentagon);
  }
  Ok(out)
}
