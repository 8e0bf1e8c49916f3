//! Parent/child navigation and cell-set compaction.

use crate::constants::MAX_RESOLUTION;
use crate::coords::ijk::Direction;
use crate::error::HexError;
use crate::index::{H3Index, H3_NULL};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// The child of `h` one resolution finer, in the given digit direction.
pub(crate) fn make_direct_child(h: H3Index, digit: Direction) -> H3Index {
  let mut child = h;
  child.set_resolution(h.resolution() + 1);
  child.set_digit(child.resolution(), digit);
  child
}

/// The ancestor of `h` at `parent_res`, with finer digits truncated.
pub fn cell_to_parent(h: H3Index, parent_res: i32) -> Result<H3Index, HexError> {
  let res = h.resolution();
  if !(0..=MAX_RESOLUTION).contains(&parent_res) {
    return Err(HexError::ResDomain);
  }
  if parent_res > res {
    return Err(HexError::ResMismatch);
  }
  if parent_res == res {
    return Ok(h);
  }

  let mut parent = h;
  parent.set_resolution(parent_res);
  for r in parent_res + 1..=res {
    parent.set_digit(r, Direction::Invalid);
  }
  Ok(parent)
}

/// The center child of `h` at `child_res`.
pub fn cell_to_center_child(h: H3Index, child_res: i32) -> Result<H3Index, HexError> {
  let res = h.resolution();
  if !(0..=MAX_RESOLUTION).contains(&child_res) {
    return Err(HexError::ResDomain);
  }
  if child_res < res {
    return Err(HexError::ResMismatch);
  }

  let mut child = h;
  child.set_resolution(child_res);
  for r in res + 1..=child_res {
    child.set_digit(r, Direction::Center);
  }
  Ok(child)
}

/// Number of children of `h` at `child_res`.
///
/// A pentagon subdivides into 6 children per step (the K child is deleted),
/// so its subtree holds `1 + 5 * (7^n - 1) / 6` cells after `n` steps.
pub fn cell_to_children_size(h: H3Index, child_res: i32) -> Result<i64, HexError> {
  let res = h.resolution();
  if !(0..=MAX_RESOLUTION).contains(&child_res) {
    return Err(HexError::ResDomain);
  }
  if child_res < res {
    return Err(HexError::ResMismatch);
  }

  let n = (child_res - res) as u32;
  if h.is_pentagon() {
    Ok(1 + 5 * (7i64.pow(n) - 1) / 6)
  } else {
    Ok(7i64.pow(n))
  }
}

fn collect_children(h: H3Index, child_res: i32, out: &mut Vec<H3Index>) {
  if h.resolution() == child_res {
    out.push(h);
    return;
  }
  let is_pent = h.is_pentagon();
  for digit in [Direction::Center].into_iter().chain(Direction::AXIAL) {
    if is_pent && digit == Direction::K {
      continue;
    }
    collect_children(make_direct_child(h, digit), child_res, out);
  }
}

/// All children of `h` at `child_res`, in breadth-invariant center-first
/// order.
pub fn cell_to_children(h: H3Index, child_res: i32) -> Result<Vec<H3Index>, HexError> {
  let count = cell_to_children_size(h, child_res)?;
  let mut out = Vec::with_capacity(count as usize);
  collect_children(h, child_res, &mut out);
  Ok(out)
}

/// Compacts a duplicate-free, resolution-uniform cell set into the minimal
/// covering set of mixed resolutions.
///
/// Any parent whose full child set is present (7 children, 6 for a pentagon
/// parent) is promoted, level by level, until no further promotion is
/// possible. Duplicate input is reported as [`HexError::DuplicateInput`].
pub fn compact_cells(cells: &[H3Index]) -> Result<Vec<H3Index>, HexError> {
  let mut current: Vec<H3Index> = cells.iter().copied().filter(|&h| h != H3_NULL).collect();
  let Some(&first) = current.first() else {
    return Ok(Vec::new());
  };

  let mut res = first.resolution();
  if current.iter().any(|h| h.resolution() != res) {
    return Err(HexError::ResMismatch);
  }

  let mut seen = HashSet::with_capacity(current.len());
  for &h in &current {
    if !seen.insert(h) {
      return Err(HexError::DuplicateInput);
    }
  }

  let mut out = Vec::new();
  while res > 0 && !current.is_empty() {
    let mut child_counts: HashMap<H3Index, i64> = HashMap::with_capacity(current.len() / 6);
    for &h in &current {
      let parent = cell_to_parent(h, res - 1)?;
      *child_counts.entry(parent).or_insert(0) += 1;
    }

    let mut promoted = Vec::new();
    for (&parent, &count) in &child_counts {
      let full = if parent.is_pentagon() { 6 } else { 7 };
      if count > full {
        return Err(HexError::DuplicateInput);
      }
      if count == full {
        promoted.push(parent);
      }
    }

    let promoted_set: HashSet<H3Index> = promoted.iter().copied().collect();
    for &h in &current {
      let parent = cell_to_parent(h, res - 1)?;
      if !promoted_set.contains(&parent) {
        out.push(h);
      }
    }

    debug!(res, promoted = promoted.len(), finalized = out.len(), "compaction round");
    current = promoted;
    res -= 1;
  }

  out.extend(current);
  Ok(out)
}

/// Number of cells `uncompact_cells` produces for the given set and target
/// resolution.
pub fn uncompact_cells_size(compacted: &[H3Index], res: i32) -> Result<i64, HexError> {
  let mut total = 0i64;
  for &h in compacted {
    if h == H3_NULL {
      continue;
    }
    total += cell_to_children_size(h, res)?;
  }
  Ok(total)
}

/// Expands a mixed-resolution cell set to a uniform set at `res`; the inverse
/// of [`compact_cells`].
pub fn uncompact_cells(compacted: &[H3Index], res: i32) -> Result<Vec<H3Index>, HexError> {
  let count = uncompact_cells_size(compacted, res)?;
  let mut out = Vec::with_capacity(count as usize);
  for &h in compacted {
    if h == H3_NULL {
      continue;
    }
    collect_children(h, res, &mut out);
  }
  Ok(out)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::index::make_cell;

  #[test]
  fn parent_truncates_digits() {
    let h = H3Index(0x85283473fffffff);
    let parent = cell_to_parent(h, 4).unwrap();
    assert_eq!(parent.resolution(), 4);
    assert!(parent.is_valid_cell());
    assert_eq!(cell_to_parent(h, 5).unwrap(), h);
    assert!(cell_to_parent(h, 6).is_err());
    assert!(cell_to_parent(h, -1).is_err());
  }

  #[test]
  fn children_contain_center_child() {
    let h = H3Index(0x85283473fffffff);
    let children = cell_to_children(h, 6).unwrap();
    assert_eq!(children.len(), 7);
    let center = cell_to_center_child(h, 6).unwrap();
    assert!(children.contains(&center));
    for child in &children {
      assert!(child.is_valid_cell());
      assert_eq!(cell_to_parent(*child, 5).unwrap(), h);
    }
  }

  #[test]
  fn pentagon_children_omit_k() {
    let pent = make_cell(3, 4, Direction::Center);
    let children = cell_to_children(pent, 4).unwrap();
    assert_eq!(children.len(), 6);
    assert_eq!(cell_to_children_size(pent, 4).unwrap(), 6);
    assert_eq!(cell_to_children_size(pent, 5).unwrap(), 36);
    // Exactly one child is itself a pentagon.
    assert_eq!(children.iter().filter(|c| c.is_pentagon()).count(), 1);
  }

  #[test]
  fn children_size_matches_enumeration() {
    let h = H3Index(0x85283473fffffff);
    for child_res in 5..=8 {
      let size = cell_to_children_size(h, child_res).unwrap();
      let children = cell_to_children(h, child_res).unwrap();
      assert_eq!(children.len() as i64, size);
    }
  }

  #[test]
  fn compact_full_child_set_promotes() {
    let h = H3Index(0x85283473fffffff);
    let children = cell_to_children(h, 6).unwrap();
    let compacted = compact_cells(&children).unwrap();
    assert_eq!(compacted, vec![h]);
  }

  #[test]
  fn compact_partial_set_is_identity() {
    let h = H3Index(0x85283473fffffff);
    let mut children = cell_to_children(h, 6).unwrap();
    children.pop();
    let mut compacted = compact_cells(&children).unwrap();
    compacted.sort_unstable();
    let mut expected = children.clone();
    expected.sort_unstable();
    assert_eq!(compacted, expected);
  }

  #[test]
  fn compact_uncompact_round_trip() {
    let h = H3Index(0x85283473fffffff);
    let cells = cell_to_children(h, 7).unwrap();
    let compacted = compact_cells(&cells).unwrap();
    assert_eq!(compacted, vec![h]);
    let mut expanded = uncompact_cells(&compacted, 7).unwrap();
    expanded.sort_unstable();
    let mut original = cells;
    original.sort_unstable();
    assert_eq!(expanded, original);
  }

  #[test]
  fn compact_rejects_duplicates() {
    let h = H3Index(0x85283473fffffff);
    let children = cell_to_children(h, 6).unwrap();
    let mut dup = children.clone();
    dup.push(children[0]);
    assert_eq!(compact_cells(&dup), Err(HexError::DuplicateInput));
  }

  #[test]
  fn compact_rejects_mixed_resolutions() {
    let h = H3Index(0x85283473fffffff);
    let parent = cell_to_parent(h, 4).unwrap();
    assert_eq!(compact_cells(&[h, parent]), Err(HexError::ResMismatch));
  }

  #[test]
  fn uncompact_rejects_finer_input() {
    let h = H3Index(0x85283473fffffff);
    assert_eq!(uncompact_cells(&[h], 4), Err(HexError::ResMismatch));
  }

  #[test]
  fn pentagon_compact_round_trip() {
    let pent = make_cell(2, 4, Direction::Center);
    let cells = cell_to_children(pent, 4).unwrap();
    let compacted = compact_cells(&cells).unwrap();
    assert_eq!(compacted, vec![pent]);
  }
}
