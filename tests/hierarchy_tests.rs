//! Parent/child and compaction behavior across the public surface.

use icosahex::{
  cell_to_center_child, cell_to_children, cell_to_children_size, cell_to_parent, compact_cells, degs_to_rads,
  get_pentagons, grid_disk, lat_lng_to_cell, uncompact_cells, uncompact_cells_size, H3Index, HexError, LatLng,
};
use std::collections::HashSet;

fn sf_cell(res: i32) -> H3Index {
  let geo = LatLng {
    lat: degs_to_rads(37.779_265),
    lng: degs_to_rads(-122.419_277),
  };
  lat_lng_to_cell(&geo, res).unwrap()
}

#[test]
fn parent_resolution_and_containment() {
  let h = sf_cell(9);
  for r in 0..=9 {
    let parent = cell_to_parent(h, r).unwrap();
    assert_eq!(parent.resolution(), r);
    // The child set of the parent at the original resolution contains h.
    let children = cell_to_children(parent, 9).unwrap();
    assert!(children.contains(&h), "res {r}");
  }
}

#[test]
fn parent_of_children_is_cell() {
  let h = sf_cell(6);
  for child in cell_to_children(h, 8).unwrap() {
    assert_eq!(cell_to_parent(child, 6).unwrap(), h);
  }
}

#[test]
fn center_child_is_shared_center() {
  let h = sf_cell(5);
  let center_child = cell_to_center_child(h, 7).unwrap();
  assert_eq!(cell_to_parent(center_child, 5).unwrap(), h);
  let children = cell_to_children(h, 7).unwrap();
  assert_eq!(children[0], center_child);
}

#[test]
fn child_counts() {
  let h = sf_cell(5);
  assert_eq!(cell_to_children_size(h, 5).unwrap(), 1);
  assert_eq!(cell_to_children_size(h, 6).unwrap(), 7);
  assert_eq!(cell_to_children_size(h, 8).unwrap(), 343);

  let pent = get_pentagons(5).unwrap()[0];
  assert_eq!(cell_to_children_size(pent, 6).unwrap(), 6);
  assert_eq!(cell_to_children(pent, 7).unwrap().len(), 36);
}

#[test]
fn compact_uncompact_identity_on_disk() {
  // A disk is not a clean parent subtree, so compaction keeps remainder
  // cells; the round trip through uncompact must be exact.
  let cells = grid_disk(sf_cell(7), 4).unwrap();
  let compacted = compact_cells(&cells).unwrap();
  assert!(compacted.len() <= cells.len());

  assert_eq!(
    uncompact_cells_size(&compacted, 7).unwrap() as usize,
    cells.len()
  );
  let expanded = uncompact_cells(&compacted, 7).unwrap();
  let original: HashSet<_> = cells.into_iter().collect();
  let roundtrip: HashSet<_> = expanded.into_iter().collect();
  assert_eq!(original, roundtrip);
}

#[test]
fn compact_collapses_full_subtree() {
  let h = sf_cell(4);
  let cells = cell_to_children(h, 6).unwrap();
  assert_eq!(compact_cells(&cells).unwrap(), vec![h]);
}

#[test]
fn compact_error_cases() {
  let h = sf_cell(6);
  assert_eq!(compact_cells(&[h, h]), Err(HexError::DuplicateInput));
  assert_eq!(
    compact_cells(&[h, sf_cell(7)]),
    Err(HexError::ResMismatch)
  );
  assert_eq!(compact_cells(&[]).unwrap(), Vec::new());
}

#[test]
fn uncompact_res_checks() {
  let h = sf_cell(6);
  assert_eq!(uncompact_cells(&[h], 5), Err(HexError::ResMismatch));
  assert_eq!(uncompact_cells(&[h], 6).unwrap(), vec![h]);
}

#[test]
fn pentagon_subtree_compacts() {
  let pent = get_pentagons(2).unwrap()[5];
  let cells = cell_to_children(pent, 4).unwrap();
  assert_eq!(compact_cells(&cells).unwrap(), vec![pent]);
}
