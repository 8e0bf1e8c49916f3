//! Directed cell edges (mode 2 indices).
//!
//! A directed edge packs an origin cell together with the digit direction of
//! one neighbor into the reserved bits of the index.

use crate::coords::ijk::Direction;
use crate::error::HexError;
use crate::index::{H3Index, CELL_MODE, DIRECTED_EDGE_MODE};
use crate::indexing::cell_to_boundary;
use crate::latlng::{geo_almost_equal, CellBoundary, LatLng};
use crate::traversal::neighbors::{direction_for_neighbor, neighbor_rotations};

impl H3Index {
  /// Whether this is a structurally valid directed edge index.
  #[must_use]
  pub fn is_valid_directed_edge(self) -> bool {
    if self.mode() != DIRECTED_EDGE_MODE {
      return false;
    }
    let direction = Direction::from_digit(u64::from(self.reserved_bits()));
    if direction == Direction::Center || direction == Direction::Invalid {
      return false;
    }
    let origin = clear_edge_bits(self);
    if origin.is_pentagon() && direction == Direction::K {
      return false;
    }
    origin.is_valid_cell()
  }
}

fn clear_edge_bits(edge: H3Index) -> H3Index {
  let mut origin = edge;
  origin.set_mode(CELL_MODE);
  origin.set_reserved_bits(0);
  origin
}

/// The directed edge from `origin` to a neighboring cell.
pub fn cells_to_directed_edge(origin: H3Index, destination: H3Index) -> Result<H3Index, HexError> {
  let direction = direction_for_neighbor(origin, destination);
  if direction == Direction::Center || direction == Direction::Invalid {
    return Err(HexError::NotNeighbors);
  }

  let mut edge = origin;
  edge.set_mode(DIRECTED_EDGE_MODE);
  edge.set_reserved_bits(direction as u8);
  Ok(edge)
}

/// The origin cell of a directed edge.
pub fn get_directed_edge_origin(edge: H3Index) -> Result<H3Index, HexError> {
  if edge.mode() != DIRECTED_EDGE_MODE {
    return Err(HexError::DirEdgeInvalid);
  }
  Ok(clear_edge_bits(edge))
}

/// The destination cell of a directed edge.
pub fn get_directed_edge_destination(edge: H3Index) -> Result<H3Index, HexError> {
  let origin = get_directed_edge_origin(edge)?;
  let direction = Direction::from_digit(u64::from(edge.reserved_bits()));
  let (destination, _) = neighbor_rotations(origin, direction, 0)?;
  Ok(destination)
}

/// Origin and destination cells of a directed edge.
pub fn directed_edge_to_cells(edge: H3Index) -> Result<(H3Index, H3Index), HexError> {
  if !edge.is_valid_directed_edge() {
    return Err(HexError::DirEdgeInvalid);
  }
  Ok((get_directed_edge_origin(edge)?, get_directed_edge_destination(edge)?))
}

/// All directed edges leaving `origin`: 6, or 5 for a pentagon.
pub fn origin_to_directed_edges(origin: H3Index) -> Result<Vec<H3Index>, HexError> {
  if !origin.is_valid_cell() {
    return Err(HexError::CellInvalid);
  }

  let is_pent = origin.is_pentagon();
  let mut out = Vec::with_capacity(6);
  for dir in Direction::AXIAL {
    if is_pent && dir == Direction::K {
      continue;
    }
    let mut edge = origin;
    edge.set_mode(DIRECTED_EDGE_MODE);
    edge.set_reserved_bits(dir as u8);
    out.push(edge);
  }
  Ok(out)
}

/// The geographic span of a directed edge: the boundary vertices shared by
/// its origin and destination cells, in origin boundary order.
///
/// Class III edges that cross an icosahedron face edge carry the distortion
/// vertex, giving 3 vertices instead of 2.
pub fn directed_edge_to_boundary(edge: H3Index) -> Result<CellBoundary, HexError> {
  let (origin, destination) = directed_edge_to_cells(edge)?;
  let origin_boundary = cell_to_boundary(origin)?;
  let destination_boundary = cell_to_boundary(destination)?;

  let in_destination =
    |v: &LatLng| destination_boundary.verts().iter().any(|d| geo_almost_equal(v, d));

  let mut out = CellBoundary::default();
  let mut postponed: Option<LatLng> = None;

  for (i, v) in origin_boundary.verts().iter().enumerate() {
    if !in_destination(v) {
      continue;
    }
    // A match at vertex 0 can be the end of the shared run rather than the
    // beginning; emit it last in that case.
    let next = origin_boundary.verts[(i + 1) % origin_boundary.num_verts];
    if i == 0 && !in_destination(&next) {
      postponed = Some(*v);
    } else {
      out.push(*v);
    }
  }
  if let Some(v) = postponed {
    out.push(v);
  }
  Ok(out)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::index::{make_cell, H3_NULL};
  use crate::indexing::lat_lng_to_cell;
  use crate::latlng::{degs_to_rads, LatLng};
  use crate::traversal::rings::grid_ring_unsafe;

  fn sf_cell(res: i32) -> H3Index {
    let geo = LatLng {
      lat: degs_to_rads(37.779_265),
      lng: degs_to_rads(-122.419_277),
    };
    lat_lng_to_cell(&geo, res).unwrap()
  }

  #[test]
  fn edge_round_trip() {
    let origin = sf_cell(9);
    for destination in grid_ring_unsafe(origin, 1).unwrap() {
      let edge = cells_to_directed_edge(origin, destination).unwrap();
      assert!(edge.is_valid_directed_edge());
      assert_eq!(get_directed_edge_origin(edge).unwrap(), origin);
      assert_eq!(get_directed_edge_destination(edge).unwrap(), destination);
      assert_eq!(directed_edge_to_cells(edge).unwrap(), (origin, destination));
    }
  }

  #[test]
  fn non_neighbors_rejected() {
    let origin = sf_cell(9);
    let far = grid_ring_unsafe(origin, 2).unwrap()[0];
    assert_eq!(cells_to_directed_edge(origin, far), Err(HexError::NotNeighbors));
    assert_eq!(cells_to_directed_edge(origin, origin), Err(HexError::NotNeighbors));
  }

  #[test]
  fn edge_counts() {
    let origin = sf_cell(9);
    let edges = origin_to_directed_edges(origin).unwrap();
    assert_eq!(edges.len(), 6);
    for edge in &edges {
      assert!(edge.is_valid_directed_edge());
      assert_eq!(get_directed_edge_origin(*edge).unwrap(), origin);
    }

    let pent = make_cell(2, 4, Direction::Center);
    let edges = origin_to_directed_edges(pent).unwrap();
    assert_eq!(edges.len(), 5);
    assert!(edges.iter().all(|e| e.is_valid_directed_edge()));
  }

  #[test]
  fn cell_index_is_not_an_edge() {
    let origin = sf_cell(9);
    assert!(!origin.is_valid_directed_edge());
    assert!(!H3_NULL.is_valid_directed_edge());
    assert_eq!(get_directed_edge_origin(origin), Err(HexError::DirEdgeInvalid));
  }

  #[test]
  fn edge_boundary_is_a_shared_segment() {
    let origin = sf_cell(4);
    for destination in grid_ring_unsafe(origin, 1).unwrap() {
      let edge = cells_to_directed_edge(origin, destination).unwrap();
      let boundary = directed_edge_to_boundary(edge).unwrap();
      // Two shared topological vertices, plus at most one distortion vertex.
      assert!(
        (2..=3).contains(&boundary.num_verts),
        "edge {edge} boundary had {} verts",
        boundary.num_verts
      );
    }
  }

  #[test]
  fn reverse_edge_shares_boundary_vertices() {
    let origin = sf_cell(5);
    let destination = grid_ring_unsafe(origin, 1).unwrap()[0];
    let forward = directed_edge_to_boundary(cells_to_directed_edge(origin, destination).unwrap()).unwrap();
    let reverse = directed_edge_to_boundary(cells_to_directed_edge(destination, origin).unwrap()).unwrap();
    assert_eq!(forward.num_verts, reverse.num_verts);
    for v in forward.verts() {
      assert!(reverse.verts().iter().any(|r| geo_almost_equal(v, r)));
    }
  }
}
