//! Outline extraction: merging a cell set's boundaries into polygons.
//!
//! Every cell contributes its boundary as directed edges into a transient
//! vertex graph; an edge seen twice (in either direction) is interior to the
//! set and cancels, since no edge is shared by more than two cells. The
//! surviving edges are walked `to -> from` into closed loops, which are then
//! classified by winding and nested into polygons with holes.

use crate::error::HexError;
use crate::index::{H3Index, H3_NULL};
use crate::indexing::cell_to_boundary;
use crate::latlng::{geo_almost_equal, LatLng};
use crate::polygon::{GeoLoop, GeoPolygon, MultiPolygon};
use std::collections::HashMap;
use tracing::debug;

/// Quantization for vertex hashing, comfortably coarser than the grid's
/// vertex-equality threshold.
const KEY_SCALE: f64 = 1.0e10;

type VertexKey = (i64, i64);

fn vertex_key(v: &LatLng) -> VertexKey {
  ((v.lat * KEY_SCALE).round() as i64, (v.lng * KEY_SCALE).round() as i64)
}

/// Transient multiset of directed edges, bucketed by origin vertex. Scoped to
/// a single outline-extraction call.
#[derive(Default)]
struct VertexGraph {
  edges: HashMap<VertexKey, Vec<(LatLng, LatLng)>>,
  size: usize,
}

impl VertexGraph {
  fn add_edge(&mut self, from: LatLng, to: LatLng) {
    self.edges.entry(vertex_key(&from)).or_default().push((from, to));
    self.size += 1;
  }

  /// Removes the edge if present, comparing endpoints at grid precision.
  ///
  /// Nearly-identical vertices computed from different faces can quantize
  /// into an adjacent key, so the neighboring keys are probed as well.
  fn remove_edge(&mut self, from: &LatLng, to: &LatLng) -> bool {
    let (klat, klng) = vertex_key(from);
    for dlat in -1..=1 {
      for dlng in -1..=1 {
        let key = (klat + dlat, klng + dlng);
        let Some(bucket) = self.edges.get_mut(&key) else {
          continue;
        };
        let Some(pos) = bucket
          .iter()
          .position(|(f, t)| geo_almost_equal(f, from) && geo_almost_equal(t, to))
        else {
          continue;
        };
        bucket.swap_remove(pos);
        if bucket.is_empty() {
          self.edges.remove(&key);
        }
        self.size -= 1;
        return true;
      }
    }
    false
  }

  /// Removes and returns any remaining edge.
  fn pop_any(&mut self) -> Option<(LatLng, LatLng)> {
    let key = *self.edges.keys().next()?;
    let bucket = self.edges.get_mut(&key)?;
    let edge = bucket.swap_remove(0);
    if bucket.is_empty() {
      self.edges.remove(&key);
    }
    self.size -= 1;
    Some(edge)
  }

  /// Removes and returns an edge leaving the given vertex, probing the
  /// neighboring quantization keys like [`Self::remove_edge`].
  fn pop_from(&mut self, vertex: &LatLng) -> Option<(LatLng, LatLng)> {
    let (klat, klng) = vertex_key(vertex);
    for dlat in -1..=1 {
      for dlng in -1..=1 {
        let key = (klat + dlat, klng + dlng);
        let Some(bucket) = self.edges.get_mut(&key) else {
          continue;
        };
        let Some(pos) = bucket.iter().position(|(f, _)| geo_almost_equal(f, vertex)) else {
          continue;
        };
        let edge = bucket.swap_remove(pos);
        if bucket.is_empty() {
          self.edges.remove(&key);
        }
        self.size -= 1;
        return Some(edge);
      }
    }
    None
  }
}

/// Builds the vertex graph for a cell set, cancelling interior edges.
fn cells_to_vertex_graph(cells: &[H3Index]) -> Result<VertexGraph, HexError> {
  let mut graph = VertexGraph::default();
  let mut res = None;

  for &cell in cells {
    if cell == H3_NULL {
      continue;
    }
    if !cell.is_valid_cell() {
      return Err(HexError::CellInvalid);
    }
    match res {
      None => res = Some(cell.resolution()),
      Some(r) if r != cell.resolution() => return Err(HexError::ResMismatch),
      _ => {}
    }

    let boundary = cell_to_boundary(cell)?;
    let verts = boundary.verts();
    for (j, &from) in verts.iter().enumerate() {
      let to = verts[(j + 1) % verts.len()];
      // An edge already present in reverse is shared with another cell of
      // the set; both cancel.
      if !graph.remove_edge(&to, &from) {
        graph.add_edge(from, to);
      }
    }
  }
  Ok(graph)
}

/// Drains the graph into closed loops by walking `to -> from` chains.
fn vertex_graph_to_loops(graph: &mut VertexGraph) -> Result<Vec<GeoLoop>, HexError> {
  let mut loops = Vec::new();
  while let Some((start, mut next)) = graph.pop_any() {
    let mut verts = vec![start];
    while !geo_almost_equal(&next, &start) {
      verts.push(next);
      // A dangling chain means an edge failed to cancel, which valid input
      // cannot produce.
      let Some((_, to)) = graph.pop_from(&next) else {
        return Err(HexError::Failed);
      };
      next = to;
    }
    loops.push(GeoLoop { verts });
  }
  Ok(loops)
}

/// Classifies loops by winding and assigns each hole to its most deeply
/// nested containing outer loop.
fn normalize_multi_polygon(loops: Vec<GeoLoop>) -> Result<MultiPolygon, HexError> {
  let mut outers = Vec::new();
  let mut holes = Vec::new();
  for l in loops {
    if l.is_clockwise() {
      holes.push(l);
    } else {
      outers.push(l);
    }
  }

  if outers.is_empty() {
    return if holes.is_empty() {
      Ok(Vec::new())
    } else {
      Err(HexError::UnassignedHoles)
    };
  }

  let outer_bboxes: Vec<_> = outers.iter().map(GeoLoop::bbox).collect();
  let mut polygons: MultiPolygon = outers
    .into_iter()
    .map(|outer| GeoPolygon {
      outer,
      holes: Vec::new(),
    })
    .collect();

  for hole in holes {
    let probe = hole.verts[0];
    // Cell sets never produce overlapping loops, so testing one vertex
    // suffices for containment.
    let candidates: Vec<usize> = polygons
      .iter()
      .enumerate()
      .filter(|(i, p)| p.outer.contains(&outer_bboxes[*i], &probe))
      .map(|(i, _)| i)
      .collect();

    // The immediate parent is the candidate contained by the most other
    // candidates.
    let parent = candidates
      .iter()
      .max_by_key(|&&i| {
        candidates
          .iter()
          .filter(|&&j| j != i && polygons[j].outer.contains(&outer_bboxes[j], &polygons[i].outer.verts[0]))
          .count()
      })
      .copied();

    match parent {
      Some(i) => polygons[i].holes.push(hole),
      None => return Err(HexError::UnassignedHoles),
    }
  }
  Ok(polygons)
}

/// Merges the boundaries of a cell set into outline polygons, holes assigned
/// to their containing outer loops.
///
/// The cells must share one resolution; duplicates and overlaps in the input
/// produce undefined outlines.
pub fn cells_to_multi_polygon(cells: &[H3Index]) -> Result<MultiPolygon, HexError> {
  let mut graph = cells_to_vertex_graph(cells)?;
  let loops = vertex_graph_to_loops(&mut graph)?;
  debug!(cells = cells.len(), loops = loops.len(), "outline loops extracted");
  normalize_multi_polygon(loops)
}
