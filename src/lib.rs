#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)] // Grid arithmetic is range-checked at the boundaries
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unreadable_literal)] // Transcribed geometric constants
#![allow(clippy::similar_names)]
#![allow(clippy::missing_errors_doc)]

//! `icosahex` is a hierarchical hexagonal geospatial indexing engine.
//!
//! Every point on the sphere maps to a 64-bit [`H3Index`] at one of 16
//! resolutions by projecting the globe onto an icosahedron and tiling each
//! face with hexagons; 12 cells per resolution are pentagons sitting on
//! icosahedron vertices. The crate covers coordinate encoding and decoding,
//! hierarchy navigation, neighbor and ring traversal, polygon fill, and
//! cell-set outline extraction.
//!
//! All operations are pure functions over immutable values; the static
//! lookup tables anchoring the projection are read-only for the process
//! lifetime and safe for unsynchronized concurrent reads.

pub mod base_cells;
pub mod bbox;
pub mod constants;
pub mod coords;
pub mod edges;
pub mod error;
pub mod hierarchy;
pub mod index;
pub mod indexing;
pub mod latlng;
pub mod local_ij;
pub mod math;
pub mod measures;
pub mod polygon;
pub mod regions;
pub mod traversal;

pub use bbox::BBox;
pub use constants::MAX_CELL_BNDRY_VERTS;
pub use coords::face_ijk::FaceIJK;
pub use coords::ijk::{CoordIJ, CoordIJK, Direction};
pub use edges::{
  cells_to_directed_edge, directed_edge_to_boundary, directed_edge_to_cells, get_directed_edge_destination,
  get_directed_edge_origin, origin_to_directed_edges,
};
pub use error::HexError;
pub use hierarchy::{
  cell_to_center_child, cell_to_children, cell_to_children_size, cell_to_parent, compact_cells, uncompact_cells,
  uncompact_cells_size,
};
pub use index::inspection::{
  get_base_cell_number, get_icosahedron_faces, get_num_cells, get_pentagons, get_res0_cells, pentagon_count,
};
pub use index::{H3Index, H3_NULL};
pub use indexing::{cell_to_boundary, cell_to_lat_lng, lat_lng_to_cell};
pub use latlng::{
  degs_to_rads, great_circle_distance_km, great_circle_distance_m, great_circle_distance_rads, rads_to_degs,
  CellBoundary, LatLng,
};
pub use local_ij::{cell_to_local_ij, grid_distance, local_ij_to_cell};
pub use math::vec2d::Vec2d;
pub use math::vec3d::Vec3d;
pub use measures::{
  cell_area_km2, cell_area_m2, cell_area_rads2, exact_edge_length_km, exact_edge_length_m, exact_edge_length_rads,
  get_hexagon_area_avg_km2, get_hexagon_area_avg_m2, get_hexagon_edge_length_avg_km, get_hexagon_edge_length_avg_m,
};
pub use polygon::{GeoLoop, GeoPolygon, MultiPolygon};
pub use regions::multi_polygon::cells_to_multi_polygon;
pub use regions::polyfill::{max_polygon_to_cells_size, polygon_to_cells};
pub use traversal::neighbors::are_neighbor_cells;
pub use traversal::rings::{
  grid_disk, grid_disk_distances, grid_disk_distances_unsafe, grid_disk_unsafe, grid_ring_unsafe, max_grid_disk_size,
};
