//! Region operations: polygon fill and cell-set outline extraction.

pub mod multi_polygon;
pub mod polyfill;
