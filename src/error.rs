//! Status codes for fallible grid operations.
//!
//! Domain-expected conditions (pentagon distortion, out-of-range arguments,
//! duplicate inputs) are always reported through [`HexError`], never by
//! panicking. Violated internal invariants — corrupt lookup-table state that
//! "cannot happen" with valid inputs — fail fast with a panic instead.

#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};
use thiserror::Error;

/// Error status returned by grid operations.
///
/// Partial results accompanying a returned error are untrustworthy and must be
/// discarded; no operation repairs or extends them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[repr(u32)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum HexError {
  /// The operation failed for a reason without a more specific status.
  #[error("operation failed")]
  Failed = 1,
  /// An argument was outside its acceptable range.
  #[error("argument out of range")]
  Domain = 2,
  /// A latitude or longitude argument was outside its acceptable range.
  #[error("latitude or longitude out of range")]
  LatLngDomain = 3,
  /// A resolution argument was outside `0..=15`.
  #[error("resolution out of range")]
  ResDomain = 4,
  /// A cell index argument was not a valid cell.
  #[error("invalid cell index")]
  CellInvalid = 5,
  /// A directed edge index argument was not a valid directed edge.
  #[error("invalid directed edge index")]
  DirEdgeInvalid = 6,
  /// Pentagon distortion was encountered which the algorithm could not handle.
  #[error("pentagon distortion encountered")]
  Pentagon = 9,
  /// Duplicate input was encountered where the algorithm cannot handle it.
  #[error("duplicate input")]
  DuplicateInput = 10,
  /// Cell arguments were not neighbors.
  #[error("cells are not neighbors")]
  NotNeighbors = 11,
  /// Cell arguments had incompatible resolutions.
  #[error("mismatched resolutions")]
  ResMismatch = 12,
  /// A hole loop could not be assigned to any outer loop during multi-polygon
  /// normalization.
  #[error("unassigned hole during polygon normalization")]
  UnassignedHoles = 13,
}
