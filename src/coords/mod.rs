//! Discrete grid coordinate systems: IJK cube coordinates and their
//! projection onto icosahedron faces.

pub mod face_ijk;
pub mod ijk;
