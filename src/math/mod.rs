//! Planar and 3-space vector primitives used by the projection layer.

pub mod vec2d;
pub mod vec3d;
