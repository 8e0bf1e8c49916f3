//! Grid and projection constants.

/// Maximum grid resolution; resolutions are numbered 0 through 15.
pub const MAX_RESOLUTION: i32 = 15;

/// Number of faces on the icosahedron.
pub const NUM_ICOSA_FACES: i32 = 20;

/// Number of resolution-0 base cells.
pub const NUM_BASE_CELLS: i32 = 122;

/// Number of pentagon cells per resolution.
pub const NUM_PENTAGONS: i32 = 12;

/// Vertices in a hexagonal cell.
pub const NUM_HEX_VERTS: usize = 6;

/// Vertices in a pentagonal cell.
pub const NUM_PENT_VERTS: usize = 5;

/// Maximum boundary vertices for any cell: a pentagon whose every Class III
/// edge crosses an icosahedron face edge.
pub const MAX_CELL_BNDRY_VERTS: usize = 10;

/// Total number of cells at the finest resolution: `2 + 120 * 7^15`.
pub const NUM_CELLS_MAX_RES: i64 = 569_707_381_193_162;

/// General-purpose floating point threshold.
pub const EPSILON: f64 = 1.0e-16;

/// Distance threshold in degrees, on the order of 0.1 mm on the sphere.
pub const EPSILON_DEG: f64 = 1.0e-9;

/// `EPSILON_DEG` expressed in radians.
pub const EPSILON_RAD: f64 = EPSILON_DEG * std::f64::consts::PI / 180.0;

/// sin(60°), i.e. `sqrt(3) / 2`.
pub const SIN60: f64 = 0.866_025_403_784_438_6;

/// 1 / sin(60°).
pub const RSIN60: f64 = 1.0 / SIN60;

/// sqrt(7), the aperture-7 linear scale between adjacent resolutions.
pub const SQRT7: f64 = 2.645_751_311_064_590_6;

/// 1 / sqrt(7).
pub const RSQRT7: f64 = 1.0 / SQRT7;

/// Rotation angle between Class II and Class III resolution axes,
/// `asin(sqrt(3 / 28))`.
pub const AP7_ROT_RADS: f64 = 0.333_473_172_251_832_1;

/// Scaling factor from res-0 unit hex length to gnomonic unit length.
pub const RES0_U_GNOMONIC: f64 = 0.381_966_011_250_105;

/// 1 / `RES0_U_GNOMONIC`.
pub const INV_RES0_U_GNOMONIC: f64 = 1.0 / RES0_U_GNOMONIC;

/// Earth authalic radius in kilometers (WGS84).
pub const EARTH_RADIUS_KM: f64 = 6371.007_180_918_475;
