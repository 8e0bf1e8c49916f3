//! Icosahedral face coordinates and the gnomonic projection.
//!
//! A [`FaceIJK`] addresses a cell as an IJK coordinate anchored to one of the
//! 20 icosahedron faces. This module converts between spherical coordinates
//! and face coordinates, generates cell boundaries on the aperture-3 substrate
//! grid, and remaps coordinates that overflow their home face onto the proper
//! adjacent face ("overage").

use crate::constants::{
  AP7_ROT_RADS, EPSILON, INV_RES0_U_GNOMONIC, MAX_RESOLUTION, NUM_HEX_VERTS, NUM_ICOSA_FACES, NUM_PENT_VERTS,
  RES0_U_GNOMONIC, RSQRT7, SIN60, SQRT7,
};
use crate::coords::ijk::{hex2d_to_coord_ijk, CoordIJK};
use crate::index::is_resolution_class_iii;
use crate::latlng::{geo_az_distance_rads, geo_azimuth_rads, pos_angle_rads, CellBoundary, LatLng};
use crate::math::vec2d::{self, Vec2d};
use crate::math::vec3d::{geo_to_vec3d, Vec3d};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An IJK coordinate anchored to an icosahedron face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceIJK {
  /// Icosahedron face number, 0-19.
  pub face: i32,
  /// IJK coordinate on that face.
  pub coord: CoordIJK,
}

/// Result of an overage adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Overage {
  /// The coordinate lies on its original face.
  None,
  /// The coordinate lies on a face edge (substrate grids only).
  FaceEdge,
  /// The coordinate was remapped into the interior of a new face.
  NewFace,
}

// Quadrant slots of the FACE_NEIGHBORS table.
const IJ: i32 = 1;
const KI: i32 = 2;
const JK: i32 = 3;

/// Maximum `i + j + k` on a face, by Class II resolution. Class III lookups
/// use the next finer Class II resolution, hence the extra slot.
#[rustfmt::skip]
static MAX_DIM_BY_CII_RES: [i32; (MAX_RESOLUTION + 2) as usize] = [
  2, -1, 14, -1, 98, -1, 686, -1, 4802, -1, 33614, -1, 235_298, -1, 1_647_086, -1, 11_529_602,
];

/// Grid-unit scale by Class II resolution, same indexing as
/// `MAX_DIM_BY_CII_RES`.
#[rustfmt::skip]
static UNIT_SCALE_BY_CII_RES: [i32; (MAX_RESOLUTION + 2) as usize] = [
  1, -1, 7, -1, 49, -1, 343, -1, 2401, -1, 16807, -1, 117_649, -1, 823_543, -1, 5_764_801,
];

/// Face centers in spherical coordinates.
#[rustfmt::skip]
static FACE_CENTER_GEO: [LatLng; NUM_ICOSA_FACES as usize] = [
  LatLng { lat: 0.803_582_649_718_989_94, lng: 1.248_397_419_617_396 },    // face 0
  LatLng { lat: 1.307_747_883_455_638_2, lng: 2.536_945_009_877_921 },    // face 1
  LatLng { lat: 1.054_751_253_523_952, lng: -1.347_517_358_900_396_6 },  // face 2
  LatLng { lat: 0.600_191_595_538_186_8, lng: -0.450_603_909_469_755_75 }, // face 3
  LatLng { lat: 0.491_715_428_198_773_87, lng: 0.401_988_202_911_306_94 },  // face 4
  LatLng { lat: 0.172_745_327_415_618_7, lng: 1.678_146_885_280_433_7 },   // face 5
  LatLng { lat: 0.605_929_321_571_350_7, lng: 2.953_923_329_812_411_6 },   // face 6
  LatLng { lat: 0.427_370_518_328_979_64, lng: -1.888_876_200_336_285_4 },  // face 7
  LatLng { lat: -0.079_066_118_549_212_83, lng: -0.733_429_513_380_867_74 }, // face 8
  LatLng { lat: -0.230_961_644_455_383_64, lng: 0.506_495_587_332_349 },    // face 9
  LatLng { lat: 0.079_066_118_549_212_83, lng: 2.408_163_140_208_925_5 },   // face 10
  LatLng { lat: 0.230_961_644_455_383_64, lng: -2.635_097_066_257_444 },   // face 11
  LatLng { lat: -0.172_745_327_415_618_7, lng: -1.463_445_768_309_359_5 },  // face 12
  LatLng { lat: -0.605_929_321_571_350_7, lng: -0.187_669_323_777_381_62 }, // face 13
  LatLng { lat: -0.427_370_518_328_979_64, lng: 1.252_716_453_253_508 },    // face 14
  LatLng { lat: -0.600_191_595_538_186_8, lng: 2.690_988_744_120_037_5 },   // face 15
  LatLng { lat: -0.491_715_428_198_773_87, lng: -2.739_604_450_678_486_3 },  // face 16
  LatLng { lat: -0.803_582_649_718_989_94, lng: -1.893_195_233_972_397 },   // face 17
  LatLng { lat: -1.307_747_883_455_638_2, lng: -0.604_647_643_711_872_1 },  // face 18
  LatLng { lat: -1.054_751_253_523_952, lng: 1.794_075_294_689_396_6 },   // face 19
];

const fn v3(x: f64, y: f64, z: f64) -> Vec3d {
  Vec3d::new(x, y, z)
}

/// Face centers as unit-sphere points.
#[rustfmt::skip]
static FACE_CENTER_POINT: [Vec3d; NUM_ICOSA_FACES as usize] = [
  v3(0.219_930_779_140_460_6, 0.658_369_178_027_499_6, 0.719_847_537_892_618_2),    // face 0
  v3(-0.213_923_483_450_142_1, 0.147_817_182_955_070_3, 0.965_601_793_521_420_5),   // face 1
  v3(0.109_262_527_878_479_7, -0.481_195_157_287_321, 0.869_777_512_128_725_3),    // face 2
  v3(0.742_856_730_158_679_1, -0.359_394_167_827_802_8, 0.564_800_593_651_703_3),   // face 3
  v3(0.811_253_470_914_096_9, 0.344_895_323_763_938_4, 0.472_138_773_641_393),     // face 4
  v3(-0.105_549_814_961_392_1, 0.979_445_729_641_141_3, 0.171_887_461_000_936_5),   // face 5
  v3(-0.807_540_757_997_009_2, 0.153_355_248_589_881_8, 0.569_526_199_488_268_8),   // face 6
  v3(-0.284_614_806_978_790_7, -0.864_408_097_265_420_6, 0.414_479_255_247_354),    // face 7
  v3(0.740_562_147_385_448_2, -0.667_329_956_456_552_4, -0.078_983_764_632_673_77), // face 8
  v3(0.851_230_398_647_429_3, 0.472_234_378_858_268_1, -0.228_913_738_868_780_8),  // face 9
  v3(-0.740_562_147_385_448_1, 0.667_329_956_456_552_4, 0.078_983_764_632_673_77),  // face 10
  v3(-0.851_230_398_647_429_2, -0.472_234_378_858_268_2, 0.228_913_738_868_780_8), // face 11
  v3(0.105_549_814_961_391_9, -0.979_445_729_641_141_3, -0.171_887_461_000_936_5),  // face 12
  v3(0.807_540_757_997_009_2, -0.153_355_248_589_881_9, -0.569_526_199_488_268_8), // face 13
  v3(0.284_614_806_978_790_8, 0.864_408_097_265_420_4, -0.414_479_255_247_354),    // face 14
  v3(-0.742_856_730_158_679_1, 0.359_394_167_827_802_7, -0.564_800_593_651_703_3),  // face 15
  v3(-0.811_253_470_914_097_1, -0.344_895_323_763_938_2, -0.472_138_773_641_393),   // face 16
  v3(-0.219_930_779_140_460_7, -0.658_369_178_027_499_6, -0.719_847_537_892_618_2), // face 17
  v3(0.213_923_483_450_142, -0.147_817_182_955_070_4, -0.965_601_793_521_420_5),   // face 18
  v3(-0.109_262_527_878_479_6, 0.481_195_157_287_321, -0.869_777_512_128_725_3),  // face 19
];

/// Azimuth from each face center to its vertices 0/1/2, Class II orientation.
#[rustfmt::skip]
static FACE_AXES_AZ_RADS_CII: [[f64; 3]; NUM_ICOSA_FACES as usize] = [
  [5.619_958_268_523_94, 3.525_563_166_130_744_5, 1.431_168_063_737_548_7], // face 0
  [5.760_339_081_714_187, 3.665_943_979_320_991_7, 1.571_548_876_927_796], // face 1
  [0.780_213_654_393_430_1, 4.969_003_859_179_821, 2.874_608_756_786_625_7], // face 2
  [0.430_469_363_979_999_9, 4.619_259_568_766_391, 2.524_864_466_373_195_5], // face 3
  [6.130_269_123_335_111, 4.035_874_020_941_916, 1.941_478_918_548_720_3], // face 4
  [2.692_877_706_530_643, 0.598_482_604_137_447_1, 4.787_272_808_923_838],   // face 5
  [2.982_963_003_477_244, 0.888_567_901_084_048_4, 5.077_358_105_870_44],    // face 6
  [3.532_912_002_790_141, 1.438_516_900_396_945_7, 5.627_307_105_183_337],   // face 7
  [3.494_305_004_259_568, 1.399_909_901_866_372_9, 5.588_700_106_652_764],   // face 8
  [3.003_214_169_499_538_4, 0.908_819_067_106_342_9, 5.097_609_271_892_734],   // face 9
  [5.930_472_956_509_811_6, 3.836_077_854_116_616, 1.741_682_751_723_420_4], // face 10
  [0.138_378_484_090_254_85, 4.327_168_688_876_646, 2.232_773_586_483_45],    // face 11
  [0.448_714_947_059_150_36, 4.637_505_151_845_541_5, 2.543_110_049_452_346],   // face 12
  [0.158_629_650_112_549_36, 4.347_419_854_898_94, 2.253_024_752_505_745],   // face 13
  [5.891_865_957_979_238_5, 3.797_470_855_586_043, 1.703_075_753_192_847_6], // face 14
  [2.711_123_289_609_793_3, 0.616_728_187_216_597_8, 4.805_518_392_002_988_7], // face 15
  [3.294_508_837_434_268, 1.200_113_735_041_073, 5.388_903_939_827_464],   // face 16
  [3.804_819_692_245_44, 1.710_424_589_852_244_5, 5.899_214_794_638_635],   // face 17
  [3.664_438_879_055_192_4, 1.570_043_776_661_997, 5.758_833_981_448_388],   // face 18
  [2.361_378_999_196_363, 0.266_983_896_803_167_6, 4.455_774_101_589_558_6], // face 19
];

/// Transform into an adjacent face's IJK system.
#[derive(Debug, Clone, Copy)]
struct FaceOrientIJK {
  /// Destination face.
  face: i32,
  /// Res-0 translation relative to the primary face.
  translate: CoordIJK,
  /// 60° ccw rotations relative to the primary face.
  ccw_rot60: i32,
}

const fn fo(face: i32, i: i32, j: i32, k: i32, ccw_rot60: i32) -> FaceOrientIJK {
  FaceOrientIJK {
    face,
    translate: CoordIJK::new(i, j, k),
    ccw_rot60,
  }
}

/// Neighboring face orientation in each quadrant (central, IJ, KI, JK).
#[rustfmt::skip]
static FACE_NEIGHBORS: [[FaceOrientIJK; 4]; NUM_ICOSA_FACES as usize] = [
  [ fo(0, 0, 0, 0, 0),
    fo(4, 2, 0, 2, 1),
    fo(1, 2, 2, 0, 5),
    fo(5, 0, 2, 2, 3) ],
  [ fo(1, 0, 0, 0, 0),
    fo(0, 2, 0, 2, 1),
    fo(2, 2, 2, 0, 5),
    fo(6, 0, 2, 2, 3) ],
  [ fo(2, 0, 0, 0, 0),
    fo(1, 2, 0, 2, 1),
    fo(3, 2, 2, 0, 5),
    fo(7, 0, 2, 2, 3) ],
  [ fo(3, 0, 0, 0, 0),
    fo(2, 2, 0, 2, 1),
    fo(4, 2, 2, 0, 5),
    fo(8, 0, 2, 2, 3) ],
  [ fo(4, 0, 0, 0, 0),
    fo(3, 2, 0, 2, 1),
    fo(0, 2, 2, 0, 5),
    fo(9, 0, 2, 2, 3) ],
  [ fo(5, 0, 0, 0, 0),
    fo(10, 2, 2, 0, 3),
    fo(14, 2, 0, 2, 3),
    fo(0, 0, 2, 2, 3) ],
  [ fo(6, 0, 0, 0, 0),
    fo(11, 2, 2, 0, 3),
    fo(10, 2, 0, 2, 3),
    fo(1, 0, 2, 2, 3) ],
  [ fo(7, 0, 0, 0, 0),
    fo(12, 2, 2, 0, 3),
    fo(11, 2, 0, 2, 3),
    fo(2, 0, 2, 2, 3) ],
  [ fo(8, 0, 0, 0, 0),
    fo(13, 2, 2, 0, 3),
    fo(12, 2, 0, 2, 3),
    fo(3, 0, 2, 2, 3) ],
  [ fo(9, 0, 0, 0, 0),
    fo(14, 2, 2, 0, 3),
    fo(13, 2, 0, 2, 3),
    fo(4, 0, 2, 2, 3) ],
  [ fo(10, 0, 0, 0, 0),
    fo(5, 2, 2, 0, 3),
    fo(6, 2, 0, 2, 3),
    fo(15, 0, 2, 2, 3) ],
  [ fo(11, 0, 0, 0, 0),
    fo(6, 2, 2, 0, 3),
    fo(7, 2, 0, 2, 3),
    fo(16, 0, 2, 2, 3) ],
  [ fo(12, 0, 0, 0, 0),
    fo(7, 2, 2, 0, 3),
    fo(8, 2, 0, 2, 3),
    fo(17, 0, 2, 2, 3) ],
  [ fo(13, 0, 0, 0, 0),
    fo(8, 2, 2, 0, 3),
    fo(9, 2, 0, 2, 3),
    fo(18, 0, 2, 2, 3) ],
  [ fo(14, 0, 0, 0, 0),
    fo(9, 2, 2, 0, 3),
    fo(5, 2, 0, 2, 3),
    fo(19, 0, 2, 2, 3) ],
  [ fo(15, 0, 0, 0, 0),
    fo(16, 2, 0, 2, 1),
    fo(19, 2, 2, 0, 5),
    fo(10, 0, 2, 2, 3) ],
  [ fo(16, 0, 0, 0, 0),
    fo(17, 2, 0, 2, 1),
    fo(15, 2, 2, 0, 5),
    fo(11, 0, 2, 2, 3) ],
  [ fo(17, 0, 0, 0, 0),
    fo(18, 2, 0, 2, 1),
    fo(16, 2, 2, 0, 5),
    fo(12, 0, 2, 2, 3) ],
  [ fo(18, 0, 0, 0, 0),
    fo(19, 2, 0, 2, 1),
    fo(17, 2, 2, 0, 5),
    fo(13, 0, 2, 2, 3) ],
  [ fo(19, 0, 0, 0, 0),
    fo(15, 2, 0, 2, 1),
    fo(18, 2, 2, 0, 5),
    fo(14, 0, 2, 2, 3) ],
];

/// Quadrant direction from one face to an adjacent face, -1 when the faces do
/// not touch.
#[rustfmt::skip]
static ADJACENT_FACE_DIR: [[i32; NUM_ICOSA_FACES as usize]; NUM_ICOSA_FACES as usize] = [
  [ 0, KI,  -1,  -1, IJ, JK,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  [IJ,   0, KI,  -1,  -1,  -1, JK,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  [ -1, IJ,   0, KI,  -1,  -1,  -1, JK,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  [ -1,  -1, IJ,   0, KI,  -1,  -1,  -1, JK,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  [KI,  -1,  -1, IJ,   0,  -1,  -1,  -1,  -1, JK,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  [JK,  -1,  -1,  -1,  -1,   0,  -1,  -1,  -1,  -1, IJ,  -1,  -1,  -1, KI,  -1,  -1,  -1,  -1,  -1],
  [ -1, JK,  -1,  -1,  -1,  -1,   0,  -1,  -1,  -1, KI, IJ,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  [ -1,  -1, JK,  -1,  -1,  -1,  -1,   0,  -1,  -1,  -1, KI, IJ,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  [ -1,  -1,  -1, JK,  -1,  -1,  -1,  -1,   0,  -1,  -1,  -1, KI, IJ,  -1,  -1,  -1,  -1,  -1,  -1],
  [ -1,  -1,  -1,  -1, JK,  -1,  -1,  -1,  -1,   0,  -1,  -1,  -1, KI, IJ,  -1,  -1,  -1,  -1,  -1],
  [ -1,  -1,  -1,  -1,  -1, IJ, KI,  -1,  -1,  -1,   0,  -1,  -1,  -1,  -1, JK,  -1,  -1,  -1,  -1],
  [ -1,  -1,  -1,  -1,  -1,  -1, IJ, KI,  -1,  -1,  -1,   0,  -1,  -1,  -1,  -1, JK,  -1,  -1,  -1],
  [ -1,  -1,  -1,  -1,  -1,  -1,  -1, IJ, KI,  -1,  -1,  -1,   0,  -1,  -1,  -1,  -1, JK,  -1,  -1],
  [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1, IJ, KI,  -1,  -1,  -1,   0,  -1,  -1,  -1,  -1, JK,  -1],
  [ -1,  -1,  -1,  -1,  -1, KI,  -1,  -1,  -1, IJ,  -1,  -1,  -1,  -1,   0,  -1,  -1,  -1,  -1, JK],
  [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1, JK,  -1,  -1,  -1,  -1,   0, IJ,  -1,  -1, KI],
  [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1, JK,  -1,  -1,  -1, KI,   0, IJ,  -1,  -1],
  [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1, JK,  -1,  -1,  -1, KI,   0, IJ,  -1],
  [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1, JK,  -1,  -1,  -1, KI,   0, IJ],
  [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1, JK, IJ,  -1,  -1, KI,   0],
];

/// Finds the icosahedron face whose center is nearest the point, together
/// with the squared Euclidean distance to that center on the unit sphere.
fn geo_to_closest_face(g: &LatLng) -> (i32, f64) {
  let v3d = geo_to_vec3d(g);
  let mut face = 0;
  let mut sqd = 5.0;
  for (f, center) in FACE_CENTER_POINT.iter().enumerate() {
    let d = center.square_dist(&v3d);
    if d < sqd {
      face = f as i32;
      sqd = d;
    }
  }
  (face, sqd)
}

/// Projects a spherical coordinate onto the nearest face plane as a scaled
/// 2D hex coordinate at the given resolution.
fn geo_to_hex2d(g: &LatLng, res: i32) -> (i32, Vec2d) {
  let (face, sqd) = geo_to_closest_face(g);

  // Cosine rule on the chord length gives the great-circle distance to the
  // face center.
  let r = (1.0 - sqd / 2.0).clamp(-1.0, 1.0).acos();
  if r < EPSILON {
    return (face, Vec2d::default());
  }

  let az = geo_azimuth_rads(&FACE_CENTER_GEO[face as usize], g);
  let mut theta = pos_angle_rads(FACE_AXES_AZ_RADS_CII[face as usize][0] - pos_angle_rads(az));
  if is_resolution_class_iii(res) {
    theta = pos_angle_rads(theta - AP7_ROT_RADS);
  }

  // Gnomonic scaling, then grid scaling for the target resolution.
  let mut r = r.tan() * INV_RES0_U_GNOMONIC;
  for _ in 0..res {
    r *= SQRT7;
  }

  (face, Vec2d::new(r * theta.cos(), r * theta.sin()))
}

/// Inverts the face-plane projection back to a spherical coordinate.
fn hex2d_to_geo(v: &Vec2d, face: i32, res: i32, substrate: bool) -> LatLng {
  let mut r = v.mag();
  if r < EPSILON {
    return FACE_CENTER_GEO[face as usize];
  }

  let mut theta = v.y.atan2(v.x);

  for _ in 0..res {
    r *= RSQRT7;
  }
  if substrate {
    r /= 3.0;
    if is_resolution_class_iii(res) {
      r *= RSQRT7;
    }
  }
  r *= RES0_U_GNOMONIC;
  r = r.atan();

  if !substrate && is_resolution_class_iii(res) {
    theta = pos_angle_rads(theta + AP7_ROT_RADS);
  }
  let az = pos_angle_rads(FACE_AXES_AZ_RADS_CII[face as usize][0] - theta);
  geo_az_distance_rads(&FACE_CENTER_GEO[face as usize], az, r)
}

/// Projects a spherical coordinate to the containing cell's [`FaceIJK`] at
/// the given resolution.
pub(crate) fn geo_to_face_ijk(g: &LatLng, res: i32) -> FaceIJK {
  let (face, v) = geo_to_hex2d(g, res);
  FaceIJK {
    face,
    coord: hex2d_to_coord_ijk(&v),
  }
}

/// Center point of the cell at the given [`FaceIJK`] and resolution.
pub(crate) fn face_ijk_to_geo(h: &FaceIJK, res: i32) -> LatLng {
  hex2d_to_geo(&h.coord.to_hex2d(), h.face, res, false)
}

/// Remaps a coordinate that overflows its face onto the proper adjacent face.
///
/// `res` must be a Class II resolution. `pent_leading_4` rotates out of a
/// pentagon's missing K sequence before the remap; `substrate` treats the
/// coordinate as lying on the aperture-3 substrate grid.
pub(crate) fn adjust_overage_class_ii(fijk: &mut FaceIJK, res: i32, pent_leading_4: bool, substrate: bool) -> Overage {
  let mut max_dim = MAX_DIM_BY_CII_RES[res as usize];
  if substrate {
    max_dim *= 3;
  }

  let sum = fijk.coord.i + fijk.coord.j + fijk.coord.k;
  if substrate && sum == max_dim {
    return Overage::FaceEdge;
  }
  if sum <= max_dim {
    return Overage::None;
  }

  let orient = if fijk.coord.k > 0 {
    if fijk.coord.j > 0 {
      &FACE_NEIGHBORS[fijk.face as usize][JK as usize]
    } else {
      // Rotate out of the missing K-axes sub-sequence of a pentagon before
      // crossing into the KI quadrant.
      if pent_leading_4 {
        let origin = CoordIJK::new(max_dim, 0, 0);
        let mut tmp = fijk.coord.sub(&origin);
        tmp.rotate60_cw();
        fijk.coord = tmp.add(&origin);
      }
      &FACE_NEIGHBORS[fijk.face as usize][KI as usize]
    }
  } else {
    &FACE_NEIGHBORS[fijk.face as usize][IJ as usize]
  };

  fijk.face = orient.face;
  for _ in 0..orient.ccw_rot60 {
    fijk.coord.rotate60_ccw();
  }

  let mut unit_scale = UNIT_SCALE_BY_CII_RES[res as usize];
  if substrate {
    unit_scale *= 3;
  }
  fijk.coord = fijk.coord.add(&orient.translate.scaled(unit_scale));
  fijk.coord.normalize();

  // Overage points on pentagon boundaries can end up on an edge of the new
  // face.
  if substrate && fijk.coord.i + fijk.coord.j + fijk.coord.k == max_dim {
    Overage::FaceEdge
  } else {
    Overage::NewFace
  }
}

/// Repeats overage adjustment for a pentagon vertex until it settles on a
/// face; pentagon geometry can cross two face edges.
pub(crate) fn adjust_pent_vert_overage(fijk: &mut FaceIJK, res: i32) -> Overage {
  loop {
    let overage = adjust_overage_class_ii(fijk, res, false, true);
    if overage != Overage::NewFace {
      return overage;
    }
  }
}

/// Substrate-grid vertex offsets around a hexagon center, Class II.
#[rustfmt::skip]
const VERTS_CII: [CoordIJK; NUM_HEX_VERTS] = [
  CoordIJK::new(2, 1, 0), CoordIJK::new(1, 2, 0), CoordIJK::new(0, 2, 1),
  CoordIJK::new(0, 1, 2), CoordIJK::new(1, 0, 2), CoordIJK::new(2, 0, 1),
];

/// Substrate-grid vertex offsets around a hexagon center, Class III.
#[rustfmt::skip]
const VERTS_CIII: [CoordIJK; NUM_HEX_VERTS] = [
  CoordIJK::new(5, 4, 0), CoordIJK::new(1, 5, 0), CoordIJK::new(0, 5, 4),
  CoordIJK::new(0, 1, 5), CoordIJK::new(4, 0, 5), CoordIJK::new(5, 0, 1),
];

/// Moves the center onto the substrate grid and returns the cell's vertices
/// as substrate coordinates. Class III input shifts to the next finer
/// Class II resolution, reflected in `res` on return.
pub(crate) fn face_ijk_to_verts(fijk: &mut FaceIJK, res: &mut i32) -> [FaceIJK; NUM_HEX_VERTS] {
  let verts = if is_resolution_class_iii(*res) { &VERTS_CIII } else { &VERTS_CII };

  fijk.coord.down_ap3();
  fijk.coord.down_ap3r();
  if is_resolution_class_iii(*res) {
    fijk.coord.down_ap7r();
    *res += 1;
  }

  let mut out = [FaceIJK::default(); NUM_HEX_VERTS];
  for (v, offset) in verts.iter().enumerate() {
    out[v].face = fijk.face;
    out[v].coord = fijk.coord.add(offset);
    out[v].coord.normalize();
  }
  out
}

/// Pentagon variant of [`face_ijk_to_verts`]; the K-side vertex is absent.
pub(crate) fn face_ijk_pent_to_verts(fijk: &mut FaceIJK, res: &mut i32) -> [FaceIJK; NUM_PENT_VERTS] {
  let verts: [CoordIJK; NUM_PENT_VERTS] = if is_resolution_class_iii(*res) {
    [VERTS_CIII[0], VERTS_CIII[1], VERTS_CIII[2], VERTS_CIII[3], VERTS_CIII[4]]
  } else {
    [VERTS_CII[0], VERTS_CII[1], VERTS_CII[2], VERTS_CII[3], VERTS_CII[4]]
  };

  fijk.coord.down_ap3();
  fijk.coord.down_ap3r();
  if is_resolution_class_iii(*res) {
    fijk.coord.down_ap7r();
    *res += 1;
  }

  let mut out = [FaceIJK::default(); NUM_PENT_VERTS];
  for (v, offset) in verts.iter().enumerate() {
    out[v].face = fijk.face;
    out[v].coord = fijk.coord.add(offset);
    out[v].coord.normalize();
  }
  out
}

/// Corner points of the face triangle on the substrate grid, used to locate
/// edge crossings.
fn icosa_edge_verts(max_dim: i32) -> [Vec2d; 3] {
  let d = f64::from(max_dim);
  [
    Vec2d::new(3.0 * d, 0.0),
    Vec2d::new(-1.5 * d, 3.0 * SIN60 * d),
    Vec2d::new(-1.5 * d, -3.0 * SIN60 * d),
  ]
}

fn edge_for_quadrant(corners: &[Vec2d; 3], dir: i32) -> (&Vec2d, &Vec2d) {
  match dir {
    d if d == IJ => (&corners[0], &corners[1]),
    d if d == JK => (&corners[1], &corners[2]),
    // KI; any other value indicates corrupt adjacency data for faces that
    // were observed to differ, which cannot happen for valid cells.
    _ => (&corners[2], &corners[0]),
  }
}

/// Boundary of the cell at the given [`FaceIJK`] in counter-clockwise order,
/// starting from `start` and spanning `length` topological vertices.
///
/// For Class III resolutions an extra vertex is inserted wherever a cell edge
/// crosses an icosahedron face edge.
pub(crate) fn face_ijk_to_cell_boundary(h: &FaceIJK, res: i32, start: usize, length: usize) -> CellBoundary {
  let mut adj_res = res;
  let mut center = *h;
  let verts = face_ijk_to_verts(&mut center, &mut adj_res);

  // One extra iteration tests for a distortion vertex on the closing edge.
  let additional_iteration = usize::from(length == NUM_HEX_VERTS);

  let mut boundary = CellBoundary::default();
  let mut last_face = -1;
  let mut last_overage = Overage::None;

  for vert in start..start + length + additional_iteration {
    let v = vert % NUM_HEX_VERTS;

    let mut fijk = verts[v];
    let overage = adjust_overage_class_ii(&mut fijk, adj_res, false, true);

    // Each face is a distinct projection plane, so an edge crossing face
    // boundaries needs a vertex at the intersection with the face edge.
    // Class II edges have their vertices on the face edge and never cross.
    if is_resolution_class_iii(res) && vert > start && fijk.face != last_face && last_overage != Overage::FaceEdge {
      let last_v = (v + NUM_HEX_VERTS - 1) % NUM_HEX_VERTS;
      let orig2d0 = verts[last_v].coord.to_hex2d();
      let orig2d1 = verts[v].coord.to_hex2d();

      let corners = icosa_edge_verts(MAX_DIM_BY_CII_RES[adj_res as usize]);
      let face2 = if last_face == center.face { fijk.face } else { last_face };
      let (edge0, edge1) = edge_for_quadrant(&corners, ADJACENT_FACE_DIR[center.face as usize][face2 as usize]);

      let inter = vec2d::intersect(&orig2d0, &orig2d1, edge0, edge1);
      // A crossing exactly at a cell vertex leaves both adjacent edges on
      // single faces; no extra vertex then.
      if !orig2d0.almost_equals(&inter) && !orig2d1.almost_equals(&inter) {
        boundary.push(hex2d_to_geo(&inter, center.face, adj_res, true));
      }
    }

    // The final iteration exists only to test the closing edge.
    if vert < start + NUM_HEX_VERTS {
      boundary.push(hex2d_to_geo(&fijk.coord.to_hex2d(), fijk.face, adj_res, true));
    }

    last_face = fijk.face;
    last_overage = overage;
  }
  boundary
}

/// Pentagon variant of [`face_ijk_to_cell_boundary`]. Every Class III
/// pentagon edge crosses an icosahedron face edge.
pub(crate) fn face_ijk_pent_to_cell_boundary(h: &FaceIJK, res: i32, start: usize, length: usize) -> CellBoundary {
  let mut adj_res = res;
  let mut center = *h;
  let verts = face_ijk_pent_to_verts(&mut center, &mut adj_res);

  let additional_iteration = usize::from(length == NUM_PENT_VERTS);

  let mut boundary = CellBoundary::default();
  let mut last_fijk = FaceIJK::default();

  for vert in start..start + length + additional_iteration {
    let v = vert % NUM_PENT_VERTS;

    let mut fijk = verts[v];
    adjust_pent_vert_overage(&mut fijk, adj_res);

    if is_resolution_class_iii(res) && vert > start {
      // Project the current vertex into the previous vertex's face plane and
      // intersect the edge between them with the face edge.
      let mut tmp = fijk;
      let orig2d0 = last_fijk.coord.to_hex2d();

      let current_to_last_dir = ADJACENT_FACE_DIR[tmp.face as usize][last_fijk.face as usize];
      let orient = &FACE_NEIGHBORS[tmp.face as usize][current_to_last_dir as usize];

      tmp.face = orient.face;
      for _ in 0..orient.ccw_rot60 {
        tmp.coord.rotate60_ccw();
      }
      tmp.coord = tmp
        .coord
        .add(&orient.translate.scaled(UNIT_SCALE_BY_CII_RES[adj_res as usize] * 3));
      tmp.coord.normalize();

      let orig2d1 = tmp.coord.to_hex2d();

      let corners = icosa_edge_verts(MAX_DIM_BY_CII_RES[adj_res as usize]);
      let (edge0, edge1) = edge_for_quadrant(&corners, ADJACENT_FACE_DIR[tmp.face as usize][fijk.face as usize]);

      let inter = vec2d::intersect(&orig2d0, &orig2d1, edge0, edge1);
      boundary.push(hex2d_to_geo(&inter, tmp.face, adj_res, true));
    }

    if vert < start + NUM_PENT_VERTS {
      boundary.push(hex2d_to_geo(&fijk.coord.to_hex2d(), fijk.face, adj_res, true));
    }

    last_fijk = fijk;
  }
  boundary
}
