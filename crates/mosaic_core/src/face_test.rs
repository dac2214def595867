use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::*;

const EPS: f32 = 1e-4;

fn rng(seed: u64) -> ChaCha8Rng {
  ChaCha8Rng::seed_from_u64(seed)
}

/// Face-local point in cube space.
fn to_cube(placement: &FacePlacement, local: Vec3) -> Vec3 {
  placement.rotation * local + placement.translation
}

#[test]
fn test_placements_match_rotate_then_translate() {
  let h = 70.0;
  let expected = [
    (CubeSide::Front, Vec3::new(0.0, 0.0, h)),
    (CubeSide::Back, Vec3::new(0.0, 0.0, -h)),
    (CubeSide::Right, Vec3::new(h, 0.0, 0.0)),
    (CubeSide::Left, Vec3::new(-h, 0.0, 0.0)),
    (CubeSide::Top, Vec3::new(0.0, h, 0.0)),
    (CubeSide::Bottom, Vec3::new(0.0, -h, 0.0)),
  ];

  for (side, translation) in expected {
    let placement = side.placement(h);
    assert!(
      placement.translation.abs_diff_eq(translation, EPS),
      "{:?}: got {:?}, expected {:?}",
      side,
      placement.translation,
      translation
    );
  }
}

/// Opposite sides share a rotation.
#[test]
fn test_pairs_share_rotation() {
  assert_eq!(CubeSide::Front.rotation(), CubeSide::Back.rotation());
  assert_eq!(CubeSide::Right.rotation(), CubeSide::Left.rotation());
  assert_eq!(CubeSide::Top.rotation(), CubeSide::Bottom.rotation());
}

/// Outward normal points from the cube centre through the face centre.
#[test]
fn test_outward_normal_matches_translation_direction() {
  for side in CubeSide::ALL {
    let placement = side.placement(70.0);
    let from_translation = placement.translation.normalize();
    assert!(
      side.outward_normal().abs_diff_eq(from_translation, EPS),
      "{:?}",
      side
    );
  }
}

#[test]
fn test_six_distinct_normals() {
  let normals: Vec<Vec3> = CubeSide::ALL.iter().map(|s| s.outward_normal()).collect();
  for (i, a) in normals.iter().enumerate() {
    for b in &normals[i + 1..] {
      assert!(a.dot(*b) < 0.5, "{:?} and {:?} should be distinct", a, b);
    }
  }
}

/// A tile pushed by its full depth offset moves along the outward normal.
#[test]
fn test_tile_local_z_moves_outward_on_every_side() {
  let tile = Tile {
    center: glam::Vec2::new(3.0, -4.0),
    width: 5.0,
    height: 6.0,
    depth_offset: 12.0,
    depth: 4,
  };

  for side in CubeSide::ALL {
    let placement = side.placement(70.0);
    let rest = to_cube(&placement, Vec3::new(tile.center.x, tile.center.y, 0.0));
    let z = side.tile_local_z(&tile, 1.0);
    let exploded = to_cube(&placement, Vec3::new(tile.center.x, tile.center.y, z));

    let moved = (exploded - rest).dot(side.outward_normal());
    assert!((moved - 12.0).abs() < EPS, "{:?} moved {}", side, moved);
  }
}

#[test]
fn test_tile_local_z_is_zero_at_rest() {
  let tile = Tile {
    center: glam::Vec2::ZERO,
    width: 1.0,
    height: 1.0,
    depth_offset: -7.5,
    depth: 0,
  };
  for side in CubeSide::ALL {
    assert_eq!(side.tile_local_z(&tile, 0.0).abs(), 0.0);
  }
}

#[test]
fn test_build_face_covers_face_square() {
  let config = MosaicConfig::default();
  let face = build_face(CubeSide::Top, &config, &mut rng(3));

  assert_eq!(face.side, CubeSide::Top);
  assert_eq!(face.placement, CubeSide::Top.placement(config.cube.half_extent));
  assert!(face.tiles.len() > 1);

  let expected = config.cube.face_size * config.cube.face_size;
  assert!((face.covered_area() - expected).abs() < expected * 1e-4);
  assert!(face.tiles.iter().all(|t| t.depth >= 1), "a 150 square always splits");
}

#[test]
fn test_build_cube_has_one_face_per_side() {
  let cube = build_cube(&MosaicConfig::default(), &mut rng(9));

  assert_eq!(cube.faces().len(), 6);
  for side in CubeSide::ALL {
    assert!(cube.face(side).is_some(), "missing {:?}", side);
  }
  assert_eq!(
    cube.tile_count(),
    cube.faces().iter().map(|f| f.tiles.len()).sum::<usize>()
  );
}

/// Faces draw independently, so two faces of one cube differ.
#[test]
fn test_faces_are_independent() {
  let cube = build_cube(&MosaicConfig::default(), &mut rng(5));
  let front = cube.face(CubeSide::Front).map(|f| f.tiles.clone());
  let back = cube.face(CubeSide::Back).map(|f| f.tiles.clone());
  assert_ne!(front, back);
}

#[test]
fn test_build_cube_is_deterministic() {
  let config = MosaicConfig::default();
  let a = build_cube(&config, &mut rng(77));
  let b = build_cube(&config, &mut rng(77));
  for (fa, fb) in a.faces().iter().zip(b.faces()) {
    assert_eq!(fa.side, fb.side);
    assert_eq!(fa.tiles, fb.tiles);
  }
}

/// A face smaller than the split threshold is a single tile.
#[test]
fn test_tiny_face_is_single_tile() {
  let mut config = MosaicConfig::default();
  config.cube.face_size = 3.0;
  let cube = build_cube(&config, &mut rng(0));
  assert_eq!(cube.tile_count(), 6);
  assert!(cube.faces().iter().all(|f| f.tiles.len() == 1));
}
