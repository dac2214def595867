use super::*;

fn tile(x: f32, y: f32, width: f32, height: f32) -> Tile {
  Tile {
    center: Vec2::new(x, y),
    width,
    height,
    depth_offset: 0.0,
    depth: 0,
  }
}

#[test]
fn test_square_is_centred_at_origin() {
  let region = Region::square(150.0);
  assert_eq!(region.center, Vec2::ZERO);
  assert_eq!(region.min(), Vec2::splat(-75.0));
  assert_eq!(region.max(), Vec2::splat(75.0));
  assert_eq!(region.area(), 22500.0);
}

#[test]
fn test_split_axis_prefers_vertical_on_ties() {
  assert_eq!(Region::square(10.0).split_axis(), SplitAxis::Vertical);
  assert_eq!(
    Region::new(Vec2::ZERO, 20.0, 10.0).split_axis(),
    SplitAxis::Vertical
  );
  assert_eq!(
    Region::new(Vec2::ZERO, 10.0, 20.0).split_axis(),
    SplitAxis::Horizontal
  );
}

/// Vertical split: children side by side, touching at min.x + split_at.
#[test]
fn test_vertical_split_geometry() {
  let region = Region::new(Vec2::new(10.0, 5.0), 40.0, 20.0);
  let (first, second) = region.split(SplitAxis::Vertical, 16.0);

  assert_eq!(first.width, 16.0);
  assert_eq!(second.width, 24.0);
  assert_eq!(first.height, 20.0);
  assert_eq!(second.height, 20.0);

  assert_eq!(first.min().x, region.min().x, "first starts at region min");
  assert_eq!(second.max().x, region.max().x, "second ends at region max");
  assert_eq!(first.max().x, second.min().x, "children share an edge");
  assert_eq!(first.center.y, 5.0);
  assert_eq!(second.center.y, 5.0);
}

/// Horizontal split: children stacked, touching at min.y + split_at.
#[test]
fn test_horizontal_split_geometry() {
  let region = Region::new(Vec2::new(-3.0, 2.0), 10.0, 30.0);
  let (first, second) = region.split(SplitAxis::Horizontal, 12.0);

  assert_eq!(first.height, 12.0);
  assert_eq!(second.height, 18.0);
  assert_eq!(first.width, 10.0);
  assert_eq!(first.min().y, region.min().y);
  assert_eq!(second.max().y, region.max().y);
  assert_eq!(first.max().y, second.min().y);
  assert_eq!(first.center.x, -3.0);
}

#[test]
fn test_split_preserves_extent() {
  let region = Region::new(Vec2::ZERO, 37.5, 11.0);
  let (first, second) = region.split(SplitAxis::Vertical, 17.3);
  assert!((first.width + second.width - region.width).abs() < 1e-5);
  assert!((first.area() + second.area() - region.area()).abs() < 1e-3);
}

#[test]
fn test_tiles_sharing_an_edge_do_not_overlap() {
  let a = tile(-5.0, 0.0, 10.0, 10.0);
  let b = tile(5.0, 0.0, 10.0, 10.0);
  assert!(!a.overlaps(&b, 1e-4));
  assert!(!b.overlaps(&a, 1e-4));
}

#[test]
fn test_intersecting_tiles_overlap() {
  let a = tile(0.0, 0.0, 10.0, 10.0);
  let b = tile(4.0, 4.0, 10.0, 10.0);
  assert!(a.overlaps(&b, 1e-4));
  assert!(b.overlaps(&a, 1e-4));
}

#[test]
fn test_disjoint_tiles_do_not_overlap() {
  let a = tile(0.0, 0.0, 2.0, 2.0);
  let b = tile(10.0, 10.0, 2.0, 2.0);
  assert!(!a.overlaps(&b, 0.0));
}
