use glam::Vec3;

use crate::volume::{child_indices, Aabb, OccupancyVolume};

fn unit_volume(depth: u32) -> OccupancyVolume {
  OccupancyVolume::new(Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0)), depth).unwrap()
}

#[test]
fn test_locate_interior_point_of_known_leaf() {
  let volume = unit_volume(2);

  // Center of every leaf locates back to that leaf.
  for index in 0..volume.node_count() {
    let node = volume.node(index);
    if node.depth != volume.max_depth() {
      continue;
    }
    let center = (node.min_corner() + node.max_corner()) * 0.5;
    assert_eq!(volume.locate(center), Some(index));
  }
}

#[test]
fn test_locate_min_corner_is_inclusive() {
  let volume = unit_volume(2);

  // The global minimum corner belongs to the all-lower-halves leaf chain:
  // octant 0 of octant 0.
  assert_eq!(volume.locate(Vec3::splat(-1.0)), Some(9));
}

#[test]
fn test_locate_max_corner_not_found() {
  let volume = unit_volume(2);

  // Half-open cells: the volume's exact maximum corner is in no cell, and
  // neither is any point on the outer maximum faces.
  assert_eq!(volume.locate(Vec3::splat(1.0)), None);
  assert_eq!(volume.locate(Vec3::new(0.0, 1.0, 0.0)), None);
}

#[test]
fn test_locate_outside_not_found() {
  let volume = unit_volume(2);

  assert_eq!(volume.locate(Vec3::splat(2.0)), None);
  assert_eq!(volume.locate(Vec3::new(-1.5, 0.0, 0.0)), None);
}

#[test]
fn test_locate_at_depth_stops_at_coarse_cells() {
  let volume = unit_volume(3);
  let point = Vec3::new(0.5, 0.5, 0.5);

  // Depth 0 is the root; depth 1 is the +x+y+z octant (octant 7, index 8).
  assert_eq!(volume.locate_at_depth(point, 0), Some(0));
  assert_eq!(volume.locate_at_depth(point, 1), Some(8));

  // The depth-2 hit must be a child of the depth-1 hit.
  let at_depth_2 = volume.locate_at_depth(point, 2).unwrap();
  assert!(child_indices(8).contains(&at_depth_2));

  // Clamped to the tree depth.
  assert_eq!(
    volume.locate_at_depth(point, 99),
    volume.locate(point)
  );
}

#[test]
fn test_locate_at_depth_outside_root_not_found_at_any_depth() {
  let volume = unit_volume(2);
  let outside = Vec3::new(3.0, 0.0, 0.0);

  for depth in 0..=2 {
    assert_eq!(volume.locate_at_depth(outside, depth), None);
  }
}

#[test]
fn test_locate_octant_midpoint_goes_to_upper_half() {
  let volume = unit_volume(1);

  // 0.0 is the bisection plane on every axis; half-open puts it in the
  // upper half, octant 7 (index 8).
  assert_eq!(volume.locate(Vec3::ZERO), Some(8));
}
