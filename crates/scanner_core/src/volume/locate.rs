//! Point-location queries over the occupancy volume.
//!
//! Containment is half-open on every cell, so a point on the volume's outer
//! maximum face is found by NO query. That is deliberate and load-bearing:
//! the boundary extractor probes one cell-extent past each face and relies on
//! out-of-volume probes (including the exact outer boundary) reporting
//! `None` so the outer shell of the mesh is emitted.

use glam::Vec3;

use super::{child_indices, OccupancyVolume};

impl OccupancyVolume {
  /// Index of the `max_depth` cell containing `point`, or `None` if the
  /// point lies outside the volume (or exactly on its maximum faces).
  ///
  /// `O(max_depth)` per call.
  pub fn locate(&self, point: Vec3) -> Option<usize> {
    self.locate_at_depth(point, self.max_depth())
  }

  /// Index of the depth-`depth` cell containing `point`.
  ///
  /// Stopping above `max_depth` is what the boundary extractor uses to find
  /// the same-depth neighbor of a coarse solid cell. Depths beyond
  /// `max_depth` are clamped to it.
  pub fn locate_at_depth(&self, point: Vec3, depth: u32) -> Option<usize> {
    let target = depth.min(self.max_depth());
    self.descend(0, point, target)
  }

  fn descend(&self, index: usize, point: Vec3, target: u32) -> Option<usize> {
    let node = self.node(index);
    if !node.contains_half_open(point) {
      return None;
    }
    if node.depth == target {
      return Some(index);
    }
    for child in child_indices(index) {
      if self.node(child).contains_half_open(point) {
        return self.descend(child, point, target);
      }
    }
    None
  }
}

#[cfg(test)]
#[path = "locate_test.rs"]
mod locate_test;
