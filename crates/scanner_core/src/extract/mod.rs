//! Boundary extraction - threshold classification plus exposed-face culling.
//!
//! The walk starts at the root. A cell whose occupancy ratio reaches the
//! threshold is treated as solid all the way down: none of its children are
//! visited, and each of its 6 faces is emitted only when the same-depth
//! neighbor across that face is missing or not solid. A non-solid interior
//! cell recurses into its 8 children; a non-solid leaf contributes nothing.
//!
//! The result is a blocky boundary surface at mixed resolution: coarse solid
//! cells are drawn as single big quads and only locally ambiguous regions
//! refine into finer faces. Cost is dominated by the per-face neighbor
//! lookups, `O(emitted faces * max_depth)`.
//!
//! Triangles accumulate into one caller-owned `Vec` passed down the
//! recursion, so the walk allocates no intermediate per-level lists.

use glam::Vec3;
use tracing::debug;

use crate::types::Triangle;
use crate::volume::{child_indices, OccupancyVolume};

/// Extract the boundary mesh of all cells at or above `threshold`.
///
/// Vertices are relative to the scan volume's center, so the mesh is
/// centered at the origin of the scanned region. `threshold` is compared
/// against `hits / total` per cell.
pub fn extract_faces(volume: &OccupancyVolume, threshold: f32) -> Vec<Triangle> {
  let mut triangles = Vec::new();
  let center = volume.bounds().center();
  emit_node(volume, 0, threshold, center, &mut triangles);

  debug!(
    threshold,
    triangles = triangles.len(),
    "extracted boundary mesh"
  );
  triangles
}

fn is_occupied(volume: &OccupancyVolume, index: usize, threshold: f32) -> bool {
  volume.node(index).occupancy_ratio() >= threshold
}

/// True when the face toward `probe` has no solid same-depth neighbor.
fn face_exposed(volume: &OccupancyVolume, probe: Vec3, depth: u32, threshold: f32) -> bool {
  match volume.locate_at_depth(probe, depth) {
    None => true,
    Some(neighbor) => !is_occupied(volume, neighbor, threshold),
  }
}

fn emit_node(
  volume: &OccupancyVolume,
  index: usize,
  threshold: f32,
  center: Vec3,
  out: &mut Vec<Triangle>,
) {
  let node = volume.node(index);

  if is_occupied(volume, index, threshold) {
    let extent = node.extent();
    let ox = Vec3::new(extent.x, 0.0, 0.0);
    let oy = Vec3::new(0.0, extent.y, 0.0);
    let oz = Vec3::new(0.0, 0.0, extent.z);

    // Neighbor probes are world-space points one full extent across each
    // face; emitted vertices are center-relative.
    let probe_base = node.min_corner();
    let min = node.min_corner() - center;
    let max = node.max_corner() - center;
    let depth = node.depth;

    // East  (+x)
    if face_exposed(volume, probe_base + ox, depth, threshold) {
      out.push(Triangle::new(max, max - oy, min + ox));
      out.push(Triangle::new(max, min + ox, max - oz));
    }
    // North (+y)
    if face_exposed(volume, probe_base + oy, depth, threshold) {
      out.push(Triangle::new(max, max - oz, min + oy));
      out.push(Triangle::new(max, min + oy, max - ox));
    }
    // Up    (+z)
    if face_exposed(volume, probe_base + oz, depth, threshold) {
      out.push(Triangle::new(max, max - ox, min + oz));
      out.push(Triangle::new(max, min + oz, max - oy));
    }
    // West  (-x)
    if face_exposed(volume, probe_base - ox, depth, threshold) {
      out.push(Triangle::new(min, min + oz, max - ox));
      out.push(Triangle::new(min, max - ox, min + oy));
    }
    // South (-y)
    if face_exposed(volume, probe_base - oy, depth, threshold) {
      out.push(Triangle::new(min, min + ox, max - oy));
      out.push(Triangle::new(min, max - oy, min + oz));
    }
    // Down  (-z)
    if face_exposed(volume, probe_base - oz, depth, threshold) {
      out.push(Triangle::new(min, min + oy, max - oz));
      out.push(Triangle::new(min, max - oz, min + ox));
    }
  } else if node.depth < volume.max_depth() {
    for child in child_indices(index) {
      emit_node(volume, child, threshold, center, out);
    }
  }
}
