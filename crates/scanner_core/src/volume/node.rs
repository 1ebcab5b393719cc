//! GPU-mirrored header and node records.
//!
//! These structs ARE the wire format: the byte image of the header followed
//! by the node array is handed to the rendering subsystem, which maps it into
//! a shader storage block and overwrites the counters in place every frame.
//! Field order, field width, and record size are therefore binding - the
//! shader indexes the buffer as 16-byte header + 48-byte records at 16-byte
//! offsets, and both sides must agree bit-exactly.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Byte size of the buffer header block.
pub const HEADER_SIZE: usize = core::mem::size_of::<GpuHeader>();

/// Byte size of one node record.
pub const NODE_SIZE: usize = core::mem::size_of::<GpuNode>();

// The shader hard-codes these strides.
const _: () = assert!(HEADER_SIZE == 16);
const _: () = assert!(NODE_SIZE == 48);

/// Buffer header: tree depth and total node count, padded to 16 bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct GpuHeader {
  /// Fixed tree depth (root is depth 0).
  pub depth: u32,
  /// Total node count, `(8^(depth+1) - 1) / 7`.
  pub size: u32,
  /// Reserved, written as zero.
  pub reserved: [u32; 2],
}

/// One octree cell: occupancy counters plus its axis-aligned box.
///
/// `hits` and `total` are the only fields the external writer changes; the
/// boxes and cached depth are immutable after construction. Corners are
/// homogeneous points (w = 1) so the shader can transform them directly.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct GpuNode {
  /// Observations that classified this cell as occupied.
  pub hits: u32,
  /// Observations made against this cell. Seeded nonzero; never 0 in a
  /// well-formed volume.
  pub total: u32,
  /// Depth of this cell (root = 0). Redundant with the index, cached for the
  /// shader.
  pub depth: u32,
  /// Reserved, written as zero.
  pub reserved: u32,
  /// Minimum corner, homogeneous (w = 1).
  pub min: [f32; 4],
  /// Maximum corner, homogeneous (w = 1).
  pub max: [f32; 4],
}

impl GpuNode {
  /// Minimum corner as a 3D point.
  #[inline]
  pub fn min_corner(&self) -> Vec3 {
    Vec3::new(self.min[0], self.min[1], self.min[2])
  }

  /// Maximum corner as a 3D point.
  #[inline]
  pub fn max_corner(&self) -> Vec3 {
    Vec3::new(self.max[0], self.max[1], self.max[2])
  }

  /// Full box extent (max - min).
  #[inline]
  pub fn extent(&self) -> Vec3 {
    self.max_corner() - self.min_corner()
  }

  /// Occupancy ratio `hits / total`.
  ///
  /// `total == 0` is an upstream contract violation; construction and
  /// refresh both seed nonzero totals.
  #[inline]
  pub fn occupancy_ratio(&self) -> f32 {
    debug_assert!(self.total > 0, "node counters must be seeded with total > 0");
    self.hits as f32 / self.total as f32
  }

  /// Half-open containment: `min[k] <= p[k] < max[k]` on all axes.
  #[inline]
  pub fn contains_half_open(&self, point: Vec3) -> bool {
    self.min[0] <= point.x
      && point.x < self.max[0]
      && self.min[1] <= point.y
      && point.y < self.max[1]
      && self.min[2] <= point.z
      && point.z < self.max[2]
  }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
