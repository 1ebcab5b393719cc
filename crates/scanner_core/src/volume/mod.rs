//! Occupancy volume - a complete fixed-depth octree in a flat array.
//!
//! The tree is never pointer-linked: all `(8^(depth+1) - 1) / 7` nodes live
//! in one `Vec` in level order, and the index arithmetic IS the tree
//! structure (`parent = (i - 1) / 8`, `children = 8i + 1 ..= 8i + 8`,
//! `octant = (i - 1) % 8`). That layout is what makes the GPU mirror cheap:
//! the whole array is one contiguous byte image that can be uploaded and
//! read back without any translation.
//!
//! # Counter lifecycle
//!
//! Construction seeds every cell with `hits = 0, total = 1` (unknown, but
//! division-safe). From then on the counters are only replaced wholesale via
//! [`OccupancyVolume::refresh_from_buffer`], never patched field-by-field, so
//! a reader can never observe a torn mix of two frames.

use bytemuck::Zeroable;
use thiserror::Error;
use tracing::{debug, info};

pub mod bounds;
pub mod locate;
pub mod node;

pub use bounds::Aabb;
pub use node::{GpuHeader, GpuNode, HEADER_SIZE, NODE_SIZE};

/// Errors from volume construction and buffer exchange.
#[derive(Debug, Error)]
pub enum VolumeError {
  /// Scan bounds are flat or inverted on at least one axis.
  #[error("invalid scan bounds: min {min:?} must be strictly below max {max:?} on every axis")]
  InvalidBounds { min: [f32; 3], max: [f32; 3] },

  /// Depth 0 would leave a single undivided cell; the volume needs at least
  /// one subdivision level.
  #[error("invalid octree depth {depth}: must be at least 1")]
  InvalidDepth { depth: u32 },

  /// A bulk copy was attempted with a buffer of the wrong size.
  #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
  BufferSize { expected: usize, actual: usize },
}

/// Index of the parent of node `i` (undefined for the root).
#[inline]
pub fn parent_index(i: usize) -> usize {
  (i - 1) / 8
}

/// Octant number (0-7) of node `i` within its parent.
#[inline]
pub fn octant(i: usize) -> usize {
  (i - 1) % 8
}

/// Level-order indices of the 8 children of node `i`.
#[inline]
pub fn child_indices(i: usize) -> core::ops::Range<usize> {
  8 * i + 1..8 * i + 9
}

/// Total node count of a complete 8-ary tree with levels 0..=depth.
pub fn node_count_for_depth(depth: u32) -> usize {
  (8usize.pow(depth + 1) - 1) / 7
}

/// Complete fixed-depth occupancy octree over a world-space box.
pub struct OccupancyVolume {
  header: GpuHeader,
  nodes: Vec<GpuNode>,
}

impl OccupancyVolume {
  /// Build the full level-order node array over `bounds`.
  ///
  /// Every parent box is exactly bisected among its 8 children: bit `j` of
  /// the octant number selects the lower or upper half along axis `j`, so
  /// the children tile the parent with no gaps or overlaps.
  ///
  /// Cost and memory are `O(8^max_depth)` - node count grows geometrically,
  /// so callers should stay in the depth 4-6 range.
  pub fn new(bounds: Aabb, max_depth: u32) -> Result<Self, VolumeError> {
    if !bounds.is_well_formed() {
      return Err(VolumeError::InvalidBounds {
        min: bounds.min.to_array(),
        max: bounds.max.to_array(),
      });
    }
    if max_depth == 0 {
      return Err(VolumeError::InvalidDepth { depth: max_depth });
    }

    let count = node_count_for_depth(max_depth);
    let mut nodes = vec![GpuNode::zeroed(); count];

    nodes[0] = GpuNode {
      hits: 0,
      total: 1,
      depth: 0,
      reserved: 0,
      min: [bounds.min.x, bounds.min.y, bounds.min.z, 1.0],
      max: [bounds.max.x, bounds.max.y, bounds.max.z, 1.0],
    };

    for i in 1..count {
      let parent = nodes[parent_index(i)];
      let oct = octant(i);

      let mut node = GpuNode {
        hits: 0,
        total: 1,
        depth: parent.depth + 1,
        reserved: 0,
        min: [0.0, 0.0, 0.0, 1.0],
        max: [0.0, 0.0, 0.0, 1.0],
      };
      for axis in 0..3 {
        let lo = parent.min[axis];
        let hi = parent.max[axis];
        let mid = (lo + hi) / 2.0;
        if oct & (1 << axis) == 0 {
          node.min[axis] = lo;
          node.max[axis] = mid;
        } else {
          node.min[axis] = mid;
          node.max[axis] = hi;
        }
      }
      nodes[i] = node;
    }

    let header = GpuHeader {
      depth: max_depth,
      size: count as u32,
      reserved: [0; 2],
    };

    info!(
      depth = max_depth,
      nodes = count,
      bytes = HEADER_SIZE + count * NODE_SIZE,
      "constructed occupancy volume"
    );

    Ok(Self { header, nodes })
  }

  /// Fixed tree depth (root is 0).
  #[inline]
  pub fn max_depth(&self) -> u32 {
    self.header.depth
  }

  /// Total node count.
  #[inline]
  pub fn node_count(&self) -> usize {
    self.nodes.len()
  }

  /// Node record at a level-order index.
  #[inline]
  pub fn node(&self, index: usize) -> &GpuNode {
    &self.nodes[index]
  }

  /// All node records in level order.
  #[inline]
  pub fn nodes(&self) -> &[GpuNode] {
    &self.nodes
  }

  /// The scanned region (the root cell's box).
  pub fn bounds(&self) -> Aabb {
    Aabb::new(self.nodes[0].min_corner(), self.nodes[0].max_corner())
  }

  /// Exact byte footprint of the GPU-mirrored buffer (header + nodes).
  pub fn size_in_bytes(&self) -> usize {
    HEADER_SIZE + self.nodes.len() * NODE_SIZE
  }

  /// Borrowed byte image of the header block, for the GPU upload call.
  pub fn header_bytes(&self) -> &[u8] {
    bytemuck::bytes_of(&self.header)
  }

  /// Borrowed byte image of the node array, for the GPU upload call.
  pub fn node_bytes(&self) -> &[u8] {
    bytemuck::cast_slice(&self.nodes)
  }

  /// One-shot copy of the header block into a caller-supplied buffer.
  ///
  /// `dest` must be exactly [`HEADER_SIZE`] bytes.
  pub fn write_header(&self, dest: &mut [u8]) -> Result<(), VolumeError> {
    let src = self.header_bytes();
    check_len(src.len(), dest.len())?;
    dest.copy_from_slice(src);
    Ok(())
  }

  /// One-shot copy of the node array into a caller-supplied buffer.
  ///
  /// `dest` must be exactly `node_count() * NODE_SIZE` bytes.
  pub fn write_nodes(&self, dest: &mut [u8]) -> Result<(), VolumeError> {
    let src = self.node_bytes();
    check_len(src.len(), dest.len())?;
    dest.copy_from_slice(src);
    Ok(())
  }

  /// Replace the host-side node array with externally updated counters.
  ///
  /// `src` is the node block of the GPU buffer (the inverse of
  /// [`write_nodes`](Self::write_nodes); the header is excluded) and must be
  /// exactly `node_count() * NODE_SIZE` bytes. The copy is always the whole
  /// block, so the host array never holds a mix of two frames' counters.
  pub fn refresh_from_buffer(&mut self, src: &[u8]) -> Result<(), VolumeError> {
    let dest: &mut [u8] = bytemuck::cast_slice_mut(&mut self.nodes);
    check_len(dest.len(), src.len())?;
    dest.copy_from_slice(src);
    debug!(nodes = self.nodes.len(), "refreshed counters from buffer");
    Ok(())
  }

  /// Reseed every cell as fully occupied (`hits = 1, total = 1`).
  ///
  /// Carve-style scanning starts from a solid block and lets per-frame
  /// evidence eat away at it; this is the seed for that mode.
  pub fn reset_solid(&mut self) {
    for node in &mut self.nodes {
      node.hits = 1;
      node.total = 1;
    }
  }

  /// Overwrite one cell's counters host-side.
  ///
  /// Production updates arrive wholesale through
  /// [`refresh_from_buffer`](Self::refresh_from_buffer); this is for seeding
  /// fixtures in tests, benchmarks, and offline tools.
  pub fn set_counters(&mut self, index: usize, hits: u32, total: u32) {
    let node = &mut self.nodes[index];
    node.hits = hits;
    node.total = total;
  }
}

fn check_len(expected: usize, actual: usize) -> Result<(), VolumeError> {
  if expected != actual {
    return Err(VolumeError::BufferSize { expected, actual });
  }
  Ok(())
}
