//! scanner_core - occupancy-octree core for marker-registered 3D scanning.
//!
//! A camera stream registered against a fiducial marker accumulates per-frame
//! occupancy evidence in a stable coordinate frame. This crate owns the data
//! structure that evidence lands in and everything downstream of it:
//!
//! - **Occupancy volume**: a complete fixed-depth octree stored as a flat
//!   level-order array, laid out byte-for-byte like the GPU-resident counter
//!   buffer the rendering subsystem writes into each frame
//! - **Point location**: same-depth spatial neighbor queries over the tree
//! - **Boundary extraction**: threshold classification plus exposed-face
//!   culling, producing a blocky mixed-resolution boundary mesh
//! - **Mesh output**: binary STL triangle-soup serialization
//!
//! Camera acquisition, marker detection, and the rendering pipeline that
//! actually increments the counters are external collaborators; they reach
//! this crate only through the raw-buffer accessors on
//! [`OccupancyVolume`] and the [`FrameSource`] trait.
//!
//! # Example
//!
//! ```ignore
//! use scanner_core::{extract_faces, stl, Aabb, NormalMode, OccupancyVolume};
//! use glam::Vec3;
//!
//! let bounds = Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0));
//! let volume = OccupancyVolume::new(bounds, 4)?;
//!
//! // ... hand volume.header_bytes()/node_bytes() to the GPU upload,
//! // pull counters back via refresh_from_buffer() every frame ...
//!
//! let triangles = extract_faces(&volume, 0.5);
//! stl::write_binary("scan.stl", &triangles, NormalMode::default())?;
//! ```

pub mod config;
pub mod extract;
pub mod session;
pub mod stl;
pub mod types;
pub mod volume;

// Re-export commonly used items
pub use config::{ConfigError, ScanConfig};
pub use extract::extract_faces;
pub use session::{FrameSource, ScanSession};
pub use stl::MeshWriteError;
pub use types::{ExportStats, NormalMode, Triangle};
pub use volume::{Aabb, GpuHeader, GpuNode, OccupancyVolume, VolumeError};
