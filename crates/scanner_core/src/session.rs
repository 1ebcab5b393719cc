//! ScanSession - owns the occupancy volume and drives refresh and export.
//!
//! There is no global current-session pointer: whoever drives the render
//! loop owns the session and calls [`ScanSession::pump`] between frames and
//! [`ScanSession::export`] on the export trigger. Multiple sessions can
//! coexist, each with its own volume.
//!
//! # Concurrency
//!
//! The core is single-threaded by design. `pump` and `export` both go
//! through the session's receivers, so on one thread they cannot interleave
//! and no lock is needed. An embedding that moves export to another thread
//! must wrap the whole session in a mutex (or double-buffer the volume) so
//! the extractor never reads a half-refreshed node array.

use std::path::Path;

use tracing::info;
use web_time::Instant;

use crate::config::ScanConfig;
use crate::extract::extract_faces;
use crate::stl;
use crate::types::ExportStats;
use crate::volume::{OccupancyVolume, VolumeError};

/// Per-frame counter producer - the narrow interface to the rendering
/// subsystem.
///
/// The renderer evaluates per-voxel visibility against the tracked marker
/// frame and updates the counters in its GPU-resident copy of the node
/// array. When a frame's worth of updates is complete it exposes the node
/// block for read-back.
pub trait FrameSource {
  /// Hand over the completed counter block (node records only, header
  /// excluded), or `None` when no new frame has finished since the last
  /// call.
  fn take_frame(&mut self) -> Option<&[u8]>;
}

/// Owns the occupancy volume and wires it to a [`FrameSource`] and the mesh
/// exporter.
pub struct ScanSession<F: FrameSource> {
  config: ScanConfig,
  volume: OccupancyVolume,
  source: F,
}

impl<F: FrameSource> ScanSession<F> {
  /// Build the volume from `config` and attach the frame source.
  pub fn new(config: ScanConfig, source: F) -> Result<Self, VolumeError> {
    let volume = OccupancyVolume::new(config.bounds(), config.max_depth)?;
    Ok(Self {
      config,
      volume,
      source,
    })
  }

  pub fn config(&self) -> &ScanConfig {
    &self.config
  }

  pub fn volume(&self) -> &OccupancyVolume {
    &self.volume
  }

  pub fn volume_mut(&mut self) -> &mut OccupancyVolume {
    &mut self.volume
  }

  /// Pull the latest frame's counters into the host-side array, if one is
  /// ready. Returns whether a refresh happened.
  pub fn pump(&mut self) -> Result<bool, VolumeError> {
    match self.source.take_frame() {
      Some(buffer) => {
        self.volume.refresh_from_buffer(buffer)?;
        Ok(true)
      }
      None => Ok(false),
    }
  }

  /// Extract the boundary mesh at the configured threshold and write it to
  /// `path`. Runs synchronously to completion.
  pub fn export(&self, path: impl AsRef<Path>) -> Result<ExportStats, stl::MeshWriteError> {
    let start = Instant::now();
    let triangles = extract_faces(&self.volume, self.config.threshold);
    stl::write_binary(path.as_ref(), &triangles, self.config.normal_mode)?;

    let stats = ExportStats {
      triangles: triangles.len(),
      export_time_us: start.elapsed().as_micros() as u64,
    };
    info!(
      path = %path.as_ref().display(),
      triangles = stats.triangles,
      elapsed_us = stats.export_time_us,
      "exported boundary mesh"
    );
    Ok(stats)
  }

  /// Export to the configured output path.
  pub fn export_to_configured(&self) -> Result<ExportStats, stl::MeshWriteError> {
    let path = self.config.output.clone();
    self.export(path)
  }
}
