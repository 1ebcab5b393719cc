//! Core data types shared across the scanning core.

use glam::Vec3;
use serde::Deserialize;

/// A single mesh triangle, three vertices in world units.
///
/// Extractor output is expressed relative to the scan volume's center, so the
/// exported mesh is centered at the origin of the scanned region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
  pub vertices: [Vec3; 3],
}

impl Triangle {
  pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
    Self { vertices: [a, b, c] }
  }

  /// Unit normal from two independent edges.
  ///
  /// Returns `None` for degenerate triangles (collinear or repeated
  /// vertices).
  pub fn geometric_normal(&self) -> Option<Vec3> {
    let [a, b, c] = self.vertices;
    let n = (b - a).cross(c - a);
    if n.length_squared() > f32::EPSILON {
      Some(n.normalize())
    } else {
      None
    }
  }
}

/// Normal emission policy for the mesh writer.
///
/// The scanner has always written a zero normal per record (the historical
/// computation crossed an edge with itself) and downstream viewers recompute
/// normals from the vertex winding. [`NormalMode::Zero`] keeps that output
/// byte-for-byte and stays the default until the format consumers are
/// audited; [`NormalMode::Geometric`] writes proper per-face normals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalMode {
  /// Write a zero normal for every triangle (legacy output).
  Zero,

  /// Normalized cross product of two triangle edges; zero if degenerate.
  Geometric,
}

impl Default for NormalMode {
  fn default() -> Self {
    NormalMode::Zero
  }
}

/// Result summary for one mesh export.
#[derive(Clone, Copy, Debug)]
pub struct ExportStats {
  /// Number of triangles written.
  pub triangles: usize,

  /// Wall-clock time for extraction plus serialization, in microseconds.
  pub export_time_us: u64,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
