//! Binary STL output.
//!
//! The layout is the classic binary STL triangle soup: an 80-byte free-form
//! header (zero-filled here), a little-endian `u32` triangle count, then one
//! 50-byte record per triangle - `3xf32` face normal, three `3xf32`
//! vertices, and a trailing `u16` attribute byte count written as 0.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use glam::Vec3;
use thiserror::Error;
use tracing::info;

use crate::types::{NormalMode, Triangle};

/// A mesh write failed; the partially written file is garbage and should be
/// treated as discarded.
#[derive(Debug, Error)]
#[error("failed to write mesh to {}: {source}", path.display())]
pub struct MeshWriteError {
  /// Destination that could not be created or written.
  pub path: PathBuf,
  #[source]
  pub source: io::Error,
}

/// Write `triangles` to `path` as binary STL.
///
/// Normals are emitted per `normals`; see [`NormalMode`] for the legacy
/// zero-normal default.
pub fn write_binary(
  path: impl AsRef<Path>,
  triangles: &[Triangle],
  normals: NormalMode,
) -> Result<(), MeshWriteError> {
  let path = path.as_ref();
  let wrap = |source: io::Error| MeshWriteError {
    path: path.to_path_buf(),
    source,
  };

  let file = File::create(path).map_err(wrap)?;
  let mut writer = BufWriter::new(file);
  write_to(&mut writer, triangles, normals).map_err(wrap)?;
  writer.flush().map_err(wrap)?;

  info!(path = %path.display(), triangles = triangles.len(), "wrote mesh");
  Ok(())
}

/// Write the binary STL byte stream to any sink.
pub fn write_to<W: Write>(
  writer: &mut W,
  triangles: &[Triangle],
  normals: NormalMode,
) -> io::Result<()> {
  writer.write_all(&[0u8; 80])?;
  writer.write_all(&(triangles.len() as u32).to_le_bytes())?;

  for triangle in triangles {
    let normal = match normals {
      NormalMode::Zero => Vec3::ZERO,
      NormalMode::Geometric => triangle.geometric_normal().unwrap_or(Vec3::ZERO),
    };
    write_vector(writer, normal)?;
    for vertex in triangle.vertices {
      write_vector(writer, vertex)?;
    }
    writer.write_all(&0u16.to_le_bytes())?;
  }
  Ok(())
}

fn write_vector<W: Write>(writer: &mut W, v: Vec3) -> io::Result<()> {
  writer.write_all(&v.x.to_le_bytes())?;
  writer.write_all(&v.y.to_le_bytes())?;
  writer.write_all(&v.z.to_le_bytes())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn unit_triangle() -> Triangle {
    Triangle::new(
      Vec3::new(0.0, 0.0, 0.0),
      Vec3::new(1.0, 0.0, 0.0),
      Vec3::new(0.0, 1.0, 0.0),
    )
  }

  #[test]
  fn test_empty_mesh_layout() {
    let mut bytes = Vec::new();
    write_to(&mut bytes, &[], NormalMode::Zero).unwrap();

    assert_eq!(bytes.len(), 84);
    assert!(bytes[..80].iter().all(|&b| b == 0), "header is zero-filled");
    assert_eq!(&bytes[80..84], &0u32.to_le_bytes());
  }

  #[test]
  fn test_record_size_and_count() {
    let triangles = [unit_triangle(); 3];
    let mut bytes = Vec::new();
    write_to(&mut bytes, &triangles, NormalMode::Zero).unwrap();

    assert_eq!(bytes.len(), 80 + 4 + 3 * 50);
    assert_eq!(&bytes[80..84], &3u32.to_le_bytes());
  }

  #[test]
  fn test_zero_normals_and_attribute_field() {
    let mut bytes = Vec::new();
    write_to(&mut bytes, &[unit_triangle()], NormalMode::Zero).unwrap();

    // Normal occupies the first 12 bytes of the record.
    assert!(bytes[84..96].iter().all(|&b| b == 0));
    // Trailing u16 attribute count is 0.
    assert_eq!(&bytes[132..134], &0u16.to_le_bytes());
  }

  #[test]
  fn test_geometric_normals_written() {
    let mut bytes = Vec::new();
    write_to(&mut bytes, &[unit_triangle()], NormalMode::Geometric).unwrap();

    let mut normal = [0.0f32; 3];
    for (i, chunk) in bytes[84..96].chunks_exact(4).enumerate() {
      normal[i] = f32::from_le_bytes(chunk.try_into().unwrap());
    }
    assert_eq!(normal, [0.0, 0.0, 1.0]);
  }

  #[test]
  fn test_vertices_round_trip() {
    let tri = unit_triangle();
    let mut bytes = Vec::new();
    write_to(&mut bytes, &[tri], NormalMode::Zero).unwrap();

    let mut floats = [0.0f32; 9];
    for (i, chunk) in bytes[96..132].chunks_exact(4).enumerate() {
      floats[i] = f32::from_le_bytes(chunk.try_into().unwrap());
    }
    for (v, expected) in floats.chunks_exact(3).zip(tri.vertices) {
      assert_eq!(Vec3::new(v[0], v[1], v[2]), expected);
    }
  }

  #[test]
  fn test_unwritable_path_is_reported() {
    let err = write_binary(
      "/nonexistent-dir/deeper/mesh.stl",
      &[unit_triangle()],
      NormalMode::Zero,
    )
    .unwrap_err();

    assert!(err.path.ends_with("mesh.stl"));
    assert_eq!(err.source.kind(), io::ErrorKind::NotFound);
  }
}
