//! Scan session configuration.

use std::path::{Path, PathBuf};

use glam::Vec3;
use serde::Deserialize;
use thiserror::Error;

use crate::types::NormalMode;
use crate::volume::Aabb;

/// Default scan region in the marker frame, matching the calibrated tag
/// setup: a small box sitting in front of the fiducial, extending one box
/// height up from the marker plane.
pub const DEFAULT_SCAN_MIN: [f32; 3] = [-0.1, -0.175, 0.0];
pub const DEFAULT_SCAN_MAX: [f32; 3] = [0.1, -0.08, 0.095];

/// Configuration load failure.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("failed to read config {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse config {}: {source}", path.display())]
	Parse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},
}

/// Session configuration: scan region, tree depth, and export settings.
///
/// Every field has a default, so a TOML file only needs to name what it
/// overrides.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
	/// Minimum corner of the scan region, marker frame.
	pub scan_min: [f32; 3],

	/// Maximum corner of the scan region, marker frame.
	pub scan_max: [f32; 3],

	/// Octree depth. Node count is `(8^(depth+1) - 1) / 7`, so keep this in
	/// the 4-6 range.
	pub max_depth: u32,

	/// Occupancy ratio at or above which a cell counts as solid.
	pub threshold: f32,

	/// Destination for exported meshes.
	pub output: PathBuf,

	/// Normal emission policy for exported meshes.
	pub normal_mode: NormalMode,
}

impl Default for ScanConfig {
	fn default() -> Self {
		Self {
			scan_min: DEFAULT_SCAN_MIN,
			scan_max: DEFAULT_SCAN_MAX,
			max_depth: 4,
			threshold: 0.5,
			output: PathBuf::from("untitled.stl"),
			normal_mode: NormalMode::default(),
		}
	}
}

impl ScanConfig {
	pub fn new() -> Self {
		Self::default()
	}

	/// Load configuration from a TOML file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
			path: path.to_path_buf(),
			source,
		})?;
		Ok(config)
	}

	/// The scan region as a box.
	pub fn bounds(&self) -> Aabb {
		Aabb {
			min: Vec3::from_array(self.scan_min),
			max: Vec3::from_array(self.scan_max),
		}
	}

	pub fn with_bounds(mut self, min: [f32; 3], max: [f32; 3]) -> Self {
		self.scan_min = min;
		self.scan_max = max;
		self
	}

	pub fn with_depth(mut self, max_depth: u32) -> Self {
		self.max_depth = max_depth;
		self
	}

	pub fn with_threshold(mut self, threshold: f32) -> Self {
		self.threshold = threshold;
		self
	}

	pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
		self.output = output.into();
		self
	}

	pub fn with_normal_mode(mut self, mode: NormalMode) -> Self {
		self.normal_mode = mode;
		self
	}
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
