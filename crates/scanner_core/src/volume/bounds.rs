//! Axis-aligned bounding box for the scanned region.

use glam::Vec3;

/// Single-precision axis-aligned bounding box.
///
/// Defines the world-space region the occupancy volume subdivides. Containment
/// is half-open (`min` inclusive, `max` exclusive) to match the octant tiling:
/// every interior point belongs to exactly one cell at a given depth, and
/// points on the volume's outer maximum faces belong to none.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
	/// Minimum corner (inclusive).
	pub min: Vec3,
	/// Maximum corner (exclusive).
	pub max: Vec3,
}

impl Aabb {
	/// Create a new AABB from min and max corners.
	///
	/// # Panics
	/// Debug-asserts that min <= max on all axes.
	pub fn new(min: Vec3, max: Vec3) -> Self {
		debug_assert!(
			min.x <= max.x && min.y <= max.y && min.z <= max.z,
			"AABB min must be <= max on all axes"
		);
		Self { min, max }
	}

	/// True when min < max strictly on every axis.
	///
	/// A box that is flat or inverted on any axis cannot be subdivided into
	/// octants and is rejected by volume construction.
	#[inline]
	pub fn is_well_formed(&self) -> bool {
		self.min.x < self.max.x && self.min.y < self.max.y && self.min.z < self.max.z
	}

	/// Half-open containment test: `min[k] <= p[k] < max[k]` on all axes.
	#[inline]
	pub fn contains_half_open(&self, point: Vec3) -> bool {
		point.x >= self.min.x
			&& point.x < self.max.x
			&& point.y >= self.min.y
			&& point.y < self.max.y
			&& point.z >= self.min.z
			&& point.z < self.max.z
	}

	/// Get the size of the AABB (max - min).
	#[inline]
	pub fn size(&self) -> Vec3 {
		self.max - self.min
	}

	/// Get the center of the AABB.
	#[inline]
	pub fn center(&self) -> Vec3 {
		(self.min + self.max) * 0.5
	}
}
