use core::ops::{Add, Mul};

/// Point or direction in world space.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldPosition {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl WorldPosition {
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn distance(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl Add for WorldPosition {
    type Output = WorldPosition;
    fn add(self, rhs: WorldPosition) -> WorldPosition {
        WorldPosition::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Mul<f32> for WorldPosition {
    type Output = WorldPosition;
    fn mul(self, rhs: f32) -> WorldPosition {
        WorldPosition::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Player view: camera origin and unit forward vector.
///
/// The sight query is cast along this ray, and dropped items are placed on it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewRay {
    pub origin: WorldPosition,
    pub forward: WorldPosition,
}

impl ViewRay {
    pub const fn new(origin: WorldPosition, forward: WorldPosition) -> Self {
        Self { origin, forward }
    }

    /// Point `distance` units along the ray.
    #[inline]
    pub fn point_at(&self, distance: f32) -> WorldPosition {
        self.origin + self.forward * distance
    }
}

impl Default for ViewRay {
    fn default() -> Self {
        Self::new(WorldPosition::ORIGIN, WorldPosition::new(0.0, 0.0, 1.0))
    }
}

/// Screen-space offset from the pointer to a slot's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerOffset {
    pub x: f32,
    pub y: f32,
}

impl PointerOffset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
