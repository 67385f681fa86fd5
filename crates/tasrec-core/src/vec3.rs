//! Three-component single-precision vector.

use std::fmt;

/// A 3-component `f32` vector used for positions, velocities and angles.
///
/// Recordings always store the components as three independent scalars
/// in `x, y, z` order; this type only groups them in memory.
///
/// # Examples
///
/// ```
/// use tasrec_core::Vec3;
///
/// let v = Vec3::new(1.0, -2.5, 0.0);
/// assert_eq!(v.to_array(), [1.0, -2.5, 0.0]);
/// assert_eq!(Vec3::from([1.0, -2.5, 0.0]), v);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    /// First component.
    pub x: f32,
    /// Second component.
    pub y: f32,
    /// Third component.
    pub z: f32,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a vector from its components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Components in storage order.
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
