//! Axis-aligned box overlap on the play plane
//!
//! A hitbox is read straight off a [`Transform`]: `position` is the box's
//! min corner and `position + scale` its max corner. Arena layouts are tuned
//! against this min-corner convention, so it must not be swapped for a
//! centered box. Z is ignored; the duel plays out on the XY plane.

use crate::foundation::math::{Transform, Vec2};

/// Min/max corners of a hitbox projected onto the XY plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    /// Minimum corner
    pub min: Vec2,
    /// Maximum corner
    pub max: Vec2,
}

impl Aabb2 {
    /// Build the hitbox described by a transform
    pub fn from_transform(transform: &Transform) -> Self {
        let min = Vec2::new(transform.position.x, transform.position.y);
        let max = Vec2::new(
            transform.position.x + transform.scale.x,
            transform.position.y + transform.scale.y,
        );
        Self { min, max }
    }

    /// Closed-interval overlap test; touching edges count as overlapping
    pub fn intersects(&self, other: &Aabb2) -> bool {
        self.max.x >= other.min.x
            && other.max.x >= self.min.x
            && self.max.y >= other.min.y
            && other.max.y >= self.min.y
    }
}

/// Whether two hitboxes overlap
pub fn overlaps(a: &Transform, b: &Transform) -> bool {
    Aabb2::from_transform(a).intersects(&Aabb2::from_transform(b))
}

/// Whether `subject` overlaps any of `others`
pub fn overlaps_any<'a, I>(subject: &Transform, others: I) -> bool
where
    I: IntoIterator<Item = &'a Transform>,
{
    others.into_iter().any(|other| overlaps(subject, other))
}
