/*

    Result of a successful ray / region intersection.

    @date: 10 Nov, 2025
    @author: bartu
*/

use std::fmt;

use crate::hit_region::HitRegion;
use crate::numeric::{Float, Point3, Vector3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionRayRegion3 {
    pub point: Point3,
    /// Outward face normal. For INSIDE the reversed, normalized ray direction,
    /// which is the zero vector when the direction has zero length.
    pub normal: Vector3,
    /// Parametric t in [0, 1], 0 when the ray starts inside
    pub distance: Float,
    pub region: HitRegion,
}

impl IntersectionRayRegion3 {
    pub fn new(point: Point3, normal: Vector3, distance: Float, region: HitRegion) -> Self {
        Self {
            point,
            normal,
            distance,
            region,
        }
    }

    #[inline]
    pub fn closer_than(&self, other: &Self) -> bool {
        self.distance < other.distance
    }
}

impl fmt::Display for IntersectionRayRegion3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(3);
        write!(
            f,
            "hit {} at t={:.p$} point=({:.p$}, {:.p$}, {:.p$}) normal=({}, {}, {})",
            self.region,
            self.distance,
            self.point.x, self.point.y, self.point.z,
            self.normal.x, self.normal.y, self.normal.z,
            p = p,
        )
    }
}
