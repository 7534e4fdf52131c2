/*

    Finite ray, r(t) = o + dt for t in [0, 1].

    Unlike a tracer's camera rays the direction is NOT
    normalized: its length is how far the ray reaches.
    Anything past t = 1 is out of range.

    @date: 9 Nov, 2025
    @author: bartu
*/

use bevy_math::NormedVectorSpace;
use serde::Deserialize;

use crate::json_parser::deser_vec3;
use crate::numeric::{Float, Point3, Vector3};


#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Ray {
    #[serde(rename = "Origin", deserialize_with = "deser_vec3")]
    pub origin: Point3,
    #[serde(rename = "Direction", deserialize_with = "deser_vec3")]
    pub direction: Vector3,
}

impl Ray {

    /// Largest valid parametric distance
    pub const REACH: Float = 1.0;

    pub fn new(origin: Point3, direction: Vector3) -> Self {
        Self {
            origin,
            direction,
        }
    }

    /// Segment ray from `from`, reaching `to` at t = 1
    pub fn between(from: Point3, to: Point3) -> Self {
        Self::new(from, to - from)
    }

    #[inline]
    pub fn at(&self, t: Float) -> Point3 {
        self.origin + self.direction * t // r(t) = o + dt
    }

    #[inline]
    pub fn end(&self) -> Point3 {
        self.at(Self::REACH)
    }

    #[inline]
    pub fn length(&self) -> Float {
        self.direction.norm()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn between_reaches_target_at_one() {
        let r = Ray::between(Point3::new(1., 1., 1.), Point3::new(4., 5., 1.));
        assert_eq!(r.direction, Vector3::new(3., 4., 0.));
        assert_eq!(r.end(), Point3::new(4., 5., 1.));
        assert_eq!(r.at(0.5), Point3::new(2.5, 3., 1.));
        assert_eq!(r.length(), 5.);
    }

    #[test]
    fn deserializes_string_and_array_vectors() {
        let r: Ray = serde_json::from_str(r#"{"Origin": "-1 0.5 0.5", "Direction": [2, 0, 0]}"#).unwrap();
        assert_eq!(r, Ray::new(Point3::new(-1., 0.5, 0.5), Vector3::new(2., 0., 0.)));
    }
}
