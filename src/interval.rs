/*

    One dimensional range [a, b], the per-axis building
    block of Region3. Provides both closed [a,b] and
    half-open [a,b) membership since regions need both.

    @author: Bartu
    @date: Sept 2025

*/

use crate::numeric::Float;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: Float,
    pub max: Float,
}

impl Interval {

    pub fn new(min: Float, max: Float) -> Self {
        Self {
            min,
            max,
        }
    }

    /// Closed test, x in [min, max]
    pub fn contains(&self, x: Float) -> bool {
        self.min <= x && x <= self.max
    }

    /// Half-open test, x in [min, max)
    pub fn contains_half_open(&self, x: Float) -> bool {
        self.min <= x && x < self.max
    }

    /// Closed on both ends, so touching intervals overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.min <= other.max && other.min <= self.max
    }

}
