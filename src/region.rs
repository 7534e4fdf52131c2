/*

    Region3: axis aligned box stored as origin (min corner)
    plus non-negative extents.

    Membership differs per query:
    - hit / contains use [min, max) per axis
    - overlap uses [min, max] on both ends, touching boxes overlap

    Ray intersection follows the slab method but only tests the
    near face of every axis, returning which face was struck.

    @author: bartu
    @date: 9 Nov, 2025
*/

use std::fmt;
use std::ptr;

use serde::{Deserialize, Serialize};

use crate::prelude::*;
use crate::error::RegionError;
use crate::hit_region::{HitRegion, Side};
use crate::interval::Interval;
use crate::intersection::IntersectionRayRegion3;
use crate::ray::Ray;

/// Number of scalars in the list form: x y z dx dy dz
pub const COMPONENTS: usize = 6;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Float>", into = "[Float; 6]")]
pub struct Region3 {
    origin: Point3,
    extent: Vector3,
}

// Shift origin by a negative extent and flip it, same box either way
#[inline]
fn canonical(origin: Float, extent: Float) -> (Float, Float) {
    if extent < 0.0 { (origin + extent, -extent) } else { (origin, extent) }
}

#[inline]
fn classify(min: Float, max: Float, v: Float) -> Side {
    if v < min { Side::Neg }
    else if v >= max { Side::Pos }
    else { Side::Center }
}

#[inline]
fn grow(origin: Float, extent: Float, v: Float) -> (Float, Float) {
    if v < origin { (v, extent + (origin - v)) }
    else if v > origin + extent { (origin, v - origin) }
    else { (origin, extent) }
}

/// Near face candidate of a single slab
#[derive(Debug, Clone, Copy)]
struct SlabEntry {
    t: Float,
    side: Side, // Center means the axis does not limit the ray
}

impl SlabEntry {
    const NOT_LIMITING: Self = Self { t: -1.0, side: Side::Center };
}

// None: ray never reaches the near face of this slab within [0, 1]
#[inline]
fn near_face(min: Float, max: Float, o: Float, d: Float) -> Option<SlabEntry> {
    if o < min {
        let t = (min - o) / d;
        if !(0.0..=Ray::REACH).contains(&t) {
            return None;
        }
        Some(SlabEntry { t, side: Side::Neg })
    }
    else if o > max {
        let t = (max - o) / d;
        if !(0.0..=Ray::REACH).contains(&t) {
            return None; // pointing away, or too short
        }
        Some(SlabEntry { t, side: Side::Pos })
    }
    else {
        Some(SlabEntry::NOT_LIMITING)
    }
}

impl Region3 {

    pub const ZERO: Self = Self {
        origin: Point3::ZERO,
        extent: Vector3::ZERO,
    };

    /// Negative extents are canonicalized, the described box does not change.
    pub fn new(x: Float, y: Float, z: Float, dx: Float, dy: Float, dz: Float) -> Self {
        let (x, dx) = canonical(x, dx);
        let (y, dy) = canonical(y, dy);
        let (z, dz) = canonical(z, dz);
        Self {
            origin: Point3::new(x, y, z),
            extent: Vector3::new(dx, dy, dz),
        }
    }

    // Callers guarantee min <= max on every axis
    fn from_bounds(min: Point3, max: Point3) -> Self {
        Self {
            origin: min,
            extent: max - min,
        }
    }

    pub fn zero() -> Self {
        Self::ZERO
    }

    pub fn from_point(p: Point3) -> Self {
        Self::new(p.x, p.y, p.z, 0., 0., 0.)
    }

    pub fn from_point_extent(p: Point3, extent: Vector3) -> Self {
        Self::new(p.x, p.y, p.z, extent.x, extent.y, extent.z)
    }

    /// Box spanning two arbitrary corners, order does not matter.
    pub fn from_corners(a: Point3, b: Point3) -> Self {
        Self::from_point_extent(a, b - a)
    }

    pub fn from_ray(ray: &Ray) -> Self {
        Self::from_corners(ray.origin, ray.end())
    }

    /// List form, x y z dx dy dz
    pub fn from_slice(values: &[Float]) -> Result<Self, RegionError> {
        match values {
            &[x, y, z, dx, dy, dz] => Ok(Self::new(x, y, z, dx, dy, dz)),
            _ => {
                debug!("Rejecting region list of length {}", values.len());
                Err(RegionError::InvalidArgument { expected: COMPONENTS, found: values.len() })
            }
        }
    }

    pub fn from_components<I>(values: I) -> Result<Self, RegionError>
    where
        I: IntoIterator<Item = Float>,
    {
        let values: Vec<Float> = values.into_iter().collect();
        Self::from_slice(&values)
    }

    pub fn to_array(&self) -> [Float; COMPONENTS] {
        [
            self.origin.x, self.origin.y, self.origin.z,
            self.extent.x, self.extent.y, self.extent.z,
        ]
    }

    // ====================================================================================================
    // Derived quantities
    // ====================================================================================================

    #[inline]
    pub fn origin(&self) -> Point3 {
        self.origin
    }

    #[inline]
    pub fn extent(&self) -> Vector3 {
        self.extent
    }

    #[inline]
    pub fn min(&self) -> Point3 {
        self.origin
    }

    #[inline]
    pub fn max(&self) -> Point3 {
        self.origin + self.extent
    }

    pub fn center(&self) -> Point3 {
        self.origin + self.extent * 0.5
    }

    pub fn min_side(&self) -> Float {
        self.extent.min_element()
    }

    pub fn max_side(&self) -> Float {
        self.extent.max_element()
    }

    pub fn volume(&self) -> Float {
        self.extent.x * self.extent.y * self.extent.z
    }

    /// Point, line or plane
    pub fn is_degenerate(&self) -> bool {
        approx_zero(self.min_side())
    }

    pub fn axis(&self, axis: Axis) -> Interval {
        let o = axis.of(&self.origin);
        Interval::new(o, o + axis.of(&self.extent))
    }

    // ====================================================================================================
    // Union and growth
    // ====================================================================================================

    /// Smallest region holding both, None only when both are absent.
    pub fn union(a: Option<&Region3>, b: Option<&Region3>) -> Option<Region3> {
        match (a, b) {
            (None, None) => None,
            (Some(r), None) | (None, Some(r)) => Some(*r),
            (Some(a), Some(b)) => Some(a.merged(b)),
        }
    }

    pub fn merged(&self, other: &Region3) -> Region3 {
        Self::from_bounds(self.min().min(other.min()), self.max().max(other.max()))
    }

    pub fn expand(&self, x: Float, y: Float, z: Float) -> Region3 {
        let (ox, dx) = grow(self.origin.x, self.extent.x, x);
        let (oy, dy) = grow(self.origin.y, self.extent.y, y);
        let (oz, dz) = grow(self.origin.z, self.extent.z, z);
        Self {
            origin: Point3::new(ox, oy, oz),
            extent: Vector3::new(dx, dy, dz),
        }
    }

    pub fn expand_with_point(&self, p: Point3) -> Region3 {
        self.expand(p.x, p.y, p.z)
    }

    // ====================================================================================================
    // Classification
    // ====================================================================================================

    pub fn hit(&self, p: Point3) -> HitRegion {
        let max = self.max();
        HitRegion::on_axis(Axis::X, classify(self.origin.x, max.x, p.x))
            | HitRegion::on_axis(Axis::Y, classify(self.origin.y, max.y, p.y))
            | HitRegion::on_axis(Axis::Z, classify(self.origin.z, max.z, p.z))
    }

    pub fn contains(&self, p: Point3) -> bool {
        self.axis(Axis::X).contains_half_open(p.x)
            && self.axis(Axis::Y).contains_half_open(p.y)
            && self.axis(Axis::Z).contains_half_open(p.z)
    }

    pub fn overlap(&self, other: &Region3) -> bool {
        Axis::ALL.iter().all(|&a| self.axis(a).overlaps(&other.axis(a)))
    }

    // ====================================================================================================
    // Local coordinates
    // ====================================================================================================

    fn local_scale(&self) -> Result<Float, RegionError> {
        let min_side = self.min_side();
        if approx_zero(min_side) {
            warn!("Local coordinates requested on degenerate region {}", self);
            return Err(RegionError::DegenerateRegion { min_side });
        }
        Ok(2.0 / min_side)
    }

    /// Map p into a space centered on the box, its tightest side spanning [-1, 1].
    pub fn adjust_point(&self, p: Point3) -> Result<Point3, RegionError> {
        let scale = self.local_scale()?;
        Ok((p - self.center()) * scale)
    }

    pub fn adjust_vector(&self, v: Vector3) -> Result<Vector3, RegionError> {
        Ok(v * self.local_scale()?)
    }

    // ====================================================================================================
    // Ray intersection
    // ====================================================================================================

    pub fn ray_intersection(&self, ray: &Ray) -> Option<IntersectionRayRegion3> {
        let (min, max) = (self.min(), self.max());
        let (o, d) = (ray.origin, ray.direction);

        let ex = near_face(min.x, max.x, o.x, d.x)?;
        let ey = near_face(min.y, max.y, o.y, d.y)?;
        let ez = near_face(min.z, max.z, o.z, d.z)?;

        if ex.side == Side::Center && ey.side == Side::Center && ez.side == Side::Center {
            // Zero direction has no reverse, normal stays zero
            let normal = (-d).normalize_or_zero();
            return Some(IntersectionRayRegion3::new(o, normal, 0.0, HitRegion::INSIDE));
        }

        // Latest entry wins, strict compare keeps X before Y before Z on ties
        let (mut axis, mut entry) = (Axis::X, ex);
        if ey.t > entry.t {
            axis = Axis::Y;
            entry = ey;
        }
        if ez.t > entry.t {
            axis = Axis::Z;
            entry = ez;
        }

        let mut point = ray.at(entry.t);
        for other in Axis::ALL.into_iter().filter(|&a| a != axis) {
            if !self.axis(other).contains(other.of(&point)) {
                return None; // passes beside the box
            }
        }

        let (boundary, sign) = match entry.side {
            Side::Neg => (axis.of(&min), -1.0),
            _ => (axis.of(&max), 1.0),
        };
        match axis {
            Axis::X => point.x = boundary,
            Axis::Y => point.y = boundary,
            Axis::Z => point.z = boundary,
        }

        Some(IntersectionRayRegion3::new(
            point,
            axis.unit(sign),
            entry.t,
            HitRegion::face(axis, entry.side),
        ))
    }

    // ====================================================================================================
    // Formatting
    // ====================================================================================================

    /// Every component rounded to `digits` significant digits
    pub fn format_significant(&self, digits: usize) -> String {
        let parts: Vec<String> = self
            .to_array()
            .iter()
            .map(|&v| significant(v, digits.max(1)))
            .collect();
        format!("Region3({})", parts.join(", "))
    }
}

fn significant(v: Float, digits: usize) -> String {
    if v == 0.0 || !v.is_finite() {
        return format!("{}", v);
    }
    // Round in scientific form first, a carry (9.96 -> 10) changes the magnitude
    let rounded = format!("{:.*e}", digits - 1, v).parse::<Float>().unwrap_or(v);
    let magnitude = rounded.abs().log10().floor() as i64;
    let decimals = (digits as i64 - 1 - magnitude).max(0) as usize;
    format!("{:.*}", decimals, rounded)
}

impl PartialEq for Region3 {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other)
            || (approx_eq_vec3(&self.origin, &other.origin) && approx_eq_vec3(&self.extent, &other.extent))
    }
}

impl TryFrom<Vec<Float>> for Region3 {
    type Error = RegionError;

    fn try_from(values: Vec<Float>) -> Result<Self, Self::Error> {
        Self::from_slice(&values)
    }
}

impl TryFrom<&[Float]> for Region3 {
    type Error = RegionError;

    fn try_from(values: &[Float]) -> Result<Self, Self::Error> {
        Self::from_slice(values)
    }
}

impl From<Region3> for [Float; COMPONENTS] {
    fn from(region: Region3) -> Self {
        region.to_array()
    }
}

// {:.N} gives N fixed decimals, no precision prints the shortest exact form
impl fmt::Display for Region3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = match f.precision() {
            Some(p) => self.to_array().iter().map(|v| format!("{:.*}", p, v)).collect(),
            None => self.to_array().iter().map(|v| format!("{}", v)).collect(),
        };
        write!(f, "Region3({})", parts.join(", "))
    }
}
