/*

    Declare numeric types used throughout this crate.

    Points and vectors share bevy_math's DVec3, Point3 only
    names the role (a location rather than a displacement).

    @date: 2 Oct, 2025
    @author: Bartu
*/

use bevy_math::DVec3;

pub type Float = f64; // WARNING: If you want to change it to f32, don't forget to update Vector3 too
pub type Vector3 = DVec3;
pub type Point3 = DVec3;

/// Tolerance of the approximate comparer, every region equality goes through it.
pub const EPSILON: Float = 1e-8;

pub fn approx_zero(x: Float) -> bool {
    x.abs() < EPSILON
}

pub fn approx_eq(a: Float, b: Float) -> bool {
    // a == b catches equal infinities, where a - b is NaN
    a == b || approx_zero(a - b)
}

pub fn approx_eq_vec3(a: &Vector3, b: &Vector3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// In tie-break priority order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[inline]
    pub fn of(self, v: &Vector3) -> Float {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }

    /// Unit vector along this axis, scaled by `sign`.
    pub fn unit(self, sign: Float) -> Vector3 {
        match self {
            Axis::X => Vector3::new(sign, 0., 0.),
            Axis::Y => Vector3::new(0., sign, 0.),
            Axis::Z => Vector3::new(0., 0., sign),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approx_eq_tolerates_rounding() {
        assert!(approx_eq(0.1 + 0.2, 0.3));
        assert!(!approx_eq(1.0, 1.0001));
        assert!(approx_eq(Float::INFINITY, Float::INFINITY));
        assert!(!approx_eq(Float::NAN, Float::NAN));
    }

    #[test]
    fn axis_reads_components() {
        let v = Vector3::new(1., 2., 3.);
        let picked: Vec<Float> = Axis::ALL.iter().map(|a| a.of(&v)).collect();
        assert_eq!(picked, vec![1., 2., 3.]);
        assert_eq!(Axis::Y.unit(-1.), Vector3::new(0., -1., 0.));
    }
}
