/*

    Which side of a region something lies on, per axis.

    Every axis contributes exactly one of Neg / Center / Pos,
    combined with bitwise OR. INSIDE is a sentinel of its own
    used by ray intersection when the ray starts in the box.

    @date: 10 Nov, 2025
    @author: bartu
*/

use std::fmt;

use bitflags::bitflags;

use crate::numeric::Axis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Neg,
    Center,
    Pos,
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct HitRegion: u16 {
        const X_NEG    = 1 << 0;
        const X_CENTER = 1 << 1;
        const X_POS    = 1 << 2;
        const Y_NEG    = 1 << 3;
        const Y_CENTER = 1 << 4;
        const Y_POS    = 1 << 5;
        const Z_NEG    = 1 << 6;
        const Z_CENTER = 1 << 7;
        const Z_POS    = 1 << 8;
        /// Ray started inside the region, not composed from axis flags
        const INSIDE   = 1 << 9;
    }
}

impl HitRegion {
    pub const NONE: Self = Self::empty();

    /// Every axis classified as Center.
    pub const CENTER: Self = Self::X_CENTER.union(Self::Y_CENTER).union(Self::Z_CENTER);

    pub fn on_axis(axis: Axis, side: Side) -> Self {
        match (axis, side) {
            (Axis::X, Side::Neg) => Self::X_NEG,
            (Axis::X, Side::Center) => Self::X_CENTER,
            (Axis::X, Side::Pos) => Self::X_POS,
            (Axis::Y, Side::Neg) => Self::Y_NEG,
            (Axis::Y, Side::Center) => Self::Y_CENTER,
            (Axis::Y, Side::Pos) => Self::Y_POS,
            (Axis::Z, Side::Neg) => Self::Z_NEG,
            (Axis::Z, Side::Center) => Self::Z_CENTER,
            (Axis::Z, Side::Pos) => Self::Z_POS,
        }
    }

    /// Face of a region: `side` on `axis`, Center on the other two.
    pub fn face(axis: Axis, side: Side) -> Self {
        Axis::ALL.iter().fold(Self::NONE, |acc, &a| {
            acc | if a == axis { Self::on_axis(a, side) } else { Self::on_axis(a, Side::Center) }
        })
    }

    pub fn side(&self, axis: Axis) -> Option<Side> {
        [Side::Neg, Side::Center, Side::Pos]
            .into_iter()
            .find(|&s| self.contains(Self::on_axis(axis, s)))
    }

    pub fn is_inside(&self) -> bool {
        self.contains(Self::INSIDE)
    }

    /// Exactly one axis off-center, i.e. a face rather than an edge or a corner
    pub fn is_face(&self) -> bool {
        let off_center = Axis::ALL
            .iter()
            .filter(|&&a| matches!(self.side(a), Some(Side::Neg) | Some(Side::Pos)))
            .count();
        off_center == 1 && self.intersects(Self::CENTER)
    }
}

impl fmt::Display for HitRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_inside() {
            return write!(f, "Inside");
        }
        if self.is_empty() {
            return write!(f, "None");
        }
        let names: Vec<String> = Axis::ALL
            .iter()
            .filter_map(|&a| self.side(a).map(|s| format!("{:?}{:?}", a, s)))
            .collect();
        write!(f, "{}", names.join("|"))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_sets_one_flag_per_axis() {
        let r = HitRegion::face(Axis::X, Side::Neg);
        assert_eq!(r, HitRegion::X_NEG | HitRegion::Y_CENTER | HitRegion::Z_CENTER);
        assert_eq!(r.side(Axis::X), Some(Side::Neg));
        assert_eq!(r.side(Axis::Z), Some(Side::Center));
        assert!(r.is_face());
        assert!(!r.is_inside());
    }

    #[test]
    fn corners_and_inside_are_not_faces() {
        let corner = HitRegion::X_POS | HitRegion::Y_POS | HitRegion::Z_NEG;
        assert!(!corner.is_face());
        assert!(!HitRegion::INSIDE.is_face());
        assert!(!HitRegion::CENTER.is_face());
        assert_eq!(HitRegion::INSIDE.side(Axis::X), None);
    }

    #[test]
    fn display_names_axes() {
        assert_eq!(HitRegion::face(Axis::Y, Side::Pos).to_string(), "XCenter|YPos|ZCenter");
        assert_eq!(HitRegion::INSIDE.to_string(), "Inside");
        assert_eq!(HitRegion::NONE.to_string(), "None");
    }
}
