/*

    Bounding volumes built bottom-up from Region3 unions,
    and nearest-hit picking over a list of regions.

    Union is associative and commutative, so the fold can be
    split across rayon workers and recombined in any order.

    @author: bartu
    @date: 11 Nov, 2025
*/

use rayon::prelude::*;

use crate::prelude::*;
use crate::hit_region::HitRegion;
use crate::intersection::IntersectionRayRegion3;
use crate::ray::Ray;
use crate::region::Region3;

pub trait Bounded {
    fn region(&self) -> Region3;
}

impl Bounded for Region3 {
    fn region(&self) -> Region3 {
        *self
    }
}

impl Bounded for Ray {
    fn region(&self) -> Region3 {
        Region3::from_ray(self)
    }
}

impl Bounded for Point3 {
    fn region(&self) -> Region3 {
        Region3::from_point(*self)
    }
}

/// None for an empty input
pub fn enclose<'a, T, I>(items: I) -> Option<Region3>
where
    T: Bounded + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .fold(None, |acc, item| Region3::union(acc.as_ref(), Some(&item.region())))
}

pub fn par_enclose<T>(items: &[T]) -> Option<Region3>
where
    T: Bounded + Sync,
{
    debug!("Enclosing {} items in parallel", items.len());
    items
        .par_iter()
        .map(|item| Some(item.region()))
        .reduce(|| None, |a, b| Region3::union(a.as_ref(), b.as_ref()))
}

/// Grows a degenerate region from the first point, None if there are no points.
pub fn enclose_points<I>(points: I) -> Option<Region3>
where
    I: IntoIterator<Item = Point3>,
{
    let mut points = points.into_iter();
    let first = points.next()?;
    Some(points.fold(Region3::from_point(first), |acc, p| acc.expand_with_point(p)))
}


#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pick {
    pub index: usize,
    pub hit: IntersectionRayRegion3,
}

/// Nearest region along the ray, the lower index wins on equal distance.
pub fn pick(regions: &[Region3], ray: &Ray) -> Option<Pick> {
    let mut best: Option<Pick> = None;
    for (index, region) in regions.iter().enumerate() {
        if let Some(hit) = region.ray_intersection(ray) {
            match &best {
                Some(b) if !hit.closer_than(&b.hit) => {}
                _ => best = Some(Pick { index, hit }),
            }
        }
    }
    best
}

pub fn classify(regions: &[Region3], point: Point3) -> Vec<HitRegion> {
    regions.iter().map(|r| r.hit(point)).collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    fn boxes() -> Vec<Region3> {
        vec![
            Region3::new(0., 0., 0., 1., 1., 1.),
            Region3::new(3., 0., 0., 1., 1., 1.),
            Region3::new(-2., 5., -1., -1., 1., 2.),
        ]
    }

    #[test]
    fn enclose_matches_parallel_fold() {
        let regions = boxes();
        let expected = Region3::new(-3., 0., -1., 7., 6., 2.);
        assert_eq!(enclose(&regions), Some(expected));
        assert_eq!(par_enclose(&regions), Some(expected));
        assert_eq!(enclose::<Region3, _>(&[]), None);
        assert_eq!(par_enclose::<Region3>(&[]), None);
    }

    #[test]
    fn enclose_rays_and_points() {
        let rays = [Ray::new(Point3::ZERO, Vector3::new(1., -1., 0.))];
        assert_eq!(enclose(&rays), Some(Region3::new(0., -1., 0., 1., 1., 0.)));

        let points = [Point3::new(1., 1., 1.), Point3::new(-1., 2., 0.), Point3::new(0., 0., 3.)];
        let expected = Region3::new(-1., 0., 0., 2., 2., 3.);
        assert_eq!(enclose_points(points), Some(expected));
        assert_eq!(enclose(&points), Some(expected));
        assert_eq!(enclose_points(Vec::<Point3>::new()), None);
    }

    #[test]
    fn pick_returns_nearest() {
        let regions = boxes();
        let ray = Ray::new(Point3::new(6., 0.5, 0.5), Vector3::new(-8., 0., 0.));
        let picked = pick(&regions, &ray).unwrap();
        assert_eq!(picked.index, 1);
        assert_eq!(picked.hit.point, Point3::new(4., 0.5, 0.5));
        assert_eq!(picked.hit.distance, 0.25);

        let away = Ray::new(Point3::new(6., 0.5, 0.5), Vector3::new(8., 0., 0.));
        assert_eq!(pick(&regions, &away), None);
    }

    #[test]
    fn pick_prefers_lower_index_on_ties() {
        let twin = Region3::new(0., 0., 0., 1., 1., 1.);
        let ray = Ray::new(Point3::new(-1., 0.5, 0.5), Vector3::new(2., 0., 0.));
        assert_eq!(pick(&[twin, twin], &ray).unwrap().index, 0);
    }

    #[test]
    fn classify_each_region() {
        let sides = classify(&boxes()[..2], Point3::new(0.5, 0.5, 0.5));
        assert_eq!(sides[0], HitRegion::CENTER);
        assert_eq!(sides[1], HitRegion::X_NEG | HitRegion::Y_CENTER | HitRegion::Z_CENTER);
    }
}
