/*

    Declare the probe file: a set of regions, rays to pick
    them with and points to classify against them.

    @date: 12 Nov, 2025
    @author: Bartu
*/

use serde::{Deserialize, Deserializer};

use crate::prelude::*;
use crate::bounding::{classify, par_enclose, pick};
use crate::hit_region::HitRegion;
use crate::intersection::IntersectionRayRegion3;
use crate::json_structs::SingleOrVec;
use crate::ray::Ray;
use crate::region::Region3;


#[derive(Debug, Deserialize)]
pub struct RootProbe {
    #[serde(rename = "Probe")]
    pub probe: Probe,
}

#[derive(Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Probe {
    #[serde(rename = "Precision", deserialize_with = "deser_usize")]
    #[default = 3]
    pub precision: usize,

    #[serde(rename = "Regions")]
    pub regions: RegionList,

    #[serde(rename = "Rays")]
    pub rays: RayList,

    #[serde(rename = "Points", deserialize_with = "deser_points")]
    pub points: Vec<Point3>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct RegionList {
    #[serde(rename = "Region", default)]
    pub region: SingleOrVec<RegionEntry>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct RayList {
    #[serde(rename = "Ray", default)]
    pub ray: SingleOrVec<RayEntry>,
}

#[derive(Debug, Clone)]
pub struct RegionEntry {
    pub _id: usize,
    pub region: Region3,
}

impl<'de> Deserialize<'de> for RegionEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Either Origin (+ Extent) or the flat Components list
        #[derive(Deserialize)]
        struct Helper {
            #[serde(rename = "_id", deserialize_with = "deser_usize")]
            _id: usize,
            #[serde(rename = "Origin", default, deserialize_with = "deser_opt_vec3")]
            origin: Option<Vector3>,
            #[serde(rename = "Extent", default, deserialize_with = "deser_opt_vec3")]
            extent: Option<Vector3>,
            #[serde(rename = "Components", default, deserialize_with = "deser_opt_float_vec")]
            components: Option<Vec<Float>>,
        }

        let helper = Helper::deserialize(deserializer)?;
        let region = match (helper.components, helper.origin) {
            (Some(c), _) => Region3::from_slice(&c).map_err(serde::de::Error::custom)?,
            (None, Some(origin)) => Region3::from_point_extent(origin, helper.extent.unwrap_or(Vector3::ZERO)),
            (None, None) => {
                return Err(serde::de::Error::custom(format!(
                    "Region {} needs either Origin or Components", helper._id
                )));
            }
        };
        Ok(RegionEntry {
            _id: helper._id,
            region,
        })
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct RayEntry {
    #[serde(rename = "_id", deserialize_with = "deser_usize")]
    pub _id: usize,
    #[serde(flatten)]
    pub ray: Ray,
}


#[derive(Debug, Clone, PartialEq)]
pub struct RayReport {
    pub ray_id: usize,
    /// Id of the nearest region and where it was hit
    pub hit: Option<(usize, IntersectionRayRegion3)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointReport {
    pub point: Point3,
    /// (region id, classification) for every region
    pub sides: Vec<(usize, HitRegion)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProbeReport {
    pub bounds: Option<Region3>,
    pub rays: Vec<RayReport>,
    pub points: Vec<PointReport>,
}

impl Probe {

    pub fn region_entries(&self) -> Vec<RegionEntry> {
        self.regions.region.all()
    }

    pub fn report(&self) -> ProbeReport {
        let entries = self.region_entries();
        let ids: Vec<usize> = entries.iter().map(|e| e._id).collect();
        let regions: Vec<Region3> = entries.iter().map(|e| e.region).collect();
        debug!("Probing {} regions with {} rays and {} points", regions.len(), self.rays.ray.len(), self.points.len());

        let rays = self
            .rays
            .ray
            .all()
            .iter()
            .map(|entry| RayReport {
                ray_id: entry._id,
                hit: pick(&regions, &entry.ray).map(|p| (ids[p.index], p.hit)),
            })
            .collect();

        let points = self
            .points
            .iter()
            .map(|&point| PointReport {
                point,
                sides: ids.iter().copied().zip(classify(&regions, point)).collect(),
            })
            .collect();

        ProbeReport {
            bounds: par_enclose(&regions),
            rays,
            points,
        }
    }
}

impl ProbeReport {
    pub fn log(&self, precision: usize) {
        match &self.bounds {
            Some(b) => info!("Bounding volume: {:.*}", precision, b),
            None => warn!("No regions given, bounding volume is empty"),
        }

        for r in &self.rays {
            match &r.hit {
                Some((region_id, hit)) => info!("Ray {} -> region {}: {:.*}", r.ray_id, region_id, precision, hit),
                None => info!("Ray {} -> no intersection", r.ray_id),
            }
        }

        for p in &self.points {
            for (region_id, side) in &p.sides {
                info!(
                    "Point ({:.*}, {:.*}, {:.*}) vs region {}: {}",
                    precision, p.point.x, precision, p.point.y, precision, p.point.z, region_id, side
                );
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    const PROBE: &str = r#"{
        "Probe": {
            "Precision": "2",
            "Regions": { "Region": [
                { "_id": "1", "Origin": "0 0 0", "Extent": "1 1 1" },
                { "_id": "2", "Components": "4 0 0 -1 1 1" }
            ]},
            "Rays": { "Ray": { "_id": "7", "Origin": "-1 0.5 0.5", "Direction": [2, 0, 0] } },
            "Points": "0.5 0.5 0.5"
        }
    }"#;

    #[test]
    fn parses_probe() {
        let root: RootProbe = serde_json::from_str(PROBE).unwrap();
        let probe = root.probe;
        assert_eq!(probe.precision, 2);
        let entries = probe.region_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].region, Region3::new(3., 0., 0., 1., 1., 1.));
        assert_eq!(probe.rays.ray.len(), 1);
        assert_eq!(probe.points, vec![Point3::splat(0.5)]);
    }

    #[test]
    fn defaults_when_fields_are_missing() {
        let root: RootProbe = serde_json::from_str(r#"{"Probe": {}}"#).unwrap();
        assert_eq!(root.probe.precision, 3);
        assert!(root.probe.region_entries().is_empty());
        let report = root.probe.report();
        assert_eq!(report.bounds, None);
        assert!(report.rays.is_empty());
    }

    #[test]
    fn region_needs_a_shape() {
        let bad = r#"{"Probe": {"Regions": {"Region": {"_id": 1, "Extent": "1 1 1"}}}}"#;
        assert!(serde_json::from_str::<RootProbe>(bad).is_err());
        let short = r#"{"Probe": {"Regions": {"Region": {"_id": 1, "Components": "1 1 1"}}}}"#;
        assert!(serde_json::from_str::<RootProbe>(short).is_err());
    }

    #[test]
    fn report_picks_and_classifies() {
        let root: RootProbe = serde_json::from_str(PROBE).unwrap();
        let report = root.probe.report();
        assert_eq!(report.bounds, Some(Region3::new(0., 0., 0., 4., 1., 1.)));

        let (region_id, hit) = report.rays[0].hit.unwrap();
        assert_eq!(report.rays[0].ray_id, 7);
        assert_eq!(region_id, 1);
        assert_eq!(hit.distance, 0.5);

        assert_eq!(report.points[0].sides[0], (1, HitRegion::CENTER));
        assert_eq!(report.points[0].sides[1].1.side(Axis::X), Some(crate::hit_region::Side::Neg));
    }
}
