
pub mod numeric;
pub mod interval;
pub mod ray;
pub mod error;
pub mod hit_region;
pub mod intersection;
pub mod region;
pub mod bounding;
pub mod json_structs;
pub mod json_parser;
pub mod probe;

pub mod prelude;

pub use crate::error::RegionError;
pub use crate::hit_region::{HitRegion, Side};
pub use crate::intersection::IntersectionRayRegion3;
pub use crate::ray::Ray;
pub use crate::region::Region3;
