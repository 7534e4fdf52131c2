use crate::numeric::Float;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegionError {
    #[error("expected exactly {expected} components (x y z dx dy dz), got {found}")]
    InvalidArgument { expected: usize, found: usize },
    #[error("region has a zero minimum side ({min_side}), local coordinates are undefined")]
    DegenerateRegion { min_side: Float },
}
