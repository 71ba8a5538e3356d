/// Errors returned by the zone engine.
///
/// Every variant is a local, recoverable input condition. The engine never
/// retries; asking the user to re-mark a boundary is the caller's decision.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("polygon needs at least 3 points (got {got})")]
    InvalidPolygon { got: usize },
    #[error("polygon has (near) zero signed area")]
    DegeneratePolygon,
    #[error("north tilt must be finite (got {0})")]
    InvalidTilt(f64),
    #[error("insufficient geometry for zone areas: {0}")]
    InsufficientGeometry(&'static str),
    #[error("zone area vector must have 16 entries (got {got})")]
    InvalidAreaVector { got: usize },
    #[error("prakriti total is zero")]
    ZeroPrakritiTotal,
}

pub type Result<T> = std::result::Result<T, Error>;
