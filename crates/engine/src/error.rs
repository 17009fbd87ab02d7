//! Engine error types.
//!
//! Only construction can fail: a bad wave or area definition fails that
//! event's setup and nothing else. The running observation loop never
//! surfaces errors — transient conditions are `None` values.

use worldwidewaves_geo::GeometryError;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("wave speed must be positive and finite, got {speed_mps}")]
    InvalidSpeed { speed_mps: f64 },

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

pub type Result<T> = std::result::Result<T, EngineError>;
