use thiserror::Error;

/// Recoverable failures raised by the scene pipeline.
///
/// Startup problems that the front-ends cannot recover from (missing canvas,
/// undecodable texture, no GPU adapter) are reported through `anyhow` instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("coordinate out of range: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f32, longitude: f32 },
    #[error("radius must be positive and finite, got {0}")]
    InvalidRadius(f32),
    #[error("scene has not been built yet")]
    SceneNotInitialized,
    #[error("viewport has no area ({width}x{height})")]
    EmptyViewport { width: u32, height: u32 },
    #[error("event index {index} out of range for a catalog of {len}")]
    EventIndexOutOfRange { index: usize, len: usize },
    #[error("catalog: {0}")]
    Catalog(String),
}
