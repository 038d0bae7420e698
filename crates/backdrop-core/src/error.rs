use crate::config::ConfigError;
use thiserror::Error;

/// Conditions that stop the backdrop from starting at all.
///
/// Everything else (missing blur support, no motion preference API) degrades
/// to simpler rendering instead of surfacing here.
#[derive(Debug, Error)]
pub enum BackdropError {
    #[error("2D drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),
    #[error("animation frame callback unavailable")]
    AnimationUnavailable,
    #[error("invalid engine config: {0}")]
    Config(#[from] ConfigError),
}
