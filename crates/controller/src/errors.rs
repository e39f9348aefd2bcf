use raykin_physics::V2;

/// Problems with how a controller is set up.  A controller is never built from a configuration which has one.
#[derive(Debug, thiserror::Error, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("{axis} sweeps need at least 2 rays, but got {count}")]
    TooFewRays { axis: &'static str, count: usize },

    #[error("A collider of size {size:?} at scale {scale:?} leaves no room inside a skin width of {skin_width}")]
    DegenerateBounds { size: V2, scale: V2, skin_width: f64 },

    #[error("Slope limit must be between 0 and 90 degrees, but got {0}")]
    SlopeLimitOutOfRange(f64),

    #[error("Skin width must be finite and not negative, but got {0}")]
    InvalidSkinWidth(f64),

    #[error("No collider size was given")]
    MissingCollider,

    #[error("Jump frequency must be finite and not negative, but got {0}")]
    InvalidJumpFrequency(f64),

    #[error("Max velocity must be positive on both axes, but got {0:?}")]
    InvalidMaxVelocity(V2),

    #[error("{name} must be finite and not negative, but got {value}")]
    InvalidTolerance { name: &'static str, value: f64 },

    #[error("{name} must be finite, but got {value}")]
    NotFinite { name: &'static str, value: f64 },
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("Invalid controller configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Geometry(#[from] raykin_physics::Error),

    #[error("Time steps must be finite and not negative, but got {0}")]
    InvalidTimeStep(f64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
