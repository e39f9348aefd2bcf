#[derive(Debug, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum PathError {
    #[error("A path needs at least one point to follow")]
    EmptyPath,

    #[error("Path point {index} is not finite")]
    NonFinitePoint { index: usize },

    #[error("Speed must be finite and non-negative, got {0}")]
    InvalidSpeed(f64),

    #[error("Distance to goal must be finite and positive, got {0}")]
    InvalidGoalDistance(f64),
}
