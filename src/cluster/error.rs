use thiserror::Error;

/// Errors returned by the clusterer and the hull helpers
///
/// All variants describe invalid arguments and are raised before any
/// computation starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClusterError {
    /// No points were supplied.
    #[error("no points to cluster")]
    EmptyInput,

    /// Cluster count is zero or exceeds the number of points.
    #[error("cluster count {k} must be between 1 and the number of points ({n})")]
    InvalidClusterCount { k: usize, n: usize },

    /// Points have zero coordinates.
    #[error("points must have at least one coordinate")]
    ZeroDimension,

    /// A point does not share the dimensionality of the first point.
    #[error("point {index} has {actual} coordinates, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// A coordinate is NaN or infinite.
    #[error("point {index} has a non-finite coordinate")]
    NonFinite { index: usize },

    /// Coordinates are so large that sums or squared distances overflow.
    #[error("coordinates too large: squared distances overflow")]
    Overflow,

    /// Convergence tolerance is negative or NaN.
    #[error("tolerance {tolerance} must be a non-negative number")]
    InvalidTolerance { tolerance: f64 },

    /// A point handed to the hull builder is not two-dimensional.
    #[error("point {index} has {actual} coordinates, hulls need 2")]
    NotPlanar { index: usize, actual: usize },

    /// Partition length differs from the number of points.
    #[error("partition covers {partition} points but {points} were given")]
    PartitionMismatch { points: usize, partition: usize },
}
