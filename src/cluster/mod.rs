//! Package cluster implements k-means clustering and convex hull outlines
pub mod error;
pub mod hull;
pub mod kmeans;
pub mod point;

#[cfg(test)]
mod hull_test;

pub use error::ClusterError;
pub use hull::{cluster_hulls, convex_hull, cross};
pub use kmeans::{ClusterResult, DEFAULT_TOLERANCE, Iterations, KMeans, kmeans};
pub use point::{Cluster, Point, Point2, PointList, group_by_partition};
