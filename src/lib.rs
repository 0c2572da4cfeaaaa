//! K-means point clustering with convex hull outlines
//!
//! [`cluster::kmeans`] partitions points into a fixed number of groups and
//! [`cluster::convex_hull`] outlines each group.
pub mod cluster;
