//! Point model shared by the clusterer and the hull builder

/// Point represents a position in D-dimensional Euclidean space
///
/// D is implicit: every point of one dataset is expected to carry the same
/// number of coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Point(pub Vec<f64>);

/// PointList is a collection of Points
pub type PointList = Vec<Point>;

/// Point2 is a planar point `[x, y]` as consumed by the hull builder
pub type Point2 = [f64; 2];

/// Cluster represents the members of one k-means cluster
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    /// Cluster ID (index of its centroid)
    pub c: usize,
    /// Indices of points belonging to this cluster
    pub points: Vec<usize>,
}

impl Point {
    /// Number of coordinates
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    /// Returns squared Euclidean distance between two points
    ///
    /// Coordinates beyond the shorter point are ignored.
    pub fn sq_dist(&self, b: &Point) -> f64 {
        self.0
            .iter()
            .zip(&b.0)
            .map(|(x, y)| {
                let diff = x - y;
                diff * diff
            })
            .sum()
    }

    /// Returns the point as `[x, y]` if it is two-dimensional
    pub fn planar(&self) -> Option<Point2> {
        <Point2>::try_from(self.0.as_slice()).ok()
    }
}

impl From<Point2> for Point {
    fn from(p: Point2) -> Self {
        Point(p.to_vec())
    }
}

impl Cluster {
    /// Calculates the componentwise mean of the cluster members
    ///
    /// Returns `None` for an empty cluster.
    pub fn centroid(&self, points: &[Point]) -> Option<Point> {
        let first = *self.points.first()?;
        let mut center = vec![0.0; points[first].dim()];

        for &i in &self.points {
            for (sum, x) in center.iter_mut().zip(&points[i].0) {
                *sum += x;
            }
        }

        let count = self.points.len() as f64;
        for sum in center.iter_mut() {
            *sum /= count;
        }

        Some(Point(center))
    }
}

/// Groups point indices by their cluster ID
///
/// Always returns `k` clusters in ID order, some possibly empty. IDs outside
/// `[0, k)` are ignored.
pub fn group_by_partition(partition: &[usize], k: usize) -> Vec<Cluster> {
    let mut clusters: Vec<Cluster> = (0..k)
        .map(|c| Cluster {
            c,
            points: Vec::new(),
        })
        .collect();

    for (i, &c) in partition.iter().enumerate() {
        if let Some(cluster) = clusters.get_mut(c) {
            cluster.points.push(i);
        }
    }

    clusters
}
