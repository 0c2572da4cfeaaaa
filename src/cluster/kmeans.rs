use super::error::ClusterError;
use super::point::{Point, PointList, group_by_partition};
use bitvec::prelude::*;
use rand::Rng;
use rand::seq::index;

// Lloyd's algorithm:
//
// KMEANS(D, k)
//    M = k points of D sampled uniformly without replacement
//    repeat
//       P = for each point, index of the nearest mean in M
//       if MSE(D, M, P) equals the previous MSE
//          stop
//       M = for each cluster, mean of its points in P
//
// MSE(D, M, P) = sum of |d - M[P[d]]|^2 / (|D| * dim)

/// Default absolute tolerance for the MSE convergence test
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Iteration cap for [`kmeans`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Iterations {
    /// Run at most this many assignment steps
    Capped(usize),
    /// Run until the MSE stops changing
    Unbounded,
}

impl Iterations {
    fn allows(&self, done: usize) -> bool {
        match self {
            Iterations::Capped(cap) => done < *cap,
            Iterations::Unbounded => true,
        }
    }
}

impl From<Option<usize>> for Iterations {
    fn from(cap: Option<usize>) -> Self {
        cap.map_or(Iterations::Unbounded, Iterations::Capped)
    }
}

/// Result of a k-means run
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterResult {
    /// Final centroids, one per cluster
    pub centroids: PointList,
    /// Cluster ID of every input point, in input order
    ///
    /// Empty when no assignment step ran (`Iterations::Capped(0)`).
    pub partition: Vec<usize>,
    /// Clusters that received at least one point in the final assignment
    pub occupied: BitVec,
    /// MSE of every assignment step
    pub errors: Vec<f64>,
    /// Whether the run stopped on the MSE test rather than the cap
    pub converged: bool,
}

impl ClusterResult {
    /// Number of assignment steps performed
    pub fn iterations(&self) -> usize {
        self.errors.len()
    }

    /// MSE of the final assignment step
    pub fn mse(&self) -> Option<f64> {
        self.errors.last().copied()
    }
}

/// K-means clusterer configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KMeans {
    k: usize,
    iterations: Iterations,
    tolerance: f64,
}

impl KMeans {
    /// Creates a clusterer for `k` clusters that runs to convergence
    pub fn new(k: usize) -> Self {
        Self {
            k,
            iterations: Iterations::Unbounded,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Sets the iteration cap, `Iterations::Unbounded` by default
    pub fn iterations(mut self, iterations: Iterations) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the absolute MSE difference treated as convergence
    ///
    /// `0.0` demands exact equality between consecutive MSE values. Negative
    /// or NaN values are rejected by [`KMeans::fit`].
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Clusters `points`, drawing the initial centroids from `rng`
    ///
    /// When the cap is reached, the returned centroids are the ones updated
    /// after the last assignment step, while `partition` is that last
    /// assignment. On convergence both come from the converging step.
    ///
    /// A cluster that receives no points keeps its previous centroid and
    /// stays a candidate in later assignment steps.
    pub fn fit<R: Rng + ?Sized>(
        &self,
        points: &[Point],
        rng: &mut R,
    ) -> Result<ClusterResult, ClusterError> {
        if self.tolerance.is_nan() || self.tolerance < 0.0 {
            return Err(ClusterError::InvalidTolerance {
                tolerance: self.tolerance,
            });
        }
        let dim = validate(points, self.k)?;

        let mut centroids: PointList = index::sample(rng, points.len(), self.k)
            .into_iter()
            .map(|i| points[i].clone())
            .collect();
        let mut partition = Vec::new();
        let mut occupied = bitvec![0; self.k];
        let mut errors: Vec<f64> = Vec::new();
        let mut converged = false;

        while self.iterations.allows(errors.len()) {
            partition = assign(points, &centroids);
            occupied = occupancy(&partition, self.k);

            let error = mean_squared_error(points, &centroids, &partition, dim);
            log::debug!("{:<32}{:<16}{:e}", "kmeans iteration", errors.len() + 1, error);

            let previous = errors.last().copied();
            errors.push(error);
            if previous.is_some_and(|previous| {
                error == previous || (error - previous).abs() <= self.tolerance
            }) {
                converged = true;
                break;
            }

            update(points, &partition, &mut centroids);
        }

        if converged {
            log::info!("{:<32}{:<16}", "kmeans converged", errors.len());
        } else {
            log::info!("{:<32}{:<16}", "kmeans stopped at cap", errors.len());
        }

        Ok(ClusterResult {
            centroids,
            partition,
            occupied,
            errors,
            converged,
        })
    }
}

/// Clusters `points` into `k` groups with Lloyd's algorithm
///
/// Shorthand for `KMeans::new(k).iterations(iterations).fit(points, rng)`.
pub fn kmeans<R: Rng + ?Sized>(
    points: &[Point],
    k: usize,
    iterations: Iterations,
    rng: &mut R,
) -> Result<ClusterResult, ClusterError> {
    KMeans::new(k).iterations(iterations).fit(points, rng)
}

/// Checks the arguments and returns the shared dimensionality
fn validate(points: &[Point], k: usize) -> Result<usize, ClusterError> {
    let first = points.first().ok_or(ClusterError::EmptyInput)?;
    if k == 0 || k > points.len() {
        return Err(ClusterError::InvalidClusterCount { k, n: points.len() });
    }

    let dim = first.dim();
    if dim == 0 {
        return Err(ClusterError::ZeroDimension);
    }

    for (index, point) in points.iter().enumerate() {
        if point.dim() != dim {
            return Err(ClusterError::DimensionMismatch {
                index,
                expected: dim,
                actual: point.dim(),
            });
        }
        if !point.0.iter().all(|x| x.is_finite()) {
            return Err(ClusterError::NonFinite { index });
        }
    }

    // Centroids stay inside the bounding box, so its squared diagonal bounds
    // every distance. Sums of N coordinates and N distances must stay finite.
    let n = points.len() as f64;
    let mut diagonal = 0.0;
    for j in 0..dim {
        let (min, max) = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), p| {
                (min.min(p.0[j]), max.max(p.0[j]))
            });
        let extent = max - min;
        diagonal += extent * extent;
        if !(min.abs().max(max.abs()) * n).is_finite() {
            return Err(ClusterError::Overflow);
        }
    }
    if !(diagonal * n).is_finite() {
        return Err(ClusterError::Overflow);
    }

    Ok(dim)
}

/// Returns the index of the centroid closest to `point`
///
/// Ties go to the lowest index.
pub(super) fn closest(point: &Point, centroids: &[Point]) -> usize {
    let mut closest = 0;
    let mut shortest = f64::INFINITY;
    for (i, centroid) in centroids.iter().enumerate() {
        let distance = point.sq_dist(centroid);
        if distance < shortest {
            closest = i;
            shortest = distance;
        }
    }
    closest
}

/// Assignment step: nearest centroid of every point
pub(super) fn assign(points: &[Point], centroids: &[Point]) -> Vec<usize> {
    points.iter().map(|p| closest(p, centroids)).collect()
}

/// Marks the clusters that own at least one point
pub(super) fn occupancy(partition: &[usize], k: usize) -> BitVec {
    let mut occupied = bitvec![0; k];
    for &c in partition {
        occupied.set(c, true);
    }
    occupied
}

/// Total squared distance of every point to its assigned centroid,
/// normalized by point count and dimensionality
pub(super) fn mean_squared_error(
    points: &[Point],
    centroids: &[Point],
    partition: &[usize],
    dim: usize,
) -> f64 {
    let total: f64 = points
        .iter()
        .zip(partition)
        .map(|(p, &c)| p.sq_dist(&centroids[c]))
        .sum();
    total / (points.len() * dim) as f64
}

/// Update step: move every centroid to the mean of its members
///
/// Centroids without members are left unchanged.
pub(super) fn update(points: &[Point], partition: &[usize], centroids: &mut [Point]) {
    for cluster in group_by_partition(partition, centroids.len()) {
        match cluster.centroid(points) {
            Some(center) => centroids[cluster.c] = center,
            None => log::debug!("{:<32}{:<16}", "empty cluster kept", cluster.c),
        }
    }
}
