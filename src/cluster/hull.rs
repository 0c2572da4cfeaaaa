use super::error::ClusterError;
use super::point::{Point, Point2, group_by_partition};

// Monotone chain (Andrew's algorithm):
//
// HULL(P)
//    sort P by x, then y
//    for each p in P
//       while |L| >= 2 and cross(L[-2], L[-1], p) <= 0
//          remove L[-1]
//       append p to L
//    for each p in reversed P
//       same rule on U
//    return L without its last point + U without its last point

/// Z component of `(a - o) x (b - o)`
///
/// Positive for a counter-clockwise turn o -> a -> b, negative for a
/// clockwise turn and zero when the three points are collinear.
pub fn cross(o: &Point2, a: &Point2, b: &Point2) -> f64 {
    (a[0] - o[0]) * (b[1] - o[1]) - (a[1] - o[1]) * (b[0] - o[0])
}

/// Calculates the convex hull of the given points
///
/// Returns the hull vertices in counter-clockwise order without repeating
/// the first vertex. Collinear boundary points and duplicates are dropped,
/// so no three consecutive vertices are collinear. Fewer than two distinct
/// points are returned as they are.
pub fn convex_hull(points: &[Point2]) -> Vec<Point2> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a[0].total_cmp(&b[0]).then(a[1].total_cmp(&b[1])));
    sorted.dedup();
    if sorted.len() < 2 {
        return sorted;
    }

    let mut lower = chain(sorted.iter());
    let mut upper = chain(sorted.iter().rev());

    // Each chain ends where the other one starts
    lower.pop();
    upper.pop();
    lower.append(&mut upper);
    lower
}

/// Builds one half of the hull, keeping only strict left turns
fn chain<'a>(points: impl Iterator<Item = &'a Point2>) -> Vec<Point2> {
    let mut hull: Vec<Point2> = Vec::new();
    for p in points {
        while hull.len() >= 2 && cross(&hull[hull.len() - 2], &hull[hull.len() - 1], p) <= 0.0 {
            hull.pop();
        }
        hull.push(*p);
    }
    hull
}

/// Builds the hull of every cluster of a planar partition
///
/// Returns `k` hulls in cluster ID order; clusters without members get an
/// empty hull.
pub fn cluster_hulls(
    points: &[Point],
    partition: &[usize],
    k: usize,
) -> Result<Vec<Vec<Point2>>, ClusterError> {
    if partition.len() != points.len() {
        return Err(ClusterError::PartitionMismatch {
            points: points.len(),
            partition: partition.len(),
        });
    }

    let planar = points
        .iter()
        .enumerate()
        .map(|(index, p)| {
            p.planar().ok_or(ClusterError::NotPlanar {
                index,
                actual: p.dim(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(group_by_partition(partition, k)
        .iter()
        .map(|cluster| {
            let members: Vec<Point2> = cluster.points.iter().map(|&i| planar[i]).collect();
            convex_hull(&members)
        })
        .collect())
}
