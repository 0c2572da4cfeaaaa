#[cfg(test)]
mod tests {
    use crate::cluster::{ClusterError, Point, Point2, cluster_hulls, convex_hull, cross};
    use quickcheck::{TestResult, quickcheck};

    #[test]
    fn test_cross() {
        assert_eq!(cross(&[0.0, 0.0], &[1.0, 0.0], &[1.0, 1.0]), 1.0);
        assert_eq!(cross(&[0.0, 0.0], &[1.0, 1.0], &[1.0, 0.0]), -1.0);
        assert_eq!(cross(&[0.0, 0.0], &[1.0, 1.0], &[2.0, 2.0]), 0.0);
    }

    #[test]
    fn test_trivial_inputs() {
        assert_eq!(convex_hull(&[]), Vec::<Point2>::new());
        assert_eq!(convex_hull(&[[0.0, 0.0]]), vec![[0.0, 0.0]]);
        assert_eq!(
            convex_hull(&[[1.0, 1.0], [0.0, 0.0]]),
            vec![[0.0, 0.0], [1.0, 1.0]]
        );
        assert_eq!(convex_hull(&[[2.0, 3.0], [2.0, 3.0], [2.0, 3.0]]), vec![[2.0, 3.0]]);
    }

    #[test]
    fn test_interior_point_excluded() {
        let hull = convex_hull(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.5, 0.5]]);
        assert_eq!(hull, vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
    }

    #[test]
    fn test_collinear_edge_point_excluded() {
        let hull = convex_hull(&[[0.0, 1.0], [1.0, 1.0], [0.5, 0.0], [0.0, 0.0], [1.0, 0.0]]);
        assert_eq!(hull, vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
    }

    #[test]
    fn test_collinear_points() {
        let hull = convex_hull(&[[2.0, 2.0], [0.0, 0.0], [1.0, 1.0], [3.0, 3.0]]);
        assert_eq!(hull, vec![[0.0, 0.0], [3.0, 3.0]]);
    }

    #[test]
    fn test_counter_clockwise() {
        let hull = convex_hull(&[[3.0, -1.0], [0.0, 4.0], [-2.0, 0.0], [1.0, 1.0], [0.0, -3.0]]);
        assert_eq!(hull.len(), 4);

        let area: f64 = (0..hull.len())
            .map(|i| {
                let (a, b) = (hull[i], hull[(i + 1) % hull.len()]);
                a[0] * b[1] - b[0] * a[1]
            })
            .sum();
        assert!(area > 0.0);
    }

    #[test]
    fn test_cluster_hulls() {
        let points: Vec<Point> = [
            [0.0, 0.0],
            [10.0, 10.0],
            [2.0, 0.0],
            [11.0, 10.0],
            [1.0, 2.0],
            [1.0, 0.5],
        ]
        .into_iter()
        .map(Point::from)
        .collect();
        let partition = vec![0, 2, 0, 2, 0, 0];

        let hulls = cluster_hulls(&points, &partition, 3).unwrap();

        assert_eq!(hulls.len(), 3);
        assert_eq!(hulls[0], vec![[0.0, 0.0], [2.0, 0.0], [1.0, 2.0]]);
        assert!(hulls[1].is_empty());
        assert_eq!(hulls[2], vec![[10.0, 10.0], [11.0, 10.0]]);
    }

    #[test]
    fn test_cluster_hulls_rejects_bad_input() {
        let points = vec![Point(vec![0.0, 0.0]), Point(vec![1.0, 2.0, 3.0])];
        assert_eq!(
            cluster_hulls(&points, &[0, 0], 1),
            Err(ClusterError::NotPlanar {
                index: 1,
                actual: 3
            })
        );
        assert_eq!(
            cluster_hulls(&points, &[0], 1),
            Err(ClusterError::PartitionMismatch {
                points: 2,
                partition: 1
            })
        );
    }

    fn to_planar(coords: &[(i16, i16)]) -> Vec<Point2> {
        coords.iter().map(|&(x, y)| [x as f64, y as f64]).collect()
    }

    quickcheck! {
        fn prop_hull_encloses_points(coords: Vec<(i16, i16)>) -> TestResult {
            let points = to_planar(&coords);
            let hull = convex_hull(&points);
            if hull.len() < 3 {
                return TestResult::discard();
            }

            let encloses = points.iter().all(|p| {
                (0..hull.len()).all(|i| cross(&hull[i], &hull[(i + 1) % hull.len()], p) >= 0.0)
            });
            TestResult::from_bool(encloses)
        }

        fn prop_hull_strictly_convex(coords: Vec<(i16, i16)>) -> TestResult {
            let points = to_planar(&coords);
            let hull = convex_hull(&points);
            if hull.len() < 3 {
                return TestResult::discard();
            }

            let n = hull.len();
            let convex = (0..n).all(|i| cross(&hull[i], &hull[(i + 1) % n], &hull[(i + 2) % n]) > 0.0);
            TestResult::from_bool(convex)
        }

        fn prop_hull_vertices_are_inputs(coords: Vec<(i16, i16)>) -> bool {
            let points = to_planar(&coords);
            convex_hull(&points).iter().all(|v| points.contains(v))
        }
    }
}
