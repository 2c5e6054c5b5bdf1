//! all pairs shortest path closure of a distance matrix.
//!
//! Plain Floyd-Warshall: relax every (i,j) pair through each intermediate city k,
//! k in the outermost loop so that paths through k are complete before k serves as an
//! intermediate for later candidates.
//! O(N^3) time, no extra allocation, the matrix is transformed in place.
//! The operation is total and idempotent: running it on an already closed matrix
//! changes nothing.

use num_traits::{CheckedAdd, PrimInt};

use crate::matrix::DistanceMatrix;

/// close the matrix in place: after the call entry (i,j) is the length of a shortest
/// route from i to j through any sequence of intermediate cities, or Unreachable if
/// no route exists.
pub fn shortest_paths<W>(matrix: &mut DistanceMatrix<W>)
where
    W: PrimInt + CheckedAdd,
{
    let n = matrix.get_nb_cities();
    //
    for k in 0..n {
        for i in 0..n {
            let d_ik = matrix.get_dist(i, k);
            if !d_ik.is_finite() {
                continue;
            }
            for j in 0..n {
                // checked_add absorbs Unreachable and overflow, and Unreachable
                // never compares below a stored distance, so no wrap can ever win
                let through = d_ik.checked_add(matrix.get_dist(k, j));
                if through < matrix.get_dist(i, j) {
                    matrix.set_dist(i, j, through);
                }
            }
        }
    }
    //
    log::debug!("shortest path closure done, nb_cities : {}", n);
} // end of shortest_paths

#[cfg(test)]
mod tests {

    use super::*;
    use crate::distance::Dist;

    use rand::distributions::{Distribution, Uniform};
    use rand_xoshiro::Xoshiro256PlusPlus;
    use rand_xoshiro::rand_core::SeedableRng;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    // the 3 city scenario used throughout: 0-1 is cheap, 0-2 only pays off through 1
    fn small_matrix() -> DistanceMatrix<i64> {
        let rows = vec![
            vec![Dist::Finite(0i64), Dist::Finite(1), Dist::Finite(4)],
            vec![Dist::Finite(1), Dist::Finite(0), Dist::Finite(2)],
            vec![Dist::Finite(4), Dist::Finite(2), Dist::Finite(0)],
        ];
        DistanceMatrix::from_rows(&rows).unwrap()
    }

    // seeded random matrix with a sprinkling of missing roads
    fn random_matrix(n: usize, seed: u64) -> DistanceMatrix<i64> {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let weight = Uniform::new(0i64, 100);
        let missing = Uniform::new(0u32, 4);
        let mut matrix = DistanceMatrix::<i64>::new(n).unwrap();
        for i in 0..n {
            for j in 0..n {
                if i != j && missing.sample(&mut rng) > 0 {
                    matrix.set_dist(i, j, Dist::Finite(weight.sample(&mut rng)));
                }
            }
        }
        matrix
    }

    #[test]
    fn test_closure_small() {
        log_init_test();
        //
        let mut matrix = small_matrix();
        shortest_paths(&mut matrix);
        // the direct 0-2 road at 4 loses to the route through city 1
        assert_eq!(matrix.get_dist(0, 2), Dist::Finite(3));
        assert_eq!(matrix.get_dist(2, 0), Dist::Finite(3));
        assert_eq!(matrix.get_dist(0, 1), Dist::Finite(1));
        for i in 0..3 {
            assert_eq!(matrix.get_dist(i, i), Dist::Finite(0));
        }
    } // end of test_closure_small

    #[test]
    fn test_disconnected_stays_unreachable() {
        log_init_test();
        // two components : {0,1} and {2,3}
        let mut matrix = DistanceMatrix::<i64>::new(4).unwrap();
        matrix.set_dist(0, 1, Dist::Finite(7));
        matrix.set_dist(1, 0, Dist::Finite(7));
        matrix.set_dist(2, 3, Dist::Finite(5));
        matrix.set_dist(3, 2, Dist::Finite(5));
        shortest_paths(&mut matrix);
        assert_eq!(matrix.get_dist(0, 1), Dist::Finite(7));
        assert_eq!(matrix.get_dist(0, 2), Dist::Unreachable);
        assert_eq!(matrix.get_dist(3, 1), Dist::Unreachable);
    } // end of test_disconnected_stays_unreachable

    #[test]
    fn test_no_overflow_wrap() {
        log_init_test();
        // the only 0-2 route sums two near-max weights; it must degrade to
        // Unreachable, never wrap to a small finite distance
        let mut matrix = DistanceMatrix::<u32>::new(3).unwrap();
        matrix.set_dist(0, 1, Dist::Finite(u32::MAX - 1));
        matrix.set_dist(1, 2, Dist::Finite(u32::MAX - 1));
        shortest_paths(&mut matrix);
        assert_eq!(matrix.get_dist(0, 2), Dist::Unreachable);
        assert_eq!(matrix.get_dist(0, 1), Dist::Finite(u32::MAX - 1));
    } // end of test_no_overflow_wrap

    #[test]
    fn test_triangle_inequality() {
        log_init_test();
        //
        let mut matrix = random_matrix(8, 4859);
        shortest_paths(&mut matrix);
        for i in 0..8 {
            for j in 0..8 {
                for k in 0..8 {
                    assert!(
                        matrix.get_dist(i, j)
                            <= matrix.get_dist(i, k).checked_add(matrix.get_dist(k, j))
                    );
                }
            }
        }
    } // end of test_triangle_inequality

    #[test]
    fn test_idempotence() {
        log_init_test();
        // feeding the closed matrix through the closure again must not change any entry
        let mut matrix = random_matrix(9, 117);
        shortest_paths(&mut matrix);
        let once: Vec<Dist<i64>> = (0..9)
            .flat_map(|i| (0..9).map(move |j| (i, j)))
            .map(|(i, j)| matrix.get_dist(i, j))
            .collect();
        shortest_paths(&mut matrix);
        for (rank, (i, j)) in (0..9).flat_map(|i| (0..9).map(move |j| (i, j))).enumerate() {
            assert_eq!(matrix.get_dist(i, j), once[rank]);
        }
    } // end of test_idempotence
} // end of mod tests
