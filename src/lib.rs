//! Dissimilarity between two ordered series, given a caller-supplied
//! pointwise distance function.
//!
//! NOTE ON NAMING: despite the crate name, [`measure::distance`] does NOT
//! compute the discrete Fréchet distance (no monotone coupling, no dynamic
//! programming). It computes the bidirectional nearest-neighbor distance,
//! i.e. the symmetrized Hausdorff distance under the supplied metric:
//!
//! ```text
//! max( max_i min_j m(a_i, b_j),  max_i min_j m(b_i, a_j) )
//! ```
//!
//! Callers depend on this behavior, so it is kept as-is rather than corrected
//! to match the name.

use std::fmt::Debug;

pub trait Float: num_traits::Float + Debug {}

impl Float for f64 {}
impl Float for f32 {}

pub mod error;
pub mod measure;
pub mod metric;

pub use error::DistanceError;
pub use measure::{distance, distance_directed};
pub use metric::Metric;

#[cfg(test)]
mod tests {
    use crate::measure::distance;
    use crate::metric::builtin::euclidean;

    /// Iterator-fold rendition of the same max-of-min computation, used to
    /// cross-check the loop implementation on non-trivial trajectories.
    fn reference_distance(a: &[(f64, f64)], b: &[(f64, f64)]) -> f64 {
        let directed = |outer: &[(f64, f64)], inner: &[(f64, f64)]| {
            outer
                .iter()
                .map(|p| {
                    inner
                        .iter()
                        .map(|q| euclidean(p, q))
                        .fold(f64::INFINITY, f64::min)
                })
                .fold(f64::NEG_INFINITY, f64::max)
        };
        directed(a, b).max(directed(b, a))
    }

    #[test]
    fn matches_reference_on_spiral_trajectories() {
        let a: Vec<(f64, f64)> = (0..64)
            .map(|i| {
                let t = i as f64 * 0.1;
                (t.cos() * t, t.sin() * t)
            })
            .collect();
        let b: Vec<(f64, f64)> = a.iter().map(|&(x, y)| (x + 0.25, y - 0.5)).collect();

        let expected = reference_distance(&a, &b);
        let got = distance(&a, &b, euclidean).unwrap();

        assert!(got >= 0.0);
        assert!((got - expected).abs() < 1e-12);
    }

    #[test]
    fn zero_on_identical_trajectories() {
        let a: Vec<(f64, f64)> = (0..32).map(|i| (i as f64, (i * i) as f64)).collect();
        assert_eq!(distance(&a, &a, euclidean).unwrap(), 0.0);
    }
}
