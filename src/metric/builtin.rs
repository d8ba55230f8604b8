//! Stock metrics for the two element types that come up constantly in
//! practice: 2-D points and plain scalars.

use crate::Float;

/// Straight-line distance between two 2-D points.
pub fn euclidean<T: Float>(a: &(T, T), b: &(T, T)) -> T {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    (dx * dx + dy * dy).sqrt()
}

/// `|x - y|` for scalar series.
pub fn absolute_difference<T: Float>(x: &T, y: &T) -> T {
    (*x - *y).abs()
}
