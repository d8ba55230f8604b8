use crate::Float;

pub mod builtin;

/// A caller-supplied pointwise distance function over elements of type `P`.
///
/// The engine never inspects elements itself; everything it knows about `P`
/// comes from calls to `measure`. Returned values are consumed as-is: the
/// metric axioms (non-negativity, symmetry, triangle inequality) are not
/// verified, and the result is only meaningful if the metric is sane.
///
/// Note that the metric does not have to be symmetric. i.e `measure(a, b) != measure(b, a)` is possible
pub trait Metric<P> {
    type Output: Float;

    /// Score the dissimilarity between `a` and `b`.
    fn measure(&self, a: &P, b: &P) -> Self::Output;
}

/// Any plain closure or fn pointer is a metric.
impl<P, T, F> Metric<P> for F
where
    T: Float,
    F: Fn(&P, &P) -> T,
{
    type Output = T;

    #[inline]
    fn measure(&self, a: &P, b: &P) -> T {
        self(a, b)
    }
}
