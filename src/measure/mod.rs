use crate::error::DistanceError;
use crate::metric::Metric;
use crate::Float;

/// Bidirectional nearest-neighbor distance between two series.
///
/// Runs two directed passes (`a`→`b`, then `b`→`a`) and returns the larger
/// value. The metric is always called with the outer-series element first, so
/// an asymmetric metric sees `(a_i, b_j)` in the first pass and `(b_i, a_j)`
/// in the second. See the crate docs for why this is not the discrete
/// Fréchet distance despite the crate name.
///
/// Costs `|a| * |b|` metric calls per pass and no allocation.
pub fn distance<P, T, M>(a: &[P], b: &[P], metric: M) -> Result<T, DistanceError>
where
    T: Float,
    M: Metric<P, Output = T>,
{
    if a.is_empty() {
        return Err(DistanceError::EmptySeriesA);
    }
    if b.is_empty() {
        return Err(DistanceError::EmptySeriesB);
    }

    superluminal_perf::begin_event("A_TO_B");
    let ab = directed(a, b, &metric);
    superluminal_perf::end_event();

    superluminal_perf::begin_event("B_TO_A");
    let ba = directed(b, a, &metric);
    superluminal_perf::end_event();

    Ok(ab.max(ba))
}

/// Directed nearest-neighbor distance from `outer` to `inner`: the maximum,
/// over elements of `outer`, of the distance to the nearest element of
/// `inner`. The metric receives the `outer` element as its first argument.
pub fn distance_directed<P, T, M>(
    outer: &[P],
    inner: &[P],
    metric: &M,
) -> Result<T, DistanceError>
where
    T: Float,
    M: Metric<P, Output = T>,
{
    if outer.is_empty() {
        return Err(DistanceError::EmptySeriesA);
    }
    if inner.is_empty() {
        return Err(DistanceError::EmptySeriesB);
    }

    Ok(directed(outer, inner, metric))
}

// Fold seeds are never observable: emptiness is rejected before we get here,
// so every min sees at least one metric value and every max at least one min.
fn directed<P, T, M>(outer: &[P], inner: &[P], metric: &M) -> T
where
    T: Float,
    M: Metric<P, Output = T>,
{
    let mut sup = T::neg_infinity();

    for a in outer {
        let mut inf = T::infinity();

        for b in inner {
            let d = metric.measure(a, b);
            if d < inf {
                inf = d;
            }
        }

        if inf > sup {
            sup = inf;
        }
    }

    sup
}
