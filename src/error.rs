use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Input-validation failures of the distance computation.
///
/// An empty series has no well-defined nearest-neighbor distance, so it is
/// rejected rather than mapped to a sentinel value. There are no other
/// failure modes: the element type and the metric are checked at compile
/// time, and the engine itself cannot fail once both series are non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceError {
    /// The first series has zero elements.
    EmptySeriesA,
    /// The second series has zero elements.
    EmptySeriesB,
}

impl Display for DistanceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySeriesA => write!(f, "series a is empty"),
            Self::EmptySeriesB => write!(f, "series b is empty"),
        }
    }
}

impl Error for DistanceError {}

#[cfg(test)]
mod tests {
    use super::DistanceError;

    #[test]
    fn messages_name_the_offending_series() {
        assert_eq!(DistanceError::EmptySeriesA.to_string(), "series a is empty");
        assert_eq!(DistanceError::EmptySeriesB.to_string(), "series b is empty");
    }
}
