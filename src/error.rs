#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    ConflictingWeightSpecification,
    WeightLengthMismatch { expected: usize, found: usize },
    ZeroWeightSum,
    DivisionByZero,
    ArithmeticOverflow,
    NonMonotonicCumulativeWeights { index: usize },
    EmptyPopulation,
}

impl std::fmt::Display for SampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SampleError::ConflictingWeightSpecification => {
                write!(f, "both weights and cumulative weights were supplied")
            }
            SampleError::WeightLengthMismatch { expected, found } => {
                write!(
                    f,
                    "weights length mismatch: population has {expected} items, got {found} weights"
                )
            }
            SampleError::ZeroWeightSum => write!(f, "sum of weights is zero"),
            SampleError::DivisionByZero => write!(f, "random upper bound is zero"),
            SampleError::ArithmeticOverflow => {
                write!(f, "arithmetic overflow in weight sum or salt")
            }
            SampleError::NonMonotonicCumulativeWeights { index } => {
                write!(f, "cumulative weights decrease at index {index}")
            }
            SampleError::EmptyPopulation => write!(f, "population is empty"),
        }
    }
}

impl std::error::Error for SampleError {}
