#[derive(Debug)]
pub enum ModelError {
    InvalidNeighbors(usize),
    NotEnoughSamples {
        neighbors: usize,
        samples: usize,
    },
    Shape(ndarray::ShapeError),
    Other(String),
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::InvalidNeighbors(k) => write!(f, "Invalid neighbor count: {}", k),
            ModelError::NotEnoughSamples { neighbors, samples } => write!(
                f,
                "Need at least {} training samples for {} neighbors, got {}",
                neighbors, neighbors, samples
            ),
            ModelError::Shape(e) => write!(f, "Sample matrix error: {}", e),
            ModelError::Other(msg) => write!(f, "Model error: {}", msg),
        }
    }
}

impl std::error::Error for ModelError {}

impl From<ndarray::ShapeError> for ModelError {
    fn from(err: ndarray::ShapeError) -> Self {
        ModelError::Shape(err)
    }
}
