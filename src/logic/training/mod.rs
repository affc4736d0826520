//! Training Module - Historical samples for fitting the classifier
//!
//! Samples and labels arrive as two separate collections paired by row
//! position. `TrainingSet` is the only way to hand them to a model, and it
//! refuses anything that is empty, misaligned or carries a non-binary label.

pub mod error;
pub mod reader;
pub mod set;


pub use error::TrainingDataError;
pub use reader::{read_labels, read_samples};
pub use set::TrainingSet;
