//! Logic Module - Business Logic & Engines
//!
//! - `features/` - Feature layout and vector (temperature, disk errors)
//! - `training/` - Aligned training samples and the file reader
//! - `model/` - Classifier trait and k-NN implementation
//! - `alert/` - Timestamped FIFO alert queue
//! - `predictor` - Classify-and-alert loop

pub mod alert;
pub mod config;
pub mod features;
pub mod model;
pub mod predictor;
pub mod training;
