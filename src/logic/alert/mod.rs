//! Alert Module - Predicted failure notifications
//!
//! FIFO, unbounded, no deduplication: every positive prediction becomes its
//! own alert even when the machine already has one pending.

pub mod queue;
pub mod types;

pub use queue::AlertQueue;
pub use types::Alert;
