//! Line classification and stream filtering

pub mod classifier;

pub use classifier::{Classification, LineClassifier};
