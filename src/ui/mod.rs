//! Report formatting and display functions

pub mod colors;
pub mod report;

// Re-export commonly used functions
pub use colors::*;
pub use report::*;
