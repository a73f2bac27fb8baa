//! Codonscope - protein composition and codon usage analysis
//!
//! This library computes descriptive statistics over a protein's
//! amino-acid composition and cross-references per-residue codon usage
//! against a reference table of synonymous-codon frequencies, producing
//! a structured report suitable for human-readable rendering.

pub mod analysis;
pub mod codon;
pub mod error;
pub mod logging;
pub mod protein;
pub mod ui;

// Re-export main types for convenience
pub use analysis::{analyze, CompositionReport, UsageTier};
pub use codon::CodonFrequencyTable;
pub use error::AnalysisError;
pub use protein::Composition;
