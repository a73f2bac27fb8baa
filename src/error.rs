//! Error types for composition analysis and table validation

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    /// The input sequence has zero length, so every percentage would divide by zero.
    #[error("cannot analyze an empty protein sequence")]
    EmptySequence,

    /// A codon frequency row does not sum to ~1.0.
    #[error("codon frequencies for amino acid '{amino_acid}' sum to {sum:.3}, expected ~1.0")]
    FrequencySumMismatch { amino_acid: char, sum: f64 },

    /// A codon is filed under an amino acid it does not translate to.
    #[error("codon {codon} is listed under '{expected}' but translates to '{found}'")]
    CodonTranslationMismatch {
        codon: String,
        expected: char,
        found: char,
    },
}
