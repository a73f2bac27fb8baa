//! Amino-acid composition of a protein sequence
//!
//! Counting accepts any character as a residue symbol; there is no
//! alphabet validation. Symbols the downstream reference tables do not
//! know are simply skipped by the table-driven computations while still
//! counting toward totals here.

use std::collections::BTreeMap;

use crate::error::AnalysisError;

/// Amino acids typically encoded by GC-rich codons. Counting these is a
/// deliberately coarse stand-in for real GC content, which would need
/// the nucleotide sequence.
pub const GC_RICH_AMINO_ACIDS: [char; 5] = ['G', 'C', 'A', 'P', 'R'];

pub const HYDROPHOBIC_AMINO_ACIDS: [char; 8] = ['A', 'V', 'I', 'L', 'M', 'F', 'W', 'Y'];
pub const CHARGED_AMINO_ACIDS: [char; 4] = ['R', 'K', 'D', 'E'];
// Y is in both the hydrophobic and polar groups; the classification is
// intentionally overlapping.
pub const POLAR_AMINO_ACIDS: [char; 5] = ['N', 'Q', 'S', 'T', 'Y'];

pub const DEFAULT_TOP_LIMIT: usize = 10;

/// Percentage breakdown of a sequence into coarse physicochemical groups.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicochemicalProfile {
    pub hydrophobic_percent: f64,
    pub charged_percent: f64,
    pub polar_percent: f64,
}

/// Per-symbol occurrence counts for one protein sequence.
///
/// Iteration is in sorted symbol order, so reports are reproducible.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    counts: BTreeMap<char, usize>,
    total: usize,
}

impl Composition {
    /// Count every symbol in the sequence. An empty sequence is rejected
    /// up front so no later percentage can divide by zero.
    pub fn of(sequence: &str) -> Result<Composition, AnalysisError> {
        if sequence.is_empty() {
            return Err(AnalysisError::EmptySequence);
        }

        let mut counts = BTreeMap::new();
        for symbol in sequence.chars() {
            *counts.entry(symbol).or_insert(0) += 1;
        }

        Ok(Composition {
            counts,
            total: sequence.chars().count(),
        })
    }

    pub fn count(&self, amino_acid: char) -> usize {
        self.counts.get(&amino_acid).copied().unwrap_or(0)
    }

    /// Total residue count; equals the input sequence length.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn percentage(&self, amino_acid: char) -> f64 {
        (self.count(amino_acid) as f64 / self.total as f64) * 100.0
    }

    /// (symbol, count) pairs in sorted symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().map(|(&aa, &count)| (aa, count))
    }

    /// The most frequent residues, count descending, at most `limit`
    /// entries. The sort is stable over sorted-symbol order, so ties
    /// break alphabetically.
    pub fn top_frequent(&self, limit: usize) -> Vec<(char, usize)> {
        let mut pairs: Vec<(char, usize)> = self.iter().collect();
        pairs.sort_by(|a, b| b.1.cmp(&a.1));
        pairs.truncate(limit);
        pairs
    }

    /// Heuristic GC-content estimate from amino-acid identity alone:
    /// the share of residues in the GC-rich set {G, C, A, P, R}.
    pub fn estimated_gc_content(&self) -> f64 {
        let gc_rich: usize = GC_RICH_AMINO_ACIDS
            .iter()
            .map(|&aa| self.count(aa))
            .sum();
        (gc_rich as f64 / self.total as f64) * 100.0
    }

    pub fn physicochemical_profile(&self) -> PhysicochemicalProfile {
        let percent_of = |group: &[char]| {
            let members: usize = group.iter().map(|&aa| self.count(aa)).sum();
            (members as f64 / self.total as f64) * 100.0
        };

        PhysicochemicalProfile {
            hydrophobic_percent: percent_of(&HYDROPHOBIC_AMINO_ACIDS),
            charged_percent: percent_of(&CHARGED_AMINO_ACIDS),
            polar_percent: percent_of(&POLAR_AMINO_ACIDS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_sum_to_sequence_length() {
        let sequence = "MTIFDNYEVWFVIGSQ";
        let composition = Composition::of(sequence).unwrap();
        let sum: usize = composition.iter().map(|(_, count)| count).sum();
        assert_eq!(sum, sequence.len());
        assert_eq!(composition.total(), sequence.len());
    }

    #[test]
    fn test_toy_sequence_composition() {
        let composition = Composition::of("AAAA").unwrap();
        assert_eq!(composition.count('A'), 4);
        assert_eq!(composition.count('L'), 0);
        assert_eq!(composition.total(), 4);
        assert!((composition.percentage('A') - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_sequence_is_rejected() {
        assert_eq!(Composition::of(""), Err(AnalysisError::EmptySequence));
    }

    #[test]
    fn test_iteration_is_sorted_by_symbol() {
        let composition = Composition::of("WAMA").unwrap();
        let symbols: Vec<char> = composition.iter().map(|(aa, _)| aa).collect();
        assert_eq!(symbols, vec!['A', 'M', 'W']);
    }

    #[test]
    fn test_unknown_symbols_still_count() {
        let composition = Composition::of("MX*M").unwrap();
        assert_eq!(composition.count('X'), 1);
        assert_eq!(composition.count('*'), 1);
        assert_eq!(composition.total(), 4);
    }

    #[test]
    fn test_top_frequent_is_sorted_and_truncated() {
        let composition = Composition::of("LLLLAAAGGW").unwrap();
        let top = composition.top_frequent(3);
        assert_eq!(top, vec![('L', 4), ('A', 3), ('G', 2)]);

        let all = composition.top_frequent(DEFAULT_TOP_LIMIT);
        assert!(all.len() <= DEFAULT_TOP_LIMIT);
        for window in all.windows(2) {
            assert!(window[0].1 >= window[1].1);
        }
    }

    #[test]
    fn test_top_frequent_ties_break_alphabetically() {
        let composition = Composition::of("WAGAW").unwrap();
        // A:2, G:1, W:2 -> stable sort keeps A before W.
        let top = composition.top_frequent(10);
        assert_eq!(top, vec![('A', 2), ('W', 2), ('G', 1)]);
    }

    #[test]
    fn test_gc_estimate_stays_in_range() {
        for sequence in ["GCAPR", "WWWW", "MTIFDNYEVWFVIGSQ"] {
            let gc = Composition::of(sequence).unwrap().estimated_gc_content();
            assert!((0.0..=100.0).contains(&gc), "{sequence} -> {gc}");
        }
        let all_gc_rich = Composition::of("GCAPR").unwrap();
        assert!((all_gc_rich.estimated_gc_content() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_physicochemical_profile() {
        // 2 hydrophobic (A, V), 1 charged (K), 1 polar (N) over 4 residues.
        let profile = Composition::of("AVKN").unwrap().physicochemical_profile();
        assert!((profile.hydrophobic_percent - 50.0).abs() < 1e-9);
        assert!((profile.charged_percent - 25.0).abs() < 1e-9);
        assert!((profile.polar_percent - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_tyrosine_counts_in_two_groups() {
        let profile = Composition::of("YY").unwrap().physicochemical_profile();
        assert!((profile.hydrophobic_percent - 100.0).abs() < 1e-9);
        assert!((profile.polar_percent - 100.0).abs() < 1e-9);
        assert!((profile.charged_percent - 0.0).abs() < 1e-9);
    }
}
