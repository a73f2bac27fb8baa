//! Codon usage analysis over an amino-acid composition
//!
//! No nucleotide sequence is examined anywhere here. The protein alone
//! is available, so codon usage is inferred from the organism's
//! frequency table rather than measured: every "expected" count is
//! count(amino acid) × codon fraction, a statistical expectation.

use crate::codon::usage::{CodonFrequency, CodonFrequencyTable};
use crate::error::AnalysisError;
use crate::protein::composition::{Composition, PhysicochemicalProfile, DEFAULT_TOP_LIMIT};

/// Expected occurrences of one codon given the composition.
#[derive(Debug, Clone, PartialEq)]
pub struct CodonExpectation {
    pub amino_acid: char,
    pub codon: &'static str,
    pub fraction: f64,
    pub expected: f64,
}

/// Usage tier of a codon in the reference organism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageTier {
    High,
    Moderate,
    Low,
}

impl UsageTier {
    /// Thresholds are strict: exactly 0.4 is moderate, exactly 0.2 is low.
    pub fn classify(fraction: f64) -> UsageTier {
        if fraction > 0.4 {
            UsageTier::High
        } else if fraction > 0.2 {
            UsageTier::Moderate
        } else {
            UsageTier::Low
        }
    }
}

/// One codon in a tier listing, with its expected-occurrence annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct TierEntry {
    pub codon: &'static str,
    pub amino_acid: char,
    pub fraction: f64,
    pub expected: f64,
}

/// The three usage-tier listings, each sorted by codon.
#[derive(Debug, Clone, Default)]
pub struct UsageTiers {
    pub high: Vec<TierEntry>,
    pub moderate: Vec<TierEntry>,
    pub low: Vec<TierEntry>,
}

/// Everything derived from one protein against one frequency table.
#[derive(Debug, Clone)]
pub struct CompositionReport {
    pub composition: Composition,
    pub expectations: Vec<CodonExpectation>,
    pub tiers: UsageTiers,
    pub estimated_gc_content: f64,
    pub top_amino_acids: Vec<(char, usize)>,
    pub profile: PhysicochemicalProfile,
}

fn expectation(composition: &Composition, amino_acid: char, entry: &CodonFrequency) -> f64 {
    composition.count(amino_acid) as f64 * entry.fraction
}

/// Expected codon usage for every amino acid present in both the
/// composition and the table, grouped by amino acid ascending; within a
/// group, codons keep the table's declared order. Amino acids the table
/// does not cover are skipped.
pub fn expected_codon_usage(
    composition: &Composition,
    table: &CodonFrequencyTable,
) -> Vec<CodonExpectation> {
    let mut expectations = Vec::new();

    for (amino_acid, _) in composition.iter() {
        if let Some(row) = table.codons_for(amino_acid) {
            for entry in row {
                expectations.push(CodonExpectation {
                    amino_acid,
                    codon: entry.codon,
                    fraction: entry.fraction,
                    expected: expectation(composition, amino_acid, entry),
                });
            }
        }
    }

    expectations
}

/// Bucket every codon reachable from the composition into exactly one
/// usage tier. Each bucket comes back sorted by (codon, amino acid,
/// fraction) ascending.
pub fn classify_usage_tiers(
    composition: &Composition,
    table: &CodonFrequencyTable,
) -> UsageTiers {
    let mut tiers = UsageTiers::default();

    for (amino_acid, _) in composition.iter() {
        if let Some(row) = table.codons_for(amino_acid) {
            for entry in row {
                let tier_entry = TierEntry {
                    codon: entry.codon,
                    amino_acid,
                    fraction: entry.fraction,
                    expected: expectation(composition, amino_acid, entry),
                };
                match UsageTier::classify(entry.fraction) {
                    UsageTier::High => tiers.high.push(tier_entry),
                    UsageTier::Moderate => tiers.moderate.push(tier_entry),
                    UsageTier::Low => tiers.low.push(tier_entry),
                }
            }
        }
    }

    for bucket in [&mut tiers.high, &mut tiers.moderate, &mut tiers.low] {
        bucket.sort_by(|a, b| {
            a.codon
                .cmp(b.codon)
                .then(a.amino_acid.cmp(&b.amino_acid))
                .then(a.fraction.total_cmp(&b.fraction))
        });
    }

    tiers
}

/// Run the whole analysis: a pure function of the sequence and the
/// frequency table. Fails only on an empty sequence.
pub fn analyze(
    sequence: &str,
    table: &CodonFrequencyTable,
) -> Result<CompositionReport, AnalysisError> {
    let composition = Composition::of(sequence)?;

    let expectations = expected_codon_usage(&composition, table);
    let tiers = classify_usage_tiers(&composition, table);
    let estimated_gc_content = composition.estimated_gc_content();
    let top_amino_acids = composition.top_frequent(DEFAULT_TOP_LIMIT);
    let profile = composition.physicochemical_profile();

    Ok(CompositionReport {
        composition,
        expectations,
        tiers,
        estimated_gc_content,
        top_amino_acids,
        profile,
    })
}
