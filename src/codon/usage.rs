//! Synonymous-codon usage frequencies
//!
//! The reference table here is the E. coli K-12 codon usage from the
//! literature, rounded to two decimals. Because of that rounding, the
//! fractions for a six-codon amino acid can sum to 1.01; validation
//! allows for this.

use std::collections::BTreeMap;

use crate::codon::genetic_code::translate_codon;
use crate::error::AnalysisError;

/// Rounding slack for per-amino-acid frequency sums. Published tables
/// carry two decimals, so six-codon rows drift from 1.0 by up to 0.01.
pub const FREQUENCY_SUM_TOLERANCE: f64 = 0.02;

/// A single synonymous codon and its relative usage fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodonFrequency {
    pub codon: &'static str,
    pub fraction: f64,
}

/// Relative usage of synonymous codons per amino acid for one organism.
///
/// Amino acids iterate in sorted order; the codons under each amino acid
/// keep their declared order, which reporting relies on.
#[derive(Debug, Clone)]
pub struct CodonFrequencyTable {
    entries: BTreeMap<char, Vec<CodonFrequency>>,
}

impl CodonFrequencyTable {
    pub fn new() -> CodonFrequencyTable {
        CodonFrequencyTable {
            entries: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, amino_acid: char, codons: &[(&'static str, f64)]) {
        let row = codons
            .iter()
            .map(|&(codon, fraction)| CodonFrequency { codon, fraction })
            .collect();
        self.entries.insert(amino_acid, row);
    }

    /// Codons for one amino acid in declared order, or `None` for amino
    /// acids the table does not cover (stops, unrecognized symbols).
    pub fn codons_for(&self, amino_acid: char) -> Option<&[CodonFrequency]> {
        self.entries.get(&amino_acid).map(|row| row.as_slice())
    }

    /// Amino acids in sorted order with their codon rows.
    pub fn iter(&self) -> impl Iterator<Item = (char, &[CodonFrequency])> + '_ {
        self.entries.iter().map(|(&aa, row)| (aa, row.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Static integrity check, run once at startup: every row sums to
    /// ~1.0 and every codon translates to the amino acid it is filed
    /// under. A failure names the offending amino acid or codon.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        for (&amino_acid, row) in &self.entries {
            let sum: f64 = row.iter().map(|entry| entry.fraction).sum();
            if (sum - 1.0).abs() > FREQUENCY_SUM_TOLERANCE {
                return Err(AnalysisError::FrequencySumMismatch { amino_acid, sum });
            }

            for entry in row {
                let found = translate_codon(entry.codon).unwrap_or('?');
                if found != amino_acid {
                    return Err(AnalysisError::CodonTranslationMismatch {
                        codon: entry.codon.to_string(),
                        expected: amino_acid,
                        found,
                    });
                }
            }
        }
        Ok(())
    }

    /// E. coli K-12 codon usage frequencies (literature values).
    pub fn ecoli_k12() -> CodonFrequencyTable {
        let mut table = CodonFrequencyTable::new();

        table.insert('F', &[("TTT", 0.58), ("TTC", 0.42)]);
        table.insert(
            'L',
            &[
                ("TTA", 0.14),
                ("TTG", 0.13),
                ("CTT", 0.12),
                ("CTC", 0.10),
                ("CTA", 0.04),
                ("CTG", 0.47),
            ],
        );
        table.insert(
            'S',
            &[
                ("TCT", 0.17),
                ("TCC", 0.15),
                ("TCA", 0.14),
                ("TCG", 0.14),
                ("AGT", 0.16),
                ("AGC", 0.25),
            ],
        );
        table.insert('Y', &[("TAT", 0.59), ("TAC", 0.41)]);
        table.insert('C', &[("TGT", 0.46), ("TGC", 0.54)]);
        table.insert('W', &[("TGG", 1.00)]);
        table.insert(
            'P',
            &[("CCT", 0.18), ("CCC", 0.13), ("CCA", 0.20), ("CCG", 0.49)],
        );
        table.insert('H', &[("CAT", 0.57), ("CAC", 0.43)]);
        table.insert('Q', &[("CAA", 0.34), ("CAG", 0.66)]);
        table.insert(
            'R',
            &[
                ("CGT", 0.36),
                ("CGC", 0.36),
                ("CGA", 0.07),
                ("CGG", 0.11),
                ("AGA", 0.07),
                ("AGG", 0.04),
            ],
        );
        table.insert('I', &[("ATT", 0.49), ("ATC", 0.39), ("ATA", 0.11)]);
        table.insert('M', &[("ATG", 1.00)]);
        table.insert(
            'T',
            &[("ACT", 0.19), ("ACC", 0.40), ("ACA", 0.17), ("ACG", 0.25)],
        );
        table.insert('N', &[("AAT", 0.49), ("AAC", 0.51)]);
        table.insert('K', &[("AAA", 0.74), ("AAG", 0.26)]);
        table.insert(
            'V',
            &[("GTT", 0.28), ("GTC", 0.20), ("GTA", 0.17), ("GTG", 0.35)],
        );
        table.insert(
            'A',
            &[("GCT", 0.18), ("GCC", 0.26), ("GCA", 0.23), ("GCG", 0.33)],
        );
        table.insert('D', &[("GAT", 0.63), ("GAC", 0.37)]);
        table.insert('E', &[("GAA", 0.68), ("GAG", 0.32)]);
        table.insert(
            'G',
            &[("GGT", 0.35), ("GGC", 0.37), ("GGA", 0.13), ("GGG", 0.15)],
        );

        table
    }
}

impl Default for CodonFrequencyTable {
    fn default() -> Self {
        CodonFrequencyTable::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ecoli_table_covers_all_coding_amino_acids() {
        let table = CodonFrequencyTable::ecoli_k12();
        assert_eq!(table.len(), 20);
        assert!(table.codons_for('L').is_some());
        assert!(table.codons_for('*').is_none());
    }

    #[test]
    fn test_ecoli_table_validates() {
        let table = CodonFrequencyTable::ecoli_k12();
        assert_eq!(table.validate(), Ok(()));
    }

    #[test]
    fn test_row_sums_are_near_one() {
        let table = CodonFrequencyTable::ecoli_k12();
        for (aa, row) in table.iter() {
            let sum: f64 = row.iter().map(|entry| entry.fraction).sum();
            assert!(
                (sum - 1.0).abs() <= FREQUENCY_SUM_TOLERANCE,
                "row for {aa} sums to {sum}"
            );
        }
    }

    #[test]
    fn test_every_codon_translates_to_its_amino_acid() {
        let table = CodonFrequencyTable::ecoli_k12();
        for (aa, row) in table.iter() {
            for entry in row {
                assert_eq!(translate_codon(entry.codon), Some(aa), "codon {}", entry.codon);
            }
        }
    }

    #[test]
    fn test_declared_codon_order_is_preserved() {
        let table = CodonFrequencyTable::ecoli_k12();
        let row = table.codons_for('A').unwrap();
        let codons: Vec<&str> = row.iter().map(|entry| entry.codon).collect();
        assert_eq!(codons, vec!["GCT", "GCC", "GCA", "GCG"]);
    }

    #[test]
    fn test_validation_rejects_bad_sum() {
        let mut table = CodonFrequencyTable::new();
        table.insert('F', &[("TTT", 0.58), ("TTC", 0.30)]);
        assert!(matches!(
            table.validate(),
            Err(AnalysisError::FrequencySumMismatch {
                amino_acid: 'F',
                ..
            })
        ));
    }

    #[test]
    fn test_validation_rejects_misfiled_codon() {
        let mut table = CodonFrequencyTable::new();
        table.insert('F', &[("TTT", 0.58), ("ATG", 0.42)]);
        assert_eq!(
            table.validate(),
            Err(AnalysisError::CodonTranslationMismatch {
                codon: "ATG".to_string(),
                expected: 'F',
                found: 'M',
            })
        );
    }
}
