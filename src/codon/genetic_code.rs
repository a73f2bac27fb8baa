//! Standard genetic code lookups backed by bio-seq's translation table

use bio_seq::prelude::*;
use bio_seq::translation::{TranslationTable, STANDARD};

pub const STOP_SYMBOL: char = '*';

const NUCLEOTIDES: [char; 4] = ['A', 'C', 'G', 'T'];

/// Translate a 3-base DNA codon to its one-letter amino acid code,
/// or `'*'` for a stop codon. Returns `None` for anything that is not
/// a well-formed codon over {A,C,G,T}.
pub fn translate_codon(codon: &str) -> Option<char> {
    let codon_seq = codon.parse::<Seq<Dna>>().ok()?;
    if codon_seq.len() != 3 {
        return None;
    }
    STANDARD.to_amino(&codon_seq).to_string().chars().next()
}

pub fn is_stop_codon(codon: &str) -> bool {
    translate_codon(codon) == Some(STOP_SYMBOL)
}

/// Enumerate all 64 codons over {A,C,G,T}^3 in lexicographic order.
pub fn all_codons() -> Vec<String> {
    let mut codons = Vec::with_capacity(64);
    for a in NUCLEOTIDES {
        for b in NUCLEOTIDES {
            for c in NUCLEOTIDES {
                codons.push(format!("{a}{b}{c}"));
            }
        }
    }
    codons
}
