//! Text rendering of a composition report
//!
//! Rendering only reads the structured report; nothing here computes.
//! Output goes to any `io::Write` so tests can capture it.

use std::io::{self, Write};

use crossterm::style::Stylize;

use crate::analysis::{CompositionReport, TierEntry};
use crate::protein::gene::GeneRecord;

const RULE_WIDTH: usize = 80;

fn banner(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "{}", title.to_string().cyan())?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

fn render_header(out: &mut impl Write, record: &GeneRecord) -> io::Result<()> {
    banner(
        out,
        &format!("CODON USAGE ANALYSIS FOR {} GENE", record.gene),
    )?;
    writeln!(out, "Gene: {} ({})", record.gene, record.product)?;
    writeln!(out, "Organism: {}", record.organism)?;
    writeln!(out, "Locus tag: {}", record.locus_tag)?;
    writeln!(out, "Location: {}", record.location)?;
    writeln!(out, "Length: {} bp", record.cds_length_bp)?;
    writeln!(out, "Protein length: {} amino acids", record.protein.len())?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

fn render_composition(out: &mut impl Write, report: &CompositionReport) -> io::Result<()> {
    writeln!(out, "\nAMINO ACID COMPOSITION:")?;
    writeln!(out, "{}", "-".repeat(40))?;

    for (amino_acid, count) in report.composition.iter() {
        let percentage = report.composition.percentage(amino_acid);
        writeln!(
            out,
            "{}: {count:3} ({percentage:5.1}%)",
            amino_acid.to_string().with(super::colors::get_amino_acid_color(amino_acid))
        )?;
    }

    writeln!(out, "\nTotal amino acids: {}", report.composition.total())
}

fn render_expectations(out: &mut impl Write, report: &CompositionReport) -> io::Result<()> {
    writeln!(out)?;
    banner(out, "CODON USAGE ANALYSIS")?;
    writeln!(out, "Amino Acid Codon Usage Patterns:")?;
    writeln!(out, "{}", "-".repeat(50))?;

    let mut current = None;
    for expectation in &report.expectations {
        if current != Some(expectation.amino_acid) {
            current = Some(expectation.amino_acid);
            let count = report.composition.count(expectation.amino_acid);
            writeln!(out, "\n{} ({count} occurrences):", expectation.amino_acid)?;
        }
        writeln!(
            out,
            "  {}: Expected {:5.1} ({:4.1}%)",
            expectation.codon,
            expectation.expected,
            expectation.fraction * 100.0
        )?;
    }

    Ok(())
}

fn render_tier(out: &mut impl Write, label: &str, entries: &[TierEntry]) -> io::Result<()> {
    writeln!(out, "\n{label}:")?;
    for entry in entries {
        writeln!(
            out,
            "  {} ({}): {:4.1}% - Expected ~{:.1} occurrences",
            entry.codon,
            entry.amino_acid,
            entry.fraction * 100.0,
            entry.expected
        )?;
    }
    Ok(())
}

fn render_tiers(out: &mut impl Write, report: &CompositionReport) -> io::Result<()> {
    writeln!(out)?;
    banner(out, "CODON OPTIMIZATION ANALYSIS")?;
    writeln!(out, "Codon Usage Categories:")?;
    writeln!(out, "{}", "-".repeat(30))?;

    render_tier(out, "Highly used codons (>40% usage)", &report.tiers.high)?;
    render_tier(
        out,
        "Moderately used codons (20-40% usage)",
        &report.tiers.moderate,
    )?;
    render_tier(out, "Rarely used codons (<20% usage)", &report.tiers.low)
}

fn render_characteristics(out: &mut impl Write, report: &CompositionReport) -> io::Result<()> {
    writeln!(out)?;
    banner(out, "GENE CHARACTERISTICS")?;
    writeln!(
        out,
        "Estimated GC content: ~{:.1}%",
        report.estimated_gc_content
    )?;

    writeln!(out, "\nMost frequent amino acids:")?;
    for &(amino_acid, count) in &report.top_amino_acids {
        let percentage = report.composition.percentage(amino_acid);
        writeln!(out, "  {amino_acid}: {count} ({percentage:4.1}%)")?;
    }

    writeln!(out)?;
    banner(out, "FUNCTIONAL CHARACTERISTICS")?;
    writeln!(
        out,
        "Hydrophobic amino acids: {:.1}%",
        report.profile.hydrophobic_percent
    )?;
    writeln!(
        out,
        "Charged amino acids: {:.1}%",
        report.profile.charged_percent
    )?;
    writeln!(out, "Polar amino acids: {:.1}%", report.profile.polar_percent)
}

/// Render the full sectioned report for one gene.
pub fn render_report(
    out: &mut impl Write,
    record: &GeneRecord,
    report: &CompositionReport,
) -> io::Result<()> {
    render_header(out, record)?;
    render_composition(out, report)?;
    render_expectations(out, report)?;
    render_tiers(out, report)?;
    render_characteristics(out, report)?;

    writeln!(out)?;
    banner(out, "ANALYSIS COMPLETE")
}
