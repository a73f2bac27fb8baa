use std::error::Error;
use std::io;

use human_panic::setup_panic;
use log::{error, info};

use codonscope::codon::CodonFrequencyTable;
use codonscope::logging::{init_logging, log_shutdown, log_system_info, set_log_level};
use codonscope::protein::gene::ara_a;
use codonscope::ui::render_report;
use codonscope::analyze;

fn main() -> Result<(), Box<dyn Error>> {
    setup_panic!();

    set_log_level();
    init_logging()?;
    log_system_info();

    let record = ara_a();
    info!(
        "Analyzing {} ({}) from {}",
        record.gene, record.product, record.organism
    );

    let table = CodonFrequencyTable::ecoli_k12();
    if let Err(e) = table.validate() {
        error!("Reference codon table failed validation: {e}");
        return Err(e.into());
    }
    info!("Codon frequency table validated: {} amino acids", table.len());

    let report = analyze(&record.protein, &table)?;
    info!(
        "Composition computed: {} residues, {} codon expectations",
        report.composition.total(),
        report.expectations.len()
    );

    let stdout = io::stdout();
    render_report(&mut stdout.lock(), &record, &report)?;

    log_shutdown();
    Ok(())
}
