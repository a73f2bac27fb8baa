//! Built-in gene records with annotation metadata

/// One annotated gene and its translated protein sequence.
#[derive(Debug, Clone)]
pub struct GeneRecord {
    pub gene: &'static str,
    pub product: &'static str,
    pub organism: &'static str,
    pub locus_tag: &'static str,
    pub location: &'static str,
    pub cds_length_bp: usize,
    pub protein: String,
}

/// araA (L-arabinose isomerase) from E. coli K-12 substr. MG1655.
pub fn ara_a() -> GeneRecord {
    let protein = "\
MTIFDNYEVWFVIGSQHLYGPETLRQVTQHAEHVVNALNTEAKL\
PCKLVLKPLGTTPDEITAICRDANYDDRCAGLVVWLHTFSPAKMWINGLTMLNKPLLQ\
FHTQFNAALPWDSIDMDFMNLNQTAHGGREFGFIGARMRQQHAVVTGHWQDKQAHERI\
GSWMRQAVSKQDTRHLKVCRFGDNMREVAVTDGDKVAAQIKFGFSVNTWAVGDLVQVV\
NSISDGDVNALVDEYESCYTMTPATQIHGKKRQNVLEAARIELGMKRFLEQGGFHAFT\
TTFEDLHGLKQLPGLAVQRLMQQGYGFAGEGDWKTAALLRIMKVMSTGLQGGTSFMED\
YTYHFEKGNDLVLGSHMLEVCPSIAAEEKPILDVQHLGIGGKDDPARLIFNTQTGPAI\
VASLIDLGDRYRLLVNCIDTVKTPHSLPKLPVANALWKAQPDLPTASEAWILAGGAHH\
TVFSHALNLNDMRQFAEMHDIEITVIDNDTRLPAFKDALRWNEVYYGFRR"
        .to_string();

    GeneRecord {
        gene: "araA",
        product: "L-arabinose isomerase",
        organism: "E. coli K-12 substr. MG1655",
        locus_tag: "b0062",
        location: "complement(66835..68337)",
        cds_length_bp: 1503,
        protein,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ara_a_record() {
        let record = ara_a();
        assert_eq!(record.gene, "araA");
        assert_eq!(record.locus_tag, "b0062");
        // 1503 bp of CDS is 500 residues plus the stop codon.
        assert_eq!(record.cds_length_bp, 1503);
        assert_eq!(record.protein.len(), 500);
        assert!(record.protein.starts_with('M'));
        assert!(record.protein.ends_with("GFRR"));
        assert!(record.protein.chars().all(|c| c.is_ascii_uppercase()));
    }
}
