//! Entity extraction from raw query text.
//!
//! Each extractor matches a small fixed vocabulary, case-insensitively.
//! A `None` result means the entity is absent or not in the vocabulary.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::reference::normalize_disease_name;

/// Gene symbols recognized in queries.
pub const KNOWN_GENES: [&str; 7] = ["BRCA1", "BRCA2", "TP53", "APOE", "EGFR", "INS", "GCG"];

/// Protein names recognized in queries.
pub const KNOWN_PROTEINS: [&str; 3] = ["insulin", "glucagon", "p53"];

/// Shortest nucleotide run treated as a sequence.
pub const MIN_SEQUENCE_LENGTH: usize = 4;

query_pattern!(
    RE_DISEASE,
    r"(?i)\b(alzheimer(?:'s)?|breast cancer|diabetes|cancer|parkinson(?:'s)?)"
);
query_pattern!(RE_GENE, r"(?i)\b(BRCA1|BRCA2|TP53|APOE|EGFR|INS|GCG)\b");
query_pattern!(RE_PROTEIN, r"(?i)\b(insulin|glucagon|p53)\b");
query_pattern!(RE_NUCLEOTIDES, r"(?i)[ATCG]{4,}");

fn first_match<'t>(pattern: &LazyLock<Option<Regex>>, text: &'t str) -> Option<&'t str> {
    let re = pattern.as_ref()?;
    re.find(text).map(|m| m.as_str())
}

/// First known disease name, lowercased with possessives stripped.
pub fn disease_name(text: &str) -> Option<String> {
    let name = first_match(&RE_DISEASE, text).map(normalize_disease_name);
    trace!(?name, "disease extraction");
    name
}

/// First known gene symbol, uppercased.
pub fn gene_symbol(text: &str) -> Option<String> {
    let symbol = first_match(&RE_GENE, text).map(str::to_uppercase);
    trace!(?symbol, "gene extraction");
    symbol
}

/// Distinct known protein names in order of first appearance, lowercased.
pub fn protein_names(text: &str) -> Vec<String> {
    let Some(re) = RE_PROTEIN.as_ref() else {
        return Vec::new();
    };
    let mut names: Vec<String> = Vec::new();
    for m in re.find_iter(text) {
        let name = m.as_str().to_lowercase();
        if !names.contains(&name) {
            names.push(name);
        }
    }
    trace!(?names, "protein extraction");
    names
}

/// First run of at least four A/T/G/C characters, uppercased.
pub fn nucleotide_sequence(text: &str) -> Option<String> {
    let sequence = first_match(&RE_NUCLEOTIDES, text).map(str::to_ascii_uppercase);
    trace!(?sequence, "sequence extraction");
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disease_name() {
        assert_eq!(
            disease_name("Find genes associated with Alzheimer's disease").as_deref(),
            Some("alzheimer")
        );
        assert_eq!(
            disease_name("genes linked to BREAST CANCER").as_deref(),
            Some("breast cancer")
        );
        assert_eq!(disease_name("lung cancer genes").as_deref(), Some("cancer"));
        assert_eq!(disease_name("genes in Parkinson's").as_deref(), Some("parkinson"));
        assert_eq!(disease_name("genes linked to gout"), None);
    }

    #[test]
    fn test_gene_symbol() {
        assert_eq!(
            gene_symbol("Which tissues express brca1 the highest?").as_deref(),
            Some("BRCA1")
        );
        assert_eq!(gene_symbol("What pathways involve EGFR?").as_deref(), Some("EGFR"));
        // Vocabulary matches whole words only
        assert_eq!(gene_symbol("insulin expression"), None);
        assert_eq!(gene_symbol("expression of MYC"), None);
    }

    #[test]
    fn test_protein_names() {
        assert_eq!(
            protein_names("Compare protein structures of Insulin and glucagon"),
            vec!["insulin", "glucagon"]
        );
        assert_eq!(
            protein_names("compare insulin with insulin"),
            vec!["insulin"]
        );
        assert!(protein_names("TP53 protein function").is_empty());
    }

    #[test]
    fn test_nucleotide_sequence() {
        assert_eq!(
            nucleotide_sequence("Analyze sequence ATCGATCGATCG").as_deref(),
            Some("ATCGATCGATCG")
        );
        assert_eq!(
            nucleotide_sequence("Calculate GC content of gcgcgcatatat").as_deref(),
            Some("GCGCGCATATAT")
        );
        assert_eq!(nucleotide_sequence("reverse complement of ACG"), None);
    }

    #[test]
    fn test_vocabularies_match_patterns() {
        for gene in KNOWN_GENES {
            assert_eq!(gene_symbol(gene).as_deref(), Some(gene));
        }
        for protein in KNOWN_PROTEINS {
            assert_eq!(protein_names(protein), vec![protein]);
        }
        assert_eq!(
            nucleotide_sequence(&"A".repeat(MIN_SEQUENCE_LENGTH)).map(|s| s.len()),
            Some(MIN_SEQUENCE_LENGTH)
        );
    }
}
