//! Intent classification by ordered pattern rules.
//!
//! [`RULES`] is evaluated top to bottom against the lowercased query and the
//! first matching rule decides the intent; with no match the intent is
//! [`Intent::Unknown`]. Rules overlap, so the order is part of the
//! behavior: a query naming both a disease and a nucleotide run is a
//! disease query.
//!
//! This is keyword heuristics over a fixed taxonomy. Misclassifying
//! adversarial text is expected.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::model::Intent;

/// A classification rule: the intent it selects and its predicate over the
/// lowercased query.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub intent: Intent,
    pub matches: fn(&str) -> bool,
}

/// Classification rules in evaluation order.
pub static RULES: [Rule; 6] = [
    Rule {
        name: "disease-genes",
        intent: Intent::DiseaseGenes,
        matches: is_disease_gene_query,
    },
    Rule {
        name: "sequence-analysis",
        intent: Intent::SequenceAnalysis,
        matches: is_sequence_query,
    },
    Rule {
        name: "gene-expression",
        intent: Intent::GeneExpression,
        matches: is_expression_query,
    },
    Rule {
        name: "protein-comparison",
        intent: Intent::ProteinComparison,
        matches: is_protein_comparison_query,
    },
    Rule {
        name: "protein-info",
        intent: Intent::ProteinInfo,
        matches: is_protein_query,
    },
    Rule {
        name: "pathway-info",
        intent: Intent::PathwayInfo,
        matches: is_pathway_query,
    },
];

// ── Disease ↔ gene ─────────────────────────────────────────────────────────
query_pattern!(
    RE_GENES_LINKED,
    r"genes?.*(associated|linked|related|involved).*(with|to|in)"
);
query_pattern!(RE_FIND_GENES, r"(find|show|list|what).*genes?.*(disease|condition)");
query_pattern!(RE_DISEASE_THEN_GENE, r"disease.*genes?");
query_pattern!(RE_GENE_THEN_DISEASE, r"genes?.*disease");

// ── Sequence ───────────────────────────────────────────────────────────────
query_pattern!(RE_ANALYZE_SEQUENCE, r"analy[sz].*(sequence|dna|rna)");
query_pattern!(RE_NUCLEOTIDE_RUN, r"[atgc]{4,}");
query_pattern!(RE_SEQUENCE_TERMS, r"gc|orf|blast|complement");

// ── Expression ─────────────────────────────────────────────────────────────
query_pattern!(RE_EXPRESS, r"express");
query_pattern!(RE_TISSUE_LEVEL, r"(tissue|organ|cell).*(express|level)");
query_pattern!(RE_WHICH_TISSUE, r"which.*(tissue|organ|cell)");

// ── Protein ────────────────────────────────────────────────────────────────
query_pattern!(RE_PROTEIN, r"protein");
query_pattern!(RE_PROTEIN_TERMS, r"structure|compare|function|fold|domain");

// ── Pathway ────────────────────────────────────────────────────────────────
query_pattern!(RE_PATHWAY, r"pathway");
query_pattern!(RE_FUNCTION_OF, r"function\s+of");
query_pattern!(
    RE_WHAT_DOES,
    r"\bwhat\s+(do|does|is|are)\b.*\b(function|role|do)\b"
);

fn any_match(patterns: &[&LazyLock<Option<Regex>>], text: &str) -> bool {
    patterns
        .iter()
        .filter_map(|pattern| pattern.as_ref())
        .any(|re| re.is_match(text))
}

pub fn is_disease_gene_query(text: &str) -> bool {
    any_match(
        &[
            &RE_GENES_LINKED,
            &RE_FIND_GENES,
            &RE_DISEASE_THEN_GENE,
            &RE_GENE_THEN_DISEASE,
        ],
        text,
    )
}

pub fn is_sequence_query(text: &str) -> bool {
    any_match(
        &[&RE_ANALYZE_SEQUENCE, &RE_NUCLEOTIDE_RUN, &RE_SEQUENCE_TERMS],
        text,
    )
}

pub fn is_expression_query(text: &str) -> bool {
    any_match(&[&RE_EXPRESS, &RE_TISSUE_LEVEL, &RE_WHICH_TISSUE], text)
}

pub fn is_protein_query(text: &str) -> bool {
    any_match(&[&RE_PROTEIN], text) && any_match(&[&RE_PROTEIN_TERMS], text)
}

pub fn is_protein_comparison_query(text: &str) -> bool {
    is_protein_query(text) && text.contains("compare")
}

pub fn is_pathway_query(text: &str) -> bool {
    any_match(&[&RE_PATHWAY, &RE_FUNCTION_OF, &RE_WHAT_DOES], text)
}

/// Returns the first rule matching `query`, if any.
pub fn matching_rule(query: &str) -> Option<&'static Rule> {
    let lower = query.to_lowercase();
    RULES.iter().find(|rule| (rule.matches)(&lower))
}

/// Classifies a query into exactly one intent.
pub fn classify(query: &str) -> Intent {
    match matching_rule(query) {
        Some(rule) => {
            debug!(rule = rule.name, "query classified");
            rule.intent
        }
        None => {
            debug!("no classification rule matched");
            Intent::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order() {
        let order: Vec<Intent> = RULES.iter().map(|rule| rule.intent).collect();
        assert_eq!(
            order,
            vec![
                Intent::DiseaseGenes,
                Intent::SequenceAnalysis,
                Intent::GeneExpression,
                Intent::ProteinComparison,
                Intent::ProteinInfo,
                Intent::PathwayInfo,
            ]
        );
    }

    #[test]
    fn test_all_patterns_compile() {
        for pattern in [
            &RE_GENES_LINKED,
            &RE_FIND_GENES,
            &RE_DISEASE_THEN_GENE,
            &RE_GENE_THEN_DISEASE,
            &RE_ANALYZE_SEQUENCE,
            &RE_NUCLEOTIDE_RUN,
            &RE_SEQUENCE_TERMS,
            &RE_EXPRESS,
            &RE_TISSUE_LEVEL,
            &RE_WHICH_TISSUE,
            &RE_PROTEIN,
            &RE_PROTEIN_TERMS,
            &RE_PATHWAY,
            &RE_FUNCTION_OF,
            &RE_WHAT_DOES,
        ] {
            assert!(pattern.is_some());
        }
    }

    #[test]
    fn test_disease_queries() {
        for query in [
            "Find all genes associated with Alzheimer's disease",
            "What genes are linked to breast cancer?",
            "Show me genes involved in diabetes",
            "Which disease involves the APOE gene?",
        ] {
            assert_eq!(classify(query), Intent::DiseaseGenes, "{query}");
        }
    }

    #[test]
    fn test_disease_precedes_sequence() {
        let query = "Find genes associated with Alzheimer's disease, sequence ATCGATCGATCG";
        assert!(is_sequence_query(&query.to_lowercase()));
        assert_eq!(classify(query), Intent::DiseaseGenes);
    }

    #[test]
    fn test_sequence_queries() {
        for query in [
            "Analyze sequence ATCGATCGATCG",
            "Find ORFs in sequence ATGGCCATTGTAATGGGCCGCTGAAAGGGTGCCCGATAG",
            "Calculate GC content of GCGCGCATATAT",
            "Please analyze this DNA",
            "reverse complement of it",
            "gattaca",
        ] {
            assert_eq!(classify(query), Intent::SequenceAnalysis, "{query}");
        }
    }

    #[test]
    fn test_sequence_precedes_expression() {
        assert_eq!(
            classify("Which tissues express the sequence GATTACA?"),
            Intent::SequenceAnalysis
        );
    }

    #[test]
    fn test_expression_queries() {
        for query in [
            "Which tissues express BRCA1 the highest?",
            "Show expression levels of TP53 across tissues",
            "Compare expression of APOE in brain vs liver",
            "Which organ has the most EGFR?",
        ] {
            assert_eq!(classify(query), Intent::GeneExpression, "{query}");
        }
    }

    #[test]
    fn test_protein_queries() {
        assert_eq!(
            classify("Compare protein structures of insulin and glucagon"),
            Intent::ProteinComparison
        );
        assert_eq!(
            classify("Show me the function of p53 protein"),
            Intent::ProteinInfo
        );
        assert_eq!(
            classify("Describe the fold of this protein"),
            Intent::ProteinInfo
        );
    }

    #[test]
    fn test_pathway_queries() {
        for query in [
            "What pathways involve EGFR?",
            "Show me the function of TP53",
            "What does EGFR do?",
            "What is the role of APOE?",
        ] {
            assert_eq!(classify(query), Intent::PathwayInfo, "{query}");
        }
    }

    #[test]
    fn test_unknown_queries() {
        for query in ["What is the meaning of life?", "", "hello there", "42"] {
            assert_eq!(classify(query), Intent::Unknown, "{query}");
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            classify("FIND GENES ASSOCIATED WITH DIABETES"),
            Intent::DiseaseGenes
        );
        assert_eq!(classify("analyze sequence atcgatcg"), Intent::SequenceAnalysis);
    }
}
