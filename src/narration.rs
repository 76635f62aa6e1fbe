//! Processing-step narration shown while a query is answered.
//!
//! The steps depend only on keywords in the query text, never on the result.

pub const OPENING_STEP: &str = "Parsing natural language query...";
pub const CLOSING_STEPS: [&str; 2] = ["Validating results...", "Generating visualization..."];

/// Keyword triggers and the two steps each one adds, in narration order.
const STAGES: [(&[&str], [&str; 2]); 4] = [
    (
        &["gene", "disease"],
        [
            "Accessing genomic databases (NCBI, Ensembl, OMIM)...",
            "Cross-referencing 4 major databases...",
        ],
    ),
    (
        &["sequence"],
        [
            "Running sequence analysis pipeline...",
            "Computing nucleotide statistics...",
        ],
    ),
    (
        &["expression", "tissue"],
        [
            "Querying GTEx expression database...",
            "Analyzing tissue-specific patterns...",
        ],
    ),
    (
        &["protein", "pathway"],
        [
            "Searching protein interaction networks...",
            "Mapping biological pathways...",
        ],
    ),
];

/// Narration for `query`; triggers match case-insensitive substrings.
pub fn processing_steps(query: &str) -> Vec<String> {
    let lower = query.to_lowercase();
    let mut steps = vec![OPENING_STEP.to_string()];
    for (triggers, lines) in STAGES {
        if triggers.iter().any(|t| lower.contains(t)) {
            steps.extend(lines.iter().map(|line| line.to_string()));
        }
    }
    steps.extend(CLOSING_STEPS.iter().map(|line| line.to_string()));
    steps
}
