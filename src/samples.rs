//! Example queries grouped by analysis domain.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SampleCategory {
    pub name: &'static str,
    pub queries: [&'static str; 3],
}

/// Serialized form of the catalog: `{"categories": [{"name", "queries"}]}`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SampleCatalog {
    pub categories: &'static [SampleCategory],
}

const SAMPLES: [SampleCategory; 4] = [
    SampleCategory {
        name: "Disease-Gene Association",
        queries: [
            "Find all genes associated with Alzheimer's disease",
            "What genes are linked to breast cancer?",
            "Show me genes involved in diabetes",
        ],
    },
    SampleCategory {
        name: "Sequence Analysis",
        queries: [
            "Analyze sequence ATCGATCGATCG",
            "Find ORFs in sequence ATGGCCATTGTAATGGGCCGCTGAAAGGGTGCCCGATAG",
            "Calculate GC content of GCGCGCATATAT",
        ],
    },
    SampleCategory {
        name: "Gene Expression",
        queries: [
            "Which tissues express BRCA1 the highest?",
            "Show expression levels of TP53 across tissues",
            "Compare expression of APOE in brain vs liver",
        ],
    },
    SampleCategory {
        name: "Protein Analysis",
        queries: [
            "Compare protein structures of insulin and glucagon",
            "What pathways involve EGFR?",
            "Show me the function of p53 protein",
        ],
    },
];

/// The sample query catalog.
pub fn samples() -> &'static [SampleCategory] {
    &SAMPLES
}

/// The catalog wrapped for JSON output.
pub fn catalog() -> SampleCatalog {
    SampleCatalog {
        categories: samples(),
    }
}
