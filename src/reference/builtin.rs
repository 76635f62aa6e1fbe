//! Built-in reference dataset.
//!
//! Three diseases (Alzheimer's, breast cancer, type 2 diabetes), four genes
//! with tissue expression (BRCA1, TP53, APOE, EGFR) and three proteins
//! (insulin, glucagon, p53). Parsed once on first use and shared read-only.

use std::sync::LazyLock;

use tracing::error;

use super::Dataset;

const BUILTIN_JSON: &str = include_str!("builtin.json");

static BUILTIN: LazyLock<Dataset> = LazyLock::new(|| {
    Dataset::from_json_str(BUILTIN_JSON).unwrap_or_else(|e| {
        error!("built-in dataset failed to load: {e}");
        Dataset::default()
    })
});

/// Returns the process-wide built-in dataset.
pub fn builtin() -> &'static Dataset {
    &BUILTIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::ReferenceData;

    #[test]
    fn test_builtin_parses() {
        assert!(Dataset::from_json_str(BUILTIN_JSON).is_ok());
        assert!(!builtin().is_empty());
    }

    #[test]
    fn test_builtin_contents() {
        let data = builtin();
        assert_eq!(
            data.disease_names().collect::<Vec<_>>(),
            vec!["alzheimer", "breast cancer", "diabetes"]
        );
        assert_eq!(
            data.gene_symbols().collect::<Vec<_>>(),
            vec!["APOE", "BRCA1", "EGFR", "TP53"]
        );
        assert_eq!(
            data.protein_names().collect::<Vec<_>>(),
            vec!["glucagon", "insulin", "p53"]
        );
    }

    #[test]
    fn test_builtin_alzheimer_record() {
        let disease = builtin().lookup_disease("Alzheimer's").unwrap();
        assert_eq!(disease.name, "Alzheimer's Disease");
        let symbols: Vec<&str> = disease.genes.iter().map(|g| g.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["APOE", "PSEN1", "APP", "PSEN2", "MAPT"]);
    }

    #[test]
    fn test_builtin_lookup_misses() {
        assert!(builtin().lookup_disease("parkinson").is_none());
        assert!(builtin().lookup_gene("BRCA2").is_none());
        assert!(builtin().lookup_protein("hemoglobin").is_none());
    }

    #[test]
    fn test_builtin_tissue_levels() {
        let brca1 = builtin().lookup_gene("brca1").unwrap();
        assert_eq!(brca1.tissues.len(), 8);
        assert_eq!(brca1.tissues.get("breast"), Some(85));
        assert_eq!(brca1.tissues.iter().next(), Some(("breast", 85)));
    }
}
