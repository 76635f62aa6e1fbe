//! Disease → associated genes.

use serde_json::json;

use super::{extract, Outcome};
use crate::model::{
    metrics, AssociationPoint, DiseaseGenes, DiseaseGenesResult, Payload, Visualization,
};
use crate::reference::{Disease, ReferenceData};

pub const SUGGESTIONS: [&str; 3] = [
    "Find genes associated with Alzheimer's disease",
    "What genes are linked to breast cancer?",
    "Show me genes involved in diabetes",
];

pub fn handle<D: ReferenceData + ?Sized>(query: &str, data: &D) -> Outcome {
    let Some(name) = extract::disease_name(query) else {
        return Outcome::error("No known disease named in query.", &SUGGESTIONS);
    };
    let Some(disease) = data.lookup_disease(&name) else {
        return Outcome::error("Disease not found in database", &SUGGESTIONS);
    };

    Outcome::new(Payload::DiseaseGenes(result(disease)))
        .with_metrics(metrics([
            ("analysisTime", json!("0.3s")),
            ("databasesSearched", json!(4)),
            ("genesAnalyzed", json!(25847)),
            ("confidence", json!(99.2)),
        ]))
        .with_visualization(chart(disease))
}

fn result(disease: &Disease) -> DiseaseGenesResult {
    DiseaseGenesResult {
        disease: disease.name.clone(),
        results: DiseaseGenes {
            genes: disease.genes.clone(),
            description: disease.description.clone(),
            prevalence: disease.prevalence.clone(),
            pathways: disease.pathways.clone(),
            gene_count: disease.genes.len(),
        },
    }
}

/// Association strength per gene, in stored order.
fn chart(disease: &Disease) -> Visualization {
    Visualization::GeneTable(
        disease
            .genes
            .iter()
            .map(|gene| AssociationPoint {
                gene: gene.symbol.clone(),
                association: gene.association_strength(),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::builtin;

    #[test]
    fn test_alzheimer_genes() {
        let outcome = handle("Find all genes associated with Alzheimer's disease", builtin());
        let Payload::DiseaseGenes(result) = &outcome.payload else {
            panic!("expected disease payload, got {:?}", outcome.payload);
        };
        assert_eq!(result.disease, "Alzheimer's Disease");
        assert_eq!(result.results.gene_count, 5);
        assert_eq!(result.results.genes[0].symbol, "APOE");
        assert!(outcome.metrics.is_some());
    }

    #[test]
    fn test_chart_uses_tier_mapping() {
        let outcome = handle("What genes are linked to breast cancer?", builtin());
        let Some(Visualization::GeneTable(points)) = outcome.visualization else {
            panic!("expected gene table");
        };
        let scores: Vec<(&str, u8)> = points
            .iter()
            .map(|p| (p.gene.as_str(), p.association))
            .collect();
        assert_eq!(
            scores,
            vec![("BRCA1", 90), ("BRCA2", 90), ("TP53", 90), ("PTEN", 70)]
        );

        let outcome = handle("genes associated with alzheimer", builtin());
        let Some(Visualization::GeneTable(points)) = outcome.visualization else {
            panic!("expected gene table");
        };
        assert_eq!(points[1].association, 95);
    }

    #[test]
    fn test_known_name_missing_from_data() {
        let outcome = handle("genes linked to Parkinson's disease", builtin());
        let error = outcome.payload.as_error().unwrap();
        assert_eq!(error.content, "Disease not found in database");
        assert_eq!(error.suggestions.len(), 3);
    }

    #[test]
    fn test_unrecognized_disease() {
        let outcome = handle("genes linked to gout", builtin());
        assert!(outcome.payload.as_error().is_some());
        assert!(outcome.visualization.is_none());
    }
}
