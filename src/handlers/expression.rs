//! Gene → tissue expression profile.

use serde_json::json;

use super::{extract, Outcome};
use crate::model::{
    metrics, ExpressionProfile, GeneExpressionResult, Payload, TissueExpression, Visualization,
};
use crate::reference::{Gene, ReferenceData};

pub const SUGGESTIONS: [&str; 3] = [
    "Which tissues express BRCA1 the highest?",
    "Show expression levels of TP53 across tissues",
    "Compare expression of APOE in brain vs liver",
];

const NO_DATA_SUGGESTIONS: [&str; 1] = ["Try BRCA1, TP53, APOE, or EGFR"];

pub fn handle<D: ReferenceData + ?Sized>(query: &str, data: &D) -> Outcome {
    let Some(symbol) = extract::gene_symbol(query) else {
        return Outcome::error("Gene not specified or not found in database.", &SUGGESTIONS);
    };
    let Some(gene) = data.lookup_gene(&symbol) else {
        return Outcome::error("Gene expression data not available.", &NO_DATA_SUGGESTIONS);
    };

    let tissues = ranked_tissues(gene);
    let (Some(highest), Some(lowest)) = (tissues.first(), tissues.last()) else {
        return Outcome::error("Gene expression data not available.", &NO_DATA_SUGGESTIONS);
    };

    let results = ExpressionProfile {
        symbol,
        name: gene.name.clone(),
        function: gene.function.clone(),
        highest_expression: highest.clone(),
        lowest_expression: lowest.clone(),
        tissue_expression: tissues.clone(),
    };

    Outcome::new(Payload::GeneExpression(GeneExpressionResult {
        gene: gene.clone(),
        results,
    }))
    .with_metrics(metrics([
        ("analysisTime", json!("0.4s")),
        ("tissuesAnalyzed", json!(tissues.len())),
        ("samplesProcessed", json!(11688)),
        ("dataSource", json!("GTEx v8")),
    ]))
    .with_visualization(Visualization::ExpressionChart(tissues))
}

/// Tissues by expression, highest first; ties keep stored order.
pub fn ranked_tissues(gene: &Gene) -> Vec<TissueExpression> {
    let mut tissues: Vec<TissueExpression> = gene
        .tissues
        .iter()
        .map(|(tissue, expression)| TissueExpression {
            tissue: tissue.to_string(),
            expression,
        })
        .collect();
    tissues.sort_by(|a, b| b.expression.cmp(&a.expression));
    tissues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{builtin, Dataset, TissueLevels};

    fn profile(outcome: &Outcome) -> &ExpressionProfile {
        match &outcome.payload {
            Payload::GeneExpression(result) => &result.results,
            other => panic!("expected expression payload, got {other:?}"),
        }
    }

    #[test]
    fn test_brca1_highest_tissue() {
        let outcome = handle("Which tissues express BRCA1 the highest?", builtin());
        let profile = profile(&outcome);
        assert_eq!(profile.symbol, "BRCA1");
        assert_eq!(profile.highest_expression.tissue, "breast");
        assert_eq!(profile.highest_expression.expression, 85);
        assert_eq!(profile.lowest_expression.tissue, "brain");
        assert_eq!(profile.tissue_expression.len(), 8);
        assert!(profile
            .tissue_expression
            .windows(2)
            .all(|w| w[0].expression >= w[1].expression));
    }

    #[test]
    fn test_ties_keep_stored_order() {
        let mut gene = builtin().lookup_gene("TP53").unwrap().clone();
        gene.tissues = [("kidney", 50), ("heart", 70), ("skin", 50)].into_iter().collect();
        let names: Vec<String> = ranked_tissues(&gene).into_iter().map(|t| t.tissue).collect();
        assert_eq!(names, vec!["heart", "kidney", "skin"]);
    }

    #[test]
    fn test_symbol_without_data() {
        let outcome = handle("Show expression of BRCA2", builtin());
        let error = outcome.payload.as_error().unwrap();
        assert_eq!(error.content, "Gene expression data not available.");
    }

    #[test]
    fn test_gene_without_tissues() {
        let data = Dataset::from_json_str(
            r#"{"genes": {"EGFR": {"symbol": "EGFR", "name": "n", "function": "f",
                "chromosome": "7", "length": "1 bp", "protein": "1 aa"}}}"#,
        )
        .unwrap();
        assert_eq!(data.lookup_gene("EGFR").unwrap().tissues, TissueLevels::new());
        let outcome = handle("expression of EGFR", &data);
        assert!(outcome.payload.as_error().is_some());
    }

    #[test]
    fn test_missing_symbol() {
        let outcome = handle("Which tissues express MYC?", builtin());
        let error = outcome.payload.as_error().unwrap();
        assert_eq!(error.suggestions.len(), 3);
    }
}
