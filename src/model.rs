//! Data model for query results.
//!
//! This module contains all data structures for representing:
//! - The intent taxonomy
//! - Per-domain result payloads
//! - The result envelope returned for every query
//!
//! Every value is built fresh for one query and never mutated afterwards.
//! Serialized field names are camelCase and form the contract with the
//! rendering and export layers.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::reference::{Gene, GeneAssociation, Protein};
use crate::sequence::SequenceReport;

/// The classified purpose of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Intent {
    DiseaseGenes,
    SequenceAnalysis,
    GeneExpression,
    ProteinInfo,
    ProteinComparison,
    PathwayInfo,
    Unknown,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::DiseaseGenes => "disease-genes",
            Intent::SequenceAnalysis => "sequence-analysis",
            Intent::GeneExpression => "gene-expression",
            Intent::ProteinInfo => "protein-info",
            Intent::ProteinComparison => "protein-comparison",
            Intent::PathwayInfo => "pathway-info",
            Intent::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of payload carried by an envelope, serialized as `type`.
///
/// Mirrors the intent for successful results, with `Error` for any handler
/// failure. A `protein-comparison` query that names fewer than two proteins
/// yields a `ProteinInfo` result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResultKind {
    DiseaseGenes,
    SequenceAnalysis,
    GeneExpression,
    ProteinInfo,
    ProteinComparison,
    PathwayInfo,
    Unknown,
    Error,
}

/// Free-form display figures. Cosmetic only.
pub type Metrics = serde_json::Map<String, Value>;

/// Builds a [`Metrics`] map from `(name, value)` pairs.
pub fn metrics<const N: usize>(entries: [(&str, Value); N]) -> Metrics {
    entries
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

/// Message and example queries returned when a query cannot be answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResult {
    pub content: String,
    pub suggestions: Vec<String>,
}

impl ErrorResult {
    pub fn new(content: impl Into<String>, suggestions: &[&str]) -> Self {
        Self {
            content: content.into(),
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseGenes {
    pub genes: Vec<GeneAssociation>,
    pub description: String,
    pub prevalence: String,
    pub pathways: Vec<String>,
    pub gene_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiseaseGenesResult {
    pub disease: String,
    pub results: DiseaseGenes,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceAnalysisResult {
    pub sequence: String,
    pub results: SequenceReport,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TissueExpression {
    pub tissue: String,
    pub expression: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionProfile {
    pub symbol: String,
    pub name: String,
    pub function: String,
    /// Sorted by expression, highest first
    pub tissue_expression: Vec<TissueExpression>,
    pub highest_expression: TissueExpression,
    pub lowest_expression: TissueExpression,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneExpressionResult {
    pub gene: Gene,
    pub results: ExpressionProfile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProteinInfoResult {
    pub results: Protein,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    /// `None` when either length has no leading integer
    pub length_diff: Option<u64>,
    pub structural_similarity: f64,
    pub functional_relation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProteinComparison {
    pub protein1: Protein,
    pub protein2: Protein,
    pub comparison: ComparisonSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProteinComparisonResult {
    pub results: ProteinComparison,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathwaySummary {
    pub pathways: Vec<String>,
    pub function: String,
    pub diseases: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathwayInfoResult {
    pub gene: String,
    pub results: PathwaySummary,
}

/// Domain-specific result carried by an envelope.
///
/// Serialized inline: the variant's fields sit next to the envelope's own.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    DiseaseGenes(DiseaseGenesResult),
    SequenceAnalysis(SequenceAnalysisResult),
    GeneExpression(GeneExpressionResult),
    ProteinInfo(ProteinInfoResult),
    ProteinComparison(ProteinComparisonResult),
    PathwayInfo(PathwayInfoResult),
    Error(ErrorResult),
}

impl Payload {
    /// Kind of this payload; `Error` payloads of the unknown intent stay `Unknown`.
    pub fn kind(&self, intent: Intent) -> ResultKind {
        match self {
            Payload::DiseaseGenes(_) => ResultKind::DiseaseGenes,
            Payload::SequenceAnalysis(_) => ResultKind::SequenceAnalysis,
            Payload::GeneExpression(_) => ResultKind::GeneExpression,
            Payload::ProteinInfo(_) => ResultKind::ProteinInfo,
            Payload::ProteinComparison(_) => ResultKind::ProteinComparison,
            Payload::PathwayInfo(_) => ResultKind::PathwayInfo,
            Payload::Error(_) if intent == Intent::Unknown => ResultKind::Unknown,
            Payload::Error(_) => ResultKind::Error,
        }
    }

    pub fn as_error(&self) -> Option<&ErrorResult> {
        match self {
            Payload::Error(error) => Some(error),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssociationPoint {
    pub gene: String,
    pub association: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NucleotidePoint {
    pub nucleotide: char,
    pub count: usize,
    #[serde(serialize_with = "crate::rounding::serialize_fixed1")]
    pub percentage: f64,
}

/// Chart-ready projection of a result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "chartData", rename_all = "kebab-case")]
pub enum Visualization {
    GeneTable(Vec<AssociationPoint>),
    SequenceStats(Vec<NucleotidePoint>),
    ExpressionChart(Vec<TissueExpression>),
}

/// The answer to one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEnvelope {
    #[serde(rename = "type")]
    pub kind: ResultKind,
    pub intent: Intent,
    pub query: String,
    pub processing_steps: Vec<String>,
    #[serde(flatten)]
    pub payload: Payload,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visualization: Option<Visualization>,
}

impl ResultEnvelope {
    pub fn is_error(&self) -> bool {
        self.payload.as_error().is_some()
    }
}
