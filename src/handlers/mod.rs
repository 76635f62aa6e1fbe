//! Query handlers, one per intent.
//!
//! A handler extracts its entities from the raw query, reads the reference
//! data or runs the sequence analyzer, and returns an [`Outcome`]. Missing or
//! unknown entities and lookup misses become an error payload with example
//! queries; handlers never fail.

pub mod disease;
pub mod expression;
pub mod extract;
pub mod pathway;
pub mod protein;
pub mod sequence;
pub mod unknown;

use tracing::{debug, warn};

use crate::model::{ErrorResult, Intent, Metrics, Payload, Visualization};
use crate::reference::ReferenceData;

/// What a handler produces; the engine wraps it into an envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub payload: Payload,
    pub metrics: Option<Metrics>,
    pub visualization: Option<Visualization>,
}

impl Outcome {
    pub fn new(payload: Payload) -> Self {
        Self {
            payload,
            metrics: None,
            visualization: None,
        }
    }

    /// Error payload with example queries.
    pub fn error(content: &str, suggestions: &[&str]) -> Self {
        warn!(content, "query could not be answered");
        Self::new(Payload::Error(ErrorResult::new(content, suggestions)))
    }

    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn with_visualization(mut self, visualization: Visualization) -> Self {
        self.visualization = Some(visualization);
        self
    }
}

/// Routes a classified query to its handler.
pub fn dispatch<D: ReferenceData + ?Sized>(intent: Intent, query: &str, data: &D) -> Outcome {
    debug!(%intent, "dispatching query");
    match intent {
        Intent::DiseaseGenes => disease::handle(query, data),
        Intent::SequenceAnalysis => sequence::handle(query),
        Intent::GeneExpression => expression::handle(query, data),
        Intent::ProteinInfo | Intent::ProteinComparison => protein::handle(query, data),
        Intent::PathwayInfo => pathway::handle(query, data),
        Intent::Unknown => unknown::handle(),
    }
}
