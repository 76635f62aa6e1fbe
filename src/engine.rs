//! Query engine.
//!
//! This module ties the pipeline together:
//! - Intent classification
//! - Processing-step narration
//! - Handler dispatch against the reference data
//!
//! Every call returns a [`ResultEnvelope`]; handler failures are carried
//! inside it as an error payload.

use tracing::info;

use crate::classifier::classify;
use crate::handlers::dispatch;
use crate::model::ResultEnvelope;
use crate::narration::processing_steps;
use crate::reference::{builtin, Dataset, ReferenceData};

/// Answers queries against one reference data source.
#[derive(Debug, Clone)]
pub struct Engine<D = &'static Dataset> {
    data: D,
}

impl Engine {
    /// Engine over the built-in dataset.
    pub fn new() -> Self {
        Self::with_data(builtin())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: ReferenceData> Engine<D> {
    pub fn with_data(data: D) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    /// Classifies `text`, runs the matching handler and wraps the outcome.
    pub fn process(&self, text: &str) -> ResultEnvelope {
        let intent = classify(text);
        let processing_steps = processing_steps(text);
        let outcome = dispatch(intent, text, &self.data);
        let kind = outcome.payload.kind(intent);
        info!(%intent, ?kind, "query processed");

        ResultEnvelope {
            kind,
            intent,
            query: text.to_string(),
            processing_steps,
            payload: outcome.payload,
            metrics: outcome.metrics,
            visualization: outcome.visualization,
        }
    }
}

/// Answers `text` against the built-in dataset.
pub fn process(text: &str) -> ResultEnvelope {
    Engine::new().process(text)
}
