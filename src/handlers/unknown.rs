//! Fallback help for queries no rule matched.

use tracing::debug;

use super::Outcome;
use crate::model::{ErrorResult, Payload};

pub const HELP: &str = "I'm not sure how to answer that question. I can help you with:\n\n\
• Finding genes associated with diseases\n\
• Analyzing DNA sequences\n\
• Checking gene expression in different tissues\n\
• Comparing protein structures\n\
• Exploring biological pathways";

pub const SUGGESTIONS: [&str; 4] = [
    "Find genes associated with Alzheimer's disease",
    "Analyze sequence ATCGATCGATCG",
    "Which tissues express BRCA1 the highest?",
    "What pathways involve EGFR?",
];

/// Help payload. An unmatched query is a normal outcome, so it is not
/// logged as a failure.
pub fn handle() -> Outcome {
    debug!("answering with capability help");
    Outcome::new(Payload::Error(ErrorResult::new(HELP, &SUGGESTIONS)))
}
