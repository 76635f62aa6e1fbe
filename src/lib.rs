//! # BIAnexus - Biology Question Engine
//!
//! Answers free-text biology questions with a typed result and a short
//! narration of the analysis steps.
//!
//! ## Architecture
//!
//! A query flows through:
//! - `classifier`: ordered pattern rules picking one [`Intent`]
//! - `handlers`: entity extraction and one handler per intent
//! - `sequence`: DNA composition, melting temperature and ORF detection
//! - `reference`: read-only disease/gene/protein lookups
//! - `narration`: the processing steps shown while a query runs
//! - `engine`: the [`Engine`] facade tying the above together
//!
//! ```
//! use bianexus::{Engine, Intent};
//!
//! let engine = Engine::new();
//! let result = engine.process("Analyze sequence ATCGATCGATCG");
//! assert_eq!(result.intent, Intent::SequenceAnalysis);
//! ```
//!
//! The engine holds no mutable state; one instance can serve queries from
//! any number of threads.

/// Declares a lazily compiled regex. An invalid pattern yields `None` and
/// never matches.
macro_rules! query_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: std::sync::LazyLock<Option<regex::Regex>> =
            std::sync::LazyLock::new(|| regex::Regex::new($regex_str).ok());
    };
}

pub mod classifier;
pub mod engine;
pub mod handlers;
pub mod model;
pub mod narration;
pub mod reference;
pub mod rounding;
pub mod samples;
pub mod sequence;

pub use engine::{process, Engine};
pub use model::{Intent, Payload, ResultEnvelope, ResultKind};
pub use reference::{Dataset, ReferenceData};
pub use sequence::SequenceReport;
