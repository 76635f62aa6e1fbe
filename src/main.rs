//! BIAnexus - Biology Question Engine
//!
//! Answers free-text biology questions from the command line.
//!
//! ## Usage
//!
//! ```bash
//! bianexus "Which tissues express BRCA1 the highest?"
//! bianexus -o json-pretty "Analyze sequence ATCGATCGATCG"
//! echo "What pathways involve EGFR?" | bianexus     # one query per line
//! bianexus --samples
//! ```
//!
//! Logging goes to stderr and is controlled by `BIANEXUS_LOG`
//! (e.g. `BIANEXUS_LOG=bianexus=debug`).

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Once;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use bianexus::model::Visualization;
use bianexus::samples::{catalog, samples};
use bianexus::{Dataset, Engine, Payload, ReferenceData, ResultEnvelope};

const LOG_ENV: &str = "BIANEXUS_LOG";
const MIN_WIDTH: usize = 20;

static INIT: Once = Once::new();

/// Installs the stderr subscriber once; `BIANEXUS_LOG` overrides the default filter.
fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("bianexus=warn"));
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(io::stderr).with_target(false))
            .init();
    });
}

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputArg {
    /// Narration and a short human-readable summary
    Text,
    /// One compact JSON envelope per line
    Json,
    /// Indented JSON envelopes
    JsonPretty,
}

/// BIAnexus - answer biology questions about diseases, genes, sequences and proteins
///
/// Queries are taken from the command line, or read from stdin one per line.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Query text (words are joined with spaces)
    query: Vec<String>,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value = "text")]
    output: OutputArg,

    /// Reference dataset JSON file (defaults to the built-in dataset)
    #[arg(short = 'd', long = "dataset")]
    dataset: Option<PathBuf>,

    /// Print the sample query catalog and exit
    #[arg(long = "samples")]
    samples: bool,

    /// Wrap width for text output
    #[arg(short = 'w', long = "width", default_value = "80")]
    width: usize,
}

/// One-line-per-fact summary of a successful payload.
fn summarize(payload: &Payload) -> Vec<String> {
    match payload {
        Payload::DiseaseGenes(r) => vec![
            format!("{}: {} associated genes", r.disease, r.results.gene_count),
            r.results
                .genes
                .iter()
                .map(|g| format!("{} ({})", g.symbol, g.association))
                .collect::<Vec<_>>()
                .join(", "),
            format!("Prevalence: {}", r.results.prevalence),
        ],
        Payload::SequenceAnalysis(r) => {
            let report = &r.results;
            let orfs = if report.has_orfs() {
                format!("{} open reading frame(s)", report.orf_count())
            } else {
                "No significant ORFs found".to_string()
            };
            vec![
                format!("Sequence: {} ({} bp)", r.sequence, report.length),
                format!(
                    "GC content: {:.2}%  Tm: {:.1} C  MW: {:.0} Da",
                    report.gc_content, report.melting_temp, report.molecular_weight
                ),
                format!("Reverse complement: {}", report.reverse_complement),
                orfs,
            ]
        }
        Payload::GeneExpression(r) => vec![
            format!("{} ({})", r.results.symbol, r.results.name),
            format!(
                "Highest: {} ({})  Lowest: {} ({})",
                r.results.highest_expression.tissue,
                r.results.highest_expression.expression,
                r.results.lowest_expression.tissue,
                r.results.lowest_expression.expression
            ),
        ],
        Payload::ProteinInfo(r) => vec![
            format!("{} (gene {}, PDB {})", r.results.name, r.results.gene, r.results.pdb_id),
            r.results.function.clone(),
        ],
        Payload::ProteinComparison(r) => {
            let diff = match r.results.comparison.length_diff {
                Some(diff) => diff.to_string(),
                None => "n/a".to_string(),
            };
            vec![
                format!("{} vs {}", r.results.protein1.name, r.results.protein2.name),
                format!(
                    "Length difference: {}  Structural similarity: {}%",
                    diff, r.results.comparison.structural_similarity
                ),
                r.results.comparison.functional_relation.clone(),
            ]
        }
        Payload::PathwayInfo(r) => vec![
            format!("{}: {}", r.gene, r.results.function),
            format!("Pathways: {}", r.results.pathways.join(", ")),
            format!("Diseases: {}", r.results.diseases.join(", ")),
        ],
        Payload::Error(e) => {
            let mut lines = vec![e.content.clone()];
            lines.extend(e.suggestions.iter().map(|s| format!("Try: {s}")));
            lines
        }
    }
}

fn write_text<W: Write>(out: &mut W, envelope: &ResultEnvelope, width: usize) -> Result<()> {
    writeln!(out, "> {} [{}]", envelope.query, envelope.intent)?;
    for step in &envelope.processing_steps {
        writeln!(out, "  - {step}")?;
    }
    for line in summarize(&envelope.payload) {
        for wrapped in textwrap::wrap(&line, width) {
            writeln!(out, "{wrapped}")?;
        }
    }
    if let Some(Visualization::ExpressionChart(points)) = &envelope.visualization {
        for point in points {
            writeln!(out, "  {:<12} {}", point.tissue, point.expression)?;
        }
    }
    writeln!(out)?;
    Ok(())
}

fn write_envelope<W: Write>(
    out: &mut W,
    envelope: &ResultEnvelope,
    output: OutputArg,
    width: usize,
) -> Result<()> {
    match output {
        OutputArg::Text => write_text(out, envelope, width)?,
        OutputArg::Json => writeln!(out, "{}", serde_json::to_string(envelope)?)?,
        OutputArg::JsonPretty => writeln!(out, "{}", serde_json::to_string_pretty(envelope)?)?,
    }
    Ok(())
}

fn run<D: ReferenceData>(engine: &Engine<D>, args: &Args) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    if !args.query.is_empty() {
        let envelope = engine.process(&args.query.join(" "));
        return write_envelope(&mut handle, &envelope, args.output, args.width);
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read query from stdin")?;
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        let envelope = engine.process(query);
        write_envelope(&mut handle, &envelope, args.output, args.width)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    if args.width < MIN_WIDTH {
        anyhow::bail!("Width must be at least {} (got {})", MIN_WIDTH, args.width);
    }

    if args.samples {
        if args.output == OutputArg::Text {
            for category in samples() {
                println!("{}", category.name);
                for query in category.queries {
                    println!("  {query}");
                }
            }
        } else {
            println!("{}", serde_json::to_string_pretty(&catalog())?);
        }
        return Ok(());
    }

    match &args.dataset {
        Some(path) => {
            let dataset = Dataset::from_path(path)
                .with_context(|| format!("Failed to load dataset {}", path.display()))?;
            run(&Engine::with_data(dataset), &args)
        }
        None => run(&Engine::new(), &args),
    }
}
