//! DNA sequence analysis.
//!
//! Builds a [`SequenceReport`] from a nucleotide string:
//! - Per-base composition and percentages
//! - GC content, melting temperature and molecular weight estimates
//! - Complement and reverse complement
//! - Open reading frames in the three forward frames (see [`orf`])
//!
//! The melting temperature and molecular weight are rough estimates. The
//! linear melting rule gives non-physical values for very short or
//! GC-extreme sequences; no clamping is applied.

pub mod codon;
pub mod orf;

use serde::Serialize;
use thiserror::Error;

use crate::rounding::{round_to, serialize_fixed0, serialize_fixed1, serialize_fixed2};
pub use orf::{OpenReadingFrame, OrfEntry, MIN_ORF_LENGTH, NO_ORF_MESSAGE};

/// Average mass of one nucleotide, in Daltons.
pub const AVERAGE_NUCLEOTIDE_MASS: usize = 330;

/// Errors raised when the analyzer's input precondition is violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Empty sequence")]
    Empty,

    #[error("Invalid nucleotide '{base}' at position {position}")]
    InvalidBase { base: char, position: usize },
}

/// Result type for sequence analysis.
pub type SequenceResult<T> = Result<T, SequenceError>;

/// Base counts and percentages of A, T, G and C.
///
/// Percentages are relative to the full sequence length, so characters
/// outside A/T/G/C lower every percentage without being counted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Composition {
    #[serde(rename = "A")]
    pub a: usize,
    #[serde(rename = "A_pct", serialize_with = "serialize_fixed1")]
    pub a_pct: f64,
    #[serde(rename = "T")]
    pub t: usize,
    #[serde(rename = "T_pct", serialize_with = "serialize_fixed1")]
    pub t_pct: f64,
    #[serde(rename = "G")]
    pub g: usize,
    #[serde(rename = "G_pct", serialize_with = "serialize_fixed1")]
    pub g_pct: f64,
    #[serde(rename = "C")]
    pub c: usize,
    #[serde(rename = "C_pct", serialize_with = "serialize_fixed1")]
    pub c_pct: f64,
}

impl Composition {
    /// Counts bases in a single pass. `sequence` must be uppercase and non-empty.
    pub fn count(sequence: &[u8]) -> Self {
        let (mut a, mut t, mut g, mut c) = (0, 0, 0, 0);
        for base in sequence {
            match base {
                b'A' => a += 1,
                b'T' => t += 1,
                b'G' => g += 1,
                b'C' => c += 1,
                _ => {}
            }
        }

        let length = sequence.len() as f64;
        let pct = |count: usize| round_to(count as f64 / length * 100.0, 1);
        Self {
            a,
            a_pct: pct(a),
            t,
            t_pct: pct(t),
            g,
            g_pct: pct(g),
            c,
            c_pct: pct(c),
        }
    }

    /// Number of G and C bases.
    pub fn gc(&self) -> usize {
        self.g + self.c
    }

    /// Total number of classified bases.
    pub fn total(&self) -> usize {
        self.a + self.t + self.g + self.c
    }

    /// `(base, count, percentage)` rows in A, T, G, C order.
    pub fn rows(&self) -> [(char, usize, f64); 4] {
        [
            ('A', self.a, self.a_pct),
            ('T', self.t, self.t_pct),
            ('G', self.g, self.g_pct),
            ('C', self.c, self.c_pct),
        ]
    }
}

/// Full analysis of one nucleotide sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceReport {
    pub length: usize,
    pub composition: Composition,
    /// Percent, two decimals
    #[serde(serialize_with = "serialize_fixed2")]
    pub gc_content: f64,
    pub complement: String,
    pub reverse_complement: String,
    pub orfs: Vec<OrfEntry>,
    /// Approximate, in Daltons
    #[serde(serialize_with = "serialize_fixed0")]
    pub molecular_weight: f64,
    /// Approximate, in °C
    #[serde(serialize_with = "serialize_fixed1")]
    pub melting_temp: f64,
}

impl SequenceReport {
    /// Analyzes a nucleotide sequence.
    ///
    /// The input is uppercased first and must then consist of A, T, G and C
    /// only.
    pub fn analyze(sequence: &str) -> SequenceResult<Self> {
        if sequence.is_empty() {
            return Err(SequenceError::Empty);
        }
        let upper = sequence.to_ascii_uppercase();
        let bytes = upper.as_bytes();

        let complement = complement(&upper).ok_or_else(|| invalid_base(&upper))?;
        let reverse_complement: String = complement.chars().rev().collect();

        let length = bytes.len();
        let composition = Composition::count(bytes);

        Ok(Self {
            length,
            gc_content: gc_content(&composition, length),
            melting_temp: melting_temperature(&composition, length),
            molecular_weight: (length * AVERAGE_NUCLEOTIDE_MASS) as f64,
            composition,
            complement,
            reverse_complement,
            orfs: orf::orf_entries(bytes),
        })
    }

    /// Real ORFs in the report, excluding the placeholder.
    pub fn open_reading_frames(&self) -> impl Iterator<Item = &OpenReadingFrame> {
        self.orfs.iter().filter_map(OrfEntry::as_orf)
    }

    /// Number of real ORFs.
    pub fn orf_count(&self) -> usize {
        self.open_reading_frames().count()
    }

    pub fn has_orfs(&self) -> bool {
        self.orf_count() > 0
    }
}

/// GC content in percent, rounded to two decimals.
pub fn gc_content(composition: &Composition, length: usize) -> f64 {
    round_to(composition.gc() as f64 / length as f64 * 100.0, 2)
}

/// Linear melting temperature estimate, rounded to one decimal.
pub fn melting_temperature(composition: &Composition, length: usize) -> f64 {
    round_to(
        64.9 + 41.0 * (composition.gc() as f64 - 16.4) / length as f64,
        1,
    )
}

/// Complements each base (A↔T, G↔C).
///
/// Returns `None` if the sequence holds anything but uppercase A/T/G/C.
pub fn complement(sequence: &str) -> Option<String> {
    sequence
        .chars()
        .map(|base| match base {
            'A' => Some('T'),
            'T' => Some('A'),
            'G' => Some('C'),
            'C' => Some('G'),
            _ => None,
        })
        .collect()
}

/// Complement read in reverse order.
pub fn reverse_complement(sequence: &str) -> Option<String> {
    complement(sequence).map(|c| c.chars().rev().collect())
}

fn invalid_base(sequence: &str) -> SequenceError {
    sequence
        .chars()
        .enumerate()
        .find(|(_, base)| !matches!(base, 'A' | 'T' | 'G' | 'C'))
        .map(|(index, base)| SequenceError::InvalidBase {
            base,
            position: index + 1,
        })
        .unwrap_or(SequenceError::Empty)
}
