//! Codon reading for the standard genetic code.
//!
//! This module provides:
//! - Start/stop codon classification
//! - In-frame codon iteration for reading frames +1, +2, +3

/// Translation initiation codon.
pub const START_CODON: &[u8; 3] = b"ATG";

/// Termination codons of the standard code.
pub const STOP_CODONS: [&[u8; 3]; 3] = [b"TAA", b"TAG", b"TGA"];

/// Role of a codon when scanning for open reading frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodonKind {
    /// `ATG`
    Start,
    /// `TAA`, `TAG` or `TGA`
    Stop,
    /// Any other triplet, including incomplete ones
    Sense,
}

/// Classifies a codon. Input must already be uppercase.
pub fn classify_codon(codon: &[u8]) -> CodonKind {
    if codon.len() != 3 {
        return CodonKind::Sense;
    }
    if codon == START_CODON {
        CodonKind::Start
    } else if STOP_CODONS.iter().any(|stop| codon == *stop) {
        CodonKind::Stop
    } else {
        CodonKind::Sense
    }
}

/// Iterates over the full codons of `sequence` read in `frame` (0, 1 or 2).
///
/// Yields `(position, codon)` with 0-based positions; a trailing partial
/// codon is not yielded.
pub fn codons(sequence: &[u8], frame: usize) -> impl Iterator<Item = (usize, &[u8])> {
    let start = frame.min(2);
    (start..)
        .step_by(3)
        .take_while(move |pos| pos + 3 <= sequence.len())
        .map(move |pos| (pos, &sequence[pos..pos + 3]))
}
