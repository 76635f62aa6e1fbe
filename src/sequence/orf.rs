//! Open reading frame detection on the forward strand.
//!
//! Each of the three forward frames is scanned codon by codon. An `ATG`
//! opens a candidate that closes at the next in-frame stop codon. After a
//! candidate is resolved, scanning resumes right after the start codon that
//! opened it, so nested start codons inside a closed candidate are reported
//! as their own (overlapping) ORFs. Candidates that never meet a stop codon
//! are dropped. The reverse strand is not scanned.
//!
//! The next in-frame stop is tabulated once per frame, so each candidate
//! resolves without rescanning and the scan stays linear.

use serde::Serialize;

use super::codon::{classify_codon, codons, CodonKind};

/// Minimum ORF length in bases, start and stop codons included.
pub const MIN_ORF_LENGTH: usize = 30;

/// Placeholder message reported when no frame holds a qualifying ORF.
pub const NO_ORF_MESSAGE: &str = "No significant ORFs found (minimum 30bp)";

/// A single open reading frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenReadingFrame {
    /// Reading frame, 1-based (1, 2 or 3)
    pub frame: u8,
    /// 1-based position of the first base of the start codon
    pub start: usize,
    /// 1-based position of the last base of the stop codon
    pub end: usize,
    /// Length in bases, a multiple of 3
    pub length: usize,
    /// Bases from the start codon through the stop codon
    pub sequence: String,
}

/// One entry of the reported ORF list.
///
/// A report either lists real ORFs or carries a single `NotFound`
/// placeholder, never a mix of both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OrfEntry {
    Orf(OpenReadingFrame),
    NotFound { message: String },
}

impl OrfEntry {
    /// Returns the ORF if this entry is not the placeholder.
    pub fn as_orf(&self) -> Option<&OpenReadingFrame> {
        match self {
            OrfEntry::Orf(orf) => Some(orf),
            OrfEntry::NotFound { .. } => None,
        }
    }
}

/// Finds ORFs of at least `min_length` bases in frames 1, 2 and 3.
///
/// `sequence` must be uppercase. Results are ordered by frame, then by
/// start position.
pub fn find_orfs_with_min(sequence: &[u8], min_length: usize) -> Vec<OpenReadingFrame> {
    let mut orfs = Vec::new();

    for frame in 0..3 {
        let frame_codons: Vec<(usize, CodonKind)> = codons(sequence, frame)
            .map(|(pos, codon)| (pos, classify_codon(codon)))
            .collect();
        let next_stop = next_stops(&frame_codons);

        for (index, &(start, kind)) in frame_codons.iter().enumerate() {
            if kind != CodonKind::Start {
                continue;
            }

            let Some(stop) = next_stop[index + 1] else { continue };
            let end = stop + 3;
            let length = end - start;
            if length >= min_length {
                orfs.push(OpenReadingFrame {
                    frame: frame as u8 + 1,
                    start: start + 1,
                    end,
                    length,
                    sequence: String::from_utf8_lossy(&sequence[start..end]).into_owned(),
                });
            }
        }
    }

    orfs
}

/// Position of the first stop codon at or after each codon index of one
/// frame, plus a trailing `None` past the last codon.
fn next_stops(frame_codons: &[(usize, CodonKind)]) -> Vec<Option<usize>> {
    let mut next = vec![None; frame_codons.len() + 1];
    for (index, &(pos, kind)) in frame_codons.iter().enumerate().rev() {
        next[index] = if kind == CodonKind::Stop {
            Some(pos)
        } else {
            next[index + 1]
        };
    }
    next
}

/// Finds ORFs of at least [`MIN_ORF_LENGTH`] bases.
pub fn find_orfs(sequence: &[u8]) -> Vec<OpenReadingFrame> {
    find_orfs_with_min(sequence, MIN_ORF_LENGTH)
}

/// Lists ORFs as report entries, substituting the placeholder when none qualify.
pub fn orf_entries(sequence: &[u8]) -> Vec<OrfEntry> {
    let orfs = find_orfs(sequence);
    if orfs.is_empty() {
        vec![OrfEntry::NotFound {
            message: NO_ORF_MESSAGE.to_string(),
        }]
    } else {
        orfs.into_iter().map(OrfEntry::Orf).collect()
    }
}
