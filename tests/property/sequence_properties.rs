use bianexus::rounding::round_to;
use bianexus::sequence::orf::find_orfs;
use bianexus::sequence::{complement, reverse_complement, OrfEntry, MIN_ORF_LENGTH};
use bianexus::SequenceReport;
use proptest::prelude::*;

// ── Complement ─────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn complement_is_an_involution(seq in "[ATGC]{4,200}") {
        let once = complement(&seq).unwrap();
        prop_assert_eq!(once.len(), seq.len());
        prop_assert_eq!(complement(&once).unwrap(), seq);
    }

    #[test]
    fn reverse_complement_is_an_involution(seq in "[ATGC]{4,200}") {
        let once = reverse_complement(&seq).unwrap();
        prop_assert_eq!(reverse_complement(&once).unwrap(), seq);
    }

    #[test]
    fn lowercase_input_is_accepted(seq in "[atgc]{4,200}") {
        let report = SequenceReport::analyze(&seq).unwrap();
        prop_assert_eq!(report.length, seq.len());
        prop_assert_eq!(report.complement, complement(&seq.to_uppercase()).unwrap());
    }
}

// ── Composition ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn counts_sum_to_length(seq in "[ATGC]{4,200}") {
        let report = SequenceReport::analyze(&seq).unwrap();
        prop_assert_eq!(report.composition.total(), seq.len());
    }

    #[test]
    fn percentages_sum_to_about_100(seq in "[ATGC]{4,200}") {
        let c = SequenceReport::analyze(&seq).unwrap().composition;
        let sum = c.a_pct + c.t_pct + c.g_pct + c.c_pct;
        prop_assert!((sum - 100.0).abs() <= 0.4, "percentages sum to {}", sum);
    }

    #[test]
    fn gc_content_matches_counts(seq in "[ATGC]{4,200}") {
        let report = SequenceReport::analyze(&seq).unwrap();
        let gc = seq.bytes().filter(|b| matches!(b, b'G' | b'C')).count();
        let expected = round_to(gc as f64 / seq.len() as f64 * 100.0, 2);
        prop_assert_eq!(report.gc_content, expected);
        prop_assert!((0.0..=100.0).contains(&report.gc_content));
    }
}

// ── Open reading frames ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn orfs_are_well_formed(seq in "[ATGC]{4,200}") {
        for orf in find_orfs(seq.as_bytes()) {
            prop_assert!((1..=3).contains(&orf.frame));
            prop_assert_eq!(orf.length % 3, 0);
            prop_assert!(orf.length >= MIN_ORF_LENGTH);
            prop_assert_eq!(orf.sequence.len(), orf.length);
            prop_assert_eq!(orf.end - orf.start + 1, orf.length);
            prop_assert_eq!((orf.start - 1) % 3, usize::from(orf.frame - 1));
            prop_assert_eq!(&seq[orf.start - 1..orf.end], orf.sequence.as_str());
            prop_assert!(orf.sequence.starts_with("ATG"));
            let stop = &orf.sequence[orf.length - 3..];
            prop_assert!(["TAA", "TAG", "TGA"].contains(&stop), "ends with {}", stop);
        }
    }

    #[test]
    fn report_has_orfs_or_one_placeholder(seq in "[ATGC]{4,200}") {
        let report = SequenceReport::analyze(&seq).unwrap();
        let placeholders = report
            .orfs
            .iter()
            .filter(|entry| matches!(entry, OrfEntry::NotFound { .. }))
            .count();
        if report.has_orfs() {
            prop_assert_eq!(placeholders, 0);
        } else {
            prop_assert_eq!(report.orfs.len(), 1);
            prop_assert_eq!(placeholders, 1);
        }
    }
}
