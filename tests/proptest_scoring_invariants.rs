//! Property-based invariant tests for answer scoring and classification.
//!
//! 1. Raw sums of complete answer sets stay in 14–70 and 13–65.
//! 2. Normalized scores of complete answer sets stay in 0–50.
//! 3. Raising one answer never lowers either normalized score.
//! 4. The position decodes back to the quadrant and band pair.
//! 5. classify is total: no panics for any i32 pair.
//! 6. Missing answers are reported exactly.
//! 7. Result codes parse case-insensitively and reject foreign characters.
//! 8. Determinism: records for the same inputs differ only in timestamp.

use mindtrx_core::code::{CodeGenerator, CODE_ALPHABET, CODE_LEN};
use mindtrx_core::scoring::{classify, Band, NORMALIZED_MAX};
use mindtrx_core::{AlphabetCodeGenerator, AnswerError, AnswerSet, QuestionId, ResultCode};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn complete_ratings() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(1u8..=5, 27)
}

fn answer_set(ratings: &[u8]) -> AnswerSet {
    AnswerSet::from_pairs(ratings.iter().enumerate().map(|(i, &r)| (i as u8 + 1, r))).unwrap()
}

// ═════════════════════════════════════════════════════════════════════════
// 1–2. Ranges
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn raw_sums_in_range(ratings in complete_ratings()) {
        let raw = answer_set(&ratings).require_complete().unwrap();
        prop_assert!((14..=70).contains(&raw.comm_raw), "comm_raw={}", raw.comm_raw);
        prop_assert!((13..=65).contains(&raw.trust_raw), "trust_raw={}", raw.trust_raw);
    }

    #[test]
    fn normalized_in_range(ratings in complete_ratings()) {
        let c = answer_set(&ratings).raw_scores().classify();
        prop_assert!((0..=NORMALIZED_MAX).contains(&c.comm50));
        prop_assert!((0..=NORMALIZED_MAX).contains(&c.trust50));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Monotonicity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn raising_an_answer_never_lowers_scores(
        ratings in complete_ratings(),
        idx in 0usize..27,
    ) {
        prop_assume!(ratings[idx] < 5);
        let before = answer_set(&ratings).raw_scores().classify();

        let mut raised = ratings.clone();
        raised[idx] += 1;
        let after = answer_set(&raised).raw_scores().classify();

        prop_assert!(after.comm50 >= before.comm50);
        prop_assert!(after.trust50 >= before.trust50);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4–5. Decode consistency and totality
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn position_decodes_back(comm in 0i32..=70, trust in 0i32..=65) {
        let c = classify(comm, trust);
        prop_assert_eq!(c.position.quadrant(), c.quadrant);
        prop_assert_eq!(c.position.band_pair(), (c.comm_band, c.trust_band));
        prop_assert_eq!(c.comm_band, Band::from_score50(c.comm50));
    }

    #[test]
    fn classify_is_total(comm in any::<i32>(), trust in any::<i32>()) {
        let c = classify(comm, trust);
        prop_assert_eq!(c.position.quadrant(), c.quadrant);
        prop_assert_eq!((c.comm_raw, c.trust_raw), (comm, trust));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Missing answers
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn missing_answers_reported_exactly(
        ratings in complete_ratings(),
        drop in proptest::collection::btree_set(1u8..=27, 1..5),
    ) {
        let mut answers = answer_set(&ratings);
        for &id in &drop {
            answers.remove(QuestionId::new(id).unwrap());
        }
        let expected: Vec<u8> = drop.iter().copied().collect();
        prop_assert_eq!(answers.missing(), expected.clone());
        prop_assert_eq!(
            answers.require_complete(),
            Err(AnswerError::Incomplete { missing: expected })
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Result codes
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn generated_codes_parse_back(seed in any::<u64>()) {
        let mut generator = AlphabetCodeGenerator::seeded(seed);
        for _ in 0..16 {
            let code = generator.next_code();
            prop_assert_eq!(code.as_str().len(), CODE_LEN);
            prop_assert!(code.as_str().bytes().all(|b| CODE_ALPHABET.contains(&b)));
            let lower = code.as_str().to_ascii_lowercase();
            prop_assert_eq!(ResultCode::parse(&lower).unwrap(), code);
        }
    }

    #[test]
    fn ambiguous_characters_rejected(prefix in "[2-9A-HJ-NP-Z]{7}", bad in "[01IO]") {
        let input = format!("{}{}", prefix, bad);
        prop_assert!(ResultCode::parse(&input).is_err());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn same_inputs_differ_only_in_timestamp(
        comm in 0i32..=70,
        trust in 0i32..=65,
        t1 in any::<u64>(),
        t2 in any::<u64>(),
    ) {
        let a = classify(comm, trust).at(t1);
        let mut b = classify(comm, trust).at(t2);
        prop_assert_eq!(b.timestamp, t2);
        b.timestamp = a.timestamp;
        prop_assert_eq!(a, b);
    }
}
