/*
 * MINDTRX Inner Mind Integration Inventory (IMII v2).
 *
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Validated answer sets and raw-score aggregation.
//!
//! - [`QuestionId`]: an id in 1–27.
//! - [`Rating`]: a Likert rating in 1–5.
//! - [`AnswerSet`]: ordered `QuestionId → Rating` map; may be partial while the
//!   quiz is in progress.
//! - [`RawScores`]: `comm_raw` (ids 1–14) and `trust_raw` (ids 15–27).
//!
//! # Invariants
//!
//! - Every stored id and rating is in range; untrusted input goes through
//!   [`AnswerSet::from_pairs`] or the serde `try_from` hooks.
//! - Aggregation treats a missing id as 0. Completeness is enforced only by
//!   [`AnswerSet::require_complete`], before classification.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::error::AnswerError;
use crate::questions::{question, Question, Section, QUESTION_COUNT};
use crate::scoring::{classify, Classification};

// ─── QuestionId ──────────────────────────────────────────────────────────────

/// A question id in 1–27.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct QuestionId(u8);

impl QuestionId {
    /// Validate a raw id.
    pub fn new(id: u8) -> Result<Self, AnswerError> {
        if (1..=QUESTION_COUNT as u8).contains(&id) {
            Ok(Self(id))
        } else {
            Err(AnswerError::QuestionOutOfRange(id))
        }
    }

    /// All 27 ids in ascending order.
    pub fn all() -> impl Iterator<Item = QuestionId> {
        (1..=QUESTION_COUNT as u8).map(QuestionId)
    }

    /// The raw id.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Sub-score this question feeds.
    pub fn section(self) -> Section {
        if Section::Communication.question_ids().contains(&self.0) {
            Section::Communication
        } else {
            Section::Trust
        }
    }

    /// Catalog entry for this id.
    pub fn question(self) -> Option<&'static Question> {
        question(self.0)
    }
}

impl TryFrom<u8> for QuestionId {
    type Error = AnswerError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<QuestionId> for u8 {
    fn from(id: QuestionId) -> Self {
        id.0
    }
}

// ─── Rating ──────────────────────────────────────────────────────────────────

/// A Likert rating in 1–5 (see [`crate::questions::SCALE_LABELS`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct Rating(u8);

impl Rating {
    /// Lowest rating ("Rarely/Never true").
    pub const MIN: Rating = Rating(1);
    /// Highest rating ("Very true / Always true").
    pub const MAX: Rating = Rating(5);

    /// Validate a raw rating.
    pub fn new(value: u8) -> Result<Self, AnswerError> {
        if (1..=5).contains(&value) {
            Ok(Self(value))
        } else {
            Err(AnswerError::RatingOutOfRange(value))
        }
    }

    /// The raw rating.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Scale label for this rating.
    pub fn label(self) -> &'static str {
        crate::questions::SCALE_LABELS[usize::from(self.0 - 1)]
    }
}

impl TryFrom<u8> for Rating {
    type Error = AnswerError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(r: Rating) -> Self {
        r.0
    }
}

// ─── RawScores ───────────────────────────────────────────────────────────────

/// Summed ratings per section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct RawScores {
    /// Sum of ratings for ids 1–14 (14–70 when complete).
    pub comm_raw: i32,
    /// Sum of ratings for ids 15–27 (13–65 when complete).
    pub trust_raw: i32,
}

impl RawScores {
    /// Run the classifier on these scores.
    pub fn classify(&self) -> Classification {
        classify(self.comm_raw, self.trust_raw)
    }
}

// ─── AnswerSet ───────────────────────────────────────────────────────────────

/// Answers keyed by question id, kept in id order.
///
/// ```rust
/// use mindtrx_core::answers::{AnswerSet, Rating};
///
/// let answers = AnswerSet::uniform(Rating::new(3).unwrap());
/// let raw = answers.require_complete().unwrap();
/// assert_eq!((raw.comm_raw, raw.trust_raw), (42, 39));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct AnswerSet {
    ratings: BTreeMap<QuestionId, Rating>,
}

impl AnswerSet {
    /// An empty answer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// A complete set with every question rated `rating`.
    pub fn uniform(rating: Rating) -> Self {
        Self {
            ratings: QuestionId::all().map(|id| (id, rating)).collect(),
        }
    }

    /// Build from raw `(id, rating)` pairs, validating each.
    ///
    /// Later pairs overwrite earlier ones for the same id.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, AnswerError>
    where
        I: IntoIterator<Item = (u8, u8)>,
    {
        let mut set = Self::new();
        for (id, rating) in pairs {
            set.set(QuestionId::new(id)?, Rating::new(rating)?);
        }
        Ok(set)
    }

    /// Record an answer, returning the rating it replaced.
    pub fn set(&mut self, id: QuestionId, rating: Rating) -> Option<Rating> {
        self.ratings.insert(id, rating)
    }

    /// Clear an answer.
    pub fn remove(&mut self, id: QuestionId) -> Option<Rating> {
        self.ratings.remove(&id)
    }

    /// Rating for `id`, if answered.
    pub fn get(&self, id: QuestionId) -> Option<Rating> {
        self.ratings.get(&id).copied()
    }

    /// Number of answered questions.
    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    /// `true` if nothing has been answered.
    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    /// `true` once all 27 questions are answered.
    pub fn is_complete(&self) -> bool {
        self.ratings.len() == QUESTION_COUNT
    }

    /// Unanswered ids, ascending.
    pub fn missing(&self) -> Vec<u8> {
        QuestionId::all()
            .filter(|id| !self.ratings.contains_key(id))
            .map(QuestionId::get)
            .collect()
    }

    /// First unanswered question, if any.
    pub fn next_unanswered(&self) -> Option<QuestionId> {
        QuestionId::all().find(|id| !self.ratings.contains_key(id))
    }

    /// Fraction of questions answered, in [0.0, 1.0].
    pub fn progress(&self) -> f32 {
        self.ratings.len() as f32 / QUESTION_COUNT as f32
    }

    /// Answers in id order.
    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, Rating)> + '_ {
        self.ratings.iter().map(|(&id, &r)| (id, r))
    }

    /// Sum ratings per section. Missing ids contribute 0.
    pub fn raw_scores(&self) -> RawScores {
        self.iter().fold(RawScores::default(), |mut acc, (id, rating)| {
            let v = i32::from(rating.get());
            match id.section() {
                Section::Communication => acc.comm_raw += v,
                Section::Trust => acc.trust_raw += v,
            }
            acc
        })
    }

    /// Raw scores of a complete set; rejects a partial one.
    pub fn require_complete(&self) -> Result<RawScores, AnswerError> {
        if self.is_complete() {
            Ok(self.raw_scores())
        } else {
            Err(AnswerError::Incomplete {
                missing: self.missing(),
            })
        }
    }
}

impl FromIterator<(QuestionId, Rating)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (QuestionId, Rating)>>(iter: T) -> Self {
        Self {
            ratings: iter.into_iter().collect(),
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn rating(v: u8) -> Rating {
        Rating::new(v).unwrap()
    }

    fn qid(v: u8) -> QuestionId {
        QuestionId::new(v).unwrap()
    }

    #[test]
    fn test_question_id_bounds() {
        assert_eq!(QuestionId::new(0), Err(AnswerError::QuestionOutOfRange(0)));
        assert_eq!(QuestionId::new(28), Err(AnswerError::QuestionOutOfRange(28)));
        assert!(QuestionId::new(1).is_ok());
        assert!(QuestionId::new(27).is_ok());
    }

    #[test]
    fn test_rating_bounds() {
        assert_eq!(Rating::new(0), Err(AnswerError::RatingOutOfRange(0)));
        assert_eq!(Rating::new(6), Err(AnswerError::RatingOutOfRange(6)));
        assert_eq!(rating(1).label(), "Rarely/Never true");
        assert_eq!(rating(5).label(), "Very true / Always true");
    }

    #[test]
    fn test_section_split() {
        assert_eq!(qid(14).section(), Section::Communication);
        assert_eq!(qid(15).section(), Section::Trust);
    }

    #[test]
    fn test_uniform_three_aggregates() {
        let raw = AnswerSet::uniform(rating(3)).raw_scores();
        assert_eq!(raw, RawScores { comm_raw: 42, trust_raw: 39 });
    }

    #[test]
    fn test_uniform_extremes() {
        let low = AnswerSet::uniform(Rating::MIN).raw_scores();
        assert_eq!((low.comm_raw, low.trust_raw), (14, 13));
        let high = AnswerSet::uniform(Rating::MAX).raw_scores();
        assert_eq!((high.comm_raw, high.trust_raw), (70, 65));
    }

    #[test]
    fn test_missing_ids_count_as_zero() {
        let set = AnswerSet::from_pairs([(1, 5), (2, 4), (20, 2)]).unwrap();
        assert_eq!(set.raw_scores(), RawScores { comm_raw: 9, trust_raw: 2 });
        assert!(!set.is_complete());
    }

    #[test]
    fn test_require_complete_lists_missing() {
        let mut set = AnswerSet::uniform(rating(2));
        set.remove(qid(4));
        set.remove(qid(27));
        assert_eq!(
            set.require_complete(),
            Err(AnswerError::Incomplete { missing: vec![4, 27] })
        );
        assert_eq!(set.next_unanswered(), Some(qid(4)));
    }

    #[test]
    fn test_from_pairs_rejects_bad_entries() {
        assert_eq!(
            AnswerSet::from_pairs([(1, 3), (30, 3)]),
            Err(AnswerError::QuestionOutOfRange(30))
        );
        assert_eq!(
            AnswerSet::from_pairs([(1, 9)]),
            Err(AnswerError::RatingOutOfRange(9))
        );
    }

    #[test]
    fn test_set_overwrites() {
        let mut set = AnswerSet::new();
        assert_eq!(set.set(qid(7), rating(2)), None);
        assert_eq!(set.set(qid(7), rating(5)), Some(rating(2)));
        assert_eq!(set.get(qid(7)), Some(rating(5)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_progress_fraction() {
        let mut set = AnswerSet::new();
        assert_eq!(set.progress(), 0.0);
        assert_eq!(set.next_unanswered(), Some(qid(1)));
        for id in QuestionId::all() {
            set.set(id, rating(1));
        }
        assert!((set.progress() - 1.0).abs() < f32::EPSILON);
        assert_eq!(set.next_unanswered(), None);
        assert!(set.missing().is_empty());
    }
}
