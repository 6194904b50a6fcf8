//! Result records: the timestamped classification and its persisted form.
//!
//! # Wire shape
//!
//! With the `serde` feature a [`StoredResult`] serializes flat, in camelCase:
//!
//! ```text
//! {
//!   "comm50": 30, "trust50": 30,
//!   "quadrant": "Integrated Alchemist", "position": "Grounded Mystic",
//!   "commBand": "highLow", "trustBand": "highLow",
//!   "commRaw": 42, "trustRaw": 39,
//!   "timestamp": 1760000000000, "version": "v2",
//!   "code": "K7M2Q9XZ",
//!   "answers": { "1": 3, "2": 3, ... }
//! }
//! ```
//!
//! Field names match the records already written by earlier deployments, so
//! existing data loads unchanged.

use crate::answers::{AnswerSet, RawScores};
use crate::code::ResultCode;
use crate::scoring::{classify, Band, Classification, Position, Quadrant};

/// Format version written into every new record.
pub const RESULT_VERSION: ResultVersion = ResultVersion::V2;

/// Scoring model version tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResultVersion {
    /// IMII v2: 27 items, 0–50 scale, cutoff 26.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "v2"))]
    V2,
}

impl ResultVersion {
    /// Wire label, `"v2"`.
    pub fn label(&self) -> &'static str {
        match self {
            ResultVersion::V2 => "v2",
        }
    }
}

/// A classification stamped with the time it was computed.
///
/// Immutable by convention once built: nothing in the crate mutates a record
/// after [`Classification::at`] returns it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ImiiResult {
    /// Normalized communication score.
    pub comm50: i32,
    /// Normalized trust score.
    pub trust50: i32,
    /// Quadrant label.
    pub quadrant: Quadrant,
    /// Position label.
    pub position: Position,
    /// Band of `comm50`.
    pub comm_band: Band,
    /// Band of `trust50`.
    pub trust_band: Band,
    /// Raw communication score.
    pub comm_raw: i32,
    /// Raw trust score.
    pub trust_raw: i32,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
    /// Scoring model version.
    pub version: ResultVersion,
}

impl Classification {
    /// Stamp this classification with `timestamp` (ms since the Unix epoch).
    pub fn at(self, timestamp: u64) -> ImiiResult {
        ImiiResult {
            comm50: self.comm50,
            trust50: self.trust50,
            quadrant: self.quadrant,
            position: self.position,
            comm_band: self.comm_band,
            trust_band: self.trust_band,
            comm_raw: self.comm_raw,
            trust_raw: self.trust_raw,
            timestamp,
            version: RESULT_VERSION,
        }
    }
}

impl ImiiResult {
    /// The classification part, without timestamp or version.
    pub fn classification(&self) -> Classification {
        Classification {
            comm50: self.comm50,
            trust50: self.trust50,
            quadrant: self.quadrant,
            position: self.position,
            comm_band: self.comm_band,
            trust_band: self.trust_band,
            comm_raw: self.comm_raw,
            trust_raw: self.trust_raw,
        }
    }

    /// Raw scores this result was computed from.
    pub fn raw_scores(&self) -> RawScores {
        RawScores {
            comm_raw: self.comm_raw,
            trust_raw: self.trust_raw,
        }
    }

    /// `true` if re-running the classifier on the raw scores reproduces
    /// every derived field.
    pub fn is_consistent(&self) -> bool {
        classify(self.comm_raw, self.trust_raw) == self.classification()
    }
}

/// Milliseconds since the Unix epoch, or 0 if the clock is before it.
#[cfg(feature = "std")]
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Classify and stamp with the current wall-clock time.
#[cfg(feature = "std")]
pub fn classify_now(comm_raw: i32, trust_raw: i32) -> ImiiResult {
    classify(comm_raw, trust_raw).at(now_ms())
}

/// A result as persisted: the record plus its code and the answers behind it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoredResult {
    /// The classification record (flattened on the wire).
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub result: ImiiResult,
    /// Retrieval code.
    pub code: ResultCode,
    /// The answers that produced `result`.
    pub answers: AnswerSet,
}

impl StoredResult {
    /// Bundle a result with its code and answers.
    pub fn new(result: ImiiResult, code: ResultCode, answers: AnswerSet) -> Self {
        Self {
            result,
            code,
            answers,
        }
    }

    /// `true` if the derived fields match the raw scores and, when answers
    /// are present, the raw scores match the answers.
    ///
    /// Use this to screen records loaded from storage someone else wrote.
    pub fn is_consistent(&self) -> bool {
        self.result.is_consistent()
            && (self.answers.is_empty() || self.answers.raw_scores() == self.result.raw_scores())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{QuestionId, Rating};

    fn code() -> ResultCode {
        ResultCode::parse("K7M2Q9XZ").unwrap()
    }

    #[test]
    fn test_at_copies_classification() {
        let c = classify(42, 39);
        let r = c.at(1_700_000_000_000);
        assert_eq!(r.classification(), c);
        assert_eq!(r.timestamp, 1_700_000_000_000);
        assert_eq!(r.version, ResultVersion::V2);
        assert_eq!(r.version.label(), "v2");
    }

    #[test]
    fn test_same_inputs_differ_only_in_timestamp() {
        let a = classify(50, 20).at(1);
        let mut b = classify(50, 20).at(2);
        assert_ne!(a, b);
        b.timestamp = 1;
        assert_eq!(a, b);
    }

    #[test]
    fn test_tampered_result_is_inconsistent() {
        let mut r = classify(14, 13).at(0);
        assert!(r.is_consistent());
        r.position = Position::EmbodiedTransformer;
        assert!(!r.is_consistent());
    }

    #[test]
    fn test_stored_result_checks_answers() {
        let answers = AnswerSet::uniform(Rating::new(3).unwrap());
        let raw = answers.raw_scores();
        let result = raw.classify().at(0);
        let mut stored = StoredResult::new(result, code(), answers);
        assert!(stored.is_consistent());

        stored.answers.set(QuestionId::new(1).unwrap(), Rating::new(5).unwrap());
        assert!(!stored.is_consistent());
    }

    #[test]
    fn test_stored_result_without_answers_is_consistent() {
        let stored = StoredResult::new(classify(70, 65).at(0), code(), AnswerSet::new());
        assert!(stored.is_consistent());
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_classify_now_is_stamped() {
        let r = classify_now(14, 13);
        assert!(r.timestamp > 0);
        assert_eq!(r.position, Position::DetachedObserver);
    }
}
