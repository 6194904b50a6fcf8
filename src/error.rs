//! Error types for every fallible boundary in the crate.
//!
//! The classifier itself has no error path. Errors arise only where untrusted
//! input enters (answers, result codes, email addresses) or where I/O
//! collaborators (stores, notifiers) can fail.

use alloc::string::String;
use alloc::vec::Vec;

use thiserror::Error;

use crate::code::ResultCode;

/// Invalid or incomplete quiz answers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerError {
    /// Question id outside 1–27.
    #[error("question id {0} is outside 1-27")]
    QuestionOutOfRange(u8),

    /// Rating outside the 1–5 Likert scale.
    #[error("rating {0} is outside 1-5")]
    RatingOutOfRange(u8),

    /// Not every question has been answered.
    #[error("answer set is incomplete: {count} question(s) unanswered", count = .missing.len())]
    Incomplete {
        /// Unanswered question ids, ascending.
        missing: Vec<u8>,
    },
}

/// A string that is not a well-formed result code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    /// Wrong number of characters.
    #[error("result code must be {expected} characters, got {found}")]
    Length {
        /// Required length.
        expected: usize,
        /// Length of the rejected input.
        found: usize,
    },

    /// Character outside the result-code alphabet.
    #[error("result code contains invalid character {0:?}")]
    Character(char),
}

/// Result store failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A result is already stored under this code. Stored results are immutable.
    #[error("a result is already stored under code {0}")]
    Duplicate(ResultCode),

    /// The backing store could not be reached.
    #[error("result store unavailable: {0}")]
    Unavailable(String),

    /// Persisted data could not be encoded or decoded.
    #[error("result store serialization failed: {0}")]
    Serialization(String),
}

/// Notifier failure. Never fatal to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotifyError {
    /// Destination address failed the structural check.
    #[error("invalid email address {0:?}")]
    InvalidAddress(String),

    /// The transport rejected or failed to deliver the message.
    #[error("email transport failed: {0}")]
    Transport(String),
}

/// Failure to retrieve a stored result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The supplied code is not a well-formed result code.
    #[error(transparent)]
    InvalidCode(#[from] CodeError),

    /// No result is stored under this code.
    #[error("no result found for code {0}")]
    NotFound(ResultCode),

    /// The store failed while looking the code up.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Failure to turn an answer set into a stored result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The answer set was rejected at the aggregation boundary.
    #[error(transparent)]
    Answers(#[from] AnswerError),

    /// Every generated code collided with an existing result.
    #[error("could not find an unused result code after {attempts} attempts")]
    CodeSpace {
        /// Number of codes tried.
        attempts: usize,
    },
}
