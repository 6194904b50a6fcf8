//! # mindtrx-core
//!
//! Scoring and classification for the MINDTRX Inner Mind Integration
//! Inventory (IMII v2), plus the result records, short codes and reports
//! built around it.
//!
//! ---
//!
//! ## Two axes, four quadrants, sixteen positions
//!
//! The inventory asks 27 questions on a 1–5 agreement scale. Questions 1–14
//! measure **communication** with the inner mind (raw 14–70); questions 15–27
//! measure **trust** in it (raw 13–65). Both raw sums are rescaled to 0–50.
//!
//! A score of 26 or more is "high". The two high/low splits give the quadrant:
//! Disengaged Mind, Skeptical Explorer, Faithful Seeker or Integrated
//! Alchemist. Each axis is further cut into four bands, and the band pair picks
//! one of four positions inside the quadrant. Every quadrant has three explicit
//! positions and a default for the band pairs the table leaves out, so the
//! classifier is total.
//!
//! ## The pipeline
//!
//! ```text
//! AnswerSet → RawScores → classify → Classification → ImiiResult
//!                                                          ↓
//!                          CodeGenerator → ResultCode → StoredResult
//!                                                          ↓
//!                                       ResultStore ← ResultService → Notifier
//! ```
//!
//! ## Module overview
//!
//! | Module | Key types | What it does |
//! |--------|-----------|--------------|
//! | [`questions`] | [`Question`], [`Section`] | The 27 questions and the answer scale |
//! | [`answers`] | [`AnswerSet`], [`Rating`], [`RawScores`] | Validated answers and raw sums |
//! | [`scoring`] | [`Classification`], [`Quadrant`], [`Position`], [`Band`] | Rescaling, banding and the position table |
//! | [`feedback`] | [`Feedback`] | Written feedback per quadrant and position |
//! | [`record`] | [`ImiiResult`], [`StoredResult`] | Timestamped result records |
//! | [`code`] | [`ResultCode`], [`CodeGenerator`] | 8-character lookup codes |
//! | [`store`] | [`ResultStore`], [`MemoryStore`], [`LocalCache`], [`FallbackStore`] | Result persistence |
//! | [`notify`] | [`Notifier`], [`EmailReport`] | Report rendering and delivery seam |
//! | [`config`] | [`MindtrxConfig`] | Base URL and SMTP settings |
//! | [`service`] | [`ResultService`] | Submit, look up and email results |
//! | [`error`] | [`AnswerError`], [`LookupError`], … | Error types |
//!
//! ## Example
//!
//! ```
//! use mindtrx_core::{classify, Position, Quadrant};
//!
//! let c = classify(42, 39);
//! assert_eq!((c.comm50, c.trust50), (30, 30));
//! assert_eq!(c.quadrant, Quadrant::IntegratedAlchemist);
//! assert_eq!(c.position, Position::GroundedMystic);
//! ```
//!
//! ## `no_std`
//!
//! The crate builds as `#![no_std]` + `alloc` with default features off. The
//! `std` feature (default) adds wall-clock timestamps, entropy-seeded code
//! generation and environment configuration. The `serde` feature (default)
//! derives serialisation for every record type. `python-ffi` builds the PyO3
//! extension module.
//!
//! ## License
//!
//! Business Source License 1.1. See LICENSE in the root directory.

#![cfg_attr(not(any(feature = "std", feature = "python-ffi")), no_std)]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

#[cfg(any(feature = "std", feature = "python-ffi"))]
extern crate std;

pub mod questions;
pub mod answers;
pub mod scoring;
pub mod feedback;
pub mod record;
pub mod code;
pub mod store;
pub mod notify;
pub mod config;
pub mod service;
pub mod error;

#[cfg(feature = "python-ffi")]
pub mod ffi;

pub use answers::{AnswerSet, QuestionId, Rating, RawScores};
pub use code::{AlphabetCodeGenerator, CodeGenerator, ResultCode};
pub use config::{MindtrxConfig, ReportConfig};
pub use error::{AnswerError, CodeError, LookupError, NotifyError, StoreError, SubmitError};
pub use feedback::{feedback_for, Feedback};
pub use notify::{Delivery, EmailAddress, EmailReport, Notifier, SimulatedNotifier};
pub use questions::{Question, Section, QUESTIONS, QUESTION_COUNT};
pub use record::{ImiiResult, StoredResult};
pub use scoring::{classify, Band, Classification, Position, Quadrant};
pub use service::{EmailStatus, ResultService, Submission};
pub use store::{FallbackStore, LocalCache, MemoryStore, ResultStore};
