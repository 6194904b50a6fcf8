//! The result workflow: submit answers, look results up, email reports.
//!
//! ```text
//! AnswerSet ──require_complete──▶ RawScores ──classify──▶ ImiiResult
//!                                                             │
//!                        CodeGenerator ──next_code──▶ ResultCode
//!                                                             ▼
//!                                          ResultStore::put(StoredResult)
//! ```
//!
//! Only an incomplete answer set or an exhausted code space fails a
//! submission. A store outage is logged and reported through
//! [`Submission::persisted`]. A notifier failure is reported through
//! [`EmailStatus::Failed`].

use tracing::{debug, info, warn};

use crate::answers::AnswerSet;
use crate::code::{CodeGenerator, ResultCode};
use crate::config::MindtrxConfig;
use crate::error::{LookupError, NotifyError, SubmitError};
use crate::notify::{Delivery, EmailAddress, EmailReport, Notifier};
use crate::record::StoredResult;
use crate::store::ResultStore;

/// Codes tried before a submission gives up on finding an unused one.
pub const MAX_CODE_ATTEMPTS: usize = 8;

/// Outcome of a successful submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    /// The stored result, including its code.
    pub stored: StoredResult,
    /// `false` if the store rejected the write; the result exists only here.
    pub persisted: bool,
}

/// Outcome of an email request for an existing result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EmailStatus {
    /// The notifier accepted the report.
    Delivered(Delivery),
    /// The address was invalid or the notifier failed.
    Failed(NotifyError),
}

/// Submit, look up and email results against injected collaborators.
#[derive(Debug)]
pub struct ResultService<S, G, N> {
    store: S,
    codes: G,
    notifier: N,
    config: MindtrxConfig,
}

impl<S, G, N> ResultService<S, G, N>
where
    S: ResultStore,
    G: CodeGenerator,
    N: Notifier,
{
    /// Wire a service from its collaborators.
    pub fn new(store: S, codes: G, notifier: N, config: MindtrxConfig) -> Self {
        Self {
            store,
            codes,
            notifier,
            config,
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The underlying notifier.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Active configuration.
    pub fn config(&self) -> &MindtrxConfig {
        &self.config
    }

    /// Score and store a complete answer set.
    ///
    /// `timestamp` is milliseconds since the Unix epoch.
    pub fn submit(&mut self, answers: &AnswerSet, timestamp: u64) -> Result<Submission, SubmitError> {
        let raw = answers.require_complete()?;
        let result = raw.classify().at(timestamp);
        debug!(
            comm50 = result.comm50,
            trust50 = result.trust50,
            quadrant = %result.quadrant,
            position = %result.position,
            "classified answers"
        );

        let code = self.fresh_code()?;
        let stored = StoredResult::new(result, code.clone(), answers.clone());

        let persisted = match self.store.put(code.clone(), stored.clone()) {
            Ok(()) => {
                info!(%code, position = %stored.result.position, "stored result");
                true
            }
            Err(err) => {
                warn!(%code, error = %err, "could not persist result");
                false
            }
        };

        Ok(Submission { stored, persisted })
    }

    /// Draw codes until one is not already in the store.
    ///
    /// If the store cannot answer `contains`, the drawn code is used as is.
    fn fresh_code(&mut self) -> Result<ResultCode, SubmitError> {
        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let code = self.codes.next_code();
            match self.store.contains(&code) {
                Ok(false) => return Ok(code),
                Ok(true) => debug!(%code, attempt, "result code collision"),
                Err(err) => {
                    warn!(%code, error = %err, "could not check result code for collisions");
                    return Ok(code);
                }
            }
        }
        Err(SubmitError::CodeSpace {
            attempts: MAX_CODE_ATTEMPTS,
        })
    }

    /// Fetch a stored result by user-supplied code.
    pub fn lookup(&self, code: &str) -> Result<StoredResult, LookupError> {
        let code = ResultCode::parse(code)?;
        self.store
            .get(&code)?
            .ok_or(LookupError::NotFound(code))
    }

    /// Email the report for an existing result.
    ///
    /// Lookup failures are errors. Delivery failures are not: they come back
    /// as [`EmailStatus::Failed`].
    pub fn email_result(&mut self, to: &str, code: &str) -> Result<EmailStatus, LookupError> {
        let stored = self.lookup(code)?;
        let address = match EmailAddress::parse(to) {
            Ok(address) => address,
            Err(err) => return Ok(EmailStatus::Failed(err)),
        };

        let report = EmailReport::render(&stored, &self.config.report());
        match self.notifier.send(&address, &report) {
            Ok(delivery) => {
                info!(code = %stored.code, ?delivery, "report delivered");
                Ok(EmailStatus::Delivered(delivery))
            }
            Err(err) => {
                warn!(code = %stored.code, error = %err, "report delivery failed");
                Ok(EmailStatus::Failed(err))
            }
        }
    }
}
