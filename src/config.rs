//! Runtime configuration: public base URL and optional SMTP settings.
//!
//! Every setting has a default, so `MindtrxConfig::default()` works with no
//! environment at all. SMTP stays off unless all of host, port, user and
//! password are present; without it reports go to the
//! [`SimulatedNotifier`](crate::notify::SimulatedNotifier).
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `MINDTRX_BASE_URL` | `http://localhost:3000` | Origin used in result links |
//! | `SMTP_HOST` | (none) | SMTP relay host |
//! | `SMTP_PORT` | `587` | SMTP relay port |
//! | `SMTP_USER` | (none) | SMTP login |
//! | `SMTP_PASS` | (none) | SMTP password |
//! | `SMTP_FROM` | `SMTP_USER` | Sender address |

use alloc::format;
use alloc::string::String;
use core::fmt;

use tracing::warn;

use crate::code::ResultCode;

/// Base URL used when `MINDTRX_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// SMTP port used when `SMTP_PORT` is unset or unparseable.
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// SMTP relay credentials.
///
/// The crate ships no mail transport. These settings are for a transport
/// implemented behind [`Notifier`](crate::notify::Notifier), which should
/// report [`Delivery::Sent`](crate::notify::Delivery::Sent). When they are
/// absent, callers use [`SimulatedNotifier`](crate::notify::SimulatedNotifier).
#[derive(Clone, PartialEq, Eq)]
pub struct SmtpSettings {
    /// Relay host name.
    pub host: String,
    /// Relay port (STARTTLS on 587 by default).
    pub port: u16,
    /// Login user.
    pub user: String,
    /// Login password. Redacted from `Debug` output.
    pub password: String,
    /// Sender address.
    pub from: String,
}

impl fmt::Debug for SmtpSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("from", &self.from)
            .finish()
    }
}

/// Top-level configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MindtrxConfig {
    /// Public origin of the results page, without a trailing slash.
    pub base_url: String,
    /// SMTP settings; `None` means reports are simulated.
    pub smtp: Option<SmtpSettings>,
}

impl Default for MindtrxConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            smtp: None,
        }
    }
}

impl MindtrxConfig {
    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = get("MINDTRX_BASE_URL")
            .map(|url| String::from(url.trim().trim_end_matches('/')))
            .unwrap_or_else(|| String::from(DEFAULT_BASE_URL));

        let host = get("SMTP_HOST");
        let port = get("SMTP_PORT");
        let user = get("SMTP_USER");
        let password = get("SMTP_PASS");

        let smtp = match (host, port, user, password) {
            (Some(host), Some(port), Some(user), Some(password)) => {
                let port = port.trim().parse::<u16>().unwrap_or_else(|_| {
                    warn!(value = %port, "SMTP_PORT is not a valid port, using {}", DEFAULT_SMTP_PORT);
                    DEFAULT_SMTP_PORT
                });
                let from = get("SMTP_FROM").unwrap_or_else(|| user.clone());
                Some(SmtpSettings {
                    host,
                    port,
                    user,
                    password,
                    from,
                })
            }
            (None, None, None, None) => None,
            _ => {
                warn!("incomplete SMTP settings (need SMTP_HOST, SMTP_PORT, SMTP_USER, SMTP_PASS); email sending is simulated");
                None
            }
        };

        Self { base_url, smtp }
    }

    /// Read configuration from the process environment.
    #[cfg(feature = "std")]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Settings needed to render reports.
    pub fn report(&self) -> ReportConfig {
        ReportConfig {
            base_url: self.base_url.clone(),
        }
    }
}

/// Settings used when rendering a report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportConfig {
    /// Public origin of the results page.
    pub base_url: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        MindtrxConfig::default().report()
    }
}

impl ReportConfig {
    /// Deep link to the results page for `code`.
    pub fn results_link(&self, code: &ResultCode) -> String {
        format!("{}/results?code={}", self.base_url, code)
    }
}
