//! Result reports and the notifier seam.
//!
//! [`EmailReport::render`] turns a stored result into a subject, an HTML body
//! and a plain-text body. A [`Notifier`] delivers it. The transport itself
//! (SMTP or an HTTP mail API) lives outside this crate. [`SimulatedNotifier`]
//! stands in for it when no transport is configured.
//!
//! Delivery failures are never fatal: the service reports them alongside the
//! stored result instead of failing the request.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use tracing::info;

use crate::config::ReportConfig;
use crate::error::NotifyError;
use crate::record::StoredResult;

/// Subject line of every report.
pub const REPORT_SUBJECT: &str = "Your MINDTRX IMII Report";

// ─── EmailAddress ────────────────────────────────────────────────────────────

/// A destination address that passed a minimal structural check.
///
/// The check is loose: a non-empty local part, one `@`, and a
/// dotted domain, with no whitespace. Real validation is the transport's job.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate `input` (surrounding whitespace ignored).
    pub fn parse(input: &str) -> Result<Self, NotifyError> {
        let trimmed = input.trim();
        let invalid = || NotifyError::InvalidAddress(String::from(trimmed));

        if trimmed.chars().any(char::is_whitespace) {
            return Err(invalid());
        }
        let (local, domain) = trimmed.split_once('@').ok_or_else(invalid)?;
        let domain_ok = domain.contains('.')
            && !domain.starts_with('.')
            && !domain.ends_with('.')
            && !domain.contains('@');
        if local.is_empty() || !domain_ok {
            return Err(invalid());
        }
        Ok(Self(String::from(trimmed)))
    }

    /// The address text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EmailAddress({})", self.0)
    }
}

// ─── EmailReport ─────────────────────────────────────────────────────────────

/// A rendered report, ready for any transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailReport {
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub html: String,
    /// Plain-text body.
    pub text: String,
}

impl EmailReport {
    /// Render the report for `stored`.
    pub fn render(stored: &StoredResult, config: &ReportConfig) -> Self {
        let r = &stored.result;
        let code = stored.code.as_str();
        let link = config.results_link(&stored.code);

        let text = format!(
            "MINDTRX - Inner Mind Integration Inventory v2\n\
             Your Assessment Results\n\
             \n\
             Result Code: {code}\n\
             \n\
             SCORES:\n\
             Communication: {comm}/50\n\
             Trust: {trust}/50\n\
             \n\
             YOUR QUADRANT: {quadrant}\n\
             YOUR POSITION: {position}\n\
             \n\
             To view your complete results with detailed feedback and the interactive quadrant visualization, visit:\n\
             {link}\n\
             \n\
             Save your result code ({code}) to access your results anytime.\n\
             \n\
             ---\n\
             Powered by MINDTRX\n\
             Inner Mind Integration Inventory v2\n",
            comm = r.comm50,
            trust = r.trust50,
            quadrant = r.quadrant,
            position = r.position,
        );

        let html = format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="UTF-8"><title>Your MINDTRX IMII Report</title></head>
<body style="font-family: system-ui, sans-serif; line-height: 1.6; color: #333;">
  <div style="max-width: 600px; margin: 0 auto;">
    <h1 style="color: #667eea;">MINDTRX</h1>
    <p>Inner Mind Integration Inventory v2</p>
    <h2>Your Assessment Results</h2>
    <p>Your Result Code: <strong style="font-family: monospace; letter-spacing: 2px;">{code}</strong></p>
    <table style="width: 100%; text-align: center;">
      <tr><td>Communication</td><td>Trust</td></tr>
      <tr><td><strong>{comm}</strong>/50</td><td><strong>{trust}</strong>/50</td></tr>
    </table>
    <h3>Your Quadrant</h3>
    <p style="font-size: 20px; font-weight: 600;">{quadrant}</p>
    <h3>Your Position</h3>
    <p style="font-size: 18px; font-weight: 600;">{position}</p>
    <p><a href="{href}">View Full Results</a></p>
    <p style="color: #999; font-size: 14px;">Save your result code <strong>{code}</strong> to access your results anytime.</p>
    <p style="font-size: 12px; color: #999;">This email was sent because you requested your MINDTRX assessment results.</p>
  </div>
</body>
</html>
"#,
            code = escape_html(code),
            comm = r.comm50,
            trust = r.trust50,
            quadrant = escape_html(r.quadrant.label()),
            position = escape_html(r.position.label()),
            href = escape_html(&link),
        );

        Self {
            subject: String::from(REPORT_SUBJECT),
            html,
            text,
        }
    }
}

/// Escape the five HTML-significant characters.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

// ─── Notifier ────────────────────────────────────────────────────────────────

/// How a report left the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    /// Handed to a real transport.
    Sent,
    /// Logged only; no transport configured.
    Simulated,
}

/// Delivers rendered reports.
pub trait Notifier {
    /// Send `report` to `to`.
    fn send(&mut self, to: &EmailAddress, report: &EmailReport) -> Result<Delivery, NotifyError>;
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn send(&mut self, to: &EmailAddress, report: &EmailReport) -> Result<Delivery, NotifyError> {
        (**self).send(to, report)
    }
}

/// Notifier used when no transport is configured: logs and keeps an outbox.
#[derive(Clone, Debug, Default)]
pub struct SimulatedNotifier {
    outbox: Vec<(EmailAddress, EmailReport)>,
}

impl SimulatedNotifier {
    /// An empty outbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every report "sent" so far, oldest first.
    pub fn outbox(&self) -> &[(EmailAddress, EmailReport)] {
        &self.outbox
    }
}

impl Notifier for SimulatedNotifier {
    fn send(&mut self, to: &EmailAddress, report: &EmailReport) -> Result<Delivery, NotifyError> {
        info!(to = %to, subject = %report.subject, "email transport not configured, simulating send");
        self.outbox.push((to.clone(), report.clone()));
        Ok(Delivery::Simulated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{AnswerSet, Rating};
    use crate::code::ResultCode;

    fn stored() -> StoredResult {
        let answers = AnswerSet::uniform(Rating::new(3).unwrap());
        let result = answers.raw_scores().classify().at(0);
        StoredResult::new(result, ResultCode::parse("K7M2Q9XZ").unwrap(), answers)
    }

    #[test]
    fn test_address_accepts_plain() {
        let addr = EmailAddress::parse("  person@example.com ").unwrap();
        assert_eq!(addr.as_str(), "person@example.com");
    }

    #[test]
    fn test_address_rejects_malformed() {
        for bad in ["", "person", "@example.com", "person@", "person@example", "a b@example.com", "a@b@c.com", "a@.com", "a@example."] {
            assert!(EmailAddress::parse(bad).is_err(), "{:?} accepted", bad);
        }
    }

    #[test]
    fn test_text_report_contents() {
        let report = EmailReport::render(&stored(), &ReportConfig::default());
        assert_eq!(report.subject, REPORT_SUBJECT);
        assert!(report.text.contains("Result Code: K7M2Q9XZ"));
        assert!(report.text.contains("Communication: 30/50"));
        assert!(report.text.contains("Trust: 30/50"));
        assert!(report.text.contains("YOUR QUADRANT: Integrated Alchemist"));
        assert!(report.text.contains("YOUR POSITION: Grounded Mystic"));
        assert!(report.text.contains("http://localhost:3000/results?code=K7M2Q9XZ"));
    }

    #[test]
    fn test_html_report_escapes_link() {
        let config = ReportConfig {
            base_url: String::from("https://example.org/?a=1&b=\"2\""),
        };
        let report = EmailReport::render(&stored(), &config);
        assert!(report.html.contains("a=1&amp;b=&quot;2&quot;"));
        assert!(!report.html.contains("b=\"2\""));
        assert!(report.html.contains("Grounded Mystic"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<a href='x'>&</a>"), "&lt;a href=&#39;x&#39;&gt;&amp;&lt;/a&gt;");
    }

    #[test]
    fn test_simulated_notifier_records_outbox() {
        let mut notifier = SimulatedNotifier::new();
        let to = EmailAddress::parse("person@example.com").unwrap();
        let report = EmailReport::render(&stored(), &ReportConfig::default());
        assert_eq!(notifier.send(&to, &report), Ok(Delivery::Simulated));
        assert_eq!(notifier.outbox().len(), 1);
        assert_eq!(notifier.outbox()[0].0, to);
    }
}
