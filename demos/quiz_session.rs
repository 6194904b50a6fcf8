//! # IMII quiz session
//!
//! Walks one participant through the inventory: answers saved as progress,
//! submission, lookup by code (including a lowercase code typed by hand), the
//! emailed report and a cache snapshot written as JSON.
//!
//! ```bash
//! RUST_LOG=mindtrx_core=debug cargo run --example quiz_session
//! ```

use std::io;

use mindtrx_core::store::ResultStore;
use mindtrx_core::{
    feedback_for, AlphabetCodeGenerator, AnswerSet, EmailStatus, FallbackStore, LocalCache,
    MemoryStore, MindtrxConfig, QuestionId, Rating, ResultService, SimulatedNotifier, QUESTIONS,
};
use tracing_subscriber::{fmt, EnvFilter};

// ── Answers ──────────────────────────────────────────────────────────────────

/// A participant who practises a lot but is unsure the practice works.
fn participant_answer(id: QuestionId) -> Rating {
    let n = id.get();
    let value = if n <= 14 { 4 + n % 2 } else { 1 + n % 3 };
    Rating::new(value).expect("answers stay on the 1-5 scale")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_writer(io::stderr).with_env_filter(filter).init();

    let config = MindtrxConfig::from_env();
    println!("Results are linked under {}", config.base_url);
    if config.smtp.is_none() {
        println!("SMTP is not configured; reports are simulated.");
    }

    // ── Answer, saving progress after each question ─────────────────────────

    let mut cache = LocalCache::new();
    let mut answers = AnswerSet::new();
    while let Some(id) = answers.next_unanswered() {
        answers.set(id, participant_answer(id));
        cache.save_progress(&answers);
        if id.get() % 9 == 0 {
            println!("  {:>3.0}% answered", answers.progress() * 100.0);
        }
    }
    println!("Answered all {} questions.", QUESTIONS.len());

    // ── Submit ──────────────────────────────────────────────────────────────

    let store = FallbackStore::new(MemoryStore::new(), cache);
    let mut service = ResultService::new(
        store,
        AlphabetCodeGenerator::from_entropy(),
        SimulatedNotifier::new(),
        config,
    );

    let submission = service.submit(&answers, mindtrx_core::record::now_ms())?;
    let stored = &submission.stored;
    let r = &stored.result;
    let fb = feedback_for(&r.classification());

    println!();
    println!("Result code:   {}", stored.code);
    println!("Communication: {}/50 ({} raw, {})", r.comm50, r.comm_raw, r.comm_band);
    println!("Trust:         {}/50 ({} raw, {})", r.trust50, r.trust_raw, r.trust_band);
    println!("Quadrant:      {}", r.quadrant);
    println!("               {}", fb.quadrant);
    println!("Position:      {}", r.position);
    println!("               {}", fb.position.short);
    println!("Persisted:     {}", submission.persisted);

    // ── Look up ─────────────────────────────────────────────────────────────

    let typed = stored.code.as_str().to_ascii_lowercase();
    let found = service.lookup(&format!("  {typed} "))?;
    assert_eq!(&found, stored);
    println!();
    println!("Lookup of {typed:?} found {}", found.result.position);

    // ── Email ───────────────────────────────────────────────────────────────

    let code = stored.code.clone();
    match service.email_result("participant@example.com", code.as_str())? {
        EmailStatus::Delivered(delivery) => println!("Report delivery: {delivery:?}"),
        EmailStatus::Failed(err) => println!("Report not sent: {err}"),
    }
    if let Some((_, report)) = service.notifier().outbox().last() {
        println!();
        println!("{}", report.subject);
        println!("{}", report.text);
    }

    // ── Local snapshot ──────────────────────────────────────────────────────

    let mut local = service.store().local().clone();
    local.clear_progress();
    assert!(local.contains(&code)?);
    let json = serde_json::to_string_pretty(&local.snapshot())?;
    println!("Local cache snapshot ({} bytes):", json.len());
    println!("{json}");

    Ok(())
}
