//! Console Logger
//!
//! This example builds a leveled logger out of an action chain.
//!
//! Key concepts:
//! - Action chains run handlers for their side effects
//! - Fan-out propagation: a message reaches its level's appender and the
//!   catch-all default
//! - Short-circuit propagation as the alternative policy
//! - Null-safe guards over optional events
//!
//! Run with: RUST_LOG=console_logger=debug cargo run --example console_logger

use chrono::{DateTime, Utc};
use responsibility::{guard, ActionChain, Guard, Propagation};
use std::fmt;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Level {
    Debug,
    Info,
    Warning,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug)]
struct LogEvent {
    level: Level,
    message: String,
    timestamp: DateTime<Utc>,
}

impl LogEvent {
    fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

// Pure guard - one per level
fn level(expected: Level) -> Guard<LogEvent> {
    guard!(LogEvent { level, .. } if *level == expected)
}

// Appender writing "[LEVEL] message" to stdout
fn console(event: &LogEvent) {
    println!(
        "  {} [{}] {}",
        event.timestamp.format("%H:%M:%S%.3f"),
        event.level,
        event.message
    );
}

// Appender forwarding every event to the tracing subscriber
fn trace(event: &LogEvent) {
    match event.level {
        Level::Debug => tracing::debug!("{}", event.message),
        Level::Info => tracing::info!("{}", event.message),
        Level::Warning => tracing::warn!("{}", event.message),
        Level::Error => tracing::error!("{}", event.message),
    }
}

fn leveled_logger(propagation: Propagation) -> ActionChain<LogEvent> {
    ActionChain::with_default(trace)
        .with_propagation(propagation)
        .chain(console)
        .guard(level(Level::Debug))
        .chain(console)
        .guard(level(Level::Info))
        .chain(console)
        .guard(level(Level::Warning))
        .chain(console)
        .guard(level(Level::Error))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Console Logger Example ===\n");

    let event = LogEvent::new(Level::Warning, "test message");

    println!("Example 1: Implicit default, one appender per level");
    let logger = ActionChain::start_from(console)
        .guard(level(Level::Debug))
        .chain(console)
        .guard(level(Level::Info))
        .chain(console)
        .guard(level(Level::Warning))
        .chain(console)
        .guard(level(Level::Error));
    logger.accept(&event);
    println!();

    println!("Example 2: Fan-out, console appender plus tracing echo");
    let logger = leveled_logger(Propagation::FanOut);
    logger.accept(&event);
    logger.accept(&LogEvent::new(Level::Error, "disk full"));
    println!();

    println!("Example 3: Short-circuit, console appender only");
    let logger = leveled_logger(Propagation::ShortCircuit);
    logger.accept(&event);
    println!();

    println!("Example 4: Optional events");
    let maybe_logger = ActionChain::start_from(|event: &Option<LogEvent>| {
        if let Some(event) = event {
            console(event)
        }
    })
    .guard(level(Level::Warning).or(level(Level::Error)).optional());
    maybe_logger.accept(&Some(LogEvent::new(Level::Error, "present event")));
    maybe_logger.accept(&None);
    println!("  (absent event ignored)");

    println!("\nKey Takeaways:");
    println!("- Fan-out lets one event reach several handlers");
    println!("- The propagation policy is explicit and chosen per chain");
    println!("- Guards stay pure; only handlers have side effects");

    println!("\n=== Example Complete ===");
}
