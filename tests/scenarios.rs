//! End-to-end chain scenarios built only from the public API.

use chrono::{DateTime, Utc};
use responsibility::builder::{action_chain_from, transform_chain_from};
use responsibility::{guard, ActionChain, Chain, Guard, Propagation, TransformChain};
use serde::Deserialize;
use std::sync::{Arc, Mutex};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Level {
    Debug,
    Info,
    Warning,
    Error,
}

#[derive(Clone, Debug)]
struct LogEvent {
    level: Level,
    message: String,
    #[allow(dead_code)]
    timestamp: DateTime<Utc>,
}

impl LogEvent {
    fn new(level: Level, message: &str) -> Self {
        Self {
            level,
            message: message.to_string(),
            timestamp: Utc::now(),
        }
    }
}

type Output = Arc<Mutex<Vec<String>>>;

fn level(expected: Level) -> Guard<LogEvent> {
    guard!(LogEvent { level, .. } if *level == expected)
}

fn appender(output: &Output, name: &'static str) -> impl Fn(&LogEvent) + Send + Sync {
    let output = Arc::clone(output);
    move |event: &LogEvent| {
        output
            .lock()
            .unwrap()
            .push(format!("{name}: [{:?}] {}", event.level, event.message))
    }
}

#[test]
fn concrete_string_scenario() {
    let chain = transform_chain_from(|x: &str| format!("{x}-A"))
        .when(|x: &str| x == "2")
        .chain_some(|x: &str| format!("{x}-B"))
        .when(|x: &str| x == "1");

    assert_eq!(chain.apply("1").as_deref(), Some("1-B"));
    assert_eq!(chain.apply("2").as_deref(), Some("2-A"));
    assert_eq!(chain.apply("3"), None);
}

#[test]
fn explicit_default_string_scenario() {
    let chain = TransformChain::with_default(|input: &str| {
        format!("{input} is executed by default chain")
    })
    .chain(|input: &str| format!("{input} is executed by handler 1"))
    .when(|input: &str| input == "test 1")
    .chain(|input: &str| format!("{input} is executed by handler 2"))
    .when(|input: &str| input == "test 2")
    .chain(|input: &str| input.to_uppercase())
    .when(|input: &str| input == "test 3");

    assert_eq!(chain.apply("test 2"), "test 2 is executed by handler 2");
    assert_eq!(chain.apply("test 3"), "TEST 3");
    assert_eq!(chain.apply("test 9"), "test 9 is executed by default chain");
}

#[test]
fn warning_fans_out_to_its_appender_and_default() {
    let output = Output::default();
    let logger = ActionChain::with_default(appender(&output, "d"))
        .chain(appender(&output, "a1"))
        .guard(level(Level::Warning))
        .chain(appender(&output, "a2"))
        .guard(level(Level::Error));

    logger.accept(&LogEvent::new(Level::Warning, "test message"));

    assert_eq!(
        *output.lock().unwrap(),
        vec!["a1: [Warning] test message", "d: [Warning] test message"]
    );
}

#[test]
fn warning_short_circuits_to_its_appender_only() {
    let output = Output::default();
    let logger = ActionChain::with_default(appender(&output, "d"))
        .with_propagation(Propagation::ShortCircuit)
        .chain(appender(&output, "a1"))
        .guard(level(Level::Warning))
        .chain(appender(&output, "a2"))
        .guard(level(Level::Error));

    logger.accept(&LogEvent::new(Level::Warning, "test message"));

    assert_eq!(*output.lock().unwrap(), vec!["a1: [Warning] test message"]);
}

#[test]
fn console_logger_without_default_prints_once_per_level() {
    let output = Output::default();
    let logger = action_chain_from(appender(&output, "console"))
        .guard(level(Level::Debug))
        .chain(appender(&output, "console"))
        .guard(level(Level::Info))
        .chain(appender(&output, "console"))
        .guard(level(Level::Warning))
        .chain(appender(&output, "console"))
        .guard(level(Level::Error));

    for level in [Level::Debug, Level::Info, Level::Warning, Level::Error] {
        logger.accept(&LogEvent::new(level, "event"));
    }

    assert_eq!(
        *output.lock().unwrap(),
        vec![
            "console: [Debug] event",
            "console: [Info] event",
            "console: [Warning] event",
            "console: [Error] event",
        ]
    );
}

#[test]
fn optional_events_are_ignored_when_absent() {
    let output = Output::default();
    let sink = appender(&output, "opt");
    let logger = ActionChain::start_from(move |event: &Option<LogEvent>| {
        if let Some(event) = event {
            sink(event)
        }
    })
    .guard(level(Level::Error).optional());

    logger.accept(&None);
    logger.accept(&Some(LogEvent::new(Level::Info, "quiet")));
    logger.accept(&Some(LogEvent::new(Level::Error, "loud")));

    assert_eq!(*output.lock().unwrap(), vec!["opt: [Error] loud"]);
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Doctor {
    Surgeon,
    Nurse,
    AnotherDoctor,
    Therapist,
}

struct Patient {
    direction: Option<Doctor>,
}

fn direct_to(doctor: Doctor) -> Guard<Patient> {
    guard!(Patient { direction: Some(referred) } if *referred == doctor)
}

fn hospital() -> TransformChain<Patient, Option<String>> {
    TransformChain::start_from(|_: &Patient| "THERAPIST - person is healthy".to_string())
        .guard(direct_to(Doctor::Therapist))
        .chain_some(|_: &Patient| "ANOTHER_DOCTOR - (zzzZ)".to_string())
        .guard(direct_to(Doctor::AnotherDoctor))
        .chain_some(|_: &Patient| "NURSE - procedure room is busy".to_string())
        .guard(direct_to(Doctor::Nurse))
        .chain_some(|_: &Patient| "SURGEON - x-ray is required".to_string())
        .guard(direct_to(Doctor::Surgeon))
}

#[test]
fn hospital_routes_patients_by_direction() {
    let hospital = hospital();

    let conclusion = |direction| hospital.apply(&Patient { direction });

    assert_eq!(
        conclusion(Some(Doctor::Therapist)).as_deref(),
        Some("THERAPIST - person is healthy")
    );
    assert_eq!(
        conclusion(Some(Doctor::Surgeon)).as_deref(),
        Some("SURGEON - x-ray is required")
    );
    assert_eq!(
        conclusion(Some(Doctor::Nurse)).as_deref(),
        Some("NURSE - procedure room is busy")
    );
    assert_eq!(conclusion(None), None);
    assert_eq!(hospital.len(), 4);
}

#[test]
fn chains_dispatch_through_the_chain_trait() {
    fn run<C: Chain<Level>>(chain: &C, level: Level) -> C::Output {
        chain.apply(&level)
    }

    let severity = TransformChain::with_default(|_: &Level| 0)
        .chain(|_: &Level| 2)
        .guard(guard!(Level::Error))
        .chain(|_: &Level| 1)
        .guard(guard!(Level::Warning));

    assert_eq!(run(&severity, Level::Error), 2);
    assert_eq!(run(&severity, Level::Warning), 1);
    assert_eq!(run(&severity, Level::Debug), 0);
}

#[derive(Deserialize)]
struct LoggerConfig {
    propagation: Propagation,
}

#[test]
fn propagation_is_read_from_application_config() {
    let config: LoggerConfig =
        serde_json::from_str(r#"{ "propagation": "short_circuit" }"#).unwrap();
    let output = Output::default();

    let logger = ActionChain::with_default(appender(&output, "d"))
        .with_propagation(config.propagation)
        .chain(appender(&output, "a1"))
        .guard(level(Level::Info));

    logger.accept(&LogEvent::new(Level::Info, "configured"));

    assert_eq!(*output.lock().unwrap(), vec!["a1: [Info] configured"]);
}

#[test]
fn chain_is_shared_across_threads() {
    let chain = Arc::new(
        TransformChain::with_default(|n: &u64| n * 2)
            .chain(|n: &u64| n + 1)
            .when(|n: &u64| n % 2 == 1),
    );

    let handles: Vec<_> = (0..8u64)
        .map(|n| {
            let chain = Arc::clone(&chain);
            std::thread::spawn(move || (n, chain.apply(&n)))
        })
        .collect();

    for handle in handles {
        let (n, result) = handle.join().unwrap();
        let expected = if n % 2 == 1 { n + 1 } else { n * 2 };
        assert_eq!(result, expected);
    }
}

#[tokio::test]
async fn action_chain_is_shared_across_tasks() {
    let output = Output::default();
    let logger = Arc::new(
        ActionChain::with_default(appender(&output, "d"))
            .chain(appender(&output, "err"))
            .guard(level(Level::Error)),
    );

    let mut tasks = Vec::new();
    for i in 0..4 {
        let logger = Arc::clone(&logger);
        tasks.push(tokio::spawn(async move {
            let level = if i % 2 == 0 { Level::Error } else { Level::Debug };
            logger.accept(&LogEvent::new(level, "task"));
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    let output = output.lock().unwrap();
    assert_eq!(output.len(), 6);
    assert_eq!(output.iter().filter(|line| line.starts_with("err")).count(), 2);
}
