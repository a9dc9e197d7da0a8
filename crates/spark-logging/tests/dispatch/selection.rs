use spark_logging::{Context, Log, Logger, Severity, test_stubs::memory::MemoryWriter};

use crate::support::Tally;

#[test]
fn first_accepting_writer_wins_and_later_writers_are_untouched() {
    let w1 = MemoryWriter::new(Severity::Debug);
    let w2 = MemoryWriter::new(Severity::Error);
    let (j1, j2) = (w1.journal(), w2.journal());

    let mut logger = Logger::new("app");
    logger.add_writer(w1).add_writer(w2);

    assert_eq!(logger.debug("cache warmed", Context::new()), Ok(()));
    assert_eq!(j1.attempts(), 1);
    assert_eq!(j2.attempts(), 0);
    assert_eq!(j1.records()[0].level(), Severity::Debug);
}

#[test]
fn record_is_dropped_when_no_writer_accepts() {
    let w1 = MemoryWriter::new(Severity::Debug);
    let w2 = MemoryWriter::new(Severity::Info);
    let (j1, j2) = (w1.journal(), w2.journal());

    let mut logger = Logger::new("app");
    logger.add_writer(w1).add_writer(w2);

    let delivered = logger
        .log(Severity::Error.into(), "disk failure".into(), Context::new())
        .unwrap();
    assert!(!delivered);
    assert_eq!(j1.attempts(), 0);
    assert_eq!(j2.attempts(), 0);
}

#[test]
fn selection_stops_scanning_at_the_first_acceptor() {
    let skipped = Tally::default();
    let chosen = Tally::default();
    let trailing = Tally::default();

    let mut logger = Logger::new("app");
    logger
        .add_writer(skipped.writer(false, true))
        .add_writer(chosen.writer(true, true))
        .add_writer(trailing.writer(true, true));

    assert_eq!(logger.log(6, "hello".into(), Context::new()), Ok(true));
    assert_eq!((skipped.accepts(), skipped.writes()), (1, 0));
    assert_eq!((chosen.accepts(), chosen.writes()), (1, 1));
    assert_eq!((trailing.accepts(), trailing.writes()), (0, 0));
}

#[test]
fn duplicate_registrations_are_allowed() {
    let tally = Tally::default();
    let mut logger = Logger::with_writers(
        "app",
        [
            Box::new(tally.writer(true, false)) as Box<dyn spark_logging::Writer>,
            Box::new(tally.writer(true, true)),
        ],
    );

    assert_eq!(logger.writer_count(), 2);
    assert_eq!(logger.log(0, "pager".into(), Context::new()), Ok(true));
    assert_eq!(tally.writes(), 2);

    logger.add_writer(tally.writer(true, true));
    assert_eq!(logger.writer_count(), 3);
}

#[test]
fn record_carries_channel_context_and_name() {
    // `Emergency` 阈值接收全部级别。
    let writer = MemoryWriter::new(Severity::Emergency);
    let journal = writer.journal();
    let mut logger = Logger::new("payments");
    logger.add_writer(writer);

    let mut context = Context::new();
    context.insert("order".into(), serde_json::json!(17));
    logger.warning("retrying charge", context).unwrap();

    let record = &journal.records()[0];
    assert_eq!(record.channel(), "payments");
    assert_eq!(record.level_name(), "WARN");
    assert_eq!(record.message(), "retrying charge");
    assert_eq!(record.context()["order"], serde_json::json!(17));
    assert!(record.extra().is_empty());
    assert!(journal.lines()[0].contains("payments.WARN: retrying charge"));
}
