use spark_logging::{
    Context, LogRecord, Logger, Severity, Sink, Writer, WriterBase, WriterError,
    test_stubs::memory::MemoryWriter,
};

use crate::support::Tally;

#[test]
fn close_is_idempotent_and_releases_once() {
    let writer = MemoryWriter::new(Severity::Debug);
    let journal = writer.journal();

    writer.close();
    writer.close();
    assert_eq!(journal.releases(), 1);
}

#[test]
fn release_failures_are_swallowed() {
    let writer = MemoryWriter::new(Severity::Debug).with_release_error("socket already gone");
    let journal = writer.journal();

    writer.close();
    writer.close();
    assert_eq!(journal.releases(), 1);
}

#[test]
fn dropping_the_logger_closes_every_writer() {
    let tally = Tally::default();
    let memory = MemoryWriter::new(Severity::Debug).with_release_error("flush failed");
    let journal = memory.journal();

    {
        let mut logger = Logger::new("scoped");
        logger
            .add_writer(tally.writer(true, true))
            .add_writer(memory)
            .add_writer(tally.writer(true, true));
    }

    assert_eq!(tally.closes(), 2);
    assert_eq!(journal.releases(), 1);
}

#[test]
fn standalone_writer_releases_when_dropped() {
    let writer = MemoryWriter::new(Severity::Debug);
    let journal = writer.journal();

    drop(writer);
    assert_eq!(journal.releases(), 1);
}

#[test]
fn writer_closed_explicitly_is_not_released_again_on_drop() {
    let journal = {
        let writer = MemoryWriter::new(Severity::Debug);
        writer.close();
        writer.journal()
    };
    assert_eq!(journal.releases(), 1);
}

/// 释放步骤总是 panic 的写入器。
struct BrokenRelease {
    base: WriterBase,
}

impl Sink for BrokenRelease {
    fn base(&self) -> &WriterBase {
        &self.base
    }

    fn persist(&self, _record: &LogRecord) -> bool {
        true
    }

    fn release(&self) -> Result<(), WriterError> {
        panic!("flush thread is gone");
    }
}

#[test]
fn panicking_release_does_not_stop_teardown() {
    let survivor = MemoryWriter::new(Severity::Debug);
    let journal = survivor.journal();

    {
        let mut logger = Logger::new("scoped");
        logger
            .add_writer(BrokenRelease {
                base: WriterBase::default(),
            })
            .add_writer(survivor);
    }

    assert_eq!(journal.releases(), 1);
}

#[test]
fn batch_delivery_continues_past_failures() {
    let writer = MemoryWriter::failing(Severity::Debug);
    let journal = writer.journal();

    let mut batch: Vec<LogRecord> = (0..3)
        .map(|i| LogRecord::new(Severity::Debug, format!("item {i}"), "batch", Context::new()))
        .collect();
    writer.write_batch(&mut batch);

    assert_eq!(journal.attempts(), 3);
    assert!(journal.records().is_empty());
}

#[test]
fn batch_delivery_persists_every_record() {
    let writer = MemoryWriter::new(Severity::Debug);
    let journal = writer.journal();

    let mut batch = vec![
        LogRecord::new(Severity::Info, "one", "batch", Context::new()),
        LogRecord::new(Severity::Error, "two", "batch", Context::new()),
    ];
    writer.write_batch(&mut batch);

    let messages: Vec<_> = journal
        .records()
        .iter()
        .map(|record| record.message().to_owned())
        .collect();
    assert_eq!(messages, ["one", "two"]);
}
