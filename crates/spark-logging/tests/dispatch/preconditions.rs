use serde_json::json;
use spark_logging::{Context, Log, LogError, Logger, Message, Severity, error::codes};

#[test]
fn logging_without_writers_is_an_operational_error() {
    let logger = Logger::new("orphan");
    for level in 0..8 {
        let err = logger.log(level, "hello".into(), Context::new()).unwrap_err();
        assert_eq!(
            err,
            LogError::NoWriterConfigured {
                channel: "orphan".to_owned()
            }
        );
        assert!(err.is_operational());
    }

    let err = logger.info(json!({"structured": true}), Context::new()).unwrap_err();
    assert_eq!(err.code(), codes::NO_WRITER_CONFIGURED);
}

#[test]
fn convenience_methods_propagate_precondition_errors() {
    let logger = Logger::new("orphan");
    assert!(logger.emergency("a", Context::new()).is_err());
    assert!(logger.alert("a", Context::new()).is_err());
    assert!(logger.critical("a", Context::new()).is_err());
    assert!(logger.error("a", Context::new()).is_err());
    assert!(logger.warning("a", Context::new()).is_err());
    assert!(logger.notice("a", Context::new()).is_err());
    assert!(logger.info("a", Context::new()).is_err());
    assert!(logger.debug("a", Context::new()).is_err());
}

#[test]
fn unrepresentable_message_is_rejected_before_dispatch() {
    use std::collections::BTreeMap;

    let mut logger = Logger::new("app");
    logger.add_writer(spark_logging::test_stubs::memory::MemoryWriter::new(Severity::Debug));

    let keyed_by_tuple = BTreeMap::from([((0u8, 1u8), "edge")]);
    let err = logger
        .log(7, Message::serialize(&keyed_by_tuple), Context::new())
        .unwrap_err();
    assert!(matches!(err, LogError::InvalidArgument { argument: "message", .. }));
}
