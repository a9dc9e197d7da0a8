use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use spark_logging::{LogRecord, Writer};

/// 直接实现 `Writer` 的计数写入器：记录 `accepts` 与 `write` 的调用次数，结果固定。
#[derive(Clone, Default)]
pub struct Tally {
    pub accepts_calls: Arc<AtomicUsize>,
    pub write_calls: Arc<AtomicUsize>,
    pub close_calls: Arc<AtomicUsize>,
}

impl Tally {
    pub fn writer(&self, accepts: bool, succeeds: bool) -> TallyWriter {
        TallyWriter {
            tally: self.clone(),
            accepts,
            succeeds,
        }
    }

    pub fn accepts(&self) -> usize {
        self.accepts_calls.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.write_calls.load(Ordering::SeqCst)
    }

    pub fn closes(&self) -> usize {
        self.close_calls.load(Ordering::SeqCst)
    }
}

pub struct TallyWriter {
    tally: Tally,
    accepts: bool,
    succeeds: bool,
}

impl Writer for TallyWriter {
    fn accepts(&self, _record: &LogRecord) -> bool {
        self.tally.accepts_calls.fetch_add(1, Ordering::SeqCst);
        self.accepts
    }

    fn write(&self, _record: &mut LogRecord) -> bool {
        self.tally.write_calls.fetch_add(1, Ordering::SeqCst);
        self.succeeds
    }

    fn close(&self) {
        self.tally.close_calls.fetch_add(1, Ordering::SeqCst);
    }
}
