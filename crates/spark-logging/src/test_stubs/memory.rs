//! 内存记录型写入器。
//!
//! # 使用方式
//! - `MemoryWriter::new(threshold)` 总是写入成功；`MemoryWriter::failing(threshold)` 总是报告失败；
//! - 写入器移交给 `Logger` 之前先调用 [`MemoryWriter::journal`] 取得共享日志簿，之后即可断言
//!   写入尝试次数、格式化输出与关闭次数；
//! - 写入器被丢弃时自动关闭，无论是否曾交给 `Logger`。

use std::sync::Arc;

use parking_lot::Mutex;

use crate::{
    error::WriterError,
    record::LogRecord,
    severity::Severity,
    writer::{Sink, Writer, WriterBase},
};

#[derive(Debug, Default)]
struct JournalState {
    attempts: usize,
    records: Vec<LogRecord>,
    lines: Vec<String>,
    releases: usize,
}

/// `MemoryWriter` 的共享观测句柄，克隆后指向同一份状态。
#[derive(Clone, Debug, Default)]
pub struct MemoryJournal {
    state: Arc<Mutex<JournalState>>,
}

impl MemoryJournal {
    /// `write` 被调用的次数，包括失败的调用。
    pub fn attempts(&self) -> usize {
        self.state.lock().attempts
    }

    /// 成功持久化的记录快照。
    pub fn records(&self) -> Vec<LogRecord> {
        self.state.lock().records.clone()
    }

    /// 成功持久化记录的格式化输出。
    pub fn lines(&self) -> Vec<String> {
        self.state.lock().lines.clone()
    }

    /// 释放步骤实际执行的次数。
    pub fn releases(&self) -> usize {
        self.state.lock().releases
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Outcome {
    Succeed,
    Fail,
}

/// 把记录保存在内存中的 [`Sink`]。
#[derive(Debug)]
pub struct MemoryWriter {
    base: WriterBase,
    journal: MemoryJournal,
    outcome: Outcome,
    release_error: Option<String>,
}

impl MemoryWriter {
    pub fn new(threshold: Severity) -> Self {
        Self::with_base(WriterBase::new(threshold, WriterBase::DEFAULT_BUBBLE))
    }

    pub fn failing(threshold: Severity) -> Self {
        let mut writer = Self::new(threshold);
        writer.outcome = Outcome::Fail;
        writer
    }

    pub fn with_base(base: WriterBase) -> Self {
        Self {
            base,
            journal: MemoryJournal::default(),
            outcome: Outcome::Succeed,
            release_error: None,
        }
    }

    /// 让释放步骤返回错误，用于验证 `close` 会吞掉失败。
    pub fn with_release_error(mut self, reason: impl Into<String>) -> Self {
        self.release_error = Some(reason.into());
        self
    }

    pub fn journal(&self) -> MemoryJournal {
        self.journal.clone()
    }

    pub fn base_mut(&mut self) -> &mut WriterBase {
        &mut self.base
    }
}

impl Sink for MemoryWriter {
    fn base(&self) -> &WriterBase {
        &self.base
    }

    fn persist(&self, record: &LogRecord) -> bool {
        let mut state = self.journal.state.lock();
        state.attempts += 1;
        if self.outcome == Outcome::Fail {
            return false;
        }
        let line = self.base.formatter().format(record);
        state.lines.push(line);
        state.records.push(record.clone());
        true
    }

    fn release(&self) -> Result<(), WriterError> {
        self.journal.state.lock().releases += 1;
        match &self.release_error {
            Some(reason) => Err(WriterError::Rejected {
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl Drop for MemoryWriter {
    fn drop(&mut self) {
        Writer::close(self);
    }
}
