//! 写入器（Sink）契约。
//!
//! # 结构
//! - [`Writer`]：分发链路消费的能力契约，恰好四个操作：`accepts`、`write`、`write_batch`、`close`；
//! - [`Sink`]：具体写入器实现的组合式基座。实现者只需提供 [`WriterBase`] 与 `persist`，
//!   即自动获得阈值接收策略、处理器执行、批量写入与“只关闭一次”的 `Writer` 实现；
//! - 不经过 `Sink` 直接实现 `Writer` 也被允许，分发核心对两者一视同仁。
//!
//! # 失败语义
//! - `write` 返回 `false` 表示本次持久化失败，这是可预期的状态，分发链路会尝试下一个写入器；
//! - `close` 永不失败：释放阶段返回的错误与发生的 panic 都会被记录为 `debug` 事件后丢弃。
//!
//! # 生命周期
//! - `Logger` 被丢弃时关闭其持有的全部写入器；
//! - 不经过 `Logger` 单独使用的写入器同样需要在离开作用域时释放资源：`Sink` 实现者应在
//!   `Drop` 中调用 [`Writer::close`]，已被关闭过的写入器再次调用时不会重复释放。

mod base;

pub use base::WriterBase;

use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
};

use crate::{error::WriterError, record::LogRecord};

/// 分发链路中的单个写入器。
pub trait Writer: Send + Sync {
    /// 该写入器是否为此记录配置（声明式的能力检查，不涉及 I/O）。
    fn accepts(&self, record: &LogRecord) -> bool;

    /// 尝试持久化记录；成功返回 `true`。
    ///
    /// 写入器及其处理器可以向 `context`/`extra` 追加条目。
    fn write(&self, record: &mut LogRecord) -> bool;

    /// 逐条调用 [`write`](Self::write)；单条失败不会中断批次，结果也不做汇总。
    fn write_batch(&self, records: &mut [LogRecord]) {
        for record in records.iter_mut() {
            let _ = self.write(record);
        }
    }

    /// 释放资源。必须幂等，且不得向调用方传播失败。
    fn close(&self);
}

/// 组合 [`WriterBase`] 的具体写入器。
///
/// # 设计背景（Why）
/// - 默认策略只实现一次，具体写入器通过组合获得，无需继承层级。
///
/// # 契约说明（What）
/// - `base`：返回写入器持有的默认策略状态；
/// - `persist`：真正的持久化步骤，只在处理器执行完毕后被调用，失败返回 `false`；
/// - `release`：可选的资源释放步骤，由 `close` 保证至多执行一次；其中的 panic 会被捕获；
/// - **后置条件**：实现者在 `Drop` 中调用 [`Writer::close`]，使释放步骤在任何退出路径上都会执行。
pub trait Sink: Send + Sync {
    fn base(&self) -> &WriterBase;

    fn persist(&self, record: &LogRecord) -> bool;

    fn release(&self) -> Result<(), WriterError> {
        Ok(())
    }
}

impl<S: Sink> Writer for S {
    fn accepts(&self, record: &LogRecord) -> bool {
        self.base().accepts(record)
    }

    fn write(&self, record: &mut LogRecord) -> bool {
        self.base().process(record);
        self.persist(record)
    }

    fn close(&self) {
        if !self.base().mark_closed() {
            return;
        }
        match panic::catch_unwind(AssertUnwindSafe(|| self.release())) {
            Ok(Ok(())) => {}
            Ok(Err(err)) => {
                tracing::debug!(error = %err, "writer release failed during close; ignored");
            }
            Err(payload) => {
                tracing::debug!(
                    panic = panic_message(payload.as_ref()),
                    "writer release panicked during close; ignored"
                );
            }
        }
    }
}

/// 提取 panic 负载中的文本，非字符串负载返回占位描述。
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "non-string panic payload"
    }
}
