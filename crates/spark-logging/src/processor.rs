//! 记录处理器：在写入器持久化之前为记录补充 `extra`/`context`。

use crate::record::LogRecord;

/// 处理器契约。
///
/// 任意 `Fn(&mut LogRecord) + Send + Sync` 闭包都自动实现该 trait，因此“不可调用的处理器”
/// 在编译期即被拒绝。
pub trait Processor: Send + Sync {
    fn process(&self, record: &mut LogRecord);
}

impl<F> Processor for F
where
    F: Fn(&mut LogRecord) + Send + Sync,
{
    fn process(&self, record: &mut LogRecord) {
        self(record)
    }
}
