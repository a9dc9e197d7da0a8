use std::{
    collections::VecDeque,
    fmt,
    sync::{
        Arc, OnceLock,
        atomic::{AtomicBool, Ordering},
    },
};

use crate::{
    config::WriterConfig,
    error::LogError,
    formatter::{Formatter, LineFormatter},
    processor::Processor,
    record::LogRecord,
    severity::Severity,
};

fn line_formatter() -> Arc<dyn Formatter> {
    Arc::new(LineFormatter::new())
}

/// 写入器的默认策略与共享状态，供具体写入器组合使用。
///
/// # 设计背景（Why）
/// - 具体写入器只关心持久化本身，阈值、处理器与格式化器的管理集中在此处，
///   经由 [`Sink`](super::Sink) 的统一实现生效。
///
/// # 契约说明（What）
/// - **接收策略**：`record.level() >= threshold`，按级别数值比较；
/// - **处理器栈**：新加入的处理器位于栈顶（最先执行），弹出同样作用于栈顶；
/// - **格式化器槽位**：未显式设置时，在首次访问时由该写入器的默认构造函数惰性生成并缓存；
/// - **生命周期**：[`mark_closed`](Self::mark_closed) 只在第一次调用时返回 `true`，
///   保证释放逻辑恰好执行一次；
/// - `bubble` 仅作为配置保存，当前的分发算法不会读取它。
pub struct WriterBase {
    threshold: Severity,
    bubble: bool,
    processors: VecDeque<Arc<dyn Processor>>,
    formatter: OnceLock<Arc<dyn Formatter>>,
    default_formatter: fn() -> Arc<dyn Formatter>,
    closed: AtomicBool,
}

impl WriterBase {
    /// 未配置时的阈值。
    pub const DEFAULT_THRESHOLD: Severity = Severity::Debug;
    /// 未配置时的 `bubble` 取值。
    pub const DEFAULT_BUBBLE: bool = true;

    /// 以给定阈值与 `bubble` 构造，处理器栈为空，格式化器槽位未填充。
    pub fn new(threshold: Severity, bubble: bool) -> Self {
        Self {
            threshold,
            bubble,
            processors: VecDeque::new(),
            formatter: OnceLock::new(),
            default_formatter: line_formatter,
            closed: AtomicBool::new(false),
        }
    }

    /// 按 [`WriterConfig`] 构造。
    pub fn from_config(config: &WriterConfig) -> Self {
        Self::new(config.threshold, config.bubble)
    }

    /// 替换惰性默认格式化器的构造函数，供具体写入器声明自己的默认输出格式。
    pub fn with_default_formatter(mut self, default_formatter: fn() -> Arc<dyn Formatter>) -> Self {
        self.default_formatter = default_formatter;
        self
    }

    /// 构建期追加处理器的链式写法。
    pub fn with_processor<P: Processor + 'static>(mut self, processor: P) -> Self {
        self.add_processor(Arc::new(processor));
        self
    }

    /// 当前阈值。
    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    /// 替换阈值，只影响之后的 `accepts` 判定。
    pub fn set_threshold(&mut self, threshold: Severity) {
        self.threshold = threshold;
    }

    /// 配置中的 `bubble` 取值。
    pub fn bubble(&self) -> bool {
        self.bubble
    }

    /// 默认接收策略：`record.level() >= threshold`。
    pub fn accepts(&self, record: &LogRecord) -> bool {
        record.level() >= self.threshold
    }

    /// 将处理器压入栈顶。
    pub fn add_processor(&mut self, processor: Arc<dyn Processor>) {
        self.processors.push_front(processor);
    }

    /// 弹出栈顶处理器；栈为空时返回 [`LogError::EmptyProcessorStack`]。
    pub fn pop_processor(&mut self) -> Result<Arc<dyn Processor>, LogError> {
        self.processors
            .pop_front()
            .ok_or(LogError::EmptyProcessorStack)
    }

    /// 栈中处理器数量。
    pub fn processor_count(&self) -> usize {
        self.processors.len()
    }

    /// 按栈顶到栈底的顺序依次执行处理器。
    pub fn process(&self, record: &mut LogRecord) {
        for processor in &self.processors {
            processor.process(record);
        }
    }

    /// 显式设置格式化器；之后不再生成默认格式化器。
    pub fn set_formatter(&mut self, formatter: Arc<dyn Formatter>) {
        self.formatter = OnceLock::from(formatter);
    }

    /// 取得格式化器，首次访问且未显式设置时生成默认值。
    pub fn formatter(&self) -> &Arc<dyn Formatter> {
        self.formatter.get_or_init(self.default_formatter)
    }

    /// 标记为已关闭。仅首次调用返回 `true`。
    pub fn mark_closed(&self) -> bool {
        self.closed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// 是否已经执行过关闭。
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}

impl Default for WriterBase {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD, Self::DEFAULT_BUBBLE)
    }
}

impl fmt::Debug for WriterBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterBase")
            .field("threshold", &self.threshold)
            .field("bubble", &self.bubble)
            .field("processors", &self.processors.len())
            .field("formatter_initialized", &self.formatter.get().is_some())
            .field("closed", &self.is_closed())
            .finish()
    }
}
