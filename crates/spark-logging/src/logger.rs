use std::{
    fmt,
    panic::{self, AssertUnwindSafe},
};

use crate::{
    config::LoggerConfig,
    error::LogError,
    record::{Context, LogRecord, Message},
    severity::{self, LEVEL_COUNT, Severity},
    writer::{Writer, panic_message},
};

/// 日志门面契约。
///
/// # 逻辑解析
/// - `log` 为唯一必需方法；
/// - 八个便捷方法以固定级别调用 `log` 并丢弃其布尔结果，前置条件错误仍会返回给调用方。
pub trait Log: Send + Sync {
    /// 提交一条日志。返回值表示是否有写入器成功持久化了该记录。
    fn log(&self, level: i64, message: Message, context: Context) -> Result<bool, LogError>;

    /// 系统不可用。
    fn emergency(&self, message: impl Into<Message>, context: Context) -> Result<(), LogError>
    where
        Self: Sized,
    {
        self.log(Severity::Emergency.into(), message.into(), context)
            .map(drop)
    }

    /// 必须立即采取行动，例如整站宕机、数据库不可用。
    fn alert(&self, message: impl Into<Message>, context: Context) -> Result<(), LogError>
    where
        Self: Sized,
    {
        self.log(Severity::Alert.into(), message.into(), context)
            .map(drop)
    }

    /// 严重状况，例如组件不可用、未预期的异常。
    fn critical(&self, message: impl Into<Message>, context: Context) -> Result<(), LogError>
    where
        Self: Sized,
    {
        self.log(Severity::Critical.into(), message.into(), context)
            .map(drop)
    }

    fn error(&self, message: impl Into<Message>, context: Context) -> Result<(), LogError>
    where
        Self: Sized,
    {
        self.log(Severity::Error.into(), message.into(), context)
            .map(drop)
    }

    fn warning(&self, message: impl Into<Message>, context: Context) -> Result<(), LogError>
    where
        Self: Sized,
    {
        self.log(Severity::Warning.into(), message.into(), context)
            .map(drop)
    }

    fn notice(&self, message: impl Into<Message>, context: Context) -> Result<(), LogError>
    where
        Self: Sized,
    {
        self.log(Severity::Notice.into(), message.into(), context)
            .map(drop)
    }

    fn info(&self, message: impl Into<Message>, context: Context) -> Result<(), LogError>
    where
        Self: Sized,
    {
        self.log(Severity::Info.into(), message.into(), context)
            .map(drop)
    }

    fn debug(&self, message: impl Into<Message>, context: Context) -> Result<(), LogError>
    where
        Self: Sized,
    {
        self.log(Severity::Debug.into(), message.into(), context)
            .map(drop)
    }
}

/// 持有通道名与有序写入器序列的分发核心。
///
/// # 契约说明
/// - 写入器按注册顺序排列，顺序即优先级，允许重复；只能追加，不会重排或删除；
/// - `log` 在调用线程内同步完成选择与投递，没有后台队列；
/// - 并发 `log` 只读取写入器序列，写入器自身需保证并发 `write` 安全；`add_writer` 需要
///   `&mut self`，因此只能在投入使用前的单线程装配阶段调用；
/// - `Logger` 被丢弃时会按顺序关闭其拥有的每个写入器；单个写入器关闭时的 panic 会被捕获并忽略，
///   不影响其余写入器的关闭。
///
/// # 分发算法
/// 1. **选择**：按顺序找到第一个 `accepts` 为真的写入器；没有则返回 `Ok(false)`，记录被静默丢弃；
/// 2. **投递**：从被选中的下标开始调用 `write`；失败则前进到下一个下标继续 `write`
///    （不再调用 `accepts`），直到有写入器成功（返回 `Ok(true)`）或越过序列末尾（返回 `Ok(false)`）。
pub struct Logger {
    channel: String,
    writers: Vec<Box<dyn Writer>>,
}

impl Logger {
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            writers: Vec::new(),
        }
    }

    /// 以初始写入器序列构造，序列顺序即优先级。
    pub fn with_writers(
        channel: impl Into<String>,
        writers: impl IntoIterator<Item = Box<dyn Writer>>,
    ) -> Self {
        Self {
            channel: channel.into(),
            writers: writers.into_iter().collect(),
        }
    }

    /// 仅携带通道名的空 Logger，写入器由宿主按 `config.writers` 的顺序追加。
    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::new(config.channel.clone())
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// 追加写入器到序列末尾。
    ///
    /// 写入器契约由类型系统保证：不满足 [`Writer`] 的值无法传入。
    pub fn add_writer<W: Writer + 'static>(&mut self, writer: W) -> &mut Self {
        self.push_writer(Box::new(writer))
    }

    pub fn push_writer(&mut self, writer: Box<dyn Writer>) -> &mut Self {
        self.writers.push(writer);
        self
    }

    pub fn writer_count(&self) -> usize {
        self.writers.len()
    }

    /// 查询级别名称，未定义的级别返回 [`LogError::InvalidLevel`]。
    pub fn level_name(level: i64) -> Result<&'static str, LogError> {
        severity::name_of(level)
    }

    fn validate_level(level: i64) -> Result<Severity, LogError> {
        Severity::from_ordinal(level).ok_or_else(|| {
            LogError::invalid_argument(
                "level",
                format!(
                    "must be an integer within [0, {}]; received {level}",
                    LEVEL_COUNT - 1
                ),
            )
        })
    }

    fn select(&self, record: &LogRecord) -> Option<usize> {
        self.writers.iter().position(|writer| writer.accepts(record))
    }

    fn deliver(&self, start: usize, record: &mut LogRecord) -> bool {
        let mut index = start;
        while let Some(writer) = self.writers.get(index) {
            if writer.write(record) {
                return true;
            }
            tracing::debug!(
                channel = %self.channel,
                index,
                level = record.level_name(),
                "writer reported failure, falling back to next writer"
            );
            index += 1;
        }
        false
    }
}

impl Log for Logger {
    fn log(&self, level: i64, message: Message, context: Context) -> Result<bool, LogError> {
        let severity = Self::validate_level(level)?;
        let message = message.into_text()?;
        if self.writers.is_empty() {
            return Err(LogError::NoWriterConfigured {
                channel: self.channel.clone(),
            });
        }

        let level_name = severity::name_of(level)?;
        let mut record = LogRecord::new(severity, message, self.channel.as_str(), context);
        debug_assert_eq!(record.level_name(), level_name);

        let Some(start) = self.select(&record) else {
            tracing::trace!(channel = %self.channel, level = level_name, "no writer accepted record");
            return Ok(false);
        };
        tracing::trace!(channel = %self.channel, index = start, level = level_name, "writer selected");

        if self.deliver(start, &mut record) {
            return Ok(true);
        }
        tracing::warn!(
            channel = %self.channel,
            level = level_name,
            from = start,
            "writer chain exhausted without a successful write"
        );
        Ok(false)
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        for (index, writer) in self.writers.iter().enumerate() {
            if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| writer.close())) {
                tracing::debug!(
                    channel = %self.channel,
                    index,
                    panic = panic_message(payload.as_ref()),
                    "writer close panicked during teardown; ignored"
                );
            }
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("channel", &self.channel)
            .field("writers", &self.writers.len())
            .finish()
    }
}
