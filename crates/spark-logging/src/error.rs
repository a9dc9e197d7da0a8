//! # error 模块说明
//!
//! ## 角色定位
//! - 集中定义日志门面对外暴露的错误语义：调用方输入错误、运行期配置缺失、内部一致性校验失败；
//! - 写入器持久化失败 **不是** 错误：`Writer::write` 以 `false` 报告，由分发链路回退处理，
//!   因此不会出现在 [`LogError`] 中。
//!
//! ## 设计要求
//! - 所有错误类型派生 `thiserror::Error`，可直接交给 `anyhow` 等上层框架；
//! - 每个变体都提供稳定错误码 [`LogError::code`]，遵循 `logging.<语义>` 命名。

use thiserror::Error;

/// 稳定错误码常量，供告警与断言引用。
pub mod codes {
    pub const INVALID_ARGUMENT: &str = "logging.invalid_argument";
    pub const NO_WRITER_CONFIGURED: &str = "logging.no_writer_configured";
    pub const INVALID_LEVEL: &str = "logging.invalid_level";
    pub const EMPTY_PROCESSOR_STACK: &str = "logging.empty_processor_stack";
}

/// 日志门面核心错误域。
///
/// # 契约说明
/// - `InvalidArgument`：调用方输入不合法（级别越界、消息无法转换为文本、级别名称无法解析），
///   总是立即返回，内部从不吞掉；
/// - `NoWriterConfigured`：在 `log` 时才检测到的运维配置缺失，而非构造期错误；
/// - `InvalidLevel`：严重级别表查找失败；若 `log` 的前置检查正确则不可达，触发即表示逻辑不一致；
/// - `EmptyProcessorStack`：在空的处理器栈上执行弹出。
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LogError {
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: String,
    },

    #[error("no log writer configured for channel `{channel}`")]
    NoWriterConfigured { channel: String },

    #[error("level `{level}` is not defined")]
    InvalidLevel { level: i64 },

    #[error("tried to pop from an empty processor stack")]
    EmptyProcessorStack,
}

impl LogError {
    pub(crate) fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        LogError::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    /// 返回稳定错误码。
    pub fn code(&self) -> &'static str {
        match self {
            LogError::InvalidArgument { .. } => codes::INVALID_ARGUMENT,
            LogError::NoWriterConfigured { .. } => codes::NO_WRITER_CONFIGURED,
            LogError::InvalidLevel { .. } => codes::INVALID_LEVEL,
            LogError::EmptyProcessorStack => codes::EMPTY_PROCESSOR_STACK,
        }
    }

    /// 是否属于运行期/运维类错误（区别于调用方输入错误）。
    ///
    /// - `NoWriterConfigured` 表示部署缺少写入器，需运维介入；
    /// - 其余变体均由调用方或内部逻辑直接引起。
    pub fn is_operational(&self) -> bool {
        matches!(self, LogError::NoWriterConfigured { .. })
    }
}

/// 具体写入器在释放资源（`close`）阶段可能报告的失败。
///
/// 该错误只在 [`crate::writer::Sink::release`] 的返回值中出现；`close` 总会记录并丢弃它，
/// 保证宿主进程在关机阶段不会因日志基础设施而失败。
#[derive(Debug, Error)]
pub enum WriterError {
    #[error("writer i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("writer rejected the operation: {reason}")]
    Rejected { reason: String },
}

/// 解析日志配置失败。
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse logging configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
