//! 格式化器契约及两个内置实现。
//!
//! 具体输出格式不属于分发核心，写入器仅通过 `WriterBase::set_formatter` /
//! `WriterBase::formatter` 接触格式化器；这里的实现用作写入器的默认值。

use std::borrow::Cow;

use crate::record::{Context, LogRecord};

/// 把记录转换为可输出的文本表示。
pub trait Formatter: Send + Sync {
    fn format(&self, record: &LogRecord) -> String;

    /// 批量格式化，默认逐条格式化后以换行拼接。
    fn format_batch(&self, records: &[LogRecord]) -> String {
        records
            .iter()
            .map(|record| self.format(record))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// 单行文本格式：`[时间] 通道.级别: 消息 上下文 扩展`。
///
/// 上下文与扩展以紧凑 JSON 输出，空映射输出为 `{}`。
#[derive(Clone, Debug)]
pub struct LineFormatter {
    date_format: Cow<'static, str>,
}

impl LineFormatter {
    pub const DEFAULT_DATE_FORMAT: &'static str = "%Y-%m-%d %H:%M:%S";

    pub fn new() -> Self {
        Self {
            date_format: Cow::Borrowed(Self::DEFAULT_DATE_FORMAT),
        }
    }

    /// 使用 `chrono` strftime 语法的自定义时间格式。
    pub fn with_date_format(date_format: impl Into<Cow<'static, str>>) -> Self {
        Self {
            date_format: date_format.into(),
        }
    }
}

impl Default for LineFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn compact(map: &Context) -> String {
    serde_json::to_string(map).unwrap_or_else(|_| "{}".to_owned())
}

impl Formatter for LineFormatter {
    fn format(&self, record: &LogRecord) -> String {
        format!(
            "[{}] {}.{}: {} {} {}",
            record.timestamp().format(&self.date_format),
            record.channel(),
            record.level_name(),
            record.message(),
            compact(record.context()),
            compact(record.extra()),
        )
    }
}

/// 每条记录输出为一行 JSON，字段名见 [`crate::keys::record`]。
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, record: &LogRecord) -> String {
        match serde_json::to_string(record) {
            Ok(line) => line,
            Err(err) => {
                tracing::debug!(error = %err, "json formatter fell back to the bare message");
                record.message().to_owned()
            }
        }
    }
}
