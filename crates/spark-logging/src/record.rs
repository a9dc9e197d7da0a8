use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer, ser::SerializeStruct};
use serde_json::Value;

use crate::{error::LogError, keys::record as fields, severity::Severity};

/// 记录上下文与扩展字段的映射类型。键为字符串，值为任意 JSON 值，插入顺序无意义。
pub type Context = serde_json::Map<String, Value>;

/// 单条日志记录。
///
/// # 设计背景（Why）
/// - 写入器、格式化器与处理器共享同一份记录形状，字段名由 [`crate::keys::record`] 固定。
///
/// # 契约说明（What）
/// - 每次 `log` 调用都会新建一条记录，`extra` 创建时为空；
/// - `level_name` 永远等于级别表中 `level` 对应的名称，由构造函数推导，外部无法单独修改；
/// - 核心字段只读；写入器与处理器仅能通过 [`context_mut`](Self::context_mut) /
///   [`extra_mut`](Self::extra_mut) 追加条目；
/// - 分发期间记录以 `&mut` 引用在链路中传递，不做复制。
#[derive(Clone, Debug, PartialEq)]
pub struct LogRecord {
    message: String,
    context: Context,
    level: Severity,
    level_name: &'static str,
    channel: String,
    timestamp: DateTime<Utc>,
    extra: Context,
}

impl LogRecord {
    /// 以当前时刻为时间戳构建记录。
    pub fn new(
        level: Severity,
        message: impl Into<String>,
        channel: impl Into<String>,
        context: Context,
    ) -> Self {
        Self {
            message: message.into(),
            context,
            level,
            level_name: level.name(),
            channel: channel.into(),
            timestamp: Utc::now(),
            extra: Context::new(),
        }
    }

    /// 替换时间戳，便于格式化器与回放场景生成确定性输出。
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// 字符串化之后的消息正文。
    pub fn message(&self) -> &str {
        &self.message
    }

    /// 调用方传入的上下文映射。
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// 追加或改写上下文条目；核心字段不受影响。
    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }

    /// 严重级别。
    pub fn level(&self) -> Severity {
        self.level
    }

    /// 级别规范短名，恒等于 `self.level().name()`。
    pub fn level_name(&self) -> &'static str {
        self.level_name
    }

    /// 所属 Logger 的通道名。
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// 记录创建时刻（UTC）。
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// 处理器追加的扩展字段。
    pub fn extra(&self) -> &Context {
        &self.extra
    }

    /// 处理器写入扩展字段的入口。
    pub fn extra_mut(&mut self) -> &mut Context {
        &mut self.extra
    }
}

impl Serialize for LogRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("LogRecord", fields::CORE_FIELDS.len())?;
        state.serialize_field(fields::FIELD_MESSAGE, &self.message)?;
        state.serialize_field(fields::FIELD_CONTEXT, &self.context)?;
        state.serialize_field(fields::FIELD_LEVEL, &self.level)?;
        state.serialize_field(fields::FIELD_LEVEL_NAME, self.level_name)?;
        state.serialize_field(fields::FIELD_CHANNEL, &self.channel)?;
        state.serialize_field(fields::FIELD_TIMESTAMP, &self.timestamp)?;
        state.serialize_field(fields::FIELD_EXTRA, &self.extra)?;
        state.end()
    }
}

/// 传入 `log` 的消息。
///
/// # 契约说明（What）
/// - `Text`：已是字符串，原样使用；
/// - `Structured`：结构化值。字符串值原样使用，其他值输出为带缩进的 JSON 文本转储；
/// - `Unrepresentable`：无法转换为文本的值，`log` 会以 `InvalidArgument` 拒绝。
#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    Text(String),
    Structured(Value),
    Unrepresentable {
        type_name: &'static str,
        reason: String,
    },
}

impl Message {
    /// 使用 `Display` 实现把任意值转为文本消息。
    pub fn display(value: impl core::fmt::Display) -> Self {
        Message::Text(value.to_string())
    }

    /// 通过 `serde` 把值转为结构化消息；映射失败时得到 `Unrepresentable`。
    ///
    /// 例如键不是字符串的映射无法表示为 JSON 对象，会在此处被标记。
    pub fn serialize<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(value) => Message::Structured(value),
            Err(err) => Message::Unrepresentable {
                type_name: core::any::type_name::<T>(),
                reason: err.to_string(),
            },
        }
    }

    /// 产出记录使用的消息文本。
    pub fn into_text(self) -> Result<String, LogError> {
        match self {
            Message::Text(text) => Ok(text),
            Message::Structured(Value::String(text)) => Ok(text),
            Message::Structured(value) => serde_json::to_string_pretty(&value)
                .map_err(|err| LogError::invalid_argument("message", err.to_string())),
            Message::Unrepresentable { type_name, reason } => Err(LogError::invalid_argument(
                "message",
                format!("value of type `{type_name}` has no string conversion: {reason}"),
            )),
        }
    }
}

impl From<&str> for Message {
    fn from(value: &str) -> Self {
        Message::Text(value.to_owned())
    }
}

impl From<String> for Message {
    fn from(value: String) -> Self {
        Message::Text(value)
    }
}

impl From<&String> for Message {
    fn from(value: &String) -> Self {
        Message::Text(value.clone())
    }
}

impl From<std::borrow::Cow<'_, str>> for Message {
    fn from(value: std::borrow::Cow<'_, str>) -> Self {
        Message::Text(value.into_owned())
    }
}

impl From<Value> for Message {
    fn from(value: Value) -> Self {
        Message::Structured(value)
    }
}
