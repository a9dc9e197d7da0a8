//! 严重级别表：序号 ↔ 规范短名的静态映射。
//!
//! # 契约说明（What）
//! - 取值闭区间 `[0, 7]`，共 [`LEVEL_COUNT`] 级，沿用 BSD Syslog（RFC 3164）的定义；
//! - **数值越小越紧急**：`0 = EMERG`，`7 = DEBUG`，所有阈值比较都以该数值序为准；
//! - 名称表在编译期固定，进程生命周期内不可变，不提供任何写入口。

use core::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::error::LogError;

/// 已定义的严重级别数量。
pub const LEVEL_COUNT: usize = 8;

/// 序号 → 规范短名。下标即级别序号。
const NAMES: [&str; LEVEL_COUNT] = [
    "EMERG", "ALERT", "CRIT", "ERR", "WARN", "NOTICE", "INFO", "DEBUG",
];

/// 配置与解析时额外接受的长名称，下标与 [`NAMES`] 一一对应。
const ALIASES: [&str; LEVEL_COUNT] = [
    "emergency",
    "alert",
    "critical",
    "error",
    "warning",
    "notice",
    "info",
    "debug",
];

/// 日志严重级别。
///
/// # 设计背景（Why）
/// - 以枚举代替裸整数，使写入器阈值与配置在类型层面只能取表内的值；
///   裸整数只出现在 `Logger::log` 的入口，并在那里校验。
///
/// # 契约说明（What）
/// 派生的 `Ord` 按判别值比较，因此 `Severity::Emergency < Severity::Debug`，
/// 与数值序完全一致。
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Emergency = 0,
    Alert = 1,
    Critical = 2,
    Error = 3,
    Warning = 4,
    Notice = 5,
    Info = 6,
    Debug = 7,
}

impl Severity {
    /// 按序号升序排列的全部级别。
    pub const ALL: [Severity; LEVEL_COUNT] = [
        Severity::Emergency,
        Severity::Alert,
        Severity::Critical,
        Severity::Error,
        Severity::Warning,
        Severity::Notice,
        Severity::Info,
        Severity::Debug,
    ];

    /// 级别序号，`0` 最紧急。
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// 规范短名，例如 `Severity::Error.name() == "ERR"`。
    pub const fn name(self) -> &'static str {
        NAMES[self as usize]
    }

    /// 由序号构造级别；越界返回 `None`。
    pub fn from_ordinal(level: i64) -> Option<Self> {
        usize::try_from(level)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// 按名称解析级别，大小写不敏感，同时接受规范短名与长名称（`"ERR"` / `"error"`）。
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        NAMES
            .iter()
            .zip(ALIASES.iter())
            .position(|(short, long)| {
                short.eq_ignore_ascii_case(name) || long.eq_ignore_ascii_case(name)
            })
            .map(|index| Self::ALL[index])
    }
}

/// 查询级别的规范短名。
///
/// 未定义的序号返回 [`LogError::InvalidLevel`]。
pub fn name_of(level: i64) -> Result<&'static str, LogError> {
    Severity::from_ordinal(level)
        .map(Severity::name)
        .ok_or(LogError::InvalidLevel { level })
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Severity> for i64 {
    fn from(value: Severity) -> Self {
        i64::from(value.ordinal())
    }
}

impl From<Severity> for u8 {
    fn from(value: Severity) -> Self {
        value.ordinal()
    }
}

impl TryFrom<i64> for Severity {
    type Error = LogError;

    fn try_from(level: i64) -> Result<Self, LogError> {
        Severity::from_ordinal(level).ok_or(LogError::InvalidLevel { level })
    }
}

impl FromStr for Severity {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::from_name(s).ok_or_else(|| {
            LogError::invalid_argument("severity", format!("unknown severity name `{s}`"))
        })
    }
}

/// 序列化为序号，保持与记录中 `level` 字段的数值语义一致。
impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.ordinal())
    }
}

/// 反序列化接受序号或名称两种写法。
impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SeverityVisitor)
    }
}

struct SeverityVisitor;

impl de::Visitor<'_> for SeverityVisitor {
    type Value = Severity;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a severity ordinal in [0, 7] or a severity name such as \"ERR\"")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Severity, E> {
        Severity::from_ordinal(value)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Signed(value), &self))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Severity, E> {
        i64::try_from(value)
            .ok()
            .and_then(Severity::from_ordinal)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(value), &self))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Severity, E> {
        Severity::from_name(value).ok_or_else(|| E::invalid_value(de::Unexpected::Str(value), &self))
    }
}
