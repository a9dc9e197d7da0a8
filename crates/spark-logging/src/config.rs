//! 通道与写入器设置的声明式描述。
//!
//! ### 契约说明
//! - 本模块只负责把 TOML 文本解析为强类型设置，不负责定位或加载配置文件；
//! - 具体写入器由宿主构造，可借助 [`LoggerConfig::writer`] 按名称取得对应的
//!   [`WriterConfig`]，再交给 [`crate::writer::WriterBase::from_config`]；
//! - `threshold` 可写作规范短名（`"ERR"`）、长名称（`"error"`）或序号（`3`）。
//!
//! ```toml
//! channel = "billing"
//!
//! [[writers]]
//! name = "primary"
//! threshold = "ERR"
//!
//! [[writers]]
//! name = "fallback"
//! threshold = 7
//! bubble = false
//! ```

use serde::Deserialize;

use crate::{error::ConfigError, severity::Severity, writer::WriterBase};

fn default_threshold() -> Severity {
    WriterBase::DEFAULT_THRESHOLD
}

fn default_bubble() -> bool {
    WriterBase::DEFAULT_BUBBLE
}

/// 单个写入器的默认策略设置。
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct WriterConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_threshold")]
    pub threshold: Severity,
    #[serde(default = "default_bubble")]
    pub bubble: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            name: None,
            threshold: default_threshold(),
            bubble: default_bubble(),
        }
    }
}

/// 一个通道的设置。`writers` 的顺序即写入器优先级顺序。
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggerConfig {
    #[serde(default)]
    pub channel: String,
    #[serde(default)]
    pub writers: Vec<WriterConfig>,
}

impl LoggerConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// 按名称查找写入器设置，返回第一个匹配项。
    pub fn writer(&self, name: &str) -> Option<&WriterConfig> {
        self.writers
            .iter()
            .find(|writer| writer.name.as_deref() == Some(name))
    }
}
