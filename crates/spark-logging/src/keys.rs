//! 日志记录字段名契约。
//!
//! 记录结构是写入器、格式化器与处理器之间的稳定契约：协作方可以读取并向
//! `context`/`extra` 追加条目，但不得重命名或删除以下核心字段。

/// 记录字段名分组。
pub mod record {
    #[doc = "类型：日志字段。"]
    #[doc = ""]
    #[doc = "字符串化之后的消息正文。"]
    pub const FIELD_MESSAGE: &str = "message";

    #[doc = "类型：日志字段。"]
    #[doc = ""]
    #[doc = "调用方提供的上下文映射。"]
    pub const FIELD_CONTEXT: &str = "context";

    #[doc = "类型：日志字段。"]
    #[doc = ""]
    #[doc = "严重级别序号，`0` 最紧急。"]
    pub const FIELD_LEVEL: &str = "level";

    #[doc = "类型：日志字段。"]
    #[doc = ""]
    #[doc = "严重级别规范短名，总是由级别表推导。"]
    pub const FIELD_LEVEL_NAME: &str = "level_name";

    #[doc = "类型：日志字段。"]
    #[doc = ""]
    #[doc = "所属 Logger 的通道名。"]
    pub const FIELD_CHANNEL: &str = "channel";

    #[doc = "类型：日志字段。"]
    #[doc = ""]
    #[doc = "记录创建时刻（UTC）。"]
    pub const FIELD_TIMESTAMP: &str = "timestamp";

    #[doc = "类型：日志字段。"]
    #[doc = ""]
    #[doc = "处理器追加的扩展字段，创建时为空。"]
    pub const FIELD_EXTRA: &str = "extra";

    /// 全部核心字段，按序列化顺序排列。
    pub const CORE_FIELDS: [&str; 7] = [
        FIELD_MESSAGE,
        FIELD_CONTEXT,
        FIELD_LEVEL,
        FIELD_LEVEL_NAME,
        FIELD_CHANNEL,
        FIELD_TIMESTAMP,
        FIELD_EXTRA,
    ];
}
