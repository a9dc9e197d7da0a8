//! 测试桩集合。
//!
//! 分发核心不提供具体写入器；这里的实现只用于测试与示例，验证选择、回退与关闭语义。
//! 通过 `use spark_logging::test_stubs::memory::*;` 引入。

pub mod memory;
