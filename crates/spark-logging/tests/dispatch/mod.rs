//! 写入器链路分发的集成测试：选择、回退、前置条件与生命周期。

mod support;

mod lifecycle;
mod preconditions;
mod selection;
