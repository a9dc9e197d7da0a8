#![deny(unsafe_code)]
#![doc = "spark-logging: 分级结构化日志门面的同步分发核心。"]
#![doc = ""]
#![doc = "调用方通过 [`Log`] 提交带严重级别的消息；[`Logger`] 构建规范化的 [`LogRecord`]，"]
#![doc = "再按注册顺序遍历写入器链路，决定由哪个写入器持久化该记录，并在写入失败时回退到后续写入器。"]
#![doc = ""]
#![doc = "具体写入器（文件、网络、控制台）、格式化器与处理器均为外部协作方，本 crate 只定义它们的契约"]
#![doc = "以及 [`WriterBase`] 提供的默认策略。"]
//!
//! ```
//! use spark_logging::{Context, Log, Logger, Severity};
//! use spark_logging::test_stubs::memory::MemoryWriter;
//!
//! let primary = MemoryWriter::failing(Severity::Error);
//! let fallback = MemoryWriter::new(Severity::Debug);
//! let journal = fallback.journal();
//!
//! let mut logger = Logger::new("billing");
//! logger.add_writer(primary).add_writer(fallback);
//!
//! assert_eq!(logger.log(Severity::Error.into(), "charge declined".into(), Context::new()), Ok(true));
//! assert_eq!(journal.records()[0].level_name(), "ERR");
//! ```

pub mod config;
pub mod error;
pub mod formatter;
pub mod keys;
pub mod logger;
pub mod processor;
pub mod record;
pub mod severity;
pub mod test_stubs;
pub mod writer;

pub use config::{LoggerConfig, WriterConfig};
pub use error::{ConfigError, LogError, WriterError};
pub use formatter::{Formatter, JsonFormatter, LineFormatter};
pub use logger::{Log, Logger};
pub use processor::Processor;
pub use record::{Context, LogRecord, Message};
pub use severity::{LEVEL_COUNT, Severity, name_of};
pub use writer::{Sink, Writer, WriterBase};
