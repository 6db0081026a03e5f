//! 核心模块
//!
//! 包含引擎的核心功能：
//! - `engine` - 主引擎入口和帧循环
//! - `logging` - 可注入的日志组件
//! - `error` - 错误类型定义

pub mod engine;
pub mod error;
pub mod logging;
#[macro_use]
pub mod macros;

// 重新导出错误类型
pub use error::{EngineError, EngineResult};

// 重新导出主要类型
pub use engine::{Engine, FrameContext, LoopControl, RunSummary};
pub use logging::Logger;
