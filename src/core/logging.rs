//! 日志组件
//!
//! [`Logger`] 持有一个 `tracing::Dispatch`，由调用方创建后注入 [`Engine`](super::Engine)。
//! 引擎只在 `run` 期间通过 [`Logger::scope`] 临时进入该 dispatcher，库本身不会安装全局订阅者。

use tracing::Dispatch;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use super::error::{EngineError, EngineResult};
use crate::config::LoggingConfig;

/// 可注入的日志组件
#[derive(Clone)]
pub struct Logger {
    dispatch: Dispatch,
}

impl Logger {
    /// 按配置创建输出到stderr的日志组件
    pub fn from_config(config: &LoggingConfig) -> EngineResult<Self> {
        Self::with_writer(config, std::io::stderr)
    }

    /// 按配置创建日志组件，输出到指定writer
    ///
    /// `RUST_LOG` 设置时覆盖配置中的级别。
    pub fn with_writer<W>(config: &LoggingConfig, writer: W) -> EngineResult<Self>
    where
        W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(config.level.as_directive())
                .map_err(|e| EngineError::Logging(e.to_string()))?,
        };

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(config.ansi)
            .with_target(config.with_target)
            .with_writer(writer)
            .finish();

        Ok(Self {
            dispatch: Dispatch::new(subscriber),
        })
    }

    /// 丢弃所有事件
    pub fn silent() -> Self {
        Self {
            dispatch: Dispatch::none(),
        }
    }

    /// 包装已有的dispatcher（例如测试中的自定义订阅者）
    pub fn from_dispatch(dispatch: Dispatch) -> Self {
        Self { dispatch }
    }

    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// 在该日志组件作为当前dispatcher的作用域内执行 `f`
    pub fn scope<R>(&self, f: impl FnOnce() -> R) -> R {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn plain_config(level: LogLevel) -> LoggingConfig {
        LoggingConfig {
            level,
            ansi: false,
            with_target: true,
        }
    }

    #[test]
    fn test_scope_routes_events_to_writer() {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let logger = Logger::with_writer(&plain_config(LogLevel::Info), move || writer.clone())
            .unwrap();

        logger.scope(|| tracing::info!(target: "engine", frames = 3, "scoped event"));
        // 作用域外的事件不会到达该logger
        tracing::info!(target: "engine", "outside event");

        let output = buffer.contents();
        if std::env::var_os("RUST_LOG").is_none() {
            assert!(output.contains("scoped event"));
            assert!(output.contains("frames=3"));
            assert!(output.contains("engine"));
        }
        assert!(!output.contains("outside event"));
    }

    #[test]
    fn test_level_filters_events() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let logger = Logger::with_writer(&plain_config(LogLevel::Warn), move || writer.clone())
            .unwrap();

        logger.scope(|| {
            tracing::info!(target: "engine", "quiet");
            tracing::warn!(target: "engine", "loud");
        });

        let output = buffer.contents();
        assert!(!output.contains("quiet"));
        assert!(output.contains("loud"));
    }

    #[test]
    fn test_silent_logger() {
        let logger = Logger::silent();
        assert_eq!(logger.scope(|| 7), 7);
    }
}
