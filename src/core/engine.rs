//! 引擎主入口
//!
//! 定义Engine结构和阻塞式帧循环

use std::time::{Duration, Instant};

use kiln_math::SimdBackend;

use super::error::{EngineError, EngineResult};
use super::logging::Logger;
use crate::config::EngineConfig;

/// 帧回调的返回值
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    /// 继续下一帧
    Continue,
    /// 结束循环
    Exit,
}

/// 传给帧回调的只读上下文
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    /// 帧序号，从0开始
    pub frame: u64,
    /// 距上一帧开始的时间
    pub delta: Duration,
    /// 距循环开始的时间
    pub elapsed: Duration,
}

impl FrameContext {
    /// 以秒计的 `elapsed`
    pub fn seconds(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }
}

/// 一次 `run` 的统计
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// 实际执行的帧数
    pub frames: u64,
    /// 循环总耗时
    pub elapsed: Duration,
}

/// 游戏引擎主结构
///
/// 持有项目名称、配置以及注入的日志组件。
///
/// # 示例
///
/// ```no_run
/// use kiln_engine::config::EngineConfig;
/// use kiln_engine::core::{Engine, LoopControl, Logger};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = EngineConfig::load_or_default("kiln.toml")?;
///     let logger = Logger::from_config(&config.logging)?;
///     let engine = Engine::new(config, logger)?;
///     engine.run(|frame| {
///         Ok(if frame.frame == 9 { LoopControl::Exit } else { LoopControl::Continue })
///     })?;
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct Engine {
    name: String,
    config: EngineConfig,
    logger: Logger,
}

impl Engine {
    /// 验证配置并创建引擎
    pub fn new(config: EngineConfig, logger: Logger) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self {
            name: config.project.name.clone(),
            config,
            logger,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// 运行阻塞式帧循环
    ///
    /// 每帧调用一次 `frame_fn`，直到回调返回 [`LoopControl::Exit`]、达到 `max_frames`
    /// 或回调返回错误。`target_fps` 大于0时每帧按预算休眠补齐。
    pub fn run<F>(&self, mut frame_fn: F) -> EngineResult<RunSummary>
    where
        F: FnMut(&FrameContext) -> EngineResult<LoopControl>,
    {
        self.logger.scope(|| {
            let active = SimdBackend::ACTIVE;
            tracing::info!(
                target: "engine",
                project = %self.name,
                simd = %active,
                f32_lanes = active.f32_lanes(),
                "Engine starting"
            );

            let budget = self.config.performance.frame_budget();
            let max_frames = self.config.performance.max_frames;
            let start = Instant::now();
            let mut last = start;
            let mut frames = 0u64;

            loop {
                if max_frames.is_some_and(|max| frames >= max) {
                    tracing::debug!(target: "engine", frames, "Frame limit reached");
                    break;
                }

                let now = Instant::now();
                let context = FrameContext {
                    frame: frames,
                    delta: now - last,
                    elapsed: now - start,
                };
                last = now;

                let control = frame_fn(&context).map_err(|e| {
                    tracing::error!(target: "engine", frame = frames, error = %e, "Frame failed");
                    e
                })?;
                frames += 1;
                tracing::trace!(target: "engine", frame = context.frame, "Frame complete");

                if control == LoopControl::Exit {
                    break;
                }

                if let Some(budget) = budget {
                    let spent = now.elapsed();
                    if spent < budget {
                        std::thread::sleep(budget - spent);
                    }
                }
            }

            let summary = RunSummary {
                frames,
                elapsed: start.elapsed(),
            };
            tracing::info!(
                target: "engine",
                frames = summary.frames,
                elapsed_ms = summary.elapsed.as_millis() as u64,
                "Engine shutting down"
            );
            Ok(summary)
        })
    }
}

impl TryFrom<EngineConfig> for Engine {
    type Error = EngineError;

    /// 使用按配置创建的stderr日志组件
    fn try_from(config: EngineConfig) -> EngineResult<Self> {
        let logger = Logger::from_config(&config.logging)?;
        Self::new(config, logger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_math::MathError;

    fn unpaced(max_frames: Option<u64>) -> EngineConfig {
        let mut config = EngineConfig::default();
        config.performance.target_fps = 0;
        config.performance.max_frames = max_frames;
        config
    }

    #[test]
    fn test_exit_from_callback() {
        let engine = Engine::new(unpaced(None), Logger::silent()).unwrap();
        let mut seen = Vec::new();
        let summary = engine
            .run(|frame| {
                seen.push(frame.frame);
                Ok(if frame.frame == 4 {
                    LoopControl::Exit
                } else {
                    LoopControl::Continue
                })
            })
            .unwrap();
        assert_eq!(summary.frames, 5);
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_max_frames_stops_loop() {
        let engine = Engine::new(unpaced(Some(3)), Logger::silent()).unwrap();
        let mut calls = 0;
        let summary = engine
            .run(|_| {
                calls += 1;
                Ok(LoopControl::Continue)
            })
            .unwrap();
        assert_eq!(summary.frames, 3);
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_callback_error_propagates() {
        let engine = Engine::new(unpaced(Some(10)), Logger::silent()).unwrap();
        let result = engine.run(|frame| {
            if frame.frame == 2 {
                Err(MathError::IndexOutOfRange { index: 4, len: 4 }.into())
            } else {
                Ok(LoopControl::Continue)
            }
        });
        assert!(matches!(result, Err(EngineError::Math(_))));
    }

    #[test]
    fn test_pacing_respects_target_fps() {
        let mut config = unpaced(Some(3));
        config.performance.target_fps = 100;
        let engine = Engine::new(config, Logger::silent()).unwrap();
        let summary = engine.run(|_| Ok(LoopControl::Continue)).unwrap();
        // 前两帧各休眠约10ms
        assert!(summary.elapsed >= Duration::from_millis(20));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = EngineConfig::default();
        config.project.name.clear();
        assert!(matches!(
            Engine::new(config, Logger::silent()),
            Err(EngineError::Config(_))
        ));

        let engine = Engine::new(EngineConfig::default(), Logger::silent()).unwrap();
        assert_eq!(engine.name(), "kiln");
    }
}
