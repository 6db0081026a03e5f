use super::{ConfigError, ConfigResult};
use crate::impl_default;
use serde::{Deserialize, Serialize};

/// 帧率上限
pub const MAX_TARGET_FPS: u32 = 1000;

/// 性能配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// 目标帧率（0表示不限速）
    pub target_fps: u32,

    /// 运行的最大帧数（未设置时由回调决定何时退出）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_frames: Option<u64>,
}

impl_default!(PerformanceConfig {
    target_fps: 60,
    max_frames: None,
});

impl PerformanceConfig {
    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.target_fps > MAX_TARGET_FPS {
            return Err(ConfigError::ValidationError(format!(
                "Invalid target FPS {} (max {MAX_TARGET_FPS})",
                self.target_fps
            )));
        }
        if self.max_frames == Some(0) {
            return Err(ConfigError::ValidationError(
                "max_frames must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// 每帧时间预算；不限速时为 `None`
    pub fn frame_budget(&self) -> Option<std::time::Duration> {
        (self.target_fps > 0)
            .then(|| std::time::Duration::from_secs_f64(1.0 / f64::from(self.target_fps)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_frame_budget() {
        let mut config = PerformanceConfig::default();
        assert_eq!(config.frame_budget(), Some(Duration::from_secs_f64(1.0 / 60.0)));
        config.target_fps = 0;
        assert_eq!(config.frame_budget(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_max_frames_rejected() {
        let config = PerformanceConfig {
            max_frames: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
