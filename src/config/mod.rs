/// 统一配置系统
///
/// 提供TOML/JSON配置文件、环境变量覆盖和配置验证
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub mod logging;
pub mod performance;

pub use logging::{LogLevel, LoggingConfig};
pub use performance::PerformanceConfig;

use crate::impl_default;

/// 引擎配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 文件读取错误
    #[error("Config file error: {0}")]
    FileError(#[from] std::io::Error),
    /// 解析错误
    #[error("Config parse error: {0}")]
    ParseError(String),
    /// 验证错误
    #[error("Config validation error: {0}")]
    ValidationError(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// 引擎主配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// 项目配置
    #[serde(default)]
    pub project: ProjectConfig,

    /// 性能配置
    #[serde(default)]
    pub performance: PerformanceConfig,

    /// 数学库配置
    #[serde(default)]
    pub math: MathConfig,

    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl_default!(EngineConfig {
    project: ProjectConfig::default(),
    performance: PerformanceConfig::default(),
    math: MathConfig::default(),
    logging: LoggingConfig::default(),
});

impl EngineConfig {
    /// 创建默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 从TOML文件加载配置
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_toml_str(&content)
    }

    /// 从TOML字符串解析配置
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 从JSON文件加载配置
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_json_str(&content)
    }

    /// 从JSON字符串解析配置
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 保存为TOML文件
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        fs::write(path, content).map_err(ConfigError::FileError)
    }

    /// 保存为JSON文件
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        fs::write(path, content).map_err(ConfigError::FileError)
    }

    /// 从环境变量覆盖配置
    ///
    /// 支持 `KILN_PROJECT_NAME`、`KILN_TARGET_FPS`、`KILN_MAX_FRAMES`、`KILN_LOG_LEVEL`。
    pub fn apply_env_overrides(&mut self) -> ConfigResult<()> {
        self.apply_overrides(|key| env::var(key).ok())
    }

    /// 用任意查找函数覆盖配置，无法解析的值返回 `ParseError`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("KILN_PROJECT_NAME") {
            self.project.name = name;
        }
        if let Some(val) = lookup("KILN_TARGET_FPS") {
            self.performance.target_fps = parse_override("KILN_TARGET_FPS", &val)?;
        }
        if let Some(val) = lookup("KILN_MAX_FRAMES") {
            self.performance.max_frames = Some(parse_override("KILN_MAX_FRAMES", &val)?);
        }
        if let Some(val) = lookup("KILN_LOG_LEVEL") {
            self.logging.level = parse_override("KILN_LOG_LEVEL", &val)?;
        }
        Ok(())
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        self.project.validate()?;
        self.performance.validate()?;
        Ok(())
    }

    /// 文件存在时按扩展名加载（`.json` 走JSON，其余走TOML），否则使用默认配置；
    /// 随后应用环境变量并验证
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let mut config = if !path.exists() {
            Self::default()
        } else if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_file(path)?
        } else {
            Self::from_toml_file(path)?
        };
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }
}

fn parse_override<T: std::str::FromStr>(key: &str, value: &str) -> ConfigResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::ParseError(format!("{key}: invalid value {value:?}")))
}

/// 项目配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// 项目名称
    pub name: String,
}

impl_default!(ProjectConfig {
    name: "kiln".to_string(),
});

impl ProjectConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Project name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// 数学库配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MathConfig {
    /// 逐帧变换使用 `Simd` 后端（目标不支持时自动回退为标量）
    pub prefer_simd: bool,
}

impl_default!(MathConfig { prefer_simd: true });

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.project.name, "kiln");
        assert!(config.math.prefer_simd);
    }

    #[test]
    fn test_toml_serialization() {
        let mut config = EngineConfig::default();
        config.performance.max_frames = Some(42);
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: EngineConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_json_serialization() {
        let config = EngineConfig::default();
        let json_str = serde_json::to_string(&config).unwrap();
        let parsed = EngineConfig::from_json_str(&json_str).unwrap();
        assert_eq!(config.performance.target_fps, parsed.performance.target_fps);
        assert_eq!(parsed.performance.max_frames, None);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = EngineConfig::from_toml_str(
            r#"
            [project]
            name = "orbit"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.project.name, "orbit");
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.performance, PerformanceConfig::default());
    }

    #[test]
    fn test_parse_error() {
        let err = EngineConfig::from_toml_str("[performance]\ntarget_fps = \"fast\"").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("KILN_PROJECT_NAME", "sandbox"),
            ("KILN_TARGET_FPS", "30"),
            ("KILN_MAX_FRAMES", " 5 "),
            ("KILN_LOG_LEVEL", "WARN"),
        ]
        .into_iter()
        .collect();

        let mut config = EngineConfig::default();
        config
            .apply_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.project.name, "sandbox");
        assert_eq!(config.performance.target_fps, 30);
        assert_eq!(config.performance.max_frames, Some(5));
        assert_eq!(config.logging.level, LogLevel::Warn);

        let err = config
            .apply_overrides(|key| (key == "KILN_TARGET_FPS").then(|| "-1".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("KILN_TARGET_FPS"));
    }

    #[test]
    fn test_validation() {
        let mut config = EngineConfig::default();
        config.project.name = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));

        let mut config = EngineConfig::default();
        config.performance.target_fps = 5000;
        assert!(config.validate().is_err());
    }

    proptest::proptest! {
        #[test]
        fn prop_valid_config_survives_both_formats(
            name in "[a-z][a-z0-9_]{0,15}",
            target_fps in 0u32..=performance::MAX_TARGET_FPS,
            max_frames in proptest::option::of(1u64..100_000),
            prefer_simd in proptest::bool::ANY,
        ) {
            let mut config = EngineConfig::default();
            config.project.name = name;
            config.performance.target_fps = target_fps;
            config.performance.max_frames = max_frames;
            config.math.prefer_simd = prefer_simd;
            proptest::prop_assert!(config.validate().is_ok());

            let toml_str = toml::to_string(&config).unwrap();
            proptest::prop_assert_eq!(&EngineConfig::from_toml_str(&toml_str).unwrap(), &config);
            let json_str = serde_json::to_string(&config).unwrap();
            proptest::prop_assert_eq!(&EngineConfig::from_json_str(&json_str).unwrap(), &config);
        }
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = EngineConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.project, ProjectConfig::default());
    }
}
