//! 统一错误处理模块
//!
//! 提供引擎范围内的统一错误类型定义
//!
//! 数学库自身的错误 ([`MathError`]) 与配置错误 ([`ConfigError`]) 都可以通过 `?`
//! 自动转换为 [`EngineError`]。

use kiln_math::MathError;
use thiserror::Error;

use crate::config::ConfigError;

/// 引擎核心错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Initialization error: {0}")]
    Init(String),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Math error: {0}")]
    Math(#[from] MathError),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 引擎结果类型别名
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion() {
        let math_err = MathError::IndexOutOfRange { index: 5, len: 4 };
        let engine_err: EngineError = math_err.into();
        assert!(matches!(engine_err, EngineError::Math(_)));

        let config_err = ConfigError::ValidationError("bad".to_string());
        let engine_err: EngineError = config_err.into();
        assert!(matches!(engine_err, EngineError::Config(_)));
    }

    #[test]
    fn test_error_display() {
        let err = EngineError::from(MathError::InvalidLength {
            expected: 16,
            actual: 9,
        });
        assert_eq!(err.to_string(), "Math error: expected 16 components, got 9");
        assert_eq!(
            EngineError::Init("no project".to_string()).to_string(),
            "Initialization error: no project"
        );
    }
}
