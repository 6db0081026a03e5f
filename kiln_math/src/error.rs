//! 数学库错误类型
//!
//! 运算本身不会失败；只有越界访问、长度不匹配的切片构造和数值族转换会返回错误。

use thiserror::Error;

/// 数学库错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// 分量/行/列索引越界
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// 从切片构造时长度不符
    #[error("expected {expected} components, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// 分量无法在目标数值类型中表示
    #[error("component {component} cannot be represented in the target type")]
    Cast { component: usize },
}

pub type MathResult<T> = Result<T, MathError>;

/// 越界检查，供各类型的可失败访问器使用
#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> MathResult<()> {
    if index < len {
        Ok(())
    } else {
        Err(MathError::IndexOutOfRange { index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_error_display() {
        let error = MathError::IndexOutOfRange { index: 4, len: 3 };
        assert_eq!(error.to_string(), "index 4 out of range for length 3");
    }

    #[test]
    fn test_check_index() {
        assert!(check_index(2, 3).is_ok());
        assert_eq!(
            check_index(3, 3),
            Err(MathError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_length_error_display() {
        let error = MathError::InvalidLength { expected: 4, actual: 2 };
        assert!(error.to_string().contains("expected 4"));
    }
}
