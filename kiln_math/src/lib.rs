//! # kiln_math
//!
//! 游戏引擎的通用线性代数库：向量、点、矩阵、平面与四元数，
//! 每个类型都可以在编译期选择标量（FPU）或 SIMD 后端。
//!
//! ## 特性
//!
//! - **双后端**: `Fpu` 总是走标量实现；`Simd` 在 (元素类型, 维度) 能放进一个 128 位寄存器时
//!   使用 SSE/NEON，否则静默回退，两者结果在共享容差内一致
//! - **零运行时分派**: 后端由 trait 解析决定，不存在运行时分支
//! - **值语义**: 所有类型都是 `Copy`，`foo()` 返回新值，`foo_mut()` 原地修改
//! - **统一容差**: 所有浮点比较只使用 [`tolerance::EPSILON`]
//!
//! ## 快速开始
//!
//! ```rust
//! use kiln_math::{Matrix2, Vector2, Vector3A};
//!
//! let v = Vector2::new(2.4f32, 3.1);
//! let rotated = v.rotate(30f32.to_radians());
//! assert_eq!(rotated, Vector2::new(0.52846097, 3.88467875));
//!
//! let m = Matrix2::new(1.0f32, 5.0, 3.0, 2.0);
//! assert!((m * m.inverse()).is_identity_matrix(1.0e-5));
//!
//! // 同一套接口，f32 三维向量在 x86_64/aarch64 上走寄存器实现
//! let a = Vector3A::new(1.0f32, 0.0, 0.0);
//! let b = Vector3A::new(0.0f32, 1.0, 0.0);
//! assert_eq!(a.cross(b), Vector3A::new(0.0, 0.0, 1.0));
//! ```
//!
//! ## 模块
//!
//! - [`backend`]: 后端标记与编译期内核选择
//! - [`simd`]: 标量 / SSE / NEON 运算内核
//! - [`vector`], [`point`]: 向量与点
//! - [`matrix`]: 2x2 / 3x3 / 4x4 列主序方阵
//! - [`plane`], [`quaternion`]: 平面与四元数
//! - [`tolerance`]: 共享容差

pub mod backend;
pub mod error;
pub mod matrix;
pub mod plane;
pub mod point;
pub mod quaternion;
pub mod scalar;
pub mod simd;
pub mod tolerance;
pub mod vector;

// 重新导出主要类型
pub use backend::{is_accelerated, kernel_name, Backend, Element, Fpu, Simd};
pub use error::{MathError, MathResult};
pub use matrix::{Matrix, Matrix2, Matrix2A, Matrix3, Matrix3A, Matrix4, Matrix4A};
pub use plane::{Plane, PlaneSide};
pub use point::{Point, Point2, Point2A, Point3, Point3A, Point4, Point4A};
pub use quaternion::Quaternion;
pub use scalar::{Integer, Real, Scalar};
pub use tolerance::EPSILON;
pub use vector::{
    IntVector2, IntVector3, IntVector4, Vector, Vector2, Vector2A, Vector3, Vector3A, Vector4,
    Vector4A,
};

/// SIMD 向量宽度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimdWidth {
    /// 无寄存器实现，一次一个分量
    Scalar,
    /// 128 位 (SSE, NEON)
    W128,
}

/// 编译期选定的 SIMD 指令集
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimdBackend {
    /// 标量回退实现（无 SIMD）
    Scalar,
    /// SSE2 (x86/x86_64 基线)
    Sse2,
    /// SSE4.1（构建时通过 `target-feature` 开启）
    Sse41,
    /// ARM NEON (aarch64)
    Neon,
}

impl SimdBackend {
    /// 当前构建目标使用的指令集
    ///
    /// 只取决于 `cfg(target_arch)` / `cfg(target_feature)`，与运行时 CPU 无关。
    pub const ACTIVE: SimdBackend = Self::detect();

    const fn detect() -> Self {
        if cfg!(all(
            any(target_arch = "x86_64", target_arch = "x86"),
            target_feature = "sse4.1"
        )) {
            Self::Sse41
        } else if cfg!(any(
            target_arch = "x86_64",
            all(target_arch = "x86", target_feature = "sse2")
        )) {
            Self::Sse2
        } else if cfg!(all(target_arch = "aarch64", target_feature = "neon")) {
            Self::Neon
        } else {
            Self::Scalar
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Sse2 => "sse2",
            Self::Sse41 => "sse4.1",
            Self::Neon => "neon",
        }
    }

    /// 获取 SIMD 向量宽度
    pub const fn width(&self) -> SimdWidth {
        match self {
            Self::Scalar => SimdWidth::Scalar,
            Self::Sse2 | Self::Sse41 | Self::Neon => SimdWidth::W128,
        }
    }

    /// 一个寄存器能并行处理的 f32 数量
    pub const fn f32_lanes(&self) -> usize {
        match self.width() {
            SimdWidth::Scalar => 1,
            SimdWidth::W128 => 4,
        }
    }
}

impl std::fmt::Display for SimdBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
