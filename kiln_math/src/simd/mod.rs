//! 运算内核
//!
//! 每个内核为固定维度的分量元组实现同一组逐元素运算：
//! - [`scalar`]: 纯标量回退实现，对任意 `Scalar` 与任意维度可用
//! - [`x86`]: SSE2/SSE4.1 128 位寄存器实现（x86/x86_64）
//! - [`arm`]: NEON 128 位寄存器实现（aarch64）
//!
//! 选择哪个内核由 [`crate::backend::Element`] 在编译期决定，运行时没有任何分支。

pub mod scalar;

#[cfg(any(
    target_arch = "x86_64",
    all(target_arch = "x86", target_feature = "sse2")
))]
pub mod x86;

#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
pub mod arm;

pub use scalar::ScalarKernel;

use crate::scalar::Scalar;

/// 固定维度 `D` 的分量运算内核
///
/// 寄存器内核的填充分量在每次运算后都保持为零，
/// 所以 `dot` 可以直接对整个寄存器做水平求和。
pub trait LaneKernel<T: Scalar, const D: usize>: 'static {
    /// 分量存储
    type Lanes: Copy + Send + Sync + 'static;

    /// 内核名称（用于调试输出）
    const NAME: &'static str;

    /// 是否为寄存器实现
    const ACCELERATED: bool;

    fn load(values: [T; D]) -> Self::Lanes;

    fn store(lanes: &Self::Lanes) -> [T; D];

    /// 只暴露前 `D` 个分量，填充分量不可见
    fn as_slice(lanes: &Self::Lanes) -> &[T];

    fn as_mut_slice(lanes: &mut Self::Lanes) -> &mut [T];

    #[inline]
    fn splat(value: T) -> Self::Lanes {
        Self::load([value; D])
    }

    fn add(a: &Self::Lanes, b: &Self::Lanes) -> Self::Lanes;

    fn sub(a: &Self::Lanes, b: &Self::Lanes) -> Self::Lanes;

    /// 逐分量乘法（不是点积）
    fn mul(a: &Self::Lanes, b: &Self::Lanes) -> Self::Lanes;

    /// 逐分量除法，除零遵循原生语义
    fn div(a: &Self::Lanes, b: &Self::Lanes) -> Self::Lanes;

    fn neg(a: &Self::Lanes) -> Self::Lanes;

    fn min(a: &Self::Lanes, b: &Self::Lanes) -> Self::Lanes;

    fn max(a: &Self::Lanes, b: &Self::Lanes) -> Self::Lanes;

    #[inline]
    fn scale(a: &Self::Lanes, factor: T) -> Self::Lanes {
        Self::mul(a, &Self::splat(factor))
    }

    fn dot(a: &Self::Lanes, b: &Self::Lanes) -> T;
}

/// 编译期选定的 f32 寄存器内核
#[cfg(any(
    target_arch = "x86_64",
    all(target_arch = "x86", target_feature = "sse2")
))]
pub type F32Kernel = x86::SseKernel;

/// 编译期选定的 f64 寄存器内核（仅二维）
#[cfg(any(
    target_arch = "x86_64",
    all(target_arch = "x86", target_feature = "sse2")
))]
pub type F64Kernel = x86::SseKernel;

#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
pub type F32Kernel = arm::NeonKernel;

#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
pub type F64Kernel = arm::NeonKernel;

#[cfg(not(any(
    target_arch = "x86_64",
    all(target_arch = "x86", target_feature = "sse2"),
    all(target_arch = "aarch64", target_feature = "neon")
)))]
pub type F32Kernel = ScalarKernel;

#[cfg(not(any(
    target_arch = "x86_64",
    all(target_arch = "x86", target_feature = "sse2"),
    all(target_arch = "aarch64", target_feature = "neon")
)))]
pub type F64Kernel = ScalarKernel;

/// 16 字节对齐的四通道 f32 存储
///
/// 维度小于 4 时高位通道为填充，始终为零。
#[repr(C, align(16))]
#[derive(Clone, Copy, Default, Debug, PartialEq, bytemuck::Zeroable)]
pub struct F32x4(pub [f32; 4]);

// SAFETY: 四个 f32 恰好占满 16 字节，没有填充字节。
unsafe impl bytemuck::Pod for F32x4 {}

impl F32x4 {
    /// 从前 `D` 个分量构造，剩余通道置零
    #[inline]
    pub fn from_prefix<const D: usize>(values: [f32; D]) -> Self {
        let mut lanes = [0.0f32; 4];
        lanes[..D].copy_from_slice(&values);
        Self(lanes)
    }

    #[inline]
    pub fn prefix<const D: usize>(&self) -> [f32; D] {
        std::array::from_fn(|i| self.0[i])
    }

    /// 将 `dims` 之后的通道清零
    #[inline]
    pub fn clear_padding(&mut self, dims: usize) {
        for lane in &mut self.0[dims..] {
            *lane = 0.0;
        }
    }
}

/// 16 字节对齐的双通道 f64 存储
#[repr(C, align(16))]
#[derive(Clone, Copy, Default, Debug, PartialEq, bytemuck::Zeroable)]
pub struct F64x2(pub [f64; 2]);

// SAFETY: 两个 f64 恰好占满 16 字节，没有填充字节。
unsafe impl bytemuck::Pod for F64x2 {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_storage_layout() {
        assert_eq!(std::mem::align_of::<F32x4>(), 16);
        assert_eq!(std::mem::size_of::<F32x4>(), 16);
        assert_eq!(std::mem::align_of::<F64x2>(), 16);

        let lanes = F32x4::from_prefix([1.0, 2.0, 3.0]);
        let bytes = bytemuck::bytes_of(&lanes);
        assert_eq!(bytes.len(), 16);
        assert_eq!(lanes.0[3], 0.0);
        assert_eq!(lanes.prefix::<3>(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_clear_padding() {
        let mut lanes = F32x4([1.0, 2.0, f32::NAN, f32::INFINITY]);
        lanes.clear_padding(2);
        assert_eq!(lanes, F32x4([1.0, 2.0, 0.0, 0.0]));
    }
}
