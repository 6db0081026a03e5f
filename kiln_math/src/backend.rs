//! 编译期后端选择
//!
//! 每个向量/矩阵类型都带一个后端标记参数 `B`：
//! - [`Fpu`]：总是使用标量内核
//! - [`Simd`]：请求寄存器实现，条件满足时使用，否则静默回退到标量内核
//!
//! 条件由 [`Element<B, D>`] 的实现决定，即 (元素类型, 维度, 标记) 三元组的编译期谓词：
//!
//! | 元素类型 | 维度 | `Simd` 解析结果 |
//! |---|---|---|
//! | `f32` | 2, 3, 4 | [`F32Kernel`]（SSE / NEON，目标不支持时为标量） |
//! | `f64` | 2 | [`F64Kernel`] |
//! | `f64` | 3, 4 | [`ScalarKernel`] |
//! | 整数 | 2, 3, 4 | [`ScalarKernel`] |
//!
//! 其它维度的 `Simd` 组合没有实现，不能通过编译。
//! 同一组 (T, D, B) 永远只解析到一个具体内核。

use std::fmt::Debug;

use crate::scalar::Scalar;
use crate::simd::{F32Kernel, F64Kernel, LaneKernel, ScalarKernel};

/// 后端标记
pub trait Backend: Copy + Default + Debug + PartialEq + Send + Sync + 'static {
    const NAME: &'static str;
}

/// 标量（FPU）后端
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Fpu;

/// SIMD 后端（按需启用寄存器实现）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Simd;

impl Backend for Fpu {
    const NAME: &'static str = "fpu";
}

impl Backend for Simd {
    const NAME: &'static str = "simd";
}

/// (元素类型, 维度, 后端标记) 到内核的编译期映射
pub trait Element<B: Backend, const D: usize>: Scalar {
    type Kernel: LaneKernel<Self, D>;
}

impl<T: Scalar, const D: usize> Element<Fpu, D> for T {
    type Kernel = ScalarKernel;
}

macro_rules! select_kernel {
    ($kernel:ty => $t:ty: $($dim:literal),*) => {$(
        impl Element<Simd, $dim> for $t {
            type Kernel = $kernel;
        }
    )*};
}

select_kernel!(F32Kernel => f32: 2, 3, 4);
select_kernel!(F64Kernel => f64: 2);
select_kernel!(ScalarKernel => f64: 3, 4);
select_kernel!(ScalarKernel => i8: 2, 3, 4);
select_kernel!(ScalarKernel => i16: 2, 3, 4);
select_kernel!(ScalarKernel => i32: 2, 3, 4);
select_kernel!(ScalarKernel => i64: 2, 3, 4);

/// 查询某组合是否解析到寄存器内核
pub const fn is_accelerated<T, B, const D: usize>() -> bool
where
    T: Element<B, D>,
    B: Backend,
{
    <T::Kernel as LaneKernel<T, D>>::ACCELERATED
}

/// 查询某组合解析到的内核名称
pub const fn kernel_name<T, B, const D: usize>() -> &'static str
where
    T: Element<B, D>,
    B: Backend,
{
    <T::Kernel as LaneKernel<T, D>>::NAME
}
