//! 元素类型约束
//!
//! [`Scalar`] 是所有向量/矩阵分量的基础约束（有符号数值类型），
//! [`Real`] 限定浮点族，[`Integer`] 限定整数族。仅对整数有意义的运算
//! （取模、位运算、移位、自增自减）只为 `Integer` 实现，浮点向量上调用会在编译期被拒绝。

use std::fmt::{Debug, Display};
use std::ops::{Shl, Shr};

use num_traits::{Float, FloatConst, NumCast, PrimInt, Signed};

use crate::tolerance::EPSILON;

/// 向量分量的数值类型
pub trait Scalar:
    Signed + NumCast + Copy + PartialOrd + Default + Debug + Display + Send + Sync + 'static
{
    /// 共享容差在该类型中的取值（整数为 0）
    const TOLERANCE: Self;

    /// 使用共享容差比较；整数为精确比较
    fn approx_eq(self, other: Self) -> bool;

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// 逐分量取较小值；比较不成立（含 NaN）时返回 `other`，与 `minps` 一致
    #[inline]
    fn min_of(self, other: Self) -> Self {
        if self < other {
            self
        } else {
            other
        }
    }

    /// 逐分量取较大值；比较不成立（含 NaN）时返回 `other`，与 `maxps` 一致
    #[inline]
    fn max_of(self, other: Self) -> Self {
        if self > other {
            self
        } else {
            other
        }
    }

    #[inline]
    fn abs_of(self) -> Self {
        Signed::abs(&self)
    }

    /// 符号：非负为 +1，负为 -1（零映射到 +1）
    #[inline]
    fn sign_of(self) -> Self {
        if self < Self::zero() {
            -Self::one()
        } else {
            Self::one()
        }
    }
}

/// 浮点族
pub trait Real: Scalar + Float + FloatConst {}

impl<T: Scalar + Float + FloatConst> Real for T {}

/// 整数族
pub trait Integer: Scalar + PrimInt + Shl<Self, Output = Self> + Shr<Self, Output = Self> {}

impl<T> Integer for T where T: Scalar + PrimInt + Shl<T, Output = T> + Shr<T, Output = T> {}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            const TOLERANCE: Self = EPSILON as $t;

            #[inline]
            fn approx_eq(self, other: Self) -> bool {
                (self - other).abs() < Self::TOLERANCE
            }
        }
    )*};
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            const TOLERANCE: Self = 0;

            #[inline]
            fn approx_eq(self, other: Self) -> bool {
                self == other
            }
        }
    )*};
}

impl_scalar_float!(f32, f64);
impl_scalar_int!(i8, i16, i32, i64);

/// 在 `Real` 中构造 1/2
#[inline]
pub(crate) fn half<T: Real>() -> T {
    T::one() / T::two()
}
