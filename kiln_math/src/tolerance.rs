//! 全局容差
//!
//! 所有浮点相等比较与分类谓词（归一化、垂直、平行、共线、共面、平面分类、
//! 可逆判断）都只使用这一个常量，不允许在别处出现临时的字面量阈值。

use crate::scalar::Scalar;

/// 浮点比较容差。按元素类型转换后暴露为 [`Scalar::TOLERANCE`]。
pub const EPSILON: f64 = 1.0e-5;

/// 按共享容差判断两个标量是否相等；整数为精确比较。
#[inline]
pub fn approx_eq<T: Scalar>(a: T, b: T) -> bool {
    a.approx_eq(b)
}

/// 按共享容差判断标量是否为零
#[inline]
pub fn approx_zero<T: Scalar>(a: T) -> bool {
    a.approx_eq(T::zero())
}
