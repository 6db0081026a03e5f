//! 四元数
//!
//! 存储为一个四维向量 `(x, y, z, w)`，`w` 为实部。旋转相关的运算假定输入为单位四元数。

use std::fmt;
use std::ops::{Mul, MulAssign};

use crate::backend::{Backend, Element, Fpu};
use crate::matrix::Matrix;
use crate::scalar::Real;
use crate::vector::{write_components, Vector};

#[derive(Clone, Copy, PartialEq)]
pub struct Quaternion<T, B = Fpu>(Vector<T, 4, B>)
where
    T: Element<B, 4>,
    B: Backend;

impl<T, B> Quaternion<T, B>
where
    T: Element<B, 4> + Element<B, 3> + Real,
    B: Backend,
{
    #[inline]
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self(Vector::<T, 4, B>::new(x, y, z, w))
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }

    /// 绕 `axis`（内部归一化）旋转 `angle` 弧度
    pub fn from_axis_angle(axis: Vector<T, 3, B>, angle: T) -> Self {
        let (sin, cos) = (angle * crate::scalar::half()).sin_cos();
        Self(axis.normalize().extend(T::zero()) * sin + Vector::<T, 4, B>::unit_w() * cos)
    }

    #[inline]
    pub fn x(&self) -> T {
        self.0.x()
    }

    #[inline]
    pub fn y(&self) -> T {
        self.0.y()
    }

    #[inline]
    pub fn z(&self) -> T {
        self.0.z()
    }

    #[inline]
    pub fn w(&self) -> T {
        self.0.w()
    }

    /// 虚部
    #[inline]
    pub fn xyz(&self) -> Vector<T, 3, B> {
        self.0.truncate()
    }

    #[inline]
    pub fn as_vector(&self) -> Vector<T, 4, B> {
        self.0
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> T {
        self.0.dot(rhs.0)
    }

    #[inline]
    pub fn magnitude(self) -> T {
        self.0.magnitude()
    }

    #[inline]
    pub fn normalize(self) -> Self {
        Self(self.0.normalize())
    }

    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x(), -self.y(), -self.z(), self.w())
    }

    /// 共轭除以模长平方；零四元数由调用方保证不会传入
    pub fn inverse(self) -> Self {
        Self(self.conjugate().0 / self.0.sqr_magnitude())
    }

    /// `q v q*`，展开为两次叉积
    pub fn rotate_vector(self, v: Vector<T, 3, B>) -> Vector<T, 3, B> {
        let u = self.xyz();
        let t = u.cross(v) * T::two();
        v + t * self.w() + u.cross(t)
    }

    #[rustfmt::skip]
    pub fn to_matrix3(self) -> Matrix<T, 3, B> {
        let (x, y, z, w) = (self.x(), self.y(), self.z(), self.w());
        let (one, two) = (T::one(), T::two());
        Matrix::<T, 3, B>::new(
            one - two * (y * y + z * z), two * (x * y - w * z), two * (x * z + w * y),
            two * (x * y + w * z), one - two * (x * x + z * z), two * (y * z - w * x),
            two * (x * z - w * y), two * (y * z + w * x), one - two * (x * x + y * y),
        )
    }

    #[inline]
    pub fn to_matrix4(self) -> Matrix<T, 4, B> {
        Matrix::<T, 4, B>::from_matrix3(self.to_matrix3())
    }

    /// 球面线性插值，`t` 截断到 [0, 1]，总是走较短的弧
    pub fn slerp(self, to: Self, t: T) -> Self {
        let t = t.max_of(T::zero()).min_of(T::one());
        let mut cosine = self.dot(to);
        let mut to = to.0;
        if cosine < T::zero() {
            cosine = -cosine;
            to = -to;
        }

        // 夹角过小时 sin(theta) 接近零，退化为归一化线性插值
        if cosine > T::one() - T::TOLERANCE {
            return Self(self.0.lerp_unclamped(to, t).normalize());
        }

        let theta = cosine.acos();
        let sin_theta = theta.sin();
        let a = ((T::one() - t) * theta).sin() / sin_theta;
        let b = (t * theta).sin() / sin_theta;
        Self(self.0 * a + to * b)
    }
}

impl<T, B> Default for Quaternion<T, B>
where
    T: Element<B, 4> + Element<B, 3> + Real,
    B: Backend,
{
    fn default() -> Self {
        Self::identity()
    }
}

/// Hamilton 积：`a * b` 表示先施加 `b` 再施加 `a`
impl<T, B> Mul for Quaternion<T, B>
where
    T: Element<B, 4> + Element<B, 3> + Real,
    B: Backend,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let (x1, y1, z1, w1) = (self.x(), self.y(), self.z(), self.w());
        let (x2, y2, z2, w2) = (rhs.x(), rhs.y(), rhs.z(), rhs.w());
        Self::new(
            w1 * x2 + x1 * w2 + y1 * z2 - z1 * y2,
            w1 * y2 - x1 * z2 + y1 * w2 + z1 * x2,
            w1 * z2 + x1 * y2 - y1 * x2 + z1 * w2,
            w1 * w2 - x1 * x2 - y1 * y2 - z1 * z2,
        )
    }
}

impl<T, B> MulAssign for Quaternion<T, B>
where
    T: Element<B, 4> + Element<B, 3> + Real,
    B: Backend,
{
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T, B> fmt::Display for Quaternion<T, B>
where
    T: Element<B, 4>,
    B: Backend,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components(f, "Quaternion", self.0.as_slice())
    }
}

impl<T, B> fmt::Debug for Quaternion<T, B>
where
    T: Element<B, 4>,
    B: Backend,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quaternion<{}>{:?}", Vector::<T, 4, B>::kernel_name(), self.0.as_slice())
    }
}
