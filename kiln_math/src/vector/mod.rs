//! 通用向量
//!
//! [`Vector<T, D, B>`] 是所有向量、点、矩阵列的共同基础：`D` 个 `T` 分量，
//! 存储形式由后端 `B` 在编译期决定（见 [`crate::backend`]）。两种后端暴露完全相同的接口，
//! 分量访问器 `x()/y()/z()/w()` 与 `[]` 都是同一份存储上的计算视图。
//!
//! 命名约定：`foo()` 返回新值且不修改输入，`foo_mut()` 原地修改。

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use num_traits::NumCast;

use crate::backend::{Backend, Element, Fpu, Simd};
use crate::error::{check_index, MathError, MathResult};
use crate::scalar::{Real, Scalar};
use crate::simd::LaneKernel;

mod ops;
mod vector2;
mod vector3;
mod vector4;

/// 二维向量（标量后端）
pub type Vector2<T> = Vector<T, 2, Fpu>;
/// 三维向量（标量后端）
pub type Vector3<T> = Vector<T, 3, Fpu>;
/// 四维向量（标量后端）
pub type Vector4<T> = Vector<T, 4, Fpu>;

/// 二维向量（SIMD 后端，条件不满足时回退标量）
pub type Vector2A<T> = Vector<T, 2, Simd>;
/// 三维向量（SIMD 后端）
pub type Vector3A<T> = Vector<T, 3, Simd>;
/// 四维向量（SIMD 后端）
pub type Vector4A<T> = Vector<T, 4, Simd>;

pub type IntVector2 = Vector2<i32>;
pub type IntVector3 = Vector3<i32>;
pub type IntVector4 = Vector4<i32>;

/// `D` 维向量
pub struct Vector<T, const D: usize, B = Fpu>
where
    T: Element<B, D>,
    B: Backend,
{
    lanes: <T::Kernel as LaneKernel<T, D>>::Lanes,
    backend: PhantomData<B>,
}

impl<T, const D: usize, B> Clone for Vector<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const D: usize, B> Copy for Vector<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
}

impl<T, const D: usize, B> Vector<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    pub const DIM: usize = D;

    /// 该实例化是否解析到寄存器内核
    pub const ACCELERATED: bool = <T::Kernel as LaneKernel<T, D>>::ACCELERATED;

    #[inline]
    fn from_lanes(lanes: <T::Kernel as LaneKernel<T, D>>::Lanes) -> Self {
        Self {
            lanes,
            backend: PhantomData,
        }
    }

    /// 按 x, y, z, w 顺序从数组构造
    #[inline]
    pub fn from_array(values: [T; D]) -> Self {
        Self::from_lanes(T::Kernel::load(values))
    }

    #[inline]
    pub fn to_array(self) -> [T; D] {
        T::Kernel::store(&self.lanes)
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        T::Kernel::as_slice(&self.lanes)
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        T::Kernel::as_mut_slice(&mut self.lanes)
    }

    /// 从任意（可能未对齐的）切片复制构造，长度必须等于 `D`
    pub fn from_slice(values: &[T]) -> MathResult<Self> {
        let array: [T; D] = values.try_into().map_err(|_| MathError::InvalidLength {
            expected: D,
            actual: values.len(),
        })?;
        Ok(Self::from_array(array))
    }

    #[inline]
    pub fn splat(value: T) -> Self {
        Self::from_lanes(T::Kernel::splat(value))
    }

    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    #[inline]
    pub fn one() -> Self {
        Self::splat(T::one())
    }

    /// 可失败的分量读取
    pub fn get(&self, index: usize) -> MathResult<T> {
        check_index(index, D)?;
        Ok(self.as_slice()[index])
    }

    /// 可失败的分量写入
    pub fn try_set(&mut self, index: usize, value: T) -> MathResult<()> {
        check_index(index, D)?;
        self.as_mut_slice()[index] = value;
        Ok(())
    }

    #[inline]
    pub fn map(self, f: impl FnMut(T) -> T) -> Self {
        Self::from_array(self.to_array().map(f))
    }

    #[inline]
    pub fn zip_map(self, rhs: Self, mut f: impl FnMut(T, T) -> T) -> Self {
        let a = self.to_array();
        let b = rhs.to_array();
        Self::from_array(std::array::from_fn(|i| f(a[i], b[i])))
    }

    /// 换到另一个后端，分量不变
    #[inline]
    pub fn to_backend<B2>(self) -> Vector<T, D, B2>
    where
        T: Element<B2, D>,
        B2: Backend,
    {
        Vector::from_array(self.to_array())
    }

    /// 显式的数值族转换（例如 `i32 -> f32`），不可表示时返回错误
    pub fn cast<U>(self) -> MathResult<Vector<U, D, B>>
    where
        U: Element<B, D>,
    {
        let source = self.to_array();
        let mut out = [U::zero(); D];
        for (component, (dst, src)) in out.iter_mut().zip(source.iter()).enumerate() {
            *dst = <U as NumCast>::from(*src).ok_or(MathError::Cast { component })?;
        }
        Ok(Vector::from_array(out))
    }

    /// 实际使用的内核名称
    pub fn kernel_name() -> &'static str {
        <T::Kernel as LaneKernel<T, D>>::NAME
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> T {
        T::Kernel::dot(&self.lanes, &rhs.lanes)
    }

    #[inline]
    pub fn sqr_magnitude(self) -> T {
        self.dot(self)
    }

    /// 逐分量最大值
    #[inline]
    pub fn max(self, rhs: Self) -> Self {
        Self::from_lanes(T::Kernel::max(&self.lanes, &rhs.lanes))
    }

    #[inline]
    pub fn max_mut(&mut self, rhs: Self) {
        *self = self.max(rhs);
    }

    /// 逐分量最小值
    #[inline]
    pub fn min(self, rhs: Self) -> Self {
        Self::from_lanes(T::Kernel::min(&self.lanes, &rhs.lanes))
    }

    #[inline]
    pub fn min_mut(&mut self, rhs: Self) {
        *self = self.min(rhs);
    }

    /// 每个分量替换为 +1（非负，含零）或 -1（负）
    #[inline]
    pub fn sign_vector(self) -> Self {
        self.map(Scalar::sign_of)
    }

    #[inline]
    pub fn sign_vector_mut(&mut self) {
        *self = self.sign_vector();
    }

    #[inline]
    pub fn negate(self) -> Self {
        -self
    }

    #[inline]
    pub fn negate_mut(&mut self) {
        *self = -*self;
    }

    /// 逐分量乘法
    #[inline]
    pub fn scale(self, factors: Self) -> Self {
        self * factors
    }

    #[inline]
    pub fn scale_mut(&mut self, factors: Self) {
        *self *= factors;
    }

    /// 分量绝对值的最大者
    #[inline]
    pub fn max_abs_component(self) -> T {
        self.as_slice()
            .iter()
            .fold(T::zero(), |acc, &c| acc.max_of(c.abs_of()))
    }
}

impl<T, const D: usize, B> Vector<T, D, B>
where
    T: Element<B, D> + Real,
    B: Backend,
{
    #[inline]
    pub fn magnitude(self) -> T {
        self.sqr_magnitude().sqrt()
    }

    /// 归一化；长度低于容差时返回零向量，不会产生非有限值
    #[inline]
    pub fn normalize(self) -> Self {
        let magnitude = self.magnitude();
        if magnitude < T::TOLERANCE {
            Self::zero()
        } else {
            self / magnitude
        }
    }

    #[inline]
    pub fn normalize_mut(&mut self) {
        *self = self.normalize();
    }

    /// 无条件除以长度；零向量的结果为 NaN
    #[inline]
    pub fn normalize_unchecked(self) -> Self {
        self / self.magnitude()
    }

    #[inline]
    pub fn normalize_unchecked_mut(&mut self) {
        *self = self.normalize_unchecked();
    }

    /// 逐分量倒数
    #[inline]
    pub fn comp_inverse(self) -> Self {
        Self::one() / self
    }

    #[inline]
    pub fn comp_inverse_mut(&mut self) {
        *self = self.comp_inverse();
    }

    /// 关于法线的反射：`v - 2(v·n)n`
    #[inline]
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * (T::two() * self.dot(normal))
    }

    #[inline]
    pub fn reflect_mut(&mut self, normal: Self) {
        *self = self.reflect(normal);
    }

    /// 在 `onto` 上的投影；`onto` 为零向量时结果为零
    #[inline]
    pub fn project(self, onto: Self) -> Self {
        let denominator = onto.sqr_magnitude();
        if denominator < T::TOLERANCE {
            Self::zero()
        } else {
            onto * (self.dot(onto) / denominator)
        }
    }

    #[inline]
    pub fn project_mut(&mut self, onto: Self) {
        *self = self.project(onto);
    }

    /// 去掉在 `onto` 上的投影分量
    #[inline]
    pub fn reject(self, onto: Self) -> Self {
        self - self.project(onto)
    }

    #[inline]
    pub fn reject_mut(&mut self, onto: Self) {
        *self = self.reject(onto);
    }

    /// `a·b / (|a||b|)`，任一为零向量时为 NaN
    #[inline]
    pub fn cosine_angle(self, rhs: Self) -> T {
        self.dot(rhs) / (self.magnitude() * rhs.magnitude())
    }

    /// 夹角（弧度）
    #[inline]
    pub fn angle(self, rhs: Self) -> T {
        let cosine = self.cosine_angle(rhs);
        cosine.max_of(-T::one()).min_of(T::one()).acos()
    }

    /// 线性插值，`t` 截断到 [0, 1]
    #[inline]
    pub fn lerp(self, to: Self, t: T) -> Self {
        self.lerp_unclamped(to, t.max_of(T::zero()).min_of(T::one()))
    }

    #[inline]
    pub fn lerp_unclamped(self, to: Self, t: T) -> Self {
        self + (to - self) * t
    }

    #[inline]
    pub fn is_normalized(self) -> bool {
        self.sqr_magnitude().approx_eq(T::one())
    }

    /// 两个方向的余弦；零向量归一化后仍为零，因此结果为 0
    #[inline]
    fn direction_cosine(self, rhs: Self) -> T {
        self.normalize().dot(rhs.normalize())
    }

    /// 方向垂直（与长度无关）
    #[inline]
    pub fn is_perpendicular(self, rhs: Self) -> bool {
        self.direction_cosine(rhs).abs_of() < T::TOLERANCE
    }

    /// 同向或反向平行（与长度无关）
    #[inline]
    pub fn is_parallel(self, rhs: Self) -> bool {
        self.direction_cosine(rhs).abs_of() > T::one() - T::TOLERANCE
    }

    /// 同向平行（与长度无关）
    ///
    /// `==` 按分量绝对容差比较，只有长度不小于 `1e-2` 时 `a == b` 才蕴含
    /// `a.is_coincident(b)`；更短的向量在容差内的偏移足以改变方向。
    #[inline]
    pub fn is_coincident(self, rhs: Self) -> bool {
        self.direction_cosine(rhs) > T::one() - T::TOLERANCE
    }

    /// 缩放使绝对值最大的分量等于 `extent`；零向量保持不变
    pub(crate) fn bind_to_extent(self, extent: T) -> Self {
        let largest = self.max_abs_component();
        if largest < T::TOLERANCE {
            self
        } else {
            self * (extent / largest)
        }
    }

    /// 仅当绝对值最大的分量超过 `extent` 时缩放
    pub(crate) fn clamp_to_extent(self, extent: T) -> Self {
        if self.max_abs_component() > extent {
            self.bind_to_extent(extent)
        } else {
            self
        }
    }
}

impl<T, const D: usize, B> Default for Vector<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    fn default() -> Self {
        Self::zero()
    }
}

/// 浮点按共享容差逐分量比较，整数精确比较
impl<T, const D: usize, B> PartialEq for Vector<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    fn eq(&self, other: &Self) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.approx_eq(*b))
    }
}

impl<T, const D: usize, B> Index<usize> for Vector<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.as_slice().get(index) {
            Some(component) => component,
            None => panic!("{}", MathError::IndexOutOfRange { index, len: D }),
        }
    }
}

impl<T, const D: usize, B> IndexMut<usize> for Vector<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.as_mut_slice().get_mut(index) {
            Some(component) => component,
            None => panic!("{}", MathError::IndexOutOfRange { index, len: D }),
        }
    }
}

impl<T, const D: usize, B> From<[T; D]> for Vector<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    fn from(values: [T; D]) -> Self {
        Self::from_array(values)
    }
}

impl<T, const D: usize> From<Vector<T, D, Fpu>> for Vector<T, D, Simd>
where
    T: Element<Fpu, D> + Element<Simd, D>,
{
    fn from(v: Vector<T, D, Fpu>) -> Self {
        v.to_backend()
    }
}

impl<T, const D: usize> From<Vector<T, D, Simd>> for Vector<T, D, Fpu>
where
    T: Element<Fpu, D> + Element<Simd, D>,
{
    fn from(v: Vector<T, D, Simd>) -> Self {
        v.to_backend()
    }
}

/// `Name(c0, c1, ...)`
pub(crate) fn write_components<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    components: &[T],
) -> fmt::Result {
    write!(f, "{name}(")?;
    for (i, component) in components.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{component}")?;
    }
    write!(f, ")")
}

impl<T, const D: usize, B> fmt::Display for Vector<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components(f, &format!("Vector{D}"), self.as_slice())
    }
}

impl<T, const D: usize, B> fmt::Debug for Vector<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector{D}<{}>{:?}", Self::kernel_name(), self.as_slice())
    }
}
