//! 点类型
//!
//! [`Point`] 与 [`Vector`] 共用存储，但语义不同：点表示位置，向量表示位移。
//! 因此 `点 - 点 = 向量`、`点 ± 向量 = 点`，而 `点 + 点` 没有定义。

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Sub, SubAssign};

use crate::backend::{Backend, Element, Fpu, Simd};
use crate::scalar::Real;
use crate::vector::{write_components, Vector};

pub type Point2<T> = Point<T, 2, Fpu>;
pub type Point3<T> = Point<T, 3, Fpu>;
pub type Point4<T> = Point<T, 4, Fpu>;

pub type Point2A<T> = Point<T, 2, Simd>;
pub type Point3A<T> = Point<T, 3, Simd>;
pub type Point4A<T> = Point<T, 4, Simd>;

/// `D` 维空间中的位置
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Point<T, const D: usize, B = Fpu>(Vector<T, D, B>)
where
    T: Element<B, D>,
    B: Backend;

impl<T, const D: usize, B> Point<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    #[inline]
    pub fn from_vector(v: Vector<T, D, B>) -> Self {
        Self(v)
    }

    /// 原点到该点的位移
    #[inline]
    pub fn to_vector(self) -> Vector<T, D, B> {
        self.0
    }

    #[inline]
    pub fn from_array(values: [T; D]) -> Self {
        Self(Vector::from_array(values))
    }

    #[inline]
    pub fn to_array(self) -> [T; D] {
        self.0.to_array()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.0.as_slice()
    }

    #[inline]
    pub fn origin() -> Self {
        Self(Vector::zero())
    }

    #[inline]
    pub fn sqr_distance(self, other: Self) -> T {
        (other - self).sqr_magnitude()
    }
}

impl<T, const D: usize, B> Point<T, D, B>
where
    T: Element<B, D> + Real,
    B: Backend,
{
    #[inline]
    pub fn distance(self, other: Self) -> T {
        (other - self).magnitude()
    }

    /// 线性插值，`t` 截断到 [0, 1]
    #[inline]
    pub fn lerp(self, to: Self, t: T) -> Self {
        Self(self.0.lerp(to.0, t))
    }

    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        Self(self.0.lerp_unclamped(other.0, crate::scalar::half()))
    }
}

impl<T, B> Point<T, 2, B>
where
    T: Element<B, 2>,
    B: Backend,
{
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self(Vector::<T, 2, B>::new(x, y))
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
    pub fn extend(self, z: T) -> Point<T, 3, B>
    where
        T: Element<B, 3>,
    {
        Point(self.0.extend(z))
    }
}

impl<T, B> Point<T, 3, B>
where
    T: Element<B, 3>,
    B: Backend,
{
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self(Vector::<T, 3, B>::new(x, y, z))
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
    pub fn truncate(self) -> Point<T, 2, B>
    where
        T: Element<B, 2>,
    {
        Point(self.0.truncate())
    }

    #[inline]
    pub fn extend(self, w: T) -> Point<T, 4, B>
    where
        T: Element<B, 4>,
    {
        Point(self.0.extend(w))
    }

    /// 投影到 z = 1 平面：`(x/z, y/z)`
    #[inline]
    pub fn perspective_divide(self) -> Point<T, 2, B>
    where
        T: Element<B, 2>,
    {
        let z = self.z();
        Point::<T, 2, B>::new(self.x() / z, self.y() / z)
    }
}

impl<T, B> Point<T, 4, B>
where
    T: Element<B, 4>,
    B: Backend,
{
    #[inline]
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self(Vector::<T, 4, B>::new(x, y, z, w))
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

    #[inline]
    pub fn truncate(self) -> Point<T, 3, B>
    where
        T: Element<B, 3>,
    {
        Point(self.0.truncate())
    }

    /// 齐次坐标除以 w
    #[inline]
    pub fn perspective_divide(self) -> Point<T, 3, B>
    where
        T: Element<B, 3>,
    {
        let w = self.w();
        Point::<T, 3, B>::new(self.x() / w, self.y() / w, self.z() / w)
    }
}

impl<T, B> From<Point<T, 4, B>> for Point<T, 3, B>
where
    T: Element<B, 4> + Element<B, 3>,
    B: Backend,
{
    fn from(p: Point<T, 4, B>) -> Self {
        p.truncate()
    }
}

impl<T, B> From<Point<T, 3, B>> for Point<T, 2, B>
where
    T: Element<B, 3> + Element<B, 2>,
    B: Backend,
{
    fn from(p: Point<T, 3, B>) -> Self {
        p.truncate()
    }
}

impl<T, const D: usize, B> Vector<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    /// 从 `start` 指向 `end` 的位移
    #[inline]
    pub fn from_points(start: Point<T, D, B>, end: Point<T, D, B>) -> Self {
        end - start
    }
}

impl<T, const D: usize, B> Sub for Point<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    type Output = Vector<T, D, B>;

    #[inline]
    fn sub(self, rhs: Self) -> Vector<T, D, B> {
        self.0 - rhs.0
    }
}

impl<T, const D: usize, B> Add<Vector<T, D, B>> for Point<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    type Output = Self;

    #[inline]
    fn add(self, rhs: Vector<T, D, B>) -> Self {
        Self(self.0 + rhs)
    }
}

impl<T, const D: usize, B> Sub<Vector<T, D, B>> for Point<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Vector<T, D, B>) -> Self {
        Self(self.0 - rhs)
    }
}

impl<T, const D: usize, B> AddAssign<Vector<T, D, B>> for Point<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    #[inline]
    fn add_assign(&mut self, rhs: Vector<T, D, B>) {
        self.0 += rhs;
    }
}

impl<T, const D: usize, B> SubAssign<Vector<T, D, B>> for Point<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Vector<T, D, B>) {
        self.0 -= rhs;
    }
}

impl<T, const D: usize, B> Index<usize> for Point<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const D: usize, B> IndexMut<usize> for Point<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T, const D: usize, B> fmt::Display for Point<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components(f, &format!("Point{D}"), self.as_slice())
    }
}

impl<T, const D: usize, B> fmt::Debug for Point<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point{D}<{}>{:?}", Vector::<T, D, B>::kernel_name(), self.as_slice())
    }
}
