//! 平面
//!
//! 以一个四维向量 `(nx, ny, nz, d)` 表示满足 `n·p + d = 0` 的点集。
//! `new` 原样保存法线；距离、分类和投影都按法线长度换算为真实距离。

use std::fmt;

use crate::backend::{Backend, Element, Fpu};
use crate::point::Point;
use crate::scalar::Real;
use crate::vector::{write_components, Vector};

/// 点相对平面的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaneSide {
    /// 法线指向的一侧
    Front,
    Back,
    /// 距离在容差以内
    On,
}

#[derive(Clone, Copy, PartialEq, Default)]
pub struct Plane<T, B = Fpu>(Vector<T, 4, B>)
where
    T: Element<B, 4>,
    B: Backend;

impl<T, B> Plane<T, B>
where
    T: Element<B, 4> + Element<B, 3> + Real,
    B: Backend,
{
    #[inline]
    pub fn new(normal: Vector<T, 3, B>, distance: T) -> Self {
        Self(normal.extend(distance))
    }

    /// 过 `point`、法线为 `normal`（内部归一化）的平面
    pub fn from_point_normal(point: Point<T, 3, B>, normal: Vector<T, 3, B>) -> Self {
        let normal = normal.normalize();
        Self::new(normal, -normal.dot(point.to_vector()))
    }

    /// 过三点的平面，法线方向由 `(b - a) × (c - a)` 决定（逆时针为正面）
    pub fn from_points(a: Point<T, 3, B>, b: Point<T, 3, B>, c: Point<T, 3, B>) -> Self {
        Self::from_point_normal(a, (b - a).cross(c - a))
    }

    #[inline]
    pub fn normal(&self) -> Vector<T, 3, B> {
        self.0.truncate()
    }

    /// 常数项 `d`
    #[inline]
    pub fn distance(&self) -> T {
        self.0.w()
    }

    #[inline]
    pub fn as_vector(&self) -> Vector<T, 4, B> {
        self.0
    }

    /// 整体除以法线长度；退化法线保持不变
    pub fn normalize(self) -> Self {
        let length = self.normal().magnitude();
        if length < T::TOLERANCE {
            self
        } else {
            Self(self.0 / length)
        }
    }

    #[inline]
    pub fn normalize_mut(&mut self) {
        *self = self.normalize();
    }

    /// 有向距离（与法线长度无关）；退化法线返回 `n·p + d`
    pub fn signed_distance(&self, point: Point<T, 3, B>) -> T {
        let normal = self.normal();
        let raw = normal.dot(point.to_vector()) + self.distance();
        let length = normal.magnitude();
        if length < T::TOLERANCE {
            raw
        } else {
            raw / length
        }
    }

    pub fn classify(&self, point: Point<T, 3, B>) -> PlaneSide {
        let distance = self.signed_distance(point);
        if distance > T::TOLERANCE {
            PlaneSide::Front
        } else if distance < -T::TOLERANCE {
            PlaneSide::Back
        } else {
            PlaneSide::On
        }
    }

    /// 点在平面上的正交投影
    pub fn project_point(&self, point: Point<T, 3, B>) -> Point<T, 3, B> {
        point - self.normal().normalize() * self.signed_distance(point)
    }
}

impl<T, B> fmt::Display for Plane<T, B>
where
    T: Element<B, 4>,
    B: Backend,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components(f, "Plane", self.0.as_slice())
    }
}

impl<T, B> fmt::Debug for Plane<T, B>
where
    T: Element<B, 4>,
    B: Backend,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Plane<{}>{:?}", Vector::<T, 4, B>::kernel_name(), self.0.as_slice())
    }
}
