use super::Vector;
use crate::backend::{Backend, Element};
use crate::scalar::Real;

impl<T, B> Vector<T, 2, B>
where
    T: Element<B, 2>,
    B: Backend,
{
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self::from_array([x, y])
    }

    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero())
    }

    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one())
    }

    #[inline]
    pub fn x(&self) -> T {
        self.as_slice()[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.as_slice()[1]
    }

    #[inline]
    pub fn set_x(&mut self, x: T) {
        self.as_mut_slice()[0] = x;
    }

    #[inline]
    pub fn set_y(&mut self, y: T) {
        self.as_mut_slice()[1] = y;
    }

    /// 追加 z 分量
    #[inline]
    pub fn extend(self, z: T) -> Vector<T, 3, B>
    where
        T: Element<B, 3>,
    {
        Vector::from_array([self.x(), self.y(), z])
    }

    /// 逆时针 90°：`(-y, x)`
    #[inline]
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y(), self.x())
    }

    #[inline]
    pub fn perpendicular_mut(&mut self) {
        let x = self.x();
        self.set_x(-self.y());
        self.set_y(x);
    }

    /// 顺时针 90°：`(y, -x)`
    #[inline]
    pub fn reverse_perpendicular(self) -> Self {
        Self::new(self.y(), -self.x())
    }

    #[inline]
    pub fn reverse_perpendicular_mut(&mut self) {
        let x = self.x();
        self.set_x(self.y());
        self.set_y(-x);
    }
}

impl<T, B> Vector<T, 2, B>
where
    T: Element<B, 2> + Real,
    B: Backend,
{
    /// 逆时针旋转 `angle` 弧度
    pub fn rotate(self, angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        let (x, y) = (self.x(), self.y());
        Self::new(x * cos - y * sin, x * sin + y * cos)
    }

    #[inline]
    pub fn rotate_mut(&mut self, angle: T) {
        *self = self.rotate(angle);
    }

    /// 顺时针旋转 `angle` 弧度
    #[inline]
    pub fn clockwise_rotate(self, angle: T) -> Self {
        self.rotate(-angle)
    }

    #[inline]
    pub fn clockwise_rotate_mut(&mut self, angle: T) {
        *self = self.clockwise_rotate(angle);
    }

    /// 缩放到正方形边界上：`max(|x|, |y|) == radius`
    #[inline]
    pub fn bind_to_square(self, radius: T) -> Self {
        self.bind_to_extent(radius)
    }

    #[inline]
    pub fn bind_to_square_mut(&mut self, radius: T) {
        *self = self.bind_to_square(radius);
    }

    /// 超出正方形时才缩回边界
    #[inline]
    pub fn clamp_to_square(self, radius: T) -> Self {
        self.clamp_to_extent(radius)
    }

    #[inline]
    pub fn clamp_to_square_mut(&mut self, radius: T) {
        *self = self.clamp_to_square(radius);
    }
}
