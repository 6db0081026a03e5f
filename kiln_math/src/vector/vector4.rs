use super::Vector;
use crate::backend::{Backend, Element};

impl<T, B> Vector<T, 4, B>
where
    T: Element<B, 4>,
    B: Backend,
{
    #[inline]
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self::from_array([x, y, z, w])
    }

    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::zero())
    }

    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one(), T::zero(), T::zero())
    }

    #[inline]
    pub fn unit_z() -> Self {
        Self::new(T::zero(), T::zero(), T::one(), T::zero())
    }

    #[inline]
    pub fn unit_w() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
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
    pub fn z(&self) -> T {
        self.as_slice()[2]
    }

    #[inline]
    pub fn w(&self) -> T {
        self.as_slice()[3]
    }

    #[inline]
    pub fn set_x(&mut self, x: T) {
        self.as_mut_slice()[0] = x;
    }

    #[inline]
    pub fn set_y(&mut self, y: T) {
        self.as_mut_slice()[1] = y;
    }

    #[inline]
    pub fn set_z(&mut self, z: T) {
        self.as_mut_slice()[2] = z;
    }

    #[inline]
    pub fn set_w(&mut self, w: T) {
        self.as_mut_slice()[3] = w;
    }

    /// 丢弃 w 分量
    #[inline]
    pub fn truncate(self) -> Vector<T, 3, B>
    where
        T: Element<B, 3>,
    {
        Vector::from_array([self.x(), self.y(), self.z()])
    }
}
