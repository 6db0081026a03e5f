use super::Matrix;
use crate::backend::{Backend, Element};
use crate::scalar::Real;
use crate::vector::Vector;

impl<T, B> Matrix<T, 2, B>
where
    T: Element<B, 2>,
    B: Backend,
{
    /// 按行主序字面顺序构造：
    ///
    /// ```text
    /// | n00 n01 |
    /// | n10 n11 |
    /// ```
    #[inline]
    pub fn new(n00: T, n01: T, n10: T, n11: T) -> Self {
        Self::from_cols([
            Vector::<T, 2, B>::new(n00, n10),
            Vector::<T, 2, B>::new(n01, n11),
        ])
    }

    /// `ad - bc`
    #[inline]
    pub fn determinant(&self) -> T {
        self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]
    }

    /// 对角缩放
    #[inline]
    pub fn scale(factors: Vector<T, 2, B>) -> Self {
        Self::new(factors.x(), T::zero(), T::zero(), factors.y())
    }
}

impl<T, B> Matrix<T, 2, B>
where
    T: Element<B, 2> + Real,
    B: Backend,
{
    /// 逆矩阵；奇异矩阵由调用方保证不会传入，结果为非有限值
    pub fn inverse(&self) -> Self {
        let inv_det = T::one() / self.determinant();
        Self::new(self[(1, 1)], -self[(0, 1)], -self[(1, 0)], self[(0, 0)]) * inv_det
    }

    #[inline]
    pub fn inverse_mut(&mut self) {
        *self = self.inverse();
    }

    /// 行列式绝对值低于容差时返回 `None`
    pub fn try_inverse(&self) -> Option<Self> {
        if self.determinant().abs_of() < T::TOLERANCE {
            None
        } else {
            Some(self.inverse())
        }
    }

    /// 逆时针旋转 `angle` 弧度
    pub fn rotation(angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, -sin, sin, cos)
    }
}
