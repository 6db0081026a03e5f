use super::Matrix;
use crate::backend::{Backend, Element};
use crate::scalar::Real;
use crate::vector::Vector;

impl<T, B> Matrix<T, 3, B>
where
    T: Element<B, 3>,
    B: Backend,
{
    /// 按行主序字面顺序构造
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    #[inline]
    pub fn new(
        n00: T, n01: T, n02: T,
        n10: T, n11: T, n12: T,
        n20: T, n21: T, n22: T,
    ) -> Self {
        Self::from_cols([
            Vector::<T, 3, B>::new(n00, n10, n20),
            Vector::<T, 3, B>::new(n01, n11, n21),
            Vector::<T, 3, B>::new(n02, n12, n22),
        ])
    }

    /// 列的标量三重积 `c0·(c1×c2)`
    #[inline]
    pub fn determinant(&self) -> T {
        Vector::scalar_triple(self[0], self[1], self[2])
    }

    #[rustfmt::skip]
    #[inline]
    pub fn scale(factors: Vector<T, 3, B>) -> Self {
        let zero = T::zero();
        Self::new(
            factors.x(), zero, zero,
            zero, factors.y(), zero,
            zero, zero, factors.z(),
        )
    }
}

impl<T, B> Matrix<T, 3, B>
where
    T: Element<B, 3> + Real,
    B: Backend,
{
    /// 伴随矩阵除以行列式；逆矩阵的各行是列向量两两叉积
    pub fn inverse(&self) -> Self {
        let [c0, c1, c2] = *self.cols();
        let inv_det = T::one() / self.determinant();
        Self::from_rows([c1.cross(c2), c2.cross(c0), c0.cross(c1)]) * inv_det
    }

    #[inline]
    pub fn inverse_mut(&mut self) {
        *self = self.inverse();
    }

    pub fn try_inverse(&self) -> Option<Self> {
        if self.determinant().abs_of() < T::TOLERANCE {
            None
        } else {
            Some(self.inverse())
        }
    }

    #[rustfmt::skip]
    pub fn rotation_x(angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        let (zero, one) = (T::zero(), T::one());
        Self::new(
            one, zero, zero,
            zero, cos, -sin,
            zero, sin, cos,
        )
    }

    #[rustfmt::skip]
    pub fn rotation_y(angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        let (zero, one) = (T::zero(), T::one());
        Self::new(
            cos, zero, sin,
            zero, one, zero,
            -sin, zero, cos,
        )
    }

    #[rustfmt::skip]
    pub fn rotation_z(angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        let (zero, one) = (T::zero(), T::one());
        Self::new(
            cos, -sin, zero,
            sin, cos, zero,
            zero, zero, one,
        )
    }

    /// 绕任意轴旋转，轴在内部归一化
    #[rustfmt::skip]
    pub fn from_axis_angle(axis: Vector<T, 3, B>, angle: T) -> Self {
        let axis = axis.normalize();
        let (x, y, z) = (axis.x(), axis.y(), axis.z());
        let (sin, cos) = angle.sin_cos();
        let t = T::one() - cos;
        Self::new(
            t * x * x + cos, t * x * y - sin * z, t * x * z + sin * y,
            t * x * y + sin * z, t * y * y + cos, t * y * z - sin * x,
            t * x * z - sin * y, t * y * z + sin * x, t * z * z + cos,
        )
    }
}
