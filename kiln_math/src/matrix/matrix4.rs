use super::Matrix;
use crate::backend::{Backend, Element};
use crate::point::Point;
use crate::scalar::Real;
use crate::vector::Vector;

/// 上两行与下两行的 2x2 子式，行列式与伴随矩阵共用
struct Minors<T> {
    s: [T; 6],
    c: [T; 6],
}

impl<T, B> Matrix<T, 4, B>
where
    T: Element<B, 4>,
    B: Backend,
{
    /// 按行主序字面顺序构造
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    #[inline]
    pub fn new(
        n00: T, n01: T, n02: T, n03: T,
        n10: T, n11: T, n12: T, n13: T,
        n20: T, n21: T, n22: T, n23: T,
        n30: T, n31: T, n32: T, n33: T,
    ) -> Self {
        Self::from_cols([
            Vector::<T, 4, B>::new(n00, n10, n20, n30),
            Vector::<T, 4, B>::new(n01, n11, n21, n31),
            Vector::<T, 4, B>::new(n02, n12, n22, n32),
            Vector::<T, 4, B>::new(n03, n13, n23, n33),
        ])
    }

    fn minors(&self) -> Minors<T> {
        let a = |r: usize, c: usize| self[(r, c)];
        Minors {
            s: [
                a(0, 0) * a(1, 1) - a(1, 0) * a(0, 1),
                a(0, 0) * a(1, 2) - a(1, 0) * a(0, 2),
                a(0, 0) * a(1, 3) - a(1, 0) * a(0, 3),
                a(0, 1) * a(1, 2) - a(1, 1) * a(0, 2),
                a(0, 1) * a(1, 3) - a(1, 1) * a(0, 3),
                a(0, 2) * a(1, 3) - a(1, 2) * a(0, 3),
            ],
            c: [
                a(2, 0) * a(3, 1) - a(3, 0) * a(2, 1),
                a(2, 0) * a(3, 2) - a(3, 0) * a(2, 2),
                a(2, 0) * a(3, 3) - a(3, 0) * a(2, 3),
                a(2, 1) * a(3, 2) - a(3, 1) * a(2, 2),
                a(2, 1) * a(3, 3) - a(3, 1) * a(2, 3),
                a(2, 2) * a(3, 3) - a(3, 2) * a(2, 3),
            ],
        }
    }

    /// 按前两行做 Laplace 展开
    pub fn determinant(&self) -> T {
        let Minors { s, c } = self.minors();
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }

    /// 伴随矩阵（未除以行列式）
    #[rustfmt::skip]
    fn adjugate(&self) -> Self {
        let a = |r: usize, c: usize| self[(r, c)];
        let Minors { s, c } = self.minors();
        Self::new(
            a(1, 1) * c[5] - a(1, 2) * c[4] + a(1, 3) * c[3],
            -a(0, 1) * c[5] + a(0, 2) * c[4] - a(0, 3) * c[3],
            a(3, 1) * s[5] - a(3, 2) * s[4] + a(3, 3) * s[3],
            -a(2, 1) * s[5] + a(2, 2) * s[4] - a(2, 3) * s[3],

            -a(1, 0) * c[5] + a(1, 2) * c[2] - a(1, 3) * c[1],
            a(0, 0) * c[5] - a(0, 2) * c[2] + a(0, 3) * c[1],
            -a(3, 0) * s[5] + a(3, 2) * s[2] - a(3, 3) * s[1],
            a(2, 0) * s[5] - a(2, 2) * s[2] + a(2, 3) * s[1],

            a(1, 0) * c[4] - a(1, 1) * c[2] + a(1, 3) * c[0],
            -a(0, 0) * c[4] + a(0, 1) * c[2] - a(0, 3) * c[0],
            a(3, 0) * s[4] - a(3, 1) * s[2] + a(3, 3) * s[0],
            -a(2, 0) * s[4] + a(2, 1) * s[2] - a(2, 3) * s[0],

            -a(1, 0) * c[3] + a(1, 1) * c[1] - a(1, 2) * c[0],
            a(0, 0) * c[3] - a(0, 1) * c[1] + a(0, 2) * c[0],
            -a(3, 0) * s[3] + a(3, 1) * s[1] - a(3, 2) * s[0],
            a(2, 0) * s[3] - a(2, 1) * s[1] + a(2, 2) * s[0],
        )
    }

    /// 平移矩阵（列向量约定，平移量位于第 3 列）
    pub fn translation(offset: Vector<T, 3, B>) -> Self
    where
        T: Element<B, 3>,
    {
        let mut m = Self::identity();
        m[3] = offset.extend(T::one());
        m
    }

    pub fn scale(factors: Vector<T, 3, B>) -> Self
    where
        T: Element<B, 3>,
    {
        let f = factors.extend(T::one());
        Self::from_fn(|r, c| if r == c { f[r] } else { T::zero() })
    }

    /// 左上角嵌入 3x3，其余为单位阵
    pub fn from_matrix3(m: Matrix<T, 3, B>) -> Self
    where
        T: Element<B, 3>,
    {
        Self::from_fn(|r, c| {
            if r < 3 && c < 3 {
                m[(r, c)]
            } else if r == c {
                T::one()
            } else {
                T::zero()
            }
        })
    }

    /// 取左上角 3x3
    pub fn to_matrix3(&self) -> Matrix<T, 3, B>
    where
        T: Element<B, 3>,
    {
        Matrix::<T, 3, B>::from_fn(|r, c| self[(r, c)])
    }

    /// 变换方向向量（w = 0，不受平移影响）
    pub fn transform_vector(&self, v: Vector<T, 3, B>) -> Vector<T, 3, B>
    where
        T: Element<B, 3>,
    {
        (*self * v.extend(T::zero())).truncate()
    }
}

impl<T, B> Matrix<T, 4, B>
where
    T: Element<B, 4> + Real,
    B: Backend,
{
    /// 伴随矩阵除以行列式；奇异矩阵由调用方保证不会传入
    pub fn inverse(&self) -> Self {
        self.adjugate() * (T::one() / self.determinant())
    }

    #[inline]
    pub fn inverse_mut(&mut self) {
        *self = self.inverse();
    }

    pub fn try_inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs_of() < T::TOLERANCE {
            None
        } else {
            Some(self.adjugate() * (T::one() / det))
        }
    }

    pub fn rotation_x(angle: T) -> Self
    where
        T: Element<B, 3>,
    {
        Self::from_matrix3(Matrix::<T, 3, B>::rotation_x(angle))
    }

    pub fn rotation_y(angle: T) -> Self
    where
        T: Element<B, 3>,
    {
        Self::from_matrix3(Matrix::<T, 3, B>::rotation_y(angle))
    }

    pub fn rotation_z(angle: T) -> Self
    where
        T: Element<B, 3>,
    {
        Self::from_matrix3(Matrix::<T, 3, B>::rotation_z(angle))
    }

    /// 变换点（w = 1），结果做齐次除法
    pub fn transform_point(&self, p: Point<T, 3, B>) -> Point<T, 3, B>
    where
        T: Element<B, 3>,
    {
        let h = *self * p.to_vector().extend(T::one());
        Point::from_vector(h).perspective_divide()
    }
}
