//! 方阵
//!
//! [`Matrix<T, D, B>`] 以 `D` 个列向量存储（列主序）。两种访问方式共用同一份存储：
//! - `m[c]` 返回第 `c` 列
//! - `m[(r, c)]` 返回第 `r` 行第 `c` 列的元素
//!
//! 扁平构造函数 `new(...)` 按行主序的字面顺序接收参数，便于照抄数学书上的写法。

use std::array;
use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::backend::{Backend, Element, Fpu, Simd};
use crate::error::{check_index, MathError, MathResult};
use crate::vector::Vector;

mod matrix2;
mod matrix3;
mod matrix4;

pub type Matrix2<T> = Matrix<T, 2, Fpu>;
pub type Matrix3<T> = Matrix<T, 3, Fpu>;
pub type Matrix4<T> = Matrix<T, 4, Fpu>;

pub type Matrix2A<T> = Matrix<T, 2, Simd>;
pub type Matrix3A<T> = Matrix<T, 3, Simd>;
pub type Matrix4A<T> = Matrix<T, 4, Simd>;

/// `D x D` 矩阵
#[derive(Clone, Copy, PartialEq)]
pub struct Matrix<T, const D: usize, B = Fpu>
where
    T: Element<B, D>,
    B: Backend,
{
    cols: [Vector<T, D, B>; D],
}

impl<T, const D: usize, B> Matrix<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    #[inline]
    pub fn from_cols(cols: [Vector<T, D, B>; D]) -> Self {
        Self { cols }
    }

    /// 以行向量构造
    #[inline]
    pub fn from_rows(rows: [Vector<T, D, B>; D]) -> Self {
        Self::from_cols(rows).transpose()
    }

    /// 按 `(row, col)` 逐元素构造
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self::from_cols(array::from_fn(|c| {
            Vector::from_array(array::from_fn(|r| f(r, c)))
        }))
    }

    /// 从列主序切片构造，长度必须为 `D * D`
    pub fn from_slice(values: &[T]) -> MathResult<Self> {
        if values.len() != D * D {
            return Err(MathError::InvalidLength {
                expected: D * D,
                actual: values.len(),
            });
        }
        Ok(Self::from_fn(|r, c| values[c * D + r]))
    }

    #[inline]
    pub fn zero() -> Self {
        Self::from_cols([Vector::zero(); D])
    }

    pub fn identity() -> Self {
        Self::from_fn(|r, c| if r == c { T::one() } else { T::zero() })
    }

    #[inline]
    pub fn cols(&self) -> &[Vector<T, D, B>; D] {
        &self.cols
    }

    /// 第 `c` 列；越界时 panic
    #[inline]
    pub fn col(&self, c: usize) -> Vector<T, D, B> {
        self[c]
    }

    pub fn try_col(&self, c: usize) -> MathResult<Vector<T, D, B>> {
        check_index(c, D)?;
        Ok(self.cols[c])
    }

    /// 第 `r` 行；越界时 panic
    pub fn row(&self, r: usize) -> Vector<T, D, B> {
        Vector::from_array(array::from_fn(|c| self.cols[c][r]))
    }

    /// 可失败的元素读取
    pub fn get(&self, row: usize, col: usize) -> MathResult<T> {
        check_index(col, D)?;
        self.cols[col].get(row)
    }

    pub fn transpose(&self) -> Self {
        Self::from_fn(|r, c| self.cols[r][c])
    }

    #[inline]
    pub fn transpose_mut(&mut self) {
        *self = self.transpose();
    }

    pub fn diagonal(&self) -> Vector<T, D, B> {
        Vector::from_array(array::from_fn(|i| self.cols[i][i]))
    }

    pub fn trace(&self) -> T {
        (0..D).fold(T::zero(), |acc, i| acc + self.cols[i][i])
    }

    /// 每个元素与单位阵对应元素之差都不超过 `threshold`
    pub fn is_identity_matrix(&self, threshold: T) -> bool {
        (0..D).all(|c| {
            (0..D).all(|r| {
                let expected = if r == c { T::one() } else { T::zero() };
                (self.cols[c][r] - expected).abs_of() <= threshold
            })
        })
    }

    pub fn to_backend<B2>(&self) -> Matrix<T, D, B2>
    where
        T: Element<B2, D>,
        B2: Backend,
    {
        Matrix::from_cols(self.cols.map(|c| c.to_backend()))
    }
}

macro_rules! impl_flat_arrays {
    ($($dim:literal => $len:literal),*) => {$(
        impl<T, B> Matrix<T, $dim, B>
        where
            T: Element<B, $dim>,
            B: Backend,
        {
            /// 列主序扁平数组
            pub fn from_cols_array(values: [T; $len]) -> Self {
                Self::from_fn(|r, c| values[c * $dim + r])
            }

            /// 行主序扁平数组
            pub fn from_rows_array(values: [T; $len]) -> Self {
                Self::from_fn(|r, c| values[r * $dim + c])
            }

            pub fn to_cols_array(&self) -> [T; $len] {
                array::from_fn(|i| self.cols[i / $dim][i % $dim])
            }
        }
    )*};
}

impl_flat_arrays!(2 => 4, 3 => 9, 4 => 16);

impl<T, const D: usize, B> Default for Matrix<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    fn default() -> Self {
        Self::zero()
    }
}

impl<T, const D: usize, B> Index<usize> for Matrix<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    type Output = Vector<T, D, B>;

    fn index(&self, col: usize) -> &Vector<T, D, B> {
        match self.cols.get(col) {
            Some(column) => column,
            None => panic!("{}", MathError::IndexOutOfRange { index: col, len: D }),
        }
    }
}

impl<T, const D: usize, B> IndexMut<usize> for Matrix<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    fn index_mut(&mut self, col: usize) -> &mut Vector<T, D, B> {
        match self.cols.get_mut(col) {
            Some(column) => column,
            None => panic!("{}", MathError::IndexOutOfRange { index: col, len: D }),
        }
    }
}

impl<T, const D: usize, B> Index<(usize, usize)> for Matrix<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self[col][row]
    }
}

impl<T, const D: usize, B> IndexMut<(usize, usize)> for Matrix<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self[col][row]
    }
}

impl<T, const D: usize, B> Mul<Vector<T, D, B>> for Matrix<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    type Output = Vector<T, D, B>;

    /// 列的线性组合：`sum_k col_k * v[k]`
    fn mul(self, v: Vector<T, D, B>) -> Vector<T, D, B> {
        self.cols
            .iter()
            .zip(v.as_slice())
            .fold(Vector::zero(), |acc, (col, &k)| acc + *col * k)
    }
}

impl<T, const D: usize, B> Mul for Matrix<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_cols(rhs.cols.map(|c| self * c))
    }
}

impl<T, const D: usize, B> MulAssign for Matrix<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T, const D: usize, B> Mul<T> for Matrix<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::from_cols(self.cols.map(|c| c * rhs))
    }
}

impl<T, const D: usize, B> MulAssign<T> for Matrix<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T, const D: usize, B> Add for Matrix<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_cols(array::from_fn(|i| self.cols[i] + rhs.cols[i]))
    }
}

impl<T, const D: usize, B> AddAssign for Matrix<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T, const D: usize, B> Sub for Matrix<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_cols(array::from_fn(|i| self.cols[i] - rhs.cols[i]))
    }
}

impl<T, const D: usize, B> SubAssign for Matrix<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T, const D: usize, B> Neg for Matrix<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_cols(self.cols.map(|c| -c))
    }
}

/// 按行输出：`[[n00, n01], [n10, n11]]`
fn write_rows<T, const D: usize, B>(
    f: &mut fmt::Formatter<'_>,
    m: &Matrix<T, D, B>,
) -> fmt::Result
where
    T: Element<B, D>,
    B: Backend,
{
    write!(f, "[")?;
    for r in 0..D {
        if r > 0 {
            write!(f, ", ")?;
        }
        write!(f, "[")?;
        for c in 0..D {
            if c > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", m.cols[c][r])?;
        }
        write!(f, "]")?;
    }
    write!(f, "]")
}

impl<T, const D: usize, B> fmt::Display for Matrix<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix{D}")?;
        write_rows(f, self)
    }
}

impl<T, const D: usize, B> fmt::Debug for Matrix<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix{D}<{}>", Vector::<T, D, B>::kernel_name())?;
        write_rows(f, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{Vector2, Vector3};

    #[test]
    fn test_column_and_element_views_alias() {
        let mut m = Matrix2::new(1.0f32, 2.0, 3.0, 4.0);
        assert_eq!(m[0], Vector2::new(1.0, 3.0));
        assert_eq!(m[(0, 1)], 2.0);

        m[(1, 0)] = 9.0;
        assert_eq!(m[0].y(), 9.0);
        m[1].set_x(-1.0);
        assert_eq!(m[(0, 1)], -1.0);
        assert_eq!(m.row(0), Vector2::new(1.0, -1.0));
    }

    #[test]
    fn test_fallible_access() {
        let m = Matrix3::<f64>::identity();
        assert_eq!(m.get(2, 2), Ok(1.0));
        assert_eq!(m.get(3, 0), Err(MathError::IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(m.try_col(5), Err(MathError::IndexOutOfRange { index: 5, len: 3 }));
        assert_eq!(m.try_col(1), Ok(Vector3::unit_y()));
    }

    #[test]
    #[should_panic(expected = "index 2 out of range for length 2")]
    fn test_index_out_of_range_fails_fast() {
        let m = Matrix2::<f32>::identity();
        let _ = m[(0, 2)];
    }

    #[test]
    fn test_flat_constructors() {
        let by_rows = Matrix3::from_rows_array([1, 2, 3, 4, 5, 6, 7, 8, 9]);
        let literal = Matrix3::new(1, 2, 3, 4, 5, 6, 7, 8, 9);
        assert_eq!(by_rows, literal);

        let by_cols = Matrix3::from_cols_array([1, 4, 7, 2, 5, 8, 3, 6, 9]);
        assert_eq!(by_cols, literal);
        assert_eq!(by_cols.to_cols_array(), [1, 4, 7, 2, 5, 8, 3, 6, 9]);

        let sliced = Matrix3::from_slice(&literal.to_cols_array()).unwrap();
        assert_eq!(sliced, literal);
        assert_eq!(
            Matrix3::<i32>::from_slice(&[1, 2, 3]),
            Err(MathError::InvalidLength { expected: 9, actual: 3 })
        );
    }

    #[test]
    fn test_transpose_diagonal_trace() {
        let m = Matrix3::new(1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0);
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose()[(0, 2)], 7.0);
        assert_eq!(m.diagonal(), Vector3::new(1.0, 5.0, 10.0));
        assert_eq!(m.trace(), 16.0);

        let mut t = m;
        t.transpose_mut();
        assert_eq!(t.row(0), m.col(0));
    }

    #[test]
    fn test_elementwise_operators() {
        let a = Matrix2::new(1, 2, 3, 4);
        let b = Matrix2::new(4, 3, 2, 1);
        assert_eq!(a + b, Matrix2::new(5, 5, 5, 5));
        assert_eq!(a - a, Matrix2::zero());
        assert_eq!(-a * 2, Matrix2::new(-2, -4, -6, -8));

        let mut c = a;
        c += b;
        c -= b;
        c *= 3;
        assert_eq!(c, Matrix2::new(3, 6, 9, 12));
        assert_eq!(Matrix2::<i32>::default(), Matrix2::zero());
    }

    #[test]
    fn test_products() {
        let a = Matrix2::new(1, 2, 3, 4);
        let b = Matrix2::new(0, 1, 1, 0);
        assert_eq!(a * b, Matrix2::new(2, 1, 4, 3));
        assert_eq!(b * a, Matrix2::new(3, 4, 1, 2));
        assert_eq!(a * Vector2::new(1, 1), Vector2::new(3, 7));

        let mut c = a;
        c *= Matrix2::identity();
        assert_eq!(c, a);
    }

    #[test]
    fn test_identity_threshold() {
        let mut m = Matrix3::<f32>::identity();
        assert!(m.is_identity_matrix(0.0));
        m[(0, 1)] = 0.01;
        assert!(!m.is_identity_matrix(1.0e-3));
        assert!(m.is_identity_matrix(0.1));
    }

    #[test]
    fn test_display_rows() {
        let m = Matrix2::new(1, 5, 3, 2);
        assert_eq!(m.to_string(), "Matrix2[[1, 5], [3, 2]]");
        assert_eq!(format!("{:?}", m), "Matrix2<scalar>[[1, 5], [3, 2]]");
    }

    #[test]
    fn test_backend_round_trip() {
        let m = Matrix2::new(1.0f32, 2.0, 3.0, 4.0);
        let simd: Matrix2A<f32> = m.to_backend();
        let x = Vector2::new(1.0f32, 0.0).to_backend::<Simd>();
        assert_eq!(simd * x, m.col(0).to_backend::<Simd>());
        assert_eq!(simd.to_backend::<Fpu>(), m);
    }
}
