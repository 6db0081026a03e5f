//! 向量运算符
//!
//! 算术运算符对向量和标量右操作数都逐分量进行（`*`/`/` 为逐分量乘除，不是点积）。
//! 取模、位运算、移位与自增自减只为整数族实现。

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

use super::Vector;
use crate::backend::{Backend, Element};
use crate::scalar::Integer;
use crate::simd::LaneKernel;

macro_rules! impl_lane_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl<T, const D: usize, B> $Op for Vector<T, D, B>
        where
            T: Element<B, D>,
            B: Backend,
        {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: Self) -> Self {
                Self::from_lanes(T::Kernel::$op(&self.lanes, &rhs.lanes))
            }
        }

        impl<T, const D: usize, B> $Op<T> for Vector<T, D, B>
        where
            T: Element<B, D>,
            B: Backend,
        {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: T) -> Self {
                Self::from_lanes(T::Kernel::$op(&self.lanes, &T::Kernel::splat(rhs)))
            }
        }

        impl<T, const D: usize, B> $OpAssign for Vector<T, D, B>
        where
            T: Element<B, D>,
            B: Backend,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                *self = $Op::$op(*self, rhs);
            }
        }

        impl<T, const D: usize, B> $OpAssign<T> for Vector<T, D, B>
        where
            T: Element<B, D>,
            B: Backend,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: T) {
                *self = $Op::$op(*self, rhs);
            }
        }
    };
}

impl_lane_op!(Add, add, AddAssign, add_assign);
impl_lane_op!(Sub, sub, SubAssign, sub_assign);
impl_lane_op!(Div, div, DivAssign, div_assign);

impl<T, const D: usize, B> Mul for Vector<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from_lanes(T::Kernel::mul(&self.lanes, &rhs.lanes))
    }
}

impl<T, const D: usize, B> Mul<T> for Vector<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::from_lanes(T::Kernel::scale(&self.lanes, rhs))
    }
}

impl<T, const D: usize, B> MulAssign for Vector<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T, const D: usize, B> MulAssign<T> for Vector<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T, const D: usize, B> Neg for Vector<T, D, B>
where
    T: Element<B, D>,
    B: Backend,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from_lanes(T::Kernel::neg(&self.lanes))
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl<const D: usize, B> Mul<Vector<$t, D, B>> for $t
        where
            $t: Element<B, D>,
            B: Backend,
        {
            type Output = Vector<$t, D, B>;

            #[inline]
            fn mul(self, rhs: Vector<$t, D, B>) -> Vector<$t, D, B> {
                rhs * self
            }
        }
    )*};
}

impl_scalar_lhs_mul!(f32, f64, i8, i16, i32, i64);

macro_rules! impl_integer_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $sym:tt) => {
        impl<T, const D: usize, B> $Op for Vector<T, D, B>
        where
            T: Element<B, D> + Integer,
            B: Backend,
        {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: Self) -> Self {
                self.zip_map(rhs, |a, b| a $sym b)
            }
        }

        impl<T, const D: usize, B> $Op<T> for Vector<T, D, B>
        where
            T: Element<B, D> + Integer,
            B: Backend,
        {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: T) -> Self {
                self.map(|a| a $sym rhs)
            }
        }

        impl<T, const D: usize, B> $OpAssign for Vector<T, D, B>
        where
            T: Element<B, D> + Integer,
            B: Backend,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                *self = $Op::$op(*self, rhs);
            }
        }

        impl<T, const D: usize, B> $OpAssign<T> for Vector<T, D, B>
        where
            T: Element<B, D> + Integer,
            B: Backend,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: T) {
                *self = $Op::$op(*self, rhs);
            }
        }
    };
}

impl_integer_op!(Rem, rem, RemAssign, rem_assign, %);
impl_integer_op!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
impl_integer_op!(BitOr, bitor, BitOrAssign, bitor_assign, |);
impl_integer_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);
impl_integer_op!(Shl, shl, ShlAssign, shl_assign, <<);
impl_integer_op!(Shr, shr, ShrAssign, shr_assign, >>);

impl<T, const D: usize, B> Not for Vector<T, D, B>
where
    T: Element<B, D> + Integer,
    B: Backend,
{
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        self.map(|a| !a)
    }
}

impl<T, const D: usize, B> Vector<T, D, B>
where
    T: Element<B, D> + Integer,
    B: Backend,
{
    /// 前置自增：先加一，返回新值
    #[inline]
    pub fn increment(&mut self) -> Self {
        *self += T::one();
        *self
    }

    /// 前置自减
    #[inline]
    pub fn decrement(&mut self) -> Self {
        *self -= T::one();
        *self
    }

    /// 后置自增：返回修改前的值
    #[inline]
    pub fn post_increment(&mut self) -> Self {
        let previous = *self;
        *self += T::one();
        previous
    }

    /// 后置自减
    #[inline]
    pub fn post_decrement(&mut self) -> Self {
        let previous = *self;
        *self -= T::one();
        previous
    }
}
