/// 标量回退实现
///
/// 当元素类型、维度或目标指令集不支持寄存器实现时使用的纯标量内核，
/// 分量直接存放在 `[T; D]` 中。
use std::array;

use super::LaneKernel;
use crate::scalar::Scalar;

/// 标量内核
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScalarKernel;

impl<T: Scalar, const D: usize> LaneKernel<T, D> for ScalarKernel {
    type Lanes = [T; D];

    const NAME: &'static str = "scalar";
    const ACCELERATED: bool = false;

    #[inline]
    fn load(values: [T; D]) -> [T; D] {
        values
    }

    #[inline]
    fn store(lanes: &[T; D]) -> [T; D] {
        *lanes
    }

    #[inline]
    fn as_slice(lanes: &[T; D]) -> &[T] {
        lanes
    }

    #[inline]
    fn as_mut_slice(lanes: &mut [T; D]) -> &mut [T] {
        lanes
    }

    #[inline]
    fn add(a: &[T; D], b: &[T; D]) -> [T; D] {
        array::from_fn(|i| a[i] + b[i])
    }

    #[inline]
    fn sub(a: &[T; D], b: &[T; D]) -> [T; D] {
        array::from_fn(|i| a[i] - b[i])
    }

    #[inline]
    fn mul(a: &[T; D], b: &[T; D]) -> [T; D] {
        array::from_fn(|i| a[i] * b[i])
    }

    #[inline]
    fn div(a: &[T; D], b: &[T; D]) -> [T; D] {
        array::from_fn(|i| a[i] / b[i])
    }

    #[inline]
    fn neg(a: &[T; D]) -> [T; D] {
        array::from_fn(|i| -a[i])
    }

    #[inline]
    fn min(a: &[T; D], b: &[T; D]) -> [T; D] {
        array::from_fn(|i| a[i].min_of(b[i]))
    }

    #[inline]
    fn max(a: &[T; D], b: &[T; D]) -> [T; D] {
        array::from_fn(|i| a[i].max_of(b[i]))
    }

    #[inline]
    fn scale(a: &[T; D], factor: T) -> [T; D] {
        array::from_fn(|i| a[i] * factor)
    }

    #[inline]
    fn dot(a: &[T; D], b: &[T; D]) -> T {
        a.iter()
            .zip(b.iter())
            .fold(T::zero(), |acc, (&x, &y)| acc + x * y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_ops() {
        let a = [1.0f32, 2.0, 3.0, 4.0];
        let b = [5.0f32, 6.0, 7.0, 8.0];

        let dot = <ScalarKernel as LaneKernel<f32, 4>>::dot(&a, &b);
        assert_eq!(dot, 70.0);

        let sum = <ScalarKernel as LaneKernel<f32, 4>>::add(&a, &b);
        assert_eq!(sum, [6.0, 8.0, 10.0, 12.0]);
    }

    #[test]
    fn test_scalar_integer_ops() {
        let a = [3i32, -4];
        let b = [2i32, 2];
        assert_eq!(<ScalarKernel as LaneKernel<i32, 2>>::div(&a, &b), [1, -2]);
        assert_eq!(<ScalarKernel as LaneKernel<i32, 2>>::min(&a, &b), [2, -4]);
        assert_eq!(<ScalarKernel as LaneKernel<i32, 2>>::neg(&a), [-3, 4]);
    }
}
