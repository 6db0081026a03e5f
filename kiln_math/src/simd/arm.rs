/// ARM NEON SIMD 内核
///
/// NEON 是 ARM 的 128 位 SIMD 指令集，在 aarch64 上是强制支持的。
/// 存储与 x86 内核共用 16 字节对齐的 [`F32x4`]/[`F64x2`]。
use std::arch::aarch64::*;

use super::{F32x4, F64x2, LaneKernel};

/// NEON 内核
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeonKernel;

#[inline(always)]
fn load_f32(lanes: &F32x4) -> float32x4_t {
    // SAFETY: 指针指向 4 个已初始化的 f32；NEON 在 aarch64 上强制可用。
    unsafe { vld1q_f32(lanes.0.as_ptr()) }
}

#[inline(always)]
fn store_f32(value: float32x4_t) -> F32x4 {
    let mut out = F32x4::default();
    // SAFETY: 目标为 4 个可写 f32。
    unsafe { vst1q_f32(out.0.as_mut_ptr(), value) };
    out
}

#[inline(always)]
fn load_f64(lanes: &F64x2) -> float64x2_t {
    // SAFETY: 指针指向 2 个已初始化的 f64。
    unsafe { vld1q_f64(lanes.0.as_ptr()) }
}

#[inline(always)]
fn store_f64(value: float64x2_t) -> F64x2 {
    let mut out = F64x2::default();
    // SAFETY: 目标为 2 个可写 f64。
    unsafe { vst1q_f64(out.0.as_mut_ptr(), value) };
    out
}

macro_rules! impl_f32_kernel {
    ($($dim:literal),*) => {$(
        impl LaneKernel<f32, $dim> for NeonKernel {
            type Lanes = F32x4;

            const NAME: &'static str = "neon";
            const ACCELERATED: bool = true;

            #[inline]
            fn load(values: [f32; $dim]) -> F32x4 {
                F32x4::from_prefix(values)
            }

            #[inline]
            fn store(lanes: &F32x4) -> [f32; $dim] {
                lanes.prefix()
            }

            #[inline]
            fn as_slice(lanes: &F32x4) -> &[f32] {
                &lanes.0[..$dim]
            }

            #[inline]
            fn as_mut_slice(lanes: &mut F32x4) -> &mut [f32] {
                &mut lanes.0[..$dim]
            }

            #[inline]
            fn add(a: &F32x4, b: &F32x4) -> F32x4 {
                store_f32(unsafe { vaddq_f32(load_f32(a), load_f32(b)) })
            }

            #[inline]
            fn sub(a: &F32x4, b: &F32x4) -> F32x4 {
                store_f32(unsafe { vsubq_f32(load_f32(a), load_f32(b)) })
            }

            #[inline]
            fn mul(a: &F32x4, b: &F32x4) -> F32x4 {
                store_f32(unsafe { vmulq_f32(load_f32(a), load_f32(b)) })
            }

            #[inline]
            fn div(a: &F32x4, b: &F32x4) -> F32x4 {
                let mut out = store_f32(unsafe { vdivq_f32(load_f32(a), load_f32(b)) });
                out.clear_padding($dim);
                out
            }

            #[inline]
            fn neg(a: &F32x4) -> F32x4 {
                let mut out = store_f32(unsafe { vnegq_f32(load_f32(a)) });
                // -0.0 的填充通道
                out.clear_padding($dim);
                out
            }

            // 与标量 min_of/max_of 相同：比较不成立（含 NaN）时取第二个操作数
            #[inline]
            fn min(a: &F32x4, b: &F32x4) -> F32x4 {
                let (a, b) = (load_f32(a), load_f32(b));
                store_f32(unsafe { vbslq_f32(vcltq_f32(a, b), a, b) })
            }

            #[inline]
            fn max(a: &F32x4, b: &F32x4) -> F32x4 {
                let (a, b) = (load_f32(a), load_f32(b));
                store_f32(unsafe { vbslq_f32(vcgtq_f32(a, b), a, b) })
            }

            #[inline]
            fn dot(a: &F32x4, b: &F32x4) -> f32 {
                // 使用vaddvq_f32进行水平加法（ARMv8）
                unsafe { vaddvq_f32(vmulq_f32(load_f32(a), load_f32(b))) }
            }
        }
    )*};
}

impl_f32_kernel!(2, 3, 4);

impl LaneKernel<f64, 2> for NeonKernel {
    type Lanes = F64x2;

    const NAME: &'static str = "neon";
    const ACCELERATED: bool = true;

    #[inline]
    fn load(values: [f64; 2]) -> F64x2 {
        F64x2(values)
    }

    #[inline]
    fn store(lanes: &F64x2) -> [f64; 2] {
        lanes.0
    }

    #[inline]
    fn as_slice(lanes: &F64x2) -> &[f64] {
        &lanes.0
    }

    #[inline]
    fn as_mut_slice(lanes: &mut F64x2) -> &mut [f64] {
        &mut lanes.0
    }

    #[inline]
    fn add(a: &F64x2, b: &F64x2) -> F64x2 {
        store_f64(unsafe { vaddq_f64(load_f64(a), load_f64(b)) })
    }

    #[inline]
    fn sub(a: &F64x2, b: &F64x2) -> F64x2 {
        store_f64(unsafe { vsubq_f64(load_f64(a), load_f64(b)) })
    }

    #[inline]
    fn mul(a: &F64x2, b: &F64x2) -> F64x2 {
        store_f64(unsafe { vmulq_f64(load_f64(a), load_f64(b)) })
    }

    #[inline]
    fn div(a: &F64x2, b: &F64x2) -> F64x2 {
        store_f64(unsafe { vdivq_f64(load_f64(a), load_f64(b)) })
    }

    #[inline]
    fn neg(a: &F64x2) -> F64x2 {
        store_f64(unsafe { vnegq_f64(load_f64(a)) })
    }

    #[inline]
    fn min(a: &F64x2, b: &F64x2) -> F64x2 {
        let (a, b) = (load_f64(a), load_f64(b));
        store_f64(unsafe { vbslq_f64(vcltq_f64(a, b), a, b) })
    }

    #[inline]
    fn max(a: &F64x2, b: &F64x2) -> F64x2 {
        let (a, b) = (load_f64(a), load_f64(b));
        store_f64(unsafe { vbslq_f64(vcgtq_f64(a, b), a, b) })
    }

    #[inline]
    fn dot(a: &F64x2, b: &F64x2) -> f64 {
        unsafe { vaddvq_f64(vmulq_f64(load_f64(a), load_f64(b))) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neon_dot() {
        let a = <NeonKernel as LaneKernel<f32, 4>>::load([1.0, 2.0, 3.0, 4.0]);
        let b = <NeonKernel as LaneKernel<f32, 4>>::load([5.0, 6.0, 7.0, 8.0]);
        assert_eq!(<NeonKernel as LaneKernel<f32, 4>>::dot(&a, &b), 70.0);
    }

    #[test]
    fn test_neon_scale_keeps_padding_zero() {
        let a = <NeonKernel as LaneKernel<f32, 3>>::load([1.0, 0.0, 0.0]);
        let s = <NeonKernel as LaneKernel<f32, 3>>::scale(&a, f32::INFINITY);
        assert_eq!(s.0[3], 0.0);
    }

    #[test]
    fn test_neon_min_max_nan_returns_second_operand() {
        let a = <NeonKernel as LaneKernel<f32, 3>>::load([f32::NAN, 1.0, 2.0]);
        let b = <NeonKernel as LaneKernel<f32, 3>>::load([1.0, f32::NAN, 3.0]);
        let lo = <NeonKernel as LaneKernel<f32, 3>>::min(&a, &b);
        let hi = <NeonKernel as LaneKernel<f32, 3>>::max(&a, &b);
        assert_eq!(lo.0[0], 1.0);
        assert!(lo.0[1].is_nan());
        assert_eq!(hi.0[0], 1.0);
        assert!(hi.0[1].is_nan());
        assert_eq!(hi.0[2], 3.0);

        let c = <NeonKernel as LaneKernel<f64, 2>>::load([f64::NAN, 1.0]);
        let d = <NeonKernel as LaneKernel<f64, 2>>::load([2.0, -1.0]);
        assert_eq!(<NeonKernel as LaneKernel<f64, 2>>::min(&c, &d).0, [2.0, -1.0]);
    }

    #[test]
    fn test_neon_neg_keeps_padding_positive_zero() {
        let a = <NeonKernel as LaneKernel<f32, 2>>::load([1.0, -2.0]);
        let n = <NeonKernel as LaneKernel<f32, 2>>::neg(&a);
        assert_eq!(n.0, [-1.0, 2.0, 0.0, 0.0]);
    }
}
