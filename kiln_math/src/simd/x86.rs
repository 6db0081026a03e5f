/// x86/x64 SIMD 内核
///
/// 使用 SSE2（x86_64 基线指令集）实现 128 位寄存器运算；
/// 构建时开启 SSE4.1 则点积改用 `_mm_dp_ps`。
///
/// 所有 load/store 都走 16 字节对齐的 [`F32x4`]/[`F64x2`]，对齐由类型保证。
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use super::{F32x4, F64x2, LaneKernel};

/// SSE 内核
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SseKernel;

#[inline(always)]
fn load_ps(lanes: &F32x4) -> __m128 {
    // SAFETY: F32x4 按 16 字节对齐；SSE2 在该目标上由 cfg 保证可用。
    unsafe { _mm_load_ps(lanes.0.as_ptr()) }
}

#[inline(always)]
fn store_ps(value: __m128) -> F32x4 {
    let mut out = F32x4::default();
    // SAFETY: 同上，目标地址 16 字节对齐且可写。
    unsafe { _mm_store_ps(out.0.as_mut_ptr(), value) };
    out
}

#[inline(always)]
fn load_pd(lanes: &F64x2) -> __m128d {
    // SAFETY: F64x2 按 16 字节对齐；SSE2 在该目标上由 cfg 保证可用。
    unsafe { _mm_load_pd(lanes.0.as_ptr()) }
}

#[inline(always)]
fn store_pd(value: __m128d) -> F64x2 {
    let mut out = F64x2::default();
    // SAFETY: 同上。
    unsafe { _mm_store_pd(out.0.as_mut_ptr(), value) };
    out
}

/// 四通道水平求和（SSE2）
#[cfg(not(target_feature = "sse4.1"))]
#[inline(always)]
fn dot_ps(a: __m128, b: __m128) -> f32 {
    // SAFETY: 纯寄存器运算，SSE2 可用。
    unsafe {
        let mul = _mm_mul_ps(a, b);
        // [m1, m0, m3, m2]
        let shuf = _mm_shuffle_ps(mul, mul, 0b10_11_00_01);
        let sums = _mm_add_ps(mul, shuf);
        let high = _mm_movehl_ps(sums, sums);
        _mm_cvtss_f32(_mm_add_ss(sums, high))
    }
}

/// 四通道点积（SSE4.1）
#[cfg(target_feature = "sse4.1")]
#[inline(always)]
fn dot_ps(a: __m128, b: __m128) -> f32 {
    // SAFETY: 构建开启了 sse4.1。
    unsafe { _mm_cvtss_f32(_mm_dp_ps(a, b, 0xF1)) }
}

macro_rules! impl_f32_kernel {
    ($($dim:literal),*) => {$(
        impl LaneKernel<f32, $dim> for SseKernel {
            type Lanes = F32x4;

            const NAME: &'static str = "sse";
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
                store_ps(unsafe { _mm_add_ps(load_ps(a), load_ps(b)) })
            }

            #[inline]
            fn sub(a: &F32x4, b: &F32x4) -> F32x4 {
                store_ps(unsafe { _mm_sub_ps(load_ps(a), load_ps(b)) })
            }

            #[inline]
            fn mul(a: &F32x4, b: &F32x4) -> F32x4 {
                store_ps(unsafe { _mm_mul_ps(load_ps(a), load_ps(b)) })
            }

            #[inline]
            fn div(a: &F32x4, b: &F32x4) -> F32x4 {
                let mut out = store_ps(unsafe { _mm_div_ps(load_ps(a), load_ps(b)) });
                // 0/0 的填充通道
                out.clear_padding($dim);
                out
            }

            #[inline]
            fn neg(a: &F32x4) -> F32x4 {
                store_ps(unsafe { _mm_sub_ps(_mm_setzero_ps(), load_ps(a)) })
            }

            #[inline]
            fn min(a: &F32x4, b: &F32x4) -> F32x4 {
                store_ps(unsafe { _mm_min_ps(load_ps(a), load_ps(b)) })
            }

            #[inline]
            fn max(a: &F32x4, b: &F32x4) -> F32x4 {
                store_ps(unsafe { _mm_max_ps(load_ps(a), load_ps(b)) })
            }

            #[inline]
            fn dot(a: &F32x4, b: &F32x4) -> f32 {
                dot_ps(load_ps(a), load_ps(b))
            }
        }
    )*};
}

impl_f32_kernel!(2, 3, 4);

impl LaneKernel<f64, 2> for SseKernel {
    type Lanes = F64x2;

    const NAME: &'static str = "sse2";
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
        store_pd(unsafe { _mm_add_pd(load_pd(a), load_pd(b)) })
    }

    #[inline]
    fn sub(a: &F64x2, b: &F64x2) -> F64x2 {
        store_pd(unsafe { _mm_sub_pd(load_pd(a), load_pd(b)) })
    }

    #[inline]
    fn mul(a: &F64x2, b: &F64x2) -> F64x2 {
        store_pd(unsafe { _mm_mul_pd(load_pd(a), load_pd(b)) })
    }

    #[inline]
    fn div(a: &F64x2, b: &F64x2) -> F64x2 {
        store_pd(unsafe { _mm_div_pd(load_pd(a), load_pd(b)) })
    }

    #[inline]
    fn neg(a: &F64x2) -> F64x2 {
        store_pd(unsafe { _mm_sub_pd(_mm_setzero_pd(), load_pd(a)) })
    }

    #[inline]
    fn min(a: &F64x2, b: &F64x2) -> F64x2 {
        store_pd(unsafe { _mm_min_pd(load_pd(a), load_pd(b)) })
    }

    #[inline]
    fn max(a: &F64x2, b: &F64x2) -> F64x2 {
        store_pd(unsafe { _mm_max_pd(load_pd(a), load_pd(b)) })
    }

    #[inline]
    fn dot(a: &F64x2, b: &F64x2) -> f64 {
        // SAFETY: 纯寄存器运算，SSE2 可用。
        unsafe {
            let mul = _mm_mul_pd(load_pd(a), load_pd(b));
            let high = _mm_unpackhi_pd(mul, mul);
            _mm_cvtsd_f64(_mm_add_sd(mul, high))
        }
    }
}
