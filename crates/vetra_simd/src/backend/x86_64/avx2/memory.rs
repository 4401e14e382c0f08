use core::arch::x86_64::*;

use crate::backend::impl_gather_narrow;
use crate::ops::*;
use crate::Vector;

macro_rules! impl_mem_int {
    {$($ty:ty;)*} => {
        $(
            impl SimdMem<$ty> for Vector<$ty> {
                unsafe fn simd_load<const ALIGNED: bool>(mem: *const $ty) -> Self {
                    if ALIGNED {
                        Vector(_mm256_load_si256(mem as *const __m256i))
                    } else {
                        Vector(_mm256_loadu_si256(mem as *const __m256i))
                    }
                }

                unsafe fn simd_store<const ALIGNED: bool>(self, mem: *mut $ty) {
                    if ALIGNED {
                        _mm256_store_si256(mem as *mut __m256i, self.0);
                    } else {
                        _mm256_storeu_si256(mem as *mut __m256i, self.0);
                    }
                }
            }
        )*
    };
}

impl_mem_int! {
    i8;
    u8;
    i16;
    u16;
    i32;
    u32;
    i64;
    u64;
}

impl SimdMem<f32> for Vector<f32> {
    unsafe fn simd_load<const ALIGNED: bool>(mem: *const f32) -> Self {
        if ALIGNED {
            Vector(_mm256_load_ps(mem))
        } else {
            Vector(_mm256_loadu_ps(mem))
        }
    }

    unsafe fn simd_store<const ALIGNED: bool>(self, mem: *mut f32) {
        if ALIGNED {
            _mm256_store_ps(mem, self.0);
        } else {
            _mm256_storeu_ps(mem, self.0);
        }
    }
}

impl SimdMem<f64> for Vector<f64> {
    unsafe fn simd_load<const ALIGNED: bool>(mem: *const f64) -> Self {
        if ALIGNED {
            Vector(_mm256_load_pd(mem))
        } else {
            Vector(_mm256_loadu_pd(mem))
        }
    }

    unsafe fn simd_store<const ALIGNED: bool>(self, mem: *mut f64) {
        if ALIGNED {
            _mm256_store_pd(mem, self.0);
        } else {
            _mm256_storeu_pd(mem, self.0);
        }
    }
}

// 8/16-bit lanes have no gather instruction at any level; sequential
// extract-and-load.
impl_gather_narrow! {
    i8,  u8,  u16, 32;
    u8,  u8,  u16, 32;
    i16, u16, u32, 16;
    u16, u16, u32, 16;
}

// 32/64-bit lanes use the native AVX2 gather; same contract as the scalar
// strategy, different engine.
macro_rules! impl_gather_native {
    {$($ty:ty, $idx_ty:ty, $gather:ident, $scale:literal, $base_ty:ty;)*} => {
        $(
            impl SimdGather<$ty> for Vector<$ty> {
                unsafe fn simd_lookup(mem: *const $ty, idx: Vector<$idx_ty>) -> Self {
                    Vector($gather::<$scale>(mem as *const $base_ty, idx.0))
                }

                unsafe fn simd_lookup2(
                    mem: *const $ty,
                    row: Vector<$idx_ty>,
                    col: Vector<$idx_ty>,
                    stride: $idx_ty,
                ) -> Self {
                    let idx = row.simd_mul(Vector::splat(stride)).simd_add(col);
                    Self::simd_lookup(mem, idx)
                }
            }
        )*
    };
}

impl_gather_native! {
    i32, u32, _mm256_i32gather_epi32, 4, i32;
    u32, u32, _mm256_i32gather_epi32, 4, i32;
    i64, u64, _mm256_i64gather_epi64, 8, i64;
    u64, u64, _mm256_i64gather_epi64, 8, i64;
    f32, u32, _mm256_i32gather_ps,    4, f32;
    f64, u64, _mm256_i64gather_pd,    8, f64;
}
