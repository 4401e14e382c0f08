use core::arch::x86_64::*;

use crate::backend::{impl_gather_narrow, impl_gather_wide};
use crate::ops::*;
use crate::Vector;

macro_rules! impl_mem_int {
    {$($ty:ty;)*} => {
        $(
            impl SimdMem<$ty> for Vector<$ty> {
                unsafe fn simd_load<const ALIGNED: bool>(mem: *const $ty) -> Self {
                    if ALIGNED {
                        Vector(_mm_load_si128(mem as *const __m128i))
                    } else {
                        Vector(_mm_loadu_si128(mem as *const __m128i))
                    }
                }

                unsafe fn simd_store<const ALIGNED: bool>(self, mem: *mut $ty) {
                    if ALIGNED {
                        _mm_store_si128(mem as *mut __m128i, self.0);
                    } else {
                        _mm_storeu_si128(mem as *mut __m128i, self.0);
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
            Vector(_mm_load_ps(mem))
        } else {
            Vector(_mm_loadu_ps(mem))
        }
    }

    unsafe fn simd_store<const ALIGNED: bool>(self, mem: *mut f32) {
        if ALIGNED {
            _mm_store_ps(mem, self.0);
        } else {
            _mm_storeu_ps(mem, self.0);
        }
    }
}

impl SimdMem<f64> for Vector<f64> {
    unsafe fn simd_load<const ALIGNED: bool>(mem: *const f64) -> Self {
        if ALIGNED {
            Vector(_mm_load_pd(mem))
        } else {
            Vector(_mm_loadu_pd(mem))
        }
    }

    unsafe fn simd_store<const ALIGNED: bool>(self, mem: *mut f64) {
        if ALIGNED {
            _mm_store_pd(mem, self.0);
        } else {
            _mm_storeu_pd(mem, self.0);
        }
    }
}

// No gather below AVX2; every lane is an extracted index and a scalar load.
impl_gather_narrow! {
    i8,  u8,  u16, 16;
    u8,  u8,  u16, 16;
    i16, u16, u32, 8;
    u16, u16, u32, 8;
}

impl_gather_wide! {
    i32, u32, 4;
    u32, u32, 4;
    i64, u64, 2;
    u64, u64, 2;
    f32, u32, 4;
    f64, u64, 2;
}
