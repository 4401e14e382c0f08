use core::arch::aarch64::*;

use crate::backend::{impl_gather_narrow, impl_gather_wide};
use crate::ops::*;
use crate::Vector;

// vld1/vst1 handle any alignment; the ALIGNED flag changes nothing on this
// architecture beyond the caller's promise.
macro_rules! impl_mem {
    {$($ty:ty, $ld:ident, $st:ident;)*} => {
        $(
            impl SimdMem<$ty> for Vector<$ty> {
                unsafe fn simd_load<const ALIGNED: bool>(mem: *const $ty) -> Self {
                    Vector($ld(mem))
                }

                unsafe fn simd_store<const ALIGNED: bool>(self, mem: *mut $ty) {
                    $st(mem, self.0);
                }
            }
        )*
    };
}

impl_mem! {
    i8,  vld1q_s8,  vst1q_s8;
    u8,  vld1q_u8,  vst1q_u8;
    i16, vld1q_s16, vst1q_s16;
    u16, vld1q_u16, vst1q_u16;
    i32, vld1q_s32, vst1q_s32;
    u32, vld1q_u32, vst1q_u32;
    i64, vld1q_s64, vst1q_s64;
    u64, vld1q_u64, vst1q_u64;
    f32, vld1q_f32, vst1q_f32;
    f64, vld1q_f64, vst1q_f64;
}

// NEON has no gather at any level; sequential extract-and-load.
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
