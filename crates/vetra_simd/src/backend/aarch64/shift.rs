use core::arch::aarch64::*;

use super::{shl_bytes, shr_bytes};
use crate::ops::*;
use crate::Vector;

// vshl shifts left for positive counts and right for negative ones; the
// right-shift flavor follows the element signedness. Out-of-range counts
// are clamped up front so every backend drains lanes the same way.
macro_rules! impl_shift {
    {$($ty:ty, $shl:ident, $dup:ident, $cnt_ty:ty, $arith:literal;)*} => {
        $(
            impl SimdShift for Vector<$ty> {
                fn simd_shl(self, count: u32) -> Self {
                    if count >= <$ty>::BITS {
                        return Self::zero();
                    }
                    unsafe { Vector($shl(self.0, $dup(count as $cnt_ty))) }
                }

                fn simd_shr(self, count: u32) -> Self {
                    if $arith {
                        let count = count.min(<$ty>::BITS - 1);
                        unsafe { Vector($shl(self.0, $dup(-(count as i32) as $cnt_ty))) }
                    } else {
                        if count >= <$ty>::BITS {
                            return Self::zero();
                        }
                        unsafe { Vector($shl(self.0, $dup(-(count as i32) as $cnt_ty))) }
                    }
                }
            }
        )*
    };
}

impl_shift! {
    i8,  vshlq_s8,  vdupq_n_s8,  i8,  true;
    u8,  vshlq_u8,  vdupq_n_s8,  i8,  false;
    i16, vshlq_s16, vdupq_n_s16, i16, true;
    u16, vshlq_u16, vdupq_n_s16, i16, false;
    i32, vshlq_s32, vdupq_n_s32, i32, true;
    u32, vshlq_u32, vdupq_n_s32, i32, false;
    i64, vshlq_s64, vdupq_n_s64, i64, true;
    u64, vshlq_u64, vdupq_n_s64, i64, false;
}

// Lane-position shifts go through the byte view.
macro_rules! impl_lane_shift {
    {$($ty:ty, $bytes:literal, $to_u8:ident, $from_u8:ident;)*} => {
        $(
            impl SimdLaneShift for Vector<$ty> {
                fn simd_shl_lanes<const N: usize>(self) -> Self {
                    unsafe { Vector($from_u8(shl_bytes($to_u8(self.0), N * $bytes))) }
                }

                fn simd_shr_lanes<const N: usize>(self) -> Self {
                    unsafe { Vector($from_u8(shr_bytes($to_u8(self.0), N * $bytes))) }
                }
            }
        )*
    };
}

#[inline]
unsafe fn u8_id(v: uint8x16_t) -> uint8x16_t {
    v
}

impl_lane_shift! {
    i8,  1, vreinterpretq_u8_s8,  vreinterpretq_s8_u8;
    u8,  1, u8_id,                u8_id;
    i16, 2, vreinterpretq_u8_s16, vreinterpretq_s16_u8;
    u16, 2, vreinterpretq_u8_u16, vreinterpretq_u16_u8;
    i32, 4, vreinterpretq_u8_s32, vreinterpretq_s32_u8;
    u32, 4, vreinterpretq_u8_u32, vreinterpretq_u32_u8;
    i64, 8, vreinterpretq_u8_s64, vreinterpretq_s64_u8;
    u64, 8, vreinterpretq_u8_u64, vreinterpretq_u64_u8;
    f32, 4, vreinterpretq_u8_f32, vreinterpretq_f32_u8;
    f64, 8, vreinterpretq_u8_f64, vreinterpretq_f64_u8;
}

// dup stays inside each lane: mask or shift the half, then mirror it.
macro_rules! impl_dup {
    {$($ty:ty, $u_ty:ty, $to_u:ident, $from_u:ident, $and:ident, $shl:ident, $shr:ident, $or:ident, $dup:ident, $half:literal, $low_mask:expr;)*} => {
        $(
            impl SimdDup for Vector<$ty> {
                fn simd_dup_lo(self) -> Self {
                    unsafe {
                        let v = $to_u(self.0);
                        let lo = $and(v, $dup($low_mask));
                        Vector($from_u($or($shl::<$half>(lo), lo)))
                    }
                }

                fn simd_dup_hi(self) -> Self {
                    unsafe {
                        let v = $to_u(self.0);
                        let hi = $shr::<$half>(v);
                        Vector($from_u($or($shl::<$half>(hi), hi)))
                    }
                }
            }
        )*
    };
}

#[inline]
unsafe fn u16_id(v: uint16x8_t) -> uint16x8_t {
    v
}

#[inline]
unsafe fn u32_id(v: uint32x4_t) -> uint32x4_t {
    v
}

#[inline]
unsafe fn u64_id(v: uint64x2_t) -> uint64x2_t {
    v
}

impl_dup! {
    i16, u16, vreinterpretq_u16_s16, vreinterpretq_s16_u16,
        vandq_u16, vshlq_n_u16, vshrq_n_u16, vorrq_u16, vdupq_n_u16, 8, 0x00FF;
    u16, u16, u16_id, u16_id,
        vandq_u16, vshlq_n_u16, vshrq_n_u16, vorrq_u16, vdupq_n_u16, 8, 0x00FF;
    i32, u32, vreinterpretq_u32_s32, vreinterpretq_s32_u32,
        vandq_u32, vshlq_n_u32, vshrq_n_u32, vorrq_u32, vdupq_n_u32, 16, 0xFFFF;
    u32, u32, u32_id, u32_id,
        vandq_u32, vshlq_n_u32, vshrq_n_u32, vorrq_u32, vdupq_n_u32, 16, 0xFFFF;
    i64, u64, vreinterpretq_u64_s64, vreinterpretq_s64_u64,
        vandq_u64, vshlq_n_u64, vshrq_n_u64, vorrq_u64, vdupq_n_u64, 32, 0xFFFF_FFFF;
    u64, u64, u64_id, u64_id,
        vandq_u64, vshlq_n_u64, vshrq_n_u64, vorrq_u64, vdupq_n_u64, 32, 0xFFFF_FFFF;
}
