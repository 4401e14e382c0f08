use core::arch::aarch64::*;

use crate::ops::*;
use crate::Vector;

// NEON has the full ordered set natively, unsigned included; nothing to
// synthesize here beyond ne.
macro_rules! impl_cmp_int {
    {$($ty:ty, $mask:ty, $eq:ident, $lt:ident, $le:ident, $gt:ident, $ge:ident, $not:expr;)*} => {
        $(
            impl SimdCmp for Vector<$ty> {
                type Mask = Vector<$mask>;

                fn simd_eq(&self, rhs: &Self) -> Self::Mask {
                    unsafe { Vector($eq(self.0, rhs.0)) }
                }

                fn simd_ne(&self, rhs: &Self) -> Self::Mask {
                    let m = self.simd_eq(rhs);
                    Vector(unsafe { $not(m.0) })
                }

                fn simd_lt(&self, rhs: &Self) -> Self::Mask {
                    unsafe { Vector($lt(self.0, rhs.0)) }
                }

                fn simd_le(&self, rhs: &Self) -> Self::Mask {
                    unsafe { Vector($le(self.0, rhs.0)) }
                }

                fn simd_gt(&self, rhs: &Self) -> Self::Mask {
                    unsafe { Vector($gt(self.0, rhs.0)) }
                }

                fn simd_ge(&self, rhs: &Self) -> Self::Mask {
                    unsafe { Vector($ge(self.0, rhs.0)) }
                }
            }
        )*
    };
}

#[inline]
unsafe fn not_u8(v: uint8x16_t) -> uint8x16_t {
    vmvnq_u8(v)
}

#[inline]
unsafe fn not_u16(v: uint16x8_t) -> uint16x8_t {
    vmvnq_u16(v)
}

#[inline]
unsafe fn not_u32(v: uint32x4_t) -> uint32x4_t {
    vmvnq_u32(v)
}

#[inline]
unsafe fn not_u64(v: uint64x2_t) -> uint64x2_t {
    vreinterpretq_u64_u8(vmvnq_u8(vreinterpretq_u8_u64(v)))
}

impl_cmp_int! {
    i8,  u8,  vceqq_s8,  vcltq_s8,  vcleq_s8,  vcgtq_s8,  vcgeq_s8,  not_u8;
    u8,  u8,  vceqq_u8,  vcltq_u8,  vcleq_u8,  vcgtq_u8,  vcgeq_u8,  not_u8;
    i16, u16, vceqq_s16, vcltq_s16, vcleq_s16, vcgtq_s16, vcgeq_s16, not_u16;
    u16, u16, vceqq_u16, vcltq_u16, vcleq_u16, vcgtq_u16, vcgeq_u16, not_u16;
    i32, u32, vceqq_s32, vcltq_s32, vcleq_s32, vcgtq_s32, vcgeq_s32, not_u32;
    u32, u32, vceqq_u32, vcltq_u32, vcleq_u32, vcgtq_u32, vcgeq_u32, not_u32;
    i64, u64, vceqq_s64, vcltq_s64, vcleq_s64, vcgtq_s64, vcgeq_s64, not_u64;
    u64, u64, vceqq_u64, vcltq_u64, vcleq_u64, vcgtq_u64, vcgeq_u64, not_u64;
}

macro_rules! impl_cmp_fp {
    {$($ty:ty, $eq:ident, $lt:ident, $le:ident, $gt:ident, $ge:ident, $not:ident, $from:ident;)*} => {
        $(
            impl SimdCmp for Vector<$ty> {
                type Mask = Vector<$ty>;

                fn simd_eq(&self, rhs: &Self) -> Self::Mask {
                    unsafe { Vector($from($eq(self.0, rhs.0))) }
                }

                fn simd_ne(&self, rhs: &Self) -> Self::Mask {
                    unsafe { Vector($from($not($eq(self.0, rhs.0)))) }
                }

                fn simd_lt(&self, rhs: &Self) -> Self::Mask {
                    unsafe { Vector($from($lt(self.0, rhs.0))) }
                }

                fn simd_le(&self, rhs: &Self) -> Self::Mask {
                    unsafe { Vector($from($le(self.0, rhs.0))) }
                }

                fn simd_gt(&self, rhs: &Self) -> Self::Mask {
                    unsafe { Vector($from($gt(self.0, rhs.0))) }
                }

                fn simd_ge(&self, rhs: &Self) -> Self::Mask {
                    unsafe { Vector($from($ge(self.0, rhs.0))) }
                }
            }
        )*
    };
}

impl_cmp_fp! {
    f32, vceqq_f32, vcltq_f32, vcleq_f32, vcgtq_f32, vcgeq_f32, not_u32, vreinterpretq_f32_u32;
    f64, vceqq_f64, vcltq_f64, vcleq_f64, vcgtq_f64, vcgeq_f64, not_u64, vreinterpretq_f64_u64;
}

macro_rules! impl_min_max {
    {$($ty:ty, $min:ident, $max:ident;)*} => {
        $(
            impl SimdMinMax for Vector<$ty> {
                fn simd_min(self, rhs: Self) -> Self {
                    unsafe { Vector($min(self.0, rhs.0)) }
                }

                fn simd_max(self, rhs: Self) -> Self {
                    unsafe { Vector($max(self.0, rhs.0)) }
                }
            }
        )*
    };
}

impl_min_max! {
    i8,  vminq_s8,  vmaxq_s8;
    u8,  vminq_u8,  vmaxq_u8;
    i16, vminq_s16, vmaxq_s16;
    u16, vminq_u16, vmaxq_u16;
    i32, vminq_s32, vmaxq_s32;
    u32, vminq_u32, vmaxq_u32;
    f32, vminq_f32, vmaxq_f32;
    f64, vminq_f64, vmaxq_f64;
}

// No 64-bit min/max instruction; compare and bit-select.
macro_rules! impl_min_max_64 {
    {$($ty:ty;)*} => {
        $(
            impl SimdMinMax for Vector<$ty> {
                fn simd_min(self, rhs: Self) -> Self {
                    let m = self.simd_gt(&rhs);
                    Self::simd_select(m, rhs, self)
                }

                fn simd_max(self, rhs: Self) -> Self {
                    let m = self.simd_gt(&rhs);
                    Self::simd_select(m, self, rhs)
                }
            }
        )*
    };
}

impl_min_max_64! {
    i64;
    u64;
}

macro_rules! impl_select {
    {$($ty:ty, $mask:ty, $bsl:ident, $to_mask:ident;)*} => {
        $(
            impl SimdSelect for Vector<$ty> {
                type Mask = Vector<$mask>;

                fn simd_select(mask: Self::Mask, if_true: Self, if_false: Self) -> Self {
                    unsafe { Vector($bsl($to_mask(mask.0), if_true.0, if_false.0)) }
                }
            }
        )*
    };
}

#[inline]
unsafe fn mask_u8(v: uint8x16_t) -> uint8x16_t {
    v
}

#[inline]
unsafe fn mask_u16(v: uint16x8_t) -> uint16x8_t {
    v
}

#[inline]
unsafe fn mask_u32(v: uint32x4_t) -> uint32x4_t {
    v
}

#[inline]
unsafe fn mask_u64(v: uint64x2_t) -> uint64x2_t {
    v
}

impl_select! {
    i8,  u8,  vbslq_s8,  mask_u8;
    u8,  u8,  vbslq_u8,  mask_u8;
    i16, u16, vbslq_s16, mask_u16;
    u16, u16, vbslq_u16, mask_u16;
    i32, u32, vbslq_s32, mask_u32;
    u32, u32, vbslq_u32, mask_u32;
    i64, u64, vbslq_s64, mask_u64;
    u64, u64, vbslq_u64, mask_u64;
    f32, f32, vbslq_f32, vreinterpretq_u32_f32;
    f64, f64, vbslq_f64, vreinterpretq_u64_f64;
}

// Horizontal max/min over the lane top bits answer any/all.
macro_rules! impl_mask_ops {
    {$($ty:ty, $shr:ident, $bits:literal, $maxv:ident, $minv:ident, $to_u:ident;)*} => {
        $(
            impl SimdMaskOps for Vector<$ty> {
                fn simd_any(self) -> bool {
                    unsafe { $maxv($shr::<$bits>($to_u(self.0))) != 0 }
                }

                fn simd_all(self) -> bool {
                    unsafe { $minv($shr::<$bits>($to_u(self.0))) != 0 }
                }
            }
        )*
    };
}

#[inline]
unsafe fn to_u8(v: uint8x16_t) -> uint8x16_t {
    v
}

#[inline]
unsafe fn to_u16(v: uint16x8_t) -> uint16x8_t {
    v
}

#[inline]
unsafe fn to_u32(v: uint32x4_t) -> uint32x4_t {
    v
}

impl_mask_ops! {
    u8,  vshrq_n_u8,  7,  vmaxvq_u8,  vminvq_u8,  to_u8;
    i8,  vshrq_n_u8,  7,  vmaxvq_u8,  vminvq_u8,  vreinterpretq_u8_s8;
    u16, vshrq_n_u16, 15, vmaxvq_u16, vminvq_u16, to_u16;
    i16, vshrq_n_u16, 15, vmaxvq_u16, vminvq_u16, vreinterpretq_u16_s16;
    u32, vshrq_n_u32, 31, vmaxvq_u32, vminvq_u32, to_u32;
    i32, vshrq_n_u32, 31, vmaxvq_u32, vminvq_u32, vreinterpretq_u32_s32;
    f32, vshrq_n_u32, 31, vmaxvq_u32, vminvq_u32, vreinterpretq_u32_f32;
}

// No horizontal reduce for 64-bit lanes; two lanes, two tests.
macro_rules! impl_mask_ops_64 {
    {$($ty:ty, $bits_ty:ty;)*} => {
        $(
            impl SimdMaskOps for Vector<$ty> {
                fn simd_any(self) -> bool {
                    let a = self.reinterpret::<u64>().to_array();
                    a.iter().any(|&x| x >> 63 != 0)
                }

                fn simd_all(self) -> bool {
                    let a = self.reinterpret::<u64>().to_array();
                    a.iter().all(|&x| x >> 63 != 0)
                }
            }
        )*
    };
}

impl_mask_ops_64! {
    i64, u64;
    u64, u64;
    f64, u64;
}
