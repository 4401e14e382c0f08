use core::arch::x86_64::*;

use crate::ops::*;
use crate::Vector;

macro_rules! impl_cmp_signed {
    {$($ty:ty, $mask:ty, $eq:ident, $gt:ident;)*} => {
        $(
            impl SimdCmp for Vector<$ty> {
                type Mask = Vector<$mask>;

                fn simd_eq(&self, rhs: &Self) -> Self::Mask {
                    unsafe { Vector($eq(self.0, rhs.0)) }
                }

                fn simd_ne(&self, rhs: &Self) -> Self::Mask {
                    unsafe { Vector(_mm256_xor_si256($eq(self.0, rhs.0), _mm256_set1_epi8(-1))) }
                }

                fn simd_lt(&self, rhs: &Self) -> Self::Mask {
                    unsafe { Vector($gt(rhs.0, self.0)) }
                }

                fn simd_le(&self, rhs: &Self) -> Self::Mask {
                    unsafe { Vector(_mm256_xor_si256($gt(self.0, rhs.0), _mm256_set1_epi8(-1))) }
                }

                fn simd_gt(&self, rhs: &Self) -> Self::Mask {
                    unsafe { Vector($gt(self.0, rhs.0)) }
                }

                fn simd_ge(&self, rhs: &Self) -> Self::Mask {
                    unsafe { Vector(_mm256_xor_si256($gt(rhs.0, self.0), _mm256_set1_epi8(-1))) }
                }
            }
        )*
    };
}

impl_cmp_signed! {
    i8,  u8,  _mm256_cmpeq_epi8,  _mm256_cmpgt_epi8;
    i16, u16, _mm256_cmpeq_epi16, _mm256_cmpgt_epi16;
    i32, u32, _mm256_cmpeq_epi32, _mm256_cmpgt_epi32;
    i64, u64, _mm256_cmpeq_epi64, _mm256_cmpgt_epi64;
}

// Unsigned ordering is still synthesized on AVX2: flip the sign bit and
// compare signed.
macro_rules! impl_cmp_unsigned {
    {$($ty:ty, $mask:ty, $eq:ident, $gt:ident, $set1:ident, $sign:expr;)*} => {
        $(
            impl SimdCmp for Vector<$ty> {
                type Mask = Vector<$mask>;

                fn simd_eq(&self, rhs: &Self) -> Self::Mask {
                    unsafe { Vector($eq(self.0, rhs.0)) }
                }

                fn simd_ne(&self, rhs: &Self) -> Self::Mask {
                    unsafe { Vector(_mm256_xor_si256($eq(self.0, rhs.0), _mm256_set1_epi8(-1))) }
                }

                fn simd_lt(&self, rhs: &Self) -> Self::Mask {
                    unsafe {
                        let sign = $set1($sign);
                        Vector($gt(
                            _mm256_xor_si256(rhs.0, sign),
                            _mm256_xor_si256(self.0, sign),
                        ))
                    }
                }

                fn simd_le(&self, rhs: &Self) -> Self::Mask {
                    unsafe {
                        let sign = $set1($sign);
                        Vector(_mm256_xor_si256(
                            $gt(_mm256_xor_si256(self.0, sign), _mm256_xor_si256(rhs.0, sign)),
                            _mm256_set1_epi8(-1),
                        ))
                    }
                }

                fn simd_gt(&self, rhs: &Self) -> Self::Mask {
                    unsafe {
                        let sign = $set1($sign);
                        Vector($gt(
                            _mm256_xor_si256(self.0, sign),
                            _mm256_xor_si256(rhs.0, sign),
                        ))
                    }
                }

                fn simd_ge(&self, rhs: &Self) -> Self::Mask {
                    unsafe {
                        let sign = $set1($sign);
                        Vector(_mm256_xor_si256(
                            $gt(_mm256_xor_si256(rhs.0, sign), _mm256_xor_si256(self.0, sign)),
                            _mm256_set1_epi8(-1),
                        ))
                    }
                }
            }
        )*
    };
}

impl_cmp_unsigned! {
    u8,  u8,  _mm256_cmpeq_epi8,  _mm256_cmpgt_epi8,  _mm256_set1_epi8,   0x80u8 as i8;
    u16, u16, _mm256_cmpeq_epi16, _mm256_cmpgt_epi16, _mm256_set1_epi16,  0x8000u16 as i16;
    u32, u32, _mm256_cmpeq_epi32, _mm256_cmpgt_epi32, _mm256_set1_epi32,  0x8000_0000u32 as i32;
    u64, u64, _mm256_cmpeq_epi64, _mm256_cmpgt_epi64, _mm256_set1_epi64x, i64::MIN;
}

macro_rules! impl_cmp_fp {
    {$($ty:ty, $cmp:ident;)*} => {
        $(
            impl SimdCmp for Vector<$ty> {
                type Mask = Vector<$ty>;

                fn simd_eq(&self, rhs: &Self) -> Self::Mask {
                    unsafe { Vector($cmp::<_CMP_EQ_OQ>(self.0, rhs.0)) }
                }

                fn simd_ne(&self, rhs: &Self) -> Self::Mask {
                    unsafe { Vector($cmp::<_CMP_NEQ_UQ>(self.0, rhs.0)) }
                }

                fn simd_lt(&self, rhs: &Self) -> Self::Mask {
                    unsafe { Vector($cmp::<_CMP_LT_OQ>(self.0, rhs.0)) }
                }

                fn simd_le(&self, rhs: &Self) -> Self::Mask {
                    unsafe { Vector($cmp::<_CMP_LE_OQ>(self.0, rhs.0)) }
                }

                fn simd_gt(&self, rhs: &Self) -> Self::Mask {
                    unsafe { Vector($cmp::<_CMP_GT_OQ>(self.0, rhs.0)) }
                }

                fn simd_ge(&self, rhs: &Self) -> Self::Mask {
                    unsafe { Vector($cmp::<_CMP_GE_OQ>(self.0, rhs.0)) }
                }
            }
        )*
    };
}

impl_cmp_fp! {
    f32, _mm256_cmp_ps;
    f64, _mm256_cmp_pd;
}

macro_rules! impl_min_max_int {
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

impl_min_max_int! {
    i8,  _mm256_min_epi8,  _mm256_max_epi8;
    u8,  _mm256_min_epu8,  _mm256_max_epu8;
    i16, _mm256_min_epi16, _mm256_max_epi16;
    u16, _mm256_min_epu16, _mm256_max_epu16;
    i32, _mm256_min_epi32, _mm256_max_epi32;
    u32, _mm256_min_epu32, _mm256_max_epu32;
}

// 64-bit min/max never went native; compare-and-blend.
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

macro_rules! impl_min_max_fp {
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

impl_min_max_fp! {
    f32, _mm256_min_ps, _mm256_max_ps;
    f64, _mm256_min_pd, _mm256_max_pd;
}

macro_rules! impl_select_int {
    {$($ty:ty, $mask:ty;)*} => {
        $(
            impl SimdSelect for Vector<$ty> {
                type Mask = Vector<$mask>;

                fn simd_select(mask: Self::Mask, if_true: Self, if_false: Self) -> Self {
                    unsafe { Vector(_mm256_blendv_epi8(if_false.0, if_true.0, mask.0)) }
                }
            }
        )*
    };
}

impl_select_int! {
    i8,  u8;
    u8,  u8;
    i16, u16;
    u16, u16;
    i32, u32;
    u32, u32;
    i64, u64;
    u64, u64;
}

impl SimdSelect for Vector<f32> {
    type Mask = Vector<f32>;

    fn simd_select(mask: Self::Mask, if_true: Self, if_false: Self) -> Self {
        unsafe { Vector(_mm256_blendv_ps(if_false.0, if_true.0, mask.0)) }
    }
}

impl SimdSelect for Vector<f64> {
    type Mask = Vector<f64>;

    fn simd_select(mask: Self::Mask, if_true: Self, if_false: Self) -> Self {
        unsafe { Vector(_mm256_blendv_pd(if_false.0, if_true.0, mask.0)) }
    }
}

macro_rules! impl_mask_ops_int {
    {$($ty:ty, $bits:expr;)*} => {
        $(
            impl SimdMaskOps for Vector<$ty> {
                fn simd_any(self) -> bool {
                    unsafe { _mm256_movemask_epi8(self.0) as u32 & $bits != 0 }
                }

                fn simd_all(self) -> bool {
                    unsafe { _mm256_movemask_epi8(self.0) as u32 & $bits == $bits }
                }
            }
        )*
    };
}

impl_mask_ops_int! {
    i8,  0xFFFF_FFFFu32;
    u8,  0xFFFF_FFFFu32;
    i16, 0xAAAA_AAAAu32;
    u16, 0xAAAA_AAAAu32;
    i32, 0x8888_8888u32;
    u32, 0x8888_8888u32;
    i64, 0x8080_8080u32;
    u64, 0x8080_8080u32;
}

impl SimdMaskOps for Vector<f32> {
    fn simd_any(self) -> bool {
        unsafe { _mm256_movemask_ps(self.0) != 0 }
    }

    fn simd_all(self) -> bool {
        unsafe { _mm256_movemask_ps(self.0) == 0xFF }
    }
}

impl SimdMaskOps for Vector<f64> {
    fn simd_any(self) -> bool {
        unsafe { _mm256_movemask_pd(self.0) != 0 }
    }

    fn simd_all(self) -> bool {
        unsafe { _mm256_movemask_pd(self.0) == 0xF }
    }
}
