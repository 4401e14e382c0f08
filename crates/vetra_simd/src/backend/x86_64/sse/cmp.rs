use core::arch::x86_64::*;

use crate::ops::*;
use crate::Vector;

// Signed integers have native eq/gt; everything else composes from those
// two: lt swaps the operands, le/ge/ne are complements.
macro_rules! impl_cmp_signed {
    {$($ty:ty, $mask:ty, $eq:ident, $gt:ident;)*} => {
        $(
            impl SimdCmp for Vector<$ty> {
                type Mask = Vector<$mask>;

                fn simd_eq(&self, rhs: &Self) -> Self::Mask {
                    unsafe { Vector($eq(self.0, rhs.0)) }
                }

                fn simd_ne(&self, rhs: &Self) -> Self::Mask {
                    unsafe { Vector(_mm_xor_si128($eq(self.0, rhs.0), _mm_set1_epi8(-1))) }
                }

                fn simd_lt(&self, rhs: &Self) -> Self::Mask {
                    unsafe { Vector($gt(rhs.0, self.0)) }
                }

                fn simd_le(&self, rhs: &Self) -> Self::Mask {
                    unsafe { Vector(_mm_xor_si128($gt(self.0, rhs.0), _mm_set1_epi8(-1))) }
                }

                fn simd_gt(&self, rhs: &Self) -> Self::Mask {
                    unsafe { Vector($gt(self.0, rhs.0)) }
                }

                fn simd_ge(&self, rhs: &Self) -> Self::Mask {
                    unsafe { Vector(_mm_xor_si128($gt(rhs.0, self.0), _mm_set1_epi8(-1))) }
                }
            }
        )*
    };
}

impl_cmp_signed! {
    i8,  u8,  _mm_cmpeq_epi8,  _mm_cmpgt_epi8;
    i16, u16, _mm_cmpeq_epi16, _mm_cmpgt_epi16;
    i32, u32, _mm_cmpeq_epi32, _mm_cmpgt_epi32;
}

// No unsigned ordered compare below AVX512; flipping the sign bit biases
// both operands into the signed domain and the signed compare answers.
macro_rules! impl_cmp_unsigned {
    {$($ty:ty, $mask:ty, $eq:ident, $gt:ident, $set1:ident, $sign:expr;)*} => {
        $(
            impl SimdCmp for Vector<$ty> {
                type Mask = Vector<$mask>;

                fn simd_eq(&self, rhs: &Self) -> Self::Mask {
                    unsafe { Vector($eq(self.0, rhs.0)) }
                }

                fn simd_ne(&self, rhs: &Self) -> Self::Mask {
                    unsafe { Vector(_mm_xor_si128($eq(self.0, rhs.0), _mm_set1_epi8(-1))) }
                }

                fn simd_lt(&self, rhs: &Self) -> Self::Mask {
                    unsafe {
                        let sign = $set1($sign);
                        Vector($gt(
                            _mm_xor_si128(rhs.0, sign),
                            _mm_xor_si128(self.0, sign),
                        ))
                    }
                }

                fn simd_le(&self, rhs: &Self) -> Self::Mask {
                    unsafe {
                        let sign = $set1($sign);
                        Vector(_mm_xor_si128(
                            $gt(_mm_xor_si128(self.0, sign), _mm_xor_si128(rhs.0, sign)),
                            _mm_set1_epi8(-1),
                        ))
                    }
                }

                fn simd_gt(&self, rhs: &Self) -> Self::Mask {
                    unsafe {
                        let sign = $set1($sign);
                        Vector($gt(
                            _mm_xor_si128(self.0, sign),
                            _mm_xor_si128(rhs.0, sign),
                        ))
                    }
                }

                fn simd_ge(&self, rhs: &Self) -> Self::Mask {
                    unsafe {
                        let sign = $set1($sign);
                        Vector(_mm_xor_si128(
                            $gt(_mm_xor_si128(rhs.0, sign), _mm_xor_si128(self.0, sign)),
                            _mm_set1_epi8(-1),
                        ))
                    }
                }
            }
        )*
    };
}

impl_cmp_unsigned! {
    u8,  u8,  _mm_cmpeq_epi8,  _mm_cmpgt_epi8,  _mm_set1_epi8,  0x80u8 as i8;
    u16, u16, _mm_cmpeq_epi16, _mm_cmpgt_epi16, _mm_set1_epi16, 0x8000u16 as i16;
    u32, u32, _mm_cmpeq_epi32, _mm_cmpgt_epi32, _mm_set1_epi32, 0x8000_0000u32 as i32;
}

// 64-bit equality arrived with SSE4.1 and ordering with SSE4.2; below that
// the two lanes compare the scalar way.
macro_rules! impl_cmp_64 {
    {$($ty:ty, $sign:expr;)*} => {
        $(
            impl SimdCmp for Vector<$ty> {
                type Mask = Vector<u64>;

                fn simd_eq(&self, rhs: &Self) -> Self::Mask {
                    if cfg!(target_feature = "sse4.1") {
                        unsafe { Vector(_mm_cmpeq_epi64(self.0, rhs.0)) }
                    } else {
                        let a = self.to_array();
                        let b = rhs.to_array();
                        Vector::from_array([
                            if a[0] == b[0] { u64::MAX } else { 0 },
                            if a[1] == b[1] { u64::MAX } else { 0 },
                        ])
                    }
                }

                fn simd_ne(&self, rhs: &Self) -> Self::Mask {
                    unsafe {
                        Vector(_mm_xor_si128(self.simd_eq(rhs).0, _mm_set1_epi8(-1)))
                    }
                }

                fn simd_lt(&self, rhs: &Self) -> Self::Mask {
                    rhs.simd_gt(self)
                }

                fn simd_le(&self, rhs: &Self) -> Self::Mask {
                    unsafe {
                        Vector(_mm_xor_si128(self.simd_gt(rhs).0, _mm_set1_epi8(-1)))
                    }
                }

                fn simd_gt(&self, rhs: &Self) -> Self::Mask {
                    if cfg!(target_feature = "sse4.2") {
                        unsafe {
                            let sign = _mm_set1_epi64x($sign);
                            Vector(_mm_cmpgt_epi64(
                                _mm_xor_si128(self.0, sign),
                                _mm_xor_si128(rhs.0, sign),
                            ))
                        }
                    } else {
                        let a = self.to_array();
                        let b = rhs.to_array();
                        Vector::from_array([
                            if a[0] > b[0] { u64::MAX } else { 0 },
                            if a[1] > b[1] { u64::MAX } else { 0 },
                        ])
                    }
                }

                fn simd_ge(&self, rhs: &Self) -> Self::Mask {
                    unsafe {
                        Vector(_mm_xor_si128(rhs.simd_gt(self).0, _mm_set1_epi8(-1)))
                    }
                }
            }
        )*
    };
}

impl_cmp_64! {
    i64, 0i64;
    u64, i64::MIN;
}

macro_rules! impl_cmp_fp {
    {$($ty:ty, $eq:ident, $ne:ident, $lt:ident, $le:ident, $gt:ident, $ge:ident;)*} => {
        $(
            impl SimdCmp for Vector<$ty> {
                type Mask = Vector<$ty>;

                fn simd_eq(&self, rhs: &Self) -> Self::Mask {
                    unsafe { Vector($eq(self.0, rhs.0)) }
                }

                fn simd_ne(&self, rhs: &Self) -> Self::Mask {
                    unsafe { Vector($ne(self.0, rhs.0)) }
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

impl_cmp_fp! {
    f32, _mm_cmpeq_ps, _mm_cmpneq_ps, _mm_cmplt_ps, _mm_cmple_ps, _mm_cmpgt_ps, _mm_cmpge_ps;
    f64, _mm_cmpeq_pd, _mm_cmpneq_pd, _mm_cmplt_pd, _mm_cmple_pd, _mm_cmpgt_pd, _mm_cmpge_pd;
}

impl SimdMinMax for Vector<u8> {
    fn simd_min(self, rhs: Self) -> Self {
        unsafe { Vector(_mm_min_epu8(self.0, rhs.0)) }
    }

    fn simd_max(self, rhs: Self) -> Self {
        unsafe { Vector(_mm_max_epu8(self.0, rhs.0)) }
    }
}

impl SimdMinMax for Vector<i16> {
    fn simd_min(self, rhs: Self) -> Self {
        unsafe { Vector(_mm_min_epi16(self.0, rhs.0)) }
    }

    fn simd_max(self, rhs: Self) -> Self {
        unsafe { Vector(_mm_max_epi16(self.0, rhs.0)) }
    }
}

impl SimdMinMax for Vector<i8> {
    fn simd_min(self, rhs: Self) -> Self {
        if cfg!(target_feature = "sse4.1") {
            unsafe { Vector(_mm_min_epi8(self.0, rhs.0)) }
        } else {
            unsafe {
                let sign = _mm_set1_epi8(0x80u8 as i8);
                Vector(_mm_xor_si128(
                    _mm_min_epu8(
                        _mm_xor_si128(self.0, sign),
                        _mm_xor_si128(rhs.0, sign),
                    ),
                    sign,
                ))
            }
        }
    }

    fn simd_max(self, rhs: Self) -> Self {
        if cfg!(target_feature = "sse4.1") {
            unsafe { Vector(_mm_max_epi8(self.0, rhs.0)) }
        } else {
            unsafe {
                let sign = _mm_set1_epi8(0x80u8 as i8);
                Vector(_mm_xor_si128(
                    _mm_max_epu8(
                        _mm_xor_si128(self.0, sign),
                        _mm_xor_si128(rhs.0, sign),
                    ),
                    sign,
                ))
            }
        }
    }
}

impl SimdMinMax for Vector<u16> {
    fn simd_min(self, rhs: Self) -> Self {
        if cfg!(target_feature = "sse4.1") {
            unsafe { Vector(_mm_min_epu16(self.0, rhs.0)) }
        } else {
            // a - sat(a - b) picks the smaller without a compare.
            unsafe {
                Vector(_mm_sub_epi16(self.0, _mm_subs_epu16(self.0, rhs.0)))
            }
        }
    }

    fn simd_max(self, rhs: Self) -> Self {
        if cfg!(target_feature = "sse4.1") {
            unsafe { Vector(_mm_max_epu16(self.0, rhs.0)) }
        } else {
            unsafe {
                Vector(_mm_add_epi16(rhs.0, _mm_subs_epu16(self.0, rhs.0)))
            }
        }
    }
}

macro_rules! impl_min_max_32 {
    {$($ty:ty, $min:ident, $max:ident;)*} => {
        $(
            impl SimdMinMax for Vector<$ty> {
                fn simd_min(self, rhs: Self) -> Self {
                    if cfg!(target_feature = "sse4.1") {
                        unsafe { Vector($min(self.0, rhs.0)) }
                    } else {
                        let m = self.simd_gt(&rhs);
                        Self::simd_select(m, rhs, self)
                    }
                }

                fn simd_max(self, rhs: Self) -> Self {
                    if cfg!(target_feature = "sse4.1") {
                        unsafe { Vector($max(self.0, rhs.0)) }
                    } else {
                        let m = self.simd_gt(&rhs);
                        Self::simd_select(m, self, rhs)
                    }
                }
            }
        )*
    };
}

impl_min_max_32! {
    i32, _mm_min_epi32, _mm_max_epi32;
    u32, _mm_min_epu32, _mm_max_epu32;
}

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
    f32, _mm_min_ps, _mm_max_ps;
    f64, _mm_min_pd, _mm_max_pd;
}

// Blend: native on SSE4.1, the (m & t) | (!m & f) composition below it;
// both produce identical bits for the all-or-nothing masks comparisons
// yield.
macro_rules! impl_select_int {
    {$($ty:ty, $mask:ty;)*} => {
        $(
            impl SimdSelect for Vector<$ty> {
                type Mask = Vector<$mask>;

                fn simd_select(mask: Self::Mask, if_true: Self, if_false: Self) -> Self {
                    if cfg!(target_feature = "sse4.1") {
                        unsafe { Vector(_mm_blendv_epi8(if_false.0, if_true.0, mask.0)) }
                    } else {
                        unsafe {
                            Vector(_mm_or_si128(
                                _mm_and_si128(mask.0, if_true.0),
                                _mm_andnot_si128(mask.0, if_false.0),
                            ))
                        }
                    }
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
        if cfg!(target_feature = "sse4.1") {
            unsafe { Vector(_mm_blendv_ps(if_false.0, if_true.0, mask.0)) }
        } else {
            unsafe {
                Vector(_mm_or_ps(
                    _mm_and_ps(mask.0, if_true.0),
                    _mm_andnot_ps(mask.0, if_false.0),
                ))
            }
        }
    }
}

impl SimdSelect for Vector<f64> {
    type Mask = Vector<f64>;

    fn simd_select(mask: Self::Mask, if_true: Self, if_false: Self) -> Self {
        if cfg!(target_feature = "sse4.1") {
            unsafe { Vector(_mm_blendv_pd(if_false.0, if_true.0, mask.0)) }
        } else {
            unsafe {
                Vector(_mm_or_pd(
                    _mm_and_pd(mask.0, if_true.0),
                    _mm_andnot_pd(mask.0, if_false.0),
                ))
            }
        }
    }
}

// movemask is byte-granular; wider lanes test only their top byte's bit.
macro_rules! impl_mask_ops_int {
    {$($ty:ty, $bits:expr;)*} => {
        $(
            impl SimdMaskOps for Vector<$ty> {
                fn simd_any(self) -> bool {
                    unsafe { _mm_movemask_epi8(self.0) & $bits != 0 }
                }

                fn simd_all(self) -> bool {
                    unsafe { _mm_movemask_epi8(self.0) & $bits == $bits }
                }
            }
        )*
    };
}

impl_mask_ops_int! {
    i8,  0xFFFF;
    u8,  0xFFFF;
    i16, 0xAAAA;
    u16, 0xAAAA;
    i32, 0x8888;
    u32, 0x8888;
    i64, 0x8080;
    u64, 0x8080;
}

impl SimdMaskOps for Vector<f32> {
    fn simd_any(self) -> bool {
        unsafe { _mm_movemask_ps(self.0) != 0 }
    }

    fn simd_all(self) -> bool {
        unsafe { _mm_movemask_ps(self.0) == 0xF }
    }
}

impl SimdMaskOps for Vector<f64> {
    fn simd_any(self) -> bool {
        unsafe { _mm_movemask_pd(self.0) != 0 }
    }

    fn simd_all(self) -> bool {
        unsafe { _mm_movemask_pd(self.0) == 0x3 }
    }
}
