use core::arch::x86_64::*;

use crate::backend::{impl_int_divrem, impl_mul64_scalar};
use crate::ops::*;
use crate::Vector;

// 8/16-bit add/sub use the saturating instructions, 32/64-bit the wrapping
// ones; that split is the native behavior this crate's policy mirrors.
macro_rules! impl_add_sub_int {
    {$($ty:ty, $add:ident, $sub:ident;)*} => {
        $(
            impl SimdAdd for Vector<$ty> {
                fn simd_add(self, rhs: Self) -> Self {
                    unsafe { Vector($add(self.0, rhs.0)) }
                }
            }

            impl SimdSub for Vector<$ty> {
                fn simd_sub(self, rhs: Self) -> Self {
                    unsafe { Vector($sub(self.0, rhs.0)) }
                }
            }
        )*
    };
}

impl_add_sub_int! {
    i8,  _mm_adds_epi8,  _mm_subs_epi8;
    u8,  _mm_adds_epu8,  _mm_subs_epu8;
    i16, _mm_adds_epi16, _mm_subs_epi16;
    u16, _mm_adds_epu16, _mm_subs_epu16;
    i32, _mm_add_epi32,  _mm_sub_epi32;
    u32, _mm_add_epi32,  _mm_sub_epi32;
    i64, _mm_add_epi64,  _mm_sub_epi64;
    u64, _mm_add_epi64,  _mm_sub_epi64;
}

macro_rules! impl_arith_fp {
    {$($ty:ty, $add:ident, $sub:ident, $mul:ident, $div:ident, $set1:ident, $xor:ident, $neg_zero:expr, $half:expr;)*} => {
        $(
            impl SimdAdd for Vector<$ty> {
                fn simd_add(self, rhs: Self) -> Self {
                    unsafe { Vector($add(self.0, rhs.0)) }
                }
            }

            impl SimdSub for Vector<$ty> {
                fn simd_sub(self, rhs: Self) -> Self {
                    unsafe { Vector($sub(self.0, rhs.0)) }
                }
            }

            impl SimdMul for Vector<$ty> {
                fn simd_mul(self, rhs: Self) -> Self {
                    unsafe { Vector($mul(self.0, rhs.0)) }
                }
            }

            impl SimdDiv for Vector<$ty> {
                fn simd_div(self, rhs: Self) -> Self {
                    unsafe { Vector($div(self.0, rhs.0)) }
                }
            }

            impl SimdNeg for Vector<$ty> {
                fn simd_neg(self) -> Self {
                    unsafe { Vector($xor(self.0, $set1($neg_zero))) }
                }
            }

            impl SimdAvg for Vector<$ty> {
                fn simd_midpoint(self, rhs: Self) -> Self {
                    unsafe { Vector($mul($add(self.0, rhs.0), $set1($half))) }
                }

                fn simd_halving_sub(self, rhs: Self) -> Self {
                    unsafe { Vector($mul($sub(self.0, rhs.0), $set1($half))) }
                }
            }
        )*
    };
}

impl_arith_fp! {
    f32, _mm_add_ps, _mm_sub_ps, _mm_mul_ps, _mm_div_ps, _mm_set1_ps, _mm_xor_ps, -0.0f32, 0.5f32;
    f64, _mm_add_pd, _mm_sub_pd, _mm_mul_pd, _mm_div_pd, _mm_set1_pd, _mm_xor_pd, -0.0f64, 0.5f64;
}

// Float remainder has no lane instruction; fmod per lane.
macro_rules! impl_rem_fp {
    {$($ty:ty, $lanes:literal;)*} => {
        $(
            impl SimdRem for Vector<$ty> {
                fn simd_rem(self, rhs: Self) -> Self {
                    let a = self.to_array();
                    let b = rhs.to_array();
                    let mut out = [0.0 as $ty; $lanes];
                    for ((o, &x), &y) in out.iter_mut().zip(a.iter()).zip(b.iter()) {
                        *o = x % y;
                    }
                    Vector::from_array(out)
                }
            }
        )*
    };
}

impl_rem_fp! {
    f32, 4;
    f64, 2;
}

macro_rules! impl_mul_16 {
    {$($ty:ty;)*} => {
        $(
            impl SimdMul for Vector<$ty> {
                fn simd_mul(self, rhs: Self) -> Self {
                    unsafe { Vector(_mm_mullo_epi16(self.0, rhs.0)) }
                }
            }
        )*
    };
}

impl_mul_16! {
    i16;
    u16;
}

// Truncated byte product from even/odd 16-bit products; the low 8 bits of
// a 16-bit lane product depend only on the low bytes, so the high garbage
// never leaks.
macro_rules! impl_mul_8 {
    {$($ty:ty;)*} => {
        $(
            impl SimdMul for Vector<$ty> {
                fn simd_mul(self, rhs: Self) -> Self {
                    unsafe {
                        let even = _mm_and_si128(
                            _mm_mullo_epi16(self.0, rhs.0),
                            _mm_set1_epi16(0x00FF),
                        );
                        let odd = _mm_slli_epi16::<8>(_mm_mullo_epi16(
                            _mm_srli_epi16::<8>(self.0),
                            _mm_srli_epi16::<8>(rhs.0),
                        ));
                        Vector(_mm_or_si128(even, odd))
                    }
                }
            }
        )*
    };
}

impl_mul_8! {
    i8;
    u8;
}

macro_rules! impl_mul_32 {
    {$($ty:ty;)*} => {
        $(
            impl SimdMul for Vector<$ty> {
                fn simd_mul(self, rhs: Self) -> Self {
                    if cfg!(target_feature = "sse4.1") {
                        unsafe { Vector(_mm_mullo_epi32(self.0, rhs.0)) }
                    } else {
                        unsafe {
                            let even = _mm_mul_epu32(self.0, rhs.0);
                            let odd = _mm_mul_epu32(
                                _mm_srli_si128::<4>(self.0),
                                _mm_srli_si128::<4>(rhs.0),
                            );
                            Vector(_mm_unpacklo_epi32(
                                _mm_shuffle_epi32::<0b00_00_10_00>(even),
                                _mm_shuffle_epi32::<0b00_00_10_00>(odd),
                            ))
                        }
                    }
                }
            }
        )*
    };
}

impl_mul_32! {
    i32;
    u32;
}

impl_mul64_scalar! {
    i64, 2;
    u64, 2;
}

impl_int_divrem! {
    i8,  16;
    u8,  16;
    i16, 8;
    u16, 8;
    i32, 4;
    u32, 4;
    i64, 2;
    u64, 2;
}

macro_rules! impl_neg_int {
    {$($ty:ty, $sub:ident;)*} => {
        $(
            impl SimdNeg for Vector<$ty> {
                fn simd_neg(self) -> Self {
                    unsafe { Vector($sub(_mm_setzero_si128(), self.0)) }
                }
            }
        )*
    };
}

impl_neg_int! {
    i8,  _mm_sub_epi8;
    i16, _mm_sub_epi16;
    i32, _mm_sub_epi32;
    i64, _mm_sub_epi64;
}

macro_rules! impl_abs_int {
    {$($ty:ty, $abs:ident, $cmpgt:ident, $xor:ident, $sub:ident;)*} => {
        $(
            impl SimdAbs for Vector<$ty> {
                fn simd_abs(self) -> Self {
                    if cfg!(target_feature = "ssse3") {
                        unsafe { Vector($abs(self.0)) }
                    } else {
                        // (a ^ m) - m with m the sign-spread mask.
                        unsafe {
                            let m = $cmpgt(_mm_setzero_si128(), self.0);
                            Vector($sub($xor(self.0, m), m))
                        }
                    }
                }
            }
        )*
    };
}

impl_abs_int! {
    i8,  _mm_abs_epi8,  _mm_cmpgt_epi8,  _mm_xor_si128, _mm_sub_epi8;
    i16, _mm_abs_epi16, _mm_cmpgt_epi16, _mm_xor_si128, _mm_sub_epi16;
    i32, _mm_abs_epi32, _mm_cmpgt_epi32, _mm_xor_si128, _mm_sub_epi32;
}

impl SimdAbs for Vector<i64> {
    fn simd_abs(self) -> Self {
        let a = self.to_array();
        Vector::from_array([a[0].wrapping_abs(), a[1].wrapping_abs()])
    }
}

macro_rules! impl_abs_fp {
    {$($ty:ty, $andnot:ident, $set1:ident, $neg_zero:expr;)*} => {
        $(
            impl SimdAbs for Vector<$ty> {
                fn simd_abs(self) -> Self {
                    unsafe { Vector($andnot($set1($neg_zero), self.0)) }
                }
            }
        )*
    };
}

impl_abs_fp! {
    f32, _mm_andnot_ps, _mm_set1_ps, -0.0f32;
    f64, _mm_andnot_pd, _mm_set1_pd, -0.0f64;
}

// abs_diff == (max - min) with the type's own subtraction, which makes it
// saturating exactly where add/sub saturate.
macro_rules! impl_abs_diff {
    {$($ty:ty;)*} => {
        $(
            impl SimdAbsDiff for Vector<$ty> {
                fn simd_abs_diff(self, rhs: Self) -> Self {
                    self.simd_max(rhs).simd_sub(self.simd_min(rhs))
                }
            }
        )*
    };
}

impl_abs_diff! {
    i8;
    u8;
    i16;
    u16;
    i32;
    u32;
    i64;
    u64;
    f32;
    f64;
}

// Rounding average and halving subtract. 8/16-bit lanes ride the native
// unsigned average; signed lanes bias through the unsigned domain first.
// halving_sub(a, b) == avg(a, !b) ^ sign_bit, exact for every operand pair.
macro_rules! impl_avg_u8_16 {
    {$($ty:ty, $avg:ident, $set1:ident, $i_ty:ty, $sign:expr;)*} => {
        $(
            impl SimdAvg for Vector<$ty> {
                fn simd_midpoint(self, rhs: Self) -> Self {
                    unsafe { Vector($avg(self.0, rhs.0)) }
                }

                fn simd_halving_sub(self, rhs: Self) -> Self {
                    unsafe {
                        let ones = _mm_set1_epi8(-1);
                        let sign = $set1($sign as $i_ty);
                        Vector(_mm_xor_si128(
                            $avg(self.0, _mm_xor_si128(rhs.0, ones)),
                            sign,
                        ))
                    }
                }
            }
        )*
    };
}

impl_avg_u8_16! {
    u8,  _mm_avg_epu8,  _mm_set1_epi8,  i8,  0x80u8;
    u16, _mm_avg_epu16, _mm_set1_epi16, i16, 0x8000u16;
}

macro_rules! impl_avg_i8_16 {
    {$($ty:ty, $avg:ident, $set1:ident, $i_ty:ty, $sign:expr;)*} => {
        $(
            impl SimdAvg for Vector<$ty> {
                fn simd_midpoint(self, rhs: Self) -> Self {
                    unsafe {
                        let sign = $set1($sign as $i_ty);
                        let a = _mm_xor_si128(self.0, sign);
                        let b = _mm_xor_si128(rhs.0, sign);
                        Vector(_mm_xor_si128($avg(a, b), sign))
                    }
                }

                fn simd_halving_sub(self, rhs: Self) -> Self {
                    unsafe {
                        let ones = _mm_set1_epi8(-1);
                        let sign = $set1($sign as $i_ty);
                        let a = _mm_xor_si128(self.0, sign);
                        let b = _mm_xor_si128(rhs.0, sign);
                        Vector(_mm_xor_si128($avg(a, _mm_xor_si128(b, ones)), sign))
                    }
                }
            }
        )*
    };
}

impl_avg_i8_16! {
    i8,  _mm_avg_epu8,  _mm_set1_epi8,  i8,  0x80u8;
    i16, _mm_avg_epu16, _mm_set1_epi16, i16, 0x8000u16;
}

// 32-bit lanes: midpoint == (a | b) - ((a ^ b) >> 1), halving subtract ==
// (a >> 1) - (b >> 1) - (!a & b & 1); the shift is logical or arithmetic
// with the signedness.
impl SimdAvg for Vector<u32> {
    fn simd_midpoint(self, rhs: Self) -> Self {
        unsafe {
            Vector(_mm_sub_epi32(
                _mm_or_si128(self.0, rhs.0),
                _mm_srli_epi32::<1>(_mm_xor_si128(self.0, rhs.0)),
            ))
        }
    }

    fn simd_halving_sub(self, rhs: Self) -> Self {
        unsafe {
            let borrow = _mm_and_si128(
                _mm_andnot_si128(self.0, rhs.0),
                _mm_set1_epi32(1),
            );
            Vector(_mm_sub_epi32(
                _mm_sub_epi32(
                    _mm_srli_epi32::<1>(self.0),
                    _mm_srli_epi32::<1>(rhs.0),
                ),
                borrow,
            ))
        }
    }
}

impl SimdAvg for Vector<i32> {
    fn simd_midpoint(self, rhs: Self) -> Self {
        unsafe {
            Vector(_mm_sub_epi32(
                _mm_or_si128(self.0, rhs.0),
                _mm_srai_epi32::<1>(_mm_xor_si128(self.0, rhs.0)),
            ))
        }
    }

    fn simd_halving_sub(self, rhs: Self) -> Self {
        unsafe {
            let borrow = _mm_and_si128(
                _mm_andnot_si128(self.0, rhs.0),
                _mm_set1_epi32(1),
            );
            Vector(_mm_sub_epi32(
                _mm_sub_epi32(
                    _mm_srai_epi32::<1>(self.0),
                    _mm_srai_epi32::<1>(rhs.0),
                ),
                borrow,
            ))
        }
    }
}

// 64-bit lanes have no native shift-with-sign or average; two lanes go the
// scalar way.
macro_rules! impl_avg_64 {
    {$($ty:ty;)*} => {
        $(
            impl SimdAvg for Vector<$ty> {
                fn simd_midpoint(self, rhs: Self) -> Self {
                    let a = self.to_array();
                    let b = rhs.to_array();
                    Vector::from_array([
                        ((a[0] as i128 + b[0] as i128 + 1) >> 1) as $ty,
                        ((a[1] as i128 + b[1] as i128 + 1) >> 1) as $ty,
                    ])
                }

                fn simd_halving_sub(self, rhs: Self) -> Self {
                    let a = self.to_array();
                    let b = rhs.to_array();
                    Vector::from_array([
                        ((a[0] as i128 - b[0] as i128) >> 1) as $ty,
                        ((a[1] as i128 - b[1] as i128) >> 1) as $ty,
                    ])
                }
            }
        )*
    };
}

impl_avg_64! {
    i64;
    u64;
}

impl SimdMulHigh for Vector<i16> {
    fn simd_mul_high(self, rhs: Self) -> Self {
        unsafe { Vector(_mm_mulhi_epi16(self.0, rhs.0)) }
    }
}

impl SimdMulHigh for Vector<u16> {
    fn simd_mul_high(self, rhs: Self) -> Self {
        unsafe { Vector(_mm_mulhi_epu16(self.0, rhs.0)) }
    }
}

impl SimdRecip for Vector<f32> {
    fn simd_recip_est(self) -> Self {
        unsafe { Vector(_mm_rcp_ps(self.0)) }
    }

    fn simd_rsqrt_est(self) -> Self {
        unsafe { Vector(_mm_rsqrt_ps(self.0)) }
    }
}

// No f64 estimate instruction below AVX512; full-precision division is the
// estimate.
impl SimdRecip for Vector<f64> {
    fn simd_recip_est(self) -> Self {
        unsafe { Vector(_mm_div_pd(_mm_set1_pd(1.0), self.0)) }
    }

    fn simd_rsqrt_est(self) -> Self {
        unsafe { Vector(_mm_div_pd(_mm_set1_pd(1.0), _mm_sqrt_pd(self.0))) }
    }
}

macro_rules! impl_bitwise_int {
    {$($ty:ty;)*} => {
        $(
            impl SimdNot for Vector<$ty> {
                fn simd_not(self) -> Self {
                    unsafe { Vector(_mm_xor_si128(self.0, _mm_set1_epi8(-1))) }
                }
            }

            impl SimdAnd for Vector<$ty> {
                fn simd_and(self, rhs: Self) -> Self {
                    unsafe { Vector(_mm_and_si128(self.0, rhs.0)) }
                }
            }

            impl SimdOr for Vector<$ty> {
                fn simd_or(self, rhs: Self) -> Self {
                    unsafe { Vector(_mm_or_si128(self.0, rhs.0)) }
                }
            }

            impl SimdXor for Vector<$ty> {
                fn simd_xor(self, rhs: Self) -> Self {
                    unsafe { Vector(_mm_xor_si128(self.0, rhs.0)) }
                }
            }

            impl SimdAndNot for Vector<$ty> {
                fn simd_andnot(self, rhs: Self) -> Self {
                    unsafe { Vector(_mm_andnot_si128(self.0, rhs.0)) }
                }
            }
        )*
    };
}

impl_bitwise_int! {
    i8;
    u8;
    i16;
    u16;
    i32;
    u32;
    i64;
    u64;
}

macro_rules! impl_bitwise_fp {
    {$($ty:ty, $and:ident, $or:ident, $xor:ident, $andnot:ident, $cast_from:ident;)*} => {
        $(
            impl SimdNot for Vector<$ty> {
                fn simd_not(self) -> Self {
                    unsafe { Vector($xor(self.0, $cast_from(_mm_set1_epi8(-1)))) }
                }
            }

            impl SimdAnd for Vector<$ty> {
                fn simd_and(self, rhs: Self) -> Self {
                    unsafe { Vector($and(self.0, rhs.0)) }
                }
            }

            impl SimdOr for Vector<$ty> {
                fn simd_or(self, rhs: Self) -> Self {
                    unsafe { Vector($or(self.0, rhs.0)) }
                }
            }

            impl SimdXor for Vector<$ty> {
                fn simd_xor(self, rhs: Self) -> Self {
                    unsafe { Vector($xor(self.0, rhs.0)) }
                }
            }

            impl SimdAndNot for Vector<$ty> {
                fn simd_andnot(self, rhs: Self) -> Self {
                    unsafe { Vector($andnot(self.0, rhs.0)) }
                }
            }
        )*
    };
}

impl_bitwise_fp! {
    f32, _mm_and_ps, _mm_or_ps, _mm_xor_ps, _mm_andnot_ps, _mm_castsi128_ps;
    f64, _mm_and_pd, _mm_or_pd, _mm_xor_pd, _mm_andnot_pd, _mm_castsi128_pd;
}
