use core::arch::x86_64::*;

use super::{slli_bytes, srli_bytes};
use crate::ops::*;
use crate::Vector;

// Runtime-count shifts ride the 16/32/64-bit shift units; the count comes
// in through the low quadword of a register. Counts at or beyond the lane
// width drain to 0 (sign fill for arithmetic), which the hardware already
// does.
macro_rules! impl_shift_16_32 {
    {$($ty:ty, $sll:ident, $srl:ident, $sra:ident, $arith:literal;)*} => {
        $(
            impl SimdShift for Vector<$ty> {
                fn simd_shl(self, count: u32) -> Self {
                    unsafe { Vector($sll(self.0, _mm_cvtsi32_si128(count as i32))) }
                }

                fn simd_shr(self, count: u32) -> Self {
                    if $arith {
                        let count = count.min(<$ty>::BITS - 1);
                        unsafe { Vector($sra(self.0, _mm_cvtsi32_si128(count as i32))) }
                    } else {
                        unsafe { Vector($srl(self.0, _mm_cvtsi32_si128(count as i32))) }
                    }
                }
            }
        )*
    };
}

impl_shift_16_32! {
    i16, _mm_sll_epi16, _mm_srl_epi16, _mm_sra_epi16, true;
    u16, _mm_sll_epi16, _mm_srl_epi16, _mm_sra_epi16, false;
    i32, _mm_sll_epi32, _mm_srl_epi32, _mm_sra_epi32, true;
    u32, _mm_sll_epi32, _mm_srl_epi32, _mm_sra_epi32, false;
}

impl SimdShift for Vector<u64> {
    fn simd_shl(self, count: u32) -> Self {
        unsafe { Vector(_mm_sll_epi64(self.0, _mm_cvtsi32_si128(count as i32))) }
    }

    fn simd_shr(self, count: u32) -> Self {
        unsafe { Vector(_mm_srl_epi64(self.0, _mm_cvtsi32_si128(count as i32))) }
    }
}

// There is no 64-bit arithmetic right shift below AVX512; two lanes, the
// scalar way.
impl SimdShift for Vector<i64> {
    fn simd_shl(self, count: u32) -> Self {
        unsafe { Vector(_mm_sll_epi64(self.0, _mm_cvtsi32_si128(count as i32))) }
    }

    fn simd_shr(self, count: u32) -> Self {
        let count = count.min(63);
        let a = self.to_array();
        Vector::from_array([a[0] >> count, a[1] >> count])
    }
}

// Byte lanes borrow the 16-bit shift unit and mask off what bled across
// the byte boundary.
macro_rules! impl_shift_8 {
    {$($ty:ty;)*} => {
        $(
            impl SimdShift for Vector<$ty> {
                fn simd_shl(self, count: u32) -> Self {
                    if count >= 8 {
                        return Self::zero();
                    }
                    unsafe {
                        let wide = _mm_sll_epi16(self.0, _mm_cvtsi32_si128(count as i32));
                        let keep = _mm_set1_epi8(((0xFFu32 << count) & 0xFF) as u8 as i8);
                        Vector(_mm_and_si128(wide, keep))
                    }
                }

                fn simd_shr(self, count: u32) -> Self {
                    if <$ty>::MIN == 0 {
                        if count >= 8 {
                            return Self::zero();
                        }
                        unsafe {
                            let wide = _mm_srl_epi16(self.0, _mm_cvtsi32_si128(count as i32));
                            let keep = _mm_set1_epi8((0xFFu32 >> count) as u8 as i8);
                            Vector(_mm_and_si128(wide, keep))
                        }
                    } else {
                        // Sign-extend through duplicated bytes: (x * 0x0101) >> (8 + n)
                        // keeps x's sign in the high half of each 16-bit lane.
                        let count = count.min(7);
                        unsafe {
                            let cnt = _mm_cvtsi32_si128(8 + count as i32);
                            let lo = _mm_sra_epi16(_mm_unpacklo_epi8(self.0, self.0), cnt);
                            let hi = _mm_sra_epi16(_mm_unpackhi_epi8(self.0, self.0), cnt);
                            let low = _mm_set1_epi16(0x00FF);
                            Vector(_mm_packus_epi16(
                                _mm_and_si128(lo, low),
                                _mm_and_si128(hi, low),
                            ))
                        }
                    }
                }
            }
        )*
    };
}

impl_shift_8! {
    i8;
    u8;
}

// Lane-position shifts are whole-register byte shifts.
macro_rules! impl_lane_shift {
    {$($ty:ty, $bytes:literal;)*} => {
        $(
            impl SimdLaneShift for Vector<$ty> {
                fn simd_shl_lanes<const N: usize>(self) -> Self {
                    Vector(slli_bytes(self.0, N * $bytes))
                }

                fn simd_shr_lanes<const N: usize>(self) -> Self {
                    Vector(srli_bytes(self.0, N * $bytes))
                }
            }
        )*
    };
}

impl_lane_shift! {
    i8,  1;
    u8,  1;
    i16, 2;
    u16, 2;
    i32, 4;
    u32, 4;
    i64, 8;
    u64, 8;
}

macro_rules! impl_lane_shift_fp {
    {$($ty:ty, $bytes:literal, $to_int:ident, $from_int:ident;)*} => {
        $(
            impl SimdLaneShift for Vector<$ty> {
                fn simd_shl_lanes<const N: usize>(self) -> Self {
                    unsafe { Vector($from_int(slli_bytes($to_int(self.0), N * $bytes))) }
                }

                fn simd_shr_lanes<const N: usize>(self) -> Self {
                    unsafe { Vector($from_int(srli_bytes($to_int(self.0), N * $bytes))) }
                }
            }
        )*
    };
}

impl_lane_shift_fp! {
    f32, 4, _mm_castps_si128, _mm_castsi128_ps;
    f64, 8, _mm_castpd_si128, _mm_castsi128_pd;
}

// dup keeps everything inside one lane, so plain shift/mask/or does it.
macro_rules! impl_dup {
    {$($ty:ty, $sll:ident, $srl:ident, $set1:ident, $half:literal, $low_mask:expr;)*} => {
        $(
            impl SimdDup for Vector<$ty> {
                fn simd_dup_lo(self) -> Self {
                    unsafe {
                        let lo = _mm_and_si128(self.0, $set1($low_mask));
                        Vector(_mm_or_si128($sll::<$half>(lo), lo))
                    }
                }

                fn simd_dup_hi(self) -> Self {
                    unsafe {
                        let hi = $srl::<$half>(self.0);
                        Vector(_mm_or_si128($sll::<$half>(hi), hi))
                    }
                }
            }
        )*
    };
}

impl_dup! {
    i16, _mm_slli_epi16, _mm_srli_epi16, _mm_set1_epi16, 8,  0x00FFu16 as i16;
    u16, _mm_slli_epi16, _mm_srli_epi16, _mm_set1_epi16, 8,  0x00FFu16 as i16;
    i32, _mm_slli_epi32, _mm_srli_epi32, _mm_set1_epi32, 16, 0xFFFFu32 as i32;
    u32, _mm_slli_epi32, _mm_srli_epi32, _mm_set1_epi32, 16, 0xFFFFu32 as i32;
    i64, _mm_slli_epi64, _mm_srli_epi64, _mm_set1_epi64x, 32, 0xFFFF_FFFFu64 as i64;
    u64, _mm_slli_epi64, _mm_srli_epi64, _mm_set1_epi64x, 32, 0xFFFF_FFFFu64 as i64;
}
