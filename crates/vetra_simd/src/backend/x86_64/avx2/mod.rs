//! 256-bit x86_64 backend (AVX2).
//!
//! The 256-bit integer register is internally split: the byte-shift,
//! unpack and pack instructions all operate on the two 128-bit halves
//! independently. Whole-register operations are re-synthesized from the
//! half-register primitives plus a lane-reassembly step; the results are
//! bit-identical to a single contiguous register.

use core::arch::x86_64::*;

mod arith;
mod cmp;
mod convert;
mod memory;
mod shift;

/// Contiguous whole-register byte shift toward higher lane indices.
///
/// `_mm256_slli_si256` shifts each 128-bit half on its own, dropping the
/// bytes that should carry from the low half into the high half. The carry
/// half is rebuilt with a cross-half permute, then `alignr` stitches each
/// half to its carry-in:
/// new_lo = lo << n, new_hi = (hi << n) | (lo >> (16 - n)).
#[inline]
pub(super) fn slli_bytes(v: __m256i, n: usize) -> __m256i {
    // t = [zero, lo]
    let t = unsafe { _mm256_permute2x128_si256::<0x08>(v, v) };
    macro_rules! low_arms {
        ($($n:literal, $r:literal;)*) => {
            match n {
                0 => v,
                $($n => unsafe { _mm256_alignr_epi8::<$r>(v, t) },)*
                16 => t,
                17 => unsafe { _mm256_slli_si256::<1>(t) },
                18 => unsafe { _mm256_slli_si256::<2>(t) },
                19 => unsafe { _mm256_slli_si256::<3>(t) },
                20 => unsafe { _mm256_slli_si256::<4>(t) },
                21 => unsafe { _mm256_slli_si256::<5>(t) },
                22 => unsafe { _mm256_slli_si256::<6>(t) },
                23 => unsafe { _mm256_slli_si256::<7>(t) },
                24 => unsafe { _mm256_slli_si256::<8>(t) },
                25 => unsafe { _mm256_slli_si256::<9>(t) },
                26 => unsafe { _mm256_slli_si256::<10>(t) },
                27 => unsafe { _mm256_slli_si256::<11>(t) },
                28 => unsafe { _mm256_slli_si256::<12>(t) },
                29 => unsafe { _mm256_slli_si256::<13>(t) },
                30 => unsafe { _mm256_slli_si256::<14>(t) },
                31 => unsafe { _mm256_slli_si256::<15>(t) },
                _ => unsafe { _mm256_setzero_si256() },
            }
        };
    }
    low_arms! {
        1, 15; 2, 14; 3, 13; 4, 12; 5, 11; 6, 10; 7, 9; 8, 8;
        9, 7; 10, 6; 11, 5; 12, 4; 13, 3; 14, 2; 15, 1;
    }
}

/// Contiguous whole-register byte shift toward lower lane indices; the
/// mirror of [`slli_bytes`]:
/// new_lo = (lo >> n) | (hi << (16 - n)), new_hi = hi >> n.
#[inline]
pub(super) fn srli_bytes(v: __m256i, n: usize) -> __m256i {
    // t = [hi, zero]
    let t = unsafe { _mm256_permute2x128_si256::<0x81>(v, v) };
    macro_rules! arms {
        ($($n:literal;)*) => {
            match n {
                0 => v,
                $($n => unsafe { _mm256_alignr_epi8::<$n>(t, v) },)*
                16 => t,
                17 => unsafe { _mm256_srli_si256::<1>(t) },
                18 => unsafe { _mm256_srli_si256::<2>(t) },
                19 => unsafe { _mm256_srli_si256::<3>(t) },
                20 => unsafe { _mm256_srli_si256::<4>(t) },
                21 => unsafe { _mm256_srli_si256::<5>(t) },
                22 => unsafe { _mm256_srli_si256::<6>(t) },
                23 => unsafe { _mm256_srli_si256::<7>(t) },
                24 => unsafe { _mm256_srli_si256::<8>(t) },
                25 => unsafe { _mm256_srli_si256::<9>(t) },
                26 => unsafe { _mm256_srli_si256::<10>(t) },
                27 => unsafe { _mm256_srli_si256::<11>(t) },
                28 => unsafe { _mm256_srli_si256::<12>(t) },
                29 => unsafe { _mm256_srli_si256::<13>(t) },
                30 => unsafe { _mm256_srli_si256::<14>(t) },
                31 => unsafe { _mm256_srli_si256::<15>(t) },
                _ => unsafe { _mm256_setzero_si256() },
            }
        };
    }
    arms! { 1; 2; 3; 4; 5; 6; 7; 8; 9; 10; 11; 12; 13; 14; 15; }
}

/// Reorder the per-half output of the 256-bit pack instructions into
/// contiguous lane order: quads [a_lo, b_lo, a_hi, b_hi] -> [a, b].
#[inline]
pub(super) fn fix_pack_order(v: __m256i) -> __m256i {
    unsafe { _mm256_permute4x64_epi64::<0b11_01_10_00>(v) }
}
