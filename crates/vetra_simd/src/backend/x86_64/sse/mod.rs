//! 128-bit x86_64 backend. Everything here works on an SSE2 baseline;
//! individual operations swap in SSE3/SSSE3/SSE4.1/SSE4.2 primitives when
//! the target features carry them.

use core::arch::x86_64::*;

mod arith;
mod cmp;
mod convert;
mod memory;
mod shift;

/// Whole-register byte shift toward higher lane indices by a runtime byte
/// count. The shift intrinsic wants an immediate, so the count dispatches
/// over constant arms.
#[inline]
pub(super) fn slli_bytes(v: __m128i, n: usize) -> __m128i {
    macro_rules! arms {
        ($($n:literal)*) => {
            match n {
                0 => v,
                $($n => unsafe { _mm_slli_si128::<$n>(v) },)*
                _ => unsafe { _mm_setzero_si128() },
            }
        };
    }
    arms! { 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 }
}

/// Whole-register byte shift toward lower lane indices by a runtime byte
/// count.
#[inline]
pub(super) fn srli_bytes(v: __m128i, n: usize) -> __m128i {
    macro_rules! arms {
        ($($n:literal)*) => {
            match n {
                0 => v,
                $($n => unsafe { _mm_srli_si128::<$n>(v) },)*
                _ => unsafe { _mm_setzero_si128() },
            }
        };
    }
    arms! { 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 }
}
