//! AArch64 NEON backend (advanced SIMD), 128-bit registers.
//!
//! NEON intrinsics are strongly typed, so every logical element type gets
//! its own register type; byte-level whole-register operations detour
//! through `uint8x16_t` reinterprets.

use core::arch::aarch64::*;

mod arith;
mod cmp;
mod convert;
mod memory;
mod shift;

pub(crate) mod regs {
    use core::arch::aarch64::*;

    pub type RegI8 = int8x16_t;
    pub type RegU8 = uint8x16_t;
    pub type RegI16 = int16x8_t;
    pub type RegU16 = uint16x8_t;
    pub type RegI32 = int32x4_t;
    pub type RegU32 = uint32x4_t;
    pub type RegI64 = int64x2_t;
    pub type RegU64 = uint64x2_t;
    pub type RegF32 = float32x4_t;
    pub type RegF64 = float64x2_t;
}

/// Whole-register byte shift toward higher lane indices; `ext` wants an
/// immediate, so the runtime count dispatches over constant arms.
#[inline]
pub(super) fn shl_bytes(v: uint8x16_t, n: usize) -> uint8x16_t {
    let zero = unsafe { vdupq_n_u8(0) };
    macro_rules! arms {
        ($($n:literal, $r:literal;)*) => {
            match n {
                0 => v,
                $($n => unsafe { vextq_u8::<$r>(zero, v) },)*
                _ => zero,
            }
        };
    }
    arms! {
        1, 15; 2, 14; 3, 13; 4, 12; 5, 11; 6, 10; 7, 9; 8, 8;
        9, 7; 10, 6; 11, 5; 12, 4; 13, 3; 14, 2; 15, 1;
    }
}

/// Whole-register byte shift toward lower lane indices.
#[inline]
pub(super) fn shr_bytes(v: uint8x16_t, n: usize) -> uint8x16_t {
    let zero = unsafe { vdupq_n_u8(0) };
    macro_rules! arms {
        ($($n:literal;)*) => {
            match n {
                0 => v,
                $($n => unsafe { vextq_u8::<$n>(v, zero) },)*
                _ => zero,
            }
        };
    }
    arms! { 1; 2; 3; 4; 5; 6; 7; 8; 9; 10; 11; 12; 13; 14; 15; }
}
