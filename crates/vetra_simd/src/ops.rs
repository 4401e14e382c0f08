//! Per-operation traits implemented by the active backend.
//!
//! Each trait covers one elementwise concern; a backend provides one impl
//! per logical element type it supports. A missing impl is a compile-time
//! error at the call site, which is the intended failure mode for
//! unsupported (type, capability level) combinations.
//!
//! Every binary and unary trait here is also lifted componentwise over
//! tuples of implementors (arity 2 to 4, recursing through nesting), so
//! higher layers can run one operation across multi-vector aggregates such
//! as wide accumulators.

use crate::{Element, Vector};

/// Per-element add. Saturating on 8- and 16-bit integer lanes, wrapping on
/// 32/64-bit integer lanes, IEEE-754 on float lanes.
pub trait SimdAdd {
    fn simd_add(self, rhs: Self) -> Self;
}

/// Per-element subtract, with the same saturation policy as [`SimdAdd`].
pub trait SimdSub {
    fn simd_sub(self, rhs: Self) -> Self;
}

/// Per-element multiply, truncated to the lane width on integer lanes.
pub trait SimdMul {
    fn simd_mul(self, rhs: Self) -> Self;
}

/// Per-element divide. Integer lanes have no native divide on any supported
/// ISA and evaluate per lane; a zero divisor panics there.
pub trait SimdDiv {
    fn simd_div(self, rhs: Self) -> Self;
}

/// Per-element remainder, same caveats as [`SimdDiv`].
pub trait SimdRem {
    fn simd_rem(self, rhs: Self) -> Self;
}

/// Per-element negate. Signed integer and float lanes only.
pub trait SimdNeg {
    fn simd_neg(self) -> Self;
}

/// Per-element min/max and the clamp composed from them.
pub trait SimdMinMax: Sized {
    fn simd_min(self, rhs: Self) -> Self;
    fn simd_max(self, rhs: Self) -> Self;

    fn simd_clamp(self, lo: Self, hi: Self) -> Self {
        self.simd_max(lo).simd_min(hi)
    }
}

/// Rounding average (round half up) and halving subtract
/// (`floor((a - b) / 2)`, no overflow at any operand pair).
pub trait SimdAvg {
    fn simd_midpoint(self, rhs: Self) -> Self;
    fn simd_halving_sub(self, rhs: Self) -> Self;
}

/// Per-element absolute value. Signed integer and float lanes only.
pub trait SimdAbs {
    fn simd_abs(self) -> Self;
}

/// Per-element absolute difference. Saturating on 8/16-bit integer lanes.
pub trait SimdAbsDiff {
    fn simd_abs_diff(self, rhs: Self) -> Self;
}

/// High half of the widening product. 16-bit integer lanes only.
pub trait SimdMulHigh {
    fn simd_mul_high(self, rhs: Self) -> Self;
}

/// Reciprocal and reciprocal-square-root estimates. Float lanes only; the
/// precision is the hardware estimate's (refined once where the ISA expects
/// it), not a correctly rounded result.
pub trait SimdRecip {
    fn simd_recip_est(self) -> Self;
    fn simd_rsqrt_est(self) -> Self;
}

/// Bitwise complement, defined on every lane type via the register bits.
pub trait SimdNot {
    fn simd_not(self) -> Self;
}

/// Bitwise and, defined on every lane type via the register bits.
pub trait SimdAnd {
    fn simd_and(self, rhs: Self) -> Self;
}

/// Bitwise or, defined on every lane type via the register bits.
pub trait SimdOr {
    fn simd_or(self, rhs: Self) -> Self;
}

/// Bitwise xor, defined on every lane type via the register bits.
pub trait SimdXor {
    fn simd_xor(self, rhs: Self) -> Self;
}

/// `(!self) & rhs` in one step, after the native x86 primitive.
pub trait SimdAndNot {
    fn simd_andnot(self, rhs: Self) -> Self;
}

/// Elementwise comparisons producing a mask vector: all-ones lanes where
/// the predicate holds, all-zero elsewhere.
///
/// The full ordered set is available for unsigned types on every backend;
/// whether a given predicate is native or synthesized (sign-bit bias into
/// the signed domain, operand-swapped `gt`) is a backend detail.
pub trait SimdCmp {
    type Mask;

    fn simd_eq(&self, rhs: &Self) -> Self::Mask;
    fn simd_ne(&self, rhs: &Self) -> Self::Mask;
    fn simd_lt(&self, rhs: &Self) -> Self::Mask;
    fn simd_le(&self, rhs: &Self) -> Self::Mask;
    fn simd_gt(&self, rhs: &Self) -> Self::Mask;
    fn simd_ge(&self, rhs: &Self) -> Self::Mask;
}

/// Per-lane bit shifts by a runtime count. Right shift is logical for
/// unsigned lanes and arithmetic for signed lanes; counts at or beyond the
/// lane width yield 0 (sign fill for the arithmetic shift).
pub trait SimdShift {
    fn simd_shl(self, count: u32) -> Self;
    fn simd_shr(self, count: u32) -> Self;
}

/// Whole-lane position shifts by a compile-time lane count, zero fill.
/// `N >= LANES` is a compile-time error.
pub trait SimdLaneShift {
    /// Lane `i` of the result is lane `i - N` of the input.
    fn simd_shl_lanes<const N: usize>(self) -> Self;
    /// Lane `i` of the result is lane `i + N` of the input.
    fn simd_shr_lanes<const N: usize>(self) -> Self;
}

/// Broadcast the low / high half of each lane across both halves of that
/// lane (builds byte pairs from single bytes and so on). 16/32/64-bit
/// integer lanes.
pub trait SimdDup {
    fn simd_dup_lo(self) -> Self;
    fn simd_dup_hi(self) -> Self;
}

/// Per-lane blend: lane `i` of the result is `if_true`'s lane where the
/// mask lane is all-ones, else `if_false`'s. Callers must pass masks whose
/// lanes are entirely set or entirely clear (comparison outputs are).
pub trait SimdSelect: Sized {
    type Mask;

    fn simd_select(mask: Self::Mask, if_true: Self, if_false: Self) -> Self;
}

/// Horizontal reductions over mask vectors.
pub trait SimdMaskOps {
    /// True if any lane has its top bit set.
    fn simd_any(self) -> bool;
    /// True if every lane has its top bit set.
    fn simd_all(self) -> bool;
}

/// Full-register transfers between a vector and memory.
pub trait SimdMem<T: Element>: Sized {
    /// # Safety
    /// `mem` must be valid for reading a full register; if `ALIGNED` it
    /// must also be register-aligned, or the behavior is undefined.
    unsafe fn simd_load<const ALIGNED: bool>(mem: *const T) -> Self;

    /// # Safety
    /// `mem` must be valid for writing a full register; if `ALIGNED` it
    /// must also be register-aligned, or the behavior is undefined.
    unsafe fn simd_store<const ALIGNED: bool>(self, mem: *mut T);
}

/// Per-lane gather. One contract, two strategies: native hardware gather
/// where the capability level has one, sequential extract-and-load
/// everywhere else.
pub trait SimdGather<T: Element>: Sized {
    /// Lane `i` of the result is `mem[idx[i]]`.
    ///
    /// # Safety
    /// Every `mem + idx[i]` must be readable.
    unsafe fn simd_lookup(mem: *const T, idx: Vector<T::Index>) -> Self;

    /// Two-dimensional gather at `row * stride + col` per lane. For 8- and
    /// 16-bit index lanes the index arithmetic runs in two doubled-width
    /// half vectors so the product cannot overflow the index type.
    ///
    /// # Safety
    /// Every computed element offset must be readable from `mem`.
    unsafe fn simd_lookup2(
        mem: *const T,
        row: Vector<T::Index>,
        col: Vector<T::Index>,
        stride: T::Index,
    ) -> Self;
}

/// The half/pair machinery: widen one half of a register, or narrow two
/// registers into one. All width-changing conversions compose over this.
pub trait SimdExtend: Sized {
    /// The doubled-width vector type (half as many lanes).
    type Wide;

    /// Value-convert the low half of the lanes to the doubled width.
    fn simd_extend_lower(self) -> Self::Wide;
    /// Value-convert the high half of the lanes to the doubled width.
    fn simd_extend_upper(self) -> Self::Wide;
    /// Narrow two wide vectors into one, saturating lanes that fall outside
    /// the narrow range (`a` becomes the low lanes).
    fn simd_compress(a: Self::Wide, b: Self::Wide) -> Self;
    /// Narrow two wide vectors into one by plain bit truncation; mask
    /// patterns survive unchanged (all-ones lanes stay all-ones).
    fn simd_compress_truncate(a: Self::Wide, b: Self::Wide) -> Self;
}

/// Same-lane-count value conversion into `Target` (int ↔ float of equal
/// width, signed ↔ unsigned, identity). Distinct from reinterpretation:
/// this changes the representation, not just the label.
pub trait SimdConvert<Target> {
    fn simd_convert(self) -> Target;
}

/// Per-lane blend over any [`SimdSelect`] implementor, tuples included.
#[inline]
pub fn select<S: SimdSelect>(mask: S::Mask, if_true: S, if_false: S) -> S {
    S::simd_select(mask, if_true, if_false)
}

// Componentwise tuple lifting. Structural recursion only: an n-tuple of
// implementors is itself an implementor, nesting included.
macro_rules! lift_tuples {
    {$(($($t:ident . $i:tt),+))*} => {
        $(
            impl<$($t: SimdAdd),+> SimdAdd for ($($t,)+) {
                fn simd_add(self, rhs: Self) -> Self {
                    ($(self.$i.simd_add(rhs.$i),)+)
                }
            }

            impl<$($t: SimdSub),+> SimdSub for ($($t,)+) {
                fn simd_sub(self, rhs: Self) -> Self {
                    ($(self.$i.simd_sub(rhs.$i),)+)
                }
            }

            impl<$($t: SimdMul),+> SimdMul for ($($t,)+) {
                fn simd_mul(self, rhs: Self) -> Self {
                    ($(self.$i.simd_mul(rhs.$i),)+)
                }
            }

            impl<$($t: SimdDiv),+> SimdDiv for ($($t,)+) {
                fn simd_div(self, rhs: Self) -> Self {
                    ($(self.$i.simd_div(rhs.$i),)+)
                }
            }

            impl<$($t: SimdRem),+> SimdRem for ($($t,)+) {
                fn simd_rem(self, rhs: Self) -> Self {
                    ($(self.$i.simd_rem(rhs.$i),)+)
                }
            }

            impl<$($t: SimdNeg),+> SimdNeg for ($($t,)+) {
                fn simd_neg(self) -> Self {
                    ($(self.$i.simd_neg(),)+)
                }
            }

            impl<$($t: SimdMinMax),+> SimdMinMax for ($($t,)+) {
                fn simd_min(self, rhs: Self) -> Self {
                    ($(self.$i.simd_min(rhs.$i),)+)
                }

                fn simd_max(self, rhs: Self) -> Self {
                    ($(self.$i.simd_max(rhs.$i),)+)
                }
            }

            impl<$($t: SimdAvg),+> SimdAvg for ($($t,)+) {
                fn simd_midpoint(self, rhs: Self) -> Self {
                    ($(self.$i.simd_midpoint(rhs.$i),)+)
                }

                fn simd_halving_sub(self, rhs: Self) -> Self {
                    ($(self.$i.simd_halving_sub(rhs.$i),)+)
                }
            }

            impl<$($t: SimdAbs),+> SimdAbs for ($($t,)+) {
                fn simd_abs(self) -> Self {
                    ($(self.$i.simd_abs(),)+)
                }
            }

            impl<$($t: SimdAbsDiff),+> SimdAbsDiff for ($($t,)+) {
                fn simd_abs_diff(self, rhs: Self) -> Self {
                    ($(self.$i.simd_abs_diff(rhs.$i),)+)
                }
            }

            impl<$($t: SimdNot),+> SimdNot for ($($t,)+) {
                fn simd_not(self) -> Self {
                    ($(self.$i.simd_not(),)+)
                }
            }

            impl<$($t: SimdAnd),+> SimdAnd for ($($t,)+) {
                fn simd_and(self, rhs: Self) -> Self {
                    ($(self.$i.simd_and(rhs.$i),)+)
                }
            }

            impl<$($t: SimdOr),+> SimdOr for ($($t,)+) {
                fn simd_or(self, rhs: Self) -> Self {
                    ($(self.$i.simd_or(rhs.$i),)+)
                }
            }

            impl<$($t: SimdXor),+> SimdXor for ($($t,)+) {
                fn simd_xor(self, rhs: Self) -> Self {
                    ($(self.$i.simd_xor(rhs.$i),)+)
                }
            }

            impl<$($t: SimdAndNot),+> SimdAndNot for ($($t,)+) {
                fn simd_andnot(self, rhs: Self) -> Self {
                    ($(self.$i.simd_andnot(rhs.$i),)+)
                }
            }

            impl<$($t: SimdShift),+> SimdShift for ($($t,)+) {
                fn simd_shl(self, count: u32) -> Self {
                    ($(self.$i.simd_shl(count),)+)
                }

                fn simd_shr(self, count: u32) -> Self {
                    ($(self.$i.simd_shr(count),)+)
                }
            }

            impl<$($t: SimdSelect),+> SimdSelect for ($($t,)+) {
                type Mask = ($($t::Mask,)+);

                fn simd_select(mask: Self::Mask, if_true: Self, if_false: Self) -> Self {
                    ($($t::simd_select(mask.$i, if_true.$i, if_false.$i),)+)
                }
            }
        )*
    };
}

lift_tuples! {
    (A.0, B.1)
    (A.0, B.1, C.2)
    (A.0, B.1, C.2, D.3)
}
