use core::fmt;
use core::mem;
use core::ops::{
    Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Rem, Shl, Shr, Sub,
};

use crate::element::{Element, Widen};
use crate::ops::*;

/// One hardware vector register of `T` lanes.
///
/// Register-sized, `Copy`, no heap, no destructor. The lane count and lane
/// width are compile-time constants; no operation changes them on an
/// existing value — width changes go through [`Vector::reinterpret`] and the
/// convert family.
#[repr(transparent)]
pub struct Vector<T: Element>(pub(crate) T::Register);

impl<T: Element> Clone for Vector<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Element> Copy for Vector<T> {}

impl<T: Element> Vector<T> {
    /// Number of lanes in this register.
    pub const LANES: usize = T::LANES;
    /// Bytes per lane.
    pub const LANE_BYTES: usize = T::LANE_BYTES;

    /// Construct a register with every lane zero.
    #[must_use]
    #[inline]
    pub fn zero() -> Self {
        // All-zero bits are a valid register for every backend.
        unsafe { mem::zeroed() }
    }

    /// Construct a register with every lane set to `value`.
    #[must_use]
    #[inline]
    pub fn splat(value: T) -> Self {
        let mut lanes = Self::zero().to_array();
        for lane in lanes.as_mut() {
            *lane = value;
        }
        Self::from_array(lanes)
    }

    /// Construct a register from one scalar per lane.
    #[must_use]
    #[inline]
    pub fn from_array(lanes: T::Array) -> Self {
        // Element guarantees Array and Register are the same size.
        unsafe { mem::transmute_copy(&lanes) }
    }

    /// The register as one scalar per lane.
    #[must_use]
    #[inline]
    pub fn to_array(self) -> T::Array {
        unsafe { mem::transmute_copy(&self) }
    }

    /// Construct a register from `slice[..LANES]`.
    ///
    /// # Panics
    /// Panics if the slice's `len` is less than the register's lane count.
    #[must_use]
    pub fn from_slice(slice: &[T]) -> Self {
        assert!(
            slice.len() >= T::LANES,
            "slice length must be at least the number of lanes"
        );
        let mut lanes = Self::zero().to_array();
        lanes.as_mut().copy_from_slice(&slice[..T::LANES]);
        Self::from_array(lanes)
    }

    /// Reinterpret the register bits as `U` lanes.
    ///
    /// A pure bit reinterpretation: no lane value is converted, only the
    /// grouping changes. Every element type of a build shares the register
    /// width, so this is total; value conversion is [`Vector::convert`] and
    /// the extend/compress family.
    #[must_use]
    #[inline]
    pub fn reinterpret<U: Element>(self) -> Vector<U> {
        unsafe { mem::transmute_copy(&self) }
    }

    /// Lane `I` by value. `I >= LANES` fails to compile.
    #[must_use]
    #[inline]
    pub fn extract<const I: usize>(self) -> T {
        const { assert!(I < T::LANES, "lane index out of range") };
        self.to_array().as_ref()[I]
    }

    /// Copy of `self` with lane `I` replaced. `I >= LANES` fails to compile.
    #[must_use]
    #[inline]
    pub fn insert<const I: usize>(self, value: T) -> Self {
        const { assert!(I < T::LANES, "lane index out of range") };
        let mut lanes = self.to_array();
        lanes.as_mut()[I] = value;
        Self::from_array(lanes)
    }

    /// Load a full register from memory.
    ///
    /// # Safety
    /// `mem` must be valid for reading `LANES` elements; with
    /// `ALIGNED = true` it must additionally be register-aligned.
    #[must_use]
    #[inline]
    pub unsafe fn load<const ALIGNED: bool>(mem: *const T) -> Self
    where
        Self: SimdMem<T>,
    {
        Self::simd_load::<ALIGNED>(mem)
    }

    /// Store a full register to memory.
    ///
    /// # Safety
    /// `mem` must be valid for writing `LANES` elements; with
    /// `ALIGNED = true` it must additionally be register-aligned.
    #[inline]
    pub unsafe fn store<const ALIGNED: bool>(self, mem: *mut T)
    where
        Self: SimdMem<T>,
    {
        self.simd_store::<ALIGNED>(mem)
    }

    /// Gather one element per lane: lane `i` is `mem[idx[i]]`.
    ///
    /// # Safety
    /// Every `mem + idx[i]` must be readable.
    #[must_use]
    #[inline]
    pub unsafe fn lookup(mem: *const T, idx: Vector<T::Index>) -> Self
    where
        Self: SimdGather<T>,
    {
        Self::simd_lookup(mem, idx)
    }

    /// Two-dimensional gather: lane `i` is `mem[row[i] * stride + col[i]]`.
    ///
    /// # Safety
    /// Every computed element offset must be readable from `mem`.
    #[must_use]
    #[inline]
    pub unsafe fn lookup2(
        mem: *const T,
        row: Vector<T::Index>,
        col: Vector<T::Index>,
        stride: T::Index,
    ) -> Self
    where
        Self: SimdGather<T>,
    {
        Self::simd_lookup2(mem, row, col, stride)
    }

    /// Element-wise minimum.
    #[must_use]
    #[inline]
    pub fn min(self, rhs: Self) -> Self
    where
        Self: SimdMinMax,
    {
        self.simd_min(rhs)
    }

    /// Element-wise maximum.
    #[must_use]
    #[inline]
    pub fn max(self, rhs: Self) -> Self
    where
        Self: SimdMinMax,
    {
        self.simd_max(rhs)
    }

    /// Element-wise clamp between `lo` and `hi`.
    #[must_use]
    #[inline]
    pub fn clamp(self, lo: Self, hi: Self) -> Self
    where
        Self: SimdMinMax,
    {
        self.simd_clamp(lo, hi)
    }

    /// Rounding average, round half up: `(a + b + 1) >> 1` without overflow.
    #[must_use]
    #[inline]
    pub fn midpoint(self, rhs: Self) -> Self
    where
        Self: SimdAvg,
    {
        self.simd_midpoint(rhs)
    }

    /// Halving subtract: `floor((a - b) / 2)` without overflow.
    #[must_use]
    #[inline]
    pub fn halving_sub(self, rhs: Self) -> Self
    where
        Self: SimdAvg,
    {
        self.simd_halving_sub(rhs)
    }

    /// Element-wise absolute value.
    #[must_use]
    #[inline]
    pub fn abs(self) -> Self
    where
        Self: SimdAbs,
    {
        self.simd_abs()
    }

    /// Element-wise absolute difference.
    #[must_use]
    #[inline]
    pub fn abs_diff(self, rhs: Self) -> Self
    where
        Self: SimdAbsDiff,
    {
        self.simd_abs_diff(rhs)
    }

    /// High half of the per-lane widening product.
    #[must_use]
    #[inline]
    pub fn mul_high(self, rhs: Self) -> Self
    where
        Self: SimdMulHigh,
    {
        self.simd_mul_high(rhs)
    }

    /// Per-lane reciprocal estimate.
    #[must_use]
    #[inline]
    pub fn recip_est(self) -> Self
    where
        Self: SimdRecip,
    {
        self.simd_recip_est()
    }

    /// Per-lane reciprocal square root estimate.
    #[must_use]
    #[inline]
    pub fn rsqrt_est(self) -> Self
    where
        Self: SimdRecip,
    {
        self.simd_rsqrt_est()
    }

    /// `(!self) & rhs` in one step.
    #[must_use]
    #[inline]
    pub fn andnot(self, rhs: Self) -> Self
    where
        Self: SimdAndNot,
    {
        self.simd_andnot(rhs)
    }

    /// Element-wise equality mask.
    #[must_use]
    #[inline]
    pub fn eq(&self, rhs: &Self) -> Vector<T::Mask>
    where
        Self: SimdCmp<Mask = Vector<T::Mask>>,
    {
        self.simd_eq(rhs)
    }

    /// Element-wise inequality mask.
    #[must_use]
    #[inline]
    pub fn ne(&self, rhs: &Self) -> Vector<T::Mask>
    where
        Self: SimdCmp<Mask = Vector<T::Mask>>,
    {
        self.simd_ne(rhs)
    }

    /// Element-wise less-than mask.
    #[must_use]
    #[inline]
    pub fn lt(&self, rhs: &Self) -> Vector<T::Mask>
    where
        Self: SimdCmp<Mask = Vector<T::Mask>>,
    {
        self.simd_lt(rhs)
    }

    /// Element-wise less-or-equal mask.
    #[must_use]
    #[inline]
    pub fn le(&self, rhs: &Self) -> Vector<T::Mask>
    where
        Self: SimdCmp<Mask = Vector<T::Mask>>,
    {
        self.simd_le(rhs)
    }

    /// Element-wise greater-than mask.
    #[must_use]
    #[inline]
    pub fn gt(&self, rhs: &Self) -> Vector<T::Mask>
    where
        Self: SimdCmp<Mask = Vector<T::Mask>>,
    {
        self.simd_gt(rhs)
    }

    /// Element-wise greater-or-equal mask.
    #[must_use]
    #[inline]
    pub fn ge(&self, rhs: &Self) -> Vector<T::Mask>
    where
        Self: SimdCmp<Mask = Vector<T::Mask>>,
    {
        self.simd_ge(rhs)
    }

    /// Per-lane blend: `if_true`'s lane where the mask lane is all-ones,
    /// else `if_false`'s.
    #[must_use]
    #[inline]
    pub fn select(mask: Vector<T::Mask>, if_true: Self, if_false: Self) -> Self
    where
        Self: SimdSelect<Mask = Vector<T::Mask>>,
    {
        <Self as SimdSelect>::simd_select(mask, if_true, if_false)
    }

    /// True if any lane has its top bit set.
    #[must_use]
    #[inline]
    pub fn any(self) -> bool
    where
        Self: SimdMaskOps,
    {
        self.simd_any()
    }

    /// True if every lane has its top bit set.
    #[must_use]
    #[inline]
    pub fn all(self) -> bool
    where
        Self: SimdMaskOps,
    {
        self.simd_all()
    }

    /// Move whole lanes `N` positions toward higher indices, zero fill.
    /// `N >= LANES` fails to compile.
    #[must_use]
    #[inline]
    pub fn shl_lanes<const N: usize>(self) -> Self
    where
        Self: SimdLaneShift,
    {
        const { assert!(N < T::LANES, "lane shift out of range") };
        self.simd_shl_lanes::<N>()
    }

    /// Move whole lanes `N` positions toward lower indices, zero fill.
    /// `N >= LANES` fails to compile.
    #[must_use]
    #[inline]
    pub fn shr_lanes<const N: usize>(self) -> Self
    where
        Self: SimdLaneShift,
    {
        const { assert!(N < T::LANES, "lane shift out of range") };
        self.simd_shr_lanes::<N>()
    }

    /// Broadcast the low half of each lane across the whole lane.
    #[must_use]
    #[inline]
    pub fn dup_lo(self) -> Self
    where
        Self: SimdDup,
    {
        self.simd_dup_lo()
    }

    /// Broadcast the high half of each lane across the whole lane.
    #[must_use]
    #[inline]
    pub fn dup_hi(self) -> Self
    where
        Self: SimdDup,
    {
        self.simd_dup_hi()
    }

    /// Same-lane-count value conversion to `U` lanes.
    #[must_use]
    #[inline]
    pub fn convert<U: Element>(self) -> Vector<U>
    where
        Self: SimdConvert<Vector<U>>,
    {
        self.simd_convert()
    }
}

impl<T: Widen> Vector<T> {
    /// Value-convert the low half of the lanes to the doubled width.
    #[must_use]
    #[inline]
    pub fn extend_lower(self) -> Vector<T::Upper>
    where
        Self: SimdExtend<Wide = Vector<T::Upper>>,
    {
        self.simd_extend_lower()
    }

    /// Value-convert the high half of the lanes to the doubled width.
    #[must_use]
    #[inline]
    pub fn extend_upper(self) -> Vector<T::Upper>
    where
        Self: SimdExtend<Wide = Vector<T::Upper>>,
    {
        self.simd_extend_upper()
    }

    /// Narrow two wide vectors into one, saturating out-of-range lanes.
    /// `a` becomes the low lanes, `b` the high lanes.
    #[must_use]
    #[inline]
    pub fn compress(a: Vector<T::Upper>, b: Vector<T::Upper>) -> Self
    where
        Self: SimdExtend<Wide = Vector<T::Upper>>,
    {
        <Self as SimdExtend>::simd_compress(a, b)
    }

    /// Narrow two wide vectors into one by bit truncation; mask patterns
    /// survive unchanged.
    #[must_use]
    #[inline]
    pub fn compress_truncate(a: Vector<T::Upper>, b: Vector<T::Upper>) -> Self
    where
        Self: SimdExtend<Wide = Vector<T::Upper>>,
    {
        <Self as SimdExtend>::simd_compress_truncate(a, b)
    }
}

impl<T: Element> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.to_array().as_ref() == other.to_array().as_ref()
    }
}

impl<T: Element> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lanes = self.to_array();
        f.debug_list().entries(lanes.as_ref()).finish()
    }
}

impl<T: Element> Default for Vector<T> {
    fn default() -> Self {
        Self::zero()
    }
}

macro_rules! impl_binary_op {
    {$($op:ident, $fn:ident => $simd_trait:ident, $simd_fn:ident;)*} => {
        $(
            impl<T: Element> $op for Vector<T>
            where
                Self: $simd_trait,
            {
                type Output = Self;

                #[inline]
                fn $fn(self, rhs: Self) -> Self {
                    self.$simd_fn(rhs)
                }
            }
        )*
    };
}

impl_binary_op! {
    Add, add => SimdAdd, simd_add;
    Sub, sub => SimdSub, simd_sub;
    Mul, mul => SimdMul, simd_mul;
    Div, div => SimdDiv, simd_div;
    Rem, rem => SimdRem, simd_rem;
    BitAnd, bitand => SimdAnd, simd_and;
    BitOr, bitor => SimdOr, simd_or;
    BitXor, bitxor => SimdXor, simd_xor;
}

impl<T: Element> Neg for Vector<T>
where
    Self: SimdNeg,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.simd_neg()
    }
}

impl<T: Element> Not for Vector<T>
where
    Self: SimdNot,
{
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        self.simd_not()
    }
}

impl<T: Element> Shl<u32> for Vector<T>
where
    Self: SimdShift,
{
    type Output = Self;

    #[inline]
    fn shl(self, count: u32) -> Self {
        self.simd_shl(count)
    }
}

impl<T: Element> Shr<u32> for Vector<T>
where
    Self: SimdShift,
{
    type Output = Self;

    #[inline]
    fn shr(self, count: u32) -> Self {
        self.simd_shr(count)
    }
}
