use core::fmt::Debug;

use crate::backend::regs;

mod sealed {
    pub trait Sealed {}
}
use sealed::Sealed;

/// Compile-time table wiring each logical element type to its related types
/// and properties. Carries no runtime state.
///
/// # Safety
/// Implementations assert that `Register` and `Array` are exactly
/// [`crate::REGISTER_BYTES`] bytes and that any bit pattern of that size is a
/// valid value of both; the vector type transmutes between them.
pub unsafe trait Element: Sealed + Copy + PartialEq + PartialOrd + Debug + Default + 'static {
    /// Lane type produced by comparisons over this type: the unsigned
    /// counterpart for integers, the type itself for floats.
    type Mask: Element;
    /// Signed counterpart, used internally by operations that exist only in
    /// signed form.
    type Signed: Element;
    /// Unsigned integer lane of the same width, used as gather indices.
    type Index: Element;
    /// The hardware register backing a full vector of this element type
    /// under the selected backend. Distinct logical types may share one.
    type Register: Copy;
    /// Per-lane array covering a full register.
    type Array: Copy + AsRef<[Self]> + AsMut<[Self]>;

    /// Bytes per lane.
    const LANE_BYTES: usize;
    /// Lanes per register.
    const LANES: usize;
}

macro_rules! impl_element {
    {$($ty:ty => $mask:ty, $signed:ty, $idx:ty, $reg:ty, $bytes:literal;)*} => {
        $(
            impl Sealed for $ty {}

            unsafe impl Element for $ty {
                type Mask = $mask;
                type Signed = $signed;
                type Index = $idx;
                type Register = $reg;
                type Array = [$ty; crate::REGISTER_BYTES / $bytes];

                const LANE_BYTES: usize = $bytes;
                const LANES: usize = crate::REGISTER_BYTES / $bytes;
            }
        )*
    };
}

impl_element! {
    i8  => u8,  i8,  u8,  regs::RegI8,  1;
    u8  => u8,  i8,  u8,  regs::RegU8,  1;
    i16 => u16, i16, u16, regs::RegI16, 2;
    u16 => u16, i16, u16, regs::RegU16, 2;
    i32 => u32, i32, u32, regs::RegI32, 4;
    u32 => u32, i32, u32, regs::RegU32, 4;
    i64 => u64, i64, u64, regs::RegI64, 8;
    u64 => u64, i64, u64, regs::RegU64, 8;
    f32 => f32, f32, u32, regs::RegF32, 4;
    f64 => f64, f64, u64, regs::RegF64, 8;
}

/// Element types with a doubled-width counterpart (holding register width
/// fixed, so half as many lanes). Undefined for 64-bit types.
///
/// The `Narrow<Lower = Self>` bound makes widening followed by narrowing the
/// identity by construction.
pub trait Widen: Element {
    type Upper: Narrow<Lower = Self>;
}

/// Element types with a halved-width counterpart. Undefined for 8-bit
/// integers and `f32` (there is no narrower float).
pub trait Narrow: Element {
    type Lower: Widen<Upper = Self>;
}

macro_rules! impl_widen_narrow {
    {$($lo:ty => $hi:ty;)*} => {
        $(
            impl Widen for $lo {
                type Upper = $hi;
            }

            impl Narrow for $hi {
                type Lower = $lo;
            }
        )*
    };
}

impl_widen_narrow! {
    i8  => i16;
    u8  => u16;
    i16 => i32;
    u16 => u32;
    i32 => i64;
    u32 => u64;
    f32 => f64;
}

/// Element types with an equal-width counterpart of opposite
/// integer/float-ness, used for bit-reinterpretation tricks (treating a
/// `u32` lane as an `f32` lane to reuse a float-only primitive). Undefined
/// for 8- and 16-bit types.
pub trait Complement: Element {
    type Complement: Element;
}

macro_rules! impl_complement {
    {$($ty:ty => $comp:ty;)*} => {
        $(
            impl Complement for $ty {
                type Complement = $comp;
            }
        )*
    };
}

impl_complement! {
    i32 => f32;
    u32 => f32;
    f32 => i32;
    i64 => f64;
    u64 => f64;
    f64 => i64;
}
