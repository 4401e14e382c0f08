use core::arch::aarch64::*;

use crate::ops::*;
use crate::Vector;

macro_rules! impl_convert_identity {
    {$($ty:ty;)*} => {
        $(
            impl SimdConvert<Vector<$ty>> for Vector<$ty> {
                fn simd_convert(self) -> Vector<$ty> {
                    self
                }
            }
        )*
    };
}

impl_convert_identity! {
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

// Same-width signed <-> unsigned is a register reinterpret.
macro_rules! impl_convert_reinterpret {
    {$($src:ty => $dst:ty, $cvt:ident;)*} => {
        $(
            impl SimdConvert<Vector<$dst>> for Vector<$src> {
                fn simd_convert(self) -> Vector<$dst> {
                    unsafe { Vector($cvt(self.0)) }
                }
            }
        )*
    };
}

impl_convert_reinterpret! {
    i8  => u8,  vreinterpretq_u8_s8;
    u8  => i8,  vreinterpretq_s8_u8;
    i16 => u16, vreinterpretq_u16_s16;
    u16 => i16, vreinterpretq_s16_u16;
    i32 => u32, vreinterpretq_u32_s32;
    u32 => i32, vreinterpretq_s32_u32;
    i64 => u64, vreinterpretq_u64_s64;
    u64 => i64, vreinterpretq_s64_u64;
}

// Every int <-> float conversion of equal width is a single instruction on
// AArch64, the unsigned and 64-bit ones included.
macro_rules! impl_convert_value {
    {$($src:ty => $dst:ty, $cvt:ident;)*} => {
        $(
            impl SimdConvert<Vector<$dst>> for Vector<$src> {
                fn simd_convert(self) -> Vector<$dst> {
                    unsafe { Vector($cvt(self.0)) }
                }
            }
        )*
    };
}

impl_convert_value! {
    i32 => f32, vcvtq_f32_s32;
    u32 => f32, vcvtq_f32_u32;
    f32 => i32, vcvtq_s32_f32;
    f32 => u32, vcvtq_u32_f32;
    i64 => f64, vcvtq_f64_s64;
    u64 => f64, vcvtq_f64_u64;
    f64 => i64, vcvtq_s64_f64;
    f64 => u64, vcvtq_u64_f64;
}

// Widen with vmovl, narrow with the (saturating or plain) vmovn family.
macro_rules! impl_extend_int {
    {$($ty:ty, $wide:ty, $movl:ident, $movl_high:ident, $get_low:ident,
       $qmovn:ident, $movn:ident, $combine:ident;)*} => {
        $(
            impl SimdExtend for Vector<$ty> {
                type Wide = Vector<$wide>;

                fn simd_extend_lower(self) -> Self::Wide {
                    unsafe { Vector($movl($get_low(self.0))) }
                }

                fn simd_extend_upper(self) -> Self::Wide {
                    unsafe { Vector($movl_high(self.0)) }
                }

                fn simd_compress(a: Self::Wide, b: Self::Wide) -> Self {
                    unsafe { Vector($combine($qmovn(a.0), $qmovn(b.0))) }
                }

                fn simd_compress_truncate(a: Self::Wide, b: Self::Wide) -> Self {
                    unsafe { Vector($combine($movn(a.0), $movn(b.0))) }
                }
            }
        )*
    };
}

impl_extend_int! {
    i8,  i16, vmovl_s8,  vmovl_high_s8,  vget_low_s8,
        vqmovn_s16, vmovn_s16, vcombine_s8;
    u8,  u16, vmovl_u8,  vmovl_high_u8,  vget_low_u8,
        vqmovn_u16, vmovn_u16, vcombine_u8;
    i16, i32, vmovl_s16, vmovl_high_s16, vget_low_s16,
        vqmovn_s32, vmovn_s32, vcombine_s16;
    u16, u32, vmovl_u16, vmovl_high_u16, vget_low_u16,
        vqmovn_u32, vmovn_u32, vcombine_u16;
    i32, i64, vmovl_s32, vmovl_high_s32, vget_low_s32,
        vqmovn_s64, vmovn_s64, vcombine_s32;
    u32, u64, vmovl_u32, vmovl_high_u32, vget_low_u32,
        vqmovn_u64, vmovn_u64, vcombine_u32;
}

impl SimdExtend for Vector<f32> {
    type Wide = Vector<f64>;

    fn simd_extend_lower(self) -> Self::Wide {
        unsafe { Vector(vcvt_f64_f32(vget_low_f32(self.0))) }
    }

    fn simd_extend_upper(self) -> Self::Wide {
        unsafe { Vector(vcvt_high_f64_f32(self.0)) }
    }

    fn simd_compress(a: Self::Wide, b: Self::Wide) -> Self {
        unsafe { Vector(vcombine_f32(vcvt_f32_f64(a.0), vcvt_f32_f64(b.0))) }
    }

    // Floats have no bit-truncating narrow; both paths value-convert.
    fn simd_compress_truncate(a: Self::Wide, b: Self::Wide) -> Self {
        Self::simd_compress(a, b)
    }
}
