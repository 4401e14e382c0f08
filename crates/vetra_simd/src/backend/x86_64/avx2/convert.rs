use core::arch::x86_64::*;

use super::fix_pack_order;
use crate::ops::*;
use crate::Vector;

macro_rules! impl_convert_bits {
    {$($src:ty => $dst:ty;)*} => {
        $(
            impl SimdConvert<Vector<$dst>> for Vector<$src> {
                fn simd_convert(self) -> Vector<$dst> {
                    Vector(self.0)
                }
            }
        )*
    };
}

impl_convert_bits! {
    i8  => i8;
    u8  => u8;
    i8  => u8;
    u8  => i8;
    i16 => i16;
    u16 => u16;
    i16 => u16;
    u16 => i16;
    i32 => i32;
    u32 => u32;
    i32 => u32;
    u32 => i32;
    i64 => i64;
    u64 => u64;
    i64 => u64;
    u64 => i64;
    f32 => f32;
    f64 => f64;
}

impl SimdConvert<Vector<f32>> for Vector<i32> {
    fn simd_convert(self) -> Vector<f32> {
        unsafe { Vector(_mm256_cvtepi32_ps(self.0)) }
    }
}

impl SimdConvert<Vector<i32>> for Vector<f32> {
    fn simd_convert(self) -> Vector<i32> {
        unsafe { Vector(_mm256_cvttps_epi32(self.0)) }
    }
}

macro_rules! impl_convert_scalar {
    {$($src:ty => $dst:ty, $lanes:literal;)*} => {
        $(
            impl SimdConvert<Vector<$dst>> for Vector<$src> {
                fn simd_convert(self) -> Vector<$dst> {
                    let a = self.to_array();
                    let mut out = [<$dst>::default(); $lanes];
                    for (o, &x) in out.iter_mut().zip(a.iter()) {
                        *o = x as $dst;
                    }
                    Vector::from_array(out)
                }
            }
        )*
    };
}

impl_convert_scalar! {
    u32 => f32, 8;
    f32 => u32, 8;
    i64 => f64, 4;
    u64 => f64, 4;
    f64 => i64, 4;
    f64 => u64, 4;
}

/// Low dwords of each quadword of `a` then `b`, packed contiguously.
#[inline]
fn trunc_epi64_epi32(a: __m256i, b: __m256i) -> __m256i {
    unsafe {
        let ta = _mm256_shuffle_epi32::<0b10_00_10_00>(a);
        let tb = _mm256_shuffle_epi32::<0b10_00_10_00>(b);
        let pa = _mm256_permute4x64_epi64::<0b00_00_10_00>(ta);
        let pb = _mm256_permute4x64_epi64::<0b00_00_10_00>(tb);
        _mm256_permute2x128_si256::<0x20>(pa, pb)
    }
}

// The 128-bit extension instructions take the register's halves; pack
// results come out per half and go through the lane-reassembly permute.
macro_rules! impl_extend_8_16 {
    {$($ty:ty, $wide:ty, $cvt:ident;)*} => {
        $(
            impl SimdExtend for Vector<$ty> {
                type Wide = Vector<$wide>;

                fn simd_extend_lower(self) -> Self::Wide {
                    unsafe { Vector($cvt(_mm256_castsi256_si128(self.0))) }
                }

                fn simd_extend_upper(self) -> Self::Wide {
                    unsafe { Vector($cvt(_mm256_extracti128_si256::<1>(self.0))) }
                }

                fn simd_compress(a: Self::Wide, b: Self::Wide) -> Self {
                    <Self as SimdExtendPack>::pack_saturate(a, b)
                }

                fn simd_compress_truncate(a: Self::Wide, b: Self::Wide) -> Self {
                    <Self as SimdExtendPack>::pack_truncate(a, b)
                }
            }
        )*
    };
}

// Split the pack flavor out so the extend macro stays shared.
trait SimdExtendPack: SimdExtend {
    fn pack_saturate(a: Self::Wide, b: Self::Wide) -> Self;
    fn pack_truncate(a: Self::Wide, b: Self::Wide) -> Self;
}

impl_extend_8_16! {
    i8,  i16, _mm256_cvtepi8_epi16;
    u8,  u16, _mm256_cvtepu8_epi16;
    i16, i32, _mm256_cvtepi16_epi32;
    u16, u32, _mm256_cvtepu16_epi32;
}

impl SimdExtendPack for Vector<i8> {
    fn pack_saturate(a: Vector<i16>, b: Vector<i16>) -> Self {
        unsafe { Vector(fix_pack_order(_mm256_packs_epi16(a.0, b.0))) }
    }

    fn pack_truncate(a: Vector<i16>, b: Vector<i16>) -> Self {
        unsafe {
            let low = _mm256_set1_epi16(0x00FF);
            Vector(fix_pack_order(_mm256_packus_epi16(
                _mm256_and_si256(a.0, low),
                _mm256_and_si256(b.0, low),
            )))
        }
    }
}

impl SimdExtendPack for Vector<u8> {
    fn pack_saturate(a: Vector<u16>, b: Vector<u16>) -> Self {
        let cap = Vector::<u16>::splat(0x00FF);
        unsafe {
            Vector(fix_pack_order(_mm256_packus_epi16(
                a.simd_min(cap).0,
                b.simd_min(cap).0,
            )))
        }
    }

    fn pack_truncate(a: Vector<u16>, b: Vector<u16>) -> Self {
        unsafe {
            let low = _mm256_set1_epi16(0x00FF);
            Vector(fix_pack_order(_mm256_packus_epi16(
                _mm256_and_si256(a.0, low),
                _mm256_and_si256(b.0, low),
            )))
        }
    }
}

impl SimdExtendPack for Vector<i16> {
    fn pack_saturate(a: Vector<i32>, b: Vector<i32>) -> Self {
        unsafe { Vector(fix_pack_order(_mm256_packs_epi32(a.0, b.0))) }
    }

    fn pack_truncate(a: Vector<i32>, b: Vector<i32>) -> Self {
        unsafe {
            let low = _mm256_set1_epi32(0xFFFF);
            Vector(fix_pack_order(_mm256_packus_epi32(
                _mm256_and_si256(a.0, low),
                _mm256_and_si256(b.0, low),
            )))
        }
    }
}

impl SimdExtendPack for Vector<u16> {
    fn pack_saturate(a: Vector<u32>, b: Vector<u32>) -> Self {
        let cap = Vector::<u32>::splat(0xFFFF);
        unsafe {
            Vector(fix_pack_order(_mm256_packus_epi32(
                a.simd_min(cap).0,
                b.simd_min(cap).0,
            )))
        }
    }

    fn pack_truncate(a: Vector<u32>, b: Vector<u32>) -> Self {
        unsafe {
            let low = _mm256_set1_epi32(0xFFFF);
            Vector(fix_pack_order(_mm256_packus_epi32(
                _mm256_and_si256(a.0, low),
                _mm256_and_si256(b.0, low),
            )))
        }
    }
}

impl SimdExtend for Vector<i32> {
    type Wide = Vector<i64>;

    fn simd_extend_lower(self) -> Self::Wide {
        unsafe { Vector(_mm256_cvtepi32_epi64(_mm256_castsi256_si128(self.0))) }
    }

    fn simd_extend_upper(self) -> Self::Wide {
        unsafe { Vector(_mm256_cvtepi32_epi64(_mm256_extracti128_si256::<1>(self.0))) }
    }

    fn simd_compress(a: Self::Wide, b: Self::Wide) -> Self {
        let a = a.to_array();
        let b = b.to_array();
        let mut out = [0i32; 8];
        for (o, &x) in out.iter_mut().zip(a.iter().chain(b.iter())) {
            *o = x.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
        }
        Vector::from_array(out)
    }

    fn simd_compress_truncate(a: Self::Wide, b: Self::Wide) -> Self {
        Vector(trunc_epi64_epi32(a.0, b.0))
    }
}

impl SimdExtend for Vector<u32> {
    type Wide = Vector<u64>;

    fn simd_extend_lower(self) -> Self::Wide {
        unsafe { Vector(_mm256_cvtepu32_epi64(_mm256_castsi256_si128(self.0))) }
    }

    fn simd_extend_upper(self) -> Self::Wide {
        unsafe { Vector(_mm256_cvtepu32_epi64(_mm256_extracti128_si256::<1>(self.0))) }
    }

    fn simd_compress(a: Self::Wide, b: Self::Wide) -> Self {
        let a = a.to_array();
        let b = b.to_array();
        let mut out = [0u32; 8];
        for (o, &x) in out.iter_mut().zip(a.iter().chain(b.iter())) {
            *o = if x > u32::MAX as u64 { u32::MAX } else { x as u32 };
        }
        Vector::from_array(out)
    }

    fn simd_compress_truncate(a: Self::Wide, b: Self::Wide) -> Self {
        Vector(trunc_epi64_epi32(a.0, b.0))
    }
}

impl SimdExtend for Vector<f32> {
    type Wide = Vector<f64>;

    fn simd_extend_lower(self) -> Self::Wide {
        unsafe { Vector(_mm256_cvtps_pd(_mm256_castps256_ps128(self.0))) }
    }

    fn simd_extend_upper(self) -> Self::Wide {
        unsafe { Vector(_mm256_cvtps_pd(_mm256_extractf128_ps::<1>(self.0))) }
    }

    fn simd_compress(a: Self::Wide, b: Self::Wide) -> Self {
        unsafe {
            Vector(_mm256_set_m128(
                _mm256_cvtpd_ps(b.0),
                _mm256_cvtpd_ps(a.0),
            ))
        }
    }

    // Floats have no bit-truncating narrow; both paths value-convert.
    fn simd_compress_truncate(a: Self::Wide, b: Self::Wide) -> Self {
        Self::simd_compress(a, b)
    }
}
