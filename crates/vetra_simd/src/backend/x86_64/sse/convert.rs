use core::arch::x86_64::*;

use crate::ops::*;
use crate::Vector;

// Same-width integer conversions are register passthroughs; two's
// complement already is the `as` conversion.
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
        unsafe { Vector(_mm_cvtepi32_ps(self.0)) }
    }
}

impl SimdConvert<Vector<i32>> for Vector<f32> {
    fn simd_convert(self) -> Vector<i32> {
        unsafe { Vector(_mm_cvttps_epi32(self.0)) }
    }
}

// The unsigned and 64-bit conversions have no instruction below AVX512;
// per-lane casts.
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
    u32 => f32, 4;
    f32 => u32, 4;
    i64 => f64, 2;
    u64 => f64, 2;
    f64 => i64, 2;
    f64 => u64, 2;
}

/// Truncating 32→16 pack: SSE4.1 has the unsigned pack, SSE2 detours
/// through the signed one with a bias.
#[inline]
fn pack_trunc_epi32(a: __m128i, b: __m128i) -> __m128i {
    unsafe {
        let low = _mm_set1_epi32(0xFFFF);
        let a = _mm_and_si128(a, low);
        let b = _mm_and_si128(b, low);
        if cfg!(target_feature = "sse4.1") {
            _mm_packus_epi32(a, b)
        } else {
            let bias = _mm_set1_epi32(0x8000);
            _mm_xor_si128(
                _mm_packs_epi32(_mm_sub_epi32(a, bias), _mm_sub_epi32(b, bias)),
                _mm_set1_epi16(0x8000u16 as i16),
            )
        }
    }
}

impl SimdExtend for Vector<i8> {
    type Wide = Vector<i16>;

    fn simd_extend_lower(self) -> Self::Wide {
        if cfg!(target_feature = "sse4.1") {
            unsafe { Vector(_mm_cvtepi8_epi16(self.0)) }
        } else {
            unsafe { Vector(_mm_srai_epi16::<8>(_mm_unpacklo_epi8(self.0, self.0))) }
        }
    }

    fn simd_extend_upper(self) -> Self::Wide {
        unsafe { Vector(_mm_srai_epi16::<8>(_mm_unpackhi_epi8(self.0, self.0))) }
    }

    fn simd_compress(a: Self::Wide, b: Self::Wide) -> Self {
        unsafe { Vector(_mm_packs_epi16(a.0, b.0)) }
    }

    fn simd_compress_truncate(a: Self::Wide, b: Self::Wide) -> Self {
        unsafe {
            let low = _mm_set1_epi16(0x00FF);
            Vector(_mm_packus_epi16(
                _mm_and_si128(a.0, low),
                _mm_and_si128(b.0, low),
            ))
        }
    }
}

impl SimdExtend for Vector<u8> {
    type Wide = Vector<u16>;

    fn simd_extend_lower(self) -> Self::Wide {
        if cfg!(target_feature = "sse4.1") {
            unsafe { Vector(_mm_cvtepu8_epi16(self.0)) }
        } else {
            unsafe { Vector(_mm_unpacklo_epi8(self.0, _mm_setzero_si128())) }
        }
    }

    fn simd_extend_upper(self) -> Self::Wide {
        unsafe { Vector(_mm_unpackhi_epi8(self.0, _mm_setzero_si128())) }
    }

    fn simd_compress(a: Self::Wide, b: Self::Wide) -> Self {
        let cap = Vector::<u16>::splat(0x00FF);
        unsafe { Vector(_mm_packus_epi16(a.simd_min(cap).0, b.simd_min(cap).0)) }
    }

    fn simd_compress_truncate(a: Self::Wide, b: Self::Wide) -> Self {
        unsafe {
            let low = _mm_set1_epi16(0x00FF);
            Vector(_mm_packus_epi16(
                _mm_and_si128(a.0, low),
                _mm_and_si128(b.0, low),
            ))
        }
    }
}

impl SimdExtend for Vector<i16> {
    type Wide = Vector<i32>;

    fn simd_extend_lower(self) -> Self::Wide {
        if cfg!(target_feature = "sse4.1") {
            unsafe { Vector(_mm_cvtepi16_epi32(self.0)) }
        } else {
            unsafe { Vector(_mm_srai_epi32::<16>(_mm_unpacklo_epi16(self.0, self.0))) }
        }
    }

    fn simd_extend_upper(self) -> Self::Wide {
        unsafe { Vector(_mm_srai_epi32::<16>(_mm_unpackhi_epi16(self.0, self.0))) }
    }

    fn simd_compress(a: Self::Wide, b: Self::Wide) -> Self {
        unsafe { Vector(_mm_packs_epi32(a.0, b.0)) }
    }

    fn simd_compress_truncate(a: Self::Wide, b: Self::Wide) -> Self {
        Vector(pack_trunc_epi32(a.0, b.0))
    }
}

impl SimdExtend for Vector<u16> {
    type Wide = Vector<u32>;

    fn simd_extend_lower(self) -> Self::Wide {
        if cfg!(target_feature = "sse4.1") {
            unsafe { Vector(_mm_cvtepu16_epi32(self.0)) }
        } else {
            unsafe { Vector(_mm_unpacklo_epi16(self.0, _mm_setzero_si128())) }
        }
    }

    fn simd_extend_upper(self) -> Self::Wide {
        unsafe { Vector(_mm_unpackhi_epi16(self.0, _mm_setzero_si128())) }
    }

    fn simd_compress(a: Self::Wide, b: Self::Wide) -> Self {
        let cap = Vector::<u32>::splat(0xFFFF);
        Vector(pack_trunc_epi32(a.simd_min(cap).0, b.simd_min(cap).0))
    }

    fn simd_compress_truncate(a: Self::Wide, b: Self::Wide) -> Self {
        Vector(pack_trunc_epi32(a.0, b.0))
    }
}

impl SimdExtend for Vector<i32> {
    type Wide = Vector<i64>;

    fn simd_extend_lower(self) -> Self::Wide {
        if cfg!(target_feature = "sse4.1") {
            unsafe { Vector(_mm_cvtepi32_epi64(self.0)) }
        } else {
            unsafe {
                Vector(_mm_unpacklo_epi32(self.0, _mm_srai_epi32::<31>(self.0)))
            }
        }
    }

    fn simd_extend_upper(self) -> Self::Wide {
        unsafe {
            Vector(_mm_unpackhi_epi32(self.0, _mm_srai_epi32::<31>(self.0)))
        }
    }

    fn simd_compress(a: Self::Wide, b: Self::Wide) -> Self {
        let a = a.to_array();
        let b = b.to_array();
        let mut out = [0i32; 4];
        for (o, &x) in out.iter_mut().zip(a.iter().chain(b.iter())) {
            *o = x.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
        }
        Vector::from_array(out)
    }

    fn simd_compress_truncate(a: Self::Wide, b: Self::Wide) -> Self {
        unsafe {
            Vector(_mm_unpacklo_epi64(
                _mm_shuffle_epi32::<0b10_00_10_00>(a.0),
                _mm_shuffle_epi32::<0b10_00_10_00>(b.0),
            ))
        }
    }
}

impl SimdExtend for Vector<u32> {
    type Wide = Vector<u64>;

    fn simd_extend_lower(self) -> Self::Wide {
        if cfg!(target_feature = "sse4.1") {
            unsafe { Vector(_mm_cvtepu32_epi64(self.0)) }
        } else {
            unsafe { Vector(_mm_unpacklo_epi32(self.0, _mm_setzero_si128())) }
        }
    }

    fn simd_extend_upper(self) -> Self::Wide {
        unsafe { Vector(_mm_unpackhi_epi32(self.0, _mm_setzero_si128())) }
    }

    fn simd_compress(a: Self::Wide, b: Self::Wide) -> Self {
        let a = a.to_array();
        let b = b.to_array();
        let mut out = [0u32; 4];
        for (o, &x) in out.iter_mut().zip(a.iter().chain(b.iter())) {
            *o = if x > u32::MAX as u64 { u32::MAX } else { x as u32 };
        }
        Vector::from_array(out)
    }

    fn simd_compress_truncate(a: Self::Wide, b: Self::Wide) -> Self {
        unsafe {
            Vector(_mm_unpacklo_epi64(
                _mm_shuffle_epi32::<0b10_00_10_00>(a.0),
                _mm_shuffle_epi32::<0b10_00_10_00>(b.0),
            ))
        }
    }
}

impl SimdExtend for Vector<f32> {
    type Wide = Vector<f64>;

    fn simd_extend_lower(self) -> Self::Wide {
        unsafe { Vector(_mm_cvtps_pd(self.0)) }
    }

    fn simd_extend_upper(self) -> Self::Wide {
        unsafe { Vector(_mm_cvtps_pd(_mm_movehl_ps(self.0, self.0))) }
    }

    fn simd_compress(a: Self::Wide, b: Self::Wide) -> Self {
        unsafe {
            Vector(_mm_movelh_ps(_mm_cvtpd_ps(a.0), _mm_cvtpd_ps(b.0)))
        }
    }

    // Floats have no bit-truncating narrow; both paths value-convert.
    fn simd_compress_truncate(a: Self::Wide, b: Self::Wide) -> Self {
        Self::simd_compress(a, b)
    }
}
