//! x86_64 backends. SSE2 is the architectural baseline; the SSE module
//! picks up SSE3/SSSE3/SSE4.1/SSE4.2 primitives from the target features.
//! AVX2 switches the whole build to 256-bit registers so the type lattice
//! keeps one width across every element type.

#[cfg(not(target_feature = "avx2"))]
mod sse;

#[cfg(target_feature = "avx2")]
mod avx2;

#[cfg(not(target_feature = "avx2"))]
pub(crate) mod regs {
    use core::arch::x86_64::*;

    pub type RegI8 = __m128i;
    pub type RegU8 = __m128i;
    pub type RegI16 = __m128i;
    pub type RegU16 = __m128i;
    pub type RegI32 = __m128i;
    pub type RegU32 = __m128i;
    pub type RegI64 = __m128i;
    pub type RegU64 = __m128i;
    pub type RegF32 = __m128;
    pub type RegF64 = __m128d;
}

#[cfg(target_feature = "avx2")]
pub(crate) mod regs {
    use core::arch::x86_64::*;

    pub type RegI8 = __m256i;
    pub type RegU8 = __m256i;
    pub type RegI16 = __m256i;
    pub type RegU16 = __m256i;
    pub type RegI32 = __m256i;
    pub type RegU32 = __m256i;
    pub type RegI64 = __m256i;
    pub type RegU64 = __m256i;
    pub type RegF32 = __m256;
    pub type RegF64 = __m256d;
}
