//! Portable fixed-width SIMD register abstraction.
//!
//! Numeric code is written once against a logical element type (`i8`..`i64`,
//! `u8`..`u64`, `f32`, `f64`) and compiles, without source change, against
//! whichever vector instruction set the build targets. There is no runtime
//! dispatch: the instruction set is decided once per compilation unit from
//! the target features.
//!
//! - `x86_64`: SSE2 is the baseline; SSE3/SSSE3/SSE4.1/SSE4.2/AVX form a
//!   cumulative ladder of refinements picked up from `target_feature`, and
//!   AVX2 switches the whole build to 256-bit registers.
//! - `aarch64`: NEON (advanced SIMD), 128-bit registers.
//! - Anything else: a scalar fallback with bit-identical semantics.
//!
//! A [`Vector<T>`] wraps exactly one hardware register; its lane count is a
//! compile-time constant derived from [`REGISTER_BYTES`]. Requesting an
//! operation or conversion a target/type combination does not support is a
//! compile-time error, never a runtime one.
#![no_std]

extern crate alloc;

mod backend;
mod element;
mod mem;
mod ops;
mod vector;

pub use element::*;
pub use mem::*;
pub use ops::*;
pub use vector::*;

/// Total byte width of the hardware vector register for this build.
#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
pub const REGISTER_BYTES: usize = 32;
/// Total byte width of the hardware vector register for this build.
#[cfg(not(all(target_arch = "x86_64", target_feature = "avx2")))]
pub const REGISTER_BYTES: usize = 16;

/// A point in an ISA's capability ladder.
///
/// The x86_64 levels are cumulative: a build at a given level has every
/// primitive of the levels below it. NEON is a single level.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Backend {
    Scalar,

    // x86_64
    Sse2,
    Sse3,
    Ssse3,
    Sse41,
    Sse42,
    Avx,
    Avx2,

    // AArch64
    Neon,
}

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
pub const ACTIVE: Backend = Backend::Avx2;
#[cfg(all(target_arch = "x86_64", target_feature = "avx", not(target_feature = "avx2")))]
pub const ACTIVE: Backend = Backend::Avx;
#[cfg(all(target_arch = "x86_64", target_feature = "sse4.2", not(target_feature = "avx")))]
pub const ACTIVE: Backend = Backend::Sse42;
#[cfg(all(target_arch = "x86_64", target_feature = "sse4.1", not(target_feature = "sse4.2")))]
pub const ACTIVE: Backend = Backend::Sse41;
#[cfg(all(target_arch = "x86_64", target_feature = "ssse3", not(target_feature = "sse4.1")))]
pub const ACTIVE: Backend = Backend::Ssse3;
#[cfg(all(target_arch = "x86_64", target_feature = "sse3", not(target_feature = "ssse3")))]
pub const ACTIVE: Backend = Backend::Sse3;
#[cfg(all(target_arch = "x86_64", not(target_feature = "sse3")))]
pub const ACTIVE: Backend = Backend::Sse2;
#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
/// The capability level this build was compiled for.
pub const ACTIVE: Backend = Backend::Neon;
#[cfg(not(any(target_arch = "x86_64", all(target_arch = "aarch64", target_feature = "neon"))))]
pub const ACTIVE: Backend = Backend::Scalar;

/// Check whether a capability level is available to this build.
///
/// No dynamic detection is performed; the answer depends on the features the
/// binary was compiled with, not on the machine it runs on.
pub fn has_level(level: Backend) -> bool {
    #[cfg(target_arch = "x86_64")]
    {
        match level {
            Backend::Scalar => true,
            Backend::Sse2 => cfg!(target_feature = "sse2"),
            Backend::Sse3 => cfg!(target_feature = "sse3"),
            Backend::Ssse3 => cfg!(target_feature = "ssse3"),
            Backend::Sse41 => cfg!(target_feature = "sse4.1"),
            Backend::Sse42 => cfg!(target_feature = "sse4.2"),
            Backend::Avx => cfg!(target_feature = "avx"),
            Backend::Avx2 => cfg!(target_feature = "avx2"),
            Backend::Neon => false,
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        matches!(level, Backend::Scalar | Backend::Neon)
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        level == Backend::Scalar
    }
}
