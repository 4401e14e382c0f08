//! Backend selection and the pieces shared between backends.
//!
//! Exactly one backend module compiles per build; it supplies the register
//! type aliases consumed by the trait table and implements the op traits
//! for every supported element type.

#[cfg(target_arch = "x86_64")]
mod x86_64;
#[cfg(target_arch = "x86_64")]
pub(crate) use x86_64::regs;

#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
mod aarch64;
#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
pub(crate) use aarch64::regs;

#[cfg(not(any(target_arch = "x86_64", all(target_arch = "aarch64", target_feature = "neon"))))]
mod scalar;
#[cfg(not(any(target_arch = "x86_64", all(target_arch = "aarch64", target_feature = "neon"))))]
pub(crate) use scalar::regs;

/// Sequential extract-and-load gather for 8/16-bit lanes, with the
/// two-dimensional form running its index arithmetic in two doubled-width
/// half vectors so the products cannot overflow the narrow index type.
macro_rules! impl_gather_narrow {
    {$($ty:ty, $idx_ty:ty, $wide_idx:ty, $lanes:literal;)*} => {
        $(
            impl SimdGather<$ty> for Vector<$ty> {
                unsafe fn simd_lookup(mem: *const $ty, idx: Vector<$idx_ty>) -> Self {
                    let idx = idx.to_array();
                    let mut out = [<$ty>::default(); $lanes];
                    for (o, i) in out.iter_mut().zip(idx.iter()) {
                        *o = *mem.add(*i as usize);
                    }
                    Vector::from_array(out)
                }

                unsafe fn simd_lookup2(
                    mem: *const $ty,
                    row: Vector<$idx_ty>,
                    col: Vector<$idx_ty>,
                    stride: $idx_ty,
                ) -> Self {
                    let stride = Vector::<$wide_idx>::splat(stride as $wide_idx);
                    let lo = row.extend_lower().simd_mul(stride).simd_add(col.extend_lower());
                    let hi = row.extend_upper().simd_mul(stride).simd_add(col.extend_upper());
                    let lo = lo.to_array();
                    let hi = hi.to_array();
                    let mut out = [<$ty>::default(); $lanes];
                    let half = $lanes / 2;
                    for k in 0..half {
                        out[k] = *mem.add(lo[k] as usize);
                        out[half + k] = *mem.add(hi[k] as usize);
                    }
                    Vector::from_array(out)
                }
            }
        )*
    };
}
pub(crate) use impl_gather_narrow;

/// Sequential extract-and-load gather for 32/64-bit lanes; the index type
/// is wide enough that the two-dimensional form computes in place.
macro_rules! impl_gather_wide {
    {$($ty:ty, $idx_ty:ty, $lanes:literal;)*} => {
        $(
            impl SimdGather<$ty> for Vector<$ty> {
                unsafe fn simd_lookup(mem: *const $ty, idx: Vector<$idx_ty>) -> Self {
                    let idx = idx.to_array();
                    let mut out = [<$ty>::default(); $lanes];
                    for (o, i) in out.iter_mut().zip(idx.iter()) {
                        *o = *mem.add(*i as usize);
                    }
                    Vector::from_array(out)
                }

                unsafe fn simd_lookup2(
                    mem: *const $ty,
                    row: Vector<$idx_ty>,
                    col: Vector<$idx_ty>,
                    stride: $idx_ty,
                ) -> Self {
                    let idx = row.simd_mul(Vector::splat(stride)).simd_add(col);
                    Self::simd_lookup(mem, idx)
                }
            }
        )*
    };
}
pub(crate) use impl_gather_wide;

/// Per-lane integer divide and remainder. No supported ISA has a lane
/// divide; a zero divisor panics like scalar Rust division.
macro_rules! impl_int_divrem {
    {$($ty:ty, $lanes:literal;)*} => {
        $(
            impl SimdDiv for Vector<$ty> {
                fn simd_div(self, rhs: Self) -> Self {
                    let a = self.to_array();
                    let b = rhs.to_array();
                    let mut out = [<$ty>::default(); $lanes];
                    for ((o, a), b) in out.iter_mut().zip(a.iter()).zip(b.iter()) {
                        *o = a / b;
                    }
                    Vector::from_array(out)
                }
            }

            impl SimdRem for Vector<$ty> {
                fn simd_rem(self, rhs: Self) -> Self {
                    let a = self.to_array();
                    let b = rhs.to_array();
                    let mut out = [<$ty>::default(); $lanes];
                    for ((o, a), b) in out.iter_mut().zip(a.iter()).zip(b.iter()) {
                        *o = a % b;
                    }
                    Vector::from_array(out)
                }
            }
        )*
    };
}
pub(crate) use impl_int_divrem;

/// Per-lane 64-bit multiply; neither SSE/AVX2 nor NEON has a 64-bit lane
/// product.
macro_rules! impl_mul64_scalar {
    {$($ty:ty, $lanes:literal;)*} => {
        $(
            impl SimdMul for Vector<$ty> {
                fn simd_mul(self, rhs: Self) -> Self {
                    let a = self.to_array();
                    let b = rhs.to_array();
                    let mut out = [<$ty>::default(); $lanes];
                    for ((o, a), b) in out.iter_mut().zip(a.iter()).zip(b.iter()) {
                        *o = a.wrapping_mul(*b);
                    }
                    Vector::from_array(out)
                }
            }
        )*
    };
}
pub(crate) use impl_mul64_scalar;
