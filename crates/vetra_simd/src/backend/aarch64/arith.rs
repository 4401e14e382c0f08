use core::arch::aarch64::*;

use crate::backend::{impl_int_divrem, impl_mul64_scalar};
use crate::ops::*;
use crate::Vector;

macro_rules! impl_add_sub {
    {$($ty:ty, $add:ident, $sub:ident;)*} => {
        $(
            impl SimdAdd for Vector<$ty> {
                fn simd_add(self, rhs: Self) -> Self {
                    unsafe { Vector($add(self.0, rhs.0)) }
                }
            }

            impl SimdSub for Vector<$ty> {
                fn simd_sub(self, rhs: Self) -> Self {
                    unsafe { Vector($sub(self.0, rhs.0)) }
                }
            }
        )*
    };
}

impl_add_sub! {
    i8,  vqaddq_s8,  vqsubq_s8;
    u8,  vqaddq_u8,  vqsubq_u8;
    i16, vqaddq_s16, vqsubq_s16;
    u16, vqaddq_u16, vqsubq_u16;
    i32, vaddq_s32,  vsubq_s32;
    u32, vaddq_u32,  vsubq_u32;
    i64, vaddq_s64,  vsubq_s64;
    u64, vaddq_u64,  vsubq_u64;
    f32, vaddq_f32,  vsubq_f32;
    f64, vaddq_f64,  vsubq_f64;
}

macro_rules! impl_mul {
    {$($ty:ty, $mul:ident;)*} => {
        $(
            impl SimdMul for Vector<$ty> {
                fn simd_mul(self, rhs: Self) -> Self {
                    unsafe { Vector($mul(self.0, rhs.0)) }
                }
            }
        )*
    };
}

impl_mul! {
    i8,  vmulq_s8;
    u8,  vmulq_u8;
    i16, vmulq_s16;
    u16, vmulq_u16;
    i32, vmulq_s32;
    u32, vmulq_u32;
    f32, vmulq_f32;
    f64, vmulq_f64;
}

impl_mul64_scalar! {
    i64, 2;
    u64, 2;
}

impl SimdDiv for Vector<f32> {
    fn simd_div(self, rhs: Self) -> Self {
        unsafe { Vector(vdivq_f32(self.0, rhs.0)) }
    }
}

impl SimdDiv for Vector<f64> {
    fn simd_div(self, rhs: Self) -> Self {
        unsafe { Vector(vdivq_f64(self.0, rhs.0)) }
    }
}

impl_int_divrem! {
    i8,  16;
    u8,  16;
    i16, 8;
    u16, 8;
    i32, 4;
    u32, 4;
    i64, 2;
    u64, 2;
}

macro_rules! impl_rem_fp {
    {$($ty:ty, $lanes:literal;)*} => {
        $(
            impl SimdRem for Vector<$ty> {
                fn simd_rem(self, rhs: Self) -> Self {
                    let a = self.to_array();
                    let b = rhs.to_array();
                    let mut out = [0.0 as $ty; $lanes];
                    for ((o, &x), &y) in out.iter_mut().zip(a.iter()).zip(b.iter()) {
                        *o = x % y;
                    }
                    Vector::from_array(out)
                }
            }
        )*
    };
}

impl_rem_fp! {
    f32, 4;
    f64, 2;
}

macro_rules! impl_neg_abs {
    {$($ty:ty, $neg:ident, $abs:ident;)*} => {
        $(
            impl SimdNeg for Vector<$ty> {
                fn simd_neg(self) -> Self {
                    unsafe { Vector($neg(self.0)) }
                }
            }

            impl SimdAbs for Vector<$ty> {
                fn simd_abs(self) -> Self {
                    unsafe { Vector($abs(self.0)) }
                }
            }
        )*
    };
}

impl_neg_abs! {
    i8,  vnegq_s8,  vabsq_s8;
    i16, vnegq_s16, vabsq_s16;
    i32, vnegq_s32, vabsq_s32;
    i64, vnegq_s64, vabsq_s64;
    f32, vnegq_f32, vabsq_f32;
    f64, vnegq_f64, vabsq_f64;
}

// Unsigned and float lanes have a native absolute difference; the rest go
// through max/min so the saturation policy matches the other backends.
macro_rules! impl_abs_diff_native {
    {$($ty:ty, $abd:ident;)*} => {
        $(
            impl SimdAbsDiff for Vector<$ty> {
                fn simd_abs_diff(self, rhs: Self) -> Self {
                    unsafe { Vector($abd(self.0, rhs.0)) }
                }
            }
        )*
    };
}

impl_abs_diff_native! {
    u8,  vabdq_u8;
    u16, vabdq_u16;
    u32, vabdq_u32;
    f32, vabdq_f32;
    f64, vabdq_f64;
}

macro_rules! impl_abs_diff_minmax {
    {$($ty:ty;)*} => {
        $(
            impl SimdAbsDiff for Vector<$ty> {
                fn simd_abs_diff(self, rhs: Self) -> Self {
                    self.simd_max(rhs).simd_sub(self.simd_min(rhs))
                }
            }
        )*
    };
}

impl_abs_diff_minmax! {
    i8;
    i16;
    i32;
    i64;
    u64;
}

// vrhadd rounds half up, vhsub floors: exactly midpoint / halving_sub.
macro_rules! impl_avg {
    {$($ty:ty, $rhadd:ident, $hsub:ident;)*} => {
        $(
            impl SimdAvg for Vector<$ty> {
                fn simd_midpoint(self, rhs: Self) -> Self {
                    unsafe { Vector($rhadd(self.0, rhs.0)) }
                }

                fn simd_halving_sub(self, rhs: Self) -> Self {
                    unsafe { Vector($hsub(self.0, rhs.0)) }
                }
            }
        )*
    };
}

impl_avg! {
    i8,  vrhaddq_s8,  vhsubq_s8;
    u8,  vrhaddq_u8,  vhsubq_u8;
    i16, vrhaddq_s16, vhsubq_s16;
    u16, vrhaddq_u16, vhsubq_u16;
    i32, vrhaddq_s32, vhsubq_s32;
    u32, vrhaddq_u32, vhsubq_u32;
}

macro_rules! impl_avg_64 {
    {$($ty:ty;)*} => {
        $(
            impl SimdAvg for Vector<$ty> {
                fn simd_midpoint(self, rhs: Self) -> Self {
                    let a = self.to_array();
                    let b = rhs.to_array();
                    Vector::from_array([
                        ((a[0] as i128 + b[0] as i128 + 1) >> 1) as $ty,
                        ((a[1] as i128 + b[1] as i128 + 1) >> 1) as $ty,
                    ])
                }

                fn simd_halving_sub(self, rhs: Self) -> Self {
                    let a = self.to_array();
                    let b = rhs.to_array();
                    Vector::from_array([
                        ((a[0] as i128 - b[0] as i128) >> 1) as $ty,
                        ((a[1] as i128 - b[1] as i128) >> 1) as $ty,
                    ])
                }
            }
        )*
    };
}

impl_avg_64! {
    i64;
    u64;
}

macro_rules! impl_avg_fp {
    {$($ty:ty, $add:ident, $sub:ident, $mul:ident, $dup:ident;)*} => {
        $(
            impl SimdAvg for Vector<$ty> {
                fn simd_midpoint(self, rhs: Self) -> Self {
                    unsafe { Vector($mul($add(self.0, rhs.0), $dup(0.5))) }
                }

                fn simd_halving_sub(self, rhs: Self) -> Self {
                    unsafe { Vector($mul($sub(self.0, rhs.0), $dup(0.5))) }
                }
            }
        )*
    };
}

impl_avg_fp! {
    f32, vaddq_f32, vsubq_f32, vmulq_f32, vdupq_n_f32;
    f64, vaddq_f64, vsubq_f64, vmulq_f64, vdupq_n_f64;
}

// High product half: widening multiply, then narrow with a 16-bit shift.
impl SimdMulHigh for Vector<i16> {
    fn simd_mul_high(self, rhs: Self) -> Self {
        unsafe {
            let lo = vmull_s16(vget_low_s16(self.0), vget_low_s16(rhs.0));
            let hi = vmull_high_s16(self.0, rhs.0);
            Vector(vcombine_s16(vshrn_n_s32::<16>(lo), vshrn_n_s32::<16>(hi)))
        }
    }
}

impl SimdMulHigh for Vector<u16> {
    fn simd_mul_high(self, rhs: Self) -> Self {
        unsafe {
            let lo = vmull_u16(vget_low_u16(self.0), vget_low_u16(rhs.0));
            let hi = vmull_high_u16(self.0, rhs.0);
            Vector(vcombine_u16(vshrn_n_u32::<16>(lo), vshrn_n_u32::<16>(hi)))
        }
    }
}

// Estimate plus one refinement step, the usual NEON recipe.
impl SimdRecip for Vector<f32> {
    fn simd_recip_est(self) -> Self {
        unsafe {
            let e = vrecpeq_f32(self.0);
            Vector(vmulq_f32(vrecpsq_f32(self.0, e), e))
        }
    }

    fn simd_rsqrt_est(self) -> Self {
        unsafe {
            let e = vrsqrteq_f32(self.0);
            Vector(vmulq_f32(vrsqrtsq_f32(vmulq_f32(self.0, e), e), e))
        }
    }
}

impl SimdRecip for Vector<f64> {
    fn simd_recip_est(self) -> Self {
        unsafe { Vector(vdivq_f64(vdupq_n_f64(1.0), self.0)) }
    }

    fn simd_rsqrt_est(self) -> Self {
        unsafe { Vector(vdivq_f64(vdupq_n_f64(1.0), vsqrtq_f64(self.0))) }
    }
}

macro_rules! impl_bitwise_int {
    {$($ty:ty, $and:ident, $or:ident, $xor:ident, $bic:ident;)*} => {
        $(
            impl SimdAnd for Vector<$ty> {
                fn simd_and(self, rhs: Self) -> Self {
                    unsafe { Vector($and(self.0, rhs.0)) }
                }
            }

            impl SimdOr for Vector<$ty> {
                fn simd_or(self, rhs: Self) -> Self {
                    unsafe { Vector($or(self.0, rhs.0)) }
                }
            }

            impl SimdXor for Vector<$ty> {
                fn simd_xor(self, rhs: Self) -> Self {
                    unsafe { Vector($xor(self.0, rhs.0)) }
                }
            }

            impl SimdAndNot for Vector<$ty> {
                fn simd_andnot(self, rhs: Self) -> Self {
                    // bic computes rhs & !self with the operands this way.
                    unsafe { Vector($bic(rhs.0, self.0)) }
                }
            }
        )*
    };
}

impl_bitwise_int! {
    i8,  vandq_s8,  vorrq_s8,  veorq_s8,  vbicq_s8;
    u8,  vandq_u8,  vorrq_u8,  veorq_u8,  vbicq_u8;
    i16, vandq_s16, vorrq_s16, veorq_s16, vbicq_s16;
    u16, vandq_u16, vorrq_u16, veorq_u16, vbicq_u16;
    i32, vandq_s32, vorrq_s32, veorq_s32, vbicq_s32;
    u32, vandq_u32, vorrq_u32, veorq_u32, vbicq_u32;
    i64, vandq_s64, vorrq_s64, veorq_s64, vbicq_s64;
    u64, vandq_u64, vorrq_u64, veorq_u64, vbicq_u64;
}

macro_rules! impl_not_int {
    {$($ty:ty, $not:ident;)*} => {
        $(
            impl SimdNot for Vector<$ty> {
                fn simd_not(self) -> Self {
                    unsafe { Vector($not(self.0)) }
                }
            }
        )*
    };
}

impl_not_int! {
    i8,  vmvnq_s8;
    u8,  vmvnq_u8;
    i16, vmvnq_s16;
    u16, vmvnq_u16;
    i32, vmvnq_s32;
    u32, vmvnq_u32;
}

// No 64-bit mvn; complement through the byte view.
impl SimdNot for Vector<i64> {
    fn simd_not(self) -> Self {
        unsafe {
            Vector(vreinterpretq_s64_s8(vmvnq_s8(vreinterpretq_s8_s64(self.0))))
        }
    }
}

impl SimdNot for Vector<u64> {
    fn simd_not(self) -> Self {
        unsafe {
            Vector(vreinterpretq_u64_u8(vmvnq_u8(vreinterpretq_u8_u64(self.0))))
        }
    }
}

macro_rules! impl_bitwise_fp {
    {$($ty:ty, $bits:ty, $to:ident, $from:ident, $and:ident, $or:ident, $xor:ident, $bic:ident, $not:ident;)*} => {
        $(
            impl SimdNot for Vector<$ty> {
                fn simd_not(self) -> Self {
                    unsafe { Vector($from($not($to(self.0)))) }
                }
            }

            impl SimdAnd for Vector<$ty> {
                fn simd_and(self, rhs: Self) -> Self {
                    unsafe { Vector($from($and($to(self.0), $to(rhs.0)))) }
                }
            }

            impl SimdOr for Vector<$ty> {
                fn simd_or(self, rhs: Self) -> Self {
                    unsafe { Vector($from($or($to(self.0), $to(rhs.0)))) }
                }
            }

            impl SimdXor for Vector<$ty> {
                fn simd_xor(self, rhs: Self) -> Self {
                    unsafe { Vector($from($xor($to(self.0), $to(rhs.0)))) }
                }
            }

            impl SimdAndNot for Vector<$ty> {
                fn simd_andnot(self, rhs: Self) -> Self {
                    unsafe { Vector($from($bic($to(rhs.0), $to(self.0)))) }
                }
            }
        )*
    };
}

impl_bitwise_fp! {
    f32, uint32x4_t, vreinterpretq_u32_f32, vreinterpretq_f32_u32,
        vandq_u32, vorrq_u32, veorq_u32, vbicq_u32, vmvnq_u32;
    f64, uint8x16_t, vreinterpretq_u8_f64, vreinterpretq_f64_u8,
        vandq_u8, vorrq_u8, veorq_u8, vbicq_u8, vmvnq_u8;
}
