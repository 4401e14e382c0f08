use super::per_lane;
use crate::backend::impl_int_divrem;
use crate::ops::*;
use crate::Vector;

// 8/16-bit integer add/sub saturate, matching the native instructions of
// the hardware backends.
macro_rules! impl_arith_int_sat {
    {$($ty:ty, $lanes:literal, $wide:ty;)*} => {
        $(
            impl SimdAdd for Vector<$ty> {
                fn simd_add(self, rhs: Self) -> Self {
                    per_lane!($ty, $lanes, self, rhs, |a, b| a.saturating_add(b))
                }
            }

            impl SimdSub for Vector<$ty> {
                fn simd_sub(self, rhs: Self) -> Self {
                    per_lane!($ty, $lanes, self, rhs, |a, b| a.saturating_sub(b))
                }
            }

            impl SimdAbsDiff for Vector<$ty> {
                fn simd_abs_diff(self, rhs: Self) -> Self {
                    per_lane!($ty, $lanes, self, rhs, |a, b| {
                        let d = (a as $wide - b as $wide).unsigned_abs() as $wide;
                        if d > <$ty>::MAX as $wide { <$ty>::MAX } else { d as $ty }
                    })
                }
            }
        )*
    };
}

impl_arith_int_sat! {
    i8,  16, i32;
    u8,  16, i32;
    i16, 8,  i32;
    u16, 8,  i32;
}

macro_rules! impl_arith_int_wrap {
    {$($ty:ty, $lanes:literal, $wide:ty;)*} => {
        $(
            impl SimdAdd for Vector<$ty> {
                fn simd_add(self, rhs: Self) -> Self {
                    per_lane!($ty, $lanes, self, rhs, |a, b| a.wrapping_add(b))
                }
            }

            impl SimdSub for Vector<$ty> {
                fn simd_sub(self, rhs: Self) -> Self {
                    per_lane!($ty, $lanes, self, rhs, |a, b| a.wrapping_sub(b))
                }
            }

            impl SimdAbsDiff for Vector<$ty> {
                fn simd_abs_diff(self, rhs: Self) -> Self {
                    per_lane!($ty, $lanes, self, rhs, |a, b| {
                        if a > b { a.wrapping_sub(b) } else { b.wrapping_sub(a) }
                    })
                }
            }
        )*
    };
}

impl_arith_int_wrap! {
    i32, 4, i64;
    u32, 4, i64;
    i64, 2, i128;
    u64, 2, i128;
}

// Lane products truncate to the lane width on every backend.
macro_rules! impl_mul_int {
    {$($ty:ty, $lanes:literal;)*} => {
        $(
            impl SimdMul for Vector<$ty> {
                fn simd_mul(self, rhs: Self) -> Self {
                    per_lane!($ty, $lanes, self, rhs, |a, b| a.wrapping_mul(b))
                }
            }
        )*
    };
}

impl_mul_int! {
    i8,  16;
    u8,  16;
    i16, 8;
    u16, 8;
    i32, 4;
    u32, 4;
    i64, 2;
    u64, 2;
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

// midpoint = (a + b + 1) >> 1, halving_sub = floor((a - b) / 2), both
// evaluated wide enough that no operand pair overflows.
macro_rules! impl_avg_int {
    {$($ty:ty, $lanes:literal, $wide:ty;)*} => {
        $(
            impl SimdAvg for Vector<$ty> {
                fn simd_midpoint(self, rhs: Self) -> Self {
                    per_lane!($ty, $lanes, self, rhs, |a, b| {
                        ((a as $wide + b as $wide + 1) >> 1) as $ty
                    })
                }

                fn simd_halving_sub(self, rhs: Self) -> Self {
                    per_lane!($ty, $lanes, self, rhs, |a, b| {
                        ((a as $wide - b as $wide) >> 1) as $ty
                    })
                }
            }
        )*
    };
}

impl_avg_int! {
    i8,  16, i32;
    u8,  16, i32;
    i16, 8,  i32;
    u16, 8,  i32;
    i32, 4,  i64;
    u32, 4,  i64;
    i64, 2,  i128;
    u64, 2,  i128;
}

macro_rules! impl_signed_int {
    {$($ty:ty, $lanes:literal;)*} => {
        $(
            impl SimdNeg for Vector<$ty> {
                fn simd_neg(self) -> Self {
                    per_lane!($ty, $lanes, self, |a| a.wrapping_neg())
                }
            }

            impl SimdAbs for Vector<$ty> {
                fn simd_abs(self) -> Self {
                    per_lane!($ty, $lanes, self, |a| a.wrapping_abs())
                }
            }
        )*
    };
}

impl_signed_int! {
    i8,  16;
    i16, 8;
    i32, 4;
    i64, 2;
}

macro_rules! impl_mul_high {
    {$($ty:ty, $lanes:literal, $wide:ty;)*} => {
        $(
            impl SimdMulHigh for Vector<$ty> {
                fn simd_mul_high(self, rhs: Self) -> Self {
                    per_lane!($ty, $lanes, self, rhs, |a, b| {
                        ((a as $wide * b as $wide) >> 16) as $ty
                    })
                }
            }
        )*
    };
}

impl_mul_high! {
    i16, 8, i32;
    u16, 8, u32;
}

// Bitwise ops are uniform over every lane type; floats route through bits.
macro_rules! impl_bitwise_int {
    {$($ty:ty, $lanes:literal;)*} => {
        $(
            impl SimdNot for Vector<$ty> {
                fn simd_not(self) -> Self {
                    per_lane!($ty, $lanes, self, |a| !a)
                }
            }

            impl SimdAnd for Vector<$ty> {
                fn simd_and(self, rhs: Self) -> Self {
                    per_lane!($ty, $lanes, self, rhs, |a, b| a & b)
                }
            }

            impl SimdOr for Vector<$ty> {
                fn simd_or(self, rhs: Self) -> Self {
                    per_lane!($ty, $lanes, self, rhs, |a, b| a | b)
                }
            }

            impl SimdXor for Vector<$ty> {
                fn simd_xor(self, rhs: Self) -> Self {
                    per_lane!($ty, $lanes, self, rhs, |a, b| a ^ b)
                }
            }

            impl SimdAndNot for Vector<$ty> {
                fn simd_andnot(self, rhs: Self) -> Self {
                    per_lane!($ty, $lanes, self, rhs, |a, b| !a & b)
                }
            }
        )*
    };
}

impl_bitwise_int! {
    i8,  16;
    u8,  16;
    i16, 8;
    u16, 8;
    i32, 4;
    u32, 4;
    i64, 2;
    u64, 2;
}

macro_rules! impl_float {
    {$($ty:ty, $lanes:literal, $bits:ty, $sign_mask:expr;)*} => {
        $(
            impl SimdAdd for Vector<$ty> {
                fn simd_add(self, rhs: Self) -> Self {
                    per_lane!($ty, $lanes, self, rhs, |a, b| a + b)
                }
            }

            impl SimdSub for Vector<$ty> {
                fn simd_sub(self, rhs: Self) -> Self {
                    per_lane!($ty, $lanes, self, rhs, |a, b| a - b)
                }
            }

            impl SimdMul for Vector<$ty> {
                fn simd_mul(self, rhs: Self) -> Self {
                    per_lane!($ty, $lanes, self, rhs, |a, b| a * b)
                }
            }

            impl SimdDiv for Vector<$ty> {
                fn simd_div(self, rhs: Self) -> Self {
                    per_lane!($ty, $lanes, self, rhs, |a, b| a / b)
                }
            }

            impl SimdRem for Vector<$ty> {
                fn simd_rem(self, rhs: Self) -> Self {
                    per_lane!($ty, $lanes, self, rhs, |a, b| a % b)
                }
            }

            impl SimdNeg for Vector<$ty> {
                fn simd_neg(self) -> Self {
                    per_lane!($ty, $lanes, self, |a| -a)
                }
            }

            impl SimdAbs for Vector<$ty> {
                fn simd_abs(self) -> Self {
                    per_lane!($ty, $lanes, self, |a| <$ty>::from_bits(a.to_bits() & !$sign_mask))
                }
            }

            impl SimdAbsDiff for Vector<$ty> {
                fn simd_abs_diff(self, rhs: Self) -> Self {
                    per_lane!($ty, $lanes, self, rhs, |a, b| {
                        <$ty>::from_bits((a - b).to_bits() & !$sign_mask)
                    })
                }
            }

            impl SimdAvg for Vector<$ty> {
                fn simd_midpoint(self, rhs: Self) -> Self {
                    per_lane!($ty, $lanes, self, rhs, |a, b| (a + b) * 0.5)
                }

                fn simd_halving_sub(self, rhs: Self) -> Self {
                    per_lane!($ty, $lanes, self, rhs, |a, b| (a - b) * 0.5)
                }
            }

            impl SimdNot for Vector<$ty> {
                fn simd_not(self) -> Self {
                    per_lane!($ty, $lanes, self, |a| <$ty>::from_bits(!a.to_bits()))
                }
            }

            impl SimdAnd for Vector<$ty> {
                fn simd_and(self, rhs: Self) -> Self {
                    per_lane!($ty, $lanes, self, rhs, |a, b| {
                        <$ty>::from_bits(a.to_bits() & b.to_bits())
                    })
                }
            }

            impl SimdOr for Vector<$ty> {
                fn simd_or(self, rhs: Self) -> Self {
                    per_lane!($ty, $lanes, self, rhs, |a, b| {
                        <$ty>::from_bits(a.to_bits() | b.to_bits())
                    })
                }
            }

            impl SimdXor for Vector<$ty> {
                fn simd_xor(self, rhs: Self) -> Self {
                    per_lane!($ty, $lanes, self, rhs, |a, b| {
                        <$ty>::from_bits(a.to_bits() ^ b.to_bits())
                    })
                }
            }

            impl SimdAndNot for Vector<$ty> {
                fn simd_andnot(self, rhs: Self) -> Self {
                    per_lane!($ty, $lanes, self, rhs, |a, b| {
                        <$ty>::from_bits(!a.to_bits() & b.to_bits())
                    })
                }
            }
        )*
    };
}

impl_float! {
    f32, 4, u32, 0x8000_0000u32;
    f64, 2, u64, 0x8000_0000_0000_0000u64;
}

// Newton-refined bit-level estimates; precision tracks the hardware
// estimate instructions, not a correctly rounded result.
impl SimdRecip for Vector<f32> {
    fn simd_recip_est(self) -> Self {
        per_lane!(f32, 4, self, |a| {
            let mut e = f32::from_bits(0x7ef3_11c3u32.wrapping_sub(a.to_bits()));
            e = e * (2.0 - a * e);
            e * (2.0 - a * e)
        })
    }

    fn simd_rsqrt_est(self) -> Self {
        per_lane!(f32, 4, self, |a| {
            let mut e = f32::from_bits(0x5f37_59dfu32.wrapping_sub(a.to_bits() >> 1));
            e = e * (1.5 - 0.5 * a * e * e);
            e * (1.5 - 0.5 * a * e * e)
        })
    }
}

impl SimdRecip for Vector<f64> {
    fn simd_recip_est(self) -> Self {
        per_lane!(f64, 2, self, |a| 1.0 / a)
    }

    fn simd_rsqrt_est(self) -> Self {
        per_lane!(f64, 2, self, |a| {
            let mut e = f64::from_bits(0x5fe6_eb50_c7b5_37a9u64.wrapping_sub(a.to_bits() >> 1));
            e = e * (1.5 - 0.5 * a * e * e);
            e = e * (1.5 - 0.5 * a * e * e);
            e * (1.5 - 0.5 * a * e * e)
        })
    }
}
