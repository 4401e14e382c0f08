use super::per_lane;
use crate::ops::*;
use crate::Vector;

// Shift counts at or beyond the lane width clear the lane (sign fill for
// the arithmetic right shift), matching the hardware backends.
macro_rules! impl_shift_unsigned {
    {$($ty:ty, $lanes:literal;)*} => {
        $(
            impl SimdShift for Vector<$ty> {
                fn simd_shl(self, count: u32) -> Self {
                    if count >= <$ty>::BITS {
                        return Self::zero();
                    }
                    per_lane!($ty, $lanes, self, |a| a << count)
                }

                fn simd_shr(self, count: u32) -> Self {
                    if count >= <$ty>::BITS {
                        return Self::zero();
                    }
                    per_lane!($ty, $lanes, self, |a| a >> count)
                }
            }
        )*
    };
}

impl_shift_unsigned! {
    u8,  16;
    u16, 8;
    u32, 4;
    u64, 2;
}

macro_rules! impl_shift_signed {
    {$($ty:ty, $lanes:literal;)*} => {
        $(
            impl SimdShift for Vector<$ty> {
                fn simd_shl(self, count: u32) -> Self {
                    if count >= <$ty>::BITS {
                        return Self::zero();
                    }
                    per_lane!($ty, $lanes, self, |a| a << count)
                }

                fn simd_shr(self, count: u32) -> Self {
                    let count = count.min(<$ty>::BITS - 1);
                    per_lane!($ty, $lanes, self, |a| a >> count)
                }
            }
        )*
    };
}

impl_shift_signed! {
    i8,  16;
    i16, 8;
    i32, 4;
    i64, 2;
}

macro_rules! impl_lane_shift {
    {$($ty:ty, $lanes:literal;)*} => {
        $(
            impl SimdLaneShift for Vector<$ty> {
                fn simd_shl_lanes<const N: usize>(self) -> Self {
                    let a = self.to_array();
                    let mut out = [<$ty>::default(); $lanes];
                    for i in N..$lanes {
                        out[i] = a[i - N];
                    }
                    Vector::from_array(out)
                }

                fn simd_shr_lanes<const N: usize>(self) -> Self {
                    let a = self.to_array();
                    let mut out = [<$ty>::default(); $lanes];
                    for i in N..$lanes {
                        out[i - N] = a[i];
                    }
                    Vector::from_array(out)
                }
            }
        )*
    };
}

impl_lane_shift! {
    i8,  16;
    u8,  16;
    i16, 8;
    u16, 8;
    i32, 4;
    u32, 4;
    i64, 2;
    u64, 2;
    f32, 4;
    f64, 2;
}

macro_rules! impl_dup {
    {$($ty:ty, $lanes:literal, $ubits:ty, $half_bits:literal;)*} => {
        $(
            impl SimdDup for Vector<$ty> {
                fn simd_dup_lo(self) -> Self {
                    per_lane!($ty, $lanes, self, |a| {
                        let lo = (a as $ubits) & ((1 << $half_bits) - 1);
                        ((lo << $half_bits) | lo) as $ty
                    })
                }

                fn simd_dup_hi(self) -> Self {
                    per_lane!($ty, $lanes, self, |a| {
                        let hi = (a as $ubits) >> $half_bits;
                        ((hi << $half_bits) | hi) as $ty
                    })
                }
            }
        )*
    };
}

impl_dup! {
    i16, 8, u16, 8;
    u16, 8, u16, 8;
    i32, 4, u32, 16;
    u32, 4, u32, 16;
    i64, 2, u64, 32;
    u64, 2, u64, 32;
}
