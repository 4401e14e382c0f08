use super::per_lane;
use crate::ops::*;
use crate::Vector;

// Comparison lanes are all-ones / all-zero patterns of the mask type, never
// boolean 0/1.
macro_rules! impl_cmp {
    {$($ty:ty, $mask:ty, $lanes:literal, $ones:expr, $zeros:expr;)*} => {
        $(
            impl SimdCmp for Vector<$ty> {
                type Mask = Vector<$mask>;

                fn simd_eq(&self, rhs: &Self) -> Self::Mask {
                    let a = self.to_array();
                    let b = rhs.to_array();
                    let mut out = [$zeros; $lanes];
                    for ((o, &x), &y) in out.iter_mut().zip(a.iter()).zip(b.iter()) {
                        *o = if x == y { $ones } else { $zeros };
                    }
                    Vector::from_array(out)
                }

                fn simd_ne(&self, rhs: &Self) -> Self::Mask {
                    let a = self.to_array();
                    let b = rhs.to_array();
                    let mut out = [$zeros; $lanes];
                    for ((o, &x), &y) in out.iter_mut().zip(a.iter()).zip(b.iter()) {
                        *o = if x != y { $ones } else { $zeros };
                    }
                    Vector::from_array(out)
                }

                fn simd_lt(&self, rhs: &Self) -> Self::Mask {
                    let a = self.to_array();
                    let b = rhs.to_array();
                    let mut out = [$zeros; $lanes];
                    for ((o, &x), &y) in out.iter_mut().zip(a.iter()).zip(b.iter()) {
                        *o = if x < y { $ones } else { $zeros };
                    }
                    Vector::from_array(out)
                }

                fn simd_le(&self, rhs: &Self) -> Self::Mask {
                    let a = self.to_array();
                    let b = rhs.to_array();
                    let mut out = [$zeros; $lanes];
                    for ((o, &x), &y) in out.iter_mut().zip(a.iter()).zip(b.iter()) {
                        *o = if x <= y { $ones } else { $zeros };
                    }
                    Vector::from_array(out)
                }

                fn simd_gt(&self, rhs: &Self) -> Self::Mask {
                    let a = self.to_array();
                    let b = rhs.to_array();
                    let mut out = [$zeros; $lanes];
                    for ((o, &x), &y) in out.iter_mut().zip(a.iter()).zip(b.iter()) {
                        *o = if x > y { $ones } else { $zeros };
                    }
                    Vector::from_array(out)
                }

                fn simd_ge(&self, rhs: &Self) -> Self::Mask {
                    let a = self.to_array();
                    let b = rhs.to_array();
                    let mut out = [$zeros; $lanes];
                    for ((o, &x), &y) in out.iter_mut().zip(a.iter()).zip(b.iter()) {
                        *o = if x >= y { $ones } else { $zeros };
                    }
                    Vector::from_array(out)
                }
            }
        )*
    };
}

impl_cmp! {
    i8,  u8,  16, u8::MAX,  0u8;
    u8,  u8,  16, u8::MAX,  0u8;
    i16, u16, 8,  u16::MAX, 0u16;
    u16, u16, 8,  u16::MAX, 0u16;
    i32, u32, 4,  u32::MAX, 0u32;
    u32, u32, 4,  u32::MAX, 0u32;
    i64, u64, 2,  u64::MAX, 0u64;
    u64, u64, 2,  u64::MAX, 0u64;
    f32, f32, 4,  f32::from_bits(u32::MAX), 0.0f32;
    f64, f64, 2,  f64::from_bits(u64::MAX), 0.0f64;
}

macro_rules! impl_min_max {
    {$($ty:ty, $lanes:literal;)*} => {
        $(
            impl SimdMinMax for Vector<$ty> {
                fn simd_min(self, rhs: Self) -> Self {
                    per_lane!($ty, $lanes, self, rhs, |a, b| if a < b { a } else { b })
                }

                fn simd_max(self, rhs: Self) -> Self {
                    per_lane!($ty, $lanes, self, rhs, |a, b| if a > b { a } else { b })
                }
            }
        )*
    };
}

impl_min_max! {
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

macro_rules! impl_select_mask {
    {$($ty:ty, $mask:ty, $mask_bits:ty, $lanes:literal;)*} => {
        $(
            impl SimdSelect for Vector<$ty> {
                type Mask = Vector<$mask>;

                fn simd_select(mask: Self::Mask, if_true: Self, if_false: Self) -> Self {
                    let m = mask.reinterpret::<$mask_bits>().to_array();
                    let t = if_true.reinterpret::<$mask_bits>().to_array();
                    let f = if_false.reinterpret::<$mask_bits>().to_array();
                    let mut out = [<$mask_bits>::default(); $lanes];
                    for (i, o) in out.iter_mut().enumerate() {
                        *o = (m[i] & t[i]) | (!m[i] & f[i]);
                    }
                    Vector::<$mask_bits>::from_array(out).reinterpret::<$ty>()
                }
            }

            impl SimdMaskOps for Vector<$ty> {
                fn simd_any(self) -> bool {
                    let a = self.reinterpret::<$mask_bits>().to_array();
                    a.iter().any(|&x| x >> (<$mask_bits>::BITS - 1) != 0)
                }

                fn simd_all(self) -> bool {
                    let a = self.reinterpret::<$mask_bits>().to_array();
                    a.iter().all(|&x| x >> (<$mask_bits>::BITS - 1) != 0)
                }
            }
        )*
    };
}

impl_select_mask! {
    i8,  u8,  u8,  16;
    u8,  u8,  u8,  16;
    i16, u16, u16, 8;
    u16, u16, u16, 8;
    i32, u32, u32, 4;
    u32, u32, u32, 4;
    i64, u64, u64, 2;
    u64, u64, u64, 2;
    f32, f32, u32, 4;
    f64, f64, u64, 2;
}
