use crate::backend::{impl_gather_narrow, impl_gather_wide};
use crate::ops::*;
use crate::Vector;

macro_rules! impl_mem {
    {$($ty:ty;)*} => {
        $(
            impl SimdMem<$ty> for Vector<$ty> {
                unsafe fn simd_load<const ALIGNED: bool>(mem: *const $ty) -> Self {
                    if ALIGNED {
                        (mem as *const Self).read()
                    } else {
                        (mem as *const Self).read_unaligned()
                    }
                }

                unsafe fn simd_store<const ALIGNED: bool>(self, mem: *mut $ty) {
                    if ALIGNED {
                        (mem as *mut Self).write(self)
                    } else {
                        (mem as *mut Self).write_unaligned(self)
                    }
                }
            }
        )*
    };
}

impl_mem! {
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

impl_gather_narrow! {
    i8,  u8,  u16, 16;
    u8,  u8,  u16, 16;
    i16, u16, u32, 8;
    u16, u16, u32, 8;
}

impl_gather_wide! {
    i32, u32, 4;
    u32, u32, 4;
    i64, u64, 2;
    u64, u64, 2;
    f32, u32, 4;
    f64, u64, 2;
}
