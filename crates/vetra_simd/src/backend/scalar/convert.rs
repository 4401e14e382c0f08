use crate::ops::*;
use crate::Vector;

// Same-lane-count value conversion with Rust `as` semantics per lane:
// signed <-> unsigned reinterprets two's complement, int <-> float converts
// the value (float -> int truncating), identity is the identity.
macro_rules! impl_convert {
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

impl_convert! {
    i8  => i8,  16;
    u8  => u8,  16;
    i8  => u8,  16;
    u8  => i8,  16;
    i16 => i16, 8;
    u16 => u16, 8;
    i16 => u16, 8;
    u16 => i16, 8;
    i32 => i32, 4;
    u32 => u32, 4;
    i32 => u32, 4;
    u32 => i32, 4;
    i64 => i64, 2;
    u64 => u64, 2;
    i64 => u64, 2;
    u64 => i64, 2;
    f32 => f32, 4;
    f64 => f64, 2;
    i32 => f32, 4;
    u32 => f32, 4;
    f32 => i32, 4;
    f32 => u32, 4;
    i64 => f64, 2;
    u64 => f64, 2;
    f64 => i64, 2;
    f64 => u64, 2;
}

// Widening takes half the lanes to double width; narrowing clamps (data
// path) or bit-truncates (mask path) two full registers into one.
macro_rules! impl_extend_int {
    {$($ty:ty, $wide:ty, $lanes:literal, $half:literal;)*} => {
        $(
            impl SimdExtend for Vector<$ty> {
                type Wide = Vector<$wide>;

                fn simd_extend_lower(self) -> Self::Wide {
                    let a = self.to_array();
                    let mut out = [<$wide>::default(); $half];
                    for (o, &x) in out.iter_mut().zip(a.iter()) {
                        *o = x as $wide;
                    }
                    Vector::from_array(out)
                }

                fn simd_extend_upper(self) -> Self::Wide {
                    let a = self.to_array();
                    let mut out = [<$wide>::default(); $half];
                    for (o, &x) in out.iter_mut().zip(a[$half..].iter()) {
                        *o = x as $wide;
                    }
                    Vector::from_array(out)
                }

                #[allow(unused_comparisons)]
                fn simd_compress(a: Self::Wide, b: Self::Wide) -> Self {
                    let a = a.to_array();
                    let b = b.to_array();
                    let mut out = [<$ty>::default(); $lanes];
                    for (o, &x) in out.iter_mut().zip(a.iter().chain(b.iter())) {
                        *o = if x > <$ty>::MAX as $wide {
                            <$ty>::MAX
                        } else if x < <$ty>::MIN as $wide {
                            <$ty>::MIN
                        } else {
                            x as $ty
                        };
                    }
                    Vector::from_array(out)
                }

                fn simd_compress_truncate(a: Self::Wide, b: Self::Wide) -> Self {
                    let a = a.to_array();
                    let b = b.to_array();
                    let mut out = [<$ty>::default(); $lanes];
                    for (o, &x) in out.iter_mut().zip(a.iter().chain(b.iter())) {
                        *o = x as $ty;
                    }
                    Vector::from_array(out)
                }
            }
        )*
    };
}

impl_extend_int! {
    i8,  i16, 16, 8;
    u8,  u16, 16, 8;
    i16, i32, 8,  4;
    u16, u32, 8,  4;
    i32, i64, 4,  2;
    u32, u64, 4,  2;
}

impl SimdExtend for Vector<f32> {
    type Wide = Vector<f64>;

    fn simd_extend_lower(self) -> Self::Wide {
        let a = self.to_array();
        Vector::from_array([a[0] as f64, a[1] as f64])
    }

    fn simd_extend_upper(self) -> Self::Wide {
        let a = self.to_array();
        Vector::from_array([a[2] as f64, a[3] as f64])
    }

    fn simd_compress(a: Self::Wide, b: Self::Wide) -> Self {
        let a = a.to_array();
        let b = b.to_array();
        Vector::from_array([a[0] as f32, a[1] as f32, b[0] as f32, b[1] as f32])
    }

    // Floats have no bit-truncating narrow; both paths value-convert.
    fn simd_compress_truncate(a: Self::Wide, b: Self::Wide) -> Self {
        Self::simd_compress(a, b)
    }
}
