//! Portable fallback backend: per-lane loops over a 16-byte pseudo
//! register. Semantics are bit-identical to the hardware backends; this is
//! what every emulated path is tested against.

mod arith;
mod cmp;
mod convert;
mod memory;
mod shift;

pub(crate) mod regs {
    pub type RegI8 = [i8; 16];
    pub type RegU8 = [u8; 16];
    pub type RegI16 = [i16; 8];
    pub type RegU16 = [u16; 8];
    pub type RegI32 = [i32; 4];
    pub type RegU32 = [u32; 4];
    pub type RegI64 = [i64; 2];
    pub type RegU64 = [u64; 2];
    pub type RegF32 = [f32; 4];
    pub type RegF64 = [f64; 2];
}

/// Map one function over every lane.
macro_rules! per_lane {
    ($ty:ty, $lanes:literal, $a:expr, |$x:ident| $body:expr) => {{
        let a = $a.to_array();
        let mut out = [<$ty>::default(); $lanes];
        for (o, &$x) in out.iter_mut().zip(a.iter()) {
            *o = $body;
        }
        Vector::from_array(out)
    }};
    ($ty:ty, $lanes:literal, $a:expr, $b:expr, |$x:ident, $y:ident| $body:expr) => {{
        let a = $a.to_array();
        let b = $b.to_array();
        let mut out = [<$ty>::default(); $lanes];
        for ((o, &$x), &$y) in out.iter_mut().zip(a.iter()).zip(b.iter()) {
            *o = $body;
        }
        Vector::from_array(out)
    }};
}
pub(crate) use per_lane;
