use vetra_simd::*;

macro_rules! ramp {
    ($ty:ty, $base:expr, $step:expr) => {{
        let mut arr = [0 as $ty; Vector::<$ty>::LANES];
        let mut v = $base;
        for lane in arr.iter_mut() {
            *lane = v;
            v = v.wrapping_add($step);
        }
        Vector::<$ty>::from_array(arr)
    }};
}

#[test]
fn reinterpret_round_trip() {
    let v = ramp!(u8, 0, 7);
    assert_eq!(v.reinterpret::<i32>().reinterpret::<u8>(), v);
    assert_eq!(v.reinterpret::<f64>().reinterpret::<u8>(), v);
    assert_eq!(v.reinterpret::<u16>().reinterpret::<u8>(), v);

    let v = ramp!(i64, -3, 999);
    assert_eq!(v.reinterpret::<u8>().reinterpret::<i64>(), v);
}

#[test]
fn reinterpret_regroups_lanes() {
    // Little-endian: u8 lanes [1, 0, 2, 0, ...] read as u16 lanes [1, 2, ...].
    let mut arr = [0u8; Vector::<u8>::LANES];
    for (i, b) in arr.iter_mut().enumerate() {
        *b = if i % 2 == 0 { (i / 2) as u8 + 1 } else { 0 };
    }
    let wide = Vector::<u8>::from_array(arr).reinterpret::<u16>().to_array();
    for (i, &w) in wide.iter().enumerate() {
        assert_eq!(w, i as u16 + 1);
    }
}

#[test]
fn extend_then_compress_is_identity() {
    macro_rules! round_trip {
        ($($ty:ty),*) => {
            $(
                let v = ramp!($ty, 1 as $ty, 3 as $ty);
                let lo = v.extend_lower();
                let hi = v.extend_upper();
                assert_eq!(Vector::compress(lo, hi), v);
                assert_eq!(Vector::compress_truncate(lo, hi), v);
            )*
        };
    }
    round_trip!(i8, u8, i16, u16, i32, u32);
}

#[test]
fn extend_widens_by_value() {
    let v = ramp!(i8, -64, 9);
    let narrow = v.to_array();
    let lo = v.extend_lower().to_array();
    let hi = v.extend_upper().to_array();
    let half = narrow.len() / 2;
    for k in 0..half {
        assert_eq!(lo[k], narrow[k] as i16);
        assert_eq!(hi[k], narrow[half + k] as i16);
    }

    let v = ramp!(u16, 60000, 555);
    let narrow = v.to_array();
    let lo = v.extend_lower().to_array();
    for k in 0..narrow.len() / 2 {
        assert_eq!(lo[k], narrow[k] as u32);
    }
}

#[test]
fn compress_saturates_data() {
    let wide = Vector::<u16>::splat(300);
    assert_eq!(
        Vector::<u8>::compress(wide, Vector::<u16>::zero()).extract::<0>(),
        255u8
    );

    let wide = Vector::<i16>::splat(-300);
    assert_eq!(
        Vector::<i8>::compress(wide, Vector::<i16>::zero()).extract::<0>(),
        -128i8
    );

    let wide = Vector::<i32>::splat(70000);
    assert_eq!(
        Vector::<i16>::compress(wide, Vector::<i32>::zero()).extract::<0>(),
        i16::MAX
    );

    let wide = Vector::<u64>::splat(u64::MAX);
    assert_eq!(
        Vector::<u32>::compress(wide, Vector::<u64>::zero()).extract::<0>(),
        u32::MAX
    );
}

#[test]
fn compress_truncate_keeps_mask_patterns() {
    let ones16 = !Vector::<u16>::zero();
    let m = Vector::<u8>::compress_truncate(ones16, ones16);
    assert_eq!(m, !Vector::<u8>::zero());

    let ones32 = !Vector::<u32>::zero();
    let m = Vector::<u16>::compress_truncate(ones32, Vector::<u32>::zero());
    let arr = m.to_array();
    let half = arr.len() / 2;
    for (i, &x) in arr.iter().enumerate() {
        assert_eq!(x, if i < half { u16::MAX } else { 0 });
    }

    let v = Vector::<u32>::splat(0x0001_0002);
    assert_eq!(
        Vector::<u16>::compress_truncate(v, v),
        Vector::<u16>::splat(2)
    );
}

#[test]
fn same_width_value_conversion() {
    let v = ramp!(i32, -8, 5);
    let f = v.convert::<f32>().to_array();
    for (&g, &x) in f.iter().zip(v.to_array().iter()) {
        assert_eq!(g, x as f32);
    }

    let f = Vector::<f32>::splat(-2.75);
    assert_eq!(f.convert::<i32>(), Vector::<i32>::splat(-2));

    let v = ramp!(u32, 0, 1 << 24);
    let f = v.convert::<f32>().to_array();
    for (&g, &x) in f.iter().zip(v.to_array().iter()) {
        assert_eq!(g, x as f32);
    }

    let v = ramp!(i64, -5, 3);
    let f = v.convert::<f64>().to_array();
    for (&g, &x) in f.iter().zip(v.to_array().iter()) {
        assert_eq!(g, x as f64);
    }

    // Signed <-> unsigned of the same width follows `as` (two's complement).
    let v = Vector::<i8>::splat(-1);
    assert_eq!(v.convert::<u8>(), Vector::<u8>::splat(255));
    assert_eq!(v.convert::<u8>().convert::<i8>(), v);
}

// Reusing a float-only primitive on integer data through the equal-width
// complementary type.
#[test]
fn complement_reinterpret_round_trip() {
    fn through_complement<T: Complement>(v: Vector<T>) -> Vector<T> {
        v.reinterpret::<T::Complement>().reinterpret::<T>()
    }

    let v = ramp!(u32, 0x3F80_0000, 0x0080_0001);
    assert_eq!(through_complement(v), v);

    let v = Vector::<f32>::splat(6.5);
    let bits = v.reinterpret::<<f32 as Complement>::Complement>();
    assert_eq!(bits, Vector::<i32>::splat(6.5f32.to_bits() as i32));
    assert_eq!(through_complement(v), v);
}

#[test]
fn float_widen_narrow() {
    let v = Vector::<f32>::splat(1.5);
    let lo = v.extend_lower();
    let hi = v.extend_upper();
    assert_eq!(lo, Vector::<f64>::splat(1.5));
    assert_eq!(hi, Vector::<f64>::splat(1.5));
    assert_eq!(Vector::<f32>::compress(lo, hi), v);
}

// The whole pipeline: load bytes, widen the low half, scale, store.
#[test]
fn widen_multiply_store_scenario() {
    let mut src = [0u8; Vector::<u8>::LANES];
    for (i, b) in src.iter_mut().enumerate() {
        *b = i as u8;
    }

    let bytes = unsafe { Vector::<u8>::load::<false>(src.as_ptr()) };
    let wide = bytes.extend_lower();
    let scaled = wide * Vector::<u16>::splat(2);

    let mut dst = [0u16; Vector::<u16>::LANES];
    unsafe { scaled.store::<false>(dst.as_mut_ptr()) };

    for (i, &w) in dst.iter().enumerate() {
        assert_eq!(w, 2 * i as u16);
    }
}
