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
fn shl_matches_scalar() {
    macro_rules! check {
        ($($ty:ty),*) => {
            $(
                let v = ramp!($ty, 3 as $ty, 41 as $ty);
                for count in 0..<$ty>::BITS {
                    let got = (v << count).to_array();
                    for (&g, &x) in got.iter().zip(v.to_array().iter()) {
                        assert_eq!(g, x << count, "{} << {}", x, count);
                    }
                }
                assert_eq!(v << <$ty>::BITS, Vector::<$ty>::zero());
            )*
        };
    }
    check!(i8, u8, i16, u16, i32, u32, i64, u64);
}

#[test]
fn shr_is_logical_for_unsigned() {
    macro_rules! check {
        ($($ty:ty),*) => {
            $(
                let v = ramp!($ty, <$ty>::MAX, 977u32 as $ty);
                for count in 0..<$ty>::BITS {
                    let got = (v >> count).to_array();
                    for (&g, &x) in got.iter().zip(v.to_array().iter()) {
                        assert_eq!(g, x >> count, "{} >> {}", x, count);
                    }
                }
                assert_eq!(v >> <$ty>::BITS, Vector::<$ty>::zero());
            )*
        };
    }
    check!(u8, u16, u32, u64);
}

#[test]
fn shr_is_arithmetic_for_signed() {
    macro_rules! check {
        ($($ty:ty),*) => {
            $(
                let v = ramp!($ty, <$ty>::MIN, 977u32 as $ty);
                for count in 0..<$ty>::BITS {
                    let got = (v >> count).to_array();
                    for (&g, &x) in got.iter().zip(v.to_array().iter()) {
                        assert_eq!(g, x >> count, "{} >> {}", x, count);
                    }
                }
                // Past the lane width the sign fills everything.
                let top = (v >> <$ty>::BITS).to_array();
                for (&g, &x) in top.iter().zip(v.to_array().iter()) {
                    assert_eq!(g, x >> (<$ty>::BITS - 1));
                }
            )*
        };
    }
    check!(i8, i16, i32, i64);
}

#[test]
fn lane_shift_zero_is_identity() {
    let v = ramp!(u8, 1, 1);
    assert_eq!(v.shl_lanes::<0>(), v);
    assert_eq!(v.shr_lanes::<0>(), v);

    let v = ramp!(i32, -3, 7);
    assert_eq!(v.shl_lanes::<0>(), v);
    assert_eq!(v.shr_lanes::<0>(), v);

    let v = Vector::<f32>::splat(2.5);
    assert_eq!(v.shl_lanes::<0>(), v);
    assert_eq!(v.shr_lanes::<0>(), v);
}

// On the 256-bit backend this exercises the two-half emulation: the result
// must be bit-identical to one contiguous register shift, which is exactly
// what the array model below describes.
#[test]
fn lane_shift_matches_array_model() {
    macro_rules! check {
        ($ty:ty, $n:literal) => {{
            let v = ramp!($ty, 1 as $ty, 1 as $ty);
            let arr = v.to_array();
            let lanes = arr.len();

            let got = v.shl_lanes::<$n>().to_array();
            for i in 0..lanes {
                let want = if i >= $n { arr[i - $n] } else { 0 as $ty };
                assert_eq!(got[i], want, "shl_lanes::<{}> lane {}", $n, i);
            }

            let got = v.shr_lanes::<$n>().to_array();
            for i in 0..lanes {
                let want = if i + $n < lanes { arr[i + $n] } else { 0 as $ty };
                assert_eq!(got[i], want, "shr_lanes::<{}> lane {}", $n, i);
            }
        }};
    }

    check!(u8, 1);
    check!(u8, 7);
    check!(u8, 15);
    check!(i8, 3);
    check!(u16, 1);
    check!(u16, 5);
    check!(i16, 7);
    check!(u32, 1);
    check!(u32, 3);
    check!(i32, 2);
    check!(u64, 1);
    check!(i64, 1);

    // Wider registers also cross the internal half boundary.
    #[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
    {
        check!(u8, 16);
        check!(u8, 17);
        check!(u8, 24);
        check!(u8, 31);
        check!(u16, 9);
        check!(u16, 15);
        check!(u32, 5);
        check!(u32, 7);
        check!(u64, 2);
        check!(u64, 3);
        check!(i8, 19);
        check!(i16, 12);
    }
}

#[test]
fn lane_shift_on_float_lanes() {
    let mut arr = [0.0f32; Vector::<f32>::LANES];
    for (i, lane) in arr.iter_mut().enumerate() {
        *lane = i as f32 + 1.0;
    }
    let v = Vector::<f32>::from_array(arr);

    let got = v.shl_lanes::<1>().to_array();
    assert_eq!(got[0], 0.0);
    for i in 1..arr.len() {
        assert_eq!(got[i], arr[i - 1]);
    }

    let got = v.shr_lanes::<1>().to_array();
    for i in 0..arr.len() - 1 {
        assert_eq!(got[i], arr[i + 1]);
    }
    assert_eq!(got[arr.len() - 1], 0.0);

    let v = Vector::<f64>::splat(3.5).insert::<0>(1.5);
    let got = v.shr_lanes::<1>().to_array();
    assert_eq!(got[got.len() - 1], 0.0);
    assert_eq!(got[0], 3.5);
}

#[test]
fn dup_mirrors_lane_halves() {
    let v = Vector::<u16>::splat(0xA1B2);
    assert_eq!(v.dup_lo(), Vector::<u16>::splat(0xB2B2));
    assert_eq!(v.dup_hi(), Vector::<u16>::splat(0xA1A1));

    let v = Vector::<u32>::splat(0xDEAD_BEEF);
    assert_eq!(v.dup_lo(), Vector::<u32>::splat(0xBEEF_BEEF));
    assert_eq!(v.dup_hi(), Vector::<u32>::splat(0xDEAD_DEAD));

    let v = Vector::<u64>::splat(0x0123_4567_89AB_CDEF);
    assert_eq!(v.dup_lo(), Vector::<u64>::splat(0x89AB_CDEF_89AB_CDEF));
    assert_eq!(v.dup_hi(), Vector::<u64>::splat(0x0123_4567_0123_4567));

    // Byte pairs from single bytes: duplicate then widen reads x * 0x0101.
    let v = Vector::<i16>::splat(0x0042);
    assert_eq!(v.dup_lo(), Vector::<i16>::splat(0x4242));
}
