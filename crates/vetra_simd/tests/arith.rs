use vetra_simd::*;

/// Fill a register with a deterministic ramp around `base`, stepping by
/// `step` per lane.
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

/// Float flavor of [`ramp!`]; floats have no wrapping arithmetic.
macro_rules! framp {
    ($ty:ty, $base:expr, $step:expr) => {{
        let mut arr = [0.0 as $ty; Vector::<$ty>::LANES];
        let mut v = $base;
        for lane in arr.iter_mut() {
            *lane = v;
            v += $step;
        }
        Vector::<$ty>::from_array(arr)
    }};
}

macro_rules! check_binop {
    ($ty:ty, $a:expr, $b:expr, $op:expr, $model:expr) => {{
        let a = $a;
        let b = $b;
        let got = $op(a, b).to_array();
        let xs = a.to_array();
        let ys = b.to_array();
        for ((&g, &x), &y) in got.iter().zip(xs.iter()).zip(ys.iter()) {
            let want: $ty = $model(x, y);
            assert_eq!(g, want, "lane mismatch for {} op {}", x, y);
        }
    }};
}

#[test]
fn add_saturates_on_narrow_int() {
    assert_eq!(
        Vector::<i8>::splat(127) + Vector::<i8>::splat(1),
        Vector::<i8>::splat(127)
    );
    assert_eq!(
        Vector::<i8>::splat(-128) - Vector::<i8>::splat(1),
        Vector::<i8>::splat(-128)
    );
    assert_eq!(
        Vector::<u8>::splat(250) + Vector::<u8>::splat(10),
        Vector::<u8>::splat(255)
    );
    assert_eq!(
        Vector::<u8>::splat(3) - Vector::<u8>::splat(10),
        Vector::<u8>::splat(0)
    );
    assert_eq!(
        Vector::<i16>::splat(i16::MAX) + Vector::<i16>::splat(100),
        Vector::<i16>::splat(i16::MAX)
    );
    assert_eq!(
        Vector::<u16>::splat(10) - Vector::<u16>::splat(30),
        Vector::<u16>::splat(0)
    );

    check_binop!(i8, ramp!(i8, -64, 9), ramp!(i8, 100, 7), |a, b| a + b, |x: i8, y: i8| x
        .saturating_add(y));
    check_binop!(u16, ramp!(u16, 60000, 1000), ramp!(u16, 0, 999), |a, b| a + b, |x: u16,
        y: u16| x.saturating_add(y));
}

#[test]
fn add_wraps_on_wide_int() {
    check_binop!(i32, ramp!(i32, i32::MAX - 3, 1), Vector::<i32>::splat(7), |a, b| a + b,
        |x: i32, y: i32| x.wrapping_add(y));
    check_binop!(u64, Vector::<u64>::splat(u64::MAX), Vector::<u64>::splat(2), |a, b| a + b,
        |x: u64, y: u64| x.wrapping_add(y));
    check_binop!(u32, Vector::<u32>::splat(1), Vector::<u32>::splat(3), |a, b| a - b,
        |x: u32, y: u32| x.wrapping_sub(y));
}

#[test]
fn mul_truncates_to_lane() {
    check_binop!(u8, ramp!(u8, 0, 17), ramp!(u8, 3, 29), |a, b| a * b, |x: u8, y: u8| x
        .wrapping_mul(y));
    check_binop!(i16, ramp!(i16, -300, 177), ramp!(i16, 250, 33), |a, b| a * b, |x: i16,
        y: i16| x.wrapping_mul(y));
    check_binop!(i32, ramp!(i32, -70000, 13001), Vector::<i32>::splat(92003), |a, b| a * b,
        |x: i32, y: i32| x.wrapping_mul(y));
    check_binop!(u64, ramp!(u64, 1 << 40, 1 << 33), Vector::<u64>::splat(12345), |a, b| a * b,
        |x: u64, y: u64| x.wrapping_mul(y));
}

#[test]
fn int_div_rem() {
    check_binop!(i32, ramp!(i32, -100, 37), Vector::<i32>::splat(7), |a, b| a / b, |x: i32,
        y: i32| x / y);
    check_binop!(u8, ramp!(u8, 10, 19), Vector::<u8>::splat(3), |a, b| a % b, |x: u8, y: u8| x
        % y);
}

#[test]
fn float_arith() {
    check_binop!(f32, framp!(f32, -4.0, 0.75), Vector::<f32>::splat(2.5), |a, b| a * b,
        |x: f32, y: f32| x * y);
    check_binop!(f64, framp!(f64, 1.0, 0.5), Vector::<f64>::splat(4.0), |a, b| a / b,
        |x: f64, y: f64| x / y);
    check_binop!(f32, framp!(f32, 1.0, 1.0), Vector::<f32>::splat(2.5), |a, b| a % b,
        |x: f32, y: f32| x % y);
}

#[test]
fn neg_and_abs() {
    let v = ramp!(i16, -5, 3);
    let n = (-v).to_array();
    for (&g, &x) in n.iter().zip(v.to_array().iter()) {
        assert_eq!(g, x.wrapping_neg());
    }

    let a = ramp!(i32, -6, 4).abs().to_array();
    for (&g, &x) in a.iter().zip(ramp!(i32, -6, 4).to_array().iter()) {
        assert_eq!(g, x.wrapping_abs());
    }

    let f = framp!(f32, -2.0, 1.25);
    assert_eq!((-f).abs(), f.abs());
}

#[test]
fn midpoint_rounds_half_up() {
    check_binop!(u8, ramp!(u8, 0, 13), ramp!(u8, 255, 249), |a: Vector<u8>, b| a.midpoint(b),
        |x: u8, y: u8| ((x as i32 + y as i32 + 1) >> 1) as u8);
    check_binop!(i8, ramp!(i8, -128, 11), ramp!(i8, 127, 5), |a: Vector<i8>, b| a.midpoint(b),
        |x: i8, y: i8| ((x as i32 + y as i32 + 1) >> 1) as i8);
    check_binop!(i32, ramp!(i32, -7, 5), ramp!(i32, 6, 3), |a: Vector<i32>, b| a.midpoint(b),
        |x: i32, y: i32| ((x as i64 + y as i64 + 1) >> 1) as i32);
    check_binop!(u64, ramp!(u64, u64::MAX - 9, 3), ramp!(u64, 1, 7), |a: Vector<u64>, b| a
        .midpoint(b), |x: u64, y: u64| ((x as i128 + y as i128 + 1) >> 1) as u64);
}

#[test]
fn halving_sub_floors() {
    check_binop!(u8, ramp!(u8, 0, 7), ramp!(u8, 3, 11), |a: Vector<u8>, b| a.halving_sub(b),
        |x: u8, y: u8| ((x as i32 - y as i32) >> 1) as u8);
    check_binop!(i16, ramp!(i16, -1000, 77), ramp!(i16, 999, 55), |a: Vector<i16>, b| a
        .halving_sub(b), |x: i16, y: i16| ((x as i32 - y as i32) >> 1) as i16);
    check_binop!(u32, ramp!(u32, 5, 999), ramp!(u32, 100, 13), |a: Vector<u32>, b| a
        .halving_sub(b), |x: u32, y: u32| ((x as i64 - y as i64) >> 1) as u32);
}

#[test]
fn abs_diff_saturates_on_narrow_int() {
    check_binop!(u8, ramp!(u8, 0, 19), ramp!(u8, 255, 233), |a: Vector<u8>, b| a.abs_diff(b),
        |x: u8, y: u8| x.abs_diff(y));
    check_binop!(i8, Vector::<i8>::splat(127), Vector::<i8>::splat(-128),
        |a: Vector<i8>, b| a.abs_diff(b), |_, _| 127i8);
    check_binop!(u32, ramp!(u32, 9, 1001), ramp!(u32, 5000, 77), |a: Vector<u32>, b| a
        .abs_diff(b), |x: u32, y: u32| x.abs_diff(y));
}

#[test]
fn mul_high_matches_wide_product() {
    check_binop!(i16, ramp!(i16, -3000, 513), ramp!(i16, 1000, 257), |a: Vector<i16>, b| a
        .mul_high(b), |x: i16, y: i16| ((x as i32 * y as i32) >> 16) as i16);
    check_binop!(u16, ramp!(u16, 50000, 1111), ramp!(u16, 999, 777), |a: Vector<u16>, b| a
        .mul_high(b), |x: u16, y: u16| ((x as u32 * y as u32) >> 16) as u16);
}

#[test]
fn recip_estimates_are_close() {
    let v = Vector::<f32>::splat(4.0);
    let r = v.recip_est().to_array();
    for &x in r.iter() {
        assert!((x - 0.25).abs() < 1e-3, "rcp(4.0) ~ 0.25, got {}", x);
    }

    let r = v.rsqrt_est().to_array();
    for &x in r.iter() {
        assert!((x - 0.5).abs() < 1e-3, "rsqrt(4.0) ~ 0.5, got {}", x);
    }

    let d = Vector::<f64>::splat(8.0).recip_est().to_array();
    for &x in d.iter() {
        assert!((x - 0.125).abs() < 1e-9);
    }
}

#[test]
fn bitwise_de_morgan() {
    macro_rules! de_morgan {
        ($($ty:ty),*) => {
            $(
                let x = ramp!($ty, 3 as $ty, 97 as $ty);
                let y = ramp!($ty, 250u32 as $ty, 33 as $ty);
                assert_eq!(!(x & y), (!x) | (!y));
                assert_eq!(!(x | y), (!x) & (!y));
                assert_eq!(x.andnot(y), (!x) & y);
            )*
        };
    }
    de_morgan!(i8, u8, i16, u16, i32, u32, i64, u64);
}

#[test]
fn bitwise_on_float_lanes() {
    let x = Vector::<f32>::splat(1.5);
    let sign = Vector::<f32>::splat(-0.0);
    assert_eq!(x | sign, Vector::<f32>::splat(-1.5));
    assert_eq!((x | sign) & !sign, x);
    assert_eq!(sign.andnot(x | sign), x);
}

#[test]
fn tuple_ops_apply_componentwise() {
    let pair = (Vector::<u8>::splat(200), Vector::<u16>::splat(7));
    let other = (Vector::<u8>::splat(100), Vector::<u16>::splat(3));
    let sum = pair.simd_add(other);
    assert_eq!(sum.0, Vector::<u8>::splat(255));
    assert_eq!(sum.1, Vector::<u16>::splat(10));

    let nested = ((Vector::<i32>::splat(5), Vector::<i32>::splat(-5)), Vector::<f32>::splat(2.0));
    let twice = nested.simd_add(nested);
    assert_eq!((twice.0).0, Vector::<i32>::splat(10));
    assert_eq!((twice.0).1, Vector::<i32>::splat(-10));
    assert_eq!(twice.1, Vector::<f32>::splat(4.0));
}
