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
fn select_follows_the_mask() {
    macro_rules! check {
        ($($ty:ty),*) => {
            $(
                let x = ramp!($ty, 10 as $ty, 3 as $ty);
                let y = ramp!($ty, 100 as $ty, 7 as $ty);

                let ones = !Vector::<<$ty as Element>::Mask>::zero();
                let zeros = Vector::<<$ty as Element>::Mask>::zero();
                assert_eq!(Vector::select(ones, x, y), x);
                assert_eq!(Vector::select(zeros, x, y), y);

                // Alternating mask from a comparison.
                let parity = ramp!($ty, 0 as $ty, 1 as $ty)
                    & Vector::<$ty>::splat(1 as $ty);
                let m = parity.eq(&Vector::<$ty>::zero());
                let got = Vector::select(m, x, y).to_array();
                let xs = x.to_array();
                let ys = y.to_array();
                for (i, &g) in got.iter().enumerate() {
                    let want = if i % 2 == 0 { xs[i] } else { ys[i] };
                    assert_eq!(g, want, "lane {}", i);
                }
            )*
        };
    }
    check!(i8, u8, i16, u16, i32, u32, i64, u64);
}

#[test]
fn select_on_float_lanes() {
    let x = Vector::<f32>::splat(1.0);
    let y = Vector::<f32>::splat(-1.0);
    let ones = x.eq(&x);
    let zeros = x.ne(&x);
    assert_eq!(Vector::select(ones, x, y), x);
    assert_eq!(Vector::select(zeros, x, y), y);

    let a = Vector::<f64>::splat(2.0);
    let b = Vector::<f64>::splat(3.0);
    let m = a.lt(&b);
    assert_eq!(Vector::select(m, a, b), a);
}

#[test]
fn select_lifts_over_tuples() {
    let x = (Vector::<u8>::splat(1), Vector::<u16>::splat(2));
    let y = (Vector::<u8>::splat(9), Vector::<u16>::splat(8));
    let m = (
        !Vector::<u8>::zero(),
        Vector::<u16>::zero(),
    );
    let got = select(m, x, y);
    assert_eq!(got.0, x.0);
    assert_eq!(got.1, y.1);
}

#[test]
fn insert_extract_single_lanes() {
    let v = ramp!(u8, 0, 1);
    assert_eq!(v.extract::<0>(), 0);
    assert_eq!(v.extract::<7>(), 7);

    let v = v.insert::<3>(200);
    assert_eq!(v.extract::<3>(), 200);
    assert_eq!(v.extract::<2>(), 2);
    assert_eq!(v.extract::<4>(), 4);

    let v = Vector::<f64>::splat(1.0).insert::<1>(-2.0);
    assert_eq!(v.extract::<0>(), 1.0);
    assert_eq!(v.extract::<1>(), -2.0);

    let v = Vector::<i64>::zero().insert::<0>(i64::MIN);
    assert_eq!(v.extract::<0>(), i64::MIN);
    assert_eq!(v.extract::<1>(), 0);
}

#[test]
fn splat_and_zero_identities() {
    macro_rules! check {
        ($($ty:ty),*) => {
            $(
                let v = Vector::<$ty>::splat(42 as $ty);
                for &lane in v.to_array().iter() {
                    assert_eq!(lane, 42 as $ty);
                }
                for &lane in Vector::<$ty>::zero().to_array().iter() {
                    assert_eq!(lane, 0 as $ty);
                }
            )*
        };
    }
    check!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);
}
