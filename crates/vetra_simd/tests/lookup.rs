use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vetra_simd::*;

#[test]
fn lookup_gathers_per_lane() {
    let table: [u8; 256] = core::array::from_fn(|i| (i as u8).wrapping_mul(37));

    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut idx = [0u8; Vector::<u8>::LANES];
    for i in idx.iter_mut() {
        *i = rng.gen();
    }

    let got = unsafe { Vector::<u8>::lookup(table.as_ptr(), Vector::from_array(idx)) };
    for (&g, &i) in got.to_array().iter().zip(idx.iter()) {
        assert_eq!(g, table[i as usize]);
    }
}

#[test]
fn lookup_wide_lanes() {
    let table: [u32; 64] = core::array::from_fn(|i| (i as u32) * 101 + 5);

    let mut rng = StdRng::seed_from_u64(42);
    let mut idx = [0u32; Vector::<u32>::LANES];
    for i in idx.iter_mut() {
        *i = rng.gen_range(0..64);
    }

    let got = unsafe { Vector::<u32>::lookup(table.as_ptr(), Vector::from_array(idx)) };
    for (&g, &i) in got.to_array().iter().zip(idx.iter()) {
        assert_eq!(g, table[i as usize]);
    }

    let table: [f64; 16] = core::array::from_fn(|i| i as f64 * 0.5);
    let mut idx = [0u64; Vector::<f64>::LANES];
    for i in idx.iter_mut() {
        *i = rng.gen_range(0..16);
    }
    let got = unsafe { Vector::<f64>::lookup(table.as_ptr(), Vector::from_array(idx)) };
    for (&g, &i) in got.to_array().iter().zip(idx.iter()) {
        assert_eq!(g, table[i as usize]);
    }
}

// The 8-bit index arithmetic must run at doubled width: row * stride + col
// here overflows a u8 for most lanes.
#[test]
fn lookup2_survives_narrow_index_overflow() {
    const STRIDE: usize = 40;
    const ROWS: usize = 16;
    let table: [u8; STRIDE * ROWS] = core::array::from_fn(|i| (i % 251) as u8);

    let mut rng = StdRng::seed_from_u64(7);
    let mut rows = [0u8; Vector::<u8>::LANES];
    let mut cols = [0u8; Vector::<u8>::LANES];
    for (r, c) in rows.iter_mut().zip(cols.iter_mut()) {
        *r = rng.gen_range(0..ROWS as u8);
        *c = rng.gen_range(0..STRIDE as u8);
    }

    let got = unsafe {
        Vector::<u8>::lookup2(
            table.as_ptr(),
            Vector::from_array(rows),
            Vector::from_array(cols),
            STRIDE as u8,
        )
    };
    for ((&g, &r), &c) in got.to_array().iter().zip(rows.iter()).zip(cols.iter()) {
        assert_eq!(g, table[r as usize * STRIDE + c as usize], "row {} col {}", r, c);
    }
}

#[test]
fn lookup2_wide_index() {
    const STRIDE: u32 = 17;
    let table: [u32; 17 * 8] = core::array::from_fn(|i| i as u32);

    let mut rows = [0u32; Vector::<u32>::LANES];
    let mut cols = [0u32; Vector::<u32>::LANES];
    for (i, (r, c)) in rows.iter_mut().zip(cols.iter_mut()).enumerate() {
        *r = (i % 8) as u32;
        *c = (i * 3 % 17) as u32;
    }

    let got = unsafe {
        Vector::<u32>::lookup2(
            table.as_ptr(),
            Vector::from_array(rows),
            Vector::from_array(cols),
            STRIDE,
        )
    };
    for ((&g, &r), &c) in got.to_array().iter().zip(rows.iter()).zip(cols.iter()) {
        assert_eq!(g, r * STRIDE + c);
    }
}

#[test]
fn lookup_16bit_indices() {
    let table: [i16; 1000] = core::array::from_fn(|i| (i as i16).wrapping_mul(-3));

    let mut rng = StdRng::seed_from_u64(99);
    let mut idx = [0u16; Vector::<u16>::LANES];
    for i in idx.iter_mut() {
        *i = rng.gen_range(0..1000);
    }

    let got = unsafe { Vector::<i16>::lookup(table.as_ptr(), Vector::from_array(idx)) };
    for (&g, &i) in got.to_array().iter().zip(idx.iter()) {
        assert_eq!(g, table[i as usize]);
    }
}
