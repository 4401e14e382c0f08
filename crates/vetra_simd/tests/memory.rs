use vetra_simd::*;

#[test]
fn alloc_is_register_aligned() {
    let p = alloc_aligned::<u8>(1024).expect("allocation failed");
    assert_eq!(p.as_ptr() as usize % REGISTER_BYTES, 0);
    unsafe { free_aligned(p.as_ptr(), 1024) };

    let p = alloc_aligned::<f64>(64).expect("allocation failed");
    assert_eq!(p.as_ptr() as usize % REGISTER_BYTES, 0);
    unsafe { free_aligned(p.as_ptr(), 64) };
}

#[test]
fn free_null_is_noop() {
    unsafe { free_aligned::<u32>(core::ptr::null_mut(), 16) };
}

#[test]
fn zero_len_alloc() {
    let p = alloc_aligned::<u8>(0).expect("zero-length allocation");
    unsafe { free_aligned(p.as_ptr(), 0) };
}

#[test]
fn pointer_rounding() {
    let base = 0x1000 as *const u8;
    assert_eq!(align_up(base) as usize, 0x1000);
    assert_eq!(align_down(base) as usize, 0x1000);

    let odd = 0x1001 as *const u8;
    assert_eq!(align_up(odd) as usize, 0x1000 + REGISTER_BYTES);
    assert_eq!(align_down(odd) as usize, 0x1000);
}

#[test]
fn aligned_load_store_round_trip() {
    let n = Vector::<u32>::LANES;
    let p = alloc_aligned::<u32>(n).expect("allocation failed");
    let mem = p.as_ptr();

    let v = {
        let mut arr = [0u32; Vector::<u32>::LANES];
        for (i, lane) in arr.iter_mut().enumerate() {
            *lane = (i as u32) * 3 + 7;
        }
        Vector::from_array(arr)
    };

    unsafe {
        v.store::<true>(mem);
        assert_eq!(Vector::<u32>::load::<true>(mem), v);
        assert_eq!(Vector::<u32>::load::<false>(mem), v);
    }

    unsafe { free_aligned(mem, n) };
}

#[test]
fn unaligned_load_store_round_trip() {
    // One past an aligned base is maximally misaligned.
    let n = Vector::<u8>::LANES;
    let p = alloc_aligned::<u8>(2 * n).expect("allocation failed");
    let mem = unsafe { p.as_ptr().add(1) };

    let v = Vector::<u8>::splat(0xA5);
    unsafe {
        v.store::<false>(mem);
        assert_eq!(Vector::<u8>::load::<false>(mem), v);
    }

    unsafe { free_aligned(p.as_ptr(), 2 * n) };
}

#[test]
fn load_reads_memory_order() {
    let mut src = [0i16; Vector::<i16>::LANES];
    for (i, lane) in src.iter_mut().enumerate() {
        *lane = i as i16 - 4;
    }
    let v = unsafe { Vector::<i16>::load::<false>(src.as_ptr()) };
    assert_eq!(v.to_array(), src);
    assert_eq!(v, Vector::<i16>::from_slice(&src));
}

#[test]
#[should_panic(expected = "slice length must be at least the number of lanes")]
fn from_slice_rejects_short_input() {
    let short = [0u8; 3];
    let _ = Vector::<u8>::from_slice(&short);
}
