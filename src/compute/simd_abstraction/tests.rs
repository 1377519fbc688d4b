//! Conformance tests shared by every engine.
//!
//! Each check is written once against `VectorEngine` and run on the portable
//! engines plus whichever hardware engines the CPU supports.

use super::scalar::DistScalar;
use super::{PackedEngine, Portable32, PortableHalf, VectorEngine};

fn lanes<E: VectorEngine>(v: E::DistVec) -> Vec<E::Dist> {
    let mut out = vec![<E::Dist as DistScalar>::ZERO; E::WIDTH];
    unsafe { E::store(out.as_mut_ptr(), v) };
    out
}

fn ids<E: VectorEngine>(v: E::IdxVec) -> Vec<E::Idx> {
    let mut out = vec![<E::Idx as super::IdxScalar>::ZERO; E::WIDTH];
    unsafe { E::idx_store(out.as_mut_ptr(), v) };
    out
}

fn ramp(n: usize) -> Vec<f32> {
    (0..n).map(|i| i as f32 * 0.5 - 1.0).collect()
}

fn check_arithmetic<E: VectorEngine<Dist = f32, Idx = u32>>() {
    let w = E::WIDTH;
    let a = ramp(w);
    let b: Vec<f32> = (0..w).map(|i| (w - i) as f32).collect();
    unsafe {
        let va = E::load(a.as_ptr());
        let vb = E::load(b.as_ptr());
        let two = E::set1(2.0);

        let sum = lanes::<E>(E::add(va, vb));
        let prod = lanes::<E>(E::mul(va, vb));
        let fma = lanes::<E>(E::fmadd(va, two, vb));
        let fnma = lanes::<E>(E::fnmadd(va, two, vb));
        let lo = lanes::<E>(E::min(va, vb));
        let hi = lanes::<E>(E::max(va, vb));
        for i in 0..w {
            assert_eq!(sum[i], a[i] + b[i]);
            assert_eq!(prod[i], a[i] * b[i]);
            assert_eq!(fma[i], a[i] * 2.0 + b[i]);
            assert_eq!(fnma[i], b[i] - a[i] * 2.0);
            assert_eq!(lo[i], a[i].min(b[i]));
            assert_eq!(hi[i], a[i].max(b[i]));
        }

        assert!(lanes::<E>(E::zero()).iter().all(|&x| x == 0.0));
        assert!(lanes::<E>(E::max_value()).iter().all(|&x| x == f32::MAX));
    }
}

fn check_masks<E: VectorEngine<Dist = f32, Idx = u32>>() {
    let w = E::WIDTH;
    let a = ramp(w);
    let pivot = a[w / 2];
    unsafe {
        let va = E::load(a.as_ptr());
        let vp = E::set1(pivot);

        let le = E::mask_bits(E::compare_le(va, vp));
        let eq = E::mask_bits(E::compare_eq(va, vp));
        assert_eq!(le, (1u64 << (w / 2 + 1)) - 1);
        assert_eq!(eq, 1u64 << (w / 2));

        for n in 0..=w {
            let expected = if n == 64 { u64::MAX } else { (1u64 << n) - 1 };
            assert_eq!(E::mask_bits(E::mask_first(n)), expected, "mask_first({n})");
        }
        assert_eq!(E::mask_bits(E::mask_first(w + 3)), E::mask_bits(E::mask_first(w)));

        let picked = lanes::<E>(E::select(E::compare_le(va, vp), E::max_value(), va));
        for i in 0..w {
            let expected = if i <= w / 2 { a[i] } else { f32::MAX };
            assert_eq!(picked[i], expected);
        }
    }
}

fn check_reduce_and_compress<E: VectorEngine<Dist = f32, Idx = u32>>() {
    let w = E::WIDTH;
    // values descend so the last lanes hold the minimum; two lanes tie
    let mut v: Vec<f32> = (0..w).map(|i| (w - i) as f32).collect();
    v[0] = 1.0;
    unsafe {
        let vv = E::load(v.as_ptr());
        let all = E::mask_first(w);
        assert_eq!(E::reduce_min(all, vv), 1.0);
        assert_eq!(E::reduce_min(E::mask_first(w - 1), vv), 1.0);
        assert_eq!(E::reduce_min(E::mask_first(0), vv), f32::MAX);

        let tie = E::compare_eq(vv, E::set1(1.0));
        assert_eq!(E::mask_bits(tie).count_ones(), 2);

        let stair = E::staircase();
        let mut out = vec![u32::MAX; w];
        let written = E::compress_store(tie, stair, out.as_mut_ptr(), w);
        assert_eq!(written, 2);
        assert_eq!(&out[..2], &[0, (w - 1) as u32]);

        let mut out = vec![u32::MAX; w];
        let written = E::compress_store(tie, stair, out.as_mut_ptr(), 1);
        assert_eq!(written, 1);
        assert_eq!(out[0], 0);
        assert_eq!(out[1], u32::MAX);
    }
}

fn check_index_lanes<E: VectorEngine<Dist = f32, Idx = u32>>() {
    let w = E::WIDTH;
    unsafe {
        let stair = ids::<E>(E::staircase());
        assert_eq!(stair, (0..w as u32).collect::<Vec<_>>());

        let shifted = ids::<E>(E::idx_add(E::staircase(), E::idx_set1(100)));
        assert_eq!(shifted, (100..100 + w as u32).collect::<Vec<_>>());

        let half = E::mask_first(w / 2);
        let mixed = ids::<E>(E::idx_select(half, E::idx_set1(7), E::staircase()));
        for (i, &id) in mixed.iter().enumerate() {
            assert_eq!(id, if i < w / 2 { i as u32 } else { 7 });
        }
    }
}

fn check_masked_load<E: VectorEngine<Dist = f32, Idx = u32>>() {
    let w = E::WIDTH;
    // only the first three lanes are backed by memory
    let src = [3.0f32, 1.0, 2.0];
    unsafe {
        let v = lanes::<E>(E::load_masked(E::mask_first(3), src.as_ptr(), E::max_value()));
        assert_eq!(&v[..3], &src);
        assert!(v[3..w].iter().all(|&x| x == f32::MAX));
    }
}

fn check_packing<E: PackedEngine>() {
    let w = E::WIDTH;
    let id_mask = 0xFFu32;
    let dist: Vec<f32> = (0..w).map(|i| 1.0 + i as f32 * 0.37).collect();
    unsafe {
        let id = E::idx_add(E::staircase(), E::idx_set1(200));
        let packed = E::pack(E::load(dist.as_ptr()), id, id_mask);
        let (d, i) = E::unpack(packed, id_mask);
        let d = lanes::<E>(d);
        let i = ids::<E>(i);
        for lane in 0..w {
            assert_eq!(i[lane], 200 + lane as u32);
            assert_eq!(d[lane].to_bits(), dist[lane].to_bits() & !id_mask);
        }
    }
}

fn check_all<E: PackedEngine>() {
    check_arithmetic::<E>();
    check_masks::<E>();
    check_reduce_and_compress::<E>();
    check_index_lanes::<E>();
    check_masked_load::<E>();
    check_packing::<E>();
}

#[test]
fn test_portable32_conformance() {
    check_all::<Portable32>();
}

#[test]
fn test_portable_half_lanes() {
    use half::f16;
    type E = PortableHalf;
    unsafe {
        let a: Vec<f16> = (0..E::WIDTH).map(|i| f16::from_f32(i as f32)).collect();
        let va = E::load(a.as_ptr());
        let out = lanes::<E>(E::fnmadd(va, E::set1(f16::from_f32(2.0)), E::set1(f16::from_f32(100.0))));
        for (i, x) in out.iter().enumerate() {
            assert_eq!(x.to_f32(), 100.0 - 2.0 * i as f32);
        }
        assert_eq!(E::reduce_min(E::mask_first(E::WIDTH), va).to_f32(), 0.0);
        assert_eq!(E::mask_bits(E::mask_first(E::WIDTH)), u32::MAX as u64);
        let stair = ids::<E>(E::staircase());
        assert_eq!(stair[31], 31u16);
    }
}

#[cfg(target_arch = "x86_64")]
#[test]
fn test_engine256_conformance() {
    if !super::VectorEngineType::Engine256.is_available() {
        eprintln!("AVX2/FMA not available, skipping");
        return;
    }
    check_all::<super::SimdEngine256>();
}

#[cfg(all(target_arch = "x86_64", feature = "avx512"))]
#[test]
fn test_engine512_conformance() {
    if !super::VectorEngineType::Engine512.is_available() {
        eprintln!("AVX-512F not available, skipping");
        return;
    }
    check_all::<super::SimdEngine512>();
}

#[cfg(target_arch = "aarch64")]
#[test]
fn test_engine128_conformance() {
    check_all::<super::SimdEngine128>();
}
