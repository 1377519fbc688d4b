// tests/get_min_k.rs
// Array kernel: ordering, ties, level depth and the failure envelope.

use ferrous_topk::{GetMinKKernel, GetMinKParams, Unsupported, VectorEngineType, get_min_k, get_min_k_into};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn params(kernel: GetMinKKernel) -> GetMinKParams {
    GetMinKParams { kernel: Some(kernel), ..Default::default() }
}

fn engines() -> Vec<VectorEngineType> {
    VectorEngineType::compiled().into_iter().filter(|e| e.is_available()).collect()
}

#[test]
fn test_full_depth_matches_sort() {
    let mut rng = StdRng::seed_from_u64(51);
    for engine in engines() {
        for n in [5usize, 100, 999, 4096] {
            let values: Vec<f32> = (0..n).map(|_| rng.gen_range(0.0..10.0)).collect();
            let k = 12.min(n);
            let p = GetMinKParams { kernel: Some(GetMinKKernel::Fp32), engine: Some(engine), n_levels: Some(k) };
            let out = get_min_k(&values, k, &p).unwrap();

            let mut sorted = values.clone();
            sorted.sort_by(f32::total_cmp);
            assert_eq!(out.distances, sorted[..k].to_vec(), "{engine:?} n={n}");
            for (d, &id) in out.distances.iter().zip(&out.ids) {
                assert_eq!(values[id as usize], *d);
            }
        }
    }
}

#[test]
fn test_default_depth_is_close() {
    let mut rng = StdRng::seed_from_u64(52);
    let values: Vec<f32> = (0..2000).map(|_| rng.gen_range(0.0..1.0)).collect();
    let k = 10;
    let out = get_min_k(&values, k, &params(GetMinKKernel::Fp32)).unwrap();
    let mut sorted = values.clone();
    sorted.sort_by(f32::total_cmp);
    let hits = out.distances.iter().filter(|d| sorted[..k].contains(d)).count();
    assert!(hits >= 8, "{hits} of {k}");
    assert!(out.distances.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_ties_are_all_reported() {
    let mut values = vec![5.0f32; 300];
    for i in [3usize, 77, 150, 299] {
        values[i] = 1.0;
    }
    for engine in engines() {
        let p = GetMinKParams { kernel: Some(GetMinKKernel::Fp32), engine: Some(engine), n_levels: Some(6) };
        let out = get_min_k(&values, 6, &p).unwrap();
        assert_eq!(&out.distances[..4], &[1.0; 4]);
        let mut first: Vec<i32> = out.ids[..4].to_vec();
        first.sort();
        assert_eq!(first, vec![3, 77, 150, 299], "{engine:?}");
        assert_eq!(&out.distances[4..], &[5.0, 5.0]);
        assert_ne!(out.ids[4], out.ids[5]);
    }
}

#[test]
fn test_packed_kernel() {
    let values: Vec<f32> = (0..1000).map(|i| ((i * 37) % 1000) as f32 * 0.5).collect();
    for engine in engines() {
        let p = GetMinKParams { kernel: Some(GetMinKKernel::Fp32Packed), engine: Some(engine), n_levels: None };
        let out = get_min_k(&values, 5, &p).unwrap();
        assert_eq!(out.distances, vec![0.0, 0.5, 1.0, 1.5, 2.0], "{engine:?}");
        for (d, &id) in out.distances.iter().zip(&out.ids) {
            assert_eq!(values[id as usize], *d);
        }
    }
}

#[test]
fn test_packed_rejects_negative_and_non_finite() {
    let p = params(GetMinKKernel::Fp32Packed);
    assert_eq!(get_min_k(&[0.0, -1.0e-3], 1, &p).unwrap_err(), Unsupported::NegativeValues);
    assert_eq!(get_min_k(&[f32::INFINITY, 2.0], 1, &p).unwrap_err(), Unsupported::NegativeValues);
    // the exact kernel accepts negative values
    let out = get_min_k(&[0.0, -1.0, 3.0], 2, &params(GetMinKKernel::Fp32)).unwrap();
    assert_eq!(out.ids, vec![1, 0]);
}

#[test]
fn test_envelope() {
    let p = params(GetMinKKernel::Fp32);
    assert_eq!(get_min_k(&[1.0], 25, &p).unwrap_err(), Unsupported::KOutOfRange { k: 25, max: 24 });
    assert!(matches!(
        get_min_k(&[1.0; 10], 5, &GetMinKParams { n_levels: Some(25), ..p }),
        Err(Unsupported::LevelsOutOfRange { .. })
    ));
    let out = get_min_k(&[], 4, &p).unwrap();
    assert_eq!(out.ids, vec![-1; 4]);

    let mut dis = [0.0f32; 2];
    let mut ids = [0i32; 3];
    assert!(matches!(
        get_min_k_into(&[1.0, 2.0, 3.0], 3, &p, &mut dis, &mut ids),
        Err(Unsupported::ShapeMismatch { .. })
    ));
}

#[test]
fn test_values_at_float_max_may_read_as_missing() {
    // f32::MAX is also the empty-level value, so such inputs are not
    // guaranteed a slot; everything below it still is
    for values in [[1.0f32, f32::MAX, 2.0], [1.0, f32::INFINITY, 2.0]] {
        let out = get_min_k(&values, 3, &params(GetMinKKernel::Fp32)).unwrap();
        assert_eq!(&out.ids[..2], &[0, 2]);
        assert_eq!(&out.distances[..2], &[1.0, 2.0]);
        assert!(out.ids[2] == 1 || out.ids[2] == -1, "{:?}", out.ids);
    }
}
