// tests/boundaries.rs
// Envelope edges of knn_l2sqr: empty inputs, largest supported shapes and
// the first unsupported ones.

mod common;

use common::{brute_force_knn, random_points};
use ferrous_topk::{KernelVariant, KnnParams, Unsupported, knn_l2sqr, knn_l2sqr_into};

fn exact() -> KnnParams<'static> {
    KnnParams { kernel: Some(KernelVariant::Fp32), ..Default::default() }
}

#[test]
fn test_zero_references_all_missing() {
    let queries = random_points(1, 20, 4, 0.0, 1.0);
    let out = knn_l2sqr(&queries, &[], 4, 3, &exact()).unwrap();
    assert_eq!(out.distances.len(), 60);
    assert!(out.ids.iter().all(|&id| id == -1));
    assert!(out.distances.iter().all(|&d| d == f32::INFINITY));
}

#[test]
fn test_zero_queries_and_zero_k() {
    let references = random_points(2, 10, 4, 0.0, 1.0);
    let out = knn_l2sqr(&[], &references, 4, 3, &exact()).unwrap();
    assert!(out.distances.is_empty() && out.ids.is_empty());

    let queries = random_points(3, 5, 4, 0.0, 1.0);
    let out = knn_l2sqr(&queries, &references, 4, 0, &exact()).unwrap();
    assert!(out.distances.is_empty());
}

#[test]
fn test_largest_k_and_dim() {
    let dim = 32;
    let k = 24;
    let queries = random_points(4, 30, dim, -1.0, 1.0);
    let references = random_points(5, 300, dim, -1.0, 1.0);
    let truth = brute_force_knn(&queries, &references, dim, k);

    for variant in [KernelVariant::Fp32, KernelVariant::Fp32Packed] {
        let params = KnnParams { kernel: Some(variant), ..Default::default() };
        let out = knn_l2sqr(&queries, &references, dim, k, &params).unwrap();
        let mut hits = 0;
        for (q, expected) in truth.iter().enumerate() {
            let (_, ids) = out.row(q);
            hits += ids.iter().filter(|id| expected.iter().any(|(_, e)| e == *id)).count();
        }
        assert!(hits as f64 >= 0.98 * (30 * k) as f64, "{variant}: {hits}");
    }
}

#[test]
fn test_k_larger_than_reference_count() {
    let queries = random_points(6, 9, 3, 0.0, 1.0);
    let references = random_points(7, 4, 3, 0.0, 1.0);
    for variant in [KernelVariant::Fp32, KernelVariant::Fp16, KernelVariant::Fp32Packed, KernelVariant::Fp32PackedApprox] {
        let params = KnnParams { kernel: Some(variant), ..Default::default() };
        let out = knn_l2sqr(&queries, &references, 3, 10, &params).unwrap();
        for q in 0..9 {
            let (dis, ids) = out.row(q);
            let mut real: Vec<i64> = ids[..4].to_vec();
            real.sort();
            assert_eq!(real, vec![0, 1, 2, 3], "{variant}");
            assert!(ids[4..].iter().all(|&id| id == -1), "{variant}");
            assert!(dis[4..].iter().all(|&d| d == f32::INFINITY), "{variant}");
        }
    }
}

#[test]
fn test_full_id_range() {
    let references = random_points(8, 65_536, 1, 0.0, 1.0);
    let queries = [0.25f32, 0.75];
    let out = knn_l2sqr(&queries, &references, 1, 2, &exact()).unwrap();
    let truth = brute_force_knn(&queries, &references, 1, 2);
    for q in 0..2 {
        assert!((out.row(q).0[0] - truth[q][0].0).abs() < 1e-6);
    }
}

#[test]
fn test_last_id_of_full_range_on_every_variant() {
    // 65536 points: the last id fills the widest packing mask and equals the
    // 16-bit empty-level id of the half kernel
    let n = 65_536;
    let mut references = vec![10.0f32; 2 * n];
    references[2 * (n - 1)..].copy_from_slice(&[0.0, 0.0]);
    references[2..4].copy_from_slice(&[1.0, 0.0]);
    let queries = [0.0f32, 0.0, 0.2, 0.0, 1.0, 0.0];
    let expected = [([0.0f32, 1.0], [65_535i64, 1]), ([0.04, 0.64], [65_535, 1]), ([0.0, 1.0], [1, 65_535])];

    for variant in [KernelVariant::Fp32, KernelVariant::Fp16, KernelVariant::Fp32Packed, KernelVariant::Fp32PackedApprox] {
        let params = KnnParams { kernel: Some(variant), ..Default::default() };
        let out = knn_l2sqr(&queries, &references, 2, 2, &params).unwrap();
        for (q, (dis, ids)) in expected.iter().enumerate() {
            let (got_dis, got_ids) = out.row(q);
            assert_eq!(got_ids, ids, "{variant} query {q}");
            for (g, e) in got_dis.iter().zip(dis) {
                assert!((g - e).abs() < 0.02, "{variant} query {q}: {g} vs {e}");
            }
        }
    }
}

#[test]
fn test_out_of_envelope_requests_fail() {
    let p = exact();
    let too_many = vec![0.0f32; 65_537];
    assert_eq!(
        knn_l2sqr(&[0.0], &too_many, 1, 1, &p).unwrap_err(),
        Unsupported::TooManyReferences { n: 65_537, max: 65_536 }
    );
    assert_eq!(
        knn_l2sqr(&[0.0], &[1.0], 1, 25, &p).unwrap_err(),
        Unsupported::KOutOfRange { k: 25, max: 24 }
    );
    assert_eq!(
        knn_l2sqr(&[0.0; 33], &[1.0; 33], 33, 1, &p).unwrap_err(),
        Unsupported::DimensionOutOfRange { dim: 33, max: 32 }
    );
    assert!(knn_l2sqr(&[0.0; 33], &[1.0; 33], 33, 1, &p).unwrap_err().is_capability_failure());
}

#[test]
fn test_undersized_output_buffers() {
    let mut dis = vec![0.0f32; 5];
    let mut ids = vec![0i64; 6];
    let err = knn_l2sqr_into(&[0.0; 6], &[1.0; 3], 3, 3, &exact(), &mut dis, &mut ids).unwrap_err();
    assert_eq!(err, Unsupported::ShapeMismatch { what: "distances buffer", expected: 6, got: 5 });
    assert!(!err.is_capability_failure());
}
