mod common;

use common::synthetic_image::{pixel_checker_rgba, ramp_rgba, uniform_rgba};
use pyramid_synth::SynthEngine;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn detail_zero_is_deterministic_mean_broadcast() {
    let _ = env_logger::builder().is_test(true).try_init();
    let res = 16usize;
    let mut engine = SynthEngine::new(res).unwrap();
    engine.decompose(&ramp_rgba(res)).unwrap();
    let mean = engine.target().levels[0].color.mean;

    let mut first = None;
    for seed in [1u64, 2, 3] {
        let level = engine
            .resynthesize(0.0, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        assert_eq!(level, 0);
        let out = engine.output();
        assert_eq!(out.w, res);
        assert!(out
            .data
            .iter()
            .all(|px| *px == [mean.x, mean.y, mean.z, 255.0]));
        let bytes = engine.flatten_output();
        match &first {
            None => first = Some(bytes),
            Some(prev) => assert_eq!(prev, &bytes),
        }
    }
}

#[test]
fn alpha_is_opaque_and_bytes_cover_the_image() {
    let res = 32usize;
    let mut engine = SynthEngine::new(res).unwrap();
    engine.decompose(&ramp_rgba(res)).unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    for i in 0..=20 {
        let t = i as f64 / 20.0;
        engine.resynthesize(t, &mut rng).unwrap();
        assert!(engine.output().data.iter().all(|px| px[3] == 255.0));
        let bytes = engine.flatten_output();
        assert_eq!(bytes.len(), res * res * 4);
        assert!(bytes.chunks_exact(4).all(|px| px[3] == 255));
    }
}

#[test]
fn uniform_image_round_trips_at_every_detail() {
    let px = [128.0, 128.0, 128.0, 255.0];
    for res in [1usize, 2, 4, 16, 64] {
        let upload = uniform_rgba(res, px);
        let expected: Vec<u8> = upload.iter().map(|&v| v as u8).collect();
        let mut engine = SynthEngine::new(res).unwrap();
        engine.decompose(&upload).unwrap();

        let mut rng = StdRng::seed_from_u64(res as u64);
        for t in [0.0, 0.5, 1.0] {
            engine.resynthesize(t, &mut rng).unwrap();
            assert_eq!(engine.flatten_output(), expected, "res={res} t={t}");
        }
    }
}

#[test]
fn four_by_four_gray_scenario() {
    let res = 4usize;
    let mut engine = SynthEngine::new(res).unwrap();
    engine
        .decompose(&uniform_rgba(res, [128.0, 128.0, 128.0, 255.0]))
        .unwrap();
    let mut rng = StdRng::seed_from_u64(0);

    assert_eq!(engine.resynthesize(0.0, &mut rng).unwrap(), 0);
    let coarse = engine.flatten_output();
    assert_eq!(engine.resynthesize(1.0, &mut rng).unwrap(), 2);
    let fine = engine.flatten_output();

    assert_eq!(coarse.len(), 64);
    assert_eq!(coarse, fine);
    assert!(coarse
        .chunks_exact(4)
        .all(|px| px == [128, 128, 128, 255]));
}

#[test]
fn finest_level_variance_matches_delta_std() {
    let res = 64usize;
    let base = 128.0f32;
    let amp = [20.0f32, 8.0, 0.0];
    let mut engine = SynthEngine::new(res).unwrap();
    engine
        .decompose(&pixel_checker_rgba(res, base, amp))
        .unwrap();
    // Output variance at full detail is the sum of delta variances over
    // levels 1..k; on a per-pixel checker only the finest term is nonzero.
    let delta_std = engine.target().finest().unwrap().delta.std;

    let mut rng = StdRng::seed_from_u64(2024);
    let draws = 20;
    let mut sum = [0.0f64; 4];
    let mut sum_sq = [0.0f64; 4];
    let mut n = 0.0f64;
    for _ in 0..draws {
        engine.resynthesize(1.0, &mut rng).unwrap();
        for px in &engine.output().data {
            for c in 0..4 {
                let v = px[c] as f64;
                sum[c] += v;
                sum_sq[c] += v * v;
            }
            n += 1.0;
        }
    }

    for c in 0..3 {
        let mean = sum[c] / n;
        let var = sum_sq[c] / n - mean * mean;
        let expected = (delta_std[c] as f64).powi(2);
        assert!(
            (mean - base as f64).abs() < 0.5,
            "channel {c}: mean {mean} drifted from {base}"
        );
        if expected == 0.0 {
            assert!(var.abs() < 1e-6, "channel {c}: variance {var}, expected 0");
        } else {
            let rel = (var - expected).abs() / expected;
            assert!(
                rel < 0.05,
                "channel {c}: variance {var} vs expected {expected} (rel {rel:.4})"
            );
        }
    }
    let alpha_var = sum_sq[3] / n - (sum[3] / n).powi(2);
    assert!(alpha_var.abs() < 1e-6);
}

#[test]
fn full_detail_variance_sums_delta_variances_over_levels() {
    let res = 8usize;
    let mut engine = SynthEngine::new(res).unwrap();
    engine.decompose(&ramp_rgba(res)).unwrap();
    let levels = &engine.target().levels;
    let global = levels[0].color.mean;
    let expected: Vec<f64> = (0..3)
        .map(|c| {
            levels[1..]
                .iter()
                .map(|l| (l.delta.std[c] as f64).powi(2))
                .sum()
        })
        .collect();

    let mut rng = StdRng::seed_from_u64(31);
    let draws = 4000;
    let mut sum_sq = [0.0f64; 3];
    let mut n = 0.0f64;
    for _ in 0..draws {
        engine.resynthesize(1.0, &mut rng).unwrap();
        for px in &engine.output().data {
            for c in 0..3 {
                let d = (px[c] - global[c]) as f64;
                sum_sq[c] += d * d;
            }
            n += 1.0;
        }
    }

    for c in 0..3 {
        assert!(expected[c] > 0.0, "channel {c}: ramp should carry detail");
        let var = sum_sq[c] / n;
        let rel = (var - expected[c]).abs() / expected[c];
        assert!(
            rel < 0.05,
            "channel {c}: variance {var} vs summed delta variance {} (rel {rel:.4})",
            expected[c]
        );
    }
}

#[test]
fn decimal_detail_halfway_selects_even_level() {
    // Resolution 32 has six levels: 0.1 × 5 lands exactly on 0.5.
    let res = 32usize;
    let mut engine = SynthEngine::new(res).unwrap();
    engine.decompose(&ramp_rgba(res)).unwrap();
    let mut rng = StdRng::seed_from_u64(4);
    assert_eq!(engine.resynthesize(0.1, &mut rng).unwrap(), 0);
    assert_eq!(engine.resynthesize(0.3, &mut rng).unwrap(), 2);
}

#[test]
fn same_seed_reproduces_output() {
    let res = 16usize;
    let upload = ramp_rgba(res);
    let mut a = SynthEngine::new(res).unwrap();
    let mut b = SynthEngine::new(res).unwrap();
    a.decompose(&upload).unwrap();
    b.decompose(&upload).unwrap();

    a.resynthesize(0.8, &mut StdRng::seed_from_u64(77)).unwrap();
    b.resynthesize(0.8, &mut StdRng::seed_from_u64(77)).unwrap();
    assert_eq!(a.output(), b.output());
}

#[test]
fn result_does_not_depend_on_previous_calls() {
    let res = 16usize;
    let upload = ramp_rgba(res);
    let mut warmed = SynthEngine::new(res).unwrap();
    let mut fresh = SynthEngine::new(res).unwrap();
    warmed.decompose(&upload).unwrap();
    fresh.decompose(&upload).unwrap();

    let mut scratch = StdRng::seed_from_u64(1);
    warmed.resynthesize(1.0, &mut scratch).unwrap();
    warmed.resynthesize(0.25, &mut scratch).unwrap();

    warmed.resynthesize(0.5, &mut StdRng::seed_from_u64(5)).unwrap();
    fresh.resynthesize(0.5, &mut StdRng::seed_from_u64(5)).unwrap();
    assert_eq!(warmed.output(), fresh.output());
}

#[test]
fn coarse_levels_magnify_into_blocks() {
    let res = 8usize;
    let mut engine = SynthEngine::new(res).unwrap();
    engine.decompose(&ramp_rgba(res)).unwrap();
    // Four levels: t = 1/3 selects level 1 (2×2), so 4×4 blocks.
    let level = engine
        .resynthesize(1.0 / 3.0, &mut StdRng::seed_from_u64(3))
        .unwrap();
    assert_eq!(level, 1);
    let out = engine.output();
    for y in 0..res {
        for x in 0..res {
            assert_eq!(out.get(x, y), out.get((x / 4) * 4, (y / 4) * 4));
        }
    }
}

#[test]
fn defaults_before_any_upload_produce_gray_with_noise() {
    let res = 32usize;
    let mut engine = SynthEngine::new(res).unwrap();
    let mut rng = StdRng::seed_from_u64(8);

    engine.resynthesize(0.0, &mut rng).unwrap();
    assert!(engine
        .flatten_output()
        .chunks_exact(4)
        .all(|px| px == [128, 128, 128, 255]));

    engine.resynthesize(1.0, &mut rng).unwrap();
    let out = engine.output();
    let first = out.data[0][0];
    assert!(out.data.iter().any(|px| px[0] != first));
}
