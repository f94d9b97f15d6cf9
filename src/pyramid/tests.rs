use super::*;
use crate::image::{ImageRgbaF32, CHANNELS};

fn ramp_image(side: usize) -> ImageRgbaF32 {
    let mut img = ImageRgbaF32::new(side, side);
    for y in 0..side {
        for x in 0..side {
            let v = (y * side + x) as f32;
            img.set(x, y, [v, 2.0 * v, 255.0 - v, 255.0]);
        }
    }
    img
}

#[test]
fn build_produces_power_of_two_levels_coarsest_first() {
    let pyr = Pyramid::build(16, false).unwrap();
    let sides: Vec<usize> = pyr.levels.iter().map(|l| l.resolution).collect();
    assert_eq!(sides, vec![1, 2, 4, 8, 16]);
    for level in &pyr.levels {
        assert_eq!(level.color.array.w, level.resolution);
        assert_eq!(level.delta.array.h, level.resolution);
        assert_eq!(level.color.mean, Vector4::zeros());
        assert_eq!(level.delta.std, Vector4::zeros());
    }
    assert_eq!(pyr.resolution(), 16);
    assert_eq!(pyr.scale_for_level(1), 8);
}

#[test]
fn build_resolution_one_has_single_level() {
    let pyr = Pyramid::build(1, false).unwrap();
    assert_eq!(pyr.len(), 1);
    assert_eq!(pyr.coarsest().map(|l| l.resolution), Some(1));
}

#[test]
fn build_seeded_defaults_fill_every_channel() {
    let pyr = Pyramid::build(8, true).unwrap();
    for level in &pyr.levels {
        assert_eq!(level.color.mean, Vector4::repeat(128.0));
        assert_eq!(level.delta.std, Vector4::repeat(16.0));
        assert_eq!(level.color.std, Vector4::zeros());
        assert_eq!(level.delta.mean, Vector4::zeros());
    }
}

#[test]
fn build_rejects_non_power_of_two() {
    for res in [0usize, 3, 12, 100] {
        assert_eq!(
            Pyramid::build(res, false).unwrap_err(),
            SynthError::InvalidResolution { resolution: res }
        );
    }
}

#[test]
fn level_count_matches_log2() {
    assert_eq!(level_count(1).unwrap(), 1);
    assert_eq!(level_count(256).unwrap(), 9);
}

#[test]
fn downsample_to_one_is_channel_mean() {
    let img = ramp_image(4);
    let out = downsample_box(&img, 1).unwrap();
    assert_eq!(out.w, 1);
    // Mean of 0..16 is 7.5.
    assert_eq!(out.get(0, 0), [7.5, 15.0, 247.5, 255.0]);
}

#[test]
fn downsample_averages_blocks() {
    let img = ramp_image(4);
    let out = downsample_box(&img, 2).unwrap();
    // Top-left block holds 0, 1, 4, 5.
    assert_eq!(out.get(0, 0)[0], 2.5);
    // Bottom-right block holds 10, 11, 14, 15.
    assert_eq!(out.get(1, 1)[0], 12.5);
}

#[test]
fn downsample_same_size_is_identity() {
    let img = ramp_image(4);
    assert_eq!(downsample_box(&img, 4).unwrap(), img);
}

#[test]
fn downsample_rejects_non_divisor() {
    let img = ramp_image(4);
    assert_eq!(
        downsample_box(&img, 3).unwrap_err(),
        SynthError::NonDivisibleResolution { side: 4, target: 3 }
    );
    assert!(downsample_box(&img, 0).is_err());
    assert!(downsample_box(&img, 8).is_err());
}

#[test]
fn upsample_replicates_blocks() {
    let img = ramp_image(2);
    let out = upsample_nearest(&img, 4).unwrap();
    assert_eq!(out.w, 4);
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(out.get(x, y), img.get(x / 2, y / 2));
        }
    }
}

#[test]
fn upsample_rejects_non_multiple() {
    let img = ramp_image(4);
    assert_eq!(
        upsample_nearest(&img, 6).unwrap_err(),
        SynthError::NonMultipleResolution { side: 4, target: 6 }
    );
    assert!(upsample_nearest(&img, 2).is_err());
}

#[test]
fn downsample_undoes_upsample() {
    let img = ramp_image(4);
    let up = upsample_nearest(&img, 16).unwrap();
    let back = downsample_box(&up, 4).unwrap();
    for (a, b) in back.data.iter().zip(&img.data) {
        for c in 0..CHANNELS {
            assert!((a[c] - b[c]).abs() < 1e-4);
        }
    }
}

#[test]
fn copy_stats_is_by_value() {
    let mut src = Pyramid::build(4, true).unwrap();
    let mut dst = Pyramid::build(4, false).unwrap();
    dst.copy_stats_from(&src);
    src.levels[0].color.mean = Vector4::repeat(1.0);
    assert_eq!(dst.levels[0].color.mean, Vector4::repeat(128.0));
    assert_eq!(dst.levels[2].delta.std, Vector4::repeat(16.0));
}
