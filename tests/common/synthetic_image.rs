/// Flat RGBA buffer with every pixel set to `px`.
pub fn uniform_rgba(res: usize, px: [f32; 4]) -> Vec<f32> {
    assert!(res > 0, "resolution must be positive");
    px.iter().copied().cycle().take(res * res * 4).collect()
}

/// Integer-valued diagonal ramp with opaque alpha.
pub fn ramp_rgba(res: usize) -> Vec<f32> {
    assert!(res > 0, "resolution must be positive");
    let span = (res - 1).max(1);
    let mut out = Vec::with_capacity(res * res * 4);
    for y in 0..res {
        for x in 0..res {
            let r = ((x * 255) / span) as f32;
            let g = ((y * 255) / span) as f32;
            let b = ((x + 3 * y) % 256) as f32;
            out.extend_from_slice(&[r, g, b, 255.0]);
        }
    }
    out
}

/// Single-pixel checkerboard: `base ± amp` alternating per pixel.
///
/// Every 2×2 block averages to `base`, so all levels coarser than the finest
/// are uniform and only the finest level carries residual energy.
pub fn pixel_checker_rgba(res: usize, base: f32, amp: [f32; 3]) -> Vec<f32> {
    assert!(res > 0, "resolution must be positive");
    let mut out = Vec::with_capacity(res * res * 4);
    for y in 0..res {
        for x in 0..res {
            let sign = if (x + y) % 2 == 0 { 1.0 } else { -1.0 };
            out.extend_from_slice(&[
                base + sign * amp[0],
                base + sign * amp[1],
                base + sign * amp[2],
                255.0,
            ]);
        }
    }
    out
}
