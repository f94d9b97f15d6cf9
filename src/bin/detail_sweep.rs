use pyramid_synth::animation::DetailAnimator;
use pyramid_synth::config::sweep::{self, SweepConfig};
use pyramid_synth::diagnostics::TimingBreakdown;
use pyramid_synth::image::io::{load_rgba_image, save_rgba_u8, write_json_file};
use pyramid_synth::SynthEngine;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::path::Path;
use std::time::Instant;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = sweep::load_config(Path::new(&config_path))?;
    let total_start = Instant::now();

    let mut engine = SynthEngine::with_options(config.engine).map_err(|e| e.to_string())?;
    let image = load_rgba_image(&config.input, engine.resolution())?;
    let decomposition = engine
        .decompose_image(&image)
        .map_err(|e| format!("Decomposition failed: {e}"))?;
    println!(
        "Decomposed {} into {} levels in {:.3} ms",
        config.input.display(),
        decomposition.levels.len(),
        decomposition.timing.total_ms
    );

    let mut animator = DetailAnimator::new(config.sweep.speed);
    let details: Vec<f64> = (0..config.sweep.frames)
        .map(|_| animator.advance(config.sweep.dt))
        .collect();

    let render_start = Instant::now();
    let frames = render_frames(&engine, &details, &config)?;
    let render_ms = render_start.elapsed().as_secs_f64() * 1000.0;

    let res = engine.resolution();
    for (i, bytes) in frames.iter().enumerate() {
        let path = config.output.frame_dir.join(format!("frame_{i:04}.png"));
        save_rgba_u8(bytes, res, res, &path)?;
    }
    println!(
        "Saved {} frames to {}",
        frames.len(),
        config.output.frame_dir.display()
    );

    if let Some(path) = &config.output.timing_json {
        let mut timing = TimingBreakdown::with_total(total_start.elapsed().as_secs_f64() * 1000.0);
        timing.push("decompose", decomposition.timing.total_ms);
        timing.push("render", render_ms);
        write_json_file(path, &timing)?;
    }

    Ok(())
}

/// Each frame renders on its own engine copy with a frame-indexed seed, so the
/// sequential and parallel builds produce identical frames.
fn render_frame(engine: &SynthEngine, t: f64, seed: u64) -> Result<Vec<u8>, String> {
    let mut frame_engine = engine.clone();
    let mut rng = StdRng::seed_from_u64(seed);
    frame_engine
        .resynthesize(t, &mut rng)
        .map_err(|e| format!("Resynthesis at t={t} failed: {e}"))?;
    Ok(frame_engine.flatten_output())
}

#[cfg(not(feature = "parallel"))]
fn render_frames(
    engine: &SynthEngine,
    details: &[f64],
    config: &SweepConfig,
) -> Result<Vec<Vec<u8>>, String> {
    details
        .iter()
        .enumerate()
        .map(|(i, &t)| render_frame(engine, t, config.sweep.seed.wrapping_add(i as u64)))
        .collect()
}

#[cfg(feature = "parallel")]
fn render_frames(
    engine: &SynthEngine,
    details: &[f64],
    config: &SweepConfig,
) -> Result<Vec<Vec<u8>>, String> {
    use rayon::prelude::*;

    details
        .par_iter()
        .enumerate()
        .map(|(i, &t)| render_frame(engine, t, config.sweep.seed.wrapping_add(i as u64)))
        .collect()
}

fn usage() -> String {
    "Usage: detail_sweep <config.json>".to_string()
}
