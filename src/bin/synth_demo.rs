use pyramid_synth::config::synth;
use pyramid_synth::diagnostics::{DecompositionReport, SynthesisReport};
use pyramid_synth::image::io::{load_rgba_image, save_rgba_f32, write_json_file};
use pyramid_synth::SynthEngine;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = synth::load_config(Path::new(&config_path))?;

    let mut engine = SynthEngine::with_options(config.engine).map_err(|e| e.to_string())?;
    let res = engine.resolution();
    let image = load_rgba_image(&config.input, res)?;
    let decomposition = engine
        .decompose_image(&image)
        .map_err(|e| format!("Decomposition failed: {e}"))?;

    let mut rng = match config.synthesis.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut renders = Vec::with_capacity(config.synthesis.details.len());
    for (i, &t) in config.synthesis.details.iter().enumerate() {
        let report = engine
            .resynthesize_with_diagnostics(t, &mut rng)
            .map_err(|e| format!("Resynthesis at t={t} failed: {e}"))?;
        let path = config
            .output
            .image_dir
            .join(format!("synth_{i:02}_level{}.png", report.level_index));
        save_rgba_f32(engine.output(), &path)?;
        println!(
            "t={:.3} -> level {} ({}x{}) saved to {}",
            report.detail,
            report.level_index,
            report.level_resolution,
            report.level_resolution,
            path.display()
        );
        renders.push(report);
    }

    if let Some(path) = &config.output.report_json {
        let summary = DemoSummary {
            input: config.input.display().to_string(),
            decomposition,
            renders,
        };
        write_json_file(path, &summary)?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: synth_demo <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DemoSummary {
    input: String,
    decomposition: DecompositionReport,
    renders: Vec<SynthesisReport>,
}
