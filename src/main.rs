use pyramid_synth::SynthEngine;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    // Demo stub: decomposes a synthetic gradient and resynthesizes it at a few
    // detail levels.
    let res = 64usize;
    let mut pixels = Vec::with_capacity(res * res * 4);
    for y in 0..res {
        for x in 0..res {
            pixels.extend_from_slice(&[(x * 4) as f32, (y * 4) as f32, 128.0, 255.0]);
        }
    }

    let mut engine = match SynthEngine::new(res) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };
    if let Err(err) = engine.decompose(&pixels) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    let mut rng = StdRng::seed_from_u64(0);
    for t in [0.0f64, 0.5, 1.0] {
        match engine.resynthesize(t, &mut rng) {
            Ok(level) => {
                let bytes = engine.flatten_output();
                let mean_r =
                    bytes.chunks_exact(4).map(|px| px[0] as f64).sum::<f64>() / (res * res) as f64;
                println!("t={t:.2} level={level} mean_r={mean_r:.2}");
            }
            Err(err) => eprintln!("Error: {err}"),
        }
    }
}
