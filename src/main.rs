use saliency_detector::image::io::{load_rgb_image, save_normalized_f32};
use saliency_detector::{SaliencyDetector, SaliencyParams};
use std::env;
use std::path::{Path, PathBuf};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let impath = env::args().nth(1).ok_or_else(usage)?;
    let path = Path::new(&impath);
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| format!("Cannot derive an output name from {}", path.display()))?;

    let image = load_rgb_image(path)?;
    let detector = SaliencyDetector::new(SaliencyParams::default());
    let result = detector.process(&image)?;

    save_normalized_f32(&result.grayscale, &PathBuf::from(format!("{stem}_gray.png")))?;
    save_normalized_f32(
        &result.saliency,
        &PathBuf::from(format!("{stem}_saliency.png")),
    )?;
    for (i, (kernel, energy)) in result
        .gabor_kernels
        .iter()
        .zip(result.orientation_energy.iter())
        .enumerate()
    {
        save_normalized_f32(kernel, &PathBuf::from(format!("{stem}_gabor_{i}.png")))?;
        save_normalized_f32(energy, &PathBuf::from(format!("{stem}_gabored_{i}.png")))?;
    }

    println!(
        "Saved saliency outputs for {} ({}x{}, {:.1} ms)",
        path.display(),
        image.width(),
        image.height(),
        result.latency_ms
    );
    Ok(())
}

fn usage() -> String {
    "Usage: saliency-detector <image>".to_string()
}
