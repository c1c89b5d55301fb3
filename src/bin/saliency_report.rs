use saliency_detector::image::io::{load_rgb_image, save_normalized_f32, write_json_file};
use saliency_detector::{SaliencyDetector, SaliencyParams};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct ReportToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub params: SaliencyParams,
    pub output: ReportOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct ReportOutputConfig {
    #[serde(rename = "saliency_image")]
    pub saliency_image: PathBuf,
    #[serde(rename = "trace_json")]
    pub trace_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<ReportToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let image = load_rgb_image(&config.input)?;
    let detector = SaliencyDetector::new(config.params);
    let report = detector.process_with_diagnostics(&image)?;

    save_normalized_f32(&report.result.saliency, &config.output.saliency_image)?;
    write_json_file(&config.output.trace_json, &report.trace)?;

    println!(
        "Saved saliency map to {} ({} raw conspicuity maps, {:.1} ms)",
        config.output.saliency_image.display(),
        report.trace.conspicuity.raw_maps,
        report.trace.timings.total_ms
    );
    println!("Saved pipeline trace to {}", config.output.trace_json.display());

    Ok(())
}

fn usage() -> String {
    "Usage: saliency_report <config.json>".to_string()
}
