use pixelmeter::config::stages::{self, StageOutputConfig};
use pixelmeter::diagnostics::{report_line, AnalysisReport};
use pixelmeter::image::io::{
    load_grayscale_image, save_mask, save_normalized_f32, save_rgb, write_json_file, GrayImageU8,
};
use pixelmeter::render;
use pixelmeter::{AlignmentAnalyzer, AnalysisOutcome};
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
    let config = stages::load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    let analyzer = AlignmentAnalyzer::new(config.params);
    let outcome = analyzer.process_with_stages(gray.as_view());

    let name = display_name(&config.input);
    println!(
        "{}",
        report_line(&name, outcome.report.summary.aligned_ratio)
    );
    print_text_summary(&outcome.report);
    write_artifacts(&config.output, &gray, &outcome)?;
    Ok(())
}

fn print_text_summary(report: &AnalysisReport) {
    let summary = &report.summary;
    println!("  total length: {}", summary.total_length);
    println!("  aligned length: {}", summary.aligned_length);
    println!("  skeleton pixels: {}", summary.skeleton_pixels);
    println!(
        "  runs: {} total, {} measured, {} aligned, {} short",
        summary.segments_total,
        summary.segments_measured,
        summary.segments_aligned,
        report.trace.segments.discarded_short
    );

    let timings = &report.trace.timings;
    let stages: Vec<String> = timings
        .stages
        .iter()
        .map(|stage| format!("{}={:.3}", stage.label, stage.elapsed_ms))
        .collect();
    println!(
        "\nTimings (ms): {} total={:.3}",
        stages.join(" "),
        timings.total_ms
    );
}

fn write_artifacts(
    output: &StageOutputConfig,
    gray: &GrayImageU8,
    outcome: &AnalysisOutcome,
) -> Result<(), String> {
    let artifacts = &outcome.artifacts;
    if let Some(path) = &output.montage {
        save_rgb(&render::render_stage_panels(gray.as_view(), artifacts), path)?;
        println!("Montage written to {}", path.display());
    }
    if let Some(path) = &output.gradient_image {
        save_normalized_f32(&artifacts.gradient_magnitude, path)?;
        println!("Gradient magnitude written to {}", path.display());
    }
    if let Some(path) = &output.edge_mask_image {
        save_mask(&artifacts.edge_mask, path)?;
        println!("Edge mask written to {}", path.display());
    }
    if let Some(path) = &output.skeleton_image {
        save_mask(&artifacts.skeleton, path)?;
        println!("Skeleton written to {}", path.display());
    }
    if let Some(path) = &output.report_json {
        write_json_file(path, &outcome.report)?;
        println!("JSON report written to {}", path.display());
    }
    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn usage() -> String {
    "Usage: skeleton_stages <config.json>".to_string()
}
