use pixelmeter::config::batch::{self, BatchOutputConfig};
use pixelmeter::diagnostics::{report_line, AlignmentSummary};
use pixelmeter::image::io::{load_grayscale_image, save_rgb, write_json_file};
use pixelmeter::render;
use pixelmeter::AlignmentAnalyzer;
use rayon::prelude::*;
use serde::Serialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageSummary {
    name: String,
    summary: AlignmentSummary,
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = batch::load_config(Path::new(&config_path))?;

    let mut files: Vec<PathBuf> = fs::read_dir(&config.input_dir)
        .map_err(|e| {
            format!(
                "Failed to read directory {}: {e}",
                config.input_dir.display()
            )
        })?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    // Sorted processing keeps the report order stable across runs.
    files.sort();

    let analyzer = AlignmentAnalyzer::new(config.params);
    let results: Vec<(String, Result<AlignmentSummary, String>)> = if config.parallel {
        files
            .par_iter()
            .map(|path| analyze_one(&analyzer, path, &config.output))
            .collect()
    } else {
        files
            .iter()
            .map(|path| analyze_one(&analyzer, path, &config.output))
            .collect()
    };

    let mut summaries = Vec::new();
    let mut failures = 0usize;
    for (name, result) in results {
        match result {
            Ok(summary) => {
                println!("{}", report_line(&name, summary.aligned_ratio));
                summaries.push(ImageSummary { name, summary });
            }
            Err(err) => {
                failures += 1;
                eprintln!("{err}");
            }
        }
    }

    if let Some(path) = &config.output.summaries_json {
        write_json_file(path, &summaries)?;
        println!("JSON summaries written to {}", path.display());
    }
    println!(
        "Analyzed {} image(s), {} failure(s)",
        summaries.len(),
        failures
    );
    Ok(())
}

fn analyze_one(
    analyzer: &AlignmentAnalyzer,
    path: &Path,
    output: &BatchOutputConfig,
) -> (String, Result<AlignmentSummary, String>) {
    let name = display_name(path);
    let gray = match load_grayscale_image(path) {
        Ok(gray) => gray,
        Err(_) => {
            // Non-image files in a scanned directory are routine; the batch
            // log stays terse and the run continues.
            let message = format!("Failed to load image: {name}");
            return (name, Err(message));
        }
    };
    let result = if let Some(dir) = &output.montage_dir {
        let outcome = analyzer.process_with_stages(gray.as_view());
        let montage = render::render_stage_panels(gray.as_view(), &outcome.artifacts);
        save_rgb(&montage, &montage_path(dir, path)).map(|()| outcome.report.summary)
    } else {
        Ok(analyzer.process(gray.as_view()))
    };
    (name, result)
}

fn montage_path(dir: &Path, input: &Path) -> PathBuf {
    // Keyed by the full file name, so frame.png and frame.jpg map to
    // distinct montages.
    let name = input
        .file_name()
        .map(|name| name.to_string_lossy().replace('.', "_"))
        .unwrap_or_else(|| "image".to_string());
    dir.join(format!("{name}_stages.png"))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn usage() -> String {
    "Usage: alignment_report <config.json>".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelmeter::AnalyzerParams;

    #[test]
    fn montage_names_distinguish_same_stem_inputs() {
        let dir = Path::new("out");
        let png = montage_path(dir, Path::new("frames/a.png"));
        let jpg = montage_path(dir, Path::new("frames/a.jpg"));
        assert_eq!(png, Path::new("out/a_png_stages.png"));
        assert_ne!(png, jpg);
    }

    #[test]
    fn unloadable_files_report_by_name() {
        let analyzer = AlignmentAnalyzer::new(AnalyzerParams::default());
        let (name, result) = analyze_one(
            &analyzer,
            Path::new("missing-dir/frame.png"),
            &BatchOutputConfig::default(),
        );
        assert_eq!(name, "frame.png");
        assert_eq!(result.unwrap_err(), "Failed to load image: frame.png");
    }
}
