mod common;

use common::synthetic_image::{
    diagonal_split_u8, horizontal_stripes_u8, vertical_step_u8, vertical_stripes_u8,
};
use pixelmeter::image::ImageU8;
use pixelmeter::{AlignmentAnalyzer, AnalyzerParams, ScanOrderKind};

fn image<'a>(buffer: &'a [u8], width: usize, height: usize) -> ImageU8<'a> {
    ImageU8 {
        w: width,
        h: height,
        stride: width,
        data: buffer,
    }
}

#[test]
fn horizontal_stripes_measure_fully_aligned() {
    let (width, height) = (64usize, 48usize);
    let buffer = horizontal_stripes_u8(width, height, 12);
    let analyzer = AlignmentAnalyzer::new(AnalyzerParams::default());
    let summary = analyzer.process(image(&buffer, width, height));

    assert!(
        summary.total_length > 0,
        "stripe boundaries should produce measurable runs"
    );
    assert_eq!(summary.aligned_length, summary.total_length);
    assert_eq!(summary.aligned_ratio, 100.0);
}

#[test]
fn single_vertical_edge_measures_fully_aligned() {
    let (width, height) = (64usize, 48usize);
    let buffer = vertical_step_u8(width, height);
    let analyzer = AlignmentAnalyzer::new(AnalyzerParams::default());
    let summary = analyzer.process(image(&buffer, width, height));

    // One step edge thins to one vertical skeleton line, which row-major
    // order walks as a single run.
    assert_eq!(summary.segments_measured, 1);
    assert_eq!(summary.aligned_ratio, 100.0);
}

#[test]
fn diagonal_edge_fragments_below_the_length_threshold() {
    let (width, height) = (64usize, 64usize);
    let buffer = diagonal_split_u8(width, height);
    let analyzer = AlignmentAnalyzer::new(AnalyzerParams::default());
    let summary = analyzer.process(image(&buffer, width, height));

    assert!(
        summary.skeleton_pixels > 0,
        "the diagonal edge should produce a skeleton"
    );
    assert_eq!(
        summary.total_length, 0,
        "diagonal staircase runs should all be shorter than min_length"
    );
    assert_eq!(summary.aligned_ratio, 0.0);
}

#[test]
fn flat_image_reports_zero_without_error() {
    let (width, height) = (32usize, 32usize);
    let buffer = vec![128u8; width * height];
    let analyzer = AlignmentAnalyzer::new(AnalyzerParams::default());
    let summary = analyzer.process(image(&buffer, width, height));

    assert_eq!(summary.skeleton_pixels, 0);
    assert_eq!(summary.segments_total, 0);
    assert_eq!(summary.total_length, 0);
    assert_eq!(summary.aligned_ratio, 0.0);
}

#[test]
fn connectivity_scan_recovers_interleaved_vertical_lines() {
    let (width, height) = (64usize, 48usize);
    let buffer = vertical_stripes_u8(width, height, 16);

    let row_major = AlignmentAnalyzer::new(AnalyzerParams::default())
        .process(image(&buffer, width, height));
    // Several parallel vertical skeleton lines interleave in row-major
    // order, so every run is a single pixel and nothing qualifies.
    assert_eq!(row_major.total_length, 0);
    assert_eq!(row_major.aligned_ratio, 0.0);
    assert!(row_major.skeleton_pixels > 0);

    let connected = AlignmentAnalyzer::new(AnalyzerParams {
        scan_order: ScanOrderKind::Connectivity,
        ..AnalyzerParams::default()
    })
    .process(image(&buffer, width, height));
    assert_eq!(connected.aligned_ratio, 100.0);
    assert_eq!(connected.total_length as usize, connected.skeleton_pixels);
}

#[test]
fn trace_census_is_consistent_with_the_summary() {
    let (width, height) = (64usize, 48usize);
    let buffer = horizontal_stripes_u8(width, height, 12);
    let analyzer = AlignmentAnalyzer::new(AnalyzerParams::default());
    let outcome = analyzer.process_with_stages(image(&buffer, width, height));

    let summary = &outcome.report.summary;
    let segments = &outcome.report.trace.segments;
    assert_eq!(segments.total, summary.segments_total);
    assert_eq!(segments.measured + segments.discarded_short, segments.total);
    assert_eq!(segments.samples.len(), segments.measured);
    assert!(summary.aligned_length <= summary.total_length);
    assert_eq!(
        segments.samples.iter().filter(|s| s.aligned).count(),
        summary.segments_aligned
    );
    assert_eq!(
        outcome.report.trace.skeleton.set_pixels,
        summary.skeleton_pixels
    );

    let timings = &outcome.report.trace.timings;
    let labels: Vec<&str> = timings.stages.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(
        labels,
        [
            "gradient",
            "threshold",
            "skeletonize",
            "scan_order",
            "extract",
            "aggregate"
        ]
    );
    // The stages cover a slice of the run, never more than all of it.
    assert!(timings.stage_sum_ms() <= timings.total_ms);
}

#[test]
fn busy_trace_caps_samples_but_counts_every_run() {
    // 601 stripes of four rows produce 600 boundary skeletons, well past
    // the trace sample cap.
    let (width, height) = (64usize, 2404usize);
    let buffer = horizontal_stripes_u8(width, height, 4);
    let analyzer = AlignmentAnalyzer::new(AnalyzerParams::default());
    let outcome = analyzer.process_with_stages(image(&buffer, width, height));

    let summary = &outcome.report.summary;
    let segments = &outcome.report.trace.segments;
    assert_eq!(segments.measured, 600);
    assert_eq!(segments.samples.len(), 512);
    assert!(segments.samples.iter().all(|s| s.aligned));
    // The counts and totals still reflect every measured run.
    assert_eq!(summary.segments_measured, 600);
    assert_eq!(summary.segments_aligned, 600);
    assert_eq!(summary.total_length, 600 * 62);
    assert_eq!(summary.aligned_ratio, 100.0);
}
