use pixelmeter::image::ImageU8;
use pixelmeter::{AlignmentAnalyzer, AnalyzerParams};

fn main() {
    // Demo stub: builds a synthetic image with a strong vertical edge and
    // runs the analyzer over it.
    let w = 320usize;
    let h = 240usize;
    let stride = w; // tightly packed
    let mut gray = vec![0u8; w * h];
    for row in gray.chunks_mut(stride) {
        for (x, px) in row.iter_mut().enumerate() {
            *px = if x < w / 2 { 0 } else { 255 };
        }
    }
    let img = ImageU8 {
        w,
        h,
        stride,
        data: &gray,
    };

    let analyzer = AlignmentAnalyzer::new(AnalyzerParams::default());
    let summary = analyzer.process(img);
    println!(
        "aligned_ratio={:.2}% total={} aligned={} latency_ms={:.3}",
        summary.aligned_ratio, summary.total_length, summary.aligned_length, summary.latency_ms
    );
}
