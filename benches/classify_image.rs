use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use image::{ImageFormat, Rgb, RgbImage};
use lumon_botanist::ColorHeuristicClassifier;
use std::hint::black_box;
use std::io::Cursor;

fn sample_png(side: u32) -> Vec<u8> {
    let image = RgbImage::from_fn(side, side, |x, y| {
        if (x / 16 + y / 16) % 3 == 0 {
            Rgb([200, 40, 50])
        } else {
            Rgb([40, 150, 60])
        }
    });
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, ImageFormat::Png).expect("encode png");
    buf.into_inner()
}

fn bench_classify(c: &mut Criterion) {
    let classifier = ColorHeuristicClassifier::default();
    let mut group = c.benchmark_group("classify");

    // Decode dominates; extraction is bounded by the downsample size
    for side in [224u32, 1024, 2048] {
        let bytes = sample_png(side);
        group.bench_with_input(BenchmarkId::from_parameter(side), &bytes, |b, bytes| {
            b.iter(|| classifier.classify(black_box(bytes)).expect("classify"));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
