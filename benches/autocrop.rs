use autocrop::{box_smooth, local_entropy, optimal_rect, CropConfig, CropHints, Cropper, ImageView};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn make_image(width: usize, height: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let value = ((x * 13) ^ (y * 7) ^ (x * y)) & 0xFF;
            data.push(value as u8);
        }
    }
    data
}

fn bench_pipeline(c: &mut Criterion) {
    let width = 256;
    let height = 256;
    let data = make_image(width, height);
    let view = ImageView::from_slice(&data, width, height).unwrap();
    let cfg = CropConfig::default();

    c.bench_function("local_entropy_256", |b| {
        b.iter(|| black_box(local_entropy(view, cfg.disk_radius).unwrap()));
    });

    let density = local_entropy(view, cfg.disk_radius).unwrap();
    c.bench_function("box_smooth_256", |b| {
        b.iter(|| black_box(box_smooth(&density, cfg.kernel_len).unwrap()));
    });

    let smoothed = box_smooth(&density, cfg.kernel_len).unwrap();
    c.bench_function("interval_search_256", |b| {
        b.iter(|| black_box(optimal_rect(&smoothed, &cfg)));
    });

    let cropper = Cropper::new();
    c.bench_function("select_no_hints_256", |b| {
        b.iter(|| black_box(cropper.select(view, &CropHints::default()).unwrap()));
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
