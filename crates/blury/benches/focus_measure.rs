use blury::core::{compute_focus_measure_with, FocusParams, PixelBufferView, PixelLayout};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn synthetic_rgba(width: usize, height: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let v = (((x / 7) ^ (y / 5)) & 0xff) as u8;
            data.extend_from_slice(&[v, v.wrapping_add(31), v.wrapping_mul(3), 255]);
        }
    }
    data
}

fn bench_focus_measure(c: &mut Criterion) {
    let mut group = c.benchmark_group("focus_measure");
    for (width, height) in [(480, 360), (1920, 1080)] {
        let data = synthetic_rgba(width, height);
        for max_width in [0, 480] {
            let params = FocusParams { max_width };
            group.bench_with_input(
                BenchmarkId::new(format!("{width}x{height}"), format!("cap{max_width}")),
                &data,
                |b, data| {
                    b.iter(|| {
                        let view = PixelBufferView {
                            width,
                            height,
                            layout: PixelLayout::Rgba,
                            data,
                        };
                        compute_focus_measure_with(black_box(view), 40.0, &params)
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_focus_measure);
criterion_main!(benches);
