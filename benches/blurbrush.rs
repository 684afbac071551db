use blurbrush::{box_blur, stamp, PixelBuffer};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn make_canvas(width: usize, height: usize) -> PixelBuffer {
    let mut data = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let value = ((x * 13) ^ (y * 7) ^ (x * y)) & 0xFF;
            data.extend_from_slice(&[value as u8, (value as u8).wrapping_mul(3), 128, 255]);
        }
    }
    PixelBuffer::new(data, width, height).unwrap()
}

fn bench_blur(c: &mut Criterion) {
    let canvas = make_canvas(512, 512);

    for radius in [1u32, 8, 64] {
        c.bench_function(&format!("box_blur_512_r{radius}"), |b| {
            b.iter_batched_ref(
                || canvas.clone(),
                |buf| box_blur(black_box(buf), radius),
                criterion::BatchSize::LargeInput,
            );
        });
    }
}

fn bench_stamp(c: &mut Criterion) {
    let canvas = make_canvas(1920, 1080);

    for strength in [1.0f32, 4.0, 8.0] {
        c.bench_function(&format!("stamp_1080p_s{strength}"), |b| {
            b.iter_batched_ref(
                || canvas.clone(),
                |buf| black_box(stamp(buf, 960, 540, 300, strength)),
                criterion::BatchSize::LargeInput,
            );
        });
    }
}

criterion_group!(benches, bench_blur, bench_stamp);
criterion_main!(benches);
