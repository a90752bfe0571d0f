use ba_ascii::dimensions::GridSpec;
use ba_ascii::luminance::Renderer;
use ba_core::charset::GlyphRamp;
use ba_core::config::ToneParams;
use ba_core::frame::FrameBuffer;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn gradient(width: u32, height: u32) -> FrameBuffer {
    let pixels: Vec<(u8, u8, u8)> = (0..width * height)
        .map(|i| {
            let v = (i % 256) as u8;
            (v, v.wrapping_mul(3), 255 - v)
        })
        .collect();
    FrameBuffer::from_rgb(width, height, &pixels)
}

fn bench_render(c: &mut Criterion) {
    let frame = gradient(1920, 1080);
    let tone = ToneParams {
        contrast: 1.2,
        brightness: 10.0,
        ..ToneParams::default()
    };

    let mut group = c.benchmark_group("render");
    for name in ["default", "classic", "dots"] {
        let Ok(ramp) = GlyphRamp::from_name(name) else {
            continue;
        };
        let renderer = Renderer::new(&ramp, tone);
        group.bench_function(format!("{name}_160x60"), |b| {
            b.iter(|| renderer.render(black_box(&frame), GridSpec { width: 160, height: 60 }));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
