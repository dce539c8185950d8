use criterion::{criterion_group, criterion_main, Criterion};

use certforge::export::{self, ExportFormat};
use certforge::record::{IdentityRecord, Prefix};
use certforge::rendering::compose::Compositor;
use certforge::rendering::{raster, OVERSAMPLE};
use certforge::template;

fn sample_record() -> IdentityRecord {
    IdentityRecord {
        prefix: Some(Prefix::Mr),
        first_name: "สมชาย".to_string(),
        last_name: "ใจดี".to_string(),
    }
}

fn bench_capture(c: &mut Criterion) {
    let svg = template::certificate_svg(&sample_record(), "06 สิงหาคม 2569");
    let compositor = Compositor::new(None);
    let tree = compositor.compose(&svg).expect("compose");

    c.bench_function("rasterize_2x", |b| {
        b.iter(|| raster::rasterize(&tree, OVERSAMPLE).expect("rasterize"))
    });
}

fn bench_encode(c: &mut Criterion) {
    let svg = template::certificate_svg(&sample_record(), "06 สิงหาคม 2569");
    let tree = Compositor::new(None).compose(&svg).expect("compose");
    let snapshot = raster::rasterize(&tree, OVERSAMPLE).expect("rasterize");

    c.bench_function("encode_jpeg", |b| {
        b.iter(|| export::encode(&snapshot, ExportFormat::Jpeg).expect("encode"))
    });

    c.bench_function("encode_pdf", |b| {
        b.iter(|| export::encode(&snapshot, ExportFormat::Pdf).expect("encode"))
    });
}

criterion_group!(benches, bench_capture, bench_encode);
criterion_main!(benches);
