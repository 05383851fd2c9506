use criterion::{criterion_group, criterion_main, Criterion};
use stegend_core::{encode, PixelBuffer};

pub fn image_encoding(c: &mut Criterion) {
    let carrier = PixelBuffer::from_fn(512, 512, |x, y| [x as u8, y as u8, (x ^ y) as u8, 255]);
    let secret_message = "Hello World!";

    c.bench_function("Image Encoding", |b| {
        b.iter(|| encode(&carrier, secret_message).expect("Cannot hide secret message"))
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
