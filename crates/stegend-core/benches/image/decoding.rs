use criterion::{criterion_group, criterion_main, Criterion};
use stegend_core::{decode, encode, PixelBuffer};

pub fn image_decoding(c: &mut Criterion) {
    let carrier = PixelBuffer::from_fn(512, 512, |x, y| [x as u8, y as u8, (x ^ y) as u8, 255]);
    let short = encode(&carrier, "Hello World!").expect("Cannot hide secret message");
    let long = encode(&carrier, &"Lorem ipsum ".repeat(8000)).expect("Cannot hide long message");

    c.bench_function("Image Decoding: short message", |b| {
        b.iter(|| decode(&short).expect("message should be found"))
    });
    c.bench_function("Image Decoding: long message", |b| {
        b.iter(|| decode(&long).expect("message should be found"))
    });
    c.bench_function("Image Decoding: no message", |b| {
        b.iter(|| assert!(decode(&carrier).is_none()))
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
