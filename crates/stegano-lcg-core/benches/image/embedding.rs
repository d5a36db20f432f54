use criterion::{criterion_group, criterion_main, Criterion};
use image::{GrayImage, ImageBuffer};
use stegano_lcg_core::media::image::GrayImageCarrier;
use stegano_lcg_core::{pipeline, LcgParams};

pub fn image_embedding(c: &mut Criterion) {
    let params = LcgParams::new(3, 0, 17, 1);
    let plain_image: GrayImage =
        ImageBuffer::from_fn(512, 512, |x, y| image::Luma([((x ^ y) & 0xff) as u8]));
    let secret_message = "Hello World, this message travels in the least significant bits";

    c.bench_function("Image Embedding", |b| {
        let mut carrier = GrayImageCarrier::from(plain_image.clone());
        b.iter(|| {
            pipeline::embed(&mut carrier, secret_message, params).expect("Cannot embed message")
        })
    });

    let mut carrier = GrayImageCarrier::from(plain_image);
    let embedded =
        pipeline::embed(&mut carrier, secret_message, params).expect("Cannot embed message");
    c.bench_function("Image Extraction", |b| {
        b.iter(|| {
            pipeline::extract(&carrier, params, embedded.payload.len())
                .expect("Cannot extract message")
        })
    });
}

criterion_group!(benches, image_embedding);
criterion_main!(benches);
