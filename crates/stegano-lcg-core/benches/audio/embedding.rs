use criterion::{criterion_group, criterion_main, Criterion};
use hound::{SampleFormat, WavSpec, WavWriter};
use std::io::Cursor;
use stegano_lcg_core::media::audio::WavCarrier;
use stegano_lcg_core::{pipeline, LcgParams};

fn plain_audio() -> Vec<u8> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: 44100,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut buf = Cursor::new(Vec::new());
    let mut writer = WavWriter::new(&mut buf, spec).expect("Cannot create wav writer");
    for t in 0..44100_i32 {
        writer
            .write_sample(((t * 97) % 20000 - 10000) as i16)
            .expect("Cannot write sample");
    }
    writer.finalize().expect("Cannot finalize wav");

    buf.into_inner()
}

pub fn audio_embedding(c: &mut Criterion) {
    let params = LcgParams::new(3, 0, 17, 1);
    let plain_audio = plain_audio();
    let secret_message = "Hello World, this message travels in the least significant bits";

    c.bench_function("Audio Embedding", |b| {
        let mut carrier = WavCarrier::from_bytes(&plain_audio).expect("Audio is not readable");
        b.iter(|| {
            pipeline::embed(&mut carrier, secret_message, params).expect("Cannot embed message")
        })
    });
}

criterion_group!(benches, audio_embedding);
criterion_main!(benches);
