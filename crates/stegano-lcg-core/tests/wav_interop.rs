use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use tempfile::TempDir;

use stegano_lcg_core::commands::{embed, extract};
use stegano_lcg_core::media::audio::WavCarrier;
use stegano_lcg_core::*;

const PARAMS: LcgParams = LcgParams {
    a: 3,
    b: 0,
    m: 17,
    u0: 1,
};

fn spec(bits_per_sample: u16) -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate: 8000,
        bits_per_sample,
        sample_format: SampleFormat::Int,
    }
}

#[test]
fn should_embed_into_a_16_bit_file_written_by_hound() {
    let out_dir = TempDir::new().unwrap();
    let carrier = out_dir.path().join("tone.wav");
    let secret = out_dir.path().join("tone-secret.wav");

    let mut writer = WavWriter::create(&carrier, spec(16)).unwrap();
    for t in 0..8000 {
        let sample = ((t as f32 * 440.0 * 2.0 * std::f32::consts::PI / 8000.0).sin() * 12000.0) as i16;
        writer.write_sample(sample).unwrap();
    }
    writer.finalize().unwrap();

    let message = "a sine wave is a perfect hiding place";
    let embedded = embed(&carrier, &secret, message, PARAMS, None).unwrap();
    assert_eq!(embedded.capacity, 8000);

    let extracted = extract(&secret, PARAMS, embedded.payload.len(), None).unwrap();
    assert_eq!(extracted.payload, embedded.payload);
    assert_eq!(
        extracted.payload.len(),
        embedded.indices.len(),
        "one position per bit"
    );

    // still a valid file for an independent decoder, only the LSBs moved
    let before: Vec<i16> = WavReader::open(&carrier)
        .unwrap()
        .samples::<i16>()
        .map(|s| s.unwrap())
        .collect();
    let after: Vec<i16> = WavReader::open(&secret)
        .unwrap()
        .samples::<i16>()
        .map(|s| s.unwrap())
        .collect();
    assert_eq!(before.len(), after.len());
    for (i, (b, a)) in before.iter().zip(after.iter()).enumerate() {
        assert_eq!(b & !1, a & !1, "sample {i} changed above the LSB");
    }
    for (bit, &index) in embedded.payload.iter().zip(embedded.indices.iter()) {
        assert_eq!(after[index as usize] & 1 == 1, bit);
    }
}

#[test]
fn should_embed_into_an_8_bit_file_written_by_hound() {
    let out_dir = TempDir::new().unwrap();
    let carrier = out_dir.path().join("noise.wav");
    let secret = out_dir.path().join("noise-secret.wav");

    let mut writer = WavWriter::create(&carrier, spec(8)).unwrap();
    for t in 0..1024_i32 {
        writer.write_sample(((t * 31) % 256 - 128) as i8).unwrap();
    }
    writer.finalize().unwrap();

    let wav = WavCarrier::open(&carrier).unwrap();
    assert_eq!(wav.header().bits_per_sample, 8);
    assert_eq!(wav.header().sample_rate, 8000);
    assert_eq!(wav.capacity(), 1024);

    let embedded = embed(&carrier, &secret, "tiny", PARAMS, None).unwrap();
    let extracted = extract(&secret, PARAMS, embedded.payload.len(), None).unwrap();
    let (message, _) = extracted.decode_with("tiny");
    assert_eq!(message, "tiny");
}
