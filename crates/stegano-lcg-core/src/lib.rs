//! # Stegano LCG Core API
//!
//! Hides Huffman coded text in the least significant bits of grayscale images and PCM WAV
//! audio. The positions are not consecutive but drawn from a linear congruential recurrence,
//! so the embedding and the extracting side only share the four [`LcgParams`] and the
//! number of payload bits.
//!
//! - [`schedule`] turns the parameters into positions
//! - [`media`] reads and writes single bits at those positions
//! - [`huffman`] compresses the text and rebuilds the code from a reference text
//! - [`pipeline`] ties these together on an in memory carrier
//! - [`api`] and [`commands`] do the same on files
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image
//!
//! ```rust
//! use image::GrayImage;
//! use stegano_lcg_core::LcgParams;
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! GrayImage::from_fn(64, 64, |x, y| image::Luma([(x * 3 + y) as u8]))
//!     .save(&carrier)
//!     .expect("Failed to write carrier image");
//!
//! let report = stegano_lcg_core::api::embed::prepare()
//!     .with_message("Hello, World!")        // normalized to "hello world" before encoding
//!     .with_params(LcgParams::new(3, 0, 17, 1))
//!     .with_carrier(&carrier)
//!     .with_output(temp_dir.path().join("image-with-a-secret.png"))
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! println!("message length: {}", report.payload.len());
//! ```
//!
//! ## Extract a message from an image
//!
//! ```rust
//! # use image::GrayImage;
//! # use stegano_lcg_core::LcgParams;
//! # use tempfile::tempdir;
//! # let temp_dir = tempdir().unwrap();
//! # let carrier = temp_dir.path().join("carrier.png");
//! # GrayImage::from_pixel(64, 64, image::Luma([77])).save(&carrier).unwrap();
//! # let secret = temp_dir.path().join("image-with-a-secret.png");
//! # let embedded = stegano_lcg_core::api::embed::prepare()
//! #     .with_message("Hello, World!")
//! #     .with_params(LcgParams::new(3, 0, 17, 1))
//! #     .with_carrier(&carrier)
//! #     .with_output(&secret)
//! #     .execute()
//! #     .unwrap();
//! let report = stegano_lcg_core::api::extract::prepare()
//!     .from_carrier(&secret)
//!     .with_params(LcgParams::new(3, 0, 17, 1))
//!     .with_message_length(embedded.payload.len())
//!     .with_reference("hello world")        // rebuilds the code table
//!     .execute()
//!     .expect("Failed to extract message from image");
//!
//! assert_eq!(report.message.as_deref(), Some("hello world"));
//! ```

#![warn(
    // clippy::unwrap_used,
    // clippy::expect_used,
    clippy::redundant_else,
)]

pub mod api;
pub mod commands;
pub mod error;
pub mod huffman;
pub mod media;
pub mod payload;
pub mod pipeline;
pub mod result;
pub mod schedule;

pub use crate::error::SteganoError;
pub use crate::huffman::{CodeAnalysis, CodeTable, HuffmanTree};
pub use crate::media::{Carrier, Media, Persist};
pub use crate::payload::BitPayload;
pub use crate::pipeline::{Embedding, Extraction};
pub use crate::result::Result;
pub use crate::schedule::{IndexSequence, LcgParams, Recurrence};

#[cfg(test)]
mod e2e_tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::commands::{embed, extract};
    use crate::media::audio::WavCarrier;
    use crate::test_utils::{prepare_gray_image, prepare_wav_bytes};

    const PARAMS: LcgParams = LcgParams {
        a: 3,
        b: 0,
        m: 17,
        u0: 1,
    };

    #[test]
    fn should_hide_and_extract_through_an_image_file() {
        let out_dir = TempDir::new().unwrap();
        let carrier = out_dir.path().join("carrier.png");
        let secret = out_dir.path().join("secret.png");
        let reference = out_dir.path().join("reference.txt");
        prepare_gray_image(100, 80).save(&carrier).unwrap();
        fs::write(&reference, "Hello world, a greeting to the world").unwrap();

        let message = "hello world a greeting to the world";
        let embedded = embed(&carrier, &secret, message, PARAMS, None).unwrap();
        let extracted =
            extract(&secret, PARAMS, embedded.payload.len(), Some(reference.as_path())).unwrap();

        assert_eq!(extracted.message.as_deref(), Some(message));
        assert_eq!(extracted.indices, embedded.indices);
    }

    #[test]
    fn should_hide_and_extract_through_a_wav_file() {
        let out_dir = TempDir::new().unwrap();
        let carrier = out_dir.path().join("carrier.wav");
        let secret = out_dir.path().join("secret.wav");
        let samples: Vec<i32> = (0..2048).map(|i| i * 13 - 9000).collect();
        fs::write(&carrier, prepare_wav_bytes(16, &samples)).unwrap();

        let embedded = embed(&carrier, &secret, "Sound of silence", PARAMS, None).unwrap();
        let extracted = extract(&secret, PARAMS, embedded.payload.len(), None).unwrap();
        assert_eq!(extracted.payload, embedded.payload);
        assert_eq!(extracted.message, None);

        let original = WavCarrier::open(&carrier).unwrap();
        let secret = WavCarrier::open(&secret).unwrap();
        assert_eq!(original.header(), secret.header());
        assert_eq!(original.capacity(), secret.capacity());
    }

    #[test]
    fn should_fail_for_invalid_carrier_image_file() {
        let out_dir = TempDir::new().unwrap();
        let carrier = out_dir.path().join("broken.png");
        fs::write(&carrier, b"not a png at all").unwrap();

        let result = embed(&carrier, &out_dir.path().join("out.png"), "hi", PARAMS, None);
        assert!(matches!(result, Err(SteganoError::InvalidImageMedia)));
    }

    #[test]
    fn should_fail_for_invalid_media_file() {
        let result = embed(
            std::path::Path::new("Cargo.toml"),
            std::path::Path::new("out.png"),
            "hi",
            PARAMS,
            None,
        );
        assert!(matches!(result, Err(SteganoError::UnsupportedMedia)));
    }

    #[test]
    fn should_wrap_around_on_tiny_carriers() {
        let out_dir = TempDir::new().unwrap();
        let carrier = out_dir.path().join("tiny.png");
        let secret = out_dir.path().join("tiny-secret.png");
        prepare_gray_image(2, 2).save(&carrier).unwrap();

        // 4 positions only, the schedule wraps and reuses them but never fails
        let embedded = embed(&carrier, &secret, "abcdefgh", PARAMS, None).unwrap();
        assert!(embedded.indices.iter().all(|&i| i < 4));
        assert!(!embedded.indices.collisions().is_empty());
    }
}
