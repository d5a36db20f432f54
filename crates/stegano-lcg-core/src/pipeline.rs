//! Carrier level embed and extract, no files involved.
//!
//! Both directions derive the positions from [`LcgParams`] and the carrier capacity,
//! exactly one position per payload bit.

use log::{debug, warn};

use crate::huffman::{self, CodeTable};
use crate::media::Carrier;
use crate::schedule::{IndexSequence, LcgParams, Recurrence};
use crate::{BitPayload, Result, SteganoError};

/// Outcome of [`embed`]
#[derive(Debug, Clone, PartialEq)]
pub struct Embedding {
    pub payload: BitPayload,
    pub table: CodeTable,
    pub indices: IndexSequence,
}

/// Outcome of [`extract`]
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub indices: IndexSequence,
    pub payload: BitPayload,
}

impl Extraction {
    /// rebuilds the code table from `reference` and decodes the payload with it.
    ///
    /// A reference with a different letter distribution decodes to garbage without any error.
    pub fn decode_with(&self, reference: &str) -> (String, CodeTable) {
        huffman::decode_with_reference(&self.payload, reference)
    }
}

/// generates one index per bit, `count = bits - 1`
fn generate_indices(params: LcgParams, bits: usize, capacity: u64) -> Result<IndexSequence> {
    let indices = Recurrence::new(params).indices(bits - 1, capacity)?;
    if let Some(v) = indices.first_order_violation() {
        warn!(
            "index sequence is not ascending at position {}: {} after {}",
            v.position, v.index, v.previous
        );
    }
    let collisions = indices.collisions();
    if !collisions.is_empty() {
        warn!(
            "{} positions are used more than once, later bits overwrite earlier ones",
            collisions.len()
        );
    }

    Ok(indices)
}

/// Huffman encodes `text` and hides the bits at the positions generated from `params`.
///
/// ## Example of usage
/// ```rust
/// use image::GrayImage;
/// use stegano_lcg_core::media::image::GrayImageCarrier;
/// use stegano_lcg_core::pipeline;
/// use stegano_lcg_core::schedule::LcgParams;
///
/// let params = LcgParams::new(3, 0, 17, 1);
/// let mut carrier = GrayImageCarrier::from(GrayImage::from_pixel(64, 64, image::Luma([128])));
///
/// let embedding = pipeline::embed(&mut carrier, "hello world", params).unwrap();
/// let extraction = pipeline::extract(&carrier, params, embedding.payload.len()).unwrap();
///
/// assert_eq!(extraction.decode_with("hello world").0, "hello world");
/// ```
pub fn embed<C: Carrier>(carrier: &mut C, text: &str, params: LcgParams) -> Result<Embedding> {
    let (payload, table) = huffman::encode(text);
    if payload.is_empty() {
        return Err(SteganoError::InvalidParameter(
            "nothing left to embed after normalizing the message".to_string(),
        ));
    }
    debug!(
        "embedding {} bits with {} code words into {} positions",
        payload.len(),
        table.len(),
        carrier.capacity()
    );

    let indices = generate_indices(params, payload.len(), carrier.capacity())?;
    embed_at(carrier, &payload, &indices)?;

    Ok(Embedding {
        payload,
        table,
        indices,
    })
}

/// hides `payload` at caller supplied positions, atomically
pub fn embed_at<C: Carrier>(carrier: &mut C, payload: &BitPayload, indices: &[u64]) -> Result<()> {
    carrier.write_bits(indices, payload)
}

/// reads `message_length` bits from the positions generated from `params`
pub fn extract<C: Carrier>(
    carrier: &C,
    params: LcgParams,
    message_length: usize,
) -> Result<Extraction> {
    if message_length == 0 {
        return Err(SteganoError::InvalidParameter(
            "message length must be positive".to_string(),
        ));
    }
    debug!(
        "extracting {message_length} bits from {} positions",
        carrier.capacity()
    );

    let indices = generate_indices(params, message_length, carrier.capacity())?;
    let payload = carrier.read_bits(&indices)?;

    Ok(Extraction { indices, payload })
}

/// reads one bit per caller supplied position
pub fn extract_at<C: Carrier>(carrier: &C, indices: IndexSequence) -> Result<Extraction> {
    let payload = carrier.read_bits(&indices)?;
    Ok(Extraction { indices, payload })
}
