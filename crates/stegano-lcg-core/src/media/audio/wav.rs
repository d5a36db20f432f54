use std::fs;
use std::io::Write;
use std::path::Path;

use byteorder::{ByteOrder, LittleEndian};
use log::{debug, error};

use crate::media::{Carrier, HideBit, MediaPrimitive, MediaPrimitiveMut, UnveilBit};
use crate::{Result, SteganoError};

/// size of the canonical RIFF/WAVE header, samples start right after it
pub const WAV_HEADER_LEN: usize = 44;

const CHANNELS_OFFSET: usize = 22;
const SAMPLE_RATE_OFFSET: usize = 24;
const BITS_PER_SAMPLE_OFFSET: usize = 34;

/// width of one PCM sample
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SampleDepth {
    Bits8,
    Bits16,
    Bits24,
    Bits32,
}

impl SampleDepth {
    pub fn bytes(self) -> usize {
        match self {
            SampleDepth::Bits8 => 1,
            SampleDepth::Bits16 => 2,
            SampleDepth::Bits24 => 3,
            SampleDepth::Bits32 => 4,
        }
    }

    pub fn bits(self) -> u16 {
        self.bytes() as u16 * 8
    }
}

impl TryFrom<u16> for SampleDepth {
    type Error = SteganoError;

    fn try_from(bits: u16) -> Result<Self> {
        match bits {
            8 => Ok(SampleDepth::Bits8),
            16 => Ok(SampleDepth::Bits16),
            24 => Ok(SampleDepth::Bits24),
            32 => Ok(SampleDepth::Bits32),
            other => Err(SteganoError::UnsupportedFormat(format!(
                "{other} bits per sample"
            ))),
        }
    }
}

/// the few header fields worth knowing, read little endian from their fixed offsets
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct WavHeader {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
}

impl WavHeader {
    fn parse(header: &[u8]) -> Self {
        Self {
            channels: LittleEndian::read_u16(&header[CHANNELS_OFFSET..]),
            sample_rate: LittleEndian::read_u32(&header[SAMPLE_RATE_OFFSET..]),
            bits_per_sample: LittleEndian::read_u16(&header[BITS_PER_SAMPLE_OFFSET..]),
        }
    }
}

/// stegano carrier for PCM WAV files with a fixed 44 byte header
///
/// The header is kept byte for byte, every sample is one position and carries one bit in its
/// least significant bit. Channels are not told apart, samples are counted in file order.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct WavCarrier {
    header: [u8; WAV_HEADER_LEN],
    info: WavHeader,
    data: Vec<u8>,
    depth: SampleDepth,
}

impl WavCarrier {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < WAV_HEADER_LEN {
            return Err(SteganoError::CorruptData(format!(
                "{} bytes are too short for a WAV header",
                bytes.len()
            )));
        }
        let (head, data) = bytes.split_at(WAV_HEADER_LEN);
        let info = WavHeader::parse(head);
        let depth = SampleDepth::try_from(info.bits_per_sample)?;
        if data.len() % depth.bytes() != 0 {
            return Err(SteganoError::CorruptData(format!(
                "{} data bytes are not a multiple of the {} byte sample width",
                data.len(),
                depth.bytes()
            )));
        }

        let mut header = [0; WAV_HEADER_LEN];
        header.copy_from_slice(head);
        debug!(
            "wav: {} channels, {} Hz, {} bits, {} samples",
            info.channels,
            info.sample_rate,
            info.bits_per_sample,
            data.len() / depth.bytes()
        );

        Ok(Self {
            header,
            info,
            data: data.to_vec(),
            depth,
        })
    }

    pub fn open(f: &Path) -> Result<Self> {
        if !f.is_file() {
            return Err(SteganoError::MissingFile(f.to_path_buf()));
        }
        let bytes = fs::read(f).map_err(|source| SteganoError::ReadError { source })?;
        Self::from_bytes(&bytes)
    }

    pub fn header(&self) -> &WavHeader {
        &self.info
    }

    pub fn depth(&self) -> SampleDepth {
        self.depth
    }

    pub fn sample_count(&self) -> u64 {
        (self.data.len() / self.depth.bytes()) as u64
    }

    /// little endian bytes of the sample at `index`
    pub fn sample(&self, index: u64) -> Option<&[u8]> {
        let range = self.byte_range(index).ok()?;
        Some(&self.data[range])
    }

    fn byte_range(&self, index: u64) -> Result<std::ops::Range<usize>> {
        if index >= self.sample_count() {
            return Err(SteganoError::InvalidIndex {
                index,
                capacity: self.capacity(),
            });
        }
        let width = self.depth.bytes();
        let start = index as usize * width;
        Ok(start..start + width)
    }

    /// the original header followed by the (possibly modified) samples
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(WAV_HEADER_LEN + self.data.len());
        bytes.extend_from_slice(&self.header);
        bytes.extend_from_slice(&self.data);
        bytes
    }

    pub fn save_to_writer<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer
            .write_all(&self.header)
            .and_then(|_| writer.write_all(&self.data))
            .map_err(|source| {
                error!("Error writing wav data: {source}");
                SteganoError::WriteError { source }
            })
    }
}

impl Carrier for WavCarrier {
    /// one position per sample
    fn capacity(&self) -> u64 {
        self.sample_count()
    }

    fn read_bit(&self, index: u64) -> Result<bool> {
        let range = self.byte_range(index)?;
        Ok(MediaPrimitive::AudioSample(&self.data[range]).unveil_bit())
    }

    fn write_bit(&mut self, index: u64, bit: bool) -> Result<()> {
        let range = self.byte_range(index)?;
        MediaPrimitiveMut::AudioSample(&mut self.data[range]).hide_bit(bit);
        Ok(())
    }
}
