use std::fmt::{self, Display, Formatter};
use std::io::Cursor;
use std::str::FromStr;

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};

use crate::{Result, SteganoError};

/// Sequence of payload bits, exchanged between the huffman codec and the carriers.
///
/// Rendered and parsed as a string of `'0'` and `'1'`.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct BitPayload {
    bits: Vec<bool>,
}

impl BitPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    pub fn get(&self, i: usize) -> Option<bool> {
        self.bits.get(i).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    /// packs the bits into bytes, first bit is the most significant bit of the first byte.
    /// The last byte is padded with zeros.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut w = BitWriter::endian(Vec::with_capacity((self.len() + 7) / 8), BigEndian);
        for bit in self.iter() {
            w.write_bit(bit)?;
        }
        w.byte_align()?;

        Ok(w.into_writer())
    }

    /// unpacks `bit_len` bits from `bytes`, the counterpart of [`BitPayload::to_bytes`]
    pub fn from_bytes(bytes: &[u8], bit_len: usize) -> Result<Self> {
        if bit_len > bytes.len() * 8 {
            return Err(SteganoError::InvalidParameter(format!(
                "{} bytes cannot hold {bit_len} bits",
                bytes.len()
            )));
        }
        let mut r = BitReader::endian(Cursor::new(bytes), BigEndian);
        let bits = (0..bit_len)
            .map(|_| r.read_bit())
            .collect::<std::io::Result<Vec<bool>>>()?;

        Ok(Self { bits })
    }
}

impl From<Vec<bool>> for BitPayload {
    fn from(bits: Vec<bool>) -> Self {
        Self { bits }
    }
}

impl FromIterator<bool> for BitPayload {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl Extend<bool> for BitPayload {
    fn extend<T: IntoIterator<Item = bool>>(&mut self, iter: T) {
        self.bits.extend(iter)
    }
}

impl Display for BitPayload {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for BitPayload {
    type Err = SteganoError;

    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(SteganoError::InvalidParameter(format!(
                    "a bit payload only consists of '0' and '1', found {other:?}"
                ))),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_and_display_bit_strings() {
        let p: BitPayload = "1011000".parse().unwrap();
        assert_eq!(p.len(), 7);
        assert_eq!(p.get(0), Some(true));
        assert_eq!(p.get(1), Some(false));
        assert_eq!(p.get(7), None);
        assert_eq!(p.to_string(), "1011000");
    }

    #[test]
    fn should_reject_foreign_characters() {
        assert!(matches!(
            "10a1".parse::<BitPayload>(),
            Err(SteganoError::InvalidParameter(_))
        ));
    }

    #[test]
    fn should_pack_most_significant_bit_first() {
        let p: BitPayload = "1000000011".parse().unwrap();
        let bytes = p.to_bytes().unwrap();
        assert_eq!(bytes, vec![0b1000_0000, 0b1100_0000]);

        let back = BitPayload::from_bytes(&bytes, p.len()).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn should_refuse_to_unpack_more_bits_than_available() {
        let result = BitPayload::from_bytes(&[0xff], 9);
        assert!(matches!(result, Err(SteganoError::InvalidParameter(_))));
    }

    #[test]
    fn should_be_empty_by_default() {
        let p = BitPayload::new();
        assert!(p.is_empty());
        assert_eq!(p.to_string(), "");
        assert!(p.to_bytes().unwrap().is_empty());
    }
}
