use byteorder::{ByteOrder, LittleEndian};

/// wrap the low level samples that carry information
#[derive(Debug, Eq, PartialEq)]
pub enum MediaPrimitive<'a> {
    GraySample(u8),
    WideGraySample(u16),
    /// little endian PCM sample of 1 to 4 bytes
    AudioSample(&'a [u8]),
}

/// mutable primitive for storing stegano data
#[derive(Debug, Eq, PartialEq)]
pub enum MediaPrimitiveMut<'a> {
    GraySample(&'a mut u8),
    WideGraySample(&'a mut u16),
    AudioSample(&'a mut [u8]),
}

pub trait HideBit {
    /// clears the least significant bit and sets it to `bit`, all other bits stay untouched
    fn hide_bit(self, bit: bool);
}

pub trait UnveilBit {
    /// the least significant bit
    fn unveil_bit(&self) -> bool;
}

impl HideBit for MediaPrimitiveMut<'_> {
    fn hide_bit(self, bit: bool) {
        match self {
            MediaPrimitiveMut::GraySample(c) => {
                *c = (*c & (u8::MAX - 1)) | u8::from(bit);
            }
            MediaPrimitiveMut::WideGraySample(c) => {
                *c = (*c & (u16::MAX - 1)) | u16::from(bit);
            }
            MediaPrimitiveMut::AudioSample(s) => {
                let n = s.len();
                let sample = LittleEndian::read_uint(s, n);
                LittleEndian::write_uint(s, (sample & !1) | u64::from(bit), n);
            }
        }
    }
}

impl UnveilBit for MediaPrimitive<'_> {
    fn unveil_bit(&self) -> bool {
        match self {
            MediaPrimitive::GraySample(c) => c & 1 == 1,
            MediaPrimitive::WideGraySample(c) => c & 1 == 1,
            MediaPrimitive::AudioSample(s) => LittleEndian::read_uint(s, s.len()) & 1 == 1,
        }
    }
}
