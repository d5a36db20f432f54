use enum_dispatch::enum_dispatch;

use crate::{BitPayload, Result, SteganoError};

/// Index addressed access to the bit carrying positions of a media.
///
/// Indices run from `0` to `capacity() - 1`, every position carries exactly one bit.
#[enum_dispatch]
pub trait Carrier {
    /// number of addressable positions
    fn capacity(&self) -> u64;

    /// the bit stored at position `index`
    fn read_bit(&self, index: u64) -> Result<bool>;

    /// stores `bit` at position `index`, nothing but that single bit changes
    fn write_bit(&mut self, index: u64, bit: bool) -> Result<()>;

    fn check_index(&self, index: u64) -> Result<()> {
        if index >= self.capacity() {
            return Err(SteganoError::InvalidIndex {
                index,
                capacity: self.capacity(),
            });
        }
        Ok(())
    }

    fn read_bits(&self, indices: &[u64]) -> Result<BitPayload> {
        indices.iter().map(|&i| self.read_bit(i)).collect()
    }

    /// writes `bits[i]` to `indices[i]`.
    ///
    /// All indices are checked before the first write, so on error the carrier is unchanged.
    /// Surplus indices are ignored.
    fn write_bits(&mut self, indices: &[u64], bits: &BitPayload) -> Result<()> {
        if indices.len() < bits.len() {
            return Err(SteganoError::InvalidParameter(format!(
                "{} indices for {} bits",
                indices.len(),
                bits.len()
            )));
        }
        for &index in indices.iter().take(bits.len()) {
            self.check_index(index)?;
        }
        for (&index, bit) in indices.iter().zip(bits.iter()) {
            self.write_bit(index, bit)?;
        }
        Ok(())
    }
}
