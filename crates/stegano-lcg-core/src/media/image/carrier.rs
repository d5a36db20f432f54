use std::io::{Seek, Write};
use std::path::Path;

use image::{DynamicImage, GrayImage, ImageBuffer, ImageFormat, Luma};
use log::error;

use crate::media::{Carrier, HideBit, MediaPrimitive, MediaPrimitiveMut, UnveilBit};
use crate::{Result, SteganoError};

pub type Gray16Image = ImageBuffer<Luma<u16>, Vec<u16>>;

#[derive(Debug, Clone, PartialEq)]
enum GrayRaster {
    Eight(GrayImage),
    Sixteen(Gray16Image),
}

/// stegano carrier for single band grayscale images, based on `ImageBuffer` by `image` crate
///
/// Every pixel is one position, index `i` addresses the pixel at
/// `(x = i mod width, y = i div width)` and carries one bit in the LSB of its sample.
///
/// ## Example of usage
/// ```rust
/// use image::GrayImage;
/// use stegano_lcg_core::media::Carrier;
/// use stegano_lcg_core::media::image::GrayImageCarrier;
///
/// let mut carrier = GrayImageCarrier::from(GrayImage::from_pixel(4, 3, image::Luma([200])));
/// assert_eq!(carrier.capacity(), 12);
///
/// carrier.write_bit(5, true).expect("index 5 is within the image");
/// assert_eq!(carrier.sample(1, 1), Some(201));
/// assert!(carrier.read_bit(12).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GrayImageCarrier {
    raster: GrayRaster,
}

impl GrayImageCarrier {
    /// accepts 8 and 16 bit grayscale images only
    pub fn from_dynamic(img: DynamicImage) -> Result<Self> {
        match img {
            DynamicImage::ImageLuma8(i) => Ok(Self::from(i)),
            DynamicImage::ImageLuma16(i) => Ok(Self::from(i)),
            other => Err(SteganoError::UnsupportedFormat(format!(
                "expected a single band grayscale image, got {:?}",
                other.color()
            ))),
        }
    }

    pub fn open(f: &Path) -> Result<Self> {
        if !f.is_file() {
            return Err(SteganoError::MissingFile(f.to_path_buf()));
        }
        let img = image::open(f).map_err(|e| {
            error!("Error reading image {f:?}: {e}");
            SteganoError::InvalidImageMedia
        })?;

        Self::from_dynamic(img)
    }

    pub fn width(&self) -> u32 {
        match &self.raster {
            GrayRaster::Eight(i) => i.width(),
            GrayRaster::Sixteen(i) => i.width(),
        }
    }

    pub fn height(&self) -> u32 {
        match &self.raster {
            GrayRaster::Eight(i) => i.height(),
            GrayRaster::Sixteen(i) => i.height(),
        }
    }

    pub fn bits_per_sample(&self) -> u8 {
        match &self.raster {
            GrayRaster::Eight(_) => 8,
            GrayRaster::Sixteen(_) => 16,
        }
    }

    /// total bits of sample storage, `width * height * bits_per_sample * bands`.
    /// Only one of these bits per pixel is used, see [`Carrier::capacity`].
    pub fn storage_bits(&self) -> u64 {
        self.width() as u64 * self.height() as u64 * self.bits_per_sample() as u64
    }

    /// the raw sample at `(x, y)`, `None` outside the image
    pub fn sample(&self, x: u32, y: u32) -> Option<u16> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(match &self.raster {
            GrayRaster::Eight(i) => i.get_pixel(x, y).0[0] as u16,
            GrayRaster::Sixteen(i) => i.get_pixel(x, y).0[0],
        })
    }

    fn locate(&self, index: u64) -> Result<(u32, u32)> {
        if index >= self.capacity() {
            return Err(SteganoError::InvalidIndex {
                index,
                capacity: self.capacity(),
            });
        }
        let width = self.width() as u64;
        Ok(((index % width) as u32, (index / width) as u32))
    }

    fn primitive(&self, x: u32, y: u32) -> MediaPrimitive<'_> {
        match &self.raster {
            GrayRaster::Eight(i) => MediaPrimitive::GraySample(i.get_pixel(x, y).0[0]),
            GrayRaster::Sixteen(i) => MediaPrimitive::WideGraySample(i.get_pixel(x, y).0[0]),
        }
    }

    fn primitive_mut(&mut self, x: u32, y: u32) -> MediaPrimitiveMut<'_> {
        match &mut self.raster {
            GrayRaster::Eight(i) => {
                MediaPrimitiveMut::GraySample(&mut i.get_pixel_mut(x, y).0[0])
            }
            GrayRaster::Sixteen(i) => {
                MediaPrimitiveMut::WideGraySample(&mut i.get_pixel_mut(x, y).0[0])
            }
        }
    }

    /// writes the image as PNG
    pub fn save_to_writer<W: Write + Seek>(&self, writer: &mut W) -> Result<()> {
        let written = match &self.raster {
            GrayRaster::Eight(i) => i.write_to(writer, ImageFormat::Png),
            GrayRaster::Sixteen(i) => i.write_to(writer, ImageFormat::Png),
        };
        written.map_err(|e| {
            error!("Error saving image: {e}");
            SteganoError::ImageEncodingError
        })
    }
}

impl From<GrayImage> for GrayImageCarrier {
    fn from(img: GrayImage) -> Self {
        Self {
            raster: GrayRaster::Eight(img),
        }
    }
}

impl From<Gray16Image> for GrayImageCarrier {
    fn from(img: Gray16Image) -> Self {
        Self {
            raster: GrayRaster::Sixteen(img),
        }
    }
}

impl Carrier for GrayImageCarrier {
    /// one position per pixel
    fn capacity(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    fn read_bit(&self, index: u64) -> Result<bool> {
        let (x, y) = self.locate(index)?;
        Ok(self.primitive(x, y).unveil_bit())
    }

    fn write_bit(&mut self, index: u64, bit: bool) -> Result<()> {
        let (x, y) = self.locate(index)?;
        self.primitive_mut(x, y).hide_bit(bit);
        Ok(())
    }
}
