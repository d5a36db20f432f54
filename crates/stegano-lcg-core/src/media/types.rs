use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use enum_dispatch::enum_dispatch;
use log::error;

use crate::error::SteganoError;
use crate::result::Result;
use crate::BitPayload;

use super::audio::WavCarrier;
use super::image::GrayImageCarrier;
use super::{Carrier, Persist};

/// a media container for steganography
#[enum_dispatch(Carrier)]
#[derive(Debug, Clone, PartialEq)]
pub enum Media {
    Image(GrayImageCarrier),
    Audio(WavCarrier),
}

impl Media {
    /// picks the carrier by file extension, `png` or `wav`
    pub fn from_file(f: &Path) -> Result<Self> {
        if !f.is_file() {
            return Err(SteganoError::MissingFile(f.to_path_buf()));
        }
        let ext = f
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .ok_or(SteganoError::UnsupportedMedia)?;

        match ext.as_str() {
            "png" => Ok(Self::Image(GrayImageCarrier::open(f)?)),
            "wav" => Ok(Self::Audio(WavCarrier::open(f)?)),
            _ => Err(SteganoError::UnsupportedMedia),
        }
    }

    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        match self {
            Media::Image(i) => i.save_to_writer(&mut writer),
            Media::Audio(a) => a.save_to_writer(&mut writer),
        }
    }
}

impl Persist for Media {
    fn save_as(&self, file: &Path) -> Result<()> {
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            SteganoError::WriteError { source: e }
        })?;
        let mut writer = BufWriter::new(f);
        self.save_to_writer(&mut writer)?;
        writer.flush().map_err(|e| {
            error!("Error writing file {file:?}: {e}");
            SteganoError::WriteError { source: e }
        })
    }
}
