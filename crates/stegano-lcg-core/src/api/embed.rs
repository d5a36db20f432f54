use std::path::{Path, PathBuf};

use log::info;

use crate::huffman::CodeTable;
use crate::media::{Carrier, Media, Persist};
use crate::schedule::{write_index_file, IndexSequence, LcgParams};
use crate::{pipeline, BitPayload, Result, SteganoError};

pub fn prepare() -> EmbedApi {
    EmbedApi::default()
}

/// What an embed run produced, the payload length is what the extracting side needs to know
#[derive(Debug, Clone, PartialEq)]
pub struct EmbedReport {
    pub capacity: u64,
    pub payload: BitPayload,
    pub table: CodeTable,
    pub indices: IndexSequence,
    pub output: PathBuf,
}

#[derive(Default, Debug)]
pub struct EmbedApi {
    message: Option<String>,
    carrier: Option<PathBuf>,
    output: Option<PathBuf>,
    index_file: Option<PathBuf>,
    params: Option<LcgParams>,
}

impl EmbedApi {
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    /// the carrier media, a grayscale PNG or a PCM WAV
    pub fn with_carrier<A: AsRef<Path>>(mut self, carrier: A) -> Self {
        self.carrier = Some(carrier.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn with_params(mut self, params: LcgParams) -> Self {
        self.params = Some(params);
        self
    }

    /// also write the generated positions to this file, one per line
    pub fn with_index_file<A: AsRef<Path>>(mut self, index_file: A) -> Self {
        self.index_file = Some(index_file.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<EmbedReport> {
        let Some(message) = self.message else {
            return Err(SteganoError::MissingMessage);
        };
        let Some(carrier) = self.carrier else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(SteganoError::TargetNotSet);
        };
        let Some(params) = self.params else {
            return Err(SteganoError::MissingSchedule);
        };

        let mut media = Media::from_file(&carrier)?;
        let capacity = media.capacity();
        let pipeline::Embedding {
            payload,
            table,
            indices,
        } = pipeline::embed(&mut media, &message, params)?;

        media.save_as(&output)?;
        if let Some(index_file) = self.index_file {
            write_index_file(&index_file, &indices)?;
        }
        info!(
            "{} bits hidden in {:?}, extract them with message length {}",
            payload.len(),
            output,
            payload.len()
        );

        Ok(EmbedReport {
            capacity,
            payload,
            table,
            indices,
            output,
        })
    }
}
