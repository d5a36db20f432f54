use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error};

use crate::huffman::{self, CodeTable};
use crate::media::Media;
use crate::pipeline::{self, Extraction};
use crate::schedule::{read_index_file, write_index_file, IndexSequence, LcgParams};
use crate::{BitPayload, Result, SteganoError};

use super::read_text_file;

pub fn prepare() -> ExtractApi {
    ExtractApi::default()
}

/// What an extract run found. `message` and `table` are only set when a reference text was given.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractReport {
    pub indices: IndexSequence,
    pub payload: BitPayload,
    pub message: Option<String>,
    pub table: Option<CodeTable>,
}

#[derive(Debug)]
enum Reference {
    File(PathBuf),
    Text(String),
}

#[derive(Default, Debug)]
pub struct ExtractApi {
    secret_media: Option<PathBuf>,
    params: Option<LcgParams>,
    message_length: Option<usize>,
    indices_from: Option<PathBuf>,
    reference: Option<Reference>,
    index_file: Option<PathBuf>,
    raw_file: Option<PathBuf>,
}

impl ExtractApi {
    /// This is the media that contains the hidden bits
    pub fn from_carrier(mut self, secret_media: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_media.as_ref().to_path_buf());
        self
    }

    pub fn with_params(mut self, params: LcgParams) -> Self {
        self.params = Some(params);
        self
    }

    /// number of payload bits, as reported by the embedding side
    pub fn with_message_length(mut self, message_length: usize) -> Self {
        self.message_length = Some(message_length);
        self
    }

    /// Read the positions from an index file instead of generating them.
    /// Takes precedence over params and message length.
    pub fn with_indices_from_file(mut self, index_file: impl AsRef<Path>) -> Self {
        self.indices_from = Some(index_file.as_ref().to_path_buf());
        self
    }

    /// text file the code table gets rebuilt from
    pub fn with_reference_text(mut self, reference: impl AsRef<Path>) -> Self {
        self.reference = Some(Reference::File(reference.as_ref().to_path_buf()));
        self
    }

    pub fn with_reference(mut self, reference: &str) -> Self {
        self.reference = Some(Reference::Text(reference.to_string()));
        self
    }

    /// write the positions used to this file, one per line
    pub fn with_index_file(mut self, index_file: impl AsRef<Path>) -> Self {
        self.index_file = Some(index_file.as_ref().to_path_buf());
        self
    }

    /// write the payload bits packed into bytes, most significant bit first
    pub fn into_raw_file(mut self, raw_file: impl AsRef<Path>) -> Self {
        self.raw_file = Some(raw_file.as_ref().to_path_buf());
        self
    }

    /// Execute the extraction and blocks until it is finished
    pub fn execute(self) -> Result<ExtractReport> {
        let Some(secret_media) = self.secret_media else {
            return Err(SteganoError::CarrierNotSet);
        };

        let media = Media::from_file(&secret_media)?;
        let schedule = (self.indices_from, self.params, self.message_length);
        let Extraction { indices, payload } = match schedule {
            (Some(index_file), _, _) => {
                let indices = IndexSequence::from(read_index_file(&index_file)?);
                debug!("{} positions read from {index_file:?}", indices.len());
                pipeline::extract_at(&media, indices)?
            }
            (None, Some(params), Some(message_length)) => {
                pipeline::extract(&media, params, message_length)?
            }
            _ => return Err(SteganoError::MissingSchedule),
        };

        if let Some(index_file) = self.index_file {
            write_index_file(&index_file, &indices)?;
        }
        if let Some(raw_file) = self.raw_file {
            fs::write(&raw_file, payload.to_bytes()?).map_err(|source| {
                error!("Error writing raw payload to {raw_file:?}: {source}");
                SteganoError::WriteError { source }
            })?;
        }

        let reference = match self.reference {
            Some(Reference::File(f)) => Some(read_text_file(&f)?),
            Some(Reference::Text(t)) => Some(t),
            None => None,
        };
        let (message, table) = match reference {
            Some(reference) => {
                let (message, table) = huffman::decode_with_reference(&payload, &reference);
                (Some(message), Some(table))
            }
            None => (None, None),
        };

        Ok(ExtractReport {
            indices,
            payload,
            message,
            table,
        })
    }
}
