use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SteganoError {
    /// Represents a parameter outside its domain. For example a non-positive modulo or capacity
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Represents a location outside of the carrier bounds
    #[error("Invalid index {index}, the carrier only offers {capacity} positions")]
    InvalidIndex { index: u64, capacity: u64 },

    /// Represents a carrier sample layout that cannot be used. For example a 12 bit WAV or an RGB image
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Represents a carrier buffer that is inconsistent with its own header
    #[error("Corrupt data: {0}")]
    CorruptData(String),

    /// Represents a path that does not resolve to a file
    #[error("File not found: {0}")]
    MissingFile(PathBuf),

    /// Represents an unsupported carrier media. For example, a Movie file is not supported
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents the error of invalid UTF-8 text data found inside of a reference text
    #[error("Invalid text data found")]
    InvalidTextData(#[from] FromUtf8Error),

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,

    #[error("API Error: Neither a message length nor an index file was given")]
    MissingSchedule,
}
