//! File level builders on top of [`crate::pipeline`].
//!
//! Every builder starts with `prepare()`, collects paths and options and runs on `execute()`.

pub mod embed;
pub mod extract;

use std::fs;
use std::path::Path;

use crate::{Result, SteganoError};

/// reads a UTF-8 text file as a whole
pub(crate) fn read_text_file(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(SteganoError::MissingFile(path.to_path_buf()));
    }
    let bytes = fs::read(path).map_err(|source| SteganoError::ReadError { source })?;

    Ok(String::from_utf8(bytes)?)
}
