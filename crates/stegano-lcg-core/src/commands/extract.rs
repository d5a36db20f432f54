use std::path::Path;

use crate::api::extract::ExtractReport;
use crate::schedule::LcgParams;
use crate::Result;

/// extracts `message_length` bits and decodes them when a reference text file is given
pub fn extract(
    secret_media: &Path,
    params: LcgParams,
    message_length: usize,
    reference_text: Option<&Path>,
) -> Result<ExtractReport> {
    let api = crate::api::extract::prepare()
        .from_carrier(secret_media)
        .with_params(params)
        .with_message_length(message_length);

    let api = match reference_text {
        Some(reference) => api.with_reference_text(reference),
        None => api,
    };

    api.execute()
}
