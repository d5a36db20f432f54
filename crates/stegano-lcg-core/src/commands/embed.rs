use std::path::Path;

use crate::api::embed::EmbedReport;
use crate::schedule::LcgParams;
use crate::Result;

pub fn embed(
    carrier: &Path,
    write_to_file: &Path,
    message: &str,
    params: LcgParams,
    index_file: Option<&Path>,
) -> Result<EmbedReport> {
    let api = crate::api::embed::prepare()
        .with_carrier(carrier)
        .with_output(write_to_file)
        .with_message(message)
        .with_params(params);

    let api = match index_file {
        Some(index_file) => api.with_index_file(index_file),
        None => api,
    };

    api.execute()
}
