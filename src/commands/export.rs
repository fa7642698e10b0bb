use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::{
    core::{
        config::Config,
        errors::{AppError, AppResult},
        types::{ExportSummary, FigmaFile, LayerRecord},
    },
    extract::{file_id::extract_file_id, layers},
    providers::figma::FileFetcher,
};

pub async fn run_export<F: FileFetcher>(config: &Config, fetcher: &F) -> AppResult<ExportSummary> {
    let file_id = extract_file_id(&config.figma_url)?;
    tracing::info!(%file_id, "extracted file id");

    let file = fetcher.fetch_file(&file_id, &config.api_token).await?;
    tracing::info!(file_name = %file.name, pages = file.document.children.len(), "fetched file");

    export_page(&file, &config.page_name, &config.output_path)
}

/// Flattens the named page of an already fetched file and writes it to `output_path`.
pub fn export_page(file: &FigmaFile, page_name: &str, output_path: &Path) -> AppResult<ExportSummary> {
    let page = layers::find_page(&file.document.children, page_name)?;
    let records = layers::flatten_page(page);
    tracing::info!(page_id = %page.id, layer_count = records.len(), "flattened page");

    let json = serialize_layers(&records)?;
    write_output(output_path, json.as_bytes())?;
    tracing::info!(path = %output_path.display(), "wrote layer file");

    Ok(ExportSummary {
        file_name: file.name.clone(),
        page_id: page.id.clone(),
        layer_count: records.len(),
        output_path: output_path.display().to_string(),
    })
}

pub fn serialize_layers(records: &[LayerRecord]) -> AppResult<String> {
    serde_json::to_string_pretty(records).map_err(|err| AppError::Serialize(err.to_string()))
}

fn write_output(path: &Path, contents: &[u8]) -> AppResult<()> {
    let to_error = |err: std::io::Error| AppError::FileWrite {
        path: path.display().to_string(),
        message: err.to_string(),
    };

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut file = options.open(path).map_err(to_error)?;
    file.write_all(contents).map_err(to_error)?;
    file.flush().map_err(to_error)
}
