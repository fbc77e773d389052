use crate::models::SelectedFile;
use base64::{engine::general_purpose, Engine as _};

/// Encode a selected file as a `data:` URL for the preview image.
///
/// Encoding runs on the blocking pool so large images do not stall the
/// submit handler that awaits it.
pub async fn read_as_data_url(file: &SelectedFile) -> anyhow::Result<String> {
    let content_type = file.content_type.clone();
    let data = file.data.clone();

    let encoded = tokio::task::spawn_blocking(move || general_purpose::STANDARD.encode(data))
        .await
        .map_err(|e| anyhow::anyhow!("Preview encoding task failed: {}", e))?;

    Ok(format!("data:{};base64,{}", content_type, encoded))
}
