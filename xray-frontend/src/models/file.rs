use std::path::Path;

/// Image picked by the user, held in memory for one submit.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl SelectedFile {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            data,
        }
    }

    /// Read a file from disk, guessing its content type from the extension.
    pub async fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let data = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unnamed".to_string());

        Ok(Self {
            content_type: content_type_for(path).to_string(),
            file_name,
            data,
        })
    }
}

fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("webp") => "image/webp",
        Some("tif") | Some("tiff") => "image/tiff",
        Some("dcm") => "application/dicom",
        _ => "application/octet-stream",
    }
}
