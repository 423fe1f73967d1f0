use image::ImageFormat;
use std::{fmt, path::Path};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageKind {
    Jpeg,
    Png,
    WebP,
}

impl ImageKind {
    pub const ALL: &'static [Self] = &[Self::Jpeg, Self::Png, Self::WebP];

    pub fn mime(self) -> &'static str {
        match self {
            ImageKind::Jpeg => "image/jpeg",
            ImageKind::Png => "image/png",
            ImageKind::WebP => "image/webp",
        }
    }

    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" => Some(ImageKind::Jpeg),
            "image/png" => Some(ImageKind::Png),
            "image/webp" => Some(ImageKind::WebP),
            _ => None,
        }
    }

    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(ImageKind::Jpeg),
            "png" => Some(ImageKind::Png),
            "webp" => Some(ImageKind::WebP),
            _ => None,
        }
    }

    fn from_format(format: ImageFormat) -> Option<Self> {
        match format {
            ImageFormat::Jpeg => Some(ImageKind::Jpeg),
            ImageFormat::Png => Some(ImageKind::Png),
            ImageFormat::WebP => Some(ImageKind::WebP),
            _ => None,
        }
    }

    /// Identify the format from magic bytes.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        image::guess_format(bytes).ok().and_then(Self::from_format)
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageKind::Jpeg => write!(f, "JPEG"),
            ImageKind::Png => write!(f, "PNG"),
            ImageKind::WebP => write!(f, "WebP"),
        }
    }
}

/// Validation failures. The `Display` text is the reason shown to the admin.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no file selected")]
    Missing,
    #[error("file is too large ({} MB); the limit is {} MB", megabytes(.size), megabytes(.max))]
    TooLarge { size: u64, max: u64 },
    #[error("unsupported file type ({0}); use JPEG, PNG or WebP")]
    UnsupportedType(String),
}

fn megabytes(bytes: &u64) -> String {
    format!("{:.1}", *bytes as f64 / (1024.0 * 1024.0))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    /// Declared MIME type, if the picker supplied one.
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new<S: Into<String>>(file_name: S, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type,
            bytes,
        }
    }

    /// Read a file from disk, declaring its type from the extension.
    pub async fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("upload")
            .to_string();
        let content_type = ImageKind::from_extension(path).map(|kind| kind.mime().to_string());

        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

pub fn validate_upload(file: &UploadFile, max_bytes: u64) -> Result<ImageKind, ValidationError> {
    if file.bytes.is_empty() {
        return Err(ValidationError::Missing);
    }

    if file.size() > max_bytes {
        return Err(ValidationError::TooLarge {
            size: file.size(),
            max: max_bytes,
        });
    }

    match &file.content_type {
        Some(declared) => ImageKind::from_mime(declared)
            .ok_or_else(|| ValidationError::UnsupportedType(declared.clone())),
        None => ImageKind::sniff(&file.bytes)
            .ok_or_else(|| ValidationError::UnsupportedType("unknown".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
    const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
    const WEBP_MAGIC: &[u8] = b"RIFF\x24\0\0\0WEBPVP8 ";
    const GIF_MAGIC: &[u8] = b"GIF89a\x01\0\x01\0";

    const FIVE_MB: u64 = 5 * 1024 * 1024;

    #[test]
    fn empty_file_is_missing() {
        let file = UploadFile::new("a.png", Some("image/png".into()), Vec::new());
        assert_eq!(validate_upload(&file, FIVE_MB), Err(ValidationError::Missing));
    }

    #[test]
    fn oversized_file_is_rejected() {
        let file = UploadFile::new("big.jpg", Some("image/jpeg".into()), vec![0; FIVE_MB as usize + 1]);
        let err = validate_upload(&file, FIVE_MB).unwrap_err();

        assert!(matches!(err, ValidationError::TooLarge { max, .. } if max == FIVE_MB));
        assert_eq!(
            err.to_string(),
            "file is too large (5.0 MB); the limit is 5.0 MB"
        );
    }

    #[test]
    fn exactly_at_limit_is_allowed() {
        let file = UploadFile::new("edge.png", Some("image/png".into()), vec![0; 1024]);
        assert_eq!(validate_upload(&file, 1024), Ok(ImageKind::Png));
    }

    #[test]
    fn declared_type_must_be_allowed() {
        let file = UploadFile::new("anim.gif", Some("image/gif".into()), GIF_MAGIC.to_vec());
        let err = validate_upload(&file, FIVE_MB).unwrap_err();

        assert_eq!(err, ValidationError::UnsupportedType("image/gif".into()));
        assert!(err.to_string().contains("JPEG, PNG or WebP"));
    }

    #[test]
    fn undeclared_type_is_sniffed() {
        let sniff = |bytes: &[u8]| validate_upload(&UploadFile::new("blob", None, bytes.to_vec()), FIVE_MB);

        assert_eq!(sniff(PNG_MAGIC), Ok(ImageKind::Png));
        assert_eq!(sniff(JPEG_MAGIC), Ok(ImageKind::Jpeg));
        assert_eq!(sniff(WEBP_MAGIC), Ok(ImageKind::WebP));
        assert_eq!(
            sniff(GIF_MAGIC),
            Err(ValidationError::UnsupportedType("unknown".into()))
        );
    }

    #[tokio::test]
    async fn from_path_declares_type_from_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bomb.WEBP");
        std::fs::write(&path, WEBP_MAGIC).unwrap();

        let file = UploadFile::from_path(&path).await.unwrap();
        assert_eq!(file.file_name, "bomb.WEBP");
        assert_eq!(file.content_type.as_deref(), Some("image/webp"));
        assert_eq!(validate_upload(&file, FIVE_MB), Ok(ImageKind::WebP));
    }
}
