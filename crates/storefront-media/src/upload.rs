use crate::validate::{UploadFile, ValidationError, validate_upload};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::path::Path;
use storefront_config::UploadConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("upload request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upload service rejected the file ({status}): {message}")]
    Service { status: u16, message: String },
    #[error("upload service returned an unreadable response: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("upload service response had no secure_url")]
    MissingUrl,
}

/// Result of an upload attempt. Never an `Err`: the admin view shows whichever
/// case comes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Uploaded { secure_url: String },
    Rejected(ValidationError),
    Failed { message: String },
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
    error: Option<ServiceError>,
}

#[derive(Debug, Deserialize)]
struct ServiceError {
    message: String,
}

/// Turn an upload service reply into the hosted URL.
pub fn parse_response(status: u16, body: &str) -> Result<String, UploadError> {
    let response: UploadResponse = serde_json::from_str(body)?;

    if let Some(error) = response.error {
        return Err(UploadError::Service {
            status,
            message: error.message,
        });
    }

    if !(200..300).contains(&status) {
        return Err(UploadError::Service {
            status,
            message: "unexpected status".to_string(),
        });
    }

    response.secure_url.ok_or(UploadError::MissingUrl)
}

fn read_failed(path: &Path, e: std::io::Error) -> UploadOutcome {
    tracing::warn!("could not read {}: {e}", path.display());
    UploadOutcome::Failed {
        message: e.to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct UploadClient {
    client: reqwest::Client,
    endpoint: String,
    upload_preset: String,
    max_bytes: u64,
}

impl UploadClient {
    pub fn new(config: &UploadConfig) -> Result<Self, UploadError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            upload_preset: config.upload_preset.clone(),
            max_bytes: config.max_bytes,
        })
    }

    /// Upload a file from disk. The size limit is checked against the file
    /// metadata before anything is read.
    pub async fn upload_path(&self, path: &Path) -> UploadOutcome {
        let size = match tokio::fs::metadata(path).await {
            Ok(metadata) => metadata.len(),
            Err(e) => return read_failed(path, e),
        };
        if size > self.max_bytes {
            tracing::debug!("upload of {} rejected before reading", path.display());
            return UploadOutcome::Rejected(ValidationError::TooLarge {
                size,
                max: self.max_bytes,
            });
        }

        match UploadFile::from_path(path).await {
            Ok(file) => self.upload(file).await,
            Err(e) => read_failed(path, e),
        }
    }

    pub async fn upload(&self, file: UploadFile) -> UploadOutcome {
        let kind = match validate_upload(&file, self.max_bytes) {
            Ok(kind) => kind,
            Err(reason) => {
                tracing::debug!("upload of {} rejected: {reason}", file.file_name);
                return UploadOutcome::Rejected(reason);
            }
        };

        let file_name = file.file_name.clone();
        match self.send(file, kind.mime()).await {
            Ok(secure_url) => {
                tracing::info!("uploaded {file_name} to {secure_url}");
                UploadOutcome::Uploaded { secure_url }
            }
            Err(e) => {
                tracing::warn!("upload of {file_name} failed: {e}");
                UploadOutcome::Failed {
                    message: e.to_string(),
                }
            }
        }
    }

    async fn send(&self, file: UploadFile, mime: &str) -> Result<String, UploadError> {
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(mime)?;
        let form = Form::new()
            .part("file", part)
            .text("upload_preset", self.upload_preset.clone());

        let response = self.client.post(&self.endpoint).multipart(form).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        parse_response(status, &body)
    }
}
