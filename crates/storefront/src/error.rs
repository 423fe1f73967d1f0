use i18n_embed::{I18nEmbedError, unic_langid::LanguageIdentifierError};
use storefront_config::ConfigError;
use storefront_media::UploadError;
use thiserror::Error;

use crate::content::ContentError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    #[error("content: {0}")]
    Content(#[from] ContentError),
    #[error("localization: {0}")]
    Localization(#[from] I18nEmbedError),
    #[error("invalid language identifier: {0}")]
    LanguageId(#[from] LanguageIdentifierError),
    #[error("upload client: {0}")]
    Upload(#[from] UploadError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
