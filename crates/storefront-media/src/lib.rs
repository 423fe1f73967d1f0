pub mod upload;
pub mod validate;

pub use upload::{UploadClient, UploadError, UploadOutcome};
pub use validate::{ImageKind, UploadFile, ValidationError, validate_upload};
