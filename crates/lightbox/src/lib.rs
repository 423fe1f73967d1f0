//! Controlled image lightbox.
//!
//! The parent owns `is_open` and `current_index` and hands them in as
//! [`ModalProps`]; the modal answers with [`LightboxRequest`]s and keeps only
//! its own loading state plus the page resources it holds while open.

pub mod key_binds;
pub mod loading;
pub mod modal;
pub mod page;
pub mod view;

pub use key_binds::{Key, LightboxAction, Named};
pub use modal::{ImageModal, LightboxEvent, LightboxRequest, ModalProps};
pub use page::{KeySubscription, Overflow, PageRoot, ScrollLock};
pub use view::{ModalLabels, ModalView, ThumbnailView};
