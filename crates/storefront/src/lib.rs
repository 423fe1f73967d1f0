pub mod app;
pub mod content;
pub mod error;
pub mod localize;
pub mod message;
pub mod render;
pub mod router;
pub mod shell;
pub mod views;

pub use app::Storefront;
pub use error::{Error, Result};
