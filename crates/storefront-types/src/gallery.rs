use serde::{Deserialize, Serialize};
use std::fmt;

/// Gallery identifiers come from hand-written content, so both numeric and
/// string ids are accepted. Unique within one list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{n}"),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        ItemId::Number(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        ItemId::Text(value.to_string())
    }
}

/// One displayable image. Owned by whoever renders the gallery; the lightbox
/// only ever borrows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: ItemId,
    pub image_url: String,
    #[serde(default)]
    pub caption: Option<String>,
}

impl GalleryItem {
    pub fn new<I: Into<ItemId>, U: Into<String>>(id: I, image_url: U) -> Self {
        Self {
            id: id.into(),
            image_url: image_url.into(),
            caption: None,
        }
    }

    pub fn with_caption<S: Into<String>>(mut self, caption: S) -> Self {
        self.caption = Some(caption.into());
        self
    }
}
