//! Sample site content and mock orders, embedded at build time.

use rust_embed::RustEmbed;
use serde::de::DeserializeOwned;
use storefront_types::{Order, SiteContent};
use thiserror::Error;

const SITE_FILE: &str = "site.json";
const ORDERS_FILE: &str = "orders.json";

#[derive(RustEmbed)]
#[folder = "content/"]
struct Content;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("{0} is not embedded")]
    Missing(&'static str),
    #[error("{file} is malformed: {source}")]
    Malformed {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

fn parse<T: DeserializeOwned>(file: &'static str, bytes: &[u8]) -> Result<T, ContentError> {
    serde_json::from_slice(bytes).map_err(|source| ContentError::Malformed { file, source })
}

fn load<T: DeserializeOwned>(file: &'static str) -> Result<T, ContentError> {
    let embedded = Content::get(file).ok_or(ContentError::Missing(file))?;
    let parsed = parse(file, &embedded.data)?;
    tracing::debug!("loaded {file} ({} bytes)", embedded.data.len());
    Ok(parsed)
}

pub fn load_site_content() -> Result<SiteContent, ContentError> {
    load(SITE_FILE)
}

pub fn load_orders() -> Result<Vec<Order>, ContentError> {
    load(ORDERS_FILE)
}

pub fn parse_site_content(bytes: &[u8]) -> Result<SiteContent, ContentError> {
    parse(SITE_FILE, bytes)
}

pub fn parse_orders(bytes: &[u8]) -> Result<Vec<Order>, ContentError> {
    parse(ORDERS_FILE, bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_types::{ItemId, Language, OrderStatus, Page};

    #[test]
    fn embedded_site_content_parses() {
        let content = load_site_content().unwrap();

        assert!(!content.hero.is_empty());
        assert!(!content.features.is_empty());
        assert!(content.gallery.len() >= 3);
        assert_eq!(
            content.hero[0].cta.as_ref().map(|cta| cta.target),
            Some(Page::Gallery)
        );
    }

    #[test]
    fn embedded_gallery_mixes_numeric_and_text_ids() {
        let content = load_site_content().unwrap();
        let ids: Vec<&ItemId> = content.gallery.iter().map(|entry| &entry.id).collect();

        assert!(ids.contains(&&ItemId::Number(1)));
        assert!(ids.contains(&&ItemId::Text("gift-box".to_string())));
        // An entry with no caption at all, and one with only English.
        let items = content.gallery_items(Language::Thai);
        assert!(items.iter().any(|item| item.caption.is_none()));
        assert!(
            items
                .iter()
                .any(|item| item.caption.as_deref() == Some("Coconut Milk Soak"))
        );
    }

    #[test]
    fn embedded_orders_parse() {
        let orders = load_orders().unwrap();

        assert!(!orders.is_empty());
        assert!(orders.iter().any(|order| order.status == OrderStatus::Pending));
        assert!(orders.iter().all(|order| !order.lines.is_empty()));
    }

    #[test]
    fn malformed_content_names_the_file() {
        let err = parse_orders(b"[{\"number\": 7}]").unwrap_err();
        assert!(matches!(err, ContentError::Malformed { file: "orders.json", .. }));
        assert!(err.to_string().starts_with("orders.json is malformed"));

        assert!(parse_site_content(b"{}").is_ok());
        assert!(parse_site_content(b"not json").is_err());
    }
}
