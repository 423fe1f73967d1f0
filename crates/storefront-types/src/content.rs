use crate::{GalleryItem, ItemId, Language, LocalizedText, Page};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    pub label: LocalizedText,
    pub target: Page,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroSlide {
    pub id: String,
    pub image_url: String,
    pub title: LocalizedText,
    #[serde(default)]
    pub subtitle: LocalizedText,
    #[serde(default)]
    pub cta: Option<CallToAction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorySection {
    pub heading: LocalizedText,
    pub paragraphs: Vec<LocalizedText>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub year: u16,
    pub title: LocalizedText,
    pub description: LocalizedText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub icon: String,
    pub title: LocalizedText,
    pub description: LocalizedText,
}

/// Gallery content record. Captions are bilingual here and get resolved to a
/// single-language [`GalleryItem`] before reaching the lightbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryEntry {
    pub id: ItemId,
    pub image_url: String,
    #[serde(default)]
    pub caption: Option<LocalizedText>,
}

impl GalleryEntry {
    pub fn to_item(&self, language: Language) -> GalleryItem {
        GalleryItem {
            id: self.id.clone(),
            image_url: self.image_url.clone(),
            caption: self
                .caption
                .as_ref()
                .map(|caption| caption.get(language).to_string()),
        }
    }
}

/// Everything the marketing pages render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SiteContent {
    #[serde(default)]
    pub hero: Vec<HeroSlide>,
    #[serde(default)]
    pub story: Vec<StorySection>,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub gallery: Vec<GalleryEntry>,
}

impl SiteContent {
    pub fn gallery_items(&self, language: Language) -> Vec<GalleryItem> {
        self.gallery
            .iter()
            .map(|entry| entry.to_item(language))
            .collect()
    }

    /// Timeline in chronological order regardless of how it was authored.
    pub fn sorted_timeline(&self) -> Vec<&TimelineEntry> {
        let mut entries: Vec<&TimelineEntry> = self.timeline.iter().collect();
        entries.sort_by_key(|entry| entry.year);
        entries
    }
}
