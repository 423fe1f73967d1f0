pub mod content;
pub mod gallery;
pub mod order;
pub mod types;

pub use content::{CallToAction, Feature, GalleryEntry, HeroSlide, SiteContent, StorySection, TimelineEntry};
pub use gallery::{GalleryItem, ItemId};
pub use order::{Money, Order, OrderLine, OrderStatus};
pub use types::{Language, LocalizedText, Page, ParseError};
