use lightbox::LightboxEvent;
use storefront_media::UploadOutcome;
use storefront_types::{Language, OrderStatus, Page};

/// Top-level application message type
#[derive(Debug, Clone)]
pub enum Message {
    /// Switch the visible page
    Navigate(Page),
    /// Hero carousel on the home page
    Hero(HeroMessage),
    /// Gallery grid and its lightbox
    Gallery(GalleryMessage),
    /// Key presses and load notifications queued by the lightbox
    Lightbox(LightboxEvent),
    /// Admin order listing
    Orders(OrdersMessage),
    SetLanguage(Language),
    /// An upload finished, successfully or not
    UploadFinished(UploadOutcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroMessage {
    Next,
    Previous,
    GoTo(usize),
    /// Auto-advance timer tick
    Tick,
    /// Follow the current slide's call-to-action
    ActivateCta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryMessage {
    /// Thumbnail in the grid clicked
    Open(usize),
    Close,
    Previous,
    Next,
    /// Thumbnail inside the lightbox clicked
    Select(usize),
    /// The displayed image finished loading
    ImageLoaded,
    ImageFailed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrdersMessage {
    /// `None` shows every status
    FilterStatus(Option<OrderStatus>),
    Search(String),
}
