//! Main app state

use crate::{
    fl, localize,
    message::{HeroMessage, Message},
    router::NavigateBus,
    views::{GalleryPage, HomePage, OrdersPage, StoryView, story},
};
use lightbox::{LightboxEvent, ModalLabels, PageRoot};
use storefront_config::StorefrontConfig;
use storefront_media::UploadOutcome;
use storefront_types::{Language, Order, Page, SiteContent};
use tokio::sync::mpsc::UnboundedReceiver;

/// Main app state
#[derive(Debug)]
pub struct Storefront {
    config: StorefrontConfig,
    language: Language,
    page: Page,
    content: SiteContent,
    navigator: NavigateBus,
    page_root: PageRoot,
    home: HomePage,
    gallery: GalleryPage,
    orders: OrdersPage,
    /// One-shot status line shown under the next render
    notice: Option<String>,
}

impl Storefront {
    pub fn new(
        config: StorefrontConfig,
        content: SiteContent,
        orders: Vec<Order>,
    ) -> (Self, UnboundedReceiver<LightboxEvent>) {
        let language = config.language.unwrap_or_else(localize::desktop_language);
        if let Err(e) = localize::set_language(language) {
            tracing::warn!("failed to load {language} translations: {e}");
        }

        let navigator = NavigateBus::new();
        let page_root = PageRoot::new();
        let home = HomePage::new(content.hero.clone(), content.features.clone(), navigator.clone());
        let (gallery, lightbox_events) = GalleryPage::new(
            content.gallery_items(language),
            page_root.clone(),
            config.loading_fallback(),
        );

        tracing::info!(
            "storefront ready: {} slides, {} gallery images, {} orders",
            content.hero.len(),
            content.gallery.len(),
            orders.len()
        );

        (
            Self {
                config,
                language,
                page: Page::default(),
                content,
                navigator,
                page_root,
                home,
                gallery,
                orders: OrdersPage::new(orders),
                notice: None,
            },
            lightbox_events,
        )
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    pub fn navigator(&self) -> &NavigateBus {
        &self.navigator
    }

    /// Document root shared with the lightbox: key presses go in here.
    pub fn page_root(&self) -> &PageRoot {
        &self.page_root
    }

    pub fn home(&self) -> &HomePage {
        &self.home
    }

    pub fn gallery(&self) -> &GalleryPage {
        &self.gallery
    }

    pub fn orders(&self) -> &OrdersPage {
        &self.orders
    }

    pub fn story(&self) -> StoryView<'_> {
        story::view(&self.content)
    }

    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    pub fn modal_labels(&self) -> ModalLabels {
        ModalLabels {
            image: fl!("lightbox-image"),
            close: fl!("lightbox-close"),
            previous: fl!("lightbox-previous"),
            next: fl!("lightbox-next"),
            loading: fl!("lightbox-loading"),
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Navigate(page) => self.navigate(page),
            Message::Hero(HeroMessage::Tick) if self.page != Page::Home => {}
            Message::Hero(hero) => self.home.update(hero),
            Message::Gallery(gallery) => {
                if self.page != Page::Gallery {
                    tracing::debug!("gallery message {gallery:?} while on {}", self.page);
                }
                self.gallery.update(gallery);
            }
            Message::Lightbox(event) => self.gallery.handle_lightbox_event(event),
            Message::Orders(orders) => self.orders.update(orders),
            Message::SetLanguage(language) => self.set_language(language),
            Message::UploadFinished(outcome) => {
                self.notice = Some(match outcome {
                    UploadOutcome::Uploaded { secure_url } => {
                        fl!("upload-success", url = secure_url)
                    }
                    UploadOutcome::Rejected(reason) => {
                        fl!("upload-rejected", reason = reason.to_string())
                    }
                    UploadOutcome::Failed { message } => fl!("upload-failed", reason = message),
                });
            }
        }
    }

    fn navigate(&mut self, page: Page) {
        if page == self.page {
            return;
        }
        if self.page == Page::Gallery {
            // Leaving the page unmounts the lightbox along with it.
            self.gallery.close();
        }
        tracing::debug!("page {} -> {page}", self.page);
        self.page = page;
    }

    fn set_language(&mut self, language: Language) {
        if let Err(e) = localize::set_language(language) {
            tracing::warn!("failed to switch to {language}: {e}");
            return;
        }
        self.language = language;
        self.config.language = Some(language);
        self.gallery.set_items(self.content.gallery_items(language));
        self.notice = Some(fl!("language-changed", language = language.to_string()));
    }
}
