//! Gallery page: the thumbnail grid and the lightbox it controls.

use crate::message::GalleryMessage;
use lightbox::{ImageModal, LightboxEvent, LightboxRequest, ModalLabels, ModalProps, ModalView, PageRoot};
use std::time::Duration;
use storefront_types::GalleryItem;
use tokio::sync::mpsc::UnboundedReceiver;

/// Owns the open flag and the current index; the modal only asks for changes.
#[derive(Debug)]
pub struct GalleryPage {
    items: Vec<GalleryItem>,
    is_open: bool,
    current_index: usize,
    modal: ImageModal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryView<'a> {
    pub items: &'a [GalleryItem],
    pub lightbox: Option<ModalView<'a>>,
}

impl GalleryPage {
    pub fn new(
        items: Vec<GalleryItem>,
        page: PageRoot,
        fallback: Duration,
    ) -> (Self, UnboundedReceiver<LightboxEvent>) {
        let (modal, events) = ImageModal::new(page, fallback);
        (
            Self {
                items,
                is_open: false,
                current_index: 0,
                modal,
            },
            events,
        )
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn modal(&self) -> &ImageModal {
        &self.modal
    }

    /// Replace the list, e.g. after captions were re-resolved for another
    /// language. An index past the new end closes the lightbox.
    pub fn set_items(&mut self, items: Vec<GalleryItem>) {
        self.items = items;
        if self.current_index >= self.items.len() {
            self.current_index = 0;
            self.is_open = false;
        }
        self.sync();
    }

    pub fn close(&mut self) {
        if self.is_open {
            self.apply(LightboxRequest::Close);
        }
    }

    pub fn update(&mut self, message: GalleryMessage) {
        let props = ModalProps::new(self.is_open, &self.items, self.current_index);
        let request = match message {
            GalleryMessage::Open(index) => {
                if index >= self.items.len() {
                    tracing::warn!(
                        "ignoring open of image {index}: gallery has {} images",
                        self.items.len()
                    );
                    return;
                }
                self.is_open = true;
                self.current_index = index;
                self.sync();
                return;
            }
            GalleryMessage::Close => self.modal.request_close(),
            GalleryMessage::Previous => self.modal.go_to_previous(&props),
            GalleryMessage::Next => self.modal.go_to_next(&props),
            GalleryMessage::Select(index) => self.modal.jump_to(&props, index),
            GalleryMessage::ImageLoaded => {
                let generation = self.modal.load_generation();
                self.modal.image_loaded(generation);
                None
            }
            GalleryMessage::ImageFailed => {
                let generation = self.modal.load_generation();
                self.modal.image_failed(generation);
                None
            }
        };

        if let Some(request) = request {
            self.apply(request);
        }
    }

    pub fn handle_lightbox_event(&mut self, event: LightboxEvent) {
        let props = ModalProps::new(self.is_open, &self.items, self.current_index);
        if let Some(request) = self.modal.handle_event(&props, event) {
            self.apply(request);
        }
    }

    pub fn view(&self, labels: &ModalLabels) -> GalleryView<'_> {
        let props = ModalProps::new(self.is_open, &self.items, self.current_index);
        GalleryView {
            items: &self.items,
            lightbox: self.modal.view(&props, labels),
        }
    }

    fn apply(&mut self, request: LightboxRequest) {
        match request {
            LightboxRequest::Close => self.is_open = false,
            LightboxRequest::IndexChange(index) => self.current_index = index,
        }
        self.sync();
    }

    fn sync(&mut self) {
        let props = ModalProps::new(self.is_open, &self.items, self.current_index);
        self.modal.sync(&props);
    }
}
