use crate::{
    Key, LightboxAction, PageRoot,
    key_binds::init_key_binds,
    loading::LoadTracker,
    page::{KeySubscription, ScrollLock},
};
use gallery_nav::BoundedNav;
use shared::{LoadingEvent, LoadingState};
use std::{collections::HashMap, time::Duration};
use storefront_types::{GalleryItem, ItemId};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// State the parent owns and passes down on every render.
#[derive(Debug, Clone, Copy)]
pub struct ModalProps<'a> {
    pub is_open: bool,
    pub images: &'a [GalleryItem],
    pub current_index: usize,
}

impl<'a> ModalProps<'a> {
    pub fn new(is_open: bool, images: &'a [GalleryItem], current_index: usize) -> Self {
        Self {
            is_open,
            images,
            current_index,
        }
    }

    /// The item that would be displayed, if the modal is open and the index
    /// points into the list.
    pub fn current_item(&self) -> Option<&'a GalleryItem> {
        if self.is_open {
            self.images.get(self.current_index)
        } else {
            None
        }
    }

    pub fn nav(&self) -> BoundedNav {
        BoundedNav::new(self.current_index, self.images.len())
    }
}

/// What the modal asks its parent to do. The parent decides whether and when
/// to apply it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxRequest {
    Close,
    IndexChange(usize),
}

/// Everything that reaches the modal asynchronously, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightboxEvent {
    Key(Key),
    ImageLoaded { generation: u64 },
    ImageFailed { generation: u64 },
    LoadFallback { generation: u64 },
}

/// Page resources held for exactly as long as the modal is displayed.
#[derive(Debug)]
struct OpenResources {
    _keys: KeySubscription,
    _scroll: ScrollLock,
}

#[derive(Debug)]
pub struct ImageModal {
    page: PageRoot,
    key_binds: HashMap<Key, LightboxAction>,
    events: UnboundedSender<LightboxEvent>,
    loading: LoadTracker,
    resources: Option<OpenResources>,
    displayed: Option<(usize, ItemId)>,
    /// Index most recently requested; its loading generation already started.
    pending: Option<usize>,
}

impl ImageModal {
    pub fn new(page: PageRoot, fallback: Duration) -> (Self, UnboundedReceiver<LightboxEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let modal = Self {
            page,
            key_binds: init_key_binds(),
            loading: LoadTracker::new(fallback, events.clone()),
            events,
            resources: None,
            displayed: None,
            pending: None,
        };
        (modal, receiver)
    }

    pub fn is_open(&self) -> bool {
        self.resources.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    pub fn loading_state(&self) -> LoadingState {
        self.loading.state()
    }

    pub fn load_generation(&self) -> u64 {
        self.loading.generation()
    }

    /// Observe the latest props. Acquires page resources on the transition
    /// to displayed, releases them on the way back, and restarts the loading
    /// flag whenever the displayed item changes.
    pub fn sync(&mut self, props: &ModalProps<'_>) {
        let shown = props
            .current_item()
            .map(|item| (props.current_index, item.id.clone()));

        match shown {
            Some(shown) if self.resources.is_none() => {
                let events = self.events.clone();
                let keys = self.page.subscribe_keys(move |key| {
                    let _ = events.send(LightboxEvent::Key(key.clone()));
                });
                let scroll = self.page.lock_scroll();
                self.resources = Some(OpenResources {
                    _keys: keys,
                    _scroll: scroll,
                });

                tracing::debug!(index = shown.0, id = %shown.1, "lightbox opened");
                self.loading.start();
                self.pending = None;
                self.displayed = Some(shown);
            }
            Some(shown) => {
                if self.displayed.as_ref() != Some(&shown) {
                    if self.pending != Some(shown.0) {
                        self.loading.start();
                    }
                    self.pending = None;
                    self.displayed = Some(shown);
                }
            }
            None if self.resources.is_some() => self.close_resources(),
            None => {}
        }
    }

    pub fn go_to_previous(&mut self, props: &ModalProps<'_>) -> Option<LightboxRequest> {
        if !self.is_open() {
            return None;
        }
        let target = props.nav().previous()?;
        Some(self.request_index(target))
    }

    pub fn go_to_next(&mut self, props: &ModalProps<'_>) -> Option<LightboxRequest> {
        if !self.is_open() {
            return None;
        }
        let target = props.nav().next()?;
        Some(self.request_index(target))
    }

    /// Thumbnail or indicator selection.
    pub fn jump_to(&mut self, props: &ModalProps<'_>, idx: usize) -> Option<LightboxRequest> {
        if !self.is_open() {
            return None;
        }
        let target = props.nav().jump_to(idx)?;
        if target == props.current_index {
            // Already displayed: nothing will change, so nothing to reload.
            return Some(LightboxRequest::IndexChange(target));
        }
        Some(self.request_index(target))
    }

    pub fn request_close(&self) -> Option<LightboxRequest> {
        self.is_open().then_some(LightboxRequest::Close)
    }

    pub fn handle_key(&mut self, props: &ModalProps<'_>, key: &Key) -> Option<LightboxRequest> {
        if !self.is_open() {
            return None;
        }

        match self.key_binds.get(key).copied()? {
            LightboxAction::Close => self.request_close(),
            LightboxAction::Previous => self.go_to_previous(props),
            LightboxAction::Next => self.go_to_next(props),
        }
    }

    pub fn handle_event(
        &mut self,
        props: &ModalProps<'_>,
        event: LightboxEvent,
    ) -> Option<LightboxRequest> {
        match event {
            LightboxEvent::Key(key) => self.handle_key(props, &key),
            LightboxEvent::ImageLoaded { generation } => {
                self.image_loaded(generation);
                None
            }
            LightboxEvent::ImageFailed { generation } => {
                self.image_failed(generation);
                None
            }
            LightboxEvent::LoadFallback { generation } => {
                self.loading
                    .notify(generation, LoadingEvent::FallbackElapsed);
                None
            }
        }
    }

    pub fn image_loaded(&mut self, generation: u64) {
        self.loading.notify(generation, LoadingEvent::LoadComplete);
    }

    /// Failed images are not retried; the spinner just goes away.
    pub fn image_failed(&mut self, generation: u64) {
        if self.loading.notify(generation, LoadingEvent::LoadError) {
            tracing::debug!(generation, "lightbox image failed to load");
        }
    }

    fn request_index(&mut self, target: usize) -> LightboxRequest {
        tracing::debug!(target, "lightbox index change requested");
        self.pending = Some(target);
        self.loading.start();
        LightboxRequest::IndexChange(target)
    }

    fn close_resources(&mut self) {
        self.resources = None;
        self.loading.cancel();
        self.displayed = None;
        self.pending = None;
        tracing::debug!("lightbox closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Named, Overflow};

    fn images(n: u64) -> Vec<GalleryItem> {
        (0..n)
            .map(|i| GalleryItem::new(i, format!("https://cdn.example/{i}.jpg")))
            .collect()
    }

    fn modal() -> (ImageModal, UnboundedReceiver<LightboxEvent>, PageRoot) {
        let page = PageRoot::new();
        let (modal, rx) = ImageModal::new(page.clone(), Duration::from_millis(300));
        (modal, rx, page)
    }

    #[tokio::test]
    async fn open_acquires_and_close_releases() {
        let (mut modal, _rx, page) = modal();
        let list = images(3);

        modal.sync(&ModalProps::new(true, &list, 0));
        assert!(modal.is_open());
        assert_eq!(page.listener_count(), 1);
        assert_eq!(page.scroll_lock_count(), 1);
        assert_eq!(page.overflow(), Overflow::Hidden);

        modal.sync(&ModalProps::new(false, &list, 0));
        assert!(!modal.is_open());
        assert_eq!(page.listener_count(), 0);
        assert_eq!(page.scroll_lock_count(), 0);
        assert_eq!(page.overflow(), Overflow::Auto);
    }

    #[tokio::test]
    async fn repeated_syncs_do_not_stack_resources() {
        let (mut modal, _rx, page) = modal();
        let list = images(3);

        for _ in 0..3 {
            modal.sync(&ModalProps::new(true, &list, 1));
            modal.sync(&ModalProps::new(true, &list, 1));
            assert_eq!(page.listener_count(), 1);
            assert_eq!(page.scroll_lock_count(), 1);
            modal.sync(&ModalProps::new(false, &list, 1));
        }

        assert_eq!(page.listener_count(), 0);
        assert_eq!(page.scroll_lock_count(), 0);
    }

    #[tokio::test]
    async fn empty_list_renders_nothing_and_installs_nothing() {
        let (mut modal, _rx, page) = modal();
        let props = ModalProps::new(true, &[], 0);

        modal.sync(&props);
        assert!(!modal.is_open());
        assert_eq!(page.listener_count(), 0);
        assert_eq!(page.overflow(), Overflow::Auto);
        assert_eq!(modal.handle_key(&props, &Key::Named(Named::Escape)), None);
    }

    #[tokio::test]
    async fn out_of_range_index_counts_as_absent() {
        let (mut modal, _rx, page) = modal();
        let list = images(2);

        modal.sync(&ModalProps::new(true, &list, 5));
        assert!(!modal.is_open());
        assert_eq!(page.listener_count(), 0);
    }

    #[tokio::test]
    async fn teardown_while_open_releases_everything() {
        let (mut modal, _rx, page) = modal();
        let list = images(2);

        modal.sync(&ModalProps::new(true, &list, 0));
        drop(modal);

        assert_eq!(page.listener_count(), 0);
        assert_eq!(page.scroll_lock_count(), 0);
        assert_eq!(page.overflow(), Overflow::Auto);
    }

    #[tokio::test]
    async fn list_shrinking_under_open_modal_closes_it() {
        let (mut modal, _rx, page) = modal();
        let list = images(3);

        modal.sync(&ModalProps::new(true, &list, 2));
        modal.sync(&ModalProps::new(true, &list[..1], 2));

        assert!(!modal.is_open());
        assert_eq!(page.listener_count(), 0);
    }

    #[tokio::test]
    async fn navigation_requests_neighbours_and_sets_loading() {
        let (mut modal, _rx, _page) = modal();
        let list = images(5);
        let props = ModalProps::new(true, &list, 2);
        modal.sync(&props);
        modal.image_loaded(modal.load_generation());
        assert!(!modal.is_loading());

        assert_eq!(
            modal.go_to_previous(&props),
            Some(LightboxRequest::IndexChange(1))
        );
        assert!(modal.is_loading());
        assert_eq!(modal.go_to_next(&props), Some(LightboxRequest::IndexChange(3)));
    }

    #[tokio::test]
    async fn navigation_stops_at_edges() {
        let (mut modal, _rx, _page) = modal();
        let list = images(3);

        let first = ModalProps::new(true, &list, 0);
        modal.sync(&first);
        assert_eq!(modal.go_to_previous(&first), None);

        let last = ModalProps::new(true, &list, 2);
        modal.sync(&last);
        assert_eq!(modal.go_to_next(&last), None);
    }

    #[tokio::test]
    async fn closed_modal_ignores_navigation() {
        let (mut modal, _rx, _page) = modal();
        let list = images(3);
        let props = ModalProps::new(false, &list, 1);
        modal.sync(&props);

        assert_eq!(modal.go_to_next(&props), None);
        assert_eq!(modal.jump_to(&props, 0), None);
        assert_eq!(modal.request_close(), None);
        assert!(!modal.is_loading());
    }

    #[tokio::test]
    async fn jump_clamps_and_request_round_trips() {
        let (mut modal, _rx, _page) = modal();
        let list = images(4);
        modal.sync(&ModalProps::new(true, &list, 0));

        let request = modal.jump_to(&ModalProps::new(true, &list, 0), 2);
        assert_eq!(request, Some(LightboxRequest::IndexChange(2)));

        let applied = ModalProps::new(true, &list, 2);
        modal.sync(&applied);
        assert_eq!(applied.current_item(), Some(&list[2]));

        assert_eq!(
            modal.jump_to(&applied, 40),
            Some(LightboxRequest::IndexChange(3))
        );
    }

    #[tokio::test]
    async fn applied_request_keeps_its_loading_generation() {
        let (mut modal, _rx, _page) = modal();
        let list = images(3);
        let props = ModalProps::new(true, &list, 0);
        modal.sync(&props);

        modal.go_to_next(&props);
        let requested = modal.load_generation();
        modal.sync(&ModalProps::new(true, &list, 1));
        assert_eq!(modal.load_generation(), requested);

        // An index change the modal did not ask for starts a new generation.
        modal.sync(&ModalProps::new(true, &list, 0));
        assert_eq!(modal.load_generation(), requested + 1);
        assert!(modal.is_loading());
    }

    #[tokio::test]
    async fn load_error_clears_spinner() {
        let (mut modal, _rx, _page) = modal();
        let list = images(2);
        modal.sync(&ModalProps::new(true, &list, 0));

        let generation = modal.load_generation();
        modal.image_failed(generation);
        assert!(!modal.is_loading());
        assert_eq!(modal.loading_state(), LoadingState::Failed);
    }
}
