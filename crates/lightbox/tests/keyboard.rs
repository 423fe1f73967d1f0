#[cfg(test)]
mod tests {
    use lightbox::{
        ImageModal, Key, LightboxEvent, LightboxRequest, ModalProps, Named, Overflow, PageRoot,
    };
    use std::time::Duration;
    use storefront_types::GalleryItem;
    use tokio::sync::mpsc::UnboundedReceiver;

    /// Stand-in for the parent: owns open/index state and applies requests
    /// synchronously, the way the gallery page does.
    struct Parent {
        images: Vec<GalleryItem>,
        is_open: bool,
        current_index: usize,
        requests: Vec<LightboxRequest>,
    }

    impl Parent {
        fn new(count: u64) -> Self {
            Self {
                images: (0..count)
                    .map(|i| GalleryItem::new(i, format!("{i}.webp")))
                    .collect(),
                is_open: false,
                current_index: 0,
                requests: Vec::new(),
            }
        }

        fn props(&self) -> ModalProps<'_> {
            ModalProps::new(self.is_open, &self.images, self.current_index)
        }

        fn apply(&mut self, request: LightboxRequest) {
            self.requests.push(request);
            match request {
                LightboxRequest::Close => self.is_open = false,
                LightboxRequest::IndexChange(idx) => self.current_index = idx,
            }
        }
    }

    /// Drain queued events into the modal, applying each request before the
    /// next event is looked at.
    fn pump(parent: &mut Parent, modal: &mut ImageModal, rx: &mut UnboundedReceiver<LightboxEvent>) {
        while let Ok(event) = rx.try_recv() {
            let request = modal.handle_event(&parent.props(), event);
            if let Some(request) = request {
                parent.apply(request);
                modal.sync(&parent.props());
            }
        }
    }

    fn press(page: &PageRoot, named: Named) {
        page.dispatch_key(&Key::Named(named));
    }

    #[tokio::test]
    async fn arrow_right_walks_to_the_end_and_stops() {
        let page = PageRoot::new();
        let (mut modal, mut rx) = ImageModal::new(page.clone(), Duration::from_millis(300));
        let mut parent = Parent::new(3);

        parent.is_open = true;
        modal.sync(&parent.props());

        press(&page, Named::ArrowRight);
        pump(&mut parent, &mut modal, &mut rx);
        press(&page, Named::ArrowRight);
        pump(&mut parent, &mut modal, &mut rx);
        press(&page, Named::ArrowRight);
        pump(&mut parent, &mut modal, &mut rx);

        assert_eq!(
            parent.requests,
            vec![
                LightboxRequest::IndexChange(1),
                LightboxRequest::IndexChange(2)
            ]
        );
        assert_eq!(parent.current_index, 2);
    }

    #[tokio::test]
    async fn queued_presses_are_handled_in_order() {
        let page = PageRoot::new();
        let (mut modal, mut rx) = ImageModal::new(page.clone(), Duration::from_millis(300));
        let mut parent = Parent::new(4);

        parent.is_open = true;
        parent.current_index = 1;
        modal.sync(&parent.props());

        press(&page, Named::ArrowRight);
        press(&page, Named::ArrowRight);
        press(&page, Named::ArrowLeft);
        pump(&mut parent, &mut modal, &mut rx);

        assert_eq!(
            parent.requests,
            vec![
                LightboxRequest::IndexChange(2),
                LightboxRequest::IndexChange(3),
                LightboxRequest::IndexChange(2)
            ]
        );
    }

    #[tokio::test]
    async fn escape_closes_from_any_index() {
        for start in 0..3 {
            let page = PageRoot::new();
            let (mut modal, mut rx) = ImageModal::new(page.clone(), Duration::from_millis(300));
            let mut parent = Parent::new(3);
            parent.is_open = true;
            parent.current_index = start;
            modal.sync(&parent.props());

            press(&page, Named::Escape);
            pump(&mut parent, &mut modal, &mut rx);

            assert_eq!(parent.requests, vec![LightboxRequest::Close]);
            assert!(!modal.is_open());
            assert_eq!(page.listener_count(), 0);
            assert_eq!(page.overflow(), Overflow::Auto);
        }
    }

    #[tokio::test]
    async fn keys_after_close_are_ignored() {
        let page = PageRoot::new();
        let (mut modal, mut rx) = ImageModal::new(page.clone(), Duration::from_millis(300));
        let mut parent = Parent::new(3);
        parent.is_open = true;
        modal.sync(&parent.props());

        // Escape and a trailing arrow are both queued before either is handled.
        press(&page, Named::Escape);
        press(&page, Named::ArrowRight);
        pump(&mut parent, &mut modal, &mut rx);

        assert_eq!(parent.requests, vec![LightboxRequest::Close]);

        press(&page, Named::ArrowRight);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn unbound_keys_do_nothing() {
        let page = PageRoot::new();
        let (mut modal, mut rx) = ImageModal::new(page.clone(), Duration::from_millis(300));
        let mut parent = Parent::new(3);
        parent.is_open = true;
        parent.current_index = 1;
        modal.sync(&parent.props());

        press(&page, Named::ArrowUp);
        press(&page, Named::Enter);
        page.dispatch_key(&Key::Character("x".into()));
        pump(&mut parent, &mut modal, &mut rx);

        assert!(parent.requests.is_empty());
    }

    #[tokio::test]
    async fn open_close_cycles_never_leak_listeners() {
        let page = PageRoot::new();
        let (mut modal, _rx) = ImageModal::new(page.clone(), Duration::from_millis(300));
        let mut parent = Parent::new(2);

        for _ in 0..10 {
            parent.is_open = true;
            modal.sync(&parent.props());
            assert_eq!(page.listener_count(), 1);
            assert_eq!(page.scroll_lock_count(), 1);

            parent.is_open = false;
            modal.sync(&parent.props());
            assert_eq!(page.listener_count(), 0);
            assert_eq!(page.scroll_lock_count(), 0);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn fallback_clears_spinner_and_never_fires_after_close() {
        let page = PageRoot::new();
        let (mut modal, mut rx) = ImageModal::new(page.clone(), Duration::from_millis(300));
        let mut parent = Parent::new(3);
        parent.is_open = true;
        modal.sync(&parent.props());
        tokio::task::yield_now().await;
        assert!(modal.is_loading());

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, LightboxEvent::LoadFallback { .. }));
        modal.handle_event(&parent.props(), event);
        assert!(!modal.is_loading());

        // Navigate, then close before the new fallback expires.
        press(&page, Named::ArrowRight);
        pump(&mut parent, &mut modal, &mut rx);
        assert!(modal.is_loading());
        tokio::task::yield_now().await;

        parent.is_open = false;
        modal.sync(&parent.props());
        tokio::time::advance(Duration::from_secs(2)).await;
        tokio::task::yield_now().await;

        assert!(rx.try_recv().is_err());
        assert!(!modal.is_loading());
    }
}
