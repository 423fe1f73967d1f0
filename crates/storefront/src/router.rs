use storefront_types::Page;
use tokio::sync::broadcast;

const CAPACITY: usize = 16;

/// Carries page changes from anything that links (menu, hero call-to-action)
/// to the app, which owns the current page.
#[derive(Debug, Clone)]
pub struct NavigateBus {
    sender: broadcast::Sender<Page>,
}

impl Default for NavigateBus {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigateBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CAPACITY);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Page> {
        self.sender.subscribe()
    }

    /// Returns false when nobody is listening.
    pub fn navigate(&self, page: Page) -> bool {
        match self.sender.send(page) {
            Ok(receivers) => {
                tracing::debug!("navigate to {page} ({receivers} listeners)");
                true
            }
            Err(_) => {
                tracing::debug!("navigate to {page} dropped: no listeners");
                false
            }
        }
    }
}
