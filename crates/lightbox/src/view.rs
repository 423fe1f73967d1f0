use crate::{ImageModal, ModalProps};
use shared::AccessibilityInfo;
use storefront_types::GalleryItem;

/// Strings the modal shows, supplied by whoever owns localization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalLabels {
    pub image: String,
    pub close: String,
    pub previous: String,
    pub next: String,
    pub loading: String,
}

impl Default for ModalLabels {
    fn default() -> Self {
        Self {
            image: "Image".to_string(),
            close: "Close".to_string(),
            previous: "Previous image".to_string(),
            next: "Next image".to_string(),
            loading: "Loading image".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailView<'a> {
    pub index: usize,
    pub item: &'a GalleryItem,
    pub active: bool,
    pub a11y: AccessibilityInfo,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModalView<'a> {
    pub item: &'a GalleryItem,
    pub index: usize,
    pub total: usize,
    /// "2 / 5"
    pub position: String,
    pub loading: bool,
    /// Generation to quote back in load notifications for `item`.
    pub load_generation: u64,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub thumbnails: Vec<ThumbnailView<'a>>,
    pub dialog: AccessibilityInfo,
    pub close_button: AccessibilityInfo,
    pub previous_button: AccessibilityInfo,
    pub next_button: AccessibilityInfo,
    pub status: Option<AccessibilityInfo>,
}

impl ImageModal {
    /// `None` whenever nothing should be drawn: closed, empty list, or an
    /// index with no item behind it.
    pub fn view<'a>(&self, props: &ModalProps<'a>, labels: &ModalLabels) -> Option<ModalView<'a>> {
        let item = props.current_item()?;
        let nav = props.nav();
        let position = nav.position_label();
        let loading = self.is_loading();

        let thumbnails = props
            .images
            .iter()
            .enumerate()
            .map(|(index, thumb)| {
                let active = index == props.current_index;
                let label = thumb
                    .caption
                    .clone()
                    .unwrap_or_else(|| format!("{} {}", labels.image, index + 1));
                ThumbnailView {
                    index,
                    item: thumb,
                    active,
                    a11y: AccessibilityInfo::new(shared::AriaRole::Option)
                        .with_label(label)
                        .with_selected(active)
                        .with_set_position(index, nav.total()),
                }
            })
            .collect();

        let mut dialog =
            AccessibilityInfo::dialog().with_label(format!("{} {position}", labels.image));
        if let Some(caption) = &item.caption {
            dialog = dialog.with_description(caption.clone());
        }

        Some(ModalView {
            item,
            index: props.current_index,
            total: nav.total(),
            position,
            loading,
            load_generation: self.load_generation(),
            can_go_previous: nav.can_go_previous(),
            can_go_next: nav.can_go_next(),
            thumbnails,
            dialog,
            close_button: AccessibilityInfo::button().with_label(labels.close.clone()),
            previous_button: AccessibilityInfo::button()
                .with_label(labels.previous.clone())
                .with_disabled(!nav.can_go_previous()),
            next_button: AccessibilityInfo::button()
                .with_label(labels.next.clone())
                .with_disabled(!nav.can_go_next()),
            status: loading.then(|| {
                AccessibilityInfo::status()
                    .with_label(labels.loading.clone())
                    .make_busy()
            }),
        })
    }
}
