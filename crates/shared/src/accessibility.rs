use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AriaRole {
    #[default]
    Image,
    Dialog,
    Button,
    Status,
    Listbox,
    Option,
    Navigation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AccessibilityInfo {
    pub role: AriaRole,
    pub label: Option<String>,
    pub description: Option<String>,
    pub live_region: bool,
    pub busy: bool,
    pub disabled: bool,
    pub selected: bool,
    pub modal: bool,
    pub pos_in_set: Option<usize>,
    pub setsize: Option<usize>,
}

impl AccessibilityInfo {
    pub fn new(role: AriaRole) -> Self {
        Self {
            role,
            ..Default::default()
        }
    }

    pub fn dialog() -> Self {
        Self::new(AriaRole::Dialog).make_modal()
    }

    pub fn button() -> Self {
        Self::new(AriaRole::Button)
    }

    pub fn status() -> Self {
        Self::new(AriaRole::Status).make_live_region()
    }

    pub fn with_label<S: Into<String>>(mut self, label: S) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn make_live_region(mut self) -> Self {
        self.live_region = true;
        self
    }

    pub fn make_busy(mut self) -> Self {
        self.busy = true;
        self
    }

    pub fn make_modal(mut self) -> Self {
        self.modal = true;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// 1-based position, as screen readers announce it.
    pub fn with_set_position(mut self, index: usize, setsize: usize) -> Self {
        self.pos_in_set = Some(index + 1);
        self.setsize = Some(setsize);
        self
    }

    pub fn get_aria_label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| self.get_default_label().to_string())
    }

    fn get_default_label(&self) -> &'static str {
        match self.role {
            AriaRole::Image => "Image",
            AriaRole::Dialog => "Image viewer",
            AriaRole::Button => "Button",
            AriaRole::Status => "Status",
            AriaRole::Listbox => "Thumbnails",
            AriaRole::Option => "Thumbnail",
            AriaRole::Navigation => "Navigation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialog_is_modal() {
        let info = AccessibilityInfo::dialog().with_label("Image 2 of 5");

        assert_eq!(info.role, AriaRole::Dialog);
        assert!(info.modal);
        assert_eq!(info.get_aria_label(), "Image 2 of 5");
    }

    #[test]
    fn disabled_button_reports_state() {
        let info = AccessibilityInfo::button()
            .with_label("Previous image")
            .with_disabled(true);

        assert!(info.disabled);
        assert!(!info.selected);
    }

    #[test]
    fn default_label_used_when_none_given() {
        assert_eq!(AccessibilityInfo::dialog().get_aria_label(), "Image viewer");
        assert_eq!(
            AccessibilityInfo::button().with_label("Close").get_aria_label(),
            "Close"
        );
    }
}
