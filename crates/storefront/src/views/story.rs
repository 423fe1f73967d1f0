use storefront_types::{SiteContent, StorySection, TimelineEntry};

#[derive(Debug, Clone, PartialEq)]
pub struct StoryView<'a> {
    pub sections: &'a [StorySection],
    /// Oldest first
    pub timeline: Vec<&'a TimelineEntry>,
}

pub fn view(content: &SiteContent) -> StoryView<'_> {
    StoryView {
        sections: &content.story,
        timeline: content.sorted_timeline(),
    }
}
