use crate::{message::HeroMessage, router::NavigateBus};
use gallery_nav::Carousel;
use storefront_types::{Feature, HeroSlide};

#[derive(Debug)]
pub struct HomePage {
    hero: Carousel<HeroSlide>,
    features: Vec<Feature>,
    navigator: NavigateBus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomeView<'a> {
    pub slide: Option<&'a HeroSlide>,
    /// 1-based, 0 when there are no slides
    pub slide_number: usize,
    pub slide_total: usize,
    pub features: &'a [Feature],
}

impl HomePage {
    pub fn new(slides: Vec<HeroSlide>, features: Vec<Feature>, navigator: NavigateBus) -> Self {
        Self {
            hero: Carousel::new(slides),
            features,
            navigator,
        }
    }

    pub fn current_slide(&self) -> Option<&HeroSlide> {
        self.hero.current()
    }

    pub fn update(&mut self, message: HeroMessage) {
        match message {
            HeroMessage::Next | HeroMessage::Tick => {
                self.hero.go_next();
            }
            HeroMessage::Previous => {
                self.hero.go_prev();
            }
            HeroMessage::GoTo(index) => {
                self.hero.go_to(index);
            }
            HeroMessage::ActivateCta => {
                let target = self
                    .hero
                    .current()
                    .and_then(|slide| slide.cta.as_ref())
                    .map(|cta| cta.target);
                match target {
                    Some(page) => {
                        self.navigator.navigate(page);
                    }
                    None => tracing::debug!("current hero slide has no call-to-action"),
                }
            }
        }
    }

    pub fn view(&self) -> HomeView<'_> {
        let slide = self.hero.current();
        HomeView {
            slide,
            slide_number: if slide.is_some() { self.hero.index() + 1 } else { 0 },
            slide_total: self.hero.total(),
            features: &self.features,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_types::{CallToAction, LocalizedText, Page};

    fn slide(id: &str, target: Option<Page>) -> HeroSlide {
        HeroSlide {
            id: id.to_string(),
            image_url: format!("https://img.example/{id}.webp"),
            title: LocalizedText::new(id, ""),
            subtitle: LocalizedText::default(),
            cta: target.map(|target| CallToAction {
                label: LocalizedText::new("Go", ""),
                target,
            }),
        }
    }

    fn home() -> (HomePage, tokio::sync::broadcast::Receiver<Page>) {
        let bus = NavigateBus::new();
        let rx = bus.subscribe();
        let page = HomePage::new(
            vec![slide("a", Some(Page::Gallery)), slide("b", None), slide("c", Some(Page::Story))],
            Vec::new(),
            bus,
        );
        (page, rx)
    }

    #[test]
    fn ticks_wrap_around() {
        let (mut page, _rx) = home();

        page.update(HeroMessage::Tick);
        page.update(HeroMessage::Tick);
        assert_eq!(page.current_slide().map(|s| s.id.as_str()), Some("c"));

        page.update(HeroMessage::Tick);
        assert_eq!(page.view().slide_number, 1);
    }

    #[test]
    fn manual_navigation_and_out_of_range_jump() {
        let (mut page, _rx) = home();

        page.update(HeroMessage::Previous);
        assert_eq!(page.view().slide_number, 3);

        page.update(HeroMessage::GoTo(1));
        page.update(HeroMessage::GoTo(9));
        assert_eq!(page.view().slide_number, 2);
    }

    #[test]
    fn cta_publishes_its_target() {
        let (mut page, mut rx) = home();

        page.update(HeroMessage::ActivateCta);
        assert_eq!(rx.try_recv().unwrap(), Page::Gallery);

        page.update(HeroMessage::Next);
        page.update(HeroMessage::ActivateCta);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn empty_hero_views_as_zero_of_zero() {
        let page = HomePage::new(Vec::new(), Vec::new(), NavigateBus::new());
        let view = page.view();

        assert!(view.slide.is_none());
        assert_eq!((view.slide_number, view.slide_total), (0, 0));
    }
}
