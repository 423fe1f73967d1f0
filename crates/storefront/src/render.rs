//! Plain-text rendering of the current page for the terminal front end.

use crate::{
    app::Storefront,
    fl, localize,
    views::{GalleryView, HomeView, OrdersView, StoryView},
};
use lightbox::ModalView;
use std::fmt::Write;
use storefront_types::{Language, OrderStatus, Page};

fn nav_label(page: Page) -> String {
    match page {
        Page::Home => fl!("nav-home"),
        Page::Story => fl!("nav-story"),
        Page::Gallery => fl!("nav-gallery"),
        Page::Orders => fl!("nav-orders"),
    }
}

pub fn status_label(status: OrderStatus) -> String {
    localize::text(&format!("status-{}", status.as_str()))
}

fn header(out: &mut String, current: Page) {
    let _ = writeln!(out, "== {} ==", fl!("app-title"));
    let menu: Vec<String> = Page::ALL
        .iter()
        .map(|&page| {
            if page == current {
                format!("[{}]", nav_label(page))
            } else {
                nav_label(page)
            }
        })
        .collect();
    let _ = writeln!(out, "{}\n", menu.join(" | "));
}

fn home(out: &mut String, view: &HomeView<'_>, language: Language) {
    match view.slide {
        Some(slide) => {
            let _ = writeln!(out, "{}", slide.title.get(language));
            let subtitle = slide.subtitle.get(language);
            if !subtitle.is_empty() {
                let _ = writeln!(out, "{subtitle}");
            }
            if let Some(cta) = &slide.cta {
                let _ = writeln!(out, "> {}", cta.label.get(language));
            }
            let _ = writeln!(
                out,
                "{}",
                fl!(
                    "hero-position",
                    current = view.slide_number,
                    total = view.slide_total
                )
            );
        }
        None => {
            let _ = writeln!(out, "{}", fl!("hero-empty"));
        }
    }

    if !view.features.is_empty() {
        let _ = writeln!(out, "\n{}", fl!("features-heading"));
        for feature in view.features {
            let _ = writeln!(
                out,
                "  * {}: {}",
                feature.title.get(language),
                feature.description.get(language)
            );
        }
    }
}

fn story(out: &mut String, view: &StoryView<'_>, language: Language) {
    let _ = writeln!(out, "{}", fl!("story-heading"));
    for section in view.sections {
        let _ = writeln!(out, "\n## {}", section.heading.get(language));
        for paragraph in &section.paragraphs {
            let _ = writeln!(out, "{}", paragraph.get(language));
        }
    }

    if !view.timeline.is_empty() {
        let _ = writeln!(out, "\n{}", fl!("timeline-heading"));
        for entry in &view.timeline {
            let _ = writeln!(
                out,
                "  {} {}: {}",
                entry.year,
                entry.title.get(language),
                entry.description.get(language)
            );
        }
    }
}

fn lightbox(out: &mut String, modal: &ModalView<'_>) {
    let label = modal.dialog.get_aria_label();
    let _ = writeln!(out, "\n+-- {label} --+");
    let _ = writeln!(out, "| {}", modal.item.image_url);
    if let Some(caption) = &modal.item.caption {
        let _ = writeln!(out, "| {caption}");
    }
    if let Some(status) = &modal.status {
        let _ = writeln!(out, "| ... {}", status.get_aria_label());
    }

    let strip: Vec<String> = modal
        .thumbnails
        .iter()
        .map(|thumb| {
            if thumb.active {
                format!("[{}]", thumb.index + 1)
            } else {
                format!(" {} ", thumb.index + 1)
            }
        })
        .collect();
    let _ = writeln!(out, "| {}", strip.concat());

    let button = |info: &shared::AccessibilityInfo, glyph: &str| {
        let label = info.get_aria_label();
        if info.disabled {
            format!("({glyph} {label})")
        } else {
            format!("{glyph} {label}")
        }
    };
    let _ = writeln!(
        out,
        "| {}   {}   x {}",
        button(&modal.previous_button, "<"),
        button(&modal.next_button, ">"),
        modal.close_button.get_aria_label()
    );
}

fn gallery(out: &mut String, view: &GalleryView<'_>) {
    let _ = writeln!(out, "{}", fl!("gallery-heading"));
    if view.items.is_empty() {
        let _ = writeln!(out, "{}", fl!("gallery-empty"));
        return;
    }

    for (index, item) in view.items.iter().enumerate() {
        let caption = item.caption.as_deref().unwrap_or(&item.image_url);
        let _ = writeln!(out, "  {:>2}. {caption}", index + 1);
    }

    match &view.lightbox {
        Some(modal) => lightbox(out, modal),
        None => {
            let _ = writeln!(out, "\n{}", fl!("gallery-hint"));
        }
    }
}

fn orders(out: &mut String, view: &OrdersView<'_>) {
    let _ = writeln!(out, "{}", fl!("orders-heading"));
    let status = view
        .filter
        .status
        .map(status_label)
        .unwrap_or_else(|| fl!("orders-filter-all"));
    let _ = writeln!(out, "{}", fl!("orders-filter", status = status));
    if !view.filter.query.trim().is_empty() {
        let _ = writeln!(out, "{}", fl!("orders-search", query = view.filter.query.clone()));
    }
    let _ = writeln!(out);

    if view.rows.is_empty() {
        let _ = writeln!(out, "{}", fl!("orders-empty"));
        return;
    }

    for order in &view.rows {
        let _ = writeln!(
            out,
            "  {}  {}  {:<20} {:<12} {:>3}  {:>12}",
            order.number,
            order.placed_on,
            order.customer,
            status_label(order.status),
            order.item_count(),
            order.total().to_string()
        );
    }
    let _ = writeln!(
        out,
        "\n{}",
        fl!(
            "orders-summary",
            count = view.rows.len(),
            total = view.total.to_string()
        )
    );
}

/// Render the current page. Takes `&mut` only to consume the pending notice.
pub fn render(app: &mut Storefront) -> String {
    let mut out = String::new();
    header(&mut out, app.page());

    let language = app.language();
    match app.page() {
        Page::Home => home(&mut out, &app.home().view(), language),
        Page::Story => story(&mut out, &app.story(), language),
        Page::Gallery => {
            let labels = app.modal_labels();
            gallery(&mut out, &app.gallery().view(&labels));
        }
        Page::Orders => orders(&mut out, &app.orders().view()),
    }

    if let Some(notice) = app.take_notice() {
        let _ = writeln!(out, "\n* {notice}");
    }
    out
}
