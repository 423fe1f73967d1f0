use i18n_embed::{
    DesktopLanguageRequester, LanguageLoader,
    fluent::{FluentLanguageLoader, fluent_language_loader},
    unic_langid::LanguageIdentifier,
};
use once_cell::sync::Lazy;
use rust_embed::RustEmbed;
use storefront_types::Language;

use crate::error::Error;

#[derive(RustEmbed)]
#[folder = "i18n/"]
struct Localizations;

pub static LANGUAGE_LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let loader: FluentLanguageLoader = fluent_language_loader!();
    let requested_languages = DesktopLanguageRequester::requested_languages();
    let _result = i18n_embed::select(&loader, &Localizations, &requested_languages);
    plain_arguments(&loader);
    loader
});

#[macro_export]
macro_rules! fl {
    ($message_id:literal) => {{
        i18n_embed_fl::fl!($crate::localize::LANGUAGE_LOADER, $message_id)
    }};
    ($message_id:literal, $($arg:tt)*) => {{
        i18n_embed_fl::fl!($crate::localize::LANGUAGE_LOADER, $message_id, $($arg)*)
    }};
}

/// Plain terminal output: no bidi isolation marks around arguments. Loading
/// builds fresh bundles, so this has to follow every `select`.
fn plain_arguments(loader: &FluentLanguageLoader) {
    loader.set_use_isolating(false);
}

fn language_id(language: Language) -> Result<LanguageIdentifier, Error> {
    Ok(language.code().parse()?)
}

/// Switch every subsequent lookup to `language`. Keys the language lacks
/// resolve from English.
pub fn set_language(language: Language) -> Result<(), Error> {
    let requested = [language_id(language)?];
    let loaded = i18n_embed::select(&*LANGUAGE_LOADER, &Localizations, &requested)?;
    plain_arguments(&LANGUAGE_LOADER);
    tracing::debug!("loaded languages: {loaded:?}");
    Ok(())
}

/// Language the loader falls back to when a key is missing.
pub fn fallback_language() -> LanguageIdentifier {
    LANGUAGE_LOADER.fallback_language().clone()
}

/// Lookup for keys only known at runtime, such as order status labels.
pub fn text(message_id: &str) -> String {
    LANGUAGE_LOADER.get(message_id)
}

/// Best match for the desktop locale, used when the config names none.
pub fn desktop_language() -> Language {
    DesktopLanguageRequester::requested_languages()
        .iter()
        .find_map(|id| id.language.as_str().parse().ok())
        .unwrap_or_default()
}
