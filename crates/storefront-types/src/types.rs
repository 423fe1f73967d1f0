use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown language code: {0}")]
    Language(String),
    #[error("unknown page: {0}")]
    Page(String),
    #[error("unknown order status: {0}")]
    OrderStatus(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Thai,
}

impl Language {
    pub const ALL: &'static [Self] = &[Self::English, Self::Thai];

    /// BCP 47 code used to pick the Fluent bundle.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Thai => "th",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Language::English => Language::Thai,
            Language::Thai => Language::English,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::English => write!(f, "English"),
            Language::Thai => write!(f, "ไทย"),
        }
    }
}

impl FromStr for Language {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "th" | "thai" => Ok(Language::Thai),
            other => Err(ParseError::Language(other.to_string())),
        }
    }
}

/// Copy carried in both site languages. Thai falls back to English when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LocalizedText {
    pub en: String,
    #[serde(default)]
    pub th: String,
}

impl LocalizedText {
    pub fn new<E: Into<String>, T: Into<String>>(en: E, th: T) -> Self {
        Self {
            en: en.into(),
            th: th.into(),
        }
    }

    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Thai if !self.th.is_empty() => &self.th,
            _ => &self.en,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Story,
    Gallery,
    Orders,
}

impl Page {
    pub const ALL: &'static [Self] = &[Self::Home, Self::Story, Self::Gallery, Self::Orders];

    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Story => "story",
            Page::Gallery => "gallery",
            Page::Orders => "orders",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Page {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Page::ALL
            .iter()
            .copied()
            .find(|page| page.slug() == s)
            .ok_or(ParseError::Page(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thai_falls_back_to_english_when_missing() {
        let text = LocalizedText::new("Lavender Dream", "");
        assert_eq!(text.get(Language::Thai), "Lavender Dream");

        let text = LocalizedText::new("Lavender Dream", "ลาเวนเดอร์ดรีม");
        assert_eq!(text.get(Language::Thai), "ลาเวนเดอร์ดรีม");
        assert_eq!(text.get(Language::English), "Lavender Dream");
    }

    #[test]
    fn language_parses_codes_and_names() {
        assert_eq!("th".parse::<Language>(), Ok(Language::Thai));
        assert_eq!("English".parse::<Language>(), Ok(Language::English));
        assert!("fr".parse::<Language>().is_err());
        assert_eq!(Language::English.toggle(), Language::Thai);
    }

    #[test]
    fn page_round_trips_through_slug() {
        for page in Page::ALL {
            assert_eq!(page.slug().parse::<Page>(), Ok(*page));
        }
        assert_eq!(" Gallery ".parse::<Page>(), Ok(Page::Gallery));
        assert!("checkout".parse::<Page>().is_err());
    }
}
