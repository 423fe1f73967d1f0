use std::{collections::HashMap, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Named {
    Escape,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Enter,
    Home,
    End,
    Tab,
    Space,
}

/// A key press as the page reports it, named after DOM `KeyboardEvent.key`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Named(Named),
    Character(String),
}

impl FromStr for Key {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let named = match s {
            "Escape" | "Esc" | "esc" | "escape" => Named::Escape,
            "ArrowLeft" | "Left" | "left" => Named::ArrowLeft,
            "ArrowRight" | "Right" | "right" => Named::ArrowRight,
            "ArrowUp" | "Up" | "up" => Named::ArrowUp,
            "ArrowDown" | "Down" | "down" => Named::ArrowDown,
            "Enter" | "enter" => Named::Enter,
            "Home" | "home" => Named::Home,
            "End" | "end" => Named::End,
            "Tab" | "tab" => Named::Tab,
            " " | "Space" | "space" => Named::Space,
            other => return Ok(Key::Character(other.to_string())),
        };
        Ok(Key::Named(named))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightboxAction {
    Close,
    Previous,
    Next,
}

pub fn init_key_binds() -> HashMap<Key, LightboxAction> {
    let mut binds = HashMap::new();

    binds.insert(Key::Named(Named::Escape), LightboxAction::Close);

    // Navigation arrow keys
    binds.insert(Key::Named(Named::ArrowLeft), LightboxAction::Previous);
    binds.insert(Key::Named(Named::ArrowRight), LightboxAction::Next);

    binds
}
