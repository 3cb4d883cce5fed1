//! Theme command - show or change the light/dark preference

use todo_dash::core::services::TodoStore;
use todo_dash::output::{OutputMode, ThemeResult};

/// Theme change requested on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    /// Switch to the dark theme
    Dark,
    /// Switch to the light theme
    Light,
    /// Flip whichever theme is active
    Toggle,
}

impl std::str::FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            "toggle" => Ok(Self::Toggle),
            _ => Err(format!("Invalid theme: {s}. Use: dark, light, toggle")),
        }
    }
}

/// Handle `theme [dark|light|toggle]`
pub fn theme(store: &mut TodoStore, change: Option<ThemeMode>, mode: OutputMode) {
    match change {
        None => {},
        Some(ThemeMode::Dark) => store.set_dark_mode(true),
        Some(ThemeMode::Light) => store.set_dark_mode(false),
        Some(ThemeMode::Toggle) => store.toggle_theme(),
    }

    ThemeResult {
        dark_mode: store.dark_mode(),
    }
    .render(mode);
}
