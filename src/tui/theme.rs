//! Centralized theme module for TUI color constants and styles

use ratatui::prelude::*;

use crate::prefs::ThemeMode;
use crate::roster::Tier;

/// Complete color palette for the TUI
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Base
    pub background: Color,
    pub text: Color,

    // Score tiers (traffic light pattern)
    pub tier_low: Color,
    pub tier_mid: Color,
    pub tier_high: Color,

    // Score bar
    pub bar_empty: Color,

    // Table colors
    pub row_alt_bg: Color,
    pub row_cursor: Style,
    pub selected_marker: Color,
    pub header_style: Style,

    // General colors
    pub muted: Color,
    pub title_color: Color,

    // Status bar colors
    pub status_bar_bg: Color,
    pub status_key_color: Color,
    pub flash_success: Color,
    pub flash_error: Color,

    // Popup overlay colors
    pub popup_border: Color,
    pub popup_bg: Color,

    // Inline edit field
    pub edit_style: Style,
}

impl ThemeColors {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Dark theme palette
    pub fn dark() -> Self {
        Self {
            background: Color::Reset,
            text: Color::White,
            tier_low: Color::Red,
            tier_mid: Color::Rgb(255, 165, 0),
            tier_high: Color::Green,
            bar_empty: Color::DarkGray,
            row_alt_bg: Color::Indexed(235),
            row_cursor: Style::new().reversed(),
            selected_marker: Color::Cyan,
            header_style: Style::new().bold(),
            muted: Color::Gray,
            title_color: Color::Cyan,
            status_bar_bg: Color::Indexed(236),
            status_key_color: Color::Cyan,
            flash_success: Color::Green,
            flash_error: Color::Red,
            popup_border: Color::Cyan,
            popup_bg: Color::Indexed(234),
            edit_style: Style::new().fg(Color::Cyan).bold().underlined(),
        }
    }

    /// Light theme palette, for terminals with a pale background
    pub fn light() -> Self {
        Self {
            background: Color::Rgb(250, 250, 250),
            text: Color::Black,
            tier_low: Color::Rgb(200, 0, 0),
            tier_mid: Color::Rgb(205, 110, 0),
            tier_high: Color::Rgb(0, 135, 0),
            bar_empty: Color::Rgb(210, 210, 210),
            row_alt_bg: Color::Rgb(238, 238, 238),
            row_cursor: Style::new().bg(Color::Rgb(200, 220, 255)).fg(Color::Black),
            selected_marker: Color::Blue,
            header_style: Style::new().bold(),
            muted: Color::DarkGray,
            title_color: Color::Blue,
            status_bar_bg: Color::Rgb(225, 225, 225),
            status_key_color: Color::Blue,
            flash_success: Color::Rgb(0, 135, 0),
            flash_error: Color::Rgb(200, 0, 0),
            popup_border: Color::Blue,
            popup_bg: Color::Rgb(240, 240, 240),
            edit_style: Style::new().fg(Color::Blue).bold().underlined(),
        }
    }

    pub fn tier_color(&self, tier: Tier) -> Color {
        match tier {
            Tier::Low => self.tier_low,
            Tier::Mid => self.tier_mid,
            Tier::High => self.tier_high,
        }
    }
}

/// Pick the theme: a stored preference wins, otherwise guess from the
/// terminal background, falling back to dark.
pub fn resolve_theme(preference: Option<ThemeMode>) -> ThemeMode {
    if let Some(mode) = preference {
        return mode;
    }
    match terminal_light::luma() {
        Ok(luma) if luma > 0.6 => ThemeMode::Light,
        Ok(_) => ThemeMode::Dark,
        Err(e) => {
            tracing::debug!("could not detect terminal background: {}", e);
            ThemeMode::Dark
        }
    }
}
