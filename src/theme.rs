//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. Render code uses
//! `theme::module::CONSTANT` instead of hardcoding `Color::*` values.
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_SURFACE: Color = Color::Rgb(35, 35, 58);

    pub const SUCCESS: Color = Color::Rgb(107, 203, 119);
    pub const WARNING: Color = Color::Rgb(255, 217, 61);
    pub const ERROR: Color = Color::Rgb(224, 108, 117);

    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);
}

/// Stats table styles
pub mod stats {
    use super::*;

    pub const BORDER: Color = palette::TEXT;
    pub const TITLE: Color = palette::TEXT;
    pub const HEADER: Style = Style::new()
        .fg(palette::PURPLE)
        .add_modifier(Modifier::BOLD);
    pub const VALUE: Color = palette::TEXT;
}

/// Progress gauge styles
pub mod gauge {
    use super::*;

    pub const BORDER: Color = palette::TEXT;
    pub const BAR: Color = palette::SUCCESS;
    pub const BAR_BG: Color = palette::BG_SURFACE;
    pub const BAR_INTERRUPTED: Color = palette::WARNING;
    pub const TITLE_DONE: Color = palette::SUCCESS;
}

/// Footer status line styles
pub mod status {
    use super::*;

    pub const KEY: Color = palette::CYAN;
    pub const DESCRIPTION: Color = palette::TEXT_MUTED;
    pub const SEPARATOR: Color = palette::TEXT_DIM;
    pub const WARNING: Color = palette::WARNING;
    pub const ERROR: Color = palette::ERROR;
}
