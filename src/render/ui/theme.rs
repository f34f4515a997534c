//! Color theme and styling definitions using ratatui colors
//!
//! This module provides color themes for terminal rendering using ratatui's
//! color system directly to avoid unnecessary abstractions.

use crate::background::Rgba;
use crate::config::ThemeName;
use ratatui::style::{Color, Modifier, Style};

/// Color theme for terminal UI elements
#[derive(Debug, Clone)]
pub struct ColorTheme {
    /// Normal text color (None uses terminal default)
    pub normal_text: Option<Color>,

    /// Panel frame
    pub panel_border: Color,

    /// Frame of the field that has focus
    pub focused_border: Color,

    /// Heading at the top of the panel
    pub heading: Style,

    /// Placeholder shown in empty fields
    pub placeholder: Style,

    /// Key hints for the actions
    pub hint: Style,

    /// Regular notifications
    pub toast: Style,

    /// Destructive notifications
    pub toast_error: Style,

    /// Colour the semi-transparent wireframe is composited over
    pub backdrop: (u8, u8, u8),

    /// Fixed wireframe colour, replacing the material colour
    pub wireframe: Option<Color>,
}

impl Default for ColorTheme {
    /// Default theme for dark terminals
    fn default() -> Self {
        Self {
            normal_text: None, // Use terminal default
            panel_border: Color::Gray,
            focused_border: Color::Cyan,
            heading: Style::default().add_modifier(Modifier::BOLD),
            placeholder: Style::default().fg(Color::DarkGray),
            hint: Style::default().fg(Color::Gray),
            toast: Style::default().fg(Color::White).bg(Color::Blue),
            toast_error: Style::default().fg(Color::White).bg(Color::Red),
            backdrop: (0, 0, 0),
            wireframe: None,
        }
    }
}

impl ColorTheme {
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Default => Self::default(),
            ThemeName::Monochrome => Self::monochrome(),
            ThemeName::HighContrast => Self::high_contrast(),
        }
    }

    /// Create a monochrome theme for terminals without color support
    pub fn monochrome() -> Self {
        Self {
            normal_text: None,
            panel_border: Color::White,
            focused_border: Color::White,
            heading: Style::default().add_modifier(Modifier::BOLD),
            placeholder: Style::default().add_modifier(Modifier::DIM),
            hint: Style::default(),
            toast: Style::default().fg(Color::Black).bg(Color::White),
            toast_error: Style::default()
                .fg(Color::White)
                .bg(Color::Black)
                .add_modifier(Modifier::REVERSED),
            backdrop: (0, 0, 0),
            wireframe: Some(Color::DarkGray),
        }
    }

    /// Create a high-contrast theme for accessibility
    pub fn high_contrast() -> Self {
        Self {
            normal_text: Some(Color::White),
            panel_border: Color::White,
            focused_border: Color::LightYellow,
            heading: Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
            placeholder: Style::default().fg(Color::Gray),
            hint: Style::default().fg(Color::LightGreen),
            toast: Style::default().fg(Color::Black).bg(Color::LightGreen),
            toast_error: Style::default().fg(Color::Black).bg(Color::LightRed),
            backdrop: (0, 0, 0),
            wireframe: Some(Color::Gray),
        }
    }

    /// Terminal colour for a wireframe drawn in `color`
    pub fn wire_color(&self, color: Rgba) -> Color {
        if let Some(fixed) = self.wireframe {
            return fixed;
        }
        let (r, g, b) = color.over(self.backdrop);
        Color::Rgb(r, g, b)
    }

    /// Style for body text
    pub fn text(&self) -> Style {
        match self.normal_text {
            Some(color) => Style::default().fg(color),
            None => Style::default(),
        }
    }
}
