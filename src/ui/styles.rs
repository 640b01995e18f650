use crate::domain::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Colours for one theme. The whole UI is styled from a single palette, so
/// switching themes replaces every colour at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub selected_fg: Color,
    pub selected_bg: Color,
    pub border: Color,
    pub warning: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::White,
                text: Color::Black,
                muted: Color::Gray,
                accent: Color::Blue,
                selected_fg: Color::White,
                selected_bg: Color::Blue,
                border: Color::DarkGray,
                warning: Color::Red,
            },
            Theme::Dark => Self {
                background: Color::Black,
                text: Color::White,
                muted: Color::DarkGray,
                accent: Color::LightCyan,
                selected_fg: Color::Black,
                selected_bg: Color::LightCyan,
                border: Color::Gray,
                warning: Color::LightRed,
            },
        }
    }

    /// Default text on the theme background
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Selected row highlight style
    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Completed tasks are dimmed and crossed out
    pub fn completed_style(&self) -> Style {
        Style::default()
            .fg(self.muted)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Keybinding hints and the input placeholder
    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn warning_style(&self) -> Style {
        Style::default()
            .fg(self.warning)
            .add_modifier(Modifier::BOLD)
    }
}
