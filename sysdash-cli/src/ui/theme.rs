//! UI Theme Module - the dashboard's five display styles
//!
//! Every color used on screen comes from the [`Palette`] here:
//! - default text
//! - warning (sleeping processes)
//! - alert (stopped processes)
//! - success (utilization bars)
//! - footer (reverse video help line)

use ratatui::style::{Color, Modifier, Style};

use sysdash_core::model::ProcessState;

/// Color palette tokens for the theme
#[derive(Clone, Debug)]
pub struct Palette {
    pub text: Color,
    pub warn: Color,
    pub alert: Color,
    pub success: Color,
    pub footer_fg: Color,
    pub footer_bg: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self::classic()
    }
}

impl Palette {
    /// White-on-black terminal colors
    pub fn classic() -> Self {
        Self {
            text: Color::White,
            warn: Color::Yellow,
            alert: Color::Red,
            success: Color::Green,
            footer_fg: Color::Black,
            footer_bg: Color::White,
        }
    }
}

/// Theme configuration
#[derive(Clone, Debug, Default)]
pub struct Theme {
    pub palette: Palette,
}

impl Theme {
    /// Style for primary text
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.palette.text)
    }

    pub fn warn_style(&self) -> Style {
        Style::default().fg(self.palette.warn)
    }

    pub fn alert_style(&self) -> Style {
        Style::default().fg(self.palette.alert)
    }

    /// Style for utilization bars
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.palette.success)
    }

    /// Reverse-video help line
    pub fn footer_style(&self) -> Style {
        Style::default()
            .fg(self.palette.footer_fg)
            .bg(self.palette.footer_bg)
    }

    /// Row color by process state; anything unrecognised falls back to plain text
    pub fn process_style(&self, state: ProcessState) -> Style {
        match state {
            ProcessState::Running | ProcessState::Other => self.text_style(),
            ProcessState::Sleeping => self.warn_style(),
            ProcessState::Stopped => self.alert_style(),
        }
    }

    /// Row style, reversed when the row is selected
    pub fn row_style(&self, state: ProcessState, selected: bool) -> Style {
        let style = self.process_style(state);
        if selected {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        }
    }
}

static DEFAULT_THEME: std::sync::OnceLock<Theme> = std::sync::OnceLock::new();

/// Get the default theme
pub fn theme() -> &'static Theme {
    DEFAULT_THEME.get_or_init(Theme::default)
}

/// Convenience re-exports for common use cases
pub mod styles {
    use super::*;

    pub fn text() -> Style {
        theme().text_style()
    }

    pub fn success() -> Style {
        theme().success_style()
    }

    pub fn footer() -> Style {
        theme().footer_style()
    }

    pub fn row(state: ProcessState, selected: bool) -> Style {
        theme().row_style(state, selected)
    }
}
