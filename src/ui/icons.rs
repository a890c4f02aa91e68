use ratatui::{
    style::{Color, Style},
    text::Span,
};

/// Icon display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconMode {
    Emoji,    // Standard emoji icons (📁, 🖼, etc.)
    NerdFont, // Nerd Fonts icons (U+F07B, etc.)
}

/// Icon theme using terminal colors (respects user's terminal theme)
#[derive(Debug, Clone)]
pub struct IconTheme {
    pub folder_color: Color,
    pub image_color: Color,
    pub loading_color: Color,
    pub error_color: Color,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self {
            folder_color: Color::Blue,
            image_color: Color::Cyan,
            loading_color: Color::Yellow,
            error_color: Color::Red,
        }
    }
}

/// Icon renderer that handles both emoji and Nerd Font modes
pub struct IconRenderer {
    mode: IconMode,
    theme: IconTheme,
}

impl IconRenderer {
    pub fn new(mode: IconMode, theme: IconTheme) -> Self {
        Self { mode, theme }
    }

    pub fn folder(&self) -> Span<'static> {
        let icon = match self.mode {
            IconMode::Emoji => "📁",
            IconMode::NerdFont => "\u{f07b}",
        };
        Span::styled(icon, Style::default().fg(self.theme.folder_color))
    }

    pub fn image(&self) -> Span<'static> {
        let icon = match self.mode {
            IconMode::Emoji => "🖼",
            IconMode::NerdFont => "\u{f03e}",
        };
        Span::styled(icon, Style::default().fg(self.theme.image_color))
    }

    pub fn loading(&self) -> Span<'static> {
        let icon = match self.mode {
            IconMode::Emoji => "⏳",
            IconMode::NerdFont => "\u{f252}",
        };
        Span::styled(icon, Style::default().fg(self.theme.loading_color))
    }

    pub fn error(&self) -> Span<'static> {
        let icon = match self.mode {
            IconMode::Emoji => "⚠",
            IconMode::NerdFont => "\u{f071}",
        };
        Span::styled(icon, Style::default().fg(self.theme.error_color))
    }
}
