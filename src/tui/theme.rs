use ratatui::style::Color;

/// Color palette for the TUI. Two fixed palettes; the dark-mode toggle swaps
/// between them at runtime.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    /// Muted text: hints, placeholders, completed tasks.
    pub dim: Color,
    /// Titles, the form border, the progress gauge.
    pub accent: Color,
    pub green: Color,
    pub selection_bg: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x14, 0x1C),
            text: Color::Rgb(0xC8, 0xCC, 0xD4),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x6A, 0x71, 0x80),
            accent: Color::Rgb(0x44, 0x88, 0xFF),
            green: Color::Rgb(0x44, 0xCC, 0x88),
            selection_bg: Color::Rgb(0x28, 0x30, 0x44),
        }
    }

    pub fn light() -> Self {
        Theme {
            background: Color::Rgb(0xF4, 0xF4, 0xF0),
            text: Color::Rgb(0x2A, 0x2E, 0x36),
            text_bright: Color::Rgb(0x00, 0x00, 0x00),
            dim: Color::Rgb(0x8E, 0x93, 0x9E),
            accent: Color::Rgb(0x20, 0x5E, 0xC8),
            green: Color::Rgb(0x20, 0x88, 0x58),
            selection_bg: Color::Rgb(0xDC, 0xE2, 0xF0),
        }
    }

    /// Palette for the given display preference.
    pub fn for_mode(dark: bool) -> Self {
        if dark { Theme::dark() } else { Theme::light() }
    }
}
