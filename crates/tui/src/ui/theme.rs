use ratatui::style::Color;

use crate::config::ThemeMode;

/// Palette for one theme mode. Built once per frame and passed down
/// explicitly to every render function.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub border: Color,
    pub border_focused: Color,
    pub positive: Color,
    pub negative: Color,
    pub error: Color,
}

impl Theme {
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    fn dark() -> Self {
        Self {
            background: Color::Rgb(18, 18, 18),
            surface: Color::Rgb(30, 30, 30),
            text: Color::Rgb(224, 224, 224),
            dim: Color::Rgb(140, 140, 140),
            accent: Color::Rgb(80, 160, 160),
            border: Color::Rgb(68, 68, 68),
            border_focused: Color::Rgb(80, 160, 160),
            positive: Color::Rgb(76, 175, 80),
            negative: Color::Rgb(244, 67, 54),
            error: Color::Rgb(255, 138, 128),
        }
    }

    fn light() -> Self {
        Self {
            background: Color::Rgb(245, 245, 245),
            surface: Color::Rgb(255, 255, 255),
            text: Color::Rgb(51, 51, 51),
            dim: Color::Rgb(102, 102, 102),
            accent: Color::Rgb(25, 118, 210),
            border: Color::Rgb(204, 204, 204),
            border_focused: Color::Rgb(25, 118, 210),
            positive: Color::Rgb(76, 175, 80),
            negative: Color::Rgb(244, 67, 54),
            error: Color::Rgb(198, 40, 40),
        }
    }
}
