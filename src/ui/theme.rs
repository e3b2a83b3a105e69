use ratatui::style::Color;

/// Palette for one frame. Picked from the `darkMode` setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub anchor: Color,
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    /// Dark palette
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38), // #1A1B26
            surface: Color::Rgb(36, 40, 59),    // #24283B
            text: Color::Rgb(169, 177, 214),    // #A9B1D6
            anchor: Color::Rgb(247, 118, 142),  // #F7768E
            dimmed: Color::Rgb(100, 110, 150),  // #646E96
        }
    }

    /// Light palette
    pub fn daylight() -> Self {
        Self {
            background: Color::Rgb(245, 243, 238), // #F5F3EE
            surface: Color::Rgb(230, 226, 217),    // #E6E2D9
            text: Color::Rgb(40, 42, 54),          // #282A36
            anchor: Color::Rgb(200, 40, 60),       // #C8283C
            dimmed: Color::Rgb(140, 140, 150),     // #8C8C96
        }
    }

    pub fn for_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::midnight()
        } else {
            Self::daylight()
        }
    }
}
