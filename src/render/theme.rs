use super::{Color, ColorStyle};

#[derive(Debug, Clone)]
pub struct Theme {
    pub fringe: ColorStyle,
    pub entry: ColorStyle,

    pub heading: ColorStyle,
    pub clock: ColorStyle,
    pub new: ColorStyle,
    pub link: ColorStyle,
    pub game: ColorStyle,
    pub viewers: ColorStyle,
    pub uptime: ColorStyle,
    pub vodcast: ColorStyle,
    pub error: ColorStyle,
}

impl Theme {
    pub fn standard() -> Self {
        Self {
            fringe: ColorStyle::new(Color(128, 128, 128)).bold(),
            entry: ColorStyle::new(Color(96, 96, 96)).bold(),

            heading: ColorStyle::new(Color::MAGENTA).bold(),
            clock: ColorStyle::new(Color::BRIGHT_BLACK),
            new: ColorStyle::new(Color::BRIGHT_YELLOW).bold(),
            link: ColorStyle::new(Color::BRIGHT_BLUE).bold(),
            game: ColorStyle::new(Color::YELLOW),
            viewers: ColorStyle::new(Color::CYAN),
            uptime: ColorStyle::new(Color::GREEN),
            vodcast: ColorStyle::new(Color::BRIGHT_BLACK),
            error: ColorStyle::new(Color::RED).bold(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::standard()
    }
}
