use std::fmt::Display;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const RED: Self = Self(197, 15, 31);
    pub const GREEN: Self = Self(19, 161, 14);
    pub const YELLOW: Self = Self(193, 156, 0);
    pub const MAGENTA: Self = Self(136, 23, 152);
    pub const CYAN: Self = Self(58, 150, 221);
    pub const BRIGHT_BLACK: Self = Self(118, 118, 118);
    pub const BRIGHT_YELLOW: Self = Self(249, 241, 165);
    pub const BRIGHT_BLUE: Self = Self(59, 120, 255);

    pub const fn default_fg() -> Self {
        Self(0xC0, 0xC0, 0xC0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::default_fg()
    }
}

#[derive(Copy, Clone, Debug)]
pub struct ColorStyle {
    pub fg: Color,
    pub bold: bool,
}

impl ColorStyle {
    pub fn new(fg: Color) -> Self {
        Self {
            fg,
            ..Default::default()
        }
    }

    pub const fn bold(self) -> Self {
        Self {
            bold: !self.bold,
            ..self
        }
    }

    pub fn paint<T>(self, item: T) -> yansi::Paint<T>
    where
        T: Display,
    {
        let Color(r, g, b) = self.fg;
        let mut p = yansi::Paint::rgb(r, g, b, item);
        if self.bold {
            p = p.bold();
        }
        p
    }
}

impl Default for ColorStyle {
    fn default() -> Self {
        Self {
            fg: Color::default_fg(),
            bold: false,
        }
    }
}
