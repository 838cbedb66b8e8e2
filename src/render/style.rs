#[derive(Copy, Clone, Debug)]
pub struct Style {
    pub top: &'static str,
    pub entry_sep: &'static str,
    pub end: &'static str,

    pub link: &'static str,
    pub game: &'static str,
    pub stats: &'static str,
}

impl Default for Style {
    fn default() -> Self {
        Self::BOX
    }
}

impl Style {
    pub const NONE: Self = Self {
        top: "",
        entry_sep: "",
        end: "",

        link: "",
        game: "",
        stats: "",
    };

    pub const BOX: Self = Self {
        top: "┌── ",
        entry_sep: "│",
        end: "└ ",

        link: "├ ",
        game: "├ ",
        stats: "├ ",
    };
}
