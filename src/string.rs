use std::borrow::Cow;

/// Shortens `input` to at most `max` columns, marking the cut with `..`
pub fn truncate(input: &str, max: usize) -> Cow<'_, str> {
    use {
        unicode_segmentation::UnicodeSegmentation as _, //
        unicode_width::UnicodeWidthStr as _,
    };

    const ELLIPSIS: &str = "..";

    if input.width() <= max {
        return Cow::Borrowed(input);
    }

    let mut budget = max.saturating_sub(ELLIPSIS.len());
    let mut out = String::new();
    for grapheme in input.graphemes(true) {
        match budget.checked_sub(grapheme.width()) {
            Some(n) => {
                budget = n;
                out.push_str(grapheme);
            }
            None => break,
        }
    }
    out.push_str(ELLIPSIS);
    Cow::Owned(out)
}

/// Formats `n` with comma separated thousands
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
