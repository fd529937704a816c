use ratatui::style::Style;
use ratatui::text::Line;

use crate::decor::Theme;

/// `left` and `right` pushed to opposite edges of a `width`-column line.
///
/// At least one space separates them even when they overflow.
pub fn status_text(left: &str, right: &str, width: usize) -> String {
    let used = left.chars().count() + right.chars().count();
    let gap = width.saturating_sub(used).max(1);
    format!("{}{}{}", left, " ".repeat(gap), right)
}

/// Styled status line
pub fn status_line(theme: &Theme, left: &str, right: &str, width: usize) -> Line<'static> {
    Line::styled(
        status_text(left, right, width),
        Style::new().fg(theme.foreground).bg(theme.muted),
    )
}

/// First `width` characters of `s`
pub fn clamp_width(s: &str, width: usize) -> &str {
    match s.char_indices().nth(width) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
