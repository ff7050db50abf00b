// Small pure decisions behind the page's scroll and reveal behaviors.

/// Whether the navbar should carry its `scrolled` style at `scroll_y`.
#[inline]
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// CSS width for a skill bar from its `data-level` attribute.
///
/// Non-numeric levels yield `None` so the bar keeps its current width;
/// numeric ones are used as-is, including values past 100.
pub fn skill_width(level: &str) -> Option<String> {
    let value: f64 = level.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(format!("{}%", value))
}
