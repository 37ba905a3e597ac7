/// Quiz clock label, e.g. `2:05` or `61:00`.
#[must_use]
pub fn format_elapsed(secs: u64) -> String {
    let minutes = secs / 60;
    let remainder = secs % 60;
    format!("{minutes}:{remainder:02}")
}

/// Per-question average in whole seconds, e.g. `42s` or `95s`.
#[must_use]
pub fn format_short(secs: u64) -> String {
    format!("{secs}s")
}
