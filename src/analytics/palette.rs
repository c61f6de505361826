//! Chart colours for categories without a stored colour

/// Fixed-order fallback palette, indexed modulo its length
pub const FALLBACK_PALETTE: [&str; 8] = [
    "#3b82f6", "#ef4444", "#22c55e", "#f59e0b", "#8b5cf6", "#ec4899", "#14b8a6", "#f97316",
];

/// Palette entry for position `index`
pub fn fallback_color(index: usize) -> &'static str {
    FALLBACK_PALETTE[index % FALLBACK_PALETTE.len()]
}

/// The stored colour if there is one, otherwise the palette entry for `index`
pub fn resolve_color(stored: Option<&str>, index: usize) -> String {
    stored.unwrap_or_else(|| fallback_color(index)).to_string()
}
