/// Canonical form for text matching: lowercase, commas and periods
/// removed, surrounding whitespace trimmed.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ',' | '.'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// `normalize` for optional input; `None` becomes `""`.
pub fn normalize_opt(s: Option<&str>) -> String {
    s.map(normalize).unwrap_or_default()
}
