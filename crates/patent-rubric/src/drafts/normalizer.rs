/// Reduces a candidate heading line to its comparable form.
///
/// Markdown markers, bold/underline wrappers, a trailing colon, zero-width
/// characters and repeated whitespace are dropped and the result lowercased.
pub(crate) fn normalize_heading(line: &str) -> String {
    let cleaned = line.replace(['\u{feff}', '\u{200b}'], "");
    let trimmed = cleaned
        .trim()
        .trim_start_matches('#')
        .trim_matches(|c: char| c == '*' || c == '_' || c.is_whitespace())
        .trim_end_matches(':')
        .trim();
    let collapsed = trimmed.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_lowercase()
}

#[cfg(test)]
pub(crate) fn normalize_for_tests(line: &str) -> String {
    normalize_heading(line)
}
