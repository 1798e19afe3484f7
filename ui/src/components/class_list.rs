use itertools::Itertools;

/// Joins CSS class fragments with single spaces, skipping empty ones.
///
/// Conditional classes are passed as `if cond { "a b" } else { "" }`.
pub fn class_list<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .join(" ")
}
