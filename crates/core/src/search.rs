//! Keyword search helpers.
//!
//! Diary search is a plain substring match executed as SQL `LIKE`, so the
//! user-supplied keyword must have LIKE metacharacters escaped before being
//! embedded in a pattern.

/// Escape `%`, `_`, and `\` in a keyword, then wrap it in `%...%` for a
/// substring `LIKE ... ESCAPE '\'` match.
pub fn like_pattern(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len() + 2);
    escaped.push('%');
    for c in keyword.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}
