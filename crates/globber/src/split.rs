// crates/globber/src/split.rs
//! Splitting of comma separated pattern lists.

/// Split `input` at commas that are not nested inside `{...}`.
///
/// A backslash copies itself and the following character through unchanged,
/// so `\,` never splits and `\{` never opens a group. Empty segments between
/// two commas are returned as empty strings; a trailing empty segment is not.
///
/// ```
/// assert_eq!(globber::split_patterns("{a,b},c"), ["{a,b}", "c"]);
/// ```
pub fn split_patterns(input: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut chars = input.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                current.push('\\');
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            '{' => {
                depth += 1;
                current.push(ch);
            }
            '}' => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            ',' if depth == 0 => out.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}
