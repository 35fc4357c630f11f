// crates/globber/src/translate/mod.rs
//! Glob to regular expression translation.

mod class;

use crate::split::split_patterns;
use class::build_char_class;

/// Translate `pattern` into a regex fragment without `^`/`$` anchors.
///
/// | glob       | regex          |
/// |------------|----------------|
/// | `*`, `**`  | `.*`           |
/// | `?`        | `.`            |
/// | `[a-c]`    | `[a-c]`        |
/// | `[!a-c]`   | `[^a-c]`       |
/// | `{a,b}`    | `(?:a\|b)`     |
/// | `\*`       | `\*`           |
///
/// Unterminated `[` or `{`, and the degenerate classes `[]` and `[!]`, are
/// emitted as literal characters and the scan resumes right after them.
pub fn glob_to_regex(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '\\' => {
                if let Some(&lit) = chars.get(i + 1) {
                    push_literal(&mut out, lit);
                    i += 2;
                } else {
                    out.push_str(r"\\");
                    i += 1;
                }
            }
            '*' => {
                while i < chars.len() && chars[i] == '*' {
                    i += 1;
                }
                out.push_str(".*");
            }
            '?' => {
                out.push('.');
                i += 1;
            }
            '[' => i = translate_class(&chars, i, &mut out),
            '{' => i = translate_alternation(&chars, i, &mut out),
            c => {
                push_literal(&mut out, c);
                i += 1;
            }
        }
    }
    out
}

/// Translate `pattern` and anchor it to the whole input.
pub fn anchored_regex(pattern: &str) -> String {
    format!("^{}$", glob_to_regex(pattern))
}

fn push_literal(out: &mut String, c: char) {
    let mut buf = [0u8; 4];
    out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
}

/// Returns the index to continue scanning from.
fn translate_class(chars: &[char], start: usize, out: &mut String) -> usize {
    let Some(end) = find_closing_bracket(chars, start + 1) else {
        out.push_str(r"\[");
        return start + 1;
    };
    let body = &chars[start + 1..end];
    if matches!(body, [] | ['!']) {
        out.push_str(r"\[");
        return start + 1;
    }
    let (content, negated) = build_char_class(body);
    if content.is_empty() {
        out.push_str(r"\[");
        return start + 1;
    }
    out.push('[');
    if negated {
        out.push('^');
    }
    out.push_str(&content);
    out.push(']');
    end + 1
}

fn translate_alternation(chars: &[char], start: usize, out: &mut String) -> usize {
    let Some(end) = find_closing_brace(chars, start + 1) else {
        out.push_str(r"\{");
        return start + 1;
    };
    let inner: String = chars[start + 1..end].iter().collect();
    let alternatives: Vec<String> = split_patterns(&inner)
        .iter()
        .map(|alt| glob_to_regex(alt))
        .collect();
    out.push_str("(?:");
    out.push_str(&alternatives.join("|"));
    out.push(')');
    end + 1
}

fn find_closing_bracket(chars: &[char], from: usize) -> Option<usize> {
    let mut i = from;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            ']' => return Some(i),
            _ => i += 1,
        }
    }
    None
}

fn find_closing_brace(chars: &[char], from: usize) -> Option<usize> {
    let mut depth = 1usize;
    let mut i = from;
    while i < chars.len() {
        match chars[i] {
            '\\' => {
                i += 2;
                continue;
            }
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}
