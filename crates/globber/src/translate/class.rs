// crates/globber/src/translate/class.rs

/// Build the body of a regex character class from the glob class body
/// (the characters between `[` and `]`).
///
/// Returns the translated body and whether the class is negated by a leading
/// `!` or `^`. An empty body means the caller should treat `[` literally.
pub(super) fn build_char_class(body: &[char]) -> (String, bool) {
    let negated = matches!(body.first(), Some('!' | '^'));
    let mut i = usize::from(negated);
    let mut out = String::with_capacity(body.len());
    // Last member that can start a range. The right endpoint of a range
    // never starts another one.
    let mut prev: Option<char> = None;
    let mut range_open = false;
    while i < body.len() {
        let ch = body[i];
        i += 1;
        match ch {
            '\\' => {
                let lit = match body.get(i) {
                    Some(&lit) => {
                        i += 1;
                        lit
                    }
                    None => '\\',
                };
                push_member(&mut out, lit);
                prev = endpoint(lit, &mut range_open);
            }
            '-' => match (prev, range_end(body, i)) {
                (Some(left), Some(right)) if left <= right => {
                    out.push('-');
                    prev = None;
                    range_open = true;
                }
                _ => {
                    out.push_str(r"\-");
                    prev = endpoint('-', &mut range_open);
                }
            },
            _ => {
                push_member(&mut out, ch);
                prev = endpoint(ch, &mut range_open);
            }
        }
    }
    (out, negated)
}

fn endpoint(c: char, range_open: &mut bool) -> Option<char> {
    if std::mem::take(range_open) {
        None
    } else {
        Some(c)
    }
}

/// Right endpoint of a range whose `-` sits just before `at`, looking
/// through one escape.
fn range_end(body: &[char], at: usize) -> Option<char> {
    match *body.get(at)? {
        ']' => None,
        '\\' => Some(body.get(at + 1).copied().unwrap_or('\\')),
        c => Some(c),
    }
}

// `[`, `&` and `~` start set operations in the regex class syntax.
fn push_member(out: &mut String, c: char) {
    if matches!(c, '\\' | ']' | '[' | '^' | '-' | '&' | '~') {
        out.push('\\');
    }
    out.push(c);
}
