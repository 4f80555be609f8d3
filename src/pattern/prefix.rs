use memchr::memrchr;

/// Characters that end the literal run of a pattern.
const METACHARACTERS: &[char] = &[
    '(', ')', '.', '*', '+', '?', '[', ']', '{', '}', '|', '^', '$',
];

/// Characters whose backslash escape stands for the character itself.
const ESCAPED_LITERALS: &[char] = &['[', '\\', '^', '$', '.', '|', '?', '*', '+', '(', ')'];

/// Metacharacters that may make the preceding atom absent.
const OPTIONAL_QUANTIFIERS: &[char] = &['?', '*', '{'];

/// Longest directory prefix shared by every path `pattern` can fully match.
///
/// The result is either empty or ends with `/`. Escaped literals such as
/// `\[` are unescaped; class escapes such as `\d` end the literal run like any
/// other metacharacter. Never fails, even for patterns that do not compile.
#[tracing::instrument(level = "trace")]
pub fn prefix(pattern: &str) -> String {
    if has_top_level_alternation(pattern) {
        return String::new();
    }

    let mut literal = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some(&next) if ESCAPED_LITERALS.contains(&next) => {
                    literal.push(next);
                    chars.next();
                    continue;
                }
                _ => break,
            }
        }

        if METACHARACTERS.contains(&c) {
            if OPTIONAL_QUANTIFIERS.contains(&c) {
                literal.pop();
            }
            break;
        }

        literal.push(c);
    }

    match memrchr(b'/', literal.as_bytes()) {
        Some(index) => {
            literal.truncate(index + 1);
            literal
        }
        None => String::new(),
    }
}

/// Whether an unescaped `|` splits the whole pattern into alternatives.
fn has_top_level_alternation(pattern: &str) -> bool {
    let mut group_depth = 0usize;
    let mut class_depth = 0usize;
    let mut class_opened = false;
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        // `]` right after `[` or `[^` is a literal member of the class
        let opening = class_opened;
        class_opened = false;

        match c {
            '\\' => {
                chars.next();
            }
            '[' => {
                class_depth += 1;
                class_opened = true;
                if chars.peek() == Some(&'^') {
                    chars.next();
                }
            }
            ']' if class_depth > 0 && !opening => class_depth -= 1,
            _ if class_depth > 0 => {}
            '(' => group_depth += 1,
            ')' => group_depth = group_depth.saturating_sub(1),
            '|' if group_depth == 0 => return true,
            _ => {}
        }
    }

    false
}
