/// A single line of a parameter file, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Line<'t> {
    Blank,
    Comment,
    Entry { name: &'t str, raw: &'t str },
    Unrecognized,
}

/// Classifies one line of input text.
///
/// Entries are `name = value` with optional surrounding whitespace. A line
/// without `=` is an entry only when it is a `name value` pair whose value is
/// a single token, optionally followed by a `#` or `//` comment, so prose that
/// happens to start with a parameter name is not mistaken for an entry.
pub(crate) fn classify(line: &str) -> Line<'_> {
    let line = line.trim();

    if line.is_empty() {
        return Line::Blank;
    }
    if is_comment(line) {
        return Line::Comment;
    }

    let (name, raw) = match line.split_once('=') {
        Some((name, raw)) => (name.trim(), raw.trim()),
        None => match split_pair(line) {
            Some(pair) => pair,
            None => return Line::Unrecognized,
        },
    };

    if name.is_empty() || raw.is_empty() {
        Line::Unrecognized
    } else {
        Line::Entry { name, raw }
    }
}

fn is_comment(text: &str) -> bool {
    text.starts_with('#') || text.starts_with("//")
}

/// Splits `name value [comment]`, keeping only the single value token.
fn split_pair(line: &str) -> Option<(&str, &str)> {
    let (name, rest) = line.split_once(char::is_whitespace)?;
    let rest = rest.trim_start();
    let (value, tail) = rest
        .split_once(char::is_whitespace)
        .map_or((rest, ""), |(value, tail)| (value, tail.trim_start()));

    (tail.is_empty() || is_comment(tail)).then_some((name, value))
}
