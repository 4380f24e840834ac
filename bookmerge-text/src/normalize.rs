use std::collections::BTreeSet;

const ARTICLES: [&str; 3] = ["a", "an", "the"];
const QUOTES: [char; 6] = ['\'', '’', '‘', '`', '"', '”'];

/// Produces the comparison-stable form of `text`.
///
/// Lower-cases, drops possessive `'s`, removes quote characters, turns any
/// other non-alphanumeric run into a single space, drops the articles
/// `a`/`an`/`the`, folds runs of single-letter initials (`j r r` becomes
/// `jrr`), and trims.
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    let mut spaced = String::with_capacity(lower.len());
    let mut chars = lower.chars().peekable();
    while let Some(c) = chars.next() {
        if QUOTES.contains(&c) {
            // possessive: quote + 's' at the end of a word
            if chars.peek() == Some(&'s') {
                let mut ahead = chars.clone();
                ahead.next();
                if ahead.peek().is_none_or(|n| !n.is_alphanumeric()) {
                    chars.next();
                }
            }
            continue;
        }
        spaced.push(if c.is_alphanumeric() { c } else { ' ' });
    }

    let words: Vec<&str> = spaced
        .split_whitespace()
        .filter(|w| !ARTICLES.contains(w))
        .collect();

    let mut out: Vec<String> = Vec::with_capacity(words.len());
    let mut initials = String::new();
    for word in words {
        if word.chars().count() == 1 {
            initials.push_str(word);
            continue;
        }
        if !initials.is_empty() {
            out.push(std::mem::take(&mut initials));
        }
        out.push(word.to_string());
    }
    if !initials.is_empty() {
        out.push(initials);
    }
    out.join(" ")
}

/// Splits the normalized form of `text` into a token set.
///
/// List delimiters (`,`, `;`, `&`) are already whitespace after
/// normalization; the conjunction `and` is dropped as well.
pub fn tokens(text: &str) -> BTreeSet<String> {
    normalize(text)
        .split_whitespace()
        .filter(|t| *t != "and")
        .map(str::to_string)
        .collect()
}
