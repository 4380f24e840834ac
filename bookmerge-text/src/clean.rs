//! Name and title cleanup applied before values are stored or compared.

use regex_lite::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Longest storage file name produced by [`file_name_from_texts`].
pub const FILE_NAME_MAX_LENGTH: usize = 150;

/// Placeholder names some storefronts emit instead of a real person.
const BLOCKED_NAMES: [&str; 4] = ["Narrator Info Added Soon", "Narrator", "MS", "PhD"];

fn literal(pattern: &str) -> Regex {
    Regex::new(pattern).expect("literal pattern compiles")
}

static LIST_DELIMITER: LazyLock<Regex> = LazyLock::new(|| literal(r"(?i)\s*(?:[,;&]|\sand\s)\s*"));
static NAME_PREFIXES: LazyLock<[Regex; 2]> =
    LazyLock::new(|| [literal(r"^More by\s+"), literal(r"^(?:Dr|Mr|Ms|Mrs)(?:\.\s*|\s+)")]);
static DEGREE_SUFFIX: LazyLock<Regex> = LazyLock::new(|| literal(r"(?:\s*,\s*(?:MS|PhD))+\s*$"));
static TITLE_PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| literal(r"[.,:/?]+"));
static SPACED_DASH: LazyLock<Regex> = LazyLock::new(|| literal(r"\s+-+\s+"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| literal(r"\s+"));
static EDITION_NOTE: LazyLock<Regex> =
    LazyLock::new(|| literal(r"(?i)\s+\([^)]*(?:unabridged|book\s+\d)[^)]*\)"));
static AUDIOBOOK_SUFFIX: LazyLock<Regex> = LazyLock::new(|| literal(r"(?i)\s+audiobook$"));

/// True when `text` is empty or only whitespace.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Splits a delimited list (`,`, `;`, `&`, ` and `) into trimmed, non-blank
/// entries, in input order.
pub fn split_list(text: &str) -> Vec<String> {
    LIST_DELIMITER
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits a people list into distinct, sorted, cleaned names.
///
/// Honorific prefixes, "More by " prefixes and trailing degrees are
/// stripped; placeholder names are dropped.
pub fn split_names(text: &str) -> Vec<String> {
    let mut names = BTreeSet::new();
    for entry in split_list(&DEGREE_SUFFIX.replace(text, "")) {
        let name = strip_prefixes(&entry);
        if !name.is_empty() && !BLOCKED_NAMES.contains(&name.as_str()) {
            names.insert(name);
        }
    }
    names.into_iter().collect()
}

/// Removes stacked prefixes ("Dr Mr Jane") until none is left.
fn strip_prefixes(entry: &str) -> String {
    let mut name = entry.trim().to_string();
    loop {
        let mut stripped = name.clone();
        for pattern in NAME_PREFIXES.iter() {
            let next = pattern.replace(&stripped, "").trim().to_string();
            stripped = next;
        }
        if stripped == name {
            return name;
        }
        name = stripped;
    }
}

/// Canonical form of a people list: [`split_names`] joined with `", "`.
/// `None` when no name survives.
pub fn normalize_names(text: &str) -> Option<String> {
    let names = split_names(text);
    if names.is_empty() {
        None
    } else {
        Some(names.join(", "))
    }
}

/// Title-cases `text` when it is entirely lower- or upper-case; mixed-case
/// text is only trimmed.
pub fn title_case(text: &str) -> String {
    let trimmed = text.trim();
    let single_case = trimmed.to_lowercase() == trimmed || trimmed.to_uppercase() == trimmed;
    if !single_case {
        return trimmed.to_string();
    }
    trimmed
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) if word.chars().count() >= 2 => {
                    first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
                }
                _ => word.to_uppercase(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Cleans an author name: periods become spaces, whitespace collapses,
/// single-case names are title-cased, and leading initials fold together
/// (`J. R. R. Tolkien` becomes `JRR Tolkien`).
pub fn clean_author(author: &str) -> String {
    let spaced = WHITESPACE.replace_all(&author.replace('.', " "), " ").to_string();
    let cased = title_case(&spaced);
    let words: Vec<&str> = cased.split(' ').collect();
    let initials = words
        .iter()
        .take_while(|w| w.chars().count() == 1 && w.chars().all(char::is_alphanumeric))
        .count();
    if initials < 2 || initials == words.len() {
        return cased;
    }
    let folded: String = words[..initials].concat().to_uppercase();
    std::iter::once(folded.as_str())
        .chain(words[initials..].iter().copied())
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Cleans a title: drops edition notes such as `(Unabridged)` or
/// `(Series, Book 2)` and a trailing "audiobook", turns separators into
/// spaces, and title-cases single-case titles.
pub fn clean_title(title: &str) -> String {
    let text = title.replace(" (Unabridged)", "");
    let text = TITLE_PUNCTUATION.replace_all(&text, " ");
    let text = SPACED_DASH.replace_all(&text, " ");
    let text = WHITESPACE.replace_all(&text, " ");
    let text = EDITION_NOTE.replace_all(&text, "");
    let text = AUDIOBOOK_SUFFIX.replace_all(text.trim(), "");
    title_case(&text)
}

/// Builds a storage file name from identity texts.
///
/// Each non-blank part is lower-cased, stripped of quotes, and has every
/// run of other non-alphanumerics replaced by `-`; parts are joined with
/// `-` and the result is cut at [`FILE_NAME_MAX_LENGTH`] characters.
pub fn file_name_from_texts<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = parts
        .into_iter()
        .filter(|p| !is_blank(p.as_ref()))
        .map(|p| slug(p.as_ref()))
        .collect::<Vec<_>>()
        .join("-");
    joined.chars().take(FILE_NAME_MAX_LENGTH).collect()
}

fn slug(part: &str) -> String {
    let mut out = String::with_capacity(part.len());
    let mut in_gap = false;
    for c in part.trim().to_lowercase().chars() {
        if matches!(c, '\'' | '"' | '`' | '’') {
            continue;
        }
        if c.is_alphanumeric() {
            out.push(c);
            in_gap = false;
        } else if !in_gap {
            out.push('-');
            in_gap = true;
        }
    }
    out
}
