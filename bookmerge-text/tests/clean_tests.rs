use bookmerge_text::{
    FILE_NAME_MAX_LENGTH, clean_author, clean_title, file_name_from_texts, normalize_names,
    split_names,
};
use pretty_assertions::assert_eq;

// ── Names ────────────────────────────────────────────────────────

#[test]
fn split_names_sorts_and_dedupes() {
    assert_eq!(
        split_names("Kristen Sieh, Tim Campbell & Kristen Sieh"),
        vec!["Kristen Sieh", "Tim Campbell"]
    );
}

#[test]
fn split_names_drops_placeholders_and_honorifics() {
    assert_eq!(
        split_names("Narrator Info Added Soon; Dr. Jane Smith, PhD and More by Ann Lee"),
        vec!["Ann Lee", "Jane Smith"]
    );
}

#[test]
fn split_names_strips_stacked_prefixes() {
    assert_eq!(split_names("Dr Mr Mrs Alexander Smith"), vec!["Alexander Smith"]);
    assert_eq!(split_names("More by Dr. Ann Lee"), vec!["Ann Lee"]);
}

#[test]
fn split_names_strips_trailing_degrees() {
    assert_eq!(split_names("Jane Smith, MS, PhD"), vec!["Jane Smith"]);
    assert_eq!(split_names("Jane Smith, PhD & Tim Campbell"), vec!["Jane Smith", "Tim Campbell"]);
}

#[test]
fn normalize_names_is_stable_when_reapplied() {
    let once = normalize_names("Dr Mr Mrs Alexander Smith and Mr. Mr. Bob Jones, PhD").unwrap();
    assert_eq!(once, "Alexander Smith, Bob Jones");
    assert_eq!(normalize_names(&once).as_deref(), Some(once.as_str()));
}

#[test]
fn split_names_keeps_names_starting_like_honorifics() {
    assert_eq!(split_names("Drew Hayes"), vec!["Drew Hayes"]);
}

#[test]
fn normalize_names_joins_with_comma() {
    assert_eq!(
        normalize_names("Neil Gaiman and Terry Pratchett").as_deref(),
        Some("Neil Gaiman, Terry Pratchett")
    );
    assert_eq!(normalize_names("Narrator"), None);
    assert_eq!(normalize_names("   "), None);
}

#[test]
fn clean_author_folds_initials() {
    assert_eq!(clean_author("J.R.R. Tolkien"), "JRR Tolkien");
    assert_eq!(clean_author("j. r. r. tolkien"), "JRR Tolkien");
    assert_eq!(clean_author("N.K. Jemisin"), "NK Jemisin");
    assert_eq!(clean_author("Martha Wells"), "Martha Wells");
}

// ── Titles ───────────────────────────────────────────────────────

#[test]
fn clean_title_drops_edition_notes() {
    assert_eq!(clean_title("The Hobbit (Unabridged)"), "The Hobbit");
    assert_eq!(clean_title("A Closed and Common Orbit (Wayfarers, Book 2)"), "A Closed and Common Orbit");
    assert_eq!(clean_title("Network Effect Audiobook"), "Network Effect");
}

#[test]
fn clean_title_turns_separators_into_spaces() {
    assert_eq!(clean_title("All Systems Red: The Murderbot Diaries"), "All Systems Red The Murderbot Diaries");
    assert_eq!(clean_title("before - after"), "Before After");
}

// ── File names ───────────────────────────────────────────────────

#[test]
fn file_name_joins_slugged_parts() {
    assert_eq!(
        file_name_from_texts(["J.R.R. Tolkien", "1937", "The Hobbit"]),
        "j-r-r-tolkien-1937-the-hobbit"
    );
}

#[test]
fn file_name_skips_blank_parts_and_strips_quotes() {
    assert_eq!(file_name_from_texts(["Becky Chambers", "", "Don't Panic"]), "becky-chambers-dont-panic");
}

#[test]
fn file_name_is_truncated() {
    let long = "x".repeat(400);
    assert_eq!(file_name_from_texts([long.as_str()]).len(), FILE_NAME_MAX_LENGTH);
}

#[test]
fn file_name_keeps_non_latin_letters() {
    assert_eq!(file_name_from_texts(["Толстой", "Война и мир"]), "толстой-война-и-мир");
    assert_ne!(
        file_name_from_texts(["Толстой", "Война и мир"]),
        file_name_from_texts(["Толстой", "Анна Каренина"])
    );
}
