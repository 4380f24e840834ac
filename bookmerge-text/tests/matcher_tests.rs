use bookmerge_text::{DEFAULT_MATCH_THRESHOLD, IdentityMatcher, normalize};
use proptest::prelude::*;

fn matcher() -> IdentityMatcher {
    IdentityMatcher::default()
}

// ── fuzzy_match ──────────────────────────────────────────────────

#[test]
fn initials_with_and_without_periods_match() {
    assert!(matcher().fuzzy_match(Some("J.R.R. Tolkien"), Some("JRR Tolkien")));
}

#[test]
fn edition_suffix_matches_bare_title() {
    assert!(matcher().fuzzy_match(Some("The Hobbit (Unabridged)"), Some("The Hobbit")));
}

#[test]
fn subtitle_matches_main_title() {
    assert!(matcher().fuzzy_match(Some("Hobbit: Part 2"), Some("Hobbit")));
}

#[test]
fn surname_matches_full_name() {
    assert!(matcher().fuzzy_match(Some("Tolkien"), Some("J.R.R. Tolkien")));
}

#[test]
fn partial_overlap_below_threshold_does_not_match() {
    assert!(!matcher().fuzzy_match(Some("Pride and Prejudice"), Some("Pride and Joy")));
    assert!(!matcher().fuzzy_match(Some("The Hobbit"), Some("Dune")));
}

#[test]
fn absent_never_matches() {
    assert!(!matcher().fuzzy_match(None, Some("Hobbit")));
    assert!(!matcher().fuzzy_match(Some("Hobbit"), None));
    assert!(!matcher().fuzzy_match(None, None));
}

#[test]
fn punctuation_only_strings_match_only_each_other() {
    assert!(matcher().fuzzy_match(Some("..."), Some("!!")));
    assert!(!matcher().fuzzy_match(Some("..."), Some("Hobbit")));
}

#[test]
fn lower_threshold_accepts_looser_overlap() {
    let loose = IdentityMatcher::new(0.5);
    assert!(loose.fuzzy_match(Some("Pride and Prejudice"), Some("Pride and Joy")));
}

#[test]
fn out_of_range_threshold_is_clamped() {
    assert_eq!(IdentityMatcher::new(3.0).threshold(), 1.0);
    assert_eq!(IdentityMatcher::new(f64::NAN).threshold(), DEFAULT_MATCH_THRESHOLD);
    assert!(IdentityMatcher::new(0.0).threshold() > 0.0);
}

// ── fuzzy_list_match ─────────────────────────────────────────────

#[test]
fn any_shared_author_matches() {
    assert!(matcher().fuzzy_list_match(
        Some("Ilona Andrews, Gordon Andrews"),
        Some("Jane Doe & Gordon Andrews")
    ));
}

#[test]
fn list_order_does_not_matter() {
    assert!(matcher().fuzzy_list_match(
        Some("Terry Pratchett and Neil Gaiman"),
        Some("Neil Gaiman; Terry Pratchett")
    ));
}

#[test]
fn disjoint_lists_do_not_match() {
    assert!(!matcher().fuzzy_list_match(Some("Becky Chambers"), Some("Martha Wells, N.K. Jemisin")));
    assert!(!matcher().fuzzy_list_match(Some(""), Some("")));
    assert!(!matcher().fuzzy_list_match(None, Some("Martha Wells")));
}

// ── Properties ───────────────────────────────────────────────────

fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z .,'&:()-]{0,40}").unwrap()
}

proptest! {
    #[test]
    fn fuzzy_match_is_symmetric(a in text_strategy(), b in text_strategy()) {
        let m = matcher();
        prop_assert_eq!(m.fuzzy_match(Some(&a), Some(&b)), m.fuzzy_match(Some(&b), Some(&a)));
    }

    #[test]
    fn fuzzy_match_is_reflexive(a in text_strategy()) {
        prop_assert!(matcher().fuzzy_match(Some(&a), Some(&a)));
    }

    #[test]
    fn fuzzy_list_match_is_symmetric(a in text_strategy(), b in text_strategy()) {
        let m = matcher();
        prop_assert_eq!(m.fuzzy_list_match(Some(&a), Some(&b)), m.fuzzy_list_match(Some(&b), Some(&a)));
    }

    #[test]
    fn normalize_never_has_outer_or_double_spaces(a in text_strategy()) {
        let n = normalize(&a);
        prop_assert_eq!(n.trim(), n.as_str());
        prop_assert!(!n.contains("  "));
    }
}
