//! Per-type "same real-world entity" predicates.

use bookmerge_text::IdentityMatcher;
use bookmerge_types::{Author, Book, Model, Narrator, Series};

/// Books whose title matches and which share at least one author.
pub fn book_like_filter<'a>(like: &'a Book, matcher: &'a IdentityMatcher) -> impl Fn(&Book) -> bool + 'a {
    move |book: &Book| {
        matcher.fuzzy_match(book.title.as_deref(), like.title.as_deref())
            && matcher.fuzzy_list_match(book.author_name.as_deref(), like.author_name.as_deref())
    }
}

/// Books written (at least in part) by `author`.
pub fn book_with_author_like_filter<'a>(
    author: &'a Author,
    matcher: &'a IdentityMatcher,
) -> impl Fn(&Book) -> bool + 'a {
    move |book: &Book| matcher.fuzzy_list_match(book.author_name.as_deref(), author.name.as_deref())
}

pub fn author_like_filter<'a>(like: &'a Author, matcher: &'a IdentityMatcher) -> impl Fn(&Author) -> bool + 'a {
    move |author: &Author| matcher.fuzzy_match(author.name.as_deref(), like.name.as_deref())
}

pub fn narrator_like_filter<'a>(
    like: &'a Narrator,
    matcher: &'a IdentityMatcher,
) -> impl Fn(&Narrator) -> bool + 'a {
    move |narrator: &Narrator| matcher.fuzzy_match(narrator.name.as_deref(), like.name.as_deref())
}

pub fn series_like_filter<'a>(like: &'a Series, matcher: &'a IdentityMatcher) -> impl Fn(&Series) -> bool + 'a {
    move |series: &Series| matcher.fuzzy_match(series.name.as_deref(), like.name.as_deref())
}

/// Model types that can be looked up by fuzzy identity.
pub trait LikeFilter: Model {
    /// True when `candidate` appears to describe the same entity as `self`.
    fn is_like(&self, candidate: &Self, matcher: &IdentityMatcher) -> bool;
}

impl LikeFilter for Book {
    fn is_like(&self, candidate: &Self, matcher: &IdentityMatcher) -> bool {
        book_like_filter(self, matcher)(candidate)
    }
}

impl LikeFilter for Author {
    fn is_like(&self, candidate: &Self, matcher: &IdentityMatcher) -> bool {
        author_like_filter(self, matcher)(candidate)
    }
}

impl LikeFilter for Narrator {
    fn is_like(&self, candidate: &Self, matcher: &IdentityMatcher) -> bool {
        narrator_like_filter(self, matcher)(candidate)
    }
}

impl LikeFilter for Series {
    fn is_like(&self, candidate: &Self, matcher: &IdentityMatcher) -> bool {
        series_like_filter(self, matcher)(candidate)
    }
}
