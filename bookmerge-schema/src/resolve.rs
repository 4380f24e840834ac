//! Conflict resolvers.
//!
//! A resolver receives the canonical `before` and `after` values of one
//! attribute (blank values already dropped) and returns the value to keep.

use crate::value::AttrValue;
use bookmerge_rank::SourceRanker;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A custom per-attribute conflict resolver.
pub type Resolver = Arc<dyn Fn(Option<AttrValue>, Option<AttrValue>) -> Option<AttrValue> + Send + Sync>;

/// Wraps a plain function as a [`Resolver`].
pub fn resolver<F>(f: F) -> Resolver
where
    F: Fn(Option<AttrValue>, Option<AttrValue>) -> Option<AttrValue> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// The default rule: `after` wins when present. Collections are combined
/// instead: sets union, maps and records merge key-wise with `after`
/// winning per key.
pub fn combine(before: Option<AttrValue>, after: Option<AttrValue>) -> Option<AttrValue> {
    match (before, after) {
        (Some(AttrValue::TextSet(mut left)), Some(AttrValue::TextSet(right))) => {
            left.extend(right);
            Some(AttrValue::TextSet(left))
        }
        (Some(AttrValue::FloatMap(mut left)), Some(AttrValue::FloatMap(right))) => {
            left.extend(right);
            Some(AttrValue::FloatMap(left))
        }
        (Some(AttrValue::Record(left)), Some(AttrValue::Record(right))) => {
            Some(AttrValue::Record(combine_fields(left, right)))
        }
        (before, after) => after.or(before),
    }
}

fn combine_fields(
    mut left: BTreeMap<String, AttrValue>,
    right: BTreeMap<String, AttrValue>,
) -> BTreeMap<String, AttrValue> {
    for (key, value) in right {
        if value.is_blank() {
            continue;
        }
        let merged = combine(left.remove(&key).filter(|v| !v.is_blank()), Some(value));
        if let Some(merged) = merged {
            left.insert(key, merged);
        }
    }
    left
}

/// Keeps the earlier of two dates.
pub fn earlier(before: Option<AttrValue>, after: Option<AttrValue>) -> Option<AttrValue> {
    match (before, after) {
        (Some(AttrValue::Date(a)), Some(AttrValue::Date(b))) => Some(AttrValue::Date(a.min(b))),
        (before, after) => after.or(before),
    }
}

/// Keeps an existing value; `after` only fills a gap.
pub fn keep_first(before: Option<AttrValue>, after: Option<AttrValue>) -> Option<AttrValue> {
    before.or(after)
}

/// Keeps the longer text; ties go to `after`.
pub fn longer_text(before: Option<AttrValue>, after: Option<AttrValue>) -> Option<AttrValue> {
    match (before, after) {
        (Some(AttrValue::Text(a)), Some(AttrValue::Text(b))) => {
            if a.chars().count() > b.chars().count() {
                Some(AttrValue::Text(a))
            } else {
                Some(AttrValue::Text(b))
            }
        }
        (before, after) => after.or(before),
    }
}

/// Picks the URL from the better-ranked source, canonicalized.
pub fn ranked_url(ranker: &SourceRanker) -> Resolver {
    let ranker = ranker.clone();
    Arc::new(move |before: Option<AttrValue>, after: Option<AttrValue>| match (before, after) {
        (Some(AttrValue::Url(a)), Some(AttrValue::Url(b))) => {
            ranker.choose_url(Some(&a), Some(&b)).map(AttrValue::Url)
        }
        (Some(AttrValue::Url(a)), None) | (None, Some(AttrValue::Url(a))) => {
            Some(AttrValue::Url(ranker.fixup_url(&a)))
        }
        (before, after) => after.or(before),
    })
}
