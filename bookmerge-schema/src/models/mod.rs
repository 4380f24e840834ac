//! One schema per model type.

macro_rules! optional {
    ($model:ty, $name:literal, $field:ident) => {
        $crate::attribute::Attribute::optional(
            $name,
            |m: &$model| &m.$field,
            |m: &mut $model| &mut m.$field,
        )
    };
}

macro_rules! collection {
    ($model:ty, $name:literal, $field:ident) => {
        $crate::attribute::Attribute::collection(
            $name,
            |m: &$model| &m.$field,
            |m: &mut $model| &mut m.$field,
        )
    };
}

mod author;
mod book;
mod narrator;
mod series;

pub use author::author_schema;
pub use book::book_schema;
pub use narrator::narrator_schema;
pub use series::series_schema;

use crate::value::AttrValue;
use bookmerge_text::normalize_names;

fn round_places(value: AttrValue, places: i32) -> AttrValue {
    match value {
        AttrValue::Float(v) => {
            let scale = 10f64.powi(places);
            AttrValue::Float((v * scale).round() / scale)
        }
        other => other,
    }
}

/// Rounds floats to two decimal places.
pub fn two_places(value: AttrValue) -> AttrValue {
    round_places(value, 2)
}

/// Rounds floats to four decimal places.
pub fn four_places(value: AttrValue) -> AttrValue {
    round_places(value, 4)
}

/// Rewrites a people list into its canonical `A, B` form. A list with no
/// usable name becomes blank.
pub fn people(value: AttrValue) -> AttrValue {
    match value {
        AttrValue::Text(text) => AttrValue::Text(normalize_names(&text).unwrap_or_default()),
        other => other,
    }
}
