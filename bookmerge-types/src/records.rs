//! The reconciled entity records.
//!
//! Fields are optional because every source knows only part of an entity.
//! Collections default to empty and are omitted from JSON when empty.

use crate::enums::{BookRating, NarratorRating, YesNoUnknown};
use crate::model::{Importable, Model, set_if, set_if_absent};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use url::Url;

/// A book as known across storefronts, review sites, and the reading log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Book {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audiobook_store_sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audiobook_store_url: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_publish: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_purchase: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_read: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dnf: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feel_bad: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feel_good: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goodreads_url: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hea: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "MainChar::is_empty")]
    pub mc1: MainChar,
    #[serde(skip_serializing_if = "MainChar::is_empty")]
    pub mc2: MainChar,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrator_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pairing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pov: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher_name: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub ratings: BTreeMap<BookRating, f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_part: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storygraph_url: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synopsis: Option<String>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<String>,
}

impl Book {
    /// Shorthand for the two fields every producer can usually supply.
    pub fn titled(title: &str, author_name: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            author_name: Some(author_name.to_string()),
            ..Self::default()
        }
    }

    /// Publication year, when the publish date is known.
    pub fn publish_year(&self) -> Option<i32> {
        self.date_publish.map(|d| d.year())
    }

    /// Running time formatted as `H:MM`.
    pub fn duration_text(&self) -> Option<String> {
        let hours = self.duration_hours.filter(|h| *h > 0.0)?;
        let minutes = (hours * 60.0).round() as i64;
        Some(format!("{}:{:02}", minutes / 60, minutes % 60))
    }
}

impl Model for Book {
    const TYPE_NAME: &'static str = "book";
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.title.is_none() && self.author_name.is_none() {
            return f.write_str("<no book>");
        }
        let year = self
            .publish_year()
            .map(|y| format!("({y})"))
            .unwrap_or_else(|| "(?)".to_string());
        write!(
            f,
            "{} {} {}",
            self.author_name.as_deref().unwrap_or("<no author>"),
            year,
            self.title.as_deref().unwrap_or("<no title>")
        )
    }
}

/// One of a book's main characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MainChar {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronouns: Option<String>,
}

impl MainChar {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Importable for MainChar {
    fn import_from(&mut self, other: &Self) {
        set_if(&mut self.age, &other.age);
        set_if(&mut self.attachment, &other.attachment);
        set_if(&mut self.gender, &other.gender);
        set_if(&mut self.name, &other.name);
        set_if(&mut self.profession, &other.profession);
        set_if(&mut self.pronouns, &other.pronouns);
    }

    fn import_from_if_absent(&mut self, other: &Self) {
        set_if_absent(&mut self.age, &other.age);
        set_if_absent(&mut self.attachment, &other.attachment);
        set_if_absent(&mut self.gender, &other.gender);
        set_if_absent(&mut self.name, &other.name);
        set_if_absent(&mut self.profession, &other.profession);
        set_if_absent(&mut self.pronouns, &other.pronouns);
    }
}

impl fmt::Display for MainChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name.as_deref().unwrap_or("<no name>"))?;
        if let Some(pronouns) = &self.pronouns {
            write!(f, " ({pronouns})")?;
        }
        for part in [&self.age, &self.gender, &self.attachment, &self.profession]
            .into_iter()
            .flatten()
        {
            write!(f, " {part}")?;
        }
        Ok(())
    }
}

/// An author, with reading-log aggregates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Author {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audiobook_store_url: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dnf_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub five_star_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub four_star_plus_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goodreads_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goodreads_url: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mastodon_handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_duration_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_pages: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub odds4: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owned_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pic_url: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronouns: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queer: Option<YesNoUnknown>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rated_count: Option<i64>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub ratings: BTreeMap<BookRating, f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rep: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_url: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_graph_url: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_url: Option<Url>,
}

impl Author {
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }
}

impl Model for Author {
    const TYPE_NAME: &'static str = "author";
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name.as_deref().unwrap_or("<no name>"))?;
        if let Some(pronouns) = &self.pronouns {
            write!(f, " ({pronouns})")?;
        }
        if self.audiobook_store_url.is_some() {
            f.write_str(" TABS")?;
        }
        if self.story_graph_url.is_some() {
            f.write_str(" SG")?;
        }
        if self.goodreads_url.is_some() {
            f.write_str(" GR")?;
        }
        Ok(())
    }
}

/// An audiobook narrator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Narrator {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goodreads_url: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub negatives: BTreeSet<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owned_count: Option<i64>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub ratings: BTreeMap<NarratorRating, f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_url: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_duration_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_url: Option<Url>,
}

impl Narrator {
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    /// Pages narrated per hour of audio; derived, never stored.
    pub fn mean_pages_per_hour(&self) -> Option<f64> {
        match (self.total_pages, self.total_duration_hours) {
            (Some(pages), Some(hours)) if pages > 0 && hours > 0.0 => Some(pages as f64 / hours),
            _ => None,
        }
    }
}

impl Model for Narrator {
    const TYPE_NAME: &'static str = "narrator";
}

impl fmt::Display for Narrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name.as_deref().unwrap_or("<no name>"))
    }
}

/// A book series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Series {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goodreads_url: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owned_count: Option<i64>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub ratings: BTreeMap<BookRating, f64>,
}

impl Series {
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }
}

impl Model for Series {
    const TYPE_NAME: &'static str = "series";
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name.as_deref().unwrap_or("<no series>"))
    }
}
