//! Type-erased attribute values.
//!
//! Every attribute of every model reads and writes through [`AttrValue`], a
//! closed sum of the shapes models hold. [`AttrKind`] maps concrete field
//! types into and out of it; the declared [`AttrType`] of an attribute is
//! checked against the runtime variant before any write.

use bookmerge_types::{MainChar, YesNoUnknown};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Declared type of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttrType {
    Text,
    Integer,
    Float,
    Bool,
    Date,
    Url,
    Enum,
    TextSet,
    FloatMap,
    Record,
}

impl AttrType {
    /// Collections are combined on merge, never replaced.
    #[must_use]
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::TextSet | Self::FloatMap | Self::Record)
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Date => "date",
            Self::Url => "url",
            Self::Enum => "enum",
            Self::TextSet => "text_set",
            Self::FloatMap => "float_map",
            Self::Record => "record",
        }
    }
}

impl fmt::Display for AttrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A value read from or written to one attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Date(NaiveDate),
    Url(Url),
    /// Label of a closed enum, as produced by its `Display`.
    Enum(String),
    TextSet(BTreeSet<String>),
    /// Map keyed by enum label.
    FloatMap(BTreeMap<String, f64>),
    /// Field-name keyed nested composite.
    Record(BTreeMap<String, AttrValue>),
}

impl AttrValue {
    #[must_use]
    pub fn attr_type(&self) -> AttrType {
        match self {
            Self::Text(_) => AttrType::Text,
            Self::Integer(_) => AttrType::Integer,
            Self::Float(_) => AttrType::Float,
            Self::Bool(_) => AttrType::Bool,
            Self::Date(_) => AttrType::Date,
            Self::Url(_) => AttrType::Url,
            Self::Enum(_) => AttrType::Enum,
            Self::TextSet(_) => AttrType::TextSet,
            Self::FloatMap(_) => AttrType::FloatMap,
            Self::Record(_) => AttrType::Record,
        }
    }

    /// Blank text and empty collections carry no information and are
    /// treated like an absent value when merging.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(s) | Self::Enum(s) => s.trim().is_empty(),
            Self::TextSet(s) => s.is_empty(),
            Self::FloatMap(m) => m.is_empty(),
            Self::Record(r) => r.values().all(AttrValue::is_blank),
            _ => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) | Self::Enum(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Date(d) => write!(f, "{d}"),
            Self::Url(u) => f.write_str(u.as_str()),
            Self::TextSet(items) => {
                f.write_str(&items.iter().cloned().collect::<Vec<_>>().join(", "))
            }
            Self::FloatMap(map) => {
                let parts: Vec<String> = map.iter().map(|(k, v)| format!("{k}={v}")).collect();
                f.write_str(&parts.join(", "))
            }
            Self::Record(map) => {
                let parts: Vec<String> = map.iter().map(|(k, v)| format!("{k}={v}")).collect();
                write!(f, "{{{}}}", parts.join(", "))
            }
        }
    }
}

/// A concrete field type that can travel as an [`AttrValue`].
pub trait AttrKind: Sized {
    const TYPE: AttrType;

    fn into_value(self) -> AttrValue;

    /// Converts back, handing the value back unchanged when its variant or
    /// content does not fit.
    fn from_value(value: AttrValue) -> Result<Self, AttrValue>;
}

macro_rules! scalar_kind {
    ($ty:ty, $variant:ident) => {
        impl AttrKind for $ty {
            const TYPE: AttrType = AttrType::$variant;

            fn into_value(self) -> AttrValue {
                AttrValue::$variant(self)
            }

            fn from_value(value: AttrValue) -> Result<Self, AttrValue> {
                match value {
                    AttrValue::$variant(v) => Ok(v),
                    other => Err(other),
                }
            }
        }
    };
}

scalar_kind!(String, Text);
scalar_kind!(i64, Integer);
scalar_kind!(f64, Float);
scalar_kind!(bool, Bool);
scalar_kind!(NaiveDate, Date);
scalar_kind!(Url, Url);
scalar_kind!(BTreeSet<String>, TextSet);

impl AttrKind for YesNoUnknown {
    const TYPE: AttrType = AttrType::Enum;

    fn into_value(self) -> AttrValue {
        AttrValue::Enum(self.to_string())
    }

    fn from_value(value: AttrValue) -> Result<Self, AttrValue> {
        match &value {
            AttrValue::Enum(label) => label.parse().map_err(|_| value),
            _ => Err(value),
        }
    }
}

impl<K> AttrKind for BTreeMap<K, f64>
where
    K: Ord + fmt::Display + FromStr,
{
    const TYPE: AttrType = AttrType::FloatMap;

    fn into_value(self) -> AttrValue {
        AttrValue::FloatMap(self.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }

    fn from_value(value: AttrValue) -> Result<Self, AttrValue> {
        let AttrValue::FloatMap(map) = &value else {
            return Err(value);
        };
        let mut typed = BTreeMap::new();
        for (label, score) in map {
            match label.parse::<K>() {
                Ok(key) => {
                    typed.insert(key, *score);
                }
                Err(_) => return Err(value),
            }
        }
        Ok(typed)
    }
}

impl AttrKind for MainChar {
    const TYPE: AttrType = AttrType::Record;

    fn into_value(self) -> AttrValue {
        let fields = [
            ("age", self.age),
            ("attachment", self.attachment),
            ("gender", self.gender),
            ("name", self.name),
            ("profession", self.profession),
            ("pronouns", self.pronouns),
        ];
        AttrValue::Record(
            fields
                .into_iter()
                .filter_map(|(key, v)| v.map(|v| (key.to_string(), AttrValue::Text(v))))
                .collect(),
        )
    }

    fn from_value(value: AttrValue) -> Result<Self, AttrValue> {
        let AttrValue::Record(fields) = &value else {
            return Err(value);
        };
        let mut mc = MainChar::default();
        for (key, field) in fields {
            let Some(text) = field.as_text().map(str::to_string) else {
                return Err(value);
            };
            let slot = match key.as_str() {
                "age" => &mut mc.age,
                "attachment" => &mut mc.attachment,
                "gender" => &mut mc.gender,
                "name" => &mut mc.name,
                "profession" => &mut mc.profession,
                "pronouns" => &mut mc.pronouns,
                _ => return Err(value),
            };
            *slot = Some(text);
        }
        Ok(mc)
    }
}
