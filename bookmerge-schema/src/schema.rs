//! Whole-record merge over an ordered attribute table.

use crate::attribute::Attribute;
use crate::diff::{AttributeDiff, Diff};
use crate::error::{SchemaError, SchemaResult};
use crate::value::AttrValue;
use bookmerge_text::file_name_from_texts;
use bookmerge_types::Model;
use tracing::debug;

/// Identity values of a model: the human-meaningful fields used for
/// storage keys and log context.
pub type IdValues<M> = fn(&M) -> Vec<String>;

/// The ordered attribute table for one model type.
#[derive(Debug)]
pub struct Schema<M> {
    attributes: Vec<Attribute<M>>,
    factory: fn() -> M,
    id_values: IdValues<M>,
}

impl<M: Model> Schema<M> {
    pub fn new(attributes: Vec<Attribute<M>>, id_values: IdValues<M>) -> Self {
        Self {
            attributes,
            factory: M::default,
            id_values,
        }
    }

    pub fn attributes(&self) -> &[Attribute<M>] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> SchemaResult<&Attribute<M>> {
        self.attributes
            .iter()
            .find(|a| a.name() == name)
            .ok_or_else(|| SchemaError::UnknownAttribute {
                model: M::TYPE_NAME,
                attribute: name.to_string(),
            })
    }

    /// A new empty model of this type.
    pub fn empty(&self) -> M {
        (self.factory)()
    }

    pub fn get(&self, model: &M, name: &str) -> SchemaResult<Option<AttrValue>> {
        Ok(self.attribute(name)?.get(model))
    }

    pub fn set(&self, model: &mut M, name: &str, value: AttrValue) -> SchemaResult<()> {
        self.attribute(name)?.set(model, value)
    }

    /// Merges two optional models. An absent side yields the other
    /// unchanged.
    pub fn merge_models(&self, before: Option<&M>, after: Option<&M>) -> SchemaResult<Option<M>> {
        match (before, after) {
            (None, None) => Ok(None),
            (Some(only), None) | (None, Some(only)) => Ok(Some(only.clone())),
            (Some(before), Some(after)) => self.merge(before, after).map(Some),
        }
    }

    /// Builds a new model attribute by attribute, in declared order.
    ///
    /// Derived attributes are skipped. The inputs are never touched; on
    /// error nothing is returned.
    pub fn merge(&self, before: &M, after: &M) -> SchemaResult<M> {
        let mut merged = self.empty();
        for attribute in self.attributes.iter().filter(|a| a.is_writable()) {
            let left = attribute.read(before);
            let right = attribute.read(after);
            if left.is_some() && right.is_some() && left != right {
                debug!(
                    "Resolving {} of {} {:?}: {:?} vs {:?}",
                    attribute.name(),
                    M::TYPE_NAME,
                    self.id_values(after),
                    left,
                    right
                );
            }
            if let Some(chosen) = attribute.resolve(left, right) {
                attribute.set(&mut merged, chosen)?;
            }
        }
        Ok(merged)
    }

    /// Rewrites every value of `model` into its stored form.
    pub fn canonicalize(&self, model: &M) -> SchemaResult<M> {
        self.merge(&self.empty(), model)
    }

    /// Compares two models attribute by attribute.
    pub fn diff(&self, before: &M, after: &M) -> Diff {
        Diff::new(
            self.attributes
                .iter()
                .map(|a| AttributeDiff::new(a.name(), a.get(before), a.get(after)))
                .collect(),
        )
    }

    pub fn id_values(&self, model: &M) -> Vec<String> {
        (self.id_values)(model)
            .into_iter()
            .filter(|v| !v.trim().is_empty())
            .collect()
    }

    /// File-name-safe key built from the identity values, `None` when the
    /// model has none.
    pub fn storage_id(&self, model: &M) -> Option<String> {
        let id = file_name_from_texts(self.id_values(model));
        if id.is_empty() { None } else { Some(id) }
    }
}
