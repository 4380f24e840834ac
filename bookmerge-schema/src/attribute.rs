//! Attribute descriptors.
//!
//! An [`Attribute`] is one named, typed field of a model: an accessor, an
//! optional mutator (absent for derived values), an optional conflict
//! resolver, and an optional canonicalization applied to every value read
//! for merging or written through the descriptor.

use crate::error::{SchemaError, SchemaResult};
use crate::resolve::{Resolver, combine};
use crate::value::{AttrKind, AttrType, AttrValue};
use bookmerge_types::Model;
use std::fmt;

type Getter<M> = Box<dyn Fn(&M) -> Option<AttrValue> + Send + Sync>;
type Setter<M> = Box<dyn Fn(&mut M, AttrValue) -> Result<(), AttrValue> + Send + Sync>;

/// Rewrites a value into its stored form. Must be idempotent.
pub type Canonicalizer = fn(AttrValue) -> AttrValue;

pub struct Attribute<M> {
    name: &'static str,
    attr_type: AttrType,
    getter: Getter<M>,
    setter: Option<Setter<M>>,
    resolver: Option<Resolver>,
    canonical: Option<Canonicalizer>,
}

impl<M: Model> Attribute<M> {
    /// An optional scalar field.
    pub fn optional<T>(
        name: &'static str,
        field: fn(&M) -> &Option<T>,
        field_mut: fn(&mut M) -> &mut Option<T>,
    ) -> Self
    where
        T: AttrKind + Clone + Send + Sync + 'static,
    {
        Self {
            name,
            attr_type: T::TYPE,
            getter: Box::new(move |m: &M| field(m).clone().map(T::into_value)),
            setter: Some(Box::new(move |m: &mut M, value: AttrValue| {
                *field_mut(m) = Some(T::from_value(value)?);
                Ok(())
            })),
            resolver: None,
            canonical: None,
        }
    }

    /// A collection or composite field whose empty state reads as absent.
    pub fn collection<T>(
        name: &'static str,
        field: fn(&M) -> &T,
        field_mut: fn(&mut M) -> &mut T,
    ) -> Self
    where
        T: AttrKind + Clone + Default + PartialEq + Send + Sync + 'static,
    {
        Self {
            name,
            attr_type: T::TYPE,
            getter: Box::new(move |m: &M| {
                let value = field(m);
                if *value == T::default() {
                    None
                } else {
                    Some(value.clone().into_value())
                }
            }),
            setter: Some(Box::new(move |m: &mut M, value: AttrValue| {
                *field_mut(m) = T::from_value(value)?;
                Ok(())
            })),
            resolver: None,
            canonical: None,
        }
    }

    /// A read-only value computed from other fields.
    pub fn derived<T>(name: &'static str, compute: fn(&M) -> Option<T>) -> Self
    where
        T: AttrKind + 'static,
    {
        Self {
            name,
            attr_type: T::TYPE,
            getter: Box::new(move |m: &M| compute(m).map(T::into_value)),
            setter: None,
            resolver: None,
            canonical: None,
        }
    }

    /// Replaces the default conflict resolver. Ignored for collection types,
    /// which are always combined.
    pub fn with_resolver(mut self, resolver: Resolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn with_canonical(mut self, canonical: Canonicalizer) -> Self {
        self.canonical = Some(canonical);
        self
    }
}

impl<M: Model> Attribute<M> {
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn attr_type(&self) -> AttrType {
        self.attr_type
    }

    #[must_use]
    pub fn is_writable(&self) -> bool {
        self.setter.is_some()
    }

    #[must_use]
    pub fn has_resolver(&self) -> bool {
        self.resolver.is_some()
    }

    /// Reads the raw value as stored on the model.
    pub fn get(&self, model: &M) -> Option<AttrValue> {
        (self.getter)(model)
    }

    /// Reads the value in canonical form, blank values as absent.
    pub fn read(&self, model: &M) -> Option<AttrValue> {
        self.get(model)
            .map(|v| self.canonicalize(v))
            .filter(|v| !v.is_blank())
    }

    fn canonicalize(&self, value: AttrValue) -> AttrValue {
        match self.canonical {
            Some(canonical) => canonical(value),
            None => value,
        }
    }

    /// Picks the value to keep when merging `before` with `after`.
    pub fn resolve(&self, before: Option<AttrValue>, after: Option<AttrValue>) -> Option<AttrValue> {
        match &self.resolver {
            Some(resolver) if !self.attr_type.is_collection() => resolver(before, after),
            _ => combine(before, after),
        }
    }

    /// Writes `value` after checking it against the declared type.
    pub fn set(&self, model: &mut M, value: AttrValue) -> SchemaResult<()> {
        let Some(setter) = &self.setter else {
            return Err(SchemaError::MissingMutator {
                model: M::TYPE_NAME,
                attribute: self.name,
            });
        };
        let found = value.attr_type();
        if found != self.attr_type {
            return Err(SchemaError::TypeMismatch {
                model: M::TYPE_NAME,
                attribute: self.name,
                expected: self.attr_type,
                found,
            });
        }
        setter(model, self.canonicalize(value)).map_err(|rejected| SchemaError::InvalidValue {
            model: M::TYPE_NAME,
            attribute: self.name,
            value: rejected.to_string(),
        })
    }
}

impl<M> fmt::Debug for Attribute<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attribute")
            .field("name", &self.name)
            .field("attr_type", &self.attr_type)
            .field("writable", &self.setter.is_some())
            .field("resolver", &self.resolver.is_some())
            .finish()
    }
}
