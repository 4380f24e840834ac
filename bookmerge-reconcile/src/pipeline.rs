//! The reconciliation state machine.
//!
//! For each incoming record: look it up in the store (exact storage id
//! first, then the fuzzy like-filter), merge it into the single match, and
//! write the result only when something changed. More than one fuzzy match
//! is reported as ambiguous and nothing is merged. A record with no identity
//! values cannot be keyed and is skipped; the rest of a batch carries on.

use crate::error::ReconcileResult;
use crate::identity::LikeFilter;
use crate::store::ModelStore;
use bookmerge_schema::{Diff, Schema};
use bookmerge_text::IdentityMatcher;
use bookmerge_types::Model;
use std::fmt;
use tracing::{debug, info, warn};

/// Where a lookup landed.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<M> {
    New,
    Found { id: String, model: M },
    Ambiguous { candidates: Vec<(String, M)> },
}

/// Terminal state of one reconciled record.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<M> {
    Created { id: String, model: M },
    Updated { id: String, model: M, diff: Diff },
    Unchanged { id: String, model: M },
    Ambiguous { record: M, candidates: Vec<(String, M)> },
    Unidentified { record: M },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    Created,
    Updated,
    Unchanged,
    Ambiguous,
    Unidentified,
}

impl OutcomeKind {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Created => "created-new",
            Self::Updated => "persisted-updated",
            Self::Unchanged => "persisted-unchanged",
            Self::Ambiguous => "ambiguous-skip",
            Self::Unidentified => "skipped-no-identity",
        }
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl<M> Outcome<M> {
    #[must_use]
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Self::Created { .. } => OutcomeKind::Created,
            Self::Updated { .. } => OutcomeKind::Updated,
            Self::Unchanged { .. } => OutcomeKind::Unchanged,
            Self::Ambiguous { .. } => OutcomeKind::Ambiguous,
            Self::Unidentified { .. } => OutcomeKind::Unidentified,
        }
    }

    /// The stored model, absent for skipped records.
    pub fn model(&self) -> Option<&M> {
        match self {
            Self::Created { model, .. } | Self::Updated { model, .. } | Self::Unchanged { model, .. } => {
                Some(model)
            }
            Self::Ambiguous { .. } | Self::Unidentified { .. } => None,
        }
    }

    /// Storage key, absent for skipped records.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Created { id, .. } | Self::Updated { id, .. } | Self::Unchanged { id, .. } => Some(id),
            Self::Ambiguous { .. } | Self::Unidentified { .. } => None,
        }
    }
}

impl<M: fmt::Display> fmt::Display for Outcome<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ambiguous { record, candidates } => {
                write!(f, "{}: {} matches {} stored records", self.kind(), record, candidates.len())
            }
            Self::Unidentified { record } => write!(f, "{}: {}", self.kind(), record),
            Self::Created { id, model } | Self::Updated { id, model, .. } | Self::Unchanged { id, model } => {
                write!(f, "{}: {} [{}]", self.kind(), model, id)
            }
        }
    }
}

/// Counts of each outcome over a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    pub created: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub ambiguous: usize,
    pub skipped: usize,
}

impl ReconcileSummary {
    pub fn record(&mut self, kind: OutcomeKind) {
        match kind {
            OutcomeKind::Created => self.created += 1,
            OutcomeKind::Updated => self.updated += 1,
            OutcomeKind::Unchanged => self.unchanged += 1,
            OutcomeKind::Ambiguous => self.ambiguous += 1,
            OutcomeKind::Unidentified => self.skipped += 1,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.created + self.updated + self.unchanged + self.ambiguous + self.skipped
    }
}

impl fmt::Display for ReconcileSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} created, {} updated, {} unchanged, {} ambiguous, {} skipped",
            self.created, self.updated, self.unchanged, self.ambiguous, self.skipped
        )
    }
}

/// Outcomes of a batch, in input order, with their tally.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation<M> {
    pub outcomes: Vec<Outcome<M>>,
    pub summary: ReconcileSummary,
}

/// Runs records of one model type through lookup, merge, and
/// persist-if-changed against a store.
pub struct Reconciler<'a, M, S> {
    schema: &'a Schema<M>,
    matcher: IdentityMatcher,
    store: S,
}

impl<'a, M, S> Reconciler<'a, M, S>
where
    M: Model + LikeFilter,
    S: ModelStore<M>,
{
    pub fn new(schema: &'a Schema<M>, matcher: IdentityMatcher, store: S) -> Self {
        Self {
            schema,
            matcher,
            store,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Finds the stored record `record` describes, if exactly one does.
    ///
    /// A record stored under the same storage id is only taken when it is
    /// also like `record`; distinct entities can share a key.
    pub fn lookup(&self, record: &M) -> ReconcileResult<Lookup<M>> {
        if let Some(id) = self.schema.storage_id(record) {
            if let Some(model) = self.store.find_by_id(&id)? {
                if record.is_like(&model, &self.matcher) {
                    debug!("Found {} by storage id {}", M::TYPE_NAME, id);
                    return Ok(Lookup::Found { id, model });
                }
                debug!("Storage id {} holds a different {}", id, M::TYPE_NAME);
            }
        }
        let mut candidates: Vec<(String, M)> = self
            .store
            .entries()?
            .into_iter()
            .filter(|(_, stored)| record.is_like(stored, &self.matcher))
            .collect();
        Ok(match candidates.len() {
            0 => Lookup::New,
            1 => {
                let (id, model) = candidates.remove(0);
                Lookup::Found { id, model }
            }
            _ => Lookup::Ambiguous { candidates },
        })
    }

    /// Reconciles one record.
    pub fn reconcile(&mut self, record: M) -> ReconcileResult<Outcome<M>> {
        match self.lookup(&record)? {
            Lookup::New => self.create(record),
            Lookup::Found { id, model } => self.update(id, model, &record),
            Lookup::Ambiguous { candidates } => {
                warn!(
                    "Ambiguous {} {:?}: {} stored records match ({}), skipping",
                    M::TYPE_NAME,
                    self.schema.id_values(&record),
                    candidates.len(),
                    candidates
                        .iter()
                        .map(|(id, _)| id.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
                Ok(Outcome::Ambiguous { record, candidates })
            }
        }
    }

    /// Reconciles records in order; a later record sees the effect of the
    /// earlier ones.
    pub fn reconcile_all<I>(&mut self, records: I) -> ReconcileResult<Reconciliation<M>>
    where
        I: IntoIterator<Item = M>,
    {
        let mut outcomes = Vec::new();
        let mut summary = ReconcileSummary::default();
        for record in records {
            let outcome = self.reconcile(record)?;
            summary.record(outcome.kind());
            outcomes.push(outcome);
        }
        info!("Reconciled {} {} records: {}", summary.total(), M::TYPE_NAME, summary);
        Ok(Reconciliation { outcomes, summary })
    }

    fn create(&mut self, record: M) -> ReconcileResult<Outcome<M>> {
        let model = self.schema.canonicalize(&record)?;
        let Some(base) = self.schema.storage_id(&model) else {
            warn!("Skipping {} with no identity values: {}", M::TYPE_NAME, record);
            return Ok(Outcome::Unidentified { record });
        };
        let id = self.free_id(base)?;
        self.store.save(&id, &model)?;
        info!("Created {} {}", M::TYPE_NAME, id);
        Ok(Outcome::Created { id, model })
    }

    /// `base`, or `base-2`, `base-3`... when another entity already holds it.
    fn free_id(&self, base: String) -> ReconcileResult<String> {
        if self.store.find_by_id(&base)?.is_none() {
            return Ok(base);
        }
        let mut n = 2;
        loop {
            let id = format!("{}-{}", base, n);
            if self.store.find_by_id(&id)?.is_none() {
                debug!("Storage id {} is taken, using {}", base, id);
                return Ok(id);
            }
            n += 1;
        }
    }

    fn update(&mut self, id: String, existing: M, record: &M) -> ReconcileResult<Outcome<M>> {
        let merged = self.schema.merge(&existing, record)?;
        let diff = self.schema.diff(&existing, &merged);
        if !diff.has_changed() {
            debug!("Unchanged {} {}", M::TYPE_NAME, id);
            return Ok(Outcome::Unchanged { id, model: merged });
        }
        self.store.save(&id, &merged)?;
        info!("Updated {} {}", M::TYPE_NAME, id);
        for line in diff.as_diff_lines() {
            debug!("  {}", line);
        }
        Ok(Outcome::Updated {
            id,
            model: merged,
            diff,
        })
    }
}
